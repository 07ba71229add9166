//! # Application State
//!
//! State shared by every command handler.
//!
//! ```text
//! state/
//! ├── mod.rs     ◄─── AppState (exports)
//! ├── db.rs      ◄─── DbState: database handle
//! └── config.rs  ◄─── AdminConfig: environment configuration
//! ```
//!
//! Commands take only the piece of state they need (`&DbState`), so they
//! can be exercised in tests without loading configuration.

pub mod config;
pub mod db;

pub use config::{AdminConfig, ConfigError};
pub use db::DbState;

/// Everything the IPC host hands to commands.
#[derive(Debug)]
pub struct AppState {
    pub db: DbState,
    pub config: AdminConfig,
}

impl AppState {
    pub fn new(db: DbState, config: AdminConfig) -> Self {
        AppState { db, config }
    }
}
