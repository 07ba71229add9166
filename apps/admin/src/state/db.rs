//! # Database State
//!
//! Wraps the `Database` connection for use in commands.
//!
//! ## Thread Safety
//! The `Database` struct from `forge-db` contains a `SqlitePool` which
//! is inherently thread-safe. Multiple commands can execute queries
//! concurrently without explicit locking.
//!
//! ## Usage in Commands
//! ```rust,ignore
//! pub async fn get_customer(db: &DbState, id: String) -> Result<Customer, ApiError> {
//!     db.inner().customers().get_by_id(&id).await?
//!         .ok_or_else(|| ApiError::not_found("Customer", &id))
//! }
//! ```

use forge_db::Database;

/// Wrapper around `Database` handed to command handlers.
#[derive(Debug)]
pub struct DbState {
    db: Database,
}

impl DbState {
    /// Creates a new DbState wrapping the database connection.
    pub fn new(db: Database) -> Self {
        DbState { db }
    }

    /// Returns a reference to the inner Database.
    pub fn inner(&self) -> &Database {
        &self.db
    }
}
