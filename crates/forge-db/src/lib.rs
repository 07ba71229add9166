//! # forge-db: System of Record for Forge Admin
//!
//! This crate stores customers and raw materials in SQLite and hands them back
//! as `forge-core` records. It uses sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Forge Admin Data Flow                            │
//! │                                                                         │
//! │  forge-admin command (create_customer)                                 │
//! │       │  draft already validated by forge-core                         │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     forge-db (THIS CRATE)                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌──────────────────┐  ┌──────────────┐  │   │
//! │  │   │   Database    │    │   Repositories   │  │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │ customer.rs      │  │  (embedded)  │  │   │
//! │  │   │               │◄───│ material.rs      │  │ 001_...sql   │  │   │
//! │  │   │ SqlitePool    │    │                  │  │ 002_...sql   │  │   │
//! │  │   └───────────────┘    └──────────────────┘  └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     SQLite Database (forge.db)                  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Customer and material repositories
//! - [`seed`] - Demo data for development databases
//!
//! ## Usage
//!
//! ```rust,ignore
//! use forge_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("path/to/forge.db")).await?;
//!
//! let customers = db.customers().list().await?;
//! let steel = db.materials().get_by_material_id("RM-STEEL01").await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;
pub mod seed;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::customer::CustomerRepository;
pub use repository::material::MaterialRepository;
pub use repository::generate_id;
