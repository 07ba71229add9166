//! # Repository Module
//!
//! Database repository implementations for Forge Admin.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  forge-admin command                                                   │
//! │       │                                                                 │
//! │       │  db.customers().update(&customer)                              │
//! │       ▼                                                                 │
//! │  CustomerRepository                                                    │
//! │  ├── list(&self)                                                       │
//! │  ├── get_by_id(&self, id)                                              │
//! │  ├── insert(&self, customer)                                           │
//! │  ├── update(&self, customer)     (full-record replacement)             │
//! │  └── delete(&self, id)                                                 │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Repositories store records exactly as given. Drafts are validated and
//! normalized in forge-core before they get here.
//!
//! ## Available Repositories
//!
//! - [`CustomerRepository`](customer::CustomerRepository) - Customer CRUD
//! - [`MaterialRepository`](material::MaterialRepository) - Raw-material CRUD

use uuid::Uuid;

pub mod customer;
pub mod material;

/// Generates a new record id (UUID v4).
///
/// The system of record assigns ids; forms never supply them.
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}
