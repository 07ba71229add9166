//! # forge-core: Pure Record Rules for Forge Admin
//!
//! This crate holds everything Forge Admin knows about its two record types,
//! customers and raw materials, as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Forge Admin Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Admin UI (browser)                           │   │
//! │  │    Customer list ──► Customer form    Material list ──► form    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ JSON-lines IPC                         │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    forge-admin commands                         │   │
//! │  │    create_customer, update_material, list_materials, ...        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ forge-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌────────────┐  ┌───────────┐                  │   │
//! │  │   │   types   │  │ validation │  │  search   │                  │   │
//! │  │   │ Customer  │  │ GST / PAN  │  │  filters  │                  │   │
//! │  │   │ Material  │  │ FieldErrors│  │           │                  │   │
//! │  │   └───────────┘  └────────────┘  └───────────┘                  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    forge-db (system of record)                  │   │
//! │  │              SQLite queries, migrations, repositories           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Records and drafts (Customer, Material, CreditTerms, ...)
//! - [`validation`] - Format validators and record validators
//! - [`search`] - Client-side list filtering
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use forge_core::types::{MaterialDraft, NumberInput};
//! use forge_core::validation::{validate_material, FormMode};
//!
//! let draft = MaterialDraft {
//!     material_id: "RM-STEEL01".to_string(),
//!     name: "Mild steel sheet".to_string(),
//!     current_stock: Some(NumberInput::from(40)),
//!     min_stock_level: Some(NumberInput::from("10")),
//!     ..MaterialDraft::default()
//! };
//!
//! assert!(validate_material(&draft, FormMode::Create).is_empty());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod search;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use types::*;
pub use validation::{FieldErrors, FormMode};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Upper bound (inclusive) for a customer's credit days.
pub const MAX_CREDIT_DAYS: i64 = 90;

/// Minimum length of a customer's postal address, in characters.
pub const MIN_ADDRESS_LEN: usize = 10;
