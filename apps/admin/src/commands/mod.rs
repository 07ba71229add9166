//! # Commands Module
//!
//! All commands the admin UI can invoke.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (exports)
//! ├── customer.rs  ◄─── Customer list, validate, CRUD
//! ├── material.rs  ◄─── Raw-material list, validate, CRUD
//! └── system.rs    ◄─── Health
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Admin UI                                                               │
//! │  ────────                                                               │
//! │  {"id":7,"cmd":"list_materials","args":{"lowStockOnly":true}}           │
//! │         │                                                               │
//! │         │ (JSON line on stdin)                                          │
//! │         ▼                                                               │
//! │  ipc::dispatch ─► commands::material::list_materials(                   │
//! │                       db: &DbState,         ◄── from AppState           │
//! │                       filter: MaterialFilter ◄── from args              │
//! │                   ) -> Result<Vec<Material>, ApiError>                  │
//! │         │                                                               │
//! │         │ (JSON line on stdout)                                         │
//! │         ▼                                                               │
//! │  {"id":7,"ok":true,"data":[...]}                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each command takes only the state it needs, so tests call them directly
//! against an in-memory database.

pub mod customer;
pub mod material;
pub mod system;
