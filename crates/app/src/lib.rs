//! # svcorder-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `ServiceOrderRepository`: keyed CRUD for service orders
//! - Define **driving/inbound ports** as use-case structs:
//!   - `ServiceOrderService`: create, get, list, update, delete
//! - Provide **in-process infrastructure** that doesn't need IO
//!   (the in-memory record store)
//! - Orchestrate validation and transformation without knowing how
//!   requests arrive or how orders are stored
//!
//! ## Dependency rule
//! Depends on `svcorder-domain` only (plus `tokio::sync` for locking).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod record_store;
pub mod services;
