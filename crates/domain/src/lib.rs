//! # svcorder-domain
//!
//! Pure domain model for telecom service order management.
//!
//! ## Responsibilities
//! - Define **service records** (subscription, plan details, customer details)
//! - Define the **business rules**: VIP customer, special offer, roaming
//!   removal, contact number format
//! - **Validate** incoming records (mandatory fields, formats)
//! - **Transform** validated records into enriched, storable orders
//! - Error conventions shared by every layer
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or IO crates.
//! Storage is expressed as a trait in the `app` crate (port).

pub mod error;

pub mod order;
pub mod record;
pub mod rules;
pub mod transform;
pub mod validation;
