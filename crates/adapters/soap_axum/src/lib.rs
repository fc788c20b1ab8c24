//! # svcorder-adapter-soap-axum
//!
//! SOAP-style XML adapter for the service order API.
//!
//! ## Responsibilities
//! - Parse request documents into an element tree ([`xml`])
//! - Unwrap SOAP 1.1/1.2 envelopes ([`envelope`])
//! - Map payloads to domain records ([`request`]) and outcomes to
//!   `Response` elements ([`response`])
//! - Serve the endpoint over axum ([`endpoint`], [`router`])
//!
//! ## Dependency rule
//! Depends on `svcorder_domain` and `svcorder_app`. Never imported by them.

pub mod endpoint;
pub mod envelope;
pub mod error;
pub mod request;
pub mod response;
pub mod router;
pub mod state;
pub mod xml;
