//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`SvcOrderError`] via `#[from]`.

use crate::rules;

/// Top-level error for every service order use-case.
#[derive(Debug, thiserror::Error)]
pub enum SvcOrderError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Conflict(#[from] ConflictError),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// Any failure not covered by the other variants.
    #[error("{0}")]
    Storage(Box<dyn std::error::Error + Send + Sync>),
}

/// A request field is missing, blank or malformed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A mandatory text field is absent or blank.
    #[error("{0} is mandatory and cannot be null or empty")]
    MissingField(&'static str),

    /// A mandatory structure or flag is absent.
    #[error("{0} is mandatory and cannot be null")]
    MissingValue(&'static str),

    /// An identifier needed to address a record was not supplied.
    #[error("{0} is required")]
    Required(&'static str),

    #[error("Invalid contact number format")]
    InvalidContactNumber,

    /// A transformation rule flagged the record with an error code.
    #[error("{}", rules::error_message(.0))]
    Rule(String),
}

/// A record with the same service id already exists.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("ServiceId {service_id} already exists")]
pub struct ConflictError {
    pub service_id: String,
}

/// No record exists for the requested service id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("ServiceId {service_id} not found")]
pub struct NotFoundError {
    pub service_id: String,
}

impl ConflictError {
    #[must_use]
    pub fn new(service_id: impl Into<String>) -> Self {
        Self {
            service_id: service_id.into(),
        }
    }
}

impl NotFoundError {
    #[must_use]
    pub fn new(service_id: impl Into<String>) -> Self {
        Self {
            service_id: service_id.into(),
        }
    }
}
