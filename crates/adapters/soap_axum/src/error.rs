//! Mapping of failures to coded error responses.

use svcorder_domain::error::SvcOrderError;

use crate::xml::XmlError;

/// `ErrorCode` values carried by error responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    BadRequest,
    NotFound,
    Internal,
}

impl ErrorCode {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::BadRequest => "400",
            Self::NotFound => "404",
            Self::Internal => "500",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Any failure while handling a SOAP request.
#[derive(Debug, thiserror::Error)]
pub enum SoapError {
    #[error(transparent)]
    Domain(#[from] SvcOrderError),

    #[error("Malformed request: {0}")]
    Xml(#[from] XmlError),

    #[error("SOAP Body is missing")]
    MissingBody,

    #[error("SOAP Body carries no operation")]
    EmptyBody,

    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),
}

impl SoapError {
    #[must_use]
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Domain(SvcOrderError::NotFound(_)) => ErrorCode::NotFound,
            Self::Domain(SvcOrderError::Storage(_)) => ErrorCode::Internal,
            Self::Domain(SvcOrderError::Validation(_) | SvcOrderError::Conflict(_))
            | Self::Xml(_)
            | Self::MissingBody
            | Self::EmptyBody
            | Self::UnsupportedOperation(_) => ErrorCode::BadRequest,
        }
    }

    /// Text for the `ErrorMessage` element.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Domain(err @ SvcOrderError::Storage(_)) => {
                format!("Internal server error: {err}")
            }
            other => other.to_string(),
        }
    }
}
