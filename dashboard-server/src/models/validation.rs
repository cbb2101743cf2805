//! Validation error types

use std::fmt;

/// A request body that could not be turned into an input model
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Body is not syntactically valid JSON
    Syntax { reason: String },

    /// Body is valid JSON but does not match the expected shape
    Shape { reason: String },

    /// Request is missing `Content-Type: application/json`
    MissingContentType,

    /// Body bytes could not be read
    Unreadable { reason: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Syntax { reason } => write!(f, "invalid json: {}", reason),
            Self::Shape { reason } => write!(f, "invalid json data: {}", reason),
            Self::MissingContentType => {
                write!(f, "expected request with content-type application/json")
            }
            Self::Unreadable { reason } => write!(f, "failed to read request body: {}", reason),
        }
    }
}

impl std::error::Error for ValidationError {}
