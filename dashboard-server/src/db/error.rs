use std::time::Duration;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    #[error("failed to decode stored document: {0}")]
    Decode(String),

    #[error("operation timed out after {0:?}")]
    Timeout(Duration),

    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("invalid database configuration: {0}")]
    Config(String),

    #[error("not found: {resource}")]
    NotFound { resource: &'static str },
}
