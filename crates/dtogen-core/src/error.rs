use thiserror::Error;

/// Core error type shared across dtogen crates.
#[derive(Debug, Error)]
pub enum Error {
    /// The data model violates internal invariants.
    #[error("invalid schema: {0}")]
    InvalidSchema(String),
    /// The input document does not match the data-model contract.
    #[error("invalid document: {0}")]
    InvalidDocument(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    /// Catch-all error for unexpected failures.
    #[error("other error: {0}")]
    Other(String),
}

/// Convenience alias for results returned by dtogen crates.
pub type Result<T> = std::result::Result<T, Error>;
