//! Application error types.

use thiserror::Error;

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] anyhow::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Lookup error: {0}")]
    Lookup(#[from] cvm_lookup::LookupError),
}

/// Result type alias for application errors.
pub type AppResult<T> = Result<T, AppError>;
