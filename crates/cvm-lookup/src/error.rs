//! Lookup errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("Empty input payload")]
    EmptyInput,

    #[error("JSON error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("No active CVM named {0:?}")]
    NoMatch(String),
}
