//! Harness error taxonomy.

use thiserror::Error;

/// Errors produced by fixture handling and case execution.
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown function: {0}")]
    UnknownFunction(String),
    #[error("input field '{field}' is missing or malformed")]
    BadInput { field: String },
}

impl HarnessError {
    pub(crate) fn bad_input(field: &str) -> Self {
        Self::BadInput {
            field: field.to_string(),
        }
    }
}
