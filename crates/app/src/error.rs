//! Runner error types.

use domain::OrderError;
use thiserror::Error;

/// Errors surfaced by the runner.
#[derive(Debug, Error)]
pub enum AppError {
    /// The order request could not be read.
    #[error("Failed to read request: {0}")]
    Io(#[from] std::io::Error),

    /// The request or response could not be (de)serialized.
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The order was rejected.
    #[error("{0}")]
    Order(#[from] OrderError),
}

impl AppError {
    /// Process exit code for this error.
    ///
    /// Rejected orders exit with 1, malformed input with 2, store failures with 3.
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Order(OrderError::Repository(_)) => 3,
            AppError::Order(_) => 1,
            AppError::Io(_) | AppError::Json(_) => 2,
        }
    }
}
