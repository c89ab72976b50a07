//! Store error types.

use thiserror::Error;

/// Errors raised by customer, product and order stores.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// The backing store could not serve the request.
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// The write conflicted with existing data.
    #[error("Conflict: {0}")]
    Conflict(String),
}
