//! Report error types.

use fluxo_shared::{AppError, types::UserId};
use thiserror::Error;

/// Boxed error raised by an entry store.
pub type StoreError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur during report generation.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Owner not found.
    #[error("Owner not found: {0}")]
    OwnerNotFound(UserId),

    /// The evolution window falls outside the supported calendar.
    #[error("Evolution window out of range")]
    WindowOutOfRange,

    /// The entry store failed.
    #[error("Entry store error: {0}")]
    Store(#[source] StoreError),
}

impl ReportError {
    /// Wraps a store failure.
    pub fn store(err: impl Into<StoreError>) -> Self {
        Self::Store(err.into())
    }
}

impl From<ReportError> for AppError {
    fn from(err: ReportError) -> Self {
        match err {
            ReportError::OwnerNotFound(_) => Self::NotFound(err.to_string()),
            ReportError::WindowOutOfRange => Self::InvalidRange(err.to_string()),
            ReportError::Store(_) => Self::Database(err.to_string()),
        }
    }
}
