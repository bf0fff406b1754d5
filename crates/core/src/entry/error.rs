//! Entry error types.

use fluxo_shared::{
    AppError,
    types::{AmountError, EntryId, UserId},
};
use thiserror::Error;

/// Errors that can occur while creating, updating or loading entries.
#[derive(Debug, Error)]
pub enum EntryError {
    /// Entry not found.
    #[error("Entry not found: {0}")]
    NotFound(EntryId),

    /// Owner not found.
    #[error("Owner not found: {0}")]
    OwnerNotFound(UserId),

    /// Description is blank.
    #[error("Description cannot be empty")]
    EmptyDescription,

    /// Category is blank.
    #[error("Category cannot be empty")]
    EmptyCategory,

    /// Amount is negative or too precise.
    #[error("Invalid amount: {0}")]
    InvalidAmount(#[from] AmountError),

    /// Unknown status code.
    #[error("Invalid status '{0}', expected paid, pending or cancelled")]
    InvalidStatus(String),

    /// Unknown kind code.
    #[error("Invalid entry kind '{0}', expected income or expense")]
    InvalidKind(String),
}

impl From<EntryError> for AppError {
    fn from(err: EntryError) -> Self {
        match err {
            EntryError::NotFound(_) | EntryError::OwnerNotFound(_) => {
                Self::NotFound(err.to_string())
            }
            EntryError::EmptyDescription
            | EntryError::EmptyCategory
            | EntryError::InvalidAmount(_)
            | EntryError::InvalidStatus(_)
            | EntryError::InvalidKind(_) => Self::Validation(err.to_string()),
        }
    }
}
