//! Category error types.

use fluxo_shared::{
    AppError,
    types::{CategoryId, UserId},
};
use thiserror::Error;

use super::taxonomy::DreSubgroup;
use crate::entry::EntryKind;

/// Errors that can occur while managing categories.
#[derive(Debug, Error)]
pub enum CategoryError {
    /// Name is blank after normalization.
    #[error("Category name cannot be empty")]
    EmptyName,

    /// A category with the same owner, kind and name exists.
    #[error("Category '{name}' already exists for {kind}")]
    Duplicate {
        /// Category kind.
        kind: EntryKind,
        /// Normalized name.
        name: String,
    },

    /// Category not found.
    #[error("Category not found: {0}")]
    NotFound(CategoryId),

    /// Owner not found.
    #[error("Owner not found: {0}")]
    OwnerNotFound(UserId),

    /// Explicit subgroup does not fit the category kind.
    #[error("Subgroup {subgroup} cannot be used for {kind} categories")]
    IncompatibleSubgroup {
        /// Requested subgroup.
        subgroup: DreSubgroup,
        /// Category kind.
        kind: EntryKind,
    },

    /// Unknown taxonomy code.
    #[error("Unknown DRE tag: {0}")]
    UnknownTag(String),
}

impl From<CategoryError> for AppError {
    fn from(err: CategoryError) -> Self {
        match err {
            CategoryError::NotFound(_) | CategoryError::OwnerNotFound(_) => {
                Self::NotFound(err.to_string())
            }
            CategoryError::Duplicate { .. } => Self::Conflict(err.to_string()),
            CategoryError::EmptyName
            | CategoryError::IncompatibleSubgroup { .. }
            | CategoryError::UnknownTag(_) => Self::Validation(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maps_to_app_error() {
        let dup = CategoryError::Duplicate {
            kind: EntryKind::Expense,
            name: "Frete".to_string(),
        };
        assert_eq!(AppError::from(dup).error_code(), "CONFLICT");
        assert_eq!(
            AppError::from(CategoryError::NotFound(CategoryId::new(9))).error_code(),
            "NOT_FOUND"
        );
        assert_eq!(
            AppError::from(CategoryError::EmptyName).error_code(),
            "VALIDATION_ERROR"
        );
    }
}
