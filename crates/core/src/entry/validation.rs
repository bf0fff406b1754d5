//! Business rule validation for entry inputs.

use fluxo_shared::types::Amount;

use super::error::EntryError;
use super::types::{EntryUpdate, NewEntry};
use crate::category::normalize_name;

/// An entry input that passed validation, ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidEntry {
    /// Trimmed description.
    pub description: String,
    /// Normalized category name.
    pub category: String,
    /// Validated amount.
    pub amount: Amount,
    /// Notes, `None` when blank.
    pub notes: Option<String>,
}

/// Validates and normalizes a new entry.
///
/// # Errors
///
/// Returns an error if the description or category is blank, or the amount
/// is negative or has more than two decimal places.
pub fn validate_new_entry(input: &NewEntry) -> Result<ValidEntry, EntryError> {
    Ok(ValidEntry {
        description: clean_description(&input.description)?,
        category: clean_category(&input.category)?,
        amount: Amount::new(input.amount)?,
        notes: clean_notes(input.notes.as_deref()),
    })
}

/// Validates and normalizes the fields present in an update.
///
/// # Errors
///
/// Returns the same errors as [`validate_new_entry`] for each present field.
pub fn validate_update(update: EntryUpdate) -> Result<EntryUpdate, EntryError> {
    Ok(EntryUpdate {
        description: update
            .description
            .as_deref()
            .map(clean_description)
            .transpose()?,
        category: update.category.as_deref().map(clean_category).transpose()?,
        amount: update
            .amount
            .map(|a| Amount::new(a).map(Amount::value))
            .transpose()?,
        date: update.date,
        status: update.status,
        notes: update.notes.map(|n| clean_notes(n.as_deref())),
    })
}

fn clean_description(raw: &str) -> Result<String, EntryError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(EntryError::EmptyDescription);
    }
    Ok(trimmed.to_string())
}

fn clean_category(raw: &str) -> Result<String, EntryError> {
    normalize_name(raw).ok_or(EntryError::EmptyCategory)
}

fn clean_notes(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|n| !n.is_empty())
        .map(ToString::to_string)
}
