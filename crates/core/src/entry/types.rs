//! Entry data types.

use chrono::NaiveDate;
use fluxo_shared::types::{Amount, EntryId, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::EntryError;

/// Whether an entry is an income or an expense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Money coming in (receita).
    Income,
    /// Money going out (despesa).
    Expense,
}

impl EntryKind {
    /// Returns the storage code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EntryKind {
    type Err = EntryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" | "receita" => Ok(Self::Income),
            "expense" | "despesa" => Ok(Self::Expense),
            _ => Err(EntryError::InvalidKind(s.to_string())),
        }
    }
}

/// Settlement status of an entry. Only `Paid` entries reach the DRE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryStatus {
    /// Settled.
    Paid,
    /// Not yet settled.
    Pending,
    /// Will never be settled.
    Cancelled,
}

impl EntryStatus {
    /// Returns the storage code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Paid => "paid",
            Self::Pending => "pending",
            Self::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for EntryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EntryStatus {
    type Err = EntryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "paid" | "pago" => Ok(Self::Paid),
            "pending" | "pendente" => Ok(Self::Pending),
            "cancelled" | "canceled" | "cancelado" => Ok(Self::Cancelled),
            _ => Err(EntryError::InvalidStatus(s.to_string())),
        }
    }
}

/// A stored income or expense.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialEntry {
    /// Entry ID.
    pub id: EntryId,
    /// Owner of the entry.
    pub owner_id: UserId,
    /// Income or expense.
    pub kind: EntryKind,
    /// Free-text description.
    pub description: String,
    /// Category name, normalized like category names.
    pub category: String,
    /// Non-negative amount.
    pub amount: Amount,
    /// Calendar date of the entry.
    pub date: NaiveDate,
    /// Settlement status.
    pub status: EntryStatus,
    /// Optional notes.
    pub notes: Option<String>,
}

/// Input for creating an entry.
#[derive(Debug, Clone)]
pub struct NewEntry {
    /// Owner of the entry.
    pub owner_id: UserId,
    /// Income or expense.
    pub kind: EntryKind,
    /// Description (trimmed, must not be empty).
    pub description: String,
    /// Category name (normalized, must not be empty).
    pub category: String,
    /// Raw amount, validated into `Amount`.
    pub amount: Decimal,
    /// Calendar date.
    pub date: NaiveDate,
    /// Settlement status.
    pub status: EntryStatus,
    /// Optional notes; blank notes are dropped.
    pub notes: Option<String>,
}

/// Input for updating an entry. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default)]
pub struct EntryUpdate {
    /// New description.
    pub description: Option<String>,
    /// New category name.
    pub category: Option<String>,
    /// New amount.
    pub amount: Option<Decimal>,
    /// New date.
    pub date: Option<NaiveDate>,
    /// New status.
    pub status: Option<EntryStatus>,
    /// New notes (`Some(None)` clears them).
    pub notes: Option<Option<String>>,
}

impl EntryUpdate {
    /// Returns true if the update changes nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.description.is_none()
            && self.category.is_none()
            && self.amount.is_none()
            && self.date.is_none()
            && self.status.is_none()
            && self.notes.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("paid", EntryStatus::Paid)]
    #[case(" PAGO ", EntryStatus::Paid)]
    #[case("pending", EntryStatus::Pending)]
    #[case("Pendente", EntryStatus::Pending)]
    #[case("cancelled", EntryStatus::Cancelled)]
    #[case("canceled", EntryStatus::Cancelled)]
    #[case("cancelado", EntryStatus::Cancelled)]
    fn test_status_from_str(#[case] raw: &str, #[case] expected: EntryStatus) {
        assert_eq!(raw.parse::<EntryStatus>().unwrap(), expected);
    }

    #[test]
    fn test_status_rejects_unknown() {
        assert!(matches!(
            "refunded".parse::<EntryStatus>(),
            Err(EntryError::InvalidStatus(_))
        ));
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!("receita".parse::<EntryKind>().unwrap(), EntryKind::Income);
        assert_eq!("Expense".parse::<EntryKind>().unwrap(), EntryKind::Expense);
        assert!("transfer".parse::<EntryKind>().is_err());
    }

    #[test]
    fn test_codes_match_serde() {
        for status in [EntryStatus::Paid, EntryStatus::Pending, EntryStatus::Cancelled] {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
        }
        assert_eq!(serde_json::to_string(&EntryKind::Income).unwrap(), "\"income\"");
    }

    #[test]
    fn test_empty_update() {
        assert!(EntryUpdate::default().is_empty());
        let update = EntryUpdate {
            notes: Some(None),
            ..EntryUpdate::default()
        };
        assert!(!update.is_empty());
    }
}
