//! Postgres enum types.

use fluxo_core::entry;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "entry_kind")]
pub enum EntryKind {
    #[sea_orm(string_value = "income")]
    Income,
    #[sea_orm(string_value = "expense")]
    Expense,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "entry_status")]
pub enum EntryStatus {
    #[sea_orm(string_value = "paid")]
    Paid,
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
}

impl From<entry::EntryKind> for EntryKind {
    fn from(kind: entry::EntryKind) -> Self {
        match kind {
            entry::EntryKind::Income => Self::Income,
            entry::EntryKind::Expense => Self::Expense,
        }
    }
}

impl From<EntryKind> for entry::EntryKind {
    fn from(kind: EntryKind) -> Self {
        match kind {
            EntryKind::Income => Self::Income,
            EntryKind::Expense => Self::Expense,
        }
    }
}

impl From<entry::EntryStatus> for EntryStatus {
    fn from(status: entry::EntryStatus) -> Self {
        match status {
            entry::EntryStatus::Paid => Self::Paid,
            entry::EntryStatus::Pending => Self::Pending,
            entry::EntryStatus::Cancelled => Self::Cancelled,
        }
    }
}

impl From<EntryStatus> for entry::EntryStatus {
    fn from(status: EntryStatus) -> Self {
        match status {
            EntryStatus::Paid => Self::Paid,
            EntryStatus::Pending => Self::Pending,
            EntryStatus::Cancelled => Self::Cancelled,
        }
    }
}
