//! The entry store seam used by the report engine.

use async_trait::async_trait;
use chrono::NaiveDate;
use fluxo_shared::types::{DateRange, UserId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::ReportError;
use crate::category::{DreGroup, DreSubgroup};
use crate::entry::EntryKind;

/// A paid entry left-joined with its category record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaidEntryRow {
    /// Entry amount.
    pub amount: Decimal,
    /// Entry date.
    pub date: NaiveDate,
    /// Category text of the entry; `None` when blank.
    pub category_name: Option<String>,
    /// Tag of the matched category record.
    pub dre_group: Option<DreGroup>,
    /// Tag of the matched category record.
    pub dre_subgroup: Option<DreSubgroup>,
}

impl PaidEntryRow {
    /// Row with no category record.
    #[must_use]
    pub fn uncategorized(amount: Decimal, date: NaiveDate, category_name: Option<String>) -> Self {
        Self {
            amount,
            date,
            category_name,
            dre_group: None,
            dre_subgroup: None,
        }
    }

    /// Row joined with a category tagged `subgroup`.
    #[must_use]
    pub fn tagged(
        amount: Decimal,
        date: NaiveDate,
        category_name: impl Into<String>,
        subgroup: DreSubgroup,
    ) -> Self {
        Self {
            amount,
            date,
            category_name: Some(category_name.into()),
            dre_group: Some(subgroup.group()),
            dre_subgroup: Some(subgroup),
        }
    }

    /// Statement line the row counts toward when it is an expense.
    ///
    /// Missing tags and tags that cannot belong to an expense are unclassified.
    #[must_use]
    pub fn expense_subgroup(&self) -> DreSubgroup {
        self.dre_subgroup
            .filter(|sub| sub.allowed_for(EntryKind::Expense))
            .unwrap_or(DreSubgroup::Unclassified)
    }
}

/// Read access to paid entries, implemented by storage backends.
#[async_trait]
pub trait EntrySource: Send + Sync {
    /// Returns true if the owner exists.
    async fn owner_exists(&self, owner_id: UserId) -> Result<bool, ReportError>;

    /// Lists the owner's paid entries of one kind with `start <= date <= end`.
    async fn list_paid_entries(
        &self,
        owner_id: UserId,
        kind: EntryKind,
        range: DateRange,
    ) -> Result<Vec<PaidEntryRow>, ReportError>;
}
