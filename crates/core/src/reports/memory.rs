//! In-memory entry store.
//!
//! Holds owners, categories and entries in plain vectors and answers the same
//! queries as the database repositories.

use std::collections::BTreeSet;

use async_trait::async_trait;
use fluxo_shared::types::{DateRange, PageRequest, PageResponse, UserId};

use super::error::ReportError;
use super::source::{EntrySource, PaidEntryRow};
use crate::category::{Category, fold_for_match};
use crate::entry::{EntryFilter, EntryKind, FinancialEntry, PeriodSummary, paginate};

/// Entry store backed by vectors.
#[derive(Debug, Clone, Default)]
pub struct MemoryEntrySource {
    owners: BTreeSet<UserId>,
    categories: Vec<Category>,
    entries: Vec<FinancialEntry>,
}

impl MemoryEntrySource {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an owner.
    #[must_use]
    pub fn with_owner(mut self, owner_id: UserId) -> Self {
        self.owners.insert(owner_id);
        self
    }

    /// Adds a category record.
    #[must_use]
    pub fn with_category(mut self, category: Category) -> Self {
        self.categories.push(category);
        self
    }

    /// Adds an entry.
    #[must_use]
    pub fn with_entry(mut self, entry: FinancialEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Adds several entries.
    #[must_use]
    pub fn with_entries(mut self, entries: impl IntoIterator<Item = FinancialEntry>) -> Self {
        self.entries.extend(entries);
        self
    }

    /// Finds the category record an entry joins to: same owner and kind, name
    /// equal ignoring case.
    fn category_for(&self, entry: &FinancialEntry) -> Option<&Category> {
        let wanted = fold_for_match(&entry.category);
        self.categories.iter().find(|c| {
            c.owner_id == entry.owner_id && c.kind == entry.kind && fold_for_match(&c.name) == wanted
        })
    }

    fn owned<'a>(
        &'a self,
        owner_id: UserId,
        filter: &'a EntryFilter,
    ) -> impl Iterator<Item = &'a FinancialEntry> + 'a {
        self.entries
            .iter()
            .filter(move |e| e.owner_id == owner_id && filter.matches(e))
    }

    /// Lists one page of the owner's entries matching the filter.
    #[must_use]
    pub fn list_entries(
        &self,
        owner_id: UserId,
        filter: &EntryFilter,
        page: PageRequest,
    ) -> PageResponse<FinancialEntry> {
        paginate(self.owned(owner_id, filter).cloned().collect(), page)
    }

    /// Summarizes the owner's entries of both kinds over a period.
    #[must_use]
    pub fn summarize(&self, owner_id: UserId, period: DateRange) -> PeriodSummary {
        let owned: Vec<FinancialEntry> = self
            .entries
            .iter()
            .filter(|e| e.owner_id == owner_id)
            .cloned()
            .collect();
        PeriodSummary::from_entries(period, &owned)
    }
}

#[async_trait]
impl EntrySource for MemoryEntrySource {
    async fn owner_exists(&self, owner_id: UserId) -> Result<bool, ReportError> {
        Ok(self.owners.contains(&owner_id))
    }

    async fn list_paid_entries(
        &self,
        owner_id: UserId,
        kind: EntryKind,
        range: DateRange,
    ) -> Result<Vec<PaidEntryRow>, ReportError> {
        let filter = EntryFilter::paid_within(kind, range);
        Ok(self
            .owned(owner_id, &filter)
            .map(|entry| {
                let category = self.category_for(entry);
                PaidEntryRow {
                    amount: entry.amount.value(),
                    date: entry.date,
                    category_name: Some(entry.category.clone()).filter(|c| !c.trim().is_empty()),
                    dre_group: category.map(|c| c.dre_group),
                    dre_subgroup: category.map(|c| c.dre_subgroup),
                }
            })
            .collect())
    }
}
