//! Entry listing filter.
//!
//! The same filter drives paginated listings and, with `status = paid` fixed
//! and no pagination, the DRE and evolution queries.

use chrono::NaiveDate;
use fluxo_shared::types::{DateRange, PageRequest, PageResponse};
use serde::{Deserialize, Serialize};

use super::types::{EntryKind, EntryStatus, FinancialEntry};

/// Filter options for listing entries of one kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryFilter {
    /// Income or expense.
    pub kind: EntryKind,
    /// Case-insensitive substring of the category name.
    pub category: Option<String>,
    /// Exact status.
    pub status: Option<EntryStatus>,
    /// Case-insensitive substring of the description.
    pub search: Option<String>,
    /// Inclusive lower date bound.
    pub date_from: Option<NaiveDate>,
    /// Inclusive upper date bound.
    pub date_to: Option<NaiveDate>,
}

impl EntryFilter {
    /// Creates a filter matching every entry of the given kind.
    #[must_use]
    pub const fn new(kind: EntryKind) -> Self {
        Self {
            kind,
            category: None,
            status: None,
            search: None,
            date_from: None,
            date_to: None,
        }
    }

    /// Filter used by the report engine: paid entries inside a closed range.
    #[must_use]
    pub const fn paid_within(kind: EntryKind, range: DateRange) -> Self {
        Self {
            kind,
            category: None,
            status: Some(EntryStatus::Paid),
            search: None,
            date_from: Some(range.start),
            date_to: Some(range.end),
        }
    }

    /// Restricts to categories containing the given text.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = non_blank(category.into());
        self
    }

    /// Restricts to one status.
    #[must_use]
    pub const fn with_status(mut self, status: EntryStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Restricts to descriptions containing the given text.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = non_blank(search.into());
        self
    }

    /// Restricts to a closed date range.
    #[must_use]
    pub const fn between(mut self, range: DateRange) -> Self {
        self.date_from = Some(range.start);
        self.date_to = Some(range.end);
        self
    }

    /// Returns true if the entry passes every set criterion.
    #[must_use]
    pub fn matches(&self, entry: &FinancialEntry) -> bool {
        entry.kind == self.kind
            && self.status.is_none_or(|s| entry.status == s)
            && self.date_from.is_none_or(|from| entry.date >= from)
            && self.date_to.is_none_or(|to| entry.date <= to)
            && self
                .category
                .as_deref()
                .is_none_or(|c| contains_ignore_case(&entry.category, c))
            && self
                .search
                .as_deref()
                .is_none_or(|s| contains_ignore_case(&entry.description, s))
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Sorts entries in listing order: newest date first, then newest id.
pub fn sort_for_listing(entries: &mut [FinancialEntry]) {
    entries.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| b.id.cmp(&a.id)));
}

/// Sorts and slices an in-memory result set into one page.
#[must_use]
pub fn paginate(
    mut entries: Vec<FinancialEntry>,
    page: PageRequest,
) -> PageResponse<FinancialEntry> {
    sort_for_listing(&mut entries);
    let total = entries.len() as u64;
    let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
    let limit = usize::try_from(page.limit()).unwrap_or(usize::MAX);
    let data = entries.into_iter().skip(offset).take(limit).collect();
    PageResponse::new(data, page.page, page.per_page, total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fluxo_shared::types::{Amount, EntryId, UserId};
    use rust_decimal_macros::dec;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn entry(id: i64, date: NaiveDate, category: &str, status: EntryStatus) -> FinancialEntry {
        FinancialEntry {
            id: EntryId::new(id),
            owner_id: UserId::new(1),
            kind: EntryKind::Expense,
            description: format!("Pagamento {id}"),
            category: category.to_string(),
            amount: Amount::new(dec!(10)).unwrap(),
            date,
            status,
            notes: None,
        }
    }

    #[test]
    fn test_empty_filter_matches_kind_only() {
        let e = entry(1, d(2024, 3, 1), "Frete", EntryStatus::Pending);
        assert!(EntryFilter::new(EntryKind::Expense).matches(&e));
        assert!(!EntryFilter::new(EntryKind::Income).matches(&e));
    }

    #[test]
    fn test_paid_within_is_inclusive() {
        let range = DateRange::new(d(2024, 3, 1), d(2024, 3, 31));
        let filter = EntryFilter::paid_within(EntryKind::Expense, range);
        assert!(filter.matches(&entry(1, d(2024, 3, 1), "Frete", EntryStatus::Paid)));
        assert!(filter.matches(&entry(2, d(2024, 3, 31), "Frete", EntryStatus::Paid)));
        assert!(!filter.matches(&entry(3, d(2024, 4, 1), "Frete", EntryStatus::Paid)));
        assert!(!filter.matches(&entry(4, d(2024, 3, 10), "Frete", EntryStatus::Pending)));
    }

    #[test]
    fn test_substring_filters_ignore_case() {
        let e = entry(1, d(2024, 3, 1), "Serviços De Terceiros", EntryStatus::Paid);
        let filter = EntryFilter::new(EntryKind::Expense)
            .with_category("terceiros")
            .with_search("PAGAMENTO");
        assert!(filter.matches(&e));
        assert!(
            !EntryFilter::new(EntryKind::Expense)
                .with_category("frete")
                .matches(&e)
        );
    }

    #[test]
    fn test_blank_text_filters_are_dropped() {
        let filter = EntryFilter::new(EntryKind::Expense)
            .with_category("   ")
            .with_search("");
        assert!(filter.category.is_none());
        assert!(filter.search.is_none());
    }

    #[test]
    fn test_paginate_orders_by_date_desc() {
        let entries = vec![
            entry(1, d(2024, 1, 5), "Frete", EntryStatus::Paid),
            entry(2, d(2024, 3, 5), "Frete", EntryStatus::Paid),
            entry(3, d(2024, 3, 5), "Frete", EntryStatus::Paid),
            entry(4, d(2024, 2, 5), "Frete", EntryStatus::Paid),
        ];

        let first = paginate(entries.clone(), PageRequest::new(1, 3));
        let ids: Vec<i64> = first.data.iter().map(|e| e.id.into_inner()).collect();
        assert_eq!(ids, vec![3, 2, 4]);
        assert_eq!(first.meta.total, 4);
        assert_eq!(first.meta.total_pages, 2);

        let second = paginate(entries, PageRequest::new(2, 3));
        assert_eq!(second.data.len(), 1);
        assert_eq!(second.data[0].id, EntryId::new(1));
    }
}
