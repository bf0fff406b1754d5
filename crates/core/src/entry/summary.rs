//! Per-status totals for a period.

use fluxo_shared::types::DateRange;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::{EntryKind, EntryStatus, FinancialEntry};

/// Totals for one entry kind, split by status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KindTotals {
    /// Sum of paid entries.
    #[serde(with = "rust_decimal::serde::float")]
    pub paid: Decimal,
    /// Sum of pending entries.
    #[serde(with = "rust_decimal::serde::float")]
    pub pending: Decimal,
    /// Sum of cancelled entries.
    #[serde(with = "rust_decimal::serde::float")]
    pub cancelled: Decimal,
    /// Number of entries counted.
    pub count: u64,
}

impl KindTotals {
    fn add(&mut self, entry: &FinancialEntry) {
        let amount = entry.amount.value();
        match entry.status {
            EntryStatus::Paid => self.paid += amount,
            EntryStatus::Pending => self.pending += amount,
            EntryStatus::Cancelled => self.cancelled += amount,
        }
        self.count += 1;
    }
}

/// Income and expense totals for a period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodSummary {
    /// Period covered.
    pub period: DateRange,
    /// Income totals.
    pub income: KindTotals,
    /// Expense totals.
    pub expense: KindTotals,
    /// Paid income minus paid expense.
    #[serde(with = "rust_decimal::serde::float")]
    pub paid_balance: Decimal,
}

impl PeriodSummary {
    /// Summarizes the entries that fall inside the period.
    #[must_use]
    pub fn from_entries(period: DateRange, entries: &[FinancialEntry]) -> Self {
        let mut income = KindTotals::default();
        let mut expense = KindTotals::default();

        for entry in entries.iter().filter(|e| period.contains(e.date)) {
            match entry.kind {
                EntryKind::Income => income.add(entry),
                EntryKind::Expense => expense.add(entry),
            }
        }

        let paid_balance = income.paid - expense.paid;
        Self {
            period,
            income,
            expense,
            paid_balance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use fluxo_shared::types::{Amount, EntryId, UserId};
    use rust_decimal_macros::dec;

    fn entry(kind: EntryKind, status: EntryStatus, amount: Decimal, day: u32) -> FinancialEntry {
        FinancialEntry {
            id: EntryId::new(i64::from(day)),
            owner_id: UserId::new(1),
            kind,
            description: "x".to_string(),
            category: "Geral".to_string(),
            amount: Amount::new(amount).unwrap(),
            date: NaiveDate::from_ymd_opt(2024, 5, day).unwrap(),
            status,
            notes: None,
        }
    }

    #[test]
    fn test_summary_splits_by_status() {
        let period = DateRange::month(2024, 5).unwrap();
        let entries = vec![
            entry(EntryKind::Income, EntryStatus::Paid, dec!(1500), 2),
            entry(EntryKind::Income, EntryStatus::Pending, dec!(300), 3),
            entry(EntryKind::Expense, EntryStatus::Paid, dec!(400.50), 4),
            entry(EntryKind::Expense, EntryStatus::Cancelled, dec!(99), 5),
        ];

        let summary = PeriodSummary::from_entries(period, &entries);

        assert_eq!(summary.income.paid, dec!(1500));
        assert_eq!(summary.income.pending, dec!(300));
        assert_eq!(summary.income.count, 2);
        assert_eq!(summary.expense.paid, dec!(400.50));
        assert_eq!(summary.expense.cancelled, dec!(99));
        assert_eq!(summary.paid_balance, dec!(1099.50));
    }

    #[test]
    fn test_summary_ignores_out_of_period() {
        let period = DateRange::month(2024, 6).unwrap();
        let entries = vec![entry(EntryKind::Income, EntryStatus::Paid, dec!(10), 2)];
        let summary = PeriodSummary::from_entries(period, &entries);
        assert_eq!(summary.income, KindTotals::default());
        assert_eq!(summary.paid_balance, Decimal::ZERO);
    }
}
