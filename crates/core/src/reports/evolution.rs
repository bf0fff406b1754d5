//! Trailing monthly evolution.

use chrono::{Datelike, Months, NaiveDate};
use fluxo_shared::types::{DateRange, period::first_of_month};

use super::source::PaidEntryRow;
use super::types::MonthlyTotals;

fn month_index(date: NaiveDate) -> i64 {
    i64::from(date.year()) * 12 + i64::from(date.month0())
}

/// Buckets paid rows into the months of `window`, oldest first.
///
/// The series is dense: every month of the window is present, empty months
/// with zeros. Rows outside the window are ignored.
#[must_use]
pub fn monthly_evolution(
    window: DateRange,
    incomes: &[PaidEntryRow],
    expenses: &[PaidEntryRow],
) -> Vec<MonthlyTotals> {
    let first = month_index(window.start);
    let mut series = Vec::new();
    let mut cursor = Some(first_of_month(window.start));
    while let Some(month) = cursor.filter(|m| *m <= window.end) {
        series.push(MonthlyTotals::empty(month.year(), month.month()));
        cursor = month.checked_add_months(Months::new(1));
    }

    let slot = |date: NaiveDate| -> Option<usize> {
        if !window.contains(date) {
            return None;
        }
        usize::try_from(month_index(date) - first).ok()
    };

    for row in incomes {
        if let Some(totals) = slot(row.date).and_then(|i| series.get_mut(i)) {
            totals.income += row.amount;
        }
    }
    for row in expenses {
        if let Some(totals) = slot(row.date).and_then(|i| series.get_mut(i)) {
            totals.expense += row.amount;
        }
    }
    for totals in &mut series {
        totals.profit = totals.income - totals.expense;
    }
    series
}
