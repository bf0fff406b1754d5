//! Calendar periods for reports and filters.

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Date format used at every text boundary (`YYYY-MM-DD`).
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A closed calendar interval `[start, end]`, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    /// First day included.
    pub start: NaiveDate,
    /// Last day included.
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a range without checking `start <= end`.
    ///
    /// An inverted range simply contains no dates.
    #[must_use]
    pub const fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Creates a range, rejecting `start > end`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidRange` when the start is after the end.
    pub fn validated(start: NaiveDate, end: NaiveDate) -> AppResult<Self> {
        if start > end {
            return Err(AppError::InvalidRange(format!(
                "start {start} is after end {end}"
            )));
        }
        Ok(Self { start, end })
    }

    /// Parses two `YYYY-MM-DD` strings into a validated range.
    ///
    /// # Errors
    ///
    /// Returns a validation error for malformed dates and
    /// `AppError::InvalidRange` for an inverted range.
    pub fn parse(start: &str, end: &str) -> AppResult<Self> {
        Self::validated(parse_date(start)?, parse_date(end)?)
    }

    /// Returns the range covering a whole calendar month.
    #[must_use]
    pub fn month(year: i32, month: u32) -> Option<Self> {
        let start = NaiveDate::from_ymd_opt(year, month, 1)?;
        let end = start.checked_add_months(Months::new(1))?.pred_opt()?;
        Some(Self { start, end })
    }

    /// Returns the `count` whole months ending with the month of `anchor`.
    ///
    /// Starts on the first day of the oldest month and ends on the last day
    /// of the anchor month. `count` of zero is treated as one.
    #[must_use]
    pub fn trailing_months(anchor: NaiveDate, count: u32) -> Option<Self> {
        let anchor_start = first_of_month(anchor);
        let start = anchor_start.checked_sub_months(Months::new(count.max(1) - 1))?;
        let end = anchor_start.checked_add_months(Months::new(1))?.pred_opt()?;
        Some(Self { start, end })
    }

    /// Returns true if the date falls within the range (inclusive).
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}

/// Anchor for the trailing monthly evolution series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvolutionAnchor {
    /// Series ends with the current month, whatever the report period.
    #[default]
    Today,
    /// Series ends with the month of the report's end date.
    PeriodEnd,
}

impl EvolutionAnchor {
    /// Resolves the anchor to a concrete date.
    #[must_use]
    pub const fn resolve(self, period: &DateRange, today: NaiveDate) -> NaiveDate {
        match self {
            Self::Today => today,
            Self::PeriodEnd => period.end,
        }
    }
}

impl std::str::FromStr for EvolutionAnchor {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "today" | "now" => Ok(Self::Today),
            "period_end" | "end" => Ok(Self::PeriodEnd),
            other => Err(AppError::Validation(format!(
                "Unknown evolution anchor: {other}"
            ))),
        }
    }
}

/// Parses a `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns a validation error when the text is not a valid calendar date.
pub fn parse_date(value: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|_| AppError::Validation(format!("Invalid date '{value}', expected YYYY-MM-DD")))
}

/// Returns the first day of the date's month.
#[must_use]
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}
