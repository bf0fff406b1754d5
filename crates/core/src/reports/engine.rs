//! The DRE engine: statement, indicators and evolution for one owner.

use chrono::{NaiveDate, Utc};
use fluxo_shared::config::ReportConfig;
use fluxo_shared::types::{DateRange, EvolutionAnchor, UserId};

use super::error::ReportError;
use super::evolution::monthly_evolution;
use super::service::DreService;
use super::source::EntrySource;
use super::types::{DreReport, IncomeStatement, Indicators, MonthlyTotals};
use crate::entry::EntryKind;

/// Evolution series settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    /// Number of trailing months.
    pub evolution_months: u32,
    /// Which date the series ends on.
    pub anchor: EvolutionAnchor,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            evolution_months: 6,
            anchor: EvolutionAnchor::Today,
        }
    }
}

impl From<&ReportConfig> for ReportOptions {
    fn from(config: &ReportConfig) -> Self {
        Self {
            evolution_months: config.evolution_months,
            anchor: config.evolution_anchor,
        }
    }
}

/// Computes reports from an [`EntrySource`]. Read-only.
pub struct DreEngine<S> {
    source: S,
}

impl<S: EntrySource> DreEngine<S> {
    /// Creates an engine over a store.
    pub const fn new(source: S) -> Self {
        Self { source }
    }

    async fn ensure_owner(&self, owner_id: UserId) -> Result<(), ReportError> {
        if self.source.owner_exists(owner_id).await? {
            Ok(())
        } else {
            Err(ReportError::OwnerNotFound(owner_id))
        }
    }

    /// Computes the income statement of paid entries with `start <= date <= end`.
    ///
    /// The range is not validated; an inverted range yields an all-zero statement.
    ///
    /// # Errors
    ///
    /// Returns `OwnerNotFound` for an unknown owner and propagates store errors.
    pub async fn compute_income_statement(
        &self,
        owner_id: UserId,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<IncomeStatement, ReportError> {
        self.ensure_owner(owner_id).await?;
        self.statement_for(owner_id, DateRange::new(start, end)).await
    }

    async fn statement_for(
        &self,
        owner_id: UserId,
        period: DateRange,
    ) -> Result<IncomeStatement, ReportError> {
        let incomes = self
            .source
            .list_paid_entries(owner_id, EntryKind::Income, period)
            .await?;
        let expenses = self
            .source
            .list_paid_entries(owner_id, EntryKind::Expense, period)
            .await?;
        Ok(DreService::build_statement(period, &incomes, &expenses))
    }

    /// Computes `months` trailing monthly totals ending with the month of `anchor`.
    ///
    /// # Errors
    ///
    /// Returns `OwnerNotFound` for an unknown owner, `WindowOutOfRange` when the
    /// window leaves the calendar, and propagates store errors.
    pub async fn compute_monthly_evolution(
        &self,
        owner_id: UserId,
        anchor: NaiveDate,
        months: u32,
    ) -> Result<Vec<MonthlyTotals>, ReportError> {
        self.ensure_owner(owner_id).await?;
        self.evolution_for(owner_id, anchor, months).await
    }

    async fn evolution_for(
        &self,
        owner_id: UserId,
        anchor: NaiveDate,
        months: u32,
    ) -> Result<Vec<MonthlyTotals>, ReportError> {
        let window =
            DateRange::trailing_months(anchor, months).ok_or(ReportError::WindowOutOfRange)?;
        let incomes = self
            .source
            .list_paid_entries(owner_id, EntryKind::Income, window)
            .await?;
        let expenses = self
            .source
            .list_paid_entries(owner_id, EntryKind::Expense, window)
            .await?;
        Ok(monthly_evolution(window, &incomes, &expenses))
    }

    /// Computes the full report, resolving a `Today` anchor to the current UTC date.
    ///
    /// # Errors
    ///
    /// See [`Self::compute_report_at`].
    pub async fn compute_report(
        &self,
        owner_id: UserId,
        period: DateRange,
        options: ReportOptions,
    ) -> Result<DreReport, ReportError> {
        self.compute_report_at(owner_id, period, options, Utc::now().date_naive())
            .await
    }

    /// Computes the full report with an explicit current date.
    ///
    /// # Errors
    ///
    /// Returns `OwnerNotFound` for an unknown owner, `WindowOutOfRange` for an
    /// unrepresentable evolution window, and propagates store errors.
    pub async fn compute_report_at(
        &self,
        owner_id: UserId,
        period: DateRange,
        options: ReportOptions,
        today: NaiveDate,
    ) -> Result<DreReport, ReportError> {
        self.ensure_owner(owner_id).await?;
        let statement = self.statement_for(owner_id, period).await?;
        let indicators = Indicators::from_statement(&statement);
        let anchor = options.anchor.resolve(&period, today);
        let monthly_evolution = self
            .evolution_for(owner_id, anchor, options.evolution_months)
            .await?;
        Ok(DreReport {
            statement,
            indicators,
            monthly_evolution,
        })
    }
}
