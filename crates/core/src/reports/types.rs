//! DRE (income statement) data types.
//!
//! Every monetary and percentage field serializes as a JSON number.

use fluxo_shared::types::DateRange;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Sum of all paid income.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrossRevenue {
    /// Total income.
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
}

/// Deductions from gross revenue.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deductions {
    /// Taxes on revenue.
    #[serde(with = "rust_decimal::serde::float")]
    pub tax_deduction: Decimal,
    /// Sum of deductions.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_deductions: Decimal,
}

/// Cost of services rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostOfServices {
    /// Suppliers.
    #[serde(with = "rust_decimal::serde::float")]
    pub suppliers: Decimal,
    /// Third-party services.
    #[serde(with = "rust_decimal::serde::float")]
    pub third_party_services: Decimal,
    /// Freight.
    #[serde(with = "rust_decimal::serde::float")]
    pub freight: Decimal,
    /// Sum of the three lines.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_cost_of_services: Decimal,
}

/// Operating expenses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperatingExpenses {
    /// Salaries.
    #[serde(with = "rust_decimal::serde::float")]
    pub salaries: Decimal,
    /// Payroll taxes and social charges.
    #[serde(with = "rust_decimal::serde::float")]
    pub payroll_taxes: Decimal,
    /// Other personnel expenses.
    #[serde(with = "rust_decimal::serde::float")]
    pub personnel_expenses: Decimal,
    /// Accountant and other professional services.
    #[serde(with = "rust_decimal::serde::float")]
    pub accountant_and_other: Decimal,
    /// Electricity and water.
    #[serde(with = "rust_decimal::serde::float")]
    pub utilities: Decimal,
    /// Internet and phone.
    #[serde(with = "rust_decimal::serde::float")]
    pub internet_and_phone: Decimal,
    /// Workshop expenses.
    #[serde(with = "rust_decimal::serde::float")]
    pub workshop_expenses: Decimal,
    /// Owner's personal expenses.
    #[serde(with = "rust_decimal::serde::float")]
    pub personal_expenses: Decimal,
    /// Owner's draw.
    #[serde(with = "rust_decimal::serde::float")]
    pub owners_draw: Decimal,
    /// Sum of the nine lines.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_operating_expenses: Decimal,
}

/// Financial expenses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialExpenses {
    /// Loan repayments.
    #[serde(with = "rust_decimal::serde::float")]
    pub loans: Decimal,
    /// Interest, bank fees and charges.
    #[serde(with = "rust_decimal::serde::float")]
    pub interest_and_fees: Decimal,
    /// Same as `interest_and_fees`.
    #[serde(with = "rust_decimal::serde::float")]
    pub interest_paid: Decimal,
    /// Loans plus interest and fees.
    #[serde(with = "rust_decimal::serde::float")]
    pub total_financial_expenses: Decimal,
}

/// Paid expenses that fall on no statement line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnclassifiedExpenses {
    /// Sum of the unclassified rows.
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    /// Number of unclassified rows.
    pub entry_count: u64,
    /// Distinct category names involved, sorted.
    pub categories: Vec<String>,
}

/// The DRE for one owner and period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeStatement {
    /// Period covered (inclusive).
    pub period: DateRange,
    /// Gross revenue.
    pub gross_revenue: GrossRevenue,
    /// Deductions.
    pub deductions: Deductions,
    /// Gross revenue minus deductions.
    #[serde(with = "rust_decimal::serde::float")]
    pub net_revenue: Decimal,
    /// Cost of services.
    pub cost_of_services: CostOfServices,
    /// Net revenue minus cost of services.
    #[serde(with = "rust_decimal::serde::float")]
    pub gross_profit: Decimal,
    /// Operating expenses.
    pub operating_expenses: OperatingExpenses,
    /// Gross profit minus operating expenses.
    #[serde(with = "rust_decimal::serde::float")]
    pub operating_result: Decimal,
    /// Financial expenses.
    pub financial_expenses: FinancialExpenses,
    /// Operating result minus financial expenses.
    #[serde(with = "rust_decimal::serde::float")]
    pub net_profit: Decimal,
    /// Reported separately, never subtracted.
    pub unclassified_expenses: UnclassifiedExpenses,
}

/// Margin percentages over net revenue, rounded to two places.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Indicators {
    /// Gross profit margin.
    #[serde(with = "rust_decimal::serde::float")]
    pub gross_margin: Decimal,
    /// Operating result margin.
    #[serde(with = "rust_decimal::serde::float")]
    pub operating_margin: Decimal,
    /// Net profit margin.
    #[serde(with = "rust_decimal::serde::float")]
    pub net_margin: Decimal,
}

/// Paid totals for one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyTotals {
    /// Month number, 1-12.
    pub month: u32,
    /// Calendar year.
    pub year: i32,
    /// Paid income.
    #[serde(with = "rust_decimal::serde::float")]
    pub income: Decimal,
    /// Paid expense.
    #[serde(with = "rust_decimal::serde::float")]
    pub expense: Decimal,
    /// Income minus expense.
    #[serde(with = "rust_decimal::serde::float")]
    pub profit: Decimal,
}

impl MonthlyTotals {
    /// An empty month.
    #[must_use]
    pub const fn empty(year: i32, month: u32) -> Self {
        Self {
            month,
            year,
            income: Decimal::ZERO,
            expense: Decimal::ZERO,
            profit: Decimal::ZERO,
        }
    }
}

/// Full report: statement, indicators and the trailing evolution series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DreReport {
    /// Income statement.
    pub statement: IncomeStatement,
    /// Margins.
    pub indicators: Indicators,
    /// Oldest month first.
    pub monthly_evolution: Vec<MonthlyTotals>,
}
