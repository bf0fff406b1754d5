//! DRE assembly.

use std::collections::BTreeSet;

use fluxo_shared::types::DateRange;
use rust_decimal::Decimal;

use super::source::PaidEntryRow;
use super::types::{
    CostOfServices, Deductions, FinancialExpenses, GrossRevenue, IncomeStatement,
    OperatingExpenses, UnclassifiedExpenses,
};
use crate::category::DreSubgroup;

/// Folds paid rows into an income statement.
pub struct DreService;

impl DreService {
    /// Builds the statement for `period` from paid income and expense rows.
    ///
    /// Rows dated outside the period are ignored. Every line is an independent
    /// sum over the expense rows, so each row lands in exactly one line.
    #[must_use]
    pub fn build_statement(
        period: DateRange,
        incomes: &[PaidEntryRow],
        expenses: &[PaidEntryRow],
    ) -> IncomeStatement {
        let in_period = |row: &&PaidEntryRow| period.contains(row.date);
        let line = |subgroup: DreSubgroup| -> Decimal {
            expenses
                .iter()
                .filter(in_period)
                .filter(|row| row.expense_subgroup() == subgroup)
                .map(|row| row.amount)
                .sum()
        };

        let gross_revenue = GrossRevenue {
            total: incomes.iter().filter(in_period).map(|row| row.amount).sum(),
        };

        let tax_deduction = line(DreSubgroup::Taxes);
        let deductions = Deductions {
            tax_deduction,
            total_deductions: tax_deduction,
        };
        let net_revenue = gross_revenue.total - deductions.total_deductions;

        let suppliers = line(DreSubgroup::Suppliers);
        let third_party_services = line(DreSubgroup::ThirdPartyServices);
        let freight = line(DreSubgroup::Freight);
        let cost_of_services = CostOfServices {
            suppliers,
            third_party_services,
            freight,
            total_cost_of_services: suppliers + third_party_services + freight,
        };
        let gross_profit = net_revenue - cost_of_services.total_cost_of_services;

        let operating_expenses = Self::operating_expenses(&line);
        let operating_result = gross_profit - operating_expenses.total_operating_expenses;

        let loans = line(DreSubgroup::Loans);
        let interest_and_fees = line(DreSubgroup::InterestAndFees);
        let financial_expenses = FinancialExpenses {
            loans,
            interest_and_fees,
            interest_paid: interest_and_fees,
            total_financial_expenses: loans + interest_and_fees,
        };
        let net_profit = operating_result - financial_expenses.total_financial_expenses;

        IncomeStatement {
            period,
            gross_revenue,
            deductions,
            net_revenue,
            cost_of_services,
            gross_profit,
            operating_expenses,
            operating_result,
            financial_expenses,
            net_profit,
            unclassified_expenses: Self::unclassified(period, expenses),
        }
    }

    fn operating_expenses(line: &impl Fn(DreSubgroup) -> Decimal) -> OperatingExpenses {
        let salaries = line(DreSubgroup::Salaries);
        let payroll_taxes = line(DreSubgroup::PayrollTaxes);
        let personnel_expenses = line(DreSubgroup::PersonnelExpenses);
        let accountant_and_other = line(DreSubgroup::AccountantAndOther);
        let utilities = line(DreSubgroup::Utilities);
        let internet_and_phone = line(DreSubgroup::InternetAndPhone);
        let workshop_expenses = line(DreSubgroup::WorkshopExpenses);
        let personal_expenses = line(DreSubgroup::PersonalExpenses);
        let owners_draw = line(DreSubgroup::OwnersDraw);

        OperatingExpenses {
            salaries,
            payroll_taxes,
            personnel_expenses,
            accountant_and_other,
            utilities,
            internet_and_phone,
            workshop_expenses,
            personal_expenses,
            owners_draw,
            total_operating_expenses: salaries
                + payroll_taxes
                + personnel_expenses
                + accountant_and_other
                + utilities
                + internet_and_phone
                + workshop_expenses
                + personal_expenses
                + owners_draw,
        }
    }

    fn unclassified(period: DateRange, expenses: &[PaidEntryRow]) -> UnclassifiedExpenses {
        let rows: Vec<&PaidEntryRow> = expenses
            .iter()
            .filter(|row| period.contains(row.date))
            .filter(|row| row.expense_subgroup() == DreSubgroup::Unclassified)
            .collect();

        let categories: BTreeSet<String> = rows
            .iter()
            .filter_map(|row| row.category_name.clone())
            .collect();

        UnclassifiedExpenses {
            total: rows.iter().map(|row| row.amount).sum(),
            entry_count: rows.len() as u64,
            categories: categories.into_iter().collect(),
        }
    }
}
