//! Fixed DRE taxonomy: statement groups and their line items (subgroups).

use serde::{Deserialize, Serialize};

use super::error::CategoryError;
use crate::entry::EntryKind;

/// Top-level section of the income statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DreGroup {
    /// Gross revenue.
    Revenue,
    /// Deductions from gross revenue.
    Deductions,
    /// Cost of services rendered.
    CostOfServices,
    /// Operating expenses.
    OperatingExpenses,
    /// Financial expenses.
    FinancialExpenses,
    /// Not part of any statement line.
    Other,
}

impl DreGroup {
    /// Returns the storage code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Revenue => "REVENUE",
            Self::Deductions => "DEDUCTIONS",
            Self::CostOfServices => "COST_OF_SERVICES",
            Self::OperatingExpenses => "OPERATING_EXPENSES",
            Self::FinancialExpenses => "FINANCIAL_EXPENSES",
            Self::Other => "OTHER",
        }
    }
}

impl std::fmt::Display for DreGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DreGroup {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "REVENUE" => Ok(Self::Revenue),
            "DEDUCTIONS" => Ok(Self::Deductions),
            "COST_OF_SERVICES" => Ok(Self::CostOfServices),
            "OPERATING_EXPENSES" => Ok(Self::OperatingExpenses),
            "FINANCIAL_EXPENSES" => Ok(Self::FinancialExpenses),
            "OTHER" => Ok(Self::Other),
            _ => Err(CategoryError::UnknownTag(s.to_string())),
        }
    }
}

/// A single line of the income statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DreSubgroup {
    /// Any income.
    Revenue,
    /// Taxes on revenue.
    Taxes,
    /// Suppliers.
    Suppliers,
    /// Third-party services.
    ThirdPartyServices,
    /// Freight.
    Freight,
    /// Salaries.
    Salaries,
    /// Payroll taxes and social charges.
    PayrollTaxes,
    /// Other personnel expenses.
    PersonnelExpenses,
    /// Accountant and other professional services.
    AccountantAndOther,
    /// Electricity and water.
    Utilities,
    /// Internet and phone.
    InternetAndPhone,
    /// Workshop expenses.
    WorkshopExpenses,
    /// Owner's personal expenses paid by the business.
    PersonalExpenses,
    /// Owner's draw (pró-labore).
    OwnersDraw,
    /// Loan repayments.
    Loans,
    /// Interest, bank fees and charges.
    InterestAndFees,
    /// Matches no statement line.
    Unclassified,
}

impl DreSubgroup {
    /// Expense subgroups in statement order.
    pub const EXPENSES: [Self; 15] = [
        Self::Taxes,
        Self::Suppliers,
        Self::ThirdPartyServices,
        Self::Freight,
        Self::Salaries,
        Self::PayrollTaxes,
        Self::PersonnelExpenses,
        Self::AccountantAndOther,
        Self::Utilities,
        Self::InternetAndPhone,
        Self::WorkshopExpenses,
        Self::PersonalExpenses,
        Self::OwnersDraw,
        Self::Loans,
        Self::InterestAndFees,
    ];

    /// Returns the statement group this line belongs to.
    #[must_use]
    pub const fn group(self) -> DreGroup {
        match self {
            Self::Revenue => DreGroup::Revenue,
            Self::Taxes => DreGroup::Deductions,
            Self::Suppliers | Self::ThirdPartyServices | Self::Freight => DreGroup::CostOfServices,
            Self::Salaries
            | Self::PayrollTaxes
            | Self::PersonnelExpenses
            | Self::AccountantAndOther
            | Self::Utilities
            | Self::InternetAndPhone
            | Self::WorkshopExpenses
            | Self::PersonalExpenses
            | Self::OwnersDraw => DreGroup::OperatingExpenses,
            Self::Loans | Self::InterestAndFees => DreGroup::FinancialExpenses,
            Self::Unclassified => DreGroup::Other,
        }
    }

    /// Returns true if a category of the given kind may carry this tag.
    #[must_use]
    pub const fn allowed_for(self, kind: EntryKind) -> bool {
        match kind {
            EntryKind::Income => matches!(self, Self::Revenue),
            EntryKind::Expense => !matches!(self, Self::Revenue),
        }
    }

    /// Default (already normalized) category name seeded for this line.
    #[must_use]
    pub const fn canonical_name(self) -> &'static str {
        match self {
            Self::Revenue => "Vendas",
            Self::Taxes => "Impostos",
            Self::Suppliers => "Fornecedores",
            Self::ThirdPartyServices => "Serviços De Terceiros",
            Self::Freight => "Frete",
            Self::Salaries => "Salários",
            Self::PayrollTaxes => "Encargos Sociais",
            Self::PersonnelExpenses => "Despesas Com Pessoal",
            Self::AccountantAndOther => "Contador",
            Self::Utilities => "Energia",
            Self::InternetAndPhone => "Internet E Telefone",
            Self::WorkshopExpenses => "Despesas Da Oficina",
            Self::PersonalExpenses => "Despesas Pessoais",
            Self::OwnersDraw => "Pró-labore",
            Self::Loans => "Empréstimos",
            Self::InterestAndFees => "Juros E Tarifas",
            Self::Unclassified => "Outros",
        }
    }

    /// Returns the storage code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Revenue => "REVENUE",
            Self::Taxes => "TAXES",
            Self::Suppliers => "SUPPLIERS",
            Self::ThirdPartyServices => "THIRD_PARTY_SERVICES",
            Self::Freight => "FREIGHT",
            Self::Salaries => "SALARIES",
            Self::PayrollTaxes => "PAYROLL_TAXES",
            Self::PersonnelExpenses => "PERSONNEL_EXPENSES",
            Self::AccountantAndOther => "ACCOUNTANT_AND_OTHER",
            Self::Utilities => "UTILITIES",
            Self::InternetAndPhone => "INTERNET_AND_PHONE",
            Self::WorkshopExpenses => "WORKSHOP_EXPENSES",
            Self::PersonalExpenses => "PERSONAL_EXPENSES",
            Self::OwnersDraw => "OWNERS_DRAW",
            Self::Loans => "LOANS",
            Self::InterestAndFees => "INTEREST_AND_FEES",
            Self::Unclassified => "UNCLASSIFIED",
        }
    }
}

impl std::fmt::Display for DreSubgroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DreSubgroup {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        std::iter::once(Self::Revenue)
            .chain(Self::EXPENSES)
            .chain(std::iter::once(Self::Unclassified))
            .find(|sub| sub.as_str() == s)
            .ok_or_else(|| CategoryError::UnknownTag(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::normalize_name;

    #[test]
    fn test_codes_roundtrip_through_from_str() {
        for sub in std::iter::once(DreSubgroup::Revenue)
            .chain(DreSubgroup::EXPENSES)
            .chain(std::iter::once(DreSubgroup::Unclassified))
        {
            assert_eq!(sub.as_str().parse::<DreSubgroup>().unwrap(), sub);
            assert_eq!(
                serde_json::to_string(&sub).unwrap(),
                format!("\"{}\"", sub.as_str())
            );
            let group = sub.group();
            assert_eq!(group.as_str().parse::<DreGroup>().unwrap(), group);
        }
    }

    #[test]
    fn test_unknown_tag() {
        assert!("RENT".parse::<DreSubgroup>().is_err());
        assert!("revenue".parse::<DreGroup>().is_err());
    }

    #[test]
    fn test_canonical_names_are_normalized() {
        for sub in DreSubgroup::EXPENSES {
            let name = sub.canonical_name();
            assert_eq!(normalize_name(name).as_deref(), Some(name));
        }
    }

    #[test]
    fn test_kind_compatibility() {
        assert!(DreSubgroup::Revenue.allowed_for(EntryKind::Income));
        assert!(!DreSubgroup::Revenue.allowed_for(EntryKind::Expense));
        assert!(DreSubgroup::Unclassified.allowed_for(EntryKind::Expense));
        assert!(!DreSubgroup::Loans.allowed_for(EntryKind::Income));
    }
}
