//! Name-based DRE classifier.
//!
//! Runs when a category is created or renamed. The rule table is evaluated in
//! order and the first match wins, so exact names take precedence over the
//! loan and interest substring rules, and loans take precedence over interest.

use super::normalize::{collapse_whitespace, fold_for_match};
use super::taxonomy::DreSubgroup;
use crate::entry::EntryKind;

/// How a rule compares a category name.
#[derive(Debug, Clone, Copy)]
enum Matcher {
    /// Whole name equals one of the (lowercase) literals, ignoring case.
    Exact(&'static [&'static str]),
    /// Whole trimmed name equals one of the literals exactly.
    ExactCaseSensitive(&'static [&'static str]),
    /// Lowercased name contains one of the (lowercase) fragments.
    Contains(&'static [&'static str]),
}

impl Matcher {
    fn matches(self, folded: &str, collapsed: &str) -> bool {
        match self {
            Self::Exact(names) => names.contains(&folded),
            Self::ExactCaseSensitive(names) => names.contains(&collapsed),
            Self::Contains(fragments) => fragments.iter().any(|f| folded.contains(f)),
        }
    }
}

const EXPENSE_RULES: &[(DreSubgroup, Matcher)] = &[
    (DreSubgroup::Taxes, Matcher::Exact(&["impostos", "taxes"])),
    (DreSubgroup::Suppliers, Matcher::Exact(&["fornecedores"])),
    (
        DreSubgroup::ThirdPartyServices,
        Matcher::Exact(&["serviços de terceiros"]),
    ),
    (DreSubgroup::Freight, Matcher::Exact(&["frete"])),
    (DreSubgroup::Salaries, Matcher::Exact(&["salários"])),
    (DreSubgroup::PayrollTaxes, Matcher::Exact(&["encargos sociais"])),
    (
        DreSubgroup::PersonnelExpenses,
        Matcher::Exact(&["despesas com pessoal"]),
    ),
    (
        DreSubgroup::AccountantAndOther,
        Matcher::Exact(&["contador", "contabilidade"]),
    ),
    (DreSubgroup::Utilities, Matcher::ExactCaseSensitive(&["Energia"])),
    (
        DreSubgroup::InternetAndPhone,
        Matcher::Exact(&["internet e telefone"]),
    ),
    (
        DreSubgroup::WorkshopExpenses,
        Matcher::Exact(&["despesas da oficina"]),
    ),
    (
        DreSubgroup::PersonalExpenses,
        Matcher::Exact(&["despesas pessoais"]),
    ),
    (DreSubgroup::OwnersDraw, Matcher::Exact(&["pró-labore"])),
    (
        DreSubgroup::Loans,
        Matcher::Contains(&["empréstimo", "emprestimo"]),
    ),
    (
        DreSubgroup::InterestAndFees,
        Matcher::Contains(&["juros", "taxa", "tarifa"]),
    ),
];

/// Returns the first expense rule matching the name, if any.
#[must_use]
pub fn match_expense_rule(name: &str) -> Option<DreSubgroup> {
    let folded = fold_for_match(name);
    let collapsed = collapse_whitespace(name);
    EXPENSE_RULES
        .iter()
        .find(|(_, matcher)| matcher.matches(&folded, &collapsed))
        .map(|(subgroup, _)| *subgroup)
}

/// Classifies a category name of the given kind.
///
/// Income categories always resolve to [`DreSubgroup::Revenue`]. Expense names
/// matching no rule resolve to [`DreSubgroup::Unclassified`].
#[must_use]
pub fn classify(kind: EntryKind, name: &str) -> DreSubgroup {
    match kind {
        EntryKind::Income => DreSubgroup::Revenue,
        EntryKind::Expense => match_expense_rule(name).unwrap_or(DreSubgroup::Unclassified),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::{DreGroup, normalize_name};
    use rstest::rstest;

    #[rstest]
    #[case("Impostos", DreSubgroup::Taxes)]
    #[case("TAXES", DreSubgroup::Taxes)]
    #[case("fornecedores", DreSubgroup::Suppliers)]
    #[case("Serviços De Terceiros", DreSubgroup::ThirdPartyServices)]
    #[case("Frete", DreSubgroup::Freight)]
    #[case("Salários", DreSubgroup::Salaries)]
    #[case("Encargos Sociais", DreSubgroup::PayrollTaxes)]
    #[case("Despesas com Pessoal", DreSubgroup::PersonnelExpenses)]
    #[case("Contador", DreSubgroup::AccountantAndOther)]
    #[case("Contabilidade", DreSubgroup::AccountantAndOther)]
    #[case("Energia", DreSubgroup::Utilities)]
    #[case("Internet e Telefone", DreSubgroup::InternetAndPhone)]
    #[case("Despesas da Oficina", DreSubgroup::WorkshopExpenses)]
    #[case("Despesas Pessoais", DreSubgroup::PersonalExpenses)]
    #[case("Pró-labore", DreSubgroup::OwnersDraw)]
    #[case("Empréstimo Banco", DreSubgroup::Loans)]
    #[case("Parcela emprestimo", DreSubgroup::Loans)]
    #[case("Juros", DreSubgroup::InterestAndFees)]
    #[case("Tarifa Bancária", DreSubgroup::InterestAndFees)]
    #[case("Taxa De Manutenção", DreSubgroup::InterestAndFees)]
    fn test_expense_rules(#[case] name: &str, #[case] expected: DreSubgroup) {
        assert_eq!(classify(EntryKind::Expense, name), expected);
    }

    #[rstest]
    #[case("Aluguel")]
    #[case("energia")]
    #[case("ENERGIA")]
    #[case("Impostos Federais")]
    fn test_unmatched_names_are_unclassified(#[case] name: &str) {
        let subgroup = classify(EntryKind::Expense, name);
        assert_eq!(subgroup, DreSubgroup::Unclassified);
        assert_eq!(subgroup.group(), DreGroup::Other);
    }

    #[test]
    fn test_loans_win_over_interest() {
        assert_eq!(
            classify(EntryKind::Expense, "Juros de Empréstimo"),
            DreSubgroup::Loans
        );
    }

    #[test]
    fn test_whitespace_does_not_affect_exact_rules() {
        assert_eq!(
            classify(EntryKind::Expense, "  serviços   de  terceiros "),
            DreSubgroup::ThirdPartyServices
        );
        assert_eq!(classify(EntryKind::Expense, " Energia "), DreSubgroup::Utilities);
    }

    #[test]
    fn test_income_is_always_revenue() {
        assert_eq!(classify(EntryKind::Income, "Impostos"), DreSubgroup::Revenue);
        assert_eq!(classify(EntryKind::Income, "Aluguel"), DreSubgroup::Revenue);
    }

    #[test]
    fn test_canonical_names_classify_to_themselves() {
        for sub in DreSubgroup::EXPENSES {
            assert_eq!(classify(EntryKind::Expense, sub.canonical_name()), sub);
        }
    }

    #[test]
    fn test_normalized_utilities_name_still_matches() {
        let name = normalize_name("energia").unwrap();
        assert_eq!(classify(EntryKind::Expense, &name), DreSubgroup::Utilities);
    }
}
