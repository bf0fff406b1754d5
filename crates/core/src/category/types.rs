//! Category records and management inputs.

use fluxo_shared::types::{CategoryId, UserId};
use serde::{Deserialize, Serialize};

use super::classifier::classify;
use super::error::CategoryError;
use super::normalize::normalize_name;
use super::taxonomy::{DreGroup, DreSubgroup};
use crate::entry::EntryKind;

/// A stored category with its resolved DRE tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Identifier.
    pub id: CategoryId,
    /// Owning user.
    pub owner_id: UserId,
    /// Income or expense.
    pub kind: EntryKind,
    /// Normalized name.
    pub name: String,
    /// Inactive categories are kept for history.
    pub active: bool,
    /// Statement section.
    pub dre_group: DreGroup,
    /// Statement line.
    pub dre_subgroup: DreSubgroup,
}

/// Input for creating a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    /// Owning user.
    pub owner_id: UserId,
    /// Income or expense.
    pub kind: EntryKind,
    /// Raw name, normalized on create.
    pub name: String,
    /// Explicit subgroup; the classifier decides when absent.
    #[serde(default)]
    pub dre_subgroup: Option<DreSubgroup>,
}

/// Partial update of a category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryUpdate {
    /// New raw name.
    pub name: Option<String>,
    /// New active flag.
    pub active: Option<bool>,
    /// Explicit subgroup.
    pub dre_subgroup: Option<DreSubgroup>,
}

/// Listing filter for categories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryFilter {
    /// Only this kind.
    pub kind: Option<EntryKind>,
    /// Only active or only inactive.
    pub active: Option<bool>,
}

impl CategoryFilter {
    /// Returns true if the category passes the filter.
    #[must_use]
    pub fn matches(&self, category: &Category) -> bool {
        self.kind.is_none_or(|k| category.kind == k)
            && self.active.is_none_or(|a| category.active == a)
    }
}

/// Outcome of removing a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryRemoval {
    /// No entry referenced it; the row is gone.
    Deleted,
    /// Entries reference it; it was marked inactive.
    Deactivated,
}

/// Normalized name plus resolved tags, ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCategory {
    /// Normalized name.
    pub name: String,
    /// Statement section.
    pub dre_group: DreGroup,
    /// Statement line.
    pub dre_subgroup: DreSubgroup,
}

/// Normalizes the name and resolves the DRE tags of a category.
///
/// # Errors
///
/// Returns `EmptyName` for a blank name and `IncompatibleSubgroup` when the
/// explicit subgroup does not fit the kind.
pub fn resolve_category(
    kind: EntryKind,
    raw_name: &str,
    subgroup: Option<DreSubgroup>,
) -> Result<ResolvedCategory, CategoryError> {
    let name = normalize_name(raw_name).ok_or(CategoryError::EmptyName)?;
    let dre_subgroup = match subgroup {
        Some(sub) if !sub.allowed_for(kind) => {
            return Err(CategoryError::IncompatibleSubgroup { subgroup: sub, kind });
        }
        Some(sub) => sub,
        None => classify(kind, &name),
    };
    Ok(ResolvedCategory {
        name,
        dre_group: dre_subgroup.group(),
        dre_subgroup,
    })
}

/// Income category names seeded for every owner.
pub const DEFAULT_INCOME_CATEGORIES: [&str; 2] = ["Vendas", "Prestação De Serviços"];

/// The default categories: every expense line of the taxonomy plus the income
/// defaults, as `(kind, name, subgroup)`.
#[must_use]
pub fn default_categories() -> Vec<(EntryKind, &'static str, DreSubgroup)> {
    DEFAULT_INCOME_CATEGORIES
        .iter()
        .map(|name| (EntryKind::Income, *name, DreSubgroup::Revenue))
        .chain(
            DreSubgroup::EXPENSES
                .iter()
                .map(|sub| (EntryKind::Expense, sub.canonical_name(), *sub)),
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_classifies_normalized_name() {
        let resolved = resolve_category(EntryKind::Expense, "  juros   bancários", None).unwrap();
        assert_eq!(resolved.name, "Juros Bancários");
        assert_eq!(resolved.dre_subgroup, DreSubgroup::InterestAndFees);
        assert_eq!(resolved.dre_group, DreGroup::FinancialExpenses);
    }

    #[test]
    fn test_resolve_with_override() {
        let resolved =
            resolve_category(EntryKind::Expense, "Aluguel", Some(DreSubgroup::WorkshopExpenses))
                .unwrap();
        assert_eq!(resolved.dre_subgroup, DreSubgroup::WorkshopExpenses);
        assert_eq!(resolved.dre_group, DreGroup::OperatingExpenses);
    }

    #[test]
    fn test_resolve_rejects_incompatible_override() {
        let err = resolve_category(EntryKind::Income, "Vendas", Some(DreSubgroup::Taxes));
        assert!(matches!(
            err,
            Err(CategoryError::IncompatibleSubgroup { .. })
        ));
        let err = resolve_category(EntryKind::Expense, "Frete", Some(DreSubgroup::Revenue));
        assert!(err.is_err());
    }

    #[test]
    fn test_resolve_rejects_blank_name() {
        assert!(matches!(
            resolve_category(EntryKind::Expense, "   ", None),
            Err(CategoryError::EmptyName)
        ));
    }

    #[test]
    fn test_default_categories_cover_every_line() {
        let defaults = default_categories();
        assert_eq!(defaults.len(), 17);
        for (kind, name, sub) in defaults {
            let resolved = resolve_category(kind, name, None).unwrap();
            assert_eq!(resolved.name, name);
            assert_eq!(resolved.dre_subgroup, sub);
        }
    }

    #[test]
    fn test_filter() {
        let category = Category {
            id: CategoryId::new(1),
            owner_id: UserId::new(1),
            kind: EntryKind::Expense,
            name: "Frete".to_string(),
            active: false,
            dre_group: DreGroup::CostOfServices,
            dre_subgroup: DreSubgroup::Freight,
        };
        assert!(CategoryFilter::default().matches(&category));
        assert!(
            !CategoryFilter {
                active: Some(true),
                ..CategoryFilter::default()
            }
            .matches(&category)
        );
        assert!(
            !CategoryFilter {
                kind: Some(EntryKind::Income),
                active: None,
            }
            .matches(&category)
        );
    }
}
