//! Database-backed entry source for the DRE engine.
//!
//! Paid entries are read with the same filter the listing uses, then
//! left-joined in memory with the owner's category records by name.

use std::collections::HashMap;

use async_trait::async_trait;
use fluxo_core::category::{DreGroup, DreSubgroup, fold_for_match};
use fluxo_core::entry::{EntryFilter, EntryKind};
use fluxo_core::reports::{EntrySource, PaidEntryRow, ReportError};
use fluxo_shared::types::{DateRange, UserId};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};
use tracing::{debug, warn};

use super::entry::filtered_query;
use crate::entities::{
    categories, financial_entries, sea_orm_active_enums::EntryKind as DbEntryKind, users,
};

type Tags = (Option<DreGroup>, Option<DreSubgroup>);

/// Parses stored tags, dropping codes outside the taxonomy.
fn parse_tags(model: &categories::Model) -> Tags {
    let group = model.dre_group.parse().ok();
    let subgroup = model.dre_subgroup.parse().ok();
    if subgroup.is_none() {
        warn!(
            category_id = model.id,
            dre_subgroup = %model.dre_subgroup,
            "Unknown stored DRE subgroup, treating as unclassified"
        );
    }
    (group, subgroup)
}

/// Joins paid entries with category tags keyed by folded name.
#[must_use]
pub fn join_rows(
    entries: Vec<financial_entries::Model>,
    tags: &HashMap<String, Tags>,
) -> Vec<PaidEntryRow> {
    entries
        .into_iter()
        .map(|entry| {
            let (dre_group, dre_subgroup) = tags
                .get(&fold_for_match(&entry.category))
                .copied()
                .unwrap_or((None, None));
            PaidEntryRow {
                amount: entry.amount,
                date: entry.entry_date,
                category_name: Some(entry.category).filter(|c| !c.trim().is_empty()),
                dre_group,
                dre_subgroup,
            }
        })
        .collect()
}

/// Report repository.
#[derive(Debug, Clone)]
pub struct ReportRepository {
    db: DatabaseConnection,
}

impl ReportRepository {
    /// Creates a new report repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn category_tags(
        &self,
        owner_id: UserId,
        kind: EntryKind,
    ) -> Result<HashMap<String, Tags>, ReportError> {
        let models = categories::Entity::find()
            .filter(categories::Column::OwnerId.eq(owner_id.into_inner()))
            .filter(categories::Column::Kind.eq(DbEntryKind::from(kind)))
            .order_by_asc(categories::Column::Id)
            .all(&self.db)
            .await
            .map_err(ReportError::store)?;

        let mut tags = HashMap::with_capacity(models.len());
        for model in &models {
            tags.entry(fold_for_match(&model.name))
                .or_insert_with(|| parse_tags(model));
        }
        Ok(tags)
    }
}

#[async_trait]
impl EntrySource for ReportRepository {
    async fn owner_exists(&self, owner_id: UserId) -> Result<bool, ReportError> {
        let count = users::Entity::find_by_id(owner_id.into_inner())
            .count(&self.db)
            .await
            .map_err(ReportError::store)?;
        Ok(count > 0)
    }

    async fn list_paid_entries(
        &self,
        owner_id: UserId,
        kind: EntryKind,
        range: DateRange,
    ) -> Result<Vec<PaidEntryRow>, ReportError> {
        let filter = EntryFilter::paid_within(kind, range);
        let entries = filtered_query(owner_id, &filter)
            .order_by_asc(financial_entries::Column::EntryDate)
            .order_by_asc(financial_entries::Column::Id)
            .all(&self.db)
            .await
            .map_err(ReportError::store)?;
        let tags = self.category_tags(owner_id, kind).await?;

        debug!(
            owner_id = %owner_id,
            kind = %kind,
            period = %range,
            rows = entries.len(),
            categories = tags.len(),
            "Paid entries loaded"
        );
        Ok(join_rows(entries, &tags))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::sea_orm_active_enums::EntryStatus as DbEntryStatus;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn entry(id: i64, category: &str) -> financial_entries::Model {
        let now = chrono::Utc::now().into();
        financial_entries::Model {
            id,
            owner_id: 1,
            kind: DbEntryKind::Expense,
            description: "x".to_string(),
            category: category.to_string(),
            amount: dec!(10.00),
            entry_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            status: DbEntryStatus::Paid,
            notes: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_join_rows_matches_by_folded_name() {
        let mut tags = HashMap::new();
        tags.insert(
            "fornecedores".to_string(),
            (Some(DreGroup::CostOfServices), Some(DreSubgroup::Suppliers)),
        );

        let entries = vec![entry(1, "Fornecedores"), entry(2, "Aluguel"), entry(3, " ")];
        let rows = join_rows(entries, &tags);

        assert_eq!(rows[0].dre_subgroup, Some(DreSubgroup::Suppliers));
        assert_eq!(rows[0].category_name.as_deref(), Some("Fornecedores"));
        assert_eq!(rows[1].dre_subgroup, None);
        assert_eq!(rows[1].expense_subgroup(), DreSubgroup::Unclassified);
        assert_eq!(rows[2].category_name, None);
    }
}
