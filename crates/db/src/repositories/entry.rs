//! Income and expense entry repository.

use fluxo_core::entry::{
    EntryError, EntryFilter, EntryUpdate, FinancialEntry, NewEntry, PeriodSummary,
    validate_new_entry, validate_update,
};
use fluxo_shared::{
    AppError,
    types::{Amount, DateRange, EntryId, PageRequest, PageResponse, UserId},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Select, Set,
    sea_query::{Expr, Func},
};
use tracing::{debug, info};

use crate::entities::{
    financial_entries,
    sea_orm_active_enums::{EntryKind as DbEntryKind, EntryStatus as DbEntryStatus},
    users,
};

/// Error types for entry storage.
#[derive(Debug, thiserror::Error)]
pub enum EntryRepoError {
    /// Domain rule violated.
    #[error(transparent)]
    Entry(#[from] EntryError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<EntryRepoError> for AppError {
    fn from(err: EntryRepoError) -> Self {
        match err {
            EntryRepoError::Entry(e) => e.into(),
            EntryRepoError::Database(e) => Self::Database(e.to_string()),
        }
    }
}

/// Escapes `LIKE` wildcards so user text matches literally.
#[must_use]
pub fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn contains_pattern(text: &str) -> String {
    format!("%{}%", escape_like(&text.to_lowercase()))
}

/// Builds the query for an owner's entries matching the filter, unordered.
pub(crate) fn filtered_query(
    owner_id: UserId,
    filter: &EntryFilter,
) -> Select<financial_entries::Entity> {
    let mut query = financial_entries::Entity::find()
        .filter(financial_entries::Column::OwnerId.eq(owner_id.into_inner()))
        .filter(financial_entries::Column::Kind.eq(DbEntryKind::from(filter.kind)));

    if let Some(status) = filter.status {
        query = query.filter(financial_entries::Column::Status.eq(DbEntryStatus::from(status)));
    }
    if let Some(from) = filter.date_from {
        query = query.filter(financial_entries::Column::EntryDate.gte(from));
    }
    if let Some(to) = filter.date_to {
        query = query.filter(financial_entries::Column::EntryDate.lte(to));
    }
    if let Some(category) = &filter.category {
        query = query.filter(
            Expr::expr(Func::lower(Expr::col(financial_entries::Column::Category)))
                .like(contains_pattern(category)),
        );
    }
    if let Some(search) = &filter.search {
        query = query.filter(
            Expr::expr(Func::lower(Expr::col(financial_entries::Column::Description)))
                .like(contains_pattern(search)),
        );
    }
    query
}

/// Converts a stored row into a domain entry.
///
/// # Errors
///
/// Returns `InvalidAmount` if the stored amount violates the amount rules.
pub fn entry_from_model(model: financial_entries::Model) -> Result<FinancialEntry, EntryError> {
    Ok(FinancialEntry {
        id: EntryId::new(model.id),
        owner_id: UserId::new(model.owner_id),
        kind: model.kind.into(),
        description: model.description,
        category: model.category,
        amount: Amount::new(model.amount)?,
        date: model.entry_date,
        status: model.status.into(),
        notes: model.notes,
    })
}

fn entries_from_models(
    models: Vec<financial_entries::Model>,
) -> Result<Vec<FinancialEntry>, EntryRepoError> {
    models
        .into_iter()
        .map(|m| entry_from_model(m).map_err(EntryRepoError::from))
        .collect()
}

/// Entry repository.
#[derive(Debug, Clone)]
pub struct EntryRepository {
    db: DatabaseConnection,
}

impl EntryRepository {
    /// Creates a new entry repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find_model(&self, id: EntryId) -> Result<financial_entries::Model, EntryRepoError> {
        financial_entries::Entity::find_by_id(id.into_inner())
            .one(&self.db)
            .await?
            .ok_or_else(|| EntryError::NotFound(id).into())
    }

    /// Gets an entry by ID.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the entry does not exist.
    pub async fn get(&self, id: EntryId) -> Result<FinancialEntry, EntryRepoError> {
        Ok(entry_from_model(self.find_model(id).await?)?)
    }

    /// Validates and stores a new entry.
    ///
    /// # Errors
    ///
    /// Returns a validation error, `OwnerNotFound`, or a database error.
    pub async fn create(&self, input: NewEntry) -> Result<FinancialEntry, EntryRepoError> {
        let valid = validate_new_entry(&input)?;

        let owners = users::Entity::find_by_id(input.owner_id.into_inner())
            .count(&self.db)
            .await?;
        if owners == 0 {
            return Err(EntryError::OwnerNotFound(input.owner_id).into());
        }

        let now = chrono::Utc::now().into();
        let model = financial_entries::ActiveModel {
            owner_id: Set(input.owner_id.into_inner()),
            kind: Set(input.kind.into()),
            description: Set(valid.description),
            category: Set(valid.category),
            amount: Set(valid.amount.value()),
            entry_date: Set(input.date),
            status: Set(input.status.into()),
            notes: Set(valid.notes),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        info!(
            entry_id = model.id,
            owner_id = %input.owner_id,
            kind = %input.kind,
            amount = %model.amount,
            "Entry created"
        );
        Ok(entry_from_model(model)?)
    }

    /// Applies a partial update to an entry.
    ///
    /// # Errors
    ///
    /// Returns `NotFound`, a validation error, or a database error.
    pub async fn update(
        &self,
        id: EntryId,
        update: EntryUpdate,
    ) -> Result<FinancialEntry, EntryRepoError> {
        let update = validate_update(update)?;
        let existing = self.find_model(id).await?;
        if update.is_empty() {
            return Ok(entry_from_model(existing)?);
        }

        let mut model: financial_entries::ActiveModel = existing.into();
        if let Some(description) = update.description {
            model.description = Set(description);
        }
        if let Some(category) = update.category {
            model.category = Set(category);
        }
        if let Some(amount) = update.amount {
            model.amount = Set(amount);
        }
        if let Some(date) = update.date {
            model.entry_date = Set(date);
        }
        if let Some(status) = update.status {
            model.status = Set(status.into());
        }
        if let Some(notes) = update.notes {
            model.notes = Set(notes);
        }
        model.updated_at = Set(chrono::Utc::now().into());

        let model = model.update(&self.db).await?;
        debug!(entry_id = model.id, "Entry updated");
        Ok(entry_from_model(model)?)
    }

    /// Deletes an entry.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the entry does not exist.
    pub async fn delete(&self, id: EntryId) -> Result<(), EntryRepoError> {
        let result = financial_entries::Entity::delete_by_id(id.into_inner())
            .exec(&self.db)
            .await?;
        if result.rows_affected == 0 {
            return Err(EntryError::NotFound(id).into());
        }
        info!(entry_id = %id, "Entry deleted");
        Ok(())
    }

    /// Lists one page of an owner's entries, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(
        &self,
        owner_id: UserId,
        filter: &EntryFilter,
        page: PageRequest,
    ) -> Result<PageResponse<FinancialEntry>, EntryRepoError> {
        let query = filtered_query(owner_id, filter);
        let total = query.clone().count(&self.db).await?;

        let models = query
            .order_by_desc(financial_entries::Column::EntryDate)
            .order_by_desc(financial_entries::Column::Id)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await?;

        debug!(owner_id = %owner_id, total, returned = models.len(), "Entries listed");
        Ok(PageResponse::new(
            entries_from_models(models)?,
            page.page,
            page.per_page,
            total,
        ))
    }

    /// Summarizes an owner's entries of both kinds by status.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn summarize(
        &self,
        owner_id: UserId,
        period: DateRange,
    ) -> Result<PeriodSummary, EntryRepoError> {
        let models = financial_entries::Entity::find()
            .filter(financial_entries::Column::OwnerId.eq(owner_id.into_inner()))
            .filter(financial_entries::Column::EntryDate.between(period.start, period.end))
            .all(&self.db)
            .await?;
        Ok(PeriodSummary::from_entries(
            period,
            &entries_from_models(models)?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use fluxo_core::entry::{EntryKind, EntryStatus};
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case("frete", "frete")]
    #[case("50%", "50\\%")]
    #[case("a_b", "a\\_b")]
    #[case("c:\\x", "c:\\\\x")]
    fn test_escape_like(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(escape_like(raw), expected);
    }

    #[test]
    fn test_contains_pattern_lowercases() {
        assert_eq!(contains_pattern("Serviços"), "%serviços%");
    }

    #[test]
    fn test_entry_from_model() {
        let now = chrono::Utc::now().into();
        let model = financial_entries::Model {
            id: 42,
            owner_id: 7,
            kind: DbEntryKind::Expense,
            description: "Conta de luz".to_string(),
            category: "Energia".to_string(),
            amount: dec!(189.90),
            entry_date: NaiveDate::from_ymd_opt(2024, 3, 8).unwrap(),
            status: DbEntryStatus::Paid,
            notes: None,
            created_at: now,
            updated_at: now,
        };
        let entry = entry_from_model(model).unwrap();
        assert_eq!(entry.id, EntryId::new(42));
        assert_eq!(entry.owner_id, UserId::new(7));
        assert_eq!(entry.kind, EntryKind::Expense);
        assert_eq!(entry.status, EntryStatus::Paid);
        assert_eq!(entry.amount.value(), dec!(189.90));
    }
}
