//! Category repository.
//!
//! Names are normalized and tagged on create and rename; the stored tags are
//! what the report engine groups by.

use fluxo_core::category::{
    Category, CategoryError, CategoryFilter, CategoryRemoval, CategoryUpdate, NewCategory,
    default_categories, resolve_category,
};
use fluxo_core::entry::EntryKind;
use fluxo_shared::{
    AppError,
    types::{CategoryId, UserId},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set, TransactionTrait,
    sea_query::{Expr, Func},
};
use tracing::{debug, info};

use crate::entities::{
    categories, financial_entries, sea_orm_active_enums::EntryKind as DbEntryKind, users,
};

/// Error types for category storage.
#[derive(Debug, thiserror::Error)]
pub enum CategoryRepoError {
    /// Domain rule violated.
    #[error(transparent)]
    Category(#[from] CategoryError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<CategoryRepoError> for AppError {
    fn from(err: CategoryRepoError) -> Self {
        match err {
            CategoryRepoError::Category(e) => e.into(),
            CategoryRepoError::Database(e) => Self::Database(e.to_string()),
        }
    }
}

/// Converts a stored row into a domain category.
///
/// # Errors
///
/// Returns `UnknownTag` when a stored tag is not part of the taxonomy.
pub fn category_from_model(model: categories::Model) -> Result<Category, CategoryError> {
    Ok(Category {
        id: CategoryId::new(model.id),
        owner_id: UserId::new(model.owner_id),
        kind: model.kind.into(),
        dre_group: model.dre_group.parse()?,
        dre_subgroup: model.dre_subgroup.parse()?,
        name: model.name,
        active: model.active,
    })
}

/// Category repository.
#[derive(Debug, Clone)]
pub struct CategoryRepository {
    db: DatabaseConnection,
}

impl CategoryRepository {
    /// Creates a new category repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn ensure_owner(&self, owner_id: UserId) -> Result<(), CategoryRepoError> {
        let count = users::Entity::find_by_id(owner_id.into_inner())
            .count(&self.db)
            .await?;
        if count == 0 {
            return Err(CategoryError::OwnerNotFound(owner_id).into());
        }
        Ok(())
    }

    async fn find_model_by_name(
        &self,
        owner_id: UserId,
        kind: EntryKind,
        name: &str,
    ) -> Result<Option<categories::Model>, DbErr> {
        categories::Entity::find()
            .filter(categories::Column::OwnerId.eq(owner_id.into_inner()))
            .filter(categories::Column::Kind.eq(DbEntryKind::from(kind)))
            .filter(
                Expr::expr(Func::lower(Expr::col(categories::Column::Name)))
                    .eq(name.to_lowercase()),
            )
            .one(&self.db)
            .await
    }

    /// Finds a category by ID.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the category does not exist.
    pub async fn find_by_id(&self, id: CategoryId) -> Result<Category, CategoryRepoError> {
        let model = categories::Entity::find_by_id(id.into_inner())
            .one(&self.db)
            .await?
            .ok_or(CategoryError::NotFound(id))?;
        Ok(category_from_model(model)?)
    }

    /// Creates a category, classifying its name unless a subgroup is given.
    ///
    /// # Errors
    ///
    /// Returns `OwnerNotFound`, `EmptyName`, `IncompatibleSubgroup`, or
    /// `Duplicate` when the owner already has a category of that kind and name.
    pub async fn create(&self, input: NewCategory) -> Result<Category, CategoryRepoError> {
        self.ensure_owner(input.owner_id).await?;
        let resolved = resolve_category(input.kind, &input.name, input.dre_subgroup)?;

        if self
            .find_model_by_name(input.owner_id, input.kind, &resolved.name)
            .await?
            .is_some()
        {
            return Err(CategoryError::Duplicate {
                kind: input.kind,
                name: resolved.name,
            }
            .into());
        }

        let now = chrono::Utc::now().into();
        let model = categories::ActiveModel {
            owner_id: Set(input.owner_id.into_inner()),
            kind: Set(input.kind.into()),
            name: Set(resolved.name.clone()),
            active: Set(true),
            dre_group: Set(resolved.dre_group.as_str().to_string()),
            dre_subgroup: Set(resolved.dre_subgroup.as_str().to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let model = model.insert(&self.db).await.map_err(|e| match e.sql_err() {
            Some(sea_orm::SqlErr::UniqueConstraintViolation(_)) => {
                CategoryRepoError::Category(CategoryError::Duplicate {
                    kind: input.kind,
                    name: resolved.name.clone(),
                })
            }
            _ => CategoryRepoError::Database(e),
        })?;

        info!(
            owner_id = %input.owner_id,
            category = %model.name,
            subgroup = %model.dre_subgroup,
            "Category created"
        );
        Ok(category_from_model(model)?)
    }

    /// Lists an owner's categories ordered by name.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(
        &self,
        owner_id: UserId,
        filter: CategoryFilter,
    ) -> Result<Vec<Category>, CategoryRepoError> {
        let mut query = categories::Entity::find()
            .filter(categories::Column::OwnerId.eq(owner_id.into_inner()));
        if let Some(kind) = filter.kind {
            query = query.filter(categories::Column::Kind.eq(DbEntryKind::from(kind)));
        }
        if let Some(active) = filter.active {
            query = query.filter(categories::Column::Active.eq(active));
        }

        let models = query
            .order_by_asc(categories::Column::Name)
            .order_by_asc(categories::Column::Id)
            .all(&self.db)
            .await?;

        models
            .into_iter()
            .map(|m| category_from_model(m).map_err(CategoryRepoError::from))
            .collect()
    }

    /// Updates a category. A rename is normalized, checked for uniqueness and
    /// reclassified unless an explicit subgroup is given.
    ///
    /// Entries store their category by name, so a rename also rewrites the
    /// matching entries of the same owner and kind in one transaction.
    ///
    /// # Errors
    ///
    /// Returns `NotFound`, `EmptyName`, `IncompatibleSubgroup` or `Duplicate`.
    pub async fn update(
        &self,
        id: CategoryId,
        update: CategoryUpdate,
    ) -> Result<Category, CategoryRepoError> {
        let existing = categories::Entity::find_by_id(id.into_inner())
            .one(&self.db)
            .await?
            .ok_or(CategoryError::NotFound(id))?;
        let current = category_from_model(existing.clone())?;

        let mut model: categories::ActiveModel = existing.into();
        let mut renamed_to = None;

        if update.name.is_some() || update.dre_subgroup.is_some() {
            let raw_name = update.name.as_deref().unwrap_or(&current.name);
            let subgroup = match (&update.name, update.dre_subgroup) {
                (_, Some(sub)) => Some(sub),
                (Some(_), None) => None,
                (None, None) => Some(current.dre_subgroup),
            };
            let resolved = resolve_category(current.kind, raw_name, subgroup)?;

            if resolved.name != current.name
                && let Some(other) = self
                    .find_model_by_name(current.owner_id, current.kind, &resolved.name)
                    .await?
                && other.id != id.into_inner()
            {
                return Err(CategoryError::Duplicate {
                    kind: current.kind,
                    name: resolved.name,
                }
                .into());
            }

            if resolved.name != current.name {
                renamed_to = Some(resolved.name.clone());
            }
            model.name = Set(resolved.name);
            model.dre_group = Set(resolved.dre_group.as_str().to_string());
            model.dre_subgroup = Set(resolved.dre_subgroup.as_str().to_string());
        }

        if let Some(active) = update.active {
            model.active = Set(active);
        }
        model.updated_at = Set(chrono::Utc::now().into());

        let txn = self.db.begin().await?;
        let model = model.update(&txn).await?;
        if let Some(new_name) = renamed_to {
            let result = financial_entries::Entity::update_many()
                .col_expr(financial_entries::Column::Category, Expr::value(new_name))
                .filter(financial_entries::Column::OwnerId.eq(current.owner_id.into_inner()))
                .filter(financial_entries::Column::Kind.eq(DbEntryKind::from(current.kind)))
                .filter(
                    Expr::expr(Func::lower(Expr::col(financial_entries::Column::Category)))
                        .eq(current.name.to_lowercase()),
                )
                .exec(&txn)
                .await?;
            info!(
                category_id = %id,
                entries = result.rows_affected,
                "Category renamed"
            );
        }
        txn.commit().await?;
        debug!(category_id = %id, subgroup = %model.dre_subgroup, "Category updated");
        Ok(category_from_model(model)?)
    }

    /// Deletes a category no entry references, otherwise deactivates it.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the category does not exist.
    pub async fn remove(&self, id: CategoryId) -> Result<CategoryRemoval, CategoryRepoError> {
        let existing = categories::Entity::find_by_id(id.into_inner())
            .one(&self.db)
            .await?
            .ok_or(CategoryError::NotFound(id))?;

        let references = financial_entries::Entity::find()
            .filter(financial_entries::Column::OwnerId.eq(existing.owner_id))
            .filter(financial_entries::Column::Kind.eq(existing.kind))
            .filter(
                Expr::expr(Func::lower(Expr::col(financial_entries::Column::Category)))
                    .eq(existing.name.to_lowercase()),
            )
            .count(&self.db)
            .await?;

        if references == 0 {
            categories::Entity::delete_by_id(existing.id)
                .exec(&self.db)
                .await?;
            info!(category_id = %id, "Category deleted");
            return Ok(CategoryRemoval::Deleted);
        }

        let mut model: categories::ActiveModel = existing.into();
        model.active = Set(false);
        model.updated_at = Set(chrono::Utc::now().into());
        model.update(&self.db).await?;
        info!(category_id = %id, references, "Category deactivated");
        Ok(CategoryRemoval::Deactivated)
    }

    /// Creates the default categories the owner does not have yet.
    ///
    /// Returns the categories created; running it again creates none.
    ///
    /// # Errors
    ///
    /// Returns `OwnerNotFound` or a database error.
    pub async fn ensure_defaults(
        &self,
        owner_id: UserId,
    ) -> Result<Vec<Category>, CategoryRepoError> {
        self.ensure_owner(owner_id).await?;
        let mut created = Vec::new();
        for (kind, name, subgroup) in default_categories() {
            if self.find_model_by_name(owner_id, kind, name).await?.is_some() {
                continue;
            }
            let category = self
                .create(NewCategory {
                    owner_id,
                    kind,
                    name: name.to_string(),
                    dre_subgroup: Some(subgroup),
                })
                .await?;
            created.push(category);
        }
        info!(owner_id = %owner_id, created = created.len(), "Default categories ensured");
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fluxo_core::category::{DreGroup, DreSubgroup};

    fn model(dre_group: &str, dre_subgroup: &str) -> categories::Model {
        let now = chrono::Utc::now().into();
        categories::Model {
            id: 3,
            owner_id: 1,
            kind: DbEntryKind::Expense,
            name: "Frete".to_string(),
            active: true,
            dre_group: dre_group.to_string(),
            dre_subgroup: dre_subgroup.to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_category_from_model() {
        let category = category_from_model(model("COST_OF_SERVICES", "FREIGHT")).unwrap();
        assert_eq!(category.id, CategoryId::new(3));
        assert_eq!(category.kind, EntryKind::Expense);
        assert_eq!(category.dre_group, DreGroup::CostOfServices);
        assert_eq!(category.dre_subgroup, DreSubgroup::Freight);
    }

    #[test]
    fn test_category_from_model_rejects_unknown_tag() {
        let err = category_from_model(model("COST_OF_SERVICES", "RENT")).unwrap_err();
        assert!(matches!(err, CategoryError::UnknownTag(tag) if tag == "RENT"));
    }

    #[test]
    fn test_error_mapping() {
        let err: AppError = CategoryRepoError::from(CategoryError::Duplicate {
            kind: EntryKind::Expense,
            name: "Frete".into(),
        })
        .into();
        assert_eq!(err.exit_code(), 73);
        let err: AppError = CategoryRepoError::from(DbErr::Custom("boom".into())).into();
        assert_eq!(err.error_code(), "DATABASE_ERROR");
    }
}
