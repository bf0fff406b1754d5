//! Owner repository.

use fluxo_shared::{AppError, types::UserId};
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, Set,
    sea_query::{Expr, Func},
};

use crate::entities::users;

/// Error types for owner operations.
#[derive(Debug, thiserror::Error)]
pub enum UserError {
    /// Email already registered.
    #[error("Email already registered: {0}")]
    DuplicateEmail(String),

    /// Blank name or email.
    #[error("{0} cannot be empty")]
    MissingField(&'static str),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::DuplicateEmail(_) => Self::Conflict(err.to_string()),
            UserError::MissingField(_) => Self::Validation(err.to_string()),
            UserError::Database(e) => Self::Database(e.to_string()),
        }
    }
}

/// Normalizes an email for storage and lookup.
#[must_use]
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Owner repository.
#[derive(Debug, Clone)]
pub struct UserRepository {
    db: DatabaseConnection,
}

impl UserRepository {
    /// Creates a new user repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds an owner by email, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<users::Model>, DbErr> {
        users::Entity::find()
            .filter(Expr::expr(Func::lower(Expr::col(users::Column::Email))).eq(normalize_email(email)))
            .one(&self.db)
            .await
    }

    /// Finds an owner by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: UserId) -> Result<Option<users::Model>, DbErr> {
        users::Entity::find_by_id(id.into_inner()).one(&self.db).await
    }

    /// Returns true if the owner exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn exists(&self, id: UserId) -> Result<bool, DbErr> {
        let count = users::Entity::find_by_id(id.into_inner())
            .count(&self.db)
            .await?;
        Ok(count > 0)
    }

    /// Creates an owner. The password hash is stored as given.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateEmail` if the email is taken, `MissingField` for a
    /// blank name or email, or a database error.
    pub async fn create(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
    ) -> Result<users::Model, UserError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(UserError::MissingField("Name"));
        }
        let email = normalize_email(email);
        if email.is_empty() {
            return Err(UserError::MissingField("Email"));
        }
        if self.find_by_email(&email).await?.is_some() {
            return Err(UserError::DuplicateEmail(email));
        }

        let now = chrono::Utc::now().into();
        let user = users::ActiveModel {
            name: Set(name.to_string()),
            email: Set(email.clone()),
            password_hash: Set(password_hash.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        user.insert(&self.db).await.map_err(|e| match e.sql_err() {
            Some(sea_orm::SqlErr::UniqueConstraintViolation(_)) => UserError::DuplicateEmail(email),
            _ => UserError::Database(e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  Ana@Oficina.COM "), "ana@oficina.com");
    }

    #[test]
    fn test_error_mapping() {
        let app: AppError = UserError::DuplicateEmail("a@b.c".into()).into();
        assert_eq!(app.exit_code(), 73);
        let app: AppError = UserError::MissingField("Name").into();
        assert_eq!(app.error_code(), "VALIDATION_ERROR");
    }
}
