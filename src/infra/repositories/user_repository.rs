//! User repository implementation over Postgres.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set, SqlErr,
};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::domain::User;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User store trait for dependency injection.
///
/// The registration use case needs exactly two operations: lookup by
/// email and save. Any backing engine (relational, in-memory for tests)
/// can implement it.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by exact email match (no case folding)
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Persist a fully-formed user (id already assigned) and return the
    /// stored representation, which is authoritative.
    ///
    /// A write that violates email uniqueness fails with
    /// `AppError::DuplicateEmail`.
    async fn save(&self, user: User) -> AppResult<User>;
}

/// Concrete implementation of UserRepository backed by SeaORM
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn save(&self, user: User) -> AppResult<User> {
        let active_model = ActiveModel {
            id: Set(user.id),
            first_name: Set(user.first_name),
            last_name: Set(user.last_name),
            birth_date: Set(user.birth_date),
            address: Set(user.address),
            phone: Set(user.phone),
            email: Set(user.email),
            base_salary: Set(user.base_salary),
        };

        match active_model.insert(&self.db).await {
            Ok(model) => Ok(User::from(model)),
            // A write-time uniqueness violation is the same failure mode as
            // the duplicate pre-check
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Err(AppError::DuplicateEmail)
            }
            Err(err) => Err(AppError::from(err)),
        }
    }
}
