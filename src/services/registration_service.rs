//! Registration service - the user registration use case.
//!
//! Orchestrates validation, the duplicate-email check, id generation,
//! and delegation to the user store.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{validate, NewUser, User};
use crate::errors::{AppError, AppResult};
use crate::infra::UserRepository;

/// Registration service trait for dependency injection.
#[async_trait]
pub trait RegistrationService: Send + Sync {
    /// Register a new user, returning the stored record with its
    /// generated id.
    async fn register(&self, draft: NewUser) -> AppResult<User>;
}

/// Concrete implementation of RegistrationService backed by a user store.
pub struct Registrar {
    users: Arc<dyn UserRepository>,
}

impl Registrar {
    /// Create new registration service instance with its store
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl RegistrationService for Registrar {
    async fn register(&self, draft: NewUser) -> AppResult<User> {
        tracing::trace!(email = ?draft.email, "start register user");

        // Fail fast: no store access on an invalid draft
        validate(&draft)?;

        let user = User::from_draft(draft);

        // The pre-check is advisory. Two concurrent registrations can both
        // pass it; the unique constraint on users.email settles the race,
        // and the store surfaces the losing insert as DuplicateEmail.
        if self.users.find_by_email(&user.email).await?.is_some() {
            tracing::warn!(email = %user.email, "attempt to register already existing email");
            return Err(AppError::DuplicateEmail);
        }

        let saved = self.users.save(user).await?;
        tracing::info!(id = %saved.id, email = %saved.email, "user created");
        Ok(saved)
    }
}
