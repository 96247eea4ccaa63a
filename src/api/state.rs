//! Application state - Dependency injection container.
//!
//! Provides centralized access to the registration service and
//! infrastructure.

use std::sync::Arc;

use crate::infra::{Database, UserStore};
use crate::services::{Registrar, RegistrationService};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Registration service
    pub registration_service: Arc<dyn RegistrationService>,
    /// Database connection
    pub database: Arc<Database>,
}

impl AppState {
    /// Create application state from a live database connection.
    ///
    /// Wires the registration service to the Postgres-backed user store.
    pub fn from_database(database: Arc<Database>) -> Self {
        let users = Arc::new(UserStore::new(database.get_connection()));
        let registration_service = Arc::new(Registrar::new(users));

        Self {
            registration_service,
            database,
        }
    }

    /// Create application state with a manually injected service.
    ///
    /// Used by tests to run the router against a stub store.
    pub fn new(registration_service: Arc<dyn RegistrationService>, database: Arc<Database>) -> Self {
        Self {
            registration_service,
            database,
        }
    }
}
