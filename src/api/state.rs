//! Application state - Dependency injection container.
//!
//! Provides centralized access to the application services and
//! infrastructure from request handlers.

use std::sync::Arc;

use crate::infra::{CatalogCache, Database};
use crate::services::{CatalogService, RegistrationService, ServiceContainer, Services};

/// Application state shared across request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Registration service
    pub registration_service: Arc<dyn RegistrationService>,
    /// Catalog service
    pub catalog_service: Arc<dyn CatalogService>,
    /// Database connection
    pub database: Arc<Database>,
}

impl AppState {
    /// Create application state from the database connection and the
    /// catalog cache.
    ///
    /// This is the recommended way to create AppState as it wires the
    /// service container and Unit of Work.
    pub fn from_config(database: Arc<Database>, cache: Arc<CatalogCache>) -> Self {
        let container = Services::from_connection(database.get_connection(), cache);

        Self {
            registration_service: container.registrations(),
            catalog_service: container.catalog(),
            database,
        }
    }

    /// Create new application state with manually injected services.
    pub fn new(
        registration_service: Arc<dyn RegistrationService>,
        catalog_service: Arc<dyn CatalogService>,
        database: Arc<Database>,
    ) -> Self {
        Self {
            registration_service,
            catalog_service,
            database,
        }
    }
}
