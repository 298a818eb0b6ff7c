//! Service Container - Centralized service access.
//!
//! Owns the concrete service instances and hands out trait objects so
//! the API layer depends on abstractions only.

use std::sync::Arc;

use super::{Catalog, CatalogService, Registrar, RegistrationService};
use crate::infra::{CatalogCache, Persistence};

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    /// Get registration service
    fn registrations(&self) -> Arc<dyn RegistrationService>;

    /// Get catalog service
    fn catalog(&self) -> Arc<dyn CatalogService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    registration_service: Arc<dyn RegistrationService>,
    catalog_service: Arc<dyn CatalogService>,
}

impl Services {
    /// Create a new service container with manually injected services
    pub fn new(
        registration_service: Arc<dyn RegistrationService>,
        catalog_service: Arc<dyn CatalogService>,
    ) -> Self {
        Self {
            registration_service,
            catalog_service,
        }
    }

    /// Create service container from a database connection and the
    /// catalog cache
    pub fn from_connection(db: sea_orm::DatabaseConnection, cache: Arc<CatalogCache>) -> Self {
        let uow = Arc::new(Persistence::new(db));
        let registration_service = Arc::new(Registrar::new(uow.clone()));
        let catalog_service = Arc::new(Catalog::new(uow, cache));

        Self {
            registration_service,
            catalog_service,
        }
    }
}

impl ServiceContainer for Services {
    fn registrations(&self) -> Arc<dyn RegistrationService> {
        self.registration_service.clone()
    }

    fn catalog(&self) -> Arc<dyn CatalogService> {
        self.catalog_service.clone()
    }
}
