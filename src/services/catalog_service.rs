//! Catalog service - cached listing of the available services.

use async_trait::async_trait;
use std::sync::Arc;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

use crate::domain::Service;
use crate::errors::AppResult;
use crate::infra::{CatalogCache, UnitOfWork};

/// Catalog use cases.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// List all available services, served from the cache when fresh.
    async fn list_services(&self) -> AppResult<Vec<Service>>;
}

/// Concrete implementation of [`CatalogService`].
///
/// Reads go through the injected [`CatalogCache`]; a miss loads the
/// full catalog from the store and repopulates the cache.
pub struct Catalog<U: UnitOfWork> {
    uow: Arc<U>,
    cache: Arc<CatalogCache>,
}

impl<U: UnitOfWork> Catalog<U> {
    pub fn new(uow: Arc<U>, cache: Arc<CatalogCache>) -> Self {
        Self { uow, cache }
    }
}

#[async_trait]
impl<U: UnitOfWork> CatalogService for Catalog<U> {
    async fn list_services(&self) -> AppResult<Vec<Service>> {
        if let Some(services) = self.cache.get().await {
            tracing::debug!("Service catalog served from cache");
            return Ok(services);
        }

        let services = self.uow.services().list().await?;
        self.cache.store(services.clone()).await;
        tracing::debug!(count = services.len(), "Service catalog loaded and cached");

        Ok(services)
    }
}
