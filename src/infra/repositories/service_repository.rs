//! Service repository - queries over the catalog table.

use async_trait::async_trait;
use sea_orm::{ActiveValue::Set, DatabaseConnection, EntityTrait};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

use super::entities::service;
use crate::domain::{NewService, Service};
use crate::errors::AppResult;

/// Access to the service catalog.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ServiceRepository: Send + Sync {
    /// List the full catalog.
    async fn list(&self) -> AppResult<Vec<Service>>;

    /// Check whether the catalog contains any service at all.
    async fn any_exist(&self) -> AppResult<bool>;

    /// Bulk-insert catalog entries (used by the startup seeder).
    async fn insert_many(&self, services: Vec<NewService>) -> AppResult<()>;
}

/// SeaORM-backed implementation of [`ServiceRepository`].
pub struct ServiceStore {
    db: DatabaseConnection,
}

impl ServiceStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ServiceRepository for ServiceStore {
    async fn list(&self) -> AppResult<Vec<Service>> {
        let models = service::Entity::find().all(&self.db).await?;
        Ok(models.into_iter().map(Service::from).collect())
    }

    async fn any_exist(&self) -> AppResult<bool> {
        let first = service::Entity::find().one(&self.db).await?;
        Ok(first.is_some())
    }

    async fn insert_many(&self, services: Vec<NewService>) -> AppResult<()> {
        if services.is_empty() {
            return Ok(());
        }

        let models: Vec<service::ActiveModel> = services
            .into_iter()
            .map(|s| service::ActiveModel {
                name: Set(s.name),
                description: Set(s.description),
                ..Default::default()
            })
            .collect();

        service::Entity::insert_many(models).exec(&self.db).await?;
        Ok(())
    }
}
