//! Registration repository - joined reads over the user_services table.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

use super::entities::{service, user_service};
use crate::domain::RegisteredService;
use crate::errors::AppResult;

/// Read access to user/service associations.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait RegistrationRepository: Send + Sync {
    /// List a user's associations with the service rows explicitly joined.
    async fn list_for_user(&self, user_id: i32) -> AppResult<Vec<RegisteredService>>;
}

/// SeaORM-backed implementation of [`RegistrationRepository`].
pub struct RegistrationStore {
    db: DatabaseConnection,
}

impl RegistrationStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RegistrationRepository for RegistrationStore {
    async fn list_for_user(&self, user_id: i32) -> AppResult<Vec<RegisteredService>> {
        let rows = user_service::Entity::find()
            .filter(user_service::Column::UserId.eq(user_id))
            .find_also_related(service::Entity)
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(link, svc)| {
                svc.map(|s| RegisteredService {
                    service_id: s.id,
                    service_name: s.name,
                    description: s.description,
                    additional_info: link.additional_info,
                })
            })
            .collect())
    }
}
