//! User repository - lookups over the users table.

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

use super::entities::user;
use crate::domain::User;
use crate::errors::AppResult;

/// Read access to stored users.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by primary key.
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>>;
}

/// SeaORM-backed implementation of [`UserRepository`].
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>> {
        let found = user::Entity::find_by_id(id).one(&self.db).await?;
        Ok(found.map(User::from))
    }
}
