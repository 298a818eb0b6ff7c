//! Unit of Work pattern implementation.
//!
//! Centralizes repository access and manages transaction lifecycle
//! (begin, commit, rollback). Multi-row writes - inserting a user with
//! its service associations, or replacing an association set - go
//! through [`UnitOfWork::transaction`] so either the full sequence
//! becomes visible or none of it does.

use async_trait::async_trait;
use sea_orm::{
    AccessMode, ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection,
    DatabaseTransaction, EntityTrait, IsolationLevel, QueryFilter, TransactionTrait,
};
use std::sync::Arc;

use super::repositories::entities::{service, user, user_service};
use super::repositories::{
    RegistrationRepository, RegistrationStore, ServiceRepository, ServiceStore, UserRepository,
    UserStore,
};
use crate::domain::{Service, User};
use crate::errors::{AppError, AppResult};

/// Unit of Work trait for dependency injection.
///
/// Provides centralized access to all repositories and transaction
/// management. The generic `transaction` method is not mockable; test
/// doubles implement it as a stub and services are tested at the
/// non-transactional boundary or against a real database.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    /// Get user repository
    fn users(&self) -> Arc<dyn UserRepository>;

    /// Get service repository
    fn services(&self) -> Arc<dyn ServiceRepository>;

    /// Get registration repository
    fn registrations(&self) -> Arc<dyn RegistrationRepository>;

    /// Execute a closure within a transaction.
    ///
    /// The transaction is committed on success and rolled back on error.
    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send;
}

/// Transaction context providing repository access within a transaction.
///
/// All repository operations performed through this context are part of
/// the same database transaction. The context borrows the transaction to
/// ensure proper lifetime management.
pub struct TransactionContext<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TransactionContext<'a> {
    fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    /// Get user repository for this transaction
    pub fn users(&self) -> TxUserRepository<'_> {
        TxUserRepository::new(self.txn)
    }

    /// Get service repository for this transaction
    pub fn services(&self) -> TxServiceRepository<'_> {
        TxServiceRepository::new(self.txn)
    }

    /// Get registration repository for this transaction
    pub fn registrations(&self) -> TxRegistrationRepository<'_> {
        TxRegistrationRepository::new(self.txn)
    }
}

/// Concrete implementation of UnitOfWork
pub struct Persistence {
    db: DatabaseConnection,
    user_repo: Arc<UserStore>,
    service_repo: Arc<ServiceStore>,
    registration_repo: Arc<RegistrationStore>,
}

impl Persistence {
    /// Create new UnitOfWork instance
    pub fn new(db: DatabaseConnection) -> Self {
        let user_repo = Arc::new(UserStore::new(db.clone()));
        let service_repo = Arc::new(ServiceStore::new(db.clone()));
        let registration_repo = Arc::new(RegistrationStore::new(db.clone()));
        Self {
            db,
            user_repo,
            service_repo,
            registration_repo,
        }
    }
}

#[async_trait]
impl UnitOfWork for Persistence {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.user_repo.clone()
    }

    fn services(&self) -> Arc<dyn ServiceRepository> {
        self.service_repo.clone()
    }

    fn registrations(&self) -> Arc<dyn RegistrationRepository> {
        self.registration_repo.clone()
    }

    async fn transaction<F, T>(&self, f: F) -> AppResult<T>
    where
        F: for<'a> FnOnce(TransactionContext<'a>) -> std::pin::Pin<
                Box<dyn std::future::Future<Output = AppResult<T>> + Send + 'a>,
            > + Send,
        T: Send,
    {
        // ReadCommitted is sufficient: each request touches only its own rows
        let txn = self
            .db
            .begin_with_config(Some(IsolationLevel::ReadCommitted), Some(AccessMode::ReadWrite))
            .await
            .map_err(AppError::from)?;

        let ctx = TransactionContext::new(&txn);

        match f(ctx).await {
            Ok(result) => {
                txn.commit().await.map_err(AppError::from)?;
                Ok(result)
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Transaction rollback failed: {}", rollback_err);
                }
                Err(e)
            }
        }
    }
}

/// Transaction-aware user repository.
///
/// Executes all operations within the provided transaction.
pub struct TxUserRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TxUserRepository<'a> {
    fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    /// Insert a new user, returning it with its generated id.
    pub async fn create(
        &self,
        user_name: &str,
        email: &str,
        phone_number: &str,
    ) -> AppResult<User> {
        let active_model = user::ActiveModel {
            user_name: Set(user_name.to_string()),
            email: Set(email.to_string()),
            phone_number: Set(phone_number.to_string()),
            ..Default::default()
        };

        let model = active_model.insert(self.txn).await.map_err(AppError::from)?;
        Ok(User::from(model))
    }

    /// Overwrite a user's profile fields.
    pub async fn update_profile(
        &self,
        id: i32,
        user_name: String,
        email: String,
        phone_number: String,
    ) -> AppResult<User> {
        let found = user::Entity::find_by_id(id)
            .one(self.txn)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: user::ActiveModel = found.into();
        active.user_name = Set(user_name);
        active.email = Set(email);
        active.phone_number = Set(phone_number);

        let model = active.update(self.txn).await.map_err(AppError::from)?;
        Ok(User::from(model))
    }
}

/// Transaction-aware service repository.
pub struct TxServiceRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TxServiceRepository<'a> {
    fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    /// Resolve catalog ids to services. Ids without a catalog row are
    /// absent from the result rather than an error.
    pub async fn find_by_ids(&self, ids: &[i32]) -> AppResult<Vec<Service>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let models = service::Entity::find()
            .filter(service::Column::Id.is_in(ids.iter().copied()))
            .all(self.txn)
            .await?;

        Ok(models.into_iter().map(Service::from).collect())
    }
}

/// Transaction-aware registration repository.
pub struct TxRegistrationRepository<'a> {
    txn: &'a DatabaseTransaction,
}

impl<'a> TxRegistrationRepository<'a> {
    fn new(txn: &'a DatabaseTransaction) -> Self {
        Self { txn }
    }

    /// Insert one user/service association.
    pub async fn create(
        &self,
        user_id: i32,
        service_id: i32,
        additional_info: String,
    ) -> AppResult<()> {
        let active_model = user_service::ActiveModel {
            user_id: Set(user_id),
            service_id: Set(service_id),
            additional_info: Set(additional_info),
        };

        active_model.insert(self.txn).await.map_err(AppError::from)?;
        Ok(())
    }

    /// Delete all of a user's associations, returning the removed count.
    pub async fn delete_for_user(&self, user_id: i32) -> AppResult<u64> {
        let result = user_service::Entity::delete_many()
            .filter(user_service::Column::UserId.eq(user_id))
            .exec(self.txn)
            .await
            .map_err(AppError::from)?;

        Ok(result.rows_affected)
    }
}
