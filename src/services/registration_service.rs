//! Registration service - registering users for catalog services and
//! editing existing registrations.

use async_trait::async_trait;
use std::sync::Arc;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

use crate::domain::{NewRegistration, RegisteredService, RegistrationUpdate, User};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UnitOfWork;

/// Registration use cases.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait RegistrationService: Send + Sync {
    /// Create a user together with its service associations.
    async fn register(&self, registration: NewRegistration) -> AppResult<User>;

    /// Replace a user's profile fields and, when service ids are given,
    /// its whole association set.
    async fn update(&self, user_id: i32, update: RegistrationUpdate) -> AppResult<()>;

    /// List the services a user is registered for.
    async fn list_user_services(&self, user_id: i32) -> AppResult<Vec<RegisteredService>>;
}

/// Concrete implementation of [`RegistrationService`] using Unit of Work.
pub struct Registrar<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> Registrar<U> {
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> RegistrationService for Registrar<U> {
    async fn register(&self, registration: NewRegistration) -> AppResult<User> {
        validate_identity(
            &registration.user_name,
            &registration.email,
            &registration.phone_number,
        )?;

        let NewRegistration {
            user_name,
            email,
            phone_number,
            service_ids,
            additional_info,
        } = registration;

        self.uow
            .transaction(move |ctx| {
                Box::pin(async move {
                    let user = ctx.users().create(&user_name, &email, &phone_number).await?;

                    // Unknown ids resolve to nothing and are dropped silently
                    let services = ctx.services().find_by_ids(&service_ids).await?;
                    for service in &services {
                        let info = additional_info.get(&service.id).cloned().unwrap_or_default();
                        ctx.registrations().create(user.id, service.id, info).await?;
                    }

                    tracing::info!(
                        user_id = user.id,
                        services = services.len(),
                        "User registered"
                    );
                    Ok(user)
                })
            })
            .await
    }

    async fn update(&self, user_id: i32, update: RegistrationUpdate) -> AppResult<()> {
        // Unknown user is rejected before any transaction is opened
        self.uow.users().find_by_id(user_id).await?.ok_or_not_found()?;

        let RegistrationUpdate {
            user_name,
            email,
            phone_number,
            service_ids,
            additional_info,
        } = update;

        self.uow
            .transaction(move |ctx| {
                Box::pin(async move {
                    // Profile fields are overwritten unconditionally; the
                    // update path deliberately skips the non-empty checks
                    // applied at registration
                    ctx.users()
                        .update_profile(user_id, user_name, email, phone_number)
                        .await?;

                    // An empty id list leaves existing associations untouched;
                    // a non-empty one replaces them wholesale
                    if !service_ids.is_empty() {
                        let removed = ctx.registrations().delete_for_user(user_id).await?;

                        let services = ctx.services().find_by_ids(&service_ids).await?;
                        for service in &services {
                            let info =
                                additional_info.get(&service.id).cloned().unwrap_or_default();
                            ctx.registrations().create(user_id, service.id, info).await?;
                        }

                        tracing::info!(
                            user_id,
                            removed,
                            added = services.len(),
                            "User service associations replaced"
                        );
                    }

                    Ok(())
                })
            })
            .await
    }

    async fn list_user_services(&self, user_id: i32) -> AppResult<Vec<RegisteredService>> {
        self.uow.users().find_by_id(user_id).await?.ok_or_not_found()?;
        self.uow.registrations().list_for_user(user_id).await
    }
}

/// Registration requires all identity fields to be non-empty after trimming.
fn validate_identity(user_name: &str, email: &str, phone_number: &str) -> AppResult<()> {
    if user_name.trim().is_empty() || email.trim().is_empty() || phone_number.trim().is_empty() {
        return Err(AppError::validation(
            "userName, email and phoneNumber are required",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_fields_fail_validation() {
        assert!(validate_identity("", "a@b.c", "123").is_err());
        assert!(validate_identity("Alice", "   ", "123").is_err());
        assert!(validate_identity("Alice", "a@b.c", "\t").is_err());
        assert!(validate_identity("Alice", "a@b.c", "123").is_ok());
    }
}
