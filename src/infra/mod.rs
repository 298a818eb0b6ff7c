//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connection and migrations
//! - SeaORM entities and repositories
//! - Unit of Work for transaction management
//! - In-memory catalog cache
//! - Startup seeding of the service catalog

pub mod cache;
pub mod db;
pub mod repositories;
pub mod seed;
pub mod unit_of_work;

pub use cache::CatalogCache;
pub use db::{Database, Migrator};
pub use repositories::{
    RegistrationRepository, RegistrationStore, ServiceRepository, ServiceStore, UserRepository,
    UserStore,
};
pub use seed::seed_services;
pub use unit_of_work::{
    Persistence, TransactionContext, TxRegistrationRepository, TxServiceRepository,
    TxUserRepository, UnitOfWork,
};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{MockRegistrationRepository, MockServiceRepository, MockUserRepository};
