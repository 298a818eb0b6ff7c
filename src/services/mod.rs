//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion and use the Unit of Work for repository access
//! and transaction management.

mod catalog_service;
pub mod container;
mod registration_service;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use catalog_service::{Catalog, CatalogService};
pub use registration_service::{Registrar, RegistrationService};

#[cfg(any(test, feature = "test-utils"))]
pub use catalog_service::MockCatalogService;
#[cfg(any(test, feature = "test-utils"))]
pub use registration_service::MockRegistrationService;
