//! Domain layer - Core business entities
//!
//! Plain structs representing business concepts independent of
//! infrastructure concerns. No lazy-loaded navigation: every join
//! between these types is an explicit repository query.

pub mod registration;
pub mod service;
pub mod user;

pub use registration::{NewRegistration, RegisteredService, RegistrationUpdate};
pub use service::{NewService, Service};
pub use user::{User, UserResponse};
