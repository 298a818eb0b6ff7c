//! HTTP request handlers.

pub mod catalog_handler;
pub mod registration_handler;

pub use catalog_handler::catalog_routes;
pub use registration_handler::registration_routes;
