//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod service;
pub mod user;
pub mod user_service;
