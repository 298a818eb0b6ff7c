//! Service domain entity and related types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A catalog entry users may register for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Service {
    /// Generated service identifier
    #[schema(example = 1)]
    pub id: i32,
    /// Service name
    #[schema(example = "Internet")]
    pub name: String,
    /// Human-readable description
    #[schema(example = "Broadband internet access")]
    pub description: String,
}

/// A catalog entry before insertion, as read from the seed file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewService {
    pub name: String,
    pub description: String,
}
