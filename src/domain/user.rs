//! User domain entity and related types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub user_name: String,
    pub email: String,
    pub phone_number: String,
}

/// User response (camelCase wire shape)
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    /// Generated user identifier
    #[schema(example = 1)]
    pub id: i32,
    /// User display name
    #[schema(example = "Alice Johnson")]
    pub user_name: String,
    /// User email address
    #[schema(example = "alice@example.com")]
    pub email: String,
    /// User phone number
    #[schema(example = "+1-202-555-0101")]
    pub phone_number: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            user_name: user.user_name,
            email: user.email,
            phone_number: user.phone_number,
        }
    }
}
