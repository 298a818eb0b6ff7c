//! Registration handlers.

use std::collections::HashMap;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post, put},
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{NewRegistration, RegisteredService, RegistrationUpdate, UserResponse};
use crate::errors::AppResult;

/// Registration request payload.
///
/// Whitespace-only identity fields pass deserialization and are
/// rejected by the registration service, which trims before checking.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// User display name
    #[validate(length(min = 1, message = "userName is required"))]
    #[schema(example = "Alice Johnson")]
    pub user_name: String,
    /// User email address
    #[validate(length(min = 1, message = "email is required"))]
    #[schema(example = "alice@example.com")]
    pub email: String,
    /// User phone number
    #[validate(length(min = 1, message = "phoneNumber is required"))]
    #[schema(example = "+1-202-555-0101")]
    pub phone_number: String,
    /// Catalog ids to register for; ids absent from the catalog are ignored
    #[serde(default)]
    pub service_ids: Vec<i32>,
    /// Per-service metadata keyed by service id
    #[serde(default)]
    pub additional_info: HashMap<i32, String>,
}

/// Registration update payload.
///
/// No field is validated here: profile values are stored as given
/// (missing or null fields become empty strings), and an absent or
/// empty `serviceIds` leaves the association set untouched.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRegistrationRequest {
    /// User display name
    #[serde(default)]
    #[schema(example = "Alice Johnson")]
    pub user_name: Option<String>,
    /// User email address
    #[serde(default)]
    #[schema(example = "alice@example.com")]
    pub email: Option<String>,
    /// User phone number
    #[serde(default)]
    #[schema(example = "+1-202-555-0101")]
    pub phone_number: Option<String>,
    /// Replacement service ids; empty or absent keeps current associations
    #[serde(default)]
    pub service_ids: Vec<i32>,
    /// Per-service metadata keyed by service id
    #[serde(default)]
    pub additional_info: HashMap<i32, String>,
}

/// Create registration routes
pub fn registration_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/users/:user_id/services", get(list_user_services))
        .route("/users/:user_id", put(update_registration))
}

/// Register a user for a set of catalog services
#[utoipa::path(
    post,
    path = "/register",
    tag = "Registration",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered", body = UserResponse),
        (status = 400, description = "Missing required fields"),
        (status = 500, description = "Registration transaction failed")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    let user = state
        .registration_service
        .register(NewRegistration {
            user_name: payload.user_name,
            email: payload.email,
            phone_number: payload.phone_number,
            service_ids: payload.service_ids,
            additional_info: payload.additional_info,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}

/// List the services a user is registered for
#[utoipa::path(
    get,
    path = "/users/{user_id}/services",
    tag = "Registration",
    params(
        ("user_id" = i32, Path, description = "User identifier")
    ),
    responses(
        (status = 200, description = "The user's registered services", body = [RegisteredService]),
        (status = 404, description = "User not found")
    )
)]
pub async fn list_user_services(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> AppResult<Json<Vec<RegisteredService>>> {
    let services = state
        .registration_service
        .list_user_services(user_id)
        .await?;

    Ok(Json(services))
}

/// Edit a user's registration data
#[utoipa::path(
    put,
    path = "/users/{user_id}",
    tag = "Registration",
    params(
        ("user_id" = i32, Path, description = "User identifier")
    ),
    request_body = UpdateRegistrationRequest,
    responses(
        (status = 204, description = "Registration updated"),
        (status = 404, description = "User not found")
    )
)]
pub async fn update_registration(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    Json(payload): Json<UpdateRegistrationRequest>,
) -> AppResult<StatusCode> {
    state
        .registration_service
        .update(
            user_id,
            RegistrationUpdate {
                user_name: payload.user_name.unwrap_or_default(),
                email: payload.email.unwrap_or_default(),
                phone_number: payload.phone_number.unwrap_or_default(),
                service_ids: payload.service_ids,
                additional_info: payload.additional_info,
            },
        )
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_request_deserializes_camel_case_and_integer_keys() {
        let payload: RegisterRequest = serde_json::from_str(
            r#"{
                "userName": "Alice",
                "email": "alice@example.com",
                "phoneNumber": "+1-202-555-0101",
                "serviceIds": [1, 2],
                "additionalInfo": {"2": "vip"}
            }"#,
        )
        .unwrap();

        assert_eq!(payload.user_name, "Alice");
        assert_eq!(payload.service_ids, vec![1, 2]);
        assert_eq!(payload.additional_info.get(&2).map(String::as_str), Some("vip"));
    }

    #[test]
    fn register_request_defaults_missing_collections() {
        let payload: RegisterRequest = serde_json::from_str(
            r#"{"userName": "Alice", "email": "a@b.c", "phoneNumber": "1"}"#,
        )
        .unwrap();

        assert!(payload.service_ids.is_empty());
        assert!(payload.additional_info.is_empty());
    }

    #[test]
    fn empty_identity_fields_fail_validation() {
        let payload: RegisterRequest = serde_json::from_str(
            r#"{"userName": "", "email": "a@b.c", "phoneNumber": "1"}"#,
        )
        .unwrap();

        assert!(payload.validate().is_err());
    }

    #[test]
    fn update_request_tolerates_null_fields() {
        let payload: UpdateRegistrationRequest = serde_json::from_str(
            r#"{"userName": null, "serviceIds": []}"#,
        )
        .unwrap();

        assert!(payload.user_name.is_none());
        assert!(payload.service_ids.is_empty());
    }
}
