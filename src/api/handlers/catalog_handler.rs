//! Catalog handlers.

use axum::{extract::State, response::Json, routing::get, Router};

use crate::api::AppState;
use crate::domain::Service;
use crate::errors::AppResult;

/// Create catalog routes
pub fn catalog_routes() -> Router<AppState> {
    Router::new().route("/services", get(list_services))
}

/// List the available services
#[utoipa::path(
    get,
    path = "/services",
    tag = "Catalog",
    responses(
        (status = 200, description = "The full service catalog", body = [Service])
    )
)]
pub async fn list_services(State(state): State<AppState>) -> AppResult<Json<Vec<Service>>> {
    let services = state.catalog_service.list_services().await?;
    Ok(Json(services))
}
