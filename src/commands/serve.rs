//! Serve command - Starts the HTTP server.

use std::path::Path;
use std::sync::Arc;

use crate::api::{create_router, AppState};
use crate::cli::args::ServeArgs;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::{seed_services, CatalogCache, Database, ServiceStore};

/// Execute the serve command
pub async fn execute(args: ServeArgs, config: Config) -> AppResult<()> {
    tracing::info!("Starting server...");

    // Initialize database (runs pending migrations)
    let db = Arc::new(Database::connect(&config).await);
    tracing::info!("Database connected");

    // Seed the service catalog before accepting traffic
    let services = ServiceStore::new(db.get_connection());
    seed_services(&services, Path::new(&config.services_seed_path)).await?;

    // Catalog cache, owned here and injected into the services
    let cache = Arc::new(CatalogCache::new());

    // Create application state with the service container
    let app_state = AppState::from_config(db, cache);

    // Build router
    let app = create_router(app_state);

    // Start server
    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind to {}: {}", addr, e)))?;

    tracing::info!("Server running on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    Ok(())
}
