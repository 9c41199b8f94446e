// src/bin/api_server.rs

use resource_api::infra::config;
use resource_api::transport;
use resource_api::{PostgresDocumentStore, ResourceCatalog, ResourceService};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // --- Resource Catalog Initialization ---
    let catalog = ResourceCatalog::standard();
    info!(resources = ?catalog.list(), "initializing resource catalog");

    // --- Service Initialization ---
    // The pool connects lazily so an unreachable database never blocks startup.
    let store = Arc::new(PostgresDocumentStore::connect_lazy(&config::database_url())?);
    let service = Arc::new(ResourceService::new(store, catalog));

    // Collection check + seeding. An unreachable store is logged, not fatal:
    // the process keeps serving and every data operation fails individually
    // until the database comes back.
    if let Err(e) = service.bootstrap().await {
        warn!(error = %e, "bootstrap failed, continuing without seeding");
    }

    let app_state = transport::http::AppState { service };

    // --- API Server Initialization ---
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any);
    let app = transport::http::create_router(app_state)
        .merge(
            SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", transport::http::ApiDoc::openapi()),
        )
        .layer(cors);

    let addr = config::bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(%addr, "API server listening");

    tokio::select! {
        result = axum::serve(listener, app) => {
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            info!("shutdown signal received");
        }
    }

    Ok(())
}
