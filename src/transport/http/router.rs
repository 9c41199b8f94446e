use crate::transport::http::handlers::{health, resources};
use crate::transport::http::types::ErrorBody;
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        resources::list_handler,
        resources::fetch_handler,
        resources::create_handler,
        resources::replace_handler,
        resources::destroy_handler
    ),
    components(schemas(ErrorBody))
)]
#[allow(dead_code)]
pub struct ApiDoc;

pub fn create_router(app_state: crate::transport::http::types::AppState) -> Router {
    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route(
            "/:resource",
            get(resources::list_handler).post(resources::create_handler),
        )
        .route(
            "/:resource/:id",
            get(resources::fetch_handler)
                .put(resources::replace_handler)
                .delete(resources::destroy_handler),
        )
        .with_state(app_state)
}
