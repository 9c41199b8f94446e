use crate::app::resource_service::{ResourceError, ResourceService};
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ResourceService>,
}

/// Error response body: the message plus a machine-readable kind.
#[derive(Serialize, Debug, ToSchema)]
pub struct ErrorBody {
    pub error: String,
    pub kind: String,
}

impl IntoResponse for ResourceError {
    fn into_response(self) -> Response {
        let status = match &self {
            ResourceError::NotFound(_) => StatusCode::NOT_FOUND,
            ResourceError::Validation(_) => StatusCode::BAD_REQUEST,
            ResourceError::Conflict(_) => StatusCode::CONFLICT,
            ResourceError::StorageUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ResourceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let error = match &self {
            // Storage failures keep the canonical wire message; the detail
            // goes to the log, not to the client.
            ResourceError::StorageUnavailable(e) | ResourceError::Internal(e) => {
                tracing::error!(error = %e, "storage operation failed");
                "An error has occurred".to_string()
            }
            other => other.to_string(),
        };
        (
            status,
            Json(ErrorBody {
                error,
                kind: self.kind().to_string(),
            }),
        )
            .into_response()
    }
}

pub fn json_422(err: JsonRejection, expected: &str) -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(ErrorBody {
            error: format!("Invalid JSON body: {} (expected: {})", err, expected),
            kind: "validation".to_string(),
        }),
    )
}
