use crate::storage::document::Document;
use crate::transport::http::types::{json_422, AppState, ErrorBody};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::Value as JsonValue;

fn docs_to_wire(docs: &[Document]) -> JsonValue {
    JsonValue::Array(docs.iter().map(Document::to_wire).collect())
}

#[utoipa::path(
    get,
    path = "/{resource}",
    params(
        ("resource" = String, Path, description = "Resource name (e.g. notifications)")
    ),
    responses(
        (status = 200, description = "Every document in the collection, unfiltered"),
        (status = 404, description = "Unknown resource", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody),
        (status = 503, description = "Storage unavailable", body = ErrorBody)
    )
)]
pub async fn list_handler(
    State(state): State<AppState>,
    Path(resource): Path<String>,
) -> Response {
    match state.service.list(&resource).await {
        Ok(docs) => (StatusCode::OK, Json(docs_to_wire(&docs))).into_response(),
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/{resource}/{id}",
    params(
        ("resource" = String, Path, description = "Resource name (e.g. notifications)"),
        ("id" = String, Path, description = "Document id")
    ),
    responses(
        (status = 200, description = "The matching document"),
        (status = 400, description = "Malformed document id", body = ErrorBody),
        (status = 404, description = "Unknown resource or no such document", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody),
        (status = 503, description = "Storage unavailable", body = ErrorBody)
    )
)]
pub async fn fetch_handler(
    State(state): State<AppState>,
    Path((resource, id)): Path<(String, String)>,
) -> Response {
    match state.service.fetch(&resource, &id).await {
        Ok(doc) => (StatusCode::OK, Json(doc.to_wire())).into_response(),
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(
    post,
    path = "/{resource}",
    params(
        ("resource" = String, Path, description = "Resource name (e.g. notifications)")
    ),
    responses(
        (status = 200, description = "The inserted document, including its assigned id"),
        (status = 400, description = "Payload is not a JSON object", body = ErrorBody),
        (status = 404, description = "Unknown resource", body = ErrorBody),
        (status = 422, description = "Unprocessable entity (invalid JSON body)", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody),
        (status = 503, description = "Storage unavailable", body = ErrorBody)
    )
)]
pub async fn create_handler(
    State(state): State<AppState>,
    Path(resource): Path<String>,
    body: Result<Json<JsonValue>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(v) => v,
        Err(e) => return json_422(e, "a JSON object of document fields").into_response(),
    };
    match state.service.create(&resource, body).await {
        Ok(doc) => (StatusCode::OK, Json(doc.to_wire())).into_response(),
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(
    put,
    path = "/{resource}/{id}",
    params(
        ("resource" = String, Path, description = "Resource name (e.g. notifications)"),
        ("id" = String, Path, description = "Document id")
    ),
    responses(
        (status = 200, description = "The stored replacement document (full overwrite)"),
        (status = 400, description = "Malformed document id or non-object payload", body = ErrorBody),
        (status = 404, description = "Unknown resource or no such document", body = ErrorBody),
        (status = 422, description = "Unprocessable entity (invalid JSON body)", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody),
        (status = 503, description = "Storage unavailable", body = ErrorBody)
    )
)]
pub async fn replace_handler(
    State(state): State<AppState>,
    Path((resource, id)): Path<(String, String)>,
    body: Result<Json<JsonValue>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(v) => v,
        Err(e) => return json_422(e, "a JSON object of replacement fields").into_response(),
    };
    match state.service.replace(&resource, &id, body).await {
        Ok(doc) => (StatusCode::OK, Json(doc.to_wire())).into_response(),
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(
    delete,
    path = "/{resource}/{id}",
    params(
        ("resource" = String, Path, description = "Resource name (e.g. notifications)"),
        ("id" = String, Path, description = "Document id")
    ),
    responses(
        (status = 200, description = "The removed document's prior state"),
        (status = 400, description = "Malformed document id", body = ErrorBody),
        (status = 404, description = "Unknown resource or no such document", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody),
        (status = 503, description = "Storage unavailable", body = ErrorBody)
    )
)]
pub async fn destroy_handler(
    State(state): State<AppState>,
    Path((resource, id)): Path<(String, String)>,
) -> Response {
    match state.service.delete(&resource, &id).await {
        Ok(doc) => (StatusCode::OK, Json(doc.to_wire())).into_response(),
        Err(e) => e.into_response(),
    }
}
