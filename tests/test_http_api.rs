//! End-to-end HTTP test: seed the store, then exercise a resource's full
//! lifecycle over the wire against an in-process server.

use resource_api::{transport, MemoryDocumentStore, ResourceCatalog, ResourceService};
use serde_json::json;
use std::sync::Arc;

async fn spawn_server() -> (String, tokio::task::JoinHandle<()>) {
    let service = Arc::new(ResourceService::new(
        Arc::new(MemoryDocumentStore::new()),
        ResourceCatalog::standard(),
    ));
    service.bootstrap().await.unwrap();

    let router = transport::http::create_router(transport::http::AppState { service });

    // Bind to an ephemeral port to avoid conflicts with a running server.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    let handle = tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    (format!("http://127.0.0.1:{}", port), handle)
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn notification_lifecycle_over_http() -> Result<(), Box<dyn std::error::Error>> {
    let (base_url, server) = spawn_server().await;
    let client = reqwest::Client::new();

    // The seeded collection lists exactly one document.
    let listed: serde_json::Value = client
        .get(format!("{}/notifications", base_url))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(listed.as_array().map(Vec::len), Some(1));

    // POST: the response carries the submitted fields plus an assigned id.
    let created: serde_json::Value = client
        .post(format!("{}/notifications", base_url))
        .json(&json!({"title": "Hi", "body": "there"}))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(created["title"], "Hi");
    assert_eq!(created["body"], "there");
    let id = created["id"].as_str().expect("assigned id").to_string();

    // GET by id round-trips the same fields.
    let fetched: serde_json::Value = client
        .get(format!("{}/notifications/{}", base_url, id))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(fetched["title"], "Hi");
    assert_eq!(fetched["body"], "there");
    assert_eq!(fetched["id"], id.as_str());

    // PUT replaces the document wholesale.
    let replaced: serde_json::Value = client
        .put(format!("{}/notifications/{}", base_url, id))
        .json(&json!({"title": "Bye"}))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(replaced["title"], "Bye");
    assert!(replaced.get("body").is_none());

    // DELETE returns the prior state; the id then resolves to 404.
    let deleted: serde_json::Value = client
        .delete(format!("{}/notifications/{}", base_url, id))
        .send()
        .await?
        .json()
        .await?;
    assert_eq!(deleted["title"], "Bye");

    let resp = client
        .get(format!("{}/notifications/{}", base_url, id))
        .send()
        .await?;
    assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);
    let body: serde_json::Value = resp.json().await?;
    assert_eq!(body["kind"], "not_found");

    server.abort();
    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn error_paths_over_http() -> Result<(), Box<dyn std::error::Error>> {
    let (base_url, server) = spawn_server().await;
    let client = reqwest::Client::new();

    // Unknown resource names are 404 with a structured kind.
    let resp = client.get(format!("{}/widgets", base_url)).send().await?;
    assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);
    let body: serde_json::Value = resp.json().await?;
    assert_eq!(body["kind"], "not_found");

    // Malformed ids are rejected before hitting the store.
    let resp = client
        .get(format!("{}/notifications/not-a-uuid", base_url))
        .send()
        .await?;
    assert_eq!(resp.status(), reqwest::StatusCode::BAD_REQUEST);
    let body: serde_json::Value = resp.json().await?;
    assert_eq!(body["kind"], "validation");

    // Non-object payloads are rejected.
    let resp = client
        .post(format!("{}/redemptions", base_url))
        .json(&json!(["not", "an", "object"]))
        .send()
        .await?;
    assert_eq!(resp.status(), reqwest::StatusCode::BAD_REQUEST);

    // Health endpoint reports ok against a reachable store.
    let resp = client.get(format!("{}/health", base_url)).send().await?;
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    let body: serde_json::Value = resp.json().await?;
    assert_eq!(body["status"], "ok");

    server.abort();
    Ok(())
}
