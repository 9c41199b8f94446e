//! Service-level tests for the generic CRUD engine, run against the
//! in-memory document store.

use resource_api::{MemoryDocumentStore, ResourceCatalog, ResourceError, ResourceService};
use serde_json::json;
use std::sync::Arc;

fn service() -> ResourceService {
    ResourceService::new(
        Arc::new(MemoryDocumentStore::new()),
        ResourceCatalog::standard(),
    )
}

#[tokio::test]
async fn list_is_empty_before_bootstrap_and_holds_only_the_seed_after() {
    let svc = service();

    // No collections exist yet: listing reports empty, not an error.
    assert!(svc.list("notifications").await.unwrap().is_empty());

    svc.bootstrap().await.unwrap();

    let docs = svc.list("notifications").await.unwrap();
    assert_eq!(docs.len(), 1);
    let seed = &docs[0].fields;
    assert_eq!(seed["type"], "push");
    assert_eq!(seed["badge"], "0");
    assert_eq!(seed["radius"], "10");

    let docs = svc.list("qrcodes").await.unwrap();
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0].fields["size"], "M");
    assert_eq!(docs[0].fields["quality"], "7");

    let docs = svc.list("redemptions").await.unwrap();
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0].fields["coupon_id"], "0");
}

#[tokio::test]
async fn bootstrap_seeds_each_collection_at_most_once() {
    let store = Arc::new(MemoryDocumentStore::new());
    let svc = ResourceService::new(store.clone(), ResourceCatalog::standard());

    svc.bootstrap().await.unwrap();
    svc.bootstrap().await.unwrap();
    for resource in ["notifications", "qrcodes", "redemptions"] {
        assert_eq!(
            svc.list(resource).await.unwrap().len(),
            1,
            "{resource} was seeded more than once"
        );
    }

    // A second engine over the same store must not re-seed either.
    let second = ResourceService::new(store, ResourceCatalog::standard());
    second.bootstrap().await.unwrap();
    assert_eq!(second.list("qrcodes").await.unwrap().len(), 1);
}

#[tokio::test]
async fn create_then_fetch_round_trips_fields_plus_assigned_id() {
    let svc = service();
    svc.bootstrap().await.unwrap();

    let created = svc
        .create("notifications", json!({"title": "Hi", "body": "there"}))
        .await
        .unwrap();

    let fetched = svc
        .fetch("notifications", &created.id.to_string())
        .await
        .unwrap();
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.fields["title"], "Hi");
    assert_eq!(fetched.fields["body"], "there");
}

#[tokio::test]
async fn replace_is_a_full_overwrite() {
    let svc = service();
    svc.bootstrap().await.unwrap();

    let created = svc
        .create("qrcodes", json!({"title": "old", "scans": "12"}))
        .await
        .unwrap();
    let id = created.id.to_string();

    let replaced = svc
        .replace("qrcodes", &id, json!({"title": "new"}))
        .await
        .unwrap();
    assert_eq!(replaced.id, created.id);

    let fetched = svc.fetch("qrcodes", &id).await.unwrap();
    assert_eq!(fetched.fields["title"], "new");
    // Fields absent from the replacement body must not survive.
    assert!(fetched.fields.get("scans").is_none());
}

#[tokio::test]
async fn delete_returns_prior_state_and_repeats_report_not_found() {
    let svc = service();
    svc.bootstrap().await.unwrap();

    let created = svc
        .create("redemptions", json!({"coupon_uuid": "c-1", "ip": "10.0.0.1"}))
        .await
        .unwrap();
    let id = created.id.to_string();

    let deleted = svc.delete("redemptions", &id).await.unwrap();
    assert_eq!(deleted.fields["coupon_uuid"], "c-1");

    assert!(matches!(
        svc.fetch("redemptions", &id).await,
        Err(ResourceError::NotFound(_))
    ));
    assert!(matches!(
        svc.delete("redemptions", &id).await,
        Err(ResourceError::NotFound(_))
    ));
}

#[tokio::test]
async fn concurrent_replaces_resolve_to_exactly_one_writer() {
    let svc = service();
    svc.bootstrap().await.unwrap();

    let created = svc.create("notifications", json!({"title": "v0"})).await.unwrap();
    let id = created.id.to_string();

    let a = json!({"title": "A", "alert": "yes"});
    let b = json!({"title": "B"});
    let (ra, rb) = tokio::join!(
        svc.replace("notifications", &id, a.clone()),
        svc.replace("notifications", &id, b.clone()),
    );
    ra.unwrap();
    rb.unwrap();

    // Last writer wins: the stored document equals one submitted body in
    // full, never a merge of the two.
    let fetched = svc.fetch("notifications", &id).await.unwrap();
    assert!(fetched.fields == a || fetched.fields == b);
}

#[tokio::test]
async fn unknown_resources_and_malformed_inputs_are_rejected() {
    let svc = service();
    svc.bootstrap().await.unwrap();

    assert!(matches!(
        svc.list("widgets").await,
        Err(ResourceError::NotFound(_))
    ));
    assert!(matches!(
        svc.fetch("notifications", "not-a-uuid").await,
        Err(ResourceError::Validation(_))
    ));
    assert!(matches!(
        svc.create("notifications", json!(["not", "an", "object"])).await,
        Err(ResourceError::Validation(_))
    ));
}
