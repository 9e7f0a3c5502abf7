//! Integration test: full create / read / delete lifecycle over HTTP.
//!
//! Drives the real router against a seeded store, checking status codes,
//! bodies and store size after every step.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use codigos_core::RecordStore;
use codigos_gateway::routes::create_router;
use tower::ServiceExt;

async fn send(store: &Arc<RecordStore>, req: Request<Body>) -> (StatusCode, serde_json::Value) {
    let resp = match create_router(Arc::clone(store)).oneshot(req).await {
        Ok(r) => r,
        Err(e) => panic!("handler error: {e}"),
    };
    let status = resp.status();
    let bytes = match axum::body::to_bytes(resp.into_body(), 64 * 1024).await {
        Ok(b) => b,
        Err(e) => panic!("failed to read body: {e}"),
    };
    if bytes.is_empty() {
        return (status, serde_json::Value::Null);
    }
    match serde_json::from_slice(&bytes) {
        Ok(v) => (status, v),
        Err(e) => panic!("invalid JSON: {e}"),
    }
}

fn json_request(method: &str, uri: &str, body: Option<&str>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("accept", "application/json;encoding=utf-8");
    let built = match body {
        Some(body) => builder
            .header("content-type", "application/json;encoding=utf-8")
            .body(Body::from(body.to_owned())),
        None => builder.body(Body::empty()),
    };
    match built {
        Ok(r) => r,
        Err(e) => panic!("failed to build request: {e}"),
    }
}

#[tokio::test]
async fn create_get_delete_round_trip() {
    let store = Arc::new(RecordStore::seeded());
    assert_eq!(store.len(), 2, "seed store must hold 2 records");

    let (status, created) =
        send(&store, json_request("POST", "/codigos", Some(r#"{"data":"https://x.test"}"#))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["type"], "qr");
    assert_eq!(store.len(), 3);

    let id = match created["id"].as_str() {
        Some(id) => id.to_owned(),
        None => panic!("created record has no id: {created}"),
    };
    assert_eq!(id.len(), 12);
    assert!(id != "a1b2c3d4e5f6" && id != "b2c3d4e5f6g7", "id must be fresh");

    let (status, fetched) = send(&store, json_request("GET", &format!("/codigos/{id}"), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created, "fetched record must match the created one");

    let (status, listed) = send(&store, json_request("GET", "/codigos", None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().and_then(|a| a.last()), Some(&created));

    let (status, body) = send(&store, json_request("DELETE", &format!("/codigos/{id}"), None)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, serde_json::Value::Null);
    assert_eq!(store.len(), 2);

    let (status, body) = send(&store, json_request("GET", &format!("/codigos/{id}"), None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Código no encontrado");

    let (status, _) = send(&store, json_request("DELETE", &format!("/codigos/{id}"), None)).await;
    assert_eq!(status, StatusCode::NOT_FOUND, "second delete finds nothing");
    assert_eq!(store.len(), 2);
}

#[tokio::test]
async fn explicit_type_survives_round_trip() {
    let store = Arc::new(RecordStore::seeded());

    let (status, created) = send(
        &store,
        json_request("POST", "/codigos", Some(r#"{"data":"https://nuevaurl.com/test","type":"barcode"}"#)),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["type"], "barcode");

    let id = created["id"].as_str().unwrap_or_default().to_owned();
    let (status, fetched) = send(&store, json_request("GET", &format!("/codigos/{id}"), None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["data"], "https://nuevaurl.com/test");
    assert_eq!(fetched["type"], "barcode");
}

#[tokio::test]
async fn list_is_idempotent_without_mutation() {
    let store = Arc::new(RecordStore::seeded());
    let (_, first) = send(&store, json_request("GET", "/codigos", None)).await;
    let (_, second) = send(&store, json_request("GET", "/codigos", None)).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn read_and_delete_ignore_negotiation_headers() {
    let store = Arc::new(RecordStore::seeded());

    let plain = |method: &str, uri: &str| match Request::builder()
        .method(method)
        .uri(uri)
        .header("accept", "text/plain")
        .body(Body::empty())
    {
        Ok(r) => r,
        Err(e) => panic!("failed to build request: {e}"),
    };

    let (status, _) = send(&store, plain("GET", "/codigos")).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&store, plain("GET", "/codigos/a1b2c3d4e5f6")).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&store, plain("DELETE", "/codigos/a1b2c3d4e5f6")).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(store.len(), 1);
}
