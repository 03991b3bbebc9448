/// Integration tests for the /metrics endpoint and request counting
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use prometheus_parse::{Scrape, Value};
use std::collections::HashMap;
use std::sync::Arc;
use tower::ServiceExt;

use item_catalog::{
    handlers::items::AppState,
    metrics::RequestMetrics,
    server::create_router,
    store::ItemStore,
};

async fn test_app() -> (Router, tempfile::TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}/items.db", dir.path().display());
    let store = ItemStore::connect(&url).await.unwrap();

    let app = create_router(AppState { store }, Arc::new(RequestMetrics::new()));
    (app, dir)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method("GET")
        .body(Body::empty())
        .unwrap()
}

fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .method("POST")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_string(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Parse the exposition into (method, path) -> count
fn request_counts(exposition: &str) -> HashMap<(String, String), u64> {
    let lines: Vec<_> = exposition.lines().map(|s| Ok(s.to_owned())).collect();
    let scrape = Scrape::parse(lines.into_iter()).unwrap();

    scrape
        .samples
        .iter()
        .filter(|s| s.metric == "http_requests_total")
        .map(|s| {
            let value = match &s.value {
                Value::Counter(v) | Value::Gauge(v) | Value::Untyped(v) => *v as u64,
                _ => panic!("http_requests_total should be a counter"),
            };
            let method = s.labels.get("method").unwrap_or("").to_string();
            let path = s.labels.get("path").unwrap_or("").to_string();
            ((method, path), value)
        })
        .collect()
}

async fn scrape_counts(app: &Router) -> HashMap<(String, String), u64> {
    let response = app.clone().oneshot(get("/metrics")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    request_counts(&body_string(response).await)
}

#[tokio::test]
async fn metrics_endpoint_uses_prometheus_content_type() {
    let (app, _dir) = test_app().await;

    let response = app.oneshot(get("/metrics")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "text/plain; version=0.0.4; charset=utf-8"
    );

    let body = body_string(response).await;
    assert!(body.contains("http_requests_total"));
}

#[tokio::test]
async fn requests_are_counted_by_method_and_path() {
    let (app, _dir) = test_app().await;

    app.clone().oneshot(get("/")).await.unwrap();
    app.clone().oneshot(get("/")).await.unwrap();
    app.clone()
        .oneshot(post_form(
            "/create",
            "item_name=Widget&item_description=A+thing",
        ))
        .await
        .unwrap();
    app.clone().oneshot(get("/view/1")).await.unwrap();

    let counts = scrape_counts(&app).await;

    assert_eq!(counts[&("GET".to_string(), "/".to_string())], 2);
    assert_eq!(counts[&("POST".to_string(), "/create".to_string())], 1);
    assert_eq!(counts[&("GET".to_string(), "/view/1".to_string())], 1);

    // The scrape itself is counted before it renders
    assert_eq!(counts[&("GET".to_string(), "/metrics".to_string())], 1);

    // Grand total covers every request made, scrape included
    let total: u64 = counts.values().sum();
    assert_eq!(total, 5);
}

#[tokio::test]
async fn labels_use_the_raw_request_path() {
    let (app, _dir) = test_app().await;

    app.clone()
        .oneshot(post_form(
            "/create",
            "item_name=Widget&item_description=A+thing",
        ))
        .await
        .unwrap();
    app.clone().oneshot(get("/view/1")).await.unwrap();

    let counts = scrape_counts(&app).await;

    assert!(counts.contains_key(&("GET".to_string(), "/view/1".to_string())));
    assert!(!counts
        .keys()
        .any(|(_, path)| path.contains(":id") || path.contains("{id}")));
}

#[tokio::test]
async fn counts_are_monotonic_across_scrapes() {
    let (app, _dir) = test_app().await;

    app.clone().oneshot(get("/")).await.unwrap();
    let first = scrape_counts(&app).await;

    app.clone().oneshot(get("/")).await.unwrap();
    let second = scrape_counts(&app).await;

    for (key, count) in &first {
        assert!(second[key] >= *count, "count for {:?} went backwards", key);
    }
    assert_eq!(second[&("GET".to_string(), "/".to_string())], 2);
    assert_eq!(second[&("GET".to_string(), "/metrics".to_string())], 2);
}

#[tokio::test]
async fn failed_requests_are_still_counted() {
    let (app, _dir) = test_app().await;

    let response = app.clone().oneshot(get("/view/42")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let counts = scrape_counts(&app).await;
    assert_eq!(counts[&("GET".to_string(), "/view/42".to_string())], 1);
}
