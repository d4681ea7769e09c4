//! HTTP surface tests: routes, status codes, and exact wire shapes.
//!
//! The router is driven directly through `tower::ServiceExt::oneshot`
//! over an in-memory SQLite store, so these tests cover everything from
//! request parsing to JSON serialization without opening a socket.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use taskboard::database::{self, SqliteTaskRepository};
use taskboard::web::{self, AppState};

async fn test_app() -> Router {
    let repository = database::connect("sqlite::memory:")
        .await
        .expect("in-memory store should connect");
    web::router(AppState::new(repository))
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.clone().oneshot(request).await.expect("request");
    let status = response.status();
    let body = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    (status, body.to_vec())
}

fn parse_json(body: &[u8]) -> Value {
    serde_json::from_slice(body).expect("response should be JSON")
}

fn post_task(title: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/tasks")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({ "title": title }).to_string()))
        .expect("request")
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}

fn request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("request")
}

async fn create_task(app: &Router, title: &str) -> Value {
    let (status, body) = send(app, post_task(title)).await;
    assert_eq!(status, StatusCode::OK);
    parse_json(&body)
}

#[tokio::test]
async fn create_returns_the_stored_task() {
    let app = test_app().await;

    let task = create_task(&app, "  Buy milk  ").await;
    assert_eq!(task["title"], "Buy milk");
    assert_eq!(task["is_done"], Value::Bool(false));
    assert!(task["id"].is_i64());

    let created_at = task["created_at"].as_str().expect("created_at string");
    chrono::DateTime::parse_from_rfc3339(created_at).expect("ISO-8601 timestamp");
}

#[tokio::test]
async fn create_with_blank_title_is_rejected_and_not_persisted() {
    let app = test_app().await;

    let (status, body) = send(&app, post_task("   ")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(parse_json(&body), json!({ "error": "title required" }));

    let (status, body) = send(&app, get("/api/tasks")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(parse_json(&body), json!([]));
}

#[tokio::test]
async fn create_tolerates_missing_and_malformed_bodies() {
    let app = test_app().await;

    // No body at all behaves as {} and fails title validation, not parsing.
    let (status, body) = send(&app, request("POST", "/api/tasks")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(parse_json(&body), json!({ "error": "title required" }));

    for bad_body in ["not json {", r#"{"title": 42}"#, r#"[1, 2]"#] {
        let malformed = Request::builder()
            .method("POST")
            .uri("/api/tasks")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(bad_body))
            .expect("request");
        let (status, body) = send(&app, malformed).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(parse_json(&body), json!({ "error": "title required" }));
    }
}

#[tokio::test]
async fn list_filters_by_status_and_orders_newest_first() {
    let app = test_app().await;

    let first = create_task(&app, "write report").await;
    let second = create_task(&app, "file report").await;
    let toggle = request(
        "PATCH",
        &format!("/api/tasks/{}/toggle", second["id"].as_i64().unwrap()),
    );
    let (status, _) = send(&app, toggle).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, get("/api/tasks?status=active")).await;
    let active = parse_json(&body);
    assert_eq!(active.as_array().unwrap().len(), 1);
    assert_eq!(active[0]["id"], first["id"]);

    let (_, body) = send(&app, get("/api/tasks?status=completed")).await;
    let completed = parse_json(&body);
    assert_eq!(completed.as_array().unwrap().len(), 1);
    assert_eq!(completed[0]["id"], second["id"]);

    let (_, body) = send(&app, get("/api/tasks?status=all")).await;
    let all = parse_json(&body);
    assert_eq!(all.as_array().unwrap().len(), 2);
    assert_eq!(all[0]["id"], second["id"]);
    assert_eq!(all[1]["id"], first["id"]);
}

#[tokio::test]
async fn unrecognized_status_values_behave_as_all() {
    let app = test_app().await;

    create_task(&app, "one").await;
    create_task(&app, "two").await;

    for uri in [
        "/api/tasks",
        "/api/tasks?status=bogus",
        "/api/tasks?status=ACTIVE",
        "/api/tasks?status=",
    ] {
        let (status, body) = send(&app, get(uri)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(parse_json(&body).as_array().unwrap().len(), 2, "{uri}");
    }
}

#[tokio::test]
async fn toggle_returns_updated_task_or_404() {
    let app = test_app().await;

    let task = create_task(&app, "call plumber").await;
    let id = task["id"].as_i64().unwrap();

    let (status, body) = send(&app, request("PATCH", &format!("/api/tasks/{id}/toggle"))).await;
    assert_eq!(status, StatusCode::OK);
    let toggled = parse_json(&body);
    assert_eq!(toggled["is_done"], Value::Bool(true));
    assert_eq!(toggled["created_at"], task["created_at"]);

    let (status, body) = send(&app, request("PATCH", "/api/tasks/9999/toggle")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(parse_json(&body), json!({ "error": "not found" }));
}

#[tokio::test]
async fn delete_returns_204_with_empty_body_or_404() {
    let app = test_app().await;

    let task = create_task(&app, "shred documents").await;
    let id = task["id"].as_i64().unwrap();

    let (status, body) = send(&app, request("DELETE", &format!("/api/tasks/{id}"))).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(body.is_empty());

    let (status, body) = send(&app, request("DELETE", &format!("/api/tasks/{id}"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(parse_json(&body), json!({ "error": "not found" }));
}

#[tokio::test]
async fn bulk_delete_reports_the_deleted_count() {
    let app = test_app().await;

    create_task(&app, "keep me").await;
    for title in ["done one", "done two"] {
        let task = create_task(&app, title).await;
        let id = task["id"].as_i64().unwrap();
        send(&app, request("PATCH", &format!("/api/tasks/{id}/toggle"))).await;
    }

    let (status, body) = send(&app, request("DELETE", "/api/tasks?status=completed")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(parse_json(&body), json!({ "deleted": 2 }));

    let (_, body) = send(&app, get("/api/tasks")).await;
    let remaining = parse_json(&body);
    assert_eq!(remaining.as_array().unwrap().len(), 1);
    assert_eq!(remaining[0]["title"], "keep me");
}

#[tokio::test]
async fn health_reports_ok_when_the_store_is_reachable() {
    let app = test_app().await;

    let (status, body) = send(&app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(parse_json(&body), json!({ "status": "ok" }));
}

#[tokio::test]
async fn health_reports_error_category_when_the_store_is_down() {
    let repository = SqliteTaskRepository::connect("sqlite::memory:")
        .await
        .expect("connect");
    repository.pool().close().await;
    let app = web::router(AppState::new(Arc::new(repository)));

    let (status, body) = send(&app, get("/health")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        parse_json(&body),
        json!({ "status": "db_error", "detail": "PoolClosed" })
    );
}

#[tokio::test]
async fn index_serves_the_ui_entry_page() {
    let app = test_app().await;

    let (status, body) = send(&app, get("/")).await;
    assert_eq!(status, StatusCode::OK);
    let page = String::from_utf8(body).expect("utf-8");
    assert!(page.contains("<!DOCTYPE html>"));
}
