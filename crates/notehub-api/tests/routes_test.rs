//! Router-level tests over the in-memory store: status mapping, the
//! owner-header boundary, and the folder/file/tree round trips.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;
use uuid::Uuid;

use notehub_api::state::AppState;
use notehub_core::config::{AppConfig, DatabaseConfig, LoggingConfig, ServerConfig};
use notehub_database::{MemoryNamespaceStore, NamespaceStore};

fn test_app() -> Router {
    let config = Arc::new(AppConfig {
        server: ServerConfig::default(),
        database: DatabaseConfig {
            url: "postgres://localhost:5432/unused".to_string(),
            max_connections: 5,
            min_connections: 1,
            connect_timeout_seconds: 5,
            idle_timeout_seconds: 60,
        },
        logging: LoggingConfig::default(),
    });
    let store: Arc<dyn NamespaceStore> = Arc::new(MemoryNamespaceStore::new());
    notehub_api::build_router(AppState::build(config, store))
}

async fn request(
    app: &Router,
    method: &str,
    uri: &str,
    owner: Option<Uuid>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(owner) = owner {
        builder = builder.header("x-user-id", owner.to_string());
    }
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("request"),
        None => builder.body(Body::empty()).expect("request"),
    };

    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };
    (status, value)
}

fn id_of(body: &Value) -> Uuid {
    body["data"]["id"]
        .as_str()
        .expect("data.id")
        .parse()
        .expect("uuid")
}

#[tokio::test]
async fn requests_without_an_owner_header_are_rejected() {
    let app = test_app();
    let (status, body) = request(&app, "GET", "/api/folders", None, None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn folder_round_trip_orders_by_path() {
    let app = test_app();
    let owner = Uuid::new_v4();

    let (status, a) = request(
        &app,
        "POST",
        "/api/folders",
        Some(owner),
        Some(json!({"name": "b"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let b_id = id_of(&a);

    request(
        &app,
        "POST",
        "/api/folders",
        Some(owner),
        Some(json!({"name": "a"})),
    )
    .await;
    request(
        &app,
        "POST",
        "/api/folders",
        Some(owner),
        Some(json!({"name": "inner", "parent_id": b_id})),
    )
    .await;

    let (status, body) = request(&app, "GET", "/api/folders", Some(owner), None).await;
    assert_eq!(status, StatusCode::OK);
    let paths: Vec<&str> = body["data"]
        .as_array()
        .expect("array")
        .iter()
        .map(|f| f["path"].as_str().expect("path"))
        .collect();
    assert_eq!(paths, vec!["a", "b", "b/inner"]);
}

#[tokio::test]
async fn missing_folder_is_404() {
    let app = test_app();
    let (status, body) = request(
        &app,
        "GET",
        &format!("/api/folders/{}", Uuid::new_v4()),
        Some(Uuid::new_v4()),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NOT_FOUND");
}

#[tokio::test]
async fn rename_cascades_through_the_api() {
    let app = test_app();
    let owner = Uuid::new_v4();

    let (_, a) = request(
        &app,
        "POST",
        "/api/folders",
        Some(owner),
        Some(json!({"name": "A"})),
    )
    .await;
    let a_id = id_of(&a);
    request(
        &app,
        "POST",
        "/api/folders",
        Some(owner),
        Some(json!({"name": "B", "parent_id": a_id})),
    )
    .await;

    let (status, renamed) = request(
        &app,
        "PUT",
        &format!("/api/folders/{a_id}"),
        Some(owner),
        Some(json!({"name": "A2"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(renamed["data"]["path"], "A2");

    let (_, body) = request(&app, "GET", "/api/folders", Some(owner), None).await;
    let paths: Vec<&str> = body["data"]
        .as_array()
        .expect("array")
        .iter()
        .map(|f| f["path"].as_str().expect("path"))
        .collect();
    assert_eq!(paths, vec!["A2", "A2/B"]);
}

#[tokio::test]
async fn explicit_null_parent_moves_to_root() {
    let app = test_app();
    let owner = Uuid::new_v4();

    let (_, a) = request(
        &app,
        "POST",
        "/api/folders",
        Some(owner),
        Some(json!({"name": "A"})),
    )
    .await;
    let (_, b) = request(
        &app,
        "POST",
        "/api/folders",
        Some(owner),
        Some(json!({"name": "B", "parent_id": id_of(&a)})),
    )
    .await;
    let b_id = id_of(&b);

    let (status, moved) = request(
        &app,
        "PUT",
        &format!("/api/folders/{b_id}"),
        Some(owner),
        Some(json!({"parent_id": null})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(moved["data"]["path"], "B");
    assert!(moved["data"]["parent_id"].is_null());
}

#[tokio::test]
async fn an_empty_update_is_a_validation_error() {
    let app = test_app();
    let owner = Uuid::new_v4();
    let (_, a) = request(
        &app,
        "POST",
        "/api/folders",
        Some(owner),
        Some(json!({"name": "A"})),
    )
    .await;

    let (status, body) = request(
        &app,
        "PUT",
        &format!("/api/folders/{}", id_of(&a)),
        Some(owner),
        Some(json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn cycle_and_not_empty_map_to_conflict() {
    let app = test_app();
    let owner = Uuid::new_v4();

    let (_, a) = request(
        &app,
        "POST",
        "/api/folders",
        Some(owner),
        Some(json!({"name": "A"})),
    )
    .await;
    let a_id = id_of(&a);
    let (_, b) = request(
        &app,
        "POST",
        "/api/folders",
        Some(owner),
        Some(json!({"name": "B", "parent_id": a_id})),
    )
    .await;
    let b_id = id_of(&b);

    let (status, body) = request(
        &app,
        "PUT",
        &format!("/api/folders/{a_id}"),
        Some(owner),
        Some(json!({"parent_id": b_id})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "CYCLE");

    let (status, body) = request(
        &app,
        "DELETE",
        &format!("/api/folders/{a_id}"),
        Some(owner),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "NOT_EMPTY");

    // Deleting bottom-up succeeds.
    let (status, _) = request(
        &app,
        "DELETE",
        &format!("/api/folders/{b_id}"),
        Some(owner),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = request(
        &app,
        "DELETE",
        &format!("/api/folders/{a_id}"),
        Some(owner),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn files_and_tree_round_trip() {
    let app = test_app();
    let owner = Uuid::new_v4();

    let (_, a) = request(
        &app,
        "POST",
        "/api/folders",
        Some(owner),
        Some(json!({"name": "A"})),
    )
    .await;
    let (_, b) = request(
        &app,
        "POST",
        "/api/folders",
        Some(owner),
        Some(json!({"name": "B", "parent_id": id_of(&a)})),
    )
    .await;

    let (status, file) = request(
        &app,
        "POST",
        "/api/files",
        Some(owner),
        Some(json!({"name": "x.md", "type": "markdown", "folder_id": id_of(&b)})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(file["data"]["type"], "markdown");

    let (status, body) = request(&app, "GET", "/api/files?type=markdown", Some(owner), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().expect("array").len(), 1);

    let (status, tree) = request(&app, "GET", "/api/tree?search=x", Some(owner), None).await;
    assert_eq!(status, StatusCode::OK);
    let roots = tree["data"].as_array().expect("array");
    assert_eq!(roots.len(), 1);
    assert_eq!(roots[0]["name"], "A");
    assert_eq!(roots[0]["children"][0]["name"], "B");
    assert_eq!(roots[0]["children"][0]["children"][0]["name"], "x.md");

    let (_, empty) = request(&app, "GET", "/api/tree?search=zzz", Some(owner), None).await;
    assert_eq!(empty["data"].as_array().expect("array").len(), 0);
}

#[tokio::test]
async fn tenants_are_isolated_at_the_http_boundary() {
    let app = test_app();
    let alice = Uuid::new_v4();
    let mallory = Uuid::new_v4();

    let (_, folder) = request(
        &app,
        "POST",
        "/api/folders",
        Some(alice),
        Some(json!({"name": "private"})),
    )
    .await;
    let folder_id = id_of(&folder);

    let (status, _) = request(
        &app,
        "GET",
        &format!("/api/folders/{folder_id}"),
        Some(mallory),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = request(&app, "GET", "/api/folders", Some(mallory), None).await;
    assert_eq!(body["data"].as_array().expect("array").len(), 0);
}

#[tokio::test]
async fn health_reports_ok() {
    let app = test_app();
    let (status, body) = request(&app, "GET", "/api/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "ok");
}
