use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Arc;
use student_service::{app, AppError, AppState, MemoryStudentRepository, Student, StudentRepository};
use tower::ServiceExt;

/// Backend whose connection pool never hands out a connection.
struct UnreachableStore;

#[async_trait]
impl StudentRepository for UnreachableStore {
    async fn save(&self, _student: Student) -> Result<Student, AppError> {
        Err(AppError::Db(sqlx::Error::PoolTimedOut))
    }

    async fn find_all(&self) -> Result<Vec<Student>, AppError> {
        Err(AppError::Db(sqlx::Error::PoolTimedOut))
    }

    async fn find_by_id(&self, _id: i32) -> Result<Option<Student>, AppError> {
        Err(AppError::Db(sqlx::Error::PoolTimedOut))
    }

    async fn delete_by_id(&self, _id: i32) -> Result<(), AppError> {
        Err(AppError::Db(sqlx::Error::PoolTimedOut))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(AppError::Db(sqlx::Error::PoolTimedOut))
    }
}

fn test_app() -> Router {
    app(AppState::new(Arc::new(MemoryStudentRepository::new())), 1024 * 1024)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(v) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(v.to_string())
        }
        None => Body::empty(),
    };
    let res = app
        .clone()
        .oneshot(builder.body(body).expect("request"))
        .await
        .expect("response");
    let status = res.status();
    let bytes = to_bytes(res.into_body(), usize::MAX).await.expect("body");
    (status, bytes.to_vec())
}

async fn send_json(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let (status, bytes) = send(app, method, uri, body).await;
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

#[tokio::test]
async fn create_list_delete_scenario() {
    let app = test_app();

    let (status, alice) = send_json(
        &app,
        Method::POST,
        "/students/store",
        Some(json!({"name": "Alice", "email": "a@x.com", "rollno": "R1"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(alice, json!({"id": 1, "name": "Alice", "email": "a@x.com", "rollno": "R1"}));

    let (_, bob) = send_json(
        &app,
        Method::POST,
        "/students/store",
        Some(json!({"name": "Bob", "email": "b@x.com", "rollno": "R2"})),
    )
    .await;
    assert_eq!(bob["id"], 2);

    let (status, list) = send_json(&app, Method::GET, "/students/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list, json!([alice, bob]));

    let (status, body) = send(&app, Method::DELETE, "/students/delete/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"Record Deleted");

    let (_, list) = send_json(&app, Method::GET, "/students/", None).await;
    assert_eq!(list, json!([bob]));

    let (status, err) = send_json(&app, Method::GET, "/students/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(err["error"]["code"], "not_found");
}

#[tokio::test]
async fn read_returns_stored_record() {
    let app = test_app();
    send_json(
        &app,
        Method::POST,
        "/students/store",
        Some(json!({"name": "Alice", "email": "a@x.com", "rollno": "R1"})),
    )
    .await;

    let (status, got) = send_json(&app, Method::GET, "/students/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(got["id"], 1);
    assert_eq!(got["name"], "Alice");
}

#[tokio::test]
async fn update_replaces_existing_record() {
    let app = test_app();
    send_json(
        &app,
        Method::POST,
        "/students/store",
        Some(json!({"name": "Alice", "email": "a@x.com", "rollno": "R1"})),
    )
    .await;

    let changed = json!({"id": 1, "name": "Alicia", "email": "alicia@x.com", "rollno": "R7"});
    for _ in 0..2 {
        let (status, saved) = send_json(&app, Method::PUT, "/students/update", Some(changed.clone())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(saved, changed);
    }

    let (_, list) = send_json(&app, Method::GET, "/students", None).await;
    assert_eq!(list, json!([changed]));
}

#[tokio::test]
async fn update_without_id_inserts() {
    let app = test_app();
    let (status, saved) = send_json(
        &app,
        Method::PUT,
        "/students/update",
        Some(json!({"name": "Carol", "email": "c@x.com", "rollno": "R3"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(saved["id"], 1);
}

#[tokio::test]
async fn delete_of_missing_id_still_confirms() {
    let app = test_app();
    let (status, body) = send(&app, Method::DELETE, "/students/delete/404", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"Record Deleted");
}

#[tokio::test]
async fn missing_fields_are_stored_as_null() {
    let app = test_app();
    let (status, saved) = send_json(&app, Method::POST, "/students/store", Some(json!({"name": "Dan"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(saved, json!({"id": 1, "name": "Dan", "email": null, "rollno": null}));
}

#[tokio::test]
async fn malformed_input_gets_framework_rejection() {
    let app = test_app();

    let (status, _) = send(&app, Method::GET, "/students/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let req = Request::builder()
        .method(Method::POST)
        .uri("/students/store")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .expect("request");
    let res = app.clone().oneshot(req).await.expect("response");
    assert!(res.status().is_client_error());
}

#[tokio::test]
async fn common_routes_respond() {
    let app = test_app();

    let (status, health) = send_json(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(health, json!({"status": "ok"}));

    let (status, ready) = send_json(&app, Method::GET, "/ready", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ready, json!({"status": "ok", "database": "ok"}));

    let (_, version) = send_json(&app, Method::GET, "/version", None).await;
    assert_eq!(version["name"], "student-service");
}

#[tokio::test]
async fn ready_reports_degraded_when_store_is_down() {
    let app = app(AppState::new(Arc::new(UnreachableStore)), 1024 * 1024);

    let (status, ready) = send_json(&app, Method::GET, "/ready", None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(ready, json!({"status": "degraded", "database": "unavailable"}));

    let (status, health) = send_json(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(health, json!({"status": "ok"}));
}

#[tokio::test]
async fn store_failure_surfaces_as_server_error() {
    let app = app(AppState::new(Arc::new(UnreachableStore)), 1024 * 1024);
    let (status, err) = send_json(&app, Method::GET, "/students/", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(err["error"]["code"], "database_error");
}

#[tokio::test]
async fn oversized_body_is_rejected() {
    let app = app(AppState::new(Arc::new(MemoryStudentRepository::new())), 16);
    let payload = json!({"name": "Alice", "email": "a@x.com", "rollno": "R1"}).to_string();
    assert!(payload.len() > 16);

    let req = Request::builder()
        .method(Method::POST)
        .uri("/students/store")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::CONTENT_LENGTH, payload.len())
        .body(Body::from(payload))
        .expect("request");
    let res = app.clone().oneshot(req).await.expect("response");
    assert_eq!(res.status(), StatusCode::PAYLOAD_TOO_LARGE);

    let (_, list) = send_json(&app, Method::GET, "/students/", None).await;
    assert_eq!(list, json!([]));
}
