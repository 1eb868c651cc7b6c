use axum::{
    body::{to_bytes, Body, Bytes},
    http::{Method, Request, StatusCode},
    Router,
};
use entity::sea_orm_active_enums::StudentStatus as StudentStatusEntity;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, PaginatorTrait};
use serde_json::{json, Value};
use test_utils::{
    builder::TestBuilder,
    factory::student::{create_student, create_student_with_status, StudentFactory},
};
use tower::ServiceExt;

use crate::server::{router::router, state::AppState};


fn app(db: &DatabaseConnection) -> Router {
    router().with_state(AppState::new(db.clone()))
}

/// Sends `request` through a fresh router and returns the status and raw body.
async fn send(db: &DatabaseConnection, request: Request<Body>) -> (StatusCode, Bytes) {
    let response = app(db).oneshot(request).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    (status, body)
}

/// Sends `request` and parses the response body as JSON.
async fn send_json(db: &DatabaseConnection, request: Request<Body>) -> (StatusCode, Value) {
    let (status, body) = send(db, request).await;
    let value = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };

    (status, value)
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::delete(uri).body(Body::empty()).unwrap()
}

fn with_json(method: Method, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Collects the `email` field of each record in a JSON list response.
fn emails(body: &Value) -> Vec<&str> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|s| s["email"].as_str().unwrap())
        .collect()
}
