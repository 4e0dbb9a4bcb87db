#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use drive_insights::config::EnvironmentConfig;
use drive_insights::database::DatabaseConnection;
use drive_insights::state::AppState;

// App completa sobre una base SQLite en memoria, nueva en cada test
pub async fn create_test_app() -> Router {
    let connection = DatabaseConnection::in_memory()
        .await
        .expect("in-memory database");
    let state = AppState::new(connection.pool().clone(), EnvironmentConfig::default());
    drive_insights::create_app(state)
}

pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, body)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, "GET", uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, "POST", uri, Some(body)).await
}

pub async fn put(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, "PUT", uri, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, "DELETE", uri, None).await
}

pub fn vehicle_body(plate: &str) -> Value {
    json!({
        "make": "Toyota",
        "model": "Prius",
        "year": 2021,
        "licensePlate": plate,
        "fuelType": "Hybrid",
        "engineSize": 1.8
    })
}

pub async fn create_vehicle(app: &Router, plate: &str) -> i64 {
    let (status, body) = post(app, "/api/vehicles", vehicle_body(plate)).await;
    assert_eq!(status, StatusCode::CREATED, "vehicle creation failed: {body}");
    body["id"].as_i64().unwrap()
}
