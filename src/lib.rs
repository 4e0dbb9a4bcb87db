//! Drive Insights - backend de telemetría de vehículos
//!
//! CRUD REST sobre vehículos y tres series temporales asociadas
//! (datos de motor, consumo de combustible y emisiones), con agregados
//! por vehículo calculados en SQLite.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod utils;

use axum::{extract::State, response::Json, routing::get, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::middleware::cors::cors_layer;
use crate::state::AppState;

/// Construir el router completo de la aplicación
pub fn create_app(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors_origins);

    Router::new()
        .route("/", get(home))
        .route("/health", get(health_check))
        .merge(routes::create_api_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn home() -> &'static str {
    "Drive Insights API is running!"
}

/// Health check: comprueba también la base de datos
async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    let (status, database) = match sqlx::query("SELECT 1").execute(&state.pool).await {
        Ok(_) => ("ok", "up"),
        Err(e) => {
            tracing::error!("❌ Health check de base de datos falló: {}", e);
            ("degraded", "down")
        }
    };

    Json(json!({
        "status": status,
        "service": "drive-insights",
        "environment": state.config.environment,
        "database": database,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
