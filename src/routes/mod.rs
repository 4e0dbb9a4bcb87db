//! Rutas de la API
//!
//! Un router por colección; `create_api_router` los monta bajo `/api`.

pub mod emission_data_routes;
pub mod engine_data_routes;
pub mod fuel_consumption_routes;
pub mod vehicle_routes;

use axum::Router;

use crate::state::AppState;

/// Crear el router principal de la API
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/api/vehicles", vehicle_routes::create_vehicle_router())
        .nest("/api/engine-data", engine_data_routes::create_engine_data_router())
        .nest("/api/fuel-consumption", fuel_consumption_routes::create_fuel_consumption_router())
        .nest("/api/emissions", emission_data_routes::create_emission_data_router())
}
