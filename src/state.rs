//! Estado compartido de la aplicación
//!
//! Este módulo define el estado que se pasa a través del router de Axum.
//! Los controladores se construyen una sola vez al arrancar; clonar el
//! estado sólo clona handles del pool.

use sqlx::SqlitePool;

use crate::config::environment::EnvironmentConfig;
use crate::controllers::{
    EmissionDataController, EngineDataController, FuelConsumptionController, VehicleController,
};

#[derive(Debug, Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub config: EnvironmentConfig,
    pub vehicles: VehicleController,
    pub engine_data: EngineDataController,
    pub fuel_consumption: FuelConsumptionController,
    pub emissions: EmissionDataController,
}

impl AppState {
    pub fn new(pool: SqlitePool, config: EnvironmentConfig) -> Self {
        Self {
            vehicles: VehicleController::new(pool.clone()),
            engine_data: EngineDataController::new(pool.clone()),
            fuel_consumption: FuelConsumptionController::new(pool.clone()),
            emissions: EmissionDataController::new(pool.clone()),
            pool,
            config,
        }
    }
}
