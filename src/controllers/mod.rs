//! Controladores (capa de operaciones)
//!
//! Cada controlador implementa los casos de uso de una entidad:
//! comprobaciones de existencia, sellado de timestamps y mapeo a DTO.
//! Se construyen una sola vez al arrancar y viven en `AppState`.

pub mod emission_data_controller;
pub mod engine_data_controller;
pub mod fuel_consumption_controller;
pub mod vehicle_controller;

pub use emission_data_controller::EmissionDataController;
pub use engine_data_controller::EngineDataController;
pub use fuel_consumption_controller::FuelConsumptionController;
pub use vehicle_controller::VehicleController;

use chrono::NaiveDateTime;

use crate::models::Vehicle;
use crate::repositories::VehicleRepository;
use crate::utils::errors::{not_found_error, AppError};

/// Hora actual para `created_at` / `updated_at`
pub(crate) fn now() -> NaiveDateTime {
    chrono::Utc::now().naive_utc()
}

/// Resolver la clave foránea de vehículo o fallar con NotFound
pub(crate) async fn resolve_vehicle(
    vehicles: &VehicleRepository,
    vehicle_id: i64,
) -> Result<Vehicle, AppError> {
    vehicles
        .find_by_id(vehicle_id)
        .await?
        .ok_or_else(|| not_found_error("Vehicle", vehicle_id))
}

#[cfg(test)]
pub(crate) mod test_support {
    use sqlx::SqlitePool;

    use super::VehicleController;
    use crate::dto::VehicleRequest;

    pub async fn create_vehicle(pool: &SqlitePool, plate: &str) -> i64 {
        VehicleController::new(pool.clone())
            .create(VehicleRequest {
                make: "Honda".to_string(),
                model: "Civic".to_string(),
                year: 2019,
                license_plate: plate.to_string(),
                fuel_type: Some("Gasoline".to_string()),
                engine_size: Some(2.0),
            })
            .await
            .unwrap()
            .id
    }
}
