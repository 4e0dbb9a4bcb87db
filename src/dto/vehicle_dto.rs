use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::Vehicle;
use crate::utils::validation::validate_not_blank;

// Request para crear o reemplazar un vehículo
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VehicleRequest {
    #[validate(custom = "validate_not_blank")]
    pub make: String,

    #[validate(custom = "validate_not_blank")]
    pub model: String,

    pub year: i32,

    #[validate(custom = "validate_not_blank")]
    pub license_plate: String,

    pub fuel_type: Option<String>,

    #[validate(range(min = 0.0))]
    pub engine_size: Option<f64>,
}

// Response de vehículo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleResponse {
    pub id: i64,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub license_plate: String,
    pub fuel_type: Option<String>,
    pub engine_size: Option<f64>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id,
            make: vehicle.make,
            model: vehicle.model,
            year: vehicle.year,
            license_plate: vehicle.license_plate,
            fuel_type: vehicle.fuel_type,
            engine_size: vehicle.engine_size,
            created_at: vehicle.created_at,
            updated_at: vehicle.updated_at,
        }
    }
}
