//! Modelo de Vehicle
//!
//! Mapea exactamente a la tabla `vehicles`.

use chrono::NaiveDateTime;
use sqlx::FromRow;

/// Vehicle principal - fila de la tabla vehicles
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Vehicle {
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

/// Vehículo listo para insertar (sin id asignado)
#[derive(Debug, Clone)]
pub struct NewVehicle {
    pub make: String,
    pub model: String,
    pub year: i32,
    pub license_plate: String,
    pub fuel_type: Option<String>,
    pub engine_size: Option<f64>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
