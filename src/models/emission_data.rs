//! Modelo de EmissionData

use chrono::NaiveDateTime;
use sqlx::FromRow;

/// Medición de emisiones - fila de la tabla emission_data
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct EmissionData {
    pub id: i64,
    pub vehicle_id: i64,
    pub co2_emissions: f64,
    pub nox_emissions: Option<f64>,
    pub particulate_matter: Option<f64>,
    pub recording_time: NaiveDateTime,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone)]
pub struct NewEmissionData {
    pub vehicle_id: i64,
    pub co2_emissions: f64,
    pub nox_emissions: Option<f64>,
    pub particulate_matter: Option<f64>,
    pub recording_time: NaiveDateTime,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
