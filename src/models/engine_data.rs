//! Modelo de EngineData

use chrono::NaiveDateTime;
use sqlx::FromRow;

/// Lectura de motor - fila de la tabla engine_data
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct EngineData {
    pub id: i64,
    pub vehicle_id: i64,
    pub engine_temperature: f64,
    pub engine_rpm: i32,
    pub idling_time_seconds: Option<i32>,
    pub recording_time: NaiveDateTime,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone)]
pub struct NewEngineData {
    pub vehicle_id: i64,
    pub engine_temperature: f64,
    pub engine_rpm: i32,
    pub idling_time_seconds: Option<i32>,
    pub recording_time: NaiveDateTime,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}
