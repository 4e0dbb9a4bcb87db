use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::EmissionData;
use crate::utils::datetime::deserialize_iso_datetime;

// Request para crear o reemplazar una medición de emisiones
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EmissionDataRequest {
    pub vehicle_id: i64,

    #[validate(range(min = 0.0))]
    pub co2_emissions: f64,

    #[validate(range(min = 0.0))]
    pub nox_emissions: Option<f64>,

    #[validate(range(min = 0.0))]
    pub particulate_matter: Option<f64>,

    #[serde(deserialize_with = "deserialize_iso_datetime")]
    pub recording_time: NaiveDateTime,
}

// Response de medición de emisiones
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmissionDataResponse {
    pub id: i64,
    pub vehicle_id: i64,
    pub co2_emissions: f64,
    pub nox_emissions: Option<f64>,
    pub particulate_matter: Option<f64>,
    pub recording_time: NaiveDateTime,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<EmissionData> for EmissionDataResponse {
    fn from(data: EmissionData) -> Self {
        Self {
            id: data.id,
            vehicle_id: data.vehicle_id,
            co2_emissions: data.co2_emissions,
            nox_emissions: data.nox_emissions,
            particulate_matter: data.particulate_matter,
            recording_time: data.recording_time,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }
}
