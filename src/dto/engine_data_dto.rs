use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::EngineData;
use crate::utils::datetime::deserialize_iso_datetime;

// Request para crear o reemplazar una lectura de motor
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EngineDataRequest {
    pub vehicle_id: i64,

    pub engine_temperature: f64,

    #[validate(range(min = 0))]
    pub engine_rpm: i32,

    #[validate(range(min = 0))]
    pub idling_time_seconds: Option<i32>,

    #[serde(deserialize_with = "deserialize_iso_datetime")]
    pub recording_time: NaiveDateTime,
}

// Response de lectura de motor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineDataResponse {
    pub id: i64,
    pub vehicle_id: i64,
    pub engine_temperature: f64,
    pub engine_rpm: i32,
    pub idling_time_seconds: Option<i32>,
    pub recording_time: NaiveDateTime,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<EngineData> for EngineDataResponse {
    fn from(data: EngineData) -> Self {
        Self {
            id: data.id,
            vehicle_id: data.vehicle_id,
            engine_temperature: data.engine_temperature,
            engine_rpm: data.engine_rpm,
            idling_time_seconds: data.idling_time_seconds,
            recording_time: data.recording_time,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_rpm_fails_validation() {
        let request: EngineDataRequest = serde_json::from_value(serde_json::json!({
            "vehicleId": 1,
            "engineTemperature": 90.5,
            "engineRpm": -1,
            "recordingTime": "2024-03-01T10:00:00"
        }))
        .unwrap();

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_idling_time_is_optional() {
        let request: EngineDataRequest = serde_json::from_value(serde_json::json!({
            "vehicleId": 1,
            "engineTemperature": 90.5,
            "engineRpm": 2500,
            "recordingTime": "2024-03-01T10:00:00"
        }))
        .unwrap();

        assert_eq!(request.idling_time_seconds, None);
        assert!(request.validate().is_ok());
    }
}
