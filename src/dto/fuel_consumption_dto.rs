use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::FuelConsumption;
use crate::utils::datetime::deserialize_iso_datetime;

// Request para crear o reemplazar un repostaje
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FuelConsumptionRequest {
    pub vehicle_id: i64,

    #[validate(range(min = 0.0))]
    pub fuel_amount: f64,

    #[validate(range(min = 0.0))]
    pub distance_traveled: f64,

    #[validate(range(min = 0.0))]
    pub miles_per_gallon: Option<f64>,

    #[validate(range(min = 0.0))]
    pub fuel_cost: Option<f64>,

    #[serde(deserialize_with = "deserialize_iso_datetime")]
    pub fill_date: NaiveDateTime,
}

// Response de repostaje
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuelConsumptionResponse {
    pub id: i64,
    pub vehicle_id: i64,
    pub fuel_amount: f64,
    pub distance_traveled: f64,
    pub miles_per_gallon: Option<f64>,
    pub fuel_cost: Option<f64>,
    pub fill_date: NaiveDateTime,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl From<FuelConsumption> for FuelConsumptionResponse {
    fn from(fuel: FuelConsumption) -> Self {
        Self {
            id: fuel.id,
            vehicle_id: fuel.vehicle_id,
            fuel_amount: fuel.fuel_amount,
            distance_traveled: fuel.distance_traveled,
            miles_per_gallon: fuel.miles_per_gallon,
            fuel_cost: fuel.fuel_cost,
            fill_date: fuel.fill_date,
            created_at: fuel.created_at,
            updated_at: fuel.updated_at,
        }
    }
}
