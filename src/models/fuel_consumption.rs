//! Modelo de FuelConsumption

use chrono::NaiveDateTime;
use sqlx::FromRow;

/// Repostaje - fila de la tabla fuel_consumption
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct FuelConsumption {
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

#[derive(Debug, Clone)]
pub struct NewFuelConsumption {
    pub vehicle_id: i64,
    pub fuel_amount: f64,
    pub distance_traveled: f64,
    pub miles_per_gallon: Option<f64>,
    pub fuel_cost: Option<f64>,
    pub fill_date: NaiveDateTime,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Calcular millas por galón cuando no se informan
///
/// Un valor explícito se respeta siempre. Sin valor y con combustible
/// mayor que cero, se deriva como distancia / combustible.
pub fn resolve_miles_per_gallon(
    miles_per_gallon: Option<f64>,
    fuel_amount: f64,
    distance_traveled: f64,
) -> Option<f64> {
    match miles_per_gallon {
        Some(mpg) => Some(mpg),
        None if fuel_amount > 0.0 => Some(distance_traveled / fuel_amount),
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mpg_derived_when_absent() {
        assert_eq!(resolve_miles_per_gallon(None, 10.0, 300.0), Some(30.0));
    }

    #[test]
    fn test_explicit_mpg_is_kept() {
        assert_eq!(resolve_miles_per_gallon(Some(25.0), 10.0, 300.0), Some(25.0));
    }

    #[test]
    fn test_no_mpg_without_fuel() {
        assert_eq!(resolve_miles_per_gallon(None, 0.0, 300.0), None);
    }
}
