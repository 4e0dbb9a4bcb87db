//! Repositorios
//!
//! Acceso a SQLite, una struct por tabla. Cada repositorio clona el pool,
//! que es barato de clonar.

pub mod emission_data_repository;
pub mod engine_data_repository;
pub mod fuel_consumption_repository;
pub mod vehicle_repository;

pub use emission_data_repository::EmissionDataRepository;
pub use engine_data_repository::EngineDataRepository;
pub use fuel_consumption_repository::FuelConsumptionRepository;
pub use vehicle_repository::VehicleRepository;

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::{NaiveDate, NaiveDateTime};
    use sqlx::SqlitePool;

    use crate::database::DatabaseConnection;
    use crate::models::NewVehicle;
    use crate::repositories::VehicleRepository;

    pub async fn pool() -> SqlitePool {
        DatabaseConnection::in_memory()
            .await
            .expect("in-memory database")
            .pool()
            .clone()
    }

    pub fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    pub async fn insert_vehicle(pool: &SqlitePool, plate: &str) -> i64 {
        let now = chrono::Utc::now().naive_utc();
        VehicleRepository::new(pool.clone())
            .insert(&NewVehicle {
                make: "Toyota".to_string(),
                model: "Corolla".to_string(),
                year: 2020,
                license_plate: plate.to_string(),
                fuel_type: Some("Gasoline".to_string()),
                engine_size: Some(1.8),
                created_at: now,
                updated_at: now,
            })
            .await
            .unwrap()
            .id
    }
}
