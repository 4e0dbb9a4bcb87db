use crate::models::{NewVehicle, Vehicle};
use crate::utils::errors::AppError;
use sqlx::SqlitePool;

#[derive(Debug, Clone)]
pub struct VehicleRepository {
    pool: SqlitePool,
}

impl VehicleRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, vehicle: &NewVehicle) -> Result<Vehicle, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles (make, model, year, license_plate, fuel_type, engine_size, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING *
            "#
        )
        .bind(&vehicle.make)
        .bind(&vehicle.model)
        .bind(vehicle.year)
        .bind(&vehicle.license_plate)
        .bind(&vehicle.fuel_type)
        .bind(vehicle.engine_size)
        .bind(vehicle.created_at)
        .bind(vehicle.updated_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(vehicle)
    }

    pub async fn find_all(&self) -> Result<Vec<Vehicle>, AppError> {
        let vehicles = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(vehicles)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Vehicle>, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(vehicle)
    }

    pub async fn exists_by_id(&self, id: i64) -> Result<bool, AppError> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM vehicles WHERE id = ?)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(exists)
    }

    /// Reemplaza todas las columnas salvo `id` y `created_at`
    pub async fn update(&self, vehicle: &Vehicle) -> Result<Vehicle, AppError> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            UPDATE vehicles
            SET make = ?, model = ?, year = ?, license_plate = ?, fuel_type = ?, engine_size = ?, updated_at = ?
            WHERE id = ?
            RETURNING *
            "#
        )
        .bind(&vehicle.make)
        .bind(&vehicle.model)
        .bind(vehicle.year)
        .bind(&vehicle.license_plate)
        .bind(&vehicle.fuel_type)
        .bind(vehicle.engine_size)
        .bind(vehicle.updated_at)
        .bind(vehicle.id)
        .fetch_one(&self.pool)
        .await?;

        Ok(vehicle)
    }

    pub async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM vehicles WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::test_support::{insert_vehicle, pool};

    #[tokio::test]
    async fn test_insert_assigns_increasing_ids() {
        let pool = pool().await;
        let first = insert_vehicle(&pool, "AAA-111").await;
        let second = insert_vehicle(&pool, "BBB-222").await;
        assert!(second > first);

        let all = VehicleRepository::new(pool).find_all().await.unwrap();
        assert_eq!(all.iter().map(|v| v.id).collect::<Vec<_>>(), vec![first, second]);
    }

    #[tokio::test]
    async fn test_duplicate_license_plate_is_a_database_error() {
        let pool = pool().await;
        insert_vehicle(&pool, "DUP-001").await;

        let now = chrono::Utc::now().naive_utc();
        let result = VehicleRepository::new(pool)
            .insert(&NewVehicle {
                make: "Ford".to_string(),
                model: "Focus".to_string(),
                year: 2018,
                license_plate: "DUP-001".to_string(),
                fuel_type: None,
                engine_size: None,
                created_at: now,
                updated_at: now,
            })
            .await;

        assert!(matches!(result, Err(AppError::Database(_))));
    }

    #[tokio::test]
    async fn test_exists_and_delete() {
        let pool = pool().await;
        let id = insert_vehicle(&pool, "DEL-001").await;
        let repository = VehicleRepository::new(pool);

        assert!(repository.exists_by_id(id).await.unwrap());
        repository.delete_by_id(id).await.unwrap();
        assert!(!repository.exists_by_id(id).await.unwrap());
        assert!(repository.find_by_id(id).await.unwrap().is_none());
    }
}
