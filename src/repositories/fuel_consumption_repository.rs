use crate::models::{FuelConsumption, NewFuelConsumption};
use crate::utils::errors::AppError;
use chrono::NaiveDateTime;
use sqlx::SqlitePool;

#[derive(Debug, Clone)]
pub struct FuelConsumptionRepository {
    pool: SqlitePool,
}

impl FuelConsumptionRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, fuel: &NewFuelConsumption) -> Result<FuelConsumption, AppError> {
        let fuel = sqlx::query_as::<_, FuelConsumption>(
            r#"
            INSERT INTO fuel_consumption (vehicle_id, fuel_amount, distance_traveled, miles_per_gallon, fuel_cost, fill_date, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING *
            "#
        )
        .bind(fuel.vehicle_id)
        .bind(fuel.fuel_amount)
        .bind(fuel.distance_traveled)
        .bind(fuel.miles_per_gallon)
        .bind(fuel.fuel_cost)
        .bind(fuel.fill_date)
        .bind(fuel.created_at)
        .bind(fuel.updated_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(fuel)
    }

    pub async fn find_all(&self) -> Result<Vec<FuelConsumption>, AppError> {
        let rows = sqlx::query_as::<_, FuelConsumption>("SELECT * FROM fuel_consumption ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<FuelConsumption>, AppError> {
        let row = sqlx::query_as::<_, FuelConsumption>("SELECT * FROM fuel_consumption WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row)
    }

    pub async fn find_by_vehicle_id(&self, vehicle_id: i64) -> Result<Vec<FuelConsumption>, AppError> {
        let rows = sqlx::query_as::<_, FuelConsumption>(
            "SELECT * FROM fuel_consumption WHERE vehicle_id = ? ORDER BY id"
        )
        .bind(vehicle_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Repostajes con `fill_date` dentro de `[start, end]`, ambos incluidos
    pub async fn find_by_vehicle_id_and_fill_date_between(
        &self,
        vehicle_id: i64,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<FuelConsumption>, AppError> {
        let rows = sqlx::query_as::<_, FuelConsumption>(
            r#"
            SELECT * FROM fuel_consumption
            WHERE vehicle_id = ? AND fill_date BETWEEN ? AND ?
            ORDER BY id
            "#
        )
        .bind(vehicle_id)
        .bind(start)
        .bind(end)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn exists_by_id(&self, id: i64) -> Result<bool, AppError> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM fuel_consumption WHERE id = ?)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(exists)
    }

    pub async fn update(&self, fuel: &FuelConsumption) -> Result<FuelConsumption, AppError> {
        let fuel = sqlx::query_as::<_, FuelConsumption>(
            r#"
            UPDATE fuel_consumption
            SET vehicle_id = ?, fuel_amount = ?, distance_traveled = ?, miles_per_gallon = ?, fuel_cost = ?, fill_date = ?, updated_at = ?
            WHERE id = ?
            RETURNING *
            "#
        )
        .bind(fuel.vehicle_id)
        .bind(fuel.fuel_amount)
        .bind(fuel.distance_traveled)
        .bind(fuel.miles_per_gallon)
        .bind(fuel.fuel_cost)
        .bind(fuel.fill_date)
        .bind(fuel.updated_at)
        .bind(fuel.id)
        .fetch_one(&self.pool)
        .await?;

        Ok(fuel)
    }

    pub async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM fuel_consumption WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Media de MPG; NULL (None) si el vehículo no tiene repostajes
    pub async fn average_mpg(&self, vehicle_id: i64) -> Result<Option<f64>, AppError> {
        let avg: Option<f64> = sqlx::query_scalar(
            "SELECT AVG(miles_per_gallon) FROM fuel_consumption WHERE vehicle_id = ?"
        )
        .bind(vehicle_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(avg)
    }
}
