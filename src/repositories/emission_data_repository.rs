use crate::models::{EmissionData, NewEmissionData};
use crate::utils::errors::AppError;
use chrono::NaiveDateTime;
use sqlx::SqlitePool;

#[derive(Debug, Clone)]
pub struct EmissionDataRepository {
    pool: SqlitePool,
}

impl EmissionDataRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, data: &NewEmissionData) -> Result<EmissionData, AppError> {
        let data = sqlx::query_as::<_, EmissionData>(
            r#"
            INSERT INTO emission_data (vehicle_id, co2_emissions, nox_emissions, particulate_matter, recording_time, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            RETURNING *
            "#
        )
        .bind(data.vehicle_id)
        .bind(data.co2_emissions)
        .bind(data.nox_emissions)
        .bind(data.particulate_matter)
        .bind(data.recording_time)
        .bind(data.created_at)
        .bind(data.updated_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(data)
    }

    pub async fn find_all(&self) -> Result<Vec<EmissionData>, AppError> {
        let rows = sqlx::query_as::<_, EmissionData>("SELECT * FROM emission_data ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<EmissionData>, AppError> {
        let row = sqlx::query_as::<_, EmissionData>("SELECT * FROM emission_data WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row)
    }

    pub async fn find_by_vehicle_id(&self, vehicle_id: i64) -> Result<Vec<EmissionData>, AppError> {
        let rows = sqlx::query_as::<_, EmissionData>(
            "SELECT * FROM emission_data WHERE vehicle_id = ? ORDER BY id"
        )
        .bind(vehicle_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    pub async fn find_by_vehicle_id_and_recording_time_between(
        &self,
        vehicle_id: i64,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<EmissionData>, AppError> {
        let rows = sqlx::query_as::<_, EmissionData>(
            r#"
            SELECT * FROM emission_data
            WHERE vehicle_id = ? AND recording_time BETWEEN ? AND ?
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
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM emission_data WHERE id = ?)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(exists)
    }

    pub async fn update(&self, data: &EmissionData) -> Result<EmissionData, AppError> {
        let data = sqlx::query_as::<_, EmissionData>(
            r#"
            UPDATE emission_data
            SET vehicle_id = ?, co2_emissions = ?, nox_emissions = ?, particulate_matter = ?, recording_time = ?, updated_at = ?
            WHERE id = ?
            RETURNING *
            "#
        )
        .bind(data.vehicle_id)
        .bind(data.co2_emissions)
        .bind(data.nox_emissions)
        .bind(data.particulate_matter)
        .bind(data.recording_time)
        .bind(data.updated_at)
        .bind(data.id)
        .fetch_one(&self.pool)
        .await?;

        Ok(data)
    }

    pub async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM emission_data WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn average_co2_emissions(&self, vehicle_id: i64) -> Result<Option<f64>, AppError> {
        let avg: Option<f64> = sqlx::query_scalar(
            "SELECT AVG(co2_emissions) FROM emission_data WHERE vehicle_id = ?"
        )
        .bind(vehicle_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(avg)
    }

    pub async fn total_co2_emissions(&self, vehicle_id: i64) -> Result<Option<f64>, AppError> {
        let total: Option<f64> = sqlx::query_scalar(
            "SELECT SUM(co2_emissions) FROM emission_data WHERE vehicle_id = ?"
        )
        .bind(vehicle_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(total)
    }
}
