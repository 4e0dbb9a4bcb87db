use crate::models::{EngineData, NewEngineData};
use crate::utils::errors::AppError;
use chrono::NaiveDateTime;
use sqlx::SqlitePool;

#[derive(Debug, Clone)]
pub struct EngineDataRepository {
    pool: SqlitePool,
}

impl EngineDataRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, data: &NewEngineData) -> Result<EngineData, AppError> {
        let data = sqlx::query_as::<_, EngineData>(
            r#"
            INSERT INTO engine_data (vehicle_id, engine_temperature, engine_rpm, idling_time_seconds, recording_time, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            RETURNING *
            "#
        )
        .bind(data.vehicle_id)
        .bind(data.engine_temperature)
        .bind(data.engine_rpm)
        .bind(data.idling_time_seconds)
        .bind(data.recording_time)
        .bind(data.created_at)
        .bind(data.updated_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(data)
    }

    pub async fn find_all(&self) -> Result<Vec<EngineData>, AppError> {
        let rows = sqlx::query_as::<_, EngineData>("SELECT * FROM engine_data ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<EngineData>, AppError> {
        let row = sqlx::query_as::<_, EngineData>("SELECT * FROM engine_data WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row)
    }

    pub async fn find_by_vehicle_id(&self, vehicle_id: i64) -> Result<Vec<EngineData>, AppError> {
        let rows = sqlx::query_as::<_, EngineData>(
            "SELECT * FROM engine_data WHERE vehicle_id = ? ORDER BY id"
        )
        .bind(vehicle_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    /// Lecturas con `recording_time` dentro de `[start, end]`, ambos incluidos
    pub async fn find_by_vehicle_id_and_recording_time_between(
        &self,
        vehicle_id: i64,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<EngineData>, AppError> {
        let rows = sqlx::query_as::<_, EngineData>(
            r#"
            SELECT * FROM engine_data
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
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM engine_data WHERE id = ?)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(exists)
    }

    pub async fn update(&self, data: &EngineData) -> Result<EngineData, AppError> {
        let data = sqlx::query_as::<_, EngineData>(
            r#"
            UPDATE engine_data
            SET vehicle_id = ?, engine_temperature = ?, engine_rpm = ?, idling_time_seconds = ?, recording_time = ?, updated_at = ?
            WHERE id = ?
            RETURNING *
            "#
        )
        .bind(data.vehicle_id)
        .bind(data.engine_temperature)
        .bind(data.engine_rpm)
        .bind(data.idling_time_seconds)
        .bind(data.recording_time)
        .bind(data.updated_at)
        .bind(data.id)
        .fetch_one(&self.pool)
        .await?;

        Ok(data)
    }

    pub async fn delete_by_id(&self, id: i64) -> Result<(), AppError> {
        sqlx::query("DELETE FROM engine_data WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    // Agregados: NULL (None) cuando no hay filas

    pub async fn average_engine_temperature(&self, vehicle_id: i64) -> Result<Option<f64>, AppError> {
        let avg: Option<f64> = sqlx::query_scalar(
            "SELECT AVG(engine_temperature) FROM engine_data WHERE vehicle_id = ?"
        )
        .bind(vehicle_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(avg)
    }

    pub async fn average_engine_rpm(&self, vehicle_id: i64) -> Result<Option<f64>, AppError> {
        let avg: Option<f64> = sqlx::query_scalar(
            "SELECT AVG(engine_rpm) FROM engine_data WHERE vehicle_id = ?"
        )
        .bind(vehicle_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(avg)
    }

    pub async fn total_idling_time(&self, vehicle_id: i64) -> Result<Option<i64>, AppError> {
        let total: Option<i64> = sqlx::query_scalar(
            "SELECT SUM(idling_time_seconds) FROM engine_data WHERE vehicle_id = ?"
        )
        .bind(vehicle_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(total)
    }
}
