use crate::controllers::{now, resolve_vehicle};
use crate::dto::{EngineDataRequest, EngineDataResponse};
use crate::models::NewEngineData;
use crate::repositories::{EngineDataRepository, VehicleRepository};
use crate::utils::errors::{not_found_error, AppError};
use chrono::NaiveDateTime;
use sqlx::SqlitePool;
use tracing::{debug, info};

const ENTITY: &str = "Engine data";

#[derive(Debug, Clone)]
pub struct EngineDataController {
    repository: EngineDataRepository,
    vehicles: VehicleRepository,
}

impl EngineDataController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: EngineDataRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool),
        }
    }

    pub async fn list_all(&self) -> Result<Vec<EngineDataResponse>, AppError> {
        let rows = self.repository.find_all().await?;
        Ok(rows.into_iter().map(EngineDataResponse::from).collect())
    }

    pub async fn get_by_id(&self, id: i64) -> Result<EngineDataResponse, AppError> {
        let data = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error(ENTITY, id))?;

        Ok(EngineDataResponse::from(data))
    }

    /// No falla si el vehículo no existe: devuelve una lista vacía
    pub async fn list_by_vehicle(&self, vehicle_id: i64) -> Result<Vec<EngineDataResponse>, AppError> {
        let rows = self.repository.find_by_vehicle_id(vehicle_id).await?;
        debug!("{} lecturas de motor para vehículo {}", rows.len(), vehicle_id);
        Ok(rows.into_iter().map(EngineDataResponse::from).collect())
    }

    pub async fn list_by_vehicle_and_range(
        &self,
        vehicle_id: i64,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<EngineDataResponse>, AppError> {
        let rows = self
            .repository
            .find_by_vehicle_id_and_recording_time_between(vehicle_id, start, end)
            .await?;

        Ok(rows.into_iter().map(EngineDataResponse::from).collect())
    }

    pub async fn create(&self, request: EngineDataRequest) -> Result<EngineDataResponse, AppError> {
        let vehicle = resolve_vehicle(&self.vehicles, request.vehicle_id).await?;

        let timestamp = now();
        let data = self
            .repository
            .insert(&NewEngineData {
                vehicle_id: vehicle.id,
                engine_temperature: request.engine_temperature,
                engine_rpm: request.engine_rpm,
                idling_time_seconds: request.idling_time_seconds,
                recording_time: request.recording_time,
                created_at: timestamp,
                updated_at: timestamp,
            })
            .await?;

        info!("🔧 Lectura de motor {} creada para vehículo {}", data.id, data.vehicle_id);
        Ok(EngineDataResponse::from(data))
    }

    pub async fn update(&self, id: i64, request: EngineDataRequest) -> Result<EngineDataResponse, AppError> {
        let mut data = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error(ENTITY, id))?;

        if data.vehicle_id != request.vehicle_id {
            data.vehicle_id = resolve_vehicle(&self.vehicles, request.vehicle_id).await?.id;
        }

        data.engine_temperature = request.engine_temperature;
        data.engine_rpm = request.engine_rpm;
        data.idling_time_seconds = request.idling_time_seconds;
        data.recording_time = request.recording_time;
        data.updated_at = now();

        let data = self.repository.update(&data).await?;
        info!("🔧 Lectura de motor {} actualizada", data.id);
        Ok(EngineDataResponse::from(data))
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if !self.repository.exists_by_id(id).await? {
            return Err(not_found_error(ENTITY, id));
        }

        self.repository.delete_by_id(id).await?;
        info!("🗑️  Lectura de motor {} eliminada", id);
        Ok(())
    }

    pub async fn average_engine_temperature(&self, vehicle_id: i64) -> Result<Option<f64>, AppError> {
        self.repository.average_engine_temperature(vehicle_id).await
    }

    pub async fn average_engine_rpm(&self, vehicle_id: i64) -> Result<Option<f64>, AppError> {
        self.repository.average_engine_rpm(vehicle_id).await
    }

    pub async fn total_idling_time(&self, vehicle_id: i64) -> Result<Option<i64>, AppError> {
        self.repository.total_idling_time(vehicle_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::test_support::create_vehicle;
    use crate::repositories::test_support::{at, pool};

    fn request(vehicle_id: i64) -> EngineDataRequest {
        EngineDataRequest {
            vehicle_id,
            engine_temperature: 92.5,
            engine_rpm: 2400,
            idling_time_seconds: Some(120),
            recording_time: at(1, 10),
        }
    }

    #[tokio::test]
    async fn test_create_with_unknown_vehicle_writes_nothing() {
        let controller = EngineDataController::new(pool().await);

        let result = controller.create(request(999)).await;
        match result {
            Err(AppError::NotFound(msg)) => assert_eq!(msg, "Vehicle not found with id: 999"),
            other => panic!("expected NotFound, got {:?}", other),
        }
        assert!(controller.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_moves_record_to_another_vehicle() {
        let pool = pool().await;
        let first = create_vehicle(&pool, "ENG-A").await;
        let second = create_vehicle(&pool, "ENG-B").await;
        let controller = EngineDataController::new(pool);

        let created = controller.create(request(first)).await.unwrap();
        let mut replacement = request(second);
        replacement.idling_time_seconds = None;
        let updated = controller.update(created.id, replacement).await.unwrap();

        assert_eq!(updated.vehicle_id, second);
        assert_eq!(updated.idling_time_seconds, None);
        assert_eq!(updated.created_at, created.created_at);
        assert!(controller.list_by_vehicle(first).await.unwrap().is_empty());
        assert_eq!(controller.list_by_vehicle(second).await.unwrap(), vec![updated]);
    }

    #[tokio::test]
    async fn test_update_to_unknown_vehicle_is_not_found() {
        let pool = pool().await;
        let vehicle_id = create_vehicle(&pool, "ENG-C").await;
        let controller = EngineDataController::new(pool);
        let created = controller.create(request(vehicle_id)).await.unwrap();

        let result = controller.update(created.id, request(12345)).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert_eq!(controller.get_by_id(created.id).await.unwrap(), created);
    }
}
