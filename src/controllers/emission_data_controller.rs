use crate::controllers::{now, resolve_vehicle};
use crate::dto::{EmissionDataRequest, EmissionDataResponse};
use crate::models::NewEmissionData;
use crate::repositories::{EmissionDataRepository, VehicleRepository};
use crate::utils::errors::{not_found_error, AppError};
use chrono::NaiveDateTime;
use sqlx::SqlitePool;
use tracing::{debug, info};

const ENTITY: &str = "Emission data";

#[derive(Debug, Clone)]
pub struct EmissionDataController {
    repository: EmissionDataRepository,
    vehicles: VehicleRepository,
}

impl EmissionDataController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: EmissionDataRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool),
        }
    }

    pub async fn list_all(&self) -> Result<Vec<EmissionDataResponse>, AppError> {
        let rows = self.repository.find_all().await?;
        Ok(rows.into_iter().map(EmissionDataResponse::from).collect())
    }

    pub async fn get_by_id(&self, id: i64) -> Result<EmissionDataResponse, AppError> {
        let data = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error(ENTITY, id))?;

        Ok(EmissionDataResponse::from(data))
    }

    pub async fn list_by_vehicle(&self, vehicle_id: i64) -> Result<Vec<EmissionDataResponse>, AppError> {
        let rows = self.repository.find_by_vehicle_id(vehicle_id).await?;
        debug!("{} mediciones de emisiones para vehículo {}", rows.len(), vehicle_id);
        Ok(rows.into_iter().map(EmissionDataResponse::from).collect())
    }

    pub async fn list_by_vehicle_and_range(
        &self,
        vehicle_id: i64,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<EmissionDataResponse>, AppError> {
        let rows = self
            .repository
            .find_by_vehicle_id_and_recording_time_between(vehicle_id, start, end)
            .await?;

        Ok(rows.into_iter().map(EmissionDataResponse::from).collect())
    }

    pub async fn create(&self, request: EmissionDataRequest) -> Result<EmissionDataResponse, AppError> {
        let vehicle = resolve_vehicle(&self.vehicles, request.vehicle_id).await?;

        let timestamp = now();
        let data = self
            .repository
            .insert(&NewEmissionData {
                vehicle_id: vehicle.id,
                co2_emissions: request.co2_emissions,
                nox_emissions: request.nox_emissions,
                particulate_matter: request.particulate_matter,
                recording_time: request.recording_time,
                created_at: timestamp,
                updated_at: timestamp,
            })
            .await?;

        info!("🌫️  Medición de emisiones {} creada para vehículo {}", data.id, data.vehicle_id);
        Ok(EmissionDataResponse::from(data))
    }

    pub async fn update(
        &self,
        id: i64,
        request: EmissionDataRequest,
    ) -> Result<EmissionDataResponse, AppError> {
        let mut data = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error(ENTITY, id))?;

        if data.vehicle_id != request.vehicle_id {
            data.vehicle_id = resolve_vehicle(&self.vehicles, request.vehicle_id).await?.id;
        }

        data.co2_emissions = request.co2_emissions;
        data.nox_emissions = request.nox_emissions;
        data.particulate_matter = request.particulate_matter;
        data.recording_time = request.recording_time;
        data.updated_at = now();

        let data = self.repository.update(&data).await?;
        info!("🌫️  Medición de emisiones {} actualizada", data.id);
        Ok(EmissionDataResponse::from(data))
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if !self.repository.exists_by_id(id).await? {
            return Err(not_found_error(ENTITY, id));
        }

        self.repository.delete_by_id(id).await?;
        info!("🗑️  Medición de emisiones {} eliminada", id);
        Ok(())
    }

    pub async fn average_co2_emissions(&self, vehicle_id: i64) -> Result<Option<f64>, AppError> {
        self.repository.average_co2_emissions(vehicle_id).await
    }

    pub async fn total_co2_emissions(&self, vehicle_id: i64) -> Result<Option<f64>, AppError> {
        self.repository.total_co2_emissions(vehicle_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::test_support::create_vehicle;
    use crate::repositories::test_support::{at, pool};

    #[tokio::test]
    async fn test_list_by_vehicle_is_empty_for_unknown_vehicle() {
        let controller = EmissionDataController::new(pool().await);
        assert!(controller.list_by_vehicle(77).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_optional_pollutants_round_trip() {
        let pool = pool().await;
        let vehicle_id = create_vehicle(&pool, "EMI-A").await;
        let controller = EmissionDataController::new(pool);

        let created = controller
            .create(EmissionDataRequest {
                vehicle_id,
                co2_emissions: 120.0,
                nox_emissions: Some(0.08),
                particulate_matter: None,
                recording_time: at(3, 7),
            })
            .await
            .unwrap();

        let fetched = controller.get_by_id(created.id).await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.nox_emissions, Some(0.08));
        assert_eq!(fetched.particulate_matter, None);
    }
}
