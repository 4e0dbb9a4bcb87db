use crate::controllers::now;
use crate::dto::{VehicleRequest, VehicleResponse};
use crate::models::NewVehicle;
use crate::repositories::VehicleRepository;
use crate::utils::errors::{not_found_error, AppError};
use sqlx::SqlitePool;
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct VehicleController {
    repository: VehicleRepository,
}

impl VehicleController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: VehicleRepository::new(pool),
        }
    }

    pub async fn list_all(&self) -> Result<Vec<VehicleResponse>, AppError> {
        let vehicles = self.repository.find_all().await?;
        debug!("Listando {} vehículos", vehicles.len());
        Ok(vehicles.into_iter().map(VehicleResponse::from).collect())
    }

    pub async fn get_by_id(&self, id: i64) -> Result<VehicleResponse, AppError> {
        let vehicle = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Vehicle", id))?;

        Ok(VehicleResponse::from(vehicle))
    }

    pub async fn create(&self, request: VehicleRequest) -> Result<VehicleResponse, AppError> {
        let timestamp = now();
        let vehicle = self
            .repository
            .insert(&NewVehicle {
                make: request.make,
                model: request.model,
                year: request.year,
                license_plate: request.license_plate,
                fuel_type: request.fuel_type,
                engine_size: request.engine_size,
                created_at: timestamp,
                updated_at: timestamp,
            })
            .await?;

        info!("🚗 Vehículo {} creado ({})", vehicle.id, vehicle.license_plate);
        Ok(VehicleResponse::from(vehicle))
    }

    /// Reemplazo completo: todos los campos se sobrescriben
    pub async fn update(&self, id: i64, request: VehicleRequest) -> Result<VehicleResponse, AppError> {
        let mut vehicle = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Vehicle", id))?;

        vehicle.make = request.make;
        vehicle.model = request.model;
        vehicle.year = request.year;
        vehicle.license_plate = request.license_plate;
        vehicle.fuel_type = request.fuel_type;
        vehicle.engine_size = request.engine_size;
        vehicle.updated_at = now();

        let vehicle = self.repository.update(&vehicle).await?;
        info!("🚗 Vehículo {} actualizado", vehicle.id);
        Ok(VehicleResponse::from(vehicle))
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if !self.repository.exists_by_id(id).await? {
            return Err(not_found_error("Vehicle", id));
        }

        self.repository.delete_by_id(id).await?;
        info!("🗑️  Vehículo {} eliminado", id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::test_support::pool;

    fn request(plate: &str) -> VehicleRequest {
        VehicleRequest {
            make: "Toyota".to_string(),
            model: "Corolla".to_string(),
            year: 2020,
            license_plate: plate.to_string(),
            fuel_type: Some("Gasoline".to_string()),
            engine_size: Some(1.8),
        }
    }

    #[tokio::test]
    async fn test_create_then_get_returns_equal_object() {
        let controller = VehicleController::new(pool().await);
        let created = controller.create(request("CTL-001")).await.unwrap();

        let fetched = controller.get_by_id(created.id).await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(created.created_at, created.updated_at);
    }

    #[tokio::test]
    async fn test_update_overwrites_optional_fields_and_keeps_created_at() {
        let controller = VehicleController::new(pool().await);
        let created = controller.create(request("CTL-002")).await.unwrap();

        let mut replacement = request("CTL-002B");
        replacement.fuel_type = None;
        replacement.engine_size = None;
        let updated = controller.update(created.id, replacement).await.unwrap();

        assert_eq!(updated.license_plate, "CTL-002B");
        assert_eq!(updated.fuel_type, None);
        assert_eq!(updated.engine_size, None);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);
    }

    #[tokio::test]
    async fn test_missing_vehicle_is_not_found() {
        let controller = VehicleController::new(pool().await);

        assert!(matches!(controller.get_by_id(404).await, Err(AppError::NotFound(_))));
        assert!(matches!(controller.update(404, request("X")).await, Err(AppError::NotFound(_))));
        assert!(matches!(controller.delete(404).await, Err(AppError::NotFound(_))));
    }
}
