use crate::controllers::{now, resolve_vehicle};
use crate::dto::{FuelConsumptionRequest, FuelConsumptionResponse};
use crate::models::fuel_consumption::resolve_miles_per_gallon;
use crate::models::NewFuelConsumption;
use crate::repositories::{FuelConsumptionRepository, VehicleRepository};
use crate::utils::errors::{not_found_error, AppError};
use chrono::NaiveDateTime;
use sqlx::SqlitePool;
use tracing::{debug, info};

const ENTITY: &str = "Fuel consumption data";

#[derive(Debug, Clone)]
pub struct FuelConsumptionController {
    repository: FuelConsumptionRepository,
    vehicles: VehicleRepository,
}

impl FuelConsumptionController {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            repository: FuelConsumptionRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool),
        }
    }

    pub async fn list_all(&self) -> Result<Vec<FuelConsumptionResponse>, AppError> {
        let rows = self.repository.find_all().await?;
        Ok(rows.into_iter().map(FuelConsumptionResponse::from).collect())
    }

    pub async fn get_by_id(&self, id: i64) -> Result<FuelConsumptionResponse, AppError> {
        let fuel = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error(ENTITY, id))?;

        Ok(FuelConsumptionResponse::from(fuel))
    }

    pub async fn list_by_vehicle(&self, vehicle_id: i64) -> Result<Vec<FuelConsumptionResponse>, AppError> {
        let rows = self.repository.find_by_vehicle_id(vehicle_id).await?;
        debug!("{} repostajes para vehículo {}", rows.len(), vehicle_id);
        Ok(rows.into_iter().map(FuelConsumptionResponse::from).collect())
    }

    pub async fn list_by_vehicle_and_range(
        &self,
        vehicle_id: i64,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<FuelConsumptionResponse>, AppError> {
        let rows = self
            .repository
            .find_by_vehicle_id_and_fill_date_between(vehicle_id, start, end)
            .await?;

        Ok(rows.into_iter().map(FuelConsumptionResponse::from).collect())
    }

    pub async fn average_mpg(&self, vehicle_id: i64) -> Result<Option<f64>, AppError> {
        self.repository.average_mpg(vehicle_id).await
    }

    /// Crea el repostaje derivando MPG si no viene informado
    pub async fn create(&self, request: FuelConsumptionRequest) -> Result<FuelConsumptionResponse, AppError> {
        let vehicle = resolve_vehicle(&self.vehicles, request.vehicle_id).await?;

        let timestamp = now();
        let fuel = self
            .repository
            .insert(&NewFuelConsumption {
                vehicle_id: vehicle.id,
                fuel_amount: request.fuel_amount,
                distance_traveled: request.distance_traveled,
                miles_per_gallon: resolve_miles_per_gallon(
                    request.miles_per_gallon,
                    request.fuel_amount,
                    request.distance_traveled,
                ),
                fuel_cost: request.fuel_cost,
                fill_date: request.fill_date,
                created_at: timestamp,
                updated_at: timestamp,
            })
            .await?;

        info!("⛽ Repostaje {} creado para vehículo {}", fuel.id, fuel.vehicle_id);
        Ok(FuelConsumptionResponse::from(fuel))
    }

    /// Reemplazo completo; MPG no se vuelve a derivar
    pub async fn update(
        &self,
        id: i64,
        request: FuelConsumptionRequest,
    ) -> Result<FuelConsumptionResponse, AppError> {
        let mut fuel = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error(ENTITY, id))?;

        if fuel.vehicle_id != request.vehicle_id {
            fuel.vehicle_id = resolve_vehicle(&self.vehicles, request.vehicle_id).await?.id;
        }

        fuel.fuel_amount = request.fuel_amount;
        fuel.distance_traveled = request.distance_traveled;
        fuel.miles_per_gallon = request.miles_per_gallon;
        fuel.fuel_cost = request.fuel_cost;
        fuel.fill_date = request.fill_date;
        fuel.updated_at = now();

        let fuel = self.repository.update(&fuel).await?;
        info!("⛽ Repostaje {} actualizado", fuel.id);
        Ok(FuelConsumptionResponse::from(fuel))
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        if !self.repository.exists_by_id(id).await? {
            return Err(not_found_error(ENTITY, id));
        }

        self.repository.delete_by_id(id).await?;
        info!("🗑️  Repostaje {} eliminado", id);
        Ok(())
    }
}
