//! DTOs de la API
//!
//! Objetos de transferencia en camelCase. Los requests llevan `vehicleId`
//! como clave foránea; los responses añaden `id`, `createdAt` y `updatedAt`.

pub mod date_range_dto;
pub mod emission_data_dto;
pub mod engine_data_dto;
pub mod fuel_consumption_dto;
pub mod vehicle_dto;

pub use date_range_dto::DateRangeQuery;
pub use emission_data_dto::{EmissionDataRequest, EmissionDataResponse};
pub use engine_data_dto::{EngineDataRequest, EngineDataResponse};
pub use fuel_consumption_dto::{FuelConsumptionRequest, FuelConsumptionResponse};
pub use vehicle_dto::{VehicleRequest, VehicleResponse};
