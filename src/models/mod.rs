//! Modelos de datos
//!
//! Registros tal como se guardan en SQLite. Cada registro de telemetría
//! guarda el `vehicle_id` directamente; la resolución del vehículo es una
//! consulta explícita al repositorio de vehículos.

pub mod emission_data;
pub mod engine_data;
pub mod fuel_consumption;
pub mod vehicle;

pub use emission_data::{EmissionData, NewEmissionData};
pub use engine_data::{EngineData, NewEngineData};
pub use fuel_consumption::{FuelConsumption, NewFuelConsumption};
pub use vehicle::{NewVehicle, Vehicle};
