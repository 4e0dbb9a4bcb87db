//! Utilidades del sistema
//!
//! Este módulo contiene utilidades para manejo de errores, fechas y validación.

pub mod datetime;
pub mod errors;
pub mod validation;

pub use errors::AppError;
pub use validation::{ValidatedJson, ValidatedPath, ValidatedQuery};
