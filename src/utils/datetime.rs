//! Utilidades de fechas
//!
//! Los clientes envían fechas ISO-8601 en varias formas: con o sin segundos,
//! con o sin fracción, y a veces con sufijo `Z` o un offset `±hh:mm`
//! (p. ej. `new Date().toISOString()` en el navegador). Todas se normalizan
//! a un `NaiveDateTime` en UTC, que es lo que se guarda en la base de datos.

use chrono::{DateTime, NaiveDateTime, ParseError};
use serde::{de, Deserialize, Deserializer};

const LOCAL_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];
const OFFSET_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f%:z", "%Y-%m-%dT%H:%M%:z"];

/// Parsear una fecha ISO-8601, convirtiendo a UTC si trae zona horaria
pub fn parse_iso_datetime(value: &str) -> Result<NaiveDateTime, ParseError> {
    let value = value.trim();

    if let Some(utc) = value.strip_suffix('Z').or_else(|| value.strip_suffix('z')) {
        return parse_local(utc);
    }

    for format in OFFSET_FORMATS {
        if let Ok(datetime) = DateTime::parse_from_str(value, format) {
            return Ok(datetime.naive_utc());
        }
    }

    parse_local(value)
}

fn parse_local(value: &str) -> Result<NaiveDateTime, ParseError> {
    NaiveDateTime::parse_from_str(value, LOCAL_FORMATS[0])
        .or_else(|_| NaiveDateTime::parse_from_str(value, LOCAL_FORMATS[1]))
}

/// Deserializador serde para `#[serde(deserialize_with = ...)]`
pub fn deserialize_iso_datetime<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_iso_datetime(&raw)
        .map_err(|e| de::Error::custom(format!("invalid datetime '{}': {}", raw, e)))
}
