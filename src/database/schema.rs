//! Esquema SQL de la base de datos
//!
//! Se ejecuta una vez al arrancar. Es idempotente gracias a
//! `CREATE TABLE IF NOT EXISTS`; no hay herramienta de migraciones.

/// DDL completo: vehículos y las tres tablas de telemetría
///
/// Los timestamps se guardan como TEXT en el formato de SQLx
/// (`YYYY-MM-DD HH:MM:SS.fff`), que ordena cronológicamente y permite
/// usar `BETWEEN` directamente.
pub const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS vehicles (
    id             INTEGER PRIMARY KEY AUTOINCREMENT,
    make           TEXT    NOT NULL,
    model          TEXT    NOT NULL,
    year           INTEGER NOT NULL,
    license_plate  TEXT    NOT NULL UNIQUE,
    fuel_type      TEXT,
    engine_size    REAL,
    created_at     TEXT    NOT NULL,
    updated_at     TEXT    NOT NULL
);

CREATE TABLE IF NOT EXISTS engine_data (
    id                   INTEGER PRIMARY KEY AUTOINCREMENT,
    vehicle_id           INTEGER NOT NULL REFERENCES vehicles(id),
    engine_temperature   REAL    NOT NULL,
    engine_rpm           INTEGER NOT NULL,
    idling_time_seconds  INTEGER,
    recording_time       TEXT    NOT NULL,
    created_at           TEXT    NOT NULL,
    updated_at           TEXT    NOT NULL
);

CREATE TABLE IF NOT EXISTS fuel_consumption (
    id                 INTEGER PRIMARY KEY AUTOINCREMENT,
    vehicle_id         INTEGER NOT NULL REFERENCES vehicles(id),
    fuel_amount        REAL    NOT NULL,
    distance_traveled  REAL    NOT NULL,
    miles_per_gallon   REAL,
    fuel_cost          REAL,
    fill_date          TEXT    NOT NULL,
    created_at         TEXT    NOT NULL,
    updated_at         TEXT    NOT NULL
);

CREATE TABLE IF NOT EXISTS emission_data (
    id                  INTEGER PRIMARY KEY AUTOINCREMENT,
    vehicle_id          INTEGER NOT NULL REFERENCES vehicles(id),
    co2_emissions       REAL    NOT NULL,
    nox_emissions       REAL,
    particulate_matter  REAL,
    recording_time      TEXT    NOT NULL,
    created_at          TEXT    NOT NULL,
    updated_at          TEXT    NOT NULL
);

CREATE INDEX IF NOT EXISTS engine_data_vehicle_time_idx
    ON engine_data(vehicle_id, recording_time);
CREATE INDEX IF NOT EXISTS fuel_consumption_vehicle_date_idx
    ON fuel_consumption(vehicle_id, fill_date);
CREATE INDEX IF NOT EXISTS emission_data_vehicle_time_idx
    ON emission_data(vehicle_id, recording_time);
";
