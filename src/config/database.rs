//! Configuración de base de datos
//!
//! Este módulo maneja la creación del pool SQLite con SQLx.

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

use crate::config::environment::EnvironmentConfig;

/// Configuración de la base de datos
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>, max_connections: u32) -> Self {
        Self {
            url: url.into(),
            max_connections,
            acquire_timeout: Duration::from_secs(30),
        }
    }

    /// Base de datos en memoria, usada por los tests
    pub fn in_memory() -> Self {
        Self::new("sqlite::memory:", 1)
    }

    /// Una base en memoria vive sólo mientras vive su conexión
    pub fn is_in_memory(&self) -> bool {
        self.url.contains(":memory:") || self.url.contains("mode=memory")
    }

    /// Crear un nuevo pool de conexiones
    pub async fn create_pool(&self) -> Result<SqlitePool, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(&self.url)?
            .create_if_missing(true)
            .foreign_keys(true);

        if self.is_in_memory() {
            // Una sola conexión que nunca se recicla
            return SqlitePoolOptions::new()
                .max_connections(1)
                .min_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
                .acquire_timeout(self.acquire_timeout)
                .connect_with(options)
                .await;
        }

        SqlitePoolOptions::new()
            .max_connections(self.max_connections)
            .acquire_timeout(self.acquire_timeout)
            .connect_with(options)
            .await
    }
}

impl From<&EnvironmentConfig> for DatabaseConfig {
    fn from(config: &EnvironmentConfig) -> Self {
        Self::new(config.database_url.clone(), config.database_max_connections)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_detection() {
        assert!(DatabaseConfig::in_memory().is_in_memory());
        assert!(DatabaseConfig::new("sqlite://file:test?mode=memory&cache=shared", 5).is_in_memory());
        assert!(!DatabaseConfig::new("sqlite://drive_insights.db", 5).is_in_memory());
    }

    #[test]
    fn test_from_environment_config() {
        let env = EnvironmentConfig {
            database_url: "sqlite://other.db".to_string(),
            database_max_connections: 9,
            ..EnvironmentConfig::default()
        };
        let config = DatabaseConfig::from(&env);
        assert_eq!(config.url, "sqlite://other.db");
        assert_eq!(config.max_connections, 9);
    }

    #[tokio::test]
    async fn test_in_memory_pool_connects() {
        let pool = DatabaseConfig::in_memory().create_pool().await.unwrap();
        let one: i64 = sqlx::query_scalar("SELECT 1").fetch_one(&pool).await.unwrap();
        assert_eq!(one, 1);
    }
}
