//! Conexión a SQLite
//!
//! Este módulo abre el pool de conexiones y aplica el esquema.

use anyhow::{Context, Result};
use sqlx::{Executor, SqlitePool};
use tracing::info;

use crate::config::DatabaseConfig;
use crate::database::schema::SCHEMA;

/// Pool de conexiones con el esquema ya aplicado
#[derive(Debug, Clone)]
pub struct DatabaseConnection {
    pool: SqlitePool,
}

impl DatabaseConnection {
    /// Conectar y aplicar el esquema
    pub async fn new(config: &DatabaseConfig) -> Result<Self> {
        info!("🗄️  Conectando a la base de datos: {}", config.url);

        let pool = config
            .create_pool()
            .await
            .with_context(|| format!("failed to open database at '{}'", config.url))?;

        run_schema(&pool).await.context("failed to apply database schema")?;

        info!("✅ Base de datos lista");
        Ok(Self { pool })
    }

    /// Base de datos en memoria con el esquema aplicado
    pub async fn in_memory() -> Result<Self> {
        Self::new(&DatabaseConfig::in_memory()).await
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Ejecutar el DDL del esquema
pub async fn run_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    pool.execute(SCHEMA).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_schema_creates_all_tables() {
        let connection = DatabaseConnection::in_memory().await.unwrap();

        let tables: Vec<String> = sqlx::query_scalar(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
        )
        .fetch_all(connection.pool())
        .await
        .unwrap();

        assert_eq!(
            tables,
            vec!["emission_data", "engine_data", "fuel_consumption", "vehicles"]
        );
    }

    #[tokio::test]
    async fn test_schema_is_idempotent() {
        let connection = DatabaseConnection::in_memory().await.unwrap();
        run_schema(connection.pool()).await.unwrap();
    }
}
