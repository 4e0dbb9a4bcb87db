use anyhow::{Context, Result};
use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info, warn};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use drive_insights::config::{DatabaseConfig, EnvironmentConfig};
use drive_insights::database::DatabaseConnection;
use drive_insights::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        .init();

    info!("🚙 Drive Insights - API de telemetría de vehículos");
    info!("================================================");

    let config = EnvironmentConfig::from_env().context("invalid configuration")?;
    info!("⚙️  Entorno: {}", config.environment);
    if config.cors_origins.is_empty() && !config.is_development() {
        warn!("⚠️  CORS_ORIGINS vacío fuera de desarrollo: se aceptan todos los orígenes");
    }

    // Inicializar base de datos
    let db_connection = match DatabaseConnection::new(&DatabaseConfig::from(&config)).await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {:#}", e);
            return Err(e);
        }
    };

    let address = config.server_address();
    let app_state = AppState::new(db_connection.pool().clone(), config);
    let app = drive_insights::create_app(app_state);

    info!("🌐 Servidor iniciando en http://{}", address);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /        - Estado del servicio");
    info!("   GET  /health  - Health check");
    for collection in ["vehicles", "engine-data", "fuel-consumption", "emissions"] {
        info!("   GET|POST /api/{} · GET|PUT|DELETE /api/{}/:id", collection, collection);
    }
    info!("   GET  /api/{{engine-data,fuel-consumption,emissions}}/vehicle/:vehicle_id[/date-range]");
    info!("   GET  /api/fuel-consumption/vehicle/:vehicle_id/average-mpg");
    info!("   GET  /api/engine-data/vehicle/:vehicle_id/{{average-temperature,average-rpm,total-idling-time}}");
    info!("   GET  /api/emissions/vehicle/:vehicle_id/{{average-co2,total-co2}}");

    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {}", address))?;

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Error del servidor: {}", e);
        return Err(e.into());
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo instalar el handler de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo instalar el handler de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
