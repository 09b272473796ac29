use anyhow::Result;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;
use dotenvy::dotenv;

use repair_shop::config::{DatabaseConfig, EnvironmentConfig};
use repair_shop::database::DatabaseConnection;
use repair_shop::{create_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging (RUST_LOG, por defecto info)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("🔧 Repair Shop API");
    info!("================================================");

    let config = EnvironmentConfig::from_env()?;

    if config.is_development() {
        info!("🛠️  Modo desarrollo");
    }

    if config.is_production() && config.cors_origins.is_empty() {
        warn!("⚠️  CORS_ORIGINS vacío en producción: se permite cualquier origen");
    }

    // Inicializar base de datos
    let db_connection = match DatabaseConnection::connect(&DatabaseConfig::new(&config.database_url)).await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    let addr: SocketAddr = config.server_url().parse()?;
    let state = AppState::new(db_connection.into_pool(), config);
    info!(
        "🔑 Tokens de acceso válidos por {} s",
        state.jwt.access_token_duration().num_seconds()
    );
    let app = create_router(state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("👷 Mecánicos:");
    info!("   POST /mechanic/signup - Alta (código de registro)");
    info!("   POST /mechanic/login - Login (form username/password)");
    info!("   GET  /mechanic/me - Mecánico autenticado");
    info!("   GET  /mechanic/ - Buscar mecánicos");
    info!("   GET|PATCH|DELETE /mechanic/:mechanic_id");
    info!("   GET  /mechanic/:mechanic_id/repairs/ - Reparaciones asignadas");
    info!("🧑 Clientes:");
    info!("   POST|GET /clients/ - Crear / buscar");
    info!("   GET|PATCH|DELETE /clients/:client_id");
    info!("   POST|GET /clients/:client_id/vehicles/ - Vehículos del cliente");
    info!("🚗 Vehículos:");
    info!("   GET  /vehicles/ - Buscar por cliente o matrícula");
    info!("   GET|PATCH|DELETE /vehicles/:vehicle_id");
    info!("   POST|GET /vehicles/:vehicle_id/repairs/ - Reparaciones del vehículo");
    info!("🛠️  Reparaciones:");
    info!("   GET  /repairs/ - Buscar por matrícula, cliente o estado");
    info!("   GET|PATCH|DELETE /repairs/:repair_id");
    info!("⏳ Cápsulas:");
    info!("   POST /capsules/ - Crear cápsula");
    info!("   GET  /capsules/:capsule_id - Obtener cápsula");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            e
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo escuchar Ctrl+C: {}", e);
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
                error!("❌ No se pudo escuchar SIGTERM: {}", e);
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
