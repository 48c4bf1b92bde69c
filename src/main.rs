use anyhow::Result;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};
use dotenvy::dotenv;

use fleet_dispatch::config::environment::EnvironmentConfig;
use fleet_dispatch::{create_app, store, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();
    let config = EnvironmentConfig::from_env()?;

    // Configurar logging: en desarrollo con colores y archivo:línea
    let development = config.is_development();
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .with_ansi(development)
        .with_file(development)
        .with_line_number(development)
        .init();

    install_fail_fast_hook();

    info!("🚚 Fleet Dispatch API");
    info!("====================");
    info!("⚙️ Entorno: {} | variante: {}", config.environment, config.api_variant.as_str());

    // Inicializar almacén de documentos
    let store = match store::connect(&config) {
        Ok(store) => store,
        Err(e) => {
            error!("❌ Error inicializando el almacén de documentos: {}", e);
            return Err(anyhow::anyhow!("Error de almacén: {}", e));
        }
    };

    let addr: SocketAddr = config.server_url().parse()?;
    let app = create_app(AppState::new(store, config));

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET    /health");
    info!("   GET    /api/tasks?route= | POST /api/tasks | DELETE /api/tasks/:id?route=");
    info!("   GET    /api/vehicles | POST /api/vehicles | DELETE /api/vehicles/:id");
    info!("   GET    /api/users");
    info!("   GET    /api/routes | POST /api/routes");
    info!("   GET    /api/assignments?route= | POST /api/assignments");
    info!("   PUT    /api/assignments/:id | DELETE /api/assignments/:id");

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

/// Cualquier panic termina el proceso en vez de seguir en un estado corrupto
fn install_fail_fast_hook() {
    std::panic::set_hook(Box::new(|panic_info| {
        error!("💥 Panic no controlado: {}", panic_info);
        std::process::exit(1);
    }));
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
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
