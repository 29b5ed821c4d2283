use hd_server::{ServerState, build_router, logger};

use hd_auth::{JwtAlgorithm, JwtValidator};
use hd_client::{ServiceClient, UserServiceClient};
use hd_config::{Config, ConfigError};
use hd_ws::{ConnectionConfig, ShutdownCoordinator};

use std::error::Error;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // A missing .env is normal outside development
    dotenvy::dotenv().ok();

    let config = Config::load()?;
    config.validate()?;

    let log_file_path: Option<std::path::PathBuf> = if let Some(ref filename) = config.logging.file
    {
        let log_dir = Config::config_dir()?.join(&config.logging.dir);
        std::fs::create_dir_all(&log_dir)?;
        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting hd-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());
    let pool = hd_db::connect(&database_path, config.database.max_connections).await?;

    let algorithm: JwtAlgorithm = config.auth.jwt_algorithm.parse()?;
    let secret = config
        .auth
        .jwt_secret
        .as_deref()
        .ok_or_else(|| ConfigError::auth("auth.jwt_secret is required"))?;
    let validator = JwtValidator::new(algorithm, secret.as_bytes(), config.auth.leeway_secs);
    info!(
        "JWT: {} validation enabled (leeway {}s)",
        algorithm.as_str(),
        config.auth.leeway_secs
    );

    let users = UserServiceClient::new(ServiceClient::from_config(&config.user_service)?);
    info!("User service: {}", config.user_service.base_url);

    let shutdown = ShutdownCoordinator::new();

    let state = ServerState::new(
        pool,
        users,
        validator,
        ConnectionConfig::from(&config.websocket),
        config.server.max_connections,
        shutdown.clone(),
    );

    let app = build_router(state, config.server.max_connections);

    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!("Server listening on {}", listener.local_addr()?);

    let shutdown_for_signal = shutdown.clone();
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Received SIGINT (Ctrl+C), initiating graceful shutdown");
                shutdown_for_signal.shutdown();
            }
            Err(e) => {
                error!("Failed to listen for SIGINT: {}", e);
            }
        }
    });

    info!("Server ready to accept connections");
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown.subscribe_guard().wait().await;
            info!("Graceful shutdown complete");
        })
        .await?;

    Ok(())
}
