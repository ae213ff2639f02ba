use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use decor_api::config::ServerConfig;
use decor_api::router::build_app_router;
use decor_api::state::AppState;
use decor_storage::StorageSettings;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "decor_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Database ---
    let db = decor_db::Database::connect(&config.database_url)
        .await
        .expect("Failed to connect to database");
    tracing::info!(backend = db.backend_name(), "Database connection pool created");

    db.health_check()
        .await
        .expect("Database health check failed");
    tracing::info!("Database health check passed");

    db.initialize()
        .await
        .expect("Failed to initialize database schema");
    tracing::info!("Database schema initialized");

    // --- Upload backend (fixed for the process lifetime) ---
    let storage_settings = StorageSettings::from_env();
    let uploads_dir = storage_settings.local_dir().map(|p| p.to_path_buf());
    let assets = storage_settings
        .build()
        .await
        .expect("Failed to initialize upload backend");
    tracing::info!(
        backend = storage_settings.backend_name(),
        "Upload backend selected"
    );

    // --- App state ---
    let state = AppState {
        db,
        assets,
        config: Arc::new(config.clone()),
    };

    // --- Router ---
    let app = build_app_router(state, &config, uploads_dir.as_deref());

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server
/// shuts down cleanly whether stopped interactively or by a process
/// manager (e.g. systemd, Docker, Kubernetes).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
