//! notelite - A lightweight note-taking REST service
//!
//! CRUD endpoints for notes over SQLite, fronted by a read-through TTL cache
//! with write-invalidation and a sliding-window rate limiter.

use std::net::SocketAddr;

use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use notelite::api::create_router;
use notelite::{db, AppState, Config};

/// Main entry point for the notelite server.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load `.env` and configuration from environment variables
/// 3. Connect to the database and apply the schema
/// 4. Create application state (repository, cache, rate limiter)
/// 5. Create Axum router with all endpoints
/// 6. Start HTTP server on configured port
/// 7. Handle graceful shutdown on SIGINT/SIGTERM
///
/// A missing database URL or an unreachable database is fatal: the process
/// logs the error and exits non-zero instead of serving degraded traffic.
#[tokio::main]
async fn main() {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "notelite=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting notelite server");

    // Load .env (if present) and configuration
    dotenvy::dotenv().ok();
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Configuration error: {e:#}");
            std::process::exit(1);
        }
    };
    info!(
        "Configuration loaded: port={}, cache_ttl={}s, rate_limit={}/{}s",
        config.server_port,
        config.cache_ttl,
        config.rate_limit_max_requests,
        config.rate_limit_window_secs
    );

    // Connect to the database and apply the schema
    let pool = match db::connect(&config.database_url).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("Error connecting to the database: {e:#}");
            std::process::exit(1);
        }
    };
    if let Err(e) = db::init_schema(&pool).await {
        error!("Error initializing the database schema: {e:#}");
        std::process::exit(1);
    }
    info!("Database connected successfully");

    // Create application state
    let state = AppState::from_config(&config, pool);

    // Create router with all endpoints
    let app = create_router(state);

    // Bind to configured port
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind {addr}: {e}");
            std::process::exit(1);
        }
    };
    info!("Server listening on http://{}", addr);

    // Start server with graceful shutdown
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("Server error: {e}");
        std::process::exit(1);
    }

    info!("Server shutdown complete");
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }
}
