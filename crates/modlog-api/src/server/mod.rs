//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use modlog_common::{AppConfig, AppError, AppResult};
use modlog_core::ModLogRepository;
use modlog_service::ServiceContextBuilder;
use modlog_store::{load_seed_file, InMemoryLogRepository};
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::middleware::apply_middleware;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let router = create_router();
    let router = apply_middleware(router, state.config());
    router.with_state(state)
}

/// Initialize all dependencies and create AppState
///
/// The log store is seeded from `MODLOG_SEED_FILE` when configured and
/// starts empty otherwise.
pub async fn create_app_state(config: AppConfig) -> AppResult<AppState> {
    let repo = match config.modlog.seed_file.as_deref() {
        Some(path) => {
            info!(path, "Loading moderation log seed file...");
            load_seed_file(Path::new(path))
                .await
                .map_err(AppError::seed)?
        }
        None => {
            warn!("No MODLOG_SEED_FILE configured, starting with an empty log store");
            InMemoryLogRepository::new()
        }
    };

    create_app_state_with_repo(config, Arc::new(repo))
}

/// Create AppState over an existing repository
pub fn create_app_state_with_repo(
    config: AppConfig,
    repo: Arc<dyn ModLogRepository>,
) -> AppResult<AppState> {
    let service_context = ServiceContextBuilder::from_config(&config.modlog)
        .log_repo(repo)
        .build()?;

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server on an already bound listener until Ctrl-C
pub async fn run_server(app: Router, listener: TcpListener) -> AppResult<()> {
    let addr = listener.local_addr().map_err(AppError::server)?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::server(format!("Server error: {e}")))?;

    info!("Server stopped");
    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> AppResult<()> {
    let addr = config.api.address();

    // Create app state
    let state = create_app_state(config).await?;

    // Build application
    let app = create_app(state);

    info!("Starting HTTP server on {}", addr);
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::server(format!("Failed to bind to {addr}: {e}")))?;

    run_server(app, listener).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
