//! Axum server setup
//!
//! Server skeleton with:
//! - Permissive CORS (any origin)
//! - Tracing middleware
//! - Static files from the public directory
//! - Graceful shutdown on SIGTERM/Ctrl+C

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::routes;
use crate::service::StudentService;

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to (default: 0.0.0.0:5000)
    pub bind_addr: SocketAddr,

    /// Directory served as static files (default: ./public)
    pub public_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 5000)),
            public_dir: PathBuf::from("public"),
        }
    }
}

/// Shared application state
pub struct AppState {
    pub service: StudentService,
}

/// Build the application router with all routes.
pub fn build_router(service: StudentService, config: &ServerConfig) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(routes::health::router())
        .merge(routes::students::router())
        .fallback_service(routes::static_files::service(&config.public_dir))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(AppState { service }))
}

/// Run the HTTP server.
///
/// The database check runs in the background once the listener is bound.
/// A failure is logged and the server keeps serving; requests will surface
/// the fault.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&DbConfig::from_env());
/// let service = StudentService::new(Arc::new(StudentRepo::new(pool)));
/// run_server(service, ServerConfig::default()).await?;
/// ```
pub async fn run_server(service: StudentService, config: ServerConfig) -> Result<(), ServerError> {
    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Listening on {}", config.bind_addr);

    serve(listener, service, &config).await
}

/// Serve on an already bound listener until a shutdown signal arrives.
pub async fn serve(
    listener: TcpListener,
    service: StudentService,
    config: &ServerConfig,
) -> Result<(), ServerError> {
    let app = build_router(service.clone(), config);

    tokio::spawn(async move {
        check_database(&service).await;
    });

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Startup connectivity check. Returns whether the database answered.
pub async fn check_database(service: &StudentService) -> bool {
    match service.ping().await {
        Ok(()) => {
            tracing::info!("Database connected successfully");
            true
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to connect to database");
            false
        }
    }
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
