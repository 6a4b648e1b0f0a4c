//! HTTP server layer
//!
//! Axum server with:
//! - CORS (any origin)
//! - Request tracing
//! - Graceful shutdown
//! - JSON error responses

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::{status_for, ApiError, Disclosure};
pub use server::{build_router, check_database, run_server, serve, AppState, ServerConfig, ServerError};
