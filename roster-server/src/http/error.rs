//! API error types with IntoResponse
//!
//! Errors are converted to `{"message": ...}` JSON bodies. The status code
//! depends only on the error kind; how much detail the body carries is
//! chosen per route.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::models::ValidationError;
use crate::service::ServiceError;

/// Prefix for operation and internal errors on write routes
const UNEXPECTED_PREFIX: &str = "Something unexpected has occurred: ";

/// Body for operation and internal errors on read routes
const GENERIC_MESSAGE: &str = "Server error";

/// How much of a non-validation error reaches the client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disclosure {
    /// Include the underlying message (add, edit, delete)
    Detailed,
    /// Fixed "Server error" (list, get)
    Generic,
}

/// Error kind to HTTP status.
///
/// Validation -> 400. Operation and internal errors are both 500; a
/// missing row is deliberately not a 404.
pub fn status_for(err: &ServiceError) -> StatusCode {
    match err {
        ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
        ServiceError::Operation(_) => StatusCode::INTERNAL_SERVER_ERROR,
        ServiceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Handler-boundary error with automatic HTTP status mapping
#[derive(Debug)]
pub struct ApiError {
    route: &'static str,
    disclosure: Disclosure,
    source: ServiceError,
}

impl ApiError {
    pub fn detailed(route: &'static str, source: impl Into<ServiceError>) -> Self {
        Self {
            route,
            disclosure: Disclosure::Detailed,
            source: source.into(),
        }
    }

    pub fn generic(route: &'static str, source: impl Into<ServiceError>) -> Self {
        Self {
            route,
            disclosure: Disclosure::Generic,
            source: source.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        status_for(&self.source)
    }

    /// Client-facing message
    pub fn message(&self) -> String {
        match (&self.source, self.disclosure) {
            (ServiceError::Validation(e), _) => e.to_string(),
            (source, Disclosure::Detailed) => format!("{UNEXPECTED_PREFIX}{source}"),
            (_, Disclosure::Generic) => GENERIC_MESSAGE.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self.source {
            ServiceError::Validation(ValidationError::MalformedBody { reason }) => {
                tracing::warn!(route = self.route, %reason, "Rejected request body");
            }
            ServiceError::Validation(e) => {
                tracing::warn!(route = self.route, error = %e, "Validation failed");
            }
            // Log the actual error regardless of what the client sees
            source => {
                tracing::error!(route = self.route, error = %source, "Error in {}", self.route);
            }
        }

        let status = self.status();
        let body = json!({ "message": self.message() });

        (status, Json(body)).into_response()
    }
}
