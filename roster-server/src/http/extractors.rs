//! Custom Axum extractors

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::{header, HeaderMap};

use super::error::ApiError;
use crate::models::{StudentPayload, ValidationError};

/// Extract a student payload from a JSON body.
///
/// Unlike `Json<T>`, an empty body or one not sent as JSON reads as `{}` so
/// the field checks report "All fields are required", and parse failures
/// come back as our own 400 body instead of axum's plain-text rejection.
pub struct StudentForm(pub StudentPayload);

impl<S> FromRequest<S> for StudentForm
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = json_content_type(req.headers());
        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            ApiError::detailed(
                "request body",
                ValidationError::MalformedBody {
                    reason: e.body_text(),
                },
            )
        })?;

        if !is_json || bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(StudentPayload::default()));
        }

        let payload = serde_json::from_slice(&bytes).map_err(|e| {
            ApiError::detailed(
                "request body",
                ValidationError::MalformedBody {
                    reason: e.to_string(),
                },
            )
        })?;

        Ok(Self(payload))
    }
}

/// `application/json` or any `application/*+json` type, parameters ignored.
fn json_content_type(headers: &HeaderMap) -> bool {
    let Some(value) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    else {
        return false;
    };

    let essence = value.split(';').next().unwrap_or_default().trim();
    let Some((kind, subtype)) = essence.split_once('/') else {
        return false;
    };

    kind.eq_ignore_ascii_case("application")
        && (subtype.eq_ignore_ascii_case("json")
            || subtype.to_ascii_lowercase().ends_with("+json"))
}
