//! Validation error types

use std::fmt;

/// Rejection raised before any storage access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// One of name, email, age or gender is absent, null or empty
    MissingFields,

    /// Age is not a number, or not a positive integer once truncated
    InvalidAge,

    /// Body is not a JSON object of the expected shape
    MalformedBody { reason: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFields => f.write_str("All fields are required"),
            Self::InvalidAge => f.write_str("Invalid age"),
            Self::MalformedBody { .. } => f.write_str("Invalid request body"),
        }
    }
}

impl std::error::Error for ValidationError {}
