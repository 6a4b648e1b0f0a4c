//! Domain models with validation at construction
//!
//! Request bodies are validated into these types before any query runs.
//! Invalid input returns ValidationError, not panic.

pub mod student;
pub mod validation;

pub use student::{NewStudent, Student, StudentPayload};
pub use validation::ValidationError;
