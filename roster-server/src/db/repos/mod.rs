//! Record storage for student rows
//!
//! Each store method maps to exactly one SQL statement and reports the raw
//! outcome (rows read, or rows affected). Deciding whether an outcome is a
//! success belongs to the service layer.

pub mod memory;
pub mod students;

use async_trait::async_trait;

use crate::models::{NewStudent, Student};

pub use memory::MemoryStore;
pub use students::StudentRepo;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),

    #[error("{0}")]
    Unavailable(String),
}

/// Storage contract for the student table (testable)
#[async_trait]
pub trait StudentStore: Send + Sync {
    /// Insert one row, returning the affected-row count.
    async fn insert(&self, student: &NewStudent) -> Result<u64, DbError>;

    /// Every row, in storage order.
    async fn all(&self) -> Result<Vec<Student>, DbError>;

    /// Rows whose id matches. The id is passed through unparsed.
    async fn find(&self, id: &str) -> Result<Vec<Student>, DbError>;

    /// Overwrite all four fields of the matching row.
    async fn update(&self, id: &str, student: &NewStudent) -> Result<u64, DbError>;

    /// Remove the matching row.
    async fn delete(&self, id: &str) -> Result<u64, DbError>;

    /// Round-trip a trivial statement.
    async fn ping(&self) -> Result<(), DbError>;
}
