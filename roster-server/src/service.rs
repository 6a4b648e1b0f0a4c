//! Student record service
//!
//! Each operation validates its input, issues exactly one store call and
//! turns the outcome into a tagged result. Nothing here knows about HTTP.

use std::sync::Arc;

use crate::db::repos::{DbError, StudentStore};
use crate::models::{Student, StudentPayload, ValidationError};

/// A write statement ran but did not touch exactly one row.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OperationError {
    #[error("Failed to insert student")]
    InsertFailed,

    #[error("Student not found or no changes made")]
    NotUpdated,

    #[error("Student not found")]
    NotFound,
}

/// Everything an operation can fail with
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Operation(#[from] OperationError),

    #[error(transparent)]
    Internal(#[from] DbError),
}

/// Student CRUD operations over a shared store
#[derive(Clone)]
pub struct StudentService {
    store: Arc<dyn StudentStore>,
}

impl StudentService {
    pub fn new(store: Arc<dyn StudentStore>) -> Self {
        Self { store }
    }

    /// Validate and insert a new student.
    pub async fn add(&self, payload: StudentPayload) -> Result<(), ServiceError> {
        let student = payload.validate()?;

        match self.store.insert(&student).await? {
            1 => {
                tracing::info!(name = %student.name, email = %student.email, "Student added");
                Ok(())
            }
            _ => Err(OperationError::InsertFailed.into()),
        }
    }

    /// All students in storage order.
    pub async fn list(&self) -> Result<Vec<Student>, ServiceError> {
        Ok(self.store.all().await?)
    }

    /// Zero or one students matching `id`. Absence is not an error.
    pub async fn get(&self, id: &str) -> Result<Vec<Student>, ServiceError> {
        Ok(self.store.find(id).await?)
    }

    /// Validate and overwrite all fields of the student with `id`.
    pub async fn edit(&self, id: &str, payload: StudentPayload) -> Result<(), ServiceError> {
        let student = payload.validate()?;

        match self.store.update(id, &student).await? {
            1 => {
                tracing::info!(id, "Student updated");
                Ok(())
            }
            _ => Err(OperationError::NotUpdated.into()),
        }
    }

    /// Remove the student with `id`.
    pub async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        match self.store.delete(id).await? {
            1 => {
                tracing::info!(id, "Student deleted");
                Ok(())
            }
            _ => Err(OperationError::NotFound.into()),
        }
    }

    /// Connectivity check used at startup and by the health route.
    pub async fn ping(&self) -> Result<(), DbError> {
        self.store.ping().await
    }
}
