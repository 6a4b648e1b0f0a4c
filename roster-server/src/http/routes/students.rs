//! Student endpoints
//!
//! Paths and verbs match the existing front end: writes go through
//! `POST /add_user` and `POST /edit_user/{id}`, not REST-style verbs.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::{delete, get, post},
    Json, Router,
};
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::extractors::StudentForm;
use crate::http::server::AppState;
use crate::models::Student;

/// `{"success": ...}` body for write routes
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: &'static str,
}

/// POST /add_user - create a student
async fn add_student(
    State(state): State<Arc<AppState>>,
    StudentForm(payload): StudentForm,
) -> Result<Json<SuccessResponse>, ApiError> {
    state
        .service
        .add(payload)
        .await
        .map_err(|e| ApiError::detailed("/add_user", e))?;

    Ok(Json(SuccessResponse {
        success: "Student added successfully",
    }))
}

/// GET /students - every student
async fn list_students(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Student>>, ApiError> {
    let students = state
        .service
        .list()
        .await
        .map_err(|e| ApiError::generic("/students", e))?;

    Ok(Json(students))
}

/// GET /get_student/{id} - zero or one student
async fn get_student(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Student>>, ApiError> {
    let students = state
        .service
        .get(&id)
        .await
        .map_err(|e| ApiError::generic("/get_student", e))?;

    Ok(Json(students))
}

/// POST /edit_user/{id} - overwrite a student
async fn edit_student(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    StudentForm(payload): StudentForm,
) -> Result<Json<SuccessResponse>, ApiError> {
    state
        .service
        .edit(&id, payload)
        .await
        .map_err(|e| ApiError::detailed("/edit_user", e))?;

    Ok(Json(SuccessResponse {
        success: "Student updated successfully",
    }))
}

/// DELETE /delete/{id} - remove a student
async fn delete_student(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<SuccessResponse>, ApiError> {
    state
        .service
        .delete(&id)
        .await
        .map_err(|e| ApiError::detailed("/delete", e))?;

    Ok(Json(SuccessResponse {
        success: "Student deleted successfully",
    }))
}

/// Student routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/add_user", post(add_student))
        .route("/students", get(list_students))
        .route("/get_student/{id}", get(get_student))
        .route("/edit_user/{id}", post(edit_student))
        .route("/delete/{id}", delete(delete_student))
}
