//! Student handlers: list, store, read, update, delete.
//! Bodies and path ids go through axum's default extractors, so malformed input gets the framework rejection.

use crate::error::AppError;
use crate::model::Student;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    Json,
};

/// GET /students/
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Student>>, AppError> {
    Ok(Json(state.students.get_all_students().await?))
}

/// POST /students/store
pub async fn store(
    State(state): State<AppState>,
    Json(body): Json<Student>,
) -> Result<Json<Student>, AppError> {
    Ok(Json(state.students.create(body).await?))
}

/// GET /students/:id
pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Student>, AppError> {
    Ok(Json(state.students.get_student_by_id(id).await?))
}

/// PUT /students/update
pub async fn update(
    State(state): State<AppState>,
    Json(body): Json<Student>,
) -> Result<Json<Student>, AppError> {
    Ok(Json(state.students.update(body).await?))
}

/// DELETE /students/delete/:id — plain-text confirmation.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<&'static str, AppError> {
    state.students.delete_student(id).await
}
