//! Pass-through student operations. The only behavior of its own: a missing id on read is a typed NotFound.

use crate::error::AppError;
use crate::model::Student;
use crate::repo::StudentRepository;
use std::sync::Arc;
use tracing::{info, instrument};

/// Message returned by every delete, whether or not a row was removed.
pub const DELETE_CONFIRMATION: &str = "Record Deleted";

#[derive(Clone)]
pub struct StudentService {
    repo: Arc<dyn StudentRepository>,
}

impl StudentService {
    pub fn new(repo: Arc<dyn StudentRepository>) -> Self {
        Self { repo }
    }

    pub fn repository(&self) -> &Arc<dyn StudentRepository> {
        &self.repo
    }

    #[instrument(skip_all)]
    pub async fn create(&self, student: Student) -> Result<Student, AppError> {
        let saved = self.repo.save(student).await?;
        info!(id = ?saved.id, "student_created");
        Ok(saved)
    }

    pub async fn get_all_students(&self) -> Result<Vec<Student>, AppError> {
        self.repo.find_all().await
    }

    #[instrument(skip(self))]
    pub async fn get_student_by_id(&self, id: i32) -> Result<Student, AppError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("student {}", id)))
    }

    /// Same as create: upsert keyed by `id`, no existence check.
    #[instrument(skip_all, fields(id = ?student.id))]
    pub async fn update(&self, student: Student) -> Result<Student, AppError> {
        let saved = self.repo.save(student).await?;
        info!(id = ?saved.id, "student_saved");
        Ok(saved)
    }

    #[instrument(skip(self))]
    pub async fn delete_student(&self, id: i32) -> Result<&'static str, AppError> {
        self.repo.delete_by_id(id).await?;
        info!(id, "student_deleted");
        Ok(DELETE_CONFIRMATION)
    }
}
