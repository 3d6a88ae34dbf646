//! Persistence seam for student records: one trait, one implementation per backend.

mod memory;
mod postgres;

pub use memory::MemoryStudentRepository;
pub use postgres::PgStudentRepository;

use crate::error::AppError;
use crate::model::Student;
use async_trait::async_trait;

#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Insert when `id` is absent, otherwise overwrite the row with that id.
    /// An id that matches no row is inserted as a new record with a store-generated id.
    async fn save(&self, student: Student) -> Result<Student, AppError>;

    /// All records, ascending id.
    async fn find_all(&self) -> Result<Vec<Student>, AppError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<Student>, AppError>;

    /// Remove the row with `id`; a missing row is not an error.
    async fn delete_by_id(&self, id: i32) -> Result<(), AppError>;

    /// Cheap round trip to the backing store.
    async fn ping(&self) -> Result<(), AppError>;
}
