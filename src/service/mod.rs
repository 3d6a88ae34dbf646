//! Service layer over the student repository.

mod student;
pub use student::{StudentService, DELETE_CONFIRMATION};
