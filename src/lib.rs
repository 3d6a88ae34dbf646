//! Student service: CRUD REST backend for student records.

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod repo;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::{ServerConfig, StoreKind};
pub use error::{AppError, ConfigError};
pub use model::Student;
pub use repo::{MemoryStudentRepository, PgStudentRepository, StudentRepository};
pub use routes::{app, common_routes, student_routes};
pub use service::{StudentService, DELETE_CONFIRMATION};
pub use state::AppState;
pub use store::{ensure_database_exists, ensure_student_table};
