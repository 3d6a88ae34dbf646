//! Shared application state for all routes.

use crate::repo::StudentRepository;
use crate::service::StudentService;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub students: StudentService,
}

impl AppState {
    pub fn new(repo: Arc<dyn StudentRepository>) -> Self {
        AppState {
            students: StudentService::new(repo),
        }
    }
}
