//! Student CRUD route table.

use crate::handlers::student::{delete as delete_handler, list, read, store, update};
use crate::state::AppState;
use axum::{
    routing::{delete, get, post, put},
    Router,
};

pub fn student_routes(state: AppState) -> Router {
    Router::new()
        .route("/students", get(list))
        .route("/students/", get(list))
        .route("/students/store", post(store))
        .route("/students/update", put(update))
        .route("/students/delete/:id", delete(delete_handler))
        .route("/students/:id", get(read))
        .with_state(state)
}
