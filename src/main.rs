//! Student service binary: reads config from env, prepares the store, serves the HTTP API.

use std::sync::Arc;
use student_service::{
    app, ensure_database_exists, ensure_student_table, AppState, MemoryStudentRepository,
    PgStudentRepository, ServerConfig, StoreKind, StudentRepository,
};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("student_service=info,tower_http=info")),
        )
        .init();

    let repo: Arc<dyn StudentRepository> = match config.store {
        StoreKind::Postgres => {
            ensure_database_exists(&config.database_url).await?;
            let pool = sqlx::postgres::PgPoolOptions::new()
                .max_connections(config.max_connections)
                .connect(&config.database_url)
                .await?;
            ensure_student_table(&pool, &config.schema).await?;
            Arc::new(PgStudentRepository::new(pool, &config.schema))
        }
        StoreKind::Memory => {
            tracing::warn!("using in-memory student store; records are lost on exit");
            Arc::new(MemoryStudentRepository::new())
        }
    };

    let app = app(AppState::new(repo), config.body_limit_bytes);
    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
