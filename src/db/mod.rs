use crate::config::Settings;
use crate::errors::AppError;
use sqlx::postgres::{PgConnection, PgPoolOptions};
use sqlx::{Connection, PgPool};
use log::info;

const CREATE_ASSOCIATES_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS associates_info (
        id SERIAL PRIMARY KEY,
        name TEXT NOT NULL,
        hire_date DATE NOT NULL,
        manager TEXT NOT NULL,
        department TEXT NOT NULL
    )
"#;

fn connect_error(err: sqlx::Error) -> AppError {
    AppError::DatabaseError(format!("Failed to connect to the database: {}", err))
}

pub async fn create_pool(settings: &Settings) -> Result<PgPool, AppError> {
    PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .connect(&settings.database_url)
        .await
        .map_err(connect_error)
}

/// Opens a standalone connection; the caller is responsible for closing it.
pub async fn connect_once(database_url: &str) -> Result<PgConnection, AppError> {
    PgConnection::connect(database_url)
        .await
        .map_err(connect_error)
}

pub async fn init_schema(pool: &PgPool) -> Result<(), AppError> {
    let mut conn = pool.acquire().await?;
    sqlx::query(CREATE_ASSOCIATES_TABLE).execute(&mut *conn).await?;
    info!("associates_info table is ready");
    Ok(())
}
