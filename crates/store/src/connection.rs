use crate::error::StoreError;
use dotenvy::dotenv;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use std::env;
use std::time::Duration;

/// Where the store lives when `DATABASE_URL` is not set: a single SQLite
/// file in the working directory, created on first use.
const DEFAULT_DATABASE_URL: &str = "sqlite://perch.db?mode=rwc";

/// Establishes a connection pool to the local property store.
///
/// Reads `DATABASE_URL` from the environment (loading `.env` when present)
/// and falls back to a local file next to the binary. The returned pool can
/// be shared across the entire application.
pub async fn connect() -> Result<SqlitePool, StoreError> {
    // A missing .env file is fine; the store has a local default.
    dotenv().ok();

    let database_url =
        env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(5))
        .connect(&database_url)
        .await?;

    Ok(pool)
}

/// A utility function to run store migrations automatically.
///
/// This is useful for ensuring the schema is up-to-date when the application
/// starts, since the store file may have been created by an older build.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), StoreError> {
    // Use a relative path from the crate root
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
