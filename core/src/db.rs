//! Database connection pool and schema migrations

use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};
use tracing::info;

use crate::error::Result;

/// Open a connection pool to the MySQL server
pub async fn connect(options: MySqlConnectOptions, max_connections: u32) -> Result<MySqlPool> {
    let pool = MySqlPoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    info!("Database connected successfully");
    Ok(pool)
}

/// Apply the versioned migrations embedded from `migrations/`.
///
/// Already-applied versions are skipped, so this is safe to run on every start.
pub async fn run_migrations(pool: &MySqlPool) -> Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    info!("Database schema is up to date");
    Ok(())
}
