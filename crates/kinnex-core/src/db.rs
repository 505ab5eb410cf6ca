// crates/kinnex-core/src/db.rs

use crate::error::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

pub type DbPool = PgPool;

/// Establishes a connection pool to the PostgreSQL database.
pub async fn connect(database_url: &str) -> Result<DbPool> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await?;

    tracing::info!("database connection pool established");
    Ok(pool)
}
