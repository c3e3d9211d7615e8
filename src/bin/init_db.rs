//! Standalone database initializer. Idempotent: creates the products table
//! if absent and seeds it only when empty. Exits non-zero on any failure so
//! it can gate deployment scripts.

use std::time::Duration;

use anyhow::Context;
use sqlx::postgres::PgPoolOptions;
use tracing::info;

use inventory_api::{config::Config, init};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".parse().unwrap()),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;

    info!("Connecting to PostgreSQL...");
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(2))
        .connect(&config.database_url())
        .await
        .context("failed to connect to the database")?;

    init::ensure_schema_and_seed(&pool)
        .await
        .context("database initialization failed")?;

    pool.close().await;
    info!("Database initialized successfully.");

    Ok(())
}
