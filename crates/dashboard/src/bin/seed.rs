//! Seeds the dashboard database without going through HTTP.
//!
//! Run with:
//! ```
//! cargo run -p dashboard --bin seed
//! ```

use dashboard::{config::AppConfig, seeder::Seeder, store::PgSeedClient};
use seed_data::PLACEHOLDER_DATA;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();

    // One connection is all a seed run uses.
    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect(&config.database_url)
        .await?;

    tracing::info!("Connected to database");

    let client = PgSeedClient::acquire(&pool).await?;
    let report = Seeder::new(&PLACEHOLDER_DATA).seed(client).await?;

    tracing::info!("Seed completed!");
    for stage in &report.stages {
        tracing::info!(
            "  {}: {} inserted, {} already present",
            stage.entity,
            stage.inserted,
            (stage.attempted as u64).saturating_sub(stage.inserted)
        );
    }

    pool.close().await;
    Ok(())
}
