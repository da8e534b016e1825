//! # Quill Seed
//!
//! Loads authors and posts from a JSON seed file, validating every field on
//! the way in.

mod config;
mod seed;
mod state;
mod telemetry;

use config::AppConfig;
use seed::SeedFile;
use state::AppState;
use telemetry::TelemetryConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();
    tracing::info!(seed_file = %config.seed_file.display(), "Starting seed run");

    let seed = SeedFile::read(&config.seed_file)?;
    let state = AppState::new(config.database.as_ref()).await;

    let report = seed::load(&state, seed).await;

    tracing::info!(
        authors = report.authors_created,
        posts = report.posts_created,
        rejected = report.rejected.len(),
        "Seed run finished"
    );

    if !report.rejected.is_empty() {
        anyhow::bail!("{} record(s) rejected", report.rejected.len());
    }

    Ok(())
}
