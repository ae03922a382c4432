use anyhow::Context;
use chrono::Utc;

use stockwatch_api::app::{self, services::AppServices};
use stockwatch_api::config::ApiConfig;
use stockwatch_api::fixtures;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    stockwatch_observability::init();

    let config = ApiConfig::from_env()?;

    let snapshot = match &config.data_file {
        Some(path) => fixtures::load_snapshot(path)?,
        None => {
            tracing::warn!("STOCKWATCH_DATA_FILE not set; serving built-in sample data");
            fixtures::sample_snapshot(Utc::now())?
        }
    };

    let app = app::build_app(AppServices::new(snapshot, config.policy));

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
