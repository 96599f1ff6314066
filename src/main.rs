mod common;
mod config;
mod detail;
mod graph;
mod injection;
mod records;
mod routes;
mod samples;
mod series;
mod wells;

#[cfg(test)]
mod test_helpers;

use crate::config::Config;
use anyhow::Context;
use sea_orm::{Database, DatabaseConnection};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,sqlx=warn,tower_http=info")),
        )
        .init();

    let config: Config = Config::from_env()?;

    let db: DatabaseConnection = Database::connect(config.db_url.as_str())
        .await
        .context("Could not connect to the database")?;

    if let Err(err) = db.ping().await {
        tracing::warn!(error = %err, "database ping failed");
    } else {
        tracing::info!("Connected to the database");
    }

    config
        .migrate_if_enabled(&db)
        .await
        .context("Failed to run migrations")?;

    tracing::info!(
        "Starting server {} ({} deployment) ...",
        config.app_name,
        config.deployment.to_uppercase()
    );

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Could not bind {}", config.bind_addr))?;
    tracing::info!("Listening on {}", config.bind_addr);

    let router = routes::build_router(&db, &config);

    axum::serve(listener, router.into_make_service()).await?;

    Ok(())
}
