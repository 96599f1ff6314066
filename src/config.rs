use anyhow::{Context, Result};
use dotenvy::dotenv;
use migration::{Migrator, MigratorTrait};
use sea_orm::{DatabaseConnection, DbErr};
use serde::Deserialize;
use std::env;

#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    pub db_url: String,
    pub app_name: String,
    pub deployment: String,
    pub bind_addr: String,
    pub static_dir: String,
    pub mapbox_token: Option<String>,
    /// Apply the bundled migrations at startup. Off by default: the well
    /// tables belong to the loader, not to this service.
    pub run_migrations: bool,
}

fn required(name: &str) -> Result<String> {
    env::var(name).with_context(|| format!("{name} must be set"))
}

fn or_default(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn is_enabled(value: Option<&str>) -> bool {
    matches!(
        value.map(|v| v.trim().to_ascii_lowercase()).as_deref(),
        Some("1" | "true" | "yes" | "on")
    )
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok(); // Load from .env file if available

        let db_url = match env::var("DB_URL") {
            Ok(url) => url,
            Err(_) => format!(
                "{}://{}:{}@{}:{}/{}",
                or_default("DB_PREFIX", "postgresql"),
                required("DB_USER")?,
                required("DB_PASSWORD")?,
                required("DB_HOST")?,
                or_default("DB_PORT", "5432"),
                required("DB_NAME")?,
            ),
        };

        Ok(Config {
            db_url,
            app_name: or_default("APP_NAME", "aquifer-wells-api"),
            deployment: or_default("DEPLOYMENT", "local"),
            bind_addr: or_default("BIND_ADDR", "0.0.0.0:8009"),
            static_dir: or_default("STATIC_DIR", "static"),
            mapbox_token: env::var("MAPBOX_TOKEN").ok(),
            run_migrations: is_enabled(env::var("RUN_MIGRATIONS").ok().as_deref()),
        })
    }

    /// Runs `Migrator::up` only when `run_migrations` is set. Returns whether
    /// anything was applied.
    pub async fn migrate_if_enabled(&self, db: &DatabaseConnection) -> Result<bool, DbErr> {
        if !self.run_migrations {
            tracing::info!("RUN_MIGRATIONS not set, leaving the schema untouched");
            return Ok(false);
        }

        Migrator::up(db, None).await?;
        tracing::info!("DB migrations complete");
        Ok(true)
    }

    #[cfg(test)]
    pub fn for_tests() -> Self {
        Config {
            db_url: "sqlite::memory:".to_string(),
            app_name: "aquifer-wells-api-test".to_string(),
            deployment: "test".to_string(),
            bind_addr: "127.0.0.1:0".to_string(),
            static_dir: "static".to_string(),
            mapbox_token: Some("pk.test-token".to_string()),
            run_migrations: false,
        }
    }
}

#[cfg(test)]
pub mod test_helpers {
    use super::*;
    use crate::routes::build_router;
    use axum::Router;
    use sea_orm::{ConnectOptions, Database};

    /// Fresh in-memory SQLite database with the well schema applied.
    ///
    /// A single pooled connection keeps every query on the same in-memory
    /// database.
    pub async fn setup_test_db() -> DatabaseConnection {
        let db = connect_empty_test_db().await;

        Migrator::up(&db, None)
            .await
            .expect("Failed to run database migrations");

        db
    }

    /// In-memory SQLite database with no tables at all
    pub async fn connect_empty_test_db() -> DatabaseConnection {
        let mut options = ConnectOptions::new(Config::for_tests().db_url);
        options
            .max_connections(1)
            .min_connections(1)
            .sqlx_logging(false);

        Database::connect(options)
            .await
            .expect("Failed to open in-memory test database")
    }

    pub fn setup_test_app(db: &DatabaseConnection) -> Router {
        build_router(db, &Config::for_tests())
    }
}
