//! Application state

use anyhow::{Context, Result};
use std::sync::Arc;

use crate::config::AppConfig;
use iot_gateway_core::adapter::{DeviceRepository, MySqlDeviceRepository};
use iot_gateway_core::db;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Device storage, shared by every request
    pub devices: Arc<dyn DeviceRepository>,
}

impl AppState {
    /// Connect to the database and bring its schema up to date.
    ///
    /// Fails if either step fails; the caller treats that as fatal.
    pub async fn new(config: &AppConfig) -> Result<Self> {
        let pool = db::connect(config.connect_options(), config.db_max_connections)
            .await
            .with_context(|| {
                format!(
                    "Failed to connect to database {}",
                    config.database_display()
                )
            })?;

        db::run_migrations(&pool)
            .await
            .context("Failed to migrate database")?;

        Ok(Self::with_repository(Arc::new(MySqlDeviceRepository::new(
            pool,
        ))))
    }

    /// Build state around an existing repository
    pub fn with_repository(devices: Arc<dyn DeviceRepository>) -> Self {
        Self { devices }
    }
}
