//! Application configuration

use std::str::FromStr;

use anyhow::{bail, Context, Result};
use sqlx::mysql::MySqlConnectOptions;

/// How the service is hosted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeployMode {
    /// Long-running server with the device API and a database
    Server,
    /// Stateless deployment: health, data ingestion and preflight only
    Edge,
}

impl FromStr for DeployMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "server" => Ok(DeployMode::Server),
            "edge" => Ok(DeployMode::Edge),
            other => bail!("Unknown DEPLOY_MODE '{}', expected 'server' or 'edge'", other),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// MySQL host
    pub db_host: String,
    /// MySQL port
    pub db_port: u16,
    /// MySQL user
    pub db_user: String,
    /// MySQL password
    pub db_password: String,
    /// MySQL database name
    pub db_name: String,
    /// Connection pool size
    pub db_max_connections: u32,
    /// Request body cap in bytes; `None` leaves bodies unbounded
    pub max_body_bytes: Option<usize>,
    /// Hosting mode
    pub deploy_mode: DeployMode,
}

/// Read an environment variable, treating an empty value as unset
fn env_or(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_string())
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: env_or("HOST", "0.0.0.0"),
            port: env_or("PORT", "8080").parse().context("Invalid PORT")?,
            db_host: env_or("DB_HOST", "localhost"),
            db_port: env_or("DB_PORT", "3306")
                .parse()
                .context("Invalid DB_PORT")?,
            db_user: env_or("DB_USER", "root"),
            db_password: env_or("DB_PASSWORD", "root"),
            db_name: env_or("DB_NAME", "iot-schema"),
            db_max_connections: env_or("DB_MAX_CONNECTIONS", "10")
                .parse()
                .context("Invalid DB_MAX_CONNECTIONS")?,
            max_body_bytes: match env_or("MAX_BODY_BYTES", "").as_str() {
                "" => None,
                value => Some(value.parse().context("Invalid MAX_BODY_BYTES")?),
            },
            deploy_mode: env_or("DEPLOY_MODE", "server").parse()?,
        })
    }

    /// Connection options for the device database
    pub fn connect_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.db_host)
            .port(self.db_port)
            .username(&self.db_user)
            .password(&self.db_password)
            .database(&self.db_name)
            .charset("utf8mb4")
    }

    /// Database location for log output, without the password
    pub fn database_display(&self) -> String {
        format!(
            "{}@{}:{}/{}",
            self.db_user, self.db_host, self.db_port, self.db_name
        )
    }
}
