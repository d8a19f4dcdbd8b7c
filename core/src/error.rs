//! Core error types for the IoT gateway service

use thiserror::Error;

/// Core error type for all operations
#[derive(Error, Debug)]
pub enum CoreError {
    /// Storage failure; displays the driver's message unchanged so it can be
    /// handed back to clients as-is.
    #[error("{0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Invalid device id: {0}")]
    InvalidDeviceId(String),
}

/// Result type alias using CoreError
pub type Result<T> = std::result::Result<T, CoreError>;
