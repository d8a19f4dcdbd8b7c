//! IoT Gateway HTTP API
//!
//! Health check, passthrough data ingestion and a small device registry.
//! The same handlers back both the standalone server and the Lambda
//! entry point (`lambda-handler`, behind the `lambda` feature).

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;
