//! IoT Gateway Core Library
//!
//! Contains domain models, the device storage port with its adapters,
//! and database bootstrap for the IoT gateway service.

pub mod adapter;
pub mod db;
pub mod domain;
pub mod error;

pub use error::{CoreError, Result};
