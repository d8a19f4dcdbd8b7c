//! Domain models for the IoT gateway service

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::CoreError;

/// Storage-assigned device identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeviceId(u64);

impl DeviceId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for DeviceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DeviceId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>()
            .map(Self)
            .map_err(|_| CoreError::InvalidDeviceId(s.to_string()))
    }
}

/// A registered device
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    /// Unique identifier, immutable once assigned
    pub id: DeviceId,
    /// Display name
    pub name: String,
    /// Free-form device kind, e.g. `temperature`
    #[serde(rename = "type")]
    pub device_type: String,
}

/// Device fields accepted on creation.
///
/// Only a JSON object is accepted. Any `id` in it is ignored, since the
/// storage layer assigns one, and a missing or `null` name/type becomes `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct NewDevice {
    pub name: String,
    pub device_type: String,
}

/// Wire shape of [`NewDevice`] once the body is known to be an object
#[derive(Deserialize)]
struct NewDeviceFields {
    #[serde(default)]
    name: Option<String>,
    #[serde(default, rename = "type")]
    device_type: Option<String>,
}

impl TryFrom<Map<String, Value>> for NewDevice {
    type Error = serde_json::Error;

    fn try_from(fields: Map<String, Value>) -> Result<Self, Self::Error> {
        let fields: NewDeviceFields = serde_json::from_value(Value::Object(fields))?;
        Ok(Self {
            name: fields.name.unwrap_or_default(),
            device_type: fields.device_type.unwrap_or_default(),
        })
    }
}

impl NewDevice {
    pub fn into_device(self, id: DeviceId) -> Device {
        Device {
            id,
            name: self.name,
            device_type: self.device_type,
        }
    }
}

/// Arbitrary JSON object posted to the ingestion endpoint.
///
/// Never persisted; echoed back verbatim inside an [`IngestReceipt`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IngestPayload(Map<String, Value>);

impl IngestPayload {
    /// Parse a raw request body. Anything other than a JSON object is rejected.
    pub fn parse(body: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(body)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

/// Acknowledgement returned for an accepted payload
#[derive(Debug, Clone, Serialize)]
pub struct IngestReceipt {
    pub status: &'static str,
    pub message: &'static str,
    /// Unix epoch seconds at which the payload was received
    pub timestamp: i64,
    pub received_data: IngestPayload,
}

impl IngestReceipt {
    pub fn new(received_data: IngestPayload, received_at: DateTime<Utc>) -> Self {
        Self {
            status: "success",
            message: "Data received successfully",
            timestamp: received_at.timestamp(),
            received_data,
        }
    }
}
