//! Data ingestion handler
//!
//! Accepts any JSON object (typically sensor readings pushed by field
//! devices), logs it and echoes it back. Nothing is persisted.

use axum::{body::Bytes, extract::rejection::BytesRejection, Json};
use chrono::Utc;
use tracing::{info, warn};

use crate::error::{ApiError, ApiResult};
use iot_gateway_core::domain::{IngestPayload, IngestReceipt};

/// Receive a JSON payload
pub async fn receive_data(
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<Json<IngestReceipt>> {
    let body = body.map_err(|e| {
        warn!("Error reading request body: {}", e);
        ApiError::UnreadableBody
    })?;

    let payload = IngestPayload::parse(&body).map_err(|e| {
        warn!("Error parsing JSON: {}", e);
        ApiError::InvalidJson(e)
    })?;

    info!(fields = payload.len(), "Received JSON data: {:?}", payload.as_map());

    Ok(Json(IngestReceipt::new(payload, Utc::now())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_receive_data_echoes_payload() {
        let body = Bytes::from_static(br#"{"device_id": "pico_001", "humidity": 50.0}"#);
        let before = Utc::now().timestamp();

        let Json(receipt) = receive_data(Ok(body)).await.unwrap();
        assert_eq!(receipt.status, "success");
        assert!(receipt.timestamp >= before);
        assert_eq!(
            serde_json::to_value(&receipt.received_data).unwrap(),
            json!({"device_id": "pico_001", "humidity": 50.0})
        );
    }

    #[tokio::test]
    async fn test_receive_data_rejects_non_object() {
        let result = receive_data(Ok(Bytes::from_static(b"[1,2,3]"))).await;
        assert!(matches!(result, Err(ApiError::InvalidJson(_))));
    }
}
