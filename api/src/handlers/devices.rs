//! Device handlers

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, Path, State},
    http::StatusCode,
    Json,
};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use iot_gateway_core::domain::{Device, DeviceId, NewDevice};

/// List all devices
pub async fn list_devices(State(state): State<AppState>) -> ApiResult<Json<Vec<Device>>> {
    let devices = state.devices.list().await?;
    Ok(Json(devices))
}

/// Create a device; the identifier is assigned by storage
pub async fn create_device(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<(StatusCode, Json<Device>)> {
    let body = body.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let new_device: NewDevice =
        serde_json::from_slice(&body).map_err(|e| ApiError::BadRequest(e.to_string()))?;

    let device = state.devices.create(new_device).await?;
    tracing::info!(id = %device.id, "Created device");

    Ok((StatusCode::CREATED, Json(device)))
}

/// Get device by ID
///
/// An unparseable ID and a failed lookup both read as "not found".
pub async fn get_device(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Device>> {
    let id: DeviceId = id.parse().map_err(|_| ApiError::DeviceNotFound)?;

    match state.devices.get(id).await {
        Ok(Some(device)) => Ok(Json(device)),
        Ok(None) => Err(ApiError::DeviceNotFound),
        Err(e) => {
            tracing::warn!(%id, error = %e, "Device lookup failed");
            Err(ApiError::DeviceNotFound)
        }
    }
}
