//! API error types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// API error type
///
/// The display text of each variant is what clients see in the `error` field.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Could not read request body")]
    UnreadableBody,

    #[error("Invalid JSON format")]
    InvalidJson(#[source] serde_json::Error),

    #[error("{0}")]
    BadRequest(String),

    #[error("Device not found")]
    DeviceNotFound,

    #[error("Not found")]
    NotFound,

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("{0}")]
    Core(#[from] iot_gateway_core::CoreError),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::UnreadableBody | ApiError::InvalidJson(_) | ApiError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::DeviceNotFound | ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Core(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let details = match &self {
            ApiError::InvalidJson(err) => Some(err.to_string()),
            _ => None,
        };

        let body = ErrorResponse {
            error: self.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use iot_gateway_core::CoreError;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_device_not_found_response() {
        let response = ApiError::DeviceNotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"error": "Device not found"})
        );
    }

    #[tokio::test]
    async fn test_invalid_json_carries_details() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let expected_details = parse_err.to_string();

        let response = ApiError::InvalidJson(parse_err).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["error"], "Invalid JSON format");
        assert_eq!(body["details"], expected_details);
    }

    #[test]
    fn test_method_not_allowed_status() {
        let response = ApiError::MethodNotAllowed.into_response();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_storage_error_passes_text_through() {
        let err = ApiError::from(CoreError::Database(sqlx::Error::PoolTimedOut));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body_json(response).await["error"],
            sqlx::Error::PoolTimedOut.to_string()
        );
    }
}
