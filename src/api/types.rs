use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, warn};

use crate::modules::emotion::{BehaviorError, EmotionPredictorError};
use crate::modules::memory::MemoryStoreError;

pub const INVALID_PAYLOAD_DETAIL: &str = "invalid payload";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn ok() -> Self {
        Self { status: "ok".to_string() }
    }

    pub fn ready() -> Self {
        Self { status: "ready".to_string() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

/// Boundary error for both services. `Display` is what the caller sees, so
/// every message is a fixed string; the inner cause only reaches the logs.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("invalid payload")]
    Behavior(#[from] BehaviorError),

    #[error("invalid payload")]
    MalformedRequest(String),

    #[error("prediction failed")]
    Prediction(#[from] EmotionPredictorError),

    #[error("memory lookup failed")]
    Memory(#[from] MemoryStoreError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Behavior(_) | ApiError::MalformedRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Prediction(_) | ApiError::Memory(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Behavior(e) => e.kind(),
            ApiError::MalformedRequest(_) => "malformed",
            ApiError::Prediction(_) => "prediction",
            ApiError::Memory(_) => "memory",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(kind = self.kind(), cause = ?self, "request failed");
        } else {
            warn!(kind = self.kind(), cause = ?self, "request rejected");
        }

        let body = ErrorBody {
            detail: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
