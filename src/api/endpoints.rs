use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::Value;
use tracing::info_span;
use uuid::Uuid;

use crate::api::services::{parse_behavior_body, require_json, InferenceService, MemoryService};
use crate::api::types::{ApiError, StatusResponse};
use crate::modules::emotion::EmotionPrediction;
use crate::modules::memory::{MemoryEntry, MemoryQuery};
use crate::utils::clock::now_ms;

pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse::ok())
}

pub async fn ready() -> Json<StatusResponse> {
    Json(StatusResponse::ready())
}

pub async fn infer_emotion(
    State(service): State<InferenceService>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<EmotionPrediction>, ApiError> {
    let received_at_ms = now_ms();
    info_span!("infer", request_id = %Uuid::new_v4()).in_scope(|| -> Result<_, ApiError> {
        let record = parse_behavior_body(payload)?;
        let prediction = service.infer(record, received_at_ms)?;
        Ok(Json(prediction))
    })
}

pub async fn memory_get(
    State(service): State<MemoryService>,
    payload: Result<Json<MemoryQuery>, JsonRejection>,
) -> Result<Json<MemoryEntry>, ApiError> {
    info_span!("memory_get", request_id = %Uuid::new_v4()).in_scope(|| -> Result<_, ApiError> {
        let query = require_json(payload)?;
        let entry = service.get(&query)?;
        Ok(Json(entry))
    })
}

pub fn inference_router(service: InferenceService) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/v1/infer", post(infer_emotion))
        .with_state(service)
}

pub fn memory_router(service: MemoryService) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/v1/memory/get", post(memory_get))
        .with_state(service)
}
