use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde_json::Value;

use crate::api::types::ApiError;
use crate::modules::emotion::{behavior_from_value, BehaviorRecord};

/// Both services accept only `application/json` bodies; any extractor
/// rejection becomes a malformed request.
pub fn require_json<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    payload
        .map(|Json(value)| value)
        .map_err(|rejection| ApiError::MalformedRequest(rejection.body_text()))
}

pub fn parse_behavior_body(payload: Result<Json<Value>, JsonRejection>) -> Result<BehaviorRecord, ApiError> {
    let value = require_json(payload)?;
    Ok(behavior_from_value(value)?)
}
