use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BehaviorError {
    #[error("Invalid payload at '{field}': {reason}")]
    InvalidPayload { field: String, reason: String },

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Malformed request: {0}")]
    Malformed(String),
}

impl BehaviorError {
    fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        BehaviorError::InvalidPayload {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            BehaviorError::InvalidPayload { .. } => "invalid_payload",
            BehaviorError::MissingField(_) => "missing_field",
            BehaviorError::Malformed(_) => "malformed",
        }
    }
}

/// Telemetry as received from the caller. Only `session_id` is typed at
/// intake; every other field is coerced later by [`convert`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BehaviorRecord {
    pub session_id: String,
    #[serde(default)]
    pub timestamp_ms: Option<Value>,
    #[serde(default)]
    pub decision_latency_ms: Option<Value>,
    #[serde(default)]
    pub action_frequency: Option<Value>,
    #[serde(default)]
    pub recent_choices: Option<Value>,
    #[serde(default)]
    pub context: Option<Value>,
}

impl BehaviorRecord {
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedBehavior {
    pub session_id: String,
    pub timestamp_ms: Value,
    pub decision_latency_ms: Value,
    pub action_frequency: Value,
    pub recent_choices: Value,
    pub context: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalBehavior {
    pub session_id: String,
    pub timestamp_ms: i64,
    pub decision_latency_ms: f64,
    pub action_frequency: i64,
    pub recent_choices: Vec<i64>,
    pub context: HashMap<String, f64>,
}

pub fn parse_behavior(json: &str) -> Result<BehaviorRecord, BehaviorError> {
    let value: Value = serde_json::from_str(json)
        .map_err(|e| BehaviorError::Malformed(format!("Failed to parse behavior JSON: {}", e)))?;

    behavior_from_value(value)
}

pub fn behavior_from_value(value: Value) -> Result<BehaviorRecord, BehaviorError> {
    match value.get("session_id") {
        None | Some(Value::Null) => return Err(BehaviorError::MissingField("session_id".to_string())),
        Some(Value::String(_)) => {}
        Some(_) => return Err(BehaviorError::Malformed("'session_id' must be a string".to_string())),
    }

    serde_json::from_value(value).map_err(|e| BehaviorError::Malformed(e.to_string()))
}

pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().map(|f| f == 0.0).unwrap_or(false),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

fn or_default(value: Option<Value>, default: Value) -> Value {
    match value {
        Some(v) if !is_falsy(&v) => v,
        _ => default,
    }
}

pub fn normalize(record: BehaviorRecord, now_ms: i64) -> NormalizedBehavior {
    NormalizedBehavior {
        session_id: record.session_id,
        timestamp_ms: or_default(record.timestamp_ms, Value::from(now_ms)),
        decision_latency_ms: or_default(record.decision_latency_ms, Value::from(0.0)),
        action_frequency: or_default(record.action_frequency, Value::from(0)),
        recent_choices: or_default(record.recent_choices, Value::Array(Vec::new())),
        context: or_default(record.context, Value::Object(Map::new())),
    }
}

/// Only whole values convert; a fractional part is rejected rather than dropped.
fn whole_to_int(f: f64, field: &str) -> Result<i64, BehaviorError> {
    // i64::MAX as f64 rounds up to 2^63, hence the strict upper bound.
    if !f.is_finite() || f < i64::MIN as f64 || f >= i64::MAX as f64 {
        return Err(BehaviorError::invalid(field, format!("{} is out of integer range", f)));
    }
    if f.fract() != 0.0 {
        return Err(BehaviorError::invalid(field, format!("{} has a fractional part", f)));
    }
    Ok(f as i64)
}

pub fn coerce_int(value: &Value, field: &str) -> Result<i64, BehaviorError> {
    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(i)
            } else if let Some(f) = n.as_f64() {
                whole_to_int(f, field)
            } else {
                Err(BehaviorError::invalid(field, format!("{} is out of integer range", n)))
            }
        }
        Value::Bool(b) => Ok(i64::from(*b)),
        Value::String(s) => {
            let trimmed = s.trim();
            if let Ok(i) = trimmed.parse::<i64>() {
                return Ok(i);
            }
            match trimmed.parse::<f64>() {
                Ok(f) => whole_to_int(f, field),
                Err(_) => Err(BehaviorError::invalid(field, "expected an integer")),
            }
        }
        _ => Err(BehaviorError::invalid(field, "expected an integer")),
    }
}

pub fn coerce_float(value: &Value, field: &str) -> Result<f64, BehaviorError> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    match parsed {
        Some(f) if f.is_finite() => Ok(f),
        Some(f) => Err(BehaviorError::invalid(field, format!("{} is not a finite number", f))),
        None => Err(BehaviorError::invalid(field, "expected a number")),
    }
}

/// All-or-nothing: the first failing field aborts the conversion and no
/// partially populated record escapes.
pub fn convert(normalized: &NormalizedBehavior) -> Result<CanonicalBehavior, BehaviorError> {
    let timestamp_ms = coerce_int(&normalized.timestamp_ms, "timestamp_ms")?;
    let decision_latency_ms = coerce_float(&normalized.decision_latency_ms, "decision_latency_ms")?;
    let action_frequency = coerce_int(&normalized.action_frequency, "action_frequency")?;

    let recent_choices = match &normalized.recent_choices {
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(index, item)| coerce_int(item, &format!("recent_choices[{}]", index)))
            .collect::<Result<Vec<_>, _>>()?,
        _ => return Err(BehaviorError::invalid("recent_choices", "expected a list")),
    };

    let context = match &normalized.context {
        Value::Object(map) => map
            .iter()
            .map(|(key, value)| {
                coerce_float(value, &format!("context.{}", key)).map(|f| (key.clone(), f))
            })
            .collect::<Result<HashMap<_, _>, _>>()?,
        _ => return Err(BehaviorError::invalid("context", "expected a mapping")),
    };

    Ok(CanonicalBehavior {
        session_id: normalized.session_id.clone(),
        timestamp_ms,
        decision_latency_ms,
        action_frequency,
        recent_choices,
        context,
    })
}

pub fn canonicalize(record: BehaviorRecord, now_ms: i64) -> Result<CanonicalBehavior, BehaviorError> {
    convert(&normalize(record, now_ms))
}
