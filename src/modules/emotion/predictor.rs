use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

use super::behavior::CanonicalBehavior;

pub const STUB_DOMINANT_EMOTION: &str = "engaged";
pub const STUB_CONFIDENCE: f64 = 0.85;
pub const STUB_SCORES: [(&str, f64); 3] = [("engaged", 0.7), ("frustrated", 0.2), ("curious", 0.1)];

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EmotionPredictorError {
    #[error("Inference error: {0}")]
    Inference(String),

    #[error("Predictor unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionPrediction {
    pub dominant_emotion: String,
    pub confidence: f64,
    pub all_scores: BTreeMap<String, f64>,
    pub timestamp_ms: i64,
}

impl EmotionPrediction {
    pub fn new(
        dominant_emotion: impl Into<String>,
        confidence: f64,
        all_scores: BTreeMap<String, f64>,
        timestamp_ms: i64,
    ) -> Self {
        Self {
            dominant_emotion: dominant_emotion.into(),
            confidence: confidence.clamp(0.0, 1.0),
            all_scores,
            timestamp_ms,
        }
    }

    pub fn score(&self, emotion: &str) -> Option<f64> {
        self.all_scores.get(emotion).copied()
    }
}

/// Anything that turns canonical behavior into an [`EmotionPrediction`].
/// `received_at_ms` is used when the behavior carries no timestamp of its own.
#[cfg_attr(test, mockall::automock)]
pub trait EmotionPredict: Send + Sync {
    fn predict(
        &self,
        behavior: &CanonicalBehavior,
        received_at_ms: i64,
    ) -> Result<EmotionPrediction, EmotionPredictorError>;

    fn name(&self) -> &'static str {
        "unnamed"
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StubEmotionPredictor;

impl StubEmotionPredictor {
    pub fn new() -> Self {
        StubEmotionPredictor
    }

    pub fn scores() -> BTreeMap<String, f64> {
        STUB_SCORES
            .iter()
            .map(|(emotion, score)| (emotion.to_string(), *score))
            .collect()
    }
}

impl EmotionPredict for StubEmotionPredictor {
    fn predict(
        &self,
        behavior: &CanonicalBehavior,
        received_at_ms: i64,
    ) -> Result<EmotionPrediction, EmotionPredictorError> {
        let timestamp_ms = if behavior.timestamp_ms != 0 {
            behavior.timestamp_ms
        } else {
            received_at_ms
        };

        Ok(EmotionPrediction::new(
            STUB_DOMINANT_EMOTION,
            STUB_CONFIDENCE,
            Self::scores(),
            timestamp_ms,
        ))
    }

    fn name(&self) -> &'static str {
        "stub"
    }
}
