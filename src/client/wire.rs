use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::PredictionError;
use crate::model::{ModelSelector, PredictionSuccess};

/// Body of `POST /predict/{model}`
#[derive(Debug, Serialize)]
pub struct PredictRequest<'a> {
    pub image_base64: &'a str,
}

/// Body the service answers with on success
#[derive(Debug, Deserialize)]
pub struct PredictResponse {
    pub prediction: i64,
    pub confidence: f64,
}

impl PredictResponse {
    /// Checks ranges; anything outside them counts as a malformed response.
    pub fn validate(self) -> Result<PredictionSuccess, PredictionError> {
        let digit = u8::try_from(self.prediction)
            .ok()
            .filter(|d| *d <= 9)
            .ok_or_else(|| {
                PredictionError::MalformedResponse(format!(
                    "prediction {} is not a digit",
                    self.prediction
                ))
            })?;

        if !self.confidence.is_finite() || !(0.0..=1.0).contains(&self.confidence) {
            return Err(PredictionError::MalformedResponse(format!(
                "confidence {} is outside [0, 1]",
                self.confidence
            )));
        }

        Ok(PredictionSuccess {
            digit,
            confidence: self.confidence as f32,
        })
    }
}

/// Answer of `GET /model_info`: the models the service has loaded
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelCatalog {
    #[serde(default)]
    pub models: Vec<ModelInfo>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelInfo {
    pub name: String,
    /// Whatever else the service reports (file, accuracy, ...)
    #[serde(flatten)]
    pub details: BTreeMap<String, serde_json::Value>,
}

impl ModelCatalog {
    pub fn serves(&self, model: ModelSelector) -> bool {
        self.find(model).is_some()
    }

    pub fn find(&self, model: ModelSelector) -> Option<&ModelInfo> {
        self.models
            .iter()
            .find(|info| info.name.eq_ignore_ascii_case(model.path_segment()))
    }
}
