//! HTTP client for the remote digit-classification service.

mod wire;

use async_trait::async_trait;
use reqwest::Client;

use crate::config::ServiceConfig;
use crate::encoder::EncodedImage;
use crate::error::{ConfigError, PredictionError};
use crate::model::{ModelSelector, PredictionSuccess};

pub use wire::{ModelCatalog, ModelInfo, PredictRequest, PredictResponse};

/// Anything that can turn an encoded drawing into a digit.
///
/// The controller only talks to this trait, which lets tests script
/// responses without a network.
#[async_trait]
pub trait Classifier: Send + Sync {
    async fn classify(
        &self,
        model: ModelSelector,
        image: EncodedImage,
    ) -> Result<PredictionSuccess, PredictionError>;
}

/// Stateless client for `POST {base_url}/predict/{model}`.
///
/// Cloning is cheap and shares the connection pool. Every call issues exactly
/// one request: no retries, no caching.
#[derive(Debug, Clone)]
pub struct PredictionClient {
    http: Client,
    base_url: String,
}

impl PredictionClient {
    pub fn new(config: &ServiceConfig) -> Result<Self, ConfigError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|err| ConfigError::HttpClient(err.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn predict_url(&self, model: ModelSelector) -> String {
        format!("{}/predict/{}", self.base_url, model.path_segment())
    }

    pub fn model_info_url(&self) -> String {
        format!("{}/model_info", self.base_url)
    }

    pub async fn submit(
        &self,
        model: ModelSelector,
        image: &EncodedImage,
    ) -> Result<PredictionSuccess, PredictionError> {
        if image.is_empty() {
            return Err(PredictionError::EmptyImage);
        }

        let url = self.predict_url(model);
        log::debug!("POST {} ({} bytes of image data)", url, image.len());

        let response = self
            .http
            .post(&url)
            .json(&PredictRequest {
                image_base64: image.as_str(),
            })
            .send()
            .await
            .inspect_err(|err| log::warn!("Prediction request to {} failed: {}", url, err))?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("Prediction request to {} returned {}", url, status);
            return Err(PredictionError::Status(status.as_u16()));
        }

        // Read the body first so a broken JSON shape is reported as malformed
        // rather than as a transport error.
        let body = response.bytes().await?;
        let parsed: PredictResponse = serde_json::from_slice(&body)
            .map_err(|err| PredictionError::MalformedResponse(err.to_string()))?;
        parsed.validate()
    }

    /// Lists the models the service has loaded (`GET /model_info`)
    pub async fn fetch_model_info(&self) -> Result<ModelCatalog, PredictionError> {
        let url = self.model_info_url();
        log::debug!("GET {}", url);

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(PredictionError::Status(status.as_u16()));
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body)
            .map_err(|err| PredictionError::MalformedResponse(err.to_string()))
    }
}

#[async_trait]
impl Classifier for PredictionClient {
    async fn classify(
        &self,
        model: ModelSelector,
        image: EncodedImage,
    ) -> Result<PredictionSuccess, PredictionError> {
        self.submit(model, &image).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_urls() {
        let config = ServiceConfig::new("http://127.0.0.1:8000/").unwrap();
        let client = PredictionClient::new(&config).unwrap();
        assert_eq!(client.predict_url(ModelSelector::Cnn), "http://127.0.0.1:8000/predict/cnn");
        assert_eq!(client.predict_url(ModelSelector::Mlp), "http://127.0.0.1:8000/predict/mlp");
        assert_eq!(client.model_info_url(), "http://127.0.0.1:8000/model_info");
    }
}
