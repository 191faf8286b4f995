//! Classification API Client
//!
//! HTTP client for the local phishing classification service.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use super::types::{Classification, ClassificationRequest, ClassificationResponse};
use crate::config::GuardConfig;
use crate::error::{ClassifyError, ClassifyResult};

/// Anything that can turn a URL into a verdict
#[async_trait]
pub trait Classifier: Send + Sync {
    async fn classify(&self, url: &str) -> ClassifyResult<Classification>;
}

/// Classifier backed by `POST /predict`
pub struct HttpClassifier {
    endpoint: String,
    timeout: Duration,
    http_client: reqwest::Client,
}

impl HttpClassifier {
    /// Create a client from the guard configuration
    pub fn new(config: &GuardConfig) -> ClassifyResult<Self> {
        Self::with_timeout(&config.endpoint, config.timeout())
    }

    pub fn with_timeout(endpoint: &str, timeout: Duration) -> ClassifyResult<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClassifyError::Setup(e.to_string()))?;

        Ok(Self {
            endpoint: endpoint.to_string(),
            timeout,
            http_client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Check that something answers at the endpoint.
    ///
    /// The service only routes POST, so any HTTP status counts as reachable.
    pub async fn probe(&self) -> ClassifyResult<u16> {
        let response = self.http_client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        Ok(response.status().as_u16())
    }

    fn transport_error(&self, err: reqwest::Error) -> ClassifyError {
        if err.is_timeout() {
            ClassifyError::Timeout(self.timeout)
        } else {
            ClassifyError::Network(err.to_string())
        }
    }
}

#[async_trait]
impl Classifier for HttpClassifier {
    async fn classify(&self, url: &str) -> ClassifyResult<Classification> {
        let request = ClassificationRequest { url: url.to_string() };

        // `.json()` also sets `Content-Type: application/json`
        let response = self.http_client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClassifyError::Status(status.as_u16()));
        }

        let body = response.bytes().await
            .map_err(|e| self.transport_error(e))?;
        let value: Value = serde_json::from_slice(&body)
            .map_err(|e| ClassifyError::Parse(e.to_string()))?;

        Ok(Classification::from_response(ClassificationResponse::from_json(&value)))
    }
}
