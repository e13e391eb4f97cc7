use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

use crate::error::ApiError;

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct HttpClientConfig {
    pub base_url: String,
    pub headers: HashMap<String, String>,
    pub params: HashMap<String, String>,
    /// Extra JSON fields merged into every request body.
    pub json: HashMap<String, Value>,
}

impl HttpClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_bearer_token(mut self, token: &str) -> Self {
        self.headers
            .insert("Authorization".to_string(), format!("Bearer {token}"));
        self
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ModelClientError {
    #[error("invalid model client config: {0}")]
    Config(String),
    #[error("failed to serialize request: {0}")]
    RequestJson(String),
    #[error("failed to reach {url}: {details}")]
    ApiConnection { url: String, details: String },
    #[error("{url} responded with status {status}: {body}")]
    ApiStatus { url: String, status: u16, body: String },
    #[error("failed to parse response from {url}: {details}")]
    ResponseJson { url: String, details: String },
    #[error("{url} returned no choices")]
    EmptyResponse { url: String },
}

impl From<ModelClientError> for ApiError {
    fn from(err: ModelClientError) -> Self {
        ApiError::ExternalService {
            details: err.to_string(),
        }
    }
}
