use ainotes::{GenerationRequest, GenerationResponse};
use serde::{Serialize, de::DeserializeOwned};
use tracing::debug;

use crate::models::client::{HttpClientConfig, ModelClientError};

/// HTTP client for an OpenAI-compatible model API.
#[derive(Clone)]
pub struct ModelClient {
    config: HttpClientConfig,
    client: reqwest::Client,
}

impl ModelClient {
    pub fn new(config: HttpClientConfig) -> Result<Self, ModelClientError> {
        let header_map = reqwest::header::HeaderMap::try_from(&config.headers)
            .map_err(|err| ModelClientError::Config(err.to_string()))?;
        let client = reqwest::Client::builder()
            .default_headers(header_map)
            .build()
            .map_err(|err| ModelClientError::Config(err.to_string()))?;
        Ok(Self { config, client })
    }

    /// Run a chat completion and return the content of the first choice.
    pub async fn generate(&self, request: GenerationRequest) -> Result<String, ModelClientError> {
        let url = self.url("/chat/completions");
        debug!("requesting completion from {url} with model {}", request.model);
        let response: GenerationResponse = self.post(&url, &request).await?;
        response
            .into_content()
            .ok_or(ModelClientError::EmptyResponse { url })
    }

    fn url(&self, endpoint: &str) -> String {
        let base_url = self.config.base_url.trim_end_matches('/');
        format!("{base_url}{endpoint}")
    }

    async fn post<Request: Serialize, ResponseModel: DeserializeOwned>(
        &self,
        url: &str,
        request: &Request,
    ) -> Result<ResponseModel, ModelClientError> {
        let mut value = serde_json::to_value(request)
            .map_err(|err| ModelClientError::RequestJson(err.to_string()))?;
        if let Some(body) = value.as_object_mut() {
            body.extend(self.config.json.clone());
        }

        let response = self
            .client
            .post(url)
            .query(&self.config.params)
            .json(&value)
            .send()
            .await
            .map_err(|err| ModelClientError::ApiConnection {
                url: url.to_string(),
                details: err.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|err| format!("{err:?}"));
            return Err(ModelClientError::ApiStatus {
                url: url.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<ResponseModel>()
            .await
            .map_err(|err| ModelClientError::ResponseJson {
                url: url.to_string(),
                details: err.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_without_double_slash() {
        let client = ModelClient::new(HttpClientConfig::new("http://localhost:1234/v1/"))
            .expect("client should build");
        assert_eq!(
            client.url("/chat/completions"),
            "http://localhost:1234/v1/chat/completions"
        );
    }

    #[test]
    fn invalid_header_is_a_config_error() {
        let mut config = HttpClientConfig::new("http://localhost:1234");
        config
            .headers
            .insert("bad header".to_string(), "value".to_string());
        assert!(matches!(
            ModelClient::new(config),
            Err(ModelClientError::Config(_))
        ));
    }
}
