//! Hugging Face style inference endpoint
//!
//! POSTs `{"inputs": ...}` and reads back `[{"generated_text": ...}]`.

use super::types::{GenerationRequest, GenerationResponse};
use super::{LlmConfig, LlmError, TextGenerator};
use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;

/// Inference service implementation
pub struct HuggingFaceService {
    client: Client,
    endpoint_url: String,
    api_token: Option<String>,
}

impl HuggingFaceService {
    /// No client timeout is set; the transport default applies.
    pub fn new(config: &LlmConfig) -> Result<Self, LlmError> {
        let client = Client::builder()
            .user_agent(concat!("xara-chat/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| LlmError::unknown(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self::with_client(client, config))
    }

    /// Use a preconfigured client (proxy settings, test harnesses)
    pub fn with_client(client: Client, config: &LlmConfig) -> Self {
        Self {
            client,
            endpoint_url: config.endpoint_url.clone(),
            api_token: config.api_token.clone(),
        }
    }
}

#[async_trait]
impl TextGenerator for HuggingFaceService {
    async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResponse, LlmError> {
        let mut builder = self
            .client
            .post(&self.endpoint_url)
            .header(CONTENT_TYPE, "application/json")
            .json(request);

        if let Some(token) = &self.api_token {
            builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                LlmError::network(format!("Request timeout: {e}"))
            } else if e.is_connect() {
                LlmError::network(format!("Connection failed: {e}"))
            } else {
                LlmError::network(format!("Request failed: {e}"))
            }
        })?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| LlmError::network(format!("Failed to read response: {e}")))?;

        // The status alone does not decide the outcome; a JSON error object
        // degrades to the "no reply" message, an HTML error page fails to parse.
        if !status.is_success() {
            tracing::warn!(
                status = %status,
                endpoint = %self.endpoint_url,
                "Endpoint returned non-success status"
            );
        }

        let json: serde_json::Value = serde_json::from_str(&text)
            .map_err(|e| LlmError::parse(format!("Failed to parse response: {e} - body: {text}")))?;

        Ok(GenerationResponse::from_json(&json))
    }

    fn endpoint(&self) -> &str {
        &self.endpoint_url
    }
}
