//! Text-generation provider abstraction
//!
//! A [`TextGenerator`] performs one round trip to the remote endpoint and
//! reports classified errors. The [`ResponseFetcher`] sits on top and turns
//! every outcome into a displayable reply.

mod config;
mod error;
mod fetcher;
mod huggingface;
mod types;

pub use config::LlmConfig;
pub use error::{LlmError, LlmErrorKind};
pub use fetcher::{ResponseFetcher, CONNECTION_FALLBACK, EMPTY_REPLY_FALLBACK};
pub use huggingface::HuggingFaceService;
pub use types::{GenerationRequest, GenerationResponse};

use async_trait::async_trait;
use std::sync::Arc;

/// Common interface for text-generation endpoints
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Make exactly one generation request
    async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResponse, LlmError>;

    /// The endpoint this generator talks to
    fn endpoint(&self) -> &str;
}

#[async_trait]
impl<T: TextGenerator + ?Sized> TextGenerator for Arc<T> {
    async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResponse, LlmError> {
        (**self).generate(request).await
    }

    fn endpoint(&self) -> &str {
        (**self).endpoint()
    }
}

/// Logging wrapper for text generators
pub struct LoggingService {
    inner: Arc<dyn TextGenerator>,
    endpoint: String,
}

impl LoggingService {
    pub fn new(inner: Arc<dyn TextGenerator>) -> Self {
        let endpoint = inner.endpoint().to_string();
        Self { inner, endpoint }
    }
}

#[async_trait]
impl TextGenerator for LoggingService {
    async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResponse, LlmError> {
        let start = std::time::Instant::now();
        let result = self.inner.generate(request).await;
        let duration = start.elapsed();

        match &result {
            Ok(response) => {
                tracing::info!(
                    endpoint = %self.endpoint,
                    duration_ms = %duration.as_millis(),
                    input_chars = request.inputs.chars().count(),
                    has_text = response.generated_text.is_some(),
                    "Generation request completed"
                );
            }
            Err(e) => {
                tracing::error!(
                    endpoint = %self.endpoint,
                    duration_ms = %duration.as_millis(),
                    error = %e.message,
                    kind = e.kind.as_str(),
                    "Generation request failed"
                );
            }
        }

        result
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }
}
