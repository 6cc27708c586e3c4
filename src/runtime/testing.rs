//! Mock implementations for testing
//!
//! These mocks enable controller and API tests without real I/O.

use crate::llm::{GenerationRequest, GenerationResponse, LlmError, TextGenerator};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

// ============================================================================
// Mock Generator
// ============================================================================

/// Mock generator that returns queued responses
pub struct MockGenerator {
    responses: Mutex<VecDeque<Result<GenerationResponse, LlmError>>>,
    /// Record of all requests made
    pub requests: Mutex<Vec<GenerationRequest>>,
}

#[allow(dead_code)]
impl MockGenerator {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Queue a successful response
    pub fn queue_response(&self, response: GenerationResponse) {
        self.responses.lock().unwrap().push_back(Ok(response));
    }

    /// Queue a response carrying `text`
    pub fn queue_text(&self, text: impl Into<String>) {
        self.queue_response(GenerationResponse::text(text));
    }

    /// Queue an error response
    pub fn queue_error(&self, error: LlmError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    /// Get recorded requests
    pub fn recorded_requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn next(&self, request: &GenerationRequest) -> Result<GenerationResponse, LlmError> {
        self.requests.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(LlmError::network("No mock response queued")))
    }
}

impl Default for MockGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResponse, LlmError> {
        self.next(request)
    }

    fn endpoint(&self) -> &str {
        "mock://generator"
    }
}

// ============================================================================
// Gated Mock Generator (for observing the in-flight state)
// ============================================================================

/// Mock generator that holds each request until the test releases it
pub struct GatedMockGenerator {
    inner: MockGenerator,
    /// Notified when a request starts
    pub started: Arc<Notify>,
    /// Notify once to let the pending request finish
    pub release: Arc<Notify>,
}

impl GatedMockGenerator {
    pub fn new() -> Self {
        Self {
            inner: MockGenerator::new(),
            started: Arc::new(Notify::new()),
            release: Arc::new(Notify::new()),
        }
    }

    pub fn queue_text(&self, text: impl Into<String>) {
        self.inner.queue_text(text);
    }

    pub fn recorded_requests(&self) -> Vec<GenerationRequest> {
        self.inner.recorded_requests()
    }
}

#[async_trait]
impl TextGenerator for GatedMockGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<GenerationResponse, LlmError> {
        // notify_one keeps a permit, so the test may start waiting late
        self.started.notify_one();
        self.release.notified().await;
        self.inner.next(request)
    }

    fn endpoint(&self) -> &str {
        "mock://gated"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_mock_generator() {
        let mock = MockGenerator::new();
        mock.queue_text("Hello");

        let request = GenerationRequest::new("Hi");
        let response = mock.generate(&request).await.unwrap();
        assert_eq!(response.generated_text.as_deref(), Some("Hello"));

        // Second call should fail (no more responses)
        let result = mock.generate(&request).await;
        assert!(result.is_err());
        assert_eq!(mock.recorded_requests().len(), 2);
    }

    #[tokio::test]
    async fn test_gated_generator_waits_for_release() {
        let gated = Arc::new(GatedMockGenerator::new());
        gated.queue_text("late");

        let task = {
            let gated = gated.clone();
            tokio::spawn(async move { gated.generate(&GenerationRequest::new("x")).await })
        };

        tokio::time::timeout(Duration::from_secs(2), gated.started.notified())
            .await
            .unwrap();
        assert!(!task.is_finished());

        gated.release.notify_one();
        let response = task.await.unwrap().unwrap();
        assert_eq!(response.generated_text.as_deref(), Some("late"));
    }
}
