//! Wire types for the text-generation endpoint

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Request body: `{"inputs": "<user text>"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub inputs: String,
}

impl GenerationRequest {
    pub fn new(inputs: impl Into<String>) -> Self {
        Self {
            inputs: inputs.into(),
        }
    }
}

/// Normalized result of a round trip that produced parseable JSON
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationResponse {
    /// `generated_text` of the first element, when present and non-empty
    pub generated_text: Option<String>,
}

impl GenerationResponse {
    #[allow(dead_code)] // Used by mock generators
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            generated_text: Some(text.into()),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Pull the reply out of a response body shaped like
    /// `[{"generated_text": "..."}]`.
    ///
    /// Anything else (empty array, missing field, a non-string or empty
    /// value, an error object instead of an array) yields no text.
    pub fn from_json(body: &Value) -> Self {
        let generated_text = body
            .as_array()
            .and_then(|items| items.first())
            .and_then(|first| first.get("generated_text"))
            .and_then(Value::as_str)
            .filter(|text| !text.is_empty())
            .map(str::to_string);

        Self { generated_text }
    }
}
