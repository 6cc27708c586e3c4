//! Configuration for the text-generation endpoint

/// Endpoint used when `XARA_ENDPOINT_URL` is not set
pub const DEFAULT_ENDPOINT_URL: &str =
    "https://api-inference.huggingface.co/models/facebook/blenderbot-400M-distill";

/// Configuration for the remote text-generation service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LlmConfig {
    pub endpoint_url: String,
    /// Bearer token sent as `Authorization`, if any
    pub api_token: Option<String>,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            endpoint_url: DEFAULT_ENDPOINT_URL.to_string(),
            api_token: None,
        }
    }
}

impl LlmConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (the process environment in
    /// production, a map in tests)
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Self {
            endpoint_url: non_blank("XARA_ENDPOINT_URL")
                .unwrap_or_else(|| DEFAULT_ENDPOINT_URL.to_string()),
            api_token: non_blank("XARA_API_TOKEN").or_else(|| non_blank("HF_API_TOKEN")),
        }
    }
}
