//! LLM error types

use thiserror::Error;

/// Text generation error with classification
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct LlmError {
    pub kind: LlmErrorKind,
    pub message: String,
}

impl LlmError {
    pub fn new(kind: LlmErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(LlmErrorKind::Network, message)
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::new(LlmErrorKind::Parse, message)
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        Self::new(LlmErrorKind::Unknown, message)
    }
}

/// Error classification, used for diagnostics only. Every kind ends up as
/// the same fallback reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LlmErrorKind {
    /// Connection failures, timeouts, truncated bodies
    Network,
    /// Response body was not JSON
    Parse,
    /// Anything else (client construction, request building)
    Unknown,
}

impl LlmErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            LlmErrorKind::Network => "network",
            LlmErrorKind::Parse => "parse",
            LlmErrorKind::Unknown => "unknown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_kind() {
        assert_eq!(LlmError::network("x").kind, LlmErrorKind::Network);
        assert_eq!(LlmError::parse("x").kind, LlmErrorKind::Parse);
        assert_eq!(LlmError::unknown("x").kind, LlmErrorKind::Unknown);
    }

    #[test]
    fn test_display_is_message() {
        let err = LlmError::network("Connection failed: refused");
        assert_eq!(err.to_string(), "Connection failed: refused");
        assert_eq!(err.kind.as_str(), "network");
    }
}
