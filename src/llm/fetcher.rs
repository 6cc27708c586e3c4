//! Response fetcher
//!
//! Turns one text-generation round trip into a reply that can always be
//! shown. Errors are logged here and never returned.

use super::{GenerationRequest, TextGenerator};

/// Reply when the endpoint answered but gave nothing usable
pub const EMPTY_REPLY_FALLBACK: &str =
    "I'm having trouble thinking right now. Could you try asking me something else?";

/// Reply when the round trip itself failed
pub const CONNECTION_FALLBACK: &str =
    "Oopsie! I'm having a little trouble connecting right now. Could you try again?";

/// Single-attempt fetcher over any [`TextGenerator`]
pub struct ResponseFetcher<G: TextGenerator> {
    generator: G,
}

impl<G: TextGenerator> ResponseFetcher<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    #[allow(dead_code)]
    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// One request, no retry. Always returns a displayable string.
    pub async fn fetch(&self, text: &str) -> String {
        let request = GenerationRequest::new(text);

        match self.generator.generate(&request).await {
            Ok(response) => response.generated_text.unwrap_or_else(|| {
                tracing::warn!(
                    endpoint = %self.generator.endpoint(),
                    "Endpoint returned no generated text"
                );
                EMPTY_REPLY_FALLBACK.to_string()
            }),
            Err(e) => {
                tracing::error!(
                    endpoint = %self.generator.endpoint(),
                    error = %e,
                    kind = e.kind.as_str(),
                    "Failed to fetch reply"
                );
                CONNECTION_FALLBACK.to_string()
            }
        }
    }
}
