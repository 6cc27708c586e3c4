//! Runtime for executing conversation turns
//!
//! The controller owns the turn lifecycle: record the user message, fetch a
//! reply, record the reply. It is generic over the text generator so tests
//! can drive it with mocks.

mod controller;

#[cfg(test)]
pub mod testing;

pub use controller::{ConversationController, SubmitError};

use crate::llm::{HuggingFaceService, LlmConfig, LlmError, LoggingService, TextGenerator};
use crate::transcript::TranscriptStore;
use std::sync::Arc;

/// Controller over a type-erased generator, as held by the HTTP layer
pub type ProductionController = ConversationController<Arc<dyn TextGenerator>>;

/// Wire the store, the endpoint client and the logging wrapper together
pub fn build_production_controller(
    config: &LlmConfig,
    store: Arc<TranscriptStore>,
) -> Result<ProductionController, LlmError> {
    let service = HuggingFaceService::new(config)?;
    let generator: Arc<dyn TextGenerator> = Arc::new(LoggingService::new(Arc::new(service)));
    Ok(ConversationController::new(store, generator))
}
