//! Conversation state types

use serde::{Deserialize, Serialize};

/// Conversation state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ConvState {
    /// Ready for user input, no request outstanding
    #[default]
    Idle,

    /// User message recorded, reply request in flight
    AwaitingReply,
}

impl ConvState {
    /// The busy flag shown to the presentation layer
    pub fn is_busy(self) -> bool {
        matches!(self, ConvState::AwaitingReply)
    }
}
