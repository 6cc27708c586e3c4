//! Pure state transition function

use super::{ConvState, Event};
use crate::transcript::MessageRole;
use thiserror::Error;

/// A message the transition asks the store to append
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMessage {
    pub role: MessageRole,
    pub content: String,
}

/// Result of a state transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    pub new_state: ConvState,
    pub append: NewMessage,
}

impl TransitionResult {
    fn new(state: ConvState, role: MessageRole, content: String) -> Self {
        Self {
            new_state: state,
            append: NewMessage { role, content },
        }
    }
}

/// Errors that can occur during transition
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("Agent is busy, wait for the current reply before sending another message")]
    AgentBusy,
    #[error("Message is empty")]
    EmptyMessage,
    #[error("No reply is pending")]
    NoPendingReply,
}

/// Pure transition function
///
/// Given the same inputs, always produces the same outputs, with no I/O.
pub fn transition(state: ConvState, event: Event) -> Result<TransitionResult, TransitionError> {
    match (state, event) {
        (_, Event::UserMessage { text }) if text.trim().is_empty() => {
            Err(TransitionError::EmptyMessage)
        }

        // Idle + UserMessage -> AwaitingReply
        (ConvState::Idle, Event::UserMessage { text }) => Ok(TransitionResult::new(
            ConvState::AwaitingReply,
            MessageRole::User,
            text,
        )),

        // Only one request may be in flight
        (ConvState::AwaitingReply, Event::UserMessage { .. }) => Err(TransitionError::AgentBusy),

        // AwaitingReply + ReplyReceived -> Idle
        (ConvState::AwaitingReply, Event::ReplyReceived { text }) => Ok(TransitionResult::new(
            ConvState::Idle,
            MessageRole::Assistant,
            text,
        )),

        (ConvState::Idle, Event::ReplyReceived { .. }) => Err(TransitionError::NoPendingReply),
    }
}
