//! Conversation controller

use crate::llm::{ResponseFetcher, TextGenerator};
use crate::state_machine::{Event, TransitionError};
use crate::transcript::{Message, TranscriptStore};
use std::sync::Arc;
use thiserror::Error;

/// Reasons a submission is refused. Fetch failures are never among them;
/// those become fallback replies.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("Message is empty")]
    Empty,
    #[error("A reply is still pending, wait for it before sending another message")]
    Busy,
    #[error("No turn is pending")]
    NoPendingTurn,
}

impl From<TransitionError> for SubmitError {
    fn from(err: TransitionError) -> Self {
        match err {
            TransitionError::AgentBusy => SubmitError::Busy,
            TransitionError::EmptyMessage => SubmitError::Empty,
            TransitionError::NoPendingReply => SubmitError::NoPendingTurn,
        }
    }
}

/// A recorded user message whose reply has not arrived yet.
///
/// Only [`ConversationController::begin_turn`] creates one and
/// [`ConversationController::complete_turn`] consumes it.
#[derive(Debug)]
#[must_use = "a pending turn leaves the conversation busy until it is completed"]
pub struct PendingTurn {
    user_message: Message,
}

impl PendingTurn {
    pub fn user_message(&self) -> &Message {
        &self.user_message
    }
}

/// Orchestrates turn-taking over a shared transcript
pub struct ConversationController<G: TextGenerator> {
    store: Arc<TranscriptStore>,
    fetcher: ResponseFetcher<G>,
}

impl<G: TextGenerator> ConversationController<G> {
    pub fn new(store: Arc<TranscriptStore>, generator: G) -> Self {
        Self {
            store,
            fetcher: ResponseFetcher::new(generator),
        }
    }

    pub fn store(&self) -> &Arc<TranscriptStore> {
        &self.store
    }

    #[allow(dead_code)] // Used by tests to inspect mocks
    pub fn generator(&self) -> &G {
        self.fetcher.generator()
    }

    /// Record the user message and mark the conversation busy, in one step.
    ///
    /// Refused while another turn is pending, so at most one request is ever
    /// in flight even if the page fails to disable its input.
    pub fn begin_turn(&self, text: &str) -> Result<PendingTurn, SubmitError> {
        let user_message = self.store.dispatch(Event::UserMessage {
            text: text.to_string(),
        })?;

        tracing::info!(message_id = %user_message.id, "Turn started");
        Ok(PendingTurn { user_message })
    }

    /// Fetch the reply and record it, clearing the busy flag in the same step.
    pub async fn complete_turn(&self, turn: PendingTurn) -> Result<Message, SubmitError> {
        let reply = self.fetcher.fetch(&turn.user_message.content).await;

        let assistant_message = self
            .store
            .dispatch(Event::ReplyReceived { text: reply })?;

        tracing::info!(
            user_message_id = %turn.user_message.id,
            message_id = %assistant_message.id,
            "Turn completed"
        );
        Ok(assistant_message)
    }

    /// Run a whole turn and return the assistant message.
    ///
    /// For any non-blank `text` submitted while idle this always succeeds;
    /// network and parse failures show up as fallback reply text.
    #[allow(dead_code)] // The HTTP layer splits the turn to answer before the reply
    pub async fn submit(&self, text: &str) -> Result<Message, SubmitError> {
        let turn = self.begin_turn(text)?;
        self.complete_turn(turn).await
    }
}
