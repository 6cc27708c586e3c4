//! Transcript store
//!
//! Holds the ordered messages of the session and the busy flag. Every
//! mutation goes through [`TranscriptStore::dispatch`], which applies one
//! state-machine transition atomically and then notifies subscribers.

mod message;

pub use message::{IdGenerator, Message, MessageId, MessageRole};

use crate::state_machine::{transition, ConvState, Event, TransitionError};
use chrono::Utc;
use serde::Serialize;
use std::sync::{PoisonError, RwLock};
use tokio::sync::broadcast;

const SUBSCRIBER_CAPACITY: usize = 128;

/// Point-in-time view of the transcript
#[derive(Debug, Clone, Serialize)]
pub struct TranscriptSnapshot {
    pub messages: Vec<Message>,
    pub busy: bool,
}

/// Notification sent to subscribers after each transition
#[derive(Debug, Clone)]
pub enum TranscriptEvent {
    /// A message was appended and the busy flag now has the given value
    Appended { message: Message, busy: bool },
}

struct Inner {
    messages: Vec<Message>,
    state: ConvState,
    ids: IdGenerator,
}

/// Single-session, in-memory transcript
pub struct TranscriptStore {
    inner: RwLock<Inner>,
    events_tx: broadcast::Sender<TranscriptEvent>,
}

impl Default for TranscriptStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TranscriptStore {
    pub fn new() -> Self {
        let (events_tx, _) = broadcast::channel(SUBSCRIBER_CAPACITY);
        Self {
            inner: RwLock::new(Inner {
                messages: Vec::new(),
                state: ConvState::Idle,
                ids: IdGenerator::new(),
            }),
            events_tx,
        }
    }

    /// Apply one event: run the transition, append the resulting message and
    /// update the state as a single step.
    ///
    /// Subscribers are notified while the write lock is still held, so the
    /// order of notifications matches the order of the transcript.
    pub fn dispatch(&self, event: Event) -> Result<Message, TransitionError> {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);

        let result = transition(inner.state, event)?;

        let timestamp = Utc::now();
        let message = Message {
            id: inner.ids.next_id(timestamp),
            content: result.append.content,
            role: result.append.role,
            timestamp,
        };

        inner.messages.push(message.clone());
        inner.state = result.new_state;

        tracing::debug!(
            message_id = %message.id,
            role = %message.role,
            state = ?inner.state,
            "Transcript updated"
        );

        // No receivers is fine; the page may not be connected
        let _ = self.events_tx.send(TranscriptEvent::Appended {
            message: message.clone(),
            busy: inner.state.is_busy(),
        });

        Ok(message)
    }

    /// Current messages and busy flag
    pub fn snapshot(&self) -> TranscriptSnapshot {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        TranscriptSnapshot {
            messages: inner.messages.clone(),
            busy: inner.state.is_busy(),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .state
            .is_busy()
    }

    /// Register an observer for future transitions
    pub fn subscribe(&self) -> broadcast::Receiver<TranscriptEvent> {
        self.events_tx.subscribe()
    }

    /// Snapshot plus a receiver for every transition after it, taken together
    /// so nothing is missed or seen twice.
    pub fn snapshot_and_subscribe(
        &self,
    ) -> (TranscriptSnapshot, broadcast::Receiver<TranscriptEvent>) {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        let rx = self.events_tx.subscribe();
        let snapshot = TranscriptSnapshot {
            messages: inner.messages.clone(),
            busy: inner.state.is_busy(),
        };
        (snapshot, rx)
    }
}
