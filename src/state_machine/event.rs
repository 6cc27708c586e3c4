//! Events that can occur in a conversation

/// Events that trigger state transitions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The user submitted a message
    UserMessage { text: String },

    /// The response fetcher produced the assistant's reply
    ReplyReceived { text: String },
}
