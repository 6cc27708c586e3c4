//! Conversation state machine
//!
//! Pure state transitions for the turn lifecycle. The transcript store runs
//! [`transition`] inside its write lock, so a transition and the message it
//! appends become visible together.

pub mod event;
pub mod state;
pub(crate) mod transition;

#[cfg(test)]
mod proptests;

pub use event::Event;
pub use state::ConvState;
pub use transition::{transition, TransitionError};
