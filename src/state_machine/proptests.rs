//! Property-based tests for the state machine
//!
//! These tests verify key invariants hold across all possible inputs.

use super::*;
use crate::transcript::MessageRole;
use proptest::prelude::*;

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_text() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => "[a-zA-Z0-9 ?!.]{1,40}",
        1 => "[ \t\n]{0,4}",
    ]
}

fn arb_event() -> impl Strategy<Value = Event> {
    prop_oneof![
        arb_text().prop_map(|text| Event::UserMessage { text }),
        arb_text().prop_map(|text| Event::ReplyReceived { text }),
    ]
}

fn arb_state() -> impl Strategy<Value = ConvState> {
    prop_oneof![Just(ConvState::Idle), Just(ConvState::AwaitingReply)]
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    // Accepted transitions always alternate user and assistant, starting
    // with a user message, and busy tracks whether the last one was a user turn.
    #[test]
    fn prop_roles_alternate(events in proptest::collection::vec(arb_event(), 0..40)) {
        let mut state = ConvState::Idle;
        let mut roles = Vec::new();

        for event in events {
            if let Ok(result) = transition(state, event) {
                state = result.new_state;
                roles.push(result.append.role);
            }
        }

        for (i, role) in roles.iter().enumerate() {
            let expected = if i % 2 == 0 { MessageRole::User } else { MessageRole::Assistant };
            prop_assert_eq!(*role, expected);
        }
        prop_assert_eq!(state.is_busy(), roles.last() == Some(&MessageRole::User));
    }

    // A rejected event never changes anything: the caller keeps the old state
    #[test]
    fn prop_rejection_is_total(state in arb_state(), event in arb_event()) {
        match transition(state, event.clone()) {
            Ok(result) => {
                prop_assert_ne!(result.new_state, state);
                match event {
                    Event::UserMessage { text } => {
                        prop_assert!(!text.trim().is_empty());
                        prop_assert_eq!(result.append.content, text);
                    }
                    Event::ReplyReceived { text } => {
                        prop_assert_eq!(result.append.content, text);
                    }
                }
            }
            Err(TransitionError::AgentBusy) => prop_assert!(state.is_busy()),
            Err(TransitionError::NoPendingReply) => prop_assert!(!state.is_busy()),
            Err(TransitionError::EmptyMessage) => {
                let blank = matches!(&event, Event::UserMessage { text } if text.trim().is_empty());
                prop_assert!(blank);
            }
        }
    }

    // Determinism
    #[test]
    fn prop_transition_is_pure(state in arb_state(), event in arb_event()) {
        let a = transition(state, event.clone());
        let b = transition(state, event);
        prop_assert_eq!(a, b);
    }
}
