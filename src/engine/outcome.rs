//! Results of a single step.

use crate::core::{StateId, TransitionRecord};
use serde::Serialize;
use thiserror::Error;

/// Why a symbol could not be consumed.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StepError {
    /// The state has transitions, but none accepts the symbol
    #[error("Invalid character '{symbol}'. Expected: {}", .expected.join(" or "))]
    NoMatch { symbol: char, expected: Vec<String> },

    /// The state has no outgoing transitions at all
    #[error("Invalid character '{symbol}'. Expected: nothing (state '{state}' is a dead end)")]
    DeadState { symbol: char, state: StateId },
}

/// A rejected step. The automaton did not move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepFailure {
    pub from: StateId,
    pub symbol: char,
    pub error: StepError,
}

impl StepFailure {
    /// Always `false`; mirrors [`TransitionRecord::valid`].
    pub fn valid(&self) -> bool {
        false
    }

    /// Human-readable explanation of the failure.
    pub fn message(&self) -> String {
        self.error.to_string()
    }

    pub fn is_dead_state(&self) -> bool {
        matches!(self.error, StepError::DeadState { .. })
    }
}

/// Result of feeding one symbol to an automaton.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum StepOutcome {
    /// The symbol was consumed and recorded in history
    Advanced(TransitionRecord),

    /// No transition accepted the symbol
    Rejected(StepFailure),
}

impl StepOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Advanced(_))
    }

    pub fn symbol(&self) -> char {
        match self {
            Self::Advanced(record) => record.symbol,
            Self::Rejected(failure) => failure.symbol,
        }
    }

    /// State the step was attempted from.
    pub fn source_state(&self) -> &StateId {
        match self {
            Self::Advanced(record) => &record.from,
            Self::Rejected(failure) => &failure.from,
        }
    }

    pub fn record(&self) -> Option<&TransitionRecord> {
        match self {
            Self::Advanced(record) => Some(record),
            Self::Rejected(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&StepFailure> {
        match self {
            Self::Advanced(_) => None,
            Self::Rejected(failure) => Some(failure),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_match_message_lists_alternatives() {
        let error = StepError::NoMatch {
            symbol: '@',
            expected: vec!["letter or digit".to_string(), "underscore".to_string()],
        };

        assert_eq!(
            error.to_string(),
            "Invalid character '@'. Expected: letter or digit or underscore"
        );
    }

    #[test]
    fn dead_state_message_names_state() {
        let error = StepError::DeadState {
            symbol: 'x',
            state: StateId::from("sink"),
        };

        assert_eq!(
            error.to_string(),
            "Invalid character 'x'. Expected: nothing (state 'sink' is a dead end)"
        );
    }

    #[test]
    fn outcome_accessors() {
        let advanced = StepOutcome::Advanced(TransitionRecord::new(
            StateId::from("q0"),
            StateId::from("q1"),
            'a',
        ));
        assert!(advanced.is_valid());
        assert_eq!(advanced.symbol(), 'a');
        assert!(advanced.failure().is_none());

        let rejected = StepOutcome::Rejected(StepFailure {
            from: StateId::from("q0"),
            symbol: '@',
            error: StepError::DeadState {
                symbol: '@',
                state: StateId::from("q0"),
            },
        });
        assert!(!rejected.is_valid());
        assert_eq!(rejected.source_state().as_str(), "q0");
        assert!(rejected.failure().unwrap().is_dead_state());
        assert!(!rejected.failure().unwrap().valid());
    }

    #[test]
    fn outcome_serializes_with_tag() {
        let advanced = StepOutcome::Advanced(TransitionRecord::new(
            StateId::from("q0"),
            StateId::from("q1"),
            'a',
        ));
        let json = serde_json::to_value(&advanced).unwrap();

        assert_eq!(json["outcome"], "advanced");
        assert_eq!(json["valid"], true);
        assert_eq!(json["to"], "q1");
    }
}
