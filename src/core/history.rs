//! Transition history tracking.
//!
//! History is an append-only log of the successful transitions of one run.
//! It exists for replay and logging only and is never consulted when
//! resolving the next transition.

use super::state::StateId;
use serde::{Deserialize, Serialize};

/// Record of a single consumed symbol.
///
/// # Example
///
/// ```rust
/// use statetrace::core::{StateId, TransitionRecord};
///
/// let record = TransitionRecord::new(StateId::from("q0"), StateId::from("q1"), 'a');
///
/// assert!(record.valid);
/// assert_eq!(record.symbol, 'a');
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct TransitionRecord {
    /// The state the symbol was read in
    pub from: StateId,
    /// The state the automaton moved to
    pub to: StateId,
    /// The consumed input symbol
    pub symbol: char,
    /// Whether the transition succeeded
    pub valid: bool,
}

impl TransitionRecord {
    /// Create a successful record.
    pub fn new(from: StateId, to: StateId, symbol: char) -> Self {
        Self {
            from,
            to,
            symbol,
            valid: true,
        }
    }
}

/// Ordered history of transitions for the current run.
///
/// # Example
///
/// ```rust
/// use statetrace::core::{History, StateId, TransitionRecord};
///
/// let mut history = History::new();
/// history.record(TransitionRecord::new(StateId::from("q0"), StateId::from("q1"), '1'));
/// history.record(TransitionRecord::new(StateId::from("q1"), StateId::from("q0"), '2'));
///
/// let path = history.get_path();
/// assert_eq!(path.len(), 3); // q0 -> q1 -> q0
/// assert_eq!(history.consumed(), "12");
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct History {
    transitions: Vec<TransitionRecord>,
}

impl History {
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Append a transition.
    pub fn record(&mut self, transition: TransitionRecord) {
        self.transitions.push(transition);
    }

    /// Drop every recorded transition.
    pub fn clear(&mut self) {
        self.transitions.clear();
    }

    /// Get the path of states traversed.
    ///
    /// Returns the source of the first transition followed by the
    /// destination of every transition. Empty when nothing was recorded.
    pub fn get_path(&self) -> Vec<&StateId> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Symbols consumed so far, in order.
    pub fn consumed(&self) -> String {
        self.transitions.iter().map(|t| t.symbol).collect()
    }

    pub fn last(&self) -> Option<&TransitionRecord> {
        self.transitions.last()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Get all transitions in order.
    pub fn transitions(&self) -> &[TransitionRecord] {
        &self.transitions
    }
}
