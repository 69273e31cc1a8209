//! Automaton execution engine.
//!
//! The engine consumes one symbol at a time, resolves the transition
//! (literal entries first, then character classes in declaration order),
//! records successful transitions and reports failures as values. It never
//! panics on input and never performs I/O.

mod automaton;
mod outcome;

pub use automaton::Automaton;
pub use outcome::{StepError, StepFailure, StepOutcome};
