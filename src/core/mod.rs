//! Core automaton types.
//!
//! This module contains the plain data the engine operates on:
//! - State identifiers and declarations
//! - Symbol patterns (literals and character classes)
//! - Append-only transition history
//!
//! Nothing in here performs I/O or depends on presentation.

mod history;
mod pattern;
mod state;

pub use history::{History, TransitionRecord};
pub use pattern::{
    SymbolPattern, UnknownPattern, DIGIT_TOKEN, LETTER_OR_DIGIT_TOKEN, LETTER_TOKEN,
    SEPARATOR_TOKEN,
};
pub use state::{Position, StateId, StateSpec};
