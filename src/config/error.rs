//! Configuration and builder error types.

use crate::core::{StateId, SymbolPattern, UnknownPattern};
use thiserror::Error;

/// A reference in the configuration that points at an undeclared state.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum IntegrityViolation {
    #[error("Start state '{0}' is not declared in states")]
    MissingStartState(StateId),

    #[error("Transitions declared for unknown state '{0}'")]
    UnknownSource(StateId),

    #[error("Transition '{from}' --({pattern})--> '{to}' targets an unknown state")]
    UnknownTarget {
        from: StateId,
        pattern: SymbolPattern,
        to: StateId,
    },
}

/// Errors that can occur when loading an automaton configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document is not a valid configuration record
    #[error("Failed to parse automaton configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// The record references states it does not declare
    #[error("Automaton configuration is inconsistent: {}", join_violations(.0))]
    Integrity(Vec<IntegrityViolation>),
}

/// Errors that can occur when building a configuration in code.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Start state not specified. Call .start(id) before .build()")]
    MissingStartState,

    #[error("No states defined. Add at least one state")]
    NoStates,

    #[error(transparent)]
    Pattern(#[from] UnknownPattern),

    #[error(transparent)]
    Invalid(#[from] ConfigError),
}

fn join_violations(violations: &[IntegrityViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
