//! Automaton instance: shared configuration plus run state.

use crate::config::{AutomatonConfig, ConfigError, StateTransitions};
use crate::core::{History, StateId, TransitionRecord};
use crate::engine::outcome::{StepError, StepFailure, StepOutcome};
use std::sync::Arc;
use tracing::debug;

/// A running deterministic finite automaton.
///
/// The configuration is immutable and may be shared between instances; the
/// current state and history belong to this instance alone.
///
/// # Example
///
/// ```rust
/// use statetrace::config::AutomatonConfig;
/// use statetrace::engine::Automaton;
///
/// let config = AutomatonConfig::from_json(
///     r#"{
///         "states": {
///             "q0": { "x": 0.2, "y": 0.5, "isStart": true },
///             "q1": { "x": 0.8, "y": 0.5, "isFinal": true }
///         },
///         "transitions": { "q0": { "digit": "q1" }, "q1": { "digit": "q1" } },
///         "startState": "q0"
///     }"#,
/// )
/// .unwrap();
///
/// let mut automaton = Automaton::new(config).unwrap();
/// assert!(!automaton.is_accepted());
///
/// assert!(automaton.step('4').is_valid());
/// assert!(automaton.is_accepted());
///
/// let failure = automaton.step('x');
/// assert!(!failure.is_valid());
/// assert_eq!(automaton.current_state().as_str(), "q1");
/// ```
#[derive(Clone, Debug)]
pub struct Automaton {
    config: Arc<AutomatonConfig>,
    current: StateId,
    history: History,
}

impl Automaton {
    /// Create an automaton positioned at its start state.
    /// Returns an error if the configuration references undeclared states.
    pub fn new(config: impl Into<Arc<AutomatonConfig>>) -> Result<Self, ConfigError> {
        let config = config.into();
        config.validate()?;

        Ok(Self {
            current: config.start_state.clone(),
            config,
            history: History::new(),
        })
    }

    /// Return to the start state and forget the history.
    pub fn reset(&mut self) -> &StateId {
        self.current = self.config.start_state.clone();
        self.history.clear();
        debug!(state = %self.current, "automaton reset");
        &self.current
    }

    /// Consume one symbol.
    ///
    /// Literal entries of the current state take precedence; otherwise the
    /// first class entry in declaration order that accepts the symbol is
    /// used. On failure the current state and history are left untouched.
    pub fn step(&mut self, symbol: char) -> StepOutcome {
        let table = self.config.transitions_from(&self.current);
        let destination = table.and_then(|t| t.resolve(symbol)).cloned();

        match destination {
            Some(to) => {
                let record = TransitionRecord::new(self.current.clone(), to.clone(), symbol);
                debug!(from = %record.from, to = %record.to, %symbol, "transition");
                self.history.record(record.clone());
                self.current = to;
                StepOutcome::Advanced(record)
            }
            None => {
                let error = self.rejection(table, symbol);
                debug!(from = %self.current, %symbol, %error, "transition rejected");
                StepOutcome::Rejected(StepFailure {
                    from: self.current.clone(),
                    symbol,
                    error,
                })
            }
        }
    }

    fn rejection(&self, table: Option<&StateTransitions>, symbol: char) -> StepError {
        match table {
            Some(table) => StepError::NoMatch {
                symbol,
                expected: table.patterns().map(|p| p.describe()).collect(),
            },
            None => StepError::DeadState {
                symbol,
                state: self.current.clone(),
            },
        }
    }

    /// Check if the current state is accepting (pure)
    pub fn is_accepted(&self) -> bool {
        self.config.is_final(&self.current)
    }

    /// Readable phrases for every pattern the current state accepts.
    /// Empty for a dead-end state.
    pub fn expected_symbols(&self) -> Vec<String> {
        self.config
            .transitions_from(&self.current)
            .map(|t| t.patterns().map(|p| p.describe()).collect())
            .unwrap_or_default()
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> &StateId {
        &self.current
    }

    pub fn start_state(&self) -> &StateId {
        &self.config.start_state
    }

    /// Get transition history (pure)
    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn config(&self) -> &AutomatonConfig {
        &self.config
    }

    /// Shared handle to the configuration.
    pub fn shared_config(&self) -> Arc<AutomatonConfig> {
        Arc::clone(&self.config)
    }
}
