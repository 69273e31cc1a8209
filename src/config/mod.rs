//! Declarative automaton configuration.
//!
//! An automaton is described by a plain record: its states, an ordered
//! transition table per state, the start state and some display-only
//! metadata. The record is usually loaded from JSON, but can also be
//! assembled in code with [`AutomatonBuilder`].
//!
//! # Example
//!
//! ```rust
//! use statetrace::config::AutomatonConfig;
//!
//! let config = AutomatonConfig::from_json(
//!     r#"{
//!         "description": "Even number of a's",
//!         "states": {
//!             "even": { "x": 0.3, "y": 0.5, "isStart": true, "isFinal": true, "label": "Even" },
//!             "odd":  { "x": 0.7, "y": 0.5, "label": "Odd" }
//!         },
//!         "transitions": {
//!             "even": { "a": "odd", "b": "even" },
//!             "odd":  { "a": "even", "b": "odd" }
//!         },
//!         "startState": "even"
//!     }"#,
//! )
//! .unwrap();
//!
//! assert!(config.is_final(&config.start_state));
//! assert_eq!(config.transitions_from(&"odd".into()).unwrap().len(), 2);
//! ```

pub mod builder;
pub mod error;
pub mod grammar;
pub mod integrity;
pub mod table;

pub use builder::AutomatonBuilder;
pub use error::{BuildError, ConfigError, IntegrityViolation};
pub use grammar::ProductionRule;
pub use table::StateTransitions;

use crate::core::{StateId, StateSpec};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Which family an automaton belongs to.
///
/// Selects the conclusion text generated after a run; the engine itself
/// treats every kind the same.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum AutomatonKind {
    #[serde(rename = "email")]
    Email,
    #[serde(rename = "digit-sum-mod3")]
    DigitSumMod3,
    #[default]
    #[serde(rename = "generic")]
    Generic,
}

fn allow_empty_by_default() -> bool {
    true
}

/// Immutable description of one automaton.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutomatonConfig {
    /// Human-readable name shown when the automaton is loaded
    #[serde(default)]
    pub description: String,

    /// Declared states keyed by id
    pub states: BTreeMap<StateId, StateSpec>,

    /// Outgoing transitions per source state; absent states are dead ends
    #[serde(default)]
    pub transitions: BTreeMap<StateId, StateTransitions>,

    /// State every run begins in
    pub start_state: StateId,

    /// Display-only production rules
    #[serde(default)]
    pub grammar: Vec<String>,

    /// Family used to pick a conclusion strategy
    #[serde(default)]
    pub kind: AutomatonKind,

    /// Whether an empty input may be submitted for validation
    #[serde(default = "allow_empty_by_default")]
    pub allow_empty_input: bool,
}

impl AutomatonConfig {
    /// Parse a configuration record from JSON and check its references.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that every referenced state is declared.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let result = integrity::check(self);
        if result.is_success() {
            Ok(())
        } else {
            Err(ConfigError::Integrity(integrity::violations(&result)))
        }
    }

    pub fn state(&self, id: &StateId) -> Option<&StateSpec> {
        self.states.get(id)
    }

    /// Outgoing transitions of `id`, or `None` for a state without any.
    pub fn transitions_from(&self, id: &StateId) -> Option<&StateTransitions> {
        self.transitions.get(id).filter(|table| !table.is_empty())
    }

    pub fn is_final(&self, id: &StateId) -> bool {
        self.states.get(id).is_some_and(|s| s.is_final)
    }

    /// Display label of a state, falling back to its id.
    pub fn label_of<'a>(&'a self, id: &'a StateId) -> &'a str {
        match self.states.get(id) {
            Some(spec) if !spec.label.is_empty() => &spec.label,
            _ => id.as_str(),
        }
    }

    pub fn grammar_rules(&self) -> Vec<ProductionRule> {
        grammar::parse_rules(&self.grammar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MOD3: &str = r#"{
        "description": "Digit sum modulo 3",
        "kind": "digit-sum-mod3",
        "states": {
            "q0": { "x": 0.5, "y": 0.2, "isStart": true, "isFinal": true, "label": "Res 0" },
            "q1": { "x": 0.8, "y": 0.8, "label": "Res 1" },
            "q2": { "x": 0.2, "y": 0.8 }
        },
        "transitions": {
            "q0": { "1": "q1", "2": "q2", "3": "q0" },
            "q1": { "1": "q2", "2": "q0", "3": "q1" },
            "q2": { "1": "q0", "2": "q1", "3": "q2" }
        },
        "startState": "q0",
        "grammar": ["S -> 1 A | 2 B | 3 S | ε"]
    }"#;

    #[test]
    fn parses_full_record() {
        let config = AutomatonConfig::from_json(MOD3).unwrap();

        assert_eq!(config.description, "Digit sum modulo 3");
        assert_eq!(config.kind, AutomatonKind::DigitSumMod3);
        assert_eq!(config.states.len(), 3);
        assert_eq!(config.start_state.as_str(), "q0");
        assert!(config.allow_empty_input);
        assert_eq!(config.grammar_rules()[0].lhs, "S");
    }

    #[test]
    fn optional_fields_default() {
        let config = AutomatonConfig::from_json(
            r#"{ "states": { "a": { "x": 0, "y": 0 } }, "startState": "a" }"#,
        )
        .unwrap();

        assert!(config.transitions.is_empty());
        assert!(config.grammar.is_empty());
        assert_eq!(config.kind, AutomatonKind::Generic);
        assert!(config.allow_empty_input);
    }

    #[test]
    fn labels_fall_back_to_id() {
        let config = AutomatonConfig::from_json(MOD3).unwrap();

        assert_eq!(config.label_of(&StateId::from("q0")), "Res 0");
        assert_eq!(config.label_of(&StateId::from("q2")), "q2");
        assert_eq!(config.label_of(&StateId::from("nope")), "nope");
    }

    #[test]
    fn empty_transition_map_counts_as_dead_end() {
        let config = AutomatonConfig::from_json(
            r#"{
                "states": { "a": { "x": 0, "y": 0 } },
                "transitions": { "a": {} },
                "startState": "a"
            }"#,
        )
        .unwrap();

        assert!(config.transitions_from(&StateId::from("a")).is_none());
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let result = AutomatonConfig::from_json("{ not json");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn dangling_reference_is_an_integrity_error() {
        let result = AutomatonConfig::from_json(
            r#"{
                "states": { "a": { "x": 0, "y": 0 } },
                "transitions": { "a": { "x": "b" } },
                "startState": "a"
            }"#,
        );

        match result {
            Err(ConfigError::Integrity(violations)) => assert_eq!(violations.len(), 1),
            other => panic!("Expected integrity error, got {other:?}"),
        }
    }

    #[test]
    fn round_trips_through_json() {
        let config = AutomatonConfig::from_json(MOD3).unwrap();
        let json = config.to_json_pretty().unwrap();
        let back = AutomatonConfig::from_json(&json).unwrap();

        assert_eq!(config, back);
    }
}
