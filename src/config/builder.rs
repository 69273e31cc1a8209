//! Fluent builder for assembling configurations in code.

use crate::config::error::BuildError;
use crate::config::{AutomatonConfig, AutomatonKind, StateTransitions};
use crate::core::{StateId, StateSpec, SymbolPattern};
use std::collections::BTreeMap;

/// Builder for [`AutomatonConfig`] with a fluent API.
///
/// # Example
///
/// ```rust
/// use statetrace::config::AutomatonBuilder;
/// use statetrace::core::{StateSpec, SymbolPattern};
///
/// let config = AutomatonBuilder::new()
///     .description("Identifiers")
///     .state("start", StateSpec::new("Start"))
///     .state("ident", StateSpec::new("Ident").accepting())
///     .start("start")
///     .transition("start", SymbolPattern::Letter, "ident")
///     .transition_token("ident", "[a-z0-9]", "ident")
///     .unwrap()
///     .build()
///     .unwrap();
///
/// assert!(config.states["start"].is_start);
/// assert_eq!(config.transitions.len(), 2);
/// ```
pub struct AutomatonBuilder {
    description: String,
    states: BTreeMap<StateId, StateSpec>,
    transitions: BTreeMap<StateId, StateTransitions>,
    start: Option<StateId>,
    grammar: Vec<String>,
    kind: AutomatonKind,
    allow_empty_input: bool,
}

impl AutomatonBuilder {
    pub fn new() -> Self {
        Self {
            description: String::new(),
            states: BTreeMap::new(),
            transitions: BTreeMap::new(),
            start: None,
            grammar: Vec::new(),
            kind: AutomatonKind::Generic,
            allow_empty_input: true,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Declare a state. Redeclaring an id replaces its spec.
    pub fn state(mut self, id: impl Into<StateId>, spec: StateSpec) -> Self {
        self.states.insert(id.into(), spec);
        self
    }

    /// Set the start state (required).
    pub fn start(mut self, id: impl Into<StateId>) -> Self {
        self.start = Some(id.into());
        self
    }

    /// Append a transition entry to `from`'s table.
    pub fn transition(
        mut self,
        from: impl Into<StateId>,
        pattern: SymbolPattern,
        to: impl Into<StateId>,
    ) -> Self {
        self.transitions
            .entry(from.into())
            .or_default()
            .insert(pattern, to.into());
        self
    }

    /// Append a transition whose pattern is given as a configuration token.
    /// Returns an error if the token names no known pattern.
    pub fn transition_token(
        self,
        from: impl Into<StateId>,
        token: &str,
        to: impl Into<StateId>,
    ) -> Result<Self, BuildError> {
        let pattern: SymbolPattern = token.parse()?;
        Ok(self.transition(from, pattern, to))
    }

    pub fn grammar_rule(mut self, rule: impl Into<String>) -> Self {
        self.grammar.push(rule.into());
        self
    }

    pub fn kind(mut self, kind: AutomatonKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn allow_empty_input(mut self, allow: bool) -> Self {
        self.allow_empty_input = allow;
        self
    }

    /// Build the configuration.
    ///
    /// The start state is flagged `is_start`; every other state is unflagged.
    /// Returns an error if required fields are missing or a reference dangles.
    pub fn build(self) -> Result<AutomatonConfig, BuildError> {
        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }
        let start = self.start.ok_or(BuildError::MissingStartState)?;

        let states = self
            .states
            .into_iter()
            .map(|(id, mut spec)| {
                spec.is_start = id == start;
                (id, spec)
            })
            .collect();

        let config = AutomatonConfig {
            description: self.description,
            states,
            transitions: self.transitions,
            start_state: start,
            grammar: self.grammar,
            kind: self.kind,
            allow_empty_input: self.allow_empty_input,
        };
        config.validate()?;

        Ok(config)
    }
}

impl Default for AutomatonBuilder {
    fn default() -> Self {
        Self::new()
    }
}
