//! State identifiers and per-state declarations.
//!
//! States are plain data: an identifier, a display label, layout coordinates
//! and the start/final flags. Only the final flag influences acceptance.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Unique key of a state within one automaton.
///
/// # Example
///
/// ```rust
/// use statetrace::core::StateId;
///
/// let id = StateId::from("q0");
/// assert_eq!(id.as_str(), "q0");
/// assert_eq!(id.to_string(), "q0");
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateId(String);

impl StateId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StateId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for StateId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for StateId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Normalized diagram coordinates, both axes in `[0, 1]`.
#[derive(Clone, Copy, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Declaration of a single state.
///
/// The wire shape follows the configuration record: coordinates are inlined
/// next to the flags, and both flags default to `false`.
///
/// ```rust
/// use statetrace::core::StateSpec;
///
/// let spec: StateSpec =
///     serde_json::from_str(r#"{ "x": 0.5, "y": 0.2, "isFinal": true, "label": "Res 0" }"#)
///         .unwrap();
///
/// assert!(spec.is_final);
/// assert!(!spec.is_start);
/// assert_eq!(spec.label, "Res 0");
/// ```
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateSpec {
    #[serde(flatten)]
    pub position: Position,
    #[serde(default)]
    pub is_start: bool,
    #[serde(default)]
    pub is_final: bool,
    #[serde(default)]
    pub label: String,
}

impl StateSpec {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.position = Position::new(x, y);
        self
    }

    pub fn start(mut self) -> Self {
        self.is_start = true;
        self
    }

    pub fn accepting(mut self) -> Self {
        self.is_final = true;
        self
    }
}
