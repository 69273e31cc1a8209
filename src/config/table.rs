//! Ordered per-state transition entries.

use crate::core::{StateId, SymbolPattern};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Outgoing transitions of one state, in declaration order.
///
/// Declaration order is the order of keys in the configuration document and
/// decides ties between character classes. Redeclaring a pattern replaces its
/// destination without moving it.
///
/// # Example
///
/// ```rust
/// use statetrace::config::StateTransitions;
///
/// let table: StateTransitions =
///     serde_json::from_str(r#"{ "[a-z0-9]": "q4", "-": "q5", ".": "q6" }"#).unwrap();
///
/// assert_eq!(table.resolve('x').map(|s| s.as_str()), Some("q4"));
/// assert_eq!(table.resolve('.').map(|s| s.as_str()), Some("q6"));
/// assert_eq!(table.resolve('@'), None);
/// ```
#[derive(Clone, PartialEq, Debug, Default)]
pub struct StateTransitions {
    entries: Vec<(SymbolPattern, StateId)>,
}

impl StateTransitions {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add an entry, or retarget an existing pattern in place.
    pub fn insert(&mut self, pattern: SymbolPattern, to: StateId) {
        match self.entries.iter_mut().find(|(p, _)| *p == pattern) {
            Some(entry) => entry.1 = to,
            None => self.entries.push((pattern, to)),
        }
    }

    /// Resolve the destination for `symbol`.
    ///
    /// A literal entry equal to the symbol wins outright. Otherwise the first
    /// class entry, in declaration order, that accepts the symbol is chosen.
    pub fn resolve(&self, symbol: char) -> Option<&StateId> {
        self.entries
            .iter()
            .find(|(pattern, _)| pattern.is_literal() && pattern.matches(symbol))
            .or_else(|| {
                self.entries
                    .iter()
                    .find(|(pattern, _)| !pattern.is_literal() && pattern.matches(symbol))
            })
            .map(|(_, to)| to)
    }

    pub fn patterns(&self) -> impl Iterator<Item = &SymbolPattern> {
        self.entries.iter().map(|(pattern, _)| pattern)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&SymbolPattern, &StateId)> {
        self.entries.iter().map(|(pattern, to)| (pattern, to))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(SymbolPattern, StateId)> for StateTransitions {
    fn from_iter<I: IntoIterator<Item = (SymbolPattern, StateId)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (pattern, to) in iter {
            table.insert(pattern, to);
        }
        table
    }
}

impl Serialize for StateTransitions {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (pattern, to) in &self.entries {
            map.serialize_entry(pattern, to)?;
        }
        map.end()
    }
}

struct StateTransitionsVisitor;

impl<'de> Visitor<'de> for StateTransitionsVisitor {
    type Value = StateTransitions;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map from symbol pattern to destination state")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut table = StateTransitions::new();
        while let Some((pattern, to)) = access.next_entry::<SymbolPattern, StateId>()? {
            table.insert(pattern, to);
        }
        Ok(table)
    }
}

impl<'de> Deserialize<'de> for StateTransitions {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(StateTransitionsVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(json: &str) -> StateTransitions {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn keeps_document_order() {
        let t = table(r#"{ "[a-z0-9]": "q1", "_": "q1", "[.-]": "q2", "@": "q3" }"#);
        let patterns: Vec<String> = t.patterns().map(|p| p.token()).collect();

        assert_eq!(patterns, vec!["[a-z0-9]", "_", "[.-]", "@"]);
    }

    #[test]
    fn literal_beats_class_declared_earlier() {
        let t = table(r#"{ "digit": "class", "7": "literal" }"#);

        assert_eq!(t.resolve('7').unwrap().as_str(), "literal");
        assert_eq!(t.resolve('3').unwrap().as_str(), "class");
    }

    #[test]
    fn earlier_class_wins_ties() {
        let t = table(r#"{ "letter": "first", "[a-z0-9]": "second" }"#);
        assert_eq!(t.resolve('k').unwrap().as_str(), "first");
        assert_eq!(t.resolve('4').unwrap().as_str(), "second");

        let reversed = table(r#"{ "[a-z0-9]": "second", "letter": "first" }"#);
        assert_eq!(reversed.resolve('k').unwrap().as_str(), "second");
    }

    #[test]
    fn duplicate_pattern_retargets_in_place() {
        let mut t = StateTransitions::new();
        t.insert(SymbolPattern::Digit, StateId::from("a"));
        t.insert(SymbolPattern::Letter, StateId::from("b"));
        t.insert(SymbolPattern::Digit, StateId::from("c"));

        assert_eq!(t.len(), 2);
        assert_eq!(t.iter().next().unwrap().1.as_str(), "c");
    }

    #[test]
    fn unknown_pattern_fails_to_deserialize() {
        let result: Result<StateTransitions, _> = serde_json::from_str(r#"{ "vowel": "q1" }"#);
        let message = result.unwrap_err().to_string();

        assert!(message.contains("unknown symbol pattern 'vowel'"));
    }

    #[test]
    fn serializes_back_to_same_order() {
        let source = r#"{"[a-z0-9]":"q4","-":"q5",".":"q6"}"#;
        let t = table(source);

        assert_eq!(serde_json::to_string(&t).unwrap(), source);
    }

    #[test]
    fn empty_table_resolves_nothing() {
        let t = table("{}");
        assert!(t.is_empty());
        assert!(t.resolve('a').is_none());
    }
}
