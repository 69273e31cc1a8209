//! Display-only production rules attached to an automaton.
//!
//! Rules are written as `LHS -> RHS` with alternatives separated by `|`.
//! They are never consulted while running the automaton.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One production rule split into its two sides.
///
/// ```rust
/// use statetrace::config::ProductionRule;
///
/// let rule = ProductionRule::parse("S -> 1 A | 2 B | 3 S | ε");
///
/// assert_eq!(rule.lhs, "S");
/// assert_eq!(rule.alternatives(), vec!["1 A", "2 B", "3 S", "ε"]);
/// assert_eq!(rule.to_string(), "S → 1 A | 2 B | 3 S | ε");
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct ProductionRule {
    pub lhs: String,
    pub rhs: String,
}

impl ProductionRule {
    /// Split a rule on its first `->`. A rule without an arrow keeps all of
    /// its text on the left-hand side.
    pub fn parse(rule: &str) -> Self {
        match rule.split_once("->") {
            Some((lhs, rhs)) => Self {
                lhs: lhs.trim().to_string(),
                rhs: rhs.trim().to_string(),
            },
            None => Self {
                lhs: rule.trim().to_string(),
                rhs: String::new(),
            },
        }
    }

    pub fn alternatives(&self) -> Vec<&str> {
        if self.rhs.is_empty() {
            return Vec::new();
        }
        self.rhs.split('|').map(str::trim).collect()
    }
}

impl fmt::Display for ProductionRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.lhs, self.rhs)
    }
}

/// Parse every rule of a grammar listing, preserving order.
pub fn parse_rules<S: AsRef<str>>(rules: &[S]) -> Vec<ProductionRule> {
    rules.iter().map(|r| ProductionRule::parse(r.as_ref())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_first_arrow_only() {
        let rule = ProductionRule::parse("Q4 -> LetterDigit Q4 | - Q5 | . Q6");

        assert_eq!(rule.lhs, "Q4");
        assert_eq!(rule.rhs, "LetterDigit Q4 | - Q5 | . Q6");
        assert_eq!(rule.alternatives().len(), 3);
    }

    #[test]
    fn rule_without_arrow_has_no_alternatives() {
        let rule = ProductionRule::parse("  S  ");

        assert_eq!(rule.lhs, "S");
        assert!(rule.alternatives().is_empty());
    }

    #[test]
    fn parse_rules_keeps_order() {
        let rules = parse_rules(&["A -> a", "B -> b"]);

        assert_eq!(rules[0].lhs, "A");
        assert_eq!(rules[1].lhs, "B");
    }
}
