//! Referential integrity checks for automaton configurations.
//!
//! Every check runs and every violation is reported, so an author sees all
//! dangling references in one pass. Determinism of the table is not checked.

use crate::config::error::IntegrityViolation;
use crate::config::AutomatonConfig;
use crate::core::{StateId, SymbolPattern};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Result of a single integrity check.
pub type IntegrityCheck = Validation<(), NonEmptyVec<IntegrityViolation>>;

/// Run all integrity checks, accumulating every violation.
pub fn check(config: &AutomatonConfig) -> IntegrityCheck {
    let mut checks: Vec<IntegrityCheck> = vec![start_state_declared(config)];

    for (from, table) in &config.transitions {
        checks.push(source_declared(config, from));
        for (pattern, to) in table.iter() {
            checks.push(target_declared(config, from, pattern, to));
        }
    }

    Validation::all_vec(checks).map(|_| ())
}

/// Flatten a failed check into a plain list.
pub fn violations(result: &IntegrityCheck) -> Vec<IntegrityViolation> {
    match result {
        Validation::Success(_) => Vec::new(),
        Validation::Failure(errors) => errors.iter().cloned().collect(),
    }
}

fn start_state_declared(config: &AutomatonConfig) -> IntegrityCheck {
    if config.states.contains_key(&config.start_state) {
        Validation::success(())
    } else {
        Validation::fail(IntegrityViolation::MissingStartState(
            config.start_state.clone(),
        ))
    }
}

fn source_declared(config: &AutomatonConfig, from: &StateId) -> IntegrityCheck {
    if config.states.contains_key(from) {
        Validation::success(())
    } else {
        Validation::fail(IntegrityViolation::UnknownSource(from.clone()))
    }
}

fn target_declared(
    config: &AutomatonConfig,
    from: &StateId,
    pattern: &SymbolPattern,
    to: &StateId,
) -> IntegrityCheck {
    if config.states.contains_key(to) {
        Validation::success(())
    } else {
        Validation::fail(IntegrityViolation::UnknownTarget {
            from: from.clone(),
            pattern: *pattern,
            to: to.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(json: &str) -> AutomatonConfig {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn consistent_config_passes() {
        let cfg = config(
            r#"{
                "states": { "q0": { "x": 0, "y": 0, "isStart": true, "isFinal": true } },
                "transitions": { "q0": { "digit": "q0" } },
                "startState": "q0"
            }"#,
        );

        assert!(check(&cfg).is_success());
    }

    #[test]
    fn accumulates_all_violations() {
        let cfg = config(
            r#"{
                "states": { "q0": { "x": 0, "y": 0 } },
                "transitions": {
                    "q0": { "a": "q1", "b": "q2" },
                    "q9": { "c": "q0" }
                },
                "startState": "s"
            }"#,
        );

        let result = check(&cfg);
        assert!(result.is_failure());

        let found = violations(&result);
        assert_eq!(found.len(), 4);
        assert!(found
            .iter()
            .any(|v| matches!(v, IntegrityViolation::MissingStartState(_))));
        assert!(found
            .iter()
            .any(|v| matches!(v, IntegrityViolation::UnknownSource(id) if id.as_str() == "q9")));
        assert_eq!(
            found
                .iter()
                .filter(|v| matches!(v, IntegrityViolation::UnknownTarget { .. }))
                .count(),
            2
        );
    }

    #[test]
    fn passing_check_has_no_violations() {
        let cfg = config(
            r#"{ "states": { "q0": { "x": 0, "y": 0 } }, "startState": "q0" }"#,
        );

        assert!(violations(&check(&cfg)).is_empty());
    }
}
