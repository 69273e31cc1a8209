//! Property-based tests for the engine and playback.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated inputs.

use proptest::prelude::*;
use statetrace::catalog::Module;
use statetrace::config::{AutomatonBuilder, AutomatonConfig};
use statetrace::core::{StateSpec, SymbolPattern};
use statetrace::engine::{Automaton, StepOutcome};
use statetrace::playback::{PlaybackConfig, PlaybackController, RunOutcome};

fn automaton(module: Module) -> Automaton {
    Automaton::new(module.config().unwrap()).unwrap()
}

fn run(automaton: &mut Automaton, input: &str) -> Vec<StepOutcome> {
    automaton.reset();
    input.chars().map(|c| automaton.step(c)).collect()
}

prop_compose! {
    fn arbitrary_module()(email in any::<bool>()) -> Module {
        if email { Module::Email } else { Module::DigitSumMod3 }
    }
}

prop_compose! {
    fn digit_string()(digits in prop::collection::vec(1..=3u32, 0..20)) -> String {
        digits.iter().map(|d| char::from_digit(*d, 10).unwrap()).collect()
    }
}

fn ambiguous_config() -> AutomatonConfig {
    AutomatonBuilder::new()
        .state("start", StateSpec::new("Start").start())
        .state("class", StateSpec::new("Class").accepting())
        .state("literal", StateSpec::new("Literal").accepting())
        .start("start")
        .transition("start", SymbolPattern::Digit, "class")
        .transition("start", SymbolPattern::Literal('5'), "literal")
        .build()
        .unwrap()
}

proptest! {
    #[test]
    fn reset_restores_start_acceptance(module in arbitrary_module(), input in ".{0,20}") {
        let mut automaton = automaton(module);
        run(&mut automaton, &input);

        let start = automaton.reset().clone();

        prop_assert_eq!(automaton.current_state(), &start);
        prop_assert!(automaton.history().is_empty());
        prop_assert_eq!(automaton.is_accepted(), automaton.config().is_final(&start));
    }

    #[test]
    fn step_is_total(module in arbitrary_module(), symbol in any::<char>()) {
        let mut automaton = automaton(module);
        let outcome = automaton.step(symbol);

        prop_assert_eq!(outcome.symbol(), symbol);
        prop_assert_eq!(outcome.source_state(), automaton.start_state());
    }

    #[test]
    fn runs_are_deterministic(module in arbitrary_module(), input in ".{0,20}") {
        let mut first = automaton(module);
        let mut second = automaton(module);

        prop_assert_eq!(run(&mut first, &input), run(&mut second, &input));
        prop_assert_eq!(first.current_state(), second.current_state());
    }

    #[test]
    fn history_counts_successful_steps(module in arbitrary_module(), input in ".{0,20}") {
        let mut automaton = automaton(module);
        let outcomes = run(&mut automaton, &input);

        let advanced: Vec<_> = outcomes.iter().filter_map(StepOutcome::record).cloned().collect();
        prop_assert_eq!(automaton.history().len(), advanced.len());
        prop_assert_eq!(automaton.history().transitions(), advanced.as_slice());
        prop_assert!(automaton.history().transitions().iter().all(|r| r.valid));
    }

    #[test]
    fn failure_leaves_state_untouched(module in arbitrary_module(), prefix in ".{0,10}", symbol in any::<char>()) {
        let mut automaton = automaton(module);
        run(&mut automaton, &prefix);
        let before = automaton.current_state().clone();
        let history_len = automaton.history().len();

        if let StepOutcome::Rejected(failure) = automaton.step(symbol) {
            prop_assert_eq!(&failure.from, &before);
            prop_assert_eq!(automaton.current_state(), &before);
            prop_assert_eq!(automaton.history().len(), history_len);
        }
    }

    #[test]
    fn literal_beats_class(symbol in proptest::char::range('0', '9')) {
        let mut automaton = Automaton::new(ambiguous_config()).unwrap();
        let outcome = automaton.step(symbol);

        let expected = if symbol == '5' { "literal" } else { "class" };
        prop_assert_eq!(outcome.record().unwrap().to.as_str(), expected);
    }

    #[test]
    fn mod3_accepts_multiples_of_three(input in digit_string()) {
        let mut automaton = automaton(Module::DigitSumMod3);
        let outcomes = run(&mut automaton, &input);

        let sum: u32 = input.chars().filter_map(|c| c.to_digit(10)).sum();
        prop_assert!(outcomes.iter().all(StepOutcome::is_valid));
        prop_assert_eq!(automaton.is_accepted(), sum % 3 == 0);
    }

    #[test]
    fn well_formed_emails_are_accepted(
        local in "[a-z0-9_]{1,8}([.-][a-z0-9]{1,4})?",
        domain in "[a-z0-9]{1,8}(-[a-z0-9]{1,4})?",
        extension in "[a-zA-Z]{2,4}",
    ) {
        let input = format!("{local}@{domain}.{extension}");
        let mut controller = PlaybackController::new(automaton(Module::Email), PlaybackConfig::instant());

        let report = controller.validate(&input, &mut ()).unwrap();

        prop_assert_eq!(report.outcome, RunOutcome::Accepted);
        prop_assert_eq!(report.steps.len(), input.chars().count());
    }

    #[test]
    fn controller_agrees_with_engine(module in arbitrary_module(), input in "[a-z0-9@._1-3-]{1,16}") {
        let mut controller = PlaybackController::new(automaton(module), PlaybackConfig::instant());
        let report = controller.validate(&input, &mut ()).unwrap();

        let mut engine = automaton(module);
        let outcomes = run(&mut engine, &input);
        match outcomes.iter().position(|o| !o.is_valid()) {
            Some(position) => {
                let is_error_at = matches!(
                    report.outcome,
                    RunOutcome::RejectedError { position: p, .. } if p == position
                );
                prop_assert!(is_error_at);
            }
            None => prop_assert_eq!(report.is_accepted(), engine.is_accepted()),
        }
    }
}
