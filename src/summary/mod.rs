//! Conclusions shown once a run reaches its verdict.
//!
//! Each automaton kind has its own [`Explainer`]. The explainers only read a
//! finished [`RunReport`]; they never influence acceptance.

use crate::config::AutomatonKind;
use crate::playback::{RunReport, ValidationStatus};
use serde::Serialize;

/// Digit sum of an all-digit input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DigitSum {
    pub sum: u32,
    pub remainder: u32,
}

impl DigitSum {
    /// `None` unless every character is an ASCII digit. The empty input sums
    /// to zero.
    pub fn of(input: &str) -> Option<Self> {
        let sum = input
            .chars()
            .map(|c| c.to_digit(10))
            .sum::<Option<u32>>()?;
        Some(Self {
            sum,
            remainder: sum % 3,
        })
    }
}

/// Human-readable conclusion of one run.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Summary {
    pub verdict: ValidationStatus,
    /// Why the run was rejected
    pub reason: Option<String>,
    /// Only for digit-sum automata with numeric input
    pub digit_sum: Option<DigitSum>,
    pub text: String,
}

impl Summary {
    fn new(report: &RunReport, text: String) -> Self {
        Self {
            verdict: report.status(),
            reason: report.reason(),
            digit_sum: None,
            text,
        }
    }
}

/// Strategy turning a finished run into a [`Summary`].
pub trait Explainer: Send + Sync {
    fn explain(&self, report: &RunReport) -> Summary;
}

/// Pick the explainer for an automaton kind.
pub fn explainer_for(kind: AutomatonKind) -> Box<dyn Explainer> {
    match kind {
        AutomatonKind::Email => Box::new(EmailExplainer),
        AutomatonKind::DigitSumMod3 => Box::new(DigitSumExplainer),
        AutomatonKind::Generic => Box::new(GenericExplainer),
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct EmailExplainer;

impl Explainer for EmailExplainer {
    fn explain(&self, report: &RunReport) -> Summary {
        let text = match report.reason() {
            None => format!(
                "The email \"{}\" is valid. Structure: local@domain.extension.",
                report.input
            ),
            Some(reason) => format!(
                "The email is invalid. {reason} Check that it does not start or end \
                 with a dot and has a domain with a valid extension (.com, etc)."
            ),
        };
        Summary::new(report, text)
    }
}

/// Explains runs of the digit-sum automaton by computing the sum itself.
/// The arithmetic is illustrative; the verdict still comes from the run.
#[derive(Clone, Copy, Debug, Default)]
pub struct DigitSumExplainer;

impl Explainer for DigitSumExplainer {
    fn explain(&self, report: &RunReport) -> Summary {
        let Some(digits) = DigitSum::of(&report.input) else {
            return Summary::new(
                report,
                "Input rejected. It contains non-numeric characters.".to_string(),
            );
        };

        let text = if report.is_accepted() {
            format!(
                "The number \"{}\" is accepted. Its digit sum is {}, a multiple of 3 (remainder {}).",
                report.input, digits.sum, digits.remainder
            )
        } else {
            format!(
                "The number is rejected. Its digit sum is {}, which leaves a remainder of {} when divided by 3.",
                digits.sum, digits.remainder
            )
        };

        Summary {
            digit_sum: Some(digits),
            ..Summary::new(report, text)
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct GenericExplainer;

impl Explainer for GenericExplainer {
    fn explain(&self, report: &RunReport) -> Summary {
        let text = match report.reason() {
            None => format!(
                "The input \"{}\" is accepted in state {}.",
                report.input, report.final_state
            ),
            Some(reason) => format!("The input is rejected. {reason}"),
        };
        Summary::new(report, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StateId;
    use crate::engine::{StepError, StepFailure};
    use crate::playback::RunOutcome;
    use chrono::Utc;

    fn report(input: &str, outcome: RunOutcome) -> RunReport {
        let now = Utc::now();
        RunReport {
            run: 1,
            input: input.to_string(),
            outcome,
            final_state: StateId::from("q0"),
            steps: Vec::new(),
            started_at: now,
            finished_at: now,
        }
    }

    #[test]
    fn digit_sum_requires_digits() {
        assert_eq!(
            DigitSum::of("123"),
            Some(DigitSum {
                sum: 6,
                remainder: 0
            })
        );
        assert_eq!(DigitSum::of(""), Some(DigitSum { sum: 0, remainder: 0 }));
        assert_eq!(DigitSum::of("12a"), None);
        assert_eq!(DigitSum::of("١٢"), None);
    }

    #[test]
    fn accepted_number_reports_sum() {
        let summary = DigitSumExplainer.explain(&report("123", RunOutcome::Accepted));

        assert_eq!(summary.verdict, ValidationStatus::Accepted);
        assert_eq!(summary.digit_sum.map(|d| d.sum), Some(6));
        assert!(summary.text.contains("digit sum is 6"));
        assert!(summary.text.contains("remainder 0"));
    }

    #[test]
    fn rejected_number_reports_remainder() {
        let summary = DigitSumExplainer.explain(&report("22", RunOutcome::RejectedIncomplete));

        assert_eq!(summary.digit_sum.map(|d| d.remainder), Some(1));
        assert!(summary.text.contains("remainder of 1"));
    }

    #[test]
    fn non_numeric_input_has_no_sum() {
        let failure = StepFailure {
            from: StateId::from("q0"),
            symbol: 'x',
            error: StepError::NoMatch {
                symbol: 'x',
                expected: vec!["'1'".to_string()],
            },
        };
        let outcome = RunOutcome::RejectedError {
            position: 0,
            failure,
        };

        let summary = DigitSumExplainer.explain(&report("x", outcome));

        assert_eq!(summary.digit_sum, None);
        assert_eq!(summary.verdict, ValidationStatus::RejectedError);
        assert!(summary.text.contains("non-numeric"));
    }

    #[test]
    fn email_rejection_includes_reason() {
        let summary = EmailExplainer.explain(&report("a@b", RunOutcome::RejectedIncomplete));

        assert!(summary.text.starts_with("The email is invalid."));
        assert!(summary.text.contains("intermediate, non-final state"));
        assert_eq!(summary.reason.as_deref(), Some(crate::playback::INCOMPLETE_REASON));
    }

    #[test]
    fn email_acceptance_quotes_input() {
        let summary = EmailExplainer.explain(&report("a@b.com", RunOutcome::Accepted));

        assert_eq!(
            summary.text,
            "The email \"a@b.com\" is valid. Structure: local@domain.extension."
        );
        assert_eq!(summary.reason, None);
    }

    #[test]
    fn kind_selects_explainer() {
        let summary = explainer_for(AutomatonKind::Generic).explain(&report("", RunOutcome::Accepted));
        assert!(summary.text.contains("accepted in state q0"));
    }
}
