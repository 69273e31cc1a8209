//! Verdicts of completed runs.

use crate::core::{StateId, TransitionRecord};
use crate::engine::StepFailure;
use crate::playback::status::ValidationStatus;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::Duration;

/// Reason given when input ends outside an accepting state.
pub const INCOMPLETE_REASON: &str = "The input ended in an intermediate, non-final state.";

/// How a run ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum RunOutcome {
    /// Every symbol consumed, final state accepting
    Accepted,

    /// Every symbol consumed, final state not accepting
    RejectedIncomplete,

    /// The symbol at `position` (character index) could not be consumed
    RejectedError {
        position: usize,
        failure: StepFailure,
    },
}

impl RunOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }

    pub fn status(&self) -> ValidationStatus {
        match self {
            Self::Accepted => ValidationStatus::Accepted,
            Self::RejectedIncomplete => ValidationStatus::RejectedIncomplete,
            Self::RejectedError { .. } => ValidationStatus::RejectedError,
        }
    }

    /// Why the input was rejected, if it was.
    pub fn reason(&self) -> Option<String> {
        match self {
            Self::Accepted => None,
            Self::RejectedIncomplete => Some(INCOMPLETE_REASON.to_string()),
            Self::RejectedError { failure, .. } => Some(failure.message()),
        }
    }
}

/// Everything a presentation layer needs to explain one run.
#[derive(Clone, Debug, Serialize)]
pub struct RunReport {
    /// Generation the run executed under
    pub run: u64,
    /// Input after trimming
    pub input: String,
    pub outcome: RunOutcome,
    /// State the automaton rests in after the run
    pub final_state: StateId,
    /// Successful transitions, in order
    pub steps: Vec<TransitionRecord>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl RunReport {
    pub fn is_accepted(&self) -> bool {
        self.outcome.is_accepted()
    }

    pub fn status(&self) -> ValidationStatus {
        self.outcome.status()
    }

    pub fn reason(&self) -> Option<String> {
        self.outcome.reason()
    }

    /// Wall-clock time between start and verdict, pacing included.
    pub fn duration(&self) -> Duration {
        self.finished_at
            .signed_duration_since(self.started_at)
            .to_std()
            .unwrap_or(Duration::ZERO)
    }
}
