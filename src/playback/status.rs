//! Status indicator states.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of states shown by the status badge.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValidationStatus {
    /// Nothing submitted yet, or the session was reset
    #[default]
    Waiting,
    /// A run is consuming symbols
    Processing,
    /// All symbols consumed, ended in an accepting state
    Accepted,
    /// All symbols consumed, ended in a non-accepting state
    RejectedIncomplete,
    /// A symbol could not be consumed
    RejectedError,
}

impl ValidationStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Waiting => "WAITING FOR INPUT",
            Self::Processing => "PROCESSING...",
            Self::Accepted => "STRING ACCEPTED",
            Self::RejectedIncomplete => "REJECTED (NON-FINAL STATE)",
            Self::RejectedError => "REJECTED (ERROR)",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::Accepted | Self::RejectedIncomplete | Self::RejectedError
        )
    }
}

impl fmt::Display for ValidationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
