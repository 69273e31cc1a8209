//! Bundled automata.
//!
//! The definitions are plain configuration documents embedded at compile
//! time. The engine has no knowledge of them beyond what the JSON declares.

use crate::config::{AutomatonConfig, ConfigError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const EMAIL_JSON: &str = include_str!("../../automata/email.json");
const DIGIT_SUM_MOD3_JSON: &str = include_str!("../../automata/mod3.json");

/// A bundled automaton.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Module {
    /// Accepts addresses shaped like `local@domain.extension`
    Email,
    /// Accepts strings over `{1, 2, 3}` whose digit sum is divisible by 3
    #[serde(rename = "mod3")]
    DigitSumMod3,
}

impl Module {
    pub const ALL: [Module; 2] = [Module::Email, Module::DigitSumMod3];

    /// Raw configuration document.
    pub fn json(self) -> &'static str {
        match self {
            Self::Email => EMAIL_JSON,
            Self::DigitSumMod3 => DIGIT_SUM_MOD3_JSON,
        }
    }

    /// Parse and check the bundled configuration.
    pub fn config(self) -> Result<AutomatonConfig, ConfigError> {
        AutomatonConfig::from_json(self.json())
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Email => "Email validation",
            Self::DigitSumMod3 => "Digit sum modulo 3",
        }
    }

    /// Sample input suggested to the user.
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Email => "user.name@example.com",
            Self::DigitSumMod3 => "1213",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::DigitSumMod3 => "mod3",
        }
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Module {
    type Err = UnknownModule;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.name() == s)
            .ok_or_else(|| UnknownModule(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown module '{0}' (expected 'email' or 'mod3')")]
pub struct UnknownModule(pub String);
