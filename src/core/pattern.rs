//! Symbol patterns used as transition keys.
//!
//! A pattern is either a literal character or one of a small, closed set of
//! character classes. Patterns are parsed from their configuration tokens
//! once, when the automaton definition is loaded.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Token accepted for [`SymbolPattern::Digit`].
pub const DIGIT_TOKEN: &str = "digit";
/// Token accepted for [`SymbolPattern::Letter`].
pub const LETTER_TOKEN: &str = "letter";
/// Token accepted for [`SymbolPattern::LetterOrDigit`].
pub const LETTER_OR_DIGIT_TOKEN: &str = "[a-z0-9]";
/// Token accepted for [`SymbolPattern::Separator`].
pub const SEPARATOR_TOKEN: &str = "[.-]";

/// Error returned when a configuration token names no known pattern.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("unknown symbol pattern '{0}'")]
pub struct UnknownPattern(pub String);

/// Key of a transition entry.
///
/// Literal patterns always take precedence over classes when both would
/// accept a symbol; see [`crate::engine::Automaton::step`].
///
/// # Example
///
/// ```rust
/// use statetrace::core::SymbolPattern;
///
/// let pattern: SymbolPattern = "[a-z0-9]".parse().unwrap();
///
/// assert_eq!(pattern, SymbolPattern::LetterOrDigit);
/// assert!(pattern.matches('Q'));
/// assert!(pattern.matches('7'));
/// assert!(!pattern.matches('_'));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SymbolPattern {
    /// Exactly one character.
    Literal(char),
    /// `0`-`9`.
    Digit,
    /// `a`-`z` and `A`-`Z`.
    Letter,
    /// ASCII letters of either case and decimal digits.
    LetterOrDigit,
    /// `.` or `-`.
    Separator,
}

impl SymbolPattern {
    /// Check whether this pattern accepts `symbol`.
    pub fn matches(&self, symbol: char) -> bool {
        match self {
            Self::Literal(c) => *c == symbol,
            Self::Digit => symbol.is_ascii_digit(),
            Self::Letter => symbol.is_ascii_alphabetic(),
            Self::LetterOrDigit => symbol.is_ascii_alphanumeric(),
            Self::Separator => matches!(symbol, '.' | '-'),
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Self::Literal(_))
    }

    /// Configuration token for this pattern.
    pub fn token(&self) -> String {
        match self {
            Self::Literal(c) => c.to_string(),
            Self::Digit => DIGIT_TOKEN.to_string(),
            Self::Letter => LETTER_TOKEN.to_string(),
            Self::LetterOrDigit => LETTER_OR_DIGIT_TOKEN.to_string(),
            Self::Separator => SEPARATOR_TOKEN.to_string(),
        }
    }

    /// Human-readable phrase used when listing what a state expects.
    ///
    /// ```rust
    /// use statetrace::core::SymbolPattern;
    ///
    /// assert_eq!(SymbolPattern::LetterOrDigit.describe(), "letter or digit");
    /// assert_eq!(SymbolPattern::Literal('@').describe(), "'@' symbol");
    /// assert_eq!(SymbolPattern::Literal('2').describe(), "'2'");
    /// ```
    pub fn describe(&self) -> String {
        match self {
            Self::Literal('_') => "underscore".to_string(),
            Self::Literal('@') => "'@' symbol".to_string(),
            Self::Literal('.') => "dot '.'".to_string(),
            Self::Literal('-') => "hyphen '-'".to_string(),
            Self::Literal(c) => format!("'{c}'"),
            Self::Digit => "digit".to_string(),
            Self::Letter => "letter".to_string(),
            Self::LetterOrDigit => "letter or digit".to_string(),
            Self::Separator => "dot or hyphen".to_string(),
        }
    }

    /// Short label drawn next to a diagram edge.
    ///
    /// Bracketed classes collapse to `char`; everything else shows its token.
    pub fn edge_label(&self) -> String {
        match self {
            Self::LetterOrDigit | Self::Separator => "char".to_string(),
            other => other.token(),
        }
    }
}

impl FromStr for SymbolPattern {
    type Err = UnknownPattern;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            DIGIT_TOKEN => return Ok(Self::Digit),
            LETTER_TOKEN => return Ok(Self::Letter),
            LETTER_OR_DIGIT_TOKEN => return Ok(Self::LetterOrDigit),
            SEPARATOR_TOKEN => return Ok(Self::Separator),
            _ => {}
        }

        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(Self::Literal(c)),
            _ => Err(UnknownPattern(token.to_string())),
        }
    }
}

impl TryFrom<String> for SymbolPattern {
    type Error = UnknownPattern;

    fn try_from(token: String) -> Result<Self, Self::Error> {
        token.parse()
    }
}

impl From<SymbolPattern> for String {
    fn from(pattern: SymbolPattern) -> Self {
        pattern.token()
    }
}

impl From<char> for SymbolPattern {
    fn from(c: char) -> Self {
        Self::Literal(c)
    }
}

impl fmt::Display for SymbolPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.token())
    }
}
