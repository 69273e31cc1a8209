//! Playback error types.

use thiserror::Error;

/// Errors that end a playback run before it reaches a verdict
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PlaybackError {
    /// The automaton refuses empty input and none was given
    #[error("Input is empty")]
    EmptyInput,

    /// A newer run started while this one was waiting between steps
    #[error("Run {generation} was superseded by a newer run")]
    Superseded { generation: u64 },

    /// Manual stepping was requested without loading an input
    #[error("No input loaded. Call .load(input) before stepping")]
    NoRunLoaded,
}
