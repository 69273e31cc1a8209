//! Playback of input strings through an automaton.
//!
//! The controller feeds the characters of an input to the engine in order,
//! stops at the first rejected symbol and decides the verdict once the input
//! is exhausted. Every step is forwarded to [`PlaybackObserver`]s such as the
//! [`TransitionLog`] or a diagram tracker.
//!
//! Paced runs ([`PlaybackController::play`]) pause between steps. Each run
//! captures a generation number; advancing the shared [`RunGeneration`]
//! retires any run still waiting on its next step.

pub mod controller;
pub mod error;
pub mod generation;
pub mod log;
pub mod observer;
pub mod report;
pub mod settings;
pub mod status;

pub use controller::{PlaybackController, StepProgress};
pub use error::PlaybackError;
pub use generation::RunGeneration;
pub use log::{LogEntry, LogKind, TransitionLog};
pub use observer::{EventRecorder, PlaybackEvent, PlaybackObserver};
pub use report::{RunOutcome, RunReport, INCOMPLETE_REASON};
pub use settings::PlaybackConfig;
pub use status::ValidationStatus;
