//! Textual transition log.

use crate::config::AutomatonConfig;
use crate::engine::StepOutcome;
use crate::playback::observer::{PlaybackEvent, PlaybackObserver};
use crate::summary::{explainer_for, Explainer};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

/// Category of a log line, used for styling.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogKind {
    System,
    Step,
    Error,
    Success,
}

#[derive(Clone, Debug, Serialize)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub kind: LogKind,
    pub message: String,
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.timestamp.format("%H:%M:%S"), self.message)
    }
}

/// Append-only log with one line per playback event.
///
/// The conclusion line of each run is produced by the explainer matching the
/// automaton's kind.
pub struct TransitionLog {
    entries: Vec<LogEntry>,
    explainer: Box<dyn Explainer>,
}

impl TransitionLog {
    /// Create a log for `config`, opening with a "module loaded" line.
    pub fn for_config(config: &AutomatonConfig) -> Self {
        let mut log = Self::with_explainer(explainer_for(config.kind));
        log.push(
            LogKind::System,
            format!("Module loaded: {}", config.description),
        );
        log
    }

    pub fn with_explainer(explainer: Box<dyn Explainer>) -> Self {
        Self {
            entries: Vec::new(),
            explainer,
        }
    }

    pub fn push(&mut self, kind: LogKind, message: impl Into<String>) {
        self.entries.push(LogEntry {
            timestamp: Utc::now(),
            kind,
            message: message.into(),
        });
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Messages without timestamps, in order.
    pub fn messages(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.message.as_str()).collect()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl PlaybackObserver for TransitionLog {
    fn on_event(&mut self, event: &PlaybackEvent) {
        match event {
            PlaybackEvent::Reset { .. } => {}
            PlaybackEvent::Started { input, .. } => {
                self.push(
                    LogKind::System,
                    format!("Starting validation for: \"{input}\""),
                );
            }
            PlaybackEvent::Stepped { position, outcome } => match outcome {
                StepOutcome::Advanced(record) => self.push(
                    LogKind::Step,
                    format!("State {} --({})--> {}", record.from, record.symbol, record.to),
                ),
                StepOutcome::Rejected(failure) => self.push(
                    LogKind::Error,
                    format!("Error at position {position}: {}", failure.message()),
                ),
            },
            PlaybackEvent::Finished(report) => {
                let summary = self.explainer.explain(report);
                let kind = if report.is_accepted() {
                    LogKind::Success
                } else {
                    LogKind::Error
                };
                self.push(kind, format!("CONCLUSION: {}", summary.text));
            }
            PlaybackEvent::Superseded { run } => {
                self.push(LogKind::System, format!("Run {run} superseded"));
            }
            PlaybackEvent::Refused { error, .. } => {
                self.push(LogKind::Error, format!("Error: {error}"));
            }
        }
    }
}
