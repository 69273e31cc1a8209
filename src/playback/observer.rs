//! Events forwarded to presentation collaborators.

use crate::core::StateId;
use crate::engine::StepOutcome;
use crate::playback::error::PlaybackError;
use crate::playback::report::RunReport;

/// Something that happened during playback.
#[derive(Clone, Debug)]
pub enum PlaybackEvent {
    /// The session returned to the start state
    Reset { state: StateId },

    /// A run began
    Started { run: u64, input: String },

    /// One symbol was offered to the automaton
    Stepped { position: usize, outcome: StepOutcome },

    /// The run reached a verdict
    Finished(RunReport),

    /// The run was abandoned because a newer one started
    Superseded { run: u64 },

    /// The input was turned away before any state change
    Refused { input: String, error: PlaybackError },
}

/// Consumer of playback events: a renderer, a log, a status badge.
pub trait PlaybackObserver {
    fn on_event(&mut self, event: &PlaybackEvent);
}

impl PlaybackObserver for () {
    fn on_event(&mut self, _event: &PlaybackEvent) {}
}

impl<T: PlaybackObserver + ?Sized> PlaybackObserver for &mut T {
    fn on_event(&mut self, event: &PlaybackEvent) {
        (**self).on_event(event);
    }
}

impl<T: PlaybackObserver + ?Sized> PlaybackObserver for Box<T> {
    fn on_event(&mut self, event: &PlaybackEvent) {
        (**self).on_event(event);
    }
}

impl<A: PlaybackObserver, B: PlaybackObserver> PlaybackObserver for (A, B) {
    fn on_event(&mut self, event: &PlaybackEvent) {
        self.0.on_event(event);
        self.1.on_event(event);
    }
}

impl<A: PlaybackObserver, B: PlaybackObserver, C: PlaybackObserver> PlaybackObserver
    for (A, B, C)
{
    fn on_event(&mut self, event: &PlaybackEvent) {
        self.0.on_event(event);
        self.1.on_event(event);
        self.2.on_event(event);
    }
}

impl<T: PlaybackObserver> PlaybackObserver for Vec<T> {
    fn on_event(&mut self, event: &PlaybackEvent) {
        for observer in self.iter_mut() {
            observer.on_event(event);
        }
    }
}

/// Observer that keeps every event, mostly useful in tests.
#[derive(Clone, Debug, Default)]
pub struct EventRecorder {
    pub events: Vec<PlaybackEvent>,
}

impl EventRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Outcomes of every step, in order.
    pub fn steps(&self) -> Vec<&StepOutcome> {
        self.events
            .iter()
            .filter_map(|e| match e {
                PlaybackEvent::Stepped { outcome, .. } => Some(outcome),
                _ => None,
            })
            .collect()
    }

    pub fn last_report(&self) -> Option<&RunReport> {
        self.events.iter().rev().find_map(|e| match e {
            PlaybackEvent::Finished(report) => Some(report),
            _ => None,
        })
    }

    pub fn was_superseded(&self) -> bool {
        self.events
            .iter()
            .any(|e| matches!(e, PlaybackEvent::Superseded { .. }))
    }
}

impl PlaybackObserver for EventRecorder {
    fn on_event(&mut self, event: &PlaybackEvent) {
        self.events.push(event.clone());
    }
}
