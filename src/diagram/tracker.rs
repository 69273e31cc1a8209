//! Observer keeping the diagram in sync with playback.

use crate::config::AutomatonConfig;
use crate::core::{StateId, TransitionRecord};
use crate::diagram::scene::{Scene, Viewport};
use crate::engine::StepOutcome;
use crate::playback::{PlaybackEvent, PlaybackObserver};

/// Follows the active state and the last traversed edge.
#[derive(Clone, Debug)]
pub struct DiagramTracker {
    start: StateId,
    active: StateId,
    last_edge: Option<TransitionRecord>,
    failed_at: Option<StateId>,
}

impl DiagramTracker {
    pub fn new(config: &AutomatonConfig) -> Self {
        Self {
            start: config.start_state.clone(),
            active: config.start_state.clone(),
            last_edge: None,
            failed_at: None,
        }
    }

    pub fn active(&self) -> &StateId {
        &self.active
    }

    pub fn last_edge(&self) -> Option<&TransitionRecord> {
        self.last_edge.as_ref()
    }

    /// State where the current run hit an invalid symbol.
    pub fn failed_at(&self) -> Option<&StateId> {
        self.failed_at.as_ref()
    }

    /// Lay out `config` with the tracked highlights applied.
    pub fn scene(&self, config: &AutomatonConfig, viewport: Viewport) -> Scene {
        let mut scene = Scene::layout(config, viewport, Some(&self.active));
        if let Some(record) = &self.last_edge {
            scene.mark_recent(record);
        }
        scene
    }

    fn rewind(&mut self, state: StateId) {
        self.active = state;
        self.last_edge = None;
        self.failed_at = None;
    }
}

impl PlaybackObserver for DiagramTracker {
    fn on_event(&mut self, event: &PlaybackEvent) {
        match event {
            PlaybackEvent::Reset { state } => self.rewind(state.clone()),
            PlaybackEvent::Started { .. } => self.rewind(self.start.clone()),
            PlaybackEvent::Stepped { outcome, .. } => match outcome {
                StepOutcome::Advanced(record) => {
                    self.active = record.to.clone();
                    self.last_edge = Some(record.clone());
                }
                StepOutcome::Rejected(failure) => {
                    self.failed_at = Some(failure.from.clone());
                }
            },
            PlaybackEvent::Finished(report) => self.active = report.final_state.clone(),
            PlaybackEvent::Superseded { .. } | PlaybackEvent::Refused { .. } => {}
        }
    }
}
