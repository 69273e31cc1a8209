//! Playback controller: feeds input symbols to an automaton.

use crate::engine::{Automaton, StepFailure, StepOutcome};
use crate::playback::error::PlaybackError;
use crate::playback::generation::RunGeneration;
use crate::playback::observer::{PlaybackEvent, PlaybackObserver};
use crate::playback::report::{RunOutcome, RunReport};
use crate::playback::settings::PlaybackConfig;
use crate::playback::status::ValidationStatus;
use chrono::{DateTime, Utc};
use tracing::{debug, info};

/// Result of a manual single step.
#[derive(Clone, Debug)]
pub enum StepProgress {
    /// The symbol was consumed and more remain
    Continuing(StepOutcome),

    /// The run reached its verdict
    Finished(RunReport),
}

struct PendingRun {
    ticket: u64,
    input: String,
    symbols: Vec<char>,
    position: usize,
    started_at: DateTime<Utc>,
}

impl PendingRun {
    fn has_symbols_left(&self) -> bool {
        self.position < self.symbols.len()
    }
}

/// Drives one automaton through input strings, one symbol at a time.
///
/// Runs stop at the first rejected symbol. When every symbol is consumed the
/// verdict depends on whether the automaton rests in an accepting state.
///
/// # Example
///
/// ```rust
/// use statetrace::catalog::Module;
/// use statetrace::engine::Automaton;
/// use statetrace::playback::{EventRecorder, PlaybackConfig, PlaybackController, RunOutcome};
///
/// let automaton = Automaton::new(Module::DigitSumMod3.config().unwrap()).unwrap();
/// let mut controller = PlaybackController::new(automaton, PlaybackConfig::instant());
/// let mut recorder = EventRecorder::new();
///
/// let report = controller.validate("12", &mut recorder).unwrap();
///
/// assert_eq!(report.outcome, RunOutcome::Accepted);
/// assert_eq!(recorder.steps().len(), 2);
/// ```
pub struct PlaybackController {
    automaton: Automaton,
    settings: PlaybackConfig,
    generation: RunGeneration,
    status: ValidationStatus,
    pending: Option<PendingRun>,
}

impl PlaybackController {
    pub fn new(automaton: Automaton, settings: PlaybackConfig) -> Self {
        Self {
            automaton,
            settings,
            generation: RunGeneration::new(),
            status: ValidationStatus::Waiting,
            pending: None,
        }
    }

    /// Handle that can supersede an in-flight paced run from elsewhere.
    pub fn handle(&self) -> RunGeneration {
        self.generation.clone()
    }

    pub fn status(&self) -> ValidationStatus {
        self.status
    }

    pub fn automaton(&self) -> &Automaton {
        &self.automaton
    }

    pub fn settings(&self) -> &PlaybackConfig {
        &self.settings
    }

    pub fn set_settings(&mut self, settings: PlaybackConfig) {
        self.settings = settings;
    }

    /// Whether a loaded run still has symbols to consume.
    pub fn is_running(&self) -> bool {
        self.pending.is_some()
    }

    /// Abandon any run, return to the start state and wait for input.
    pub fn reset<O: PlaybackObserver>(&mut self, observer: &mut O) {
        self.generation.supersede();
        self.pending = None;
        self.status = ValidationStatus::Waiting;
        let state = self.automaton.reset().clone();
        observer.on_event(&PlaybackEvent::Reset { state });
    }

    /// Run `input` to completion without pauses.
    pub fn validate<O: PlaybackObserver>(
        &mut self,
        input: &str,
        observer: &mut O,
    ) -> Result<RunReport, PlaybackError> {
        self.begin(input, observer)?;
        loop {
            match self.advance(observer) {
                Some(StepProgress::Continuing(_)) => continue,
                Some(StepProgress::Finished(report)) => return Ok(report),
                None => return Err(PlaybackError::NoRunLoaded),
            }
        }
    }

    /// Run `input` with a pause before each step.
    ///
    /// Before every step the run checks that no newer run has started. If one
    /// has, it stops without taking that step, returns the automaton to its
    /// start state and returns [`PlaybackError::Superseded`].
    pub async fn play<O: PlaybackObserver>(
        &mut self,
        input: &str,
        observer: &mut O,
    ) -> Result<RunReport, PlaybackError> {
        let ticket = self.begin(input, observer)?;
        loop {
            let pause = self.settings.animate
                && self
                    .pending
                    .as_ref()
                    .is_some_and(PendingRun::has_symbols_left);
            if pause {
                tokio::time::sleep(self.settings.step_delay()).await;
            }

            if !self.generation.is_current(ticket) {
                self.pending = None;
                self.status = ValidationStatus::Waiting;
                self.automaton.reset();
                debug!(run = ticket, "run superseded");
                observer.on_event(&PlaybackEvent::Superseded { run: ticket });
                return Err(PlaybackError::Superseded { generation: ticket });
            }

            match self.advance(observer) {
                Some(StepProgress::Continuing(_)) => continue,
                Some(StepProgress::Finished(report)) => return Ok(report),
                None => return Err(PlaybackError::NoRunLoaded),
            }
        }
    }

    /// Prepare `input` for manual stepping.
    pub fn load<O: PlaybackObserver>(
        &mut self,
        input: &str,
        observer: &mut O,
    ) -> Result<(), PlaybackError> {
        self.begin(input, observer).map(|_| ())
    }

    /// Consume the next symbol of a loaded run.
    pub fn step_forward<O: PlaybackObserver>(
        &mut self,
        observer: &mut O,
    ) -> Result<StepProgress, PlaybackError> {
        self.advance(observer).ok_or(PlaybackError::NoRunLoaded)
    }

    fn begin<O: PlaybackObserver>(
        &mut self,
        input: &str,
        observer: &mut O,
    ) -> Result<u64, PlaybackError> {
        let input = input.trim();
        if input.is_empty() && !self.automaton.config().allow_empty_input {
            let error = PlaybackError::EmptyInput;
            debug!(%error, "input refused");
            observer.on_event(&PlaybackEvent::Refused {
                input: input.to_string(),
                error: error.clone(),
            });
            return Err(error);
        }

        let ticket = self.generation.advance();
        self.automaton.reset();
        self.status = ValidationStatus::Processing;
        self.pending = Some(PendingRun {
            ticket,
            input: input.to_string(),
            symbols: input.chars().collect(),
            position: 0,
            started_at: Utc::now(),
        });

        info!(run = ticket, input, "validation started");
        observer.on_event(&PlaybackEvent::Started {
            run: ticket,
            input: input.to_string(),
        });
        Ok(ticket)
    }

    /// Take one step, or conclude the run. `None` when nothing is loaded.
    fn advance<O: PlaybackObserver>(&mut self, observer: &mut O) -> Option<StepProgress> {
        let (position, next) = self
            .pending
            .as_ref()
            .map(|p| (p.position, p.symbols.get(p.position).copied()))?;
        let Some(symbol) = next else {
            return Some(StepProgress::Finished(self.finish(None, observer)));
        };

        let outcome = self.automaton.step(symbol);
        observer.on_event(&PlaybackEvent::Stepped {
            position,
            outcome: outcome.clone(),
        });

        match outcome {
            StepOutcome::Rejected(failure) => {
                let report = self.finish(Some((position, failure)), observer);
                Some(StepProgress::Finished(report))
            }
            advanced @ StepOutcome::Advanced(_) => {
                let pending = self.pending.as_mut()?;
                pending.position += 1;
                if pending.has_symbols_left() {
                    Some(StepProgress::Continuing(advanced))
                } else {
                    Some(StepProgress::Finished(self.finish(None, observer)))
                }
            }
        }
    }

    fn finish<O: PlaybackObserver>(
        &mut self,
        failure: Option<(usize, StepFailure)>,
        observer: &mut O,
    ) -> RunReport {
        let pending = self.pending.take();
        let outcome = match failure {
            Some((position, failure)) => RunOutcome::RejectedError { position, failure },
            None if self.automaton.is_accepted() => RunOutcome::Accepted,
            None => RunOutcome::RejectedIncomplete,
        };
        self.status = outcome.status();

        let finished_at = Utc::now();
        let (run, input, started_at) = match pending {
            Some(p) => (p.ticket, p.input, p.started_at),
            None => (self.generation.current(), String::new(), finished_at),
        };

        let report = RunReport {
            run,
            input,
            outcome,
            final_state: self.automaton.current_state().clone(),
            steps: self.automaton.history().transitions().to_vec(),
            started_at,
            finished_at,
        };

        info!(
            run,
            status = %self.status,
            state = %report.final_state,
            "validation finished"
        );
        observer.on_event(&PlaybackEvent::Finished(report.clone()));
        report
    }
}
