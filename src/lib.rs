//! Statetrace: a table-driven DFA engine with step-by-step playback
//!
//! An automaton is described declaratively (states, an ordered transition
//! table, a start state). The engine consumes one symbol at a time and
//! reports every step as a value, so a presentation layer can replay a run,
//! highlight the active state and explain the verdict.
//!
//! # Core Concepts
//!
//! - **Configuration**: JSON-loadable automaton records with character-class patterns
//! - **Engine**: single-symbol transitions, history, acceptance queries
//! - **Playback**: instant or paced runs forwarded to observers
//! - **Presentation**: transition log, status, conclusions and diagram layout
//!
//! # Example
//!
//! ```rust
//! use statetrace::catalog::Module;
//! use statetrace::engine::Automaton;
//! use statetrace::playback::{PlaybackConfig, PlaybackController, TransitionLog};
//!
//! let config = Module::Email.config().unwrap();
//! let mut log = TransitionLog::for_config(&config);
//! let mut controller =
//!     PlaybackController::new(Automaton::new(config).unwrap(), PlaybackConfig::instant());
//!
//! let report = controller.validate("user@mail.com", &mut log).unwrap();
//!
//! assert!(report.is_accepted());
//! assert_eq!(log.messages()[2], "State q0 --(u)--> q1");
//! ```

pub mod catalog;
pub mod config;
pub mod core;
pub mod diagram;
pub mod engine;
pub mod playback;
pub mod summary;

// Re-export commonly used types
pub use config::{AutomatonBuilder, AutomatonConfig, ConfigError};
pub use core::{StateId, SymbolPattern, TransitionRecord};
pub use engine::{Automaton, StepError, StepOutcome};
pub use playback::{PlaybackController, PlaybackError, RunOutcome, RunReport};
