//! Run generation counter used to retire superseded playback loops.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Monotonic counter shared by a controller and its handles.
///
/// Every run captures the generation it started under and checks it before
/// each step. Advancing the counter from anywhere makes older loops stop.
///
/// ```rust
/// use statetrace::playback::RunGeneration;
///
/// let generation = RunGeneration::new();
/// let ticket = generation.advance();
/// assert!(generation.is_current(ticket));
///
/// let handle = generation.clone();
/// handle.supersede();
/// assert!(!generation.is_current(ticket));
/// ```
#[derive(Clone, Debug, Default)]
pub struct RunGeneration {
    counter: Arc<AtomicU64>,
}

impl RunGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new generation and return its number.
    pub fn advance(&self) -> u64 {
        self.counter.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Invalidate whichever run is in flight.
    pub fn supersede(&self) {
        self.advance();
    }

    pub fn current(&self) -> u64 {
        self.counter.load(Ordering::SeqCst)
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.current() == ticket
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_is_monotonic() {
        let generation = RunGeneration::new();

        let first = generation.advance();
        let second = generation.advance();

        assert!(second > first);
        assert_eq!(generation.current(), second);
    }

    #[test]
    fn clones_share_the_counter() {
        let generation = RunGeneration::new();
        let handle = generation.clone();
        let ticket = generation.advance();

        handle.supersede();

        assert!(!generation.is_current(ticket));
        assert_eq!(handle.current(), generation.current());
    }

    #[test]
    fn counter_is_shared_across_threads() {
        let generation = RunGeneration::new();
        let ticket = generation.advance();
        let handle = generation.clone();

        std::thread::spawn(move || handle.supersede())
            .join()
            .unwrap();

        assert!(!generation.is_current(ticket));
    }
}
