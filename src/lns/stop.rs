//! Combined stop predicate: a reprogrammable per-neighbourhood time budget ORed with
//! an optional user-supplied overall stop.
//!
//! Modelled on `Gecode::Search::Meta::LNSMetaStop` (a `Stop` wrapping an inner time
//! stop and the user's stop), but kept as two independently-owned objects from
//! construction instead of a reassigned pointer (spec.md §9, "Stop plumbing").

use std::cell::Cell;
use std::time::{Duration, Instant};

/// A user-supplied overall stop condition, polled between sub-engine iterations.
pub trait LnsStop {
    /// Returns `true` once the caller wants the whole search to stop.
    fn should_stop(&self) -> bool;
}

impl<F: Fn() -> bool> LnsStop for F {
    fn should_stop(&self) -> bool {
        self()
    }
}

/// A reprogrammable wall-clock budget for a single neighbourhood exploration.
///
/// `reprogram` is called before every sub-engine run (spec.md I5): the limit is
/// whatever `freed_count * time_per_variable` works out to for that iteration.
#[derive(Debug)]
pub struct TimeStop {
    limit: Cell<Duration>,
    start: Cell<Option<Instant>>,
}

impl Default for TimeStop {
    fn default() -> Self {
        Self { limit: Cell::new(Duration::ZERO), start: Cell::new(None) }
    }
}

impl TimeStop {
    /// Construct a stop with an initial limit of zero (fires immediately until
    /// reprogrammed), matching the facade construction order of spec.md §4.E step 2.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset the clock and set a new limit, starting the budget from now.
    pub fn reprogram(&self, limit: Duration) {
        self.limit.set(limit);
        self.start.set(Some(Instant::now()));
    }

    /// Whether the programmed budget has elapsed.
    pub fn fires(&self) -> bool {
        match self.start.get() {
            Some(start) => start.elapsed() >= self.limit.get(),
            None => false,
        }
    }
}

/// Merges the per-neighbourhood [`TimeStop`] with an optional overall [`LnsStop`].
///
/// Fires iff either child fires (spec.md §4.B).
pub struct CombinedStop<'a> {
    time: &'a TimeStop,
    overall: Option<&'a dyn LnsStop>,
}

impl<'a> CombinedStop<'a> {
    /// Wrap a time stop and an optional overall stop.
    pub fn new(time: &'a TimeStop, overall: Option<&'a dyn LnsStop>) -> Self {
        Self { time, overall }
    }

    /// Whether either child has fired.
    pub fn fires(&self) -> bool {
        self.time.fires() || self.overall.map(LnsStop::should_stop).unwrap_or(false)
    }

    /// Whether the *overall* stop specifically has fired, ignoring the time stop.
    /// Used by the driver to distinguish "this neighbourhood ran out of time" (benign,
    /// keep iterating) from "the caller asked us to stop entirely" (spec.md §4.D
    /// step 8).
    pub fn overall_fired(&self) -> bool {
        self.overall.map(LnsStop::should_stop).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    #[test]
    fn fresh_time_stop_does_not_fire() {
        let stop = TimeStop::new();
        assert!(!stop.fires());
    }

    #[test]
    fn reprogrammed_time_stop_fires_after_limit() {
        let stop = TimeStop::new();
        stop.reprogram(Duration::from_millis(5));
        assert!(!stop.fires());
        sleep(Duration::from_millis(20));
        assert!(stop.fires());
    }

    #[test]
    fn combined_stop_fires_if_either_child_fires() {
        let time = TimeStop::new();
        let always_stop = || true;
        let combined = CombinedStop::new(&time, Some(&always_stop));
        assert!(combined.fires());
        assert!(combined.overall_fired());
    }

    #[test]
    fn combined_stop_with_no_overall_defers_to_time() {
        let time = TimeStop::new();
        let combined = CombinedStop::new(&time, None);
        assert!(!combined.fires());
        assert!(!combined.overall_fired());
    }
}
