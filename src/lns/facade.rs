//! Public facade over the LNS driver.
//!
//! Grounded on `model/core.rs::EngineWrapper`: the same "construct once, call `next`
//! repeatedly" discipline and the same `register_cleanup`/`Drop`-triggers-cleanup
//! idiom for releasing resources if a caller drops the engine mid-search, adapted from
//! a one-shot `solve_any` to a long-lived, repeatedly-callable `next`.

use std::rc::Rc;

use log::debug;

use crate::core::solution::SolveStats;
use crate::search::agenda::Agenda;
use crate::search::{propagate, Space};

use super::driver::{LnsDriver, LnsStats};
use super::error::LnsResult;
use super::model::LnsModel;
use super::options::LnsOptions;
use super::stop::LnsStop;

/// The externally-facing Large Neighbourhood Search engine.
///
/// # Examples
///
/// ```no_run
/// use std::rc::Rc;
/// use selen::lns::{LnsEngine, LnsOptions};
/// # fn example<M: selen::lns::model::LnsModel>(root: selen::search::Space, model: M) -> selen::lns::error::LnsResult<()> {
/// let mut engine = LnsEngine::new(root, Rc::new(model), LnsOptions::default())?;
/// while let Some(solution) = engine.next() {
///     // `solution` improves on every previously emitted solution.
///     let _ = solution;
/// }
/// # Ok(())
/// # }
/// ```
pub struct LnsEngine<P: LnsModel> {
    driver: LnsDriver<P>,
    overall: Option<Box<dyn LnsStop>>,
    callbacks: Vec<Box<dyn FnOnce()>>,
}

impl<P: LnsModel> LnsEngine<P> {
    /// Construct the engine from a root space, a model, and options (spec §4.E).
    ///
    /// Validates `opts`, then fully propagates a clone of `root`. An infeasible root
    /// is not fatal (spec §7): construction still succeeds, with the original root
    /// substituted as a distinguished failed space and one fail recorded in
    /// [`LnsStats::infeasible_root_count`]; the first `next()` call then simply
    /// returns `None`.
    pub fn new(root: Space, model: Rc<P>, opts: LnsOptions) -> LnsResult<Self> {
        opts.validate()?;

        let check = root.clone();
        let variable_count = check.vars.count();
        let constraint_count = check.props.count();
        let agenda = Agenda::with_props(check.props.get_prop_ids_iter());
        let (root, infeasible) = match propagate(check, agenda) {
            None => (root, true),
            Some((_, propagated)) => (propagated, false),
        };

        let mut driver = LnsDriver::new(root, model, opts);
        if infeasible {
            debug!(
                target: "lns::facade",
                "root space infeasible [{} variables, {} constraints]; recording fail",
                variable_count, constraint_count
            );
            driver.mark_root_infeasible();
        }

        Ok(Self { driver, overall: None, callbacks: Vec::new() })
    }

    /// Attach an overall stop predicate, polled at the end of every internal
    /// iteration and after every sub-engine run.
    #[must_use]
    pub fn with_stop(mut self, stop: Box<dyn LnsStop>) -> Self {
        self.overall = Some(stop);
        self
    }

    /// Register a cleanup callback invoked when the engine is dropped.
    pub fn register_cleanup(&mut self, callback: Box<dyn FnOnce()>) {
        self.callbacks.push(callback);
    }

    /// Advance the driver to the next freshly improving solution, or `None` if the
    /// overall stop fired or the search space is exhausted.
    pub fn next(&mut self) -> Option<Space> {
        self.driver.next(self.overall.as_deref())
    }

    /// Whether the most recent sub-engine run stopped early rather than exhausting
    /// its search space. Does not by itself mean the driver is finished — see
    /// `spec.md` §4.E.
    pub fn stopped(&self) -> bool {
        self.driver.stopped()
    }

    /// Driver counters plus both sub-engines' [`SolveStats`], summed.
    pub fn statistics(&self) -> (LnsStats, SolveStats) {
        self.driver.statistics()
    }

    fn trigger_cleanup(&mut self) {
        for callback in self.callbacks.drain(..) {
            callback();
        }
    }
}

impl<P: LnsModel> Drop for LnsEngine<P> {
    fn drop(&mut self) {
        self.trigger_cleanup();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lns::model::fixtures::minimize_sum_fixture;

    #[test]
    fn construction_succeeds_on_feasible_root_and_emits_solutions() {
        let (space, model) = minimize_sum_fixture(3, 4);
        let mut engine = LnsEngine::new(space, Rc::new(model), LnsOptions::default()).unwrap();
        assert!(engine.next().is_some());
    }

    #[test]
    fn construction_rejects_invalid_options() {
        let (space, model) = minimize_sum_fixture(3, 4);
        let bad_opts = LnsOptions::default().with_intensity_bounds(5, 1);
        let result = LnsEngine::new(space, Rc::new(model), bad_opts);
        assert!(result.is_err());
    }

    #[test]
    fn construction_succeeds_on_infeasible_root_and_first_next_reports_the_fail() {
        let (mut space, model) = minimize_sum_fixture(1, 5);
        let var = model.all_vars[0];
        let _prop_id = space.props.equals(var, crate::variables::Val::ValI(1));
        let _prop_id = space.props.equals(var, crate::variables::Val::ValI(2));

        let mut engine = LnsEngine::new(space, Rc::new(model), LnsOptions::default()).unwrap();
        assert!(engine.next().is_none());
        assert_eq!(engine.statistics().0.infeasible_root_count, 1);
    }

    #[test]
    fn cleanup_callback_runs_on_drop() {
        use std::cell::Cell;
        use std::rc::Rc as StdRc;

        let (space, model) = minimize_sum_fixture(2, 3);
        let ran = StdRc::new(Cell::new(false));
        let ran_clone = StdRc::clone(&ran);
        {
            let mut engine = LnsEngine::new(space, Rc::new(model), LnsOptions::default()).unwrap();
            engine.register_cleanup(Box::new(move || ran_clone.set(true)));
        }
        assert!(ran.get());
    }

    #[test]
    fn with_stop_eventually_halts_iteration() {
        let (space, model) = minimize_sum_fixture(3, 4);
        let always_stop = || true;
        let mut engine = LnsEngine::new(space, Rc::new(model), LnsOptions::default())
            .unwrap()
            .with_stop(Box::new(always_stop));
        // The sub-engine only probes its stop every `timeout_check_interval`
        // iterations, so a tiny model still completes its first (S0) solve. S1's
        // overall-stop check (step 8) is unconditional, so the very next call halts.
        assert!(engine.next().is_some());
        assert!(engine.next().is_none());
    }
}
