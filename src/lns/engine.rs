//! The neighbourhood/initial-solution sub-engine.
//!
//! A from-scratch DFS engine grounded on [`crate::search::Engine`]'s `Iterator` impl
//! (stack of branch-iterators for backtracking, `propagate()` reused verbatim,
//! periodic stop-check interval) but holding a [`BranchFactory`] instead of a generic
//! branching type plus a bare `fn(Space) -> B` pointer, so `reset` can install a
//! closure that captures e.g. a restart index.

use crate::core::solution::SolveStats;
use crate::search::agenda::Agenda;
use crate::search::{propagate, Space};

use super::model::{BranchFactory, BranchIter};
use super::stop::CombinedStop;

/// Drives one branch-and-propagate search to exhaustion, yielding every solution
/// found along the way.
///
/// Corresponds to spec §6's "Sub-engine interface": `next`, `reset`, `stopped`,
/// `statistics`.
pub struct SubEngine {
    factory: Option<BranchFactory>,
    branch_iter: Option<BranchIter>,
    stack: Vec<BranchIter>,
    iteration_count: usize,
    timeout_check_interval: usize,
    stats: SolveStats,
    stopped: bool,
}

impl Default for SubEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SubEngine {
    /// An idle sub-engine with nothing to search; call [`SubEngine::reset`] before
    /// the first [`SubEngine::next`].
    pub fn new() -> Self {
        Self {
            factory: None,
            branch_iter: None,
            stack: Vec::new(),
            iteration_count: 0,
            timeout_check_interval: 1000,
            stats: SolveStats::default(),
            stopped: false,
        }
    }

    /// Re-root the engine on `space`, installing `factory` as the branching strategy.
    pub fn reset(&mut self, space: Space, factory: BranchFactory) {
        self.branch_iter = Some(factory(space));
        self.factory = Some(factory);
        self.stack.clear();
        self.iteration_count = 0;
        self.stopped = false;
    }

    /// Whether the last [`SubEngine::next`] call ended because the stop predicate
    /// fired (as opposed to the search space being exhausted).
    pub fn stopped(&self) -> bool {
        self.stopped
    }

    /// Statistics accumulated up to the last solution or failed branch observed.
    pub fn statistics(&self) -> &SolveStats {
        &self.stats
    }

    /// Drive the search forward until a solution is found, the branching is
    /// exhausted, or `stop` fires.
    pub fn next(&mut self, stop: &CombinedStop) -> Option<Space> {
        self.stopped = false;
        loop {
            self.iteration_count += 1;
            if self.iteration_count % self.timeout_check_interval == 0 && stop.fires() {
                self.stopped = true;
                return None;
            }

            let Some(branch_iter) = self.branch_iter.as_mut() else {
                return None;
            };

            while let Some((mut space, p)) = branch_iter.next() {
                space.props.increment_node_count();

                let agenda = Agenda::with_props(core::iter::once(p));
                if let Some((is_stalled, space)) = propagate(space, agenda) {
                    self.stats = SolveStats {
                        propagation_count: space.get_propagation_count(),
                        node_count: space.get_node_count(),
                        solve_time: self.stats.solve_time,
                        variable_count: space.vars.count(),
                        constraint_count: space.props.count(),
                        peak_memory_mb: space.estimate_memory_mb(),
                    };

                    if is_stalled {
                        let factory = self.factory.as_ref().expect("factory set by reset");
                        let deeper = factory(space);
                        let shallower = std::mem::replace(&mut self.branch_iter, Some(deeper));
                        self.stack.push(shallower.expect("branch_iter is Some in this branch"));
                        continue;
                    }

                    return Some(space);
                }
                // Failed space: discard and keep trying siblings.
            }

            // Current iterator exhausted; backtrack.
            match self.stack.pop() {
                Some(parent) => self.branch_iter = Some(parent),
                None => {
                    self.branch_iter = None;
                    return None;
                }
            }
        }
    }
}
