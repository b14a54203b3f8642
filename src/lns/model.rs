//! The model contract every problem participating in LNS must implement.
//!
//! Grounded on [`crate::search::mode::Mode`] (one trait per search concern) and on
//! [`crate::search::branch::split_on_unassigned`] /
//! [`crate::search::mcv_branch::MCVBranching`], both of which already produce exactly
//! the `Iterator<Item = (Space, PropId)>` shape [`BranchIter`] boxes.

use std::rc::Rc;

use crate::constraints::props::PropId;
use crate::search::Space;
use crate::variables::Val;

/// One step of branch-and-propagate: a candidate child space and the propagator that
/// was posted to reach it.
pub type BranchIter = Box<dyn Iterator<Item = (Space, PropId)>>;

/// Produces a fresh [`BranchIter`] for a (possibly partially assigned) space.
///
/// Called once to start branching, and again every time a branch reaches a stalled
/// fixed point and must be split further — the same role
/// `search::Engine::branching_factory` plays, generalised from a bare `fn(Space) -> B`
/// pointer to a boxed closure so it can close over state like a restart index.
pub type BranchFactory = Box<dyn Fn(Space) -> BranchIter>;

/// The polymorphic model contract of the LNS meta-engine (spec §4.A).
///
/// Implementations must be safe to call on any clone of the model's space, and must
/// never panic when they cannot determine an optimisation direction — report
/// `improving() == false` instead (the failure model described on the trait's
/// `improving` method).
pub trait LnsModel {
    /// Post a branching heuristic suitable for locating *some* feasible solution
    /// quickly. May vary with the restart index to diversify across restarts.
    fn initial_solution_branching(&self, restart_index: u64) -> BranchFactory;

    /// Post a branching suitable for exploring a repaired neighbourhood.
    fn neighborhood_branching(&self) -> BranchFactory;

    /// Copy all assignments from `current` into `tentative` except for a model-chosen
    /// subset of size ~`intensity`, freeing them for the sub-engine to re-decide.
    ///
    /// Returns the *actual* number of variables left free. The meta-engine only
    /// requires `freed_count <= relaxable_vars()`; determinism of the choice is a
    /// model decision.
    fn relax(&self, current: &Space, tentative: Space, intensity: u32) -> (Space, u32);

    /// Upper bound on the number of variables [`LnsModel::relax`] may free.
    fn relaxable_vars(&self) -> u32;

    /// Does `this` space's cost dominate `other`'s?
    ///
    /// Direction (minimisation vs. maximisation) is an internal property of the
    /// model; the meta-engine only ever queries this predicate, never the direction
    /// itself (spec §9, "Runtime-tagged cost direction"). `strict` requests strict
    /// inequality. A model that cannot determine a direction must return `false`
    /// rather than panic.
    fn improving(&self, this: &Space, other: &Space, strict: bool) -> bool;

    /// Post a constraint on `space` requiring its cost to be at least as good as
    /// `reference`'s, offset by `delta` in the worsening direction (used by the SA
    /// and `Loose` acceptance modes). `strict` toggles strict vs. non-strict
    /// inequality.
    fn constrain(&self, space: Space, reference: &Space, strict: bool, delta: f64) -> Space;

    /// Expose the objective value of `space`. The meta-engine never reads this
    /// directly; it is provided for models and callers that want to report it.
    fn cost(&self, space: &Space) -> Val;
}

/// Blanket impl so an `Rc<M>` can stand in for `M` wherever an `LnsModel` is expected,
/// letting the driver and both sub-engines share one model allocation.
impl<M: LnsModel + ?Sized> LnsModel for Rc<M> {
    fn initial_solution_branching(&self, restart_index: u64) -> BranchFactory {
        (**self).initial_solution_branching(restart_index)
    }

    fn neighborhood_branching(&self) -> BranchFactory {
        (**self).neighborhood_branching()
    }

    fn relax(&self, current: &Space, tentative: Space, intensity: u32) -> (Space, u32) {
        (**self).relax(current, tentative, intensity)
    }

    fn relaxable_vars(&self) -> u32 {
        (**self).relaxable_vars()
    }

    fn improving(&self, this: &Space, other: &Space, strict: bool) -> bool {
        (**self).improving(this, other, strict)
    }

    fn constrain(&self, space: Space, reference: &Space, strict: bool, delta: f64) -> Space {
        (**self).constrain(space, reference, strict, delta)
    }

    fn cost(&self, space: &Space) -> Val {
        (**self).cost(space)
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    //! A toy single-objective minimisation model used by `driver.rs`'s tests.
    //!
    //! Grounded on `search::mode::Minimize`'s role (tracking one objective variable)
    //! but implementing the full LNS contract instead of just `Mode`.

    use super::*;
    use crate::constraints::props::Propagators;
    use crate::search::branch::split_on_unassigned;
    use crate::variables::{VarId, Vars};

    /// Minimises a single integer variable, freeing a configurable number of
    /// variables on relax (freeing the lowest-indexed ones first, so tests can
    /// predict which variables move).
    pub struct MinimizeVar {
        pub objective: VarId,
        pub all_vars: Vec<VarId>,
    }

    impl LnsModel for MinimizeVar {
        fn initial_solution_branching(&self, _restart_index: u64) -> BranchFactory {
            Box::new(|space: Space| -> BranchIter { Box::new(split_on_unassigned(space)) })
        }

        fn neighborhood_branching(&self) -> BranchFactory {
            Box::new(|space: Space| -> BranchIter { Box::new(split_on_unassigned(space)) })
        }

        fn relax(&self, current: &Space, mut tentative: Space, intensity: u32) -> (Space, u32) {
            let intensity = intensity.min(self.all_vars.len() as u32);
            let freed: Vec<VarId> = self.all_vars[..intensity as usize].to_vec();
            for &var in &self.all_vars {
                if freed.contains(&var) {
                    continue;
                }
                let val = current.vars[var].get_assignment();
                let _prop_id = tentative.props.equals(var, val);
            }
            (tentative, freed.len() as u32)
        }

        fn relaxable_vars(&self) -> u32 {
            self.all_vars.len() as u32
        }

        fn improving(&self, this: &Space, other: &Space, strict: bool) -> bool {
            let this_cost = this.vars[self.objective].get_assignment();
            let other_cost = other.vars[self.objective].get_assignment();
            if strict {
                this_cost < other_cost
            } else {
                this_cost <= other_cost
            }
        }

        fn constrain(&self, mut space: Space, reference: &Space, strict: bool, delta: f64) -> Space {
            let bound = reference.vars[self.objective].get_assignment();
            let bound = match bound {
                crate::variables::Val::ValI(i) => {
                    crate::variables::Val::ValI(i + delta.round() as i32)
                }
                crate::variables::Val::ValF(f) => crate::variables::Val::ValF(f + delta),
            };
            let _prop_id = if strict {
                space.props.less_than(self.objective, bound)
            } else {
                space.props.less_than_or_equals(self.objective, bound)
            };
            space
        }

        fn cost(&self, space: &Space) -> Val {
            space.vars[self.objective].get_assignment()
        }
    }

    /// Build a root space with `n` integer variables in `[0, domain_max]`, objective
    /// equal to the sum of all of them (so freeing variables genuinely changes cost).
    pub fn minimize_sum_fixture(n: usize, domain_max: i32) -> (Space, MinimizeVar) {
        let mut vars = Vars::new();
        let mut props = Propagators::default();
        let mut all_vars = Vec::with_capacity(n);
        for _ in 0..n {
            let v = vars.new_var_with_bounds(crate::variables::Val::ValI(0), crate::variables::Val::ValI(domain_max));
            all_vars.push(v);
        }
        let objective = vars.new_var_with_bounds(
            crate::variables::Val::ValI(0),
            crate::variables::Val::ValI(domain_max * n as i32),
        );
        let _prop_id = props.sum(all_vars.clone(), objective);

        let space = Space {
            vars,
            props,
            lp_solver_used: false,
            lp_constraint_count: 0,
            lp_variable_count: 0,
            lp_stats: None,
        };
        (space, MinimizeVar { objective, all_vars })
    }
}
