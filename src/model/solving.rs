//! Solving and optimization methods
//!
//! This module contains the solve() methods and optimization functionality.
//! Currently all implementations are in model_core.rs and will be moved here in a future phase.

use super::core::Model;

impl Model {
    // Note: Solving methods are currently implemented in model_core.rs
    // They include:
    // - solve() -> SolverResult<Solution>
    // - solve_any() -> SolverResult<Solution>
    // - timeout handling
    // - memory limit handling
    // - optimization routing
    // - statistics collection
    //
    // These will be moved to this module in a future phase of the modularization.
}