//! Precision management for floating-point variables
//!
//! This module contains functionality for managing floating-point precision.
//! Currently all implementations are in model_core.rs and will be moved here in a future phase.

use crate::model::core::Model;

impl Model {
    // Note: Precision management methods are currently implemented in model_core.rs
    // They include:
    // - float_precision_digits() -> i32
    // - float_step_size() -> f64
    // - Precision configuration
    // - Step size calculations
    // - Float domain handling
    //
    // These will be moved to this module in a future phase of the modularization.
}