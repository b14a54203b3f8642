//! Constraint propagators module
//!
//! This module contains constraint propagators organized by category.

// Re-export everything from the sibling props module for backward compatibility
pub use super::props::*;

// Organized propagator categories (currently organizational only)
pub mod arithmetic;
pub mod comparison;
pub mod logical;
pub mod global;
pub mod mathematical;