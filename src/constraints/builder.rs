//! Constraint builder module
//!
//! This module contains constraint building functionality.
//! Currently re-exports from existing constraint builder modules for compatibility.

// Re-export constraint builder functionality
pub use crate::constraint_builder::*;
pub use crate::boolean_operators::*;
pub use crate::math_syntax::*;