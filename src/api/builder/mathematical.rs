//! Mathematical syntax support for constraints
//!
//! This module provides mathematical syntax support for constraint building.
//! Currently re-exports from existing modules for compatibility.

// Re-export mathematical syntax functionality
pub use crate::constraints::math_syntax::*;
pub use crate::constraints::boolean_operators::*;