//! Prelude module for CSP solver
//!
//! This module re-exports from the new modular API structure for backward compatibility.

// Re-export everything from the new API prelude
pub use crate::api::prelude::*;

