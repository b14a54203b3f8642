//! Dynamic constraint creation API
//!
//! This module provides dynamic constraint creation functionality.
//! Currently re-exports from existing runtime_api module for compatibility.

// Re-export runtime API functionality
pub use crate::runtime_api::*;