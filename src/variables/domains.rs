//! Domain management and integration
//!
//! This module handles variable domain operations and integration with
//! the domain representation system (SparseSet and FloatInterval).

// Re-export domain-related functionality from vars.rs
// Note: Domain operations are currently implemented within Var and Vars types
// in vars.rs. This provides organizational structure for future extraction.