//! Large Neighbourhood Search meta-engine.
//!
//! Built on top of this crate's own constraint-propagation machinery
//! ([`crate::search`]): repeatedly destroys part of an incumbent solution and repairs
//! it through a fresh branch-and-propagate search, accepting the repair according to
//! one of several acceptance rules (none, loose, strict, simulated annealing). See
//! [`LnsEngine`] for the entry point.

pub mod driver;
pub mod engine;
pub mod error;
pub mod model;
pub mod options;
pub mod stop;

mod facade;

pub use driver::LnsStats;
pub use error::{LnsError, LnsResult};
pub use facade::LnsEngine;
pub use model::{BranchFactory, BranchIter, LnsModel};
pub use options::{ConstrainType, LnsOptions};
pub use stop::{CombinedStop, LnsStop, TimeStop};
