//! Tests for Step 6.2: Variable Partitioning (Simplified)
//!
//! This module contains simplified tests for the variable partitioning functionality.

use crate::optimization::variable_partitioning::{
    VariablePartitioner, SubproblemBuilder, PartitionError
};
use crate::model::Model;
