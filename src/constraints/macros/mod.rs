//! Constraint Macros Module
//!
//! This module contains all constraint macros for the CSP solver, organized into logical sections:
//! - Comparison constraints (==, !=, <, <=, >, >=, between)
//! - Arithmetic constraints (+, -, *, /, %, abs)  
//! - Logical constraints (and, or, not, conditionals)
//! - Global constraints (alldiff, allequal, element, count, table, etc.)
//!
//! Previously this was a monolithic 3,061-line constraint_macros.rs file.
//! Now it's organized in a single module under src/constraints/macros/mod.rs
//! for better maintainability and logical structure.

#[doc(hidden)]
/// Represents a constraint reference that can be used later
#[derive(Debug, Clone, Copy)]
pub struct ConstraintRef {
    /// Internal constraint ID (for future constraint management)
    id: usize,
}

impl ConstraintRef {
    /// Create a new constraint reference
    pub fn new(id: usize) -> Self {
        Self { id }
    }
    
    /// Get the constraint ID
    pub fn id(&self) -> usize {
        self.id
    }
}

#[doc(hidden)]
/// Post a mathematical constraint to the model
/// 
/// Supported constraint patterns:
/// 
/// **Basic comparisons**: `var op var`, `var op literal`, `var op (expr)`, `var op int(value)`, `var op float(value)`
/// 
/// **Chained comparisons**: `a <= b <= c`, `a < b < c`, `a >= b >= c`, `a > b > c` (natural between constraints)
/// 
/// **Array indexing**: `vars[i] op vars[j]`, `vars[i] op var`, `var op vars[i]`, `vars[i] op literal`, `literal op vars[i]`, `array[var] == value` (Element)
/// 
/// **Arithmetic**: `var op var +/- var`, `var op var */÷ var`, `var op var % divisor`
/// 
/// **Functions**: `func(var) op target` where `func` is `abs`, `min`, `max`, `sum`
/// 
/// **Boolean**: `and(vars...)`, `or(vars...)`, `not(var)` - supports arrays `and([a,b,c])`, variadic `and(a,b,c,d)`, and array not `not([a,b,c])`
/// 
/// **Global**: `alldiff([vars...])`, `allequal([vars...])`, `element(array, index, value)`, `count(vars, target, count)`
/// 
/// **Multiplication with constants**: `target op var * int(value)`, `target op var * float(value)`
/// 
/// Where `op` is any of: `==`, `!=`, `<`, `<=`, `>`, `>=`
#[macro_export]
macro_rules! post {
    // ============================================================================
    // COMPARISON CONSTRAINTS
    // ============================================================================
    // Chained comparisons for between constraints: a <= b <= c, a < b < c, etc.
    ($model:expr, $lower:ident <= $middle:ident <= $upper:ident) => {{
        $model.props.between_constraint($lower, $middle, $upper);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $lower:ident < $middle:ident < $upper:ident) => {{
        $model.props.less_than($lower, $middle);
        $model.props.less_than($middle, $upper);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $lower:ident >= $middle:ident >= $upper:ident) => {{
        $model.props.greater_than_or_equals($lower, $middle);
        $model.props.greater_than_or_equals($middle, $upper);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $lower:ident > $middle:ident > $upper:ident) => {{
        $model.props.greater_than($lower, $middle);
        $model.props.greater_than($middle, $upper);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};

    // Handle simple variable comparisons: x < y, x <= y, etc.
    ($model:expr, $left:ident < $right:ident) => {{
        $model.props.less_than($left, $right);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left:ident <= $right:ident) => {{
        $model.props.less_than_or_equals($left, $right);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left:ident > $right:ident) => {{
        $model.props.greater_than($left, $right);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left:ident >= $right:ident) => {{
        $model.props.greater_than_or_equals($left, $right);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left:ident == $right:ident) => {{
        $model.props.equals($left, $right);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left:ident != $right:ident) => {{
        $model.props.not_equals($left, $right);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};

    // Element constraint syntax: array[variable] == value
    // These patterns must come BEFORE general array indexing to match variable indices
    ($model:expr, $array:ident[$index:ident] == $value:ident) => {{
        $model.props.element($array.to_vec(), $index, $value);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $value:ident == $array:ident[$index:ident]) => {{
        $model.props.element($array.to_vec(), $index, $value);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};

    // Handle array indexing: vars[i] < vars[j], vars[0] == x, etc.
    ($model:expr, $left_array:ident[$left_index:expr] < $right_array:ident[$right_index:expr]) => {{
        $model.props.less_than($left_array[$left_index], $right_array[$right_index]);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left_array:ident[$left_index:expr] <= $right_array:ident[$right_index:expr]) => {{
        $model.props.less_than_or_equals($left_array[$left_index], $right_array[$right_index]);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left_array:ident[$left_index:expr] > $right_array:ident[$right_index:expr]) => {{
        $model.props.greater_than($left_array[$left_index], $right_array[$right_index]);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left_array:ident[$left_index:expr] >= $right_array:ident[$right_index:expr]) => {{
        $model.props.greater_than_or_equals($left_array[$left_index], $right_array[$right_index]);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left_array:ident[$left_index:expr] == $right_array:ident[$right_index:expr]) => {{
        $model.props.equals($left_array[$left_index], $right_array[$right_index]);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left_array:ident[$left_index:expr] != $right_array:ident[$right_index:expr]) => {{
        $model.props.not_equals($left_array[$left_index], $right_array[$right_index]);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};

    // Handle 2D array indexing: grid[i][j] < grid[k][l], grid[0][1] == x, etc.
    ($model:expr, $left_array:ident[$left_i:expr][$left_j:expr] < $right_array:ident[$right_i:expr][$right_j:expr]) => {{
        $model.props.less_than($left_array[$left_i][$left_j], $right_array[$right_i][$right_j]);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left_array:ident[$left_i:expr][$left_j:expr] <= $right_array:ident[$right_i:expr][$right_j:expr]) => {{
        $model.props.less_than_or_equals($left_array[$left_i][$left_j], $right_array[$right_i][$right_j]);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left_array:ident[$left_i:expr][$left_j:expr] > $right_array:ident[$right_i:expr][$right_j:expr]) => {{
        $model.props.greater_than($left_array[$left_i][$left_j], $right_array[$right_i][$right_j]);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left_array:ident[$left_i:expr][$left_j:expr] >= $right_array:ident[$right_i:expr][$right_j:expr]) => {{
        $model.props.greater_than_or_equals($left_array[$left_i][$left_j], $right_array[$right_i][$right_j]);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left_array:ident[$left_i:expr][$left_j:expr] == $right_array:ident[$right_i:expr][$right_j:expr]) => {{
        $model.props.equals($left_array[$left_i][$left_j], $right_array[$right_i][$right_j]);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left_array:ident[$left_i:expr][$left_j:expr] != $right_array:ident[$right_i:expr][$right_j:expr]) => {{
        $model.props.not_equals($left_array[$left_i][$left_j], $right_array[$right_i][$right_j]);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};

    // Handle 2D array vs variable: grid[i][j] < x, x == grid[0][1]
    ($model:expr, $left_array:ident[$left_i:expr][$left_j:expr] < $right:ident) => {{
        $model.props.less_than($left_array[$left_i][$left_j], $right);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left_array:ident[$left_i:expr][$left_j:expr] <= $right:ident) => {{
        $model.props.less_than_or_equals($left_array[$left_i][$left_j], $right);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left_array:ident[$left_i:expr][$left_j:expr] > $right:ident) => {{
        $model.props.greater_than($left_array[$left_i][$left_j], $right);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left_array:ident[$left_i:expr][$left_j:expr] >= $right:ident) => {{
        $model.props.greater_than_or_equals($left_array[$left_i][$left_j], $right);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left_array:ident[$left_i:expr][$left_j:expr] == $right:ident) => {{
        $model.props.equals($left_array[$left_i][$left_j], $right);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left_array:ident[$left_i:expr][$left_j:expr] != $right:ident) => {{
        $model.props.not_equals($left_array[$left_i][$left_j], $right);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};

    ($model:expr, $left:ident < $right_array:ident[$right_i:expr][$right_j:expr]) => {{
        $model.props.less_than($left, $right_array[$right_i][$right_j]);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left:ident <= $right_array:ident[$right_i:expr][$right_j:expr]) => {{
        $model.props.less_than_or_equals($left, $right_array[$right_i][$right_j]);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left:ident > $right_array:ident[$right_i:expr][$right_j:expr]) => {{
        $model.props.greater_than($left, $right_array[$right_i][$right_j]);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left:ident >= $right_array:ident[$right_i:expr][$right_j:expr]) => {{
        $model.props.greater_than_or_equals($left, $right_array[$right_i][$right_j]);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left:ident == $right_array:ident[$right_i:expr][$right_j:expr]) => {{
        $model.props.equals($left, $right_array[$right_i][$right_j]);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left:ident != $right_array:ident[$right_i:expr][$right_j:expr]) => {{
        $model.props.not_equals($left, $right_array[$right_i][$right_j]);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};

    // Handle 2D array vs expression: grid[i][j] == int(5), grid[0][1] != int(3)
    ($model:expr, $left_array:ident[$left_i:expr][$left_j:expr] < $right:expr) => {{
        $model.props.less_than($left_array[$left_i][$left_j], $right);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left_array:ident[$left_i:expr][$left_j:expr] <= $right:expr) => {{
        $model.props.less_than_or_equals($left_array[$left_i][$left_j], $right);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left_array:ident[$left_i:expr][$left_j:expr] > $right:expr) => {{
        $model.props.greater_than($left_array[$left_i][$left_j], $right);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left_array:ident[$left_i:expr][$left_j:expr] >= $right:expr) => {{
        $model.props.greater_than_or_equals($left_array[$left_i][$left_j], $right);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left_array:ident[$left_i:expr][$left_j:expr] == $right:expr) => {{
        $model.props.equals($left_array[$left_i][$left_j], $right);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left_array:ident[$left_i:expr][$left_j:expr] != $right:expr) => {{
        $model.props.not_equals($left_array[$left_i][$left_j], $right);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};

    // Handle array vs variable: vars[i] < x, x == vars[0]
    ($model:expr, $left_array:ident[$left_index:expr] < $right:ident) => {{
        $model.props.less_than($left_array[$left_index], $right);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left_array:ident[$left_index:expr] <= $right:ident) => {{
        $model.props.less_than_or_equals($left_array[$left_index], $right);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left_array:ident[$left_index:expr] > $right:ident) => {{
        $model.props.greater_than($left_array[$left_index], $right);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left_array:ident[$left_index:expr] >= $right:ident) => {{
        $model.props.greater_than_or_equals($left_array[$left_index], $right);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left_array:ident[$left_index:expr] == $right:ident) => {{
        $model.props.equals($left_array[$left_index], $right);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left_array:ident[$left_index:expr] != $right:ident) => {{
        $model.props.not_equals($left_array[$left_index], $right);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};

    // Handle variable vs array: x < vars[i], y == vars[0]
    ($model:expr, $left:ident < $right_array:ident[$right_index:expr]) => {{
        $model.props.less_than($left, $right_array[$right_index]);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left:ident <= $right_array:ident[$right_index:expr]) => {{
        $model.props.less_than_or_equals($left, $right_array[$right_index]);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left:ident > $right_array:ident[$right_index:expr]) => {{
        $model.props.greater_than($left, $right_array[$right_index]);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left:ident >= $right_array:ident[$right_index:expr]) => {{
        $model.props.greater_than_or_equals($left, $right_array[$right_index]);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left:ident == $right_array:ident[$right_index:expr]) => {{
        $model.props.equals($left, $right_array[$right_index]);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left:ident != $right_array:ident[$right_index:expr]) => {{
        $model.props.not_equals($left, $right_array[$right_index]);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};

    // Handle array vs literal: vars[i] < 5, vars[0] == 42
    ($model:expr, $left_array:ident[$left_index:expr] < $right:literal) => {{
        $model.props.less_than($left_array[$left_index], $crate::variables::Val::from($right));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left_array:ident[$left_index:expr] <= $right:literal) => {{
        $model.props.less_than_or_equals($left_array[$left_index], $crate::variables::Val::from($right));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left_array:ident[$left_index:expr] > $right:literal) => {{
        $model.props.greater_than($left_array[$left_index], $crate::variables::Val::from($right));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left_array:ident[$left_index:expr] >= $right:literal) => {{
        $model.props.greater_than_or_equals($left_array[$left_index], $crate::variables::Val::from($right));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left_array:ident[$left_index:expr] == $right:literal) => {{
        $model.props.equals($left_array[$left_index], $crate::variables::Val::from($right));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left_array:ident[$left_index:expr] != $right:literal) => {{
        $model.props.not_equals($left_array[$left_index], $crate::variables::Val::from($right));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};

    // Handle literal vs array: 5 < vars[i], 42 == vars[0]
    ($model:expr, $left:literal < $right_array:ident[$right_index:expr]) => {{
        $model.props.less_than($crate::variables::Val::from($left), $right_array[$right_index]);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left:literal <= $right_array:ident[$right_index:expr]) => {{
        $model.props.less_than_or_equals($crate::variables::Val::from($left), $right_array[$right_index]);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left:literal > $right_array:ident[$right_index:expr]) => {{
        $model.props.greater_than($crate::variables::Val::from($left), $right_array[$right_index]);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left:literal >= $right_array:ident[$right_index:expr]) => {{
        $model.props.greater_than_or_equals($crate::variables::Val::from($left), $right_array[$right_index]);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left:literal == $right_array:ident[$right_index:expr]) => {{
        $model.props.equals($crate::variables::Val::from($left), $right_array[$right_index]);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left:literal != $right_array:ident[$right_index:expr]) => {{
        $model.props.not_equals($crate::variables::Val::from($left), $right_array[$right_index]);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};

    // Handle variable vs bare literal: x < 5, y >= 3.14
    ($model:expr, $left:ident < $right:literal) => {{
        $model.props.less_than($left, $crate::variables::Val::from($right));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left:ident <= $right:literal) => {{
        $model.props.less_than_or_equals($left, $crate::variables::Val::from($right));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left:ident > $right:literal) => {{
        $model.props.greater_than($left, $crate::variables::Val::from($right));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left:ident >= $right:literal) => {{
        $model.props.greater_than_or_equals($left, $crate::variables::Val::from($right));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left:ident == $right:literal) => {{
        $model.props.equals($left, $crate::variables::Val::from($right));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left:ident != $right:literal) => {{
        $model.props.not_equals($left, $crate::variables::Val::from($right));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    // Handle variable vs expression in parentheses: x < (y + 1)
    ($model:expr, $left:ident < ($right:expr)) => {{
        $model.props.less_than($left, $crate::variables::Val::from($right));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left:ident <= ($right:expr)) => {{
        $model.props.less_than_or_equals($left, $crate::variables::Val::from($right));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left:ident > ($right:expr)) => {{
        $model.props.greater_than($left, $crate::variables::Val::from($right));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left:ident >= ($right:expr)) => {{
        $model.props.greater_than_or_equals($left, $crate::variables::Val::from($right));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left:ident == ($right:expr)) => {{
        $model.props.equals($left, $crate::variables::Val::from($right));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left:ident != ($right:expr)) => {{
        $model.props.not_equals($left, $crate::variables::Val::from($right));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    // Handle variable vs constant: x < int(5), y >= float(3.14)
    ($model:expr, $left:ident < int($right:expr)) => {{
        $model.props.less_than($left, $crate::prelude::int($right));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left:ident <= int($right:expr)) => {{
        $model.props.less_than_or_equals($left, $crate::prelude::int($right));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left:ident > int($right:expr)) => {{
        $model.props.greater_than($left, $crate::prelude::int($right));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left:ident >= int($right:expr)) => {{
        $model.props.greater_than_or_equals($left, $crate::prelude::int($right));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left:ident == int($right:expr)) => {{
        $model.props.equals($left, $crate::prelude::int($right));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left:ident != int($right:expr)) => {{
        $model.props.not_equals($left, $crate::prelude::int($right));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    // Handle float constants
    ($model:expr, $left:ident < float($right:expr)) => {{
        $model.props.less_than($left, $crate::prelude::float($right));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left:ident <= float($right:expr)) => {{
        $model.props.less_than_or_equals($left, $crate::prelude::float($right));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left:ident > float($right:expr)) => {{
        $model.props.greater_than($left, $crate::prelude::float($right));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left:ident >= float($right:expr)) => {{
        $model.props.greater_than_or_equals($left, $crate::prelude::float($right));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left:ident == float($right:expr)) => {{
        $model.props.equals($left, $crate::prelude::float($right));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left:ident != float($right:expr)) => {{
        $model.props.not_equals($left, $crate::prelude::float($right));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    // Handle mathematical functions: abs(x), min([x,y]), max([x,y])
    // Absolute value: abs(x) <op> <expr>
    ($model:expr, abs($var:ident) < $target:ident) => {{
        let _abs_var = $model.abs($var);
        $model.props.less_than(_abs_var, $target);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, abs($var:ident) <= $target:ident) => {{
        let _abs_var = $model.abs($var);
        $model.props.less_than_or_equals(_abs_var, $target);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, abs($var:ident) > $target:ident) => {{
        let _abs_var = $model.abs($var);
        $model.props.greater_than(_abs_var, $target);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, abs($var:ident) >= $target:ident) => {{
        let _abs_var = $model.abs($var);
        $model.props.greater_than_or_equals(_abs_var, $target);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, abs($var:ident) == $target:ident) => {{
        let _abs_var = $model.abs($var);
        $model.props.equals(_abs_var, $target);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, abs($var:ident) != $target:ident) => {{
        let _abs_var = $model.abs($var);
        $model.props.not_equals(_abs_var, $target);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    // Absolute value with constants: abs(x) >= int(1)
    ($model:expr, abs($var:ident) < int($target:expr)) => {{
        let _abs_var = $model.abs($var);
        $model.props.less_than(_abs_var, $crate::prelude::int($target));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, abs($var:ident) <= int($target:expr)) => {{
        let _abs_var = $model.abs($var);
        $model.props.less_than_or_equals(_abs_var, $crate::prelude::int($target));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, abs($var:ident) > int($target:expr)) => {{
        let _abs_var = $model.abs($var);
        $model.props.greater_than(_abs_var, $crate::prelude::int($target));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, abs($var:ident) >= int($target:expr)) => {{
        let _abs_var = $model.abs($var);
        $model.props.greater_than_or_equals(_abs_var, $crate::prelude::int($target));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, abs($var:ident) == int($target:expr)) => {{
        let _abs_var = $model.abs($var);
        $model.props.equals(_abs_var, $crate::prelude::int($target));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, abs($var:ident) != int($target:expr)) => {{
        let _abs_var = $model.abs($var);
        $model.props.not_equals(_abs_var, $crate::prelude::int($target));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    // Absolute value with float constants: abs(x) >= float(1.5)
    ($model:expr, abs($var:ident) < float($target:expr)) => {{
        let _abs_var = $model.abs($var);
        $model.props.less_than(_abs_var, $crate::prelude::float($target));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, abs($var:ident) <= float($target:expr)) => {{
        let _abs_var = $model.abs($var);
        $model.props.less_than_or_equals(_abs_var, $crate::prelude::float($target));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, abs($var:ident) > float($target:expr)) => {{
        let _abs_var = $model.abs($var);
        $model.props.greater_than(_abs_var, $crate::prelude::float($target));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, abs($var:ident) >= float($target:expr)) => {{
        let _abs_var = $model.abs($var);
        $model.props.greater_than_or_equals(_abs_var, $crate::prelude::float($target));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, abs($var:ident) == float($target:expr)) => {{
        let _abs_var = $model.abs($var);
        $model.props.equals(_abs_var, $crate::prelude::float($target));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, abs($var:ident) != float($target:expr)) => {{
        let _abs_var = $model.abs($var);
        $model.props.not_equals(_abs_var, $crate::prelude::float($target));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    // Min function: min([x, y]) <op> <expr>
    ($model:expr, min([$($vars:ident),+ $(,)?]) < $target:ident) => {{
        let _min_var = $model.min(&[$($vars),+]).expect("min macro requires non-empty variable list");
        $model.props.less_than(_min_var, $target);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, min([$($vars:ident),+ $(,)?]) <= $target:ident) => {{
        let _min_var = $model.min(&[$($vars),+]).expect("min macro requires non-empty variable list");
        $model.props.less_than_or_equals(_min_var, $target);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, min([$($vars:ident),+ $(,)?]) > $target:ident) => {{
        let _min_var = $model.min(&[$($vars),+]).expect("min macro requires non-empty variable list");
        $model.props.greater_than(_min_var, $target);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, min([$($vars:ident),+ $(,)?]) >= $target:ident) => {{
        let _min_var = $model.min(&[$($vars),+]).expect("min macro requires non-empty variable list");
        $model.props.greater_than_or_equals(_min_var, $target);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, min([$($vars:ident),+ $(,)?]) == $target:ident) => {{
        let _min_var = $model.min(&[$($vars),+]).expect("min macro requires non-empty variable list");
        $model.props.equals(_min_var, $target);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, min([$($vars:ident),+ $(,)?]) != $target:ident) => {{
        let _min_var = $model.min(&[$($vars),+]).expect("min macro requires non-empty variable list");
        $model.props.not_equals(_min_var, $target);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    // Min function with constants: min([x, y]) <= int(5)
    ($model:expr, min([$($vars:ident),+ $(,)?]) < int($target:expr)) => {{
        let _min_var = $model.min(&[$($vars),+]).expect("min macro requires non-empty variable list");
        $model.props.less_than(_min_var, $crate::prelude::int($target));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, min([$($vars:ident),+ $(,)?]) <= int($target:expr)) => {{
        let _min_var = $model.min(&[$($vars),+]).expect("min macro requires non-empty variable list");
        $model.props.less_than_or_equals(_min_var, $crate::prelude::int($target));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, min([$($vars:ident),+ $(,)?]) > int($target:expr)) => {{
        let _min_var = $model.min(&[$($vars),+]).expect("min macro requires non-empty variable list");
        $model.props.greater_than(_min_var, $crate::prelude::int($target));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, min([$($vars:ident),+ $(,)?]) >= int($target:expr)) => {{
        let _min_var = $model.min(&[$($vars),+]).expect("min macro requires non-empty variable list");
        $model.props.greater_than_or_equals(_min_var, $crate::prelude::int($target));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, min([$($vars:ident),+ $(,)?]) == int($target:expr)) => {{
        let _min_var = $model.min(&[$($vars),+]).expect("min macro requires non-empty variable list");
        $model.props.equals(_min_var, $crate::prelude::int($target));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, min([$($vars:ident),+ $(,)?]) != int($target:expr)) => {{
        let _min_var = $model.min(&[$($vars),+]).expect("min macro requires non-empty variable list");
        $model.props.not_equals(_min_var, $crate::prelude::int($target));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    // Min function with float constants: min([x, y]) <= float(5.0)
    ($model:expr, min([$($vars:ident),+ $(,)?]) < float($target:expr)) => {{
        let _min_var = $model.min(&[$($vars),+]).expect("min macro requires non-empty variable list");
        $model.props.less_than(_min_var, $crate::prelude::float($target));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, min([$($vars:ident),+ $(,)?]) <= float($target:expr)) => {{
        let _min_var = $model.min(&[$($vars),+]).expect("min macro requires non-empty variable list");
        $model.props.less_than_or_equals(_min_var, $crate::prelude::float($target));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, min([$($vars:ident),+ $(,)?]) > float($target:expr)) => {{
        let _min_var = $model.min(&[$($vars),+]).expect("min macro requires non-empty variable list");
        $model.props.greater_than(_min_var, $crate::prelude::float($target));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, min([$($vars:ident),+ $(,)?]) >= float($target:expr)) => {{
        let _min_var = $model.min(&[$($vars),+]).expect("min macro requires non-empty variable list");
        $model.props.greater_than_or_equals(_min_var, $crate::prelude::float($target));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, min([$($vars:ident),+ $(,)?]) == float($target:expr)) => {{
        let _min_var = $model.min(&[$($vars),+]).expect("min macro requires non-empty variable list");
        $model.props.equals(_min_var, $crate::prelude::float($target));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, min([$($vars:ident),+ $(,)?]) != float($target:expr)) => {{
        let _min_var = $model.min(&[$($vars),+]).expect("min macro requires non-empty variable list");
        $model.props.not_equals(_min_var, $crate::prelude::float($target));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    // Max function: max([x, y]) <op> <expr>
    ($model:expr, max([$($vars:ident),+ $(,)?]) < $target:ident) => {{
        let _max_var = $model.max(&[$($vars),+]).expect("max macro requires non-empty variable list");
        $model.props.less_than(_max_var, $target);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, max([$($vars:ident),+ $(,)?]) <= $target:ident) => {{
        let _max_var = $model.max(&[$($vars),+]).expect("max macro requires non-empty variable list");
        $model.props.less_than_or_equals(_max_var, $target);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, max([$($vars:ident),+ $(,)?]) > $target:ident) => {{
        let _max_var = $model.max(&[$($vars),+]).expect("max macro requires non-empty variable list");
        $model.props.greater_than(_max_var, $target);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, max([$($vars:ident),+ $(,)?]) >= $target:ident) => {{
        let _max_var = $model.max(&[$($vars),+]).expect("max macro requires non-empty variable list");
        $model.props.greater_than_or_equals(_max_var, $target);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, max([$($vars:ident),+ $(,)?]) == $target:ident) => {{
        let _max_var = $model.max(&[$($vars),+]).expect("max macro requires non-empty variable list");
        $model.props.equals(_max_var, $target);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, max([$($vars:ident),+ $(,)?]) != $target:ident) => {{
        let _max_var = $model.max(&[$($vars),+]).expect("max macro requires non-empty variable list");
        $model.props.not_equals(_max_var, $target);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    // Max function with constants: max([x, y]) >= int(10)
    ($model:expr, max([$($vars:ident),+ $(,)?]) < int($target:expr)) => {{
        let _max_var = $model.max(&[$($vars),+]).expect("max macro requires non-empty variable list");
        $model.props.less_than(_max_var, $crate::prelude::int($target));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, max([$($vars:ident),+ $(,)?]) <= int($target:expr)) => {{
        let _max_var = $model.max(&[$($vars),+]).expect("max macro requires non-empty variable list");
        $model.props.less_than_or_equals(_max_var, $crate::prelude::int($target));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, max([$($vars:ident),+ $(,)?]) > int($target:expr)) => {{
        let _max_var = $model.max(&[$($vars),+]).expect("max macro requires non-empty variable list");
        $model.props.greater_than(_max_var, $crate::prelude::int($target));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, max([$($vars:ident),+ $(,)?]) >= int($target:expr)) => {{
        let _max_var = $model.max(&[$($vars),+]).expect("max macro requires non-empty variable list");
        $model.props.greater_than_or_equals(_max_var, $crate::prelude::int($target));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, max([$($vars:ident),+ $(,)?]) == int($target:expr)) => {{
        let _max_var = $model.max(&[$($vars),+]).expect("max macro requires non-empty variable list");
        $model.props.equals(_max_var, $crate::prelude::int($target));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, max([$($vars:ident),+ $(,)?]) != int($target:expr)) => {{
        let _max_var = $model.max(&[$($vars),+]).expect("max macro requires non-empty variable list");
        $model.props.not_equals(_max_var, $crate::prelude::int($target));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    // Max function with float constants: max([x, y]) >= float(10.0)
    ($model:expr, max([$($vars:ident),+ $(,)?]) < float($target:expr)) => {{
        let _max_var = $model.max(&[$($vars),+]).expect("max macro requires non-empty variable list");
        $model.props.less_than(_max_var, $crate::prelude::float($target));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, max([$($vars:ident),+ $(,)?]) <= float($target:expr)) => {{
        let _max_var = $model.max(&[$($vars),+]).expect("max macro requires non-empty variable list");
        $model.props.less_than_or_equals(_max_var, $crate::prelude::float($target));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, max([$($vars:ident),+ $(,)?]) > float($target:expr)) => {{
        let _max_var = $model.max(&[$($vars),+]).expect("max macro requires non-empty variable list");
        $model.props.greater_than(_max_var, $crate::prelude::float($target));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, max([$($vars:ident),+ $(,)?]) >= float($target:expr)) => {{
        let _max_var = $model.max(&[$($vars),+]).expect("max macro requires non-empty variable list");
        $model.props.greater_than_or_equals(_max_var, $crate::prelude::float($target));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, max([$($vars:ident),+ $(,)?]) == float($target:expr)) => {{
        let _max_var = $model.max(&[$($vars),+]).expect("max macro requires non-empty variable list");
        $model.props.equals(_max_var, $crate::prelude::float($target));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, max([$($vars:ident),+ $(,)?]) != float($target:expr)) => {{
        let _max_var = $model.max(&[$($vars),+]).expect("max macro requires non-empty variable list");
        $model.props.not_equals(_max_var, $crate::prelude::float($target));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    // Min function with array expressions: min(array) <op> <expr>
    ($model:expr, min($array:expr) < $target:ident) => {{
        let _min_var = $model.min(&$array).expect("min macro requires non-empty variable list");
        $model.props.less_than(_min_var, $target);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, min($array:expr) <= $target:ident) => {{
        let _min_var = $model.min(&$array).expect("min macro requires non-empty variable list");
        $model.props.less_than_or_equals(_min_var, $target);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, min($array:expr) > $target:ident) => {{
        let _min_var = $model.min(&$array).expect("min macro requires non-empty variable list");
        $model.props.greater_than(_min_var, $target);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, min($array:expr) >= $target:ident) => {{
        let _min_var = $model.min(&$array).expect("min macro requires non-empty variable list");
        $model.props.greater_than_or_equals(_min_var, $target);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, min($array:expr) == $target:ident) => {{
        let _min_var = $model.min(&$array).expect("min macro requires non-empty variable list");
        $model.props.equals(_min_var, $target);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, min($array:expr) != $target:ident) => {{
        let _min_var = $model.min(&$array).expect("min macro requires non-empty variable list");
        $model.props.not_equals(_min_var, $target);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    // Min function with array expressions and constants: min(array) <= int(5)
    ($model:expr, min($array:expr) < int($target:expr)) => {{
        let _min_var = $model.min(&$array).expect("min macro requires non-empty variable list");
        $model.props.less_than(_min_var, $crate::prelude::int($target));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, min($array:expr) <= int($target:expr)) => {{
        let _min_var = $model.min(&$array).expect("min macro requires non-empty variable list");
        $model.props.less_than_or_equals(_min_var, $crate::prelude::int($target));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, min($array:expr) > int($target:expr)) => {{
        let _min_var = $model.min(&$array).expect("min macro requires non-empty variable list");
        $model.props.greater_than(_min_var, $crate::prelude::int($target));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, min($array:expr) >= int($target:expr)) => {{
        let _min_var = $model.min(&$array).expect("min macro requires non-empty variable list");
        $model.props.greater_than_or_equals(_min_var, $crate::prelude::int($target));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, min($array:expr) == int($target:expr)) => {{
        let _min_var = $model.min(&$array).expect("min macro requires non-empty variable list");
        $model.props.equals(_min_var, $crate::prelude::int($target));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, min($array:expr) != int($target:expr)) => {{
        let _min_var = $model.min(&$array).expect("min macro requires non-empty variable list");
        $model.props.not_equals(_min_var, $crate::prelude::int($target));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    // Max function with array expressions: max(array) <op> <expr>
    ($model:expr, max($array:expr) < $target:ident) => {{
        let _max_var = $model.max(&$array).expect("max macro requires non-empty variable list");
        $model.props.less_than(_max_var, $target);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, max($array:expr) <= $target:ident) => {{
        let _max_var = $model.max(&$array).expect("max macro requires non-empty variable list");
        $model.props.less_than_or_equals(_max_var, $target);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, max($array:expr) > $target:ident) => {{
        let _max_var = $model.max(&$array).expect("max macro requires non-empty variable list");
        $model.props.greater_than(_max_var, $target);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, max($array:expr) >= $target:ident) => {{
        let _max_var = $model.max(&$array).expect("max macro requires non-empty variable list");
        $model.props.greater_than_or_equals(_max_var, $target);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, max($array:expr) == $target:ident) => {{
        let _max_var = $model.max(&$array).expect("max macro requires non-empty variable list");
        $model.props.equals(_max_var, $target);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, max($array:expr) != $target:ident) => {{
        let _max_var = $model.max(&$array).expect("max macro requires non-empty variable list");
        $model.props.not_equals(_max_var, $target);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    // Max function with array expressions and constants: max(array) >= int(10)
    ($model:expr, max($array:expr) < int($target:expr)) => {{
        let _max_var = $model.max(&$array).expect("max macro requires non-empty variable list");
        $model.props.less_than(_max_var, $crate::prelude::int($target));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, max($array:expr) <= int($target:expr)) => {{
        let _max_var = $model.max(&$array).expect("max macro requires non-empty variable list");
        $model.props.less_than_or_equals(_max_var, $crate::prelude::int($target));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, max($array:expr) > int($target:expr)) => {{
        let _max_var = $model.max(&$array).expect("max macro requires non-empty variable list");
        $model.props.greater_than(_max_var, $crate::prelude::int($target));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, max($array:expr) >= int($target:expr)) => {{
        let _max_var = $model.max(&$array).expect("max macro requires non-empty variable list");
        $model.props.greater_than_or_equals(_max_var, $crate::prelude::int($target));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, max($array:expr) == int($target:expr)) => {{
        let _max_var = $model.max(&$array).expect("max macro requires non-empty variable list");
        $model.props.equals(_max_var, $crate::prelude::int($target));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, max($array:expr) != int($target:expr)) => {{
        let _max_var = $model.max(&$array).expect("max macro requires non-empty variable list");
        $model.props.not_equals(_max_var, $crate::prelude::int($target));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    // Sum function: sum([x, y, z]) <op> <expr>
    ($model:expr, sum([$($vars:ident),+ $(,)?]) < $target:ident) => {{
        let _sum_var = $model.sum(&[$($vars),+]);
        $model.props.less_than(_sum_var, $target);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, sum([$($vars:ident),+ $(,)?]) <= $target:ident) => {{
        let _sum_var = $model.sum(&[$($vars),+]);
        $model.props.less_than_or_equals(_sum_var, $target);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, sum([$($vars:ident),+ $(,)?]) > $target:ident) => {{
        let _sum_var = $model.sum(&[$($vars),+]);
        $model.props.greater_than(_sum_var, $target);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, sum([$($vars:ident),+ $(,)?]) >= $target:ident) => {{
        let _sum_var = $model.sum(&[$($vars),+]);
        $model.props.greater_than_or_equals(_sum_var, $target);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, sum([$($vars:ident),+ $(,)?]) == $target:ident) => {{
        let _sum_var = $model.sum(&[$($vars),+]);
        $model.props.equals(_sum_var, $target);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, sum([$($vars:ident),+ $(,)?]) != $target:ident) => {{
        let _sum_var = $model.sum(&[$($vars),+]);
        $model.props.not_equals(_sum_var, $target);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    // Sum function with constants: sum([x, y, z]) <= int(10)
    ($model:expr, sum([$($vars:ident),+ $(,)?]) < int($target:expr)) => {{
        let _sum_var = $model.sum(&[$($vars),+]);
        $model.props.less_than(_sum_var, $crate::prelude::int($target));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, sum([$($vars:ident),+ $(,)?]) <= int($target:expr)) => {{
        let _sum_var = $model.sum(&[$($vars),+]);
        $model.props.less_than_or_equals(_sum_var, $crate::prelude::int($target));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, sum([$($vars:ident),+ $(,)?]) > int($target:expr)) => {{
        let _sum_var = $model.sum(&[$($vars),+]);
        $model.props.greater_than(_sum_var, $crate::prelude::int($target));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, sum([$($vars:ident),+ $(,)?]) >= int($target:expr)) => {{
        let _sum_var = $model.sum(&[$($vars),+]);
        $model.props.greater_than_or_equals(_sum_var, $crate::prelude::int($target));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, sum([$($vars:ident),+ $(,)?]) == int($target:expr)) => {{
        let _sum_var = $model.sum(&[$($vars),+]);
        $model.props.equals(_sum_var, $crate::prelude::int($target));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, sum([$($vars:ident),+ $(,)?]) != int($target:expr)) => {{
        let _sum_var = $model.sum(&[$($vars),+]);
        $model.props.not_equals(_sum_var, $crate::prelude::int($target));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    // Sum function with array expressions: sum(array) <op> <expr>
    ($model:expr, sum($array:expr) < $target:ident) => {{
        let _sum_var = $model.sum(&$array);
        $model.props.less_than(_sum_var, $target);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, sum($array:expr) <= $target:ident) => {{
        let _sum_var = $model.sum(&$array);
        $model.props.less_than_or_equals(_sum_var, $target);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, sum($array:expr) > $target:ident) => {{
        let _sum_var = $model.sum(&$array);
        $model.props.greater_than(_sum_var, $target);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, sum($array:expr) >= $target:ident) => {{
        let _sum_var = $model.sum(&$array);
        $model.props.greater_than_or_equals(_sum_var, $target);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, sum($array:expr) == $target:ident) => {{
        let _sum_var = $model.sum(&$array);
        $model.props.equals(_sum_var, $target);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, sum($array:expr) != $target:ident) => {{
        let _sum_var = $model.sum(&$array);
        $model.props.not_equals(_sum_var, $target);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    // Sum function with array expressions and constants: sum(array) <= int(10)
    ($model:expr, sum($array:expr) < int($target:expr)) => {{
        let _sum_var = $model.sum(&$array);
        $model.props.less_than(_sum_var, $crate::prelude::int($target));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, sum($array:expr) <= int($target:expr)) => {{
        let _sum_var = $model.sum(&$array);
        $model.props.less_than_or_equals(_sum_var, $crate::prelude::int($target));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, sum($array:expr) > int($target:expr)) => {{
        let _sum_var = $model.sum(&$array);
        $model.props.greater_than(_sum_var, $crate::prelude::int($target));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, sum($array:expr) >= int($target:expr)) => {{
        let _sum_var = $model.sum(&$array);
        $model.props.greater_than_or_equals(_sum_var, $crate::prelude::int($target));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, sum($array:expr) == int($target:expr)) => {{
        let _sum_var = $model.sum(&$array);
        $model.props.equals(_sum_var, $crate::prelude::int($target));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, sum($array:expr) != int($target:expr)) => {{
        let _sum_var = $model.sum(&$array);
        $model.props.not_equals(_sum_var, $crate::prelude::int($target));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    // Logical operators - Array syntax
    ($model:expr, and([$($vars:expr),* $(,)?])) => {{
        let vars_vec = vec![$($vars),*];
        let _and_result = $model.bool_and(&vars_vec);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, or([$($vars:expr),* $(,)?])) => {{
        let vars_vec = vec![$($vars),*];
        let _or_result = $model.bool_or(&vars_vec);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    // Logical operators - Variadic syntax (3+ arguments)
    ($model:expr, and($first:expr, $second:expr, $($rest:expr),+ $(,)?)) => {{
        let vars_vec = vec![$first, $second, $($rest),*];
        let _and_result = $model.bool_and(&vars_vec);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, or($first:expr, $second:expr, $($rest:expr),+ $(,)?)) => {{
        let vars_vec = vec![$first, $second, $($rest),*];
        let _or_result = $model.bool_or(&vars_vec);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    // Logical operators (traditional 2-argument style)
    ($model:expr, and($c1:expr, $c2:expr)) => {{
        let _and_result = $model.bool_and(&[$c1, $c2]);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, or($c1:expr, $c2:expr)) => {{
        let _or_result = $model.bool_or(&[$c1, $c2]);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    // Not operator - Array syntax for convenience (creates multiple not constraints)
    ($model:expr, not([$($vars:expr),* $(,)?])) => {{
        $(
            let _not_result = $model.bool_not($vars);
        )*
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    // Not operator - Single variable
    ($model:expr, not($var:ident)) => {{
        let _not_result = $model.bool_not($var);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};

    // Handle logical operators: & (AND), | (OR)
    // NOTE: Parentheses are REQUIRED due to Rust macro parsing rules
    // The `&` and `|` tokens cannot follow `expr` fragments directly
    // So we use ($left:expr) & ($right:expr) instead of $left:expr & $right:expr
    ($model:expr, ($left:expr) & ($right:expr)) => {{
        // AND operation - both constraints must be true
        // Post both constraints separately
        let _left_ref = $left;
        let _right_ref = $right;
        // Return the second constraint's reference (arbitrary choice since both must hold)
        _right_ref
    }};
    
    ($model:expr, ($left:expr) | ($right:expr)) => {{
        // OR operation - at least one constraint must be true
        // This would require disjunctive constraint support
        let _left_ref = $left;
        let _right_ref = $right;
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    // Handle function-style logical operators (preferred syntax)
    ($model:expr, and($left:expr, $right:expr)) => {{
        // AND operation - both constraints must be true
        // Post both constraints separately
        let _left_ref = $left;
        let _right_ref = $right;
        // Return the second constraint's reference (arbitrary choice since both must hold)
        _right_ref
    }};
    
    ($model:expr, or($left:expr, $right:expr)) => {{
        // OR operation - at least one constraint must be true
        // This would require disjunctive constraint support
        // For now, this is a placeholder - true OR support needs special implementation
        let _left_ref = $left;
        let _right_ref = $right;
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, not($constraint:expr)) => {{
        // NOT operation - negation of a constraint
        // This would require constraint negation support
        // For now, this is a placeholder - true NOT support needs special implementation
        let _constraint_ref = $constraint;
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    // Global constraints: alldiff([x, y, z])
    ($model:expr, alldiff([$($vars:ident),+ $(,)?])) => {{
        $model.props.all_different(vec![$($vars),+]);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    // Global constraints: alldiff with array expressions
    ($model:expr, alldiff($array:expr)) => {{
        $model.props.all_different($array.to_vec());
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    // Global constraints: allequal([x, y, z])
    ($model:expr, allequal([$($vars:ident),+ $(,)?])) => {{
        $model.props.all_equal(vec![$($vars),+]);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    // Global constraints: allequal with array expressions
    ($model:expr, allequal($array:expr)) => {{
        $model.props.all_equal($array.to_vec());
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    // Element constraint: element(array, index, value)
    ($model:expr, element($array:expr, $index:ident, $value:ident)) => {{
        $model.props.element($array.to_vec(), $index, $value);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    // Element constraint: element with array literal
    ($model:expr, element([$($vars:ident),+ $(,)?], $index:ident, $value:ident)) => {{
        $model.props.element(vec![$($vars),+], $index, $value);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    // Count constraint: count(vars, target_value, count_var)
    ($model:expr, count($vars:expr, $target:expr, $count:ident)) => {{
        $model.props.count_constraint($vars.to_vec(), $target, $count);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    // Count constraint with array literal: count([x, y, z], value, count)
    ($model:expr, count([$($vars:ident),+ $(,)?], $target:expr, $count:ident)) => {{
        $model.props.count_constraint(vec![$($vars),+], $target, $count);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    // Table constraint: table(vars, tuples)
    ($model:expr, table($vars:expr, $tuples:expr)) => {{
        $model.props.table_constraint($vars.to_vec(), $tuples);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    // Table constraint with array literal: table([x, y, z], tuples)
    ($model:expr, table([$($vars:ident),+ $(,)?], $tuples:expr)) => {{
        $model.props.table_constraint(vec![$($vars),+], $tuples);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};

    // Between constraint: between(lower, middle, upper)
    ($model:expr, between($lower:ident, $middle:ident, $upper:ident)) => {{
        $model.props.between_constraint($lower, $middle, $upper);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};

    // At least constraint: at_least(vars, value, count)
    ($model:expr, at_least($vars:expr, $value:expr, $count:expr)) => {{
        $model.props.at_least_constraint($vars.to_vec(), $value, $count);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};

    // At least constraint with array literal: at_least([x, y, z], value, count)
    ($model:expr, at_least([$($vars:ident),+ $(,)?], $value:expr, $count:expr)) => {{
        $model.props.at_least_constraint(vec![$($vars),+], $value, $count);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};

    // At most constraint: at_most(vars, value, count)
    ($model:expr, at_most($vars:expr, $value:expr, $count:expr)) => {{
        $model.props.at_most_constraint($vars.to_vec(), $value, $count);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};

    // At most constraint with array literal: at_most([x, y, z], value, count)
    ($model:expr, at_most([$($vars:ident),+ $(,)?], $value:expr, $count:expr)) => {{
        $model.props.at_most_constraint(vec![$($vars),+], $value, $count);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};

    // Exactly constraint: exactly(vars, value, count)
    ($model:expr, exactly($vars:expr, $value:expr, $count:expr)) => {{
        $model.props.exactly_constraint($vars.to_vec(), $value, $count);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};

    // Exactly constraint with array literal: exactly([x, y, z], value, count)
    ($model:expr, exactly([$($vars:ident),+ $(,)?], $value:expr, $count:expr)) => {{
        $model.props.exactly_constraint(vec![$($vars),+], $value, $count);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    // Enhanced modulo operations: x % y == int(0), x % y != int(0)
    
    // Modulo with literal divisor and variable remainder: x % 5 == y
    ($model:expr, $left:ident % $divisor:literal == $remainder:ident) => {{
        let _mod_var = $model.modulo($left, $crate::prelude::int($divisor));
        $model.props.equals(_mod_var, $remainder);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left:ident % $divisor:literal != $remainder:ident) => {{
        let _mod_var = $model.modulo($left, $crate::prelude::int($divisor));
        $model.props.not_equals(_mod_var, $remainder);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    // Modulo with variables and all comparison operators: x % y <op> z
    ($model:expr, $left:ident % $divisor:ident < $target:ident) => {{
        let _mod_var = $model.modulo($left, $divisor);
        $model.props.less_than(_mod_var, $target);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left:ident % $divisor:ident <= $target:ident) => {{
        let _mod_var = $model.modulo($left, $divisor);
        $model.props.less_than_or_equals(_mod_var, $target);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left:ident % $divisor:ident > $target:ident) => {{
        let _mod_var = $model.modulo($left, $divisor);
        $model.props.greater_than(_mod_var, $target);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left:ident % $divisor:ident >= $target:ident) => {{
        let _mod_var = $model.modulo($left, $divisor);
        $model.props.greater_than_or_equals(_mod_var, $target);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left:ident % $divisor:ident == $target:ident) => {{
        let _mod_var = $model.modulo($left, $divisor);
        $model.props.equals(_mod_var, $target);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left:ident % $divisor:ident != $target:ident) => {{
        let _mod_var = $model.modulo($left, $divisor);
        $model.props.not_equals(_mod_var, $target);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    // Modulo with int() constants on divisor: x % int(5) <op> int(0) 
    ($model:expr, $left:ident % int($divisor:expr) < int($target:expr)) => {{
        let _mod_var = $model.modulo($left, $crate::prelude::int($divisor));
        $model.props.less_than(_mod_var, $crate::prelude::int($target));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left:ident % int($divisor:expr) <= int($target:expr)) => {{
        let _mod_var = $model.modulo($left, $crate::prelude::int($divisor));
        $model.props.less_than_or_equals(_mod_var, $crate::prelude::int($target));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left:ident % int($divisor:expr) > int($target:expr)) => {{
        let _mod_var = $model.modulo($left, $crate::prelude::int($divisor));
        $model.props.greater_than(_mod_var, $crate::prelude::int($target));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left:ident % int($divisor:expr) >= int($target:expr)) => {{
        let _mod_var = $model.modulo($left, $crate::prelude::int($divisor));
        $model.props.greater_than_or_equals(_mod_var, $crate::prelude::int($target));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left:ident % int($divisor:expr) == int($target:expr)) => {{
        let _mod_var = $model.modulo($left, $crate::prelude::int($divisor));
        $model.props.equals(_mod_var, $crate::prelude::int($target));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left:ident % int($divisor:expr) != int($target:expr)) => {{
        let _mod_var = $model.modulo($left, $crate::prelude::int($divisor));
        $model.props.not_equals(_mod_var, $crate::prelude::int($target));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    // Handle arithmetic operations: x + y < z, x - y >= int(0), etc.
    // Addition: x + y <op> <expr>
    ($model:expr, $left:ident + $right:ident < $target:ident) => {{
        let _sum_var = $model.add($left, $right);
        $model.props.less_than(_sum_var, $target);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left:ident + $right:ident <= $target:ident) => {{
        let _sum_var = $model.add($left, $right);
        $model.props.less_than_or_equals(_sum_var, $target);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left:ident + $right:ident > $target:ident) => {{
        let _sum_var = $model.add($left, $right);
        $model.props.greater_than(_sum_var, $target);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left:ident + $right:ident >= $target:ident) => {{
        let _sum_var = $model.add($left, $right);
        $model.props.greater_than_or_equals(_sum_var, $target);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left:ident + $right:ident == $target:ident) => {{
        let _sum_var = $model.add($left, $right);
        $model.props.equals(_sum_var, $target);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left:ident + $right:ident != $target:ident) => {{
        let _sum_var = $model.add($left, $right);
        $model.props.not_equals(_sum_var, $target);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    // Addition with constants: x + y < int(10)
    ($model:expr, $left:ident + $right:ident < int($target:expr)) => {{
        let _sum_var = $model.add($left, $right);
        $model.props.less_than(_sum_var, $crate::prelude::int($target));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left:ident + $right:ident <= int($target:expr)) => {{
        let _sum_var = $model.add($left, $right);
        $model.props.less_than_or_equals(_sum_var, $crate::prelude::int($target));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left:ident + $right:ident > int($target:expr)) => {{
        let _sum_var = $model.add($left, $right);
        $model.props.greater_than(_sum_var, $crate::prelude::int($target));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left:ident + $right:ident >= int($target:expr)) => {{
        let _sum_var = $model.add($left, $right);
        $model.props.greater_than_or_equals(_sum_var, $crate::prelude::int($target));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left:ident + $right:ident == int($target:expr)) => {{
        let _sum_var = $model.add($left, $right);
        $model.props.equals(_sum_var, $crate::prelude::int($target));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left:ident + $right:ident != int($target:expr)) => {{
        let _sum_var = $model.add($left, $right);
        $model.props.not_equals(_sum_var, $crate::prelude::int($target));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    // Array arithmetic: vars[i] + vars[j] <op> <expr>
    ($model:expr, $left_array:ident[$left_index:expr] + $right_array:ident[$right_index:expr] < $target:ident) => {{
        let _sum_var = $model.add($left_array[$left_index], $right_array[$right_index]);
        $model.props.less_than(_sum_var, $target);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left_array:ident[$left_index:expr] + $right_array:ident[$right_index:expr] <= $target:ident) => {{
        let _sum_var = $model.add($left_array[$left_index], $right_array[$right_index]);
        $model.props.less_than_or_equals(_sum_var, $target);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left_array:ident[$left_index:expr] + $right_array:ident[$right_index:expr] > $target:ident) => {{
        let _sum_var = $model.add($left_array[$left_index], $right_array[$right_index]);
        $model.props.greater_than(_sum_var, $target);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left_array:ident[$left_index:expr] + $right_array:ident[$right_index:expr] >= $target:ident) => {{
        let _sum_var = $model.add($left_array[$left_index], $right_array[$right_index]);
        $model.props.greater_than_or_equals(_sum_var, $target);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left_array:ident[$left_index:expr] + $right_array:ident[$right_index:expr] == $target:ident) => {{
        let _sum_var = $model.add($left_array[$left_index], $right_array[$right_index]);
        $model.props.equals(_sum_var, $target);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left_array:ident[$left_index:expr] + $right_array:ident[$right_index:expr] != $target:ident) => {{
        let _sum_var = $model.add($left_array[$left_index], $right_array[$right_index]);
        $model.props.not_equals(_sum_var, $target);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    // Array arithmetic with constants: vars[i] + vars[j] <= int(150)
    ($model:expr, $left_array:ident[$left_index:expr] + $right_array:ident[$right_index:expr] <= int($target:expr)) => {{
        let _sum_var = $model.add($left_array[$left_index], $right_array[$right_index]);
        $model.props.less_than_or_equals(_sum_var, $crate::prelude::int($target));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left_array:ident[$left_index:expr] + $right_array:ident[$right_index:expr] < int($target:expr)) => {{
        let _sum_var = $model.add($left_array[$left_index], $right_array[$right_index]);
        $model.props.less_than(_sum_var, $crate::prelude::int($target));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left_array:ident[$left_index:expr] + $right_array:ident[$right_index:expr] >= int($target:expr)) => {{
        let _sum_var = $model.add($left_array[$left_index], $right_array[$right_index]);
        $model.props.greater_than_or_equals(_sum_var, $crate::prelude::int($target));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left_array:ident[$left_index:expr] + $right_array:ident[$right_index:expr] > int($target:expr)) => {{
        let _sum_var = $model.add($left_array[$left_index], $right_array[$right_index]);
        $model.props.greater_than(_sum_var, $crate::prelude::int($target));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left_array:ident[$left_index:expr] + $right_array:ident[$right_index:expr] == int($target:expr)) => {{
        let _sum_var = $model.add($left_array[$left_index], $right_array[$right_index]);
        $model.props.equals(_sum_var, $crate::prelude::int($target));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left_array:ident[$left_index:expr] + $right_array:ident[$right_index:expr] != int($target:expr)) => {{
        let _sum_var = $model.add($left_array[$left_index], $right_array[$right_index]);
        $model.props.not_equals(_sum_var, $crate::prelude::int($target));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    // Mixed array and variable arithmetic: vars[i] + var <= target
    ($model:expr, $left_array:ident[$left_index:expr] + $right:ident <= $target:ident) => {{
        let _sum_var = $model.add($left_array[$left_index], $right);
        $model.props.less_than_or_equals(_sum_var, $target);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left:ident + $right_array:ident[$right_index:expr] <= $target:ident) => {{
        let _sum_var = $model.add($left, $right_array[$right_index]);
        $model.props.less_than_or_equals(_sum_var, $target);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left_array:ident[$left_index:expr] + $right:ident <= int($target:expr)) => {{
        let _sum_var = $model.add($left_array[$left_index], $right);
        $model.props.less_than_or_equals(_sum_var, $crate::prelude::int($target));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left:ident + $right_array:ident[$right_index:expr] <= int($target:expr)) => {{
        let _sum_var = $model.add($left, $right_array[$right_index]);
        $model.props.less_than_or_equals(_sum_var, $crate::prelude::int($target));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    // Subtraction: x - y <op> <expr>
    ($model:expr, $left:ident - $right:ident < $target:ident) => {{
        let _diff_var = $model.sub($left, $right);
        $model.props.less_than(_diff_var, $target);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left:ident - $right:ident <= $target:ident) => {{
        let _diff_var = $model.sub($left, $right);
        $model.props.less_than_or_equals(_diff_var, $target);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left:ident - $right:ident > $target:ident) => {{
        let _diff_var = $model.sub($left, $right);
        $model.props.greater_than(_diff_var, $target);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left:ident - $right:ident >= $target:ident) => {{
        let _diff_var = $model.sub($left, $right);
        $model.props.greater_than_or_equals(_diff_var, $target);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left:ident - $right:ident == $target:ident) => {{
        let _diff_var = $model.sub($left, $right);
        $model.props.equals(_diff_var, $target);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left:ident - $right:ident != $target:ident) => {{
        let _diff_var = $model.sub($left, $right);
        $model.props.not_equals(_diff_var, $target);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    // Subtraction with constants: x - y >= int(0)
    ($model:expr, $left:ident - $right:ident < int($target:expr)) => {{
        let _diff_var = $model.sub($left, $right);
        $model.props.less_than(_diff_var, $crate::prelude::int($target));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left:ident - $right:ident <= int($target:expr)) => {{
        let _diff_var = $model.sub($left, $right);
        $model.props.less_than_or_equals(_diff_var, $crate::prelude::int($target));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left:ident - $right:ident > int($target:expr)) => {{
        let _diff_var = $model.sub($left, $right);
        $model.props.greater_than(_diff_var, $crate::prelude::int($target));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left:ident - $right:ident >= int($target:expr)) => {{
        let _diff_var = $model.sub($left, $right);
        $model.props.greater_than_or_equals(_diff_var, $crate::prelude::int($target));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left:ident - $right:ident == int($target:expr)) => {{
        let _diff_var = $model.sub($left, $right);
        $model.props.equals(_diff_var, $crate::prelude::int($target));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left:ident - $right:ident != int($target:expr)) => {{
        let _diff_var = $model.sub($left, $right);
        $model.props.not_equals(_diff_var, $crate::prelude::int($target));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    // Multiplication: x * y <op> <expr>
    ($model:expr, $left:ident * $right:ident < $target:ident) => {{
        let _prod_var = $model.mul($left, $right);
        $model.props.less_than(_prod_var, $target);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left:ident * $right:ident <= $target:ident) => {{
        let _prod_var = $model.mul($left, $right);
        $model.props.less_than_or_equals(_prod_var, $target);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left:ident * $right:ident > $target:ident) => {{
        let _prod_var = $model.mul($left, $right);
        $model.props.greater_than(_prod_var, $target);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left:ident * $right:ident >= $target:ident) => {{
        let _prod_var = $model.mul($left, $right);
        $model.props.greater_than_or_equals(_prod_var, $target);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left:ident * $right:ident == $target:ident) => {{
        let _prod_var = $model.mul($left, $right);
        $model.props.equals(_prod_var, $target);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left:ident * $right:ident != $target:ident) => {{
        let _prod_var = $model.mul($left, $right);
        $model.props.not_equals(_prod_var, $target);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    // Multiplication with constants: x * y <= int(10)
    ($model:expr, $left:ident * $right:ident < int($target:expr)) => {{
        let _prod_var = $model.mul($left, $right);
        $model.props.less_than(_prod_var, $crate::prelude::int($target));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left:ident * $right:ident <= int($target:expr)) => {{
        let _prod_var = $model.mul($left, $right);
        $model.props.less_than_or_equals(_prod_var, $crate::prelude::int($target));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left:ident * $right:ident > int($target:expr)) => {{
        let _prod_var = $model.mul($left, $right);
        $model.props.greater_than(_prod_var, $crate::prelude::int($target));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left:ident * $right:ident >= int($target:expr)) => {{
        let _prod_var = $model.mul($left, $right);
        $model.props.greater_than_or_equals(_prod_var, $crate::prelude::int($target));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left:ident * $right:ident == int($target:expr)) => {{
        let _prod_var = $model.mul($left, $right);
        $model.props.equals(_prod_var, $crate::prelude::int($target));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left:ident * $right:ident != int($target:expr)) => {{
        let _prod_var = $model.mul($left, $right);
        $model.props.not_equals(_prod_var, $crate::prelude::int($target));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};

    // Multiplication with constant values: x * int(5) == y, x * float(3.14) <= z
    ($model:expr, $target:ident == $left:ident * int($value:expr)) => {{
        let _prod_var = $model.mul($left, $crate::prelude::int($value));
        $model.props.equals($target, _prod_var);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};

    ($model:expr, $target:ident == $left:ident * float($value:expr)) => {{
        let _prod_var = $model.mul($left, $crate::prelude::float($value));
        $model.props.equals($target, _prod_var);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};

    ($model:expr, $target:ident <= $left:ident * int($value:expr)) => {{
        let _prod_var = $model.mul($left, $crate::prelude::int($value));
        $model.props.less_than_or_equals($target, _prod_var);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};

    ($model:expr, $target:ident <= $left:ident * float($value:expr)) => {{
        let _prod_var = $model.mul($left, $crate::prelude::float($value));
        $model.props.less_than_or_equals($target, _prod_var);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};

    ($model:expr, $target:ident >= $left:ident * int($value:expr)) => {{
        let _prod_var = $model.mul($left, $crate::prelude::int($value));
        $model.props.greater_than_or_equals($target, _prod_var);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};

    ($model:expr, $target:ident >= $left:ident * float($value:expr)) => {{
        let _prod_var = $model.mul($left, $crate::prelude::float($value));
        $model.props.greater_than_or_equals($target, _prod_var);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};

    ($model:expr, $target:ident < $left:ident * int($value:expr)) => {{
        let _prod_var = $model.mul($left, $crate::prelude::int($value));
        $model.props.less_than($target, _prod_var);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};

    ($model:expr, $target:ident < $left:ident * float($value:expr)) => {{
        let _prod_var = $model.mul($left, $crate::prelude::float($value));
        $model.props.less_than($target, _prod_var);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};

    ($model:expr, $target:ident > $left:ident * int($value:expr)) => {{
        let _prod_var = $model.mul($left, $crate::prelude::int($value));
        $model.props.greater_than($target, _prod_var);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};

    ($model:expr, $target:ident > $left:ident * float($value:expr)) => {{
        let _prod_var = $model.mul($left, $crate::prelude::float($value));
        $model.props.greater_than($target, _prod_var);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};

    ($model:expr, $target:ident != $left:ident * int($value:expr)) => {{
        let _prod_var = $model.mul($left, $crate::prelude::int($value));
        $model.props.not_equals($target, _prod_var);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};

    ($model:expr, $target:ident != $left:ident * float($value:expr)) => {{
        let _prod_var = $model.mul($left, $crate::prelude::float($value));
        $model.props.not_equals($target, _prod_var);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    // Division: x / y <op> <expr>
    ($model:expr, $left:ident / $right:ident < $target:ident) => {{
        let _quot_var = $model.div($left, $right);
        $model.props.less_than(_quot_var, $target);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left:ident / $right:ident <= $target:ident) => {{
        let _quot_var = $model.div($left, $right);
        $model.props.less_than_or_equals(_quot_var, $target);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left:ident / $right:ident > $target:ident) => {{
        let _quot_var = $model.div($left, $right);
        $model.props.greater_than(_quot_var, $target);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left:ident / $right:ident >= $target:ident) => {{
        let _quot_var = $model.div($left, $right);
        $model.props.greater_than_or_equals(_quot_var, $target);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left:ident / $right:ident == $target:ident) => {{
        let _quot_var = $model.div($left, $right);
        $model.props.equals(_quot_var, $target);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left:ident / $right:ident != $target:ident) => {{
        let _quot_var = $model.div($left, $right);
        $model.props.not_equals(_quot_var, $target);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    // Division with constants: x / y <= int(5)
    ($model:expr, $left:ident / $right:ident < int($target:expr)) => {{
        let _quot_var = $model.div($left, $right);
        $model.props.less_than(_quot_var, $crate::prelude::int($target));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left:ident / $right:ident <= int($target:expr)) => {{
        let _quot_var = $model.div($left, $right);
        $model.props.less_than_or_equals(_quot_var, $crate::prelude::int($target));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left:ident / $right:ident > int($target:expr)) => {{
        let _quot_var = $model.div($left, $right);
        $model.props.greater_than(_quot_var, $crate::prelude::int($target));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left:ident / $right:ident >= int($target:expr)) => {{
        let _quot_var = $model.div($left, $right);
        $model.props.greater_than_or_equals(_quot_var, $crate::prelude::int($target));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left:ident / $right:ident == int($target:expr)) => {{
        let _quot_var = $model.div($left, $right);
        $model.props.equals(_quot_var, $crate::prelude::int($target));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left:ident / $right:ident != int($target:expr)) => {{
        let _quot_var = $model.div($left, $right);
        $model.props.not_equals(_quot_var, $crate::prelude::int($target));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    // Handle modulo operations: x % 3 == 1
    ($model:expr, $left:ident % $divisor:literal == $remainder:literal) => {{
        let _mod_var = $model.modulo($left, $crate::prelude::int($divisor));
        $model.props.equals(_mod_var, $crate::prelude::int($remainder));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    // Enhanced modulo operations: x % y == int(0), x % y != int(0)
    ($model:expr, $left:ident % $right:ident == int($remainder:expr)) => {{
        let _mod_var = $model.modulo($left, $right);
        $model.props.equals(_mod_var, $crate::prelude::int($remainder));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, $left:ident % $right:ident != int($remainder:expr)) => {{
        let _mod_var = $model.modulo($left, $right);
        $model.props.not_equals(_mod_var, $crate::prelude::int($remainder));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};

    // If-then constraint: if_then(condition, then_constraint)
    // Example: post!(m, if_then(x == 1, y == 5));
    ($model:expr, if_then($cond_var:ident == $cond_val:expr, $then_var:ident == $then_val:expr)) => {{
        use $crate::constraints::props::conditional::{Condition, SimpleConstraint, IfThenElseConstraint};
        let condition = Condition::Equals($cond_var, $cond_val);
        let then_constraint = SimpleConstraint::Equals($then_var, $then_val);
        $model.props.if_then_else_constraint(condition, then_constraint, None);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};

    ($model:expr, if_then($cond_var:ident != $cond_val:expr, $then_var:ident == $then_val:expr)) => {{
        use $crate::constraints::props::conditional::{Condition, SimpleConstraint, IfThenElseConstraint};
        let condition = Condition::NotEquals($cond_var, $cond_val);
        let then_constraint = SimpleConstraint::Equals($then_var, $then_val);
        $model.props.if_then_else_constraint(condition, then_constraint, None);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};

    ($model:expr, if_then($cond_var:ident > $cond_val:expr, $then_var:ident <= $then_val:expr)) => {{
        use $crate::constraints::props::conditional::{Condition, SimpleConstraint, IfThenElseConstraint};
        let condition = Condition::GreaterThan($cond_var, $cond_val);
        let then_constraint = SimpleConstraint::LessOrEqual($then_var, $then_val);
        $model.props.if_then_else_constraint(condition, then_constraint, None);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};

    // If-then-else constraint: if_then_else(condition, then_constraint, else_constraint)
    // Example: post!(m, if_then_else(x == 1, y == 5, y == 3));
    ($model:expr, if_then_else($cond_var:ident == $cond_val:expr, $then_var:ident == $then_val:expr, $else_var:ident == $else_val:expr)) => {{
        use $crate::constraints::props::conditional::{Condition, SimpleConstraint, IfThenElseConstraint};
        let condition = Condition::Equals($cond_var, $cond_val);
        let then_constraint = SimpleConstraint::Equals($then_var, $then_val);
        let else_constraint = SimpleConstraint::Equals($else_var, $else_val);
        $model.props.if_then_else_constraint(condition, then_constraint, Some(else_constraint));
        $crate::constraints::macros::ConstraintRef::new(0)
    }};

    // Negation patterns: !(x < y) becomes x >= y, etc.
    ($model:expr, !($left:ident < $right:ident)) => {{
        $model.props.greater_than_or_equals($left, $right);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, !($left:ident <= $right:ident)) => {{
        $model.props.greater_than($left, $right);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, !($left:ident > $right:ident)) => {{
        $model.props.less_than_or_equals($left, $right);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, !($left:ident >= $right:ident)) => {{
        $model.props.less_than($left, $right);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, !($left:ident == $right:ident)) => {{
        $model.props.not_equals($left, $right);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
    
    ($model:expr, !($left:ident != $right:ident)) => {{
        $model.props.equals($left, $right);
        $crate::constraints::macros::ConstraintRef::new(0)
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! postall {
    // Use simple comma-separated arguments
    ($model:expr, $($rest:tt)*) => {{
        $crate::postall_helper!($model, $($rest)*);
    }};
}

#[doc(hidden)]
/// Helper macro to handle constraint expressions recursively
#[macro_export]
macro_rules! postall_helper {
    // Base case: empty
    ($model:expr,) => {};
    
    // Single constraint at the end
    ($model:expr, $var:ident < $target:ident) => {
        $crate::post!($model, $var < $target);
    };
    
    ($model:expr, $var:ident <= $target:ident) => {
        $crate::post!($model, $var <= $target);
    };
    
    ($model:expr, $var:ident > $target:ident) => {
        $crate::post!($model, $var > $target);
    };
    
    ($model:expr, $var:ident >= $target:ident) => {
        $crate::post!($model, $var >= $target);
    };
    
    ($model:expr, $var:ident == $target:ident) => {
        $crate::post!($model, $var == $target);
    };
    
    ($model:expr, $var:ident != $target:ident) => {
        $crate::post!($model, $var != $target);
    };
    
    // With constants
    ($model:expr, $var:ident < int($target:expr)) => {
        $crate::post!($model, $var < int($target));
    };
    
    ($model:expr, $var:ident <= int($target:expr)) => {
        $crate::post!($model, $var <= int($target));
    };
    
    ($model:expr, $var:ident > int($target:expr)) => {
        $crate::post!($model, $var > int($target));
    };
    
    ($model:expr, $var:ident >= int($target:expr)) => {
        $crate::post!($model, $var >= int($target));
    };
    
    ($model:expr, $var:ident == int($target:expr)) => {
        $crate::post!($model, $var == int($target));
    };
    
    ($model:expr, $var:ident != int($target:expr)) => {
        $crate::post!($model, $var != int($target));
    };
    
    // Element constraint syntax (single)
    ($model:expr, $array:ident[$index:ident] == $value:ident) => {
        $crate::post!($model, $array[$index] == $value);
    };
    
    ($model:expr, $value:ident == $array:ident[$index:ident]) => {
        $crate::post!($model, $value == $array[$index]);
    };
    
    // Arithmetic operations
    ($model:expr, $left:ident + $right:ident <= $target:ident) => {
        $crate::post!($model, $left + $right <= $target);
    };
    
    ($model:expr, $left:ident + $right:ident == $target:ident) => {
        $crate::post!($model, $left + $right == $target);
    };
    
    ($model:expr, $left:ident + $right:ident <= int($target:expr)) => {
        $crate::post!($model, $left + $right <= int($target));
    };
    
    ($model:expr, $left:ident + $right:ident == int($target:expr)) => {
        $crate::post!($model, $left + $right == int($target));
    };
    
    // Mathematical functions
    ($model:expr, abs($var:ident) >= int($target:expr)) => {
        $crate::post!($model, abs($var) >= int($target));
    };
    
    ($model:expr, abs($var:ident) <= int($target:expr)) => {
        $crate::post!($model, abs($var) <= int($target));
    };
    
    // Global constraints
    ($model:expr, alldiff([$($vars:ident),+ $(,)?])) => {
        $crate::post!($model, alldiff([$($vars),+]));
    };
    
    // Global constraints with array expressions
    ($model:expr, alldiff($array:expr)) => {
        $crate::post!($model, alldiff($array));
    };
    
    // Global constraints: allequal
    ($model:expr, allequal([$($vars:ident),+ $(,)?])) => {
        $crate::post!($model, allequal([$($vars),+]));
    };
    
    // Global constraints: allequal with array expressions
    ($model:expr, allequal($array:expr)) => {
        $crate::post!($model, allequal($array));
    };
    
    // Element constraint
    ($model:expr, element($array:expr, $index:ident, $value:ident)) => {
        $crate::post!($model, element($array, $index, $value));
    };
    
    // Element constraint with array literal
    ($model:expr, element([$($vars:ident),+ $(,)?], $index:ident, $value:ident)) => {
        $crate::post!($model, element([$($vars),+], $index, $value));
    };
    
    // Count constraint
    ($model:expr, count($vars:expr, $target:expr, $count:ident)) => {
        $crate::post!($model, count($vars, $target, $count));
    };
    
    // Count constraint with array literal
    ($model:expr, count([$($vars:ident),+ $(,)?], $target:expr, $count:ident)) => {
        $crate::post!($model, count([$($vars),+], $target, $count));
    };
    
    // Table constraint
    ($model:expr, table($vars:expr, $tuples:expr)) => {
        $crate::post!($model, table($vars, $tuples));
    };
    
    // Table constraint with array literal
    ($model:expr, table([$($vars:ident),+ $(,)?], $tuples:expr)) => {
        $crate::post!($model, table([$($vars),+], $tuples));
    };

    // Between constraint
    ($model:expr, between($lower:ident, $middle:ident, $upper:ident)) => {
        $crate::post!($model, between($lower, $middle, $upper));
    };

    // Cardinality constraints
    ($model:expr, at_least($vars:expr, $value:expr, $count:expr)) => {
        $crate::post!($model, at_least($vars, $value, $count));
    };

    ($model:expr, at_least([$($vars:ident),+ $(,)?], $value:expr, $count:expr)) => {
        $crate::post!($model, at_least([$($vars),+], $value, $count));
    };

    ($model:expr, at_most($vars:expr, $value:expr, $count:expr)) => {
        $crate::post!($model, at_most($vars, $value, $count));
    };

    ($model:expr, at_most([$($vars:ident),+ $(,)?], $value:expr, $count:expr)) => {
        $crate::post!($model, at_most([$($vars),+], $value, $count));
    };

    ($model:expr, exactly($vars:expr, $value:expr, $count:expr)) => {
        $crate::post!($model, exactly($vars, $value, $count));
    };

    ($model:expr, exactly([$($vars:ident),+ $(,)?], $value:expr, $count:expr)) => {
        $crate::post!($model, exactly([$($vars),+], $value, $count));
    };

    // Conditional constraints
    ($model:expr, if_then($cond_var:ident == $cond_val:expr, $then_var:ident == $then_val:expr)) => {
        $crate::post!($model, if_then($cond_var == $cond_val, $then_var == $then_val));
    };

    ($model:expr, if_then_else($cond_var:ident == $cond_val:expr, $then_var:ident == $then_val:expr, $else_var:ident == $else_val:expr)) => {
        $crate::post!($model, if_then_else($cond_var == $cond_val, $then_var == $then_val, $else_var == $else_val));
    };
    
    // Logical operators - Array syntax
    ($model:expr, and([$($vars:expr),* $(,)?])) => {
        $crate::post!($model, and([$($vars),*]));
    };
    
    ($model:expr, or([$($vars:expr),* $(,)?])) => {
        $crate::post!($model, or([$($vars),*]));
    };
    
    // Logical operators - Variadic syntax (3+ arguments)
    ($model:expr, and($first:expr, $second:expr, $($rest:expr),+ $(,)?)) => {
        $crate::post!($model, and($first, $second, $($rest),*));
    };
    
    ($model:expr, or($first:expr, $second:expr, $($rest:expr),+ $(,)?)) => {
        $crate::post!($model, or($first, $second, $($rest),*));
    };
    
    // Not operator - Array syntax
    ($model:expr, not([$($vars:expr),* $(,)?])) => {
        $crate::post!($model, not([$($vars),*]));
    };
    
    // Logical operators - Traditional 2-argument
    ($model:expr, and($c1:expr, $c2:expr)) => {
        $crate::post!($model, and($c1, $c2));
    };
    
    ($model:expr, or($c1:expr, $c2:expr)) => {
        $crate::post!($model, or($c1, $c2));
    };
    
    ($model:expr, not($c:expr)) => {
        $crate::post!($model, not($c));
    };
    
    // Multiple constraints: handle first one then recurse
    ($model:expr, $var:ident < $target:ident, $($rest:tt)*) => {
        $crate::post!($model, $var < $target);
        $crate::postall_helper!($model, $($rest)*);
    };
    
    ($model:expr, $var:ident <= $target:ident, $($rest:tt)*) => {
        $crate::post!($model, $var <= $target);
        $crate::postall_helper!($model, $($rest)*);
    };
    
    ($model:expr, $var:ident > $target:ident, $($rest:tt)*) => {
        $crate::post!($model, $var > $target);
        $crate::postall_helper!($model, $($rest)*);
    };
    
    ($model:expr, $var:ident >= $target:ident, $($rest:tt)*) => {
        $crate::post!($model, $var >= $target);
        $crate::postall_helper!($model, $($rest)*);
    };
    
    ($model:expr, $var:ident == $target:ident, $($rest:tt)*) => {
        $crate::post!($model, $var == $target);
        $crate::postall_helper!($model, $($rest)*);
    };
    
    ($model:expr, $var:ident != $target:ident, $($rest:tt)*) => {
        $crate::post!($model, $var != $target);
        $crate::postall_helper!($model, $($rest)*);
    };
    
    // Element constraint syntax (multiple)
    ($model:expr, $array:ident[$index:ident] == $value:ident, $($rest:tt)*) => {
        $crate::post!($model, $array[$index] == $value);
        $crate::postall_helper!($model, $($rest)*);
    };
    
    ($model:expr, $value:ident == $array:ident[$index:ident], $($rest:tt)*) => {
        $crate::post!($model, $value == $array[$index]);
        $crate::postall_helper!($model, $($rest)*);
    };
    
    // With constants (multiple)
    ($model:expr, $var:ident < int($target:expr), $($rest:tt)*) => {
        $crate::post!($model, $var < int($target));
        $crate::postall_helper!($model, $($rest)*);
    };
    
    ($model:expr, $var:ident <= int($target:expr), $($rest:tt)*) => {
        $crate::post!($model, $var <= int($target));
        $crate::postall_helper!($model, $($rest)*);
    };
    
    ($model:expr, $var:ident > int($target:expr), $($rest:tt)*) => {
        $crate::post!($model, $var > int($target));
        $crate::postall_helper!($model, $($rest)*);
    };
    
    ($model:expr, $var:ident >= int($target:expr), $($rest:tt)*) => {
        $crate::post!($model, $var >= int($target));
        $crate::postall_helper!($model, $($rest)*);
    };
    
    ($model:expr, $var:ident == int($target:expr), $($rest:tt)*) => {
        $crate::post!($model, $var == int($target));
        $crate::postall_helper!($model, $($rest)*);
    };
    
    ($model:expr, $var:ident != int($target:expr), $($rest:tt)*) => {
        $crate::post!($model, $var != int($target));
        $crate::postall_helper!($model, $($rest)*);
    };
    
    // Arithmetic operations (multiple)
    ($model:expr, $left:ident + $right:ident <= $target:ident, $($rest:tt)*) => {
        $crate::post!($model, $left + $right <= $target);
        $crate::postall_helper!($model, $($rest)*);
    };
    
    ($model:expr, $left:ident + $right:ident == $target:ident, $($rest:tt)*) => {
        $crate::post!($model, $left + $right == $target);
        $crate::postall_helper!($model, $($rest)*);
    };
    
    ($model:expr, $left:ident + $right:ident <= int($target:expr), $($rest:tt)*) => {
        $crate::post!($model, $left + $right <= int($target));
        $crate::postall_helper!($model, $($rest)*);
    };
    
    ($model:expr, $left:ident + $right:ident == int($target:expr), $($rest:tt)*) => {
        $crate::post!($model, $left + $right == int($target));
        $crate::postall_helper!($model, $($rest)*);
    };
    
    // Mathematical functions (multiple)
    ($model:expr, abs($var:ident) >= int($target:expr), $($rest:tt)*) => {
        $crate::post!($model, abs($var) >= int($target));
        $crate::postall_helper!($model, $($rest)*);
    };
    
    ($model:expr, abs($var:ident) <= int($target:expr), $($rest:tt)*) => {
        $crate::post!($model, abs($var) <= int($target));
        $crate::postall_helper!($model, $($rest)*);
    };
    
    // Global constraints (multiple)
    ($model:expr, alldiff([$($vars:ident),+ $(,)?]), $($rest:tt)*) => {
        $crate::post!($model, alldiff([$($vars),+]));
        $crate::postall_helper!($model, $($rest)*);
    };
    
    // Global constraints with array expressions (multiple)
    ($model:expr, alldiff($array:expr), $($rest:tt)*) => {
        $crate::post!($model, alldiff($array));
        $crate::postall_helper!($model, $($rest)*);
    };
    
    // Global constraints: allequal (multiple)
    ($model:expr, allequal([$($vars:ident),+ $(,)?]), $($rest:tt)*) => {
        $crate::post!($model, allequal([$($vars),+]));
        $crate::postall_helper!($model, $($rest)*);
    };
    
    // Global constraints: allequal with array expressions (multiple)
    ($model:expr, allequal($array:expr), $($rest:tt)*) => {
        $crate::post!($model, allequal($array));
        $crate::postall_helper!($model, $($rest)*);
    };
    
    // Element constraint (multiple)
    ($model:expr, element($array:expr, $index:ident, $value:ident), $($rest:tt)*) => {
        $crate::post!($model, element($array, $index, $value));
        $crate::postall_helper!($model, $($rest)*);
    };
    
    // Element constraint with array literal (multiple)
    ($model:expr, element([$($vars:ident),+ $(,)?], $index:ident, $value:ident), $($rest:tt)*) => {
        $crate::post!($model, element([$($vars),+], $index, $value));
        $crate::postall_helper!($model, $($rest)*);
    };
    
    // Table constraint (multiple)
    ($model:expr, table($vars:expr, $tuples:expr), $($rest:tt)*) => {
        $crate::post!($model, table($vars, $tuples));
        $crate::postall_helper!($model, $($rest)*);
    };
    
    // Table constraint with array literal (multiple)
    ($model:expr, table([$($vars:ident),+ $(,)?], $tuples:expr), $($rest:tt)*) => {
        $crate::post!($model, table([$($vars),+], $tuples));
        $crate::postall_helper!($model, $($rest)*);
    };

    // Between constraint (multiple)
    ($model:expr, between($lower:ident, $middle:ident, $upper:ident), $($rest:tt)*) => {
        $crate::post!($model, between($lower, $middle, $upper));
        $crate::postall_helper!($model, $($rest)*);
    };

    // Cardinality constraints (multiple)
    ($model:expr, at_least($vars:expr, $value:expr, $count:expr), $($rest:tt)*) => {
        $crate::post!($model, at_least($vars, $value, $count));
        $crate::postall_helper!($model, $($rest)*);
    };

    ($model:expr, at_least([$($vars:ident),+ $(,)?], $value:expr, $count:expr), $($rest:tt)*) => {
        $crate::post!($model, at_least([$($vars),+], $value, $count));
        $crate::postall_helper!($model, $($rest)*);
    };

    ($model:expr, at_most($vars:expr, $value:expr, $count:expr), $($rest:tt)*) => {
        $crate::post!($model, at_most($vars, $value, $count));
        $crate::postall_helper!($model, $($rest)*);
    };

    ($model:expr, at_most([$($vars:ident),+ $(,)?], $value:expr, $count:expr), $($rest:tt)*) => {
        $crate::post!($model, at_most([$($vars),+], $value, $count));
        $crate::postall_helper!($model, $($rest)*);
    };

    ($model:expr, exactly($vars:expr, $value:expr, $count:expr), $($rest:tt)*) => {
        $crate::post!($model, exactly($vars, $value, $count));
        $crate::postall_helper!($model, $($rest)*);
    };

    ($model:expr, exactly([$($vars:ident),+ $(,)?], $value:expr, $count:expr), $($rest:tt)*) => {
        $crate::post!($model, exactly([$($vars),+], $value, $count));
        $crate::postall_helper!($model, $($rest)*);
    };

    // Conditional constraints (multiple)
    ($model:expr, if_then($cond_var:ident == $cond_val:expr, $then_var:ident == $then_val:expr), $($rest:tt)*) => {
        $crate::post!($model, if_then($cond_var == $cond_val, $then_var == $then_val));
        $crate::postall_helper!($model, $($rest)*);
    };

    ($model:expr, if_then_else($cond_var:ident == $cond_val:expr, $then_var:ident == $then_val:expr, $else_var:ident == $else_val:expr), $($rest:tt)*) => {
        $crate::post!($model, if_then_else($cond_var == $cond_val, $then_var == $then_val, $else_var == $else_val));
        $crate::postall_helper!($model, $($rest)*);
    };
    
    // Logical operators (multiple)
    ($model:expr, and($c1:expr, $c2:expr), $($rest:tt)*) => {
        $crate::post!($model, and($c1, $c2));
        $crate::postall_helper!($model, $($rest)*);
    };
    
    ($model:expr, or($c1:expr, $c2:expr), $($rest:tt)*) => {
        $crate::post!($model, or($c1, $c2));
        $crate::postall_helper!($model, $($rest)*);
    };
    
    ($model:expr, not($c:expr), $($rest:tt)*) => {
        $crate::post!($model, not($c));
        $crate::postall_helper!($model, $($rest)*);
    };
}
