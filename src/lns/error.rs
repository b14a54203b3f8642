//! Errors raised while constructing an [`crate::lns::LnsEngine`].
//!
//! The steady-state driver loop never returns `Err`: absence of a solution, a stalled
//! neighbourhood, a fired stop condition, and even an infeasible root (spec §7) are
//! all reported through statistics and a `None` from `next()`, per the taxonomy this
//! module exists to cover only the construction-time slice of — invalid options and
//! detectable model contract violations, neither of which a caller can recover from
//! by simply calling `next()` again.

/// Failure modes that can occur while building an [`crate::lns::LnsEngine`].
#[derive(Debug, Clone, PartialEq)]
pub enum LnsError {
    /// An option value is out of its valid range (e.g. `min_intensity > max_intensity`).
    InvalidOptions {
        /// Description of what makes the options invalid.
        message: String,
        /// Name of the offending field, if a single one is to blame.
        field: Option<String>,
    },

    /// The model violated its contract in a way detectable outside the hot path
    /// (e.g. `relax` reporting more freed variables than `relaxable_vars()` allows).
    ModelContractViolation {
        /// Description of the violation.
        message: String,
        /// Additional context, if available.
        context: Option<String>,
    },
}

impl std::fmt::Display for LnsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidOptions { message, field } => {
                write!(f, "invalid LNS options: {}", message)?;
                if let Some(field) = field {
                    write!(f, " (field: {})", field)?;
                }
                Ok(())
            }
            Self::ModelContractViolation { message, context } => {
                write!(f, "model contract violation: {}", message)?;
                if let Some(ctx) = context {
                    write!(f, " ({})", ctx)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for LnsError {}

impl LnsError {
    /// Build an [`LnsError::InvalidOptions`] without naming a specific field.
    pub fn invalid_options(message: impl Into<String>) -> Self {
        Self::InvalidOptions { message: message.into(), field: None }
    }

    /// Build an [`LnsError::InvalidOptions`] naming the offending field.
    pub fn invalid_option_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::InvalidOptions { message: message.into(), field: Some(field.into()) }
    }

    /// Build an [`LnsError::ModelContractViolation`].
    pub fn model_contract_violation(message: impl Into<String>) -> Self {
        Self::ModelContractViolation { message: message.into(), context: None }
    }
}

/// Convenience alias for results produced while constructing the LNS engine.
pub type LnsResult<T> = Result<T, LnsError>;
