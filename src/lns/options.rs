//! Typed configuration for the LNS meta-engine.
//!
//! Mirrors [`crate::utils::config::SolverConfig`]'s builder style: a `Default` impl
//! with sensible values and `with_*` methods that consume and return `Self`.

use std::time::Duration;

use super::error::{LnsError, LnsResult};

/// Acceptance-filter mode applied to each repaired neighbour.
///
/// -lns_constraint_type {none,loose,strict,sa}, default strict
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstrainType {
    /// No acceptance constraint is posted; any repaired neighbour is a candidate.
    None,
    /// Neighbour must be no worse than `current` (non-strict inequality).
    Loose,
    /// Neighbour must be strictly better than `current`.
    Strict,
    /// Simulated-annealing acceptance: `current`'s cost plus a temperature-scaled
    /// random slack bounds the neighbour.
    Sa,
}

/// Options bundle for [`crate::lns::LnsEngine`].
///
/// # Examples
///
/// ```
/// use selen::lns::options::{LnsOptions, ConstrainType};
///
/// let opts = LnsOptions::default()
///     .with_constrain_type(ConstrainType::Sa)
///     .with_sa_start_temperature(10.0)
///     .with_sa_cooling_rate(0.9);
/// ```
#[derive(Debug, Clone)]
pub struct LnsOptions {
    /// Per-neighbourhood time budget per freed variable.
    ///
    /// -lns_time_per_variable <real ms>, default 10.0
    pub time_per_variable: Duration,

    /// Acceptance-filter mode. Default `Strict` (differs from the Gecode reference
    /// implementation's default of `None` — see DESIGN.md).
    pub constrain_type: ConstrainType,

    /// Non-improving iterations tolerated before intensity increases.
    ///
    /// -lns_max_iterations_per_intensity <uint>, default 10
    pub max_iterations_per_intensity: u32,

    /// Lower bound of the intensity ladder.
    ///
    /// -lns_min_intensity <uint>, default 1
    pub min_intensity: u32,

    /// Upper bound of the intensity ladder.
    ///
    /// -lns_max_intensity <uint>, default 5
    pub max_intensity: u32,

    /// Initial simulated-annealing temperature.
    ///
    /// -lns_sa_start_temperature <real>, default 1.0
    pub sa_start_temperature: f64,

    /// Temperature multiplier applied per cooling step, in (0, 1).
    ///
    /// -lns_sa_cooling_rate <real in (0,1)>, default 0.99
    pub sa_cooling_rate: f64,

    /// Accepted-neighbour threshold that triggers a cooling step.
    ///
    /// -lns_sa_neighbors_accepted <uint>, default 100
    pub sa_neighbors_accepted: u32,

    /// Seed for the driver's PRNG. `None` seeds from OS entropy (non-reproducible);
    /// `Some(seed)` gives deterministic `next()` sequences (spec.md R2).
    pub seed: Option<u64>,

    /// Whether clones should be made under the assumption of single-threaded use.
    /// Present for interface fidelity with the Gecode reference implementation's
    /// `shared` flag; `selen::search::Space::clone` has no distinct threaded mode, so
    /// this is otherwise inert.
    pub shared: bool,
}

impl Default for LnsOptions {
    fn default() -> Self {
        Self {
            time_per_variable: Duration::from_millis(10),
            constrain_type: ConstrainType::Strict,
            max_iterations_per_intensity: 10,
            min_intensity: 1,
            max_intensity: 5,
            sa_start_temperature: 1.0,
            sa_cooling_rate: 0.99,
            sa_neighbors_accepted: 100,
            seed: None,
            shared: true,
        }
    }
}

impl LnsOptions {
    /// Set the per-freed-variable time budget.
    #[must_use]
    pub fn with_time_per_variable(mut self, time_per_variable: Duration) -> Self {
        self.time_per_variable = time_per_variable;
        self
    }

    /// Set the acceptance-filter mode.
    #[must_use]
    pub fn with_constrain_type(mut self, constrain_type: ConstrainType) -> Self {
        self.constrain_type = constrain_type;
        self
    }

    /// Set how many non-improving iterations are tolerated before escalating intensity.
    #[must_use]
    pub fn with_max_iterations_per_intensity(mut self, max_iterations_per_intensity: u32) -> Self {
        self.max_iterations_per_intensity = max_iterations_per_intensity;
        self
    }

    /// Set the intensity ladder bounds.
    #[must_use]
    pub fn with_intensity_bounds(mut self, min_intensity: u32, max_intensity: u32) -> Self {
        self.min_intensity = min_intensity;
        self.max_intensity = max_intensity;
        self
    }

    /// Set the initial SA temperature.
    #[must_use]
    pub fn with_sa_start_temperature(mut self, sa_start_temperature: f64) -> Self {
        self.sa_start_temperature = sa_start_temperature;
        self
    }

    /// Set the SA cooling rate, expected in (0, 1).
    #[must_use]
    pub fn with_sa_cooling_rate(mut self, sa_cooling_rate: f64) -> Self {
        self.sa_cooling_rate = sa_cooling_rate;
        self
    }

    /// Set the accepted-neighbour threshold that triggers cooling.
    #[must_use]
    pub fn with_sa_neighbors_accepted(mut self, sa_neighbors_accepted: u32) -> Self {
        self.sa_neighbors_accepted = sa_neighbors_accepted;
        self
    }

    /// Set a deterministic PRNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validate the bundle, catching the mistakes that would otherwise surface as a
    /// confusing panic or an infinite-looking stall deep in the driver.
    pub fn validate(&self) -> LnsResult<()> {
        if self.min_intensity == 0 {
            return Err(LnsError::invalid_option_field(
                "min_intensity must be at least 1",
                "min_intensity",
            ));
        }
        if self.min_intensity > self.max_intensity {
            return Err(LnsError::invalid_option_field(
                "min_intensity must not exceed max_intensity",
                "min_intensity",
            ));
        }
        if !(0.0..1.0).contains(&self.sa_cooling_rate) {
            return Err(LnsError::invalid_option_field(
                "sa_cooling_rate must lie in (0, 1)",
                "sa_cooling_rate",
            ));
        }
        if self.sa_start_temperature <= 0.0 {
            return Err(LnsError::invalid_option_field(
                "sa_start_temperature must be positive",
                "sa_start_temperature",
            ));
        }
        Ok(())
    }
}
