//! Annealing schedule configuration.

use crate::error::{AnnealError, Result};

/// Configuration for a multi-phase annealing schedule.
///
/// Temperature decays geometrically between phases:
/// phase `k` runs at `initial_temperature * alpha^k`.
///
/// # Examples
///
/// ```
/// use u_anneal::AnnealConfig;
///
/// let config = AnnealConfig::default()
///     .with_initial_temperature(10.0)
///     .with_alpha(0.9)
///     .with_steps_per_phase(500)
///     .with_phases(40)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealConfig {
    /// Temperature of the first phase. Must be positive.
    pub initial_temperature: f64,

    /// Multiplicative decay applied after each phase, in (0, 1).
    ///
    /// Typical values: 0.9–0.99. Higher = slower cooling.
    pub alpha: f64,

    /// Number of trials per phase. At least 1.
    pub steps_per_phase: usize,

    /// Number of phases. At least 1.
    pub phases: usize,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,

    /// Verify every candidate keeps the seed's ids.
    pub check_invariants: bool,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 100.0,
            alpha: 0.95,
            steps_per_phase: 100,
            phases: 100,
            seed: None,
            check_invariants: false,
        }
    }
}

impl AnnealConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_steps_per_phase(mut self, n: usize) -> Self {
        self.steps_per_phase = n;
        self
    }

    pub fn with_phases(mut self, n: usize) -> Self {
        self.phases = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_invariant_checks(mut self, enabled: bool) -> Self {
        self.check_invariants = enabled;
        self
    }

    /// Temperature phase `k` (0-indexed) runs at: `T0 * alpha^k`, computed
    /// by the same repeated decay the schedule applies.
    pub fn temperature_at(&self, phase: usize) -> f64 {
        (0..phase).fold(self.initial_temperature, |t, _| decay(t, self.alpha))
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        validate_temperature(self.initial_temperature)?;
        if !(self.alpha > 0.0 && self.alpha < 1.0) {
            return Err(AnnealError::config(format!(
                "alpha must be in (0, 1), got {}",
                self.alpha
            )));
        }
        validate_steps(self.steps_per_phase)?;
        if self.phases < 1 {
            return Err(AnnealError::config("phases must be at least 1"));
        }
        Ok(())
    }
}

/// One geometric cooling step.
///
/// Only a product that underflows to exactly zero is lifted to
/// `f64::MIN_POSITIVE`; subnormal temperatures are kept as is.
pub(crate) fn decay(temperature: f64, alpha: f64) -> f64 {
    let next = temperature * alpha;
    if next > 0.0 {
        next
    } else {
        f64::MIN_POSITIVE
    }
}

/// Accepts any positive temperature, `+inf` included (a pure random walk).
pub(crate) fn validate_temperature(t: f64) -> Result<()> {
    if t.is_nan() || t <= 0.0 {
        return Err(AnnealError::config(format!(
            "temperature must be positive, got {t}"
        )));
    }
    Ok(())
}

pub(crate) fn validate_steps(steps: usize) -> Result<()> {
    if steps < 1 {
        return Err(AnnealError::config("steps_per_phase must be at least 1"));
    }
    Ok(())
}
