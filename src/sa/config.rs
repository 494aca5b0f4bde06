//! Annealing configuration and cooling schedule.

use crate::error::{KnapsackError, Result};

/// Exponential cooling schedule with a hard iteration cutoff.
///
/// `T(t) = T_0 * exp(-rate * t)` for `t < limit`, and `0` afterwards.
/// The temperature is non-increasing in `t` and only reaches exactly zero
/// past the cutoff or through floating-point underflow.
///
/// # Examples
///
/// ```
/// use u_knapsack::sa::AnnealConfig;
///
/// let schedule = AnnealConfig::default().schedule();
/// assert_eq!(schedule.temperature(0), 30.0);
/// assert_eq!(schedule.temperature(10_000), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoolingSchedule {
    /// Temperature at `t = 0`.
    pub initial_temperature: f64,
    /// Exponential decay rate. Higher = faster cooling.
    pub cooling_rate: f64,
    /// First iteration at which the temperature is forced to zero.
    pub iteration_limit: usize,
}

impl CoolingSchedule {
    /// Temperature at iteration `t`.
    pub fn temperature(&self, t: usize) -> f64 {
        if t >= self.iteration_limit {
            return 0.0;
        }
        self.initial_temperature * (-self.cooling_rate * t as f64).exp()
    }
}

/// Configuration for a knapsack annealing run.
///
/// # Examples
///
/// ```
/// use u_knapsack::sa::AnnealConfig;
///
/// let config = AnnealConfig::default()
///     .with_initial_temperature(50.0)
///     .with_cooling_rate(0.01)
///     .with_iteration_limit(2_000)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AnnealConfig {
    /// Starting temperature. Must be positive.
    pub initial_temperature: f64,

    /// Decay rate of the exponential schedule.
    ///
    /// With the default `0.98` the temperature underflows to zero after
    /// roughly 760 iterations, which ends the run before the iteration cap.
    pub cooling_rate: f64,

    /// Hard iteration budget, independent of convergence.
    pub iteration_limit: usize,

    /// Maximum random draws when sampling the starting selection.
    pub init_max_attempts: usize,

    /// Random seed for reproducibility. `None` draws a fresh seed.
    pub seed: Option<u64>,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 30.0,
            cooling_rate: 0.98,
            iteration_limit: 10_000,
            init_max_attempts: 20,
            seed: None,
        }
    }
}

impl AnnealConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    pub fn with_iteration_limit(mut self, n: usize) -> Self {
        self.iteration_limit = n;
        self
    }

    pub fn with_init_max_attempts(mut self, n: usize) -> Self {
        self.init_max_attempts = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// The cooling schedule described by this configuration.
    pub fn schedule(&self) -> CoolingSchedule {
        CoolingSchedule {
            initial_temperature: self.initial_temperature,
            cooling_rate: self.cooling_rate,
            iteration_limit: self.iteration_limit,
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if !self.initial_temperature.is_finite() || self.initial_temperature <= 0.0 {
            return Err(KnapsackError::InvalidConfig(format!(
                "initial_temperature must be positive and finite, got {}",
                self.initial_temperature
            )));
        }
        if !self.cooling_rate.is_finite() || self.cooling_rate < 0.0 {
            return Err(KnapsackError::InvalidConfig(format!(
                "cooling_rate must be non-negative and finite, got {}",
                self.cooling_rate
            )));
        }
        if self.init_max_attempts == 0 {
            return Err(KnapsackError::InvalidConfig(
                "init_max_attempts must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AnnealConfig::default();
        assert!((config.initial_temperature - 30.0).abs() < 1e-12);
        assert!((config.cooling_rate - 0.98).abs() < 1e-12);
        assert_eq!(config.iteration_limit, 10_000);
        assert_eq!(config.init_max_attempts, 20);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_validate_ok() {
        assert!(AnnealConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_bad_temperature() {
        for t in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let config = AnnealConfig::default().with_initial_temperature(t);
            assert!(
                matches!(config.validate(), Err(KnapsackError::InvalidConfig(_))),
                "temperature {t} should be rejected"
            );
        }
    }

    #[test]
    fn test_validate_bad_cooling_rate() {
        let config = AnnealConfig::default().with_cooling_rate(-0.1);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_attempts() {
        let config = AnnealConfig::default().with_init_max_attempts(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_schedule_starts_at_initial() {
        let schedule = AnnealConfig::default().schedule();
        assert_eq!(schedule.temperature(0), 30.0);
        let expected = 30.0 * (-0.98f64).exp();
        assert!((schedule.temperature(1) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_schedule_zero_past_limit() {
        let schedule = AnnealConfig::default()
            .with_cooling_rate(0.0)
            .with_iteration_limit(5)
            .schedule();
        assert_eq!(schedule.temperature(4), 30.0);
        assert_eq!(schedule.temperature(5), 0.0);
        assert_eq!(schedule.temperature(500), 0.0);
    }

    #[test]
    fn test_schedule_underflows_to_zero() {
        let schedule = AnnealConfig::default().schedule();
        assert_eq!(schedule.temperature(2_000), 0.0);
    }

    #[test]
    fn test_schedule_non_increasing() {
        let schedule = AnnealConfig::default().with_cooling_rate(0.01).schedule();
        let mut prev = schedule.temperature(0);
        for t in 1..12_000 {
            let cur = schedule.temperature(t);
            assert!(cur <= prev, "temperature rose at t={t}: {prev} -> {cur}");
            prev = cur;
        }
    }
}
