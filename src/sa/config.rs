//! SA configuration.

use crate::error::{Result, TimetableError};

/// Configuration for the Simulated Annealing stage.
///
/// Temperature starts at `initial_temperature` and is multiplied by
/// `alpha` after every `iterations_per_temperature` iterations. The stage
/// ends once the temperature is at or below `min_temperature`.
///
/// # Examples
///
/// ```
/// use u_timetable::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_initial_temperature(500.0)
///     .with_alpha(0.9)
///     .with_iterations_per_temperature(50);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.min_temperature, 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SaConfig {
    /// Initial temperature `T0`. Higher values allow more exploration.
    pub initial_temperature: f64,

    /// The stage stops when the temperature drops to this value or below.
    pub min_temperature: f64,

    /// Geometric cooling factor in (0, 1): `T_{k+1} = alpha * T_k`.
    pub alpha: f64,

    /// Number of iterations at each temperature level.
    pub iterations_per_temperature: usize,

    /// Hard ceiling on total iterations. 0 = no ceiling.
    pub max_iterations: usize,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 1000.0,
            min_temperature: 1.0,
            alpha: 0.95,
            iterations_per_temperature: 100,
            max_iterations: 0,
        }
    }
}

impl SaConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_iterations_per_temperature(mut self, n: usize) -> Self {
        self.iterations_per_temperature = n;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Number of temperature levels a full run visits, 0 for an invalid config.
    ///
    /// Computed in closed form as `ceil(ln(min / initial) / ln(alpha))`, so
    /// it ignores `max_iterations`.
    pub fn temperature_levels(&self) -> usize {
        if self.validate().is_err() || self.initial_temperature <= self.min_temperature {
            return 0;
        }
        let levels = (self.min_temperature / self.initial_temperature).ln() / self.alpha.ln();
        levels.ceil() as usize
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.initial_temperature <= 0.0 || !self.initial_temperature.is_finite() {
            return Err(TimetableError::InvalidConfig(
                "initial_temperature must be positive and finite".into(),
            ));
        }
        if self.min_temperature <= 0.0 || self.min_temperature.is_nan() {
            return Err(TimetableError::InvalidConfig(
                "min_temperature must be positive".into(),
            ));
        }
        if self.alpha <= 0.0 || self.alpha >= 1.0 || self.alpha.is_nan() {
            return Err(TimetableError::InvalidConfig(format!(
                "alpha must be in (0, 1), got {}",
                self.alpha
            )));
        }
        if self.iterations_per_temperature == 0 {
            return Err(TimetableError::InvalidConfig(
                "iterations_per_temperature must be at least 1".into(),
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
        let config = SaConfig::default();
        assert!((config.initial_temperature - 1000.0).abs() < 1e-10);
        assert!((config.min_temperature - 1.0).abs() < 1e-10);
        assert!((config.alpha - 0.95).abs() < 1e-10);
        assert_eq!(config.iterations_per_temperature, 100);
        assert_eq!(config.max_iterations, 0);
    }

    #[test]
    fn test_validate_ok() {
        assert!(SaConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_bad_temperature() {
        let config = SaConfig::default().with_initial_temperature(-1.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_bad_alpha() {
        assert!(SaConfig::default().with_alpha(1.0).validate().is_err());
        assert!(SaConfig::default().with_alpha(0.0).validate().is_err());
        assert!(SaConfig::default().with_alpha(f64::NAN).validate().is_err());
    }

    #[test]
    fn test_validate_zero_inner_loop() {
        let config = SaConfig::default().with_iterations_per_temperature(0);
        assert!(matches!(
            config.validate(),
            Err(TimetableError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_temperature_levels() {
        // 1000 * 0.95^k <= 1  =>  k = 135
        assert_eq!(SaConfig::default().temperature_levels(), 135);
        let cold = SaConfig::default().with_initial_temperature(1.0);
        assert_eq!(cold.temperature_levels(), 0);
    }

    #[test]
    fn test_temperature_levels_slow_cooling_is_cheap() {
        let slow = SaConfig::default().with_alpha(1.0 - 1e-9);
        // ln(1000) / 1e-9, roughly 6.9e9 levels.
        assert!(slow.temperature_levels() > 1_000_000_000);
    }
}
