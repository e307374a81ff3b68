//! Hybrid pipeline configuration.

use crate::cost::DEFAULT_HARD_WEIGHT;
use crate::error::{Result, TimetableError};
use crate::sa::SaConfig;
use crate::tabu::TabuConfig;

/// Configuration of a full construction + SA + tabu run.
///
/// # Examples
///
/// ```
/// use u_timetable::hybrid::HybridConfig;
/// use u_timetable::sa::SaConfig;
/// use u_timetable::tabu::TabuConfig;
///
/// let config = HybridConfig::default()
///     .with_seed(7)
///     .with_sa(SaConfig::default().with_alpha(0.9))
///     .with_tabu(TabuConfig::default().with_max_iterations(50));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HybridConfig {
    /// Annealing stage parameters.
    pub sa: SaConfig,
    /// Tabu stage parameters.
    pub tabu: TabuConfig,
    /// Seed of the single random stream shared by all stages.
    pub seed: u64,
    /// Multiplier applied to each hard violation when scoring.
    pub hard_weight: f64,
}

impl Default for HybridConfig {
    fn default() -> Self {
        Self {
            sa: SaConfig::default(),
            tabu: TabuConfig::default(),
            seed: 42,
            hard_weight: DEFAULT_HARD_WEIGHT,
        }
    }
}

impl HybridConfig {
    pub fn with_sa(mut self, sa: SaConfig) -> Self {
        self.sa = sa;
        self
    }

    pub fn with_tabu(mut self, tabu: TabuConfig) -> Self {
        self.tabu = tabu;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_hard_weight(mut self, weight: f64) -> Self {
        self.hard_weight = weight;
        self
    }

    /// Validates this config and both stage configs.
    pub fn validate(&self) -> Result<()> {
        if self.hard_weight <= 0.0 || !self.hard_weight.is_finite() {
            return Err(TimetableError::InvalidConfig(format!(
                "hard_weight must be positive and finite, got {}",
                self.hard_weight
            )));
        }
        self.sa.validate()?;
        self.tabu.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = HybridConfig::default();
        assert_eq!(config.seed, 42);
        assert_eq!(config.hard_weight, 100.0);
        assert_eq!(config.sa, SaConfig::default());
        assert_eq!(config.tabu, TabuConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_nested_validation() {
        let bad_sa = HybridConfig::default().with_sa(SaConfig::default().with_alpha(1.2));
        assert!(bad_sa.validate().is_err());

        let bad_tabu =
            HybridConfig::default().with_tabu(TabuConfig::default().with_neighborhood_size(0));
        assert!(bad_tabu.validate().is_err());

        let bad_weight = HybridConfig::default().with_hard_weight(0.0);
        assert!(bad_weight.validate().is_err());
    }
}
