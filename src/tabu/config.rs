//! Tabu Search configuration.

use crate::error::{Result, TimetableError};

/// Configuration parameters for Tabu Search.
///
/// # Examples
///
/// ```
/// use u_timetable::tabu::TabuConfig;
///
/// let config = TabuConfig::default()
///     .with_max_iterations(1000)
///     .with_tabu_tenure(7);
/// assert_eq!(config.max_iterations, 1000);
/// assert_eq!(config.tabu_tenure, 7);
/// assert_eq!(config.neighborhood_size, 30);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TabuConfig {
    /// Number of iterations to run.
    pub max_iterations: usize,
    /// Maximum number of signatures kept in the tabu memory.
    pub tabu_tenure: usize,
    /// Neighbors sampled per iteration.
    pub neighborhood_size: usize,
}

impl Default for TabuConfig {
    fn default() -> Self {
        Self {
            max_iterations: 200,
            tabu_tenure: 10,
            neighborhood_size: 30,
        }
    }
}

impl TabuConfig {
    /// Sets the number of iterations.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the tabu memory size.
    pub fn with_tabu_tenure(mut self, tenure: usize) -> Self {
        self.tabu_tenure = tenure;
        self
    }

    /// Sets the number of neighbors sampled per iteration.
    pub fn with_neighborhood_size(mut self, n: usize) -> Self {
        self.neighborhood_size = n;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.neighborhood_size == 0 {
            return Err(TimetableError::InvalidConfig(
                "neighborhood_size must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
