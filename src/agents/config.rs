//! Learning parameters for the TD agent.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// TD agent configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TdConfig {
    /// Probability of picking a uniformly random move instead of the
    /// highest-valued one. Must be in [0, 1].
    pub exploration_rate: f64,

    /// Step size of each value update. Must be in (0, 1].
    pub learning_rate: f64,

    /// Discount applied to the successor's value. Must be in [0, 1].
    pub discount: f64,
}

impl Default for TdConfig {
    fn default() -> Self {
        Self {
            exploration_rate: 0.2,
            learning_rate: 0.2,
            discount: 0.9,
        }
    }
}

impl TdConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_exploration_rate(mut self, rate: f64) -> Self {
        self.exploration_rate = rate;
        self
    }

    pub fn with_learning_rate(mut self, rate: f64) -> Self {
        self.learning_rate = rate;
        self
    }

    pub fn with_discount(mut self, discount: f64) -> Self {
        self.discount = discount;
        self
    }

    /// Greedy copy for evaluation and interactive play.
    pub fn greedy(self) -> Self {
        self.with_exploration_rate(0.0)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.exploration_rate) {
            return Err(ConfigError::Validation(
                "agent.exploration_rate must be in [0, 1]".into(),
            ));
        }
        if self.learning_rate <= 0.0 || self.learning_rate > 1.0 {
            return Err(ConfigError::Validation(
                "agent.learning_rate must be in (0, 1]".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.discount) {
            return Err(ConfigError::Validation(
                "agent.discount must be in [0, 1]".into(),
            ));
        }
        Ok(())
    }
}
