//! Predictor settings

use crate::error::{PredictError, Result};
use serde::{Deserialize, Serialize};

/// Reference trial count
pub const DEFAULT_TRIALS: u32 = 5000;

/// Reference seed
pub const DEFAULT_SEED: u64 = 42;

/// Slot weighting parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightParams {
    /// Baseline weight of every candidate
    pub base: f64,
    /// Bonus per step of an unbroken positional chain
    pub chain: f64,
    /// Coefficient of the squared slot distance penalty
    pub distance: f64,
    /// Lower bound of every weight, must be positive
    pub floor: f64,
}

impl Default for WeightParams {
    fn default() -> Self {
        Self {
            base: 1.0,
            chain: 2.5,
            distance: 0.35,
            floor: 0.01,
        }
    }
}

impl WeightParams {
    pub fn validate(&self) -> Result<()> {
        let checks = [
            (self.base.is_finite() && self.base > 0.0, "base weight must be positive"),
            (self.chain.is_finite() && self.chain >= 0.0, "chain weight must be non-negative"),
            (
                self.distance.is_finite() && self.distance >= 0.0,
                "distance weight must be non-negative",
            ),
            (self.floor.is_finite() && self.floor > 0.0, "weight floor must be positive"),
        ];

        match checks.iter().find(|(ok, _)| !ok) {
            Some((_, msg)) => Err(PredictError::InvalidConfig(msg.to_string())),
            None => Ok(()),
        }
    }
}

/// What to do with placeholder ("?" or blank) pool rows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnsetPolicy {
    /// Drop them before building the registry
    #[default]
    Exclude,
    /// Register them as talents under their placeholder name
    Keep,
}

/// Complete predictor configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictorConfig {
    pub weights: WeightParams,
    pub trials: u32,
    pub seed: u64,
    pub unset_policy: UnsetPolicy,
    /// Number of independent random streams; 1 reproduces the sequential run
    pub workers: usize,
}

impl Default for PredictorConfig {
    fn default() -> Self {
        Self {
            weights: WeightParams::default(),
            trials: DEFAULT_TRIALS,
            seed: DEFAULT_SEED,
            unset_policy: UnsetPolicy::default(),
            workers: 1,
        }
    }
}

impl PredictorConfig {
    /// Parse a JSON config; missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: PredictorConfig = serde_json::from_str(json)
            .map_err(|e| PredictError::Deserialization(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.weights.validate()?;
        if self.workers == 0 {
            return Err(PredictError::InvalidConfig(
                "workers must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
