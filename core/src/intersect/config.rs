use super::{IntersectError, IntersectResult};
use crate::geometry::EPSILON;
use serde::{Deserialize, Serialize};

/// Tolerances used by the intersection routines.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntersectConfig {
    /// Relative tolerance for geometric comparisons (parallelism, domain
    /// bounds, discriminants, on-curve tests).
    pub epsilon: f64,
    /// Relative distance under which two result points are the same point.
    pub merge_tolerance: f64,
}

impl Default for IntersectConfig {
    fn default() -> Self {
        Self {
            epsilon: EPSILON,
            merge_tolerance: 1e-7,
        }
    }
}

impl IntersectConfig {
    pub fn with_epsilon(epsilon: f64) -> Self {
        Self { epsilon, ..Self::default() }
    }

    /// Parse a JSON object; missing fields take their defaults.
    pub fn from_json(json: &str) -> IntersectResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| IntersectError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> IntersectResult<()> {
        for (name, value) in [("epsilon", self.epsilon), ("merge_tolerance", self.merge_tolerance)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(IntersectError::InvalidConfig(format!(
                    "{} must be a positive finite number, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }

    /// Tolerance for matching quantities recovered from two independently
    /// solved equations. Near tangency the recovered values carry an error
    /// on the order of the square root of the working precision.
    pub fn root_tolerance(&self) -> f64 {
        self.epsilon.sqrt()
    }

    /// Tolerance for a distance measured at geometric `scale`.
    pub fn distance_tolerance(&self, scale: f64) -> f64 {
        self.epsilon * scale.abs().max(1.0)
    }
}
