use serde::{Deserialize, Serialize};

/// Parameters for distance matrix preparation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Floor for reported distances, prevents zero distances from
    /// collapsing distance-weighted neighbor averaging
    pub min_dist: f64,

    /// Scale factor applied to the largest finite distance to derive
    /// the ceiling/self-distance sentinel
    pub max_dist_multiplier: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_dist: 1e-6,
            max_dist_multiplier: 1e6,
        }
    }
}

impl Config {
    pub fn new(min_dist: f64, max_dist_multiplier: f64) -> Self {
        Self {
            min_dist,
            max_dist_multiplier,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if !(self.min_dist > 0.0 && self.min_dist.is_finite()) {
            return Err("min_dist must be positive and finite".to_string());
        }

        if !(self.max_dist_multiplier > 0.0 && self.max_dist_multiplier.is_finite()) {
            return Err("max_dist_multiplier must be positive and finite".to_string());
        }

        Ok(())
    }
}
