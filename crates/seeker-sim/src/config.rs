//! Simulation configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use seeker_ai::PursuitProfile;
use seeker_core::fixed::{units_in_range, Fixed, FRACUNIT};

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// RNG seed for cosmetic jitter. Same seed = same simulation.
    pub seed: u64,
    /// Size of one map unit relative to normal scale.
    pub map_scale: Fixed,
    /// Arena floor height, in map units.
    pub floor_z: i32,
    /// Arena ceiling height, in map units.
    pub ceiling_z: i32,
    pub profile: PursuitProfile,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            map_scale: FRACUNIT,
            floor_z: 0,
            ceiling_z: 4096,
            profile: PursuitProfile::default(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("map scale must be positive, got {0}")]
    MapScale(Fixed),
    #[error("arena floor {floor} is not below ceiling {ceiling}")]
    Arena { floor: i32, ceiling: i32 },
    #[error("{field} {value} is outside the map range")]
    OutOfRange { field: &'static str, value: i32 },
}

impl SimConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.map_scale <= 0 {
            return Err(ConfigError::MapScale(self.map_scale));
        }
        for (field, value) in [("floor_z", self.floor_z), ("ceiling_z", self.ceiling_z)] {
            if !units_in_range(value) {
                return Err(ConfigError::OutOfRange { field, value });
            }
        }
        if self.floor_z >= self.ceiling_z {
            return Err(ConfigError::Arena {
                floor: self.floor_z,
                ceiling: self.ceiling_z,
            });
        }
        Ok(())
    }
}
