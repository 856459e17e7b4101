//! `ShatterConfig` + validation.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Invalid tuning values or unreadable config document.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("targeting radius must be positive, got {0}")]
    NonPositiveRadius(f32),

    #[error("inner ratio must be in (0, 1], got {0}")]
    InnerRatioOutOfRange(f32),

    #[error("{name} must be non-negative, got {value}")]
    NegativeDelay { name: &'static str, value: f32 },

    #[error("{name} must be finite and non-negative, got {value}")]
    InvalidSpread { name: &'static str, value: f32 },

    #[error("cool-down ({cooldown}s) must not be shorter than resolution delay ({resolve}s)")]
    CooldownShorterThanResolve { resolve: f32, cooldown: f32 },

    #[error("flight ttl ({flight}) must be positive and shorter than rest ttl ({rest})")]
    FlightTtlOutOfRange { flight: i32, rest: i32 },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Round tuning.
///
/// Все поля имеют default, поэтому JSON может содержать только
/// переопределённые значения (`{"shot_radius": 12.0}`).
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShatterConfig {
    /// Targeting radius R (world units)
    pub shot_radius: f32,
    /// Inner set threshold as a fraction of R (hit if distance < ratio × R)
    pub inner_ratio: f32,
    /// Delay between an accepted fire command and its detachment effects (seconds)
    pub resolve_delay_secs: f32,
    /// Delay after which the fire guard is released (seconds)
    pub cooldown_secs: f32,
    /// Tick count after which a shot piece freezes in its final pose
    pub flight_ttl: i32,
    /// ttl sentinel of a piece at rest ("never times out")
    pub rest_ttl: i32,
    /// Base speed = distance(origin, target) × speed_factor
    pub speed_factor: f32,
    /// Radius of the X/Y disc the hit direction is perturbed with
    pub disc_radius: f32,
    /// Half-range of the uniform Z jitter on the hit direction
    pub z_jitter: f32,
    /// `TargetingState::near_target` threshold on the minimum distance
    pub near_target_distance: f32,
    /// Seed of the round RNG
    pub seed: u64,
}

impl Default for ShatterConfig {
    fn default() -> Self {
        Self {
            shot_radius: 8.0,
            inner_ratio: 0.8,
            resolve_delay_secs: 0.5,
            cooldown_secs: 0.8,
            flight_ttl: 12_000,
            rest_ttl: 100_000,
            speed_factor: 4.0,
            disc_radius: 1.0,
            z_jitter: 0.2,
            near_target_distance: 20.0,
            seed: 42,
        }
    }
}

impl ShatterConfig {
    /// Parse a (partial) JSON document and validate it.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: ShatterConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.shot_radius > 0.0) {
            return Err(ConfigError::NonPositiveRadius(self.shot_radius));
        }
        if !(self.inner_ratio > 0.0 && self.inner_ratio <= 1.0) {
            return Err(ConfigError::InnerRatioOutOfRange(self.inner_ratio));
        }
        for (name, value) in [
            ("resolve_delay_secs", self.resolve_delay_secs),
            ("cooldown_secs", self.cooldown_secs),
        ] {
            if !(value >= 0.0) {
                return Err(ConfigError::NegativeDelay { name, value });
            }
        }
        if self.cooldown_secs < self.resolve_delay_secs {
            return Err(ConfigError::CooldownShorterThanResolve {
                resolve: self.resolve_delay_secs,
                cooldown: self.cooldown_secs,
            });
        }
        for (name, value) in [
            ("speed_factor", self.speed_factor),
            ("disc_radius", self.disc_radius),
            ("z_jitter", self.z_jitter),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::InvalidSpread { name, value });
            }
        }
        if self.flight_ttl <= 0 || self.flight_ttl >= self.rest_ttl {
            return Err(ConfigError::FlightTtlOutOfRange {
                flight: self.flight_ttl,
                rest: self.rest_ttl,
            });
        }
        Ok(())
    }

    /// Inner set threshold in world units.
    pub fn inner_radius(&self) -> f32 {
        self.shot_radius * self.inner_ratio
    }
}
