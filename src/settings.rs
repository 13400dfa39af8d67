//! Policy selection for the mandala core
//!
//! The three historical program variants differ only in these switches.
//! The values are hardcoded; nothing loads them from disk.

use serde::{Deserialize, Serialize};

/// How the radius turns around at its bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DirectionPolicy {
    /// Add a signed step every tick, negate it once the radius leaves its range
    #[default]
    SignFlip,
    /// Keep a positive step and toggle a direction flag at the bounds
    Reflect,
}

impl DirectionPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            DirectionPolicy::SignFlip => "sign-flip",
            DirectionPolicy::Reflect => "reflect",
        }
    }
}

/// How much the phase advances per tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TimestepPolicy {
    /// Constant step per tick
    #[default]
    Fixed,
    /// Elapsed seconds times a multiplier drawn at reset
    DeltaScaled,
}

impl TimestepPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimestepPolicy::Fixed => "fixed",
            TimestepPolicy::DeltaScaled => "delta-scaled",
        }
    }
}

/// How the loop is paced against wall-clock time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PacingPolicy {
    /// Tick every iteration, then sleep to the next frame boundary
    #[default]
    Capped,
    /// Tick only once more than one frame interval has elapsed
    Threshold,
}

impl PacingPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            PacingPolicy::Capped => "capped",
            PacingPolicy::Threshold => "threshold",
        }
    }
}

/// Full configuration for one driver instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MandalaConfig {
    pub direction: DirectionPolicy,
    pub timestep: TimestepPolicy,
    pub pacing: PacingPolicy,
    /// Cosmetic multiplier on the per-tick displacement
    pub scale: f32,
    /// Fixed RNG seed (None = seed from wall-clock time)
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for MandalaConfig {
    fn default() -> Self {
        Self {
            direction: DirectionPolicy::SignFlip,
            timestep: TimestepPolicy::Fixed,
            pacing: PacingPolicy::Capped,
            scale: 1.0,
            seed: None,
        }
    }
}

impl MandalaConfig {
    /// Same configuration with a reproducible seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// One-line summary for the startup log
    pub fn describe(&self) -> String {
        format!(
            "direction={} timestep={} pacing={} scale={}",
            self.direction.as_str(),
            self.timestep.as_str(),
            self.pacing.as_str(),
            self.scale
        )
    }
}
