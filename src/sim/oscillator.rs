//! The mandala oscillator
//!
//! A point that drifts by `(sin(phase), cos(phase)) * radius` each tick while
//! the radius swings between 0 and its origin value. The phase winds forward
//! forever, so the drift curls into loops that shrink and grow with the radius.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rng::RandomSource;
use crate::consts::*;
use crate::settings::{DirectionPolicy, MandalaConfig, TimestepPolicy};

/// Radius swing direction for the reflect policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Direction {
    /// Radius is drawn down toward 0 (`reversed = false`)
    #[default]
    Expanding,
    /// Radius is pushed back up to its origin (`reversed = true`)
    Contracting,
}

impl Direction {
    pub fn is_reversed(&self) -> bool {
        matches!(self, Direction::Contracting)
    }
}

/// Position and motion parameters of the drifting point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OscillatorState {
    /// Screen-pixel position, unconstrained
    pub position: Vec2,
    /// Current swing amplitude
    pub radius: f32,
    /// Upper bound of the swing, always > 0
    pub radius_origin: f32,
    /// Per-tick radius change (signed under sign-flip)
    pub radius_step: f32,
    /// Accumulated angle
    pub phase: f32,
    /// Multiplier for the delta-scaled timestep
    pub phase_rate: f32,
    pub direction: Direction,
}

impl OscillatorState {
    pub fn new(config: &MandalaConfig, rng: &mut RandomSource) -> Self {
        let mut state = Self {
            position: Vec2::new(START_X, START_Y),
            radius: 0.0,
            radius_origin: 0.0,
            radius_step: 0.0,
            phase: 0.0,
            phase_rate: 0.0,
            direction: Direction::Expanding,
        };
        state.reset(config, rng);
        state
    }

    /// Draw fresh parameters and return to the start point
    pub fn reset(&mut self, config: &MandalaConfig, rng: &mut RandomSource) {
        self.radius_origin = rng.uniform_int(RADIUS_ORIGIN_MIN, RADIUS_ORIGIN_MAX) as f32;
        self.radius = self.radius_origin;

        let step = rng.uniform_unit();
        self.radius_step = match config.direction {
            DirectionPolicy::SignFlip => -step,
            DirectionPolicy::Reflect => step,
        };

        self.phase_rate = rng.uniform_int(PHASE_RATE_MIN, PHASE_RATE_MAX) as f32;
        self.phase = 0.0;
        self.direction = Direction::Expanding;
        self.position = Vec2::new(START_X, START_Y);

        log::debug!(
            "Oscillator reset: radius_origin={} radius_step={:.4} phase_rate={}",
            self.radius_origin,
            self.radius_step,
            self.phase_rate
        );
    }

    /// Advance one tick and return the new position
    pub fn step(&mut self, config: &MandalaConfig, delta_ms: f64) -> Vec2 {
        self.position += Self::displacement(self.phase, self.radius, config.scale);

        self.phase += match config.timestep {
            TimestepPolicy::Fixed => FIXED_PHASE_STEP,
            TimestepPolicy::DeltaScaled => (delta_ms.max(0.0) / 1000.0) as f32 * self.phase_rate,
        };

        match config.direction {
            DirectionPolicy::SignFlip => self.sign_flip(),
            DirectionPolicy::Reflect => self.reflect(),
        }

        self.position
    }

    /// Offset applied to the position for a given phase and radius
    #[inline]
    pub fn displacement(phase: f32, radius: f32, scale: f32) -> Vec2 {
        Vec2::new(phase.sin(), phase.cos()) * radius * scale
    }

    fn sign_flip(&mut self) {
        self.radius += self.radius_step;
        // Landing on a bound counts as crossing it
        if self.radius <= 0.0 || self.radius >= self.radius_origin {
            self.radius_step = -self.radius_step;
        }
    }

    fn reflect(&mut self) {
        let step = self.radius_step.abs();
        match self.direction {
            Direction::Expanding => {
                if self.radius > 0.0 {
                    self.radius = (self.radius - step).max(0.0);
                } else {
                    self.direction = Direction::Contracting;
                }
            }
            Direction::Contracting => {
                if self.radius < self.radius_origin {
                    self.radius = (self.radius + step).min(self.radius_origin);
                } else {
                    self.direction = Direction::Expanding;
                }
            }
        }
    }
}
