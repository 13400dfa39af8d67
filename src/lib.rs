//! Mandala - a drifting point that traces a figure on a 640x480 canvas
//!
//! Core modules:
//! - `sim`: Oscillator, clock and seeded RNG (pure, no platform dependencies)
//! - `driver`: The per-iteration loop (input, pacing, step, draw)
//! - `platform`: Canvas/input/time seams the host implements
//! - `renderer`: Persistent accumulation framebuffer
//! - `settings`: Policy selection for the unified core

pub mod driver;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use driver::Driver;
pub use error::{MandalaError, Result};
pub use settings::{DirectionPolicy, MandalaConfig, PacingPolicy, TimestepPolicy};
pub use sim::{Clock, OscillatorState, RandomSource};

/// Program constants
pub mod consts {
    /// Canvas dimensions
    pub const WIN_W: usize = 640;
    pub const WIN_H: usize = 480;
    pub const WINDOW_TITLE: &str = "Mandala";

    /// Target update rate
    pub const FPS: u32 = 60;
    /// Milliseconds per tick (~16.67)
    pub const TARGET_FRAME_MS: f64 = 1000.0 / FPS as f64;

    /// Where every figure starts
    pub const START_X: f32 = 120.0;
    pub const START_Y: f32 = 240.0;

    /// Inclusive range for the radius origin
    pub const RADIUS_ORIGIN_MIN: i32 = 10;
    pub const RADIUS_ORIGIN_MAX: i32 = 20;

    /// Inclusive range for the delta-scaled phase multiplier
    pub const PHASE_RATE_MIN: i32 = 10;
    pub const PHASE_RATE_MAX: i32 = 12;

    /// Phase advance per tick with the fixed timestep
    pub const FIXED_PHASE_STEP: f32 = 0.1;

    /// Color channel range - skewed bright on purpose
    pub const COLOR_MIN: u8 = 100;
    pub const COLOR_MAX: u8 = 255;
}

/// 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Pack as 0RGB, the framebuffer layout (alpha is dropped)
    #[inline]
    pub fn to_0rgb(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }
}
