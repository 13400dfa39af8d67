//! Seeded random source for oscillator parameters and point colors

use std::time::{SystemTime, UNIX_EPOCH};

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::Rgba;

/// PCG-backed generator. Deterministic for a given seed.
#[derive(Debug, Clone)]
pub struct RandomSource {
    seed: u64,
    rng: Pcg32,
}

impl RandomSource {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Seed from wall-clock time (non-reproducible)
    pub fn from_time() -> Self {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);
        Self::from_seed(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Integer in `[lo, hi]`
    pub fn uniform_int(&mut self, lo: i32, hi: i32) -> i32 {
        self.rng.random_range(lo..=hi)
    }

    /// Float in `[0, 1)`
    pub fn uniform_unit(&mut self) -> f32 {
        self.rng.random::<f32>()
    }

    /// Byte in `[lo, hi]`
    pub fn byte_in_range(&mut self, lo: u8, hi: u8) -> u8 {
        self.rng.random_range(lo..=hi)
    }

    /// Opaque color with every channel in `[lo, hi]`
    pub fn color(&mut self, lo: u8, hi: u8) -> Rgba {
        let r = self.byte_in_range(lo, hi);
        let g = self.byte_in_range(lo, hi);
        let b = self.byte_in_range(lo, hi);
        Rgba::new(r, g, b, 255)
    }
}
