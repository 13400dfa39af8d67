//! Simulation module
//!
//! The mandala kernel. Everything here is pure:
//! - Seeded RNG only
//! - Time comes in as plain numbers
//! - No rendering or platform dependencies

pub mod clock;
pub mod oscillator;
pub mod rng;

pub use clock::Clock;
pub use oscillator::{Direction, OscillatorState};
pub use rng::RandomSource;
