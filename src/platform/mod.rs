//! Platform abstraction layer
//!
//! The driver talks to the outside world only through these seams:
//! - `Canvas`: point drawing and presentation
//! - `InputSource`: non-blocking quit/reset polling
//! - `TimeSource`: wall-clock milliseconds and sleeping

use std::time::{Duration, Instant};

use crate::Rgba;
use crate::error::Result;

/// Events the driver reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Window closed / quit requested
    Quit,
    /// Pointer button pressed - start a new figure
    PointerButtonDown,
}

/// Render collaborator. The core only ever draws single points.
pub trait Canvas {
    fn clear(&mut self, color: Rgba);
    fn set_draw_color(&mut self, r: u8, g: u8, b: u8, a: u8);
    /// Plot one point in the current draw color. Off-canvas points are dropped.
    fn draw_point(&mut self, x: f32, y: f32);
    fn present(&mut self) -> Result<()>;
}

/// Input collaborator
pub trait InputSource {
    /// Drain pending events without blocking
    fn poll_events(&mut self) -> Vec<InputEvent>;
}

/// Wall-clock time in milliseconds
pub trait TimeSource {
    fn now_ms(&self) -> f64;
    fn sleep_ms(&self, ms: f64);
}

/// `Instant`-backed time source, measured from construction
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    start: Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl TimeSource for SystemClock {
    fn now_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }

    fn sleep_ms(&self, ms: f64) {
        if ms > 0.0 {
            std::thread::sleep(Duration::from_secs_f64(ms / 1000.0));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_is_monotonic() {
        let clock = SystemClock::new();
        let a = clock.now_ms();
        clock.sleep_ms(2.0);
        let b = clock.now_ms();
        assert!(b >= a + 1.0);
        // Non-positive sleeps return immediately
        clock.sleep_ms(-5.0);
        clock.sleep_ms(0.0);
    }
}
