//! Frame pacing
//!
//! Two policies share one clock:
//! - Capped: every iteration ticks; the driver then sleeps out the rest of
//!   the frame interval.
//! - Threshold: an iteration ticks only once strictly more than one frame
//!   interval has passed since the last accepted tick.
//!
//! Time is passed in as milliseconds so the clock stays pure.

use crate::consts::TARGET_FRAME_MS;
use crate::settings::PacingPolicy;

#[derive(Debug, Clone, Copy)]
pub struct Clock {
    policy: PacingPolicy,
    /// Time of the last accepted tick (ms)
    last_tick: f64,
    /// Elapsed ms reported by the last accepted tick
    delta_ms: f64,
}

impl Clock {
    pub fn new(policy: PacingPolicy, now: f64) -> Self {
        Self {
            policy,
            last_tick: now,
            delta_ms: 0.0,
        }
    }

    /// Milliseconds from `last` to `now`, never negative
    #[inline]
    pub fn elapsed_ms(now: f64, last: f64) -> f64 {
        (now - last).max(0.0)
    }

    /// Decide whether this iteration ticks. Returns the elapsed ms when it does.
    pub fn poll(&mut self, now: f64) -> Option<f64> {
        let delta = Self::elapsed_ms(now, self.last_tick);
        match self.policy {
            PacingPolicy::Capped => {}
            PacingPolicy::Threshold => {
                if delta <= TARGET_FRAME_MS {
                    return None;
                }
            }
        }
        self.last_tick = now;
        self.delta_ms = delta;
        Some(delta)
    }

    /// Milliseconds the driver may sleep before the next tick is due
    pub fn idle_ms(&self, now: f64) -> f64 {
        (self.last_tick + TARGET_FRAME_MS - now).max(0.0)
    }

    pub fn delta_ms(&self) -> f64 {
        self.delta_ms
    }

    pub fn last_tick(&self) -> f64 {
        self.last_tick
    }

    pub fn policy(&self) -> PacingPolicy {
        self.policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elapsed_saturates() {
        assert_eq!(Clock::elapsed_ms(120.0, 100.0), 20.0);
        assert_eq!(Clock::elapsed_ms(90.0, 100.0), 0.0);
    }

    #[test]
    fn test_capped_always_ticks() {
        let mut clock = Clock::new(PacingPolicy::Capped, 0.0);
        assert_eq!(clock.poll(5.0), Some(5.0));
        assert_eq!(clock.poll(6.0), Some(1.0));
        assert_eq!(clock.delta_ms(), 1.0);
        assert_eq!(clock.last_tick(), 6.0);
    }

    #[test]
    fn test_capped_idle_until_boundary() {
        let mut clock = Clock::new(PacingPolicy::Capped, 0.0);
        clock.poll(100.0);
        let idle = clock.idle_ms(104.0);
        assert!((idle - (TARGET_FRAME_MS - 4.0)).abs() < 1e-9);
        // Overran the frame: no sleep
        assert_eq!(clock.idle_ms(130.0), 0.0);
    }

    #[test]
    fn test_threshold_is_strict() {
        let mut clock = Clock::new(PacingPolicy::Threshold, 0.0);
        assert_eq!(clock.poll(10.0), None);
        assert_eq!(clock.poll(TARGET_FRAME_MS), None);
        // Rejected polls leave the reference point alone
        assert_eq!(clock.last_tick(), 0.0);

        let accepted = clock.poll(17.0);
        assert_eq!(accepted, Some(17.0));
        assert_eq!(clock.last_tick(), 17.0);
        assert_eq!(clock.poll(20.0), None);
    }

    #[test]
    fn test_threshold_idle_matches_remaining() {
        let mut clock = Clock::new(PacingPolicy::Threshold, 0.0);
        assert!(clock.poll(5.0).is_none());
        let idle = clock.idle_ms(5.0);
        assert!((idle - (TARGET_FRAME_MS - 5.0)).abs() < 1e-9);
        assert_eq!(clock.policy(), PacingPolicy::Threshold);
    }
}
