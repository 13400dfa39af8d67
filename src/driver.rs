//! Main loop
//!
//! One iteration: drain input, ask the clock whether to tick, step the
//! oscillator, plot one bright random-colored point, present, then sleep out
//! the rest of the frame.

use crate::consts::*;
use crate::error::Result;
use crate::platform::{Canvas, InputEvent, InputSource, TimeSource};
use crate::settings::MandalaConfig;
use crate::sim::{Clock, OscillatorState, RandomSource};
use crate::Rgba;

pub struct Driver<T: TimeSource> {
    config: MandalaConfig,
    time: T,
    clock: Clock,
    rng: RandomSource,
    state: OscillatorState,
    running: bool,
    ticks: u64,
}

impl<T: TimeSource> Driver<T> {
    pub fn new(config: MandalaConfig, time: T) -> Self {
        let mut rng = match config.seed {
            Some(seed) => RandomSource::from_seed(seed),
            None => RandomSource::from_time(),
        };
        let state = OscillatorState::new(&config, &mut rng);
        let clock = Clock::new(config.pacing, time.now_ms());

        log::info!("Seed {} ({})", rng.seed(), config.describe());

        Self {
            config,
            time,
            clock,
            rng,
            state,
            running: true,
            ticks: 0,
        }
    }

    /// Run until a quit event arrives. Returns the number of ticks performed.
    pub fn run(&mut self, canvas: &mut impl Canvas, input: &mut impl InputSource) -> Result<u64> {
        canvas.clear(Rgba::BLACK);
        canvas.present()?;

        while self.running {
            self.iterate(canvas, input)?;
        }

        log::info!("Stopped after {} ticks", self.ticks);
        Ok(self.ticks)
    }

    /// One loop iteration. Returns true if the oscillator advanced.
    pub fn iterate(
        &mut self,
        canvas: &mut impl Canvas,
        input: &mut impl InputSource,
    ) -> Result<bool> {
        for event in input.poll_events() {
            match event {
                InputEvent::Quit => self.stop(),
                InputEvent::PointerButtonDown => self.reset(canvas),
            }
        }
        if !self.running {
            return Ok(false);
        }

        let now = self.time.now_ms();
        let ticked = match self.clock.poll(now) {
            Some(delta_ms) => {
                let pos = self.state.step(&self.config, delta_ms);
                let color = self.rng.color(COLOR_MIN, COLOR_MAX);
                canvas.set_draw_color(color.r, color.g, color.b, color.a);
                canvas.draw_point(pos.x, pos.y);
                canvas.present()?;
                self.ticks += 1;
                log::trace!("tick {} at ({:.2}, {:.2})", self.ticks, pos.x, pos.y);
                true
            }
            None => false,
        };

        self.time.sleep_ms(self.clock.idle_ms(self.time.now_ms()));
        Ok(ticked)
    }

    /// Start a new figure from the start point on a black canvas
    pub fn reset(&mut self, canvas: &mut impl Canvas) {
        self.state.reset(&self.config, &mut self.rng);
        canvas.clear(Rgba::BLACK);
        log::info!("New mandala (radius_origin={})", self.state.radius_origin);
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn state(&self) -> &OscillatorState {
        &self.state
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn config(&self) -> &MandalaConfig {
        &self.config
    }
}
