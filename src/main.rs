//! Mandala entry point
//!
//! Opens the 640x480 window and runs the driver until the window closes.

mod native_host {
    use std::cell::RefCell;
    use std::rc::Rc;

    use minifb::{Key, MouseButton, Window, WindowOptions};

    use mandala::consts::*;
    use mandala::platform::{Canvas, InputEvent, InputSource};
    use mandala::renderer::FrameBuffer;
    use mandala::{Rgba, Result};

    /// Accumulation surface blitted to the window on every present
    pub struct WindowCanvas {
        window: Rc<RefCell<Window>>,
        surface: FrameBuffer,
    }

    impl Canvas for WindowCanvas {
        fn clear(&mut self, color: Rgba) {
            self.surface.clear(color);
        }

        fn set_draw_color(&mut self, r: u8, g: u8, b: u8, a: u8) {
            self.surface.set_draw_color(r, g, b, a);
        }

        fn draw_point(&mut self, x: f32, y: f32) {
            self.surface.draw_point(x, y);
        }

        fn present(&mut self) -> Result<()> {
            self.surface.present()?;
            self.window.borrow_mut().update_with_buffer(
                self.surface.pixels(),
                self.surface.width(),
                self.surface.height(),
            )?;
            Ok(())
        }
    }

    /// Window close / Escape and left-click edges
    pub struct WindowInput {
        window: Rc<RefCell<Window>>,
        mouse_was_down: bool,
    }

    impl InputSource for WindowInput {
        fn poll_events(&mut self) -> Vec<InputEvent> {
            let window = self.window.borrow();
            let mut events = Vec::new();

            if !window.is_open() || window.is_key_down(Key::Escape) {
                events.push(InputEvent::Quit);
            }

            let mouse_down = window.get_mouse_down(MouseButton::Left);
            if mouse_down && !self.mouse_was_down {
                events.push(InputEvent::PointerButtonDown);
            }
            self.mouse_was_down = mouse_down;

            events
        }
    }

    pub fn open() -> Result<(WindowCanvas, WindowInput)> {
        let window = Window::new(WINDOW_TITLE, WIN_W, WIN_H, WindowOptions::default())?;
        log::info!("Window open ({}x{})", WIN_W, WIN_H);

        let window = Rc::new(RefCell::new(window));
        let canvas = WindowCanvas {
            window: Rc::clone(&window),
            surface: FrameBuffer::new(WIN_W, WIN_H),
        };
        let input = WindowInput {
            window,
            mouse_was_down: false,
        };
        Ok((canvas, input))
    }
}

use mandala::platform::SystemClock;
use mandala::{Driver, MandalaConfig};

fn run() -> mandala::Result<u64> {
    let (mut canvas, mut input) = native_host::open()?;
    let mut driver = Driver::new(MandalaConfig::default(), SystemClock::new());
    driver.run(&mut canvas, &mut input)
}

fn main() {
    env_logger::init();
    log::info!("Mandala starting...");

    match run() {
        Ok(ticks) => log::info!("Mandala closed after {} ticks", ticks),
        Err(e) => {
            log::error!("{}", e);
            eprintln!("ERROR: {}", e);
            std::process::exit(1);
        }
    }
}
