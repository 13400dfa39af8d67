//! Accumulation framebuffer

use crate::Rgba;
use crate::error::Result;
use crate::platform::Canvas;

/// Persistent pixel surface in 0RGB layout, row-major
#[derive(Debug, Clone)]
pub struct FrameBuffer {
    width: usize,
    height: usize,
    pixels: Vec<u32>,
    draw_color: Rgba,
    /// Number of `present` calls
    frames: u64,
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width * height],
            draw_color: Rgba::BLACK,
            frames: 0,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Pixel at integer coordinates, if on canvas
    pub fn pixel(&self, x: usize, y: usize) -> Option<u32> {
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    /// Buffer index for a float coordinate (truncated toward zero)
    fn index_of(&self, x: f32, y: f32) -> Option<usize> {
        if !x.is_finite() || !y.is_finite() {
            return None;
        }
        let (xi, yi) = (x.trunc(), y.trunc());
        if xi < 0.0 || yi < 0.0 {
            return None;
        }
        let (xi, yi) = (xi as usize, yi as usize);
        if xi >= self.width || yi >= self.height {
            return None;
        }
        Some(yi * self.width + xi)
    }
}

impl Canvas for FrameBuffer {
    fn clear(&mut self, color: Rgba) {
        self.pixels.fill(color.to_0rgb());
    }

    fn set_draw_color(&mut self, r: u8, g: u8, b: u8, a: u8) {
        self.draw_color = Rgba::new(r, g, b, a);
    }

    fn draw_point(&mut self, x: f32, y: f32) {
        if let Some(i) = self.index_of(x, y) {
            self.pixels[i] = self.draw_color.to_0rgb();
        }
    }

    fn present(&mut self) -> Result<()> {
        self.frames += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_point_truncates() {
        let mut fb = FrameBuffer::new(4, 3);
        fb.set_draw_color(0x12, 0x34, 0x56, 255);
        fb.draw_point(2.9, 1.2);
        assert_eq!(fb.pixel(2, 1), Some(0x0012_3456));
        assert_eq!(fb.pixel(3, 1), Some(0));
    }

    #[test]
    fn test_off_canvas_points_dropped() {
        let mut fb = FrameBuffer::new(4, 3);
        fb.set_draw_color(255, 255, 255, 255);
        fb.draw_point(-1.5, 0.0);
        fb.draw_point(4.0, 0.0);
        fb.draw_point(0.0, 3.0);
        fb.draw_point(f32::NAN, 1.0);
        assert!(fb.pixels().iter().all(|&p| p == 0));
    }

    #[test]
    fn test_points_accumulate_until_clear() {
        let mut fb = FrameBuffer::new(8, 8);
        fb.set_draw_color(200, 100, 150, 255);
        fb.draw_point(1.0, 1.0);
        fb.present().unwrap();
        fb.draw_point(5.0, 6.0);
        fb.present().unwrap();

        assert_ne!(fb.pixel(1, 1), Some(0));
        assert_ne!(fb.pixel(5, 6), Some(0));
        assert_eq!(fb.frames(), 2);

        fb.clear(Rgba::BLACK);
        assert!(fb.pixels().iter().all(|&p| p == 0));
        assert_eq!((fb.width(), fb.height()), (8, 8));
    }
}
