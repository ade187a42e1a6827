// The pixel canvas tiles are painted into.

use crate::color::Color;

#[derive(Clone, Debug, PartialEq)]
pub struct FrameBuffer {
    pub width: usize,      // how wide the canvas is on screen (pixels)
    pub height: usize,     // how tall the canvas is on screen (pixels)
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB for minifb
}

impl FrameBuffer {
    /// A canvas cleared to `background`.
    /// Visual: a blank sheet (white by default in the demo).
    pub fn filled(width: usize, height: usize, background: Color) -> Self {
        Self { width, height, pixels: vec![background.to_rgb_u32(); width * height] }
    }

    /// Reset every pixel; reuses the allocation between frames.
    pub fn clear(&mut self, background: Color) {
        self.pixels.fill(background.to_rgb_u32());
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }
}
