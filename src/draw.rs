// Window + software drawing utilities.
// Visual effects provided here:
// 1) A window that shows the spiral canvas.
// 2) Tiles painted as filled rectangles with a darker border, blended by their fade.
// 3) A tiny 3x5 bitmap font for the HUD line.

use crate::color::Color;
use crate::error::Error;
use crate::geometry::Rect;
use crate::spiral::Tile;
use crate::types::FrameBuffer;
use minifb::{Key, KeyRepeat, Window, WindowOptions};

pub struct Drawer {
    window: Window, // the on-screen window you see
}

impl Drawer {
    /// Create a window of the canvas size.
    /// Visual: a new empty window appears with your chosen title.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, Error> {
        let mut window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        window.set_target_fps(60);
        Ok(Self { window })
    }

    /// Push the pixels for this frame to the screen.
    pub fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }

    /// Visual: when true, main builds a brand new spiral.
    pub fn r_pressed_once(&self) -> bool {
        self.window.is_key_pressed(Key::R, KeyRepeat::No)
    }

    /// Visual: none; main writes the current canvas to a PNG.
    pub fn s_pressed_once(&self) -> bool {
        self.window.is_key_pressed(Key::S, KeyRepeat::No)
    }
}

/* ---------- Software drawing: blended rectangles ---------- */

/// Blend `color` into the pixel at (x,y) if it is inside bounds.
#[inline]
fn blend_pixel(fb: &mut FrameBuffer, x: i32, y: i32, color: Color, alpha: f32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= fb.width || y >= fb.height {
        return;
    }
    let idx = y * fb.width + x;
    fb.pixels[idx] = color.blend_over(fb.pixels[idx], alpha);
}

/// Fill `rect` (right/bottom exclusive), clipped to the canvas.
pub fn fill_rect(fb: &mut FrameBuffer, rect: &Rect, color: Color, alpha: f32) {
    if alpha <= 0.0 {
        return;
    }
    let x0 = rect.left.max(0);
    let y0 = rect.top.max(0);
    let x1 = rect.right.min(fb.width as i32);
    let y1 = rect.bottom.min(fb.height as i32);
    for y in y0..y1 {
        for x in x0..x1 {
            blend_pixel(fb, x, y, color, alpha);
        }
    }
}

/// Draw a border of `width` pixels just inside `rect`.
/// Visual: a thin darker frame separating neighbouring tiles.
pub fn stroke_rect(fb: &mut FrameBuffer, rect: &Rect, width: i32, color: Color, alpha: f32) {
    if width <= 0 || rect.is_empty() {
        return;
    }
    let w = width.min(rect.width()).min(rect.height());
    let edges = [
        (rect.left, rect.top, rect.right, rect.top + w),              // top
        (rect.left, rect.bottom - w, rect.right, rect.bottom),        // bottom
        (rect.left, rect.top + w, rect.left + w, rect.bottom - w),    // left
        (rect.right - w, rect.top + w, rect.right, rect.bottom - w),  // right
    ];
    for (l, t, r, b) in edges {
        if l < r && t < b {
            fill_rect(fb, &Rect { left: l, top: t, right: r, bottom: b }, color, alpha);
        }
    }
}

/// Paint one tile at fade level `alpha`.
/// Visual: the fill appears first faintly, the border with it, both reaching full strength together.
pub fn paint_tile(fb: &mut FrameBuffer, tile: &Tile, stroke_width: i32, alpha: f32) {
    fill_rect(fb, &tile.rect, tile.fill, alpha);
    stroke_rect(fb, &tile.rect, stroke_width, tile.stroke, alpha);
}

/* ---------- 3x5 bitmap font (just what the HUD prints) ---------- */

/// Each u8 is a row; the low 3 bits are the pixels (bit 2 = leftmost).
fn glyph3x5(ch: char) -> Option<[u8; 5]> {
    let rows = match ch.to_ascii_uppercase() {
        '0' => [0b111, 0b101, 0b101, 0b101, 0b111],
        '1' => [0b010, 0b110, 0b010, 0b010, 0b111],
        '2' => [0b111, 0b001, 0b111, 0b100, 0b111],
        '3' => [0b111, 0b001, 0b111, 0b001, 0b111],
        '4' => [0b101, 0b101, 0b111, 0b001, 0b001],
        '5' => [0b111, 0b100, 0b111, 0b001, 0b111],
        '6' => [0b111, 0b100, 0b111, 0b101, 0b111],
        '7' => [0b111, 0b001, 0b001, 0b010, 0b010],
        '8' => [0b111, 0b101, 0b111, 0b101, 0b111],
        '9' => [0b111, 0b101, 0b111, 0b001, 0b111],
        'A' => [0b010, 0b101, 0b111, 0b101, 0b101],
        'D' => [0b110, 0b101, 0b101, 0b101, 0b110],
        'E' => [0b111, 0b100, 0b110, 0b100, 0b111],
        'I' => [0b111, 0b010, 0b010, 0b010, 0b111],
        'L' => [0b100, 0b100, 0b100, 0b100, 0b111],
        'N' => [0b110, 0b101, 0b101, 0b101, 0b101],
        'R' => [0b110, 0b101, 0b110, 0b101, 0b101],
        'S' => [0b011, 0b100, 0b010, 0b001, 0b110],
        'T' => [0b111, 0b010, 0b010, 0b010, 0b010],
        'V' => [0b101, 0b101, 0b101, 0b101, 0b010],
        'W' => [0b101, 0b101, 0b101, 0b111, 0b101],
        '/' => [0b001, 0b001, 0b010, 0b100, 0b100],
        ':' => [0b000, 0b010, 0b000, 0b010, 0b000],
        ' ' => [0; 5],
        _ => return None,
    };
    Some(rows)
}

/// Draw a text string with 3x5 glyphs blown up by `scale`.
/// Visual: a compact HUD line; unknown characters leave a gap.
pub fn draw_text_3x5(fb: &mut FrameBuffer, mut x: i32, y: i32, scale: i32, text: &str, color: Color) {
    let scale = scale.max(1);
    for ch in text.chars() {
        if let Some(rows) = glyph3x5(ch) {
            for (ry, bits) in rows.iter().enumerate() {
                for rx in 0..3 {
                    if bits & (1 << (2 - rx)) != 0 {
                        let px = Rect {
                            left: x + rx * scale,
                            top: y + ry as i32 * scale,
                            right: x + (rx + 1) * scale,
                            bottom: y + (ry as i32 + 1) * scale,
                        };
                        fill_rect(fb, &px, color, 1.0);
                    }
                }
            }
        }
        x += 4 * scale; // 3 pixels glyph width + 1 pixel spacing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spiral::Direction;
    use std::time::Duration;

    fn tile(rect: Rect) -> Tile {
        Tile {
            index: 0,
            direction: Direction::Bottom,
            rect,
            remaining: Rect::default(),
            fill: Color::from_rgb(200, 100, 50),
            stroke: Color::from_rgb(10, 20, 30),
            reveal_delay: Duration::ZERO,
        }
    }

    #[test]
    fn opaque_tile_has_fill_inside_and_stroke_on_edge() {
        let mut fb = FrameBuffer::filled(20, 20, Color::WHITE);
        paint_tile(&mut fb, &tile(Rect::new(2, 2, 12, 12).unwrap()), 2, 1.0);
        assert_eq!(fb.get(6, 6), Some(0x00_C8_64_32));
        assert_eq!(fb.get(2, 2), Some(0x00_0A_14_1E));
        assert_eq!(fb.get(11, 6), Some(0x00_0A_14_1E));
        assert_eq!(fb.get(12, 12), Some(0x00_FF_FF_FF));
    }

    #[test]
    fn transparent_tile_leaves_canvas_untouched() {
        let mut fb = FrameBuffer::filled(8, 8, Color::WHITE);
        let before = fb.clone();
        paint_tile(&mut fb, &tile(Rect::new(0, 0, 8, 8).unwrap()), 2, 0.0);
        assert_eq!(fb, before);
    }

    #[test]
    fn painting_is_clipped_to_canvas() {
        let mut fb = FrameBuffer::filled(4, 4, Color::WHITE);
        paint_tile(&mut fb, &tile(Rect::new(-10, -10, 100, 100).unwrap()), 1, 1.0);
        assert_eq!(fb.pixels.len(), 16);
        assert!(fb.pixels.iter().all(|&p| p == 0x00_C8_64_32));
    }

    #[test]
    fn extreme_rect_strokes_without_overflow() {
        let mut fb = FrameBuffer::filled(4, 4, Color::WHITE);
        let huge = Rect::new(i32::MIN, i32::MIN, i32::MAX, i32::MAX).unwrap();
        stroke_rect(&mut fb, &huge, 2, Color::BLACK, 1.0);
        assert!(fb.pixels.iter().all(|&p| p == 0x00_FF_FF_FF));

        let wide = Rect::new(-2_000_000_000, 0, 2_000_000_000, 4).unwrap();
        stroke_rect(&mut fb, &wide, 1, Color::BLACK, 1.0);
        assert_eq!(fb.get(1, 0), Some(0));
        assert_eq!(fb.get(1, 3), Some(0));
        assert_eq!(fb.get(1, 1), Some(0x00_FF_FF_FF));
    }

    #[test]
    fn hud_text_marks_pixels() {
        let mut fb = FrameBuffer::filled(40, 10, Color::WHITE);
        draw_text_3x5(&mut fb, 0, 0, 1, "T1", Color::BLACK);
        assert_eq!(fb.get(0, 0), Some(0));
        assert_eq!(fb.get(1, 4), Some(0));
        assert_eq!(fb.get(0, 4), Some(0x00_FF_FF_FF));
    }
}
