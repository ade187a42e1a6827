// Packed colors and the per-channel lighten/darken used by the spiral.
// Storage is 0xAARRGGBB; the window wants 0x00RRGGBB (see `to_rgb_u32`).

use crate::random::RandomSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color(pub u32);

impl Color {
    pub const WHITE: Color = Color(0xFF_FF_FF_FF);
    pub const BLACK: Color = Color(0xFF_00_00_00);

    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Color(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Fully opaque color.
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb(0xFF, r, g, b)
    }

    #[inline] pub const fn alpha(self) -> u8 { (self.0 >> 24) as u8 }
    #[inline] pub const fn red(self) -> u8 { (self.0 >> 16) as u8 }
    #[inline] pub const fn green(self) -> u8 { (self.0 >> 8) as u8 }
    #[inline] pub const fn blue(self) -> u8 { self.0 as u8 }

    /// Drop alpha for the minifb buffer.
    #[inline]
    pub const fn to_rgb_u32(self) -> u32 {
        self.0 & 0x00_FF_FF_FF
    }

    /// Add `delta` to each RGB channel, saturating at 255. Alpha is kept.
    pub fn lighten(self, delta: i32) -> Self {
        self.shift(delta)
    }

    /// Subtract `delta` from each RGB channel, saturating at 0. Alpha is kept.
    pub fn darken(self, delta: i32) -> Self {
        self.shift(delta.saturating_neg())
    }

    fn shift(self, delta: i32) -> Self {
        let ch = |c: u8| (c as i32).saturating_add(delta).clamp(0, 255) as u8;
        Self::from_argb(self.alpha(), ch(self.red()), ch(self.green()), ch(self.blue()))
    }

    /// Opaque color with R, G, B drawn in that order.
    pub fn random(source: &mut impl RandomSource) -> Self {
        let r = source.next_int(256) as u8;
        let g = source.next_int(256) as u8;
        let b = source.next_int(256) as u8;
        Self::from_rgb(r, g, b)
    }

    /// Linear mix of `self` over `dst` (0x00RRGGBB) with coverage `alpha` in [0,1].
    /// Visual: alpha 0 leaves the background, alpha 1 paints the solid color.
    pub fn blend_over(self, dst: u32, alpha: f32) -> u32 {
        let a = alpha.clamp(0.0, 1.0);
        let mix = |src: u8, dst: u8| {
            (dst as f32 + (src as f32 - dst as f32) * a).round().clamp(0.0, 255.0) as u32
        };
        let r = mix(self.red(), (dst >> 16) as u8);
        let g = mix(self.green(), (dst >> 8) as u8);
        let b = mix(self.blue(), dst as u8);
        (r << 16) | (g << 8) | b
    }
}
