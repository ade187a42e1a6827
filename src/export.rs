// Snapshot the canvas to disk.
// Visual: the PNG looks exactly like the window at the moment S was pressed.

use std::path::Path;

use image::{ImageBuffer, Rgb, RgbImage};

use crate::error::Error;
use crate::types::FrameBuffer;

/// Unpack 0x00RRGGBB pixels into an RGB image.
pub fn to_rgb_image(fb: &FrameBuffer) -> Result<RgbImage, Error> {
    let (w, h) = (fb.width as u32, fb.height as u32);
    let mut raw = Vec::with_capacity(fb.pixels.len() * 3);
    for &px in &fb.pixels {
        raw.extend_from_slice(&[(px >> 16) as u8, (px >> 8) as u8, px as u8]);
    }
    ImageBuffer::<Rgb<u8>, Vec<u8>>::from_raw(w, h, raw)
        .ok_or_else(|| Error::Export(format!("buffer does not match {w}x{h}")))
}

/// Write the canvas as a PNG (format picked from the extension).
pub fn save_png(fb: &FrameBuffer, path: &Path) -> Result<(), Error> {
    to_rgb_image(fb)?
        .save(path)
        .map_err(|e| Error::Export(format!("{}: {e}", path.display())))
}
