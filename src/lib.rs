//! Spiral tile layouts: rectangles cut alternately from the bottom, right,
//! top and left of a canvas, each a little lighter than the last, revealed
//! with a staggered fade.
//!
//! The generator ([`spiral::generate`] / [`spiral::SpiralTiles`]) is pure
//! apart from the [`random::RandomSource`] it is handed. Everything else
//! (software painting, the minifb window, PNG export) only consumes tiles.

pub mod color;
pub mod config;
pub mod draw;
pub mod error;
pub mod export;
pub mod geometry;
pub mod random;
pub mod reveal;
pub mod spiral;
pub mod types;

pub use color::Color;
pub use error::Error;
pub use geometry::Rect;
pub use random::{RandomSource, RngSource};
pub use spiral::{generate, Direction, SpiralConfig, SpiralTiles, Tile};
