// Spiral tile layout.
// Starting from the whole canvas, tiles are cut off the bottom, right, top
// and left edges in turn. Each cut has a random extent, the remaining area
// shrinks toward the center, and every tile gets a slightly lighter fill.
// Visual: a colored spiral of rectangles that fades in one tile at a time.

use std::time::Duration;

use tracing::debug;

use crate::color::Color;
use crate::geometry::Rect;
use crate::random::RandomSource;

/// The edge the next tile is cut from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Bottom,
    Right,
    Top,
    Left,
}

impl Direction {
    /// BOTTOM → RIGHT → TOP → LEFT → BOTTOM …
    pub const fn next(self) -> Self {
        match self {
            Direction::Bottom => Direction::Right,
            Direction::Right => Direction::Top,
            Direction::Top => Direction::Left,
            Direction::Left => Direction::Bottom,
        }
    }

    /// Bottom/top cuts consume height; right/left cuts consume width.
    pub const fn is_vertical(self) -> bool {
        matches!(self, Direction::Bottom | Direction::Top)
    }

    /// Tile placement for a strip of `extent` along this edge of `available`.
    pub fn tile_bounds(self, available: &Rect, extent: i32) -> Rect {
        let mut tile = *available;
        match self {
            Direction::Bottom => tile.top = available.bottom - extent,
            Direction::Right => tile.left = available.right - extent,
            Direction::Top => tile.bottom = available.top + extent,
            Direction::Left => tile.right = available.left + extent,
        }
        tile
    }

    /// What is left of `available` once `tile` has been cut off this edge.
    pub fn shrink(self, available: &Rect, tile: &Rect) -> Rect {
        let mut rest = *available;
        match self {
            Direction::Bottom => rest.bottom = tile.top,
            Direction::Right => rest.right = tile.left,
            Direction::Top => rest.top = tile.bottom,
            Direction::Left => rest.left = tile.right,
        }
        rest
    }
}

/// Tunables. `Default` matches the classic look: 30 tiles, 100px minimum.
#[derive(Debug, Clone, PartialEq)]
pub struct SpiralConfig {
    /// Upper bound on the number of tiles.
    pub tile_count: usize,
    /// Smallest extent a tile gets unless less space remains. Values below 1 act as 1.
    pub min_size: i32,
    /// Per-tile lightening step for the fill color.
    pub lighten_delta: i32,
    /// How much darker than the base the stroke is.
    pub stroke_delta: i32,
    /// Applied to the random color to obtain the base color.
    pub base_darken_delta: i32,
    /// Fade-in length; tile `i` starts fading at `i * fade_duration`.
    pub fade_duration: Duration,
    /// Border width in pixels (renderer only).
    pub stroke_width: i32,
}

impl Default for SpiralConfig {
    fn default() -> Self {
        Self {
            tile_count: 30,
            min_size: 100,
            lighten_delta: 10,
            stroke_delta: 25,
            base_darken_delta: 40,
            fade_duration: Duration::from_millis(300),
            stroke_width: 2,
        }
    }
}

/// Base color for a spiral: the supplied random color, darkened.
pub fn base_color_from(random_color: Color, config: &SpiralConfig) -> Color {
    random_color.darken(config.base_darken_delta)
}

/// One emitted tile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tile {
    pub index: usize,
    pub direction: Direction,
    /// Placement on the canvas.
    pub rect: Rect,
    /// Available area left after this tile was cut.
    pub remaining: Rect,
    pub fill: Color,
    pub stroke: Color,
    /// When this tile's fade-in begins.
    pub reveal_delay: Duration,
}

/// Lazy tile sequence. Each `next()` consumes exactly one random draw.
///
/// The sequence cannot be replayed: a second pass needs a fresh source.
pub struct SpiralTiles<'a, S: RandomSource + ?Sized> {
    available: Rect,
    direction: Direction,
    index: usize,
    base: Color,
    stroke: Color,
    config: &'a SpiralConfig,
    source: &'a mut S,
}

impl<'a, S: RandomSource + ?Sized> SpiralTiles<'a, S> {
    pub fn new(initial: Rect, base: Color, config: &'a SpiralConfig, source: &'a mut S) -> Self {
        Self {
            available: initial,
            direction: Direction::Bottom,
            index: 0,
            base,
            stroke: base.darken(config.stroke_delta),
            config,
            source,
        }
    }

    /// Area not yet covered by tiles.
    pub fn available(&self) -> Rect {
        self.available
    }

    /// Edge the next tile will be cut from.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// `min(available, max(min_size, raw))` with `raw` in `[0, max(1, available / 3))`.
    /// Gives less than `min_size` only when less than `min_size` is left.
    fn random_extent(&mut self) -> i32 {
        let span = if self.direction.is_vertical() {
            self.available.height()
        } else {
            self.available.width()
        };
        let raw = self.source.next_int((span / 3).max(1));
        span.min(raw.max(self.config.min_size.max(1)))
    }
}

impl<S: RandomSource + ?Sized> Iterator for SpiralTiles<'_, S> {
    type Item = Tile;

    fn next(&mut self) -> Option<Tile> {
        if self.index >= self.config.tile_count || self.available.is_empty() {
            return None;
        }

        let i = self.index;
        let direction = self.direction;
        let fill = fill_for(self.base, self.config, i);
        let extent = self.random_extent();
        let rect = direction.tile_bounds(&self.available, extent);
        let remaining = direction.shrink(&self.available, &rect);
        let reveal_delay = reveal_delay_for(self.config, i);

        debug!(index = i, ?direction, extent, ?rect, ?remaining, "cut tile");

        self.available = remaining;
        self.direction = direction.next();
        self.index += 1;

        if self.available.is_empty() && self.index < self.config.tile_count {
            debug!(tiles = self.index, budget = self.config.tile_count, "canvas filled before budget");
        }

        Some(Tile {
            index: i,
            direction,
            rect,
            remaining,
            fill,
            stroke: self.stroke,
            reveal_delay,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.available.is_empty() {
            return (0, Some(0));
        }
        let left = self.config.tile_count.saturating_sub(self.index);
        (left.min(1), Some(left))
    }
}

/// Fill of tile `index`: the base lightened `index` steps, saturating.
pub fn fill_for(base: Color, config: &SpiralConfig, index: usize) -> Color {
    let steps = i32::try_from(index).unwrap_or(i32::MAX);
    base.lighten(config.lighten_delta.saturating_mul(steps))
}

/// `index * fade_duration`, saturating.
pub fn reveal_delay_for(config: &SpiralConfig, index: usize) -> Duration {
    let steps = u32::try_from(index).unwrap_or(u32::MAX);
    config.fade_duration.saturating_mul(steps)
}

/// Materialize the whole spiral for `initial`.
///
/// An empty rectangle or a zero tile budget gives an empty list.
pub fn generate<S: RandomSource + ?Sized>(
    initial: Rect,
    base: Color,
    config: &SpiralConfig,
    source: &mut S,
) -> Vec<Tile> {
    SpiralTiles::new(initial, base, config, source).collect()
}
