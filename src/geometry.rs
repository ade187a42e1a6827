// Integer rectangles in screen coordinates (y grows downward).
// A rectangle is either the untiled area that is still available
// or the placement of a single tile.

use crate::error::Error;

/// Four integer bounds with `left <= right` and `top <= bottom`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    /// Build a rectangle, rejecting inverted bounds.
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Result<Self, Error> {
        if left > right || top > bottom {
            return Err(Error::InvalidArgument(format!(
                "rectangle bounds inverted: ({left}, {top}, {right}, {bottom})"
            )));
        }
        Ok(Self { left, top, right, bottom })
    }

    /// A canvas of the given size anchored at the origin.
    pub fn from_size(width: i32, height: i32) -> Result<Self, Error> {
        Self::new(0, 0, width, height)
    }

    /// Exact horizontal span; never overflows.
    #[inline]
    pub fn span_x(&self) -> i64 {
        self.right as i64 - self.left as i64
    }

    #[inline]
    pub fn span_y(&self) -> i64 {
        self.bottom as i64 - self.top as i64
    }

    /// Width saturated into i32. Never larger than the true span, so
    /// `left + width()` and `right - width()` stay inside the rectangle.
    #[inline]
    pub fn width(&self) -> i32 {
        saturate(self.span_x())
    }

    #[inline]
    pub fn height(&self) -> i32 {
        saturate(self.span_y())
    }

    /// Area from the exact spans, saturating at `i64::MAX`.
    #[inline]
    pub fn area(&self) -> i64 {
        self.span_x().max(0).saturating_mul(self.span_y().max(0))
    }

    /// True when there is nothing left to tile.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.span_x() <= 0 || self.span_y() <= 0
    }

    /// True if `other` lies fully inside `self` (edges may touch).
    pub fn contains(&self, other: &Rect) -> bool {
        other.left >= self.left
            && other.top >= self.top
            && other.right <= self.right
            && other.bottom <= self.bottom
    }

    /// The overlapping region, if it has a positive area.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let left = self.left.max(other.left);
        let top = self.top.max(other.top);
        let right = self.right.min(other.right);
        let bottom = self.bottom.min(other.bottom);
        if left < right && top < bottom {
            Some(Rect { left, top, right, bottom })
        } else {
            None
        }
    }

    /// Shared edges do not count as overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.intersection(other).is_some()
    }
}

#[inline]
fn saturate(v: i64) -> i32 {
    v.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}
