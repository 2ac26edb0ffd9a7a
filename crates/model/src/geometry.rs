//! Points, sizes, and rectangles in backing-pixel space.

use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// A 2D point in backing-pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Width and height of an image or surface.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Size of a pixel buffer.
    pub fn from_pixels(width: u32, height: u32) -> Self {
        Self::new(width as f64, height as f64)
    }

    /// True when both dimensions are finite and strictly positive.
    pub fn has_area(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// An axis-aligned rectangle.
///
/// Always normalized: `width` and `height` are non-negative and `(x, y)` is
/// the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Create a rectangle; negative extents are flipped so the result is
    /// normalized.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::from_corners(Point::new(x, y), Point::new(x + width, y + height))
    }

    /// Normalize two arbitrary corner points into a rectangle.
    ///
    /// The result is the same whichever corner comes first.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            x: a.x.min(b.x),
            y: a.y.min(b.y),
            width: (b.x - a.x).abs(),
            height: (b.y - a.y).abs(),
        }
    }

    /// A rectangle covering `size` at the origin.
    pub fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Right edge.
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge.
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// True when the rectangle encloses no area.
    pub fn is_degenerate(&self) -> bool {
        !self.size().has_area()
    }

    /// Check if a point is within this rectangle, edges included.
    ///
    /// Compares offsets from the origin so the corners passed to
    /// [`Rect::from_corners`] are always inside.
    pub fn contains(&self, p: Point) -> bool {
        let dx = p.x - self.x;
        let dy = p.y - self.y;
        dx >= 0.0 && dx <= self.width && dy >= 0.0 && dy <= self.height
    }

    /// Overlap of two rectangles; zero-sized when they do not overlap.
    pub fn intersection(&self, other: &Rect) -> Rect {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        Rect {
            x,
            y,
            width: (right - x).max(0.0),
            height: (bottom - y).max(0.0),
        }
    }

    /// True when the two rectangles share a region of positive area.
    pub fn overlaps(&self, other: &Rect) -> bool {
        !self.intersection(other).is_degenerate()
    }

    /// Grow (or, with a negative amount, shrink) every edge by `amount`.
    /// Shrinking never produces negative extents.
    pub fn inflate(&self, amount: f64) -> Rect {
        let width = (self.width + 2.0 * amount).max(0.0);
        let height = (self.height + 2.0 * amount).max(0.0);
        Rect {
            x: self.center().x - width / 2.0,
            y: self.center().y - height / 2.0,
            width,
            height,
        }
    }
}

/// Accumulated drag offset for the pannable-cover crop window.
///
/// Stored unclamped; the layout engine clamps it whenever it is consumed.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PanOffset {
    pub x: f64,
    pub y: f64,
}

impl PanOffset {
    pub const ZERO: PanOffset = PanOffset { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Add a pointer delta to the offset.
    pub fn accumulate(&mut self, delta: Point) {
        self.x += delta.x;
        self.y += delta.y;
    }

    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_corners_normalizes() {
        let r = Rect::from_corners(Point::new(50.0, 10.0), Point::new(20.0, 40.0));
        assert_eq!(r, Rect::new(20.0, 10.0, 30.0, 30.0));
    }

    #[test]
    fn test_new_flips_negative_extent() {
        let r = Rect::new(100.0, 100.0, -40.0, -10.0);
        assert_eq!(r.x, 60.0);
        assert_eq!(r.y, 90.0);
        assert_eq!(r.width, 40.0);
        assert_eq!(r.height, 10.0);
    }

    #[test]
    fn test_contains_is_inclusive() {
        let r = Rect::new(10.0, 10.0, 20.0, 20.0);
        assert!(r.contains(Point::new(10.0, 10.0)));
        assert!(r.contains(Point::new(30.0, 30.0)));
        assert!(!r.contains(Point::new(30.01, 20.0)));
        assert!(!r.contains(Point::new(9.99, 20.0)));
    }

    #[test]
    fn test_contains_far_corner_after_rounding() {
        let a = Point::new(0.0, -175.051220675087);
        let b = Point::new(0.0, 553.395355931354);
        let r = Rect::from_corners(a, b);
        assert!(r.contains(a));
        assert!(r.contains(b));
    }

    #[test]
    fn test_degenerate() {
        assert!(Rect::new(5.0, 5.0, 0.0, 10.0).is_degenerate());
        assert!(Rect::new(5.0, 5.0, 10.0, 0.0).is_degenerate());
        assert!(!Rect::new(5.0, 5.0, 1.0, 1.0).is_degenerate());
    }

    #[test]
    fn test_intersection() {
        let a = Rect::new(0.0, 0.0, 100.0, 50.0);
        let b = Rect::new(80.0, 20.0, 50.0, 50.0);
        assert_eq!(a.intersection(&b), Rect::new(80.0, 20.0, 20.0, 30.0));

        let far = Rect::new(200.0, 200.0, 10.0, 10.0);
        assert!(a.intersection(&far).is_degenerate());
        assert!(!a.overlaps(&far));
    }

    #[test]
    fn test_inflate() {
        let r = Rect::new(10.0, 10.0, 20.0, 20.0);
        assert_eq!(r.inflate(1.0), Rect::new(9.0, 9.0, 22.0, 22.0));
        assert_eq!(r.inflate(-20.0).size(), Size::new(0.0, 0.0));
    }

    #[test]
    fn test_pan_offset_accumulates() {
        let mut offset = PanOffset::ZERO;
        offset.accumulate(Point::new(3.0, -2.0));
        offset.accumulate(Point::new(1.5, 4.0));
        assert_eq!(offset, PanOffset::new(4.5, 2.0));
        assert!(!offset.is_zero());
    }
}
