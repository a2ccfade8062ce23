//! Geometry primitives: [`Point`] and [`Rect`].

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A 2D integer point. X grows right, Y grows down (screen coordinates).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return a point shifted by (dx, dy).
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

// ---------------------------------------------------------------------------
// Rect
// ---------------------------------------------------------------------------

/// A half-open rectangle \[min, max): `min` inclusive, `max` exclusive.
///
/// Used for widget layout and pointer hit testing.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl Rect {
    /// Create a rectangle from two corners, canonicalized so that
    /// `min` ≤ `max` on each axis.
    #[inline]
    pub fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self {
            min: Point::new(x0.min(x1), y0.min(y1)),
            max: Point::new(x0.max(x1), y0.max(y1)),
        }
    }

    /// Rectangle anchored at `origin` with the given width and height.
    #[inline]
    pub fn sized(origin: Point, width: i32, height: i32) -> Self {
        Self::new(origin.x, origin.y, origin.x + width, origin.y + height)
    }

    /// Width of the rectangle.
    #[inline]
    pub fn width(self) -> i32 {
        self.max.x - self.min.x
    }

    /// Height of the rectangle.
    #[inline]
    pub fn height(self) -> i32 {
        self.max.y - self.min.y
    }

    /// Whether the rectangle has zero area.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y
    }

    /// Whether `p` lies inside the half-open rectangle.
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        p.x >= self.min.x && p.x < self.max.x && p.y >= self.min.y && p.y < self.max.y
    }

    /// Intersection of two rectangles; empty intersections normalize to the
    /// zero rectangle.
    #[inline]
    pub fn intersect(self, other: Rect) -> Self {
        let r = Self {
            min: Point::new(self.min.x.max(other.min.x), self.min.y.max(other.min.y)),
            max: Point::new(self.max.x.min(other.max.x), self.max.y.min(other.max.y)),
        };
        if r.is_empty() { Self::default() } else { r }
    }

    /// Row-major iterator over every point in the rectangle.
    #[inline]
    pub fn iter(self) -> RectIter {
        RectIter {
            rect: self,
            cur: self.min,
        }
    }
}

impl IntoIterator for Rect {
    type Item = Point;
    type IntoIter = RectIter;
    #[inline]
    fn into_iter(self) -> RectIter {
        self.iter()
    }
}

/// Row-major iterator over the points of a [`Rect`].
#[derive(Clone, Debug)]
pub struct RectIter {
    rect: Rect,
    cur: Point,
}

impl Iterator for RectIter {
    type Item = Point;

    #[inline]
    fn next(&mut self) -> Option<Point> {
        if self.rect.is_empty() || self.cur.y >= self.rect.max.y {
            return None;
        }
        let p = self.cur;
        self.cur.x += 1;
        if self.cur.x >= self.rect.max.x {
            self.cur.x = self.rect.min.x;
            self.cur.y += 1;
        }
        Some(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_arithmetic() {
        let a = Point::new(1, 2);
        let b = Point::new(3, 4);
        assert_eq!(a + b, Point::new(4, 6));
        assert_eq!(b - a, Point::new(2, 2));
        assert_eq!(a.shift(-1, 1), Point::new(0, 3));
    }

    #[test]
    fn rect_basics() {
        let r = Rect::new(1, 2, 4, 5);
        assert_eq!(r.width(), 3);
        assert_eq!(r.height(), 3);
        assert!(r.contains(Point::new(1, 2)));
        assert!(r.contains(Point::new(3, 4)));
        assert!(!r.contains(Point::new(4, 2)));
        assert!(!r.contains(Point::new(1, 5)));
    }

    #[test]
    fn rect_auto_canonicalize() {
        let r = Rect::new(4, 5, 1, 2);
        assert_eq!(r.min, Point::new(1, 2));
        assert_eq!(r.max, Point::new(4, 5));
    }

    #[test]
    fn rect_sized() {
        let r = Rect::sized(Point::new(2, 3), 4, 2);
        assert_eq!(r.max, Point::new(6, 5));
    }

    #[test]
    fn rect_intersect() {
        let a = Rect::new(0, 0, 4, 4);
        let b = Rect::new(2, 2, 6, 6);
        assert_eq!(a.intersect(b), Rect::new(2, 2, 4, 4));
        let c = Rect::new(10, 10, 12, 12);
        assert!(a.intersect(c).is_empty());
        assert_eq!(a.intersect(c), Rect::default());
    }

    #[test]
    fn rect_iter_row_major() {
        let r = Rect::new(0, 0, 3, 2);
        let pts: Vec<_> = r.iter().collect();
        assert_eq!(pts.len(), 6);
        assert_eq!(pts[0], Point::new(0, 0));
        assert_eq!(pts[2], Point::new(2, 0));
        assert_eq!(pts[5], Point::new(2, 1));
    }

    #[test]
    fn empty_rect_iter() {
        assert_eq!(Rect::default().iter().count(), 0);
    }
}
