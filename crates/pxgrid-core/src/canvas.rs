//! The [`Canvas`] type — the square artwork grid of optional colors.
//!
//! A canvas cell is either painted (`Some(Rgba)`) or empty (`None`). The
//! matrix always holds exactly `size * size` cells; resizing produces a
//! fresh, all-empty canvas (gating a destructive resize behind a
//! confirmation prompt is the UI layer's job).

use crate::color::Rgba;
use crate::geom::{Point, Rect};

/// Default canvas side length.
pub const DEFAULT_SIZE: i32 = 16;

/// A square grid of optional pixel colors, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Canvas {
    cells: Vec<Option<Rgba>>,
    size: i32,
}

impl Canvas {
    /// Create an all-empty canvas of side `size` (clamped to at least 1).
    pub fn new(size: i32) -> Self {
        let size = size.max(1);
        Self {
            cells: vec![None; (size * size) as usize],
            size,
        }
    }

    /// Side length.
    #[inline]
    pub fn size(&self) -> i32 {
        self.size
    }

    /// Bounds as a rectangle anchored at the origin.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.size, self.size)
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if self.bounds().contains(p) {
            Some((p.y * self.size + p.x) as usize)
        } else {
            None
        }
    }

    /// Read the cell at `p` (x = column, y = row). Out of bounds reads as
    /// empty.
    #[inline]
    pub fn cell(&self, p: Point) -> Option<Rgba> {
        self.index(p).and_then(|i| self.cells[i])
    }

    /// Write the cell at `p`. No-op if `p` is out of bounds.
    #[inline]
    pub fn set_cell(&mut self, p: Point, color: Option<Rgba>) {
        if let Some(i) = self.index(p) {
            self.cells[i] = color;
        }
    }

    /// Empty every cell, keeping the size.
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// A fresh all-empty canvas of side `new_size`. Resizing always
    /// discards content.
    pub fn resized(&self, new_size: i32) -> Self {
        Self::new(new_size)
    }

    /// Whether any cell is painted.
    pub fn has_content(&self) -> bool {
        self.cells.iter().any(Option::is_some)
    }

    /// Row-major iterator over `(Point, Option<Rgba>)`.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Option<Rgba>)> + '_ {
        self.bounds().iter().map(|p| (p, self.cell(p)))
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_canvas_is_empty() {
        let c = Canvas::new(4);
        assert_eq!(c.size(), 4);
        assert!(!c.has_content());
        assert_eq!(c.iter().count(), 16);
        assert!(c.iter().all(|(_, cell)| cell.is_none()));
    }

    #[test]
    fn set_and_get() {
        let mut c = Canvas::new(4);
        let red = Rgba::rgb(255, 0, 0);
        c.set_cell(Point::new(2, 1), Some(red));
        assert_eq!(c.cell(Point::new(2, 1)), Some(red));
        assert_eq!(c.cell(Point::new(1, 2)), None);
        assert!(c.has_content());
    }

    #[test]
    fn out_of_bounds_is_noop() {
        let mut c = Canvas::new(4);
        c.set_cell(Point::new(4, 0), Some(Rgba::BLACK));
        c.set_cell(Point::new(0, -1), Some(Rgba::BLACK));
        assert!(!c.has_content());
        assert_eq!(c.cell(Point::new(7, 7)), None);
    }

    #[test]
    fn clear_keeps_size() {
        let mut c = Canvas::new(8);
        c.set_cell(Point::new(3, 3), Some(Rgba::WHITE));
        c.clear();
        assert_eq!(c.size(), 8);
        assert!(!c.has_content());
    }

    #[test]
    fn resized_discards_content() {
        let mut c = Canvas::new(8);
        c.set_cell(Point::new(0, 0), Some(Rgba::WHITE));
        let r = c.resized(16);
        assert_eq!(r.size(), 16);
        assert!(!r.has_content());
        // The original is untouched.
        assert!(c.has_content());
    }

    #[test]
    fn size_clamped_to_one() {
        assert_eq!(Canvas::new(0).size(), 1);
        assert_eq!(Canvas::new(-3).size(), 1);
    }
}
