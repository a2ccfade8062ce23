//! The [`Surface`] type — the styled character grid drivers render from.
//!
//! A `Surface` is a view into a shared backing buffer: cloning yields
//! another view of the **same** storage, and [`slice`](Surface::slice)
//! narrows the view to a sub-rectangle. Widgets draw into slices without
//! knowing where on screen they live.

use std::cell::RefCell;
use std::rc::Rc;

use crate::color::Rgba;
use crate::geom::{Point, Rect};

// ---------------------------------------------------------------------------
// Style / Cell
// ---------------------------------------------------------------------------

/// Foreground and background colors for one surface cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Style {
    pub fg: Rgba,
    pub bg: Rgba,
}

impl Style {
    /// Create a style from foreground and background colors.
    #[inline]
    pub const fn new(fg: Rgba, bg: Rgba) -> Self {
        Self { fg, bg }
    }

    /// Set the foreground color (builder).
    #[inline]
    pub const fn with_fg(mut self, fg: Rgba) -> Self {
        self.fg = fg;
        self
    }

    /// Set the background color (builder).
    #[inline]
    pub const fn with_bg(mut self, bg: Rgba) -> Self {
        self.bg = bg;
        self
    }

    /// Swap foreground and background (used for highlights).
    #[inline]
    pub const fn reversed(self) -> Self {
        Self {
            fg: self.bg,
            bg: self.fg,
        }
    }
}

impl Default for Style {
    #[inline]
    fn default() -> Self {
        Self {
            fg: Rgba::WHITE,
            bg: Rgba::BLACK,
        }
    }
}

/// A styled character cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub ch: char,
    pub style: Style,
}

impl Cell {
    /// Set the character (builder).
    #[inline]
    pub const fn with_char(mut self, ch: char) -> Self {
        self.ch = ch;
        self
    }

    /// Set the style (builder).
    #[inline]
    pub const fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl Default for Cell {
    #[inline]
    fn default() -> Self {
        Self {
            ch: ' ',
            style: Style::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Surface
// ---------------------------------------------------------------------------

#[derive(Debug)]
struct SurfaceBuffer {
    cells: Vec<Cell>,
    width: i32,
}

impl SurfaceBuffer {
    #[inline]
    fn index(&self, p: Point) -> usize {
        (p.y * self.width + p.x) as usize
    }
}

/// A 2D grid of [`Cell`]s backed by shared storage.
#[derive(Clone, Debug)]
pub struct Surface {
    buffer: Rc<RefCell<SurfaceBuffer>>,
    bounds: Rect,
}

impl Surface {
    /// Create a surface of the given dimensions, filled with default cells.
    pub fn new(width: i32, height: i32) -> Self {
        let w = width.max(0);
        let h = height.max(0);
        Self {
            buffer: Rc::new(RefCell::new(SurfaceBuffer {
                cells: vec![Cell::default(); (w * h) as usize],
                width: w,
            })),
            bounds: Rect::new(0, 0, w, h),
        }
    }

    /// Bounds of this view.
    #[inline]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// A narrower view sharing the same storage. The new bounds are the
    /// intersection of `r` with the current bounds.
    pub fn slice(&self, r: Rect) -> Surface {
        Surface {
            buffer: Rc::clone(&self.buffer),
            bounds: self.bounds.intersect(r),
        }
    }

    /// Read the cell at `p` (absolute coordinates). Out-of-bounds reads
    /// return the default cell.
    pub fn at(&self, p: Point) -> Cell {
        if !self.bounds.contains(p) {
            return Cell::default();
        }
        let buf = self.buffer.borrow();
        let i = buf.index(p);
        buf.cells[i]
    }

    /// Write the cell at `p`. No-op outside this view's bounds.
    pub fn set(&self, p: Point, cell: Cell) {
        if !self.bounds.contains(p) {
            return;
        }
        let mut buf = self.buffer.borrow_mut();
        let i = buf.index(p);
        buf.cells[i] = cell;
    }

    /// Fill every cell in the view with `cell`.
    pub fn fill(&self, cell: Cell) {
        let mut buf = self.buffer.borrow_mut();
        for p in self.bounds.iter() {
            let i = buf.index(p);
            buf.cells[i] = cell;
        }
    }

    /// Write a run of styled text starting at `p`, clipped to the view.
    pub fn print(&self, p: Point, text: &str, style: Style) {
        let mut x = p.x;
        for ch in text.chars() {
            self.set(Point::new(x, p.y), Cell { ch, style });
            x += 1;
        }
    }

    /// Copy every cell of `src` into `self`, aligning the two views' `min`
    /// corners. Extra cells on either side are ignored.
    pub fn copy_from(&self, src: &Surface) {
        let w = src.width().min(self.width());
        let h = src.height().min(self.height());
        for dy in 0..h {
            for dx in 0..w {
                let sp = src.bounds.min.shift(dx, dy);
                let dp = self.bounds.min.shift(dx, dy);
                self.set(dp, src.at(sp));
            }
        }
    }

    /// Row-major iterator over `(Point, Cell)` pairs in the view.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Cell)> + '_ {
        self.bounds.iter().map(|p| (p, self.at(p)))
    }
}

// ---------------------------------------------------------------------------
// Patch / diff
// ---------------------------------------------------------------------------

/// A single cell that changed between two frames.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PatchCell {
    pub pos: Point,
    pub cell: Cell,
}

/// The set of cells that changed between two frames.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Patch {
    pub cells: Vec<PatchCell>,
    pub width: i32,
    pub height: i32,
}

impl Patch {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Compute the cells that differ between two same-sized surfaces.
pub fn diff(prev: &Surface, curr: &Surface) -> Patch {
    let bounds = curr.bounds();
    let mut cells = Vec::new();
    for p in bounds.iter() {
        let cc = curr.at(p);
        if prev.at(p) != cc {
            cells.push(PatchCell { pos: p, cell: cc });
        }
    }
    Patch {
        cells,
        width: bounds.width(),
        height: bounds.height(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_and_at() {
        let s = Surface::new(4, 3);
        assert_eq!(s.width(), 4);
        assert_eq!(s.height(), 3);
        assert_eq!(s.at(Point::new(0, 0)), Cell::default());
        assert_eq!(s.at(Point::new(9, 9)), Cell::default());
    }

    #[test]
    fn set_and_get() {
        let s = Surface::new(4, 3);
        let c = Cell::default().with_char('X');
        s.set(Point::new(2, 1), c);
        assert_eq!(s.at(Point::new(2, 1)).ch, 'X');
        // Out of bounds write is a no-op.
        s.set(Point::new(4, 0), c);
    }

    #[test]
    fn slice_shares_buffer() {
        let s = Surface::new(4, 3);
        let sub = s.slice(Rect::new(1, 1, 3, 3));
        sub.set(Point::new(1, 1), Cell::default().with_char('#'));
        assert_eq!(s.at(Point::new(1, 1)).ch, '#');
        // The slice cannot write outside its bounds.
        sub.set(Point::new(0, 0), Cell::default().with_char('!'));
        assert_eq!(s.at(Point::new(0, 0)).ch, ' ');
    }

    #[test]
    fn print_clips() {
        let s = Surface::new(4, 1);
        s.print(Point::new(2, 0), "abcd", Style::default());
        assert_eq!(s.at(Point::new(2, 0)).ch, 'a');
        assert_eq!(s.at(Point::new(3, 0)).ch, 'b');
        // 'c' and 'd' fell off the edge.
    }

    #[test]
    fn fill_covers_view_only() {
        let s = Surface::new(3, 3);
        let sub = s.slice(Rect::new(0, 0, 2, 2));
        sub.fill(Cell::default().with_char('.'));
        assert_eq!(s.at(Point::new(1, 1)).ch, '.');
        assert_eq!(s.at(Point::new(2, 2)).ch, ' ');
    }

    #[test]
    fn diff_reports_changes_only() {
        let a = Surface::new(3, 2);
        let b = Surface::new(3, 2);
        b.set(Point::new(1, 0), Cell::default().with_char('A'));
        let patch = diff(&a, &b);
        assert_eq!(patch.cells.len(), 1);
        assert_eq!(patch.cells[0].pos, Point::new(1, 0));
        assert_eq!(patch.cells[0].cell.ch, 'A');
        assert_eq!(patch.width, 3);
    }

    #[test]
    fn copy_from_then_diff_is_empty() {
        let a = Surface::new(3, 2);
        let b = Surface::new(3, 2);
        b.set(Point::new(2, 1), Cell::default().with_char('Z'));
        a.copy_from(&b);
        assert!(diff(&a, &b).is_empty());
    }
}
