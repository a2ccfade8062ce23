//! Editor state: the current tool, palette color, export settings, and the
//! paint operation itself.
//!
//! [`EditorState`] is an explicitly owned struct threaded through the
//! application model by reference; nothing here is global.

use crate::canvas::Canvas;
use crate::color::Rgba;
use crate::geom::Point;

/// Upper bound for the export output size, in pixels.
pub const OUTPUT_MAX: u32 = 1024;

/// Default export output size.
pub const DEFAULT_OUTPUT_SIZE: u32 = 512;

/// The active paint tool.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tool {
    #[default]
    Draw,
    Erase,
}

/// Background applied at export time only.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Background {
    #[default]
    Transparent,
    White,
}

/// The whole mutable editor state.
#[derive(Clone, Debug)]
pub struct EditorState {
    pub canvas: Canvas,
    pub tool: Tool,
    pub color: Rgba,
    pub background: Background,
    output_size: u32,
    drawing: bool,
}

impl EditorState {
    /// Fresh state with an empty canvas of the given side length.
    pub fn new(grid_size: i32) -> Self {
        let canvas = Canvas::new(grid_size);
        let mut state = Self {
            canvas,
            tool: Tool::Draw,
            color: Rgba::BLACK,
            background: Background::Transparent,
            output_size: DEFAULT_OUTPUT_SIZE,
            drawing: false,
        };
        state.output_size = state.clamp_output(DEFAULT_OUTPUT_SIZE);
        state
    }

    /// Apply the current tool at `p`: Draw sets the cell to the current
    /// color, Erase empties it. Out of bounds is a no-op. Returns whether a
    /// cell actually changed.
    pub fn paint(&mut self, p: Point) -> bool {
        let before = self.canvas.cell(p);
        let after = match self.tool {
            Tool::Draw => Some(self.color),
            Tool::Erase => None,
        };
        if !self.canvas.bounds().contains(p) || before == after {
            return false;
        }
        self.canvas.set_cell(p, after);
        true
    }

    /// Configured export output size, always within
    /// `[canvas.size(), OUTPUT_MAX]`.
    #[inline]
    pub fn output_size(&self) -> u32 {
        self.output_size
    }

    /// Set the output size, clamped into `[canvas.size(), OUTPUT_MAX]`.
    /// Returns the stored value.
    pub fn set_output_size(&mut self, size: u32) -> u32 {
        self.output_size = self.clamp_output(size);
        self.output_size
    }

    fn clamp_output(&self, size: u32) -> u32 {
        // The low bound itself is capped so a canvas wider than OUTPUT_MAX
        // cannot invert the clamp range.
        let lo = (self.canvas.size() as u32).min(OUTPUT_MAX);
        size.clamp(lo, OUTPUT_MAX)
    }

    /// Replace the canvas with a fresh all-empty one of side `n`, then
    /// re-clamp the output size so it never falls below the new grid size.
    /// Callers are responsible for confirming destructive resizes first.
    pub fn resize_canvas(&mut self, n: i32) {
        self.canvas = self.canvas.resized(n);
        self.output_size = self.clamp_output(self.output_size);
    }

    /// Empty all cells, keeping the grid size.
    pub fn clear_canvas(&mut self) {
        self.canvas.clear();
    }

    /// Latch the drag-paint flag (pointer down / touch start).
    #[inline]
    pub fn begin_stroke(&mut self) {
        self.drawing = true;
    }

    /// Release the drag-paint flag (pointer up / leave / touch end).
    #[inline]
    pub fn end_stroke(&mut self) {
        self.drawing = false;
    }

    /// Whether a stroke is in progress; pointer-move handlers paint only
    /// while this is true.
    #[inline]
    pub fn is_drawing(&self) -> bool {
        self.drawing
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(crate::canvas::DEFAULT_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draw_sets_current_color() {
        let mut st = EditorState::new(4);
        st.color = Rgba::rgb(255, 0, 0);
        assert!(st.paint(Point::new(1, 2)));
        assert_eq!(st.canvas.cell(Point::new(1, 2)), Some(Rgba::rgb(255, 0, 0)));
    }

    #[test]
    fn erase_clears_cell() {
        let mut st = EditorState::new(4);
        st.paint(Point::new(0, 0));
        st.tool = Tool::Erase;
        assert!(st.paint(Point::new(0, 0)));
        assert_eq!(st.canvas.cell(Point::new(0, 0)), None);
        assert!(!st.canvas.has_content());
    }

    #[test]
    fn paint_out_of_bounds_is_noop() {
        let mut st = EditorState::new(4);
        assert!(!st.paint(Point::new(4, 0)));
        assert!(!st.paint(Point::new(-1, 3)));
        assert!(!st.canvas.has_content());
    }

    #[test]
    fn repaint_same_color_reports_no_change() {
        let mut st = EditorState::new(4);
        assert!(st.paint(Point::new(1, 1)));
        assert!(!st.paint(Point::new(1, 1)));
    }

    #[test]
    fn output_size_clamped_both_ends() {
        let mut st = EditorState::new(16);
        assert_eq!(st.set_output_size(4), 16);
        assert_eq!(st.set_output_size(99_999), OUTPUT_MAX);
        assert_eq!(st.set_output_size(512), 512);
    }

    #[test]
    fn oversized_canvas_caps_output_at_max() {
        let mut st = EditorState::new(2000);
        assert_eq!(st.output_size(), OUTPUT_MAX);
        assert_eq!(st.set_output_size(10), OUTPUT_MAX);
        st.resize_canvas(4000);
        assert_eq!(st.output_size(), OUTPUT_MAX);
    }

    #[test]
    fn resize_reclamps_output_size() {
        let mut st = EditorState::new(16);
        st.set_output_size(16);
        st.resize_canvas(32);
        assert_eq!(st.output_size(), 32);
        assert_eq!(st.canvas.size(), 32);
        assert!(!st.canvas.has_content());
    }

    #[test]
    fn stroke_latch() {
        let mut st = EditorState::new(4);
        assert!(!st.is_drawing());
        st.begin_stroke();
        assert!(st.is_drawing());
        st.end_stroke();
        assert!(!st.is_drawing());
    }
}
