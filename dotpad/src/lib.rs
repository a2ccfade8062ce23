//! **dotpad** — a grid-based pixel art editor with PNG export.
//!
//! Paint a small square grid with the mouse, pick colors from a preset
//! palette, and export the artwork as a PNG at a chosen output resolution
//! (transparent or white background).

pub mod model;
pub mod theme;

pub use model::{DotpadModel, UI_COLS, UI_ROWS};
