//! Colors used by the editor chrome and the preset palette.

use pxgrid_core::{Rgba, Style};

/// The preset swatch palette.
pub const PALETTE: [Rgba; 12] = [
    Rgba::rgb(0x00, 0x00, 0x00), // black
    Rgba::rgb(0xFF, 0xFF, 0xFF), // white
    Rgba::rgb(0xFF, 0x00, 0x00), // red
    Rgba::rgb(0x00, 0xFF, 0x00), // green
    Rgba::rgb(0x00, 0x00, 0xFF), // blue
    Rgba::rgb(0xFF, 0xFF, 0x00), // yellow
    Rgba::rgb(0xFF, 0x00, 0xFF), // magenta
    Rgba::rgb(0x00, 0xFF, 0xFF), // cyan
    Rgba::rgb(0xFF, 0xA5, 0x00), // orange
    Rgba::rgb(0x80, 0x00, 0x80), // purple
    Rgba::rgb(0xFF, 0xC0, 0xCB), // pink
    Rgba::rgb(0xA5, 0x2A, 0x2A), // brown
];

const PANEL_BG: Rgba = Rgba::rgb(0x20, 0x22, 0x28);
const PANEL_FG: Rgba = Rgba::rgb(0xD0, 0xD0, 0xD0);
const DIM_FG: Rgba = Rgba::rgb(0x80, 0x84, 0x90);
const BORDER_FG: Rgba = Rgba::rgb(0x60, 0x64, 0x70);
const DIALOG_BG: Rgba = Rgba::rgb(0x38, 0x3C, 0x48);

/// Checkerboard grays marking empty canvas cells.
pub const CHECKER_LIGHT: Rgba = Rgba::rgb(0x50, 0x50, 0x55);
pub const CHECKER_DARK: Rgba = Rgba::rgb(0x42, 0x42, 0x47);

pub fn panel() -> Style {
    Style::new(PANEL_FG, PANEL_BG)
}

pub fn dim() -> Style {
    Style::new(DIM_FG, PANEL_BG)
}

pub fn border() -> Style {
    Style::new(BORDER_FG, PANEL_BG)
}

pub fn dialog() -> Style {
    Style::new(PANEL_FG, DIALOG_BG)
}
