//! Graphical (winit + softbuffer) entry point.

use std::fs;
use std::path::Path;

use dotpad_lib::{DotpadModel, UI_COLS, UI_ROWS};
use pxgrid_core::{AppRunner, EventLoopDriver};
use pxgrid_winit::{WinitConfig, WinitDriver};

/// Monospace fonts commonly present on Linux and macOS; the first one found
/// wins. Without a font the editor still runs, just without labels.
const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf",
    "/usr/share/fonts/TTF/DejaVuSansMono.ttf",
    "/usr/share/fonts/dejavu/DejaVuSansMono.ttf",
    "/System/Library/Fonts/Menlo.ttc",
];

fn load_font() -> Option<Vec<u8>> {
    for path in FONT_CANDIDATES {
        if Path::new(path).exists() {
            match fs::read(path) {
                Ok(data) => return Some(data),
                Err(e) => log::warn!("could not read font {path}: {e}"),
            }
        }
    }
    log::warn!("no system font found, UI text will not render");
    None
}

fn main() {
    let model = DotpadModel::new();
    let driver = WinitDriver::new(WinitConfig {
        title: "dotpad".into(),
        font_data: load_font(),
        font_size: 18.0,
    });

    let runner = AppRunner::new(Box::new(model), UI_COLS, UI_ROWS);

    if let Err(e) = driver.run(runner) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
