//! Renders the surface into a pixel buffer, rasterizing glyphs with fontdue.
//!
//! Each surface cell becomes a fixed-size tile: the cell background fills
//! the tile, and the glyph (if any, and if a font is available) is
//! alpha-blended over it in the foreground color.

use std::collections::HashMap;

use fontdue::{Font, FontSettings};
use pxgrid_core::{Patch, Rgba, Style};

/// Cached rasterized glyph: alpha bitmap plus placement metrics.
struct CachedGlyph {
    bitmap: Vec<u8>,
    width: usize,
    height: usize,
    x_offset: i32,
    y_offset: i32,
}

pub(crate) struct SurfaceRenderer {
    font: Option<Font>,
    font_size: f32,
    cell_width: usize,
    cell_height: usize,
    cols: usize,
    rows: usize,
    /// 0xFFRRGGBB pixels, (cols * cell_width) x (rows * cell_height).
    pixels: Vec<u32>,
    glyphs: HashMap<char, CachedGlyph>,
}

impl SurfaceRenderer {
    pub fn new(font_data: Option<&[u8]>, font_size: f32, cols: usize, rows: usize) -> Self {
        let font = font_data.and_then(|data| match Font::from_bytes(data, FontSettings::default()) {
            Ok(f) => Some(f),
            Err(e) => {
                log::warn!("failed to parse font, text will not render: {e}");
                None
            }
        });

        let (cell_width, cell_height) = match &font {
            Some(font) => {
                let metrics = font
                    .horizontal_line_metrics(font_size)
                    .unwrap_or(fontdue::LineMetrics {
                        ascent: font_size * 0.8,
                        descent: -(font_size * 0.2),
                        line_gap: 0.0,
                        new_line_size: font_size,
                    });
                let h = (metrics.ascent - metrics.descent).ceil() as usize;
                // 'M' advance gives the monospace cell width.
                let (m, _) = font.rasterize('M', font_size);
                (m.advance_width.ceil() as usize, h)
            }
            None => ((font_size * 0.6).ceil() as usize, font_size.ceil() as usize),
        };
        let cell_width = cell_width.max(1);
        let cell_height = cell_height.max(1);

        let pixels = vec![0xFF000000; cols * cell_width * rows * cell_height];

        Self {
            font,
            font_size,
            cell_width,
            cell_height,
            cols,
            rows,
            pixels,
            glyphs: HashMap::new(),
        }
    }

    /// Cell size in pixels.
    pub fn cell_size(&self) -> (usize, usize) {
        (self.cell_width, self.cell_height)
    }

    pub fn pixel_width(&self) -> usize {
        self.cols * self.cell_width
    }

    pub fn pixel_height(&self) -> usize {
        self.rows * self.cell_height
    }

    /// Apply a frame patch to the internal pixel buffer.
    pub fn apply_patch(&mut self, patch: &Patch) {
        for pc in &patch.cells {
            let col = pc.pos.x as usize;
            let row = pc.pos.y as usize;
            if col >= self.cols || row >= self.rows {
                continue;
            }
            self.draw_cell(col, row, pc.cell.ch, pc.cell.style);
        }
    }

    fn cache_glyph(&mut self, ch: char) {
        if self.glyphs.contains_key(&ch) {
            return;
        }
        let Some(font) = &self.font else { return };
        let (metrics, bitmap) = font.rasterize(ch, self.font_size);
        self.glyphs.insert(
            ch,
            CachedGlyph {
                bitmap,
                width: metrics.width,
                height: metrics.height,
                x_offset: metrics.xmin,
                y_offset: metrics.ymin,
            },
        );
    }

    fn draw_cell(&mut self, col: usize, row: usize, ch: char, style: Style) {
        let cw = self.cell_width;
        let chh = self.cell_height;
        let buf_w = self.pixel_width();
        let buf_h = self.pixel_height();
        let x0 = col * cw;
        let y0 = row * chh;

        let bg = opaque(style.bg);
        for dy in 0..chh {
            let start = (y0 + dy) * buf_w + x0;
            if start + cw <= self.pixels.len() {
                self.pixels[start..start + cw].fill(bg);
            }
        }

        if ch == ' ' || self.font.is_none() {
            return;
        }

        self.cache_glyph(ch);
        let Some(glyph) = self.glyphs.get(&ch) else { return };
        if glyph.width == 0 || glyph.height == 0 {
            return;
        }

        let ascent = self
            .font
            .as_ref()
            .and_then(|f| f.horizontal_line_metrics(self.font_size))
            .map(|m| m.ascent.ceil() as i32)
            .unwrap_or(chh as i32);
        let gy0 = ascent - glyph.y_offset - glyph.height as i32;
        let gx0 = glyph.x_offset;

        let fg = style.fg;
        let bgc = style.bg;
        for gy in 0..glyph.height {
            for gx in 0..glyph.width {
                let alpha = glyph.bitmap[gy * glyph.width + gx] as u32;
                if alpha == 0 {
                    continue;
                }
                let px = x0 as i32 + gx0 + gx as i32;
                let py = y0 as i32 + gy0 + gy as i32;
                if px < 0 || py < 0 || px as usize >= buf_w || py as usize >= buf_h {
                    continue;
                }
                let inv = 255 - alpha;
                let r = (fg.r as u32 * alpha + bgc.r as u32 * inv) / 255;
                let g = (fg.g as u32 * alpha + bgc.g as u32 * inv) / 255;
                let b = (fg.b as u32 * alpha + bgc.b as u32 * inv) / 255;
                self.pixels[py as usize * buf_w + px as usize] =
                    0xFF000000 | (r << 16) | (g << 8) | b;
            }
        }
    }

    /// Copy the internal pixel buffer into the window's surface buffer,
    /// clipping to whichever is smaller.
    pub fn blit_to_buffer(&self, buf: &mut [u32], buf_width: usize, buf_height: usize) {
        let src_w = self.pixel_width();
        let copy_w = src_w.min(buf_width);
        let copy_h = self.pixel_height().min(buf_height);

        if buf_width > src_w || buf_height > self.pixel_height() {
            buf.fill(0xFF000000);
        }

        for y in 0..copy_h {
            let src = y * src_w;
            let dst = y * buf_width;
            if src + copy_w <= self.pixels.len() && dst + copy_w <= buf.len() {
                buf[dst..dst + copy_w].copy_from_slice(&self.pixels[src..src + copy_w]);
            }
        }
    }
}

/// Surface colors render opaque; alpha only matters at export time.
#[inline]
fn opaque(c: Rgba) -> u32 {
    0xFF000000 | ((c.r as u32) << 16) | ((c.g as u32) << 8) | (c.b as u32)
}
