//! **pxgrid-export** — rasterizes a [`Canvas`] into a PNG at a chosen
//! output size.
//!
//! Each canvas cell maps to one axis-aligned block of the output image.
//! Block edges are computed with integer division (`col * size / n`) so the
//! blocks tile the image exactly, with no overlap or gap, even when the
//! grid side does not divide the output size. Rendering is deterministic:
//! identical inputs produce identical pixels.

use std::fmt;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::{ImageFormat, Rgba as ImgRgba, RgbaImage};
use time::macros::format_description;
use time::OffsetDateTime;

use pxgrid_core::{Background, Canvas};

// ---------------------------------------------------------------------------
// Options / errors
// ---------------------------------------------------------------------------

/// Export parameters.
#[derive(Clone, Copy, Debug)]
pub struct ExportOptions {
    /// Output image side length in pixels. Upstream keeps this within
    /// `[grid size, 1024]`; [`render`] additionally clamps it to at least
    /// the grid side so blocks are never sub-pixel.
    pub size: u32,
    /// Background applied to unpainted area.
    pub background: Background,
}

/// Error producing or writing an export.
#[derive(Debug)]
pub enum ExportError {
    /// PNG encoding failed.
    Encode(image::ImageError),
    /// Writing the output file failed.
    Io(std::io::Error),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportError::Encode(e) => write!(f, "png encoding failed: {e}"),
            ExportError::Io(e) => write!(f, "writing export failed: {e}"),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExportError::Encode(e) => Some(e),
            ExportError::Io(e) => Some(e),
        }
    }
}

impl From<image::ImageError> for ExportError {
    fn from(e: image::ImageError) -> Self {
        Self::Encode(e)
    }
}

impl From<std::io::Error> for ExportError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

// ---------------------------------------------------------------------------
// Rasterization
// ---------------------------------------------------------------------------

/// Rasterize `canvas` into an RGBA image of `opts.size` square pixels.
pub fn render(canvas: &Canvas, opts: &ExportOptions) -> RgbaImage {
    let n = canvas.size() as u32;
    let size = opts.size.max(n);

    let backdrop = match opts.background {
        Background::Transparent => ImgRgba([0, 0, 0, 0]),
        Background::White => ImgRgba([255, 255, 255, 255]),
    };
    let mut img = RgbaImage::from_pixel(size, size, backdrop);

    for (p, cell) in canvas.iter() {
        let Some(color) = cell else { continue };
        let px = ImgRgba([color.r, color.g, color.b, color.a]);
        let (col, row) = (p.x as u32, p.y as u32);
        let x0 = col * size / n;
        let x1 = (col + 1) * size / n;
        let y0 = row * size / n;
        let y1 = (row + 1) * size / n;
        for y in y0..y1 {
            for x in x0..x1 {
                img.put_pixel(x, y, px);
            }
        }
    }

    img
}

/// Rasterize and encode to PNG bytes.
pub fn encode_png(canvas: &Canvas, opts: &ExportOptions) -> Result<Vec<u8>, ExportError> {
    let img = render(canvas, opts);
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)?;
    Ok(buf)
}

/// Rasterize, encode, and write `pixel-art-{S}x{S}-{timestamp}.png` into
/// `dir`. Returns the path written.
pub fn export_file(
    canvas: &Canvas,
    opts: &ExportOptions,
    dir: &Path,
) -> Result<PathBuf, ExportError> {
    let bytes = encode_png(canvas, opts)?;
    let size = opts.size.max(canvas.size() as u32);
    let path = dir.join(file_name(size));
    fs::write(&path, bytes)?;
    Ok(path)
}

/// `pixel-art-{size}x{size}-{timestamp}.png` with a UTC timestamp truncated
/// to whole seconds, colons replaced by hyphens.
pub fn file_name(size: u32) -> String {
    format!("pixel-art-{size}x{size}-{}.png", timestamp())
}

fn timestamp() -> String {
    let format = format_description!("[year]-[month]-[day]T[hour]-[minute]-[second]");
    OffsetDateTime::now_utc()
        .format(format)
        .unwrap_or_else(|_| String::from("1970-01-01T00-00-00"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pxgrid_core::{Point, Rgba};

    const RED: Rgba = Rgba::rgb(255, 0, 0);
    const BLUE: Rgba = Rgba::rgb(0, 0, 255);

    fn two_by_two() -> Canvas {
        let mut c = Canvas::new(2);
        c.set_cell(Point::new(0, 0), Some(RED));
        c.set_cell(Point::new(1, 1), Some(BLUE));
        c
    }

    #[test]
    fn dimensions_match_output_size() {
        let c = Canvas::new(16);
        let img = render(
            &c,
            &ExportOptions {
                size: 512,
                background: Background::Transparent,
            },
        );
        assert_eq!(img.dimensions(), (512, 512));
    }

    #[test]
    fn red_blue_on_white_4px() {
        // 2x2 grid, (0,0) red and (1,1) blue, exported at 4x4 on white:
        // top-left 2x2 block red, bottom-right 2x2 block blue, rest white.
        let img = render(
            &two_by_two(),
            &ExportOptions {
                size: 4,
                background: Background::White,
            },
        );
        let red = ImgRgba([255, 0, 0, 255]);
        let blue = ImgRgba([0, 0, 255, 255]);
        let white = ImgRgba([255, 255, 255, 255]);
        for y in 0..4u32 {
            for x in 0..4u32 {
                let expected = match (x < 2, y < 2) {
                    (true, true) => red,
                    (false, false) => blue,
                    _ => white,
                };
                assert_eq!(*img.get_pixel(x, y), expected, "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn transparent_background_has_zero_alpha() {
        let img = render(
            &two_by_two(),
            &ExportOptions {
                size: 4,
                background: Background::Transparent,
            },
        );
        assert_eq!(img.get_pixel(3, 0)[3], 0);
        assert_eq!(img.get_pixel(0, 0)[3], 255);
    }

    #[test]
    fn blocks_tile_exactly_when_size_not_divisible() {
        // 3 cells over 10 pixels: edges at 0, 3, 6, 10.
        let mut c = Canvas::new(3);
        for (i, p) in c.bounds().iter().enumerate() {
            c.set_cell(p, Some(Rgba::rgb((i * 20) as u8, 0, 0)));
        }
        let img = render(
            &c,
            &ExportOptions {
                size: 10,
                background: Background::Transparent,
            },
        );
        // Every pixel is covered (no gaps)...
        assert!(img.pixels().all(|p| p[3] == 255));
        // ...and each column of pixels belongs to exactly one cell column.
        assert_eq!(img.get_pixel(2, 0).0[0], img.get_pixel(0, 0).0[0]);
        assert_ne!(img.get_pixel(3, 0).0[0], img.get_pixel(2, 0).0[0]);
        assert_ne!(img.get_pixel(6, 0).0[0], img.get_pixel(5, 0).0[0]);
    }

    #[test]
    fn undersized_output_clamps_to_grid_side() {
        let c = Canvas::new(8);
        let img = render(
            &c,
            &ExportOptions {
                size: 2,
                background: Background::Transparent,
            },
        );
        assert_eq!(img.dimensions(), (8, 8));
    }

    #[test]
    fn render_is_deterministic() {
        let c = two_by_two();
        let opts = ExportOptions {
            size: 64,
            background: Background::White,
        };
        assert_eq!(encode_png(&c, &opts).unwrap(), encode_png(&c, &opts).unwrap());
    }

    #[test]
    fn png_magic_bytes() {
        let bytes = encode_png(
            &two_by_two(),
            &ExportOptions {
                size: 4,
                background: Background::Transparent,
            },
        )
        .unwrap();
        assert_eq!(&bytes[..8], &[0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n']);
    }

    #[test]
    fn file_name_pattern() {
        let name = file_name(512);
        assert!(name.starts_with("pixel-art-512x512-"));
        assert!(name.ends_with(".png"));
        assert!(!name.contains(':'));
        // Timestamp is whole seconds: YYYY-MM-DDTHH-MM-SS.
        let stamp = &name["pixel-art-512x512-".len()..name.len() - 4];
        assert_eq!(stamp.len(), 19);
    }

    #[test]
    fn export_file_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = export_file(
            &two_by_two(),
            &ExportOptions {
                size: 4,
                background: Background::White,
            },
            dir.path(),
        )
        .unwrap();
        let bytes = fs::read(&path).unwrap();
        assert_eq!(&bytes[..4], &[0x89, b'P', b'N', b'G']);
        assert!(path.file_name().unwrap().to_str().unwrap().starts_with("pixel-art-4x4-"));
    }
}
