//! Image files: rendering trees to PNG and loading bitmaps to encode.

use anyhow::{Context, Result};
use image::{ImageFormat, Rgb, RgbImage};
use regiontree::{paint, Bitmap, Color, PaintOptions, Painter, QuadTree};
use std::path::Path;

use crate::config::Colors;

/// Luma values below this are read as black.
pub const BLACK_THRESHOLD: u8 = 128;

/// Paints onto an RGB image with a configurable palette.
pub struct RgbPainter {
    image: RgbImage,
    colors: Colors,
}

impl RgbPainter {
    /// Blank canvas of `size`×`size`, filled with the white colour.
    pub fn new(size: u32, colors: Colors) -> Self {
        Self {
            image: RgbImage::from_pixel(size, size, Rgb(colors.white)),
            colors,
        }
    }

    /// Take the painted image.
    pub fn into_image(self) -> RgbImage {
        self.image
    }

    fn put(&mut self, x: u32, y: u32, rgb: [u8; 3]) {
        if x < self.image.width() && y < self.image.height() {
            self.image.put_pixel(x, y, Rgb(rgb));
        }
    }
}

impl Painter for RgbPainter {
    fn fill_square(&mut self, x: u32, y: u32, side: u32, color: Color) {
        let rgb = match color {
            Color::Black => self.colors.black,
            Color::White => self.colors.white,
        };
        for row in y..y.saturating_add(side) {
            for col in x..x.saturating_add(side) {
                self.put(col, row, rgb);
            }
        }
    }

    fn outline_square(&mut self, x: u32, y: u32, side: u32) {
        let last = side.saturating_sub(1);
        let rgb = self.colors.outline;
        for i in 0..side {
            self.put(x + i, y, rgb);
            self.put(x + i, y + last, rgb);
            self.put(x, y + i, rgb);
            self.put(x + last, y + i, rgb);
        }
    }
}

/// Paint `tree` into a new RGB image.
pub fn render(tree: &QuadTree, options: &PaintOptions, colors: Colors) -> RgbImage {
    let mut painter = RgbPainter::new(options.size, colors);
    paint(tree, &mut painter, options);
    painter.into_image()
}

/// Paint `tree` and save it as a PNG file.
pub fn render_to_file(
    tree: &QuadTree,
    options: &PaintOptions,
    colors: Colors,
    path: &Path,
) -> Result<()> {
    let image = render(tree, options, colors);
    image
        .save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("Failed to write image: {}", path.display()))
}

/// Threshold a greyscale image into a bitmap.
pub fn bitmap_from_luma(image: &image::GrayImage) -> Result<Bitmap> {
    let (width, height) = image.dimensions();
    if width != height {
        anyhow::bail!("image must be square, got {}x{}", width, height);
    }
    let mut bitmap = Bitmap::new(width, Color::White)
        .with_context(|| format!("image side must be a power of two, got {}", width))?;
    for (x, y, pixel) in image.enumerate_pixels() {
        if pixel.0[0] < BLACK_THRESHOLD {
            bitmap.set(x, y, Color::Black);
        }
    }
    Ok(bitmap)
}

/// Load an image file as a black-and-white bitmap.
pub fn load_bitmap(path: &Path) -> Result<Bitmap> {
    let image = image::open(path)
        .with_context(|| format!("Failed to read image: {}", path.display()))?
        .to_luma8();
    bitmap_from_luma(&image).with_context(|| format!("Cannot encode {}", path.display()))
}
