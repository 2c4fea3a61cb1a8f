//! Painting into a [`Bitmap`]

use super::Painter;
use crate::color::Color;
use crate::raster::Bitmap;

/// Paints onto a black-and-white bitmap. Outlines are drawn in black.
#[derive(Debug, Clone)]
pub struct BitmapPainter {
    bitmap: Bitmap,
}

impl BitmapPainter {
    /// Paint onto `bitmap`.
    pub fn new(bitmap: Bitmap) -> Self {
        Self { bitmap }
    }

    /// The painted bitmap.
    pub fn bitmap(&self) -> &Bitmap {
        &self.bitmap
    }

    /// Take the painted bitmap.
    pub fn into_bitmap(self) -> Bitmap {
        self.bitmap
    }
}

impl Painter for BitmapPainter {
    fn fill_square(&mut self, x: u32, y: u32, side: u32, color: Color) {
        self.bitmap.fill_square(x, y, side, color);
    }

    fn outline_square(&mut self, x: u32, y: u32, side: u32) {
        let last = side.saturating_sub(1);
        for i in 0..side {
            self.bitmap.set(x + i, y, Color::Black);
            self.bitmap.set(x + i, y + last, Color::Black);
            self.bitmap.set(x, y + i, Color::Black);
            self.bitmap.set(x + last, y + i, Color::Black);
        }
    }
}
