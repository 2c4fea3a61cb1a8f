//! Drawing quadtrees onto pixel surfaces
//!
//! Every terminal node is drawn as a filled square and, optionally, outlined.
//! Surfaces implement [`Painter`]; [`paint`] walks the tree and issues the
//! drawing calls.

mod bitmap;
mod text;

pub use bitmap::BitmapPainter;
pub use text::TextPainter;

use tracing::debug;

use crate::color::Color;
use crate::tree::{QuadTree, Region, Visitor};

/// Default canvas side in pixels.
pub const DEFAULT_SIZE: u32 = 400;

/// A surface that squares can be drawn on.
pub trait Painter {
    /// Fill the square with top-left corner `(x, y)`.
    fn fill_square(&mut self, x: u32, y: u32, side: u32, color: Color);

    /// Draw a one-pixel border just inside the square with top-left corner `(x, y)`.
    ///
    /// Surfaces without borders can leave this empty.
    fn outline_square(&mut self, _x: u32, _y: u32, _side: u32) {}
}

/// Settings for [`paint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaintOptions {
    /// Canvas side in pixels
    pub size: u32,

    /// Whether each leaf gets a border
    pub outline: bool,
}

impl Default for PaintOptions {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            outline: true,
        }
    }
}

impl PaintOptions {
    /// Options for a canvas of side `size`, with outlines.
    pub fn with_size(size: u32) -> Self {
        Self {
            size,
            ..Default::default()
        }
    }
}

struct PaintVisitor<'a, P: ?Sized> {
    painter: &'a mut P,
    outline: bool,
    squares: usize,
}

impl<P: Painter + ?Sized> PaintVisitor<'_, P> {
    fn square(&mut self, color: Color, region: &Region) {
        if region.side == 0 {
            return;
        }
        // Regions never exceed the canvas side, which is a u32.
        let (x, y, side) = (region.x as u32, region.y as u32, region.side as u32);
        self.painter.fill_square(x, y, side, color);
        if self.outline {
            self.painter.outline_square(x, y, side);
        }
        self.squares += 1;
    }
}

impl<P: Painter + ?Sized> Visitor for PaintVisitor<'_, P> {
    fn visit_branch(&mut self, tree: &QuadTree, region: &Region) -> bool {
        if region.side > 1 {
            return true;
        }
        // Too small to split: one pixel in the colour of the top-left leaf.
        if let Some(color) = tree.color_at(0, 0, 1) {
            self.square(color, region);
        }
        false
    }

    fn visit_leaf(&mut self, color: Color, region: &Region) {
        self.square(color, region);
    }
}

/// Draw `tree` onto `painter`.
///
/// Odd canvas sides are split with truncation, so a canvas that is not a
/// power of two may keep unpainted rows and columns between squares.
pub fn paint<P: Painter + ?Sized>(tree: &QuadTree, painter: &mut P, options: &PaintOptions) {
    let mut visitor = PaintVisitor {
        painter,
        outline: options.outline,
        squares: 0,
    };
    tree.walk(u64::from(options.size), &mut visitor);
    debug!(
        size = options.size,
        outline = options.outline,
        squares = visitor.squares,
        "painted quadtree"
    );
}
