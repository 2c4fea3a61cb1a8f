//! # Regiontree
//!
//! Region quadtrees for square black-and-white images.
//!
//! A region quadtree describes a 2^n × 2^n image by splitting it into four
//! equal quadrants, recursively, until every quadrant has a single colour.
//! Each node of the tree therefore has either four children or none; the
//! terminal nodes hold the colour of their whole sub-region.
//!
//! ## Architecture
//!
//! - **Tree**: [`QuadTree`] and [`Node`], with depth, statistics, compaction
//!   and a pre-order [`Visitor`] walk
//! - **Notation**: nested-list text such as `[[1, 0, 0, 1], 0, 1, 0]`, read
//!   from strings or files and written back out (also valid JSON)
//! - **Raster**: [`Bitmap`] and the bitmap ⇄ tree codec
//! - **Paint**: the [`Painter`] trait and a text preview surface
//!
//! ## Example
//!
//! ```
//! use regiontree::{Color, QuadTree};
//!
//! let tree = QuadTree::from_list("[[1, 0, 0, 1], 0, 1, 0]").unwrap();
//! assert_eq!(tree.depth(), 2);
//!
//! let bitmap = tree.to_bitmap(4).unwrap();
//! assert_eq!(bitmap.get(3, 3), Some(Color::Black));
//! assert_eq!(QuadTree::from_bitmap(&bitmap).unwrap(), tree);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod color;
pub mod error;
pub mod notation;
pub mod paint;
pub mod quadrant;
pub mod raster;
pub mod tree;

// Re-export main types
pub use color::Color;
pub use error::{ParseError, ParseErrorKind, QuadTreeError, Result, SourceLocation};
pub use notation::{parse, to_notation, ParseOptions};
pub use paint::{paint, BitmapPainter, PaintOptions, Painter, TextPainter};
pub use quadrant::{Quadrant, QuadrantOrder};
pub use raster::{decode, encode, encode_tree, Bitmap};
pub use tree::{Node, QuadTree, Region, Stats, Visitor};

/// Regiontree version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
