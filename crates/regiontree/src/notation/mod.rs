//! Nested-list notation for quadtrees
//!
//! A tree is written as a list of exactly four nodes, each either `0`
//! (white), `1` (black) or another list:
//!
//! ```text
//! [[1, 0, 0, 1], 0, 1, 0]
//! ```
//!
//! `true`/`false` (and `True`/`False`) are accepted for leaves, whitespace
//! is insignificant and a trailing comma is allowed. Written with digits
//! only, the notation is also valid JSON.

mod parser;
mod printer;

pub use printer::to_notation;

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use tracing::debug;

use crate::error::{ParseError, QuadTreeError, Result};
use crate::quadrant::QuadrantOrder;
use crate::tree::QuadTree;

/// File name reported for errors in in-memory sources.
pub const INPUT_NAME: &str = "<input>";

/// Default nesting limit for [`ParseOptions`].
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Settings for reading quadtree notation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// How list elements map to quadrants
    pub order: QuadrantOrder,

    /// Maximum list nesting (stack overflow protection)
    pub max_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            order: QuadrantOrder::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParseOptions {
    /// Create options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different quadrant order.
    pub fn with_order(mut self, order: QuadrantOrder) -> Self {
        self.order = order;
        self
    }

    /// Use a different nesting limit.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// Parse quadtree notation.
///
/// # Errors
///
/// Returns a [`ParseError`] locating the first problem in `source`.
pub fn parse(source: &str, options: &ParseOptions) -> std::result::Result<QuadTree, ParseError> {
    let tree = parser::Parser::new(source, options)?.parse()?;
    debug!(
        depth = tree.depth(),
        leaves = tree.leaf_count(),
        order = ?options.order,
        "parsed quadtree"
    );
    Ok(tree)
}

impl QuadTree {
    /// Build a tree from nested-list notation with default options.
    ///
    /// # Example
    ///
    /// ```
    /// use regiontree::QuadTree;
    ///
    /// let tree = QuadTree::from_list("[[1, 0, 0, 1], 0, 1, 0]").unwrap();
    /// assert_eq!(tree.depth(), 2);
    /// ```
    pub fn from_list(source: &str) -> Result<Self> {
        Ok(parse(source, &ParseOptions::default())?)
    }

    /// Build a tree from nested-list notation.
    pub fn from_list_with(source: &str, options: &ParseOptions) -> Result<Self> {
        Ok(parse(source, options)?)
    }

    /// Read a tree from a text file with default options.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_file_with(path, &ParseOptions::default())
    }

    /// Read a tree from a text file.
    ///
    /// Parse errors report `path` as their file.
    pub fn from_file_with(path: impl AsRef<Path>, options: &ParseOptions) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "reading quadtree file");
        let source = std::fs::read_to_string(path).map_err(|source| QuadTreeError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        parse(&source, options).map_err(|e| e.in_file(path.display().to_string()).into())
    }

    /// Write this tree to a text file in clockwise notation.
    pub fn to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, format!("{}\n", self)).map_err(|source| QuadTreeError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Render this tree in nested-list notation.
    pub fn to_notation(&self, order: QuadrantOrder) -> String {
        to_notation(self, order)
    }

    /// Build a tree from JSON (always clockwise).
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize this tree as JSON (always clockwise).
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl FromStr for QuadTree {
    type Err = QuadTreeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_list(s)
    }
}

impl fmt::Display for QuadTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_notation(self, QuadrantOrder::Clockwise))
    }
}
