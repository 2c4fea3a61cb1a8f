//! Square black-and-white bitmaps and conversion to and from quadtrees

use tracing::debug;

use crate::color::Color;
use crate::error::{QuadTreeError, Result};
use crate::quadrant::Quadrant;
use crate::tree::{Node, QuadTree};

/// A square bitmap whose side is a power of two.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    side: u32,
    /// Row-major pixels
    pixels: Vec<Color>,
}

fn check_side(side: u64) -> Result<()> {
    if side == 0 || !side.is_power_of_two() {
        return Err(QuadTreeError::InvalidSide(side));
    }
    Ok(())
}

impl Bitmap {
    /// Create a bitmap filled with one colour.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSide` if `side` is zero or not a power of two.
    pub fn new(side: u32, fill: Color) -> Result<Self> {
        check_side(u64::from(side))?;
        let len = side as usize * side as usize;
        Ok(Self {
            side,
            pixels: vec![fill; len],
        })
    }

    /// Create a bitmap from rows of pixels.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSide` if the number of rows is not a power of two,
    /// and `RowLength` for a row not as long as the number of rows.
    pub fn from_rows(rows: Vec<Vec<Color>>) -> Result<Self> {
        let expected = rows.len();
        check_side(expected as u64)?;
        let ragged = rows.iter().enumerate().find(|(_, r)| r.len() != expected);
        if let Some((row, bad)) = ragged {
            return Err(QuadTreeError::RowLength {
                row,
                len: bad.len(),
                expected,
            });
        }
        let side =
            u32::try_from(expected).map_err(|_| QuadTreeError::InvalidSide(expected as u64))?;
        Ok(Self {
            side,
            pixels: rows.into_iter().flatten().collect(),
        })
    }

    /// Parse a bitmap from lines of `#`/`1` (black) and `.`/`0` (white).
    ///
    /// Blank lines and whitespace inside lines are ignored.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPixel` for any other character, plus the errors of
    /// [`Bitmap::from_rows`].
    pub fn from_text(text: &str) -> Result<Self> {
        let mut rows = Vec::new();
        for (i, line) in text.lines().enumerate() {
            let row = line
                .chars()
                .filter(|c| !c.is_whitespace())
                .map(|c| match c {
                    '#' | '1' => Ok(Color::Black),
                    '.' | '0' => Ok(Color::White),
                    pixel => Err(QuadTreeError::InvalidPixel { pixel, line: i + 1 }),
                })
                .collect::<Result<Vec<_>>>()?;
            if !row.is_empty() {
                rows.push(row);
            }
        }
        Self::from_rows(rows)
    }

    /// Side length in pixels.
    pub fn side(&self) -> u32 {
        self.side
    }

    /// Colour at `(x, y)`, or `None` if out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Option<Color> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Set the colour at `(x, y)`. Out-of-bounds writes are ignored.
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color;
        }
    }

    /// Fill the square with top-left corner `(x, y)`, clipped to the bitmap.
    pub fn fill_square(&mut self, x: u32, y: u32, side: u32, color: Color) {
        let x_end = x.saturating_add(side).min(self.side);
        let y_end = y.saturating_add(side).min(self.side);
        for row in y..y_end {
            for col in x..x_end {
                let i = row as usize * self.side as usize + col as usize;
                self.pixels[i] = color;
            }
        }
    }

    /// Iterate rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Color]> {
        self.pixels.chunks(self.side as usize)
    }

    /// Number of black pixels.
    pub fn count_black(&self) -> usize {
        self.pixels.iter().filter(|c| c.bit()).count()
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.side && y < self.side).then(|| y as usize * self.side as usize + x as usize)
    }

    /// Colour shared by every pixel of a square, if it is homogeneous.
    fn uniform_color(&self, x: u32, y: u32, side: u32) -> Option<Color> {
        let first = self.pixels[y as usize * self.side as usize + x as usize];
        for row in y..y + side {
            let start = row as usize * self.side as usize + x as usize;
            if self.pixels[start..start + side as usize]
                .iter()
                .any(|&c| c != first)
            {
                return None;
            }
        }
        Some(first)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Encoding: bitmap → tree
// ═══════════════════════════════════════════════════════════════════════

/// Encode a bitmap as its minimal quadtree.
///
/// Every homogeneous square becomes a single leaf, so a uniform bitmap
/// (including any bitmap of side 1) encodes to [`Node::Leaf`].
pub fn encode(bitmap: &Bitmap) -> Node {
    let node = encode_region(bitmap, 0, 0, bitmap.side);
    debug!(side = bitmap.side, depth = node.depth(), "encoded bitmap");
    node
}

/// Encode a bitmap, always producing a tree.
///
/// A uniform bitmap becomes four equal leaves.
///
/// # Errors
///
/// Returns `TooSmall` for a bitmap of side 1, which cannot be split.
pub fn encode_tree(bitmap: &Bitmap) -> Result<QuadTree> {
    if bitmap.side < 2 {
        return Err(QuadTreeError::TooSmall(u64::from(bitmap.side)));
    }
    Ok(match encode(bitmap) {
        Node::Leaf(color) => QuadTree::uniform(color),
        Node::Branch(tree) => *tree,
    })
}

fn encode_region(bitmap: &Bitmap, x: u32, y: u32, side: u32) -> Node {
    if let Some(color) = bitmap.uniform_color(x, y, side) {
        return Node::Leaf(color);
    }
    // A non-uniform square has at least two pixels, so side >= 2.
    let half = side / 2;
    let children = Quadrant::ALL.map(|q| {
        let (dx, dy) = q.offset(u64::from(half));
        // Offsets are at most `half`, which fits in u32.
        encode_region(bitmap, x + dx as u32, y + dy as u32, half)
    });
    Node::branch(QuadTree::from(children))
}

// ═══════════════════════════════════════════════════════════════════════
// Decoding: tree → bitmap
// ═══════════════════════════════════════════════════════════════════════

/// Draw `tree` into a new bitmap of side `side`.
///
/// Squares smaller than one pixel take the colour of their top left
/// descendant.
///
/// # Errors
///
/// Returns `InvalidSide` if `side` is zero or not a power of two.
pub fn decode(tree: &QuadTree, side: u32) -> Result<Bitmap> {
    let mut bitmap = Bitmap::new(side, Color::White)?;
    decode_into(tree, &mut bitmap, 0, 0, side);
    debug!(side, depth = tree.depth(), "decoded quadtree");
    Ok(bitmap)
}

fn decode_into(tree: &QuadTree, bitmap: &mut Bitmap, x: u32, y: u32, side: u32) {
    if side == 1 {
        if let Some(color) = tree.color_at(0, 0, 1) {
            bitmap.set(x, y, color);
        }
        return;
    }
    let half = side / 2;
    for (quadrant, node) in tree.children() {
        let (dx, dy) = quadrant.offset(u64::from(half));
        let (cx, cy) = (x + dx as u32, y + dy as u32);
        match node {
            Node::Leaf(color) => bitmap.fill_square(cx, cy, half, *color),
            Node::Branch(child) => decode_into(child, bitmap, cx, cy, half),
        }
    }
}

impl QuadTree {
    /// Draw this tree into a bitmap of side `side`.
    pub fn to_bitmap(&self, side: u32) -> Result<Bitmap> {
        decode(self, side)
    }

    /// Encode a bitmap as a quadtree.
    pub fn from_bitmap(bitmap: &Bitmap) -> Result<Self> {
        encode_tree(bitmap)
    }
}
