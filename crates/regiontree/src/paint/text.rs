//! Terminal preview

use super::Painter;
use crate::color::Color;

/// Paints onto a grid of characters: `#` for black, `.` for white.
#[derive(Debug, Clone)]
pub struct TextPainter {
    side: usize,
    cells: Vec<char>,
}

impl TextPainter {
    /// Character for black cells
    pub const BLACK: char = '#';

    /// Character for white cells
    pub const WHITE: char = '.';

    /// Blank grid of `side`×`side` cells.
    pub fn new(side: u32) -> Self {
        let side = side as usize;
        Self {
            side,
            cells: vec![' '; side * side],
        }
    }

    /// Grid as text, one line per row.
    pub fn into_string(self) -> String {
        let mut out = String::with_capacity(self.cells.len() + self.side);
        for row in self.cells.chunks(self.side.max(1)) {
            out.extend(row);
            out.push('\n');
        }
        out
    }
}

impl Painter for TextPainter {
    fn fill_square(&mut self, x: u32, y: u32, side: u32, color: Color) {
        let ch = match color {
            Color::Black => Self::BLACK,
            Color::White => Self::WHITE,
        };
        let (x, y, side) = (x as usize, y as usize, side as usize);
        for row in y..(y + side).min(self.side) {
            for col in x..(x + side).min(self.side) {
                self.cells[row * self.side + col] = ch;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::{paint, PaintOptions};
    use crate::QuadTree;

    #[test]
    fn test_text_preview() {
        let tree = QuadTree::from_list("[[1, 0, 0, 1], 0, 1, 0]").unwrap();
        let mut painter = TextPainter::new(4);
        paint(&tree, &mut painter, &PaintOptions::with_size(4));
        assert_eq!(painter.into_string(), "#...\n#...\n..##\n..##\n");
    }

    #[test]
    fn test_odd_canvas_leaves_gaps() {
        let tree = QuadTree::uniform(Color::Black);
        let mut painter = TextPainter::new(3);
        paint(&tree, &mut painter, &PaintOptions::with_size(3));
        assert_eq!(painter.into_string(), "## \n## \n   \n");
    }
}
