//! Summary statistics for a quadtree

use serde::Serialize;

use super::{Node, QuadTree};
use crate::color::Color;

/// Shape and colour summary of a tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stats {
    /// Recursion depth
    pub depth: usize,
    /// Non-terminal nodes, root included
    pub branches: usize,
    /// Terminal nodes
    pub leaves: usize,
    /// Black terminal nodes
    pub black_leaves: usize,
    /// White terminal nodes
    pub white_leaves: usize,
    /// Share of the image area that is black, in `[0, 1]`
    pub black_area: f64,
}

impl Stats {
    /// Gather statistics for `tree`.
    pub fn of(tree: &QuadTree) -> Self {
        let mut stats = Self {
            depth: tree.depth(),
            branches: 0,
            leaves: 0,
            black_leaves: 0,
            white_leaves: 0,
            black_area: 0.0,
        };
        stats.accumulate(tree, 1.0);
        stats
    }

    fn accumulate(&mut self, tree: &QuadTree, area: f64) {
        self.branches += 1;
        let quarter = area / 4.0;
        for (_, node) in tree.children() {
            match node {
                Node::Leaf(Color::Black) => {
                    self.leaves += 1;
                    self.black_leaves += 1;
                    self.black_area += quarter;
                }
                Node::Leaf(Color::White) => {
                    self.leaves += 1;
                    self.white_leaves += 1;
                }
                Node::Branch(t) => self.accumulate(t, quarter),
            }
        }
    }
}

impl QuadTree {
    /// Shape and colour summary of this tree.
    pub fn stats(&self) -> Stats {
        Stats::of(self)
    }
}
