//! Pre-order traversal with pixel regions

use tracing::trace;

use super::{Node, QuadTree};
use crate::color::Color;

/// Square area of the image covered by a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// Left edge in pixels
    pub x: u64,
    /// Top edge in pixels
    pub y: u64,
    /// Side length in pixels
    pub side: u64,
    /// Number of branches above this node (0 for the root)
    pub depth: usize,
}

impl Region {
    /// Region of the whole image.
    pub fn root(side: u64) -> Self {
        Self {
            x: 0,
            y: 0,
            side,
            depth: 0,
        }
    }

    /// Region of one quadrant of this region.
    ///
    /// Odd sides are halved with truncation, so the last row and column of an
    /// odd region belong to no child.
    pub fn child(&self, quadrant: crate::Quadrant) -> Self {
        let half = self.side / 2;
        let (dx, dy) = quadrant.offset(half);
        Self {
            x: self.x + dx,
            y: self.y + dy,
            side: half,
            depth: self.depth + 1,
        }
    }
}

/// Callbacks for [`QuadTree::walk`].
pub trait Visitor {
    /// Called for each branch before its children.
    ///
    /// Return `false` to skip the branch's children.
    fn visit_branch(&mut self, _tree: &QuadTree, _region: &Region) -> bool {
        true
    }

    /// Called for each terminal node.
    fn visit_leaf(&mut self, color: Color, region: &Region);
}

impl QuadTree {
    /// Visit every node in pre-order, children clockwise from the top left,
    /// with regions computed for an image of side `side`.
    pub fn walk<V: Visitor + ?Sized>(&self, side: u64, visitor: &mut V) {
        self.walk_region(Region::root(side), visitor);
    }

    fn walk_region<V: Visitor + ?Sized>(&self, region: Region, visitor: &mut V) {
        trace!(x = region.x, y = region.y, side = region.side, "visit branch");
        if !visitor.visit_branch(self, &region) {
            return;
        }
        for (quadrant, node) in self.children() {
            let child = region.child(quadrant);
            match node {
                Node::Leaf(color) => visitor.visit_leaf(*color, &child),
                Node::Branch(tree) => tree.walk_region(child, visitor),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Quadrant;

    #[derive(Default)]
    struct Collect {
        leaves: Vec<(Color, Region)>,
        branches: usize,
        skip_below: Option<usize>,
    }

    impl Visitor for Collect {
        fn visit_branch(&mut self, _tree: &QuadTree, region: &Region) -> bool {
            self.branches += 1;
            self.skip_below.map_or(true, |d| region.depth < d)
        }

        fn visit_leaf(&mut self, color: Color, region: &Region) {
            self.leaves.push((color, *region));
        }
    }

    fn nested() -> QuadTree {
        let inner = QuadTree::new(Node::BLACK, Node::WHITE, Node::WHITE, Node::WHITE);
        QuadTree::new(Node::WHITE, inner.into(), Node::BLACK, Node::WHITE)
    }

    #[test]
    fn test_child_regions() {
        let root = Region::root(400);
        assert_eq!(
            root.child(Quadrant::BottomRight),
            Region {
                x: 200,
                y: 200,
                side: 200,
                depth: 1
            }
        );
    }

    #[test]
    fn test_walk_order_and_regions() {
        let mut v = Collect::default();
        nested().walk(8, &mut v);

        assert_eq!(v.branches, 2);
        let origins: Vec<_> = v.leaves.iter().map(|(_, r)| (r.x, r.y, r.side)).collect();
        assert_eq!(
            origins,
            vec![
                (0, 0, 4),
                (4, 0, 2),
                (6, 0, 2),
                (6, 2, 2),
                (4, 2, 2),
                (4, 4, 4),
                (0, 4, 4),
            ]
        );
        assert_eq!(v.leaves[1].0, Color::Black);
    }

    #[test]
    fn test_walk_can_skip_children() {
        let mut v = Collect {
            skip_below: Some(1),
            ..Default::default()
        };
        nested().walk(8, &mut v);
        assert_eq!(v.branches, 2);
        assert_eq!(v.leaves.len(), 3);
    }
}
