//! Region quadtree representation

mod stats;
mod walk;

pub use stats::Stats;
pub use walk::{Region, Visitor};

use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::quadrant::Quadrant;

/// A child slot of a [`QuadTree`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    /// Terminal node: the whole sub-region has one colour
    Leaf(Color),

    /// Sub-region split into four further quadrants
    Branch(Box<QuadTree>),
}

impl Node {
    /// Black terminal node
    pub const BLACK: Node = Node::Leaf(Color::Black);

    /// White terminal node
    pub const WHITE: Node = Node::Leaf(Color::White);

    /// Wrap a tree as a branch node.
    pub fn branch(tree: QuadTree) -> Self {
        Node::Branch(Box::new(tree))
    }

    /// Check if this node is terminal
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    /// Colour of a terminal node
    pub fn color(&self) -> Option<Color> {
        match self {
            Node::Leaf(c) => Some(*c),
            Node::Branch(_) => None,
        }
    }

    /// Subtree of a branch node
    pub fn as_tree(&self) -> Option<&QuadTree> {
        match self {
            Node::Leaf(_) => None,
            Node::Branch(t) => Some(t),
        }
    }

    /// Recursion depth of this node: 0 for a leaf.
    pub fn depth(&self) -> usize {
        match self {
            Node::Leaf(_) => 0,
            Node::Branch(t) => t.depth(),
        }
    }

    /// Merge uniform branches below (and including) this node.
    pub fn compacted(&self) -> Node {
        match self {
            Node::Leaf(c) => Node::Leaf(*c),
            Node::Branch(t) => t.compact(),
        }
    }
}

impl From<Color> for Node {
    fn from(color: Color) -> Self {
        Node::Leaf(color)
    }
}

impl From<QuadTree> for Node {
    fn from(tree: QuadTree) -> Self {
        Node::branch(tree)
    }
}

/// A region quadtree: a square split into four quadrants, each either a
/// single colour or another quadtree.
///
/// # Example
///
/// ```
/// use regiontree::{Node, QuadTree};
///
/// let inner = QuadTree::new(Node::BLACK, Node::WHITE, Node::BLACK, Node::WHITE);
/// let tree = QuadTree::new(inner.into(), Node::WHITE, Node::WHITE, Node::BLACK);
///
/// assert_eq!(tree.depth(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[Node; 4]", into = "[Node; 4]")]
pub struct QuadTree {
    /// Children in [`Quadrant::ALL`] order
    children: [Node; 4],
}

impl QuadTree {
    /// Number of children of every quadtree node.
    pub const NB_NODES: usize = 4;

    /// Create a tree from its quadrants, clockwise from the top left.
    pub fn new(top_left: Node, top_right: Node, bottom_right: Node, bottom_left: Node) -> Self {
        Self {
            children: [top_left, top_right, bottom_right, bottom_left],
        }
    }

    /// A tree whose four quadrants are the same colour.
    pub fn uniform(color: Color) -> Self {
        Self {
            children: std::array::from_fn(|_| Node::Leaf(color)),
        }
    }

    /// Node in the given quadrant.
    pub fn get(&self, quadrant: Quadrant) -> &Node {
        &self.children[quadrant.index()]
    }

    /// Mutable node in the given quadrant.
    pub fn get_mut(&mut self, quadrant: Quadrant) -> &mut Node {
        &mut self.children[quadrant.index()]
    }

    /// Replace the node in a quadrant, returning the previous one.
    pub fn set(&mut self, quadrant: Quadrant, node: Node) -> Node {
        std::mem::replace(self.get_mut(quadrant), node)
    }

    /// Children paired with their quadrant, clockwise from the top left.
    pub fn children(&self) -> impl Iterator<Item = (Quadrant, &Node)> {
        Quadrant::ALL.into_iter().zip(self.children.iter())
    }

    /// Recursion depth: one more than the deepest child, where leaves count 0.
    pub fn depth(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(Node::depth)
            .max()
            .unwrap_or(0)
    }

    /// Number of terminal nodes.
    pub fn leaf_count(&self) -> usize {
        self.children
            .iter()
            .map(|n| match n {
                Node::Leaf(_) => 1,
                Node::Branch(t) => t.leaf_count(),
            })
            .sum()
    }

    /// Number of non-terminal nodes, this one included.
    pub fn branch_count(&self) -> usize {
        1 + self
            .children
            .iter()
            .filter_map(Node::as_tree)
            .map(QuadTree::branch_count)
            .sum::<usize>()
    }

    /// Smallest image side that shows every leaf as at least one pixel.
    ///
    /// `None` when `2^depth` does not fit in a `u64` (depth 64 and up).
    pub fn min_side(&self) -> Option<u64> {
        u32::try_from(self.depth())
            .ok()
            .and_then(|d| 1u64.checked_shl(d))
    }

    /// Merge every branch whose four children are leaves of one colour.
    ///
    /// Returns a leaf when the whole tree is a single colour.
    pub fn compact(&self) -> Node {
        let children = self.children.clone().map(|c| c.compacted());
        if let [Node::Leaf(a), Node::Leaf(b), Node::Leaf(c), Node::Leaf(d)] = &children {
            if a == b && b == c && c == d {
                return Node::Leaf(*a);
            }
        }
        Node::branch(Self { children })
    }

    /// Like [`QuadTree::compact`], but keeps the root as a tree.
    pub fn compacted(&self) -> QuadTree {
        match self.compact() {
            Node::Leaf(c) => QuadTree::uniform(c),
            Node::Branch(t) => *t,
        }
    }

    /// Colour of pixel `(x, y)` when the tree is drawn on a `side`×`side` image.
    ///
    /// Returns `None` when the point lies outside the image or `side` is not a
    /// power of two. Squares smaller than a pixel take the colour of their top
    /// left descendant.
    pub fn color_at(&self, x: u64, y: u64, side: u64) -> Option<Color> {
        if !side.is_power_of_two() || x >= side || y >= side {
            return None;
        }

        let (mut x, mut y, mut side) = (x, y, side);
        let mut tree = self;
        loop {
            let half = side / 2;
            let quadrant = if half == 0 {
                Quadrant::TopLeft
            } else {
                let q = Quadrant::containing(x, y, half);
                let (ox, oy) = q.offset(half);
                x -= ox;
                y -= oy;
                side = half;
                q
            };
            match tree.get(quadrant) {
                Node::Leaf(c) => return Some(*c),
                Node::Branch(t) => tree = t,
            }
        }
    }
}

impl Index<Quadrant> for QuadTree {
    type Output = Node;

    fn index(&self, quadrant: Quadrant) -> &Node {
        self.get(quadrant)
    }
}

impl IndexMut<Quadrant> for QuadTree {
    fn index_mut(&mut self, quadrant: Quadrant) -> &mut Node {
        self.get_mut(quadrant)
    }
}

impl From<[Node; 4]> for QuadTree {
    fn from(children: [Node; 4]) -> Self {
        Self { children }
    }
}

impl From<QuadTree> for [Node; 4] {
    fn from(tree: QuadTree) -> Self {
        tree.children
    }
}
