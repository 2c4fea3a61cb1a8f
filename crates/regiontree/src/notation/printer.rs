//! Writing trees back out as nested lists

use crate::quadrant::QuadrantOrder;
use crate::tree::{Node, QuadTree};

/// Render `tree` in nested-list notation, listing children in `order`.
///
/// Parsing the result with the same order yields an equal tree.
pub fn to_notation(tree: &QuadTree, order: QuadrantOrder) -> String {
    let mut out = String::new();
    write_tree(tree, order, &mut out);
    out
}

fn write_tree(tree: &QuadTree, order: QuadrantOrder, out: &mut String) {
    out.push('[');
    for (i, quadrant) in order.sequence().into_iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        match tree.get(quadrant) {
            Node::Leaf(color) => out.push(color.digit()),
            Node::Branch(child) => write_tree(child, order, out),
        }
    }
    out.push(']');
}
