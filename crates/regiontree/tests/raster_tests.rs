//! Bitmap codec and painter tests

use pretty_assertions::assert_eq;
use regiontree::*;

fn diagonal(side: u32) -> Bitmap {
    let mut bitmap = Bitmap::new(side, Color::White).unwrap();
    for i in 0..side {
        bitmap.set(i, i, Color::Black);
    }
    bitmap
}

// ═══════════════════════════════════════════════════════════════════════
// Encode / Decode
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_decode_of_encode_is_identity() {
    for side in [2, 4, 8, 16, 32] {
        let bitmap = diagonal(side);
        let tree = encode_tree(&bitmap).unwrap();
        assert_eq!(decode(&tree, side).unwrap(), bitmap, "side {}", side);
    }
}

#[test]
fn test_diagonal_depth_is_log2_side() {
    let tree = encode_tree(&diagonal(16)).unwrap();
    assert_eq!(tree.depth(), 4);
    // Off-diagonal quadrants collapse at every level.
    assert_eq!(tree[Quadrant::TopRight], Node::WHITE);
    assert_eq!(tree[Quadrant::BottomLeft], Node::WHITE);
}

#[test]
fn test_encoding_is_minimal() {
    let tree = QuadTree::from_list("[[1, 1, 1, 1], 0, [0, 0, 0, 0], 1]").unwrap();
    let bitmap = tree.to_bitmap(8).unwrap();
    assert_eq!(encode_tree(&bitmap).unwrap(), tree.compacted());
    assert_eq!(encode_tree(&bitmap).unwrap().to_string(), "[1, 0, 0, 1]");
}

#[test]
fn test_compact_preserves_pixels() {
    let tree = QuadTree::from_list("[[1, 1, 1, 1], [0, 1, 0, 1], [0, 0, 0, 0], 1]").unwrap();
    let compacted = tree.compacted();
    assert!(compacted.leaf_count() <= tree.leaf_count());
    assert_eq!(compacted.to_bitmap(8).unwrap(), tree.to_bitmap(8).unwrap());
}

#[test]
fn test_stats_match_pixels() {
    let tree = encode_tree(&diagonal(8)).unwrap();
    let stats = tree.stats();
    let bitmap = tree.to_bitmap(8).unwrap();
    let black_share = bitmap.count_black() as f64 / 64.0;
    assert!((stats.black_area - black_share).abs() < 1e-12);
}

// ═══════════════════════════════════════════════════════════════════════
// Painting
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_text_preview_of_diagonal() {
    let tree = encode_tree(&diagonal(4)).unwrap();
    let mut painter = TextPainter::new(4);
    let options = PaintOptions {
        outline: false,
        ..PaintOptions::with_size(4)
    };
    paint(&tree, &mut painter, &options);
    assert_eq!(painter.into_string(), "#...\n.#..\n..#.\n...#\n");
}

#[test]
fn test_color_at_agrees_with_bitmap() {
    let tree = QuadTree::from_list("[[1, 0, [1, 0, 1, 0], 1], 0, 1, [0, 1, 1, 0]]").unwrap();
    let bitmap = tree.to_bitmap(8).unwrap();
    for y in 0..8 {
        for x in 0..8 {
            assert_eq!(
                tree.color_at(u64::from(x), u64::from(y), 8),
                bitmap.get(x, y),
                "pixel ({}, {})",
                x,
                y
            );
        }
    }
}
