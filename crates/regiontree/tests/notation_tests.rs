//! Notation parsing, printing and file tests

use std::io::Write;

use pretty_assertions::assert_eq;
use regiontree::*;

fn sample() -> QuadTree {
    QuadTree::from_list("[[1, 0, 0, 1], [0, [1, 1, 0, 1], 0, 0], 1, 0]").unwrap()
}

// ═══════════════════════════════════════════════════════════════════════
// Parsing
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_depth_of_nested_notation() {
    assert_eq!(QuadTree::from_list("[0, 0, 0, 0]").unwrap().depth(), 1);
    assert_eq!(sample().depth(), 3);
}

#[test]
fn test_multiline_source() {
    let source = "[\n  [1, 0, 0, 1],\n  0,\n  1,\n  0,\n]\n";
    let tree = QuadTree::from_list(source).unwrap();
    assert_eq!(tree.to_string(), "[[1, 0, 0, 1], 0, 1, 0]");
}

#[test]
fn test_error_location_on_later_line() {
    let err = parse("[\n  [1, 0, 0],\n  0, 1, 0]", &ParseOptions::default()).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::ChildCount(3));
    assert_eq!(err.location, Some(SourceLocation::new("<input>", 2, 3)));
    assert_eq!(err.snippet.as_deref(), Some("  [1, 0, 0],\n  ^"));
}

#[test]
fn test_error_converts_to_quadtree_error() {
    let err = QuadTree::from_list("[1, 0]").unwrap_err();
    assert!(matches!(err, QuadTreeError::Parse(_)));
    assert!(err.to_string().contains("expected 4 children, found 2"));
}

// ═══════════════════════════════════════════════════════════════════════
// Printing
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_print_then_parse_is_identity() {
    let tree = sample();
    for order in [QuadrantOrder::Clockwise, QuadrantOrder::RowMajor] {
        let options = ParseOptions::new().with_order(order);
        let reparsed = parse(&tree.to_notation(order), &options).unwrap();
        assert_eq!(reparsed, tree);
    }
}

#[test]
fn test_orders_disagree_on_bottom_row() {
    let clockwise = QuadTree::from_list("[1, 1, 0, 1]").unwrap();
    let row_major = parse(
        "[1, 1, 0, 1]",
        &ParseOptions::new().with_order(QuadrantOrder::RowMajor),
    )
    .unwrap();
    assert_eq!(clockwise[Quadrant::BottomRight], Node::WHITE);
    assert_eq!(row_major[Quadrant::BottomRight], Node::BLACK);
    assert_eq!(row_major[Quadrant::BottomLeft], Node::WHITE);
}

// ═══════════════════════════════════════════════════════════════════════
// Files and JSON
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[[1, 0, 0, 1], 0, 1, 0]").unwrap();

    let tree = QuadTree::from_file(file.path()).unwrap();
    assert_eq!(tree.depth(), 2);
}

#[test]
fn test_from_file_reports_path_in_errors() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "[1, 0, 0, x]").unwrap();

    let err = QuadTree::from_file(file.path()).unwrap_err();
    match err {
        QuadTreeError::Parse(e) => {
            let loc = e.location.unwrap();
            assert_eq!(loc.file, file.path().display().to_string());
            assert_eq!((loc.line, loc.column), (1, 11));
        }
        other => panic!("Expected parse error, got {:?}", other),
    }
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = QuadTree::from_file(dir.path().join("missing.txt")).unwrap_err();
    assert!(matches!(err, QuadTreeError::Io { .. }));
}

#[test]
fn test_to_file_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tree.txt");
    sample().to_file(&path).unwrap();
    assert_eq!(QuadTree::from_file(&path).unwrap(), sample());
}

#[test]
fn test_notation_is_json() {
    let text = sample().to_string();
    assert_eq!(QuadTree::from_json(&text).unwrap(), sample());
}

#[test]
fn test_json_rejects_bad_leaf() {
    let err = QuadTree::from_json("[1, 0, 3, 0]").unwrap_err();
    assert!(matches!(err, QuadTreeError::Json(_)));
}

#[test]
fn test_demo_tree_file() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../demos/quadtree.txt");
    let tree = QuadTree::from_file(path).unwrap();
    assert_eq!(tree.depth(), 3);
    assert_eq!(tree.leaf_count(), 31);
}
