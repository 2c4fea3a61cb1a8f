//! Error types for regiontree operations

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Main error type for regiontree operations
#[derive(Error, Debug)]
pub enum QuadTreeError {
    /// The quadtree notation could not be parsed
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Reading or writing a file failed
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// File being accessed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Image side is zero or not a power of two
    #[error("Invalid side: {0} is not a non-zero power of two")]
    InvalidSide(u64),

    /// Image too small to split into four quadrants
    #[error("Side {0} cannot be split into quadrants (need at least 2)")]
    TooSmall(u64),

    /// A bitmap row whose length differs from the number of rows
    #[error("Row {row} has {len} pixels, expected {expected}")]
    RowLength {
        /// Zero-based row index
        row: usize,
        /// Pixels found in the row
        len: usize,
        /// Number of rows in the bitmap
        expected: usize,
    },

    /// A character in a text bitmap that is not a pixel
    #[error("Invalid pixel {pixel:?} on line {line} (expected #, 1, . or 0)")]
    InvalidPixel {
        /// Offending character
        pixel: char,
        /// Line number (1-indexed)
        line: usize,
    },

    /// JSON (de)serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for regiontree operations
pub type Result<T> = std::result::Result<T, QuadTreeError>;

// ═══════════════════════════════════════════════════════════════════════
// PARSE ERRORS
// ═══════════════════════════════════════════════════════════════════════

/// What went wrong while parsing quadtree notation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A character that cannot start any token
    UnexpectedChar(char),
    /// A token that is valid but not allowed here
    UnexpectedToken(String),
    /// Input ended inside a list
    UnexpectedEof,
    /// A list with other than four elements
    ChildCount(usize),
    /// A leaf that is neither 0/1 nor a boolean
    InvalidLeaf(String),
    /// The root of the tree is a bare leaf
    LeafRoot,
    /// Non-whitespace after the closing bracket of the root
    TrailingInput,
    /// Lists nested deeper than the configured limit
    TooDeep(usize),
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorKind::UnexpectedChar(c) => write!(f, "unexpected character {:?}", c),
            ParseErrorKind::UnexpectedToken(t) => write!(f, "unexpected `{}`", t),
            ParseErrorKind::UnexpectedEof => write!(f, "unexpected end of input"),
            ParseErrorKind::ChildCount(n) => write!(f, "expected 4 children, found {}", n),
            ParseErrorKind::InvalidLeaf(v) => {
                write!(f, "invalid leaf `{}` (expected 0, 1, true or false)", v)
            }
            ParseErrorKind::LeafRoot => write!(f, "root must be a list of four nodes"),
            ParseErrorKind::TrailingInput => write!(f, "trailing input after tree"),
            ParseErrorKind::TooDeep(max) => write!(f, "nesting deeper than {} levels", max),
        }
    }
}

/// Error that occurred during parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// What went wrong
    pub kind: ParseErrorKind,

    /// Optional source location
    pub location: Option<SourceLocation>,

    /// Optional source snippet for context
    pub snippet: Option<String>,
}

impl ParseError {
    /// Create a new parse error of the given kind.
    pub fn new(kind: ParseErrorKind) -> Self {
        Self {
            kind,
            location: None,
            snippet: None,
        }
    }

    /// Add location information to the error.
    pub fn with_location(mut self, location: SourceLocation) -> Self {
        self.location = Some(location);
        self
    }

    /// Add a source snippet for context.
    pub fn with_snippet(mut self, snippet: impl Into<String>) -> Self {
        self.snippet = Some(snippet.into());
        self
    }

    /// Replace the file name of the location, if any.
    pub fn in_file(mut self, file: impl Into<String>) -> Self {
        if let Some(loc) = &mut self.location {
            loc.file = file.into();
        }
        self
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Parse error: {}", self.kind)?;
        if let Some(loc) = &self.location {
            write!(f, " at {}:{}:{}", loc.file, loc.line, loc.column)?;
        }
        if let Some(snippet) = &self.snippet {
            write!(f, "\n{}", snippet)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

/// Source code location for error reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    /// File name or identifier
    pub file: String,

    /// Line number (1-indexed)
    pub line: usize,

    /// Column number (1-indexed)
    pub column: usize,
}

impl SourceLocation {
    /// Create a new source location.
    pub fn new(file: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            file: file.into(),
            line,
            column,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display_with_location() {
        let err = ParseError::new(ParseErrorKind::ChildCount(3))
            .with_location(SourceLocation::new("tree.txt", 2, 5));
        assert_eq!(
            err.to_string(),
            "Parse error: expected 4 children, found 3 at tree.txt:2:5"
        );
    }

    #[test]
    fn test_parse_error_display_with_snippet() {
        let err = ParseError::new(ParseErrorKind::UnexpectedEof).with_snippet("[1, 0\n     ^");
        assert_eq!(
            err.to_string(),
            "Parse error: unexpected end of input\n[1, 0\n     ^"
        );
    }

    #[test]
    fn test_in_file_rewrites_location() {
        let err = ParseError::new(ParseErrorKind::LeafRoot)
            .with_location(SourceLocation::new("<input>", 1, 1))
            .in_file("a.txt");
        assert_eq!(err.location.unwrap().file, "a.txt");
    }

    #[test]
    fn test_invalid_side_message() {
        let err = QuadTreeError::InvalidSide(12);
        assert_eq!(
            err.to_string(),
            "Invalid side: 12 is not a non-zero power of two"
        );
    }

    #[test]
    fn test_too_small_message() {
        let err = QuadTreeError::TooSmall(1);
        assert_eq!(
            err.to_string(),
            "Side 1 cannot be split into quadrants (need at least 2)"
        );
    }

    #[test]
    fn test_parse_error_converts() {
        let err: QuadTreeError = ParseError::new(ParseErrorKind::TrailingInput).into();
        assert!(matches!(err, QuadTreeError::Parse(_)));
    }
}
