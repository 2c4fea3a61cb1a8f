//! Recursive-descent parser for nested-list notation

use tracing::trace;

use super::{ParseOptions, INPUT_NAME};
use crate::error::{ParseError, ParseErrorKind, SourceLocation};
use crate::tree::{Node, QuadTree};
use crate::Color;

#[derive(Debug, Clone, PartialEq, Eq)]
enum TokenKind {
    Open,
    Close,
    Comma,
    Word(String),
    Eof,
}

impl TokenKind {
    fn text(&self) -> String {
        match self {
            TokenKind::Open => "[".to_string(),
            TokenKind::Close => "]".to_string(),
            TokenKind::Comma => ",".to_string(),
            TokenKind::Word(w) => w.clone(),
            TokenKind::Eof => String::new(),
        }
    }
}

#[derive(Debug, Clone)]
struct Token {
    kind: TokenKind,
    line: usize,
    column: usize,
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '+' | '.')
}

/// Parser state over a fully tokenized source.
pub(super) struct Parser<'a> {
    source: &'a str,
    options: &'a ParseOptions,
    tokens: Vec<Token>,
    pos: usize,
}

impl<'a> Parser<'a> {
    /// Tokenize `source`, failing on the first character that cannot start a token.
    pub(super) fn new(source: &'a str, options: &'a ParseOptions) -> Result<Self, ParseError> {
        let mut parser = Self {
            source,
            options,
            tokens: Vec::new(),
            pos: 0,
        };
        parser.tokenize()?;
        Ok(parser)
    }

    fn tokenize(&mut self) -> Result<(), ParseError> {
        let source = self.source;
        let mut chars = source.chars().peekable();
        let (mut line, mut column) = (1, 1);

        while let Some(c) = chars.next() {
            let start = (line, column);
            let kind = match c {
                '\n' => {
                    line += 1;
                    column = 1;
                    continue;
                }
                c if c.is_whitespace() => {
                    column += 1;
                    continue;
                }
                '[' => TokenKind::Open,
                ']' => TokenKind::Close,
                ',' => TokenKind::Comma,
                c if is_word_char(c) => {
                    let mut word = String::from(c);
                    while let Some(&next) = chars.peek() {
                        if !is_word_char(next) {
                            break;
                        }
                        word.push(next);
                        chars.next();
                        column += 1;
                    }
                    TokenKind::Word(word)
                }
                other => {
                    return Err(self.error_at(
                        ParseErrorKind::UnexpectedChar(other),
                        start.0,
                        start.1,
                    ))
                }
            };
            column += 1;
            self.tokens.push(Token {
                kind,
                line: start.0,
                column: start.1,
            });
        }

        self.tokens.push(Token {
            kind: TokenKind::Eof,
            line,
            column,
        });
        Ok(())
    }

    /// Parse the whole source as a single tree.
    pub(super) fn parse(mut self) -> Result<QuadTree, ParseError> {
        let first = self.peek().clone();
        let tree = match &first.kind {
            TokenKind::Open => self.parse_tree(1)?,
            TokenKind::Word(_) => return Err(self.error(ParseErrorKind::LeafRoot, &first)),
            TokenKind::Eof => return Err(self.error(ParseErrorKind::UnexpectedEof, &first)),
            other => {
                return Err(self.error(ParseErrorKind::UnexpectedToken(other.text()), &first))
            }
        };

        let rest = self.peek().clone();
        if rest.kind != TokenKind::Eof {
            return Err(self.error(ParseErrorKind::TrailingInput, &rest));
        }
        Ok(tree)
    }

    fn parse_tree(&mut self, depth: usize) -> Result<QuadTree, ParseError> {
        let open = self.advance();
        if depth > self.options.max_depth {
            return Err(self.error(ParseErrorKind::TooDeep(self.options.max_depth), &open));
        }

        let mut nodes = Vec::with_capacity(QuadTree::NB_NODES);
        loop {
            if self.peek().kind == TokenKind::Close {
                self.advance();
                break;
            }
            nodes.push(self.parse_node(depth)?);

            let sep = self.advance();
            match sep.kind {
                TokenKind::Comma => {}
                TokenKind::Close => break,
                TokenKind::Eof => return Err(self.error(ParseErrorKind::UnexpectedEof, &sep)),
                ref other => {
                    return Err(self.error(ParseErrorKind::UnexpectedToken(other.text()), &sep))
                }
            }
        }

        if nodes.len() != QuadTree::NB_NODES {
            return Err(self.error(ParseErrorKind::ChildCount(nodes.len()), &open));
        }
        trace!(depth, line = open.line, column = open.column, "parsed list");

        let mut children: [Node; 4] = std::array::from_fn(|_| Node::WHITE);
        for (quadrant, node) in self.options.order.sequence().into_iter().zip(nodes) {
            children[quadrant.index()] = node;
        }
        Ok(QuadTree::from(children))
    }

    fn parse_node(&mut self, depth: usize) -> Result<Node, ParseError> {
        let token = self.peek().clone();
        match &token.kind {
            TokenKind::Open => Ok(Node::branch(self.parse_tree(depth + 1)?)),
            TokenKind::Word(word) => {
                self.advance();
                let color = match word.as_str() {
                    "0" | "false" | "False" => Color::White,
                    "1" | "true" | "True" => Color::Black,
                    _ => return Err(self.error(ParseErrorKind::InvalidLeaf(word.clone()), &token)),
                };
                Ok(Node::Leaf(color))
            }
            TokenKind::Eof => Err(self.error(ParseErrorKind::UnexpectedEof, &token)),
            other => Err(self.error(ParseErrorKind::UnexpectedToken(other.text()), &token)),
        }
    }

    fn peek(&self) -> &Token {
        // The token list always ends with Eof and the cursor never moves past it.
        &self.tokens[self.pos]
    }

    fn advance(&mut self) -> Token {
        let token = self.tokens[self.pos].clone();
        if token.kind != TokenKind::Eof {
            self.pos += 1;
        }
        token
    }

    fn error(&self, kind: ParseErrorKind, token: &Token) -> ParseError {
        self.error_at(kind, token.line, token.column)
    }

    fn error_at(&self, kind: ParseErrorKind, line: usize, column: usize) -> ParseError {
        let err = ParseError::new(kind).with_location(SourceLocation::new(INPUT_NAME, line, column));
        match self.source.lines().nth(line - 1) {
            Some(text) => err.with_snippet(format!("{}\n{}^", text, " ".repeat(column - 1))),
            None => err,
        }
    }
}
