//! Recursive-descent parser for `{{...}}` templates.
//!
//! Anything that is not a well-formed tag, including blocks that never close
//! and close tags without a matching opener, is kept as literal text. An
//! unclosed opener becomes text on its own; what follows it is parsed again
//! in the enclosing scope, so it cannot swallow an outer close tag.

use std::collections::HashSet;

use super::ast::{BlockKind, Node, VarPath};

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

#[derive(Debug, Clone, Copy)]
enum Token<'a> {
    Text(&'a str),
    /// `raw` is the full `{{...}}` text, `inner` the part between the braces.
    Tag { raw: &'a str, inner: &'a str },
}

enum Tag {
    Open(BlockKind, VarPath),
    Close(BlockKind),
    Variable(VarPath),
    Literal,
}

/// Parse template source into a node list. Never fails.
pub fn parse(source: &str) -> Vec<Node> {
    let mut parser = Parser { tokens: tokenize(source), pos: 0, unclosed: HashSet::new() };
    let (nodes, _) = parser.parse_nodes(None);
    nodes
}

fn tokenize(source: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut rest = source;

    while let Some(start) = rest.find(OPEN) {
        let Some(len) = rest[start + OPEN.len()..].find(CLOSE) else {
            break;
        };
        if start > 0 {
            tokens.push(Token::Text(&rest[..start]));
        }
        let end = start + OPEN.len() + len + CLOSE.len();
        tokens.push(Token::Tag {
            raw: &rest[start..end],
            inner: &rest[start + OPEN.len()..start + OPEN.len() + len],
        });
        rest = &rest[end..];
    }

    if !rest.is_empty() {
        tokens.push(Token::Text(rest));
    }
    tokens
}

fn classify(inner: &str) -> Tag {
    let inner = inner.trim();

    if let Some(block) = inner.strip_prefix('#') {
        let (keyword, argument) = block.split_once(char::is_whitespace).unwrap_or((block, ""));
        return match (BlockKind::from_keyword(keyword), VarPath::parse(argument)) {
            (Some(kind), Some(path)) => Tag::Open(kind, path),
            _ => Tag::Literal,
        };
    }

    if let Some(keyword) = inner.strip_prefix('/') {
        return match BlockKind::from_keyword(keyword.trim()) {
            Some(kind) => Tag::Close(kind),
            None => Tag::Literal,
        };
    }

    match VarPath::parse(inner) {
        Some(path) => Tag::Variable(path),
        None => Tag::Literal,
    }
}

struct Parser<'a> {
    tokens: Vec<Token<'a>>,
    pos: usize,
    /// Token indexes of openers already known to have no close tag.
    unclosed: HashSet<usize>,
}

impl<'a> Parser<'a> {
    /// Parse until the close tag for `closing` (consumed) or end of input.
    ///
    /// Returns the nodes and whether the close tag was found.
    fn parse_nodes(&mut self, closing: Option<BlockKind>) -> (Vec<Node>, bool) {
        let mut nodes = Vec::new();

        while let Some(token) = self.tokens.get(self.pos).copied() {
            self.pos += 1;
            match token {
                Token::Text(text) => push_text(&mut nodes, text),
                Token::Tag { raw, inner } => match classify(inner) {
                    Tag::Variable(path) => nodes.push(Node::Variable(path)),
                    Tag::Open(kind, path) => {
                        let opener = self.pos - 1;
                        if self.unclosed.contains(&opener) {
                            push_text(&mut nodes, raw);
                            continue;
                        }
                        let (body, closed) = self.parse_nodes(Some(kind));
                        if closed {
                            nodes.push(block(kind, path, body));
                        } else {
                            self.unclosed.insert(opener);
                            self.pos = opener + 1;
                            push_text(&mut nodes, raw);
                        }
                    }
                    Tag::Close(kind) if Some(kind) == closing => return (nodes, true),
                    Tag::Close(_) | Tag::Literal => push_text(&mut nodes, raw),
                },
            }
        }

        (nodes, false)
    }
}

fn block(kind: BlockKind, path: VarPath, body: Vec<Node>) -> Node {
    match kind {
        BlockKind::Each => Node::Each { source: path, body },
        BlockKind::If => Node::If { condition: path, body },
        BlockKind::Unless => Node::Unless { condition: path, body },
    }
}

fn push_text(nodes: &mut Vec<Node>, text: &str) {
    if let Some(Node::Text(last)) = nodes.last_mut() {
        last.push_str(text);
    } else {
        nodes.push(Node::Text(text.to_string()));
    }
}
