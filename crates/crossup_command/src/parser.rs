//! Notation parsing.
//!
//! Builds a nested parse tree from the flat token stream, honoring
//! operator precedence and parenthetical grouping. AND binds tighter than
//! OR: the parser tries the AND interpretation against the entire token
//! run first, and only treats the top level as OR when no AND grouping
//! consumes the whole stream.

use std::fmt;

use crate::token::{BaseToken, Token, tokens_text};

/// A node of the notation parse tree.
#[derive(Clone, Debug, PartialEq)]
pub enum ParseNode {
    /// A single base input.
    Base(BaseToken),
    /// An AND junction over two or more operands.
    All(Vec<ParseNode>),
    /// An OR junction over two or more operands.
    Any(Vec<ParseNode>),
    /// A parenthesized compound, retaining its original tokens.
    Group {
        /// The source tokens, enclosing parens included.
        tokens: Vec<Token>,
        /// The parsed interior.
        inner: Box<ParseNode>,
    },
}

impl fmt::Display for ParseNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Base(base) => write!(f, "{base}"),
            Self::All(children) => write_joined(f, children, '+'),
            Self::Any(children) => write_joined(f, children, '|'),
            Self::Group { tokens, .. } => write!(f, "{}", tokens_text(tokens)),
        }
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, children: &[ParseNode], operator: char) -> fmt::Result {
    for (i, child) in children.iter().enumerate() {
        if i > 0 {
            write!(f, "{operator}")?;
        }
        write!(f, "{child}")?;
    }
    Ok(())
}

/// Parses a token stream into a tree.
///
/// Returns `None` when the stream matches no production. Callers that
/// require a successful parse turn that into an error naming the
/// offending substring.
#[must_use]
pub fn parse(tokens: &[Token]) -> Option<ParseNode> {
    if tokens.is_empty() {
        return None;
    }
    if let [Token::Base(base)] = tokens {
        return Some(ParseNode::Base(*base));
    }
    if let Some(node) = parse_junction(tokens, Token::And) {
        return Some(node);
    }
    if let Some(node) = parse_junction(tokens, Token::Or) {
        return Some(node);
    }
    parse_group(tokens)
}

/// Splits the stream on a top-level operator and parses each segment.
///
/// Requires at least two operands; fails when any segment fails to parse,
/// leaving the lower-precedence interpretation (or the group rule) to try
/// the stream instead.
fn parse_junction(tokens: &[Token], operator: Token) -> Option<ParseNode> {
    let segments = split_top_level(tokens, operator)?;
    let mut children = Vec::with_capacity(segments.len());
    for segment in segments {
        children.push(parse(segment)?);
    }
    Some(if operator == Token::And {
        ParseNode::All(children)
    } else {
        ParseNode::Any(children)
    })
}

/// Splits on `operator` occurrences outside any parentheses.
///
/// Returns `None` when fewer than two segments result, or when the stream
/// closes a paren it never opened (the split must not break inside
/// unbalanced parens).
fn split_top_level(tokens: &[Token], operator: Token) -> Option<Vec<&[Token]>> {
    let mut segments = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;

    for (i, token) in tokens.iter().enumerate() {
        match token {
            Token::LParen => depth += 1,
            Token::RParen => depth = depth.checked_sub(1)?,
            t if *t == operator && depth == 0 => {
                segments.push(&tokens[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    segments.push(&tokens[start..]);

    if segments.len() < 2 {
        return None;
    }
    Some(segments)
}

/// Parses a parenthesized compound.
///
/// The grammar licenses parens only around AND/OR interiors; a lone base
/// input in parens is not a production. The node keeps the original
/// tokens, parens included, for textual fidelity.
fn parse_group(tokens: &[Token]) -> Option<ParseNode> {
    let [Token::LParen, interior @ .., Token::RParen] = tokens else {
        return None;
    };
    let inner = parse(interior)?;
    if !matches!(inner, ParseNode::All(_) | ParseNode::Any(_)) {
        return None;
    }
    Some(ParseNode::Group {
        tokens: tokens.to_vec(),
        inner: Box::new(inner),
    })
}
