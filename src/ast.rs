//! Abstract syntax tree for boolean expressions
//!
//! Nodes form a closed set of five variants; every operator node leaves the
//! parser with fully populated children. A [`Tree`] owns its root
//! exclusively and is never mutated after construction, so shared
//! references can be evaluated concurrently.

use serde::Serialize;
use std::fmt;

/// Binary operators, left-associative
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BinaryOp {
    And,
    Or,
}

impl BinaryOp {
    /// `and` binds tighter than `or`
    pub fn precedence(self) -> u8 {
        match self {
            BinaryOp::Or => 1,
            BinaryOp::And => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BinaryOp::And => "and",
            BinaryOp::Or => "or",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unary operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UnaryOp {
    Not,
}

impl UnaryOp {
    pub fn as_str(self) -> &'static str {
        match self {
            UnaryOp::Not => "not",
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// AST node for boolean expressions
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Node {
    /// Leaf referencing an externally bound value
    Identifier(String),
    /// Prefix operator application
    Unary { op: UnaryOp, operand: Box<Node> },
    /// Binary operator application
    Binary {
        op: BinaryOp,
        left: Box<Node>,
        right: Box<Node>,
    },
    /// Explicit grouping; transparent at evaluation time but kept distinct
    /// so printing round-trips the source parentheses
    Paren(Box<Node>),
}

impl Node {
    /// Indented multi-line rendering, one node per line. For debugging.
    pub fn pretty(&self) -> String {
        let mut out = String::new();
        self.pretty_into(&mut out, 0);
        out
    }

    fn pretty_into(&self, out: &mut String, depth: usize) {
        for _ in 0..depth {
            out.push_str("  ");
        }
        match self {
            Node::Identifier(name) => {
                out.push_str(name);
                out.push('\n');
            }
            Node::Unary { op, operand } => {
                out.push_str(op.as_str());
                out.push('\n');
                operand.pretty_into(out, depth + 1);
            }
            Node::Binary { op, left, right } => {
                out.push_str(op.as_str());
                out.push('\n');
                left.pretty_into(out, depth + 1);
                right.pretty_into(out, depth + 1);
            }
            Node::Paren(inner) => {
                out.push_str("()\n");
                inner.pretty_into(out, depth + 1);
            }
        }
    }
}

/// Prints the node back in expression syntax; parsing the output yields a
/// structurally equivalent tree.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Identifier(name) => f.write_str(name),
            Node::Unary { op, operand } => write!(f, "{} {}", op, operand),
            Node::Binary { op, left, right } => write!(f, "{} {} {}", left, op, right),
            Node::Paren(inner) => write!(f, "({})", inner),
        }
    }
}

/// A parsed expression tree
///
/// Constructed once per [`crate::parser::parse`] call and read-only
/// afterwards; evaluation may run repeatedly and concurrently against it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tree {
    root: Node,
    text: String,
}

impl Tree {
    pub(crate) fn new(root: Node, text: impl Into<String>) -> Self {
        Tree {
            root,
            text: text.into(),
        }
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// The source text this tree was parsed from
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Indented multi-line rendering of the whole tree. For debugging.
    pub fn pretty(&self) -> String {
        self.root.pretty()
    }
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.root.fmt(f)
    }
}
