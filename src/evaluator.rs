//! Tree evaluation against caller-supplied bindings
//!
//! A pure recursive walk: no side effects, so one [`Tree`] can be
//! evaluated repeatedly with different bindings, and concurrently from
//! multiple threads.

use ahash::AHashMap;

use crate::ast::{BinaryOp, Node, Tree, UnaryOp};
use crate::error::{BoolExprError, Result};

/// Identifier valuation for one evaluation pass
pub type Bindings = AHashMap<String, bool>;

/// Evaluate a node against `bindings`
///
/// `and`/`or` short-circuit: the right operand is not visited when the
/// left one already decides the result. Evaluation stops at the first
/// identifier missing from `bindings`, in walk order.
pub fn evaluate(node: &Node, bindings: &Bindings) -> Result<bool> {
    match node {
        Node::Identifier(name) => bindings
            .get(name)
            .copied()
            .ok_or_else(|| BoolExprError::UndefinedIdentifier(name.clone())),
        Node::Binary {
            op: BinaryOp::And,
            left,
            right,
        } => {
            if !evaluate(left, bindings)? {
                Ok(false)
            } else {
                evaluate(right, bindings)
            }
        }
        Node::Binary {
            op: BinaryOp::Or,
            left,
            right,
        } => {
            if evaluate(left, bindings)? {
                Ok(true)
            } else {
                evaluate(right, bindings)
            }
        }
        Node::Unary {
            op: UnaryOp::Not,
            operand,
        } => Ok(!evaluate(operand, bindings)?),
        Node::Paren(inner) => evaluate(inner, bindings),
    }
}

impl Tree {
    /// Evaluate the tree against `bindings`
    pub fn evaluate(&self, bindings: &Bindings) -> Result<bool> {
        evaluate(self.root(), bindings)
    }
}
