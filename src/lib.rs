//! Boolean expression engine
//!
//! Parses textual boolean expressions (identifiers combined with `and`,
//! `or`, `not`, and parentheses) into an immutable syntax tree, then
//! evaluates the tree against caller-supplied identifier bindings. `and`
//! binds tighter than `or`, both are left-associative, and evaluation
//! short-circuits.
//!
//! ```
//! use boolexpr_core::{parse, Bindings};
//!
//! let tree = parse("(p or q) and not r")?;
//!
//! let mut bindings = Bindings::new();
//! bindings.insert("p".to_string(), false);
//! bindings.insert("q".to_string(), true);
//! bindings.insert("r".to_string(), false);
//!
//! assert!(tree.evaluate(&bindings)?);
//! # Ok::<(), boolexpr_core::BoolExprError>(())
//! ```

pub mod ast;
pub mod cache;
pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod parser;

#[cfg(test)]
mod property_tests;

pub use ast::{BinaryOp, Node, Tree, UnaryOp};
pub use error::{BoolExprError, Result};
pub use evaluator::{evaluate, Bindings};
pub use parser::parse;
