//! Error types for the boolean expression engine

use thiserror::Error;

/// Main error type for the boolean expression engine
///
/// Lexing and parsing failures surface from [`crate::parser::parse`];
/// `UndefinedIdentifier` surfaces from evaluation. Each failed call
/// produces exactly one error, never a partial result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoolExprError {
    #[error("bad character at offset {offset}")]
    BadCharacter { offset: usize },

    #[error("unexpected right parenthesis at offset {offset}")]
    UnmatchedRightParen { offset: usize },

    #[error("expected {expected}, found {found} at offset {offset}")]
    UnexpectedToken {
        expected: &'static str,
        found: String,
        offset: usize,
    },

    #[error("unclosed parenthesis: expected ')', found {found} at offset {offset}")]
    UnclosedParen { found: String, offset: usize },

    #[error("unexpected end of input")]
    UnexpectedEndOfInput,

    #[error("undefined identifier: {0}")]
    UndefinedIdentifier(String),
}

/// Result type alias for the boolean expression engine
pub type Result<T> = std::result::Result<T, BoolExprError>;
