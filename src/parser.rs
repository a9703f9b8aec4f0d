//! Boolean expression parser
//!
//! Recursive descent for unary/parenthesized/atomic expressions plus one
//! level of precedence climbing for the binary operators. Grammar:
//!
//! ```text
//! expr      := unaryExpr ( ( "and" | "or" ) unaryExpr )*
//! unaryExpr := "not" unaryExpr | "(" expr ")" | identifier
//! ```
//!
//! Malformed input aborts immediately; there is no error recovery and each
//! failed call surfaces exactly one [`BoolExprError`].

use smallvec::SmallVec;

use crate::ast::{BinaryOp, Node, Tree, UnaryOp};
use crate::error::{BoolExprError, Result};
use crate::lexer::{Lexer, Token, TokenKind};

/// Parse an expression string into a [`Tree`]
pub fn parse(text: &str) -> Result<Tree> {
    let mut parser = Parser::new(text);
    let root = parser.parse_expr()?;
    // a stray `)` never reaches this point: the lexer rejects it at depth 0
    let token = parser.next_token();
    match token.kind {
        TokenKind::EndOfInput => Ok(Tree::new(root, text)),
        _ => Err(BoolExprError::UnexpectedToken {
            expected: "end of input",
            found: token.to_string(),
            offset: token.start,
        }),
    }
}

struct Parser<'a> {
    lexer: Lexer<'a>,
    /// Pushed-back tokens; holds at most one in practice, the `)` or
    /// end-of-input that terminated a sub-expression.
    pushback: SmallVec<[Token<'a>; 2]>,
}

impl<'a> Parser<'a> {
    fn new(text: &'a str) -> Self {
        Parser {
            lexer: Lexer::new(text),
            pushback: SmallVec::new(),
        }
    }

    fn next_token(&mut self) -> Token<'a> {
        if let Some(token) = self.pushback.pop() {
            return token;
        }
        // the lexer is fused after its terminator; every consumer of a
        // terminator pushes it back, so this fallback does not fire during
        // a normal parse
        self.lexer.next().unwrap_or_else(|| self.lexer.end_token())
    }

    fn backup(&mut self, token: Token<'a>) {
        self.pushback.push(token);
    }

    /// `expr := unaryExpr ( ( "and" | "or" ) unaryExpr )*`
    ///
    /// Left-associative precedence climbing: each binary operator is
    /// spliced into the right spine of the tree built so far. Terminates
    /// on `)` or end of input, pushing the terminator back for the caller.
    fn parse_expr(&mut self) -> Result<Node> {
        let mut root = self.parse_unary_expr()?;
        loop {
            let token = self.next_token();
            let op = match token.kind {
                TokenKind::And => BinaryOp::And,
                TokenKind::Or => BinaryOp::Or,
                TokenKind::RightParen | TokenKind::EndOfInput => {
                    self.backup(token);
                    return Ok(root);
                }
                TokenKind::Error(kind) => return Err(kind.at(token.start)),
                _ => {
                    return Err(BoolExprError::UnexpectedToken {
                        expected: "operator",
                        found: token.to_string(),
                        offset: token.start,
                    })
                }
            };
            let rhs = self.parse_unary_expr()?;
            root = splice(root, op, rhs);
        }
    }

    /// `unaryExpr := "not" unaryExpr | "(" expr ")" | identifier`
    fn parse_unary_expr(&mut self) -> Result<Node> {
        let token = self.next_token();
        match token.kind {
            TokenKind::Identifier => Ok(Node::Identifier(token.text.to_string())),
            TokenKind::Not => {
                let operand = self.parse_unary_expr()?;
                Ok(Node::Unary {
                    op: UnaryOp::Not,
                    operand: Box::new(operand),
                })
            }
            TokenKind::LeftParen => {
                let inner = self.parse_expr()?;
                let close = self.next_token();
                if close.kind != TokenKind::RightParen {
                    return Err(BoolExprError::UnclosedParen {
                        found: close.to_string(),
                        offset: close.start,
                    });
                }
                Ok(Node::Paren(Box::new(inner)))
            }
            TokenKind::EndOfInput => Err(BoolExprError::UnexpectedEndOfInput),
            TokenKind::Error(kind) => Err(kind.at(token.start)),
            _ => Err(BoolExprError::UnexpectedToken {
                expected: "operand",
                found: token.to_string(),
                offset: token.start,
            }),
        }
    }
}

/// Splice a binary operator into the right spine of `node`.
///
/// Descends while the spine holds binary operators of strictly lower
/// precedence, then takes over that slot: the old subtree becomes the new
/// operator's left child. Equal precedence splices immediately, which
/// keeps chains left-associative. Linear in the number of operators, no
/// backtracking.
fn splice(node: Node, op: BinaryOp, rhs: Node) -> Node {
    match node {
        Node::Binary {
            op: cur,
            left,
            right,
        } if cur.precedence() < op.precedence() => Node::Binary {
            op: cur,
            left,
            right: Box::new(splice(*right, op, rhs)),
        },
        left => Node::Binary {
            op,
            left: Box::new(left),
            right: Box::new(rhs),
        },
    }
}
