//! Tokenizer for boolean expressions
//!
//! Converts input text into a lazy stream of [`Token`]s consumed one at a
//! time by the parser. The stream is finite and forward-only: it ends with
//! exactly one `EndOfInput` token, or one `Error` token after which nothing
//! else is produced.

use std::fmt;

use crate::error::BoolExprError;

/// Reserved words; these never lex as identifiers.
fn keyword(word: &str) -> Option<TokenKind> {
    match word {
        "and" => Some(TokenKind::And),
        "or" => Some(TokenKind::Or),
        "not" => Some(TokenKind::Not),
        _ => None,
    }
}

/// Letters, digits, and underscore make up identifiers.
fn is_identifier_char(c: char) -> bool {
    c == '_' || c.is_alphanumeric()
}

/// Whitespace is space and tab only; anything else is a bad character.
fn is_space(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// Terminal lexing failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexErrorKind {
    /// A character that fits no token class
    BadCharacter,
    /// A `)` with no `(` open
    UnmatchedRightParen,
}

impl LexErrorKind {
    /// Attach the token offset, producing the public error value
    pub fn at(self, offset: usize) -> BoolExprError {
        match self {
            LexErrorKind::BadCharacter => BoolExprError::BadCharacter { offset },
            LexErrorKind::UnmatchedRightParen => BoolExprError::UnmatchedRightParen { offset },
        }
    }
}

/// All token variants produced by the lexer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Identifier,
    And,
    Or,
    Not,
    LeftParen,
    RightParen,
    EndOfInput,
    Error(LexErrorKind),
}

/// A classified, positioned substring of the input text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub start: usize,
    pub text: &'a str,
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Identifier => write!(f, "identifier \"{}\"", self.text),
            TokenKind::EndOfInput => f.write_str("end of input"),
            TokenKind::Error(LexErrorKind::BadCharacter) => {
                write!(f, "bad character \"{}\"", self.text)
            }
            TokenKind::Error(LexErrorKind::UnmatchedRightParen) => {
                f.write_str("unexpected right parenthesis")
            }
            _ => write!(f, "\"{}\"", self.text),
        }
    }
}

/// Single-pass scanner over the input text
///
/// One-character lookahead via the `next_char`/`backup` pair: identifier
/// scanning over-reads one character to find its boundary, then backs up
/// before classifying the word as a keyword or plain identifier.
#[derive(Debug)]
pub struct Lexer<'a> {
    input: &'a str,
    start: usize,
    pos: usize,
    width: usize,
    paren_depth: usize,
    finished: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input,
            start: 0,
            pos: 0,
            width: 0,
            paren_depth: 0,
            finished: false,
        }
    }

    fn next_char(&mut self) -> Option<char> {
        match self.input[self.pos..].chars().next() {
            Some(c) => {
                self.width = c.len_utf8();
                self.pos += self.width;
                Some(c)
            }
            None => {
                self.width = 0;
                None
            }
        }
    }

    /// Step back over the last character read; valid once per `next_char`.
    fn backup(&mut self) {
        self.pos -= self.width;
    }

    /// Drop the pending text (used for whitespace).
    fn skip(&mut self) {
        self.start = self.pos;
    }

    fn emit(&mut self, kind: TokenKind) -> Token<'a> {
        let token = Token {
            kind,
            start: self.start,
            text: &self.input[self.start..self.pos],
        };
        self.start = self.pos;
        token
    }

    fn emit_error(&mut self, kind: LexErrorKind) -> Token<'a> {
        self.finished = true;
        self.emit(TokenKind::Error(kind))
    }

    /// Scan a maximal run of identifier characters; the first one has
    /// already been consumed by the caller.
    fn lex_identifier(&mut self) -> Token<'a> {
        loop {
            match self.next_char() {
                Some(c) if is_identifier_char(c) => {}
                Some(_) => {
                    self.backup();
                    break;
                }
                None => break,
            }
        }
        let word = &self.input[self.start..self.pos];
        match keyword(word) {
            Some(kind) => self.emit(kind),
            None => self.emit(TokenKind::Identifier),
        }
    }

    /// Synthesize an `EndOfInput` token at the current position.
    pub(crate) fn end_token(&self) -> Token<'a> {
        Token {
            kind: TokenKind::EndOfInput,
            start: self.pos,
            text: "",
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        if self.finished {
            return None;
        }
        loop {
            match self.next_char() {
                Some('(') => {
                    self.paren_depth += 1;
                    return Some(self.emit(TokenKind::LeftParen));
                }
                Some(')') => {
                    if self.paren_depth == 0 {
                        return Some(self.emit_error(LexErrorKind::UnmatchedRightParen));
                    }
                    self.paren_depth -= 1;
                    return Some(self.emit(TokenKind::RightParen));
                }
                Some(c) if is_space(c) => self.skip(),
                Some(c) if is_identifier_char(c) => return Some(self.lex_identifier()),
                Some(_) => return Some(self.emit_error(LexErrorKind::BadCharacter)),
                None => {
                    self.finished = true;
                    return Some(self.emit(TokenKind::EndOfInput));
                }
            }
        }
    }
}
