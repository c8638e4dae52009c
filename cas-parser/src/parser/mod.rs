pub mod ast;
pub mod error;
pub mod token;

use cas_error::ErrorKind;
use error::{kind, Error};
use super::tokenizer::{tokenize_complete, Token, TokenKind};
use std::ops::Range;

/// A high-level parser for the expression language. This is the type to use to parse an arbitrary
/// piece of text into an abstract syntax tree.
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The tokens that this parser is currently parsing.
    tokens: Box<[Token<'source>]>,

    /// The index of the **next** token to be parsed.
    cursor: usize,
}

impl<'source> Parser<'source> {
    /// Create a new parser for the given source.
    pub fn new(source: &'source str) -> Self {
        Self {
            tokens: tokenize_complete(source),
            cursor: 0,
        }
    }

    /// Creates an error that points at the current token, or the end of the source code if the
    /// cursor is at the end of the stream.
    pub fn error(&self, kind: impl ErrorKind + 'static) -> Error {
        Error::new(vec![self.span()], kind)
    }

    /// Returns a span pointing at the end of the source code.
    pub fn eof_span(&self) -> Range<usize> {
        self.tokens.last().map_or(0..0, |token| token.span.end..token.span.end)
    }

    /// Returns the span of the next non-whitespace token, or the end of the source code if the
    /// cursor is at the end of the stream.
    pub fn span(&self) -> Range<usize> {
        self.peek_token().map_or(self.eof_span(), |token| token.span.clone())
    }

    /// Moves this parser's cursor to the cursor of another parser over the same source. Used to
    /// commit to a speculative parse done on a cloned parser.
    pub fn set_cursor(&mut self, other: &Parser) {
        self.cursor = other.cursor;
    }

    /// Advances the cursor past any whitespace tokens.
    fn skip_whitespace(&mut self) {
        while self.tokens.get(self.cursor).map_or(false, Token::is_whitespace) {
            self.cursor += 1;
        }
    }

    /// Returns the next non-whitespace token without consuming it. Returns [`None`] if the
    /// cursor is at the end of the stream.
    pub fn peek_token(&self) -> Option<&Token<'source>> {
        self.tokens[self.cursor..]
            .iter()
            .find(|token| !token.is_whitespace())
    }

    /// Returns true if the next non-whitespace token is of the given kind.
    pub fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek_token().map_or(false, |token| token.kind == kind)
    }

    /// Returns the next token to be parsed, then advances the cursor. Whitespace tokens are
    /// skipped.
    ///
    /// Returns an EOF error if there are no more tokens.
    pub fn next_token(&mut self) -> Result<Token<'source>, Error> {
        self.skip_whitespace();
        match self.tokens.get(self.cursor) {
            Some(token) => {
                self.cursor += 1;
                // cloning is cheap: only Range<_> is cloned
                Ok(token.clone())
            },
            None => Err(self.error(kind::UnexpectedEof)),
        }
    }

    /// Speculatively parses a value from the given stream of tokens. This function can be used
    /// in the [`Parse::parse`] implementation of a type with the given [`Parser`], as it will
    /// automatically backtrack the cursor position if parsing fails.
    ///
    /// If parsing is successful, the stream is advanced past the consumed tokens and the parsed
    /// value is returned. Otherwise, the stream is left unchanged and an error is returned.
    pub fn try_parse<T: Parse>(&mut self) -> Result<T, Error> {
        let start = self.cursor;
        match T::parse(self) {
            Ok(value) => Ok(value),
            err => {
                self.cursor = start;
                err
            },
        }
    }

    /// Attempts to parse a value from the given stream of tokens. All the tokens must be consumed
    /// by the parser; if not, an error is returned.
    pub fn try_parse_full<T: Parse>(&mut self) -> Result<T, Error> {
        let value = T::parse(self)?;
        self.skip_whitespace();
        if self.cursor == self.tokens.len() {
            Ok(value)
        } else {
            Err(self.error(kind::ExpectedEof))
        }
    }
}

/// Any type that can be parsed from a source of tokens.
pub trait Parse: Sized {
    /// Parses a value from the given stream of tokens, advancing the stream past the consumed
    /// tokens if parsing is successful.
    ///
    /// This function should be used by consumers of the library.
    fn parse(input: &mut Parser) -> Result<Self, Error>;
}

/// The associativity of a binary or unary operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Associativity {
    /// The binary / unary operation is left-associative.
    ///
    /// For binary operations, this means `a op b op c` is evaluated as `(a op b) op c`. For unary
    /// operations, the operator appears to the right of the operand (`n!`).
    Left,

    /// The binary / unary operation is right-associative.
    ///
    /// For binary operations, this means `a op b op c` is evaluated as `a op (b op c)`. For unary
    /// operations, the operator appears to the left of the operand (`-n`).
    Right,
}

/// The precedence of an operation, in order from lowest precedence (evaluated last) to highest
/// precedence (evaluated first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// Any precedence.
    Any,

    /// The precedence of addition (`+`) and subtraction (`-`).
    Term,

    /// The precedence of multiplication (`*`) and division (`/`).
    Factor,

    /// The precedence of unary negation (`-`).
    Neg,

    /// The precedence of exponentiation (`^`).
    Exp,

    /// The precedence of the postfix factorial (`!`).
    Factorial,
}

impl Precedence {
    /// Returns the next higher precedence level. [`Precedence::Factorial`] is the highest level and
    /// is returned unchanged.
    pub fn next(self) -> Self {
        match self {
            Self::Any => Self::Term,
            Self::Term => Self::Factor,
            Self::Factor => Self::Neg,
            Self::Neg => Self::Exp,
            Self::Exp | Self::Factorial => Self::Factorial,
        }
    }
}
