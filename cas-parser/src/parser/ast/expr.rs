use crate::{
    parser::{
        ast::{
            binary::Binary,
            call::Call,
            literal::{LitInt, LitSym, Literal},
            paren::Paren,
            unary::Unary,
        },
        error::{kind, Error},
        Parse,
        Parser,
        Precedence,
    },
    tokenizer::TokenKind,
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Represents any kind of expression that can be written in the input language.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    /// A literal value.
    Literal(Literal),

    /// A parenthesized expression, such as `(n + 1)`.
    Paren(Paren),

    /// A function call, such as `factorial(n)`.
    Call(Call),

    /// A unary operation, such as `-k` or `n!`.
    Unary(Unary),

    /// A binary operation, such as `n - k`.
    Binary(Binary),
}

impl Expr {
    /// Returns the span of the expression.
    pub fn span(&self) -> Range<usize> {
        match self {
            Expr::Literal(literal) => literal.span(),
            Expr::Paren(paren) => paren.span(),
            Expr::Call(call) => call.span(),
            Expr::Unary(unary) => unary.span(),
            Expr::Binary(binary) => binary.span(),
        }
    }

    /// If this expression is an [`Expr::Paren`], returns the innermost expression in the
    /// parenthesized expression. Otherwise, returns `self`.
    pub fn into_innermost(self) -> Self {
        match self {
            Expr::Paren(paren) => paren.into_innermost(),
            expr => expr,
        }
    }
}

impl Parse for Expr {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let lhs = Unary::parse_or_lower(input)?;
        Binary::parse_expr(input, lhs, Precedence::Any)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Literal(literal) => literal.fmt(f),
            Expr::Paren(paren) => paren.fmt(f),
            Expr::Call(call) => call.fmt(f),
            Expr::Unary(unary) => unary.fmt(f),
            Expr::Binary(binary) => binary.fmt(f),
        }
    }
}

/// Represents a primary expression. Primary expressions are the operands of unary and binary
/// operators, and are parsed without looking at any surrounding operator.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Primary {
    /// A literal value.
    Literal(Literal),

    /// A parenthesized expression, such as `(n + 1)`.
    Paren(Paren),

    /// A function call, such as `factorial(n)`.
    Call(Call),
}

impl Primary {
    /// Returns the span of the primary expression.
    pub fn span(&self) -> Range<usize> {
        match self {
            Primary::Literal(literal) => literal.span(),
            Primary::Paren(paren) => paren.span(),
            Primary::Call(call) => call.span(),
        }
    }
}

impl Parse for Primary {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        // dispatch on the next token instead of backtracking, so errors from inside a group or
        // an argument list are reported as-is
        let Some(next_kind) = input.peek_token().map(|token| token.kind) else {
            return Err(input.error(kind::UnexpectedEof));
        };

        match next_kind {
            TokenKind::Int => input.try_parse::<LitInt>()
                .map(|int| Primary::Literal(Literal::Integer(int))),
            TokenKind::Name => {
                let mut input_ahead = input.clone();
                let _ = input_ahead.next_token()?;
                if input_ahead.peek_is(TokenKind::OpenParen) {
                    input.try_parse::<Call>().map(Primary::Call)
                } else {
                    input.try_parse::<LitSym>()
                        .map(|sym| Primary::Literal(Literal::Symbol(sym)))
                }
            },
            TokenKind::OpenParen => input.try_parse::<Paren>().map(Primary::Paren),
            found => Err(input.error(kind::UnexpectedToken {
                expected: &[TokenKind::Int, TokenKind::Name, TokenKind::OpenParen, TokenKind::Sub],
                found,
            })),
        }
    }
}

impl From<Primary> for Expr {
    fn from(primary: Primary) -> Self {
        match primary {
            Primary::Literal(literal) => Self::Literal(literal),
            Primary::Paren(paren) => Self::Paren(paren),
            Primary::Call(call) => Self::Call(call),
        }
    }
}
