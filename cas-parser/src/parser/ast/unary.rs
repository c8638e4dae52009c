use crate::{
    parser::{
        ast::{binary::Binary, expr::{Expr, Primary}},
        error::{kind, Error},
        token::op::UnaryOp,
        Associativity,
        Parser,
    },
    tokenizer::TokenKind,
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Attempt to parse a unary operator with the correct associativity. The parser is left
/// unchanged if the next token is not such an operator.
fn try_parse_unary_op(input: &mut Parser, associativity: Associativity) -> Option<UnaryOp> {
    let mut input_ahead = input.clone();
    let op = input_ahead.try_parse::<UnaryOp>().ok()?;
    if op.associativity() == associativity {
        input.set_cursor(&input_ahead);
        Some(op)
    } else {
        None
    }
}

/// A unary expression, such as `-k` or `n!`. Unary expressions can include nested expressions.
///
/// Unary expressions do not implement [`Parse`] directly. [`Unary::parse_or_lower`] parses a
/// unary expression, or the operand alone if no operator is present.
///
/// [`Parse`]: crate::parser::Parse
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Unary {
    /// The operand of the unary expression (left or right, depending on the associativity).
    pub operand: Box<Expr>,

    /// The operator of the unary expression.
    pub op: UnaryOp,

    /// The region of the source code that this unary expression was parsed from.
    pub span: Range<usize>,
}

impl Unary {
    /// Returns the span of the unary expression.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Parse a unary expression with right-associativity (prefix negation).
    ///
    /// The operand extends over every following operator that binds tighter than negation, so
    /// `-x^2` is parsed as `-(x^2)`.
    pub fn parse_right(input: &mut Parser) -> Result<Self, Error> {
        let Some(op) = try_parse_unary_op(input, Associativity::Right) else {
            let found = input.peek_token().map_or(TokenKind::Symbol, |token| token.kind);
            return Err(input.error(kind::UnexpectedToken {
                expected: &[TokenKind::Sub],
                found,
            }));
        };
        let start_span = op.span.start;
        let operand = {
            let lhs = Unary::parse_or_lower(input)?;
            Binary::parse_expr(input, lhs, op.precedence().next())?
        };
        let end_span = operand.span().end;
        Ok(Self {
            operand: Box::new(operand),
            op,
            span: start_span..end_span,
        })
    }

    /// Parse a unary expression with left-associativity (postfix factorial).
    ///
    /// The operand must be parsed first, so if no operator follows it, the operand is returned
    /// on its own instead of backtracking.
    pub fn parse_left_or_operand(input: &mut Parser) -> Result<Expr, Error> {
        let operand = input.try_parse::<Primary>()?;
        let start_span = operand.span().start;

        let Some(op) = try_parse_unary_op(input, Associativity::Left) else {
            return Ok(operand.into());
        };
        let mut result = Self {
            span: start_span..op.span.end,
            operand: Box::new(operand.into()),
            op,
        };

        // `n!!` is the factorial of a factorial
        while let Some(next_op) = try_parse_unary_op(input, Associativity::Left) {
            result = Self {
                span: start_span..next_op.span.end,
                operand: Box::new(Expr::Unary(result)),
                op: next_op,
            };
        }

        Ok(Expr::Unary(result))
    }

    /// Parses a unary expression, or lower precedence expressions.
    pub fn parse_or_lower(input: &mut Parser) -> Result<Expr, Error> {
        if input.peek_is(TokenKind::Sub) {
            Self::parse_right(input).map(Expr::Unary)
        } else {
            Self::parse_left_or_operand(input)
        }
    }
}

impl fmt::Display for Unary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.op.associativity() {
            Associativity::Left => write!(f, "{}!", self.operand),
            Associativity::Right => write!(f, "-{}", self.operand),
        }
    }
}
