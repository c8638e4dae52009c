use crate::parser::{
    ast::{expr::Expr, unary::Unary},
    error::Error,
    token::op::{BinOp, BinOpKind},
    Associativity,
    Parser,
    Precedence,
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A binary expression, such as `n - k`. Binary expressions can include nested expressions.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Binary {
    /// The left-hand side of the binary expression.
    pub lhs: Box<Expr>,

    /// The operator of the binary expression.
    pub op: BinOp,

    /// The right-hand side of the binary expression.
    pub rhs: Box<Expr>,

    /// The region of the source code that this binary expression was parsed from.
    pub span: Range<usize>,
}

impl Binary {
    /// Returns the span of the binary expression.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// After parsing the left-hand-side, the operator, and the right-hand-side of a potential
    /// binary expression, parse ahead to see if the right-hand-side is incomplete.
    ///
    /// If we are parsing `n - k * 2`, we first parse `n`, then `-`, then `k`. Before building the
    /// `n - k` node, we check whether the operator after `k` binds tighter than `-`. It does, so
    /// `k * 2` is parsed first (by calling [`Self::parse_expr`] with `k` as the left-hand-side)
    /// and becomes the right-hand-side of `n -`.
    ///
    /// In `n * k - 2`, the operator after `k` binds looser, so the `n * k` node is built and
    /// [`Self::parse_expr`] picks up the `- 2` part afterwards.
    fn complete_rhs(input: &mut Parser, lhs: Expr, op: BinOp, mut rhs: Expr) -> Result<Expr, Error> {
        let precedence = op.precedence();

        loop {
            // clone the input stream to emulate peeking
            let mut input_ahead = input.clone();
            let Ok(next_op) = input_ahead.try_parse::<BinOp>() else {
                break;
            };

            let binds_tighter = next_op.precedence() > precedence
                || (next_op.precedence() == precedence
                    && next_op.associativity() == Associativity::Right);
            if binds_tighter {
                rhs = Self::parse_expr(input, rhs, next_op.precedence())?;
            } else {
                // equal precedence and left-associative, or lower precedence:
                // `n * k * 2` or `n * k + 2`
                // let `lhs` become `n * k`; the operator is handled by the outer loop
                break;
            }
        }

        let span = lhs.span().start..rhs.span().end;
        Ok(Expr::Binary(Binary {
            lhs: Box::new(lhs),
            op,
            rhs: Box::new(rhs),
            span,
        }))
    }

    /// After parsing the left-hand-side of a potential binary expression, parse ahead to see if
    /// there is a binary operator of at least the given precedence and a right-hand-side.
    pub fn parse_expr(input: &mut Parser, mut lhs: Expr, precedence: Precedence) -> Result<Expr, Error> {
        loop {
            let mut input_ahead = input.clone();
            match input_ahead.try_parse::<BinOp>() {
                Ok(op) if op.precedence() >= precedence => {
                    input.set_cursor(&input_ahead);
                    let rhs = Unary::parse_or_lower(input)?;
                    lhs = Self::complete_rhs(input, lhs, op, rhs)?;
                },
                _ => break,
            }
        }

        Ok(lhs)
    }
}

impl fmt::Display for Binary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = match self.op.kind {
            BinOpKind::Exp => "^",
            BinOpKind::Mul => "*",
            BinOpKind::Div => "/",
            BinOpKind::Add => "+",
            BinOpKind::Sub => "-",
        };
        match self.op.kind {
            BinOpKind::Exp => write!(f, "{}{}{}", self.lhs, op, self.rhs),
            _ => write!(f, "{} {} {}", self.lhs, op, self.rhs),
        }
    }
}
