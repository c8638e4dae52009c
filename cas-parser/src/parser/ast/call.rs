use crate::{
    parser::{
        ast::{expr::Expr, literal::LitSym},
        error::{kind, Error},
        token::{CloseParen, Comma, OpenParen},
        Parse,
        Parser,
    },
    tokenizer::TokenKind,
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A function call, such as `binomial(n, k)`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Call {
    /// The name of the function to call.
    pub name: LitSym,

    /// The arguments to the function.
    pub args: Vec<Expr>,

    /// The region of the source code that this function call was parsed from.
    pub span: Range<usize>,

    /// The span of the parentheses that surround the arguments.
    pub paren_span: Range<usize>,
}

impl Call {
    /// Returns the span of the function call.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }
}

impl Parse for Call {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let name = input.try_parse::<LitSym>()?;
        let open_paren = input.try_parse::<OpenParen>()?;
        let mut args = Vec::new();

        let close_paren = if input.peek_is(TokenKind::CloseParen) {
            input.try_parse::<CloseParen>()?
        } else {
            loop {
                args.push(input.try_parse::<Expr>()?);

                if input.try_parse::<Comma>().is_ok() {
                    continue;
                }

                match input.try_parse::<CloseParen>() {
                    Ok(close_paren) => break close_paren,
                    Err(_) if input.peek_token().is_none() => {
                        return Err(Error::new(
                            vec![open_paren.span.clone(), input.span()],
                            kind::UnclosedParenthesis,
                        ));
                    },
                    Err(_) => {
                        let found = input.peek_token()
                            .map_or(TokenKind::Symbol, |token| token.kind);
                        return Err(input.error(kind::UnexpectedToken {
                            expected: &[TokenKind::Comma, TokenKind::CloseParen],
                            found,
                        }));
                    },
                }
            }
        };

        let span = name.span.start..close_paren.span.end;
        Ok(Self {
            name,
            args,
            span,
            paren_span: open_paren.span.start..close_paren.span.end,
        })
    }
}

impl fmt::Display for Call {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.name.fmt(f)?;
        write!(f, "(")?;
        if let Some((last, args)) = self.args.split_last() {
            for arg in args {
                arg.fmt(f)?;
                write!(f, ", ")?;
            }
            last.fmt(f)?;
        }
        write!(f, ")")
    }
}
