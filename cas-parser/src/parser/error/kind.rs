use ariadne::{Fmt, Report};
use cas_error::{report_builder, ErrorKind, EXPR};
use crate::tokenizer::TokenKind;
use std::ops::Range;

/// The end of the source code was reached unexpectedly.
#[derive(Debug, Clone, PartialEq)]
pub struct UnexpectedEof;

impl ErrorKind for UnexpectedEof {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)> {
        report_builder(
            src_id,
            spans,
            "unexpected end of file",
            &[format!("you might need to add another {} here", "expression".fg(EXPR))],
        ).finish()
    }
}

/// The end of the source code was expected, but something else was found.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpectedEof;

impl ErrorKind for ExpectedEof {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)> {
        report_builder(
            src_id,
            spans,
            "expected end of file",
            &[format!("I could not understand the remaining {} here", "expression".fg(EXPR))],
        ).finish()
    }
}

/// An unexpected token was encountered.
#[derive(Debug, Clone, PartialEq)]
pub struct UnexpectedToken {
    /// The token(s) that were expected.
    pub expected: &'static [TokenKind],

    /// The token that was found.
    pub found: TokenKind,
}

impl ErrorKind for UnexpectedToken {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)> {
        let expected = self.expected.iter()
            .map(|t| format!("{:?}", t))
            .collect::<Vec<_>>()
            .join(", ");
        let mut builder = report_builder(
            src_id,
            spans,
            "unexpected token",
            &[format!("expected one of: {}", expected)],
        );
        builder.set_help(format!("found {:?}", self.found));
        builder.finish()
    }
}

/// A parenthesis was opened but never closed.
///
/// The first span points at the opening parenthesis, the second at the place a closing
/// parenthesis was expected.
#[derive(Debug, Clone, PartialEq)]
pub struct UnclosedParenthesis;

impl ErrorKind for UnclosedParenthesis {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)> {
        let mut builder = report_builder(
            src_id,
            spans,
            "missing closing parenthesis",
            &["this parenthesis is never closed".to_string(), "expected `)` here".to_string()],
        );
        builder.set_help(format!("add a `{}` to close the group", ")".fg(EXPR)));
        builder.finish()
    }
}
