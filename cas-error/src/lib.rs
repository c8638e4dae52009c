//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages.
//!
//! Only the text-facing layers of the workspace (parsing and the REPL) can fail. The simplifier
//! itself maps expressions to expressions and never produces an [`Error`].

use ariadne::{Color, Label, Report, ReportBuilder, ReportKind, Source};
use std::{fmt::Debug, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// Represents any kind of error that can occur during some operation.
pub trait ErrorKind: Debug + Send {
    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)>;
}

/// Starts a report with the given message, attaching one highlighted label per span.
///
/// Labels are paired with spans by position. Spans without a matching label are highlighted with
/// no message.
pub fn report_builder<'a>(
    src_id: &'a str,
    spans: &[Range<usize>],
    message: impl ToString,
    labels: &[String],
) -> ReportBuilder<'a, (&'a str, Range<usize>)> {
    let offset = spans.first().map_or(0, |span| span.start);
    Report::build(ReportKind::Error, src_id, offset)
        .with_message(message)
        .with_labels(spans.iter().enumerate().map(|(i, span)| {
            let label = Label::new((src_id, span.clone())).with_color(EXPR);
            match labels.get(i) {
                Some(text) if !text.is_empty() => label.with_message(text),
                _ => label,
            }
        }))
}

/// An error associated with regions of source code that can be highlighted.
#[derive(Debug)]
pub struct Error {
    /// The regions of the source code that this error originated from.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given spans and kind.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<'a, (&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }

    /// Renders the report for this error against the given source into a string, without
    /// printing it.
    pub fn render(&self, src_id: &str, input: &str) -> String {
        let mut buf = Vec::new();
        // writing into a `Vec` cannot fail
        let _ = self.build_report(src_id).write((src_id, Source::from(input)), &mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct DanglingOperator;

    impl ErrorKind for DanglingOperator {
        fn build_report<'a>(
            &self,
            src_id: &'a str,
            spans: &[Range<usize>],
        ) -> Report<'a, (&'a str, Range<usize>)> {
            report_builder(src_id, spans, "dangling operator", &["remove this".to_string()])
                .finish()
        }
    }

    #[test]
    fn render_report() {
        let err = Error::new(vec![2..3], DanglingOperator);
        let rendered = err.render("input", "n +");
        let plain = String::from_utf8(strip_ansi_escapes::strip(rendered.as_bytes())).unwrap();
        assert!(plain.contains("dangling operator"));
        assert!(plain.contains("remove this"));
    }
}
