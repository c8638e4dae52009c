use ariadne::Source;
use cas_parser::parser::error::Error as ParseError;

/// Utility enum to package errors that can occur while processing a line.
#[derive(Debug)]
pub enum Error {
    /// Error that occurred while parsing an expression.
    ParseError(ParseError),

    /// A `:eval` assignment that is not of the form `name=value` with a rational value.
    InvalidAssignment(String),
}

impl Error {
    /// Report the errors in this [`Error`] to stderr.
    ///
    /// The `ariadne` crate's [`Report`](ariadne::Report) type actually does not have a `Display`
    /// implementation, so we can only use its `eprint` method to print to stderr.
    pub fn report_to_stderr(&self, input: &str) {
        match self {
            Self::ParseError(err) => {
                let report = err.build_report("input");
                if let Err(io_err) = report.eprint(("input", Source::from(input))) {
                    eprintln!("failed to print error report: {}", io_err);
                }
            },
            Self::InvalidAssignment(assignment) => {
                eprintln!("invalid assignment `{}`, expected `name=value` with a rational value", assignment);
            },
        }
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Self::ParseError(err)
    }
}
