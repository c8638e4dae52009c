mod error;

use cas_combsimp::symbolic::{combsimp_with_steps, eval_exact, Assumptions, SymExpr};
use cas_parser::parser::{ast::Expr, Parser};
use error::Error;
use rug::Rational;
use rustyline::{error::ReadlineError, DefaultEditor};
use std::{collections::HashMap, fs::File, io::{self, BufReader, IsTerminal, Read}};
use tracing_subscriber::EnvFilter;

/// State carried between lines.
#[derive(Debug, Default)]
struct Session {
    /// Integrality facts declared with `:integer` and `:real`, and dropped with `:forget`.
    assumptions: Assumptions,

    /// Whether to print the steps taken by the simplifier.
    show_steps: bool,
}

/// Parses the given input string into an expression, with the session's assumptions applied.
///
/// `offset` is the position of `input` in the line it was taken from, so that error spans point
/// into that line.
fn parse(input: &str, offset: usize, session: &Session) -> Result<SymExpr, Error> {
    let ast = Parser::new(input).try_parse_full::<Expr>()
        .map_err(|mut err| {
            for span in &mut err.spans {
                *span = span.start + offset..span.end + offset;
            }
            err
        })?;
    Ok(session.assumptions.apply(&ast.into()))
}

/// Splits the arguments of `:eval` into the symbol values and the expression.
///
/// Leading words of the form `name=value` are assignments; the rest of the line is the expression.
fn split_assignments(args: &str) -> Result<(HashMap<String, Rational>, &str), Error> {
    let mut values = HashMap::new();
    let mut rest = args.trim_start();
    loop {
        let (word, tail) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
        let Some((name, value)) = word.split_once('=') else {
            break;
        };
        let value = value.parse::<Rational>()
            .map_err(|_| Error::InvalidAssignment(word.to_string()))?;
        values.insert(name.to_string(), value);
        rest = tail.trim_start();
    }
    Ok((values, rest))
}

/// Lists the declared facts, one `name: integer` or `name: real` per line.
fn describe_assumptions(assumptions: &Assumptions) -> String {
    assumptions.iter()
        .map(|(name, integer)| format!("{}: {}", name, if integer { "integer" } else { "real" }))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Processes one line of input: a command, or an expression to simplify.
fn process(input: &str, session: &mut Session) -> Result<(), Error> {
    let input = input.trim();
    let (command, args) = input.split_once(char::is_whitespace).unwrap_or((input, ""));

    match command {
        ":integer" => args.split_whitespace()
            .for_each(|name| session.assumptions.set_integer(name, true)),
        ":real" => args.split_whitespace()
            .for_each(|name| session.assumptions.set_integer(name, false)),
        ":forget" => args.split_whitespace()
            .for_each(|name| session.assumptions.remove(name)),
        ":assumptions" => {
            let listing = describe_assumptions(&session.assumptions);
            if !listing.is_empty() {
                println!("{}", listing);
            }
        },
        ":steps" => {
            session.show_steps = !session.show_steps;
            println!("steps {}", if session.show_steps { "on" } else { "off" });
        },
        ":eval" => {
            let (values, expr_src) = split_assignments(args)?;
            let expr = parse(expr_src, input.len() - expr_src.len(), session)?;
            match eval_exact(&expr, &values) {
                Some(value) => println!("{}", value),
                None => println!("undefined"),
            }
        },
        _ => {
            let expr = parse(input, 0, session)?;
            let (result, steps) = combsimp_with_steps(&expr);
            if session.show_steps {
                steps.iter().for_each(|step| println!("  {:?}", step));
            }
            println!("{}", result);
        },
    }

    Ok(())
}

/// Processes each line of the given source, reporting errors to stderr.
fn run_source(source: &str, session: &mut Session) {
    for line in source.lines().filter(|line| !line.trim().is_empty()) {
        if let Err(err) = process(line, session) {
            err.report_to_stderr(line.trim());
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut args = std::env::args();
    args.next();

    let mut session = Session::default();

    if let Some(filename) = args.next() {
        // run source file
        let mut input = String::new();
        let read = File::open(&filename)
            .and_then(|file| BufReader::new(file).read_to_string(&mut input));
        if let Err(err) = read {
            eprintln!("could not read `{}`: {}", filename, err);
            std::process::exit(1);
        }

        run_source(&input, &mut session);
    } else if !io::stdin().is_terminal() {
        // read source from stdin
        let mut input = String::new();
        if let Err(err) = io::stdin().read_to_string(&mut input) {
            eprintln!("could not read stdin: {}", err);
            std::process::exit(1);
        }

        run_source(&input, &mut session);
    } else {
        // run the repl / interactive mode
        let mut rl = match DefaultEditor::new() {
            Ok(rl) => rl,
            Err(err) => {
                eprintln!("{}", err);
                std::process::exit(1);
            },
        };

        fn process_line(rl: &mut DefaultEditor, session: &mut Session) -> Result<(), ReadlineError> {
            let input = rl.readline("> ")?;
            if input.trim().is_empty() {
                return Ok(());
            }

            rl.add_history_entry(&input)?;

            if let Err(err) = process(&input, session) {
                err.report_to_stderr(input.trim());
            }
            Ok(())
        }

        loop {
            if let Err(err) = process_line(&mut rl, &mut session) {
                match err {
                    ReadlineError::Eof | ReadlineError::Interrupted => (),
                    _ => eprintln!("{}", err),
                }
                break;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assignments_before_expression() {
        let (values, expr) = split_assignments(" n=5 k=2/3 binomial(n, 2) + k").unwrap();
        assert_eq!(values.get("n"), Some(&Rational::from(5)));
        assert_eq!(values.get("k"), Some(&Rational::from((2, 3))));
        assert_eq!(expr, "binomial(n, 2) + k");
    }

    #[test]
    fn declare_and_forget() {
        let mut session = Session::default();
        process(":integer n k", &mut session).unwrap();
        process(":real x", &mut session).unwrap();
        assert_eq!(describe_assumptions(&session.assumptions), "k: integer\nn: integer\nx: real");

        process(":forget k x", &mut session).unwrap();
        assert_eq!(session.assumptions.get("k"), None);
        assert_eq!(describe_assumptions(&session.assumptions), "n: integer");
    }

    #[test]
    fn invalid_assignment() {
        assert!(matches!(
            split_assignments("n=x factorial(n)"),
            Err(Error::InvalidAssignment(word)) if word == "n=x",
        ));
    }
}
