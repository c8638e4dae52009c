//! Tokenizer and parser for the small expression language read by the combinatorial simplifier.
//!
//! The language covers integers, symbols, function calls, the arithmetic operators `+ - * / ^`,
//! unary negation, postfix factorial (`n!`), and parentheses. Parsing produces an
//! [`ast::Expr`](parser::ast::Expr) that keeps the source span of every node, so that errors can
//! point back into the input.
//!
//! ```
//! use cas_parser::parser::{ast::Expr, Parser};
//!
//! let mut parser = Parser::new("factorial(n) / factorial(n - 3)");
//! let expr = parser.try_parse_full::<Expr>().unwrap();
//! assert_eq!(expr.span(), 0..31);
//! ```

pub mod parser;
pub mod tokenizer;
