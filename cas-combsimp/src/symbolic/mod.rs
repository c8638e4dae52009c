//! Symbolic manipulation of combinatorial expressions.
//!
//! # Expression representation
//!
//! Expressions in this module are represented as a tree of [`SymExpr`] nodes. It's similar to the
//! [`cas_parser::parser::ast::Expr`] nodes produced by [`cas_parser`], with the main difference
//! being that [`SymExpr`] nodes **flatten** out the tree structure: `n + (k + 1)` is a single
//! [`SymExpr::Add`] node with three terms. The functions `factorial`, `binomial`, `gamma`, `rf` and
//! `ff` are recognized by name and arity and become [`Func`] nodes; any other call is kept as an
//! opaque [`Primary::Call`].
//!
//! ```
//! use cas_combsimp::symbolic::SymExpr;
//! use cas_parser::parser::{ast::Expr, Parser};
//!
//! let mut parser = Parser::new("n! + binomial(n, k)");
//! let expr: SymExpr = parser.try_parse_full::<Expr>().unwrap().into();
//! assert_eq!(expr, SymExpr::Add(vec![
//!     SymExpr::factorial(SymExpr::symbol("n")),
//!     SymExpr::binomial(SymExpr::symbol("n"), SymExpr::symbol("k")),
//! ]));
//! ```
//!
//! Whether a symbol is an integer is recorded on the symbol itself, and attached with
//! [`Assumptions::apply`].
//!
//! # Simplification
//!
//! [`simplify()`] brings an expression into a canonical form, which the other transformations use
//! to compare expressions. [`rewrite()`] converts between the combinatorial functions and the
//! gamma function, and [`gammasimp()`] simplifies products of gamma functions.
//!
//! [`combsimp()`] builds on all of these to simplify expressions with factorials and binomial
//! coefficients, expressing the result in factorials and binomials again:
//!
//! ```
//! use cas_combsimp::symbolic::{combsimp, Assumptions, SymExpr};
//! use cas_parser::parser::{ast::Expr, Parser};
//!
//! let mut parser = Parser::new("factorial(n)/factorial(n - 3)");
//! let expr: SymExpr = parser.try_parse_full::<Expr>().unwrap().into();
//! let expr = Assumptions::new().with_integers(["n"]).apply(&expr);
//!
//! assert_eq!(combsimp(&expr).to_string(), "n*(n - 2)*(n - 1)");
//! ```

pub mod combsimp;
pub mod eval;
pub mod expr;
pub mod gamma;
pub mod rewrite;
pub mod simplify;
pub mod step_collector;

pub use combsimp::{combsimp, combsimp_with, combsimp_with_steps};
pub use eval::eval_exact;
pub use expr::{assume::Assumptions, Constant, Func, Primary, SymExpr, Symbol};
pub use gamma::{gammasimp, gammasimp_with, GammaMode};
pub use rewrite::{rewrite, RewriteTarget};
pub use simplify::{simplify, simplify_with, simplify_with_steps, step::Step};
pub use step_collector::StepCollector;
