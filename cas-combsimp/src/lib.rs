//! Simplification of expressions built from factorials, binomial coefficients, rising / falling
//! factorials and the gamma function.
//!
//! The entry point is [`symbolic::combsimp`]. It funnels every combinatorial function through the
//! gamma function, simplifies the gamma ratios that appear, and finally re-expresses the result
//! with factorials and binomial coefficients.
//!
//! ```
//! use cas_combsimp::symbolic::{combsimp, Assumptions, SymExpr};
//! use cas_parser::parser::{ast::Expr, Parser};
//!
//! let ast = Parser::new("factorial(n + 1) / (factorial(k + 1) * factorial(n - k))")
//!     .try_parse_full::<Expr>()
//!     .unwrap();
//! let assumptions = Assumptions::new().with_integers(["n", "k"]);
//! let expr = assumptions.apply(&SymExpr::from(ast));
//!
//! assert_eq!(combsimp(&expr).to_string(), "binomial(n + 1, k + 1)");
//! ```

pub mod funcs;
pub mod primitive;
pub mod symbolic;
