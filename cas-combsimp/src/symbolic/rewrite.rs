//! Rewriting the combinatorial functions in terms of each other.
//!
//! The gamma function is the common representation: every factorial, binomial coefficient and
//! rising / falling factorial can be written as a ratio of gamma functions, and every gamma
//! function can be written as a factorial.

use super::{
    expr::{Func, SymExpr},
    simplify::simplify,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The function family to rewrite into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RewriteTarget {
    /// `factorial(x) = gamma(x + 1)`
    /// `binomial(n, k) = gamma(n + 1)/(gamma(k + 1)*gamma(n - k + 1))`
    /// `rf(x, k) = gamma(x + k)/gamma(x)`
    /// `ff(x, k) = gamma(x + 1)/gamma(x - k + 1)`
    Gamma,

    /// `gamma(x) = factorial(x - 1)`
    /// `binomial(n, k) = factorial(n)/(factorial(k)*factorial(n - k))`
    /// `rf(x, k) = factorial(x + k - 1)/factorial(x - 1)`
    /// `ff(x, k) = factorial(x)/factorial(x - k)`
    Factorial,
}

/// Rewrites a single function node, if it is not already in the target family.
fn rewrite_node(expr: &SymExpr, target: RewriteTarget) -> Option<SymExpr> {
    let one = || SymExpr::number(1);
    let func = expr.as_func()?;

    let new_expr = match (target, func) {
        (RewriteTarget::Gamma, Func::Gamma(_)) | (RewriteTarget::Factorial, Func::Factorial(_)) => {
            return None;
        },

        (RewriteTarget::Gamma, Func::Factorial(x)) => SymExpr::gamma((**x).clone() + one()),
        (RewriteTarget::Gamma, Func::Binomial(n, k)) => {
            let (n, k) = ((**n).clone(), (**k).clone());
            SymExpr::gamma(n.clone() + one())
                / (SymExpr::gamma(k.clone() + one()) * SymExpr::gamma(n - k + one()))
        },
        (RewriteTarget::Gamma, Func::RisingFactorial(x, k)) => {
            let (x, k) = ((**x).clone(), (**k).clone());
            SymExpr::gamma(x.clone() + k) / SymExpr::gamma(x)
        },
        (RewriteTarget::Gamma, Func::FallingFactorial(x, k)) => {
            let (x, k) = ((**x).clone(), (**k).clone());
            SymExpr::gamma(x.clone() + one()) / SymExpr::gamma(x - k + one())
        },

        (RewriteTarget::Factorial, Func::Gamma(x)) => SymExpr::factorial((**x).clone() - one()),
        (RewriteTarget::Factorial, Func::Binomial(n, k)) => {
            let (n, k) = ((**n).clone(), (**k).clone());
            SymExpr::factorial(n.clone())
                / (SymExpr::factorial(k.clone()) * SymExpr::factorial(n - k))
        },
        (RewriteTarget::Factorial, Func::RisingFactorial(x, k)) => {
            let (x, k) = ((**x).clone(), (**k).clone());
            SymExpr::factorial(x.clone() + k - one()) / SymExpr::factorial(x - one())
        },
        (RewriteTarget::Factorial, Func::FallingFactorial(x, k)) => {
            let (x, k) = ((**x).clone(), (**k).clone());
            SymExpr::factorial(x.clone()) / SymExpr::factorial(x - k)
        },
    };

    Some(new_expr)
}

/// Rewrites every node of the tree, children first. No simplification is done.
fn rewrite_tree(expr: &SymExpr, target: RewriteTarget) -> SymExpr {
    let rebuilt = expr.map_children(|child| rewrite_tree(child, target));
    rewrite_node(&rebuilt, target).unwrap_or(rebuilt)
}

/// Rewrites every combinatorial function in the expression into the target family. The result is
/// in canonical form.
pub fn rewrite(expr: &SymExpr, target: RewriteTarget) -> SymExpr {
    simplify(&rewrite_tree(expr, target))
}

#[cfg(test)]
mod tests {
    use cas_parser::parser::{ast::expr::Expr as AstExpr, Parser};
    use pretty_assertions::assert_eq;
    use super::*;

    fn parse_expr(input: &str) -> SymExpr {
        let expr = Parser::new(input).try_parse_full::<AstExpr>().unwrap();
        SymExpr::from(expr)
    }

    #[test]
    fn binomial_as_gamma() {
        assert_eq!(
            rewrite(&parse_expr("binomial(n, k)"), RewriteTarget::Gamma),
            simplify(&parse_expr("gamma(n + 1)/(gamma(k + 1)*gamma(n - k + 1))")),
        );
    }

    #[test]
    fn pochhammer_as_gamma() {
        assert_eq!(
            rewrite(&parse_expr("rf(x, k)*ff(x, 2)"), RewriteTarget::Gamma),
            simplify(&parse_expr("gamma(x + k)/gamma(x)*gamma(x + 1)/gamma(x - 1)")),
        );
    }

    #[test]
    fn gamma_as_factorial() {
        assert_eq!(
            rewrite(&parse_expr("gamma(n + 2)/gamma(k + 1)"), RewriteTarget::Factorial),
            simplify(&parse_expr("factorial(n + 1)/factorial(k)")),
        );
    }

    #[test]
    fn round_trip_through_gamma() {
        let expr = parse_expr("factorial(n)/(factorial(k)*factorial(n - k))");
        let gamma = rewrite(&expr, RewriteTarget::Gamma);
        assert_eq!(rewrite(&gamma, RewriteTarget::Factorial), simplify(&expr));
    }

    #[test]
    fn nested_functions() {
        assert_eq!(
            rewrite(&parse_expr("factorial(factorial(n))"), RewriteTarget::Gamma),
            simplify(&parse_expr("gamma(gamma(n + 1) + 1)")),
        );
    }
}
