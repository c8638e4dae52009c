//! Module to simplify expressions.
//!
//! This module provides the [`simplify`] function, which rewrites an expression into a canonical
//! form. It does this by simplifying the children of each node first, then repeatedly applying
//! rewriting rules to the node itself, until no more rules apply.
//!
//! The canonical form is what lets the rest of the crate compare expressions structurally. For
//! example, deciding whether `gamma(n + 2)` and `gamma(n)` differ by an integer is done by
//! simplifying `(n + 2) - n` and checking whether the result is a number.
//!
//! In canonical form:
//!
//! - sums and products are flat and sorted, with numbers folded together
//! - like terms (`2n + 3n`) and like factors (`n^2 * n`) are combined
//! - a numeric coefficient is distributed over a single sum (`-(k + 1) = -k - 1`)
//! - numeric instances of the combinatorial functions are evaluated exactly

pub mod fraction;
pub mod rules;
pub mod step;

use crate::symbolic::{expr::{Primary, SymExpr}, step_collector::StepCollector};
use step::Step;

/// Base implementation of the simplification algorithm.
fn inner_simplify(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> SymExpr {
    let mut expr = expr.map_children(|child| inner_simplify(child, step_collector));

    // rules only return `Some` when they changed the expression, so this terminates once the
    // expression is canonical
    while let Some(new_expr) = rules::all(&expr, step_collector) {
        expr = new_expr.map_children(|child| inner_simplify(child, step_collector));
    }

    expr
}

/// Simplify the given expression into canonical form.
pub fn simplify(expr: &SymExpr) -> SymExpr {
    inner_simplify(expr, &mut ())
}

/// Simplify the given expression into canonical form, reporting each rule applied to the given
/// [`StepCollector`].
pub fn simplify_with(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> SymExpr {
    inner_simplify(expr, step_collector)
}

/// Simplify the given expression into canonical form. The steps taken by the simplifier will also
/// be collected and returned. This is useful for debugging, and also for displaying the steps
/// taken to the user.
pub fn simplify_with_steps(expr: &SymExpr) -> (SymExpr, Vec<Step>) {
    let mut steps = Vec::new();
    let expr = inner_simplify(expr, &mut steps);
    (expr, steps)
}

/// Applies `rule` once to every node of the expression, from the leaves up to the root.
///
/// Each node is rebuilt from its already-transformed children (and re-simplified if any of them
/// changed) before `rule` is given the chance to replace it.
pub fn bottom_up<F>(expr: &SymExpr, rule: &mut F) -> SymExpr
where
    F: FnMut(&SymExpr) -> Option<SymExpr>,
{
    let rebuilt = expr.map_children(|child| bottom_up(child, &mut *rule));
    let rebuilt = if rebuilt != *expr {
        simplify(&rebuilt)
    } else {
        rebuilt
    };

    rule(&rebuilt).unwrap_or(rebuilt)
}

/// Counts the operations in an expression.
///
/// - `count_ops(number) = count_ops(symbol) = count_ops(constant) = 0`
/// - `count_ops(f(args)) = 1 + sum(count_ops(args))`
/// - `count_ops(add) = (terms - 1) + sum(count_ops(terms))`
/// - `count_ops(mul) = (factors - 1) + sum(count_ops(factors))`
/// - `count_ops(exp) = 1 + count_ops(lhs) + count_ops(rhs)`
pub fn count_ops(expr: &SymExpr) -> usize {
    expr.post_order_iter()
        .map(|node| match node {
            SymExpr::Primary(Primary::Func(_) | Primary::Call(..)) => 1,
            SymExpr::Primary(_) => 0,
            SymExpr::Add(terms) => terms.len().saturating_sub(1),
            SymExpr::Mul(factors) => factors.len().saturating_sub(1),
            SymExpr::Exp(..) => 1,
        })
        .sum()
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
    fn add_rules() {
        // also tests multiply_zero
        let simplified = simplify(&parse_expr("0+0*(3*x+5*b^2)+0+(3*a)"));
        assert_eq!(simplified, SymExpr::Mul(vec![
            SymExpr::number(3),
            SymExpr::symbol("a"),
        ]));
    }

    #[test]
    fn multiply_rules() {
        let simplified = simplify(&parse_expr("1*3*1*1*1*(1+(x^2+5*x+6)*0)*1*1"));
        assert_eq!(simplified, SymExpr::number(3));
    }

    #[test]
    fn combine_like_terms() {
        let simplified = simplify(&parse_expr("n + 2*n - k + n - 1 + k + 4"));
        assert_eq!(simplified, SymExpr::Add(vec![
            SymExpr::number(3),
            SymExpr::Mul(vec![SymExpr::number(4), SymExpr::symbol("n")]),
        ]));
    }

    #[test]
    fn combine_like_factors() {
        let simplified = simplify(&parse_expr("a * b * a^3 * b^4 / a"));
        assert_eq!(simplified, SymExpr::Mul(vec![
            SymExpr::symbol("a").pow(SymExpr::number(3)),
            SymExpr::symbol("b").pow(SymExpr::number(5)),
        ]));
    }

    #[test]
    fn cancel_factor() {
        let simplified = simplify(&parse_expr("(n + 1) * factorial(n) / (n + 1)"));
        assert_eq!(simplified, parse_expr("factorial(n)"));
    }

    #[test]
    fn distribute_negation() {
        let simplified = simplify(&parse_expr("n - (k + 1)"));
        assert_eq!(simplified.to_string(), "n - k - 1");
    }

    #[test]
    fn numeric_powers() {
        assert_eq!(simplify(&parse_expr("2^10")), SymExpr::number(1024));
        assert_eq!(simplify(&parse_expr("2^-2")), SymExpr::number((1, 4)));
        assert_eq!(simplify(&parse_expr("(x^2)^3")), parse_expr("x^6"));
    }

    #[test]
    fn evaluate_numeric_functions() {
        assert_eq!(simplify(&parse_expr("factorial(5)")), SymExpr::number(120));
        assert_eq!(simplify(&parse_expr("binomial(6, 2) + gamma(4)")), SymExpr::number(21));
        assert_eq!(simplify(&parse_expr("rf(3, 2) * ff(5, 2)")), SymExpr::number(240));
    }

    #[test]
    fn simplify_is_idempotent() {
        let once = simplify(&parse_expr("factorial(n+1)/(factorial(k+1)*factorial(n-k)) + 2*(n - k)"));
        assert_eq!(simplify(&once), once);
    }

    #[test]
    fn bottom_up_visits_every_node() {
        let expr = simplify(&parse_expr("factorial(factorial(n))"));
        let mut rule = |expr: &SymExpr| expr.as_factorial().map(|x| SymExpr::gamma(x.clone() + SymExpr::number(1)));
        let rewritten = bottom_up(&expr, &mut rule);
        assert_eq!(simplify(&rewritten), simplify(&parse_expr("gamma(gamma(n + 1) + 1)")));
    }

    #[test]
    fn operation_counts() {
        assert_eq!(count_ops(&parse_expr("k")), 0);
        assert_eq!(count_ops(&simplify(&parse_expr("n - k"))), 2);
        assert_eq!(count_ops(&parse_expr("factorial(k + 1)")), 2);
    }
}
