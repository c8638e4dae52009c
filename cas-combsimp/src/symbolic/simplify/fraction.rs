//! Tools to take expressions apart into numerators, denominators and powers.

use crate::primitive::as_integer;
use crate::symbolic::expr::{Primary, SymExpr};
use super::simplify;

/// Create a [`SymExpr`] representing a fraction with the given numerator and denominator.
///
/// The representation is a [`SymExpr::Mul`] containing two factors. The first factor is the
/// numerator, and the second factor is the denominator raised to the power of -1.
pub(crate) fn make_fraction(numerator: SymExpr, denominator: SymExpr) -> SymExpr {
    numerator * denominator.pow(SymExpr::number(-1))
}

/// Returns true if the exponent is written with a negative sign: a negative number, or a product
/// with a negative numeric coefficient.
fn is_negative_exponent(exp: &SymExpr) -> bool {
    exp.split_coefficient().0 < 0
}

/// Splits the expression into a numerator and a denominator.
///
/// - numbers split into their integer numerator and denominator: `3/4` -> `(3, 4)`
/// - powers with a negative exponent go to the denominator: `x^-2` -> `(1, x^2)`
/// - products are split factor by factor: `a*b^-1*c^-1` -> `(a, b*c)`
/// - sums are brought over the product of their distinct denominators:
///   `a/b + c` -> `(a + b*c, b)`
/// - anything else is its own numerator: `x` -> `(x, 1)`
///
/// Both parts are returned in canonical form.
pub fn as_numer_denom(expr: &SymExpr) -> (SymExpr, SymExpr) {
    match expr {
        SymExpr::Primary(Primary::Number(num)) => (
            SymExpr::number(num.numer().clone()),
            SymExpr::number(num.denom().clone()),
        ),
        SymExpr::Exp(base, exp) if is_negative_exponent(exp) => (
            SymExpr::number(1),
            simplify(&(**base).clone().pow(-(**exp).clone())),
        ),
        SymExpr::Mul(factors) => {
            let (numers, denoms): (Vec<_>, Vec<_>) = factors.iter().map(as_numer_denom).unzip();
            (simplify(&SymExpr::Mul(numers)), simplify(&SymExpr::Mul(denoms)))
        },
        SymExpr::Add(terms) => {
            let parts = terms.iter().map(as_numer_denom).collect::<Vec<_>>();
            let mut denoms: Vec<SymExpr> = Vec::new();
            for (_, denom) in &parts {
                if !denom.is_number(1) && !denoms.contains(denom) {
                    denoms.push(denom.clone());
                }
            }

            if denoms.is_empty() {
                return (expr.clone(), SymExpr::number(1));
            }

            // n1/d1 + n2/d2 = (n1*d2 + n2*d1)/(d1*d2)
            let numer_terms = parts.into_iter()
                .map(|(numer, denom)| {
                    let mut factors = vec![numer];
                    factors.extend(denoms.iter().filter(|other| **other != denom).cloned());
                    SymExpr::Mul(factors)
                })
                .collect();
            (simplify(&SymExpr::Add(numer_terms)), simplify(&SymExpr::Mul(denoms)))
        },
        _ => (expr.clone(), SymExpr::number(1)),
    }
}

/// Splits the expression into a list of `(base, exponent)` pairs whose product is the expression.
///
/// - products: one pair per factor, with exponent 1 for factors that are not powers
/// - powers: the single pair `(base, exponent)`
/// - factorials: the single pair `(factorial(x), 1)`
///
/// Any other expression has no such decomposition, and [`None`] is returned.
pub fn power_factors(expr: &SymExpr) -> Option<Vec<(SymExpr, SymExpr)>> {
    fn split(factor: &SymExpr) -> (SymExpr, SymExpr) {
        match factor {
            SymExpr::Exp(base, exp) => ((**base).clone(), (**exp).clone()),
            factor => (factor.clone(), SymExpr::number(1)),
        }
    }

    match expr {
        SymExpr::Mul(factors) => Some(factors.iter().map(split).collect()),
        SymExpr::Exp(..) => Some(vec![split(expr)]),
        _ if expr.as_factorial().is_some() => Some(vec![split(expr)]),
        _ => None,
    }
}

/// Returns the exponent as a repeat count, if it is a non-negative integer.
pub fn repeat_count(exp: &SymExpr) -> Option<usize> {
    as_integer(exp.as_number()?)?.to_usize()
}

#[cfg(test)]
mod tests {
    use cas_parser::parser::{ast::expr::Expr as AstExpr, Parser};
    use pretty_assertions::assert_eq;
    use super::*;

    fn parse_expr(input: &str) -> SymExpr {
        let expr = Parser::new(input).try_parse_full::<AstExpr>().unwrap();
        simplify(&SymExpr::from(expr))
    }

    #[test]
    fn numer_denom_of_product() {
        let (numer, denom) = as_numer_denom(&parse_expr("3*factorial(n)/(4*factorial(k)*factorial(n-k))"));
        assert_eq!(numer, parse_expr("3*factorial(n)"));
        assert_eq!(denom, parse_expr("4*factorial(k)*factorial(n-k)"));
    }

    #[test]
    fn numer_denom_of_negative_power() {
        let (numer, denom) = as_numer_denom(&parse_expr("x^(-2*y)"));
        assert_eq!(numer, SymExpr::number(1));
        assert_eq!(denom, parse_expr("x^(2*y)"));
    }

    #[test]
    fn numer_denom_of_sum() {
        let (numer, denom) = as_numer_denom(&parse_expr("a/b + c"));
        assert_eq!(numer, parse_expr("a + b*c"));
        assert_eq!(denom, parse_expr("b"));
    }

    #[test]
    fn power_factor_decomposition() {
        assert_eq!(power_factors(&parse_expr("factorial(n)")), Some(vec![
            (parse_expr("factorial(n)"), SymExpr::number(1)),
        ]));
        assert_eq!(power_factors(&parse_expr("factorial(k)^2*x")), Some(vec![
            (parse_expr("x"), SymExpr::number(1)),
            (parse_expr("factorial(k)"), SymExpr::number(2)),
        ]));
        assert_eq!(power_factors(&parse_expr("n + 1")), None);
    }

    #[test]
    fn repeat_counts() {
        assert_eq!(repeat_count(&SymExpr::number(3)), Some(3));
        assert_eq!(repeat_count(&SymExpr::number(-1)), None);
        assert_eq!(repeat_count(&SymExpr::number((1, 2))), None);
        assert_eq!(repeat_count(&SymExpr::symbol("k")), None);
    }
}
