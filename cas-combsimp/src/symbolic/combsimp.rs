//! Simplification of expressions with factorials and binomial coefficients.
//!
//! [`combsimp`] funnels every combinatorial function through the gamma function, so that the
//! gamma engine in [`super::gamma`] can act on all of them uniformly, and then re-expresses the
//! result with factorials and binomial coefficients.
//!
//! Some gamma identities are only valid away from the integers, so the integer-safe
//! [`GammaMode::Combinatorial`] engine is used when every gamma argument is provably an integer.
//! If any argument is not, the whole expression is handed to the general engine, and the result
//! is left in terms of gamma functions.

use std::iter::repeat;
use std::time::Instant;
use tracing::{debug, trace};
use super::{
    expr::SymExpr,
    gamma::{gammasimp_with, GammaMode},
    rewrite::{rewrite, RewriteTarget},
    simplify::{
        bottom_up,
        count_ops,
        fraction::{as_numer_denom, make_fraction, power_factors, repeat_count},
        simplify,
        step::Step,
    },
    step_collector::StepCollector,
};

/// Builds `base^exp`, in canonical form.
fn power_term(base: SymExpr, exp: SymExpr) -> SymExpr {
    if exp.is_number(1) {
        base
    } else {
        simplify(&base.pow(exp))
    }
}

/// A merge found by [`find_binomial`].
struct BinomialMatch {
    /// Indices of the two denominator factorials. They are equal when both copies come from the
    /// same power.
    i: usize,
    j: usize,

    /// The argument of the numerator factorial, the sum of the two denominator arguments.
    sum: SymExpr,

    /// The lower argument of the binomial coefficient.
    pick: SymExpr,
}

/// Finds the first pair of denominator factorials, in `(i, j)` scan order, whose arguments sum to
/// the argument of a numerator factorial.
///
/// Both lists hold factorials with their multiplicities. A pair uses at most two copies of the
/// same factorial, so each denominator factorial is scanned as at most two positions.
fn find_binomial(d_facts: &[(SymExpr, usize)], n_facts: &[(SymExpr, usize)]) -> Option<BinomialMatch> {
    let mut slots = Vec::new();
    for (idx, (base, count)) in d_facts.iter().enumerate() {
        if let Some(arg) = base.as_factorial() {
            slots.extend(repeat((idx, arg)).take((*count).min(2)));
        }
    }

    for (s, &(i, a_i)) in slots.iter().enumerate() {
        for &(j, a_j) in &slots[s + 1..] {
            let sum = simplify(&(a_i.clone() + a_j.clone()));
            if n_facts.iter().any(|(base, _)| base.as_factorial() == Some(&sum)) {
                let pick = if count_ops(a_i) < count_ops(a_j) { a_i } else { a_j };
                return Some(BinomialMatch { i, j, sum, pick: pick.clone() });
            }
        }
    }

    None
}

/// Builds the product of the given factors, with factorials raised to their remaining
/// multiplicity.
fn product(rest: Vec<SymExpr>, facts: Vec<(SymExpr, usize)>) -> SymExpr {
    let mut factors = rest;
    factors.extend(facts.into_iter()
        .filter(|(_, count)| *count > 0)
        .map(|(base, count)| power_term(base, SymExpr::number(count))));
    SymExpr::Mul(factors).downgrade()
}

/// Replaces one ratio of factorials in the expression by a binomial coefficient, such as
/// `factorial(n)/(factorial(k)*factorial(n - k)) = binomial(n, k)`. The lower argument of the
/// binomial coefficient is whichever denominator argument has fewer operations, or the second one
/// if they tie.
///
/// The expression is split into numerator and denominator, and both are split into factors.
/// Factorials raised to a non-negative integer power are kept with that power as their
/// multiplicity. Any other numerator factor is kept as is; a denominator factor whose exponent is
/// not a non-negative integer is moved to the numerator with its exponent negated.
///
/// Returns [`None`] if no pair of denominator factorials matches a numerator factorial.
fn factorials_to_binomial(expr: &SymExpr) -> Option<SymExpr> {
    let (numer, denom) = as_numer_denom(expr);

    let mut n_facts = Vec::new();
    let mut n_rest = Vec::new();
    for (base, exp) in power_factors(&numer)? {
        match repeat_count(&exp) {
            Some(count) if count > 0 && base.as_factorial().is_some() => n_facts.push((base, count)),
            _ => n_rest.push(power_term(base, exp)),
        }
    }
    if n_facts.is_empty() {
        return None;
    }

    let mut d_facts = Vec::new();
    let mut d_rest = Vec::new();
    for (base, exp) in power_factors(&denom)? {
        match repeat_count(&exp) {
            Some(count) if base.as_factorial().is_some() => d_facts.push((base, count)),
            Some(_) => d_rest.push(power_term(base, exp)),
            None => n_rest.push(power_term(base, -exp)),
        }
    }

    let BinomialMatch { i, j, sum, pick } = find_binomial(&d_facts, &n_facts)?;
    trace!(%sum, %pick, "merged factorial pair into binomial");

    let idx = n_facts.iter().position(|(base, _)| base.as_factorial() == Some(&sum))?;
    n_facts[idx].1 -= 1;
    d_facts[i].1 -= 1;
    d_facts[j].1 -= 1;
    n_rest.push(SymExpr::binomial(sum, pick));

    let numer = product(n_rest, n_facts);
    let denom = product(d_rest, d_facts);
    Some(simplify(&make_fraction(numer, denom)))
}

/// Rewrites the gamma functions in the expression as factorials, then collapses ratios of
/// factorials into binomial coefficients.
///
/// The expression should only contain gamma functions with integer arguments.
pub fn gamma_as_comb(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> SymExpr {
    let mut rewritten = rewrite(expr, RewriteTarget::Factorial);
    if rewritten != *expr {
        step_collector.push(Step::RewriteAsFactorial);
    }

    let mut rule = |node: &SymExpr| {
        let merged = factorials_to_binomial(node)?;
        step_collector.push(Step::FactorialsToBinomial);
        Some(merged)
    };
    // one merge per product per pass; passes repeat until nothing merges
    loop {
        let next = bottom_up(&rewritten, &mut rule);
        if next == rewritten {
            return rewritten;
        }
        rewritten = next;
    }
}

/// Simplifies an expression with factorials, binomial coefficients, rising and falling factorials
/// and gamma functions.
///
/// Symbols must be marked as integers (see [`Assumptions`](super::Assumptions)) for the result to
/// be expressed in factorials and binomials again.
pub fn combsimp(expr: &SymExpr) -> SymExpr {
    combsimp_with(expr, &mut ())
}

/// Simplifies the expression like [`combsimp`], reporting each rewrite to the given
/// [`StepCollector`].
pub fn combsimp_with(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> SymExpr {
    let start = Instant::now();

    let gamma = rewrite(expr, RewriteTarget::Gamma);
    if gamma != *expr {
        step_collector.push(Step::RewriteAsGamma);
    }

    let non_integer = gamma.pre_order_iter()
        .filter_map(SymExpr::as_gamma)
        .find(|arg| arg.is_integer() != Some(true));
    if let Some(arg) = non_integer {
        debug!(%arg, "gamma argument is not provably an integer, delegating to gammasimp");
        step_collector.push(Step::DelegateToGammasimp);
        let result = gammasimp_with(&gamma, GammaMode::General, step_collector);
        debug!(elapsed = ?start.elapsed(), "combsimp finished");
        return result;
    }

    let gamma = gammasimp_with(&gamma, GammaMode::Combinatorial, step_collector);
    let result = gamma_as_comb(&gamma, step_collector);
    debug!(elapsed = ?start.elapsed(), "combsimp finished");
    result
}

/// Simplifies the expression like [`combsimp`]. The steps taken will also be collected and
/// returned.
pub fn combsimp_with_steps(expr: &SymExpr) -> (SymExpr, Vec<Step>) {
    let mut steps = Vec::new();
    let expr = combsimp_with(expr, &mut steps);
    (expr, steps)
}

#[cfg(test)]
mod tests {
    use cas_parser::parser::{ast::expr::Expr as AstExpr, Parser};
    use pretty_assertions::assert_eq;
    use crate::symbolic::Assumptions;
    use super::*;

    fn parse_expr(input: &str) -> SymExpr {
        let expr = Parser::new(input).try_parse_full::<AstExpr>().unwrap();
        let expr = Assumptions::new()
            .with_integers(["n", "k", "a", "b"])
            .apply(&SymExpr::from(expr));
        simplify(&expr)
    }

    #[test]
    fn local_rule_needs_numerator_factorial() {
        assert_eq!(factorials_to_binomial(&parse_expr("n/(factorial(k)*factorial(n - k))")), None);
        assert_eq!(factorials_to_binomial(&parse_expr("factorial(n)")), None);
    }

    #[test]
    fn local_rule_needs_matching_sum() {
        let expr = parse_expr("factorial(n)/(factorial(k)*factorial(n - k - 1))");
        assert_eq!(factorials_to_binomial(&expr), None);
    }

    #[test]
    fn local_rule_merges_one_pair() {
        let expr = parse_expr("factorial(n)/(factorial(k)*factorial(n - k))");
        assert_eq!(factorials_to_binomial(&expr), Some(parse_expr("binomial(n, k)")));
    }

    #[test]
    fn local_rule_first_fit() {
        let expr = parse_expr("factorial(n)/(factorial(a)*factorial(b)*factorial(n - a)*factorial(n - b))");
        assert_eq!(
            factorials_to_binomial(&expr),
            Some(parse_expr("binomial(n, a)/(factorial(b)*factorial(n - b))")),
        );
    }

    #[test]
    fn local_rule_picks_smaller_argument() {
        let expr = parse_expr("factorial(n + 1)/(factorial(n - k)*factorial(k + 1))");
        assert_eq!(factorials_to_binomial(&expr), Some(parse_expr("binomial(n + 1, k + 1)")));
    }

    #[test]
    fn local_rule_keeps_other_factors() {
        let expr = parse_expr("x^(1/2)*factorial(n)/(factorial(k)*factorial(n - k)*y^(1/2))");
        assert_eq!(
            factorials_to_binomial(&expr),
            Some(parse_expr("x^(1/2)*binomial(n, k)/y^(1/2)")),
        );
    }

    #[test]
    fn local_rule_repeated_factorials() {
        let expr = parse_expr("factorial(2*n)/factorial(n)^2");
        assert_eq!(factorials_to_binomial(&expr), Some(parse_expr("binomial(2*n, n)")));
    }

    #[test]
    fn local_rule_tie_picks_second_argument() {
        let expr = parse_expr("factorial(a + b)/(factorial(a)*factorial(b))");
        assert_eq!(factorials_to_binomial(&expr), Some(parse_expr("binomial(a + b, b)")));
    }

    #[test]
    fn local_rule_keeps_multiplicities() {
        let expr = parse_expr("factorial(2*n)^3/factorial(n)^6");
        assert_eq!(
            factorials_to_binomial(&expr),
            Some(parse_expr("binomial(2*n, n)*factorial(2*n)^2/factorial(n)^4")),
        );
    }

    #[test]
    fn local_rule_large_powers() {
        let expr = parse_expr("factorial(n)^1000000000000000000");
        assert_eq!(factorials_to_binomial(&expr), None);

        let expr = parse_expr("factorial(2*n)/factorial(n)^1000000000000000000");
        assert_eq!(
            factorials_to_binomial(&expr),
            Some(parse_expr("binomial(2*n, n)/factorial(n)^999999999999999998")),
        );
    }

    #[test]
    fn comb_form_of_gamma() {
        let mut steps = Vec::new();
        let expr = parse_expr("gamma(n + 1)/(gamma(k + 1)*gamma(n - k + 1))");
        assert_eq!(gamma_as_comb(&expr, &mut steps), parse_expr("binomial(n, k)"));
        assert_eq!(steps, vec![Step::RewriteAsFactorial, Step::FactorialsToBinomial]);
    }
}
