//! Simplification of products of gamma functions.
//!
//! The engine works on one product at a time, splitting it into the gamma function arguments in
//! the numerator, the gamma function arguments in the denominator, and every other factor. Three
//! rewrites act on that split:
//!
//! - ratio reduction, `gamma(a + m)/gamma(a) = a*(a + 1)*...*(a + m - 1)` for an integer `m`
//! - factor absorption, `a*gamma(a) = gamma(a + 1)` and `(a - 1)/gamma(a) = 1/gamma(a - 1)`
//! - reflection, `gamma(a)*gamma(1 - a) = pi/sin(pi*a)`
//!
//! Reflection introduces `sin`, which is no longer a combinatorial quantity, so it only runs in
//! [`GammaMode::General`].

use tracing::trace;
use crate::primitive::as_i32;
use super::{
    expr::{Constant, Primary, SymExpr},
    simplify::{bottom_up, simplify, step::Step},
    step_collector::StepCollector,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which rewrites the gamma engine may use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GammaMode {
    /// All rewrites, including reflection.
    #[default]
    General,

    /// Only the rewrites that keep the result a ratio of products of gamma functions and
    /// polynomial factors. Used when every gamma argument is an integer.
    Combinatorial,
}

/// A product split into gamma functions and other factors.
#[derive(Debug, Clone, Default)]
struct GammaProduct {
    /// Arguments of the gamma functions in the numerator, with their multiplicities.
    numer: Vec<(SymExpr, u32)>,

    /// Arguments of the gamma functions in the denominator, with their multiplicities.
    denom: Vec<(SymExpr, u32)>,

    /// All other factors, as `(base, exponent)`.
    rest: Vec<(SymExpr, SymExpr)>,
}

/// Removes one copy of the argument at `idx`, and returns it.
fn take_one(args: &mut Vec<(SymExpr, u32)>, idx: usize) -> SymExpr {
    args[idx].1 -= 1;
    if args[idx].1 == 0 {
        args.remove(idx).0
    } else {
        args[idx].0.clone()
    }
}

/// Adds one copy of the argument.
fn put_one(args: &mut Vec<(SymExpr, u32)>, arg: SymExpr) {
    match args.iter_mut().find(|(a, _)| *a == arg) {
        Some((_, count)) => *count += 1,
        None => args.push((arg, 1)),
    }
}

impl GammaProduct {
    fn new(factors: &[SymExpr]) -> Self {
        let mut product = Self::default();
        for factor in factors {
            let (base, exp) = match factor {
                SymExpr::Exp(base, exp) => ((**base).clone(), (**exp).clone()),
                factor => (factor.clone(), SymExpr::number(1)),
            };

            match (base.as_gamma(), exp.as_number().and_then(as_i32)) {
                (Some(arg), Some(count)) if count > 0 => {
                    product.numer.push((arg.clone(), count.unsigned_abs()));
                },
                (Some(arg), Some(count)) if count < 0 => {
                    product.denom.push((arg.clone(), count.unsigned_abs()));
                },
                _ => product.rest.push((base, exp)),
            }
        }
        product
    }

    fn into_expr(self) -> SymExpr {
        let gamma_pow = |arg: SymExpr, exp: i64| if exp == 1 {
            SymExpr::gamma(arg)
        } else {
            SymExpr::gamma(arg).pow(SymExpr::number(exp))
        };
        let mut factors = self.numer.into_iter()
            .map(|(arg, count)| gamma_pow(arg, i64::from(count)))
            .collect::<Vec<_>>();
        factors.extend(self.denom.into_iter().map(|(arg, count)| gamma_pow(arg, -i64::from(count))));
        factors.extend(self.rest.into_iter().map(|(base, exp)| base.pow(exp)));
        simplify(&SymExpr::Mul(factors))
    }

    /// `gamma(b + m)/gamma(b) = b*(b + 1)*...*(b + m - 1)`
    /// `gamma(a)/gamma(a - m) = 1/(a*(a + 1)*...*(a - m - 1))`
    fn reduce_ratio(&mut self) -> bool {
        let found = self.numer.iter().enumerate()
            .find_map(|(i, (a, _))| {
                self.denom.iter().enumerate().find_map(|(j, (b, _))| {
                    let diff = simplify(&(a.clone() - b.clone()));
                    Some((i, j, diff.as_number().and_then(as_i32)?))
                })
            });
        let Some((i, j, m)) = found else {
            return false;
        };

        let a = take_one(&mut self.numer, i);
        let b = take_one(&mut self.denom, j);
        trace!(numer = %a, denom = %b, diff = m, "reduced gamma ratio");

        let (start, exp) = if m >= 0 { (b, 1) } else { (a, -1) };
        for t in 0..m.unsigned_abs() {
            let factor = simplify(&(start.clone() + SymExpr::number(t)));
            self.rest.push((factor, SymExpr::number(exp)));
        }
        true
    }

    /// Finds a factor with the given base and an integer exponent of the given sign, and moves
    /// its exponent one step towards zero.
    fn take_factor(&mut self, base: &SymExpr, positive: bool) -> bool {
        let idx = self.rest.iter().position(|(b, exp)| {
            b == base && exp.as_number().and_then(as_i32).map_or(false, |n| (n > 0) == positive && n != 0)
        });
        let Some(idx) = idx else {
            return false;
        };

        let exp = simplify(&(self.rest[idx].1.clone() + SymExpr::number(if positive { -1 } else { 1 })));
        if exp.is_number(0) {
            self.rest.remove(idx);
        } else {
            self.rest[idx].1 = exp;
        }
        true
    }

    /// `a*gamma(a) = gamma(a + 1)`
    /// `gamma(a)/(a - 1) = gamma(a - 1)`
    /// `(a - 1)/gamma(a) = 1/gamma(a - 1)`
    /// `1/(a*gamma(a)) = 1/gamma(a + 1)`
    fn absorb_factor(&mut self) -> bool {
        let shifted = |arg: &SymExpr, by: i32| simplify(&(arg.clone() + SymExpr::number(by)));

        for i in 0..self.numer.len() {
            let arg = self.numer[i].0.clone();
            if self.take_factor(&arg, true) {
                take_one(&mut self.numer, i);
                put_one(&mut self.numer, shifted(&arg, 1));
                return true;
            }
            let prev = shifted(&arg, -1);
            if self.take_factor(&prev, false) {
                take_one(&mut self.numer, i);
                put_one(&mut self.numer, prev);
                return true;
            }
        }

        for j in 0..self.denom.len() {
            let arg = self.denom[j].0.clone();
            let prev = shifted(&arg, -1);
            if self.take_factor(&prev, true) {
                take_one(&mut self.denom, j);
                put_one(&mut self.denom, prev);
                return true;
            }
            if self.take_factor(&arg, false) {
                take_one(&mut self.denom, j);
                put_one(&mut self.denom, shifted(&arg, 1));
                return true;
            }
        }

        false
    }

    /// `gamma(a)*gamma(1 - a) = pi/sin(pi*a)`
    /// `1/(gamma(a)*gamma(1 - a)) = sin(pi*a)/pi`
    fn reflect(&mut self) -> bool {
        fn find_pair(args: &[(SymExpr, u32)]) -> Option<(usize, usize)> {
            (0..args.len()).find_map(|i| {
                let start = if args[i].1 > 1 { i } else { i + 1 };
                (start..args.len())
                    .find(|&j| simplify(&(args[i].0.clone() + args[j].0.clone())).is_number(1))
                    .map(|j| (i, j))
            })
        }

        let pi = SymExpr::Primary(Primary::Constant(Constant::Pi));
        let sin = |arg: SymExpr| SymExpr::Primary(Primary::Call(
            String::from("sin"),
            vec![simplify(&(pi.clone() * arg))],
        ));

        if let Some((i, j)) = find_pair(&self.numer) {
            take_one(&mut self.numer, j);
            let arg = take_one(&mut self.numer, i);
            self.rest.push((pi.clone(), SymExpr::number(1)));
            self.rest.push((sin(arg), SymExpr::number(-1)));
            return true;
        }

        if let Some((i, j)) = find_pair(&self.denom) {
            take_one(&mut self.denom, j);
            let arg = take_one(&mut self.denom, i);
            self.rest.push((pi.clone(), SymExpr::number(-1)));
            self.rest.push((sin(arg), SymExpr::number(1)));
            return true;
        }

        false
    }
}

/// Applies one gamma rewrite to a product, if any applies.
fn simplify_product(
    expr: &SymExpr,
    mode: GammaMode,
    step_collector: &mut dyn StepCollector<Step>,
) -> Option<SymExpr> {
    let SymExpr::Mul(factors) = expr else {
        return None;
    };

    let mut product = GammaProduct::new(factors);
    if product.numer.is_empty() && product.denom.is_empty() {
        return None;
    }

    let step = if product.reduce_ratio() {
        Step::GammaRatio
    } else if product.absorb_factor() {
        Step::AbsorbFactor
    } else if mode == GammaMode::General && product.reflect() {
        Step::Reflection
    } else {
        return None;
    };

    let new_expr = product.into_expr();
    if new_expr == *expr {
        return None;
    }

    step_collector.push(step);
    Some(new_expr)
}

/// Simplifies products of gamma functions in the expression, using every rewrite available.
pub fn gammasimp(expr: &SymExpr) -> SymExpr {
    gammasimp_with(expr, GammaMode::General, &mut ())
}

/// Simplifies products of gamma functions in the expression, reporting each rewrite to the given
/// [`StepCollector`].
///
/// The expression is traversed bottom-up repeatedly, each product receiving at most one rewrite
/// per pass, until a pass changes nothing.
pub fn gammasimp_with(
    expr: &SymExpr,
    mode: GammaMode,
    step_collector: &mut dyn StepCollector<Step>,
) -> SymExpr {
    let mut rule = |node: &SymExpr| simplify_product(node, mode, step_collector);
    let mut expr = simplify(expr);
    loop {
        let next = bottom_up(&expr, &mut rule);
        if next == expr {
            return expr;
        }
        expr = next;
    }
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
    fn ratio_with_positive_difference() {
        let expr = parse_expr("gamma(n + 3)/gamma(n)");
        assert_eq!(gammasimp(&expr), parse_expr("n*(n + 1)*(n + 2)"));
    }

    #[test]
    fn ratio_with_negative_difference() {
        let expr = parse_expr("gamma(x)/gamma(x + 2)");
        assert_eq!(gammasimp(&expr), parse_expr("1/(x*(x + 1))"));
    }

    #[test]
    fn absorb_into_gamma() {
        let expr = parse_expr("x*gamma(x)");
        assert_eq!(gammasimp(&expr), parse_expr("gamma(x + 1)"));

        let expr = parse_expr("(x - 1)/gamma(x)");
        assert_eq!(gammasimp(&expr), parse_expr("1/gamma(x - 1)"));
    }

    #[test]
    fn reflection_only_in_general_mode() {
        let expr = parse_expr("gamma(x)*gamma(1 - x)");
        assert_eq!(gammasimp(&expr).to_string(), "pi/sin(pi*x)");

        let mut steps = Vec::new();
        assert_eq!(gammasimp_with(&expr, GammaMode::Combinatorial, &mut steps), expr);
        assert!(steps.is_empty());
    }

    #[test]
    fn ratio_of_powers() {
        let expr = parse_expr("gamma(n + 1)^2/gamma(n)^2");
        let mut steps = Vec::new();
        assert_eq!(gammasimp_with(&expr, GammaMode::General, &mut steps), parse_expr("n^2"));
        assert_eq!(steps, vec![Step::GammaRatio, Step::GammaRatio]);
    }

    #[test]
    fn large_powers_are_not_expanded() {
        let expr = parse_expr("x*gamma(n)^2000000000");
        assert_eq!(gammasimp(&expr), expr);

        let expr = parse_expr("gamma(n + 1)^2000000000/gamma(n)");
        assert_eq!(gammasimp(&expr), parse_expr("n*gamma(n + 1)^1999999999"));
    }

    #[test]
    fn records_steps() {
        let expr = parse_expr("gamma(n + 2)/gamma(n)*n/gamma(n + 1)");
        let mut steps = Vec::new();
        let result = gammasimp_with(&expr, GammaMode::Combinatorial, &mut steps);
        assert_eq!(result, parse_expr("n*(n + 1)/gamma(n)"));
        assert_eq!(steps, vec![Step::GammaRatio, Step::AbsorbFactor]);
    }
}
