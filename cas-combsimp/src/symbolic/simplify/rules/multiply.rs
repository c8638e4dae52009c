//! Simplification rules for expressions involving multiplication, including combining like
//! factors.

use std::collections::BTreeMap;
use crate::primitive::rational;
use crate::symbolic::{
    expr::{SymExpr, Primary},
    simplify::{rules::do_multiply, simplify, step::Step},
    step_collector::StepCollector,
};

/// `0*a = 0`
/// `a*0 = 0`
pub fn multiply_zero(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_multiply(expr, |factors| {
        if factors.iter().any(|factor| factor.is_number(0)) {
            Some(SymExpr::number(0))
        } else {
            None
        }
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::MultiplyZero);
    Some(opt)
}

/// Combines like factors and puts the product in canonical order, with the numeric coefficient
/// first.
///
/// `a*1 = a`
/// `a^b*a^c = a^(b+c)`
/// `a*a^-1 = 1`
/// `2*a*3 = 6*a`
/// etc.
pub fn combine_like_factors(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_multiply(expr, |factors| {
        let mut coeff = rational(1);
        let mut like_factors: BTreeMap<SymExpr, Vec<SymExpr>> = BTreeMap::new();

        let mut stack = factors.iter().rev().collect::<Vec<_>>();
        while let Some(factor) = stack.pop() {
            match factor {
                SymExpr::Mul(inner) => stack.extend(inner.iter().rev()),
                SymExpr::Primary(Primary::Number(num)) => coeff *= num,
                SymExpr::Exp(base, exp) => like_factors.entry((**base).clone())
                    .or_default()
                    .push((**exp).clone()),
                factor => like_factors.entry(factor.clone())
                    .or_default()
                    .push(SymExpr::number(1)),
            }
        }

        let mut new_factors = Vec::new();
        for (base, mut exps) in like_factors {
            // apply a^b*a^c = a^(b+c)
            let exp = if exps.len() == 1 {
                exps.remove(0)
            } else {
                simplify(&SymExpr::Add(exps))
            };

            if exp.is_number(0) {
                continue;
            } else if exp.is_number(1) {
                new_factors.push(base);
            } else {
                new_factors.push(base.pow(exp));
            }
        }
        new_factors.sort();
        if coeff != 1 {
            new_factors.insert(0, SymExpr::Primary(Primary::Number(coeff)));
        }

        let new_expr = SymExpr::Mul(new_factors).downgrade();
        if new_expr == *expr {
            None
        } else {
            Some(new_expr)
        }
    })?;

    step_collector.push(Step::CombineLikeFactors);
    Some(opt)
}

/// Applies all multiplication rules.
pub fn all(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    multiply_zero(expr, step_collector)
        .or_else(|| combine_like_factors(expr, step_collector))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn zero_factor() {
        let expr = SymExpr::Mul(vec![SymExpr::symbol("n"), SymExpr::number(0)]);
        let mut steps = Vec::new();
        assert_eq!(all(&expr, &mut steps), Some(SymExpr::number(0)));
        assert_eq!(steps, vec![Step::MultiplyZero]);
    }

    #[test]
    fn coefficient_moves_first() {
        let expr = SymExpr::Mul(vec![
            SymExpr::symbol("n"),
            SymExpr::number(2),
            SymExpr::symbol("n"),
            SymExpr::number((1, 4)),
        ]);
        assert_eq!(combine_like_factors(&expr, &mut ()), Some(SymExpr::Mul(vec![
            SymExpr::number((1, 2)),
            SymExpr::symbol("n").pow(SymExpr::number(2)),
        ])));
    }
}
