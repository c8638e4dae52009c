//! Simplification rules for expressions involving addition, including combining like terms.

use std::collections::BTreeMap;
use rug::Rational;
use crate::primitive::rational;
use crate::symbolic::{
    expr::{SymExpr, Primary},
    simplify::{rules::do_add, step::Step},
    step_collector::StepCollector,
};

/// Combines like terms and puts the sum in canonical order.
///
/// `a+0 = a`
/// `a+a = 2a`
/// `2a+3a = 5a`
/// `2+a+3 = 5+a`
/// `a+(b+c) = a+b+c`
/// etc.
pub fn combine_like_terms(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_add(expr, |terms| {
        let mut constant = rational(0);
        let mut like_terms: BTreeMap<SymExpr, Rational> = BTreeMap::new();

        let mut stack = terms.iter().rev().collect::<Vec<_>>();
        while let Some(term) = stack.pop() {
            match term {
                SymExpr::Add(inner) => stack.extend(inner.iter().rev()),
                SymExpr::Primary(Primary::Number(num)) => constant += num,
                term => {
                    // apply a*n + a*m = (n+m)*a
                    let (coeff, rest) = term.split_coefficient();
                    *like_terms.entry(rest).or_insert_with(|| rational(0)) += coeff;
                },
            }
        }

        let mut new_terms = like_terms.into_iter()
            .filter(|(_, coeff)| *coeff != 0)
            .map(|(rest, coeff)| {
                if coeff == 1 {
                    rest
                } else {
                    SymExpr::Primary(Primary::Number(coeff)) * rest
                }
            })
            .collect::<Vec<_>>();
        if constant != 0 {
            new_terms.push(SymExpr::Primary(Primary::Number(constant)));
        }
        new_terms.sort();

        let new_expr = SymExpr::Add(new_terms).downgrade();
        if new_expr == *expr {
            None
        } else {
            Some(new_expr)
        }
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::CombineLikeTerms);
    Some(opt)
}

/// Applies all addition rules.
pub fn all(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    combine_like_terms(expr, step_collector)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn cancel_terms() {
        let expr = SymExpr::Add(vec![
            SymExpr::symbol("n"),
            SymExpr::number(1),
            SymExpr::Mul(vec![SymExpr::number(-1), SymExpr::symbol("n")]),
        ]);
        assert_eq!(combine_like_terms(&expr, &mut ()), Some(SymExpr::number(1)));
    }

    #[test]
    fn canonical_sum_is_left_alone() {
        let expr = SymExpr::Add(vec![
            SymExpr::number(1),
            SymExpr::symbol("n"),
        ]);
        let mut steps = Vec::new();
        assert_eq!(combine_like_terms(&expr, &mut steps), None);
        assert!(steps.is_empty());
    }
}
