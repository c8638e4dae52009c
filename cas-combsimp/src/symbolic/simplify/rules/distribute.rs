//! Simplification rules related to the distributive property.

use crate::primitive::as_integer;
use crate::symbolic::{
    expr::SymExpr,
    simplify::{rules::{do_multiply, do_power}, step::Step},
    step_collector::StepCollector,
};

/// `c*(a+b) = c*a + c*b`, where `c` is a number.
///
/// Only a product of exactly one number and one sum is distributed; sums are never multiplied out
/// against each other.
pub fn distribute_coefficient(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_multiply(expr, |factors| {
        match factors {
            [coeff @ SymExpr::Primary(_), SymExpr::Add(terms)] if coeff.as_number().is_some() => {
                let new_terms = terms.iter()
                    .map(|term| coeff.clone() * term.clone())
                    .collect::<Vec<_>>();
                Some(SymExpr::Add(new_terms))
            },
            _ => None,
        }
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::DistributeCoefficient);
    Some(opt)
}

/// `(a*b)^n = a^n * b^n`, where `n` is an integer.
pub fn distribute_power(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_power(expr, |lhs, rhs| {
        as_integer(rhs.as_number()?)?;
        if let SymExpr::Mul(factors) = lhs {
            let new_factors = factors.iter()
                .map(|factor| factor.clone().pow(rhs.clone()))
                .collect::<Vec<_>>();

            return Some(SymExpr::Mul(new_factors));
        }

        None
    })?;

    step_collector.push(Step::PowerRule);
    Some(opt)
}

/// Applies all distribution rules.
pub fn all(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    distribute_coefficient(expr, step_collector)
        .or_else(|| distribute_power(expr, step_collector))
}
