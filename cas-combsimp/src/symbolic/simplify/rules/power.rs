//! Simplification rules for powers.

use rug::{ops::Pow, Rational};
use crate::primitive::{as_i32, as_integer};
use crate::symbolic::{
    expr::SymExpr,
    simplify::{rules::do_power, simplify, step::Step},
    step_collector::StepCollector,
};

/// `a^0 = 1`
pub fn power_zero(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_power(expr, |_, rhs| {
        if rhs.is_number(0) {
            Some(SymExpr::number(1))
        } else {
            None
        }
    })?;

    step_collector.push(Step::PowerRule);
    Some(opt)
}

/// `a^1 = a`
pub fn power_one(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_power(expr, |lhs, rhs| {
        if rhs.is_number(1) {
            Some(lhs.clone())
        } else {
            None
        }
    })?;

    step_collector.push(Step::PowerRule);
    Some(opt)
}

/// `1^a = 1`
pub fn power_one_left(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_power(expr, |lhs, _| {
        if lhs.is_number(1) {
            Some(SymExpr::number(1))
        } else {
            None
        }
    })?;

    step_collector.push(Step::PowerRule);
    Some(opt)
}

/// `0^a = 0`, where `a` is a positive number.
pub fn power_zero_left(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_power(expr, |lhs, rhs| {
        if lhs.is_number(0) && rhs.as_number().map_or(false, |n| *n > 0) {
            Some(SymExpr::number(0))
        } else {
            None
        }
    })?;

    step_collector.push(Step::PowerRule);
    Some(opt)
}

/// Evaluates a number raised to an integer power.
///
/// `2^3 = 8`
/// `(2/3)^-2 = 9/4`
///
/// `0` raised to a negative power is left as is.
pub fn evaluate_power(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_power(expr, |lhs, rhs| {
        let base = lhs.as_number()?;
        let exp = as_i32(rhs.as_number()?)?;
        if *base == 0 && exp < 0 {
            return None;
        }

        Some(SymExpr::number(Rational::from(base.pow(exp))))
    })?;

    step_collector.push(Step::PowerRule);
    Some(opt)
}

/// `(a^b)^n = a^(b*n)`, where `n` is an integer.
pub fn power_of_power(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_power(expr, |lhs, rhs| {
        as_integer(rhs.as_number()?)?;
        if let SymExpr::Exp(base, inner_exp) = lhs {
            let exp = simplify(&((**inner_exp).clone() * rhs.clone()));
            return Some((**base).clone().pow(exp));
        }

        None
    })?;

    step_collector.push(Step::PowerRule);
    Some(opt)
}

/// Applies all power rules.
pub fn all(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    power_zero(expr, step_collector)
        .or_else(|| power_one(expr, step_collector))
        .or_else(|| power_one_left(expr, step_collector))
        .or_else(|| power_zero_left(expr, step_collector))
        .or_else(|| evaluate_power(expr, step_collector))
        .or_else(|| power_of_power(expr, step_collector))
}
