//! Simplification rules for the combinatorial functions: numeric evaluation and the trivial
//! special values.

use crate::funcs;
use crate::primitive::{as_integer, as_u32};
use crate::symbolic::{
    expr::{Func, SymExpr},
    simplify::{rules::do_func, simplify, step::Step},
    step_collector::StepCollector,
};

/// `factorial(5) = 120`
/// `gamma(5) = 24`
///
/// Arguments at a pole (`factorial(-1)`, `gamma(0)`) are left as is.
pub fn evaluate_factorial(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_func(expr, |func| {
        match func {
            Func::Factorial(x) => funcs::factorial(as_integer(x.as_number()?)?).map(SymExpr::number),
            Func::Gamma(x) => funcs::gamma(as_integer(x.as_number()?)?).map(SymExpr::number),
            _ => None,
        }
    })?;

    // keep the step collection logic outside of the closure to make it implement `Fn`
    step_collector.push(Step::EvaluateFunction);
    Some(opt)
}

/// `binomial(5, 2) = 10`
/// `binomial(n, 0) = binomial(n, n) = 1`
/// `binomial(n, 1) = binomial(n, n - 1) = n`
pub fn evaluate_binomial(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_func(expr, |func| {
        let Func::Binomial(n, k) = func else {
            return None;
        };

        let numeric = n.as_number().and_then(as_integer)
            .zip(k.as_number().and_then(as_integer));
        if let Some((n, k)) = numeric {
            return Some(SymExpr::number(funcs::binomial(n, k)));
        }

        if k.is_number(0) {
            return Some(SymExpr::number(1));
        }
        if k.is_number(1) {
            return Some((**n).clone());
        }

        let diff = simplify(&((**n).clone() - (**k).clone()));
        if diff.is_number(0) {
            Some(SymExpr::number(1))
        } else if diff.is_number(1) {
            Some((**n).clone())
        } else {
            None
        }
    })?;

    step_collector.push(Step::EvaluateFunction);
    Some(opt)
}

/// `rf(x, 0) = ff(x, 0) = 1`
/// `rf(x, 1) = ff(x, 1) = x`
/// `rf(3, 2) = 12`
/// `ff(5, 2) = 20`
pub fn evaluate_pochhammer(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    let opt = do_func(expr, |func| {
        let (x, k, rising) = match func {
            Func::RisingFactorial(x, k) => (x, k, true),
            Func::FallingFactorial(x, k) => (x, k, false),
            _ => return None,
        };

        let k = as_u32(k.as_number()?)?;
        match (x.as_number(), k) {
            (_, 0) => Some(SymExpr::number(1)),
            (_, 1) => Some((**x).clone()),
            (Some(x), k) if rising => Some(SymExpr::number(funcs::rising_factorial(x, k))),
            (Some(x), k) => Some(SymExpr::number(funcs::falling_factorial(x, k))),
            (None, _) => None,
        }
    })?;

    step_collector.push(Step::EvaluateFunction);
    Some(opt)
}

/// Applies all combinatorial function rules.
pub fn all(expr: &SymExpr, step_collector: &mut dyn StepCollector<Step>) -> Option<SymExpr> {
    evaluate_factorial(expr, step_collector)
        .or_else(|| evaluate_binomial(expr, step_collector))
        .or_else(|| evaluate_pochhammer(expr, step_collector))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn factorial_at_pole() {
        let expr = SymExpr::factorial(SymExpr::number(-2));
        assert_eq!(all(&expr, &mut ()), None);
        assert_eq!(all(&SymExpr::gamma(SymExpr::number(0)), &mut ()), None);
    }

    #[test]
    fn binomial_special_values() {
        let n = SymExpr::symbol("n");
        let k = SymExpr::symbol("k");
        assert_eq!(evaluate_binomial(&SymExpr::binomial(n.clone(), n.clone()), &mut ()), Some(SymExpr::number(1)));
        assert_eq!(evaluate_binomial(&SymExpr::binomial(n.clone(), SymExpr::number(1)), &mut ()), Some(n.clone()));
        assert_eq!(
            evaluate_binomial(&SymExpr::binomial(n.clone(), simplify(&(n.clone() - SymExpr::number(1)))), &mut ()),
            Some(n.clone()),
        );
        assert_eq!(evaluate_binomial(&SymExpr::binomial(n, k), &mut ()), None);
    }

    #[test]
    fn symbolic_pochhammer() {
        let x = SymExpr::symbol("x");
        let rf = SymExpr::func(Func::RisingFactorial(Box::new(x.clone()), Box::new(SymExpr::number(1))));
        let ff = SymExpr::func(Func::FallingFactorial(Box::new(x.clone()), Box::new(SymExpr::number(2))));
        let mut steps = Vec::new();
        assert_eq!(evaluate_pochhammer(&rf, &mut steps), Some(x));
        assert_eq!(evaluate_pochhammer(&ff, &mut steps), None);
        assert_eq!(steps, vec![Step::EvaluateFunction]);
    }
}
