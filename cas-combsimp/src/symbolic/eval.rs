//! Exact evaluation of expressions at concrete values.

use std::collections::HashMap;
use rug::{ops::Pow, Rational};
use crate::funcs;
use crate::primitive::{as_i32, as_integer, as_u32};
use super::expr::{Func, Primary, SymExpr};

/// Evaluates the expression exactly, with each symbol replaced by its value in `values`.
///
/// Returns [`None`] if the expression is undefined at these values or cannot be evaluated exactly:
/// an unknown symbol, a constant or opaque call, division by zero, a non-integer power, a
/// factorial of a negative integer or a gamma function at a pole.
pub fn eval_exact(expr: &SymExpr, values: &HashMap<String, Rational>) -> Option<Rational> {
    match expr {
        SymExpr::Primary(Primary::Number(num)) => Some(num.clone()),
        SymExpr::Primary(Primary::Constant(_)) => None,
        SymExpr::Primary(Primary::Symbol(sym)) => values.get(&sym.name).cloned(),
        SymExpr::Primary(Primary::Func(func)) => eval_func(func, values),
        SymExpr::Primary(Primary::Call(..)) => None,
        SymExpr::Add(terms) => terms.iter()
            .try_fold(Rational::from(0), |sum, term| Some(sum + eval_exact(term, values)?)),
        SymExpr::Mul(factors) => factors.iter()
            .try_fold(Rational::from(1), |product, factor| Some(product * eval_exact(factor, values)?)),
        SymExpr::Exp(lhs, rhs) => {
            let base = eval_exact(lhs, values)?;
            let exp = as_i32(&eval_exact(rhs, values)?)?;
            if base == 0 && exp < 0 {
                return None;
            }
            Some(Rational::from(base.pow(exp)))
        },
    }
}

/// Evaluates a combinatorial function exactly.
fn eval_func(func: &Func, values: &HashMap<String, Rational>) -> Option<Rational> {
    match func {
        Func::Factorial(x) => {
            let x = eval_exact(x, values)?;
            funcs::factorial(as_integer(&x)?).map(Rational::from)
        },
        Func::Gamma(x) => {
            let x = eval_exact(x, values)?;
            funcs::gamma(as_integer(&x)?).map(Rational::from)
        },
        Func::Binomial(n, k) => {
            let n = eval_exact(n, values)?;
            let k = eval_exact(k, values)?;
            Some(Rational::from(funcs::binomial(as_integer(&n)?, as_integer(&k)?)))
        },
        Func::RisingFactorial(x, k) => {
            let x = eval_exact(x, values)?;
            let k = as_u32(&eval_exact(k, values)?)?;
            Some(funcs::rising_factorial(&x, k))
        },
        Func::FallingFactorial(x, k) => {
            let x = eval_exact(x, values)?;
            let k = as_u32(&eval_exact(k, values)?)?;
            Some(funcs::falling_factorial(&x, k))
        },
    }
}
