//! Exact evaluation of the counting functions.
//!
//! These are used both by the simplifier, to fold numeric arguments, and by
//! [`eval_exact`](crate::symbolic::eval_exact).

use crate::primitive::int;
use rug::{Integer, Rational};

/// Computes a partial factorial of an integer from `n` to `k`, where `k` is exclusive (i.e. `n * (n
/// - 1) * ... * (k + 1)`).
pub fn partial_factorial(mut n: Integer, k: Integer) -> Integer {
    let mut result = int(1);
    while n > k {
        result *= &n;
        n -= 1;
    }
    result
}

/// The factorial of a non-negative integer. Returns [`None`] for negative integers, where the
/// factorial has a pole.
pub fn factorial(n: &Integer) -> Option<Integer> {
    if *n < 0 {
        return None;
    }
    Some(partial_factorial(n.clone(), int(1)))
}

/// The gamma function at a positive integer, `gamma(n) = (n - 1)!`. Returns [`None`] at the poles
/// (zero and the negative integers).
pub fn gamma(n: &Integer) -> Option<Integer> {
    if *n <= 0 {
        return None;
    }
    factorial(&int(n - 1u32))
}

/// The binomial coefficient of two integers.
///
/// The upper index may be negative, in which case the coefficient is extended with
/// `binomial(n, k) = (-1)^k * binomial(k - n - 1, k)`. A negative lower index gives zero.
pub fn binomial(n: &Integer, k: &Integer) -> Integer {
    if *k < 0 {
        return int(0);
    }

    if *n < 0 {
        let upper = int(k - n) - 1u32;
        let value = binomial(&upper, k);
        return if k.is_odd() { -value } else { value };
    }

    if k > n {
        return int(0);
    }

    let sub = int(n - k);
    if *k > sub {
        partial_factorial(n.clone(), k.clone()) / partial_factorial(sub, int(1))
    } else {
        partial_factorial(n.clone(), sub) / partial_factorial(k.clone(), int(1))
    }
}

/// The rising factorial `x (x + 1) ... (x + k - 1)`.
pub fn rising_factorial(x: &Rational, k: u32) -> Rational {
    let mut result = Rational::from(1);
    let mut term = x.clone();
    for _ in 0..k {
        result *= &term;
        term += 1u32;
    }
    result
}

/// The falling factorial `x (x - 1) ... (x - k + 1)`.
pub fn falling_factorial(x: &Rational, k: u32) -> Rational {
    let mut result = Rational::from(1);
    let mut term = x.clone();
    for _ in 0..k {
        result *= &term;
        term -= 1u32;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_factorials() {
        assert_eq!(factorial(&int(0)), Some(int(1)));
        assert_eq!(factorial(&int(5)), Some(int(120)));
        assert_eq!(factorial(&int(-1)), None);
        assert_eq!(gamma(&int(5)), Some(int(24)));
        assert_eq!(gamma(&int(0)), None);
    }

    #[test]
    fn binomial_values() {
        assert_eq!(binomial(&int(5), &int(2)), 10);
        assert_eq!(binomial(&int(5), &int(7)), 0);
        assert_eq!(binomial(&int(5), &int(-1)), 0);
        // binomial(-3, 2) = (-3)(-4)/2
        assert_eq!(binomial(&int(-3), &int(2)), 6);
        assert_eq!(binomial(&int(-3), &int(3)), -10);
    }

    #[test]
    fn pochhammer() {
        assert_eq!(rising_factorial(&Rational::from(3), 3), 60);
        assert_eq!(falling_factorial(&Rational::from(5), 3), 60);
        assert_eq!(falling_factorial(&Rational::from((1, 2)), 2), Rational::from((-1, 4)));
        assert_eq!(rising_factorial(&Rational::from(7), 0), 1);
    }
}
