//! Functions to construct [`Integer`]s and [`Rational`]s from various types.

use rug::{Integer, Rational};

/// Creates an [`Integer`] with the given value.
pub fn int<T>(n: T) -> Integer
where
    Integer: From<T>,
{
    Integer::from(n)
}

/// Creates an [`Integer`] from a string slice of decimal digits.
///
/// The tokenizer only produces decimal digits for integer literals, so any other input is mapped
/// to zero.
pub fn int_from_str(s: &str) -> Integer {
    Integer::from_str_radix(s, 10).unwrap_or_default()
}

/// Creates a [`Rational`] with the given value.
pub fn rational<T>(n: T) -> Rational
where
    Rational: From<T>,
{
    Rational::from(n)
}

/// Returns the value of the [`Rational`] as an [`Integer`] if its denominator is one.
pub fn as_integer(n: &Rational) -> Option<&Integer> {
    if *n.denom() == 1 {
        Some(n.numer())
    } else {
        None
    }
}

/// Returns the value of the [`Rational`] as a `u32` if it is a non-negative integer that fits.
pub fn as_u32(n: &Rational) -> Option<u32> {
    as_integer(n)?.to_u32()
}

/// Returns the value of the [`Rational`] as an `i32` if it is an integer that fits.
pub fn as_i32(n: &Rational) -> Option<i32> {
    as_integer(n)?.to_i32()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_views() {
        assert_eq!(as_integer(&rational(12)), Some(&int(12)));
        assert_eq!(as_integer(&rational((3, 4))), None);
        assert_eq!(as_u32(&rational(-2)), None);
        assert_eq!(as_i32(&rational(-2)), Some(-2));
        assert_eq!(int_from_str("120"), 120);
    }
}
