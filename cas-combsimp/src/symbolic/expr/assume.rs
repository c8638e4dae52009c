//! Assumptions about the domain of symbols, and the integrality query built on them.

use std::collections::BTreeMap;
use super::{Func, Primary, SymExpr};

/// A set of facts about which symbols are integers.
///
/// Expressions parsed from text carry no assumptions. [`Assumptions::apply`] marks the symbols of
/// an expression with the facts in this set, which [`SymExpr::is_integer`] then reads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assumptions {
    integer: BTreeMap<String, bool>,
}

impl Assumptions {
    /// Creates an empty set of assumptions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks each of the given symbols as an integer.
    pub fn with_integers<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            self.set_integer(name, true);
        }
        self
    }

    /// Marks each of the given symbols as a non-integer.
    pub fn with_non_integers<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            self.set_integer(name, false);
        }
        self
    }

    /// Records whether the symbol is an integer.
    pub fn set_integer(&mut self, name: impl Into<String>, integer: bool) {
        self.integer.insert(name.into(), integer);
    }

    /// Forgets everything known about the symbol.
    pub fn remove(&mut self, name: &str) {
        self.integer.remove(name);
    }

    /// Returns whether the symbol is known to be an integer.
    pub fn get(&self, name: &str) -> Option<bool> {
        self.integer.get(name).copied()
    }

    /// Returns an iterator over the symbols and their recorded facts, ordered by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.integer.iter().map(|(name, integer)| (name.as_str(), *integer))
    }

    /// Returns a copy of the expression with every symbol marked according to this set. Symbols
    /// this set knows nothing about keep their current marking.
    pub fn apply(&self, expr: &SymExpr) -> SymExpr {
        match expr {
            SymExpr::Primary(Primary::Symbol(sym)) => {
                let mut sym = sym.clone();
                if let Some(integer) = self.get(&sym.name) {
                    sym.integer = Some(integer);
                }
                SymExpr::Primary(Primary::Symbol(sym))
            },
            expr => expr.map_children(|child| self.apply(child)),
        }
    }
}

/// Returns true if the expression is known to be a non-negative integer number.
fn is_non_negative_integer(expr: &SymExpr) -> bool {
    expr.as_number().map_or(false, |num| *num.denom() == 1 && *num >= 0)
}

impl SymExpr {
    /// Returns whether the expression is provably an integer (`Some(true)`), provably not an
    /// integer (`Some(false)`), or unknown (`None`).
    pub fn is_integer(&self) -> Option<bool> {
        match self {
            Self::Primary(Primary::Number(num)) => Some(*num.denom() == 1),
            Self::Primary(Primary::Constant(_)) => Some(false),
            Self::Primary(Primary::Symbol(sym)) => sym.integer,
            Self::Primary(Primary::Func(func)) => match func {
                Func::Binomial(n, k) => {
                    all_integer([&**n, &**k])
                },
                Func::RisingFactorial(x, k) | Func::FallingFactorial(x, k) => {
                    if x.is_integer() == Some(true) && is_non_negative_integer(k) {
                        Some(true)
                    } else {
                        None
                    }
                },
                Func::Factorial(_) | Func::Gamma(_) => None,
            },
            Self::Primary(Primary::Call(..)) => None,
            Self::Add(terms) => {
                let mut non_integer = 0;
                for term in terms {
                    match term.is_integer() {
                        Some(true) => {},
                        Some(false) => non_integer += 1,
                        None => return None,
                    }
                }

                // the sum of two non-integers can be an integer
                match non_integer {
                    0 => Some(true),
                    1 => Some(false),
                    _ => None,
                }
            },
            Self::Mul(factors) => all_integer(factors),
            Self::Exp(base, exp) => {
                if base.is_integer() == Some(true) && is_non_negative_integer(exp) {
                    Some(true)
                } else {
                    None
                }
            },
        }
    }
}

/// Returns `Some(true)` if every expression is provably an integer, and `None` otherwise.
fn all_integer<'a>(exprs: impl IntoIterator<Item = &'a SymExpr>) -> Option<bool> {
    if exprs.into_iter().all(|expr| expr.is_integer() == Some(true)) {
        Some(true)
    } else {
        None
    }
}
