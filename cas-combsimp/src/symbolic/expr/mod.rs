//! A representation of mathematical expressions that is easier to manipulate than an AST.
//!
//! The [`Expr`](cas_parser::parser::ast::expr::Expr) type from `cas_parser` is a recursive `enum`
//! that represents the AST of an expression. It's convenient for parsing, but not so much for
//! algebraic manipulation.
//!
//! This module defines [`SymExpr`], which **flattens** sums and products into lists of terms and
//! factors, and gives the combinatorial functions their own node kinds ([`Func`]).
//!
//! # Equality
//!
//! Two expressions are compared structurally: same node kinds, same children, in the same order.
//! The derived [`Ord`] implementation is used by [`simplify`](super::simplify()) to sort the terms
//! and factors of sums and products, so that any two expressions with the same canonical form are
//! equal under this comparison. Every matcher in this crate compares canonical forms.

pub mod assume;
mod iter;

use cas_parser::parser::{
    ast::{expr::Expr as AstExpr, literal::Literal},
    token::op::{BinOpKind, UnaryOpKind},
};
use crate::primitive::{int_from_str, rational};
use iter::{ExprIter, PreOrderIter};
use rug::Rational;
use std::{fmt, ops::{Add, Div, Mul, Neg, Sub}};
use super::simplify::fraction::make_fraction;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A mathematical constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Constant {
    /// The ratio of a circle's circumference to its diameter.
    Pi,
}

/// A variable, such as `n` or `k`, together with what is known about its domain.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Symbol {
    /// The name of the symbol.
    pub name: String,

    /// Whether the symbol is known to be an integer (`Some(true)`), known to not be an integer
    /// (`Some(false)`), or unknown (`None`).
    pub integer: Option<bool>,
}

impl Symbol {
    /// Creates a symbol with no assumptions.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), integer: None }
    }
}

/// A combinatorial function application.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Func {
    /// `factorial(x)`, also written `x!`.
    Factorial(Box<SymExpr>),

    /// `binomial(n, k)`.
    Binomial(Box<SymExpr>, Box<SymExpr>),

    /// `gamma(x)`.
    Gamma(Box<SymExpr>),

    /// `rf(x, k) = x (x + 1) ... (x + k - 1)`.
    RisingFactorial(Box<SymExpr>, Box<SymExpr>),

    /// `ff(x, k) = x (x - 1) ... (x - k + 1)`.
    FallingFactorial(Box<SymExpr>, Box<SymExpr>),
}

impl Func {
    /// Returns the name the function is printed and parsed with.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Factorial(_) => "factorial",
            Self::Binomial(..) => "binomial",
            Self::Gamma(_) => "gamma",
            Self::RisingFactorial(..) => "rf",
            Self::FallingFactorial(..) => "ff",
        }
    }

    /// Returns the arguments of the function, in order.
    pub fn args(&self) -> Vec<&SymExpr> {
        match self {
            Self::Factorial(x) | Self::Gamma(x) => vec![&**x],
            Self::Binomial(a, b)
                | Self::RisingFactorial(a, b)
                | Self::FallingFactorial(a, b) => vec![&**a, &**b],
        }
    }

    /// Builds the same function with each argument transformed by `f`.
    fn map_args(&self, mut f: impl FnMut(&SymExpr) -> SymExpr) -> Self {
        let mut g = |x: &SymExpr| Box::new(f(x));
        match self {
            Self::Factorial(x) => Self::Factorial(g(&**x)),
            Self::Gamma(x) => Self::Gamma(g(&**x)),
            Self::Binomial(a, b) => {
                let a = g(&**a);
                Self::Binomial(a, g(&**b))
            },
            Self::RisingFactorial(a, b) => {
                let a = g(&**a);
                Self::RisingFactorial(a, g(&**b))
            },
            Self::FallingFactorial(a, b) => {
                let a = g(&**a);
                Self::FallingFactorial(a, g(&**b))
            },
        }
    }

    /// Builds a function from its name and arguments, if the name and number of arguments match
    /// one of the known combinatorial functions.
    fn from_call(name: &str, mut args: Vec<SymExpr>) -> Result<Self, Vec<SymExpr>> {
        let func = match (name, args.len()) {
            ("factorial", 1) => Self::Factorial(Box::new(args.remove(0))),
            ("gamma", 1) => Self::Gamma(Box::new(args.remove(0))),
            ("binomial", 2) => {
                let k = args.remove(1);
                Self::Binomial(Box::new(args.remove(0)), Box::new(k))
            },
            ("rf" | "RisingFactorial", 2) => {
                let k = args.remove(1);
                Self::RisingFactorial(Box::new(args.remove(0)), Box::new(k))
            },
            ("ff" | "FallingFactorial", 2) => {
                let k = args.remove(1);
                Self::FallingFactorial(Box::new(args.remove(0)), Box::new(k))
            },
            _ => return Err(args),
        };
        Ok(func)
    }
}

impl fmt::Display for Func {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name())?;
        fmt_args(f, self.args())?;
        write!(f, ")")
    }
}

/// Writes a comma-separated list of arguments.
fn fmt_args<'a>(f: &mut fmt::Formatter<'_>, args: impl IntoIterator<Item = &'a SymExpr>) -> fmt::Result {
    let mut iter = args.into_iter();
    if let Some(arg) = iter.next() {
        write!(f, "{}", arg)?;
        for arg in iter {
            write!(f, ", {}", arg)?;
        }
    }
    Ok(())
}

/// A single term / factor, such as a number, variable, or function call.
///
/// The variant order is significant: it is the order in which [`simplify`](super::simplify())
/// sorts terms and factors.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Primary {
    /// An exact rational number, such as `2` or `1/3`.
    Number(Rational),

    /// A named constant, such as `pi`.
    Constant(Constant),

    /// A variable, such as `n`.
    Symbol(Symbol),

    /// A combinatorial function, such as `factorial(n)`.
    Func(Func),

    /// Any other function call, such as `sin(x)`. Calls are opaque to the simplifier.
    Call(String, Vec<SymExpr>),
}

impl fmt::Display for Primary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(num) => write!(f, "{}", num),
            Self::Constant(Constant::Pi) => write!(f, "pi"),
            Self::Symbol(sym) => write!(f, "{}", sym.name),
            Self::Func(func) => write!(f, "{}", func),
            Self::Call(name, args) => {
                write!(f, "{}(", name)?;
                fmt_args(f, args)?;
                write!(f, ")")
            },
        }
    }
}

/// A mathematical expression with information about its terms and factors.
///
/// This type should be distinguished from the [`cas_parser::parser::ast::Expr`] type, which is
/// produced by [`cas_parser`]. The main difference is that this type **flattens** out the tree
/// structure. For example, the expression `x + (y + z)` would be represented internally as a
/// single [`SymExpr::Add`] node with _three_ children, `x`, `y`, and `z`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SymExpr {
    /// A single term or factor.
    Primary(Primary),

    /// Multiple terms added together.
    Add(Vec<SymExpr>),

    /// Multiple factors multiplied together.
    Mul(Vec<SymExpr>),

    /// An expression raised to a power.
    Exp(Box<SymExpr>, Box<SymExpr>),
}

impl SymExpr {
    /// Creates an expression containing the given number.
    pub fn number<T>(n: T) -> Self
    where
        Rational: From<T>,
    {
        Self::Primary(Primary::Number(rational(n)))
    }

    /// Creates an expression containing a symbol with no assumptions.
    pub fn symbol(name: impl Into<String>) -> Self {
        Self::Primary(Primary::Symbol(Symbol::new(name)))
    }

    /// Creates an expression containing the given function application.
    pub fn func(func: Func) -> Self {
        Self::Primary(Primary::Func(func))
    }

    /// Creates `factorial(x)`.
    pub fn factorial(x: Self) -> Self {
        Self::func(Func::Factorial(Box::new(x)))
    }

    /// Creates `binomial(n, k)`.
    pub fn binomial(n: Self, k: Self) -> Self {
        Self::func(Func::Binomial(Box::new(n), Box::new(k)))
    }

    /// Creates `gamma(x)`.
    pub fn gamma(x: Self) -> Self {
        Self::func(Func::Gamma(Box::new(x)))
    }

    /// Creates `base^exp`. No simplification is done.
    pub fn pow(self, exp: Self) -> Self {
        Self::Exp(Box::new(self), Box::new(exp))
    }

    /// If the expression is a [`Primary::Number`], returns a reference to the contained number.
    pub fn as_number(&self) -> Option<&Rational> {
        match self {
            Self::Primary(Primary::Number(num)) => Some(num),
            _ => None,
        }
    }

    /// Returns true if the expression is the given number.
    pub fn is_number<T>(&self, n: T) -> bool
    where
        Rational: PartialEq<T>,
    {
        self.as_number().map_or(false, |num| *num == n)
    }

    /// If the expression is a [`Primary::Func`], returns a reference to the contained function.
    pub fn as_func(&self) -> Option<&Func> {
        match self {
            Self::Primary(Primary::Func(func)) => Some(func),
            _ => None,
        }
    }

    /// If the expression is `factorial(x)`, returns `x`.
    pub fn as_factorial(&self) -> Option<&SymExpr> {
        match self.as_func()? {
            Func::Factorial(x) => Some(x),
            _ => None,
        }
    }

    /// If the expression is `gamma(x)`, returns `x`.
    pub fn as_gamma(&self) -> Option<&SymExpr> {
        match self.as_func()? {
            Func::Gamma(x) => Some(x),
            _ => None,
        }
    }

    /// Splits the expression into its numeric coefficient and the remaining factors.
    ///
    /// - `5` -> `(5, 1)`
    /// - `3*a*b` -> `(3, a*b)`
    /// - `a` -> `(1, a)`
    ///
    /// The coefficient is only found if it is the first factor of a product, which is where
    /// [`simplify`](super::simplify()) places it.
    pub fn split_coefficient(&self) -> (Rational, SymExpr) {
        match self {
            Self::Primary(Primary::Number(num)) => (num.clone(), Self::number(1)),
            Self::Mul(factors) => match factors.split_first() {
                Some((Self::Primary(Primary::Number(num)), rest)) => {
                    (num.clone(), Self::Mul(rest.to_vec()).downgrade())
                },
                _ => (rational(1), self.clone()),
            },
            _ => (rational(1), self.clone()),
        }
    }

    /// Returns the direct children of this expression: terms, factors, base and exponent, or
    /// function arguments.
    pub fn children(&self) -> Vec<&SymExpr> {
        match self {
            Self::Primary(Primary::Func(func)) => func.args(),
            Self::Primary(Primary::Call(_, args)) => args.iter().collect(),
            Self::Primary(_) => Vec::new(),
            Self::Add(terms) => terms.iter().collect(),
            Self::Mul(factors) => factors.iter().collect(),
            Self::Exp(lhs, rhs) => vec![&**lhs, &**rhs],
        }
    }

    /// Builds a new expression of the same kind, with each direct child transformed by `f`. No
    /// simplification is done.
    pub fn map_children(&self, mut f: impl FnMut(&SymExpr) -> SymExpr) -> SymExpr {
        match self {
            Self::Primary(Primary::Func(func)) => Self::func(func.map_args(f)),
            Self::Primary(Primary::Call(name, args)) => {
                Self::Primary(Primary::Call(name.clone(), args.iter().map(f).collect()))
            },
            Self::Primary(_) => self.clone(),
            Self::Add(terms) => Self::Add(terms.iter().map(f).collect()),
            Self::Mul(factors) => Self::Mul(factors.iter().map(f).collect()),
            Self::Exp(lhs, rhs) => {
                let lhs = f(&**lhs);
                Self::Exp(Box::new(lhs), Box::new(f(&**rhs)))
            },
        }
    }

    /// Trivially downgrades the expression into a simpler form.
    ///
    /// Some operations may result in an [`SymExpr::Add`] with zero / one term, or an
    /// [`SymExpr::Mul`] with zero / one factor. This function checks for these cases and
    /// simplifies the expression into the single term / factor, or an [`SymExpr::Primary`]
    /// containing the number 0 or 1.
    pub(crate) fn downgrade(self) -> Self {
        match self {
            Self::Add(mut terms) => {
                if terms.is_empty() {
                    Self::number(0)
                } else if terms.len() == 1 {
                    terms.remove(0)
                } else {
                    Self::Add(terms)
                }
            },
            Self::Mul(mut factors) => {
                if factors.is_empty() {
                    Self::number(1)
                } else if factors.len() == 1 {
                    factors.remove(0)
                } else {
                    Self::Mul(factors)
                }
            },
            _ => self,
        }
    }

    /// Returns an iterator that traverses the tree of expressions in left-to-right post-order
    /// (i.e. depth-first).
    pub fn post_order_iter(&self) -> ExprIter {
        ExprIter::new(self)
    }

    /// Returns an iterator that traverses the tree of expressions in left-to-right pre-order,
    /// visiting each node before its children.
    pub fn pre_order_iter(&self) -> PreOrderIter {
        PreOrderIter::new(self)
    }

    /// Returns true if this expression is printed without surrounding operators, so it never
    /// needs parentheses.
    fn is_atom(&self) -> bool {
        match self {
            Self::Primary(Primary::Number(num)) => *num.denom() == 1 && *num >= 0,
            Self::Primary(_) => true,
            _ => false,
        }
    }

    /// Returns true if the term is printed with a leading minus sign.
    fn is_negative_term(&self) -> bool {
        self.split_coefficient().0 < 0
    }
}

/// Writes `expr`, wrapped in parentheses if `wrap` is true.
fn fmt_wrapped(f: &mut fmt::Formatter<'_>, expr: &SymExpr, wrap: bool) -> fmt::Result {
    if wrap {
        write!(f, "({})", expr)
    } else {
        write!(f, "{}", expr)
    }
}

/// Writes a product as `numerator/denominator`. Factors with a negative numeric exponent, and the
/// denominator of the numeric coefficient, are written in the denominator.
fn fmt_product(f: &mut fmt::Formatter<'_>, factors: &[SymExpr]) -> fmt::Result {
    let mut coeff = rational(1);
    let mut numer = Vec::new();
    let mut denom = Vec::new();
    for factor in factors {
        match factor {
            SymExpr::Primary(Primary::Number(num)) => coeff *= num,
            SymExpr::Exp(base, exp) => match exp.as_number() {
                Some(exp) if *exp < 0 => {
                    let exp = Rational::from(-exp);
                    if exp == 1 {
                        denom.push((**base).clone());
                    } else {
                        denom.push((**base).clone().pow(SymExpr::Primary(Primary::Number(exp))));
                    }
                },
                _ => numer.push(factor.clone()),
            },
            factor => numer.push(factor.clone()),
        }
    }

    if coeff < 0 {
        write!(f, "-")?;
        coeff = -coeff;
    }

    let (coeff_numer, coeff_denom) = coeff.into_numer_denom();
    let mut wrote_numer = false;
    if coeff_numer != 1 || numer.is_empty() {
        write!(f, "{}", coeff_numer)?;
        wrote_numer = true;
    }
    for factor in &numer {
        if wrote_numer {
            write!(f, "*")?;
        }
        fmt_wrapped(f, factor, matches!(factor, SymExpr::Add(_)))?;
        wrote_numer = true;
    }

    if coeff_denom != 1 {
        denom.insert(0, SymExpr::Primary(Primary::Number(Rational::from(coeff_denom))));
    }
    match denom.as_slice() {
        [] => Ok(()),
        [single] => {
            write!(f, "/")?;
            fmt_wrapped(f, single, !single.is_atom())
        },
        _ => {
            write!(f, "/(")?;
            fmt_product(f, &denom)?;
            write!(f, ")")
        },
    }
}

impl fmt::Display for SymExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primary(primary) => write!(f, "{}", primary),
            Self::Add(terms) => {
                // constants are written last: `n - 2` instead of `-2 + n`
                let (numbers, others): (Vec<_>, Vec<_>) = terms.iter()
                    .partition(|term| term.as_number().is_some());
                let mut iter = others.into_iter().chain(numbers);
                if let Some(term) = iter.next() {
                    write!(f, "{}", term)?;
                    for term in iter {
                        if term.is_negative_term() {
                            write!(f, " - {}", -term.clone())?;
                        } else {
                            write!(f, " + {}", term)?;
                        }
                    }
                }
                Ok(())
            },
            Self::Mul(factors) => fmt_product(f, factors),
            Self::Exp(base, exp) => {
                fmt_wrapped(f, base, !base.is_atom())?;
                write!(f, "^")?;
                fmt_wrapped(f, exp, !exp.is_atom())
            },
        }
    }
}

impl From<AstExpr> for SymExpr {
    fn from(expr: AstExpr) -> Self {
        match expr {
            AstExpr::Literal(Literal::Integer(int)) => {
                Self::Primary(Primary::Number(Rational::from(int_from_str(&int.value))))
            },
            AstExpr::Literal(Literal::Symbol(sym)) => match sym.name.as_str() {
                "pi" => Self::Primary(Primary::Constant(Constant::Pi)),
                _ => Self::symbol(sym.name),
            },
            AstExpr::Paren(paren) => Self::from(paren.into_innermost()),
            AstExpr::Call(call) => {
                let args = call.args.into_iter().map(Self::from).collect();
                match Func::from_call(&call.name.name, args) {
                    Ok(func) => Self::func(func),
                    Err(args) => Self::Primary(Primary::Call(call.name.name, args)),
                }
            },
            AstExpr::Unary(unary) => {
                let operand = Self::from(*unary.operand);
                match unary.op.kind {
                    // treat this as -1 * operand
                    UnaryOpKind::Neg => -operand,
                    UnaryOpKind::Factorial => Self::factorial(operand),
                }
            },
            AstExpr::Binary(bin) => {
                let lhs = Self::from(*bin.lhs);
                let rhs = Self::from(*bin.rhs);
                match bin.op.kind {
                    BinOpKind::Exp => lhs.pow(rhs),
                    BinOpKind::Mul => lhs * rhs,
                    BinOpKind::Div => lhs / rhs,
                    BinOpKind::Add => lhs + rhs,
                    BinOpKind::Sub => lhs - rhs,
                }
            },
        }
    }
}

/// Adds two [`SymExpr`]s together. No simplification is done, except for the case where the
/// operands are numbers or [`SymExpr::Add`]s, in which case the numbers are added or both are
/// combined in one list of terms (flattening).
impl Add for SymExpr {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        match (self, rhs) {
            (Self::Primary(Primary::Number(lhs)), Self::Primary(Primary::Number(rhs))) => {
                Self::Primary(Primary::Number(lhs + rhs))
            },
            (Self::Add(mut terms), Self::Add(rhs_terms)) => {
                terms.extend(rhs_terms);
                Self::Add(terms)
            },
            (Self::Add(mut terms), other) => {
                terms.push(other);
                Self::Add(terms)
            },
            (other, Self::Add(mut terms)) => {
                terms.insert(0, other);
                Self::Add(terms)
            },
            (lhs, rhs) => Self::Add(vec![lhs, rhs]),
        }
    }
}

/// Subtracts one [`SymExpr`] from another, as `lhs + -1 * rhs`. No simplification is done.
impl Sub for SymExpr {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self + -rhs
    }
}

/// Multiplies two [`SymExpr`]s together. No simplification is done, except for the case where the
/// operands are numbers or [`SymExpr::Mul`]s, in which case the numbers are multiplied or both are
/// combined in one list of factors (flattening).
impl Mul for SymExpr {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Self::Primary(Primary::Number(lhs)), Self::Primary(Primary::Number(rhs))) => {
                Self::Primary(Primary::Number(lhs * rhs))
            },
            (Self::Mul(mut factors), Self::Mul(other)) => {
                factors.extend(other);
                Self::Mul(factors)
            },
            (Self::Mul(mut factors), other) => {
                factors.push(other);
                Self::Mul(factors)
            },
            (other, Self::Mul(mut factors)) => {
                factors.insert(0, other);
                Self::Mul(factors)
            },
            (lhs, rhs) => Self::Mul(vec![lhs, rhs]),
        }
    }
}

/// Divides one [`SymExpr`] by another, as `lhs * rhs^-1`. No simplification is done.
impl Div for SymExpr {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        make_fraction(self, rhs)
    }
}

/// Multiplies this expression by -1. No simplification is done, except for the case where the
/// expression is a number, or a product with a leading numeric coefficient, in which case the
/// number is negated.
impl Neg for SymExpr {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Self::Primary(Primary::Number(num)) => Self::Primary(Primary::Number(-num)),
            Self::Mul(mut factors) => match factors.first_mut() {
                Some(Self::Primary(Primary::Number(num))) => {
                    *num = -num.clone();
                    if *num == 1 {
                        factors.remove(0);
                    }
                    Self::Mul(factors).downgrade()
                },
                _ => Self::number(-1) * Self::Mul(factors),
            },
            expr => Self::number(-1) * expr,
        }
    }
}

#[cfg(test)]
mod tests {
    use cas_parser::parser::{ast::expr::Expr as AstExpr, Parser};
    use pretty_assertions::assert_eq;
    use super::*;

    /// Parse the given expression and return the [`SymExpr`] representation.
    fn parse_expr(input: &str) -> SymExpr {
        let expr = Parser::new(input).try_parse_full::<AstExpr>().unwrap();
        SymExpr::from(expr)
    }

    #[test]
    fn flatten_sum() {
        let expr = parse_expr("x + (y + z)");
        assert_eq!(expr, SymExpr::Add(vec![
            SymExpr::symbol("x"),
            SymExpr::symbol("y"),
            SymExpr::symbol("z"),
        ]));
    }

    #[test]
    fn subtraction_and_division() {
        let expr = parse_expr("factorial(n) / factorial(n - 3)");
        assert_eq!(expr, SymExpr::Mul(vec![
            SymExpr::factorial(SymExpr::symbol("n")),
            SymExpr::Exp(
                Box::new(SymExpr::factorial(SymExpr::Add(vec![
                    SymExpr::symbol("n"),
                    SymExpr::number(-3),
                ]))),
                Box::new(SymExpr::number(-1)),
            ),
        ]));
    }

    #[test]
    fn known_functions() {
        assert_eq!(parse_expr("n!"), SymExpr::factorial(SymExpr::symbol("n")));
        assert_eq!(
            parse_expr("binomial(n, k)"),
            SymExpr::binomial(SymExpr::symbol("n"), SymExpr::symbol("k")),
        );
        assert_eq!(
            parse_expr("RisingFactorial(x, 2)"),
            parse_expr("rf(x, 2)"),
        );
        assert_eq!(
            parse_expr("ff(x, 2)"),
            SymExpr::func(Func::FallingFactorial(
                Box::new(SymExpr::symbol("x")),
                Box::new(SymExpr::number(2)),
            )),
        );
        assert_eq!(parse_expr("pi"), SymExpr::Primary(Primary::Constant(Constant::Pi)));
    }

    #[test]
    fn wrong_arity_stays_opaque() {
        assert_eq!(
            parse_expr("factorial(n, k)"),
            SymExpr::Primary(Primary::Call(
                "factorial".to_string(),
                vec![SymExpr::symbol("n"), SymExpr::symbol("k")],
            )),
        );
        assert_eq!(
            parse_expr("f()"),
            SymExpr::Primary(Primary::Call("f".to_string(), Vec::new())),
        );
    }

    #[test]
    fn children_of_functions() {
        let expr = parse_expr("binomial(n + 1, k)");
        let children = expr.children();
        assert_eq!(children.len(), 2);
        assert_eq!(*children[1], SymExpr::symbol("k"));

        let doubled = expr.map_children(|child| child.clone() * SymExpr::number(2));
        assert_eq!(doubled, SymExpr::binomial(
            SymExpr::Mul(vec![
                SymExpr::Add(vec![SymExpr::symbol("n"), SymExpr::number(1)]),
                SymExpr::number(2),
            ]),
            SymExpr::Mul(vec![SymExpr::symbol("k"), SymExpr::number(2)]),
        ));
    }

    #[test]
    fn negate_coefficient() {
        let expr = SymExpr::Mul(vec![SymExpr::number(-1), SymExpr::symbol("k")]);
        assert_eq!(-expr, SymExpr::symbol("k"));
    }

    #[test]
    fn fmt_sum_and_product() {
        let expr = SymExpr::Mul(vec![
            SymExpr::symbol("n"),
            SymExpr::Add(vec![SymExpr::number(-2), SymExpr::symbol("n")]),
            SymExpr::Add(vec![SymExpr::number(-1), SymExpr::symbol("n")]),
        ]);
        assert_eq!(expr.to_string(), "n*(n - 2)*(n - 1)");
    }

    #[test]
    fn fmt_fraction() {
        let expr = SymExpr::Mul(vec![
            SymExpr::Add(vec![SymExpr::number(1), SymExpr::symbol("n")]),
            SymExpr::Exp(
                Box::new(SymExpr::Add(vec![SymExpr::number(1), SymExpr::symbol("k")])),
                Box::new(SymExpr::number(-1)),
            ),
        ]);
        assert_eq!(expr.to_string(), "(n + 1)/(k + 1)");

        let expr = SymExpr::Mul(vec![
            SymExpr::number((-3, 2)),
            SymExpr::symbol("x"),
            SymExpr::Exp(Box::new(SymExpr::symbol("y")), Box::new(SymExpr::number(-2))),
        ]);
        assert_eq!(expr.to_string(), "-3*x/(2*y^2)");
    }

    #[test]
    fn fmt_negative_terms() {
        let expr = SymExpr::Add(vec![
            SymExpr::symbol("n"),
            SymExpr::Mul(vec![SymExpr::number(-1), SymExpr::symbol("k")]),
            SymExpr::number(-1),
        ]);
        assert_eq!(expr.to_string(), "n - k - 1");
    }
}
