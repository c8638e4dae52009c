use std::collections::HashMap;
use cas_combsimp::symbolic::{
    combsimp,
    combsimp_with_steps,
    eval_exact,
    gammasimp,
    rewrite,
    Primary,
    simplify,
    Assumptions,
    RewriteTarget,
    Step,
    Symbol,
    SymExpr,
};
use cas_parser::parser::{ast::expr::Expr, Parser};
use pretty_assertions::assert_eq;
use rug::Rational;

/// Parses the input and marks `n`, `k`, `m`, `a` and `b` as integers.
fn parse_expr(input: &str) -> SymExpr {
    let expr = Parser::new(input).try_parse_full::<Expr>().unwrap();
    Assumptions::new()
        .with_integers(["n", "k", "m", "a", "b"])
        .apply(&expr.into())
}

/// Parses the input, marks the symbols as [`parse_expr`] does, and simplifies it.
fn canonical(input: &str) -> SymExpr {
    simplify(&parse_expr(input))
}

#[test]
fn falling_product() {
    let result = combsimp(&parse_expr("factorial(n) / factorial(n - 3)"));
    assert_eq!(result, canonical("n*(n - 1)*(n - 2)"));
    assert_eq!(result.to_string(), "n*(n - 2)*(n - 1)");
}

#[test]
fn ratio_of_binomials() {
    let result = combsimp(&parse_expr("binomial(n+1, k+1) / binomial(n, k)"));
    assert_eq!(result, canonical("(n + 1)/(k + 1)"));
    assert_eq!(result.to_string(), "(n + 1)/(k + 1)");
}

#[test]
fn factorials_to_binomial() {
    let (result, steps) = combsimp_with_steps(&parse_expr("factorial(n+1) / (factorial(k+1) * factorial(n-k))"));
    assert_eq!(result, canonical("binomial(n + 1, k + 1)"));
    assert_eq!(result.to_string(), "binomial(n + 1, k + 1)");
    assert_eq!(steps.last(), Some(&Step::FactorialsToBinomial));
}

#[test]
fn non_integer_delegates() {
    let expr = Parser::new("factorial(x)/factorial(x-1)").try_parse_full::<Expr>().unwrap();
    let expr = Assumptions::new().with_non_integers(["x"]).apply(&expr.into());

    let (result, steps) = combsimp_with_steps(&expr);
    assert_eq!(result, SymExpr::Primary(Primary::Symbol(Symbol {
        name: "x".to_string(),
        integer: Some(false),
    })));
    assert!(steps.contains(&Step::DelegateToGammasimp));
    assert!(!steps.contains(&Step::FactorialsToBinomial));
    assert!(!steps.contains(&Step::RewriteAsFactorial));
    assert_eq!(result, gammasimp(&rewrite(&expr, RewriteTarget::Gamma)));
}

#[test]
fn unknown_symbol_delegates() {
    let expr = parse_expr("factorial(y + 2)/(factorial(y)*factorial(2))");
    let (result, steps) = combsimp_with_steps(&expr);
    assert!(steps.contains(&Step::DelegateToGammasimp));
    assert_eq!(result, gammasimp(&rewrite(&expr, RewriteTarget::Gamma)));
}

#[test]
fn binomial_unchanged() {
    let expr = canonical("binomial(n, k)");
    assert_eq!(combsimp(&expr), expr);
}

#[test]
fn first_fit_merge() {
    let result = combsimp(&parse_expr(
        "factorial(n)/(factorial(a)*factorial(b)*factorial(n - a)*factorial(n - b))",
    ));
    assert_eq!(result, canonical("binomial(n, a)/(factorial(b)*factorial(n - b))"));
}

#[test]
fn merges_every_pair() {
    let result = combsimp(&parse_expr(
        "factorial(n)*factorial(m)/(factorial(a)*factorial(n - a)*factorial(b)*factorial(m - b))",
    ));
    assert_eq!(result, canonical("binomial(n, a)*binomial(m, b)"));
    assert_eq!(result.to_string(), "binomial(m, b)*binomial(n, a)");
}

#[test]
fn equal_arguments_pick_second() {
    let result = combsimp(&parse_expr("factorial(a + b)/(factorial(a)*factorial(b))"));
    assert_eq!(result, canonical("binomial(a + b, b)"));
}

#[test]
fn powers_of_ratio() {
    let result = combsimp(&parse_expr("factorial(2*n)^3/factorial(n)^6"));
    assert_eq!(result, canonical("binomial(2*n, n)^3"));
}

#[test]
fn large_power_unchanged() {
    let expr = canonical("factorial(n)^1000000000000000000");
    assert_eq!(combsimp(&expr), expr);
}

#[test]
fn absorbs_factor() {
    let (result, steps) = combsimp_with_steps(&parse_expr("n*factorial(n - 1)"));
    assert_eq!(result, canonical("factorial(n)"));
    assert!(steps.contains(&Step::AbsorbFactor));
}

#[test]
fn squared_ratio() {
    let result = combsimp(&parse_expr("factorial(n)^2/factorial(n - 1)^2"));
    assert_eq!(result, canonical("n^2"));
}

#[test]
fn pochhammer_ratio() {
    assert_eq!(combsimp(&parse_expr("rf(n, 3)/ff(n + 2, 3)")), SymExpr::number(1));
    assert_eq!(combsimp(&parse_expr("rf(n, k)*factorial(n - 1)")), canonical("factorial(n + k - 1)"));
}

#[test]
fn reflection_formula() {
    let expr = Parser::new("gamma(x)*gamma(1 - x)").try_parse_full::<Expr>().unwrap();
    assert_eq!(gammasimp(&expr.into()).to_string(), "pi/sin(pi*x)");
}

#[test]
fn idempotent() {
    for input in [
        "factorial(n) / factorial(n - 3)",
        "binomial(n+1, k+1) / binomial(n, k)",
        "factorial(n+1) / (factorial(k+1) * factorial(n-k))",
        "factorial(n)/(factorial(a)*factorial(b)*factorial(n - a)*factorial(n - b))",
        "binomial(n, k) + binomial(n, k + 1)",
    ] {
        let once = combsimp(&parse_expr(input));
        assert_eq!(combsimp(&once), once, "{}", input);
    }
}

#[test]
fn exact_values_preserved() {
    let inputs = [
        "factorial(n) / factorial(n - 3)",
        "binomial(n+1, k+1) / binomial(n, k)",
        "factorial(n+1) / (factorial(k+1) * factorial(n-k))",
        "binomial(n, k) + binomial(n, k + 1)",
        "factorial(n + 2)/(factorial(n)*(n + 1))",
        "binomial(n, k)*factorial(k)*factorial(n - k)/factorial(n)",
        "rf(n, k)/ff(n + k - 1, k)",
        "k*binomial(n, k)/n",
    ];

    for input in inputs {
        let expr = parse_expr(input);
        let simplified = combsimp(&expr);

        for n in 3..10 {
            for k in 0..=n {
                let values = HashMap::from([
                    ("n".to_string(), Rational::from(n)),
                    ("k".to_string(), Rational::from(k)),
                ]);
                if let Some(expected) = eval_exact(&expr, &values) {
                    assert_eq!(
                        eval_exact(&simplified, &values),
                        Some(expected),
                        "{} at n = {}, k = {}",
                        input,
                        n,
                        k,
                    );
                }
            }
        }
    }
}
