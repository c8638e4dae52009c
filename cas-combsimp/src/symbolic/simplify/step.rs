#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Possible simplification steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Step {
    /// `0*a = 0`
    /// `a*0 = 0`
    MultiplyZero,

    /// `a+a = 2a`
    /// `2a+3a = 5a`
    /// `a+0 = a`
    /// etc.
    CombineLikeTerms,

    /// `a*a = a^2`
    /// `a^2*a^3 = a^5`
    /// `a*1 = a`
    /// etc.
    CombineLikeFactors,

    /// `2*(a+b) = 2a + 2b`
    DistributeCoefficient,

    /// `a^0 = 1`
    /// `a^1 = a`
    /// `1^a = 1`
    /// `(a^b)^n = a^(b*n)`
    /// `(a*b)^n = a^n*b^n`
    /// `2^3 = 8`
    PowerRule,

    /// `factorial(4) = 24`
    /// `binomial(n, 0) = 1`
    /// `rf(x, 1) = x`
    /// etc.
    EvaluateFunction,

    /// `factorial(x) = gamma(x+1)`
    /// `binomial(n, k) = gamma(n+1)/(gamma(k+1)*gamma(n-k+1))`
    /// `rf(x, k) = gamma(x+k)/gamma(x)`
    /// `ff(x, k) = gamma(x+1)/gamma(x-k+1)`
    RewriteAsGamma,

    /// `gamma(x) = factorial(x-1)`
    /// `binomial(n, k) = factorial(n)/(factorial(k)*factorial(n-k))`
    /// etc.
    RewriteAsFactorial,

    /// `gamma(a+m)/gamma(a) = a*(a+1)*...*(a+m-1)`
    GammaRatio,

    /// `a*gamma(a) = gamma(a+1)`
    /// `(a-1)/gamma(a) = 1/gamma(a-1)`
    AbsorbFactor,

    /// `gamma(a)*gamma(1-a) = pi/sin(pi*a)`
    Reflection,

    /// A gamma function argument is not known to be an integer, so the whole expression is
    /// handed to the general gamma simplifier.
    DelegateToGammasimp,

    /// `factorial(n)/(factorial(k)*factorial(n-k)) = binomial(n, k)`
    FactorialsToBinomial,
}
