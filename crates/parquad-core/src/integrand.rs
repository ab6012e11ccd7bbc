//! Functions that can be integrated.
//!
//! The kernel only needs "a function from `f64` to `f64`" that can be shared
//! between worker threads. Closures satisfy [`Integrand`] through a blanket
//! impl; [`BuiltinIntegrand`] names the functions used by the benchmarks.

/// A real function of one variable, shareable across worker threads.
pub trait Integrand: Sync {
    /// Evaluates the function at `x`.
    fn eval(&self, x: f64) -> f64;
}

impl<F> Integrand for F
where
    F: Fn(f64) -> f64 + Sync,
{
    #[inline]
    fn eval(&self, x: f64) -> f64 {
        self(x)
    }
}

/// Integrands with known behaviour, selectable by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BuiltinIntegrand {
    /// `sin(1/x)`, oscillating without bound as `x -> 0`. Defined as `0` at `x = 0`.
    SinInverse,
    /// `x`
    Identity,
    /// `x²`
    Square,
    /// `sin(x)`
    Sine,
}

impl BuiltinIntegrand {
    /// All builtins, in declaration order.
    pub const ALL: [BuiltinIntegrand; 4] = [
        BuiltinIntegrand::SinInverse,
        BuiltinIntegrand::Identity,
        BuiltinIntegrand::Square,
        BuiltinIntegrand::Sine,
    ];

    /// Short name used on the command line.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            BuiltinIntegrand::SinInverse => "sin-inverse",
            BuiltinIntegrand::Identity => "identity",
            BuiltinIntegrand::Square => "square",
            BuiltinIntegrand::Sine => "sine",
        }
    }

    /// Human readable formula.
    #[must_use]
    pub fn formula(self) -> &'static str {
        match self {
            BuiltinIntegrand::SinInverse => "sin(1/x)",
            BuiltinIntegrand::Identity => "x",
            BuiltinIntegrand::Square => "x^2",
            BuiltinIntegrand::Sine => "sin(x)",
        }
    }

    /// Exact value of the integral over `[a, b]`, when an elementary
    /// antiderivative exists.
    ///
    /// `sin(1/x)` integrates to an expression involving the cosine integral,
    /// so it returns `None`.
    #[must_use]
    pub fn exact_integral(self, a: f64, b: f64) -> Option<f64> {
        match self {
            BuiltinIntegrand::SinInverse => None,
            BuiltinIntegrand::Identity => Some((b * b - a * a) / 2.0),
            BuiltinIntegrand::Square => Some((b * b * b - a * a * a) / 3.0),
            BuiltinIntegrand::Sine => Some(a.cos() - b.cos()),
        }
    }
}

impl Integrand for BuiltinIntegrand {
    #[inline]
    fn eval(&self, x: f64) -> f64 {
        match self {
            BuiltinIntegrand::SinInverse => sin_inverse(x),
            BuiltinIntegrand::Identity => x,
            BuiltinIntegrand::Square => x * x,
            BuiltinIntegrand::Sine => x.sin(),
        }
    }
}

/// `sin(1/x)` with the removable-by-convention point `x = 0` mapped to `0`.
#[inline]
#[must_use]
pub fn sin_inverse(x: f64) -> f64 {
    if x == 0.0 {
        0.0
    } else {
        (1.0 / x).sin()
    }
}
