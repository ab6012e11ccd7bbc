//! Adaptive Trapezoidal Quadrature
//!
//! Integrates one sub-interval to a local tolerance by recursive bisection.
//! Each step compares the one-panel trapezoid estimate `S_prev` with the
//! two-panel estimate `S_curr`; when `|S_curr - S_prev| < 3 tol` the panel is
//! accepted with the Richardson correction `S_curr + (S_curr - S_prev) / 3`,
//! otherwise both halves are refined with half the tolerance.
//!
//! Endpoint values travel down the recursion, so every bisection costs exactly
//! one new evaluation at the midpoint.

use parquad_core::{Integrand, QuadError, QuadResult};

/// Recursion ceiling used when none is configured.
pub const DEFAULT_MAX_DEPTH: u32 = 20;

/// Result of integrating one sub-interval.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct KernelEstimate {
    /// Estimated integral.
    pub value: f64,
    /// Number of integrand evaluations performed.
    pub evaluations: u64,
    /// Panels accepted because of the depth ceiling or because the midpoint
    /// collapsed onto an endpoint, rather than by the error test.
    pub depth_capped: u64,
}

impl KernelEstimate {
    /// Adds another estimate into this one.
    pub fn absorb(&mut self, other: KernelEstimate) {
        self.value += other.value;
        self.evaluations += other.evaluations;
        self.depth_capped += other.depth_capped;
    }
}

/// Error-controlled trapezoidal refinement with a hard depth ceiling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AdaptiveTrapezoid {
    max_depth: u32,
}

impl Default for AdaptiveTrapezoid {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl AdaptiveTrapezoid {
    /// Creates a kernel that never bisects deeper than `max_depth` levels.
    ///
    /// # Errors
    ///
    /// Returns [`QuadError::InvalidDepth`] if `max_depth` is zero.
    pub fn new(max_depth: u32) -> QuadResult<Self> {
        if max_depth == 0 {
            return Err(QuadError::InvalidDepth);
        }
        Ok(Self { max_depth })
    }

    /// The configured recursion ceiling.
    #[must_use]
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// Integrates `f` over `[a, b]` to the local tolerance `tol`.
    ///
    /// A zero-width interval returns `0.0` without evaluating `f`. Otherwise
    /// both endpoints are evaluated once and the recursion adds one
    /// evaluation per bisection.
    ///
    /// # Example
    ///
    /// ```
    /// use parquad_integrate::AdaptiveTrapezoid;
    ///
    /// let kernel = AdaptiveTrapezoid::default();
    /// let est = kernel.integrate(&|x: f64| x.sin(), 0.0, std::f64::consts::PI, 1e-10);
    /// assert!((est.value - 2.0).abs() < 1e-8);
    /// ```
    #[allow(clippy::float_cmp)]
    pub fn integrate<F>(&self, f: &F, a: f64, b: f64, tol: f64) -> KernelEstimate
    where
        F: Integrand + ?Sized,
    {
        if a == b {
            return KernelEstimate::default();
        }

        let whole = Panel::new(a, b, f.eval(a), f.eval(b));
        let mut refinement = Refinement {
            f,
            max_depth: self.max_depth,
            evaluations: 2,
            depth_capped: 0,
        };
        let value = refinement.refine(whole, tol, 0);

        KernelEstimate {
            value,
            evaluations: refinement.evaluations,
            depth_capped: refinement.depth_capped,
        }
    }
}

/// A sub-interval with its endpoint values and one-panel trapezoid estimate.
#[derive(Clone, Copy, Debug)]
struct Panel {
    a: f64,
    b: f64,
    fa: f64,
    fb: f64,
    estimate: f64,
}

impl Panel {
    fn new(a: f64, b: f64, fa: f64, fb: f64) -> Self {
        Self {
            a,
            b,
            fa,
            fb,
            estimate: (fa + fb) * (b - a) / 2.0,
        }
    }
}

/// Mutable state of one kernel invocation.
struct Refinement<'f, F: ?Sized> {
    f: &'f F,
    max_depth: u32,
    evaluations: u64,
    depth_capped: u64,
}

impl<F: Integrand + ?Sized> Refinement<'_, F> {
    #[allow(clippy::float_cmp)]
    fn refine(&mut self, panel: Panel, tol: f64, depth: u32) -> f64 {
        if depth >= self.max_depth || panel.a == panel.b {
            self.depth_capped += 1;
            return panel.estimate;
        }

        let m = (panel.a + panel.b) / 2.0;
        if m == panel.a || m == panel.b {
            self.depth_capped += 1;
            return panel.estimate;
        }

        let fm = self.f.eval(m);
        self.evaluations += 1;

        let left = Panel::new(panel.a, m, panel.fa, fm);
        let right = Panel::new(m, panel.b, fm, panel.fb);
        let s_prev = panel.estimate;
        let s_curr = left.estimate + right.estimate;

        if (s_curr - s_prev).abs() < 3.0 * tol {
            return s_curr + (s_curr - s_prev) / 3.0;
        }

        let half = tol / 2.0;
        self.refine(left, half, depth + 1) + self.refine(right, half, depth + 1)
    }
}
