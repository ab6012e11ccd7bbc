//! Integration domains.

use crate::error::{QuadError, QuadResult};

/// Widths at or below this are treated as numerically empty.
pub const NEGLIGIBLE_WIDTH: f64 = 1e-9;

/// A validated, finite integration interval `[a, b]` with `a < b`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Domain {
    a: f64,
    b: f64,
}

impl Domain {
    /// Creates a domain, rejecting empty, inverted or non-finite bounds.
    ///
    /// # Errors
    ///
    /// Returns [`QuadError::InvalidDomain`] unless `a < b`, both are finite
    /// and the width `b - a` does not overflow.
    pub fn new(a: f64, b: f64) -> QuadResult<Self> {
        if a.is_finite() && b.is_finite() && a < b && (b - a).is_finite() {
            Ok(Self { a, b })
        } else {
            Err(QuadError::InvalidDomain { a, b })
        }
    }

    /// Lower bound.
    #[must_use]
    pub fn lower(&self) -> f64 {
        self.a
    }

    /// Upper bound.
    #[must_use]
    pub fn upper(&self) -> f64 {
        self.b
    }

    /// `b - a`.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.b - self.a
    }

    /// Returns true if the domain is too narrow to be split into tasks.
    #[must_use]
    pub fn is_negligible(&self) -> bool {
        self.width() <= NEGLIGIBLE_WIDTH
    }

    /// Returns true if `x` lies in the closed interval.
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        self.a <= x && x <= self.b
    }
}
