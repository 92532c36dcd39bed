//! Relative-tolerance convergence checking.

/// A convergence check between two values under a relative tolerance.
///
/// Two values converge when their absolute difference is within
/// `tolerance` times the larger magnitude of the two:
/// `|a - b| <= tolerance * max(|a|, |b|)`.
///
/// The scale is taken from the inputs themselves, so the tolerance is
/// relative: the absolute threshold grows with the magnitude of the operands.
///
/// When both values are zero the scale is zero, so exact equality converges
/// and any nonzero difference does not, regardless of tolerance. This
/// degenerate behavior is intentional and relied upon by callers.
///
/// # Examples
///
/// ```
/// use closenough_core::ConvergenceCheck;
///
/// let check = ConvergenceCheck::new(1.0, 1.1, 0.2);
/// assert!(check.is_converged());
///
/// let check = ConvergenceCheck::new(1.0, 1.1, 0.01);
/// assert!(!check.is_converged());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvergenceCheck {
    a: f64,
    b: f64,
    tolerance: f64,
}

impl ConvergenceCheck {
    /// Creates a check for `a` and `b` under the given relative `tolerance`.
    #[must_use]
    pub const fn new(a: f64, b: f64, tolerance: f64) -> Self {
        Self { a, b, tolerance }
    }

    /// Returns the magnitude scale: `max(|a|, |b|)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use closenough_core::ConvergenceCheck;
    ///
    /// assert_eq!(ConvergenceCheck::new(-3.0, 2.0, 0.1).scale(), 3.0);
    /// assert_eq!(ConvergenceCheck::new(0.0, 0.0, 0.1).scale(), 0.0);
    /// ```
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.a.abs().max(self.b.abs())
    }

    /// Returns the absolute threshold the difference is compared against:
    /// `tolerance * scale()`.
    #[must_use]
    pub fn threshold(&self) -> f64 {
        self.tolerance * self.scale()
    }

    /// Returns `true` when the two values are close enough.
    ///
    /// # Examples
    ///
    /// ```
    /// use closenough_core::ConvergenceCheck;
    ///
    /// // Exact equality converges even with zero tolerance.
    /// assert!(ConvergenceCheck::new(1.0, 1.0, 0.0).is_converged());
    ///
    /// // Zero scale: nothing but equality passes.
    /// assert!(!ConvergenceCheck::new(0.0, 0.0001, 0.0).is_converged());
    /// ```
    #[must_use]
    pub fn is_converged(&self) -> bool {
        (self.a - self.b).abs() <= self.threshold()
    }
}

/// Returns `true` when `a` and `b` are within `tolerance` relative to their
/// magnitude.
///
/// Convenience wrapper around [`ConvergenceCheck`].
///
/// # Examples
///
/// ```
/// use closenough_core::converged;
///
/// assert!(converged(100.0, 100.5, 0.01));
/// assert!(!converged(100.0, 102.0, 0.01));
/// ```
#[must_use]
pub fn converged(a: f64, b: f64, tolerance: f64) -> bool {
    ConvergenceCheck::new(a, b, tolerance).is_converged()
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn exact_equality_converges_with_zero_tolerance() {
        assert!(converged(1.0, 1.0, 0.0));
        assert!(converged(-42.5, -42.5, 0.0));
    }

    #[test]
    fn tolerance_scales_with_magnitude() {
        assert!(!converged(1.0, 1.1, 0.01));
        assert!(converged(1.0, 1.1, 0.2));

        // Same relative gap at a larger magnitude behaves the same.
        assert!(!converged(1000.0, 1100.0, 0.01));
        assert!(converged(1000.0, 1100.0, 0.2));
    }

    #[test]
    fn zero_scale_is_degenerate() {
        // Both zero: equality trivially passes, any difference fails.
        assert!(converged(0.0, 0.0, 0.0));
        assert!(converged(0.0, 0.0, 100.0));
        assert!(!converged(0.0, 0.0001, 0.0));
    }

    #[test]
    fn check_exposes_scale_and_threshold() {
        let check = ConvergenceCheck::new(-4.0, 2.0, 0.5);
        assert_eq!(check.scale(), 4.0);
        assert_eq!(check.threshold(), 2.0);
        assert!(!check.is_converged());
    }

    #[test]
    fn order_of_operands_does_not_matter() {
        assert_eq!(converged(1.0, 1.1, 0.05), converged(1.1, 1.0, 0.05));
        assert_eq!(converged(-5.0, 3.0, 0.5), converged(3.0, -5.0, 0.5));
    }

    proptest! {
        #[test]
        fn matches_definition(
            a in -1.0e9..1.0e9_f64,
            b in -1.0e9..1.0e9_f64,
            tolerance in 0.0..10.0_f64,
        ) {
            let expected = (a - b).abs() <= tolerance * a.abs().max(b.abs());
            prop_assert_eq!(converged(a, b, tolerance), expected);
        }

        #[test]
        fn symmetric(
            a in -1.0e9..1.0e9_f64,
            b in -1.0e9..1.0e9_f64,
            tolerance in 0.0..10.0_f64,
        ) {
            prop_assert_eq!(converged(a, b, tolerance), converged(b, a, tolerance));
        }

        #[test]
        fn reflexive_for_finite_values(
            a in -1.0e9..1.0e9_f64,
            tolerance in 0.0..10.0_f64,
        ) {
            prop_assert!(converged(a, a, tolerance));
        }
    }
}
