//! Easing functions for animation interpolation.
//!
//! Provides the easing curves a transition can use to reshape linear
//! progress. Every curve maps `[0, 1]` onto `[0, 1]` with `f(0) = 0` and
//! `f(1) = 1`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Easing function variants for animation curves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    Linear,
    /// Quadratic ease-in (slow start, fast end).
    QuadraticIn,
    /// Quadratic ease-out (fast start, slow end).
    QuadraticOut,
    /// Square root ease-out (fast start, gradual slow).
    SqrtOut,
    /// Exponential ease-in/ease-out: a symmetric S-curve that is nearly
    /// flat at both ends and steep through the middle.
    ExponentialInOut,
    /// Cubic Hermite interpolation with configurable control points.
    /// Formula: c1·3t(1-t)² + c2·3(1-t)t² + t³
    CubicHermite {
        /// First control point.
        c1: f64,
        /// Second control point.
        c2: f64,
    },
}

impl EasingFunction {
    /// Default easing function: exponential in/out.
    pub const DEFAULT: EasingFunction = EasingFunction::ExponentialInOut;

    /// Evaluate the easing function at time t.
    ///
    /// Input t is clamped to [0.0, 1.0].
    /// Returns the eased value, also in [0.0, 1.0].
    #[inline]
    #[must_use]
    pub fn evaluate(&self, t: f64) -> f64 {
        // Clamp input to [0, 1]
        let t = t.clamp(0.0, 1.0);

        match self {
            EasingFunction::Linear => t,
            EasingFunction::QuadraticIn => t * t,
            EasingFunction::QuadraticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            EasingFunction::SqrtOut => t.sqrt(),
            EasingFunction::ExponentialInOut => exponential_in_out(t),
            EasingFunction::CubicHermite { c1, c2 } => {
                // f(t) = c0(1-t)³ + c1·3t(1-t)² + c2·3(1-t)t² + c3·t³
                // where c0=0.0, c3=1.0
                let omt = 1.0 - t;
                c1 * 3.0 * t * omt * omt + c2 * 3.0 * omt * t * t + t * t * t
            }
        }
    }
}

impl Default for EasingFunction {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Two mirrored `2^(20t - 10)` halves joined at `t = 0.5`.
///
/// The raw curve is off by `2^-11` at the ends, so the endpoints are
/// pinned.
#[inline]
fn exponential_in_out(t: f64) -> f64 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }
    if t < 0.5 {
        0.5 * 2f64.powf(20.0 * t - 10.0)
    } else {
        0.5 * (2.0 - 2f64.powf(10.0 - 20.0 * t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_endpoints() {
        let linear = EasingFunction::Linear;
        assert_eq!(linear.evaluate(0.0), 0.0);
        assert_eq!(linear.evaluate(0.5), 0.5);
        assert_eq!(linear.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_exponential_endpoints_are_exact() {
        let exp = EasingFunction::ExponentialInOut;
        assert_eq!(exp.evaluate(0.0), 0.0);
        assert_eq!(exp.evaluate(0.5), 0.5);
        assert_eq!(exp.evaluate(1.0), 1.0);
    }

    #[test]
    fn test_exponential_is_monotonic() {
        let exp = EasingFunction::ExponentialInOut;
        let mut prev = exp.evaluate(0.0);
        for i in 1..=1000 {
            let v = exp.evaluate(f64::from(i) / 1000.0);
            assert!(v >= prev, "dropped at step {i}: {prev} -> {v}");
            prev = v;
        }
        assert_eq!(prev, 1.0);
    }

    #[test]
    fn test_exponential_is_symmetric_s_curve() {
        let exp = EasingFunction::ExponentialInOut;
        for i in 1..50 {
            let t = f64::from(i) / 100.0;
            let sum = exp.evaluate(t) + exp.evaluate(1.0 - t);
            assert!((sum - 1.0).abs() < 1e-12, "asymmetric at t={t}");
        }
        // Slow at the ends, fast in the middle.
        assert!(exp.evaluate(0.1) < 0.1);
        assert!(exp.evaluate(0.9) > 0.9);
        let mid_slope = exp.evaluate(0.51) - exp.evaluate(0.49);
        let end_slope = exp.evaluate(0.02) - exp.evaluate(0.0);
        assert!(mid_slope > end_slope);
    }

    #[test]
    fn test_cubic_hermite_endpoints() {
        let hermite = EasingFunction::CubicHermite { c1: 0.33, c2: 1.0 };
        assert_eq!(hermite.evaluate(0.0), 0.0);
        assert!((hermite.evaluate(1.0) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_input_clamping() {
        let linear = EasingFunction::Linear;

        assert_eq!(linear.evaluate(-0.5), 0.0);
        assert_eq!(linear.evaluate(1.5), 1.0);

        let exp = EasingFunction::ExponentialInOut;
        assert_eq!(exp.evaluate(-0.5), 0.0);
        assert_eq!(exp.evaluate(1.5), 1.0);
    }

    #[test]
    fn test_quadratic_curves() {
        assert_eq!(EasingFunction::QuadraticIn.evaluate(0.5), 0.25);
        assert_eq!(EasingFunction::QuadraticOut.evaluate(0.5), 0.75);
        assert!((EasingFunction::SqrtOut.evaluate(0.25) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_default_is_exponential() {
        assert_eq!(
            EasingFunction::default(),
            EasingFunction::ExponentialInOut
        );
    }
}
