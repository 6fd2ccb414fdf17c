// Copyright 2026 the Cardano Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tolerance-based comparison of real values.
//!
//! The solvers compare floats exactly, with two exceptions: deciding whether
//! a cubic's discriminant is zero, and deciding whether the remainder of a
//! synthetic division is zero. Both go through this module.

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// The fixed tolerance used for approximate comparisons.
pub const EPSILON: f64 = 1e-4;

/// Compare if two real values are approximately equal.
///
/// Values are equal when they differ by strictly less than [`EPSILON`].
/// Infinities are compared exactly, and `NaN` is never equal to anything.
#[inline]
pub fn approx_eq(x: f64, y: f64) -> bool {
    if x.is_infinite() || y.is_infinite() {
        return x == y;
    }
    (x - y).abs() < EPSILON
}

/// Compare if a real value is approximately zero.
#[inline]
pub fn approx_zero(x: f64) -> bool {
    approx_eq(x, 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approx_eq() {
        assert!(approx_eq(1.0, 1.0));
        assert!(approx_eq(1.0, 1.0 + 0.5e-4));
        assert!(approx_eq(-3.0, -3.00009));
        assert!(!approx_eq(1.0, 1.0 + 2e-4));
        assert!(!approx_eq(0.0, EPSILON));
        assert!(approx_eq(f64::INFINITY, f64::INFINITY));
        assert!(!approx_eq(f64::INFINITY, f64::NEG_INFINITY));
        assert!(!approx_eq(f64::NAN, f64::NAN));
    }

    #[test]
    fn test_approx_zero() {
        assert!(approx_zero(0.0));
        assert!(approx_zero(-0.0));
        assert!(approx_zero(9.9e-5));
        assert!(approx_zero(-9.9e-5));
        assert!(!approx_zero(1e-3));
        assert!(!approx_zero(f64::NAN));
    }
}
