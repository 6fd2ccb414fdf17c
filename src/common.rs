// Copyright 2026 the Cardano Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Common mathematical operations

/// Defines a trait that chooses between libstd or libm implementations of float methods.
macro_rules! define_float_funcs {
    ($(
        fn $name:ident(self $(,$arg:ident: $arg_ty:ty)*) -> $ret:ty
        => $lname:ident;
    )+) => {
        #[cfg(not(feature = "std"))]
        pub(crate) trait FloatFuncs : Sized {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret;)+
        }

        #[cfg(not(feature = "std"))]
        impl FloatFuncs for f64 {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret {
                #[cfg(feature = "libm")]
                return libm::$lname(self $(,$arg as _)*);

                #[cfg(not(feature = "libm"))]
                compile_error!("cardano requires either the `std` or `libm` feature")
            })+
        }
    }
}

define_float_funcs! {
    fn abs(self) -> Self => fabs;
    fn asin(self) -> Self => asin;
    fn atan(self) -> Self => atan;
    fn atan2(self, other: Self) -> Self => atan2;
    fn cos(self) -> Self => cos;
    fn cosh(self) -> Self => cosh;
    fn exp(self) -> Self => exp;
    fn hypot(self, other: Self) -> Self => hypot;
    fn ln(self) -> Self => log;
    fn powf(self, n: Self) -> Self => pow;
    fn powi(self, n: i32) -> Self => pow;
    fn sin(self) -> Self => sin;
    fn sin_cos(self) -> (Self, Self) => sincos;
    fn sinh(self) -> Self => sinh;
    fn sqrt(self) -> Self => sqrt;
}

/// Real, sign-preserving cube root.
///
/// Negative inputs are handled as `-((-x)^(1/3))`, so the result is always
/// real and has the sign of `x`. The power is taken with `powf` rather than
/// [`f64::cbrt`], to match the rest of the closed-form solver.
///
/// # Examples
///
/// ```
/// use cardano::common::real_cbrt;
///
/// assert!((real_cbrt(27.0) - 3.0).abs() < 1e-12);
/// assert!((real_cbrt(-8.0) + 2.0).abs() < 1e-12);
/// assert_eq!(real_cbrt(0.0), 0.0);
/// ```
#[inline]
pub fn real_cbrt(x: f64) -> f64 {
    const ONETHIRD: f64 = 1. / 3.;
    if x < 0.0 {
        -(-x).powf(ONETHIRD)
    } else {
        x.powf(ONETHIRD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cbrt_keeps_sign() {
        for x in [1.0, 2.0, 10.0, 1e-6, 12345.678] {
            let r = real_cbrt(x);
            assert!(r > 0.0);
            assert!((r * r * r - x).abs() <= 1e-12 * x.max(1.0));
            assert_eq!(real_cbrt(-x), -r);
        }
    }

    #[test]
    fn cbrt_is_never_nan_for_finite_input() {
        assert!(!real_cbrt(-1e300).is_nan());
        assert!(!real_cbrt(-f64::MIN_POSITIVE).is_nan());
    }
}
