// Copyright 2026 the Cardano Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Decimal rounding and exact decimal sums.
//!
//! Rounding a float "to n decimal places" by scaling, rounding and
//! unscaling gives surprising answers at ties: `1.005 * 100.0` is
//! `100.49999999999999`, so `(x * 100.0).round() / 100.0` yields `1.0`. The
//! functions here instead work on the shortest decimal representation of the
//! float, which is the number a reader sees when the value is printed, so
//! `1.005` rounds to `1.01`. Sums are likewise taken exactly on those
//! decimal representations, so `0.1 + 0.2` is `0.3`.

use alloc::format;
use alloc::string::ToString;
use core::ops::{Add, Mul, Neg};

use num_bigint::BigInt;
use num_traits::{Signed, Zero};

/// Number of decimal places kept by complex products, reciprocals and powers.
pub const COMPLEX_PLACES: usize = 5;

/// Number of decimal places kept by the real roots of a cubic.
pub const ROOT_PLACES: usize = 4;

/// Number of decimal places shown when a polynomial is formatted without an
/// explicit precision.
pub const DEFAULT_PRECISION: usize = 4;

/// Round `value` to `places` decimal places, rounding half away from zero.
///
/// Non-finite values are returned unchanged. A result that rounds to zero is
/// always positive zero.
///
/// # Examples
///
/// ```
/// use cardano::round::round_half_up;
///
/// assert_eq!(round_half_up(1.23455, 4), 1.2346);
/// assert_eq!(round_half_up(-2.5, 0), -3.0);
/// assert_eq!(round_half_up(0.1 + 0.2, 5), 0.3);
/// ```
pub fn round_half_up(value: f64, places: usize) -> f64 {
    match Decimal::from_f64(value) {
        Some(d) => d.round(places).to_f64(),
        None => value,
    }
}

/// The sum `x + y`, taken exactly on the decimal representations of both
/// values and then converted back to the nearest float.
///
/// If either value is not finite, this is the ordinary float sum.
///
/// # Examples
///
/// ```
/// use cardano::round::decimal_sum;
///
/// assert_eq!(decimal_sum(0.1, 0.2), 0.3);
/// assert_eq!(decimal_sum(1.1, -0.9), 0.2);
/// ```
pub fn decimal_sum(x: f64, y: f64) -> f64 {
    match (Decimal::from_f64(x), Decimal::from_f64(y)) {
        (Some(dx), Some(dy)) => (dx + dy).to_f64(),
        _ => x + y,
    }
}

/// The exact decimal sum `x + y`, rounded to `places` decimal places.
///
/// Rounding happens once, on the exact sum, so a sum landing exactly on a
/// tie rounds away from zero even when the float sum falls just short of it.
/// If either value is not finite, this is the ordinary float sum.
///
/// # Examples
///
/// ```
/// use cardano::round::{round_half_up, rounded_sum};
///
/// // 0.300015 - 0.1 is 0.20001499999999997 as a float.
/// assert_eq!(round_half_up(0.300015 - 0.1, 5), 0.20001);
/// assert_eq!(rounded_sum(0.300015, -0.1, 5), 0.20002);
/// ```
pub fn rounded_sum(x: f64, y: f64, places: usize) -> f64 {
    match (Decimal::from_f64(x), Decimal::from_f64(y)) {
        (Some(dx), Some(dy)) => (dx + dy).round(places).to_f64(),
        _ => x + y,
    }
}

/// An exact decimal number, `mantissa × 10^-scale`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Decimal {
    mantissa: BigInt,
    scale: usize,
}

impl Decimal {
    /// The shortest decimal representation of `value`, or `None` if it is
    /// not finite.
    pub(crate) fn from_f64(value: f64) -> Option<Decimal> {
        if !value.is_finite() {
            return None;
        }
        // `Display` writes the shortest digits that round-trip, and never uses
        // exponent notation.
        let repr = format!("{value}");
        let (int_part, frac_part) = repr.split_once('.').unwrap_or((repr.as_str(), ""));
        let mantissa = format!("{int_part}{frac_part}").parse().ok()?;
        Some(Decimal {
            mantissa,
            scale: frac_part.len(),
        })
    }

    /// The float nearest to this decimal. Zero is always positive zero.
    pub(crate) fn to_f64(&self) -> f64 {
        let digits = self.mantissa.magnitude().to_string();
        let digits = format!("{digits:0>width$}", width = self.scale + 1);
        let (int_part, frac_part) = digits.split_at(digits.len() - self.scale);
        let sign = if self.mantissa.is_negative() { "-" } else { "" };
        let repr = if frac_part.is_empty() {
            format!("{sign}{int_part}")
        } else {
            format!("{sign}{int_part}.{frac_part}")
        };
        repr.parse().unwrap_or(f64::NAN)
    }

    /// Round to `places` decimal places, half away from zero.
    pub(crate) fn round(self, places: usize) -> Decimal {
        if self.scale <= places {
            return self;
        }
        let divisor = pow10(self.scale - places);
        let negative = self.mantissa.is_negative();
        let mantissa = round_quotient(&self.mantissa, &divisor, negative);
        Decimal {
            mantissa,
            scale: places,
        }
    }

    /// The quotient `self / divisor`, rounded to `places` decimal places,
    /// half away from zero. Returns `None` when dividing by zero.
    pub(crate) fn div_round(&self, divisor: &Decimal, places: usize) -> Option<Decimal> {
        if divisor.mantissa.is_zero() {
            return None;
        }
        // self / divisor × 10^places, as a ratio of integers.
        let num = &self.mantissa * pow10(divisor.scale + places);
        let den = &divisor.mantissa * pow10(self.scale);
        let negative = num.is_negative() != den.is_negative();
        Some(Decimal {
            mantissa: round_quotient(&num, &den, negative),
            scale: places,
        })
    }

    /// The mantissa, rescaled to a scale at least as large as its own.
    fn mantissa_at(&self, scale: usize) -> BigInt {
        &self.mantissa * pow10(scale - self.scale)
    }
}

impl Add for Decimal {
    type Output = Decimal;

    fn add(self, other: Decimal) -> Decimal {
        let scale = self.scale.max(other.scale);
        Decimal {
            mantissa: self.mantissa_at(scale) + other.mantissa_at(scale),
            scale,
        }
    }
}

impl Mul for Decimal {
    type Output = Decimal;

    fn mul(self, other: Decimal) -> Decimal {
        Decimal {
            mantissa: self.mantissa * other.mantissa,
            scale: self.scale + other.scale,
        }
    }
}

impl Neg for Decimal {
    type Output = Decimal;

    fn neg(self) -> Decimal {
        Decimal {
            mantissa: -self.mantissa,
            scale: self.scale,
        }
    }
}

fn pow10(exp: usize) -> BigInt {
    // Scales come from float representations, a few hundred digits at most.
    let exp = u32::try_from(exp).unwrap_or(u32::MAX);
    BigInt::from(10_u8).pow(exp)
}

/// Integer division `num / den`, rounding the quotient half away from zero.
///
/// `negative` is the sign of the exact quotient.
fn round_quotient(num: &BigInt, den: &BigInt, negative: bool) -> BigInt {
    // Both truncate toward zero.
    let quotient = num / den;
    let remainder = num % den;
    if remainder.abs() * 2_u8 >= den.abs() {
        if negative {
            quotient - 1_u8
        } else {
            quotient + 1_u8
        }
    } else {
        quotient
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decimal(value: f64) -> Decimal {
        Decimal::from_f64(value).unwrap()
    }

    #[test]
    fn ties_round_away_from_zero() {
        assert_eq!(round_half_up(2.5, 0), 3.0);
        assert_eq!(round_half_up(-2.5, 0), -3.0);
        assert_eq!(round_half_up(0.125, 2), 0.13);
        assert_eq!(round_half_up(-0.125, 2), -0.13);
        assert_eq!(round_half_up(0.000015, 5), 0.00002);
    }

    #[test]
    fn ties_use_decimal_representation() {
        // Scaling by a power of ten lands just below the tie.
        assert!(1.005 * 100.0 < 100.5);
        assert_eq!(round_half_up(1.005, 2), 1.01);
        assert!(0.285 * 100.0 < 28.5);
        assert_eq!(round_half_up(0.285, 2), 0.29);
        assert_eq!(round_half_up(1.23455, 4), 1.2346);
        assert_eq!(round_half_up(2.9999999999999996, 4), 3.0);
        assert_eq!(round_half_up(1.0000000000000002, 4), 1.0);
    }

    #[test]
    fn carries() {
        assert_eq!(round_half_up(9.99995, 4), 10.0);
        assert_eq!(round_half_up(-99.999999, 5), -100.0);
        assert_eq!(round_half_up(0.99999, 0), 1.0);
    }

    #[test]
    fn short_values_are_unchanged() {
        assert_eq!(round_half_up(123.0, 2), 123.0);
        assert_eq!(round_half_up(-4.25, 2), -4.25);
        assert_eq!(round_half_up(1e20, 4), 1e20);
        assert_eq!(round_half_up(0.0, 4), 0.0);
    }

    #[test]
    fn rounding_to_zero_is_positive() {
        let r = round_half_up(-0.00001, 4);
        assert_eq!(r, 0.0);
        assert!(r.is_sign_positive());
    }

    #[test]
    fn non_finite_passes_through() {
        assert!(round_half_up(f64::NAN, 5).is_nan());
        assert_eq!(round_half_up(f64::INFINITY, 5), f64::INFINITY);
        assert_eq!(round_half_up(f64::NEG_INFINITY, 5), f64::NEG_INFINITY);
    }

    #[test]
    fn tiny_values() {
        assert_eq!(round_half_up(1e-7, 5), 0.0);
        assert_eq!(round_half_up(6e-6, 5), 0.00001);
        assert_eq!(round_half_up(6.123233995736766e-17, 5), 0.0);
    }

    #[test]
    fn exact_sums() {
        assert_ne!(0.1 + 0.2, 0.3);
        assert_eq!(decimal_sum(0.1, 0.2), 0.3);
        assert_eq!(decimal_sum(0.3, -0.1), 0.2);
        assert_eq!(decimal_sum(5.0, 3.0), 8.0);
        assert_eq!(decimal_sum(1e20, 1.0), 1e20);
        let zero = decimal_sum(-0.5, 0.5);
        assert_eq!(zero, 0.0);
        assert!(zero.is_sign_positive());
        assert_eq!(decimal_sum(f64::INFINITY, 1.0), f64::INFINITY);
        assert!(decimal_sum(f64::NAN, 1.0).is_nan());
    }

    #[test]
    fn rounded_sums_round_the_exact_value() {
        assert_eq!(rounded_sum(0.300015, -0.1, 5), 0.20002);
        assert_eq!(rounded_sum(-0.300015, 0.1, 5), -0.20002);
        assert_eq!(rounded_sum(0.300015, 0.1, 5), 0.40002);
        assert_eq!(rounded_sum(0.1, 0.2, 5), 0.3);
        assert_eq!(rounded_sum(-1.0, f64::NEG_INFINITY, 5), f64::NEG_INFINITY);
    }

    #[test]
    fn decimal_from_and_to_f64() {
        for value in [0.0, 1.0, -2.5, 0.1, 123.456, 1e-10, -1e20, 2.9999999999999996] {
            assert_eq!(decimal(value).to_f64(), value);
        }
        assert_eq!(decimal(-0.0).to_f64().to_bits(), 0.0_f64.to_bits());
        assert!(Decimal::from_f64(f64::NAN).is_none());
        assert!(Decimal::from_f64(f64::INFINITY).is_none());
    }

    #[test]
    fn decimal_arithmetic() {
        assert_eq!((decimal(0.1) + decimal(0.2)).to_f64(), 0.3);
        assert_eq!((decimal(1.5) * decimal(-0.2)).to_f64(), -0.3);
        assert_eq!((-decimal(0.7)).to_f64(), -0.7);
        assert_eq!(decimal(-0.125).round(2).to_f64(), -0.13);
        assert_eq!(decimal(7.0).round(2), decimal(7.0));
    }

    #[test]
    fn decimal_division() {
        let q = |x: f64, y: f64, places| decimal(x).div_round(&decimal(y), places).map(|d| d.to_f64());
        // 1 / 12.8 is exactly 0.078125.
        assert_eq!(q(1.0, 12.8, 5), Some(0.07813));
        assert_eq!(q(-1.0, 12.8, 5), Some(-0.07813));
        assert_eq!(q(1.0, -8.0, 2), Some(-0.13));
        assert_eq!(q(1.0, 3.0, 5), Some(0.33333));
        assert_eq!(q(2.0, 3.0, 5), Some(0.66667));
        assert_eq!(q(0.0, -3.0, 5), Some(0.0));
        assert_eq!(q(1.0, 0.0, 5), None);
    }
}
