// Copyright 2026 the Cardano Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Complex numbers.

use core::f64::consts::PI;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Add, Div, Mul, Neg, Sub};

use crate::round::{decimal_sum, round_half_up, rounded_sum, Decimal, COMPLEX_PLACES};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// A complex number.
///
/// This is an immutable value type: every operation returns a new
/// `Complex`. Equality compares both components exactly, with no tolerance.
///
/// Arithmetic follows a fixed decimal policy. Addition and subtraction are
/// exact on the decimal representations of the components, so
/// `0.1 + 0.2` is `0.3`, and are not rounded. Multiplication, [`recip`] (and
/// so division), [`powi`] and [`powf`] round both components to
/// [`COMPLEX_PLACES`] decimal places, half away from zero. See
/// [`round_half_up`].
///
/// Hashing is consistent with `==`: `0.0` and `-0.0` hash alike. `Complex`
/// is not `Eq`, since `NaN` components are not equal to themselves.
///
/// [`recip`]: Complex::recip
/// [`powi`]: Complex::powi
/// [`powf`]: Complex::powf
#[derive(Clone, Copy, Default, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Complex {
    re: f64,
    im: f64,
}

/// A complex number in polar form, `r (cos θ + i sin θ)`.
///
/// This is a plain pair of values, produced by [`Complex::to_polar`].
#[derive(Clone, Copy, Default, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Polar {
    /// The modulus `r`.
    pub magnitude: f64,
    /// The angle `θ`, in radians.
    pub angle: f64,
}

impl Complex {
    /// The complex number `0 + 0i`.
    pub const ZERO: Complex = Complex::new(0., 0.);

    /// The complex number `1 + 0i`.
    pub const ONE: Complex = Complex::new(1., 0.);

    /// The imaginary unit `i`.
    pub const I: Complex = Complex::new(0., 1.);

    /// Create a new complex number from its real and imaginary parts.
    #[inline]
    pub const fn new(re: f64, im: f64) -> Complex {
        Complex { re, im }
    }

    /// A complex number whose components are rounded to [`COMPLEX_PLACES`].
    fn rounded(re: f64, im: f64) -> Complex {
        Complex::new(
            round_half_up(re, COMPLEX_PLACES),
            round_half_up(im, COMPLEX_PLACES),
        )
    }

    /// The real part.
    ///
    /// Negative zero is reported as positive zero.
    #[inline]
    pub fn re(self) -> f64 {
        if self.re == 0.0 {
            0.0
        } else {
            self.re
        }
    }

    /// The imaginary part.
    ///
    /// Negative zero is reported as positive zero.
    #[inline]
    pub fn im(self) -> f64 {
        if self.im == 0.0 {
            0.0
        } else {
            self.im
        }
    }

    /// Is this number finite?
    #[inline]
    pub fn is_finite(self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }

    /// Is this number `NaN`?
    #[inline]
    pub fn is_nan(self) -> bool {
        self.re.is_nan() || self.im.is_nan()
    }

    /// The modulus `|z|`, the distance from the origin.
    ///
    /// This uses [`f64::hypot`], so it doesn't overflow for large components.
    #[inline]
    pub fn abs(self) -> f64 {
        self.re.hypot(self.im)
    }

    /// The argument of this number, in radians, in the range `(-π, π]`.
    #[inline]
    pub fn arg(self) -> f64 {
        self.im.atan2(self.re)
    }

    /// Convert to polar form.
    ///
    /// The magnitude is `sqrt(re² + im²)`. The angle is `atan(im / re)`,
    /// shifted by `π` when `re < 0`.
    ///
    /// Note that when `re == 0` the angle is always `0`, even for a purely
    /// imaginary number, so the angle does not agree with [`arg`] there.
    /// [`powf`], [`sqrt`] and [`cbrt`] inherit this.
    ///
    /// [`arg`]: Complex::arg
    /// [`powf`]: Complex::powf
    /// [`sqrt`]: Complex::sqrt
    /// [`cbrt`]: Complex::cbrt
    pub fn to_polar(self) -> Polar {
        let magnitude = (self.re * self.re + self.im * self.im).sqrt();
        let angle = if self.re > 0.0 {
            (self.im / self.re).atan()
        } else if self.re < 0.0 {
            (self.im / self.re).atan() + PI
        } else {
            0.0
        };
        Polar { magnitude, angle }
    }

    /// The complex conjugate, `re - im i`.
    #[inline]
    #[must_use]
    pub fn conjugate(self) -> Complex {
        Complex::new(self.re, -self.im)
    }

    /// The reciprocal `1 / z`, rounded to [`COMPLEX_PLACES`].
    ///
    /// The quotients `re / |z|²` and `-im / |z|²` are computed exactly in
    /// decimal before rounding, so exact ties round away from zero.
    ///
    /// The reciprocal of zero does not panic: its components are `NaN`.
    #[must_use]
    pub fn recip(self) -> Complex {
        let (Some(re), Some(im)) = (Decimal::from_f64(self.re), Decimal::from_f64(self.im)) else {
            let scale = self.re * self.re + self.im * self.im;
            return Complex::rounded(self.re / scale, -self.im / scale);
        };
        let scale = re.clone() * re.clone() + im.clone() * im.clone();
        let part = |d: Decimal| {
            d.div_round(&scale, COMPLEX_PLACES)
                .map_or(f64::NAN, |q| q.to_f64())
        };
        Complex::new(part(re), part(-im))
    }

    /// The complex exponential `e^z`.
    #[must_use]
    pub fn exp(self) -> Complex {
        let r = self.re.exp();
        let (sin, cos) = self.im.sin_cos();
        Complex::new(r * cos, r * sin)
    }

    /// The principal branch of the natural logarithm, `ln|z| + i arg(z)`.
    #[must_use]
    pub fn ln(self) -> Complex {
        Complex::new(self.abs().ln(), self.arg())
    }

    /// Raise to a real power, using De Moivre's theorem.
    ///
    /// With `z = r (cos θ + i sin θ)` from [`to_polar`], this computes
    /// `r^n (cos nθ + i sin nθ)` and rounds to [`COMPLEX_PLACES`].
    ///
    /// [`to_polar`]: Complex::to_polar
    #[must_use]
    pub fn powf(self, n: f64) -> Complex {
        let Polar { magnitude, angle } = self.to_polar();
        let r = magnitude.powf(n);
        let (sin, cos) = (n * angle).sin_cos();
        Complex::rounded(r * cos, r * sin)
    }

    /// Raise to a non-negative integer power, by repeated squaring.
    ///
    /// Every intermediate product is a complex multiplication, and so is
    /// rounded to [`COMPLEX_PLACES`].
    ///
    /// The zeroth power is defined to be zero, not one:
    ///
    /// ```
    /// use cardano::Complex;
    ///
    /// assert_eq!(Complex::new(1.0, 0.0).powi(0), Complex::ZERO);
    /// assert_eq!(Complex::new(1.0, 1.0).powi(2), Complex::new(0.0, 2.0));
    /// ```
    #[must_use]
    pub fn powi(self, n: u32) -> Complex {
        match n {
            0 => Complex::ZERO,
            1 => self,
            _ => {
                let half = self.powi(n / 2);
                let square = half * half;
                if n % 2 == 0 {
                    square
                } else {
                    self * square
                }
            }
        }
    }

    /// Both square roots, `z^(1/2)` and its negation.
    ///
    /// Two values are always returned, even when they coincide.
    pub fn sqrt(self) -> [Complex; 2] {
        let root = self.powf(0.5);
        [root, -root]
    }

    /// The cube root `z^(1/3)`, computed with [`powf`](Complex::powf).
    #[must_use]
    pub fn cbrt(self) -> Complex {
        self.powf(1. / 3.)
    }

    /// The complex sine.
    #[must_use]
    pub fn sin(self) -> Complex {
        Complex::new(
            self.re.sin() * self.im.cosh(),
            self.re.cos() * self.im.sinh(),
        )
    }

    /// The complex cosine.
    #[must_use]
    pub fn cos(self) -> Complex {
        Complex::new(
            self.re.cos() * self.im.cosh(),
            -self.re.sin() * self.im.sinh(),
        )
    }

    /// The complex tangent, `sin z / cos z`.
    #[must_use]
    pub fn tan(self) -> Complex {
        self.sin() / self.cos()
    }

    /// The complex hyperbolic sine.
    #[must_use]
    pub fn sinh(self) -> Complex {
        Complex::new(
            self.re.sinh() * self.im.cos(),
            self.re.cosh() * self.im.sin(),
        )
    }

    /// The complex hyperbolic cosine.
    #[must_use]
    pub fn cosh(self) -> Complex {
        Complex::new(
            self.re.cosh() * self.im.cos(),
            self.re.sinh() * self.im.sin(),
        )
    }

    /// The complex hyperbolic tangent, `sinh z / cosh z`.
    #[must_use]
    pub fn tanh(self) -> Complex {
        self.sinh() / self.cosh()
    }
}

impl From<f64> for Complex {
    #[inline]
    fn from(re: f64) -> Complex {
        Complex::new(re, 0.0)
    }
}

impl From<(f64, f64)> for Complex {
    #[inline]
    fn from(v: (f64, f64)) -> Complex {
        Complex::new(v.0, v.1)
    }
}

impl From<Complex> for (f64, f64) {
    #[inline]
    fn from(z: Complex) -> (f64, f64) {
        (z.re, z.im)
    }
}

impl Hash for Complex {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // `re()` and `im()` fold `-0.0` into `0.0`, matching `==`.
        self.re().to_bits().hash(state);
        self.im().to_bits().hash(state);
    }
}

impl Add for Complex {
    type Output = Complex;

    #[inline]
    fn add(self, other: Complex) -> Complex {
        Complex::new(
            decimal_sum(self.re, other.re),
            decimal_sum(self.im, other.im),
        )
    }
}

impl Sub for Complex {
    type Output = Complex;

    #[inline]
    fn sub(self, other: Complex) -> Complex {
        Complex::new(
            decimal_sum(self.re, -other.re),
            decimal_sum(self.im, -other.im),
        )
    }
}

impl Mul for Complex {
    type Output = Complex;

    /// Note: the four partial products are floats, but they are combined
    /// exactly in decimal and then rounded to [`COMPLEX_PLACES`].
    #[inline]
    fn mul(self, other: Complex) -> Complex {
        Complex::new(
            rounded_sum(self.re * other.re, -(self.im * other.im), COMPLEX_PLACES),
            rounded_sum(self.re * other.im, self.im * other.re, COMPLEX_PLACES),
        )
    }
}

impl Mul<f64> for Complex {
    type Output = Complex;

    /// Scaling by a real number is not rounded.
    #[inline]
    fn mul(self, other: f64) -> Complex {
        Complex::new(self.re * other, self.im * other)
    }
}

impl Mul<Complex> for f64 {
    type Output = Complex;

    #[inline]
    fn mul(self, other: Complex) -> Complex {
        other * self
    }
}

impl Div for Complex {
    type Output = Complex;

    /// Note: division is implemented by multiplying by the reciprocal, and
    /// both steps round to [`COMPLEX_PLACES`].
    #[inline]
    #[allow(clippy::suspicious_arithmetic_impl)]
    fn div(self, other: Complex) -> Complex {
        self * other.recip()
    }
}

impl Neg for Complex {
    type Output = Complex;

    #[inline]
    fn neg(self) -> Complex {
        Complex::new(-self.re, -self.im)
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (re, im) = (self.re(), self.im());
        if im == 0.0 {
            return fmt::Display::fmt(&re, f);
        }
        if re == 0.0 {
            if im == -1.0 {
                return write!(f, "-i");
            } else if im != 1.0 {
                fmt::Display::fmt(&im, f)?;
            }
            return write!(f, "i");
        }
        fmt::Display::fmt(&re, f)?;
        if im < 0.0 {
            write!(f, " - ")?;
        } else {
            write!(f, " + ")?;
        }
        if im.abs() != 1.0 {
            fmt::Display::fmt(&im.abs(), f)?;
        }
        write!(f, "i")
    }
}

impl fmt::Display for Polar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.4} cos({:.4}) + isin({:.4})",
            self.magnitude, self.angle, self.angle
        )
    }
}

// Conversions to and from mint
#[cfg(feature = "mint")]
impl From<Complex> for mint::Vector2<f64> {
    #[inline]
    fn from(z: Complex) -> mint::Vector2<f64> {
        mint::Vector2 { x: z.re, y: z.im }
    }
}

#[cfg(feature = "mint")]
impl From<mint::Vector2<f64>> for Complex {
    #[inline]
    fn from(v: mint::Vector2<f64>) -> Complex {
        Complex::new(v.x, v.y)
    }
}
