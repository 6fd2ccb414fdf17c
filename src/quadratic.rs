// Copyright 2026 the Cardano Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadratic polynomials.

use core::hash::{Hash, Hasher};

use arrayvec::ArrayVec;

use crate::Complex;

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// A quadratic polynomial, `a x² + b x + c`.
///
/// The leading coefficient is not checked: with `a == 0` the root formulas
/// divide by zero, and the roots come out infinite or `NaN`.
///
/// Two quadratics are equal when all their coefficients have the same bit
/// pattern, so `0.0` and `-0.0` coefficients are distinguished and a
/// quadratic with a `NaN` coefficient is equal to itself.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quadratic {
    a: f64,
    b: f64,
    c: f64,
}

impl Quadratic {
    /// Create a new quadratic `a x² + b x + c`.
    #[inline]
    pub const fn new(a: f64, b: f64, c: f64) -> Quadratic {
        Quadratic { a, b, c }
    }

    /// The coefficient of `x²`.
    #[inline]
    pub fn a(&self) -> f64 {
        self.a
    }

    /// The coefficient of `x`.
    #[inline]
    pub fn b(&self) -> f64 {
        self.b
    }

    /// The constant term.
    #[inline]
    pub fn c(&self) -> f64 {
        self.c
    }

    /// The coefficients `[a, b, c]`, leading coefficient first.
    #[inline]
    pub fn coeffs(&self) -> [f64; 3] {
        [self.a, self.b, self.c]
    }

    /// The discriminant, `b² - 4ac`.
    #[inline]
    pub fn discriminant(&self) -> f64 {
        self.b * self.b - 4.0 * self.a * self.c
    }

    /// Evaluate this quadratic at `x`, using Horner's scheme.
    #[inline]
    pub fn eval(&self, x: f64) -> f64 {
        (self.a * x + self.b) * x + self.c
    }

    /// Does this quadratic have real roots? That is, is the discriminant
    /// non-negative?
    #[inline]
    pub fn has_real_roots(&self) -> bool {
        self.discriminant() >= 0.0
    }

    /// The real roots of this quadratic.
    ///
    /// Returns nothing if the discriminant is negative. Otherwise returns
    /// both roots, `(-b + √Δ) / 2a` first; a double root is returned twice.
    pub fn real_roots(&self) -> ArrayVec<f64, 2> {
        let mut result = ArrayVec::new();
        if !self.has_real_roots() {
            return result;
        }
        let sq = self.discriminant().sqrt();
        let two_a = 2.0 * self.a;
        result.push((-self.b + sq) / two_a);
        result.push((-self.b - sq) / two_a);
        result
    }

    /// Both roots of this quadratic, as complex numbers.
    ///
    /// When the discriminant is negative the roots are the conjugate pair
    /// `-b/2a ± i √(-Δ)/2a`, with the `+` root first. Otherwise they are
    /// the [`real_roots`](Quadratic::real_roots), with zero imaginary part.
    ///
    /// # Examples
    ///
    /// ```
    /// use cardano::{Complex, Quadratic};
    ///
    /// let [r0, r1] = Quadratic::new(1.0, 0.0, 1.0).complex_roots();
    /// assert_eq!(r0, Complex::I);
    /// assert_eq!(r1, -Complex::I);
    /// ```
    pub fn complex_roots(&self) -> [Complex; 2] {
        let disc = self.discriminant();
        let two_a = 2.0 * self.a;
        if disc < 0.0 {
            let re = -self.b / two_a;
            let im = (-disc).sqrt() / two_a;
            [Complex::new(re, im), Complex::new(re, -im)]
        } else {
            let sq = disc.sqrt();
            [
                Complex::new((-self.b + sq) / two_a, 0.0),
                Complex::new((-self.b - sq) / two_a, 0.0),
            ]
        }
    }
}

impl PartialEq for Quadratic {
    fn eq(&self, other: &Quadratic) -> bool {
        self.a.to_bits() == other.a.to_bits()
            && self.b.to_bits() == other.b.to_bits()
            && self.c.to_bits() == other.c.to_bits()
    }
}

impl Eq for Quadratic {}

impl Hash for Quadratic {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.a.to_bits().hash(state);
        self.b.to_bits().hash(state);
        self.c.to_bits().hash(state);
    }
}
