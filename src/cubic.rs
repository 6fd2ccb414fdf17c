// Copyright 2026 the Cardano Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cubic polynomials, solved with Cardano's method.

use core::f64::consts::PI;
use core::fmt;
use core::hash::{Hash, Hasher};

use arrayvec::ArrayVec;
use smallvec::SmallVec;

use crate::approx::approx_zero;
use crate::common::real_cbrt;
use crate::round::{round_half_up, ROOT_PLACES};
use crate::{Complex, Quadratic};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

/// An error which can be returned when constructing a polynomial.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum PolyError {
    /// The leading coefficient was zero, so the polynomial has a lower degree.
    ZeroLeadingCoefficient,
}

impl fmt::Display for PolyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolyError::ZeroLeadingCoefficient => {
                write!(f, "leading coefficient of a cubic must be non-zero")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PolyError {}

/// The arrangement of a cubic's roots, as decided by the sign of the
/// discriminant of its depressed form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RootStructure {
    /// The discriminant is approximately zero: all roots are real, and at
    /// least two of them coincide.
    Repeated,
    /// The discriminant is positive: one real root and a complex-conjugate
    /// pair.
    OneReal,
    /// The discriminant is negative: three distinct real roots.
    ThreeReal,
    /// The discriminant is `NaN`, because a coefficient is not finite.
    Indeterminate,
}

/// The depressed form `t³ + p t + q` of a cubic.
///
/// The roots of the original cubic are `x = t - shift`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DepressedCubic {
    /// One third of the normalized quadratic coefficient, `b / 3a`.
    pub shift: f64,
    /// The coefficient of `t`.
    pub p: f64,
    /// The constant term.
    pub q: f64,
}

impl DepressedCubic {
    /// The discriminant, `q²/4 + p³/27`.
    #[inline]
    pub fn discriminant(&self) -> f64 {
        self.q * self.q / 4.0 + self.p * self.p * self.p / 27.0
    }

    /// Classify the roots by the sign of the discriminant.
    ///
    /// The zero test is approximate, using [`approx_zero`].
    pub fn structure(&self) -> RootStructure {
        let delta = self.discriminant();
        if approx_zero(delta) {
            RootStructure::Repeated
        } else if delta > 0.0 {
            RootStructure::OneReal
        } else if delta < 0.0 {
            RootStructure::ThreeReal
        } else {
            RootStructure::Indeterminate
        }
    }
}

/// A cubic polynomial, `a x³ + b x² + c x + d`, with `a != 0`.
///
/// Like [`Quadratic`], equality and hashing are bitwise on the coefficients.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "[f64; 4]", into = "[f64; 4]")
)]
pub struct Cubic {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
}

impl Cubic {
    /// Create a new cubic `a x³ + b x² + c x + d`.
    ///
    /// # Errors
    ///
    /// Returns [`PolyError::ZeroLeadingCoefficient`] if `a` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use cardano::{Cubic, PolyError};
    ///
    /// assert!(Cubic::new(1.0, 0.0, 0.0, -1.0).is_ok());
    /// assert_eq!(
    ///     Cubic::new(0.0, 1.0, 2.0, 3.0),
    ///     Err(PolyError::ZeroLeadingCoefficient)
    /// );
    /// ```
    pub fn new(a: f64, b: f64, c: f64, d: f64) -> Result<Cubic, PolyError> {
        if a == 0.0 {
            return Err(PolyError::ZeroLeadingCoefficient);
        }
        Ok(Cubic { a, b, c, d })
    }

    /// The coefficient of `x³`.
    #[inline]
    pub fn a(&self) -> f64 {
        self.a
    }

    /// The coefficient of `x²`.
    #[inline]
    pub fn b(&self) -> f64 {
        self.b
    }

    /// The coefficient of `x`.
    #[inline]
    pub fn c(&self) -> f64 {
        self.c
    }

    /// The constant term.
    #[inline]
    pub fn d(&self) -> f64 {
        self.d
    }

    /// The coefficients `[a, b, c, d]`, leading coefficient first.
    #[inline]
    pub fn coeffs(&self) -> [f64; 4] {
        [self.a, self.b, self.c, self.d]
    }

    /// Evaluate this cubic at `x`, using Horner's scheme.
    #[inline]
    pub fn eval(&self, x: f64) -> f64 {
        ((self.a * x + self.b) * x + self.c) * x + self.d
    }

    /// Normalize by the leading coefficient and substitute `x = t - b/3a`,
    /// removing the quadratic term.
    pub fn depressed(&self) -> DepressedCubic {
        let a1 = self.b / self.a;
        let b1 = self.c / self.a;
        let c1 = self.d / self.a;
        let p = b1 - a1 * a1 / 3.0;
        let q = 2.0 * a1 * a1 * a1 / 27.0 - a1 * b1 / 3.0 + c1;
        DepressedCubic {
            shift: a1 / 3.0,
            p,
            q,
        }
    }

    /// Classify the roots of this cubic.
    #[inline]
    pub fn classify(&self) -> RootStructure {
        self.depressed().structure()
    }

    /// The real roots of this cubic, each rounded to 4 decimal places.
    ///
    /// Depending on [`classify`](Cubic::classify), this returns:
    ///
    /// - `Repeated`: three roots, `-2u - shift` followed by `u - shift`
    ///   twice, where `u` is the cube root of `q/2`.
    /// - `OneReal`: the single real root, from Cardano's formula.
    /// - `ThreeReal`: three roots, from the trigonometric form.
    /// - `Indeterminate`: nothing.
    ///
    /// Roots are not sorted.
    ///
    /// # Examples
    ///
    /// ```
    /// use cardano::Cubic;
    ///
    /// // (x - 1)(x + 1)(x - 2)
    /// let cubic = Cubic::new(1.0, -2.0, -1.0, 2.0).unwrap();
    /// assert_eq!(cubic.real_roots().as_slice(), &[1.0, -1.0, 2.0]);
    /// ```
    pub fn real_roots(&self) -> ArrayVec<f64, 3> {
        let (_, roots) = self.solve();
        roots
            .into_iter()
            .map(|x| round_half_up(x, ROOT_PLACES))
            .collect()
    }

    /// All roots of this cubic, as complex numbers.
    ///
    /// The real roots come first, rounded as in
    /// [`real_roots`](Cubic::real_roots). When there is one real root, the
    /// cubic is divided by it and the complex-conjugate pair is found from
    /// the quadratic quotient. The division uses the unrounded root. If its
    /// remainder is not approximately zero, the pair is left out and only
    /// the real root is returned.
    pub fn roots(&self) -> ArrayVec<Complex, 3> {
        let (structure, raw) = self.solve();
        let mut result: ArrayVec<Complex, 3> = raw
            .iter()
            .map(|&x| Complex::new(round_half_up(x, ROOT_PLACES), 0.0))
            .collect();
        if let (RootStructure::OneReal, Some(&x)) = (structure, raw.first()) {
            if let Some(quotient) = self.synthetic_division(x) {
                result.extend(quotient.complex_roots());
            }
        }
        result
    }

    /// Divide this cubic by `(x - root)`.
    ///
    /// Returns the quadratic quotient, or `None` if the remainder is not
    /// approximately zero, meaning `root` is not a root of this cubic.
    ///
    /// # Examples
    ///
    /// ```
    /// use cardano::{Cubic, Quadratic};
    ///
    /// let cubic = Cubic::new(1.0, -7.0, 41.0, -87.0).unwrap();
    /// assert_eq!(cubic.synthetic_division(3.0), Some(Quadratic::new(1.0, -4.0, 29.0)));
    /// assert_eq!(cubic.synthetic_division(2.0), None);
    /// ```
    pub fn synthetic_division(&self, root: f64) -> Option<Quadratic> {
        let b1 = self.a * root + self.b;
        let c1 = b1 * root + self.c;
        let remainder = c1 * root + self.d;
        if approx_zero(remainder) {
            Some(Quadratic::new(self.a, b1, c1))
        } else {
            trace!(root, remainder, "synthetic division left a remainder");
            None
        }
    }

    /// Candidate rational roots, `±i/a` for each positive integer `i` that
    /// divides the constant term exactly.
    ///
    /// Candidates come in pairs, positive first, by increasing `i`. The list
    /// is empty when `d` is zero, not finite, or too large for consecutive
    /// integers to be represented exactly.
    pub fn probable_roots(&self) -> SmallVec<[f64; 8]> {
        // 2^53; past this, `i + 1.0 == i`.
        const MAX_EXACT_INT: f64 = 9007199254740992.0;
        let mut result = SmallVec::new();
        let bound = self.d.abs();
        if !bound.is_finite() || bound >= MAX_EXACT_INT {
            return result;
        }
        let mut i = 1.0;
        while i <= bound {
            if self.d % i == 0.0 {
                result.push(i / self.a);
                result.push(-i / self.a);
            }
            i += 1.0;
        }
        result
    }

    /// The unrounded real roots, with the structure that produced them.
    fn solve(&self) -> (RootStructure, ArrayVec<f64, 3>) {
        let dep = self.depressed();
        let structure = dep.structure();
        trace!(
            a = self.a,
            b = self.b,
            c = self.c,
            d = self.d,
            discriminant = dep.discriminant(),
            ?structure,
            "classified cubic"
        );
        let mut roots = ArrayVec::new();
        match structure {
            RootStructure::Repeated => {
                let u = real_cbrt(dep.q / 2.0);
                let x2 = u - dep.shift;
                roots.push(-2.0 * u - dep.shift);
                roots.push(x2);
                roots.push(x2);
            }
            RootStructure::OneReal => {
                let sq = dep.discriminant().sqrt();
                let half_q = dep.q / 2.0;
                roots.push(real_cbrt(-half_q + sq) + real_cbrt(-half_q - sq) - dep.shift);
            }
            RootStructure::ThreeReal => {
                let root3 = 3.0_f64.sqrt();
                let root_minus_p = (-dep.p).sqrt();
                // Mathematically in [-1, 1]; clamp the rounding error.
                let ratio = (3.0 * root3 * dep.q / (2.0 * root_minus_p.powi(3))).clamp(-1.0, 1.0);
                let theta = (1.0 / 3.0) * ratio.asin();
                let scale = 2.0 / root3 * root_minus_p;
                roots.push(scale * theta.sin() - dep.shift);
                roots.push(-scale * (theta + PI / 3.0).sin() - dep.shift);
                roots.push(scale * (theta + PI / 6.0).cos() - dep.shift);
            }
            RootStructure::Indeterminate => {}
        }
        (structure, roots)
    }
}

impl TryFrom<[f64; 4]> for Cubic {
    type Error = PolyError;

    #[inline]
    fn try_from([a, b, c, d]: [f64; 4]) -> Result<Cubic, PolyError> {
        Cubic::new(a, b, c, d)
    }
}

impl From<Cubic> for [f64; 4] {
    #[inline]
    fn from(cubic: Cubic) -> [f64; 4] {
        cubic.coeffs()
    }
}

impl PartialEq for Cubic {
    fn eq(&self, other: &Cubic) -> bool {
        self.coeffs()
            .iter()
            .zip(other.coeffs())
            .all(|(x, y)| x.to_bits() == y.to_bits())
    }
}

impl Eq for Cubic {}

impl Hash for Cubic {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for x in self.coeffs() {
            x.to_bits().hash(state);
        }
    }
}
