// Copyright 2026 the Cardano Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text rendering of polynomials.

use core::fmt;

use crate::round::{round_half_up, DEFAULT_PRECISION};
use crate::{Cubic, Quadratic};

#[cfg(not(feature = "std"))]
use crate::common::FloatFuncs;

const POWERS: [&str; 4] = ["", "x", "x²", "x³"];

/// Write a polynomial, given its coefficients with the leading one first.
///
/// Each coefficient is rounded to the formatter's precision. Terms that round
/// to zero are dropped and unit coefficients are left implicit.
fn write_poly(f: &mut fmt::Formatter<'_>, coeffs: &[f64]) -> fmt::Result {
    let places = f.precision().unwrap_or(DEFAULT_PRECISION);
    let mut first = true;
    for (i, &coeff) in coeffs.iter().enumerate() {
        let power = coeffs.len() - 1 - i;
        let c = round_half_up(coeff, places);
        if c == 0.0 {
            continue;
        }
        if first {
            if c < 0.0 {
                f.write_str("-")?;
            }
        } else if c < 0.0 {
            f.write_str(" - ")?;
        } else {
            f.write_str(" + ")?;
        }
        let magnitude = c.abs();
        // Tested after rounding: `0.99999` at 4 places shows as `x²`, not `1x²`.
        if magnitude != 1.0 || power == 0 {
            write!(f, "{magnitude}")?;
        }
        f.write_str(POWERS[power])?;
        first = false;
    }
    if first {
        f.write_str("0")?;
    }
    Ok(())
}

impl fmt::Display for Quadratic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_poly(f, &self.coeffs())
    }
}

impl fmt::Display for Cubic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_poly(f, &self.coeffs())
    }
}
