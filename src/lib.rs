// Copyright 2026 the Cardano Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Closed-form roots of quadratic and cubic polynomials.
//!
//! The cardano library finds the roots of `a x² + b x + c` and
//! `a x³ + b x² + c x + d` with the textbook closed-form methods: the
//! quadratic formula, and Cardano's method on the depressed cubic (falling
//! back to the trigonometric form when all three roots are real). Roots
//! are reported both as plain real values and as [`Complex`] numbers, so
//! that callers get a uniform complex-valued view of every root.
//!
//! Results follow a fixed decimal rounding policy: real roots of a cubic
//! are rounded to 4 decimal places, and complex products, reciprocals and
//! powers to 5, always rounding half away from zero on the decimal
//! representation. See [`round`] for the details.
//!
//! # Examples
//!
//! Solving a cubic with one real root and a complex-conjugate pair:
//! ```
//! use cardano::{Complex, Cubic};
//!
//! let cubic = Cubic::new(1.0, -7.0, 41.0, -87.0).unwrap();
//! assert_eq!(cubic.real_roots().as_slice(), &[3.0]);
//!
//! let roots = cubic.roots();
//! assert_eq!(roots[0], Complex::new(3.0, 0.0));
//! assert!((roots[1] - Complex::new(2.0, 5.0)).abs() < 1e-9);
//! assert!((roots[2] - Complex::new(2.0, -5.0)).abs() < 1e-9);
//! ```
//!
//! Quadratics and cubics render as text, with the formatter's precision
//! giving the maximum number of decimal places:
//! ```
//! use cardano::Quadratic;
//!
//! let q = Quadratic::new(1.0, 1.0, -6.0);
//! assert_eq!(format!("{q}"), "x² + x - 6");
//! assert_eq!(q.real_roots().as_slice(), &[2.0, -3.0]);
//! ```
//!
//! # Features
//!
//! This crate either uses the standard library or the [`libm`] crate for
//! math functionality. The `std` feature is enabled by default, but can be
//! disabled, as long as the `libm` feature is enabled. This is useful for
//! `no_std` environments. The crate still uses the `alloc` crate
//! regardless, for decimal rounding.
//!
//! The `serde`, `schemars` and `mint` features add serialization, JSON
//! schema and interop support. The `tracing` feature emits trace-level
//! events when a cubic's root structure is classified and when synthetic
//! division rejects a value that is not a root.
//!
//! [`libm`]: https://docs.rs/libm

// LINEBENDER LINT SET - lib.rs - v1
// See https://linebender.org/wiki/canonical-lints/
// These lints aren't included in Cargo.toml because they
// shouldn't apply to examples and tests
#![warn(unused_crate_dependencies)]
#![warn(clippy::print_stdout, clippy::print_stderr)]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![allow(
    clippy::unreadable_literal,
    clippy::many_single_char_names,
    clippy::excessive_precision,
    clippy::float_cmp
)]
// The following lints are part of the Linebender standard set,
// but resolving them has been deferred for now.
#![allow(
    clippy::use_self,
    clippy::exhaustive_enums,
    clippy::missing_assert_message,
    clippy::unseparated_literal_suffix,
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason
)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("cardano requires either the `std` or `libm` feature");

// Suppress the unused_crate_dependencies lint when both std and libm are specified.
#[cfg(all(feature = "std", feature = "libm"))]
use libm as _;

extern crate alloc;

/// Emits a trace-level event when the `tracing` feature is enabled.
macro_rules! trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        tracing::trace!($($arg)*);
    };
}

pub mod approx;
pub mod common;
mod complex;
mod cubic;
mod display;
mod quadratic;
pub mod round;

pub use crate::complex::*;
pub use crate::cubic::*;
pub use crate::quadratic::*;
