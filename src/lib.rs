#![cfg_attr(not(any(test, feature = "std")), no_std)]
//! This crate provides compensated floating point arithmetic: numbers represented as the
//! unevaluated sum of 2 or 4 native floats (`f64` or `f32`), the "double-double" and
//! "quad-double" formats, giving roughly two or four times the precision of the native type
//! while staying in hardware floating point.
//!
//! # Introduction
//!
//! A [`CompensatedFloat<N, L>`] holds `N` limbs of type `L`, most significant first. The limbs
//! never overlap: each one is at most half an ulp of the one before it. So a [`df64`] carries
//! about 106 bits of significand (~32 decimal digits), and a [`qf64`] about 212 bits (~64
//! decimal digits), while the exponent range stays that of the limb type.
//!
//! Every operation is built out of *error-free transformations*, which compute a native sum or
//! product together with its exact rounding error, followed by a *renormalization* that folds
//! the resulting terms back into `N` non-overlapping limbs.
//!
//! The following references describe the algorithms:
//!
//!   - Hida, Li & Bailey, [Library for Double-Double and Quad-Double
//!     Arithmetic](https://www.davidhbailey.com/dhbpapers/qd.pdf) (2007)
//!   - Shewchuk, [Adaptive Precision Floating-Point Arithmetic and Fast Robust Geometric
//!     Predicates](https://people.eecs.berkeley.edu/~jrs/papers/robustr.pdf) (1997)
//!
//! Correctness is checked via extensive testing against an exact rational oracle.
//!
//! # Usage
//!
//! ```
//! // Use the standard shapes, or define your own.
//! # use compensated_float::CompensatedFloat;
//! use compensated_float::{df32, df64, qf32, qf64};  // 2 or 4 limbs of f32 or f64
//! type MyFloat = CompensatedFloat<4, f64>;  // Same as qf64
//!
//! // Create values from ints, native floats, constants, or their limbs.
//! # use compensated_float::{RoundFrom, RoundInto};
//! let a = df64::from(7);
//! let b = df64::round_from(u128::MAX);
//! let c = df32::round_from(0.1_f64);
//! let d = df64::from_components([1.0, 1e-20]);
//!
//! // Perform basic arithmetic and comparisons with the usual operators, also with primitives.
//! assert!(d - 1.0_f64 == df64::from(1e-20));
//! assert!((a / 3_i32 * 3_i32 - a).abs() < df64::EPSILON * 16_i32);
//! assert!(df64::ONE + df64::EPSILON > df64::ONE);
//! assert!((qf64::from(2).sqrt() * qf64::from(2).sqrt() - 2_i32).abs() < qf64::EPSILON * 16_i32);
//!
//! // Convert back to native floats, ints, or limbs.
//! assert_eq!(f64::round_from(b), 2.0_f64.powi(128));
//! assert_eq!(i32::round_from(df64::from(-7) / 2_i32), -3);
//! assert_eq!(c.components()[0], 0.1_f32);
//! ```
//!
//! With the `decimal` feature (enabled by default), values can also be parsed from and printed
//! to decimal strings, with all their digits:
//!
//! ```
//! # #[cfg(feature = "decimal")] {
//! use compensated_float::qf64;
//! let x: qf64 = "0.1".parse().unwrap();
//! let y: qf64 = "0.3".parse().unwrap();
//! assert!((x * 3_i32 - y).abs() < qf64::EPSILON);
//! assert_eq!(format!("{:.20}", x), "1.00000000000000000000e-1");
//! # }
//! ```
//!
//! # Features
//!
//!   - `std`: implement traits that need the standard library.
//!   - `decimal` (default): decimal parsing and printing, through exact rational arithmetic
//!     provided by [`malachite`](https://docs.rs/malachite).
//!   - `bench`: expose internals for the benchmarks; run them with `cargo bench -F bench`.
//!
//! # Performance
//!
//! As a *very rough estimate*, a [`df64`] addition or multiplication costs about 10 to 20 native
//! operations, and a [`qf64`] one about 50 to 100. Division and square root are several times
//! more expensive than multiplication.

mod compensated;
mod underlying;

pub use compensated::CompensatedFloat;
pub use underlying::Limb;

/// Double-double: 2 limbs of `f64`, about 106 bits of significand.
#[allow(non_camel_case_types)]
pub type df64 = CompensatedFloat<2, f64>;

/// Quad-double: 4 limbs of `f64`, about 212 bits of significand.
#[allow(non_camel_case_types)]
pub type qf64 = CompensatedFloat<4, f64>;

/// Double-single: 2 limbs of `f32`, about 48 bits of significand.
#[allow(non_camel_case_types)]
pub type df32 = CompensatedFloat<2, f32>;

/// Quad-single: 4 limbs of `f32`, about 96 bits of significand.
#[allow(non_camel_case_types)]
pub type qf32 = CompensatedFloat<4, f32>;

pub use compensated::convert::{RoundFrom, RoundInto};
pub use compensated::mixed::Operand;

#[cfg(any(test, feature = "decimal"))]
pub use compensated::rational::IsNotFinite;

#[cfg(feature = "decimal")]
pub use compensated::decimal::{ParseError, ParseErrorKind};

#[cfg(feature = "bench")]
pub mod bench;

/// Number of cases for each proptest; more in release mode, where they run much faster. In
/// release that is 2^16 cases, which is also the number of random divisions the division tests
/// need to cover.
#[cfg(test)]
const PROPTEST_CASES: u32 = if cfg!(debug_assertions) {0x1000} else {0x1_0000};
