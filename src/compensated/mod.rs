//! This module and its submodules contain a software implementation of compensated ("multi-limb",
//! "double-double", "quad-double") floating point: a value is the unevaluated sum of `N` native
//! floats, and arithmetic is carried out with error-free transformations so that the rounding
//! error of every native operation is kept rather than lost.
//!
//! Some notation used in the comments:
//!
//!   - **Limb, component**: one of the native floats `c0, c1, …`; `c0` is the most significant.
//!   - **p**: the significand width of the limb type in bits (53 for `f64`, 24 for `f32`).
//!   - **fl(x)**: `x` rounded to the nearest limb, ties to even.
//!   - **Canonical**: the components are non-overlapping and decreasing, i.e. for every adjacent
//!     pair `fl(cᵢ + cᵢ₊₁) == cᵢ`, and zero components only appear at the end.
//!
//! The references for the algorithms are Hida, Li & Bailey, "Library for Double-Double and
//! Quad-Double Arithmetic" (2007), and Shewchuk, "Adaptive Precision Floating-Point Arithmetic
//! and Fast Robust Geometric Predicates" (1997).

use crate::underlying::{Sealed, quick_two_sum, two_prod, two_sum};

/// The widest `N` supported; scratch buffers for raw terms are sized from it.
pub(crate) const MAX_LIMBS: usize = 4;

/// A compensated floating point number made of `N` limbs of native type `L`, representing the
/// exact sum of its limbs.
///
/// Examples:
///
/// ```
/// # use compensated_float::CompensatedFloat;
/// type Foo = CompensatedFloat<2, f64>;  // A double-double: ~32 significant decimal digits
/// type Bar = CompensatedFloat<4, f32>;  // Four f32 limbs: ~27 significant decimal digits
/// ```
///
/// Values are always kept in canonical form (see the [module docs](self)): every way of
/// creating one goes through renormalization, and a NaN or an infinity lives in `c0` alone
/// with the other limbs zero.
pub struct CompensatedFloat<
  const N: usize,
  L: crate::Limb,
> (pub(crate) [L; N]);

/// Basics
mod basics;

/// Constants (zero, one, max, epsilon, etc)
mod consts;

/// Renormalization of raw terms into canonical components
mod renormalize;

/// Trait impls (Clone, Copy, PartialEq, PartialOrd, Default, Sum, Product)
mod traits;

/// Classification (NaN, infinite, zero, sign)
mod classify;

/// Negation, absolute value
mod unary;

/// Binary arithmetic operators
mod ops;

/// Square root, rounding to integers, scaling by powers of two
mod math;

/// Conversions to and from native types and between compensated types
pub(crate) mod convert;

/// Arithmetic with a mix of primitive and compensated operands
pub(crate) mod mixed;

/// Exact conversion to and from arbitrary precision rationals
#[cfg(any(test, feature = "decimal"))]
pub(crate) mod rational;

/// Decimal strings
#[cfg(feature = "decimal")]
pub(crate) mod decimal;

/// Debug and Display
mod fmt;
