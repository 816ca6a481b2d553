//! This module contains all the native floating point operations needed by the compensated
//! arithmetic. These are hidden from the end-user, which only sees the sealed [`Limb`] trait,
//! implemented for `f32` and `f64`.
//!
//! Everything that is not a plain IEEE add/sub/mul/div (sqrt, fma, floor, frexp, …) goes
//! through [`libm`], so that the crate stays `no_std`.

mod eft;

pub(crate) use eft::{quick_two_sum, two_prod, two_sum};
#[cfg(any(test, feature = "bench"))]
pub(crate) use eft::{two_prod_dekker, two_prod_fma};

/// The trait for the native floating point types that can be used as the limbs of a
/// [`CompensatedFloat`](crate::CompensatedFloat) (only satisfied by `f32` and `f64`).
///
/// This is a *sealed* type.
pub trait Limb: Sealed {}

/// Actual operations implemented here.
pub trait Sealed:
  Copy + Clone +
  PartialEq + PartialOrd +
  Default +
  core::fmt::Debug + core::fmt::Display + core::fmt::LowerExp +
  core::ops::Add<Self, Output=Self> + core::ops::AddAssign<Self> +
  core::ops::Sub<Self, Output=Self> + core::ops::SubAssign<Self> +
  core::ops::Mul<Self, Output=Self> +
  core::ops::Div<Self, Output=Self> +
  core::ops::Neg<Output=Self>
{
  /// The unsigned integer with the same width, for bit-level access.
  type Bits: Copy + Eq + core::fmt::Debug + core::fmt::LowerHex;

  const ZERO: Self;
  const ONE: Self;
  const HALF: Self;
  const TWO: Self;
  const NAN: Self;
  const INFINITY: Self;
  const NEG_INFINITY: Self;
  const MAX: Self;
  const MIN_POSITIVE: Self;

  /// Significand width in bits, including the hidden bit (`p`).
  const MANTISSA_DIGITS: u32;
  const MIN_EXP: i32;
  const MAX_EXP: i32;
  const MIN_10_EXP: i32;
  const MAX_10_EXP: i32;

  /// `2^⌈p/2⌉ + 1`, the Veltkamp splitting constant used by Dekker's product.
  const SPLITTER: Self;
  /// Above this magnitude, `SPLITTER * x` may overflow; such inputs are scaled down first.
  const SPLIT_THRESHOLD: Self;
  /// Power of two that brings anything above [`Sealed::SPLIT_THRESHOLD`] back in range.
  const SPLIT_SCALE_DOWN: Self;
  /// Inverse of [`Sealed::SPLIT_SCALE_DOWN`].
  const SPLIT_SCALE_UP: Self;

  fn is_nan(self) -> bool;
  fn is_finite(self) -> bool;
  fn is_infinite(self) -> bool;
  fn is_sign_negative(self) -> bool;

  fn abs(self) -> Self;

  /// `self * a + b` with a single rounding.
  fn mul_add(self, a: Self, b: Self) -> Self;

  fn sqrt(self) -> Self;
  fn floor(self) -> Self;
  fn ceil(self) -> Self;
  fn trunc(self) -> Self;

  /// Round half away from zero.
  fn round(self) -> Self;

  /// Split into a mantissa in `[0.5, 1)` and a power of two; `(self, 0)` for zero and
  /// non-finite inputs.
  fn frexp(self) -> (Self, i32);

  /// `self × 2^exp`, rounded once.
  fn ldexp(self, exp: i32) -> Self;

  /// Lossless widening into an `f64`.
  fn to_f64(self) -> f64;

  /// Rounding (to nearest) narrowing from an `f64`.
  fn of_f64(x: f64) -> Self;

  /// Short for `self as i128` (truncating, saturating, NaN is 0).
  fn to_i128(self) -> i128;

  fn to_bits(self) -> Self::Bits;
  fn from_bits(bits: Self::Bits) -> Self;

  fn total_cmp(&self, other: &Self) -> core::cmp::Ordering;
}

/// Implementation of all functions; the two limb types only differ in the [`libm`] entry point
/// names and in the constants.
macro_rules! impl_limb {
  (
    $float:ty, $bits:ty,
    splitter: $splitter:expr,
    split_threshold: $threshold:expr,
    split_scale: $scale_down:expr, $scale_up:expr,
    fns: $fma:ident, $sqrt:ident, $floor:ident, $ceil:ident, $trunc:ident, $round:ident,
         $frexp:ident, $ldexp:ident, $fabs:ident $(,)?
  ) => {
    impl Limb for $float {}
    impl Sealed for $float {
      type Bits = $bits;

      const ZERO: Self = 0.0;
      const ONE: Self = 1.0;
      const HALF: Self = 0.5;
      const TWO: Self = 2.0;
      const NAN: Self = <$float>::NAN;
      const INFINITY: Self = <$float>::INFINITY;
      const NEG_INFINITY: Self = <$float>::NEG_INFINITY;
      const MAX: Self = <$float>::MAX;
      const MIN_POSITIVE: Self = <$float>::MIN_POSITIVE;

      const MANTISSA_DIGITS: u32 = <$float>::MANTISSA_DIGITS;
      const MIN_EXP: i32 = <$float>::MIN_EXP;
      const MAX_EXP: i32 = <$float>::MAX_EXP;
      const MIN_10_EXP: i32 = <$float>::MIN_10_EXP;
      const MAX_10_EXP: i32 = <$float>::MAX_10_EXP;

      const SPLITTER: Self = $splitter;
      const SPLIT_THRESHOLD: Self = $threshold;
      const SPLIT_SCALE_DOWN: Self = $scale_down;
      const SPLIT_SCALE_UP: Self = $scale_up;

      #[inline]
      fn is_nan(self) -> bool { <$float>::is_nan(self) }

      #[inline]
      fn is_finite(self) -> bool { <$float>::is_finite(self) }

      #[inline]
      fn is_infinite(self) -> bool { <$float>::is_infinite(self) }

      #[inline]
      fn is_sign_negative(self) -> bool { <$float>::is_sign_negative(self) }

      #[inline]
      fn abs(self) -> Self { libm::$fabs(self) }

      #[inline]
      fn mul_add(self, a: Self, b: Self) -> Self { libm::$fma(self, a, b) }

      #[inline]
      fn sqrt(self) -> Self { libm::$sqrt(self) }

      #[inline]
      fn floor(self) -> Self { libm::$floor(self) }

      #[inline]
      fn ceil(self) -> Self { libm::$ceil(self) }

      #[inline]
      fn trunc(self) -> Self { libm::$trunc(self) }

      #[inline]
      fn round(self) -> Self { libm::$round(self) }

      #[inline]
      fn frexp(self) -> (Self, i32) { libm::$frexp(self) }

      #[inline]
      fn ldexp(self, exp: i32) -> Self { libm::$ldexp(self, exp) }

      #[inline]
      fn to_f64(self) -> f64 { self as f64 }

      #[inline]
      fn of_f64(x: f64) -> Self { x as $float }

      #[inline]
      fn to_i128(self) -> i128 { self as i128 }

      #[inline]
      fn to_bits(self) -> $bits { <$float>::to_bits(self) }

      #[inline]
      fn from_bits(bits: $bits) -> Self { <$float>::from_bits(bits) }

      #[inline]
      fn total_cmp(&self, other: &Self) -> core::cmp::Ordering { <$float>::total_cmp(self, other) }
    }
  }
}

impl_limb!{
  f64, u64,
  // 2^27 + 1
  splitter: 134217729.0,
  // 2^996
  split_threshold: f64::from_bits((996 + 1023) << 52),
  // 2^-28, 2^28
  split_scale: f64::from_bits((1023 - 28) << 52), f64::from_bits((1023 + 28) << 52),
  fns: fma, sqrt, floor, ceil, trunc, round, frexp, ldexp, fabs,
}

impl_limb!{
  f32, u32,
  // 2^12 + 1
  splitter: 4097.0,
  // 2^115
  split_threshold: f32::from_bits((115 + 127) << 23),
  // 2^-13, 2^13
  split_scale: f32::from_bits((127 - 13) << 23), f32::from_bits((127 + 13) << 23),
  fns: fmaf, sqrtf, floorf, ceilf, truncf, roundf, frexpf, ldexpf, fabsf,
}
