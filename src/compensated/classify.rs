use super::*;
use core::num::FpCategory;

/// All of these only need to look at the leading limb: a NaN or infinity is always alone in
/// `c0`, and a zero `c0` means all limbs are zero.
impl<
  const N: usize,
  L: crate::Limb,
> CompensatedFloat<N, L> {
  /// Returns `true` if `self` is NaN.
  #[inline]
  pub fn is_nan(self) -> bool {
    self.leading().is_nan()
  }

  /// Returns `true` if `self` is positive or negative infinity.
  #[inline]
  pub fn is_infinite(self) -> bool {
    self.leading().is_infinite()
  }

  /// Returns `true` if `self` is neither infinite nor NaN.
  #[inline]
  pub fn is_finite(self) -> bool {
    self.leading().is_finite()
  }

  /// Returns `true` if `self` is `+0` or `-0`.
  #[inline]
  pub fn is_zero(self) -> bool {
    self.leading() == L::ZERO
  }

  /// Returns `true` if `self` has a negative sign (including `-0`, `-∞`, and NaNs with a
  /// negative sign bit).
  #[inline]
  pub fn is_sign_negative(self) -> bool {
    self.leading().is_sign_negative()
  }

  /// Returns `true` if `self` has a positive sign (including `+0`, `+∞`, and NaNs with a
  /// positive sign bit).
  #[inline]
  pub fn is_sign_positive(self) -> bool {
    !self.is_sign_negative()
  }

  /// Returns `true` if `self` is finite, non-zero, and at least `2^(MIN_EXP − 1)` in
  /// magnitude, i.e. all of its digits are available.
  #[inline]
  pub fn is_normal(self) -> bool {
    self.classify() == FpCategory::Normal
  }

  /// The floating point category of `self`. A finite non-zero value with a leading limb below
  /// `2^(MIN_EXP − 1)` is [`Subnormal`](FpCategory::Subnormal): its lower limbs may have lost
  /// digits to underflow.
  pub fn classify(self) -> FpCategory {
    let c0 = self.leading();
    if c0.is_nan() {
      FpCategory::Nan
    } else if c0.is_infinite() {
      FpCategory::Infinite
    } else if c0 == L::ZERO {
      FpCategory::Zero
    } else if c0.abs() < L::ONE.ldexp(Self::MIN_EXP - 1) {
      FpCategory::Subnormal
    } else {
      FpCategory::Normal
    }
  }

  /// `1` if `self` is positive (including `+0` and `+∞`), `-1` if it is negative (including
  /// `-0` and `-∞`), NaN if it is NaN.
  pub fn signum(self) -> Self {
    let c0 = self.leading();
    if c0.is_nan() {
      self
    } else if c0.is_sign_negative() {
      Self::from_leading(-L::ONE)
    } else {
      Self::from_leading(L::ONE)
    }
  }
}
