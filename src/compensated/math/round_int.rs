use super::*;
use core::cmp::Ordering;

impl<
  const N: usize,
  L: crate::Limb,
> CompensatedFloat<N, L> {
  /// Apply a native rounding function `op` to the limbs from the top, stopping at the first limb
  /// that is not already an integer; the limbs below it are dropped.
  ///
  /// This is correct for `floor` and `ceil` because, if `cᵢ` is not an integer, its ulp is at
  /// most ½ and the sum of the limbs below it is less than half of that, so it cannot move the
  /// value across an integer.
  #[inline]
  fn round_limbs(self, op: impl Fn(L) -> L) -> Self {
    if !self.is_finite() { return self }
    let mut c = [L::ZERO; N];
    for i in 0 .. N {
      c[i] = op(self.0[i]);
      if c[i] != self.0[i] { break }
    }
    Self::renormalize(&c)
  }

  /// The largest integer less than or equal to `self`.
  ///
  /// ```
  /// # use compensated_float::df64;
  /// let x = df64::from(3) - df64::from_components([1e-20, 0.]);
  /// assert_eq!(x.floor(), df64::from(2));
  /// ```
  pub fn floor(self) -> Self {
    self.round_limbs(L::floor)
  }

  /// The smallest integer greater than or equal to `self`.
  pub fn ceil(self) -> Self {
    self.round_limbs(L::ceil)
  }

  /// The integer part of `self`, i.e. `self` rounded towards zero.
  pub fn trunc(self) -> Self {
    if self.is_sign_negative() {self.ceil()} else {self.floor()}
  }

  /// The nearest integer to `self`, rounding half-way cases away from zero (like [`f64::round`]).
  pub fn round(self) -> Self {
    if !self.is_finite() { return self }
    let floor = self.floor();
    // Exact: the bits of `self` below the units are representable in the same limbs.
    let fraction = self - floor;
    let half = Self::from_leading(L::HALF);
    let up = match fraction.partial_cmp(&half) {
      Some(Ordering::Greater) => true,
      Some(Ordering::Equal) => self.is_sign_positive(),
      _ => false,
    };
    let result = if up {floor + Self::from_leading(L::ONE)} else {floor};
    if result.is_zero() {
      // `-0.3` rounds to `-0`, as for native floats
      Self::from_leading(if self.is_sign_negative() {-L::ZERO} else {L::ZERO})
    } else {
      result
    }
  }

  /// The fractional part of `self`, i.e. `self - self.trunc()`. Has the same sign as `self`.
  pub fn fract(self) -> Self {
    self - self.trunc()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{df32, df64, qf64};
  use super::super::super::test::exact;
  use malachite::rational::Rational;
  use malachite::base::num::arithmetic::traits::{Ceiling, Floor};
  use proptest::prelude::*;

  fn tiny() -> df64 {
    df64::from_components([1e-20, 0.0])
  }

  #[test]
  fn floor_manual() {
    assert_eq!(df64::from(3).floor(), df64::from(3));
    assert_eq!((df64::from(3) - tiny()).floor(), df64::from(2));
    assert_eq!((df64::from(3) + tiny()).floor(), df64::from(3));
    assert_eq!((df64::from(-3) - tiny()).floor(), df64::from(-4));
    assert_eq!(df64::from_components([0.5, 0.0]).floor(), df64::ZERO);
    assert_eq!(df64::from_components([-0.5, 0.0]).floor(), df64::NEG_ONE);
    assert!((-df64::ZERO).floor().is_sign_negative());
    let big = df64::from_components([2.0_f64.powi(80), 0.75]);
    assert_eq!(big.floor(), df64::from_components([2.0_f64.powi(80), 0.0]));
  }

  #[test]
  fn ceil_manual() {
    assert_eq!((df64::from(3) - tiny()).ceil(), df64::from(3));
    assert_eq!((df64::from(3) + tiny()).ceil(), df64::from(4));
    assert!(df64::from_components([-0.5, 0.0]).ceil().is_sign_negative());
    assert!(df64::from_components([-0.5, 0.0]).ceil().is_zero());
  }

  #[test]
  fn trunc_manual() {
    assert_eq!((df64::from(3) + tiny()).trunc(), df64::from(3));
    assert_eq!((df64::from(-3) - tiny()).trunc(), df64::from(-3));
    assert_eq!(df32::from_components([-2.75, 0.0]).trunc(), df32::from(-2));
  }

  #[test]
  fn round_manual() {
    let half = df64::from_components([0.5, 0.0]);
    assert_eq!((df64::from(2) + half).round(), df64::from(3));
    assert_eq!((df64::from(-2) - half).round(), df64::from(-3));
    assert_eq!((df64::from(2) + half - tiny()).round(), df64::from(2));
    assert_eq!((df64::from(2) + half + tiny()).round(), df64::from(3));
    assert_eq!((df64::from(-2) - half + tiny()).round(), df64::from(-2));
    assert!(df64::from_components([-0.3, 0.0]).round().is_sign_negative());
    assert!(df64::from_components([-0.3, 0.0]).round().is_zero());
    assert!(df64::INFINITY.round().is_infinite());
    assert!(df64::NAN.round().is_nan());
  }

  #[test]
  fn fract_manual() {
    let x = df64::from(7) + df64::from_components([0.25, 1e-20]);
    assert_eq!(x.fract(), df64::from_components([0.25, 1e-20]));
    let x = -x;
    assert_eq!(x.fract(), df64::from_components([-0.25, -1e-20]));
  }

  proptest!{
    #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]

    #[test]
    fn floor_ceil_are_exact(a in qf64::cases_proptest()) {
      let exact_floor = Rational::from(exact(a).floor());
      let exact_ceil = Rational::from(exact(a).ceiling());
      prop_assert_eq!(exact(a.floor()), exact_floor);
      prop_assert_eq!(exact(a.ceil()), exact_ceil);
    }

    #[test]
    fn fract_is_small(a in df64::cases_proptest()) {
      let fract = exact(a.fract());
      prop_assert!(fract < Rational::from(1) && fract > Rational::from(-1));
      prop_assert_eq!(exact(a.trunc()) + fract, exact(a));
    }
  }
}
