use super::*;

impl<
  const N: usize,
  L: crate::Limb,
> CompensatedFloat<N, L> {
  /// Newton steps needed after the native seed: each one doubles the number of correct bits,
  /// plus one to absorb the rounding of the steps themselves.
  const SQRT_STEPS: u32 = 1 + Self::LIMBS.ilog2();

  /// Returns the square root of `self`. If `self` is negative or NaN, returns NaN; `±0` and `+∞`
  /// are returned unchanged.
  ///
  /// The argument is first scaled by an even power of two into `[0.5, 2)`, so that `x²` can
  /// neither overflow nor underflow in the refinement. Starting from the native square root of
  /// the leading limb, each Newton step
  ///
  ///   x ← x + (a − x²) / 2x
  ///
  /// is carried out in full compensated precision.
  ///
  /// # Example
  ///
  /// ```
  /// # use compensated_float::*;
  /// let two = qf64::from(2);
  /// let root = two.sqrt();
  /// assert!((root * root - two).abs() < qf64::EPSILON * two);
  /// ```
  pub fn sqrt(self) -> Self {
    let a0 = self.leading();
    if a0.is_nan() || a0 < L::ZERO {
      return Self::from_leading(L::NAN)
    }
    if a0 == L::ZERO || a0.is_infinite() {
      return self
    }

    let (_, exp) = a0.frexp();
    let shift = exp & !1;
    let a = self.ldexp(-shift);

    let mut x = Self::from_leading(a.leading().sqrt());
    for _ in 0 .. Self::SQRT_STEPS {
      x = x + (a - x * x) / (x + x);
    }
    x.ldexp(shift / 2)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{df32, df64, qf32, qf64};
  use super::super::super::test::exact;
  use malachite::rational::Rational;
  use malachite::base::num::arithmetic::traits::{Abs, PowerOf2};
  use proptest::prelude::*;

  /// Check that `|s² − a| ≤ 2^−(DIGITS − 6) · |a|`, exactly.
  fn is_accurate<const N: usize, L: crate::Limb>(a: CompensatedFloat<N, L>) -> bool
  where
    Rational: TryFrom<CompensatedFloat<N, L>>,
  {
    let s = a.sqrt();
    if !s.is_canonical() || s.is_sign_negative() {
      return false
    }
    let a = exact(a);
    let s = exact(s);
    let bound = (&a).abs() * Rational::power_of_2(-((CompensatedFloat::<N, L>::DIGITS - 6) as i64));
    (&s * &s - a).abs() <= bound
  }

  #[test]
  fn specials() {
    assert!(df64::NAN.sqrt().is_nan());
    assert!(df64::NEG_ONE.sqrt().is_nan());
    assert!(df64::NEG_INFINITY.sqrt().is_nan());
    assert!(df64::from_components([-1e-300, 0.0]).sqrt().is_nan());
    assert_eq!(df64::INFINITY.sqrt(), df64::INFINITY);
    assert!(df64::ZERO.sqrt().is_zero() && df64::ZERO.sqrt().is_sign_positive());
    assert!((-df64::ZERO).sqrt().is_zero() && (-df64::ZERO).sqrt().is_sign_negative());
  }

  #[test]
  fn perfect_squares() {
    assert_eq!(df64::from(9).sqrt(), df64::from(3));
    assert_eq!(qf64::from(1 << 20).sqrt(), qf64::from(1 << 10));
    assert_eq!(df64::from_components([0.25, 0.0]).sqrt(), df64::from_components([0.5, 0.0]));
  }

  #[test]
  fn sqrt_two() {
    assert!(is_accurate(df64::from(2)));
    assert!(is_accurate(qf64::from(2)));
    assert!(is_accurate(df32::from(2)));
    assert!(is_accurate(qf32::from(2)));
    assert_eq!(df64::from(2).sqrt().components()[0], core::f64::consts::SQRT_2);
  }

  #[test]
  fn extreme_exponents() {
    assert!(is_accurate(df64::MAX));
    assert!(is_accurate(df64::MIN_POSITIVE));
    assert!(is_accurate(qf64::MAX));
    assert!(is_accurate(df64::from_components([3e300, 1e284])));
  }

  #[test]
  fn four_limb_roots() {
    assert!(is_accurate(qf64::from_components([2.9299601998775497e-9, 1.469e-25, 6.229e-42, 0.0])));
    assert!(is_accurate(qf64::from(3).recip()));
    assert!(is_accurate(qf32::from_components([3.0e-5, 1.0e-13, 0.0, 0.0])));
  }

  proptest!{
    #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]

    #[test]
    fn df64_proptest(a in df64::cases_proptest()) {
      prop_assert!(is_accurate(a.abs()), "{:?}", a)
    }

    #[test]
    fn qf64_proptest(a in qf64::cases_proptest()) {
      prop_assert!(is_accurate(a.abs()), "{:?}", a)
    }

    #[test]
    fn df32_proptest(a in df32::cases_proptest()) {
      prop_assert!(is_accurate(a.abs()), "{:?}", a)
    }

    #[test]
    fn qf32_proptest(a in qf32::cases_proptest()) {
      prop_assert!(is_accurate(a.abs()), "{:?}", a)
    }

    #[test]
    fn negative_is_nan(a in qf64::cases_proptest()) {
      prop_assert!((-a.abs()).sqrt().is_nan())
    }
  }
}
