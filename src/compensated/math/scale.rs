use super::*;

impl<
  const N: usize,
  L: crate::Limb,
> CompensatedFloat<N, L> {
  /// Returns `self × 2^exp`.
  ///
  /// Every limb is scaled on its own, which is exact unless a limb overflows or becomes
  /// subnormal; the result is renormalized in case that happens.
  ///
  /// ```
  /// # use compensated_float::df64;
  /// assert_eq!(df64::from(3).ldexp(4), df64::from(48));
  /// assert_eq!(df64::from(3).ldexp(-1), df64::from_components([1.5, 0.]));
  /// ```
  pub fn ldexp(self, exp: i32) -> Self {
    if !self.is_finite() || self.is_zero() { return self }
    Self::renormalize(&self.0.map(|x| x.ldexp(exp)))
  }

  /// Alias for [`Self::ldexp`].
  #[inline]
  pub fn mul_pow2(self, exp: i32) -> Self {
    self.ldexp(exp)
  }

  /// Splits `self` into a mantissa `m` with `0.5 ≤ |m| < 1` and an exponent `e` such that
  /// `self = m × 2^e`. Zeros and non-finite values are returned unchanged, with `e = 0`.
  ///
  /// ```
  /// # use compensated_float::df64;
  /// assert_eq!(df64::from(12).frexp(), (df64::from_components([0.75, 0.]), 4));
  /// ```
  pub fn frexp(self) -> (Self, i32) {
    if !self.is_finite() || self.is_zero() {
      return (self, 0)
    }
    let (_, mut exp) = self.leading().frexp();
    let mut mantissa = self.ldexp(-exp);

    // The leading limb can be exactly ±½ while the whole value is a tiny bit smaller in
    // magnitude, if the next non-zero limb has the opposite sign.
    if mantissa.leading().abs() == L::HALF {
      let next = mantissa.0[1 ..].iter().copied().find(|&x| x != L::ZERO);
      if next.is_some_and(|x| x.is_sign_negative() != mantissa.leading().is_sign_negative()) {
        mantissa = mantissa.ldexp(1);
        exp -= 1;
      }
    }
    (mantissa, exp)
  }
}
