use super::*;

/// Square root.
mod sqrt;

/// Rounding to integers: floor, ceil, trunc, round, fract.
mod round_int;

/// Scaling by powers of two: ldexp, frexp.
mod scale;

impl<
  const N: usize,
  L: crate::Limb,
> CompensatedFloat<N, L> {
  /// Raise `self` to an integer power, by repeated squaring. A negative `n` takes the
  /// [reciprocal](Self::recip) of the positive power; `n = 0` gives `1` for any `self`, even NaN.
  ///
  /// Each multiplication adds its own rounding error, so the result is accurate to roughly
  /// `DIGITS − 2·log2(|n|)` bits.
  ///
  /// ```
  /// # use compensated_float::df64;
  /// assert_eq!(df64::from(3).powi(4), df64::from(81));
  /// assert_eq!(df64::from(2).powi(-2), df64::from_components([0.25, 0.]));
  /// ```
  pub fn powi(self, n: i32) -> Self {
    let mut result = Self::from_leading(L::ONE);
    let mut base = self;
    let mut exp = n.unsigned_abs();
    while exp != 0 {
      if exp & 1 == 1 {
        result = result * base;
      }
      exp >>= 1;
      if exp != 0 {
        base = base * base;
      }
    }
    if n < 0 {result.recip()} else {result}
  }
}
