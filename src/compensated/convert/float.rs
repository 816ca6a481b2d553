use super::*;

impl<
  const N: usize,
  L: crate::Limb,
> CompensatedFloat<N, L> {
  /// Split a finite or non-finite `f64` into limbs: each limb is the nearest limb to what is left
  /// of `value`, and what is left is always computed exactly in `f64`.
  fn from_f64_split(value: f64) -> Self {
    let c0 = L::of_f64(value);
    if !c0.is_finite() {
      // NaN, infinities, and values beyond the range of the limb
      return Self::from_leading(c0)
    }
    let mut c = [L::ZERO; N];
    c[0] = c0;
    let mut rest = value - c0.to_f64();
    for x in c.iter_mut().skip(1) {
      *x = L::of_f64(rest);
      rest -= x.to_f64();
    }
    Self::renormalize(&c)
  }

  /// The sum of the limbs in `f64`, from the least significant up.
  fn to_f64_sum(self) -> f64 {
    if self.is_zero() { return self.leading().to_f64() }
    self.0.iter().rev().fold(0.0, |acc, &x| acc + x.to_f64())
  }
}

impl<
  const N: usize,
  L: crate::Limb,
> RoundFrom<f64> for CompensatedFloat<N, L> {
  /// Convert an `f64` into a compensated float. This is exact if the limbs are `f64`, or if they
  /// are `f32` and `value` is within their exponent range and fits in their combined
  /// significands; otherwise `value` is rounded.
  ///
  /// NaN and infinities convert to NaN and infinities; values beyond the range of the limbs
  /// convert to infinities.
  fn round_from(value: f64) -> Self {
    Self::from_f64_split(value)
  }
}

impl<
  const N: usize,
  L: crate::Limb,
> RoundFrom<f32> for CompensatedFloat<N, L> {
  /// Convert an `f32` into a compensated float. Always exact (see also the [`From`] impl).
  fn round_from(value: f32) -> Self {
    Self::from_f64_split(value.into())
  }
}

impl<
  const N: usize,
  L: crate::Limb,
> From<f32> for CompensatedFloat<N, L> {
  /// Convert an `f32` into a compensated float. Always exact, since an `f32` fits in a single
  /// limb of any type.
  fn from(value: f32) -> Self {
    Self::from_leading(L::of_f64(value.into()))
  }
}

impl<
  const N: usize,
> From<f64> for CompensatedFloat<N, f64> {
  /// Convert an `f64` into a compensated float of `f64` limbs. Always exact.
  fn from(value: f64) -> Self {
    Self::from_leading(value)
  }
}

impl<
  const N: usize,
  L: crate::Limb,
> RoundFrom<CompensatedFloat<N, L>> for f64 {
  /// Convert a compensated float into an `f64`: the limbs are added together in `f64`, from the
  /// least significant up. Values beyond the range of `f64` convert to infinities.
  fn round_from(value: CompensatedFloat<N, L>) -> Self {
    value.to_f64_sum()
  }
}

impl<
  const N: usize,
  L: crate::Limb,
> RoundFrom<CompensatedFloat<N, L>> for f32 {
  /// Convert a compensated float into an `f32`, correctly rounded. Values beyond the range of
  /// `f32` convert to infinities.
  ///
  /// The value is widened exactly to four `f64` limbs, and the leading one rounded to odd: if
  /// anything is left below it and its last bit is even, it moves one ulp towards the rest.
  /// Rounding that to `f32` then gives the same result as rounding the exact value.
  fn round_from(value: CompensatedFloat<N, L>) -> Self {
    if value.is_zero() || !value.is_finite() { return value.leading().to_f64() as f32 }
    let [head, next, ..] = value.convert::<4, f64>().0;
    let head = if next != 0.0 && head.to_bits() & 1 == 0 {
      if (next > 0.0) == (head > 0.0) {
        f64::from_bits(head.to_bits() + 1)
      } else {
        f64::from_bits(head.to_bits() - 1)
      }
    } else {
      head
    };
    head as f32
  }
}
