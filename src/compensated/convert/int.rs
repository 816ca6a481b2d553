use super::*;

/// Integers are cut into chunks of this many bits, each of which fits exactly in a limb of any
/// type.
const CHUNK_BITS: u32 = 16;

impl<
  const N: usize,
  L: crate::Limb,
> CompensatedFloat<N, L> {
  /// The integer `±magnitude`, rounded if it needs more than `N·p` bits.
  ///
  /// The magnitude is cut into 16-bit chunks, most significant first, which are then
  /// renormalized together.
  pub(crate) fn from_integer(negative: bool, magnitude: u128) -> Self {
    const CHUNKS: usize = (u128::BITS / CHUNK_BITS) as usize;
    if magnitude == 0 {
      return Self::ZERO
    }
    let used = (u128::BITS - magnitude.leading_zeros()).div_ceil(CHUNK_BITS) as usize;
    let mut terms = [L::ZERO; CHUNKS];
    for (i, term) in terms[.. used].iter_mut().enumerate() {
      let shift = CHUNK_BITS * (used - 1 - i) as u32;
      let chunk = ((magnitude >> shift) & 0xffff) as u16;
      let x = L::of_f64(f64::from(chunk)).ldexp(shift as i32);
      *term = if negative {-x} else {x};
    }
    Self::renormalize(&terms[.. used])
  }

  /// `self` truncated towards zero, saturating at the bounds of `i128`, and with NaN as `0`.
  pub(crate) fn to_i128_saturating(self) -> i128 {
    let t = self.trunc();
    let c0 = t.leading();
    if c0.is_nan() {
      return 0
    }
    let limit = L::ONE.ldexp(127);
    if c0 > limit {
      i128::MAX
    } else if c0 < -limit {
      i128::MIN
    } else if c0 == limit || c0 == -limit {
      // The leading limb alone is out of range, but the rest may bring the value back in it.
      let rest = t.0[1 ..].iter().fold(0_i128, |acc, x| acc + x.to_i128());
      match (c0 > L::ZERO, rest) {
        (true, 0 ..) => i128::MAX,
        (true, _) => i128::MAX + (rest + 1),
        (false, .. 0) => i128::MIN,
        (false, _) => i128::MIN + rest,
      }
    } else {
      // The limbs of an integer are integers.
      t.0.iter().fold(0_i128, |acc, x| acc.saturating_add(x.to_i128()))
    }
  }

  /// `self` truncated towards zero, saturating at the bounds of `u128`, and with NaN as `0`.
  pub(crate) fn to_u128_saturating(self) -> u128 {
    let t = self.trunc();
    let c0 = t.leading();
    if c0.is_nan() || c0 <= L::ZERO {
      return 0
    }
    let limit = L::ONE.ldexp(127);
    if c0 < limit {
      t.to_i128_saturating().max(0) as u128
    } else {
      // Subtracting 2^127 is exact here.
      let low = (t - Self::from_leading(limit)).to_i128_saturating();
      (1_u128 << 127).saturating_add_signed(low)
    }
  }
}

macro_rules! make_impl {
  ($signed:ty, $unsigned:ty) => {
    impl<
      const N: usize,
      L: crate::Limb,
    > RoundFrom<$signed> for CompensatedFloat<N, L> {
      #[doc = concat!("Convert an `", stringify!($signed), "` into a compensated float. This is exact if the integer fits in the")]
      /// combined significands of the limbs, otherwise it is rounded.
      fn round_from(value: $signed) -> Self {
        Self::from_integer(value < 0, value.unsigned_abs() as u128)
      }
    }

    impl<
      const N: usize,
      L: crate::Limb,
    > RoundFrom<$unsigned> for CompensatedFloat<N, L> {
      #[doc = concat!("Convert a `", stringify!($unsigned), "` into a compensated float. This is exact if the integer fits in the")]
      /// combined significands of the limbs, otherwise it is rounded.
      fn round_from(value: $unsigned) -> Self {
        Self::from_integer(false, value as u128)
      }
    }

    impl<
      const N: usize,
      L: crate::Limb,
    > RoundFrom<CompensatedFloat<N, L>> for $signed {
      #[doc = concat!("Convert a compensated float into an `", stringify!($signed), "`, with the same rules as the `as`")]
      /// operator on native floats: the value is truncated towards zero, values out of range
      /// saturate to `MIN` or `MAX`, and NaN converts to `0`.
      fn round_from(value: CompensatedFloat<N, L>) -> Self {
        let x = value.to_i128_saturating();
        x.clamp(<$signed>::MIN as i128, <$signed>::MAX as i128) as $signed
      }
    }

    impl<
      const N: usize,
      L: crate::Limb,
    > RoundFrom<CompensatedFloat<N, L>> for $unsigned {
      #[doc = concat!("Convert a compensated float into a `", stringify!($unsigned), "`, with the same rules as the `as`")]
      /// operator on native floats: the value is truncated towards zero, values out of range
      /// saturate to `0` or `MAX`, and NaN converts to `0`.
      fn round_from(value: CompensatedFloat<N, L>) -> Self {
        let x = value.to_u128_saturating();
        x.min(<$unsigned>::MAX as u128) as $unsigned
      }
    }
  }
}

make_impl!{i8, u8}
make_impl!{i16, u16}
make_impl!{i32, u32}
make_impl!{i64, u64}
make_impl!{i128, u128}
make_impl!{isize, usize}

/// Lossless conversions: the integers that fit in the limbs whatever their type and number.
macro_rules! make_from {
  ($($int:ty),*) => {
    $(
      impl<
        const N: usize,
        L: crate::Limb,
      > From<$int> for CompensatedFloat<N, L> {
        #[doc = concat!("Convert an `", stringify!($int), "` into a compensated float. Always exact.")]
        fn from(value: $int) -> Self {
          Self::round_from(value)
        }
      }
    )*
  }
}

make_from!{i8, u8, i16, u16, i32, u32}

impl<const N: usize> From<i64> for CompensatedFloat<N, f64> {
  /// Convert an `i64` into a compensated float of `f64` limbs. Always exact.
  fn from(value: i64) -> Self {
    Self::round_from(value)
  }
}

impl<const N: usize> From<u64> for CompensatedFloat<N, f64> {
  /// Convert a `u64` into a compensated float of `f64` limbs. Always exact.
  fn from(value: u64) -> Self {
    Self::round_from(value)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{df32, df64, qf32, qf64};
  use super::super::super::test::{exact, within};
  use malachite::rational::Rational;
  use proptest::prelude::*;

  #[test]
  fn from_small() {
    assert_eq!(df64::from(3).components(), [3.0, 0.0]);
    assert_eq!(qf32::from(-70000).components(), [-70000.0, 0.0, 0.0, 0.0]);
    assert_eq!(df32::from(u32::MAX).components(), [4294967296.0, -1.0]);
    assert!(df64::from(0).is_sign_positive());
  }

  #[test]
  fn from_wide() {
    assert_eq!(exact(df64::from(i64::MIN)), Rational::from(i64::MIN));
    assert_eq!(exact(df64::from(u64::MAX)), Rational::from(u64::MAX));
    assert_eq!(df64::from(u64::MAX).components(), [18446744073709551616.0, -1.0]);
    assert_eq!(exact(qf64::round_from(u128::MAX)), Rational::from(u128::MAX));
    assert_eq!(exact(qf64::round_from(i128::MIN)), Rational::from(i128::MIN));
    assert_eq!(qf32::round_from(u128::MAX), qf32::INFINITY);
  }

  #[test]
  fn to_int_truncates() {
    assert_eq!(i32::round_from(df64::from(-7) / df64::from(2)), -3);
    assert_eq!(i64::round_from(df64::from_components([1e10, 0.75])), 10_000_000_000);
    assert_eq!(i64::round_from(-df64::from_components([1e10, 0.75])), -10_000_000_000);
    let x = df64::from_components([2.0_f64.powi(62), -0.5]);
    assert_eq!(i64::round_from(x), (1 << 62) - 1);
    assert_eq!(u64::round_from(x), (1 << 62) - 1);
  }

  #[test]
  fn to_int_saturates() {
    assert_eq!(u8::round_from(df64::from(300)), u8::MAX);
    assert_eq!(u8::round_from(df64::NEG_ONE), 0);
    assert_eq!(i8::round_from(df64::from(-300)), i8::MIN);
    assert_eq!(i64::round_from(df64::NAN), 0);
    assert_eq!(u128::round_from(df64::NAN), 0);
    assert_eq!(i128::round_from(df64::INFINITY), i128::MAX);
    assert_eq!(i128::round_from(df64::NEG_INFINITY), i128::MIN);
    assert_eq!(u128::round_from(df64::INFINITY), u128::MAX);
    assert_eq!(usize::round_from(df64::MAX), usize::MAX);
    assert_eq!(isize::round_from(df64::MIN), isize::MIN);
  }

  #[test]
  fn to_int_extremes() {
    assert_eq!(i128::round_from(qf64::round_from(i128::MAX)), i128::MAX);
    assert_eq!(i128::round_from(qf64::round_from(i128::MIN)), i128::MIN);
    assert_eq!(u128::round_from(qf64::round_from(u128::MAX)), u128::MAX);
    assert_eq!(u128::round_from(qf64::round_from(u128::MAX) + qf64::ONE), u128::MAX);
    assert_eq!(i128::round_from(qf64::round_from(i128::MAX) + qf64::ONE), i128::MAX);
    assert_eq!(i128::round_from(qf64::round_from(i128::MIN) - qf64::ONE), i128::MIN);
  }

  proptest!{
    #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]

    #[test]
    fn i64_df64_exact(int in any::<i64>()) {
      let x = df64::from(int);
      prop_assert_eq!(exact(x), Rational::from(int));
      prop_assert_eq!(i64::round_from(x), int);
    }

    #[test]
    fn u128_qf64_exact(int in any::<u128>()) {
      let x = qf64::round_from(int);
      prop_assert_eq!(exact(x), Rational::from(int));
      prop_assert_eq!(u128::round_from(x), int);
    }

    #[test]
    fn i128_qf64_exact(int in any::<i128>()) {
      let x = qf64::round_from(int);
      prop_assert_eq!(exact(x), Rational::from(int));
      prop_assert_eq!(i128::round_from(x), int);
    }

    #[test]
    fn i32_df32_exact(int in any::<i32>()) {
      let x = df32::from(int);
      prop_assert_eq!(exact(x), Rational::from(int));
      prop_assert_eq!(i32::round_from(x), int);
    }

    #[test]
    fn i128_df64_rounded(int in any::<i128>()) {
      let x = df64::round_from(int);
      prop_assert!(x.is_canonical());
      prop_assert!(within(&exact(x), &Rational::from(int), df64::DIGITS - 2));
    }

    #[test]
    fn to_i64_is_trunc(a in df64::cases_proptest()) {
      let int = i64::round_from(a);
      let t = a.trunc();
      if t.components()[0].abs() < 2.0_f64.powi(62) {
        prop_assert_eq!(exact(t), Rational::from(int));
      }
    }
  }
}
