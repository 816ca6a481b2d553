use super::*;

impl<
  const N: usize,
  L: crate::Limb,
> CompensatedFloat<N, L> {
  /// The number of limbs (i.e. parameter `N`).
  pub const LIMBS: usize = {
    assert!(
      N == 2 || N == 4,
      "A compensated float must have either 2 or 4 limbs",
    );
    N
  };

  /// Bits of the nominal significand that are set aside to absorb the error of the final
  /// renormalization: one per limb boundary.
  pub const GUARD_BITS: u32 = Self::LIMBS as u32 - 1;

  /// Number of significant binary digits: `N·p − GUARD_BITS`, where `p` is the significand width
  /// of the limb (105 for a double-double, 209 for a quad-double).
  pub const DIGITS: u32 = Self::LIMBS as u32 * L::MANTISSA_DIGITS - Self::GUARD_BITS;

  /// Number of decimal digits that are always preserved by a decimal → binary → decimal round
  /// trip, i.e. `⌊(DIGITS − 1)·log10(2)⌋`.
  pub const DIGITS10: u32 = (Self::DIGITS - 1) * 30103 / 100000;

  /// Number of decimal digits needed so that binary → decimal → binary reproduces the value,
  /// i.e. `⌈DIGITS·log10(2)⌉ + 1`.
  pub const MAX_DIGITS10: u32 = (Self::DIGITS * 30103).div_ceil(100000) + 1;

  /// The base of the representation.
  pub const RADIX: u32 = 2;

  /// One greater than the minimum normal exponent of the leading limb; see [`f64::MIN_EXP`].
  pub const MIN_EXP: i32 = L::MIN_EXP + ((Self::LIMBS as u32 - 1) * L::MANTISSA_DIGITS) as i32;

  /// One greater than the maximum exponent; see [`f64::MAX_EXP`].
  pub const MAX_EXP: i32 = L::MAX_EXP;

  /// Minimum `x` such that `10^x` is a normal number whose lower limbs are normal too.
  pub const MIN_10_EXP: i32 = L::MIN_10_EXP
    + ((Self::LIMBS as u32 - 1) * L::MANTISSA_DIGITS * 30103).div_ceil(100000) as i32;

  /// Maximum `x` such that `10^x` is finite.
  pub const MAX_10_EXP: i32 = L::MAX_10_EXP;

  pub const HAS_INFINITY: bool = true;
  pub const HAS_QUIET_NAN: bool = true;

  /// A value whose only non-zero limb is `x`. Canonical for any `x`.
  #[inline]
  pub(crate) fn from_leading(x: L) -> Self {
    let mut c = [L::ZERO; N];
    c[0] = x;
    Self(c)
  }

  /// The leading (most significant) limb.
  #[inline]
  pub(crate) fn leading(self) -> L {
    self.0[0]
  }

  /// Construct a value from an arbitrary vector of limbs, whose exact sum is the value
  /// represented. The limbs need not be ordered or non-overlapping: the result is renormalized.
  ///
  /// ```
  /// # use compensated_float::df64;
  /// let x = df64::from_components([1e-20, 1.]);
  /// assert_eq!(x.components(), [1., 1e-20]);
  /// ```
  #[inline]
  pub fn from_components(components: [L; N]) -> Self {
    Self::renormalize(&components)
  }

  /// The limbs of `self`, most significant first. Their exact sum is the value of `self`.
  #[inline]
  pub const fn components(self) -> [L; N] {
    self.0
  }

  /// Construct a value from the bit patterns of its limbs, as returned by [`Self::to_bits`].
  /// Like [`Self::from_components`], the result is renormalized, so any array of bit patterns
  /// gives a valid value.
  #[inline]
  pub fn from_bits(bits: [L::Bits; N]) -> Self {
    Self::from_components(bits.map(L::from_bits))
  }

  /// The bit patterns of the limbs of `self`, most significant first.
  #[inline]
  pub fn to_bits(self) -> [L::Bits; N] {
    self.0.map(L::to_bits)
  }

  /// Checks whether the limbs of `self` are in canonical form (see the [module docs](super)).
  /// Always true for values built through the public API.
  pub(crate) fn is_canonical(&self) -> bool {
    let c = &self.0;
    if !c[0].is_finite() {
      return c[1..].iter().all(|&x| x == L::ZERO)
    }
    let mut seen_zero = false;
    for i in 0 .. N - 1 {
      if c[i] == L::ZERO {
        seen_zero = true
      }
      if seen_zero && c[i + 1] != L::ZERO {
        return false
      }
      if c[i + 1] != L::ZERO && c[i] + c[i + 1] != c[i] {
        return false
      }
    }
    true
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{df32, df64, qf32, qf64};
  #[cfg(feature = "decimal")]
  use super::super::test::{exact, within};
  #[cfg(feature = "decimal")]
  use proptest::prelude::*;

  #[test]
  fn digits() {
    assert_eq!(df64::DIGITS, 105);
    assert_eq!(qf64::DIGITS, 209);
    assert_eq!(df32::DIGITS, 47);
    assert_eq!(qf32::DIGITS, 93);
  }

  #[test]
  fn decimal_digits() {
    assert_eq!(df64::DIGITS10, 31);
    assert_eq!(df64::MAX_DIGITS10, 33);
    assert_eq!(qf64::DIGITS10, 62);
    assert_eq!(qf64::MAX_DIGITS10, 64);
    assert_eq!(df32::DIGITS10, 13);
    assert_eq!(df32::MAX_DIGITS10, 16);
  }

  #[test]
  fn exponents() {
    assert_eq!(df64::MIN_EXP, -1021 + 53);
    assert_eq!(df64::MAX_EXP, 1024);
    assert_eq!(qf32::MIN_EXP, -125 + 3 * 24);
  }

  #[test]
  fn components_roundtrip() {
    let x = qf64::from_components([1.0, 2.0_f64.powi(-60), 2.0_f64.powi(-120), 2.0_f64.powi(-180)]);
    assert_eq!(x.components(), [1.0, 2.0_f64.powi(-60), 2.0_f64.powi(-120), 2.0_f64.powi(-180)]);
    assert!(x.is_canonical());
  }

  #[test]
  fn from_components_renormalizes() {
    let x = df64::from_components([1.0, 1.0]);
    assert_eq!(x.components(), [2.0, 0.0]);
    let x = df64::from_components([0.0, 3.0]);
    assert_eq!(x.components(), [3.0, 0.0]);
  }

  #[test]
  fn bits_roundtrip() {
    let x = df64::from_components([1.0, 2.0_f64.powi(-70)]);
    assert_eq!(df64::from_bits(x.to_bits()), x);
    assert_eq!(x.to_bits(), [1.0_f64.to_bits(), 2.0_f64.powi(-70).to_bits()]);
  }

  /// Values decomposed from arbitrary bit patterns come out canonical, and (away from the edges
  /// of the exponent range) survive printing all their digits and parsing back.
  #[cfg(feature = "decimal")]
  macro_rules! bits_decimal_roundtrip {
    ($name:ident, $t:ty, $bits:ty) => {
      proptest!{
        #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]

        #[test]
        fn $name(bits in any::<$bits>()) {
          let x = <$t>::from_bits(bits);
          prop_assert!(x.is_canonical(), "{:?} → {:?}", bits, x);
          let c0 = x.components()[0].abs();
          let in_range = c0 >= <$t>::MIN_POSITIVE.components()[0] && c0 <= <$t>::MAX.components()[0] / 4.0;
          if !(x.is_zero() || in_range) { return Ok(()) }
          let s = x.to_decimal_string(<$t>::MAX_DIGITS10 as usize);
          let y: $t = s.parse().unwrap();
          let bits = <$t>::DIGITS - <$t>::GUARD_BITS;
          prop_assert!(within(&exact(y), &exact(x), bits), "{} → {:?} → {:?}", s, x, y);
        }
      }
    };
  }

  #[cfg(feature = "decimal")]
  bits_decimal_roundtrip!{bits_decimal_roundtrip_df64, df64, [u64; 2]}
  #[cfg(feature = "decimal")]
  bits_decimal_roundtrip!{bits_decimal_roundtrip_qf64, qf64, [u64; 4]}

  #[test]
  fn canonical_check() {
    assert!(!CompensatedFloat::<2, f64>([1.0, 1.0]).is_canonical());
    assert!(!CompensatedFloat::<2, f64>([0.0, 1.0]).is_canonical());
    assert!(!CompensatedFloat::<2, f64>([f64::NAN, 1.0]).is_canonical());
    assert!(CompensatedFloat::<2, f64>([f64::INFINITY, 0.0]).is_canonical());
    assert!(CompensatedFloat::<2, f64>([-0.0, 0.0]).is_canonical());
  }
}
