use super::*;

impl<
  const N: usize,
  L: crate::Limb,
> CompensatedFloat<N, L> {
  /// Zero (`+0`), the additive identity element.
  pub const ZERO: Self = Self([L::ZERO; N]);
}

/// The remaining constants need `const` float arithmetic on the concrete limb type, so they are
/// stamped out once per limb.
macro_rules! limb_consts {
  ($float:ty, $bits:ty) => {
    impl<const N: usize> CompensatedFloat<N, $float> {
      /// A value whose only non-zero limb is `x` (const version of `from_leading`).
      const fn leading_const(x: $float) -> Self {
        let mut c = [0.0 as $float; N];
        c[0] = x;
        Self(c)
      }

      /// One (`1`), the multiplicative identity element.
      pub const ONE: Self = Self::leading_const(1.0);

      /// Negative one (`-1`).
      pub const NEG_ONE: Self = Self::leading_const(-1.0);

      /// Not-a-number.
      pub const NAN: Self = Self::leading_const(<$float>::NAN);

      /// Positive infinity (`+∞`).
      pub const INFINITY: Self = Self::leading_const(<$float>::INFINITY);

      /// Negative infinity (`-∞`).
      pub const NEG_INFINITY: Self = Self::leading_const(<$float>::NEG_INFINITY);

      /// Largest finite value, equal to `-MIN`.
      //
      // Limb `i` is the native MAX scaled down by `2^(i·(p+1))`: every limb is a full significand
      // of ones, strictly below half an ulp of the one before.
      pub const MAX: Self = {
        let mut c = [0.0 as $float; N];
        let mut i = 0;
        while i < N {
          let shift = (i as $bits) * (<$float>::MANTISSA_DIGITS as $bits + 1);
          c[i] = <$float>::from_bits(<$float>::MAX.to_bits() - (shift << (<$float>::MANTISSA_DIGITS - 1)));
          i += 1;
        }
        Self(c)
      };

      /// Smallest finite value, equal to `-MAX`.
      pub const MIN: Self = {
        let mut c = Self::MAX.0;
        let mut i = 0;
        while i < N {
          c[i] = -c[i];
          i += 1;
        }
        Self(c)
      };

      /// Smallest positive value whose lower limbs can still hold a full significand without
      /// becoming subnormal: `2^(MIN_EXP − 1)`.
      pub const MIN_POSITIVE: Self = {
        let biased = 1 + (N as $bits - 1) * <$float>::MANTISSA_DIGITS as $bits;
        Self::leading_const(<$float>::from_bits(biased << (<$float>::MANTISSA_DIGITS - 1)))
      };

      /// The difference between `1` and the next larger value with a full set of digits:
      /// `2^−(DIGITS − GUARD_BITS)`.
      pub const EPSILON: Self = {
        let bias = <$float>::MAX_EXP as $bits - 1;
        let digits = N as $bits * <$float>::MANTISSA_DIGITS as $bits - 2 * (N as $bits - 1);
        Self::leading_const(<$float>::from_bits((bias - digits) << (<$float>::MANTISSA_DIGITS - 1)))
      };
    }
  };
}

limb_consts!{f64, u64}
limb_consts!{f32, u32}
