use super::*;

use core::fmt::{Debug, Display, LowerExp};

impl<
  const N: usize,
  L: crate::Limb,
> Debug for CompensatedFloat<N, L> {
  /// Prints the bit pattern of every limb, next to its native value.
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let mut tuple = f.debug_tuple("CompensatedFloat");
    for x in &self.0 {
      tuple.field(&format_args!("{:#x} ({:e})", x.to_bits(), x));
    }
    tuple.finish()
  }
}

/// With `feature = "decimal"`, prints the exact decimal expansion of the value, in scientific
/// notation, with [`MAX_DIGITS10`](CompensatedFloat::MAX_DIGITS10) significant digits or as many
/// as the precision asks for.
///
/// ```
/// # use compensated_float::df64;
/// let third = df64::ONE / df64::from(3);
/// assert_eq!(format!("{third:.5}"), "3.33333e-1");
/// ```
#[cfg(feature = "decimal")]
impl<
  const N: usize,
  L: crate::Limb,
> Display for CompensatedFloat<N, L> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    let digits = f.precision().map_or(Self::MAX_DIGITS10 as usize, |p| p + 1);
    let s = self.to_decimal_string(digits);
    // Not `pad`, which would cut the string down to the precision.
    match s.strip_prefix('-') {
      Some(abs) => f.pad_integral(false, "", abs),
      None => f.pad_integral(true, "", &s),
    }
  }
}

/// Without `feature = "decimal"`, values are printed rounded to a single `f64`.
#[cfg(not(feature = "decimal"))]
impl<
  const N: usize,
  L: crate::Limb,
> Display for CompensatedFloat<N, L> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    use crate::RoundFrom;
    Display::fmt(&f64::round_from(*self), f)
  }
}

impl<
  const N: usize,
  L: crate::Limb,
> LowerExp for CompensatedFloat<N, L> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    #[cfg(feature = "decimal")]
    { Display::fmt(self, f) }
    #[cfg(not(feature = "decimal"))]
    {
      use crate::RoundFrom;
      LowerExp::fmt(&f64::round_from(*self), f)
    }
  }
}
