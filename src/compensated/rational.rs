use super::*;

use crate::RoundFrom;

use malachite::rational::Rational;
use malachite::base::num::conversion::traits::RoundingFrom;
use malachite::base::rounding_modes::RoundingMode;

/// The error type returned when a [CompensatedFloat] cannot be converted to a [Rational] because
/// it is NaN or infinite.
#[derive(Debug)]
#[derive(PartialEq, Eq)]
pub struct IsNotFinite;

impl core::fmt::Display for IsNotFinite {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.write_str("value is NaN or infinite")
  }
}

impl core::error::Error for IsNotFinite {}

/// The exact value of a finite limb.
fn limb_to_rational<L: crate::Limb>(x: L) -> Result<Rational, IsNotFinite> {
  Rational::try_from(x.to_f64()).map_err(|_| IsNotFinite)
}

impl<
  const N: usize,
  L: crate::Limb,
> TryFrom<CompensatedFloat<N, L>> for Rational {
  type Error = IsNotFinite;

  /// The exact value of a compensated float, i.e. the exact sum of its limbs. Fails if `value`
  /// is NaN or infinite; both zeros convert to `0`.
  fn try_from(value: CompensatedFloat<N, L>) -> Result<Self, Self::Error> {
    let mut sum = Rational::from(0);
    for &x in &value.0 {
      sum += limb_to_rational(x)?;
    }
    Ok(sum)
  }
}

impl<
  const N: usize,
  L: crate::Limb,
> RoundFrom<&Rational> for CompensatedFloat<N, L> {
  /// Round an arbitrary rational into a compensated float.
  ///
  /// The limbs are extracted greedily: each one is the nearest limb to what is left of `value`,
  /// and what is left is always computed exactly. Values beyond the range of the limbs round to
  /// infinities, and values too small for the lower limbs lose those bits.
  fn round_from(value: &Rational) -> Self {
    let mut rest = value.clone();
    let mut c = [L::ZERO; N];
    for x in c.iter_mut() {
      if rest == Rational::from(0) {
        break
      }
      let (nearest, _) = f64::rounding_from(&rest, RoundingMode::Nearest);
      *x = L::of_f64(nearest);
      match limb_to_rational(*x) {
        Ok(exact) => rest -= exact,
        Err(IsNotFinite) => return Self::from_leading(*x),
      }
    }
    Self::renormalize(&c)
  }
}

impl<
  const N: usize,
  L: crate::Limb,
> RoundFrom<Rational> for CompensatedFloat<N, L> {
  /// Round an arbitrary rational into a compensated float; see the impl for `&Rational`.
  fn round_from(value: Rational) -> Self {
    Self::round_from(&value)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{df32, df64, qf32, qf64};
  use super::super::test::{exact, within};
  use malachite::base::num::arithmetic::traits::PowerOf2;
  use proptest::prelude::*;

  #[test]
  fn to_rational() {
    assert_eq!(Rational::try_from(df64::ZERO), Ok(Rational::from(0)));
    assert_eq!(Rational::try_from(-df64::ZERO), Ok(Rational::from(0)));
    assert_eq!(Rational::try_from(df64::ONE), Ok(Rational::from(1)));
    assert_eq!(Rational::try_from(df32::from(-3)), Ok(Rational::from(-3)));
    let x = df64::from_components([1.0, 2.0_f64.powi(-80)]);
    assert_eq!(Rational::try_from(x), Ok(Rational::from(1) + Rational::power_of_2(-80i64)));
    let x = qf64::from_components([0.75, -2.0_f64.powi(-70), 0.0, 0.0]);
    assert_eq!(Rational::try_from(x), Ok(Rational::from_signeds(3, 4) - Rational::power_of_2(-70i64)));
  }

  #[test]
  fn not_finite() {
    assert_eq!(Rational::try_from(df64::NAN), Err(IsNotFinite));
    assert_eq!(Rational::try_from(df64::INFINITY), Err(IsNotFinite));
    assert_eq!(Rational::try_from(qf32::NEG_INFINITY), Err(IsNotFinite));
  }

  #[test]
  fn from_rational() {
    let third = Rational::from_signeds(1, 3);
    let x = df64::round_from(&third);
    assert_eq!(x.components()[0], 1.0 / 3.0);
    assert!(x.is_canonical());
    assert!(within(&exact(x), &third, df64::DIGITS));
    let x = qf32::round_from(&third);
    assert!(within(&exact(x), &third, qf32::DIGITS));
    assert_eq!(df64::round_from(Rational::from(0)), df64::ZERO);
  }

  #[test]
  fn from_rational_out_of_range() {
    assert_eq!(df64::round_from(Rational::power_of_2(1100i64)), df64::INFINITY);
    assert_eq!(df32::round_from(-Rational::power_of_2(200i64)), df32::NEG_INFINITY);
    assert!(df64::round_from(Rational::power_of_2(-1100i64)).is_zero());
  }

  proptest!{
    #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]

    #[test]
    fn roundtrip_df64(a in df64::cases_proptest()) {
      prop_assert_eq!(df64::round_from(&exact(a)), a);
    }

    #[test]
    fn roundtrip_qf64(a in qf64::cases_proptest()) {
      prop_assert_eq!(qf64::round_from(&exact(a)), a);
    }

    #[test]
    fn roundtrip_qf32(a in qf32::cases_proptest()) {
      prop_assert_eq!(qf32::round_from(&exact(a)), a);
    }
  }
}
