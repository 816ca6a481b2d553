use super::*;

/// Used to do value-to-value conversions that may *round* the input (see below). It is the
/// reciprocal of [`RoundInto`].
///
/// The interface is identical to the standard [`From`], but these conversions are _not
/// necessarily lossless_: a 64-bit integer does not fit in two `f32` limbs, an `f64` does not fit
/// in the exponent range of `f32` limbs, and a compensated value does not fit in a single native
/// float. The exact meaning of each conversion depends on the types involved; **consult the
/// documentation for specific implementations of `round_from`**. Conversions that are always
/// exact are also available through [`From`].
///
/// Prefer implementing [`RoundFrom`] over [`RoundInto`], because implementing [`RoundFrom`]
/// automatically provides one with an implementation of [`RoundInto`], and prefer using
/// [`RoundInto`] over [`RoundFrom`] when specifying trait bounds on a generic function. There's
/// also a blanket implementation of `RoundFrom<T> for T`.
///
/// # Examples
///
/// ```
/// # use compensated_float::*;
/// assert_eq!(df64::round_from(0.1_f64).components(), [0.1, 0.]);
/// assert_eq!(df32::round_from(0.1_f64).components(), [0.1_f32, (0.1 - 0.1_f32 as f64) as f32]);
///
/// assert_eq!(f64::round_from(df64::ONE / df64::from(3)), 1. / 3.);
/// assert_eq!(i32::round_from(df64::from(-7) / df64::from(2)), -3);
/// ```
pub trait RoundFrom<T> {
  /// Converts to this type from the input type, rounding if necessary.
  #[must_use]
  fn round_from(value: T) -> Self;
}

/// Used to do value-to-value conversions that may *round* the input. It is the reciprocal of
/// [`RoundFrom`]; see there for details.
///
/// # Examples
///
/// ```
/// # use compensated_float::*;
/// let x: qf64 = u128::MAX.round_into();
/// assert_eq!(x + qf64::ONE, qf64::from(2).powi(128));
///
/// let y: f32 = qf64::from(3).sqrt().round_into();
/// assert_eq!(y, 3_f32.sqrt());
/// ```
pub trait RoundInto<T> {
  /// Converts this type into the (usually inferred) input type, rounding if necessary.
  #[must_use]
  fn round_into(self) -> T;
}

impl<T> RoundFrom<T> for T {
  fn round_from(value: T) -> Self {
    value
  }
}

impl<T, U> RoundInto<U> for T where U: RoundFrom<T> {
  fn round_into(self) -> U {
    U::round_from(self)
  }
}

impl<
  const N: usize,
  L: crate::Limb,
> CompensatedFloat<N, L> {
  /// Convert into a compensated float with a different number of limbs and/or limb type.
  ///
  /// Converting to at least as many limbs of at least as wide a type is exact (apart from
  /// limbs that fall outside the exponent range of the new type). Otherwise, the result is
  /// rounded.
  ///
  /// # Examples
  ///
  /// ```
  /// # use compensated_float::*;
  /// let third = df64::ONE / df64::from(3);
  /// let wide: qf64 = third.convert();
  /// assert_eq!(wide.components(), [third.components()[0], third.components()[1], 0., 0.]);
  /// let narrow: df32 = third.convert();
  /// assert_eq!(narrow.components()[0], 1. / 3.);
  /// ```
  pub fn convert<
    const M: usize,
    K: crate::Limb,
  >(self) -> CompensatedFloat<M, K> {
    if !self.is_finite() || self.is_zero() {
      return CompensatedFloat::from_leading(K::of_f64(self.leading().to_f64()))
    }
    if K::MANTISSA_DIGITS >= L::MANTISSA_DIGITS {
      // Every limb fits in a single limb of the new type.
      let mut terms = [K::ZERO; MAX_LIMBS];
      for i in 0 .. N {
        terms[i] = K::of_f64(self.0[i].to_f64());
      }
      CompensatedFloat::renormalize(&terms[.. N])
    } else {
      // Every limb is split on its own, and the pieces accumulated from the bottom up.
      self.0.iter().rev().fold(CompensatedFloat::ZERO, |acc, &x| {
        acc + CompensatedFloat::<M, K>::round_from(x.to_f64())
      })
    }
  }
}

/// Conversions to and from native floats.
mod float;

/// Conversions to and from integers.
mod int;
