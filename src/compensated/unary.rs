use super::*;

impl<const N: usize, L: crate::Limb>
core::ops::Neg for CompensatedFloat<N, L> {
  type Output = CompensatedFloat<N, L>;

  /// Flips the sign of every limb. Exact, never renormalizes.
  #[inline]
  fn neg(self) -> Self::Output {
    Self(self.0.map(|x| -x))
  }
}

impl<const N: usize, L: crate::Limb>
core::ops::Neg for &CompensatedFloat<N, L> {
  type Output = CompensatedFloat<N, L>;

  #[inline]
  fn neg(self) -> Self::Output {
    -*self
  }
}

impl<const N: usize, L: crate::Limb> CompensatedFloat<N, L> {
  /// Return the absolute value of `self`. Exact, never renormalizes.
  #[inline]
  pub fn abs(self) -> Self {
    if self.is_sign_negative() {-self} else {self}
  }
}
