use super::*;
use core::cmp::Ordering;

// The `Limb` trait has bounds indirectly, via `Sealed`, so the derive macros would put the
// bounds on the wrong thing (`L: Clone + Limb` instead of just `L: Limb`). Also, `PartialOrd` on
// the raw component arrays is not the right order. Because of that we just implement explicitly
// here.

impl<const N: usize, L: crate::Limb>
Clone for CompensatedFloat<N, L> {
  #[inline]
  fn clone(&self) -> Self {
    *self
  }
}

impl<const N: usize, L: crate::Limb>
Copy for CompensatedFloat<N, L> {}

impl<const N: usize, L: crate::Limb>
Default for CompensatedFloat<N, L> {
  #[inline]
  fn default() -> Self {
    Self::ZERO
  }
}

impl<const N: usize, L: crate::Limb>
PartialEq for CompensatedFloat<N, L> {
  /// Component-wise native equality: since values are canonical, this is equality of the
  /// represented numbers (so `NaN != NaN` and `+0 == -0`, as for native floats).
  #[inline]
  fn eq(&self, other: &Self) -> bool {
    self.0 == other.0
  }
}

impl<const N: usize, L: crate::Limb>
PartialOrd for CompensatedFloat<N, L> {
  /// Lexicographic order on the components: the first component that differs decides. This is
  /// the numeric order because the canonical representation of each value is unique. Returns
  /// `None` if either side is NaN.
  #[inline]
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    if self.is_nan() || other.is_nan() {
      return None
    }
    for (a, b) in self.0.iter().zip(other.0.iter()) {
      match a.partial_cmp(b)? {
        Ordering::Equal => continue,
        ordering => return Some(ordering),
      }
    }
    Some(Ordering::Equal)
  }
}

impl<
  const N: usize,
  L: crate::Limb,
> CompensatedFloat<N, L> {
  /// The total order of IEEE 754 `totalOrder`, extended lexicographically to the components (see
  /// [`f64::total_cmp`]). Differs from [`PartialOrd`] in that `-0 < +0`, and NaNs are ordered
  /// (negative NaNs first, positive NaNs last).
  pub fn total_cmp(&self, other: &Self) -> Ordering {
    for (a, b) in self.0.iter().zip(other.0.iter()) {
      match a.total_cmp(b) {
        Ordering::Equal => continue,
        ordering => return ordering,
      }
    }
    Ordering::Equal
  }

  /// The minimum of two values. If one of them is NaN, the other is returned.
  pub fn min(self, other: Self) -> Self {
    if self.is_nan() || other < self {other} else {self}
  }

  /// The maximum of two values. If one of them is NaN, the other is returned.
  pub fn max(self, other: Self) -> Self {
    if self.is_nan() || other > self {other} else {self}
  }
}

impl<const N: usize, L: crate::Limb>
core::iter::Sum for CompensatedFloat<N, L> {
  fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
    iter.fold(Self::ZERO, |acc, x| acc + x)
  }
}

impl<'a, const N: usize, L: crate::Limb>
core::iter::Sum<&'a CompensatedFloat<N, L>> for CompensatedFloat<N, L> {
  fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
    iter.fold(Self::ZERO, |acc, x| acc + x)
  }
}

impl<const N: usize, L: crate::Limb>
core::iter::Product for CompensatedFloat<N, L> {
  fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
    iter.fold(Self::from_leading(L::ONE), |acc, x| acc * x)
  }
}

impl<'a, const N: usize, L: crate::Limb>
core::iter::Product<&'a CompensatedFloat<N, L>> for CompensatedFloat<N, L> {
  fn product<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
    iter.fold(Self::from_leading(L::ONE), |acc, x| acc * x)
  }
}
