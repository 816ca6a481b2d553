use super::*;

impl<
  const N: usize,
  L: crate::Limb,
> CompensatedFloat<N, L> {
  /// Add two values whose leading limbs are finite and non-zero, and whose sum does not
  /// overflow.
  ///
  /// Every pair of limbs of equal index is added with [`two_sum`], so the `2N` resulting terms add
  /// up exactly to `x + y`. They are arranged so that each sum comes before the error of the pair
  /// above it, roughly in order of significance, and then renormalized.
  #[inline]
  fn add_kernel(x: [L; N], y: [L; N]) -> Self {
    let mut terms = [L::ZERO; 2 * MAX_LIMBS];
    let (s, mut carry) = two_sum(x[0], y[0]);
    terms[0] = s;
    for i in 1 .. N {
      let (s, e) = two_sum(x[i], y[i]);
      terms[2 * i - 1] = s;
      terms[2 * i] = carry;
      carry = e;
    }
    terms[2 * N - 1] = carry;
    Self::renormalize(&terms[.. 2 * N])
  }

  pub(crate) fn add(self, other: Self) -> Self {
    let (a, b) = (self.leading(), other.leading());
    if a == L::ZERO && b == L::ZERO {
      // Signs of zero follow the native rules
      Self::from_leading(a + b)
    } else if a == L::ZERO {
      other
    } else if b == L::ZERO {
      self
    } else if !(a + b).is_finite() {
      if a.is_finite() && b.is_finite() {
        // The leading limbs overflow, the exact sum may not: add one binade lower and scale back
        Self::add_kernel(self.ldexp(-1).0, other.ldexp(-1).0).ldexp(1)
      } else {
        // NaN or infinite operands
        Self::from_leading(a + b)
      }
    } else {
      Self::add_kernel(self.0, other.0)
    }
  }

  #[inline]
  pub(crate) fn sub(self, other: Self) -> Self {
    self.add(-other)
  }
}

use core::ops::{Add, AddAssign, Sub, SubAssign};
super::mk_ops!{Add, AddAssign, add, add_assign}
super::mk_ops!{Sub, SubAssign, sub, sub_assign}
