use super::*;

impl<
  const N: usize,
  L: crate::Limb,
> CompensatedFloat<N, L> {
  /// Divide two values whose leading limbs are finite and non-zero, and whose quotient does not
  /// overflow.
  ///
  /// This is long division, one limb of quotient at a time: each partial quotient `qᵢ` is the
  /// native quotient of the leading limbs of the running remainder and of `y`, and the
  /// remainder is then updated as `r ← r − qᵢ·y` in full precision. Each step gains about `p`
  /// bits, so `N + 1` partial quotients are enough; their sum is then renormalized.
  fn div_kernel(x: Self, y: Self) -> Self {
    let y0 = y.leading();
    let mut q = [L::ZERO; MAX_LIMBS + 1];
    let mut r = x;
    for i in 0 ..= N {
      q[i] = r.leading() / y0;
      if i < N {
        r = r - y * Self::from_leading(q[i]);
      }
    }
    Self::renormalize(&q[.. N + 1])
  }

  pub(crate) fn div(self, other: Self) -> Self {
    let (a, b) = (self.leading(), other.leading());
    let quotient = a / b;
    if a == L::ZERO || b == L::ZERO || !a.is_finite() || !b.is_finite() || !quotient.is_finite() {
      // Zeros, NaNs, infinities, and overflow all follow the native rules
      Self::from_leading(quotient)
    } else {
      Self::div_kernel(self, other)
    }
  }

  /// The reciprocal `1 / self`.
  #[inline]
  pub fn recip(self) -> Self {
    Self::from_leading(L::ONE) / self
  }
}

use core::ops::{Div, DivAssign};
super::mk_ops!{Div, DivAssign, div, div_assign}
