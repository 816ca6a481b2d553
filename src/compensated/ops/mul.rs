use super::*;

/// Most terms a level of a product can hold: at `N = 4`, level 4 gets 16 carried errors.
const LEVEL_CAPACITY: usize = MAX_LIMBS * MAX_LIMBS;

/// The terms of one level of a product, on the stack.
#[derive(Clone, Copy)]
struct Level<L> {
  terms: [L; LEVEL_CAPACITY],
  len: usize,
}

impl<L: crate::Limb> Level<L> {
  fn new() -> Self {
    Self { terms: [L::ZERO; LEVEL_CAPACITY], len: 0 }
  }

  fn push(&mut self, x: L) {
    self.terms[self.len] = x;
    self.len += 1;
  }

  fn terms(&self) -> &[L] {
    &self.terms[.. self.len]
  }
}

impl<
  const N: usize,
  L: crate::Limb,
> CompensatedFloat<N, L> {
  /// Multiply two values whose leading limbs are finite and non-zero, and whose product does not
  /// overflow.
  ///
  /// The partial products `xᵢ·yⱼ` are grouped by level `i + j`, which is roughly their
  /// significance (level `k` is about `2^−kp` relative to the leading product):
  ///
  ///   - Levels below `N` are computed exactly with [`two_prod`] and summed with a chain of
  ///     [`two_sum`]. Every error, of the products and of the sums, is kept as a term of the
  ///     level below, so levels `0 .. N` add up exactly.
  ///   - Level `N` only needs to be correct to about `p` bits, so it is summed with native
  ///     products, along with the errors carried into it.
  ///   - Levels above `N` are below the precision of the result and are dropped.
  ///
  /// The products `xᵢ·yⱼ` and `xⱼ·yᵢ` are always combined with each other first, so the result
  /// is the same bit for bit if `x` and `y` are swapped.
  fn mul_kernel(x: [L; N], y: [L; N]) -> Self {
    let mut terms = [L::ZERO; MAX_LIMBS + 1];
    let mut carried = Level::new();
    for k in 0 .. N {
      let mut level = carried;
      let mut below = Level::new();
      for i in 0 ..= k / 2 {
        let j = k - i;
        if i < j {
          let (p1, e1) = two_prod(x[i], y[j]);
          let (p2, e2) = two_prod(x[j], y[i]);
          let (p, e) = two_sum(p1, p2);
          let (e_hi, e_lo) = two_sum(e1, e2);
          level.push(p);
          below.push(e);
          below.push(e_hi);
          below.push(e_lo);
        } else {
          let (p, e) = two_prod(x[i], y[i]);
          level.push(p);
          below.push(e);
        }
      }
      let level = level.terms();
      let mut sum = level[0];
      for &t in &level[1 ..] {
        let (s, e) = two_sum(sum, t);
        sum = s;
        below.push(e);
      }
      terms[k] = sum;
      carried = below;
    }

    let mut tail = carried.terms().iter().fold(L::ZERO, |acc, &t| acc + t);
    for i in 1 ..= N / 2 {
      let j = N - i;
      if i < j {
        tail += x[i] * y[j] + x[j] * y[i];
      } else {
        tail += x[i] * y[i];
      }
    }
    terms[N] = tail;

    Self::renormalize(&terms[.. N + 1])
  }

  pub(crate) fn mul(self, other: Self) -> Self {
    let (a, b) = (self.leading(), other.leading());
    let product = a * b;
    if a == L::ZERO || b == L::ZERO || !a.is_finite() || !b.is_finite() {
      // Zeros, NaNs, and infinities follow the native rules
      Self::from_leading(product)
    } else if !(product * L::TWO).is_finite() {
      // Near the top of the range: multiply one binade lower and scale back, so that only an
      // exact product past the range overflows
      let (x, y) = if a.abs() < b.abs() {(self, other.ldexp(-1))} else {(self.ldexp(-1), other)};
      if (x.leading() * y.leading()).is_finite() {
        Self::mul_kernel(x.0, y.0).ldexp(1)
      } else {
        Self::from_leading(product)
      }
    } else {
      Self::mul_kernel(self.0, other.0)
    }
  }
}

use core::ops::{Mul, MulAssign};
super::mk_ops!{Mul, MulAssign, mul, mul_assign}
