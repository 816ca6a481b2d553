use super::*;

/// The most raw terms [`CompensatedFloat::renormalize`] accepts at once (the `2N` terms of a sum
/// at the widest `N`, or the 16-bit chunks of a 128-bit integer).
pub(crate) const MAX_TERMS: usize = 2 * MAX_LIMBS;

impl<
  const N: usize,
  L: crate::Limb,
> CompensatedFloat<N, L> {
  /// Take an arbitrary sequence of `terms`, ordered roughly from most to least significant, and
  /// return the canonical value closest to their exact sum.
  ///
  /// The sum is exact if there are at most `N` terms. Beyond that, once `N − 1` components are
  /// fixed the rest are folded natively into the last one, and terms below `2^−N(p+1)` relative
  /// to the leading one are dropped.
  ///
  /// Special cases:
  ///
  ///   - Any term NaN or infinite: the native sum of the terms, in `c0`.
  ///   - All terms zero: zero with the sign of the first term.
  ///   - Overflow while summing: `±∞`.
  pub(crate) fn renormalize(terms: &[L]) -> Self {
    debug_assert!(
      !terms.is_empty() && terms.len() <= MAX_TERMS,
      "Cannot renormalize {} terms",
      terms.len(),
    );

    if terms.iter().any(|x| !x.is_finite()) {
      let sum = terms[1..].iter().fold(terms[0], |acc, &x| acc + x);
      return Self::from_leading(sum)
    }

    if terms.iter().all(|&x| x == L::ZERO) {
      return Self::from_leading(terms[0])
    }

    let mut buf = [L::ZERO; MAX_TERMS];
    let buf = &mut buf[.. terms.len()];
    buf.copy_from_slice(terms);
    let mut c = match Self::compress(buf) {
      Ok(c) => c,
      Err(overflow) => return Self::from_leading(overflow),
    };

    // Very rarely, the native folding into the last component (or a long carry) leaves a pair that
    // still overlaps; another pass over the components fixes it.
    for _ in 0 .. 2 * N {
      if Self(c).is_canonical() { break }
      let mut again = c;
      c = match Self::compress(&mut again) {
        Ok(c) => c,
        Err(overflow) => return Self::from_leading(overflow),
      };
    }
    Self(c)
  }

  /// One bottom-up sweep of [`two_sum`] over `terms`, followed by a top-down extraction of the
  /// non-zero errors into at most `N` components. Returns `Err(±∞)` if the sum overflows.
  fn compress(terms: &mut [L]) -> Result<[L; N], L> {
    // After this, `terms[0]` is close to the whole sum and each `terms[i+1]` is the exact error
    // of `terms[i]`.
    for i in (0 .. terms.len() - 1).rev() {
      let (s, e) = two_sum(terms[i], terms[i + 1]);
      if !s.is_finite() { return Err(s) }
      terms[i] = s;
      terms[i + 1] = e;
    }

    let floor = terms[0].abs().ldexp(-((Self::LIMBS as u32 * (L::MANTISSA_DIGITS + 1)) as i32));
    let mut c = [L::ZERO; N];
    let mut s = terms[0];
    let mut k = 0;
    for &x in &terms[1..] {
      if k == Self::LIMBS - 1 {
        if x.abs() > floor { s += x }
      } else {
        let (hi, lo) = two_sum(s, x);
        if lo != L::ZERO {
          c[k] = hi;
          k += 1;
          s = lo;
        } else {
          s = hi;
        }
      }
    }
    c[k] = s;

    if !c[0].is_finite() { return Err(c[0]) }
    Ok(c)
  }
}
