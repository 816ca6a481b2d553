//! Error-free transformations: a native add or multiply, together with the exact rounding error
//! of that operation as a second limb.
//!
//! All of these assume round-to-nearest-even, which is the only rounding mode Rust exposes.

use super::Sealed;

/// Knuth's TwoSum. Returns `(s, e)` where `s = fl(a + b)` and `a + b = s + e` exactly, with no
/// precondition on the relative magnitude of `a` and `b`.
///
/// Both `s` and `e` are symmetric in `a` and `b`: `e` is the exact error, so it does not depend
/// on which operand is subtracted first.
#[inline]
pub(crate) fn two_sum<L: Sealed>(a: L, b: L) -> (L, L) {
  let s = a + b;
  let bb = s - a;
  let e = (a - (s - bb)) + (b - bb);
  (s, e)
}

/// Dekker's Fast-TwoSum: as [`two_sum`], but only exact if `|a| ≥ |b|` (or `a` is zero).
#[inline]
pub(crate) fn quick_two_sum<L: Sealed>(a: L, b: L) -> (L, L) {
  debug_assert!(
    !(a.abs() < b.abs()) || a == L::ZERO,
    "quick_two_sum requires |a| >= |b|, got {a:e} and {b:e}",
  );
  let s = a + b;
  let e = b - (s - a);
  (s, e)
}

/// Returns `(p, e)` where `p = fl(a × b)` and `a × b = p + e` exactly, provided `p` does not
/// overflow and `e` does not underflow.
///
/// With hardware FMA this is a single `fma(a, b, -p)`. Otherwise it falls back on Dekker's
/// product (see [`two_prod_dekker`] for its range restriction). Both paths compute the exact
/// error, so they agree bit for bit wherever the Dekker path is valid.
#[inline]
pub(crate) fn two_prod<L: Sealed>(a: L, b: L) -> (L, L) {
  #[cfg(target_feature = "fma")]
  { two_prod_fma(a, b) }
  #[cfg(not(target_feature = "fma"))]
  { two_prod_dekker(a, b) }
}

/// [`two_prod`] through a fused multiply-add.
#[inline]
#[cfg_attr(not(any(test, feature = "bench", target_feature = "fma")), allow(dead_code))]
pub(crate) fn two_prod_fma<L: Sealed>(a: L, b: L) -> (L, L) {
  let p = a * b;
  let e = a.mul_add(b, -p);
  (p, e)
}

/// [`two_prod`] through Dekker's split-and-multiply.
///
/// Valid for any finite `a` and `b` whose product does not overflow: an operand too large to
/// split is scaled down by a power of two first, and the product and its error scaled back up.
/// The partial products `hi × lo` and `lo × lo` must not be subnormal though: if `|a × b|` is
/// below roughly `MIN_POSITIVE × 2^p`, the returned error is only approximate.
#[inline]
#[cfg_attr(not(any(test, feature = "bench", not(target_feature = "fma"))), allow(dead_code))]
pub(crate) fn two_prod_dekker<L: Sealed>(a: L, b: L) -> (L, L) {
  if a.abs() > L::SPLIT_THRESHOLD || b.abs() > L::SPLIT_THRESHOLD {
    let (a, b) = if a.abs() > L::SPLIT_THRESHOLD {
      (a * L::SPLIT_SCALE_DOWN, b)
    } else {
      (a, b * L::SPLIT_SCALE_DOWN)
    };
    let (p, e) = split_prod(a, b);
    (p * L::SPLIT_SCALE_UP, e * L::SPLIT_SCALE_UP)
  } else {
    split_prod(a, b)
  }
}

#[inline]
#[cfg_attr(target_feature = "fma", allow(dead_code))]
fn split_prod<L: Sealed>(a: L, b: L) -> (L, L) {
  let p = a * b;
  let (a_hi, a_lo) = split(a);
  let (b_hi, b_lo) = split(b);
  let e = ((a_hi * b_hi - p) + a_hi * b_lo + a_lo * b_hi) + a_lo * b_lo;
  (p, e)
}

/// Veltkamp's split of `a` into a high part with `⌊p/2⌋` significant bits and a low part with
/// the rest, such that `a = hi + lo` exactly. Needs `|a|` at most [`Sealed::SPLIT_THRESHOLD`],
/// or the high part can round up to infinity.
#[inline]
#[cfg_attr(target_feature = "fma", allow(dead_code))]
fn split<L: Sealed>(a: L) -> (L, L) {
  let t = L::SPLITTER * a;
  let hi = t - (t - a);
  let lo = a - hi;
  (hi, lo)
}
