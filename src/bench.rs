//! Re-export some internals for benchmarking purposes; available with feature = "bench".

use crate::{CompensatedFloat, RoundInto, df32, df64, qf64};
use crate::underlying::{two_prod_dekker, two_prod_fma, two_sum};

impl<
  const N: usize,
  L: crate::Limb,
> CompensatedFloat<N, L> {
  pub fn bench_renormalize(terms: &[L]) -> Self {
    Self::renormalize(terms)
  }
}

pub fn bench_two_sum(a: f64, b: f64) -> (f64, f64) {
  two_sum(a, b)
}

pub fn bench_two_prod_dekker(a: f64, b: f64) -> (f64, f64) {
  two_prod_dekker(a, b)
}

pub fn bench_two_prod_fma(a: f64, b: f64) -> (f64, f64) {
  two_prod_fma(a, b)
}

// Export these for inspection with `cargo asm`.

#[unsafe(no_mangle)]
pub fn renormalize_df64(terms: &[f64; 3]) -> df64 {
  df64::renormalize(terms)
}

#[unsafe(no_mangle)]
pub fn renormalize_qf64(terms: &[f64; 5]) -> qf64 {
  qf64::renormalize(terms)
}

//

#[unsafe(no_mangle)]
pub fn add_df32(x: df32, y: df32) -> df32 {
  x + y
}

#[unsafe(no_mangle)]
pub fn add_df64(x: df64, y: df64) -> df64 {
  x + y
}

#[unsafe(no_mangle)]
pub fn add_qf64(x: qf64, y: qf64) -> qf64 {
  x + y
}

//

#[unsafe(no_mangle)]
pub fn mul_df32(x: df32, y: df32) -> df32 {
  x * y
}

#[unsafe(no_mangle)]
pub fn mul_df64(x: df64, y: df64) -> df64 {
  x * y
}

#[unsafe(no_mangle)]
pub fn mul_qf64(x: qf64, y: qf64) -> qf64 {
  x * y
}

//

#[unsafe(no_mangle)]
pub fn div_df64(x: df64, y: df64) -> df64 {
  x / y
}

#[unsafe(no_mangle)]
pub fn div_qf64(x: qf64, y: qf64) -> qf64 {
  x / y
}

#[unsafe(no_mangle)]
pub fn sqrt_df64(x: df64) -> df64 {
  x.sqrt()
}

#[unsafe(no_mangle)]
pub fn sqrt_qf64(x: qf64) -> qf64 {
  x.sqrt()
}

//

#[unsafe(no_mangle)]
pub fn round_i64_to_df64(num: i64) -> df64 {
  num.round_into()
}

#[unsafe(no_mangle)]
pub fn round_df64_to_i64(num: df64) -> i64 {
  num.round_into()
}

#[unsafe(no_mangle)]
pub fn round_f64_to_df32(num: f64) -> df32 {
  num.round_into()
}

#[unsafe(no_mangle)]
pub fn round_qf64_to_f64(num: qf64) -> f64 {
  num.round_into()
}

#[unsafe(no_mangle)]
pub fn convert_df64_to_qf64(num: df64) -> qf64 {
  num.convert()
}
