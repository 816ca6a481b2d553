use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use compensated_float::{df32, df64, qf64};
use compensated_float::bench::{bench_two_prod_dekker, bench_two_prod_fma, bench_two_sum};

// Establish a baseline by comparing with a single fpu add

fn baseline_fpu_add_f32(c: &mut Criterion) {
  c.bench_function("baseline_fpu_add_f32", |b| {
    b.iter(|| black_box(3.14_f32) + black_box(69.420));
  });
}

fn baseline_fpu_add_f64(c: &mut Criterion) {
  c.bench_function("baseline_fpu_add_f64", |b| {
    b.iter(|| black_box(3.14_f64) + black_box(69.420));
  });
}

// Time the error-free transformations on their own

fn eft(c: &mut Criterion) {
  let mut g = c.benchmark_group("eft");
  g.throughput(Throughput::Elements(1));
  g.bench_function("two_sum", |b| {
    b.iter(|| bench_two_sum(black_box(3.14), black_box(1e-20)));
  });
  g.bench_function("two_prod_dekker", |b| {
    b.iter(|| bench_two_prod_dekker(black_box(3.14), black_box(69.420)));
  });
  g.bench_function("two_prod_fma", |b| {
    b.iter(|| bench_two_prod_fma(black_box(3.14), black_box(69.420)));
  });
  g.finish();
}

// Time renormalizing a handful of overlapping terms

fn renormalize(c: &mut Criterion) {
  let mut g = c.benchmark_group("renormalize");
  let terms = [1.0, 1e-10, 3e-20, -7e-30, 1e-40];
  for n in 2 ..= terms.len() {
    g.throughput(Throughput::Elements(1));
    g.bench_with_input(BenchmarkId::new("df64", n), &terms[.. n], |b, terms| {
      b.iter(|| df64::bench_renormalize(black_box(terms)));
    });
    g.bench_with_input(BenchmarkId::new("qf64", n), &terms[.. n], |b, terms| {
      b.iter(|| qf64::bench_renormalize(black_box(terms)));
    });
  }
  g.finish();
}

// Time the arithmetic operations

fn nums_df64() -> [df64; 4] {
  let third = df64::ONE / df64::from(3);
  [third, df64::from(-1234567) * third, df64::from(2).sqrt(), df64::from_components([1e100, 1e83])]
}

fn nums_qf64() -> [qf64; 4] {
  let third = qf64::ONE / qf64::from(3);
  [third, qf64::from(-1234567) * third, qf64::from(2).sqrt(), qf64::from(7).recip() * qf64::from(1e100)]
}

fn nums_df32() -> [df32; 4] {
  let third = df32::ONE / df32::from(3);
  [third, df32::from(-1234567) * third, df32::from(2).sqrt(), df32::from(7).recip() * df32::from(1e30_f32)]
}

macro_rules! bench_binary {
  ($fn_name:ident, $group:literal, $op:tt) => {
    fn $fn_name(c: &mut Criterion) {
      let mut g = c.benchmark_group($group);
      g.throughput(Throughput::Elements(1));
      g.bench_function("df32", |b| {
        let nums = nums_df32();
        b.iter(|| black_box(nums[0]) $op black_box(nums[1]));
      });
      g.bench_function("df64", |b| {
        let nums = nums_df64();
        b.iter(|| black_box(nums[0]) $op black_box(nums[1]));
      });
      g.bench_function("qf64", |b| {
        let nums = nums_qf64();
        b.iter(|| black_box(nums[0]) $op black_box(nums[1]));
      });
      g.finish();
    }
  }
}

bench_binary!{add, "add", +}
bench_binary!{mul, "mul", *}
bench_binary!{div, "div", /}

fn sqrt(c: &mut Criterion) {
  let mut g = c.benchmark_group("sqrt");
  g.throughput(Throughput::Elements(1));
  g.bench_function("df64", |b| {
    let nums = nums_df64();
    b.iter(|| black_box(nums[3]).sqrt());
  });
  g.bench_function("qf64", |b| {
    let nums = nums_qf64();
    b.iter(|| black_box(nums[3]).sqrt());
  });
  g.finish();
}

// Time a long sum, the typical use of compensated arithmetic

fn sum(c: &mut Criterion) {
  let mut g = c.benchmark_group("sum");
  let xs: Vec<f64> = (1 ..= 1000).map(|i| 1.0 / i as f64).collect();
  g.throughput(Throughput::Elements(xs.len() as u64));
  g.bench_function("f64", |b| {
    b.iter(|| black_box(&xs).iter().sum::<f64>());
  });
  g.bench_function("df64", |b| {
    b.iter(|| black_box(&xs).iter().fold(df64::ZERO, |acc, &x| acc + x));
  });
  g.bench_function("qf64", |b| {
    b.iter(|| black_box(&xs).iter().fold(qf64::ZERO, |acc, &x| acc + x));
  });
  g.finish();
}

criterion_group!(baseline_fpu,
  baseline_fpu_add_f32,
  baseline_fpu_add_f64,
);

criterion_group!(kernels,
  eft,
  renormalize,
);

criterion_group!(ops,
  add,
  mul,
  div,
  sqrt,
  sum,
);

criterion_main!(baseline_fpu, kernels, ops);
