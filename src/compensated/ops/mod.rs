use super::*;

/// Addition and subtraction (both use the same addition algorithm, and `a - b` is simply
/// `a + (-b)`).
mod add;

/// Multiplication.
mod mul;

/// Division.
mod div;

/// Helper macro for implementing operators for all combinations of value and reference
macro_rules! mk_ops {
  ($trait:ident, $trait_assign:ident, $name:ident, $name_assign:ident) => {
    impl<const N: usize, L: crate::Limb>
    $trait<CompensatedFloat<N, L>> for CompensatedFloat<N, L> {
      type Output = CompensatedFloat<N, L>;

      #[inline]
      fn $name(self, rhs: Self) -> Self::Output { self.$name(rhs) }
    }

    impl<const N: usize, L: crate::Limb>
    $trait<&CompensatedFloat<N, L>> for CompensatedFloat<N, L> {
      type Output = CompensatedFloat<N, L>;

      #[inline]
      fn $name(self, rhs: &Self) -> Self::Output { self.$name(*rhs) }
    }

    impl<const N: usize, L: crate::Limb>
    $trait<CompensatedFloat<N, L>> for &CompensatedFloat<N, L> {
      type Output = CompensatedFloat<N, L>;

      #[inline]
      fn $name(self, rhs: CompensatedFloat<N, L>) -> Self::Output { (*self).$name(rhs) }
    }

    impl<const N: usize, L: crate::Limb>
    $trait<&CompensatedFloat<N, L>> for &CompensatedFloat<N, L> {
      type Output = CompensatedFloat<N, L>;

      #[inline]
      fn $name(self, rhs: &CompensatedFloat<N, L>) -> Self::Output { (*self).$name(*rhs) }
    }

    impl<const N: usize, L: crate::Limb>
    $trait_assign<CompensatedFloat<N, L>> for CompensatedFloat<N, L> {
      #[inline]
      fn $name_assign(&mut self, rhs: CompensatedFloat<N, L>) { *self = self.$name(rhs) }
    }

    impl<const N: usize, L: crate::Limb>
    $trait_assign<&CompensatedFloat<N, L>> for CompensatedFloat<N, L> {
      #[inline]
      fn $name_assign(&mut self, rhs: &CompensatedFloat<N, L>) { *self = self.$name(*rhs) }
    }
  }
}

pub(crate) use mk_ops;

/// Macro for instantiating the suite of tests for a binary operator: accuracy against the exact
/// rational result, and native semantics whenever an operand is zero, infinite, or NaN.
macro_rules! mk_tests {
  ($op:tt, $op_assign:tt, $bound:expr) => {
    use crate::CompensatedFloat;
    use super::super::super::test::{exact, within};
    use malachite::rational::Rational;
    use proptest::prelude::*;

    #[allow(dead_code)]
    fn ops() {
      let mut a = crate::df64::ONE;
      let mut b = crate::df64::NEG_ONE;
      let _ = a $op b;
      let _ = &a $op b;
      let _ = a $op &b;
      let _ = &a $op &b;
      a $op_assign b;
      b $op_assign &a;
    }

    /// Aux function: check that `a $op b` is within `DIGITS − $bound` bits of the exact result, or
    /// that it behaves like the native operation on the leading limbs if there is no exact result.
    fn is_accurate<const N: usize, L: crate::Limb>(
      a: CompensatedFloat<N, L>,
      b: CompensatedFloat<N, L>,
    ) -> bool
    where
      Rational: TryFrom<CompensatedFloat<N, L>>,
    {
      let result = a $op b;
      if !a.is_finite() || !b.is_finite() || stringify!($op) == "/" && b.is_zero() {
        let native = a.components()[0] $op b.components()[0];
        let c0 = result.components()[0];
        let lower_zero = result.components()[1..].iter().all(|&x| x == L::default());
        return lower_zero && (c0 == native || c0 != c0 && native != native)
      }
      if !result.is_canonical() {
        return false
      }
      let exact_result = exact(a) $op exact(b);
      within(&exact(result), &exact_result, CompensatedFloat::<N, L>::DIGITS - $bound)
    }

    macro_rules! test_proptest {
      ($name:ident, $t:ty) => {
        proptest!{
          #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]
          #[test]
          fn $name(
            a in <$t>::cases_proptest_all(),
            b in <$t>::cases_proptest_all(),
          ) {
            prop_assert!(is_accurate(a, b), "{:?} ⋅ {:?}", a, b)
          }
        }
      };
    }

    test_proptest!{df64_proptest, crate::df64}
    test_proptest!{qf64_proptest, crate::qf64}
    test_proptest!{df32_proptest, crate::df32}
    test_proptest!{qf32_proptest, crate::qf32}
  }
}

pub(crate) use mk_tests;
