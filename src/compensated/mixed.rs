use super::*;

use crate::RoundFrom;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

/// One operand of a mixed-type arithmetic operation, before it is promoted to a
/// [`CompensatedFloat<N, L>`].
///
/// Every primitive number converts into an `Operand` with [`From`], keeping track of what it was;
/// [`Operand::promote`] then turns any of them into a compensated float of the requested shape.
/// This is what backs the arithmetic operators between compensated floats and primitives:
///
/// ```
/// # use compensated_float::*;
/// let x = df64::from(10);
/// assert_eq!(x + 1_u8, df64::from(11));
/// assert_eq!(2.5_f32 * x, df64::from(25));
/// assert_eq!(1_i32 - x, df64::from(-9));
/// assert_eq!(x / 4_i64, df64::from_components([2.5, 0.]));
///
/// let op = Operand::<2, f64>::from(-3_i16);
/// assert_eq!(op, Operand::Integral { magnitude: 3, negative: true, width: 16, signed: true });
/// assert_eq!(op.promote(), df64::from(-3));
/// ```
///
/// Since every primitive type is accepted, an unsuffixed literal can leave the compiler unable to
/// pick one (error E0282), in particular when a method is called on the result, as in
/// `(x * 3 - 1).abs()`. Suffix the literal (`3_i32`, `1.0_f64`) to fix its type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand<const N: usize, L: crate::Limb> {
  /// An integer of any width, as its sign and magnitude.
  Integral {
    magnitude: u128,
    negative: bool,
    /// Width of the integer type in bits.
    width: u32,
    /// Whether the integer type is signed.
    signed: bool,
  },
  /// A native float, widened to `f64` (which is exact).
  FloatingNative {
    value: f64,
    /// Width of the float type in bits.
    width: u32,
  },
  /// Already a compensated float.
  Compensated(CompensatedFloat<N, L>),
}

impl<
  const N: usize,
  L: crate::Limb,
> Operand<N, L> {
  /// Convert the operand into a compensated float. Integers are rounded if they don't fit in
  /// the limbs, and `f64` values are rounded if the limbs are `f32`.
  pub fn promote(self) -> CompensatedFloat<N, L> {
    match self {
      Operand::Integral { magnitude, negative, .. } => CompensatedFloat::from_integer(negative, magnitude),
      Operand::FloatingNative { value, .. } => CompensatedFloat::round_from(value),
      Operand::Compensated(x) => x,
    }
  }

  /// Whether [`Operand::promote`] represents the operand exactly.
  ///
  /// ```
  /// # use compensated_float::*;
  /// assert!(Operand::<2, f64>::from(u64::MAX).is_exact());
  /// assert!(!Operand::<2, f32>::from(u64::MAX).is_exact());
  /// assert!(!Operand::<2, f32>::from(0.1_f64).is_exact());
  /// assert!(Operand::<2, f32>::from(0.1_f32).is_exact());
  /// ```
  pub fn is_exact(&self) -> bool {
    match *self {
      Operand::Integral { magnitude, width, .. } => {
        let span = u128::BITS - magnitude.leading_zeros() - magnitude.trailing_zeros().min(u128::BITS);
        width <= 32 || magnitude == 0 || span <= N as u32 * L::MANTISSA_DIGITS
      },
      Operand::FloatingNative { value, width } => {
        width <= 32 || !value.is_finite() || f64::round_from(self.promote()) == value
      },
      Operand::Compensated(_) => true,
    }
  }
}

macro_rules! operand_from_int {
  ($signed:ty, $unsigned:ty) => {
    impl<const N: usize, L: crate::Limb> From<$signed> for Operand<N, L> {
      fn from(value: $signed) -> Self {
        Operand::Integral {
          magnitude: value.unsigned_abs() as u128,
          negative: value < 0,
          width: <$signed>::BITS,
          signed: true,
        }
      }
    }

    impl<const N: usize, L: crate::Limb> From<$unsigned> for Operand<N, L> {
      fn from(value: $unsigned) -> Self {
        Operand::Integral {
          magnitude: value as u128,
          negative: false,
          width: <$unsigned>::BITS,
          signed: false,
        }
      }
    }
  }
}

operand_from_int!{i8, u8}
operand_from_int!{i16, u16}
operand_from_int!{i32, u32}
operand_from_int!{i64, u64}
operand_from_int!{i128, u128}
operand_from_int!{isize, usize}

impl<const N: usize, L: crate::Limb> From<f32> for Operand<N, L> {
  fn from(value: f32) -> Self {
    Operand::FloatingNative { value: value.into(), width: 32 }
  }
}

impl<const N: usize, L: crate::Limb> From<f64> for Operand<N, L> {
  fn from(value: f64) -> Self {
    Operand::FloatingNative { value, width: 64 }
  }
}

impl<const N: usize, L: crate::Limb> From<CompensatedFloat<N, L>> for Operand<N, L> {
  fn from(value: CompensatedFloat<N, L>) -> Self {
    Operand::Compensated(value)
  }
}

/// Operators between a compensated float and a primitive, in both orders, and the assigning
/// versions with the compensated float on the left.
macro_rules! mk_mixed_ops {
  ($trait:ident, $trait_assign:ident, $name:ident, $name_assign:ident; $($prim:ty),*) => {
    $(
      impl<const N: usize, L: crate::Limb>
      $trait<$prim> for CompensatedFloat<N, L> {
        type Output = CompensatedFloat<N, L>;

        #[inline]
        fn $name(self, rhs: $prim) -> Self::Output {
          self.$name(Operand::<N, L>::from(rhs).promote())
        }
      }

      impl<const N: usize, L: crate::Limb>
      $trait<CompensatedFloat<N, L>> for $prim {
        type Output = CompensatedFloat<N, L>;

        #[inline]
        fn $name(self, rhs: CompensatedFloat<N, L>) -> Self::Output {
          Operand::<N, L>::from(self).promote().$name(rhs)
        }
      }

      impl<const N: usize, L: crate::Limb>
      $trait_assign<$prim> for CompensatedFloat<N, L> {
        #[inline]
        fn $name_assign(&mut self, rhs: $prim) {
          *self = self.$name(Operand::<N, L>::from(rhs).promote())
        }
      }
    )*
  }
}

macro_rules! mk_mixed_ops_all {
  ($($prim:ty),*) => {
    mk_mixed_ops!{Add, AddAssign, add, add_assign; $($prim),*}
    mk_mixed_ops!{Sub, SubAssign, sub, sub_assign; $($prim),*}
    mk_mixed_ops!{Mul, MulAssign, mul, mul_assign; $($prim),*}
    mk_mixed_ops!{Div, DivAssign, div, div_assign; $($prim),*}
  }
}

mk_mixed_ops_all!{i8, u8, i16, u16, i32, u32, i64, u64, i128, u128, isize, usize, f32, f64}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{df32, df64, qf32, qf64};
  use super::super::test::exact;
  use malachite::rational::Rational;
  use proptest::prelude::*;

  #[test]
  fn operand_from() {
    assert_eq!(
      Operand::<2, f64>::from(200_u8),
      Operand::Integral { magnitude: 200, negative: false, width: 8, signed: false },
    );
    assert_eq!(
      Operand::<2, f64>::from(i128::MIN),
      Operand::Integral { magnitude: 1 << 127, negative: true, width: 128, signed: true },
    );
    assert_eq!(Operand::<4, f32>::from(0.5_f32), Operand::FloatingNative { value: 0.5, width: 32 });
    assert_eq!(Operand::from(df64::ONE), Operand::Compensated(df64::ONE));
  }

  #[test]
  fn promote() {
    assert_eq!(Operand::<2, f64>::from(-7_i8).promote(), df64::from(-7));
    assert_eq!(Operand::<4, f64>::from(u128::MAX).promote(), qf64::round_from(u128::MAX));
    assert_eq!(Operand::<2, f32>::from(0.1_f64).promote(), df32::round_from(0.1_f64));
    assert!(Operand::<2, f64>::from(f64::NAN).promote().is_nan());
    assert_eq!(Operand::Compensated(qf32::NEG_ONE).promote(), qf32::NEG_ONE);
  }

  #[test]
  fn is_exact() {
    assert!(Operand::<2, f32>::from(i32::MIN).is_exact());
    assert!(Operand::<2, f32>::from(1_u64 << 60).is_exact());
    assert!(!Operand::<2, f64>::from(u128::MAX).is_exact());
    assert!(Operand::<4, f64>::from(u128::MAX).is_exact());
    assert!(Operand::<2, f32>::from(f64::INFINITY).is_exact());
    assert!(Operand::<2, f64>::from(0.1).is_exact());
  }

  #[test]
  fn mixed_operators() {
    let x = df64::from(6);
    assert_eq!(x + 1_i32, df64::from(7));
    assert_eq!(x - 1_u64, df64::from(5));
    assert_eq!(x * -2_i128, df64::from(-12));
    assert_eq!(x / 4_usize, df64::from_components([1.5, 0.0]));
    assert_eq!(1_i8 + x, df64::from(7));
    assert_eq!(1_u16 - x, df64::from(-5));
    assert_eq!(0.5_f32 * x, df64::from(3));
    assert_eq!(3.0_f64 / x, df64::from_components([0.5, 0.0]));
    assert!((x / 0.0_f64).is_infinite());
  }

  #[test]
  fn mixed_assign() {
    let mut x = qf64::from(10);
    x += 5_u32;
    x -= 1.5_f64;
    x *= 2_i16;
    x /= 3_isize;
    assert_eq!(x, qf64::from(9));
  }

  #[test]
  fn mixed_keeps_precision() {
    let x = df64::ONE + 1e-20_f64;
    assert_eq!(x.components(), [1.0, 1e-20]);
    let x = qf64::from(0) + u128::MAX;
    assert_eq!(exact(x), Rational::from(u128::MAX));
  }

  proptest!{
    #![proptest_config(ProptestConfig::with_cases(crate::PROPTEST_CASES))]

    #[test]
    fn mixed_matches_promoted(a in df64::cases_proptest(), b in any::<i64>()) {
      let promoted = df64::from(b);
      prop_assert_eq!(a + b, a + promoted);
      prop_assert_eq!(b - a, promoted - a);
      prop_assert_eq!(a * b, a * promoted);
      prop_assert_eq!(b / a, promoted / a);
    }
  }
}
