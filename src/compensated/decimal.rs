use super::*;

use crate::RoundFrom;

use malachite::{Integer, Natural};
use malachite::rational::Rational;
use malachite::base::num::arithmetic::traits::{Abs, Pow};
use malachite::base::num::conversion::traits::RoundingFrom;
use malachite::base::rounding_modes::RoundingMode;

/// Decimal exponents beyond this are certainly out of range for any limb type, so the value is
/// zero or infinite without computing a huge power of ten.
const EXP10_LIMIT: i64 = 400;

/// An error which can be returned when parsing a [`CompensatedFloat`] from a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
  kind: ParseErrorKind,
}

/// The reason why a string could not be parsed; see [`ParseError::kind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseErrorKind {
  /// The string is empty.
  Empty,
  /// A character that is not allowed at that position, such as a letter or a second decimal
  /// point. `position` is its byte offset in the string.
  InvalidDigit { position: usize },
  /// There are no digits in the significand (e.g. `"-"`, `"."`, or `"e5"`).
  MissingDigits,
  /// There is an exponent marker but no digits after it (e.g. `"1e"` or `"1e+"`).
  MissingExponent,
}

impl ParseError {
  /// The detailed cause of the error.
  pub fn kind(&self) -> &ParseErrorKind {
    &self.kind
  }
}

impl From<ParseErrorKind> for ParseError {
  fn from(kind: ParseErrorKind) -> Self {
    Self { kind }
  }
}

impl core::fmt::Display for ParseError {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    match self.kind {
      ParseErrorKind::Empty => f.write_str("cannot parse a number from an empty string"),
      ParseErrorKind::InvalidDigit { position } => write!(f, "invalid character at position {position}"),
      ParseErrorKind::MissingDigits => f.write_str("number has no digits"),
      ParseErrorKind::MissingExponent => f.write_str("exponent has no digits"),
    }
  }
}

impl core::error::Error for ParseError {}

/// The pieces of a decimal number, `±digits × 10^exp`; `digits` may still contain the decimal
/// point.
struct Decimal<'a> {
  negative: bool,
  digits: &'a str,
  exp: i64,
}

/// What a string spells.
enum Parsed<'a> {
  Finite(Decimal<'a>),
  Infinity { negative: bool },
  Nan,
}

/// Split `s` into its sign, significand digits, and the decimal exponent that applies to them.
fn scan(s: &str) -> Result<Parsed<'_>, ParseError> {
  if s.is_empty() {
    return Err(ParseErrorKind::Empty.into())
  }
  let bytes = s.as_bytes();
  let (negative, start) = match bytes[0] {
    b'-' => (true, 1),
    b'+' => (false, 1),
    _ => (false, 0),
  };

  let rest = &s[start ..];
  if rest.eq_ignore_ascii_case("inf") || rest.eq_ignore_ascii_case("infinity") {
    return Ok(Parsed::Infinity { negative })
  }
  if rest.eq_ignore_ascii_case("nan") {
    return Ok(Parsed::Nan)
  }

  // Significand
  let mut i = start;
  let int_start = i;
  while i < bytes.len() && bytes[i].is_ascii_digit() { i += 1 }
  let int_end = i;
  let (frac_start, frac_end) = if i < bytes.len() && bytes[i] == b'.' {
    i += 1;
    let frac_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() { i += 1 }
    (frac_start, i)
  } else {
    (i, i)
  };
  if int_end == int_start && frac_end == frac_start {
    return Err(match bytes.get(i) {
      None | Some(b'e' | b'E') => ParseErrorKind::MissingDigits,
      Some(_) => ParseErrorKind::InvalidDigit { position: i },
    }.into())
  }

  // Exponent
  let mut exp: i64 = 0;
  if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
    i += 1;
    let exp_negative = match bytes.get(i) {
      Some(b'-') => { i += 1; true }
      Some(b'+') => { i += 1; false }
      _ => false,
    };
    let exp_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
      exp = exp.saturating_mul(10).saturating_add((bytes[i] - b'0') as i64);
      i += 1;
    }
    if i == exp_start {
      return Err(match bytes.get(i) {
        None => ParseErrorKind::MissingExponent,
        Some(_) => ParseErrorKind::InvalidDigit { position: i },
      }.into())
    }
    if exp_negative { exp = -exp }
  }

  // Anything left over (a suffix such as `f` or `L`, a second point, whitespace) is an error.
  if i < bytes.len() {
    return Err(ParseErrorKind::InvalidDigit { position: i }.into())
  }

  let frac_len = (frac_end - frac_start) as i64;
  Ok(Parsed::Finite(Decimal {
    negative,
    digits: &s[int_start .. frac_end],
    exp: exp.saturating_sub(frac_len),
  }))
}

impl<
  const N: usize,
  L: crate::Limb,
> CompensatedFloat<N, L> {
  /// The exact rational value of the magnitude of a scanned decimal number, or `Err(overflows)`
  /// if it is certainly out of range.
  fn decimal_to_rational(decimal: &Decimal) -> Result<Rational, bool> {
    let mut natural = Natural::from(0u32);
    let mut significant = 0_i64;
    for b in decimal.digits.bytes().filter(u8::is_ascii_digit) {
      if natural != 0u32 || b != b'0' {
        significant += 1;
      }
      natural = natural * Natural::from(10u32) + Natural::from(b - b'0');
    }
    if natural == 0u32 {
      return Ok(Rational::from(0))
    }
    let magnitude = decimal.exp.saturating_add(significant);
    if magnitude > EXP10_LIMIT {
      return Err(true)
    }
    if magnitude < -EXP10_LIMIT {
      return Err(false)
    }
    let scale = Rational::from(10).pow(decimal.exp);
    Ok(Rational::from(natural) * scale)
  }

  /// Parse a decimal string; see the [`FromStr`](core::str::FromStr) impl.
  fn parse_decimal(s: &str) -> Result<Self, ParseError> {
    let decimal = match scan(s)? {
      Parsed::Nan => return Ok(Self::from_leading(L::NAN)),
      Parsed::Infinity { negative } => {
        return Ok(Self::from_leading(if negative {L::NEG_INFINITY} else {L::INFINITY}))
      }
      Parsed::Finite(decimal) => decimal,
    };
    let abs = match Self::decimal_to_rational(&decimal) {
      Ok(exact) => Self::round_from(&exact),
      Err(true) => Self::from_leading(L::INFINITY),
      Err(false) => Self::ZERO,
    };
    Ok(if decimal.negative {-abs} else {abs})
  }

  /// Format `self` in scientific notation with exactly `digits` significant decimal digits
  /// (at least 1), correctly rounded from the exact value: `d.ddd…e±x`, in the same style as
  /// `{:e}` for native floats. NaN and infinities are written as `NaN`, `inf`, and `-inf`.
  ///
  /// With `digits = MAX_DIGITS10`, parsing the string back gives the same value (to within one
  /// [epsilon](Self::EPSILON)).
  ///
  /// ```
  /// # use compensated_float::df64;
  /// let x = df64::ONE / df64::from(3);
  /// assert_eq!(x.to_decimal_string(8), "3.3333333e-1");
  /// assert_eq!(df64::from(-25).to_decimal_string(1), "-2e1");
  /// assert_eq!(df64::ZERO.to_decimal_string(3), "0.00e0");
  /// ```
  pub fn to_decimal_string(self, digits: usize) -> String {
    if self.is_nan() {
      return "NaN".to_string()
    }
    let sign = if self.is_sign_negative() {"-"} else {""};
    if self.is_infinite() {
      return format!("{sign}inf")
    }
    let digits = digits.max(1);
    let exact = match Rational::try_from(self) {
      Ok(exact) => exact.abs(),
      Err(_) => return "NaN".to_string(),
    };
    if exact == 0u32 {
      return format_scientific(sign, &"0".repeat(digits), 0)
    }

    // The exponent estimated from the leading limb may be off by one either way.
    let mut exp10 = libm::floor(libm::log10(self.leading().abs().to_f64())) as i64;
    let ten = Rational::from(10);
    let lower = Integer::from(10).pow(digits as u64 - 1);
    let upper = &lower * Integer::from(10);
    for _ in 0 .. 4 {
      let scaled = &exact / (&ten).pow(exp10 - digits as i64 + 1);
      let (rounded, _) = Integer::rounding_from(&scaled, RoundingMode::Nearest);
      if rounded >= upper {
        exp10 += 1;
      } else if rounded < lower {
        exp10 -= 1;
      } else {
        return format_scientific(sign, &rounded.to_string(), exp10)
      }
    }
    // Only reachable if rounding carries into a new digit, e.g. 9.99… → 10.0…
    format_scientific(sign, &upper.to_string()[.. digits], exp10)
  }
}

/// Put the decimal point after the first of `digits`, and the exponent at the end.
fn format_scientific(sign: &str, digits: &str, exp10: i64) -> String {
  let (first, rest) = digits.split_at(1);
  if rest.is_empty() {
    format!("{sign}{first}e{exp10}")
  } else {
    format!("{sign}{first}.{rest}e{exp10}")
  }
}

impl<
  const N: usize,
  L: crate::Limb,
> core::str::FromStr for CompensatedFloat<N, L> {
  type Err = ParseError;

  /// Parse a decimal string into the nearest compensated float.
  ///
  /// The accepted grammar is an optional sign, then digits with an optional fraction, then an
  /// optional exponent (`e` or `E`, optional sign, digits); or `inf`, `infinity`, or `nan` in
  /// any case, with an optional sign. Nothing else is accepted: no whitespace, no `_`
  /// separators, and no type suffixes such as `1.0f` or `2L`.
  ///
  /// The decimal value is converted exactly, and rounded into the limbs only at the end.
  ///
  /// ```
  /// # use compensated_float::{df64, ParseErrorKind};
  /// let x: df64 = "0.1".parse().unwrap();
  /// assert_eq!(x.components()[0], 0.1);
  /// assert!(x.components()[1] < 0.);
  ///
  /// let err = "1.0f".parse::<df64>().unwrap_err();
  /// assert_eq!(err.kind(), &ParseErrorKind::InvalidDigit { position: 3 });
  /// ```
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::parse_decimal(s)
  }
}
