//! Scaled integer representation of decimal numbers.
//!
//! Move stores fixed point and decimal numbers as unsigned integers
//! multiplied by a constant scale. Scaling up always truncates toward
//! zero, callers that need another rounding mode must round first.

use {crate::Error, num_bigint::BigUint};

/// Positive exponents beyond this are rejected before any big number
/// is built.
const MAX_EXPONENT: i64 = 4096;

/// Scale factor of a fixed point encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
  /// Value is multiplied by `2^bits`.
  Binary(u32),
  /// Value is multiplied by `10^digits`.
  Decimal(u32),
}

impl Scale {
  pub fn factor(&self) -> BigUint {
    match *self {
      Scale::Binary(bits) => BigUint::from(1u8) << bits,
      Scale::Decimal(digits) => BigUint::from(10u32).pow(digits),
    }
  }
}

/// `floor(|text| * scale)` for decimal text such as `1.23`, `-0.5`
/// or `1e-18`.
///
/// Negative inputs are only accepted when they truncate to zero.
pub fn scale_up(text: &str, scale: Scale) -> Result<BigUint, Error> {
  let parsed = parse(text)?;
  let ten = BigUint::from(10u32);

  let scaled = parsed.magnitude * scale.factor();
  let scaled = if parsed.exponent >= 0 {
    scaled * ten.pow(parsed.exponent as u32)
  } else {
    let shift = parsed.exponent.unsigned_abs();
    // 10^shift > 2^(3 * shift), anything narrower truncates to zero
    if scaled.bits() <= shift.saturating_mul(3) {
      BigUint::default()
    } else {
      scaled / ten.pow(shift as u32)
    }
  };

  if parsed.negative && scaled.bits() != 0 {
    return Err(Error::UnsupportedValue(format!(
      "negative value '{text}' cannot be stored as an unsigned integer"
    )));
  }
  Ok(scaled)
}

/// Exact decimal rendering of `value / 10^digits`, without trailing
/// zeros in the fractional part.
pub fn scale_down_exact(value: &BigUint, digits: u32) -> String {
  let factor = Scale::Decimal(digits).factor();
  let integer = value / &factor;
  let fraction = value % &factor;

  if fraction.bits() == 0 {
    return integer.to_string();
  }

  let fraction =
    format!("{:0>width$}", fraction.to_string(), width = digits as usize);
  format!("{integer}.{}", fraction.trim_end_matches('0'))
}

/// `value / 2^bits` as the nearest float.
pub fn scale_down_float(value: u128, bits: u32) -> f64 {
  value as f64 / 2f64.powi(bits as i32)
}

struct Parsed {
  negative: bool,
  magnitude: BigUint,
  /// Power of ten applied to `magnitude`.
  exponent: i64,
}

fn parse(text: &str) -> Result<Parsed, Error> {
  let invalid = || Error::InvalidInput(format!("invalid decimal '{text}'"));

  let trimmed = text.trim();
  let (negative, unsigned) = match trimmed.strip_prefix('-') {
    Some(rest) => (true, rest),
    None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
  };

  let (mantissa, exponent) = match unsigned.find(|c: char| c == 'e' || c == 'E') {
    Some(at) => (
      &unsigned[..at],
      unsigned[at + 1..].parse::<i64>().map_err(|_| invalid())?,
    ),
    None => (unsigned, 0),
  };

  let (integer, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
  let is_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
  if (integer.is_empty() && fraction.is_empty())
    || !is_digits(integer)
    || !is_digits(fraction)
  {
    return Err(invalid());
  }

  let exponent = exponent
    .checked_sub(fraction.len() as i64)
    .ok_or_else(invalid)?;
  if exponent > MAX_EXPONENT {
    return Err(Error::UnsupportedValue(format!(
      "exponent of '{text}' is out of range"
    )));
  }

  let digits = format!("{integer}{fraction}");
  let magnitude =
    BigUint::parse_bytes(digits.as_bytes(), 10).ok_or_else(invalid)?;

  Ok(Parsed {
    negative,
    magnitude,
    exponent,
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  const DECIMAL: Scale = Scale::Decimal(18);

  fn big(text: &str) -> BigUint {
    text.parse().unwrap()
  }

  #[test]
  fn scales_decimal_text() {
    assert_eq!(scale_up("1", DECIMAL).unwrap(), big("1000000000000000000"));
    assert_eq!(scale_up("0.000000000000000001", DECIMAL).unwrap(), big("1"));
    assert_eq!(scale_up("+2.5", DECIMAL).unwrap(), big("2500000000000000000"));
    assert_eq!(scale_up(".5", DECIMAL).unwrap(), big("500000000000000000"));
    assert_eq!(scale_up("3.", DECIMAL).unwrap(), big("3000000000000000000"));
    assert_eq!(scale_up("1e-18", DECIMAL).unwrap(), big("1"));
    assert_eq!(scale_up("1.5E3", DECIMAL).unwrap(), big("1500000000000000000000"));
  }

  #[test]
  fn truncates_toward_zero() {
    assert_eq!(scale_up("0.0000000000000000019", DECIMAL).unwrap(), big("1"));
    assert_eq!(scale_up("1.23", Scale::Binary(32)).unwrap(), big("5282809774"));
    assert_eq!(
      scale_up("123456789.987654321", Scale::Binary(64)).unwrap(),
      big("2277375809063967053921502177")
    );
    assert_eq!(scale_up("-0.0000000000000000001", DECIMAL).unwrap(), big("0"));
  }

  #[test]
  fn tiny_values_truncate_to_zero() {
    assert_eq!(scale_up("1e-5000", DECIMAL).unwrap(), big("0"));
    assert_eq!(scale_up("-1e-5000", DECIMAL).unwrap(), big("0"));
    let long = format!("0.{}1", "0".repeat(5000));
    assert_eq!(scale_up(&long, DECIMAL).unwrap(), big("0"));
    assert_eq!(scale_up("1e-9223372036854775807", DECIMAL).unwrap(), big("0"));

    // a long mantissa still scales exactly
    let precise = format!("1{}e-5000", "0".repeat(5000));
    assert_eq!(scale_up(&precise, DECIMAL).unwrap(), big("1000000000000000000"));
    assert_eq!(scale_up("1000e-21", DECIMAL).unwrap(), big("1"));
  }

  #[test]
  fn rejects_negative_values() {
    assert!(matches!(
      scale_up("-1", DECIMAL),
      Err(Error::UnsupportedValue(_))
    ));
  }

  #[test]
  fn rejects_malformed_text() {
    for text in ["", ".", "-", "abc", "1.2.3", "1e", "e5", "1,5", "NaN", "inf"] {
      assert!(
        matches!(scale_up(text, DECIMAL), Err(Error::InvalidInput(_))),
        "{text}"
      );
    }
    assert!(matches!(
      scale_up("1e100000", DECIMAL),
      Err(Error::UnsupportedValue(_))
    ));
  }

  #[test]
  fn renders_exact_decimals() {
    assert_eq!(scale_down_exact(&big("1000000000000000000"), 18), "1");
    assert_eq!(scale_down_exact(&big("10"), 18), "0.00000000000000001");
    assert_eq!(scale_down_exact(&big("1"), 18), "0.000000000000000001");
    assert_eq!(scale_down_exact(&big("0"), 18), "0");
    assert_eq!(
      scale_down_exact(&big("9007199254740991123456789012345678"), 18),
      "9007199254740991.123456789012345678"
    );
    assert_eq!(scale_down_exact(&big("2500000000000000000"), 18), "2.5");
  }

  #[test]
  fn renders_binary_fractions() {
    assert_eq!(scale_down_float(1 << 31, 32), 0.5);
    assert_eq!(scale_down_float(3 << 32, 32), 3.0);
    assert_eq!(scale_down_float(1 << 64, 64), 1.0);
  }
}
