use {
  crate::checksum::to_checksum_hex,
  bech32::{Bech32, Hrp},
  serde::{de, Deserialize, Deserializer, Serialize, Serializer},
  std::{
    fmt::{Debug, Display},
    ops::Deref,
    str::FromStr,
  },
  thiserror::Error,
};

/// Human readable part used by bech32 addresses on Initia.
pub const DEFAULT_PREFIX: &str = "init";

/// Width of account addresses (the ones owned by a key pair).
pub const ACCOUNT_WIDTH: usize = 20;

/// Width of object and resource addresses, and of every address
/// that appears in BCS encoded values.
pub const OBJECT_WIDTH: usize = 32;

/// Longest hex payload accepted after the `0x` prefix.
const MAX_HEX_DIGITS: usize = OBJECT_WIDTH * 2;

/// Reserved short form of the `0x00..01` address.
const SHORT_FORM: &str = "0x1";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
  #[error("address is required")]
  Empty,

  #[error("invalid hex address '{0}'")]
  InvalidHex(String),

  #[error("invalid bech32 address: {0}")]
  InvalidBech32(String),

  #[error("invalid bech32 prefix '{0}'")]
  InvalidPrefix(String),

  #[error("address width must be positive")]
  InvalidWidth,

  #[error("address has {significant} significant bytes, more than {width}")]
  TooLong { significant: usize, width: usize },
}

/// Canonical byte representation of an address on Initia.
///
/// Addresses come in two widths: 20 bytes for accounts, and 32 bytes
/// for objects and anything that goes through BCS. Both are the same
/// number left-padded with zero bytes, so the short Move convention
/// of dropping leading zeros (`0x1`) maps onto either width.
///
/// The textual views (bech32, checksummed hex, raw hex) are derived
/// from the bytes on demand and never stored. Two addresses are equal
/// when their canonical bytes are equal, regardless of which textual
/// form they were parsed from.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address(Vec<u8>);

impl Address {
  /// Parses a hex or bech32 address and infers its width from the
  /// number of significant digits or payload bytes.
  pub fn new(input: &str) -> Result<Self, Error> {
    to_bytes(input, None).map(Self)
  }

  /// Parses a hex or bech32 address into exactly `width` bytes.
  pub fn with_width(input: &str, width: usize) -> Result<Self, Error> {
    to_bytes(input, Some(width)).map(Self)
  }

  /// Right-aligns raw big-endian bytes into a `width` wide address.
  pub fn from_bytes(bytes: &[u8], width: usize) -> Result<Self, Error> {
    left_pad(bytes, width).map(Self)
  }

  pub fn width(&self) -> usize {
    self.0.len()
  }

  pub fn into_bytes(self) -> Vec<u8> {
    self.0
  }

  /// Re-pads the same value into a different width.
  pub fn widen(&self, width: usize) -> Result<Self, Error> {
    Self::from_bytes(&self.0, width)
  }

  /// True for the `0x00..01` address, rendered as `0x1`.
  pub fn is_short_form(&self) -> bool {
    match self.0.split_last() {
      Some((&1, rest)) => rest.iter().all(|b| *b == 0),
      _ => false,
    }
  }

  pub fn to_bech32(&self, prefix: &str) -> Result<String, Error> {
    let hrp =
      Hrp::parse(prefix).map_err(|_| Error::InvalidPrefix(prefix.into()))?;
    bech32::encode::<Bech32>(hrp, &self.0)
      .map_err(|e| Error::InvalidBech32(e.to_string()))
  }

  /// Display form of the address.
  ///
  /// `0x1` for the short form, EIP-55 checksummed hex for 20 byte
  /// addresses, and lowercase hex without leading zeros otherwise.
  pub fn to_hex(&self) -> String {
    if self.is_short_form() {
      return SHORT_FORM.to_owned();
    }

    if let Ok(account) = <&[u8; ACCOUNT_WIDTH]>::try_from(self.0.as_slice()) {
      return to_checksum_hex(account);
    }

    let raw = hex::encode(&self.0);
    match raw.trim_start_matches('0') {
      "" => "0x0".to_owned(),
      digits => format!("0x{digits}"),
    }
  }

  /// Full width lowercase hex, without the `0x` prefix.
  pub fn to_raw_hex(&self) -> String {
    hex::encode(&self.0)
  }
}

impl AsRef<[u8]> for Address {
  fn as_ref(&self) -> &[u8] {
    &self.0
  }
}

impl Deref for Address {
  type Target = [u8];

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl Display for Address {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.to_hex())
  }
}

impl Debug for Address {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "address(0x{})", self.to_raw_hex())
  }
}

impl From<Address> for String {
  fn from(address: Address) -> Self {
    address.to_hex()
  }
}

impl FromStr for Address {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::new(s)
  }
}

impl TryFrom<&str> for Address {
  type Error = Error;

  fn try_from(value: &str) -> Result<Self, Self::Error> {
    FromStr::from_str(value)
  }
}

// Serialized as full width hex so the width survives a round trip.
impl Serialize for Address {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format!("0x{}", self.to_raw_hex()))
  }
}

impl<'de> Deserialize<'de> for Address {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let text = String::deserialize(deserializer)?;
    Address::new(&text).map_err(de::Error::custom)
  }
}

/// Per-network address settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
  /// Human readable part of bech32 addresses.
  pub prefix: String,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      prefix: DEFAULT_PREFIX.into(),
    }
  }
}

impl Config {
  pub fn new(prefix: impl Into<String>) -> Self {
    Self {
      prefix: prefix.into(),
    }
  }

  /// Bech32 form of the address. Empty input yields an empty string
  /// so that optional addresses can be passed straight through.
  pub fn to_prefixed(&self, input: &str) -> Result<String, Error> {
    if input.is_empty() {
      return Ok(String::new());
    }
    Address::new(input)?.to_bech32(&self.prefix)
  }

  /// Checks whether the input is a well formed address on this network.
  ///
  /// Accepts `0x1`, any `0x` followed by 1 to 64 hex digits (checksummed
  /// or not), and bech32 strings carrying this network's prefix.
  pub fn validate(&self, input: &str) -> bool {
    if input == SHORT_FORM {
      return true;
    }

    if let Some(digits) = input.strip_prefix("0x") {
      return is_hex_digits(digits);
    }

    match bech32::decode(input) {
      Ok((hrp, data)) => {
        hrp.as_str().eq_ignore_ascii_case(&self.prefix)
          && left_pad(&data, default_width(data.len())).is_ok()
      }
      Err(_) => false,
    }
  }

  /// Compares two addresses by value, ignoring the textual form,
  /// zero padding and checksum casing.
  ///
  /// Both sides are compared at the 32 byte width, so this is more
  /// permissive than comparing `to_hex` views: `0xabc` equals its 64
  /// digit form even though their display hex differs.
  pub fn equals(&self, a: &str, b: &str) -> bool {
    match (a.is_empty(), b.is_empty()) {
      (true, true) => return true,
      (true, false) | (false, true) => return false,
      (false, false) => {}
    }

    if !self.validate(a) || !self.validate(b) {
      return false;
    }

    match (
      to_bytes(a, Some(OBJECT_WIDTH)),
      to_bytes(b, Some(OBJECT_WIDTH)),
    ) {
      (Ok(a), Ok(b)) => a == b,
      _ => false,
    }
  }
}

/// Canonical bytes of a hex or bech32 address.
///
/// Without an explicit width, 32 bytes are used when the input carries
/// more than 20 bytes worth of digits, and 20 otherwise.
pub fn to_bytes(input: &str, width: Option<usize>) -> Result<Vec<u8>, Error> {
  if input.is_empty() {
    return Err(Error::Empty);
  }

  let (bytes, digits) = match input.strip_prefix("0x") {
    Some(digits) => (decode_hex(digits)?, digits.len()),
    None => {
      let (_, data) = bech32::decode(input)
        .map_err(|e| Error::InvalidBech32(e.to_string()))?;
      let digits = data.len() * 2;
      (data, digits)
    }
  };

  let width = width.unwrap_or_else(|| default_width((digits + 1) / 2));
  left_pad(&bytes, width)
}

/// Bech32 form of the address using the default `init` prefix.
pub fn to_prefixed(input: &str) -> Result<String, Error> {
  Config::default().to_prefixed(input)
}

/// Display hex form, see [`Address::to_hex`].
pub fn to_hex(input: &str) -> Result<String, Error> {
  if input.is_empty() {
    return Ok(String::new());
  }
  Address::new(input).map(|a| a.to_hex())
}

/// Full width lowercase hex, see [`Address::to_raw_hex`].
pub fn to_raw_hex(input: &str) -> Result<String, Error> {
  if input.is_empty() {
    return Ok(String::new());
  }
  Address::new(input).map(|a| a.to_raw_hex())
}

pub fn validate(input: &str) -> bool {
  Config::default().validate(input)
}

pub fn equals(a: &str, b: &str) -> bool {
  Config::default().equals(a, b)
}

fn default_width(byte_len: usize) -> usize {
  if byte_len > ACCOUNT_WIDTH {
    OBJECT_WIDTH
  } else {
    ACCOUNT_WIDTH
  }
}

fn is_hex_digits(digits: &str) -> bool {
  !digits.is_empty()
    && digits.len() <= MAX_HEX_DIGITS
    && digits.bytes().all(|b| b.is_ascii_hexdigit())
}

fn decode_hex(digits: &str) -> Result<Vec<u8>, Error> {
  if !is_hex_digits(digits) {
    return Err(Error::InvalidHex(format!("0x{digits}")));
  }

  // an odd digit count means the leading zero nibble was dropped
  let even = if digits.len() % 2 == 1 {
    format!("0{digits}")
  } else {
    digits.to_owned()
  };

  hex::decode(even).map_err(|_| Error::InvalidHex(format!("0x{digits}")))
}

fn left_pad(bytes: &[u8], width: usize) -> Result<Vec<u8>, Error> {
  if width == 0 {
    return Err(Error::InvalidWidth);
  }

  let start = bytes.iter().position(|b| *b != 0).unwrap_or(bytes.len());
  let significant = &bytes[start..];
  if significant.len() > width {
    return Err(Error::TooLong {
      significant: significant.len(),
      width,
    });
  }

  let mut output = vec![0u8; width];
  output[width - significant.len()..].copy_from_slice(significant);
  Ok(output)
}
