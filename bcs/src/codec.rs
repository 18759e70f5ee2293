use {
  crate::{
    decimal::{scale_down_exact, scale_down_float, scale_up, Scale},
    wire::{write_length, Reader},
    Error,
    TypeTag,
    Value,
  },
  initia_primitives::{Address, OBJECT_WIDTH},
  num_bigint::BigUint,
  std::{fmt::Display, str::FromStr},
  tracing::trace,
};

const FIXED_POINT_32: Scale = Scale::Binary(32);
const FIXED_POINT_64: Scale = Scale::Binary(64);
const DECIMAL: Scale = Scale::Decimal(18);

/// Binary codec of one Move type.
///
/// Codecs are resolved from type descriptors with [`resolve`] and are
/// plain immutable values, cheap to clone and safe to share between
/// threads.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Codec {
  Bool,
  U8,
  U16,
  U32,
  U64,
  U128,
  U256,
  String,
  /// 32 byte address, also used for `Object<T>` references.
  Address,
  Vector(Box<Codec>),
  Option(Box<Codec>),
  /// `2^32` scaled value in a `u64`.
  FixedPoint32,
  /// `2^64` scaled value in a `u128`.
  FixedPoint64,
  /// `10^18` scaled value in a `u128`.
  Decimal128,
  /// `10^18` scaled value in a `u256`.
  Decimal256,
  /// `10^18` scaled value as little-endian bytes of any length.
  BigDecimal,
}

/// Resolves a Move type descriptor, see [`Codec::resolve`].
pub fn resolve(descriptor: &str) -> Result<Codec, Error> {
  Codec::resolve(descriptor)
}

impl Codec {
  /// Resolves a Move type descriptor such as `u64`,
  /// `0x1::string::String` or `vector<0x1::option::Option<u64>>`.
  ///
  /// Every `object` type (`Object<T>`, `ObjectCore`, ...) resolves to a
  /// 32 byte address whatever its parameters are.
  pub fn resolve(descriptor: &str) -> Result<Self, Error> {
    let tag = TypeTag::parse(descriptor)?;
    let codec = Self::from_tag(&tag)?;
    trace!("resolved type '{descriptor}' to {codec}");
    Ok(codec)
  }

  pub fn from_tag(tag: &TypeTag) -> Result<Self, Error> {
    if tag.name.starts_with("object") {
      return Ok(Codec::Address);
    }

    match tag.params.as_slice() {
      [] => Self::scalar(&tag.name),
      [inner] => Self::container(&tag.name, Self::from_tag(inner)?),
      _ => Err(Error::InvalidInput(format!(
        "type '{tag}' has more than one type parameter"
      ))),
    }
  }

  fn scalar(name: &str) -> Result<Self, Error> {
    Ok(match name {
      "bool" => Codec::Bool,
      "u8" => Codec::U8,
      "u16" => Codec::U16,
      "u32" => Codec::U32,
      "u64" => Codec::U64,
      "u128" => Codec::U128,
      "u256" => Codec::U256,
      "string" => Codec::String,
      "address" => Codec::Address,
      "fixedpoint32" => Codec::FixedPoint32,
      "fixedpoint64" => Codec::FixedPoint64,
      "decimal128" => Codec::Decimal128,
      "decimal256" => Codec::Decimal256,
      "bigdecimal" => Codec::BigDecimal,
      _ => return Err(Error::UnknownType(name.into())),
    })
  }

  fn container(name: &str, inner: Codec) -> Result<Self, Error> {
    match name {
      "vector" => Ok(Codec::Vector(Box::new(inner))),
      "option" => Ok(Codec::Option(Box::new(inner))),
      _ => Err(Error::UnknownType(format!("{name}<{inner}>"))),
    }
  }

  pub fn encode(&self, value: &Value) -> Result<Vec<u8>, Error> {
    let mut output = vec![];
    self.encode_into(value, &mut output)?;
    Ok(output)
  }

  /// Appends the encoding of `value` to `output`.
  ///
  /// On error `output` may hold a partial encoding and should be
  /// discarded.
  pub fn encode_into(
    &self,
    value: &Value,
    output: &mut Vec<u8>,
  ) -> Result<(), Error> {
    match (self, value) {
      (Codec::Bool, Value::Bool(v)) => output.push(*v as u8),
      (Codec::U8, _) => write_uint(output, &self.integer(value)?, 1, self)?,
      (Codec::U16, _) => write_uint(output, &self.integer(value)?, 2, self)?,
      (Codec::U32, _) => write_uint(output, &self.integer(value)?, 4, self)?,
      (Codec::U64, _) => write_uint(output, &self.integer(value)?, 8, self)?,
      (Codec::U128, _) => write_uint(output, &self.integer(value)?, 16, self)?,
      (Codec::U256, _) => write_uint(output, &self.integer(value)?, 32, self)?,
      (Codec::String, Value::String(v)) => {
        write_length(output, v.len())?;
        output.extend_from_slice(v.as_bytes());
      }
      (Codec::Address, Value::Address(address)) => {
        output.extend_from_slice(&address.widen(OBJECT_WIDTH)?);
      }
      (Codec::Address, Value::String(text)) => {
        output.extend_from_slice(&Address::with_width(text, OBJECT_WIDTH)?);
      }
      (Codec::Vector(inner), Value::Vector(items)) => {
        write_length(output, items.len())?;
        for item in items {
          inner.encode_into(item, output)?;
        }
      }
      (Codec::Option(_), Value::Option(None)) => output.push(0),
      (Codec::Option(inner), Value::Option(Some(item))) => {
        output.push(1);
        inner.encode_into(item, output)?;
      }
      // a bare value is an implicit `Some`
      (Codec::Option(inner), item) => {
        output.push(1);
        inner.encode_into(item, output)?;
      }
      (Codec::FixedPoint32, _) => {
        write_uint(output, &self.scaled(value, FIXED_POINT_32)?, 8, self)?
      }
      (Codec::FixedPoint64, _) => {
        write_uint(output, &self.scaled(value, FIXED_POINT_64)?, 16, self)?
      }
      (Codec::Decimal128, _) => {
        write_uint(output, &self.scaled(value, DECIMAL)?, 16, self)?
      }
      (Codec::Decimal256, _) => {
        write_uint(output, &self.scaled(value, DECIMAL)?, 32, self)?
      }
      (Codec::BigDecimal, _) => {
        let bytes = self.scaled(value, DECIMAL)?.to_bytes_le();
        write_length(output, bytes.len())?;
        output.extend_from_slice(&bytes);
      }
      (codec, value) => {
        return Err(Error::UnsupportedValue(format!(
          "cannot encode {value} as {codec}"
        )))
      }
    }
    Ok(())
  }

  /// Decodes a value that must span the whole input.
  pub fn decode(&self, bytes: &[u8]) -> Result<Value, Error> {
    let mut reader = Reader::new(bytes);
    let value = self.decode_from(&mut reader)?;
    reader.finish()?;
    Ok(value)
  }

  fn decode_from(&self, reader: &mut Reader) -> Result<Value, Error> {
    Ok(match self {
      Codec::Bool => match reader.read_byte()? {
        0 => Value::Bool(false),
        1 => Value::Bool(true),
        tag => return Err(Error::InvalidTag { kind: "bool", tag }),
      },
      Codec::U8 => Value::U8(reader.read_byte()?),
      Codec::U16 => Value::U16(u16::from_le_bytes(reader.read_array()?)),
      Codec::U32 => Value::U32(u32::from_le_bytes(reader.read_array()?)),
      Codec::U64 => Value::U64(u64::from_le_bytes(reader.read_array()?)),
      Codec::U128 => Value::U128(u128::from_le_bytes(reader.read_array()?)),
      Codec::U256 => Value::U256(BigUint::from_bytes_le(reader.read_bytes(32)?)),
      Codec::String => {
        let length = reader.read_length()?;
        Value::String(String::from_utf8(reader.read_bytes(length)?.to_vec())?)
      }
      Codec::Address => Value::Address(Address::from_bytes(
        reader.read_bytes(OBJECT_WIDTH)?,
        OBJECT_WIDTH,
      )?),
      Codec::Vector(inner) => {
        let length = reader.read_length()?;
        // every element takes at least one byte
        let mut items = Vec::with_capacity(length.min(reader.remaining()));
        for _ in 0..length {
          items.push(inner.decode_from(reader)?);
        }
        Value::Vector(items)
      }
      Codec::Option(inner) => match reader.read_byte()? {
        0 => Value::Option(None),
        1 => Value::Option(Some(Box::new(inner.decode_from(reader)?))),
        tag => return Err(Error::InvalidTag { kind: "option", tag }),
      },
      Codec::FixedPoint32 => {
        let raw = u64::from_le_bytes(reader.read_array()?);
        Value::Float(scale_down_float(raw.into(), 32))
      }
      Codec::FixedPoint64 => {
        let raw = u128::from_le_bytes(reader.read_array()?);
        Value::Float(scale_down_float(raw, 64))
      }
      Codec::Decimal128 => {
        let raw = u128::from_le_bytes(reader.read_array()?);
        Value::Decimal(scale_down_exact(&raw.into(), 18))
      }
      Codec::Decimal256 => {
        let raw = BigUint::from_bytes_le(reader.read_bytes(32)?);
        Value::Decimal(scale_down_exact(&raw, 18))
      }
      Codec::BigDecimal => {
        let length = reader.read_length()?;
        let raw = BigUint::from_bytes_le(reader.read_bytes(length)?);
        Value::Decimal(scale_down_exact(&raw, 18))
      }
    })
  }

  /// Integer operand of an integer codec.
  fn integer(&self, value: &Value) -> Result<BigUint, Error> {
    if let Some(integer) = value.as_biguint() {
      return Ok(integer);
    }
    match value {
      Value::String(text) => BigUint::from_str(text).map_err(|_| {
        Error::InvalidInput(format!("'{text}' is not an unsigned integer"))
      }),
      _ => Err(Error::UnsupportedValue(format!(
        "cannot encode {value} as {self}"
      ))),
    }
  }

  /// Scaled integer operand of a fixed point or decimal codec.
  fn scaled(&self, value: &Value, scale: Scale) -> Result<BigUint, Error> {
    match value {
      Value::String(text) | Value::Decimal(text) => scale_up(text, scale),
      Value::Float(v) => scale_up(&v.to_string(), scale),
      other => match other.as_biguint() {
        Some(integer) => Ok(integer * scale.factor()),
        None => Err(Error::UnsupportedValue(format!(
          "cannot encode {value} as {self}"
        ))),
      },
    }
  }
}

fn write_uint(
  output: &mut Vec<u8>,
  value: &BigUint,
  width: usize,
  codec: &Codec,
) -> Result<(), Error> {
  let mut bytes = value.to_bytes_le();
  if bytes.len() > width {
    return Err(Error::UnsupportedValue(format!(
      "{value} does not fit in {codec}"
    )));
  }
  bytes.resize(width, 0);
  output.extend_from_slice(&bytes);
  Ok(())
}

impl Display for Codec {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Codec::Bool => write!(f, "bool"),
      Codec::U8 => write!(f, "u8"),
      Codec::U16 => write!(f, "u16"),
      Codec::U32 => write!(f, "u32"),
      Codec::U64 => write!(f, "u64"),
      Codec::U128 => write!(f, "u128"),
      Codec::U256 => write!(f, "u256"),
      Codec::String => write!(f, "string"),
      Codec::Address => write!(f, "address"),
      Codec::Vector(inner) => write!(f, "vector<{inner}>"),
      Codec::Option(inner) => write!(f, "option<{inner}>"),
      Codec::FixedPoint32 => write!(f, "fixedpoint32"),
      Codec::FixedPoint64 => write!(f, "fixedpoint64"),
      Codec::Decimal128 => write!(f, "decimal128"),
      Codec::Decimal256 => write!(f, "decimal256"),
      Codec::BigDecimal => write!(f, "bigdecimal"),
    }
  }
}

impl FromStr for Codec {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::resolve(s)
  }
}
