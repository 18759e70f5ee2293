use {
  initia_primitives::Address,
  num_bigint::BigUint,
  std::fmt::{Display, Formatter},
};

/// A dynamically typed Move value, the input of [`crate::Codec::encode`]
/// and the output of [`crate::Codec::decode`].
///
/// Decoding always produces the variant that matches the codec. Encoding
/// is more lenient: integers may be given as any integer variant or as
/// decimal text, addresses as text, and scaled decimals as text, floats
/// or integers.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
  Bool(bool),
  U8(u8),
  U16(u16),
  U32(u32),
  U64(u64),
  U128(u128),
  U256(BigUint),
  String(String),
  Address(Address),
  Vector(Vec<Value>),
  Option(Option<Box<Value>>),
  /// Decoded `fixedPoint32` and `fixedPoint64` values.
  Float(f64),
  /// Exact decimal text, decoded `decimal128`, `decimal256` and
  /// `bigdecimal` values.
  Decimal(String),
}

impl Value {
  /// The value as an unsigned integer, if it is one.
  pub fn as_biguint(&self) -> Option<BigUint> {
    match self {
      Value::U8(v) => Some((*v).into()),
      Value::U16(v) => Some((*v).into()),
      Value::U32(v) => Some((*v).into()),
      Value::U64(v) => Some((*v).into()),
      Value::U128(v) => Some((*v).into()),
      Value::U256(v) => Some(v.clone()),
      _ => None,
    }
  }

  pub fn as_str(&self) -> Option<&str> {
    match self {
      Value::String(s) | Value::Decimal(s) => Some(s),
      _ => None,
    }
  }

  pub fn is_none(&self) -> bool {
    matches!(self, Value::Option(None))
  }

  pub fn some(value: impl Into<Value>) -> Self {
    Value::Option(Some(Box::new(value.into())))
  }

  pub fn decimal(text: impl Into<String>) -> Self {
    Value::Decimal(text.into())
  }
}

impl Display for Value {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self {
      Value::Bool(v) => write!(f, "{v}"),
      Value::U8(v) => write!(f, "{v}"),
      Value::U16(v) => write!(f, "{v}"),
      Value::U32(v) => write!(f, "{v}"),
      Value::U64(v) => write!(f, "{v}"),
      Value::U128(v) => write!(f, "{v}"),
      Value::U256(v) => write!(f, "{v}"),
      Value::String(v) => write!(f, "{v:?}"),
      Value::Address(v) => write!(f, "{v}"),
      Value::Vector(items) => {
        write!(f, "[")?;
        for (i, item) in items.iter().enumerate() {
          if i > 0 {
            write!(f, ", ")?;
          }
          write!(f, "{item}")?;
        }
        write!(f, "]")
      }
      Value::Option(None) => write!(f, "null"),
      Value::Option(Some(v)) => write!(f, "{v}"),
      Value::Float(v) => write!(f, "{v}"),
      Value::Decimal(v) => write!(f, "{v}"),
    }
  }
}

macro_rules! from_primitive {
  ($($ty:ty => $variant:ident),* $(,)?) => {
    $(
      impl From<$ty> for Value {
        fn from(value: $ty) -> Self {
          Value::$variant(value)
        }
      }
    )*
  };
}

from_primitive! {
  bool => Bool,
  u8 => U8,
  u16 => U16,
  u32 => U32,
  u64 => U64,
  u128 => U128,
  BigUint => U256,
  String => String,
  Address => Address,
  f64 => Float,
}

impl From<&str> for Value {
  fn from(value: &str) -> Self {
    Value::String(value.into())
  }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
  fn from(items: Vec<T>) -> Self {
    Value::Vector(items.into_iter().map(Into::into).collect())
  }
}

impl<T: Into<Value>> From<Option<T>> for Value {
  fn from(item: Option<T>) -> Self {
    Value::Option(item.map(|v| Box::new(v.into())))
  }
}
