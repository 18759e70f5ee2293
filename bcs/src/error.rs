use {initia_primitives::AddressError, thiserror::Error};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
  #[error("invalid input: {0}")]
  InvalidInput(String),

  #[error("unknown type '{0}'")]
  UnknownType(String),

  #[error("unsupported value: {0}")]
  UnsupportedValue(String),

  #[error(transparent)]
  Address(#[from] AddressError),

  #[error("unexpected end of input")]
  UnexpectedEof,

  #[error("{0} trailing bytes after the encoded value")]
  TrailingBytes(usize),

  #[error("invalid {kind} tag {tag}")]
  InvalidTag { kind: &'static str, tag: u8 },

  #[error("invalid utf-8 string: {0}")]
  Utf8(#[from] std::string::FromUtf8Error),
}

/// Coarse classification of [`Error`].
///
/// Everything that is not an unknown type or an unrepresentable value
/// is malformed input, either text passed by the caller or bytes
/// received from the outside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
  InvalidInput,
  UnknownType,
  UnsupportedValue,
}

impl Error {
  pub fn kind(&self) -> ErrorKind {
    match self {
      Error::UnknownType(_) => ErrorKind::UnknownType,
      Error::UnsupportedValue(_) => ErrorKind::UnsupportedValue,
      Error::InvalidInput(_)
      | Error::Address(_)
      | Error::UnexpectedEof
      | Error::TrailingBytes(_)
      | Error::InvalidTag { .. }
      | Error::Utf8(_) => ErrorKind::InvalidInput,
    }
  }
}
