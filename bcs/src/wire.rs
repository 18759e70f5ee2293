use {
  crate::Error,
  unsigned_varint::{decode, encode},
};

/// Longest sequence BCS allows, lengths are ULEB128 encoded u32
/// values that must fit in 31 bits.
pub const MAX_SEQUENCE_LENGTH: usize = (1 << 31) - 1;

/// Cursor over an encoded value.
pub(crate) struct Reader<'a> {
  input: &'a [u8],
}

impl<'a> Reader<'a> {
  pub(crate) fn new(input: &'a [u8]) -> Self {
    Self { input }
  }

  pub(crate) fn remaining(&self) -> usize {
    self.input.len()
  }

  pub(crate) fn read_bytes(&mut self, count: usize) -> Result<&'a [u8], Error> {
    if count > self.input.len() {
      return Err(Error::UnexpectedEof);
    }
    let (head, tail) = self.input.split_at(count);
    self.input = tail;
    Ok(head)
  }

  pub(crate) fn read_byte(&mut self) -> Result<u8, Error> {
    Ok(self.read_bytes(1)?[0])
  }

  pub(crate) fn read_array<const N: usize>(&mut self) -> Result<[u8; N], Error> {
    let mut output = [0u8; N];
    output.copy_from_slice(self.read_bytes(N)?);
    Ok(output)
  }

  /// Reads a ULEB128 length prefix.
  pub(crate) fn read_length(&mut self) -> Result<usize, Error> {
    let (length, rest) = decode::u32(self.input).map_err(|e| match e {
      decode::Error::Insufficient => Error::UnexpectedEof,
      e => Error::InvalidInput(format!("malformed length prefix: {e}")),
    })?;

    let length = length as usize;
    if length > MAX_SEQUENCE_LENGTH {
      return Err(Error::InvalidInput(format!(
        "sequence length {length} exceeds {MAX_SEQUENCE_LENGTH}"
      )));
    }

    self.input = rest;
    Ok(length)
  }

  /// Fails unless every byte has been consumed.
  pub(crate) fn finish(self) -> Result<(), Error> {
    match self.input.len() {
      0 => Ok(()),
      n => Err(Error::TrailingBytes(n)),
    }
  }
}

/// Appends a ULEB128 length prefix.
pub(crate) fn write_length(output: &mut Vec<u8>, length: usize) -> Result<(), Error> {
  if length > MAX_SEQUENCE_LENGTH {
    return Err(Error::UnsupportedValue(format!(
      "sequence length {length} exceeds {MAX_SEQUENCE_LENGTH}"
    )));
  }

  let mut buffer = encode::u32_buffer();
  output.extend_from_slice(encode::u32(length as u32, &mut buffer));
  Ok(())
}
