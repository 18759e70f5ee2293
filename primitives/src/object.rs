//! Derivation of Move object addresses and denom metadata addresses.
//!
//! Object addresses are `sha3_256(source || extra || scheme)` where
//! `source` is always the 32 byte form of the creator address and the
//! trailing scheme byte selects the derivation rule.

use {
  crate::address::{Address, Error as AddressError, OBJECT_WIDTH},
  sha2::Sha256,
  sha3::{Digest, Sha3_256},
  thiserror::Error,
  tracing::debug,
};

/// Scheme byte for objects derived from another address.
pub const OBJECT_DERIVED_SCHEME: u8 = 0xfc;

/// Scheme byte for objects derived from an arbitrary seed.
pub const OBJECT_FROM_SEED_ADDRESS_SCHEME: u8 = 0xfe;

/// Denoms with this prefix embed their metadata address directly.
const MOVE_DENOM_PREFIX: &str = "move/";

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
  #[error("{0} cannot be empty")]
  Empty(&'static str),

  #[error(transparent)]
  Address(#[from] AddressError),
}

/// Address of an object owned by `source` and derived from the
/// `derived_from` address (`0xfc` scheme).
pub fn create_user_derived_object_address(
  source: &str,
  derived_from: &str,
) -> Result<String, Error> {
  if source.is_empty() {
    return Err(Error::Empty("source address"));
  }
  if derived_from.is_empty() {
    return Err(Error::Empty("derived-from address"));
  }

  let source = Address::with_width(source, OBJECT_WIDTH)?;
  let derived_from = Address::with_width(derived_from, OBJECT_WIDTH)?;
  let digest = sha3_256(&[
    &source[..],
    &derived_from[..],
    &[OBJECT_DERIVED_SCHEME][..],
  ]);

  debug!("derived object address from {source} and {derived_from}");
  Ok(format!("0x{}", hex::encode(digest)))
}

/// Address of an object created by `source` from a named seed
/// (`0xfe` scheme). The seed is hashed as its UTF-8 bytes.
pub fn create_object_address(source: &str, seed: &str) -> Result<String, Error> {
  if source.is_empty() {
    return Err(Error::Empty("source address"));
  }
  if seed.is_empty() {
    return Err(Error::Empty("seed"));
  }

  let source = Address::with_width(source, OBJECT_WIDTH)?;
  let digest = sha3_256(&[
    &source[..],
    seed.as_bytes(),
    &[OBJECT_FROM_SEED_ADDRESS_SCHEME][..],
  ]);

  debug!("derived object address from {source} with seed '{seed}'");
  Ok(format!("0x{}", hex::encode(digest)))
}

/// Metadata object address of a fungible asset denom.
///
/// `move/<hex>` denoms carry the address in the denom itself. Every
/// other denom (native, `ibc/`, `l2/`, `evm/`) is an object created by
/// `0x1` with the denom as seed.
pub fn denom_to_metadata(denom: &str) -> Result<String, Error> {
  if denom.is_empty() {
    return Err(Error::Empty("denom"));
  }

  if let Some(address) = denom.strip_prefix(MOVE_DENOM_PREFIX) {
    return Ok(remove_leading_zeros(&format!("0x{address}")));
  }

  create_object_address("0x1", denom).map(|a| remove_leading_zeros(&a))
}

/// IBC voucher denom of `denom` received over the transfer port
/// of `channel_id`, in the `ibc/{UPPERCASE_SHA256}` form.
pub fn ibc_denom(channel_id: &str, denom: &str) -> Result<String, Error> {
  if channel_id.is_empty() {
    return Err(Error::Empty("channel id"));
  }
  if denom.is_empty() {
    return Err(Error::Empty("denom"));
  }

  let path = format!("transfer/{channel_id}/{denom}");
  let digest = Sha256::digest(path.as_bytes());
  Ok(format!("ibc/{}", hex::encode_upper(digest)))
}

/// Strips leading zero digits, keeping the `0x` prefix if present
/// and at least one digit.
pub fn remove_leading_zeros(hex: &str) -> String {
  let (prefix, digits) = match hex.strip_prefix("0x") {
    Some(digits) => ("0x", digits),
    None => ("", hex),
  };

  match digits.trim_start_matches('0') {
    "" => format!("{prefix}0"),
    trimmed => format!("{prefix}{trimmed}"),
  }
}

fn sha3_256(chunks: &[&[u8]]) -> [u8; 32] {
  let mut hasher = Sha3_256::new();
  for chunk in chunks {
    hasher.update(chunk);
  }
  let mut digest = [0u8; 32];
  digest.copy_from_slice(&hasher.finalize());
  digest
}
