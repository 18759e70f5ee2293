pub mod address;
mod checksum;
pub mod object;

pub use {
  address::{
    equals,
    to_bytes,
    to_hex,
    to_prefixed,
    to_raw_hex,
    validate,
    Address,
    Config as AddressConfig,
    Error as AddressError,
    ACCOUNT_WIDTH,
    DEFAULT_PREFIX,
    OBJECT_WIDTH,
  },
  checksum::to_checksum_hex,
  object::{
    create_object_address,
    create_user_derived_object_address,
    denom_to_metadata,
    ibc_denom,
    remove_leading_zeros,
    Error as ObjectError,
  },
};
