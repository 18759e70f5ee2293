//! Binary Canonical Serialization of Move values driven by type
//! descriptors.
//!
//! A descriptor such as `vector<0x1::option::Option<u64>>` is resolved
//! once into a [`Codec`] which then encodes and decodes [`Value`]s.

mod codec;
pub mod decimal;
mod error;
mod type_tag;
mod value;
mod wire;

pub use {
  codec::{resolve, Codec},
  decimal::Scale,
  error::{Error, ErrorKind},
  initia_primitives::Address,
  type_tag::{TypeTag, MAX_TYPE_DEPTH},
  value::Value,
  wire::MAX_SEQUENCE_LENGTH,
};
