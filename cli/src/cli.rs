use {
  clap::{Parser, Subcommand},
  initia_primitives::{AddressConfig, DEFAULT_PREFIX},
};

/// Initia address and Move value conversions
///
/// Normalizes addresses between their bech32 and hex forms, derives
/// object addresses and encodes or decodes BCS values of any Move type
/// descriptor.
#[derive(Debug, Parser)]
#[clap(name = "initia", version)]
pub struct CliOptions {
  /// Human readable part of bech32 addresses
  #[clap(long, global = true,
    default_value = DEFAULT_PREFIX,
    value_name = "HRP")]
  prefix: String,

  #[clap(subcommand)]
  pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
  /// Prints the bech32, display hex and raw hex forms of an address
  Address {
    input: String,

    /// Width in bytes, inferred from the input when omitted
    #[clap(long, short, value_name = "BYTES")]
    width: Option<usize>,
  },

  /// Checks whether an address is well formed
  Validate { input: String },

  /// Checks whether two addresses refer to the same account
  Equals { a: String, b: String },

  /// Decodes hex encoded BCS bytes as a value of the given type
  Decode {
    #[clap(value_name = "TYPE")]
    type_name: String,
    #[clap(value_name = "HEX")]
    bytes: String,
  },

  /// Encodes a value of the given type as hex encoded BCS bytes
  ///
  /// Vectors are written as `[a, b]`, empty options as `none`.
  Encode {
    #[clap(value_name = "TYPE")]
    type_name: String,
    value: String,
  },

  /// Derives the address of an object created from a seed
  ObjectAddress { source: String, seed: String },

  /// Derives the address of an object derived from another address
  DerivedAddress {
    source: String,
    derived_from: String,
  },

  /// Prints the metadata object address of a denom
  Metadata { denom: String },

  /// Prints the IBC denom of a token received over a channel
  IbcDenom { channel: String, denom: String },
}

impl CliOptions {
  pub fn address_config(&self) -> AddressConfig {
    AddressConfig::new(self.prefix.as_str())
  }
}
