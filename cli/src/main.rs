use {
  crate::{
    cli::{CliOptions, Command},
    input::parse_value,
  },
  clap::Parser,
  initia_bcs::resolve,
  initia_primitives::{
    create_object_address,
    create_user_derived_object_address,
    denom_to_metadata,
    ibc_denom,
    Address,
  },
  tracing::debug,
  tracing_subscriber::{EnvFilter, FmtSubscriber},
};

mod cli;
mod input;

fn main() -> anyhow::Result<()> {
  tracing::subscriber::set_global_default(
    FmtSubscriber::builder()
      .with_env_filter(EnvFilter::from_default_env())
      .with_writer(std::io::stderr)
      .finish(),
  )?;

  let opts = CliOptions::parse();
  debug!("options: {opts:?}");
  let config = opts.address_config();

  match opts.command {
    Command::Address { input, width } => {
      let address = match width {
        Some(width) => Address::with_width(&input, width)?,
        None => Address::new(&input)?,
      };
      println!("bech32: {}", address.to_bech32(&config.prefix)?);
      println!("hex:    {}", address.to_hex());
      println!("raw:    {}", address.to_raw_hex());
    }
    Command::Validate { input } => println!("{}", config.validate(&input)),
    Command::Equals { a, b } => println!("{}", config.equals(&a, &b)),
    Command::Decode { type_name, bytes } => {
      let codec = resolve(&type_name)?;
      let bytes = hex::decode(bytes.trim().trim_start_matches("0x"))?;
      println!("{}", codec.decode(&bytes)?);
    }
    Command::Encode { type_name, value } => {
      let codec = resolve(&type_name)?;
      let value = parse_value(&codec, &value)?;
      println!("{}", hex::encode(codec.encode(&value)?));
    }
    Command::ObjectAddress { source, seed } => {
      println!("{}", create_object_address(&source, &seed)?)
    }
    Command::DerivedAddress {
      source,
      derived_from,
    } => println!(
      "{}",
      create_user_derived_object_address(&source, &derived_from)?
    ),
    Command::Metadata { denom } => println!("{}", denom_to_metadata(&denom)?),
    Command::IbcDenom { channel, denom } => {
      println!("{}", ibc_denom(&channel, &denom)?)
    }
  }

  Ok(())
}
