use {
  initia_bcs::{resolve, Address, Error, ErrorKind, Value},
  num_bigint::BigUint,
};

fn encode(descriptor: &str, value: impl Into<Value>) -> anyhow::Result<String> {
  Ok(hex::encode(resolve(descriptor)?.encode(&value.into())?))
}

fn decode(descriptor: &str, bytes: &str) -> anyhow::Result<Value> {
  Ok(resolve(descriptor)?.decode(&hex::decode(bytes)?)?)
}

#[test]
fn encodes_addresses() -> anyhow::Result<()> {
  assert_eq!(encode("address", "0x1")?, format!("{}01", "00".repeat(31)));
  assert_eq!(
    encode(
      "vector<address>",
      vec!["init1gs9eytt8lauv6c83jsk7eakhxv30gftlskqz3d"]
    )?,
    format!(
      "01{}440b922d67ff78cd60f1942decf6d73322f4257f",
      "00".repeat(12)
    )
  );
  assert_eq!(
    encode("address", Address::new("0x1")?)?,
    format!("{}01", "00".repeat(31))
  );
  Ok(())
}

#[test]
fn encodes_primitives() -> anyhow::Result<()> {
  assert_eq!(encode("u8", 123u8)?, "7b");
  assert_eq!(encode("u64", 123u64)?, "7b00000000000000");
  assert_eq!(encode("u64", "123")?, "7b00000000000000");
  assert_eq!(encode("bool", true)?, "01");
  assert_eq!(encode("0x1::option::Option<u8>", 123u8)?, "017b");
  assert_eq!(encode("option<u8>", Some(123u8))?, "017b");
  assert_eq!(encode("option<u8>", None::<u8>)?, "00");
  assert_eq!(
    encode("0x1::string::String", "Hello, world!")?,
    "0d48656c6c6f2c20776f726c6421"
  );
  assert_eq!(
    encode("u256", BigUint::from(1u8) << 255u32)?,
    format!("{}80", "00".repeat(31))
  );
  Ok(())
}

#[test]
fn encodes_scaled_numbers() -> anyhow::Result<()> {
  assert_eq!(
    encode("0x1::fixed_point32::FixedPoint32", "1.23")?,
    "ae47e13a01000000"
  );
  assert_eq!(
    encode("fixedPoint64", "123456789.987654321")?,
    "e0c3b572e0e9d6fc15cd5b0700000000"
  );
  assert_eq!(
    encode("decimal128", "0.000000000000000001")?,
    format!("01{}", "00".repeat(15))
  );
  assert_eq!(
    encode("decimal256", "1000000000000000000")?,
    format!("00000000109f4bb31507c97bce97c0{}", "00".repeat(17))
  );
  assert_eq!(
    encode("0x1::bigdecimal::BigDecimal", "1000000000000000000")?,
    "0f00000000109f4bb31507c97bce97c0"
  );
  assert_eq!(encode("bigdecimal", "0")?, "0100");
  assert_eq!(encode("bigdecimal", 1u64)?, "08000064a7b3b6e00d");
  assert_eq!(encode("bigdecimal", "1")?, "08000064a7b3b6e00d");
  Ok(())
}

#[test]
fn decodes_primitives() -> anyhow::Result<()> {
  assert_eq!(decode("u64", "a086010000000000")?, Value::U64(100000));
  assert_eq!(decode("u64", "d202964900000000")?, Value::U64(1234567890));
  assert_eq!(decode("bool", "01")?, Value::Bool(true));
  assert_eq!(decode("bool", "00")?, Value::Bool(false));
  assert_eq!(decode("string", "06496e69746961")?, Value::from("Initia"));
  assert_eq!(decode("option<u8>", "00")?, Value::Option(None));
  assert_eq!(decode("option<u8>", "01ff")?, Value::some(255u8));
  Ok(())
}

#[test]
fn decodes_sequences() -> anyhow::Result<()> {
  assert_eq!(
    decode("vector<u8>", "03010203")?,
    Value::from(vec![1u8, 2, 3])
  );
  assert_eq!(decode("vector<u8>", "00")?, Value::Vector(vec![]));
  assert_eq!(
    decode("vector<string>", "020548656c6c6f05576f726c64")?,
    Value::from(vec!["Hello", "World"])
  );
  assert_eq!(
    decode(
      "vector<option<u64>>",
      "02018b920000000000000190f7000000000000"
    )?,
    Value::from(vec![Some(37515u64), Some(63376)])
  );
  Ok(())
}

#[test]
fn decodes_objects_as_addresses() -> anyhow::Result<()> {
  let value = decode(
    "0x1::object::Object<0x1::fungible_asset::Metadata>",
    "543b35a39cfadad3da3c23249c474455d15efd2f94f849473226dee8a3c7a9e1",
  )?;
  assert_eq!(
    value.to_string(),
    "0x543b35a39cfadad3da3c23249c474455d15efd2f94f849473226dee8a3c7a9e1"
  );
  Ok(())
}

#[test]
fn decodes_scaled_numbers() -> anyhow::Result<()> {
  assert_eq!(
    decode("bigdecimal", "010a")?,
    Value::decimal("0.00000000000000001")
  );
  assert_eq!(
    decode("bigdecimal", "0101")?,
    Value::decimal("0.000000000000000001")
  );
  assert_eq!(
    decode("bigdecimal", "0f4ef3ccfe97e4d5f37fec74d616bc01")?,
    Value::decimal("9007199254740991.123456789012345678")
  );
  assert_eq!(
    decode("bigdecimal", "0f00000000109f4bb31507c97bce97c0")?,
    Value::decimal("1000000000000000000")
  );
  assert_eq!(
    decode("decimal128", &format!("01{}", "00".repeat(15)))?,
    Value::decimal("0.000000000000000001")
  );

  match decode("fixedpoint32", "ae47e13a01000000")? {
    Value::Float(v) => assert!((v - 1.23).abs() < 1e-9),
    other => panic!("unexpected {other:?}"),
  }
  Ok(())
}

#[test]
fn rejects_bad_input() {
  assert!(matches!(
    resolve("vector<u8").map(|_| ()),
    Err(Error::InvalidInput(_))
  ));
  assert!(matches!(
    encode("address", "0xzz").map_err(|e| e.downcast::<Error>()),
    Err(Ok(Error::Address(_)))
  ));
}

#[test]
fn rejects_negative_scaled_values() {
  for descriptor in ["bigdecimal", "decimal128", "decimal256", "fixedpoint32"] {
    let kind = encode(descriptor, "-1")
      .map_err(|e| e.downcast::<Error>().map(|e| e.kind()));
    assert!(
      matches!(kind, Err(Ok(ErrorKind::UnsupportedValue))),
      "{descriptor}"
    );
  }

  // truncates to zero before the sign matters
  assert_eq!(
    encode("bigdecimal", "-0.0000000000000000001").ok().as_deref(),
    Some("0100")
  );
}
