use sha3::{Digest, Keccak256};

/// Renders a 20-byte account address as `0x`-prefixed EIP-55 mixed-case hex.
///
/// Every alphabetic hex digit is uppercased when the corresponding nibble of
/// `keccak256(lowercase_hex)` is 8 or above, so the casing itself carries a
/// checksum that wallets can verify.
pub fn to_checksum_hex(bytes: &[u8; 20]) -> String {
  let lower = hex::encode(bytes);
  let hash = Keccak256::digest(lower.as_bytes());

  let mut output = String::with_capacity(2 + lower.len());
  output.push_str("0x");
  for (i, c) in lower.chars().enumerate() {
    let byte = hash[i / 2];
    let nibble = if i % 2 == 0 { byte >> 4 } else { byte & 0x0f };
    if c.is_ascii_alphabetic() && nibble >= 8 {
      output.push(c.to_ascii_uppercase());
    } else {
      output.push(c);
    }
  }
  output
}

#[cfg(test)]
mod tests {
  use super::to_checksum_hex;

  fn checksum_of(hex_digits: &str) -> String {
    let bytes: [u8; 20] = hex::decode(hex_digits).unwrap().try_into().unwrap();
    to_checksum_hex(&bytes)
  }

  #[test]
  fn mixes_case_by_keccak_nibbles() {
    assert_eq!(
      checksum_of("77d96ae5e7885b19b5bf4e680e129ace8fd58fb1"),
      "0x77d96ae5e7885B19b5Bf4e680E129ACe8fD58fB1"
    );
    assert_eq!(
      checksum_of("08dae1855674207fa0f4af1e7613bae38eb2efed"),
      "0x08daE1855674207Fa0f4af1e7613bae38eB2eFeD"
    );
  }

  #[test]
  fn eip55_reference_vector() {
    assert_eq!(
      checksum_of("5aaeb6053f3e94c9b9a09f33669435e7ef1beaed"),
      "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed"
    );
  }
}
