use {
  anyhow::{bail, Context},
  initia_bcs::{Codec, Value},
};

/// Reads a value of `codec` from its command line text.
///
/// Integers, addresses and scaled decimals are passed on as text and
/// parsed by the codec itself.
pub fn parse_value(codec: &Codec, text: &str) -> anyhow::Result<Value> {
  Ok(match codec {
    Codec::Bool => Value::Bool(
      text
        .trim()
        .parse()
        .with_context(|| format!("'{text}' is not a bool"))?,
    ),
    Codec::String => Value::String(text.to_owned()),
    Codec::Option(inner) => match text.trim() {
      "none" | "null" => Value::Option(None),
      some => Value::some(parse_value(inner, some)?),
    },
    Codec::Vector(inner) => {
      let text = text.trim();
      if **inner == Codec::U8 {
        if let Some(digits) = text.strip_prefix("0x") {
          return Ok(Value::from(hex::decode(digits)?));
        }
      }

      let Some(items) = text.strip_prefix('[').and_then(|t| t.strip_suffix(']'))
      else {
        bail!("expected a bracketed list for {codec}, got '{text}'");
      };

      split_items(items)?
        .into_iter()
        .map(|item| parse_value(inner, item))
        .collect::<anyhow::Result<Vec<_>>>()
        .map(Value::Vector)?
    }
    _ => Value::String(text.trim().to_owned()),
  })
}

/// Splits a list body on the commas that are not inside nested brackets.
fn split_items(text: &str) -> anyhow::Result<Vec<&str>> {
  if text.trim().is_empty() {
    return Ok(vec![]);
  }

  let mut items = vec![];
  let mut depth = 0usize;
  let mut start = 0;
  for (i, c) in text.char_indices() {
    match c {
      '[' => depth += 1,
      ']' => {
        depth = depth
          .checked_sub(1)
          .with_context(|| format!("unbalanced ']' in '{text}'"))?
      }
      ',' if depth == 0 => {
        items.push(text[start..i].trim());
        start = i + 1;
      }
      _ => {}
    }
  }
  if depth != 0 {
    bail!("unbalanced '[' in '{text}'");
  }
  items.push(text[start..].trim());
  Ok(items)
}
