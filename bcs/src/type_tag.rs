use {
  crate::Error,
  std::{fmt::Display, str::FromStr},
};

/// Deepest generic nesting accepted in a type descriptor.
pub const MAX_TYPE_DEPTH: usize = 32;

/// Parsed Move type descriptor such as `vector<option<u64>>`.
///
/// Names are normalized while parsing: standard library paths of the
/// form `0x1::module::Name` collapse to `Name` and everything is
/// lowercased, so `0x1::string::String` and `string` are the same tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeTag {
  pub name: String,
  pub params: Vec<TypeTag>,
}

impl TypeTag {
  pub fn parse(descriptor: &str) -> Result<Self, Error> {
    let normalized = normalize(descriptor);
    let mut parser = Parser {
      input: &normalized,
      position: 0,
    };

    let tag = parser.parse_tag(0)?;
    parser.skip_whitespace();
    if parser.position != normalized.len() {
      return Err(Error::InvalidInput(format!(
        "unexpected '{}' in type '{descriptor}'",
        &normalized[parser.position..]
      )));
    }
    Ok(tag)
  }
}

impl FromStr for TypeTag {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::parse(s)
  }
}

impl Display for TypeTag {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.name)?;
    if let Some((first, rest)) = self.params.split_first() {
      write!(f, "<{first}")?;
      for param in rest {
        write!(f, ", {param}")?;
      }
      write!(f, ">")?;
    }
    Ok(())
  }
}

fn is_path_char(c: char) -> bool {
  c.is_ascii_alphanumeric() || c == '_' || c == ':'
}

/// Collapses every `0x1::module::Name` path to `Name` and lowercases
/// the result. Paths under other addresses are left untouched.
fn normalize(descriptor: &str) -> String {
  let mut output = String::with_capacity(descriptor.len());
  let mut rest = descriptor;

  while let Some(start) = rest.find(is_path_char) {
    output.push_str(&rest[..start]);
    let tail = &rest[start..];
    let end = tail.find(|c: char| !is_path_char(c)).unwrap_or(tail.len());
    output.push_str(strip_std_module(&tail[..end]));
    rest = &tail[end..];
  }
  output.push_str(rest);

  output.to_lowercase()
}

fn strip_std_module(path: &str) -> &str {
  match path.strip_prefix("0x1::").and_then(|p| p.split_once("::")) {
    Some((module, name))
      if !module.is_empty() && !name.is_empty() && !name.contains(':') =>
    {
      name
    }
    _ => path,
  }
}

struct Parser<'a> {
  input: &'a str,
  position: usize,
}

impl<'a> Parser<'a> {
  fn parse_tag(&mut self, depth: usize) -> Result<TypeTag, Error> {
    if depth > MAX_TYPE_DEPTH {
      return Err(Error::InvalidInput(format!(
        "type nesting is deeper than {MAX_TYPE_DEPTH}"
      )));
    }

    self.skip_whitespace();
    let name = self.take_name();
    if name.is_empty() {
      return Err(Error::InvalidInput(format!(
        "expected a type name at offset {} of '{}'",
        self.position, self.input
      )));
    }

    let mut params = vec![];
    self.skip_whitespace();
    if self.eat('<') {
      loop {
        params.push(self.parse_tag(depth + 1)?);
        self.skip_whitespace();
        if self.eat(',') {
          continue;
        }
        if self.eat('>') {
          break;
        }
        return Err(Error::InvalidInput(format!(
          "unbalanced '<' in '{}'",
          self.input
        )));
      }
    }

    Ok(TypeTag {
      name: name.to_owned(),
      params,
    })
  }

  fn take_name(&mut self) -> &'a str {
    let input = self.input;
    let rest = &input[self.position..];
    let end = rest.find(|c: char| !is_path_char(c)).unwrap_or(rest.len());
    self.position += end;
    &rest[..end]
  }

  fn skip_whitespace(&mut self) {
    let rest = &self.input[self.position..];
    self.position += rest.len() - rest.trim_start().len();
  }

  fn eat(&mut self, expected: char) -> bool {
    if self.input[self.position..].starts_with(expected) {
      self.position += expected.len_utf8();
      true
    } else {
      false
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn tag(name: &str, params: Vec<TypeTag>) -> TypeTag {
    TypeTag {
      name: name.into(),
      params,
    }
  }

  #[test]
  fn strips_standard_library_paths() {
    assert_eq!(TypeTag::parse("0x1::string::String").unwrap(), tag("string", vec![]));
    assert_eq!(
      TypeTag::parse("0x1::option::Option<u8>").unwrap(),
      tag("option", vec![tag("u8", vec![])])
    );
    assert_eq!(
      TypeTag::parse("0x1::fixed_point32::FixedPoint32").unwrap(),
      tag("fixedpoint32", vec![])
    );
  }

  #[test]
  fn keeps_foreign_paths() {
    assert_eq!(
      TypeTag::parse("0xcafe::coin::Coin").unwrap(),
      tag("0xcafe::coin::coin", vec![])
    );
  }

  #[test]
  fn parses_nested_generics() {
    let parsed =
      TypeTag::parse("0x1::vector::Vector<0x1::option::Option<u64>>").unwrap();
    assert_eq!(
      parsed,
      tag("vector", vec![tag("option", vec![tag("u64", vec![])])])
    );
    assert_eq!(parsed.to_string(), "vector<option<u64>>");

    let spaced = TypeTag::parse(" vector < option < u64 > > ").unwrap();
    assert_eq!(spaced, parsed);
  }

  #[test]
  fn keeps_every_parameter() {
    let parsed = TypeTag::parse("table<address, vector<u8>>").unwrap();
    assert_eq!(parsed.params.len(), 2);
    assert_eq!(parsed.to_string(), "table<address, vector<u8>>");
  }

  #[test]
  fn rejects_malformed_descriptors() {
    for descriptor in [
      "",
      "   ",
      "vector<",
      "vector<u8",
      "vector<>",
      "vector<u8>>",
      "<u8>",
      "vector<u8> u8",
      "option<u8,>",
    ] {
      assert!(
        matches!(TypeTag::parse(descriptor), Err(Error::InvalidInput(_))),
        "{descriptor:?}"
      );
    }
  }

  #[test]
  fn limits_nesting_depth() {
    let deep = format!(
      "{}u8{}",
      "vector<".repeat(MAX_TYPE_DEPTH),
      ">".repeat(MAX_TYPE_DEPTH)
    );
    assert!(TypeTag::parse(&deep).is_ok());

    let too_deep = format!("vector<{deep}>");
    assert!(matches!(
      TypeTag::parse(&too_deep),
      Err(Error::InvalidInput(_))
    ));
  }
}
