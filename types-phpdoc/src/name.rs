use derive_visitor::{Drive, DriveMut};
use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;

/// A possibly-qualified type or constant name: `Foo`, `Foo\Bar`, `\Foo\Bar`.
///
/// `fully_qualified` records a leading `\`, which pins the name to the root
/// namespace and survives printing verbatim.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Clone, PartialEq, Eq, Hash, Debug, Drive, DriveMut)]
pub struct TypeName {
  #[drive(skip)]
  pub parts: Vec<String>,
  #[drive(skip)]
  pub fully_qualified: bool,
}

impl TypeName {
  pub fn new(parts: Vec<String>, fully_qualified: bool) -> TypeName {
    TypeName {
      parts,
      fully_qualified,
    }
  }

  /// The final (unqualified) segment of the name.
  pub fn last(&self) -> &str {
    self.parts.last().map(String::as_str).unwrap_or("")
  }

  pub fn is_qualified(&self) -> bool {
    self.fully_qualified || self.parts.len() > 1
  }
}

impl From<&str> for TypeName {
  fn from(raw: &str) -> TypeName {
    let fully_qualified = raw.starts_with('\\');
    let trimmed = raw.strip_prefix('\\').unwrap_or(raw);
    TypeName {
      parts: trimmed.split('\\').map(str::to_string).collect(),
      fully_qualified,
    }
  }
}

impl Display for TypeName {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    if self.fully_qualified {
      f.write_str("\\")?;
    }
    f.write_str(&self.parts.join("\\"))
  }
}

#[cfg(test)]
mod tests {
  use super::TypeName;

  #[test]
  fn display_round_trips_qualification() {
    for raw in ["Foo", "Foo\\Bar", "\\Foo\\Bar\\Baz"] {
      assert_eq!(TypeName::from(raw).to_string(), raw);
    }
  }

  #[test]
  fn last_segment() {
    assert_eq!(TypeName::from("\\Foo\\Bar").last(), "Bar");
    assert_eq!(TypeName::from("Foo").last(), "Foo");
    assert!(TypeName::from("\\Foo").is_qualified());
    assert!(!TypeName::from("Foo").is_qualified());
  }
}
