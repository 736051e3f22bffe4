//! Builtin alias tables for the native renderer.
//!
//! Each table maps a lowercased vendor-specific type name to its nearest
//! native spelling. The merged map layers phan under psalm under phpstan, so
//! the later tool's reading wins when the same alias appears in several
//! tables. Aliases registered on a printer at runtime sit above all three.

use ahash::HashMap;
use once_cell::sync::Lazy;

pub(crate) const PHAN: &[(&str, &str)] = &[
  // int
  ("integer", "int"),
  ("non-zero-int", "int"),
  // string
  ("callable-string", "string"),
  ("class-string", "string"),
  ("lowercase-string", "string"),
  ("non-empty-string", "string"),
  ("non-empty-lowercase-string", "string"),
  ("numeric-string", "string"),
  // bool
  ("boolean", "bool"),
  // float
  ("double", "float"),
  // array
  ("associative-array", "array"),
  ("callable-array", "array"),
  ("list", "array"),
  ("non-empty-array", "array"),
  ("non-empty-associative-array", "array"),
  ("non-empty-list", "array"),
  // object
  ("callable-object", "object"),
  // mixed
  ("non-empty-mixed", "mixed"),
  ("non-null-mixed", "mixed"),
  ("phan-intersection-type", "mixed"),
  ("resource", "mixed"),
  // never
  ("no-return", "never"),
  ("never-return", "never"),
  ("never-returns", "never"),
  // other
  ("array-key", "int|string"),
  ("scalar", "bool|float|int|string"),
];

pub(crate) const PSALM: &[(&str, &str)] = &[
  // int
  ("integer", "int"),
  ("positive-int", "int"),
  ("non-positive-int", "int"),
  ("negative-int", "int"),
  ("non-negative-int", "int"),
  ("literal-int", "int"),
  // string
  ("non-empty-string", "string"),
  ("truthy-string", "string"),
  ("non-falsy-string", "string"),
  ("lowercase-string", "string"),
  ("non-empty-lowercase-string", "string"),
  ("class-string", "string"),
  ("interface-string", "string"),
  ("enum-string", "string"),
  ("trait-string", "string"),
  ("callable-string", "string"),
  ("numeric-string", "string"),
  ("literal-string", "string"),
  ("non-empty-literal-string", "string"),
  // bool
  ("boolean", "bool"),
  // float
  ("double", "float"),
  ("real", "float"),
  // array
  ("associative-array", "array"),
  ("non-empty-array", "array"),
  ("callable-array", "array"),
  ("list", "array"),
  ("non-empty-list", "array"),
  ("class-string-map", "array"),
  ("public-properties-of", "array"),
  ("protected-properties-of", "array"),
  ("private-properties-of", "array"),
  ("properties-of", "array"),
  // object
  ("callable-object", "object"),
  ("stringable-object", "\\Stringable"),
  // callable
  ("pure-callable", "callable"),
  // mixed
  ("resource", "mixed"),
  ("resource (closed)", "mixed"),
  ("closed-resource", "mixed"),
  ("non-empty-mixed", "mixed"),
  ("key-of", "mixed"),
  // never
  ("never-return", "never"),
  ("never-returns", "never"),
  ("no-return", "never"),
  ("empty", "never"),
  // other
  ("array-key", "int|string"),
  ("scalar", "bool|float|int|string"),
  ("non-empty-scalar", "bool|float|int|string"),
  ("empty-scalar", "bool|float|int|string"),
];

pub(crate) const PHPSTAN: &[(&str, &str)] = &[
  // int
  ("integer", "int"),
  ("positive-int", "int"),
  ("negative-int", "int"),
  ("non-positive-int", "int"),
  ("non-negative-int", "int"),
  ("non-zero-int", "int"),
  ("int-mask", "int"),
  ("int-mask-of", "int"),
  // string
  ("lowercase-string", "string"),
  ("uppercase-string", "string"),
  ("literal-string", "string"),
  ("class-string", "string"),
  ("interface-string", "string"),
  ("trait-string", "string"),
  ("enum-string", "string"),
  ("callable-string", "string"),
  ("numeric-string", "string"),
  ("truthy-string", "string"),
  ("non-falsy-string", "string"),
  ("non-empty-string", "string"),
  ("non-empty-lowercase-string", "string"),
  ("non-empty-uppercase-string", "string"),
  ("non-empty-literal-string", "string"),
  // bool
  ("boolean", "bool"),
  // float
  ("double", "float"),
  // array
  ("associative-array", "array"),
  ("non-empty-array", "array"),
  ("callable-array", "array"),
  ("list", "array"),
  ("non-empty-list", "array"),
  // object
  ("callable-object", "object"),
  // callable
  ("pure-callable", "callable"),
  ("pure-closure", "\\Closure"),
  // mixed
  ("resource", "mixed"),
  ("open-resource", "mixed"),
  ("closed-resource", "mixed"),
  ("non-empty-mixed", "mixed"),
  ("key-of", "mixed"),
  ("value-of", "mixed"),
  ("template-type", "mixed"),
  // never
  ("noreturn", "never"),
  ("never-return", "never"),
  ("never-returns", "never"),
  ("no-return", "never"),
  ("empty", "never"),
  // other
  ("array-key", "int|string"),
  ("scalar", "bool|float|int|string"),
  ("non-empty-scalar", "bool|float|int|string"),
  ("empty-scalar", "bool|float|int|string"),
  ("number", "float|int"),
  ("numeric", "float|int|string"),
  ("__stringandstringable", "string|\\Stringable"),
];

static BUILTIN: Lazy<HashMap<String, String>> = Lazy::new(|| {
  let mut merged = HashMap::default();
  for table in [PHAN, PSALM, PHPSTAN] {
    for (alias, target) in table {
      merged.insert(alias.to_string(), target.to_string());
    }
  }
  merged
});

pub(crate) fn builtin() -> &'static HashMap<String, String> {
  &BUILTIN
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn keys_are_already_lowercase() {
    for table in [PHAN, PSALM, PHPSTAN] {
      for (alias, _) in table {
        assert_eq!(*alias, alias.to_lowercase());
      }
    }
  }

  #[test]
  fn later_tables_override_earlier_ones() {
    // phan maps `resource` to mixed and so does phpstan, but the merged map
    // must hold the last-layered spelling for aliases that diverge.
    assert_eq!(builtin().get("empty").map(String::as_str), Some("never"));
    assert_eq!(
      builtin().get("non-empty-associative-array").map(String::as_str),
      Some("array")
    );
    assert_eq!(
      builtin().get("pure-closure").map(String::as_str),
      Some("\\Closure")
    );
  }
}
