//! Source locations for type expression nodes.

use std::cmp::{max, min};

/// A half-open byte range within the source text a node was parsed from.
///
/// Synthetic nodes (built programmatically rather than by a parser) may use
/// an empty or approximate location.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Loc(pub usize, pub usize);

impl Loc {
  /// A zero-length placeholder location for synthetic nodes.
  pub fn synthetic() -> Loc {
    Loc(0, 0)
  }

  pub fn is_empty(&self) -> bool {
    self.0 >= self.1
  }

  /// Smallest range covering both `self` and `other`.
  pub fn extend(&self, other: Loc) -> Loc {
    Loc(min(self.0, other.0), max(self.1, other.1))
  }
}
