use crate::loc::Loc;
use derive_visitor::{Drive, DriveMut};
use std::fmt;
use std::fmt::Debug;
use std::fmt::Formatter;

/// Carrier pairing a syntax value with its source location.
///
/// Printers and other consumers treat the syntax as immutable; a location is
/// kept alongside so failures can point back into the source, and so
/// synthetic nodes (which have no real source range) remain representable.
#[derive(Drive, DriveMut)]
pub struct Node<S: Drive + DriveMut> {
  #[drive(skip)]
  pub loc: Loc,
  pub stx: Box<S>,
}

impl<S: Drive + DriveMut> Node<S> {
  pub fn new(loc: Loc, stx: S) -> Node<S> {
    Node {
      loc,
      stx: Box::new(stx),
    }
  }
}

impl<S: Debug + Drive + DriveMut> Debug for Node<S> {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    self.stx.fmt(f)
  }
}

#[cfg(feature = "serde")]
impl<S: serde::Serialize + Drive + DriveMut> serde::Serialize for Node<S> {
  fn serialize<Se: serde::Serializer>(&self, serializer: Se) -> Result<Se::Ok, Se::Error> {
    self.stx.serialize(serializer)
  }
}
