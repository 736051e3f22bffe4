//! Shared printing machinery used by both renderers.
//!
//! The traversal itself is a plain recursive descent. The pieces every
//! renderer needs live here: output options, the transient per-call counters
//! ([`Ctx`]), flattening of nested same-kind logical types, order-preserving
//! deduplication of rendered fragments, and the error type raised when a
//! renderer meets a node kind it was never updated for.

use itertools::Itertools;
use std::error::Error;
use std::fmt;
use std::fmt::Display;
use std::fmt::Formatter;
use types_phpdoc::loc::Loc;
use types_phpdoc::node::Node;
use types_phpdoc::type_expr::TypeExpr;

/// Options for configuring printed output.
#[derive(Clone, Debug)]
pub struct EmitOptions {
  /// Line delimiter for multiline shape bodies.
  pub newline: String,
  /// One level of indentation for multiline shape bodies.
  pub indent: String,
  /// Pad `|` with spaces: `T | U` instead of `T|U`.
  pub wrap_union_type: bool,
  /// Pad `&` with spaces: `T & U` instead of `T&U`.
  pub wrap_intersection_type: bool,
  /// Insert a space after the `:` of a callable return clause.
  pub wrap_callable_return_type: bool,
  /// Shapes with more fields than this render one field per line.
  pub multiline_shape_threshold: usize,
}

impl Default for EmitOptions {
  fn default() -> Self {
    EmitOptions {
      newline: "\n".to_string(),
      indent: "    ".to_string(),
      wrap_union_type: true,
      wrap_intersection_type: true,
      wrap_callable_return_type: true,
      multiline_shape_threshold: 1,
    }
  }
}

#[derive(Debug)]
pub enum EmitErrorKind {
  /// The renderer met a node kind outside the set its dispatch
  /// understands. Always a contract defect, never a recoverable condition;
  /// the payload is the offending node's debug rendering.
  NonPrintableNode(String),
}

#[derive(Debug)]
pub struct EmitError {
  pub kind: EmitErrorKind,
  pub loc: Option<Loc>,
}

impl EmitError {
  pub(crate) fn non_printable(node: &dyn fmt::Debug) -> Self {
    Self {
      kind: EmitErrorKind::NonPrintableNode(format!("{:?}", node)),
      loc: None,
    }
  }

  pub(crate) fn with_loc(mut self, loc: Loc) -> Self {
    if self.loc.is_none() {
      self.loc = Some(loc);
    }
    self
  }
}

impl Display for EmitError {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match &self.kind {
      EmitErrorKind::NonPrintableNode(node) => write!(f, "non-printable node {}", node)?,
    }
    if let Some(loc) = self.loc {
      write!(f, " at {}..{}", loc.0, loc.1)?;
    }
    Ok(())
  }
}

impl Error for EmitError {}

pub type EmitResult = Result<String, EmitError>;

/// Dispatch contract shared by the renderers: hand in a root type
/// expression, get the fully rendered text back. Each call starts from fresh counters, so a
/// printer may be reused and shared freely.
pub trait TypePrinter {
  fn print(&self, ty: &Node<TypeExpr>) -> EmitResult;
}

/// Transient render-pass state, threaded through the recursion as a value
/// rather than stored on the printer, keeping `print` reentrant.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct Ctx {
  /// How many logical (union/intersection) ancestors enclose the current
  /// node. The outermost logical type prints bare; any logical type seen at
  /// `nesting > 0` is parenthesized.
  pub nesting: u32,
  /// Current shape-field indentation depth.
  pub indent: u32,
}

impl Ctx {
  /// Context for operands of a logical type.
  pub fn nested(self) -> Ctx {
    Ctx {
      nesting: self.nesting + 1,
      ..self
    }
  }

  /// Context for the body of a multiline shape.
  pub fn indented(self) -> Ctx {
    Ctx {
      indent: self.indent + 1,
      ..self
    }
  }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum LogicalKind {
  Union,
  Intersection,
}

impl LogicalKind {
  /// Separator for this kind, optionally space-padded.
  pub fn separator(self, padded: bool) -> &'static str {
    match (self, padded) {
      (LogicalKind::Union, true) => " | ",
      (LogicalKind::Union, false) => "|",
      (LogicalKind::Intersection, true) => " & ",
      (LogicalKind::Intersection, false) => "&",
    }
  }
}

/// Flattens any run of same-kind logical nesting into one operand list,
/// left to right, depth first, preserving source order. Descent stops at
/// children of the other logical kind or of any non-logical kind.
pub(crate) fn flatten<'a>(
  kind: LogicalKind,
  types: &'a [Node<TypeExpr>],
  out: &mut Vec<&'a Node<TypeExpr>>,
) {
  for ty in types {
    match (kind, ty.stx.as_ref()) {
      (LogicalKind::Union, TypeExpr::Union(inner)) => flatten(kind, &inner.stx.types, out),
      (LogicalKind::Intersection, TypeExpr::Intersection(inner)) => {
        flatten(kind, &inner.stx.types, out)
      }
      _ => out.push(ty),
    }
  }
}

/// Pushes `ty` itself through [`flatten`], treating it as a candidate
/// operand rather than a list. Used where a synthetic operand set is
/// assembled from loose nodes (e.g. conditional branches lowered to a
/// union).
pub(crate) fn flatten_one<'a>(
  kind: LogicalKind,
  ty: &'a Node<TypeExpr>,
  out: &mut Vec<&'a Node<TypeExpr>>,
) {
  flatten(kind, std::slice::from_ref(ty), out)
}

/// Removes exact duplicates from rendered operand fragments, keeping the
/// first occurrence in order.
pub(crate) fn dedupe(rendered: Vec<String>) -> Vec<String> {
  rendered.into_iter().unique().collect()
}

/// `depth` repetitions of the indent unit.
pub(crate) fn indent_prefix(opts: &EmitOptions, depth: u32) -> String {
  opts.indent.repeat(depth as usize)
}

#[cfg(test)]
mod tests {
  use super::*;
  use types_phpdoc::type_expr::{TypeIntersection, TypeNamed, TypeUnion};

  fn loc() -> Loc {
    Loc::synthetic()
  }

  fn named(name: &str) -> Node<TypeExpr> {
    Node::new(
      loc(),
      TypeExpr::Named(Node::new(loc(), TypeNamed::plain(name))),
    )
  }

  fn union(types: Vec<Node<TypeExpr>>) -> Node<TypeExpr> {
    Node::new(loc(), TypeExpr::Union(Node::new(loc(), TypeUnion { types })))
  }

  fn intersection(types: Vec<Node<TypeExpr>>) -> Node<TypeExpr> {
    Node::new(
      loc(),
      TypeExpr::Intersection(Node::new(loc(), TypeIntersection { types })),
    )
  }

  fn names_of(operands: &[&Node<TypeExpr>]) -> Vec<String> {
    operands
      .iter()
      .map(|op| match op.stx.as_ref() {
        TypeExpr::Named(n) => n.stx.name.to_string(),
        other => panic!("unexpected operand: {:?}", other),
      })
      .collect()
  }

  #[test]
  fn flatten_merges_same_kind_runs_in_source_order() {
    // A | (B | (C | D)) | E
    let ty = union(vec![
      named("A"),
      union(vec![named("B"), union(vec![named("C"), named("D")])]),
      named("E"),
    ]);
    let TypeExpr::Union(u) = ty.stx.as_ref() else {
      unreachable!()
    };

    let mut operands = Vec::new();
    flatten(LogicalKind::Union, &u.stx.types, &mut operands);
    assert_eq!(names_of(&operands), ["A", "B", "C", "D", "E"]);
  }

  #[test]
  fn flatten_stops_at_other_logical_kind() {
    // A | (B & C)
    let ty = union(vec![
      named("A"),
      intersection(vec![named("B"), named("C")]),
    ]);
    let TypeExpr::Union(u) = ty.stx.as_ref() else {
      unreachable!()
    };

    let mut operands = Vec::new();
    flatten(LogicalKind::Union, &u.stx.types, &mut operands);
    assert_eq!(operands.len(), 2);
    assert!(matches!(operands[1].stx.as_ref(), TypeExpr::Intersection(_)));
  }

  #[test]
  fn dedupe_keeps_first_occurrence_order() {
    let rendered = vec!["A".to_string(), "B".to_string(), "A".to_string()];
    assert_eq!(dedupe(rendered), ["A", "B"]);
  }
}
