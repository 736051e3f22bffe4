//! Lossy renderer: lowers vendor-specific type syntax to the nearest native
//! spelling. Aliases resolve through a case-insensitive table seeded from
//! the builtin phan, psalm, and phpstan vocabularies; constructs with no
//! native equivalent degrade to their closest supertype.

use crate::aliases;
use crate::emitter::{dedupe, flatten, flatten_one, Ctx, EmitError, EmitResult, LogicalKind, TypePrinter};
use ahash::HashMap;
use types_phpdoc::name::TypeName;
use types_phpdoc::node::Node;
use types_phpdoc::type_expr::*;

/// Native printer for type expressions.
///
/// Output is one-way: re-parsing it yields the lowered type, not the
/// original. Cosmetic options do not apply; native output is always
/// compact.
#[derive(Clone, Debug)]
pub struct NativePrinter {
  aliases: HashMap<String, String>,
}

impl Default for NativePrinter {
  fn default() -> Self {
    Self::new()
  }
}

impl NativePrinter {
  /// A printer preloaded with the builtin alias vocabularies.
  pub fn new() -> Self {
    NativePrinter {
      aliases: aliases::builtin().clone(),
    }
  }

  /// A printer with the builtin vocabularies plus caller-supplied aliases,
  /// which take precedence over the builtins.
  pub fn with_aliases<I, K, V>(extra: I) -> Self
  where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
  {
    let mut printer = Self::new();
    for (alias, target) in extra {
      printer.add_type_alias(alias.as_ref(), target.as_ref());
    }
    printer
  }

  /// Registers `alias => target`. A target spelled as a `|` or `&` list is
  /// routed through the corresponding list registration, so its operand
  /// order is normalized the same way.
  pub fn add_type_alias(&mut self, alias: &str, target: &str) {
    if target.contains('|') {
      self.add_union_type_alias(alias, &target.split('|').collect::<Vec<_>>());
    } else if target.contains('&') {
      self.add_intersection_type_alias(alias, &target.split('&').collect::<Vec<_>>());
    } else {
      self.aliases.insert(alias.to_lowercase(), target.to_string());
    }
  }

  /// Registers `alias` as a union of `types`. Operands are sorted
  /// lexically before joining, so registration order cannot leak into
  /// output.
  pub fn add_union_type_alias<S: AsRef<str>>(&mut self, alias: &str, types: &[S]) {
    self.insert_list_alias(alias, types, "|");
  }

  /// Registers `alias` as an intersection of `types`, operands sorted
  /// lexically.
  pub fn add_intersection_type_alias<S: AsRef<str>>(&mut self, alias: &str, types: &[S]) {
    self.insert_list_alias(alias, types, "&");
  }

  fn insert_list_alias<S: AsRef<str>>(&mut self, alias: &str, types: &[S], separator: &str) {
    let mut types = types.iter().map(AsRef::as_ref).collect::<Vec<_>>();
    types.sort_unstable();
    self.aliases.insert(alias.to_lowercase(), types.join(separator));
  }

  fn resolve(&self, name: &TypeName) -> Option<&str> {
    self
      .aliases
      .get(&name.to_string().to_lowercase())
      .map(String::as_str)
  }

  fn emit_type(&self, ty: &Node<TypeExpr>, cx: Ctx) -> EmitResult {
    match ty.stx.as_ref() {
      TypeExpr::Named(named) => self.emit_named(named, cx),
      TypeExpr::Union(union) => {
        let mut operands = Vec::new();
        flatten(LogicalKind::Union, &union.stx.types, &mut operands);
        self.emit_union_operands(&operands, cx)
      }
      TypeExpr::Intersection(isect) => self.emit_intersection(isect, cx),
      TypeExpr::Nullable(nullable) => {
        Ok(format!("?{}", self.emit_type(&nullable.stx.type_expr, cx)?))
      }
      // Lists of any element type are traversable; the element type is not
      // expressible natively.
      TypeExpr::List(_) => Ok("iterable".to_string()),
      // The value behind an offset depends on the container's contents.
      TypeExpr::OffsetAccess(_) => Ok("mixed".to_string()),
      // A class constant can hold a value of any type.
      TypeExpr::ClassConst(_) => Ok("mixed".to_string()),
      // A constant mask names a set of integer-valued flag constants.
      TypeExpr::ClassConstMask(_) | TypeExpr::ConstMask(_) => Ok("int".to_string()),
      // Without evaluating the condition, the result is either branch.
      TypeExpr::Conditional(cond) => {
        let mut operands = Vec::new();
        flatten_one(LogicalKind::Union, &cond.stx.true_type, &mut operands);
        flatten_one(LogicalKind::Union, &cond.stx.false_type, &mut operands);
        self.emit_union_operands(&operands, cx)
      }
      // The signature is dropped; the bare name resolves like any other
      // name and passes through unchanged on a miss.
      TypeExpr::Callable(callable) => Ok(match self.resolve(&callable.stx.name) {
        Some(target) => target.to_string(),
        None => callable.stx.name.to_string(),
      }),
      TypeExpr::Literal(lit) => self.emit_literal(lit),
      other => Err(EmitError::non_printable(other).with_loc(ty.loc)),
    }
  }

  fn emit_named(&self, node: &Node<TypeNamed>, cx: Ctx) -> EmitResult {
    let named = node.stx.as_ref();
    // A shape is an array no matter what name it hangs off.
    if named.fields.is_some() {
      return Ok("array".to_string());
    }
    // An aliased name sheds its template arguments along with its spelling;
    // the target is the whole replacement.
    if let Some(target) = self.resolve(&named.name) {
      return Ok(target.to_string());
    }
    let mut out = named.name.to_string();
    if let Some(arguments) = &named.arguments {
      let mut rendered = Vec::with_capacity(arguments.stx.list.len());
      for argument in &arguments.stx.list {
        rendered.push(self.emit_type(argument, cx)?);
      }
      out.push('<');
      out.push_str(&rendered.join(", "));
      out.push('>');
    }
    Ok(out)
  }

  fn emit_literal(&self, node: &Node<TypeLiteral>) -> EmitResult {
    match node.stx.as_ref() {
      TypeLiteral::String(_) => Ok("string".to_string()),
      TypeLiteral::Int(_) => Ok("int".to_string()),
      TypeLiteral::Float(_) => Ok("float".to_string()),
      TypeLiteral::Bool(_) => Ok("bool".to_string()),
      TypeLiteral::Null => Ok("null".to_string()),
      // `$this` always refers to the enclosing class; any other variable
      // could be bound to anything.
      TypeLiteral::Variable(name) => Ok(if name == "$this" { "self" } else { "mixed" }.to_string()),
      other => Err(EmitError::non_printable(other).with_loc(node.loc)),
    }
  }

  fn emit_union_operands(&self, operands: &[&Node<TypeExpr>], cx: Ctx) -> EmitResult {
    let mut rendered = Vec::with_capacity(operands.len());
    for operand in operands {
      rendered.push(self.emit_type(operand, cx.nested())?);
    }
    let mut rendered = dedupe(rendered);

    // `mixed` absorbs every other operand.
    if rendered.iter().any(|operand| operand == "mixed") {
      rendered = vec!["mixed".to_string()];
    }
    // `true|false` (in any qualification) collapses to `bool`. Lowering may
    // have synthesized a `bool` operand already, so dedupe once more.
    rendered = dedupe(merge_bool_spellings(rendered));

    let joined = rendered.join("|");
    Ok(if cx.nesting > 0 {
      format!("({})", joined)
    } else {
      joined
    })
  }

  fn emit_intersection(&self, node: &Node<TypeIntersection>, cx: Ctx) -> EmitResult {
    let mut operands = Vec::new();
    flatten(LogicalKind::Intersection, &node.stx.types, &mut operands);

    let mut rendered = Vec::with_capacity(operands.len());
    for operand in operands {
      rendered.push(self.emit_type(operand, cx.nested())?);
    }
    let rendered = dedupe(rendered);

    let joined = rendered.join("&");
    Ok(if cx.nesting > 0 {
      format!("({})", joined)
    } else {
      joined
    })
  }
}

fn is_true_spelling(operand: &str) -> bool {
  operand == "true" || operand == "\\true"
}

fn is_false_spelling(operand: &str) -> bool {
  operand == "false" || operand == "\\false"
}

fn merge_bool_spellings(rendered: Vec<String>) -> Vec<String> {
  let has_true = rendered.iter().any(|operand| is_true_spelling(operand));
  let has_false = rendered.iter().any(|operand| is_false_spelling(operand));
  if !has_true || !has_false {
    return rendered;
  }
  let mut out = rendered
    .into_iter()
    .filter(|operand| !is_true_spelling(operand) && !is_false_spelling(operand))
    .collect::<Vec<_>>();
  out.push("bool".to_string());
  out
}

impl TypePrinter for NativePrinter {
  fn print(&self, ty: &Node<TypeExpr>) -> EmitResult {
    self.emit_type(ty, Ctx::default())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use types_phpdoc::loc::Loc;

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

  fn print(ty: &Node<TypeExpr>) -> String {
    NativePrinter::new().print(ty).expect("print succeeds")
  }

  #[test]
  fn list_aliases_are_order_independent() {
    let mut first = NativePrinter::new();
    first.add_union_type_alias("either", &["b", "a"]);
    let mut second = NativePrinter::new();
    second.add_union_type_alias("either", &["a", "b"]);

    let ty = named("Either");
    assert_eq!(first.print(&ty).unwrap(), "a|b");
    assert_eq!(first.print(&ty).unwrap(), second.print(&ty).unwrap());
  }

  #[test]
  fn compound_alias_targets_are_normalized_on_registration() {
    let mut printer = NativePrinter::new();
    printer.add_type_alias("Document", "string&\\Stringable");
    assert_eq!(printer.print(&named("document")).unwrap(), "\\Stringable&string");
  }

  #[test]
  fn caller_aliases_override_builtins() {
    let printer = NativePrinter::with_aliases([("list", "MyList")]);
    assert_eq!(printer.print(&named("list")).unwrap(), "MyList");
    // Builtins not overridden stay in force.
    assert_eq!(printer.print(&named("double")).unwrap(), "float");
  }

  #[test]
  fn alias_lookup_ignores_case_and_keeps_qualification_distinct() {
    let printer = NativePrinter::new();
    assert_eq!(printer.print(&named("Non-Empty-String")).unwrap(), "string");
    // A leading backslash is part of the lookup key, so the fully qualified
    // spelling is not the builtin alias.
    assert_eq!(
      printer.print(&named("\\non-empty-string")).unwrap(),
      "\\non-empty-string"
    );
  }

  #[test]
  fn mixed_absorbs_union_operands() {
    let ty = union(vec![named("string"), named("resource"), named("int")]);
    assert_eq!(print(&ty), "mixed");
  }

  #[test]
  fn true_and_false_collapse_to_bool() {
    let ty = union(vec![named("true"), named("false"), named("int")]);
    assert_eq!(print(&ty), "int|bool");

    // Qualified spellings count, and an existing bool operand is not
    // duplicated.
    let ty = union(vec![named("\\true"), named("bool"), named("\\false")]);
    assert_eq!(print(&ty), "bool");
  }

  #[test]
  fn lone_bool_spelling_survives() {
    let ty = union(vec![named("true"), named("int")]);
    assert_eq!(print(&ty), "true|int");
  }
}
