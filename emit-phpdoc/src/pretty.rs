//! Verbatim renderer: reproduces the original type syntax as closely as
//! possible, so that re-parsing the output yields an equivalent tree.

use crate::emitter::{
  dedupe, flatten, indent_prefix, Ctx, EmitError, EmitOptions, EmitResult, LogicalKind,
  TypePrinter,
};
use derive_visitor::{Drive, Visitor};
use types_phpdoc::node::Node;
use types_phpdoc::type_expr::*;

type TypeUnionNode = Node<TypeUnion>;
type TypeIntersectionNode = Node<TypeIntersection>;
type TypeArgumentsNode = Node<TypeArguments>;
type ShapeFieldsNode = Node<ShapeFields>;

/// Looks for a union or intersection that would be "naked" in rendered
/// output: reachable without passing through a template-argument list or a
/// shape-field block, both of which bracket their contents and stop the
/// alternation from bleeding into the surrounding syntax.
#[derive(Visitor, Default)]
#[visitor(
  TypeUnionNode(enter),
  TypeIntersectionNode(enter),
  TypeArgumentsNode(enter, exit),
  ShapeFieldsNode(enter, exit)
)]
struct NakedLogicalProbe {
  fenced: u32,
  found: bool,
}

impl NakedLogicalProbe {
  fn enter_type_union_node(&mut self, _node: &TypeUnionNode) {
    if self.fenced == 0 {
      self.found = true;
    }
  }

  fn enter_type_intersection_node(&mut self, _node: &TypeIntersectionNode) {
    if self.fenced == 0 {
      self.found = true;
    }
  }

  fn enter_type_arguments_node(&mut self, _node: &TypeArgumentsNode) {
    self.fenced += 1;
  }

  fn exit_type_arguments_node(&mut self, _node: &TypeArgumentsNode) {
    self.fenced -= 1;
  }

  fn enter_shape_fields_node(&mut self, _node: &ShapeFieldsNode) {
    self.fenced += 1;
  }

  fn exit_shape_fields_node(&mut self, _node: &ShapeFieldsNode) {
    self.fenced -= 1;
  }
}

fn has_naked_logical(ty: &Node<TypeExpr>) -> bool {
  let mut probe = NakedLogicalProbe::default();
  ty.drive(&mut probe);
  probe.found
}

/// Pretty printer for type expressions.
///
/// Output is round-trip faithful; [`EmitOptions`] only controls cosmetics
/// (separator padding, shape layout).
#[derive(Clone, Debug, Default)]
pub struct PrettyPrinter {
  opts: EmitOptions,
}

impl PrettyPrinter {
  pub fn new(opts: EmitOptions) -> Self {
    PrettyPrinter { opts }
  }

  pub fn options(&self) -> &EmitOptions {
    &self.opts
  }

  pub(crate) fn emit_type(&self, ty: &Node<TypeExpr>, cx: Ctx) -> EmitResult {
    match ty.stx.as_ref() {
      TypeExpr::Named(named) => self.emit_named(named, cx),
      TypeExpr::Union(union) => self.emit_logical(LogicalKind::Union, &union.stx.types, cx),
      TypeExpr::Intersection(isect) => {
        self.emit_logical(LogicalKind::Intersection, &isect.stx.types, cx)
      }
      TypeExpr::Nullable(nullable) => {
        Ok(format!("?{}", self.emit_type(&nullable.stx.type_expr, cx)?))
      }
      TypeExpr::List(list) => Ok(format!("{}[]", self.emit_type(&list.stx.element_type, cx)?)),
      TypeExpr::OffsetAccess(access) => Ok(format!(
        "{}[{}]",
        self.emit_type(&access.stx.container, cx)?,
        self.emit_type(&access.stx.index, cx)?
      )),
      TypeExpr::Conditional(cond) => self.emit_conditional(cond, cx),
      TypeExpr::ClassConst(c) => Ok(format!("{}::{}", c.stx.class, c.stx.constant)),
      TypeExpr::ClassConstMask(c) => Ok(format!("{}::{}*", c.stx.class, c.stx.constant)),
      TypeExpr::ConstMask(c) => Ok(format!("{}*", c.stx.name)),
      TypeExpr::Callable(callable) => self.emit_callable(callable, cx),
      TypeExpr::Literal(lit) => self.emit_literal(lit),
      other => Err(EmitError::non_printable(other).with_loc(ty.loc)),
    }
  }

  fn emit_literal(&self, node: &Node<TypeLiteral>) -> EmitResult {
    match node.stx.as_ref() {
      TypeLiteral::String(raw) | TypeLiteral::Int(raw) | TypeLiteral::Float(raw) => {
        Ok(raw.clone())
      }
      TypeLiteral::Bool(value) => Ok(if *value { "true" } else { "false" }.to_string()),
      TypeLiteral::Null => Ok("null".to_string()),
      TypeLiteral::Variable(name) => Ok(name.clone()),
      other => Err(EmitError::non_printable(other).with_loc(node.loc)),
    }
  }

  fn emit_named(&self, node: &Node<TypeNamed>, cx: Ctx) -> EmitResult {
    let named = node.stx.as_ref();
    let mut out = named.name.to_string();
    // Shape fields and template arguments are mutually exclusive in printed
    // output; a shape wins if a tree somehow carries both.
    if let Some(fields) = &named.fields {
      out.push_str(&self.emit_shape_fields(fields, cx)?);
    } else if let Some(arguments) = &named.arguments {
      out.push_str(&self.emit_arguments(arguments, cx)?);
    }
    Ok(out)
  }

  pub(crate) fn emit_arguments(&self, node: &Node<TypeArguments>, cx: Ctx) -> EmitResult {
    let mut rendered = Vec::with_capacity(node.stx.list.len());
    for argument in &node.stx.list {
      rendered.push(self.emit_type(argument, cx)?);
    }
    Ok(format!("<{}>", rendered.join(", ")))
  }

  fn emit_logical(&self, kind: LogicalKind, types: &[Node<TypeExpr>], cx: Ctx) -> EmitResult {
    let mut operands = Vec::new();
    flatten(kind, types, &mut operands);

    let mut rendered = Vec::with_capacity(operands.len());
    for operand in operands {
      rendered.push(self.emit_type(operand, cx.nested())?);
    }
    let rendered = dedupe(rendered);

    let padded = match kind {
      LogicalKind::Union => self.opts.wrap_union_type,
      LogicalKind::Intersection => self.opts.wrap_intersection_type,
    };
    let joined = rendered.join(kind.separator(padded));

    // Only the outermost logical type at a call site prints bare.
    Ok(if cx.nesting > 0 {
      format!("({})", joined)
    } else {
      joined
    })
  }

  fn emit_conditional(&self, node: &Node<TypeConditional>, cx: Ctx) -> EmitResult {
    let cond = node.stx.as_ref();
    let op = match cond.op {
      ConditionOp::Equal => "is",
      ConditionOp::NotEqual => "is not",
      ConditionOp::Greater => ">",
      ConditionOp::Less => "<",
      ConditionOp::GreaterOrEqual => ">=",
      ConditionOp::LessOrEqual => "<=",
      other => return Err(EmitError::non_printable(&other).with_loc(node.loc)),
    };
    Ok(format!(
      "({} {} {} ? {} : {})",
      self.emit_type(&cond.subject, cx)?,
      op,
      self.emit_type(&cond.target, cx)?,
      self.emit_type(&cond.true_type, cx)?,
      self.emit_type(&cond.false_type, cx)?
    ))
  }

  fn emit_callable(&self, node: &Node<TypeCallable>, cx: Ctx) -> EmitResult {
    let callable = node.stx.as_ref();
    let mut out = callable.name.to_string();

    out.push('(');
    let mut parameters = Vec::with_capacity(callable.parameters.len());
    for parameter in &callable.parameters {
      parameters.push(self.emit_callable_parameter(parameter, cx)?);
    }
    out.push_str(&parameters.join(", "));
    out.push(')');

    if let Some(return_type) = &callable.return_type {
      let mut rendered = self.emit_type(return_type, cx)?;
      if self.should_wrap_return_type(&rendered, return_type) {
        rendered = format!("({})", rendered);
      }
      out.push(':');
      if self.opts.wrap_callable_return_type {
        out.push(' ');
      }
      out.push_str(&rendered);
    }

    Ok(out)
  }

  /// A return clause must be parenthesized when alternation could bleed out
  /// of it: either the return type is a logical type itself, or one is
  /// reachable without passing a bracketing construct (template arguments,
  /// shape fields) first.
  fn should_wrap_return_type(&self, rendered: &str, return_type: &Node<TypeExpr>) -> bool {
    if rendered.starts_with('(') && rendered.ends_with(')') {
      return false;
    }
    has_naked_logical(return_type)
  }

  fn emit_callable_parameter(&self, node: &Node<CallableParameter>, cx: Ctx) -> EmitResult {
    let parameter = node.stx.as_ref();
    let mut out = self.emit_type(&parameter.type_expr, cx)?;
    if parameter.name.is_some() {
      out.push(' ');
    }
    if parameter.out {
      out.push('&');
    }
    if parameter.variadic {
      out.push_str("...");
    }
    if let Some(name) = &parameter.name {
      out.push_str(name);
    }
    if parameter.optional {
      out.push('=');
    }
    Ok(out)
  }

  fn emit_shape_fields(&self, node: &Node<ShapeFields>, cx: Ctx) -> EmitResult {
    let shape = node.stx.as_ref();
    let multiline = shape.list.len() > self.opts.multiline_shape_threshold;
    let field_cx = if multiline { cx.indented() } else { cx };

    let mut entries = Vec::with_capacity(shape.list.len() + 1);
    for field in &shape.list {
      entries.push(self.emit_shape_field(field, field_cx)?);
    }
    if !shape.sealed {
      let mut trailer = "...".to_string();
      if let Some(arguments) = &shape.arguments {
        trailer.push_str(&self.emit_arguments(arguments, field_cx)?);
      }
      entries.push(trailer);
    }

    if !multiline {
      return Ok(format!("{{{}}}", entries.join(", ")));
    }

    let line_prefix = format!(
      "{}{}",
      self.opts.newline,
      indent_prefix(&self.opts, field_cx.indent)
    );
    Ok(format!(
      "{{{}{}{}{}}}",
      line_prefix,
      entries.join(&format!(",{}", line_prefix)),
      self.opts.newline,
      indent_prefix(&self.opts, cx.indent)
    ))
  }

  fn emit_shape_field(&self, node: &Node<ShapeField>, cx: Ctx) -> EmitResult {
    let field = node.stx.as_ref();
    let value = self.emit_type(&field.value, cx)?;

    let Some(key) = &field.key else {
      return Ok(value);
    };
    let mut name = match key {
      ShapeKey::Name(name) => name.clone(),
      ShapeKey::String(raw) => raw.clone(),
      ShapeKey::Int(raw) => raw.clone(),
      ShapeKey::Mask(mask) => format!("{}*", mask),
      other => return Err(EmitError::non_printable(other).with_loc(node.loc)),
    };
    if field.optional {
      name.push('?');
    }
    Ok(format!("{}: {}", name, value))
  }
}

impl TypePrinter for PrettyPrinter {
  fn print(&self, ty: &Node<TypeExpr>) -> EmitResult {
    self.emit_type(ty, Ctx::default())
  }
}
