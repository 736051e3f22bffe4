use crate::name::TypeName;
use crate::node::Node;
use derive_visitor::Drive;
use derive_visitor::DriveMut;

/// Main type expression enum covering every printable PHPDoc type construct.
///
/// The set is closed but versioned: new kinds may appear in future releases,
/// so the enum is `#[non_exhaustive]` and downstream matches must carry a
/// fallback arm for kinds they were not updated for.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Drive, DriveMut, derive_more::From)]
#[cfg_attr(feature = "serde", serde(tag = "$t"))]
#[non_exhaustive]
pub enum TypeExpr {
  /// Named (possibly generic or shaped) type: `Foo`, `Foo<T>`, `array{k: T}`
  Named(Node<TypeNamed>),
  /// Union type: `T|U|V`
  Union(Node<TypeUnion>),
  /// Intersection type: `T&U&V`
  Intersection(Node<TypeIntersection>),
  /// Nullable type: `?T`
  Nullable(Node<TypeNullable>),
  /// List shorthand: `T[]`
  List(Node<TypeList>),
  /// Offset access: `T[K]`
  OffsetAccess(Node<TypeOffsetAccess>),
  /// Conditional type: `(T is U ? V : W)`
  Conditional(Node<TypeConditional>),
  /// Class constant reference: `Foo::BAR`
  ClassConst(Node<TypeClassConst>),
  /// Class constant mask: `Foo::BAR_*`
  ClassConstMask(Node<TypeClassConstMask>),
  /// Constant mask: `BAR_*`
  ConstMask(Node<TypeConstMask>),
  /// Callable signature: `callable(T $x): U`
  Callable(Node<TypeCallable>),
  /// Literal value: `42`, `"foo"`, `$this`
  Literal(Node<TypeLiteral>),
}

/// Named type with optional template arguments and optional shape fields:
/// `Foo`, `Foo<T, U>`, `array{k: T, ...}`.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Drive, DriveMut)]
pub struct TypeNamed {
  pub name: TypeName,
  pub arguments: Option<Node<TypeArguments>>,
  pub fields: Option<Node<ShapeFields>>,
}

impl TypeNamed {
  /// Plain named type without template arguments or shape fields.
  pub fn plain(name: impl Into<TypeName>) -> TypeNamed {
    TypeNamed {
      name: name.into(),
      arguments: None,
      fields: None,
    }
  }
}

/// Template argument list: `<T, U>`.
///
/// A dedicated node (rather than a bare `Vec`) so traversals can observe the
/// boundary between a name and the types nested inside its argument list.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Drive, DriveMut)]
pub struct TypeArguments {
  pub list: Vec<Node<TypeExpr>>,
}

/// Union type: `T | U | V`
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Drive, DriveMut)]
pub struct TypeUnion {
  pub types: Vec<Node<TypeExpr>>,
}

/// Intersection type: `T & U & V`
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Drive, DriveMut)]
pub struct TypeIntersection {
  pub types: Vec<Node<TypeExpr>>,
}

/// Nullable type: `?T`
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Drive, DriveMut)]
pub struct TypeNullable {
  pub type_expr: Box<Node<TypeExpr>>,
}

/// List shorthand: `T[]`
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Drive, DriveMut)]
pub struct TypeList {
  pub element_type: Box<Node<TypeExpr>>,
}

/// Offset access: `T[K]`, `Foo::BAR[0]`
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Drive, DriveMut)]
pub struct TypeOffsetAccess {
  pub container: Box<Node<TypeExpr>>,
  pub index: Box<Node<TypeExpr>>,
}

/// Comparison operator of a conditional type.
///
/// Closed but versioned, like [`TypeExpr`].
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConditionOp {
  /// `is`
  Equal,
  /// `is not`
  NotEqual,
  /// `>`
  Greater,
  /// `<`
  Less,
  /// `>=`
  GreaterOrEqual,
  /// `<=`
  LessOrEqual,
}

/// Conditional type: `(T is U ? V : W)`, `(T >= U ? V : W)`
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Drive, DriveMut)]
pub struct TypeConditional {
  pub subject: Box<Node<TypeExpr>>,
  #[drive(skip)]
  pub op: ConditionOp,
  pub target: Box<Node<TypeExpr>>,
  pub true_type: Box<Node<TypeExpr>>,
  pub false_type: Box<Node<TypeExpr>>,
}

/// Class constant reference: `Foo::BAR`
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Drive, DriveMut)]
pub struct TypeClassConst {
  pub class: TypeName,
  #[drive(skip)]
  pub constant: String,
}

/// Class constant mask: `Foo::BAR_*`, `Foo::*`.
///
/// `constant` is the prefix before the `*` and may be empty.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Drive, DriveMut)]
pub struct TypeClassConstMask {
  pub class: TypeName,
  #[drive(skip)]
  pub constant: String,
}

/// Constant mask: `SOME_PREFIX_*`
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Drive, DriveMut)]
pub struct TypeConstMask {
  pub name: TypeName,
}

/// Callable signature: `callable(T $x, U ...$rest): V`
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Drive, DriveMut)]
pub struct TypeCallable {
  pub name: TypeName,
  pub parameters: Vec<Node<CallableParameter>>,
  pub return_type: Option<Box<Node<TypeExpr>>>,
}

/// Callable parameter with its modifier flags flattened out:
/// `T`, `T $x`, `T &$x`, `T ...$x`, `T $x=`.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Drive, DriveMut)]
pub struct CallableParameter {
  pub type_expr: Node<TypeExpr>,
  /// Variable text including the leading `$`, when the parameter is named.
  #[drive(skip)]
  pub name: Option<String>,
  /// Output (by-reference) parameter: `&`.
  #[drive(skip)]
  pub out: bool,
  /// Variadic parameter: `...`.
  #[drive(skip)]
  pub variadic: bool,
  /// Optional parameter: trailing `=`.
  #[drive(skip)]
  pub optional: bool,
}

impl CallableParameter {
  /// Positional, non-optional parameter of the given type.
  pub fn of(type_expr: Node<TypeExpr>) -> CallableParameter {
    CallableParameter {
      type_expr,
      name: None,
      out: false,
      variadic: false,
      optional: false,
    }
  }
}

/// Literal type: `42`, `0.5`, `"foo"`, `true`, `null`, `$this`.
///
/// Textual kinds keep their raw source spelling so a verbatim printer can
/// reproduce them exactly (quotes, sign, exponent and all).
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Drive, DriveMut)]
#[cfg_attr(feature = "serde", serde(tag = "$t", content = "v"))]
#[non_exhaustive]
pub enum TypeLiteral {
  /// String literal, raw text including quotes.
  String(#[drive(skip)] String),
  /// Integer literal, raw text.
  Int(#[drive(skip)] String),
  /// Float literal, raw text.
  Float(#[drive(skip)] String),
  Bool(#[drive(skip)] bool),
  Null,
  /// Variable literal, including the leading `$`: `$this`.
  Variable(#[drive(skip)] String),
}

/// Shape field block: `{k: T, v?: U, ...}`.
///
/// An unsealed shape renders a trailing `...`, optionally templated:
/// `{k: T, ...<U, V>}`.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Drive, DriveMut)]
pub struct ShapeFields {
  pub list: Vec<Node<ShapeField>>,
  #[drive(skip)]
  pub sealed: bool,
  pub arguments: Option<Node<TypeArguments>>,
}

/// Single shape field: `k: T`, `k?: T`, `0: T`, or a bare `T`.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Drive, DriveMut)]
pub struct ShapeField {
  pub key: Option<ShapeKey>,
  #[drive(skip)]
  pub optional: bool,
  pub value: Node<TypeExpr>,
}

/// Shape field key.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Debug, Drive, DriveMut)]
#[cfg_attr(feature = "serde", serde(tag = "$t", content = "v"))]
#[non_exhaustive]
pub enum ShapeKey {
  /// Bare identifier key: `k`
  Name(#[drive(skip)] String),
  /// String literal key, raw text including quotes: `"k"`
  String(#[drive(skip)] String),
  /// Numeric key, raw text: `0`
  Int(#[drive(skip)] String),
  /// Constant-mask key, printed with a `*` suffix: `Foo::BAR_*`
  Mask(TypeName),
}
