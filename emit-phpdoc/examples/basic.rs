use emit_phpdoc::{NativePrinter, PrettyPrinter, TypePrinter};
use types_phpdoc::loc::Loc;
use types_phpdoc::node::Node;
use types_phpdoc::type_expr::{TypeExpr, TypeNamed, TypeUnion};

fn named(name: &str) -> Node<TypeExpr> {
  Node::new(
    Loc::synthetic(),
    TypeExpr::Named(Node::new(Loc::synthetic(), TypeNamed::plain(name))),
  )
}

fn main() {
  // non-empty-string|positive-int|null
  let ty = Node::new(
    Loc::synthetic(),
    TypeExpr::Union(Node::new(
      Loc::synthetic(),
      TypeUnion {
        types: vec![named("non-empty-string"), named("positive-int"), named("null")],
      },
    )),
  );

  let pretty = PrettyPrinter::default();
  println!("pretty: {}", pretty.print(&ty).expect("print succeeds"));

  let native = NativePrinter::new();
  println!("native: {}", native.print(&ty).expect("print succeeds"));
}
