//! Node definitions for the PHPDoc type expression language.
//!
//! This crate only defines the tree: named/generic types, unions and
//! intersections, shapes, callable signatures, conditional types, constant
//! masks and literals. Trees are produced elsewhere (by a parser or built
//! programmatically) and consumed read-only, e.g. by the printers in
//! `emit-phpdoc`.

pub mod loc;
pub mod name;
pub mod node;
pub mod type_expr;
