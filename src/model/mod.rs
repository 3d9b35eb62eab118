//! Data model for constituency parse trees.
//!
//! # Tree representation
//! Trees are represented by [Tree], a recursive tagged variant: a
//! [Node](Tree::Node) has a label and ordered children, a
//! [Leaf](Tree::Leaf) is a terminal token. Traversals pattern match on
//! the variant.
//!
//! Trees are read from and written to bracketed notation by
//! [crate::bracket].

pub mod tree;

pub use tree::Tree;
