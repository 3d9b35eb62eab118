//! Labeled constituency tree.
//!
//! Provides [Tree], a tagged variant of internal [Node](Tree::Node)s
//! and terminal [Leaf](Tree::Leaf) tokens.

use crate::bracket::{self, BracketStyle};
use crate::parser::ParsingError;
use std::fmt;
use std::str::FromStr;

// =$========================================================================$=
// TREE
// =$========================================================================$=
/// A constituency (phrase-structure) parse tree.
///
/// Internal nodes carry a label (e.g. `S`, `NP`, `CC`, `,` or a
/// part-of-speech tag) and an ordered list of children. Terminal tokens are
/// leaves; the label of a leaf is its text.
///
/// Child order is significant. [Clone] is a deep copy, so a clone can be
/// rewritten freely without touching the original.
///
/// # Example
/// ```
/// use coordswap::model::Tree;
///
/// let tree = Tree::node("NP", vec![
///     Tree::node("DT", vec![Tree::leaf("the")]),
///     Tree::node("NN", vec![Tree::leaf("cat")]),
/// ]);
/// assert_eq!(tree.to_bracketed(), "(NP (DT the) (NN cat))");
/// assert_eq!(tree.leaves(), vec!["the", "cat"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Tree {
    /// Non-terminal with label and ordered children
    Node { label: String, children: Vec<Tree> },
    /// Terminal token
    Leaf(String),
}

// ============================================================================
// New, Getters / Accessors, etc. (pub)
// ============================================================================
impl Tree {
    /// Creates a new internal node.
    pub fn node<L: Into<String>>(label: L, children: Vec<Tree>) -> Self {
        Tree::Node {
            label: label.into(),
            children,
        }
    }

    /// Creates a new leaf (terminal token).
    pub fn leaf<T: Into<String>>(text: T) -> Self {
        Tree::Leaf(text.into())
    }

    /// Returns the label of a node, or the text of a leaf.
    pub fn label(&self) -> &str {
        match self {
            Tree::Node { label, .. } => label,
            Tree::Leaf(text) => text,
        }
    }

    /// Returns the children of a node; a leaf has none.
    pub fn children(&self) -> &[Tree] {
        match self {
            Tree::Node { children, .. } => children,
            Tree::Leaf(_) => &[],
        }
    }

    /// Returns `true` if this is a terminal token.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Tree::Leaf(_))
    }

    /// Returns the terminal tokens from left to right.
    pub fn leaves(&self) -> Vec<&str> {
        fn collect<'t>(tree: &'t Tree, leaves: &mut Vec<&'t str>) {
            match tree {
                Tree::Leaf(text) => leaves.push(text),
                Tree::Node { children, .. } => {
                    for child in children {
                        collect(child, leaves);
                    }
                }
            }
        }

        let mut leaves = Vec::new();
        collect(self, &mut leaves);
        leaves
    }

    /// Returns the number of nodes and leaves in this tree.
    pub fn num_nodes(&self) -> usize {
        match self {
            Tree::Leaf(_) => 1,
            Tree::Node { children, .. } => 1 + children.iter().map(Tree::num_nodes).sum::<usize>(),
        }
    }

    /// Returns the single-line bracketed representation of this tree.
    pub fn to_bracketed(&self) -> String {
        bracket::to_bracketed(self, &BracketStyle::SingleLine)
    }
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_bracketed())
    }
}

impl FromStr for Tree {
    type Err = ParsingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        bracket::parse_str(s)
    }
}
