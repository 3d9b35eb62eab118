//! Bracketed notation writing for [Tree]s.

use crate::bracket::defs::{DEFAULT_MARGIN, INDENT_STEP};
use crate::model::Tree;
use std::io::{self, BufWriter, Write};

/// Style for serializing a tree to bracketed notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BracketStyle {
    /// Whole tree on one line, no matter how long
    #[default]
    SingleLine,
    /// Subtrees whose flat form (plus indentation) reaches `margin` characters
    /// are broken up, one child per line, indented two spaces per level
    Indented { margin: usize },
}

impl BracketStyle {
    /// Indented style with the common 70 character margin.
    pub fn indented() -> Self {
        BracketStyle::Indented {
            margin: DEFAULT_MARGIN,
        }
    }
}

/// Returns the bracketed representation of `tree` in the given style.
///
/// A node is written as `(LABEL child child ...)` and a leaf as its bare
/// text. A node without children is written as `(LABEL )`.
///
/// # Example
/// ```
/// use coordswap::bracket::{to_bracketed, BracketStyle};
/// use coordswap::model::Tree;
///
/// let tree = Tree::node("S", vec![
///     Tree::node("NP", vec![Tree::node("PRP", vec![Tree::leaf("It")])]),
///     Tree::node("VP", vec![Tree::node("VBD", vec![Tree::leaf("rained")])]),
/// ]);
/// assert_eq!(
///     to_bracketed(&tree, &BracketStyle::SingleLine),
///     "(S (NP (PRP It)) (VP (VBD rained)))"
/// );
/// assert_eq!(
///     to_bracketed(&tree, &BracketStyle::Indented { margin: 20 }),
///     "(S\n  (NP (PRP It))\n  (VP (VBD rained)))"
/// );
/// ```
pub fn to_bracketed(tree: &Tree, style: &BracketStyle) -> String {
    match style {
        BracketStyle::SingleLine => {
            let mut out = String::with_capacity(estimate_bracketed_len(tree));
            build_flat(tree, &mut out);
            out
        }
        BracketStyle::Indented { margin } => {
            let mut out = String::new();
            build_indented(tree, &mut out, *margin, 0);
            out
        }
    }
}

/// Writes given trees to `writer` in the given style, one tree per line.
///
/// # Errors
/// Returns an I/O error if writing fails.
pub fn write_bracketed<W: Write>(writer: W, trees: &[Tree], style: &BracketStyle) -> io::Result<()> {
    if trees.is_empty() {
        return Ok(());
    }

    let mut writer = BufWriter::new(writer);
    for tree in trees {
        writer.write_all(to_bracketed(tree, style).as_bytes())?;
        writer.write_all(b"\n")?;
    }

    writer.flush()?;
    Ok(())
}

/// Recursive helper for the single-line form.
fn build_flat(tree: &Tree, out: &mut String) {
    match tree {
        Tree::Leaf(text) => out.push_str(text),
        Tree::Node { label, children } => {
            out.push('(');
            out.push_str(label);
            out.push(' ');
            for (i, child) in children.iter().enumerate() {
                if i > 0 {
                    out.push(' ');
                }
                build_flat(child, out);
            }
            out.push(')');
        }
    }
}

/// Recursive helper for the indented form.
fn build_indented(tree: &Tree, out: &mut String, margin: usize, indent: usize) {
    let children = match tree {
        Tree::Leaf(text) => {
            out.push_str(text);
            return;
        }
        Tree::Node { children, .. } => children,
    };

    let flat = to_bracketed(tree, &BracketStyle::SingleLine);
    if flat.chars().count() + indent < margin {
        out.push_str(&flat);
        return;
    }

    out.push('(');
    out.push_str(tree.label());
    for child in children {
        out.push('\n');
        out.extend(std::iter::repeat_n(' ', indent + INDENT_STEP));
        build_indented(child, out, margin, indent + INDENT_STEP);
    }
    out.push(')');
}

/// Estimates the length of the single-line form to avoid reallocations.
///
/// Slight upper bound: every node contributes its label plus `(`, `)` and
/// one separator, every leaf its text plus one separator.
fn estimate_bracketed_len(tree: &Tree) -> usize {
    match tree {
        Tree::Leaf(text) => text.len() + 1,
        Tree::Node { label, children } => {
            label.len() + 3 + children.iter().map(estimate_bracketed_len).sum::<usize>()
        }
    }
}
