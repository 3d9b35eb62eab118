//! Labeled-bracket (treebank) notation parser and writer for parse trees.
//!
//! This module provides [BracketParser] to parse bracketed strings into
//! [Tree]s and [to_bracketed] to write them back.
//!
//! # Quick API
//! For simple use cases with default settings:
//! * [`parse_str`] - parses exactly one tree from a string
//! * [`parse_file`] - parses all trees of a file
//!
//! # Full API
//! For more control, configure a [BracketParser] and
//! provide data via a [ByteParser]:
//! * [`BracketParser::parse_tree`] - parse a single tree
//! * [`BracketParser::parse_all`] - parse all trees until EOF
//! * [`BracketParser::into_iter`] - obtain an iterator over trees
//!
//! # Format
//! The notation has the following simple grammar:
//! * `tree ::= '(' [label] child* ')'`
//! * `child ::= tree | word`
//! * `label ::= word ::= [^\s()]+`
//!
//! Furthermore:
//! * Whitespace (space, tab, CR, LF) separates elements and may occur
//!   anywhere between them
//! * Labels and words are UTF-8 and cannot contain brackets
//!   (treebanks write `-LRB-` / `-RRB-` instead)
//! * The root label may be empty, e.g. `( (S (NP ...) (VP ...)) )`;
//!   every other node needs a label
//! * Nesting is limited to 500 levels by default, see
//!   [BracketParser::with_max_depth]

mod defs;
pub mod parser;
pub mod writer;

pub use parser::{BracketIterator, BracketParser};
pub use writer::{BracketStyle, to_bracketed, write_bracketed};

use crate::model::Tree;
use crate::parser::ParsingError;
use crate::parser::byte_parser::ByteParser;
use std::path::Path;

// ============================================================================
// QUICK PARSING API (pub)
// ============================================================================
/// Parses a string holding exactly one bracketed tree.
///
/// # Returns
/// * [Tree] - Tree parsed from the string
/// * [ParsingError] - If the string is empty, not well-formed, nested too
///   deep, or has content after the tree
///
/// # Example
/// ```
/// use coordswap::bracket::parse_str;
///
/// let tree = parse_str("(NP (NP (NNS cats)) (CC and) (NP (NNS dogs)))").unwrap();
/// assert_eq!(tree.children().len(), 3);
/// ```
pub fn parse_str<S: AsRef<str>>(text: S) -> Result<Tree, ParsingError> {
    let mut byte_parser = ByteParser::for_str(text.as_ref());
    let tree = BracketParser::new().parse_tree(&mut byte_parser)?;

    byte_parser.skip_whitespace();
    if !byte_parser.is_eof() {
        if byte_parser.peek_is(b')') {
            return Err(ParsingError::unexpected_closing_bracket(&byte_parser));
        }
        return Err(ParsingError::trailing_content(&byte_parser));
    }

    Ok(tree)
}

/// Parses all whitespace-separated trees of a file eagerly.
///
/// # Arguments
/// * `path` - Path to the file (accepting `&str`, `String`, `Path`, or `PathBuf`)
///
/// # Returns
/// * `Vec<Tree>` - All parsed trees
/// * [ParsingError] - If file reading fails or a tree is malformed
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Vec<Tree>, ParsingError> {
    let contents = std::fs::read(path)?;
    BracketParser::new().parse_all(ByteParser::for_vec(contents))
}
