//! Structs and logic to parse bracketed trees.
//!
//! This module provides the [BracketParser] struct, which offers methods
//! to parse single or multiple trees, as well as lazy parsing via a
//! [BracketIterator].

use crate::bracket::defs::{BRACKET_TOKEN_DELIMITERS, DEFAULT_MAX_DEPTH};
use crate::model::Tree;
use crate::parser::byte_parser::ByteParser;
use crate::parser::byte_source::ByteSource;
use crate::parser::parsing_error::ParsingError;
use tracing::debug;

// =#========================================================================#=
// BRACKET PARSER
// =#========================================================================#=
/// Parser (configuration) for trees in labeled-bracket notation.
///
/// # Configuration
/// * [`with_unwrapped_root()`](Self::with_unwrapped_root)
///     - Removes the unlabeled wrapper node treebank files put around each
///       sentence, e.g. `( (S ...) )` is parsed as `(S ...)`.
/// * [`with_max_depth(n)`](Self::with_max_depth)
///     - Rejects trees nested deeper than `n` brackets, default 500.
///       Every later pass over a tree recurses, so depth is bounded here.
///
/// # Parsing
/// * [`parse_tree`](Self::parse_tree) - Parse single tree
/// * [`parse_all`](Self::parse_all) - Parse all trees eagerly
/// * [`into_iter`](Self::into_iter) - Parse trees lazily
///
/// # Example
/// ```
/// use coordswap::bracket::BracketParser;
/// use coordswap::parser::ByteParser;
///
/// let mut byte_parser = ByteParser::for_str("( (S (NP (PRP It)) (VP (VBD rained))) )");
/// let tree = BracketParser::new()
///     .with_unwrapped_root()
///     .parse_tree(&mut byte_parser)
///     .unwrap();
/// assert_eq!(tree.label(), "S");
/// ```
#[derive(Debug, Clone)]
pub struct BracketParser {
    unwrap_root: bool,
    max_depth: usize,
}

impl Default for BracketParser {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Construction & Configuration (pub)
// ============================================================================
impl BracketParser {
    /// Creates a new [BracketParser] keeping every node as written.
    pub fn new() -> Self {
        Self {
            unwrap_root: false,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Configures the parser to drop an unlabeled root with a single child.
    pub fn with_unwrapped_root(mut self) -> Self {
        self.unwrap_root = true;
        self
    }

    /// Configures the maximum bracket nesting depth, the root being depth 1.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// The maximum bracket nesting depth.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}

// ============================================================================
// API Parsing (pub)
// ============================================================================
impl BracketParser {
    /// Consumes the parser and returns an iterator over trees from the byte source.
    ///
    /// # Arguments
    /// * `byte_parser` - A byte parser with underlying source containing only
    ///   bracketed trees separated by whitespace.
    pub fn into_iter<B: ByteSource>(self, byte_parser: ByteParser<B>) -> BracketIterator<B> {
        BracketIterator {
            byte_parser,
            parser: self,
            done: false,
        }
    }

    /// Parses all trees from the byte source until EOF.
    ///
    /// # Returns
    /// * `Ok(Vec<Tree>)` - All parsed trees, possibly none
    /// * `Err(ParsingError)` - If any tree fails to parse
    pub fn parse_all<B: ByteSource>(
        &self,
        mut byte_parser: ByteParser<B>,
    ) -> Result<Vec<Tree>, ParsingError> {
        let mut trees = Vec::new();
        loop {
            byte_parser.skip_whitespace();
            if byte_parser.is_eof() {
                break;
            }
            trees.push(self.parse_tree(&mut byte_parser)?);
        }
        debug!(num_trees = trees.len(), "Parsed bracketed trees");
        Ok(trees)
    }

    /// Parses a single tree from the given [ByteParser].
    ///
    /// Leading whitespace is skipped. Anything after the closing bracket of
    /// the tree is left unconsumed.
    ///
    /// # Returns
    /// * `Ok(Tree)` - The parsed tree
    /// * `Err(ParsingError)` - If the input is empty, not well-formed or
    ///   nested too deep
    pub fn parse_tree<B: ByteSource>(
        &self,
        parser: &mut ByteParser<B>,
    ) -> Result<Tree, ParsingError> {
        parser.skip_whitespace();
        if parser.is_eof() {
            return Err(ParsingError::empty_input(parser));
        }

        let tree = self.parse_node(parser, 1)?;
        if self.unwrap_root {
            return Ok(unwrap_root(tree));
        }
        Ok(tree)
    }
}

// ============================================================================
// Parsing
// ============================================================================
impl BracketParser {
    /// Parses a node `'(' label? child* ')'`:
    /// - Expects parser at opening `(`
    ///   (caller should skip leading whitespace)
    /// - Label may be empty only at the root (`depth` 1), e.g. for the
    ///   wrapper node of treebank sentences
    fn parse_node<B: ByteSource>(
        &self,
        parser: &mut ByteParser<B>,
        depth: usize,
    ) -> Result<Tree, ParsingError> {
        if depth > self.max_depth {
            return Err(ParsingError::too_deep(self.max_depth, parser));
        }
        if !parser.consume_if(b'(') {
            if parser.peek_is(b')') {
                return Err(ParsingError::unexpected_closing_bracket(parser));
            }
            return Err(ParsingError::missing_opening_bracket(parser));
        }

        parser.skip_whitespace();
        let label = parser.parse_token(BRACKET_TOKEN_DELIMITERS)?;
        if label.is_empty() && depth > 1 {
            return Err(ParsingError::missing_label(parser));
        }

        let mut children = Vec::new();
        loop {
            parser.skip_whitespace();
            match parser.peek() {
                None => return Err(ParsingError::unexpected_eof(parser)),
                Some(b')') => {
                    parser.next_byte();
                    break;
                }
                Some(b'(') => children.push(self.parse_node(parser, depth + 1)?),
                Some(_) => {
                    let word = parser.parse_token(BRACKET_TOKEN_DELIMITERS)?;
                    children.push(Tree::Leaf(word));
                }
            }
        }

        Ok(Tree::Node { label, children })
    }
}

/// Replaces `( (X ...) )` by `(X ...)`, leaves any other tree untouched.
fn unwrap_root(tree: Tree) -> Tree {
    match tree {
        Tree::Node { label, mut children }
            if label.is_empty() && children.len() == 1 && !children[0].is_leaf() =>
        {
            children.remove(0)
        }
        other => other,
    }
}

// =#========================================================================#=
// BRACKET ITERATOR (lazy parser)
// =#========================================================================#=
/// Iterator to parse bracketed trees.
///
/// Created by [BracketParser::into_iter()].
/// Yields `Result<Tree, ParsingError>` for each tree and stops after the
/// first error.
pub struct BracketIterator<B: ByteSource> {
    parser: BracketParser,
    byte_parser: ByteParser<B>,
    done: bool,
}

impl<B: ByteSource> Iterator for BracketIterator<B> {
    type Item = Result<Tree, ParsingError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        self.byte_parser.skip_whitespace();
        if self.byte_parser.is_eof() {
            self.done = true;
            return None;
        }

        let result = self.parser.parse_tree(&mut self.byte_parser);
        if result.is_err() {
            self.done = true;
        }
        Some(result)
    }
}
