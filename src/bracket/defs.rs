//! Constants for reading and writing bracketed trees.

/// Bracket token delimiters: parentheses and whitespace
pub(crate) const BRACKET_TOKEN_DELIMITERS: &[u8] = b"() \t\n\r";

/// Number of spaces added per level by [BracketStyle::Indented](crate::bracket::BracketStyle::Indented)
pub(crate) const INDENT_STEP: usize = 2;

/// Margin used by [BracketStyle::indented](crate::bracket::BracketStyle::indented)
pub(crate) const DEFAULT_MARGIN: usize = 70;

/// Bracket nesting depth accepted by [BracketParser](crate::bracket::BracketParser) unless configured
pub(crate) const DEFAULT_MAX_DEPTH: usize = 500;
