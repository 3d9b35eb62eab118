//! Error types for the bracketed-tree parser.
//!
//! This module provides [ParsingError] and [ParsingErrorType] for representing
//! and reporting malformed parse-tree input.

use crate::parser::byte_parser::ByteParser;
use crate::parser::byte_source::ByteSource;
use std::error::Error;
use std::fmt;

/// Default length of context provided by error from parser
const DEFAULT_CONTEXT_LENGTH: usize = 50;

// =#========================================================================#=
// PARSING ERROR TYPE
// =#========================================================================#=
/// Ways in which a bracketed tree can be malformed.
#[derive(PartialEq, Debug, Clone)]
pub enum ParsingErrorType {
    IoError(String),
    /// Input holds nothing but whitespace
    EmptyInput,
    /// Input ended inside an open bracket
    UnexpectedEOF,
    /// A tree must start with `(`
    MissingOpeningBracket,
    /// A `)` without matching `(`
    UnexpectedClosingBracket,
    /// Content after a complete tree where none was expected
    TrailingContent,
    /// Label or word is not valid UTF-8
    InvalidEncoding,
    /// Node below the root without a label, e.g. `( (NN x))` inside a tree
    MissingLabel,
    /// Brackets nested deeper than the configured maximum depth
    TooDeep(usize),
}

// =#========================================================================#=
// PARSING ERROR
// =#========================================================================#=
/// Parsing error with contextual information (position and following bytes).
#[derive(Debug, Clone, PartialEq)]
pub struct ParsingError {
    kind: ParsingErrorType,
    position: usize,
    context: String,
}

impl ParsingError {
    /// Create a ParsingError from an error type and parser state
    pub fn from_parser<S: ByteSource>(kind: ParsingErrorType, parser: &ByteParser<S>) -> Self {
        Self {
            kind,
            position: parser.position(),
            context: parser.get_context_as_string(DEFAULT_CONTEXT_LENGTH),
        }
    }

    /// Convenience constructor for EmptyInput
    pub fn empty_input<S: ByteSource>(parser: &ByteParser<S>) -> Self {
        Self::from_parser(ParsingErrorType::EmptyInput, parser)
    }

    /// Convenience constructor for UnexpectedEOF
    pub fn unexpected_eof<S: ByteSource>(parser: &ByteParser<S>) -> Self {
        Self::from_parser(ParsingErrorType::UnexpectedEOF, parser)
    }

    /// Convenience constructor for MissingOpeningBracket
    pub fn missing_opening_bracket<S: ByteSource>(parser: &ByteParser<S>) -> Self {
        Self::from_parser(ParsingErrorType::MissingOpeningBracket, parser)
    }

    /// Convenience constructor for UnexpectedClosingBracket
    pub fn unexpected_closing_bracket<S: ByteSource>(parser: &ByteParser<S>) -> Self {
        Self::from_parser(ParsingErrorType::UnexpectedClosingBracket, parser)
    }

    /// Convenience constructor for TrailingContent
    pub fn trailing_content<S: ByteSource>(parser: &ByteParser<S>) -> Self {
        Self::from_parser(ParsingErrorType::TrailingContent, parser)
    }

    /// Convenience constructor for InvalidEncoding
    pub fn invalid_encoding<S: ByteSource>(parser: &ByteParser<S>) -> Self {
        Self::from_parser(ParsingErrorType::InvalidEncoding, parser)
    }

    /// Convenience constructor for MissingLabel
    pub fn missing_label<S: ByteSource>(parser: &ByteParser<S>) -> Self {
        Self::from_parser(ParsingErrorType::MissingLabel, parser)
    }

    /// Convenience constructor for TooDeep
    pub fn too_deep<S: ByteSource>(max_depth: usize, parser: &ByteParser<S>) -> Self {
        Self::from_parser(ParsingErrorType::TooDeep(max_depth), parser)
    }

    /// Get the error kind
    pub fn kind(&self) -> &ParsingErrorType {
        &self.kind
    }

    /// Get the position where the error occurred
    pub fn position(&self) -> usize {
        self.position
    }
}

impl fmt::Display for ParsingError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.kind {
            ParsingErrorType::EmptyInput => write!(f, "Empty input, expected a bracketed tree")?,
            ParsingErrorType::UnexpectedEOF => write!(f, "Unexpected end of input, missing ')'")?,
            ParsingErrorType::MissingOpeningBracket => write!(f, "Expected '(' at start of tree")?,
            ParsingErrorType::UnexpectedClosingBracket => write!(f, "Unbalanced ')'")?,
            ParsingErrorType::TrailingContent => write!(f, "Unexpected content after end of tree")?,
            ParsingErrorType::InvalidEncoding => write!(f, "Label is not valid UTF-8")?,
            ParsingErrorType::MissingLabel => write!(f, "Missing label of non-root node")?,
            ParsingErrorType::TooDeep(max_depth) => {
                write!(f, "Tree nested deeper than {max_depth} levels")?
            }
            ParsingErrorType::IoError(msg) => write!(f, "IO error - {msg}")?,
        }

        write!(f, " at position {}", self.position)?;

        if !self.context.is_empty() {
            write!(f, "\n  Context (next {} bytes): {}", self.context.len(), self.context)?;
        }

        Ok(())
    }
}

impl Error for ParsingError {}

impl From<std::io::Error> for ParsingError {
    fn from(err: std::io::Error) -> Self {
        ParsingError {
            kind: ParsingErrorType::IoError(err.to_string()),
            position: 0, // No position for IO errors
            context: String::new(),
        }
    }
}
