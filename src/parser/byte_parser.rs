//! Low-level byte-by-byte parser for bracketed text.
//!
//! This module provides [ByteParser] for parsing text-based tree formats with
//! support for peeking, consuming, whitespace skipping and token extraction.
//! Used as the foundation of the [BracketParser](crate::bracket::BracketParser).

use crate::parser::byte_source::ByteSource;
use crate::parser::in_memory_byte_source::InMemoryByteSource;
use crate::parser::parsing_error::ParsingError;

// =#========================================================================#=
// BYTE PARSER
// =#========================================================================#=
/// A byte-by-byte parser with support for peeking, consuming, and token extraction.
///
/// Structural bytes (brackets and whitespace) are ASCII, so the parser works
/// on bytes and only decodes UTF-8 once a full token has been read. Multi-byte
/// characters inside labels or words are therefore never split.
///
/// # Example
/// ```
/// use coordswap::parser::ByteParser;
///
/// let mut parser = ByteParser::for_str("  (NP (DT the) (NN cat))");
/// parser.skip_whitespace();
/// assert!(parser.consume_if(b'('));
/// assert_eq!(parser.parse_token(b" \t\n\r()").unwrap(), "NP");
/// ```
pub struct ByteParser<S: ByteSource> {
    source: S,
}

impl ByteParser<InMemoryByteSource> {
    /// Creates a new `ByteParser` from a byte slice by copying it into a Vec.
    pub fn for_bytes(input: &[u8]) -> Self {
        Self::new(InMemoryByteSource::from_vec(input.to_vec()))
    }

    /// Creates a new `ByteParser` from a string by copying it into a Vec.
    pub fn for_str(input: &str) -> Self {
        Self::new(InMemoryByteSource::from_vec(input.as_bytes().to_vec()))
    }

    /// Creates a new `ByteParser` taking ownership of the given bytes.
    pub fn for_vec(input: Vec<u8>) -> Self {
        Self::new(InMemoryByteSource::from_vec(input))
    }
}

impl<S: ByteSource> ByteParser<S> {
    /// Creates a new `ByteParser` from a byte source.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Peeks at the current byte without consuming it.
    ///
    /// # Returns
    /// * `Some(u8)` - The current byte if available
    /// * `None` - If at end of data (EOF)
    #[inline(always)]
    pub fn peek(&self) -> Option<u8> {
        self.source.peek()
    }

    /// Gets the current byte and advances the position (consumes it).
    #[inline(always)]
    pub fn next_byte(&mut self) -> Option<u8> {
        self.source.next_byte()
    }

    /// Skips (consumes) all consecutive whitespace characters.
    ///
    /// Whitespace includes: space (' '), tab ('\t'), newline ('\n'), and carriage return ('\r').
    pub fn skip_whitespace(&mut self) {
        while let Some(b) = self.peek() {
            if is_whitespace(b) {
                self.next_byte();
            } else {
                break;
            }
        }
    }

    /// Checks if the current byte is exactly `ch`.
    pub fn peek_is(&self, ch: u8) -> bool {
        self.peek() == Some(ch)
    }

    /// Consumes the current byte if it is exactly `ch`.
    ///
    /// # Returns
    /// `true` if the byte was matched and consumed, `false` otherwise
    pub fn consume_if(&mut self, ch: u8) -> bool {
        if self.peek_is(ch) {
            self.next_byte();
            true
        } else {
            false
        }
    }

    /// Returns whether the end of data (EOF) has been reached.
    pub fn is_eof(&self) -> bool {
        self.source.is_eof()
    }

    /// Returns the current byte offset in the input.
    pub fn position(&self) -> usize {
        self.source.position()
    }

    /// Returns a string from up to `k` bytes from the current position for error context.
    ///
    /// Invalid UTF-8 sequences are replaced with the Unicode replacement character.
    pub fn get_context_as_string(&self, k: usize) -> String {
        String::from_utf8_lossy(self.source.peek_slice(k)).into_owned()
    }

    /// Parses a token (label or word) until any of the given delimiters or EOF.
    ///
    /// Returns an empty string if the parser already sits on a delimiter.
    ///
    /// # Errors
    /// Returns [ParsingError] of type
    /// [InvalidEncoding](crate::parser::ParsingErrorType::InvalidEncoding)
    /// if the token is not valid UTF-8.
    pub fn parse_token(&mut self, delimiters: &[u8]) -> Result<String, ParsingError> {
        let start = self.position();
        while let Some(b) = self.peek() {
            if delimiters.contains(&b) {
                break;
            }
            self.next_byte();
        }

        let bytes = self.source.slice_from(start).unwrap_or(&[]);
        match std::str::from_utf8(bytes) {
            Ok(token) => Ok(token.to_string()),
            Err(_) => Err(ParsingError::invalid_encoding(self)),
        }
    }
}

#[inline(always)]
fn is_whitespace(b: u8) -> bool {
    b == b' ' || b == b'\t' || b == b'\n' || b == b'\r'
}
