//! Byte source abstraction for parsing.
//!
//! This module provides the [ByteSource] trait, which [ByteParser](crate::parser::ByteParser)
//! is generic over. The in-memory implementation lives in
//! [in_memory_byte_source](crate::parser::in_memory_byte_source).

// =#========================================================================#=
// BYTE SOURCE (Trait)
// =#========================================================================#=
/// Trait defining the interface for byte sources used by ByteParser.
///
/// Keeps the bracket parser independent of where its bytes come from,
/// e.g. a command line argument, a request parameter or a whole file.
pub trait ByteSource {
    /// Peek at the current byte without consuming it.
    ///
    /// # Returns
    /// * `Some(u8)` - The current byte if available
    /// * `None` - If at end of data (EOF)
    fn peek(&self) -> Option<u8>;

    /// Get the current byte and advance the position (consume it).
    fn next_byte(&mut self) -> Option<u8>;

    /// Returns the current position in the byte stream.
    fn position(&self) -> usize;

    /// Returns a slice of bytes from a start position to the current position.
    ///
    /// # Returns
    /// A byte slice from `start` to the current position, or `None` if not available
    fn slice_from(&self, start: usize) -> Option<&[u8]>;

    /// Returns a slice of up to `k` bytes from the current position without allocating.
    fn peek_slice(&self, k: usize) -> &[u8];

    /// Check if at end of data.
    fn is_eof(&self) -> bool;
}
