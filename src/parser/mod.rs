//! Basic low-level byte parser functionality.
//!
//! [ByteParser] walks a [ByteSource] byte by byte and is the foundation of
//! the bracketed-tree reader in [crate::bracket]. Failures are reported as
//! [ParsingError] carrying position and context.

pub mod byte_parser;
pub(crate) mod byte_source;
pub(crate) mod in_memory_byte_source;
pub mod parsing_error;

pub use byte_parser::ByteParser;
pub use parsing_error::{ParsingError, ParsingErrorType};
