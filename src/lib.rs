//! Coordswap is a library to paraphrase sentences by permuting coordinated
//! noun phrases in their constituency parse trees.
//!
//! Given a parse tree in labeled-bracket notation, it finds noun phrases
//! coordinated by a comma or conjunction (`cats, dogs and mice`) and
//! produces variant trees in which those phrases appear in every other
//! order, while the rest of the tree stays as it was.
//! Core functionality provided:
//! - Bracketed notation: parse and write treebank-style trees,
//!   see [crate::bracket].
//! - Tree model: [Tree], a tagged variant of labeled nodes and word leaves,
//!   see [crate::model].
//! - Paraphrasing: extraction of coordination groups, lazy enumeration of
//!   their orderings and structure-preserving rewriting,
//!   see [crate::paraphrase].
//! - Service boundary: request validation and JSON envelope,
//!   see [crate::service].
//!
//! Limitations:
//! - Input must already be parsed; raw sentences are not supported
//! - Paraphrases are neither checked for grammaticality nor ranked
//!
//! # Usage patterns
//! 1. [generate_paraphrases] gives quick access with default settings.
//! 2. Configure a [Paraphraser] for full control over limit, coordination
//!    rule and output style.
//!
//! ## Example Default Configuration
//! ```
//! use coordswap::generate_paraphrases;
//!
//! let tree = "(S (NP (NP (DT the) (NN cat)) (, ,) (CC and) (NP (DT the) (NN dog))) (VP (VBD ran)))";
//! let paraphrases = generate_paraphrases(tree, 2).unwrap();
//! assert_eq!(paraphrases[1],
//!     "(S (NP (NP (DT the) (NN dog)) (, ,) (CC and) (NP (DT the) (NN cat))) (VP (VBD ran)))");
//! ```
//!
//! ## Example Engine Configuration
//! ```
//! use coordswap::bracket::BracketStyle;
//! use coordswap::paraphrase::{CoordinationRule, Paraphraser};
//!
//! let paraphraser = Paraphraser::new()
//!     .with_limit(100)
//!     .with_rule(CoordinationRule::new().with_phrase_label("VP"))
//!     .with_style(BracketStyle::indented());
//!
//! let paraphrases = paraphraser
//!     .generate("(S (NP (PRP She)) (VP (VP (VBD sang)) (CC and) (VP (VBD danced))))")?;
//! assert_eq!(paraphrases.len(), 2);
//! # Ok::<(), coordswap::paraphrase::ParaphraseError>(())
//! ```

pub mod bracket;
pub mod model;
pub mod paraphrase;
pub mod parser;
pub mod service;

pub use crate::model::Tree;
pub use crate::paraphrase::{ParaphraseError, Paraphraser};
pub use crate::parser::ParsingError;

/// Parses `tree_text` and returns up to `limit` single-line paraphrases.
///
/// Uses the default coordination rule (`NP` coordinated by `,` or `CC`).
/// The first paraphrase is the input itself; a `limit` of zero or below
/// yields none.
///
/// # Errors
/// [ParaphraseError::MalformedTree] if `tree_text` is not a well-formed tree.
pub fn generate_paraphrases(tree_text: &str, limit: i64) -> Result<Vec<String>, ParaphraseError> {
    Paraphraser::new().with_limit(limit).generate(tree_text)
}
