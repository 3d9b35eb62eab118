//! Error type of the paraphrase engine.

use crate::parser::ParsingError;
use thiserror::Error;

/// Failures while generating paraphrases.
///
/// [MalformedTree](Self::MalformedTree) is a problem with the caller's
/// input. The two structural variants mean that a combination does not fit
/// the tree it is applied to; combinations produced by the engine itself
/// always fit.
#[derive(Error, Debug)]
pub enum ParaphraseError {
    #[error("Malformed tree: {0}")]
    MalformedTree(#[from] ParsingError),

    #[error("Combination supplies {orderings} orderings but the tree has {sites} coordination sites")]
    StructuralMismatch { sites: usize, orderings: usize },

    #[error("Ordering {ordering:?} of coordination group {group} is not a permutation of its {members} members")]
    InvalidOrdering {
        group: usize,
        members: usize,
        ordering: Vec<usize>,
    },
}

impl ParaphraseError {
    /// Returns `true` if a combination did not fit the tree it was applied to.
    pub fn is_structural_mismatch(&self) -> bool {
        matches!(
            self,
            ParaphraseError::StructuralMismatch { .. } | ParaphraseError::InvalidOrdering { .. }
        )
    }
}

/// Result type of the paraphrase engine
pub type ParaphraseResult<T> = Result<T, ParaphraseError>;
