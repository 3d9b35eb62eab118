//! Paraphrasing by permutation of coordinated phrases.
//!
//! A *coordination site* is a noun phrase whose direct children include a
//! comma or coordinating conjunction, e.g. `cats and dogs` in
//! `(NP (NP (NNS cats)) (CC and) (NP (NNS dogs)))`. Its `NP` children form a
//! coordination group and can be reordered without touching the rest of the
//! sentence.
//!
//! # Pipeline
//! 1. [extract] - collects the [CoordinationGroup]s in pre-order
//! 2. [permutation::generate] - one lazy [PermutationSet] per group
//! 3. [Combinations] - lazy Cartesian product of the orderings, cut at the limit
//! 4. [rewrite] - applies one [Combination] to a fresh copy of the tree
//!
//! [Paraphraser] runs the whole pipeline.
//!
//! # Nested coordination
//! Every site forms its own group, even when it sits inside a member of
//! another site, e.g. in `[[cats and dogs], mice]` the outer group is
//! `{cats and dogs, mice}` and the inner one `{cats, dogs}`. Wherever the
//! outer ordering moves the inner phrase, the inner ordering still applies
//! to it.

mod combination;
mod engine;
mod error;
mod extractor;
pub mod permutation;
mod rewriter;
mod rule;

pub use combination::{Combination, Combinations};
pub use engine::{DEFAULT_LIMIT, Paraphraser};
pub use error::{ParaphraseError, ParaphraseResult};
pub use extractor::{CoordinationGroup, extract};
pub use permutation::{Permutation, PermutationSet, Permutations};
pub use rewriter::rewrite;
pub use rule::{CoordinationRule, NOUN_PHRASE_LABEL, SEPARATOR_LABELS};
