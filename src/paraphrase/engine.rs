//! The paraphrase engine tying extraction, permutation and rewriting together.

use crate::bracket::{self, BracketStyle};
use crate::model::Tree;
use crate::paraphrase::combination::{Combination, Combinations};
use crate::paraphrase::error::ParaphraseResult;
use crate::paraphrase::extractor::{self, CoordinationGroup};
use crate::paraphrase::permutation::{self, PermutationSet};
use crate::paraphrase::rewriter;
use crate::paraphrase::rule::CoordinationRule;
use tracing::{debug, trace};

/// Number of paraphrases generated unless configured otherwise
pub const DEFAULT_LIMIT: i64 = 20;

// =#========================================================================#=
// PARAPHRASER
// =#========================================================================#=
/// Generates paraphrases of a parse tree by permuting coordinated phrases.
///
/// # Configuration
/// * [`with_limit(limit)`](Self::with_limit) - maximum number of
///   paraphrases, default 20; zero or negative yields none
/// * [`with_rule(rule)`](Self::with_rule) - which phrases are coordinated,
///   default `NP` separated by `,` or `CC`
/// * [`with_style(style)`](Self::with_style) - how paraphrases are
///   serialized, default [BracketStyle::SingleLine]
///
/// # Operations
/// * [`extract`](Self::extract) - coordination groups in pre-order
/// * [`permute`](Self::permute) - orderings per group
/// * [`rewrite`](Self::rewrite) - apply one combination to a tree
/// * [`paraphrase_trees`](Self::paraphrase_trees) - lazy paraphrase trees
/// * [`generate`](Self::generate) - from bracketed text to bracketed text
///
/// The engine holds configuration only, so one instance can serve any
/// number of requests.
///
/// # Example
/// ```
/// use coordswap::paraphrase::Paraphraser;
///
/// let paraphrases = Paraphraser::new()
///     .with_limit(5)
///     .generate("(S (NP (NP (NNS cats)) (CC and) (NP (NNS dogs))) (VP (VBP play)))")
///     .unwrap();
/// assert_eq!(paraphrases, vec![
///     "(S (NP (NP (NNS cats)) (CC and) (NP (NNS dogs))) (VP (VBP play)))",
///     "(S (NP (NP (NNS dogs)) (CC and) (NP (NNS cats))) (VP (VBP play)))",
/// ]);
/// ```
#[derive(Debug, Clone)]
pub struct Paraphraser {
    limit: i64,
    rule: CoordinationRule,
    style: BracketStyle,
}

impl Default for Paraphraser {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            rule: CoordinationRule::default(),
            style: BracketStyle::SingleLine,
        }
    }
}

// ============================================================================
// Construction & Configuration (pub)
// ============================================================================
impl Paraphraser {
    /// Creates an engine with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum number of paraphrases.
    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = limit;
        self
    }

    /// Sets the rule deciding which phrases are coordinated.
    pub fn with_rule(mut self, rule: CoordinationRule) -> Self {
        self.rule = rule;
        self
    }

    /// Sets the serialization style of [generate](Self::generate).
    pub fn with_style(mut self, style: BracketStyle) -> Self {
        self.style = style;
        self
    }

    /// The configured limit as given.
    pub fn limit(&self) -> i64 {
        self.limit
    }

    /// Number of paraphrases that may be taken, zero for non-positive limits.
    fn effective_limit(&self) -> usize {
        usize::try_from(self.limit).unwrap_or(0)
    }

    /// The coordination rule in use.
    pub fn rule(&self) -> &CoordinationRule {
        &self.rule
    }

    /// The serialization style in use.
    pub fn style(&self) -> &BracketStyle {
        &self.style
    }
}

// ============================================================================
// Operations (pub)
// ============================================================================
impl Paraphraser {
    /// Collects the coordination groups of `tree` in pre-order.
    pub fn extract<'t>(&self, tree: &'t Tree) -> Vec<CoordinationGroup<'t>> {
        extractor::extract(tree, &self.rule)
    }

    /// Returns the orderings of each group, in group order.
    pub fn permute<'t>(&self, groups: Vec<CoordinationGroup<'t>>) -> Vec<PermutationSet<'t>> {
        permutation::generate(groups)
    }

    /// Applies one combination to a fresh copy of `tree`.
    pub fn rewrite(&self, tree: &Tree, combination: &Combination) -> ParaphraseResult<Tree> {
        rewriter::rewrite(tree, combination, &self.rule)
    }

    /// Number of distinct combinations for `tree` ignoring the limit,
    /// or `None` if it does not fit into `u128`.
    pub fn count_paraphrases(&self, tree: &Tree) -> Option<u128> {
        let sets = self.permute(self.extract(tree));
        Combinations::from_sets(&sets).total()
    }

    /// Lazily yields up to `limit` paraphrase trees of `tree`.
    ///
    /// Combinations are enumerated in product order (last group fastest)
    /// and each is applied to `tree` itself, never to an earlier paraphrase.
    /// The first paraphrase is always `tree` unchanged.
    pub fn paraphrase_trees<'a>(
        &'a self,
        tree: &'a Tree,
    ) -> impl Iterator<Item = ParaphraseResult<Tree>> + 'a {
        let sets = self.permute(self.extract(tree));
        let combinations = Combinations::from_sets(&sets);
        debug!(
            num_groups = sets.len(),
            group_sizes = ?combinations.group_sizes(),
            total = ?combinations.total(),
            limit = self.limit,
            "Enumerating coordination orderings"
        );

        combinations
            .take(self.effective_limit())
            .map(move |combination| {
                trace!(?combination, "Rewriting tree");
                self.rewrite(tree, &combination)
            })
    }

    /// Generates up to `limit` serialized paraphrases of a parsed tree.
    pub fn generate_from_tree(&self, tree: &Tree) -> ParaphraseResult<Vec<String>> {
        self.paraphrase_trees(tree)
            .map(|paraphrase| paraphrase.map(|t| bracket::to_bracketed(&t, &self.style)))
            .collect()
    }

    /// Parses `tree_text` and generates up to `limit` serialized paraphrases.
    ///
    /// # Errors
    /// [ParaphraseError::MalformedTree](crate::paraphrase::ParaphraseError::MalformedTree)
    /// if `tree_text` is not exactly one well-formed bracketed tree.
    pub fn generate(&self, tree_text: &str) -> ParaphraseResult<Vec<String>> {
        let tree = bracket::parse_str(tree_text)?;
        let paraphrases = self.generate_from_tree(&tree)?;
        debug!(num_paraphrases = paraphrases.len(), "Generated paraphrases");
        Ok(paraphrases)
    }
}
