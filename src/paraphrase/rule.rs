//! Detection of coordination sites.
//!
//! Extraction and rewriting both ask [CoordinationRule::is_site], so they
//! always agree on which nodes are coordination sites.

use crate::model::Tree;

/// Label of noun phrases
pub const NOUN_PHRASE_LABEL: &str = "NP";

/// Labels marking coordination: comma and coordinating conjunction
pub const SEPARATOR_LABELS: [&str; 2] = [",", "CC"];

/// Decides which nodes are coordination sites and which of their children
/// get permuted.
///
/// A node is a *coordination site* if it is labeled with the phrase label
/// and at least one direct child carries a separator label. Its *members*
/// are the direct children that are nodes labeled with the phrase label.
///
/// Separators are matched on [Tree::label], so a bare `,` token directly
/// under a phrase also counts. Members are always subtrees, never tokens.
///
/// # Example
/// ```
/// use coordswap::model::Tree;
/// use coordswap::paraphrase::CoordinationRule;
///
/// let rule = CoordinationRule::default();
/// let tree: Tree = "(NP (NP (NNS cats)) (CC and) (NP (NNS dogs)))".parse().unwrap();
/// assert!(rule.is_site(&tree));
/// assert_eq!(rule.member_positions(&tree), vec![0, 2]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoordinationRule {
    phrase_label: String,
    separator_labels: Vec<String>,
}

impl Default for CoordinationRule {
    fn default() -> Self {
        Self {
            phrase_label: NOUN_PHRASE_LABEL.to_string(),
            separator_labels: SEPARATOR_LABELS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl CoordinationRule {
    /// Creates the rule for coordinated noun phrases (`NP` with `,` or `CC`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the label of phrases that are coordinated and permuted.
    pub fn with_phrase_label<S: Into<String>>(mut self, label: S) -> Self {
        self.phrase_label = label.into();
        self
    }

    /// Replaces the labels that mark coordination.
    pub fn with_separator_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.separator_labels = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Label of phrases that are coordinated and permuted.
    pub fn phrase_label(&self) -> &str {
        &self.phrase_label
    }

    /// Labels marking coordination.
    pub fn separator_labels(&self) -> &[String] {
        &self.separator_labels
    }

    /// Returns `true` if `tree` is a coordination site.
    pub fn is_site(&self, tree: &Tree) -> bool {
        match tree {
            Tree::Leaf(_) => false,
            Tree::Node { label, children } => {
                *label == self.phrase_label
                    && children.iter().any(|child| self.is_separator(child))
            }
        }
    }

    /// Returns `true` if `tree` is a phrase node, i.e. a member when it sits
    /// directly below a coordination site.
    pub fn is_member(&self, tree: &Tree) -> bool {
        matches!(tree, Tree::Node { label, .. } if *label == self.phrase_label)
    }

    /// Returns `true` if `tree` carries a separator label.
    pub fn is_separator(&self, tree: &Tree) -> bool {
        self.separator_labels.iter().any(|s| s == tree.label())
    }

    /// Positions of the members among the direct children of `site`, left to right.
    pub fn member_positions(&self, site: &Tree) -> Vec<usize> {
        site.children()
            .iter()
            .enumerate()
            .filter(|(_, child)| self.is_member(child))
            .map(|(i, _)| i)
            .collect()
    }

    /// Members among the direct children of `site`, left to right.
    pub fn members<'t>(&self, site: &'t Tree) -> Vec<&'t Tree> {
        site.children()
            .iter()
            .filter(|child| self.is_member(child))
            .collect()
    }

    /// Counts the coordination sites in `tree`.
    pub fn count_sites(&self, tree: &Tree) -> usize {
        let own = usize::from(self.is_site(tree));
        own + tree
            .children()
            .iter()
            .map(|child| self.count_sites(child))
            .sum::<usize>()
    }
}
