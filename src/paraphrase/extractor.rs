//! Extraction of coordination groups.

use crate::model::Tree;
use crate::paraphrase::rule::CoordinationRule;

/// Members of one coordination site, left to right.
///
/// Borrows from the tree it was extracted from. Groups have no key of their
/// own; they are told apart by their position in the output of [extract].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoordinationGroup<'t> {
    members: Vec<&'t Tree>,
}

impl<'t> CoordinationGroup<'t> {
    /// Creates a group from its members.
    pub fn new(members: Vec<&'t Tree>) -> Self {
        Self { members }
    }

    /// Members of this group, left to right.
    pub fn members(&self) -> &[&'t Tree] {
        &self.members
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` if the site had no member.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Collects the coordination groups of `tree`.
///
/// Walks the tree depth-first, pre-order, left to right. Every coordination
/// site opens its own group holding the site's direct member children. A
/// site nested inside a member of another site yields a separate group,
/// discovered after the enclosing one. Groups are not filtered by size.
///
/// The order of the returned groups is the order in which
/// [rewrite](crate::paraphrase::rewrite) consumes orderings.
///
/// # Example
/// ```
/// use coordswap::model::Tree;
/// use coordswap::paraphrase::{extract, CoordinationRule};
///
/// let tree: Tree = "(S (NP (NP (NNS cats)) (CC and) (NP (NNS dogs))) (VP (VBP play)))"
///     .parse()
///     .unwrap();
/// let groups = extract(&tree, &CoordinationRule::default());
/// assert_eq!(groups.len(), 1);
/// assert_eq!(groups[0].members()[1].leaves(), vec!["dogs"]);
/// ```
pub fn extract<'t>(tree: &'t Tree, rule: &CoordinationRule) -> Vec<CoordinationGroup<'t>> {
    fn visit<'t>(node: &'t Tree, rule: &CoordinationRule, groups: &mut Vec<CoordinationGroup<'t>>) {
        if rule.is_site(node) {
            groups.push(CoordinationGroup::new(rule.members(node)));
        }
        for child in node.children() {
            visit(child, rule, groups);
        }
    }

    let mut groups = Vec::new();
    visit(tree, rule, &mut groups);
    groups
}
