//! Applying a combination of orderings to a tree.

use crate::model::Tree;
use crate::paraphrase::combination::Combination;
use crate::paraphrase::error::{ParaphraseError, ParaphraseResult};
use crate::paraphrase::permutation::{Permutation, is_permutation};
use crate::paraphrase::rule::CoordinationRule;
use tracing::warn;

/// Hands out the ordering of the next coordination site in pre-order.
struct SiteCursor<'c> {
    combination: &'c [Permutation],
    next_group: usize,
}

impl<'c> SiteCursor<'c> {
    fn take(&mut self) -> Option<(usize, &'c Permutation)> {
        let group = self.next_group;
        let permutation = self.combination.get(group)?;
        self.next_group += 1;
        Some((group, permutation))
    }
}

/// Returns a new tree in which the members of every coordination site are
/// arranged according to `combination`; `tree` itself is left untouched.
///
/// Sites are visited in the same pre-order as in
/// [extract](crate::paraphrase::extract), so `combination[g]` applies to the
/// g-th extracted group. At a site, all original children are rewritten
/// first, then the rewritten members are put into the member slots in the
/// given order. Separators and any other non-member children keep their
/// positions. A site nested in a member moves along with that member and
/// is arranged by its own ordering.
///
/// # Errors
/// * [ParaphraseError::StructuralMismatch] if `combination` holds a
///   different number of orderings than `tree` has coordination sites
/// * [ParaphraseError::InvalidOrdering] if an ordering is not a permutation
///   of its site's members
///
/// # Example
/// ```
/// use coordswap::model::Tree;
/// use coordswap::paraphrase::{rewrite, CoordinationRule};
///
/// let tree: Tree = "(NP (NP (NNS cats)) (CC and) (NP (NNS dogs)))".parse().unwrap();
/// let swapped = rewrite(&tree, &vec![vec![1, 0]], &CoordinationRule::default()).unwrap();
/// assert_eq!(swapped.to_bracketed(), "(NP (NP (NNS dogs)) (CC and) (NP (NNS cats)))");
/// ```
pub fn rewrite(
    tree: &Tree,
    combination: &Combination,
    rule: &CoordinationRule,
) -> ParaphraseResult<Tree> {
    let mut cursor = SiteCursor {
        combination,
        next_group: 0,
    };

    let rewritten = rewrite_node(tree, rule, &mut cursor).map_err(|err| match err {
        // Ran out of orderings: report the real number of sites
        ParaphraseError::StructuralMismatch { orderings, .. } => {
            ParaphraseError::StructuralMismatch {
                sites: rule.count_sites(tree),
                orderings,
            }
        }
        other => other,
    });

    let rewritten = match rewritten {
        Ok(rewritten) if cursor.next_group == combination.len() => rewritten,
        Ok(_) => {
            return Err(mismatch(ParaphraseError::StructuralMismatch {
                sites: cursor.next_group,
                orderings: combination.len(),
            }));
        }
        Err(err) => return Err(mismatch(err)),
    };

    Ok(rewritten)
}

/// Logs a combination that does not fit its tree.
fn mismatch(err: ParaphraseError) -> ParaphraseError {
    warn!(error = %err, "Combination does not fit tree");
    err
}

/// Recursively rebuilds `node`, arranging members at coordination sites.
fn rewrite_node(
    node: &Tree,
    rule: &CoordinationRule,
    cursor: &mut SiteCursor<'_>,
) -> ParaphraseResult<Tree> {
    let (label, children) = match node {
        Tree::Leaf(_) => return Ok(node.clone()),
        Tree::Node { label, children } => (label, children),
    };

    // Pre-order: a site claims its ordering before any site below it
    let site = if rule.is_site(node) {
        let (group, permutation) = cursor.take().ok_or(ParaphraseError::StructuralMismatch {
            sites: 0,
            orderings: cursor.combination.len(),
        })?;
        Some((group, permutation))
    } else {
        None
    };

    let mut new_children = children
        .iter()
        .map(|child| rewrite_node(child, rule, cursor))
        .collect::<ParaphraseResult<Vec<_>>>()?;

    // Rewriting keeps each child's label, so member slots are those of `node`
    if let Some((group, permutation)) = site {
        let slots = rule.member_positions(node);
        arrange_members(&mut new_children, &slots, group, permutation)?;
    }

    Ok(Tree::Node {
        label: label.clone(),
        children: new_children,
    })
}

/// Moves the members among `children` into the order given by `permutation`.
fn arrange_members(
    children: &mut [Tree],
    slots: &[usize],
    group: usize,
    permutation: &[usize],
) -> ParaphraseResult<()> {
    if !is_permutation(permutation, slots.len()) {
        return Err(ParaphraseError::InvalidOrdering {
            group,
            members: slots.len(),
            ordering: permutation.to_vec(),
        });
    }

    let mut members: Vec<Option<Tree>> = slots
        .iter()
        .map(|&slot| Some(std::mem::replace(&mut children[slot], Tree::Leaf(String::new()))))
        .collect();

    for (&slot, &member) in slots.iter().zip(permutation) {
        if let Some(tree) = members[member].take() {
            children[slot] = tree;
        }
    }

    Ok(())
}
