//! Orderings of coordination groups.
//!
//! Orderings are permutations of member indices and are enumerated lazily
//! in lexicographic order, starting with the identity. Members count as
//! distinct by position, so textually identical members still give k!
//! orderings.

use crate::paraphrase::extractor::CoordinationGroup;
use std::iter::FusedIterator;

/// One ordering of a group: `permutation[i]` is the index of the member
/// placed at the i-th member slot.
pub type Permutation = Vec<usize>;

/// Returns `k!`, or `None` if it does not fit into `u128`.
pub fn factorial(k: usize) -> Option<u128> {
    (1..=k as u128).try_fold(1u128, |acc, i| acc.checked_mul(i))
}

/// Rearranges `p` into the next permutation in lexicographic order.
///
/// Returns `false` and resets `p` to ascending order if `p` was the last
/// permutation.
pub(crate) fn next_permutation(p: &mut [usize]) -> bool {
    let Some(i) = (1..p.len()).rev().find(|&i| p[i - 1] < p[i]).map(|i| i - 1) else {
        p.reverse();
        return false;
    };
    // p[i+1..] is descending and holds at least one value above p[i]
    let j = (i + 1..p.len()).rev().find(|&j| p[j] > p[i]).unwrap_or(i + 1);
    p.swap(i, j);
    p[i + 1..].reverse();
    true
}

// =#========================================================================#=
// PERMUTATION SET
// =#========================================================================#=
/// All orderings of one [CoordinationGroup].
///
/// Nothing is materialized up front: [iter](Self::iter) enumerates the
/// orderings on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermutationSet<'t> {
    group: CoordinationGroup<'t>,
}

impl<'t> PermutationSet<'t> {
    /// Creates the set of orderings of `group`.
    pub fn new(group: CoordinationGroup<'t>) -> Self {
        Self { group }
    }

    /// The group being permuted.
    pub fn group(&self) -> &CoordinationGroup<'t> {
        &self.group
    }

    /// Number of members, k.
    pub fn num_members(&self) -> usize {
        self.group.len()
    }

    /// Number of orderings, k!, or `None` on overflow.
    pub fn count(&self) -> Option<u128> {
        factorial(self.group.len())
    }

    /// Iterates over all orderings as index permutations.
    pub fn iter(&self) -> Permutations {
        Permutations::new(self.group.len())
    }

}

/// Returns one [PermutationSet] per group, in the same order.
pub fn generate<'t>(groups: Vec<CoordinationGroup<'t>>) -> Vec<PermutationSet<'t>> {
    groups.into_iter().map(PermutationSet::new).collect()
}

/// Returns `true` if `permutation` holds each of `0..k` exactly once.
pub(crate) fn is_permutation(permutation: &[usize], k: usize) -> bool {
    if permutation.len() != k {
        return false;
    }
    let mut seen = vec![false; k];
    for &i in permutation {
        match seen.get_mut(i) {
            Some(s) if !*s => *s = true,
            _ => return false,
        }
    }
    true
}

// =#========================================================================#=
// PERMUTATIONS (lazy)
// =#========================================================================#=
/// Iterator over the permutations of `0..k` in lexicographic order.
///
/// Yields exactly one (empty) permutation for k = 0.
#[derive(Debug, Clone)]
pub struct Permutations {
    current: Option<Permutation>,
}

impl Permutations {
    /// Starts at the identity permutation of `0..k`.
    pub fn new(k: usize) -> Self {
        Self {
            current: Some((0..k).collect()),
        }
    }
}

impl Iterator for Permutations {
    type Item = Permutation;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current.as_mut()?;
        let item = current.clone();
        if !next_permutation(current) {
            self.current = None;
        }
        Some(item)
    }
}

impl FusedIterator for Permutations {}
