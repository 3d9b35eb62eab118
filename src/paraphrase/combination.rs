//! Lazy Cartesian product of per-group orderings.

use crate::paraphrase::permutation::{Permutation, PermutationSet, factorial, next_permutation};
use std::iter::FusedIterator;

/// One ordering per coordination group, indexed like the groups.
pub type Combination = Vec<Permutation>;

/// Iterator over all [Combination]s of a list of groups.
///
/// Enumerates the Cartesian product of the groups' orderings in lexicographic
/// product order: the ordering of the last group changes fastest. Only the
/// current combination is kept in memory, so taking the first few
/// combinations costs the same no matter how large the product is.
///
/// Without any group the product holds exactly one, empty, combination.
///
/// # Example
/// ```
/// use coordswap::paraphrase::Combinations;
///
/// let combinations: Vec<_> = Combinations::new(vec![2, 2]).collect();
/// assert_eq!(combinations, vec![
///     vec![vec![0, 1], vec![0, 1]],
///     vec![vec![0, 1], vec![1, 0]],
///     vec![vec![1, 0], vec![0, 1]],
///     vec![vec![1, 0], vec![1, 0]],
/// ]);
/// ```
#[derive(Debug, Clone)]
pub struct Combinations {
    group_sizes: Vec<usize>,
    current: Option<Combination>,
}

impl Combinations {
    /// Creates the product for groups with the given numbers of members.
    pub fn new(group_sizes: Vec<usize>) -> Self {
        let mut combinations = Self {
            group_sizes,
            current: None,
        };
        combinations.restart();
        combinations
    }

    /// Creates the product of the given permutation sets.
    pub fn from_sets(sets: &[PermutationSet<'_>]) -> Self {
        Self::new(sets.iter().map(PermutationSet::num_members).collect())
    }

    /// Rewinds to the first combination.
    pub fn restart(&mut self) {
        self.current = Some(self.group_sizes.iter().map(|&k| (0..k).collect()).collect());
    }

    /// Numbers of members of the groups.
    pub fn group_sizes(&self) -> &[usize] {
        &self.group_sizes
    }

    /// Total number of combinations (from the start), or `None` if it does
    /// not fit into `u128`.
    pub fn total(&self) -> Option<u128> {
        self.group_sizes
            .iter()
            .try_fold(1u128, |acc, &k| acc.checked_mul(factorial(k)?))
    }
}

impl Iterator for Combinations {
    type Item = Combination;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current.as_mut()?;
        let item = current.clone();

        // Odometer: advance last group, carry into earlier ones on wrap
        let advanced = current
            .iter_mut()
            .rev()
            .any(|permutation| next_permutation(permutation));
        if !advanced {
            self.current = None;
        }

        Some(item)
    }
}

impl FusedIterator for Combinations {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_groups_single_empty_combination() {
        let combinations: Vec<_> = Combinations::new(vec![]).collect();
        assert_eq!(combinations, vec![Vec::<Permutation>::new()]);
    }

    #[test]
    fn test_total() {
        assert_eq!(Combinations::new(vec![]).total(), Some(1));
        assert_eq!(Combinations::new(vec![3, 2, 1]).total(), Some(12));
        assert_eq!(Combinations::new(vec![30, 30]).total(), None);
    }

    #[test]
    fn test_count_matches_total() {
        let combinations = Combinations::new(vec![3, 1, 2]);
        assert_eq!(combinations.clone().count() as u128, combinations.total().unwrap());
    }

    #[test]
    fn test_last_group_fastest() {
        let firsts: Vec<_> = Combinations::new(vec![2, 3]).take(7).collect();
        assert_eq!(firsts[0], vec![vec![0, 1], vec![0, 1, 2]]);
        assert_eq!(firsts[1], vec![vec![0, 1], vec![0, 2, 1]]);
        assert_eq!(firsts[5], vec![vec![0, 1], vec![2, 1, 0]]);
        assert_eq!(firsts[6], vec![vec![1, 0], vec![0, 1, 2]]);
    }

    #[test]
    fn test_restart() {
        let mut combinations = Combinations::new(vec![2]);
        assert_eq!(combinations.by_ref().count(), 2);
        assert_eq!(combinations.next(), None);
        combinations.restart();
        assert_eq!(combinations.next(), Some(vec![vec![0, 1]]));
    }

    #[test]
    fn test_huge_product_is_lazy() {
        let mut combinations = Combinations::new(vec![1000, 1000, 1000]);
        assert_eq!(combinations.total(), None);
        let first = combinations.next().unwrap();
        assert_eq!(first[2].len(), 1000);
        let second = combinations.next().unwrap();
        assert_eq!(second[0], first[0]);
        assert_ne!(second[2], first[2]);
    }
}
