use alloc::vec::Vec;

use super::{Attribute, AttributeSet};

/// Lexicographic enumeration of the `k`-element subsets of a pool.
///
/// The pool is the canonical (sorted) element order of the source set, and
/// each subset is produced from an increasing index sequence into it:
/// `[0, 1, .., k-1]`, then the rightmost index that can still advance is
/// bumped and every index after it is reset to follow it.
#[derive(Debug, Clone)]
pub struct Combinations<A> {
    pool: Vec<A>,
    indices: Vec<usize>,
    started: bool,
    exhausted: bool,
}

impl<A> Combinations<A> {
    /// Caller guarantees `k <= pool.len()`.
    pub(super) fn new(pool: Vec<A>, k: usize) -> Self {
        debug_assert!(k <= pool.len());
        Self {
            pool,
            indices: (0..k).collect(),
            started: false,
            exhausted: false,
        }
    }

    /// Moves `indices` to the next combination, or returns `false` once the
    /// last one (`[n-k, .., n-1]`) has been produced.
    fn advance(&mut self) -> bool {
        let n = self.pool.len();
        let k = self.indices.len();
        let Some(pivot) = (0..k).rev().find(|&i| self.indices[i] != i + n - k) else {
            return false;
        };
        self.indices[pivot] += 1;
        for i in pivot + 1..k {
            self.indices[i] = self.indices[i - 1] + 1;
        }
        true
    }
}

impl<A: Attribute> Iterator for Combinations<A> {
    type Item = AttributeSet<A>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }
        if self.started {
            if !self.advance() {
                self.exhausted = true;
                return None;
            }
        } else {
            self.started = true;
        }
        Some(self.indices.iter().map(|&i| self.pool[i].clone()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(pool: &[&'static str], k: usize) -> Vec<Vec<&'static str>> {
        Combinations::new(pool.to_vec(), k)
            .map(|set| set.to_vec())
            .collect()
    }

    #[test]
    fn test_choose_zero() {
        assert_eq!(collect(&["a", "b"], 0), vec![Vec::<&str>::new()]);
        assert_eq!(collect(&[], 0), vec![Vec::<&str>::new()]);
    }

    #[test]
    fn test_choose_two_of_four() {
        assert_eq!(
            collect(&["a", "b", "c", "d"], 2),
            vec![
                vec!["a", "b"],
                vec!["a", "c"],
                vec!["a", "d"],
                vec!["b", "c"],
                vec!["b", "d"],
                vec!["c", "d"],
            ]
        );
    }

    #[test]
    fn test_choose_all() {
        assert_eq!(collect(&["a", "b", "c"], 3), vec![vec!["a", "b", "c"]]);
    }

    #[test]
    fn test_count_matches_binomial() {
        let pool = ["a", "b", "c", "d", "e", "f"];
        assert_eq!(collect(&pool, 3).len(), 20);
        assert_eq!(collect(&pool, 1).len(), 6);
        assert_eq!(collect(&pool, 5).len(), 6);
    }
}
