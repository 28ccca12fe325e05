//! Lexicographic permutation enumeration.
//!
//! Yields every ordering of the indices `0..n` in lexicographic order,
//! starting from the identity. Generation order is part of the search
//! contract: the first qualifying arrangement is the answer, so the
//! sequence must be identical on every run.

/// Iterator over all permutations of `0..n`, lexicographically.
///
/// Yields `n!` orderings (one empty ordering when `n == 0`), stepping in
/// place with the standard next-permutation rule.
pub struct IndexPermutations {
    indices: Vec<usize>,
    first: bool,
    done: bool,
}

impl IndexPermutations {
    pub fn new(n: usize) -> Self {
        IndexPermutations {
            indices: (0..n).collect(),
            first: true,
            done: false,
        }
    }

    /// Advances `indices` to its lexicographic successor.
    /// Returns false when the current ordering is the last one.
    fn step(&mut self) -> bool {
        let n = self.indices.len();
        if n < 2 {
            return false;
        }

        // Longest non-increasing suffix marks the pivot.
        let mut i = n - 1;
        while i > 0 && self.indices[i - 1] >= self.indices[i] {
            i -= 1;
        }
        if i == 0 {
            return false;
        }

        // Swap the pivot with the rightmost element exceeding it,
        // then reverse the suffix back into ascending order.
        let mut j = n - 1;
        while self.indices[j] <= self.indices[i - 1] {
            j -= 1;
        }
        self.indices.swap(i - 1, j);
        self.indices[i..].reverse();
        true
    }
}

impl Iterator for IndexPermutations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if self.done {
            return None;
        }
        if self.first {
            self.first = false;
            return Some(self.indices.clone());
        }
        if self.step() {
            Some(self.indices.clone())
        } else {
            self.done = true;
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_elements_in_lexicographic_order() {
        let perms: Vec<Vec<usize>> = IndexPermutations::new(3).collect();
        assert_eq!(
            perms,
            vec![
                vec![0, 1, 2],
                vec![0, 2, 1],
                vec![1, 0, 2],
                vec![1, 2, 0],
                vec![2, 0, 1],
                vec![2, 1, 0],
            ]
        );
    }

    #[test]
    fn counts_are_factorial() {
        assert_eq!(IndexPermutations::new(0).count(), 1);
        assert_eq!(IndexPermutations::new(1).count(), 1);
        assert_eq!(IndexPermutations::new(4).count(), 24);
        assert_eq!(IndexPermutations::new(5).count(), 120);
    }

    #[test]
    fn zero_elements_yields_one_empty_ordering() {
        let perms: Vec<Vec<usize>> = IndexPermutations::new(0).collect();
        assert_eq!(perms, vec![Vec::<usize>::new()]);
    }

    #[test]
    fn identity_comes_first() {
        let first = IndexPermutations::new(6).next().unwrap();
        assert_eq!(first, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn enumeration_is_deterministic() {
        let a: Vec<Vec<usize>> = IndexPermutations::new(5).collect();
        let b: Vec<Vec<usize>> = IndexPermutations::new(5).collect();
        assert_eq!(a, b);
    }
}
