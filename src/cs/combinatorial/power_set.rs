//! Enumeration of every subset of a finite collection.
//!
//! There are 2^n subsets of n elements, so this is only practical for small
//! inputs; the exhaustive vertex-cover solvers built on it inherit the same
//! limit. Subsets are produced in a fixed order: subset `k` (counting from
//! zero) holds `items[i]` exactly when bit `n - 1 - i` of `k` is set. The
//! first subset is empty and the last is the full collection. The order of
//! elements inside a subset is unspecified.
//!
//! # Example
//! ```
//! use cover::cs::combinatorial::power_set::power_set;
//!
//! let subsets = power_set(&['a', 'b']).unwrap();
//! assert_eq!(subsets, vec![vec![], vec!['b'], vec!['a'], vec!['b', 'a']]);
//! ```

use crate::error::{GraphError, Result};

/// Largest collection whose subsets can be indexed by a `u64` counter.
pub const MAX_SUBSET_ELEMENTS: usize = 63;

/// Returns all subsets of `items`, including the empty set and `items` itself.
pub fn power_set<T: Clone>(items: &[T]) -> Result<Vec<Vec<T>>> {
    Ok(PowerSet::new(items)?.collect())
}

/// Lazy iterator over the subsets of a slice, in the same order as [`power_set`].
#[derive(Debug, Clone)]
pub struct PowerSet<'a, T> {
    items: &'a [T],
    next: u64,
    end: u64,
}

impl<'a, T: Clone> PowerSet<'a, T> {
    pub fn new(items: &'a [T]) -> Result<Self> {
        if items.len() > MAX_SUBSET_ELEMENTS {
            return Err(GraphError::TooLarge {
                nodes: items.len(),
                limit: MAX_SUBSET_ELEMENTS,
            });
        }
        Ok(PowerSet {
            items,
            next: 0,
            end: 1u64 << items.len(),
        })
    }

    fn subset(&self, mask: u64) -> Vec<T> {
        let n = self.items.len();
        (0..n)
            .filter(|bit| mask & (1u64 << bit) != 0)
            .map(|bit| self.items[n - 1 - bit].clone())
            .collect()
    }
}

impl<T: Clone> Iterator for PowerSet<'_, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        if self.next >= self.end {
            return None;
        }
        let subset = self.subset(self.next);
        self.next += 1;
        Some(subset)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.end - self.next).ok();
        (remaining.unwrap_or(usize::MAX), remaining)
    }
}
