//! Memoization table for the decomposition search
//!
//! A set of words already proven decomposable within the current run.
//! Entries are only ever added (monotonic for the lifetime of one search),
//! so a hit is always trustworthy. Deliberately not thread-safe: the
//! search is single-threaded and the table is owned by the decomposer.

use ahash::RandomState;
use hashbrown::HashSet;

/// Set of words proven to be compounds
#[derive(Debug, Default)]
pub struct MemoTable {
    set: HashSet<String, RandomState>,
}

impl MemoTable {
    pub fn new() -> Self {
        Self {
            set: HashSet::with_hasher(RandomState::new()),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            set: HashSet::with_capacity_and_hasher(capacity, RandomState::new()),
        }
    }

    /// Record a word as decomposable.
    /// Returns true if the word was not already recorded.
    pub fn insert(&mut self, word: &str) -> bool {
        self.set.insert(word.to_string())
    }

    /// Check whether a word has already been proven decomposable
    pub fn contains(&self, word: &str) -> bool {
        self.set.contains(word)
    }

    /// Number of distinct words proven so far
    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    /// Forget everything (provided for symmetry; the search never needs it)
    pub fn clear(&mut self) {
        self.set.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_reports_new_entries() {
        let mut memo = MemoTable::new();

        assert!(memo.insert("catdog"));
        assert!(memo.insert("ratcat"));
        assert!(!memo.insert("catdog")); // Already recorded

        assert_eq!(memo.len(), 2);
        assert!(memo.contains("catdog"));
        assert!(!memo.contains("dogcat"));
    }

    #[test]
    fn test_with_capacity_starts_empty() {
        let mut memo = MemoTable::with_capacity(64);

        assert!(memo.is_empty());
        assert!(memo.insert("catdog"));
        assert!(!memo.insert("catdog"));
        assert_eq!(memo.len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut memo = MemoTable::new();

        memo.insert("catdog");
        assert!(!memo.is_empty());

        memo.clear();
        assert!(memo.is_empty());
        assert!(!memo.contains("catdog"));
    }
}
