//! Presorted word indexes
//!
//! Builds the two sorted views and the length-bucket index the
//! decomposition search runs against:
//!
//! - **Lexical view**: ascending lexicographic order, for O(log n)
//!   membership tests via binary search.
//! - **Length view**: ascending byte length (stable on ties), iterated
//!   longest-first by the finder and prefix-scanned by the decomposer.
//! - **Length-bucket index**: monotonic partition table mapping a length
//!   offset from the minimum to the first position in the length view
//!   where words of that length appear. Lengths with no words anchor to
//!   the next occupied position, so the table can bound "every word of
//!   length <= L" as a contiguous prefix.
//!
//! All lengths are byte lengths, consistent with the byte-wise substring
//! and binary-search operations used by the decomposer. Duplicate entries
//! are a caller-contract violation (the loader removes them by default).

use crate::error::Error;

/// Read-only sorted views over a word list, built once per run
#[derive(Debug)]
pub struct WordIndex {
    lexical: Vec<String>,
    by_length: Vec<String>,
    min_len: usize,
    length_starts: Vec<usize>,
}

impl WordIndex {
    /// Build the indexes from a raw word list.
    ///
    /// Fails with [`Error::EmptyWordList`] when the list has no entries;
    /// a one-word list builds fine (the search then finds nothing by
    /// construction).
    pub fn from_words(words: Vec<String>) -> Result<Self, Error> {
        if words.is_empty() {
            return Err(Error::EmptyWordList);
        }

        let mut lexical = words.clone();
        lexical.sort_unstable();

        let mut by_length = words;
        by_length.sort_by_key(|w| w.len());

        let min_len = by_length[0].len();
        let max_len = by_length[by_length.len() - 1].len();

        // One entry per length offset from min_len to max_len. Whenever
        // the length steps up between adjacent positions, that position is
        // the first index for the new length and for every skipped length
        // in between.
        let mut length_starts = vec![0usize; max_len - min_len + 1];
        for i in 1..by_length.len() {
            let prev = by_length[i - 1].len();
            let cur = by_length[i].len();
            if cur > prev {
                for len in (prev + 1)..=cur {
                    length_starts[len - min_len] = i;
                }
            }
        }

        Ok(Self {
            lexical,
            by_length,
            min_len,
            length_starts,
        })
    }

    /// Words sorted ascending by length
    pub fn words_by_length(&self) -> &[String] {
        &self.by_length
    }

    /// Length of the shortest word in the list
    pub fn min_len(&self) -> usize {
        self.min_len
    }

    /// Length of the longest word in the list
    pub fn max_len(&self) -> usize {
        self.min_len + self.length_starts.len() - 1
    }

    /// Number of words in the list
    pub fn len(&self) -> usize {
        self.by_length.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_length.is_empty()
    }

    /// Membership test against the lexical view
    pub fn contains(&self, word: &str) -> bool {
        self.lexical
            .binary_search_by(|w| w.as_str().cmp(word))
            .is_ok()
    }

    /// The prefix of the length view containing every word short enough to
    /// be a component of a candidate of the given length.
    ///
    /// A component must leave room for at least one more component, so its
    /// length is bounded by `candidate_len - min_len`. Candidates shorter
    /// than twice the minimum length get an empty slice, which is what
    /// makes them short-circuit to "not decomposable".
    pub fn component_candidates(&self, candidate_len: usize) -> &[String] {
        let Some(bound) = candidate_len.checked_sub(self.min_len) else {
            return &[];
        };
        if bound < self.min_len {
            return &[];
        }

        let end = if bound >= self.max_len() {
            self.by_length.len()
        } else {
            // First position holding a word longer than the bound
            self.length_starts[bound - self.min_len + 1]
        };
        &self.by_length[..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index(words: &[&str]) -> WordIndex {
        WordIndex::from_words(words.iter().map(|w| w.to_string()).collect()).unwrap()
    }

    #[test]
    fn test_empty_list_is_an_error() {
        let result = WordIndex::from_words(Vec::new());
        assert!(matches!(result, Err(Error::EmptyWordList)));
    }

    #[test]
    fn test_single_word_list() {
        let idx = index(&["cat"]);

        assert_eq!(idx.len(), 1);
        assert_eq!(idx.min_len(), 3);
        assert_eq!(idx.max_len(), 3);
        assert!(idx.contains("cat"));
        assert!(idx.component_candidates(3).is_empty());
    }

    #[test]
    fn test_views_are_sorted() {
        let idx = index(&["catdog", "dog", "cat"]);

        assert_eq!(idx.words_by_length().last().unwrap(), "catdog");
        assert!(idx.contains("cat"));
        assert!(idx.contains("dog"));
        assert!(!idx.contains("rat"));
    }

    #[test]
    fn test_component_candidates_bound() {
        let idx = index(&["cat", "dog", "catdog"]);

        // A six-byte candidate admits components up to length 3
        let candidates = idx.component_candidates(6);
        assert_eq!(candidates.len(), 2);
        assert!(candidates.iter().all(|w| w.len() == 3));

        // Too short for two minimum-length components
        assert!(idx.component_candidates(5).is_empty());
    }

    #[test]
    fn test_component_candidates_include_whole_bound_length() {
        // "cars" and "port" both have the bound length for "carport";
        // the prefix must contain both, not just the first.
        let idx = index(&["car", "cars", "port", "carport"]);

        let candidates = idx.component_candidates(7);
        assert_eq!(candidates.len(), 3);
        assert!(candidates.iter().any(|w| w == "cars"));
        assert!(candidates.iter().any(|w| w == "port"));
    }

    #[test]
    fn test_length_gaps_are_backfilled() {
        // No words of length 2 or 4: bounds falling in the gaps must
        // still resolve to the right prefix.
        let idx = index(&["a", "abc", "abcde"]);

        assert_eq!(idx.component_candidates(4), &["a", "abc"]); // bound 3
        assert_eq!(idx.component_candidates(5), &["a", "abc"]); // bound 4, in a gap
        assert_eq!(idx.component_candidates(6).len(), 3); // bound 5 covers everything
    }

    #[test]
    fn test_all_same_length_yields_no_candidates() {
        let idx = index(&["cat", "dog", "rat"]);

        for word in idx.words_by_length() {
            assert!(idx.component_candidates(word.len()).is_empty());
        }
    }
}
