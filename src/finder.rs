//! Longest-compound-word search orchestration
//!
//! Walks the length-sorted view from the longest word down, asking the
//! decomposer about each candidate. Because candidates are visited
//! longest-first, the first hit is the answer and the loop stops there.
//! Finding nothing is a normal outcome, reported as `None`.
//!
//! Progress reporting is decoupled through [`SearchObserver`] so the core
//! loop stays testable without capturing console output.

use std::time::{Duration, Instant};

use crate::decompose::Decomposer;
use crate::index::WordIndex;

/// Hook invoked by the search loop; implementations render progress
pub trait SearchObserver {
    /// Called before each candidate is evaluated. `position` is the
    /// candidate's index in the length-sorted view (descending).
    fn candidate(&mut self, position: usize, word: &str);

    /// Called once if a compound word is found
    fn found(&mut self, _word: &str) {}
}

/// Observer that reports nothing
pub struct NullObserver;

impl SearchObserver for NullObserver {
    fn candidate(&mut self, _position: usize, _word: &str) {}
}

/// Counters collected over one search run
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    /// Top-level candidates evaluated before the search stopped
    pub candidates_evaluated: u64,
    /// Distinct sub-words proven decomposable along the way
    pub memoized_words: usize,
    /// Times the memo table short-circuited a recursion
    pub memo_hits: u64,
    /// Wall time spent in the search loop
    pub elapsed: Duration,
}

/// Result of a completed search run
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// The longest compound word, or `None` when no word qualifies
    pub word: Option<String>,
    pub stats: SearchStats,
}

/// Run the search over a prepared index.
///
/// Deterministic: the same word set always yields the same answer, so the
/// caller may rerun freely.
pub fn find_longest(index: &WordIndex, observer: &mut dyn SearchObserver) -> SearchOutcome {
    let start = Instant::now();
    let mut decomposer = Decomposer::new(index);
    let mut stats = SearchStats::default();

    let words = index.words_by_length();
    for position in (0..words.len()).rev() {
        let candidate = &words[position];
        observer.candidate(position, candidate);
        stats.candidates_evaluated += 1;

        if decomposer.is_compound(candidate) {
            observer.found(candidate);
            stats.memoized_words = decomposer.memoized_words();
            stats.memo_hits = decomposer.memo_hits();
            stats.elapsed = start.elapsed();
            return SearchOutcome {
                word: Some(candidate.clone()),
                stats,
            };
        }
    }

    stats.memoized_words = decomposer.memoized_words();
    stats.memo_hits = decomposer.memo_hits();
    stats.elapsed = start.elapsed();
    SearchOutcome { word: None, stats }
}
