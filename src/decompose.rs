//! Recursive decomposition predicate
//!
//! Decides whether a candidate word can be expressed as a concatenation of
//! two or more other words from the list. Component words are enumerated
//! from the bounded prefix of the length view, longest-first; each one
//! splits the candidate into a prefix and a suffix piece, and a piece
//! resolves if it is empty, a direct list member, or itself decomposable.
//!
//! Splitting uses the first occurrence of the component within the
//! candidate (`str::split_once`). When a component occurs more than once,
//! only the first split point is considered; decompositions that need a
//! later occurrence may be missed (see the README).

use crate::index::WordIndex;
use crate::memo::MemoTable;

/// Compound-word predicate over a [`WordIndex`], with memoized sub-words
///
/// One decomposer is shared across all top-level candidates of a run so
/// that a sub-word proven decomposable under one parent costs O(1) under
/// every later parent.
pub struct Decomposer<'a> {
    index: &'a WordIndex,
    memo: MemoTable,
    memo_hits: u64,
}

impl<'a> Decomposer<'a> {
    pub fn new(index: &'a WordIndex) -> Self {
        Self {
            index,
            // Rough estimate: memoized sub-words rarely outnumber the list
            memo: MemoTable::with_capacity(index.len()),
            memo_hits: 0,
        }
    }

    /// True if the candidate is a concatenation of two or more list words.
    ///
    /// A word never counts as a compound of itself: the component bound
    /// excludes words of the candidate's own length, and split pieces are
    /// strictly shorter than the candidate.
    pub fn is_compound(&mut self, candidate: &str) -> bool {
        let min_len = self.index.min_len();

        for component in self
            .index
            .component_candidates(candidate.len())
            .iter()
            .rev()
        {
            // The component must leave room for at least one more piece of
            // minimum length.
            if component.len() + min_len > candidate.len() {
                continue;
            }
            if !candidate.contains(component.as_str()) {
                continue;
            }
            if self.resolves_around(candidate, component) {
                return true;
            }
        }

        false
    }

    /// Split the candidate on the first occurrence of the component and
    /// try to resolve both remaining pieces.
    fn resolves_around(&mut self, candidate: &str, component: &str) -> bool {
        let Some((prefix, suffix)) = candidate.split_once(component) else {
            return false;
        };
        let min_len = self.index.min_len();

        if !prefix.is_empty() {
            // A leftover piece shorter than the minimum word length can
            // never be a component, so this split is a dead end.
            if prefix.len() < min_len {
                return false;
            }
            if !suffix.is_empty() && suffix.len() < min_len {
                return false;
            }
            if !self.resolve_piece(prefix) {
                return false;
            }
            if suffix.is_empty() {
                return true;
            }
        }

        if suffix.len() < min_len {
            return false;
        }
        self.resolve_piece(suffix)
    }

    /// A piece resolves if it is a listed word, or (when longer than the
    /// minimum length) a compound in its own right. The memo table is
    /// consulted before recursing and populated after a recursive success.
    fn resolve_piece(&mut self, piece: &str) -> bool {
        if self.index.contains(piece) {
            return true;
        }
        // A minimum-length piece can only be a direct member; the binary
        // search above already settled that.
        if piece.len() <= self.index.min_len() {
            return false;
        }
        if self.memo.contains(piece) {
            self.memo_hits += 1;
            return true;
        }
        if self.is_compound(piece) {
            self.memo.insert(piece);
            true
        } else {
            false
        }
    }

    /// Number of times the memo table short-circuited a recursion
    pub fn memo_hits(&self) -> u64 {
        self.memo_hits
    }

    /// Number of distinct sub-words proven decomposable so far
    pub fn memoized_words(&self) -> usize {
        self.memo.len()
    }
}
