//! # Compound Finder
//!
//! Find the longest compound word in a wordlist: a word that can be fully
//! reconstructed by concatenating two or more other, shorter words from
//! the same list.
//!
//! ## How it works
//!
//! - **Presorted indexes**: the list is sorted lexically (for O(log n)
//!   membership via binary search) and by length, with a length-bucket
//!   index that bounds component enumeration to the words short enough to
//!   leave room for a second component.
//! - **Memoized decomposition**: a recursive predicate splits each
//!   candidate around component words and resolves the remaining pieces;
//!   sub-words proven decomposable once are cached for the rest of the run.
//! - **Longest-first orchestration**: candidates are visited from longest
//!   to shortest, so the first hit is the answer.
//!
//! ## Usage
//!
//! ```bash
//! # Search a wordlist (one word per line)
//! compound-finder words.txt
//!
//! # Machine-readable output
//! compound-finder -q words.txt
//! ```
//!
//! ## Example
//!
//! ```rust
//! use compound_finder::finder::{find_longest, NullObserver};
//! use compound_finder::index::WordIndex;
//!
//! let words = vec!["cat".to_string(), "dog".to_string(), "catdog".to_string()];
//! let index = WordIndex::from_words(words).unwrap();
//!
//! let outcome = find_longest(&index, &mut NullObserver);
//! assert_eq!(outcome.word.as_deref(), Some("catdog"));
//! ```

pub mod cli;
pub mod decompose;
pub mod error;
pub mod finder;
pub mod index;
pub mod memo;
pub mod progress;
pub mod wordlist;

pub use cli::Args;
pub use error::Error;
pub use finder::{find_longest, NullObserver, SearchObserver, SearchOutcome, SearchStats};
pub use index::WordIndex;
