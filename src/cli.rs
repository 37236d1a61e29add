//! Command-line interface definition for compound-finder
//!
//! Provides argument parsing and the documented input-path fallback
//! policy: when no wordlist argument is given, the tool warns and reads
//! `word.list` from the current directory. Extra positional arguments are
//! rejected by clap with a usage error and a non-zero exit.

use clap::Parser;
use std::path::PathBuf;

/// Default input path used when no argument is supplied
pub const DEFAULT_WORDLIST: &str = "word.list";

/// Find the longest compound word in a wordlist
///
/// A compound word is a word that can be fully reconstructed by
/// concatenating two or more other, shorter words from the same list.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "compound-finder",
    author = "m0h1nd4",
    version,
    about = "Find the longest compound word in a wordlist",
    long_about = r#"
Find the longest compound word in a wordlist: a word that can be fully
reconstructed by concatenating two or more other, shorter words from the
same list. The search is memoized and runs longest-first, so the first
hit is the answer.

INPUT FORMAT:
    One word per line. Trailing CR/LF is stripped; any other whitespace
    on a line is treated as part of the word. Empty lines are skipped and
    duplicate lines are dropped (disable with --no-dedup).

FALLBACK POLICY:
    When the WORDLIST argument is omitted, the tool warns and falls back
    to reading `word.list` from the current directory.

OUTPUT:
    On success the result line reads
        The longest compound word in the list is: <word>
    and when nothing qualifies
        No compound word found in the list.
    With --quiet only the bare word (or `no compound word found`) is
    printed, for callers parsing the output.

EXAMPLES:
    # Search a wordlist
    compound-finder words.txt

    # Machine-readable output
    compound-finder -q words.txt

    # Large list, no progress bar, with statistics
    compound-finder --no-progress --stats rockyou.txt
"#,
    after_help = "For more information, visit: https://github.com/m0h1nd4/compound-finder"
)]
pub struct Args {
    /// Wordlist file, one word per line (default: word.list)
    #[arg(value_name = "WORDLIST")]
    pub input: Option<PathBuf>,

    /// Trust the list to be duplicate-free and skip the dedup pass
    #[arg(long, default_value_t = false)]
    pub no_dedup: bool,

    /// Disable the candidate progress bar
    #[arg(long, default_value_t = false)]
    pub no_progress: bool,

    /// Show search statistics after the run
    #[arg(long, default_value_t = false)]
    pub stats: bool,

    /// Quiet mode - print only the result line
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,

    /// Verbose mode - detailed logging, one line per candidate
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Args {
    /// The input path to read, and whether the default was substituted
    pub fn resolve_input(&self) -> (PathBuf, bool) {
        match &self.input {
            Some(path) => (path.clone(), false),
            None => (PathBuf::from(DEFAULT_WORDLIST), true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_input_path() {
        let args = Args::try_parse_from(["compound-finder", "words.txt"]).unwrap();

        let (path, fell_back) = args.resolve_input();
        assert_eq!(path, PathBuf::from("words.txt"));
        assert!(!fell_back);
    }

    #[test]
    fn test_missing_input_falls_back_to_default() {
        let args = Args::try_parse_from(["compound-finder"]).unwrap();

        let (path, fell_back) = args.resolve_input();
        assert_eq!(path, PathBuf::from(DEFAULT_WORDLIST));
        assert!(fell_back);
    }

    #[test]
    fn test_extra_positional_arguments_are_rejected() {
        let result = Args::try_parse_from(["compound-finder", "a.txt", "b.txt"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_flags() {
        let args = Args::try_parse_from([
            "compound-finder",
            "--no-dedup",
            "--no-progress",
            "--stats",
            "-q",
            "words.txt",
        ])
        .unwrap();

        assert!(args.no_dedup);
        assert!(args.no_progress);
        assert!(args.stats);
        assert!(args.quiet);
        assert!(!args.verbose);
    }
}
