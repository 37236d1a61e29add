//! Compound Finder - longest compound word search for wordlists
//!
//! Main entry point for the command-line application.

use bytesize::ByteSize;
use clap::Parser;
use colored::*;
use std::process;

use compound_finder::cli::Args;
use compound_finder::finder::find_longest;
use compound_finder::index::WordIndex;
use compound_finder::progress::{
    print_banner, print_error, print_header, print_info, print_success, print_summary,
    print_warning, ProgressReporter,
};
use compound_finder::wordlist::load_words;

fn main() {
    // Parse command-line arguments
    let args = Args::parse();

    // Set up logging
    if args.verbose {
        std::env::set_var("RUST_LOG", "debug");
    } else if !args.quiet {
        std::env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    // Run the application
    if let Err(e) = run(args) {
        print_error(&format!("{}", e));

        // Print chain of errors
        let mut source = e.source();
        while let Some(err) = source {
            print_error(&format!("  Caused by: {}", err));
            source = err.source();
        }

        process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    // Print banner unless quiet mode
    if !args.quiet {
        print_banner();
    }

    let (input, fell_back) = args.resolve_input();
    if fell_back && !args.quiet {
        print_warning(&format!(
            "No input file given, falling back to: {}",
            input.display()
        ));
    }

    if !args.quiet {
        print_header("Reading word list...");
    }

    let report = load_words(&input, !args.no_dedup)?;

    if !args.quiet {
        print_info(&format!(
            "Input: {:?} ({}, {})",
            input,
            ByteSize(report.bytes),
            report.encoding
        ));
        print_info(&format!(
            "Words: {} ({} lines, {} empty, {} duplicates dropped)",
            report.words.len(),
            report.total_lines,
            report.empty_lines,
            report.duplicates
        ));
    }

    let index = WordIndex::from_words(report.words)?;

    if !args.quiet {
        print_header("Searching (longest first)...");
    }

    let mut reporter = if args.quiet || args.no_progress {
        ProgressReporter::hidden()
    } else {
        ProgressReporter::new(index.len() as u64)
    };

    let outcome = find_longest(&index, &mut reporter);
    reporter.finish_and_clear();

    // Result line: quiet mode stays bare for callers parsing the output
    match &outcome.word {
        Some(word) => {
            if args.quiet {
                println!("{}", word);
            } else {
                print_success(&format!(
                    "The longest compound word in the list is: {}",
                    word.bold()
                ));
            }
        }
        None => {
            if args.quiet {
                println!("no compound word found");
            } else {
                print_warning("No compound word found in the list.");
            }
        }
    }

    if args.stats && !args.quiet {
        print_summary(&outcome.stats, index.len());
    }

    Ok(())
}
