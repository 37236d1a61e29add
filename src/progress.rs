//! Progress display module
//!
//! Styled console output plus the progress-bar observer the CLI plugs
//! into the search loop. The core search never prints on its own.

use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::finder::{SearchObserver, SearchStats};

/// Color theme for the tool
pub mod theme {
    use colored::Color;

    pub const PRIMARY: Color = Color::Green;
    pub const ACCENT: Color = Color::Cyan;
    pub const WARNING: Color = Color::Yellow;
    pub const ERROR: Color = Color::Red;
}

/// Print the application banner
pub fn print_banner() {
    let banner = r#"
╔══════════════════════════════════════════════════════════════════╗
║                                                                  ║
║        COMPOUND-FINDER                              v1.0.0       ║
║        Longest Compound Word Search for Wordlists                ║
║                                                                  ║
╚══════════════════════════════════════════════════════════════════╝
"#;

    println!("{}", banner.green());
}

/// Print a section header
pub fn print_header(text: &str) {
    println!(
        "\n{} {}",
        "▶".color(theme::PRIMARY),
        text.color(theme::PRIMARY).bold()
    );
}

/// Print an info message
pub fn print_info(text: &str) {
    println!("  {} {}", "ℹ".color(theme::ACCENT), text);
}

/// Print a success message
pub fn print_success(text: &str) {
    println!(
        "  {} {}",
        "✔".color(theme::PRIMARY),
        text.color(theme::PRIMARY)
    );
}

/// Print a warning message
pub fn print_warning(text: &str) {
    println!(
        "  {} {}",
        "⚠".color(theme::WARNING),
        text.color(theme::WARNING)
    );
}

/// Print an error message
pub fn print_error(text: &str) {
    eprintln!(
        "  {} {}",
        "✖".color(theme::ERROR),
        text.color(theme::ERROR)
    );
}

/// Print a bullet point
pub fn print_bullet(text: &str) {
    println!("  {} {}", "•".color(theme::PRIMARY), text);
}

/// Create the candidate progress bar for the search loop
pub fn create_candidate_bar(total: u64) -> ProgressBar {
    let pb = ProgressBar::new(total);

    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.green/dim}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("█▓░"),
    );
    pb.enable_steady_tick(Duration::from_millis(100));

    pb
}

/// Search observer that drives an indicatif bar and logs one timestamped
/// line per candidate at debug level
pub struct ProgressReporter {
    bar: ProgressBar,
}

impl ProgressReporter {
    /// Visible bar over `total` candidates
    pub fn new(total: u64) -> Self {
        Self {
            bar: create_candidate_bar(total),
        }
    }

    /// Hidden bar for quiet or piped runs
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    pub fn finish_and_clear(&self) {
        self.bar.finish_and_clear();
    }
}

impl SearchObserver for ProgressReporter {
    fn candidate(&mut self, position: usize, word: &str) {
        log::debug!("evaluating word[{}], sorted length-wise: {}", position, word);
        self.bar.set_message(truncate(word, 32));
        self.bar.inc(1);
    }

    fn found(&mut self, word: &str) {
        self.bar
            .finish_with_message(format!("found: {}", word).green().to_string());
    }
}

/// Print the post-search statistics summary
pub fn print_summary(stats: &SearchStats, total_words: usize) {
    println!();
    println!("{}", "═".repeat(60).green());
    println!("{}", "                    SEARCH COMPLETE".green().bold());
    println!("{}", "═".repeat(60).green());
    println!();

    println!(
        "  {} {}",
        "Words in list:       ".green(),
        format_number(total_words as u64)
    );
    println!(
        "  {} {}",
        "Candidates evaluated:".green(),
        format_number(stats.candidates_evaluated)
    );
    println!(
        "  {} {}",
        "Memoized sub-words:  ".green(),
        format_number(stats.memoized_words as u64)
    );
    println!(
        "  {} {}",
        "Memo hits:           ".green(),
        format_number(stats.memo_hits)
    );
    println!(
        "  {} {}",
        "Duration:            ".green(),
        format_duration(stats.elapsed)
    );
    println!();
    println!("{}", "═".repeat(60).green());
}

fn truncate(word: &str, max: usize) -> String {
    if word.len() <= max {
        word.to_string()
    } else {
        // Back up to a char boundary before slicing
        let mut end = max;
        while !word.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}…", &word[..end])
    }
}

/// Format a number with thousand separators
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    let chars: Vec<char> = s.chars().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*c);
    }

    result
}

/// Format duration as human-readable string
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();

    if secs < 60 {
        format!("{:.1}s", duration.as_secs_f64())
    } else if secs < 3600 {
        let mins = secs / 60;
        let secs = secs % 60;
        format!("{}m {}s", mins, secs)
    } else {
        let hours = secs / 3600;
        let mins = (secs % 3600) / 60;
        format!("{}h {}m", hours, mins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(123), "123");
        assert_eq!(format_number(1234), "1,234");
        assert_eq!(format_number(1234567), "1,234,567");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(Duration::from_secs(30)), "30.0s");
        assert_eq!(format_duration(Duration::from_secs(90)), "1m 30s");
        assert_eq!(format_duration(Duration::from_secs(3661)), "1h 1m");
    }

    #[test]
    fn test_theme_palette() {
        use colored::Color;

        assert_eq!(theme::PRIMARY, Color::Green);
        assert_eq!(theme::ACCENT, Color::Cyan);
        assert_eq!(theme::WARNING, Color::Yellow);
        assert_eq!(theme::ERROR, Color::Red);
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        assert_eq!(truncate("short", 32), "short");
        let truncated = truncate(&"ä".repeat(40), 32);
        assert!(truncated.ends_with('…'));
    }
}
