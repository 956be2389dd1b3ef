//! Word list loading utilities
//!
//! Word lists are newline-delimited files of equal-length words, one per
//! line. Lines that do not parse as valid words are skipped.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// Returns a vector of valid Word instances, skipping any invalid entries.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_optimal::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/answers.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(&content))
}

/// Parse newline-delimited text into words, skipping invalid lines
#[must_use]
pub fn words_from_lines(content: &str) -> Vec<Word> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_lines_parses_valid_words() {
        let words = words_from_lines("crane\nslate\nirate\n");

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
        assert_eq!(words[2].text(), "irate");
    }

    #[test]
    fn words_from_lines_skips_invalid() {
        let words = words_from_lines("crane\ntoolong\nabc\n\n  \nslate\n");

        // Only "crane" and "slate" are valid 5-letter words
        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "crane");
        assert_eq!(words[1].text(), "slate");
    }

    #[test]
    fn words_from_lines_trims_whitespace() {
        let words = words_from_lines("  crane  \r\nslate\r\n");
        assert_eq!(words.len(), 2);
    }

    #[test]
    fn words_from_lines_empty_input() {
        assert!(words_from_lines("").is_empty());
    }

    #[test]
    fn load_from_file_round_trip() {
        let path = std::env::temp_dir().join(format!(
            "wordle_optimal_wordlist_{}.txt",
            std::process::id()
        ));
        std::fs::write(&path, "crane\nslate\n").unwrap();

        let words = load_from_file(&path).unwrap();
        assert_eq!(words.len(), 2);

        std::fs::remove_file(path).ok();
    }

    #[test]
    fn load_from_file_missing_is_an_error() {
        assert!(load_from_file("/nonexistent/words.txt").is_err());
    }
}
