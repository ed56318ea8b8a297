//! Dictionary loading
//!
//! Dictionary files hold one word per line. Blank lines are ignored; lines that
//! are not words of the configured length are skipped and reported.

use super::Dictionary;
use crate::core::Word;
use crate::error::WordleError;
use log::{debug, warn};
use std::fs;
use std::path::Path;

/// Load a dictionary file
///
/// # Errors
///
/// Returns `WordleError::Io` if the file cannot be read, and
/// `WordleError::EmptyDictionary` if no usable line remains.
///
/// # Examples
/// ```no_run
/// use wordle_autoplay::dictionary::loader::load_from_file;
///
/// let dictionary = load_from_file("dictionary.txt", 5).unwrap();
/// println!("Dictionary contains {} words.", dictionary.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(
    path: P,
    word_length: usize,
) -> Result<Dictionary, WordleError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let dictionary = parse_lines(content.lines(), word_length)?;
    debug!(
        "Dictionary {} contains {} words.",
        path.display(),
        dictionary.len()
    );
    Ok(dictionary)
}

/// Build a dictionary from raw lines, skipping the unusable ones
///
/// # Errors
///
/// Returns `WordleError::EmptyDictionary` if nothing usable remains.
pub fn parse_lines<'a>(
    lines: impl IntoIterator<Item = &'a str>,
    word_length: usize,
) -> Result<Dictionary, WordleError> {
    let mut skipped = 0usize;

    let words: Vec<Word> = lines
        .into_iter()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| match Word::with_length(line, word_length) {
            Ok(word) => Some(word),
            Err(e) => {
                debug!("skipping dictionary line {line:?}: {e}");
                skipped += 1;
                None
            }
        })
        .collect();

    if skipped > 0 {
        warn!("skipped {skipped} dictionary lines that are not {word_length}-letter words");
    }

    Dictionary::from_words(words, word_length)
}

/// Read a plain word list (one per line) without dictionary validation
///
/// Used for sample files, whose words are checked against the dictionary by
/// the caller.
///
/// # Errors
///
/// Returns `WordleError::Io` if the file cannot be read.
pub fn read_word_list<P: AsRef<Path>>(path: P) -> Result<Vec<String>, WordleError> {
    let content = fs::read_to_string(path)?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn parse_lines_skips_blank_and_invalid() {
        let lines = ["crane", "", "  trace  ", "toolong", "abc", "cr4ne", "CRONE"];
        let dictionary = parse_lines(lines, 5).unwrap();

        let texts: Vec<&str> = dictionary.words().iter().map(|w| w.text()).collect();
        assert_eq!(texts, ["crane", "trace", "crone"]);
    }

    #[test]
    fn parse_lines_other_lengths() {
        let dictionary = parse_lines(["cat", "dog", "crane"], 3).unwrap();
        assert_eq!(dictionary.len(), 2);
        assert_eq!(dictionary.word_length(), 3);
    }

    #[test]
    fn parse_lines_nothing_usable() {
        assert!(matches!(
            parse_lines(["", "toolong"], 5),
            Err(WordleError::EmptyDictionary)
        ));
    }

    #[test]
    fn load_from_file_reads_words() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "lares\ncrane\ntrace\ncrone\ncrane").unwrap();

        let dictionary = load_from_file(file.path(), 5).unwrap();
        assert_eq!(dictionary.len(), 4);
        assert!(dictionary.lookup("crone").is_ok());
    }

    #[test]
    fn load_from_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_from_file(dir.path().join("missing.txt"), 5);
        assert!(matches!(result, Err(WordleError::Io(_))));
    }

    #[test]
    fn read_word_list_keeps_raw_entries() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "lares\n\n compt \nnotaword").unwrap();

        let list = read_word_list(file.path()).unwrap();
        assert_eq!(list, ["lares", "compt", "notaword"]);
    }
}
