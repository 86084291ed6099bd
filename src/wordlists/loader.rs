//! Word list loading utilities
//!
//! Reads a word list from disk, one word per line, into a `WordBank`.

use super::{WordBank, WordBankError};
use std::fs;
use std::path::Path;

/// Load a word bank from a file
///
/// Every line must be a valid five-letter lowercase word; bad entries,
/// blank lines included, are reported, not skipped. A final newline does not
/// count as a line.
///
/// # Errors
///
/// Returns `WordBankError::Io` if the file cannot be read, and the
/// `WordBank::from_lines` errors for malformed or empty content.
///
/// # Examples
/// ```no_run
/// use wordle_gym::wordlists::loader::load_from_file;
///
/// let bank = load_from_file("data/5_words.txt").unwrap();
/// println!("Loaded {} words", bank.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordBank, WordBankError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let bank = WordBank::from_lines(content.lines())?;

    log::debug!("loaded {} words from {}", bank.len(), path.display());
    Ok(bank)
}

/// Load the embedded list or a file, by name
///
/// `"embedded"` selects the compiled-in list; anything else is a path.
///
/// # Errors
///
/// Same as [`load_from_file`] and [`WordBank::embedded`].
pub fn load_wordlist(name: &str) -> Result<WordBank, WordBankError> {
    match name {
        "embedded" => WordBank::embedded(),
        path => load_from_file(path),
    }
}
