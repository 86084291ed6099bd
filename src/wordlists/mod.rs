//! Word lists for the environment
//!
//! Provides the embedded default list and the validated `WordBank` that
//! environments sample hidden words from.

mod bank;
mod embedded;
pub mod loader;

pub use bank::{WordBank, WordBankError};
pub use embedded::{WORDS, WORDS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_words_are_valid() {
        for &word in WORDS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn embedded_list_starts_with_known_words() {
        assert_eq!(WORDS[0], "aback");
        assert_eq!(WORDS[1], "abase");
    }

    #[test]
    fn embedded_bank_builds() {
        let bank = WordBank::embedded().unwrap();
        assert_eq!(bank.len(), WORDS_COUNT);
    }
}
