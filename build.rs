//! Build script to embed the default word list
//!
//! Reads `data/5_words.txt`, checks that every line is a five-letter
//! lowercase word and writes `words.rs` into `OUT_DIR`.

use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

const WORD_LIST: &str = "data/5_words.txt";

fn main() {
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR is set by cargo");
    let content =
        fs::read_to_string(WORD_LIST).unwrap_or_else(|e| panic!("Failed to read {WORD_LIST}: {e}"));

    let mut source = String::from("// Generated from data/5_words.txt\n\n");
    source.push_str("/// Default five-letter word list (hidden words and valid guesses)\n");
    source.push_str("pub const WORDS: &[&str] = &[\n");

    let mut count = 0usize;
    for (i, line) in content.lines().enumerate() {
        let word = line.trim();
        assert!(
            word.len() == 5 && word.bytes().all(|b| b.is_ascii_lowercase()),
            "{WORD_LIST}:{}: '{word}' is not a five-letter lowercase word",
            i + 1
        );
        let _ = writeln!(source, "    \"{word}\",");
        count += 1;
    }

    source.push_str("];\n\n/// Number of words in WORDS\n");
    let _ = writeln!(source, "pub const WORDS_COUNT: usize = {count};");

    let output_path = Path::new(&out_dir).join("words.rs");
    fs::write(&output_path, source)
        .unwrap_or_else(|e| panic!("Failed to write {}: {e}", output_path.display()));

    println!("cargo:rerun-if-changed={WORD_LIST}");
}
