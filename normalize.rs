use once_cell::sync::Lazy;
use regex::Regex;

// Compile once: everything that is not a letter, decimal digit, or
// whitespace gets deleted outright (no replacement space).
static NON_WORD_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\p{Alphabetic}\p{Nd}\s]").unwrap());

/// Clean one raw record line for matching:
///
/// 1. Strip leading/trailing whitespace
/// 2. Lowercase
/// 3. Delete punctuation and symbols
///
/// Punctuation is removed, not turned into a separator, so "don't"
/// cleans to "dont". Interior whitespace (including tabs) survives
/// untouched; tokenization later splits on literal spaces only.
pub fn clean_record(line: &str) -> String {
    let lowered = line.trim().to_lowercase();
    NON_WORD_CHARS.replace_all(&lowered, "").into_owned()
}
