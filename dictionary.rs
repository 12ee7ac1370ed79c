use std::collections::HashMap;
use std::io::BufRead;

use anyhow::Result;

/// One word from the predefined list: original casing for display, a
/// running match count, and its position in the word list (used as the
/// report tie-break).
#[derive(Debug)]
pub struct TrackedWord {
    pub display: String,
    pub count: u64,
    pub order: usize,
}

/// The set of tracked words, keyed by the lowercased word.
#[derive(Debug, Default)]
pub struct TrackedWordSet {
    words: HashMap<String, TrackedWord>,
}

impl TrackedWordSet {
    /// Add one word-list entry. Blank entries are skipped. If the
    /// lowercased key was already present, the new display form wins but
    /// the entry keeps its original list position and count.
    pub fn insert(&mut self, raw_entry: &str) {
        let display = raw_entry.trim();
        if display.is_empty() {
            return;
        }
        let key = display.to_lowercase();
        let next_order = self.words.len();
        self.words
            .entry(key)
            .and_modify(|w| w.display = display.to_string())
            .or_insert_with(|| TrackedWord {
                display: display.to_string(),
                count: 0,
                order: next_order,
            });
    }

    /// Increment the count for `token` if it is tracked. Returns whether
    /// it matched. Matching is exact whole-token equality; both sides are
    /// lowercased upstream.
    pub fn record_match(&mut self, token: &str) -> bool {
        match self.words.get_mut(token) {
            Some(word) => {
                word.count += 1;
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TrackedWord> {
        self.words.values()
    }
}

/// Build the tracked set from a word-list reader, one word per line.
pub fn build<R: BufRead>(reader: R) -> Result<TrackedWordSet> {
    let mut set = TrackedWordSet::default();
    for line in reader.lines() {
        set.insert(&line?);
    }
    log::debug!("dictionary built: {} tracked words", set.len());
    Ok(set)
}
