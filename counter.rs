use std::io::BufRead;

use anyhow::Result;

use crate::dictionary::TrackedWordSet;
use crate::normalize::clean_record;

const PROGRESS_INTERVAL: u64 = 1000; // log progress every 1000 records

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ScanStats {
    pub records: u64,
    pub matches: u64,
}

/// Stream record lines from `reader`, cleaning each and counting exact
/// whole-token matches against the tracked set. A tracked word occurring
/// several times in one record is counted once per occurrence; tokens not
/// in the set are ignored.
///
/// The cleaned line is split on literal ASCII spaces. Empty tokens from
/// runs of spaces never match (empty words are never tracked), and tabs
/// that survived cleaning stay inside their token.
pub fn scan<R: BufRead>(reader: R, dict: &mut TrackedWordSet) -> Result<ScanStats> {
    let mut stats = ScanStats::default();
    for line in reader.lines() {
        let cleaned = clean_record(&line?);
        for token in cleaned.split(' ') {
            if dict.record_match(token) {
                stats.matches += 1;
            }
        }
        stats.records += 1;
        if stats.records % PROGRESS_INTERVAL == 0 {
            log::debug!("… {} records scanned, {} matches …", stats.records, stats.matches);
        }
    }
    log::debug!("scan done: {} records, {} matches", stats.records, stats.matches);
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::{scan, ScanStats};
    use crate::dictionary::{build, TrackedWordSet};
    use std::io::Cursor;

    fn dict(words: &str) -> TrackedWordSet {
        build(Cursor::new(words)).unwrap()
    }

    fn count_of(set: &TrackedWordSet, display: &str) -> u64 {
        set.iter().find(|w| w.display == display).unwrap().count
    }

    #[test]
    fn counts_each_occurrence_in_a_record() {
        let mut d = dict("cat\n");
        scan(Cursor::new("cat cat cat\n"), &mut d).unwrap();
        assert_eq!(count_of(&d, "cat"), 3);
    }

    #[test]
    fn substring_never_matches() {
        let mut d = dict("cat\n");
        scan(Cursor::new("catastrophe concatenate\n"), &mut d).unwrap();
        assert_eq!(count_of(&d, "cat"), 0);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let mut d = dict("Apple\n");
        scan(Cursor::new("APPLE apple ApPlE\n"), &mut d).unwrap();
        assert_eq!(count_of(&d, "Apple"), 3);
    }

    #[test]
    fn punctuation_joins_rather_than_splits() {
        let mut d = dict("dont\ndo\nnot\n");
        scan(Cursor::new("don't stop\n"), &mut d).unwrap();
        assert_eq!(count_of(&d, "dont"), 1);
        assert_eq!(count_of(&d, "do"), 0);
        assert_eq!(count_of(&d, "not"), 0);
    }

    #[test]
    fn tab_joined_tokens_do_not_match() {
        // Tabs are not separators for the literal-space split.
        let mut d = dict("cat\ndog\n");
        scan(Cursor::new("cat\tdog\n"), &mut d).unwrap();
        assert_eq!(count_of(&d, "cat"), 0);
        assert_eq!(count_of(&d, "dog"), 0);
    }

    #[test]
    fn empty_and_blank_records_match_nothing() {
        let mut d = dict("cat\n");
        let stats = scan(Cursor::new("\n   \n\t\n"), &mut d).unwrap();
        assert_eq!(stats, ScanStats { records: 3, matches: 0 });
        assert_eq!(count_of(&d, "cat"), 0);
    }

    #[test]
    fn stats_tally_records_and_matches() {
        let mut d = dict("cat\ndog\n");
        let stats = scan(Cursor::new("cat dog\nbird\ndog\n"), &mut d).unwrap();
        assert_eq!(stats, ScanStats { records: 3, matches: 3 });
    }
}
