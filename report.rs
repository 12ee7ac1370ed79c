use std::io::{self, Write};

use itertools::Itertools;

use crate::dictionary::TrackedWordSet;

/// Write the frequency table: counts descending, ties broken by word-list
/// order. With `include_zeroes` false, words that never matched are left
/// out of the table.
pub fn write_report<W: Write>(
    mut out: W,
    dict: &TrackedWordSet,
    include_zeroes: bool,
) -> io::Result<()> {
    writeln!(out, "{:<40}{:>10}", "Predefined Word", "Match Count")?;
    let ranked = dict
        .iter()
        .filter(|w| include_zeroes || w.count > 0)
        .sorted_by(|a, b| b.count.cmp(&a.count).then(a.order.cmp(&b.order)));
    for word in ranked {
        writeln!(out, "{:<40}{:>10}", word.display, word.count)?;
    }
    Ok(())
}
