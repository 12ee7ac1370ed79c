mod counter;
mod dictionary;
mod normalize;
mod report;

use std::env;
use std::fs::File;
use std::io::{self, BufReader};

use anyhow::{Context, Result};

const DEFAULT_WORDS_FILE: &str = "words.txt";
const DEFAULT_RECORDS_FILE: &str = "records.txt";

/// Exactly two positional arguments select the word-list and records
/// paths; any other count falls back to the defaults in the working
/// directory. The fallback is silent, not an error.
fn input_paths() -> (String, String) {
    let args: Vec<String> = env::args().collect();
    if args.len() == 3 {
        (args[1].clone(), args[2].clone())
    } else {
        log::debug!(
            "expected 2 arguments, got {}; using {} and {}",
            args.len() - 1,
            DEFAULT_WORDS_FILE,
            DEFAULT_RECORDS_FILE
        );
        (DEFAULT_WORDS_FILE.to_string(), DEFAULT_RECORDS_FILE.to_string())
    }
}

fn open(path: &str) -> Result<BufReader<File>> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path))?;
    Ok(BufReader::new(file))
}

fn main() -> Result<()> {
    env_logger::init();
    let (words_path, records_path) = input_paths();

    let mut dict = dictionary::build(open(&words_path)?)
        .with_context(|| format!("failed to read word list {}", words_path))?;
    counter::scan(open(&records_path)?, &mut dict)
        .with_context(|| format!("failed to read records {}", records_path))?;
    report::write_report(io::stdout().lock(), &dict, true)?;

    Ok(())
}
