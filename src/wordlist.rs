use crate::error::{BruteError, Result};
use std::fs;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Loads a newline-delimited wordlist.
///
/// Every line is trimmed and kept in file order. Blank lines and duplicates
/// stay in the list so that entry positions match the file.
pub fn load_wordlist(path: &str) -> Result<Vec<String>> {
    if !Path::new(path).exists() {
        return Err(BruteError::FileNotFound(path.to_string()));
    }

    let file = fs::File::open(path)?;
    let reader = BufReader::new(file);
    let mut words = vec![];

    for line in reader.lines() {
        let line = line?;
        words.push(line.trim().to_string());
    }

    Ok(words)
}
