//! Word source loading
//!
//! Opens a word file as the raw line stream the dictionary build consumes.
//! The format is one word per line; normalization and filtering happen
//! inside the build itself.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Open a word file as a fallible line iterator.
///
/// # Errors
/// Returns an I/O error if the file cannot be opened. Read errors after that
/// surface through the returned iterator's items.
pub fn open_lines<P: AsRef<Path>>(
    path: P,
) -> io::Result<impl Iterator<Item = io::Result<String>>> {
    let file = File::open(path)?;
    Ok(BufReader::new(file).lines())
}

/// Line stream over the bundled default word list.
#[must_use]
pub fn embedded_lines() -> impl Iterator<Item = io::Result<String>> {
    super::WORDS.iter().map(|&word| Ok(word.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_lines_yield_every_word() {
        let lines: Vec<_> = embedded_lines().collect();
        assert_eq!(lines.len(), super::super::WORDS_COUNT);
        assert!(lines.iter().all(std::result::Result::is_ok));
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(open_lines("definitely/not/here/words.txt").is_err());
    }
}
