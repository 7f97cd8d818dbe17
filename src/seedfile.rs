//! Seed-list input.
//!
//! One decimal u64 per line. CR/LF and CRLF endings, surrounding whitespace,
//! blank lines, and a missing final newline are all accepted; anything else
//! aborts the batch with the offending line number.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Error, Result};

/// Parse seeds from any buffered reader.
pub fn parse_seeds<R: BufRead>(reader: R) -> Result<Vec<u64>> {
    let mut seeds = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        let seed = text.parse::<u64>().map_err(|_| Error::InvalidSeed {
            line: index + 1,
            text: text.to_string(),
        })?;
        seeds.push(seed);
    }
    Ok(seeds)
}

/// Load a seed-list file.
pub fn load_seeds(path: &Path) -> Result<Vec<u64>> {
    let file = File::open(path)
        .map_err(|err| Error::Io(format!("{}: {err}", path.display())))?;
    parse_seeds(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parses_plain_lines() {
        let seeds = parse_seeds(Cursor::new("1\n90389547180974\n42\n")).unwrap();
        assert_eq!(seeds, [1, 90389547180974, 42]);
    }

    #[test]
    fn tolerates_crlf_blank_lines_and_missing_final_newline() {
        let seeds = parse_seeds(Cursor::new("7\r\n\r\n  8  \n\n9")).unwrap();
        assert_eq!(seeds, [7, 8, 9]);
    }

    #[test]
    fn rejects_garbage_with_line_number() {
        let err = parse_seeds(Cursor::new("1\n2\nnot-a-seed\n4\n")).unwrap_err();
        match err {
            Error::InvalidSeed { line, text } => {
                assert_eq!(line, 3);
                assert_eq!(text, "not-a-seed");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn rejects_out_of_range_values() {
        assert!(parse_seeds(Cursor::new("99999999999999999999999999\n")).is_err());
        assert!(parse_seeds(Cursor::new("-5\n")).is_err());
    }
}
