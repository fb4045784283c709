//! Motif-list parser.
//!
//! One motif per line, upper or lower case, surrounding whitespace trimmed,
//! blank lines skipped. Line order is preserved: it defines the legend
//! order and the default color assignment.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use thiserror::Error;

/// Errors that can occur when reading the motif list.
#[derive(Error, Debug)]
pub enum MotifListError {
    #[error("failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("empty motif list")]
    EmptyList,
}

/// Reads the motif lines from a file, in order.
pub fn read_motif_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, MotifListError> {
    let file = File::open(&path)?;
    let mut reader = BufReader::new(file);
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    read_motifs_str(&content)
}

/// Reads motif lines from a string. Test seam for the file reader.
pub fn read_motifs_str(content: &str) -> Result<Vec<String>, MotifListError> {
    let lines: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    if lines.is_empty() {
        return Err(MotifListError::EmptyList);
    }
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_order_preserved() {
        let lines = read_motifs_str("YYTG\nggcgcc\nNNN\n").unwrap();
        assert_eq!(lines, vec!["YYTG", "ggcgcc", "NNN"]);
    }

    #[test]
    fn test_blank_lines_and_padding_trimmed() {
        let lines = read_motifs_str("  YYTG  \n\n\n catg\t\n").unwrap();
        assert_eq!(lines, vec!["YYTG", "catg"]);
    }

    #[test]
    fn test_empty_list() {
        assert!(matches!(read_motifs_str(""), Err(MotifListError::EmptyList)));
        assert!(matches!(
            read_motifs_str("\n  \n"),
            Err(MotifListError::EmptyList)
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        assert!(matches!(
            read_motif_file("/no/such/motifs.txt"),
            Err(MotifListError::IoError(_))
        ));
    }

    #[test]
    fn test_read_from_temp_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "YYTG\ncatag\n").unwrap();

        let lines = read_motif_file(file.path()).unwrap();
        assert_eq!(lines, vec!["YYTG", "catag"]);
    }
}
