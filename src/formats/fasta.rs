//! FASTA file parser.
//!
//! Lines starting with `>` are headers, kept verbatim including the marker;
//! all following lines up to the next header (or end of input) are trimmed
//! of surrounding whitespace and concatenated into one body, case
//! preserved. Each record is segmented into exon/intron runs as it is
//! completed.
//!
//! ## FASTA Format
//!
//! ```text
//! >sequence_identifier optional description
//! acgtACGTACGTacgt...
//! >another_sequence
//! tgcaTGCATGCA...
//! ```

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use thiserror::Error;

use crate::model::{ModelError, Sequence};

/// Errors that can occur during FASTA parsing.
#[derive(Error, Debug)]
pub enum FastaError {
    #[error("failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("empty FASTA file")]
    EmptyFile,

    #[error("sequence data without a header at line {0}")]
    SequenceWithoutHeader(usize),

    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Result type for FASTA operations.
pub type FastaResult<T> = Result<T, FastaError>;

/// Parses a FASTA file into segmented sequences.
pub fn parse_fasta_file<P: AsRef<Path>>(path: P) -> FastaResult<Vec<Sequence>> {
    let file = File::open(&path)?;
    let mut reader = BufReader::new(file);
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    parse_fasta_str(&content)
}

/// Parses FASTA content from a string.
///
/// Also the test seam: everything file-based funnels through here.
pub fn parse_fasta_str(content: &str) -> FastaResult<Vec<Sequence>> {
    let mut sequences = Vec::new();
    let mut current_header: Option<String> = None;
    let mut current_body = String::new();
    let mut line_number = 0;

    for line in content.lines() {
        line_number += 1;
        let line = line.trim();

        // Skip empty lines
        if line.is_empty() {
            continue;
        }

        if line.starts_with('>') {
            // Close out the previous record
            if let Some(header) = current_header.take() {
                sequences.push(Sequence::segment(header, std::mem::take(&mut current_body))?);
            }
            current_header = Some(line.to_string());
        } else {
            if current_header.is_none() {
                return Err(FastaError::SequenceWithoutHeader(line_number));
            }
            current_body.push_str(line);
        }
    }

    // Don't forget the last record
    if let Some(header) = current_header {
        sequences.push(Sequence::segment(header, current_body)?);
    }

    if sequences.is_empty() {
        return Err(FastaError::EmptyFile);
    }

    Ok(sequences)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_simple_fasta() {
        let content = ">seq1\nacgtACGT\n>seq2\nTGCA\n";
        let sequences = parse_fasta_str(content).unwrap();

        assert_eq!(sequences.len(), 2);
        assert_eq!(sequences[0].header, ">seq1");
        assert_eq!(sequences[0].raw, "acgtACGT");
        assert_eq!(sequences[1].header, ">seq2");
        assert_eq!(sequences[1].raw, "TGCA");
    }

    #[test]
    fn test_multiline_body_concatenated() {
        let content = ">seq1\nacgt\nTGCA\naaaa\n";
        let sequences = parse_fasta_str(content).unwrap();

        assert_eq!(sequences.len(), 1);
        assert_eq!(sequences[0].raw, "acgtTGCAaaaa");
    }

    #[test]
    fn test_header_kept_verbatim_with_description() {
        let content = ">seq1 sample gene, chr2\nacgt\n";
        let sequences = parse_fasta_str(content).unwrap();
        assert_eq!(sequences[0].header, ">seq1 sample gene, chr2");
    }

    #[test]
    fn test_case_preserved_and_segmented() {
        let content = ">seq1\nactgtGCATAGgctgaa\n";
        let sequences = parse_fasta_str(content).unwrap();
        let seq = &sequences[0];
        assert_eq!(seq.exon_runs().len(), 1);
        assert_eq!(seq.run_text(seq.exon_runs()[0]), "GCATAG");
    }

    #[test]
    fn test_empty_lines_skipped() {
        let content = ">seq1\nacgt\n\n>seq2\n\ntgca\n";
        let sequences = parse_fasta_str(content).unwrap();
        assert_eq!(sequences.len(), 2);
        assert_eq!(sequences[1].raw, "tgca");
    }

    #[test]
    fn test_empty_file() {
        assert!(matches!(parse_fasta_str(""), Err(FastaError::EmptyFile)));
    }

    #[test]
    fn test_sequence_without_header() {
        let content = "acgt\n>seq1\ntgca\n";
        assert!(matches!(
            parse_fasta_str(content),
            Err(FastaError::SequenceWithoutHeader(1))
        ));
    }

    #[test]
    fn test_malformed_body_reported_with_header() {
        let content = ">seq1\nac-gt\n";
        match parse_fasta_str(content) {
            Err(FastaError::Model(ModelError::MalformedSequence { header, symbol, .. })) => {
                assert_eq!(header, ">seq1");
                assert_eq!(symbol, '-');
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = parse_fasta_file("/no/such/file.fasta");
        assert!(matches!(result, Err(FastaError::IoError(_))));
    }

    #[test]
    fn test_parse_from_temp_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, ">seq1\nacgtACGT\n").unwrap();

        let sequences = parse_fasta_file(file.path()).unwrap();
        assert_eq!(sequences.len(), 1);
        assert_eq!(sequences[0].raw, "acgtACGT");
    }
}
