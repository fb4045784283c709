//! Sequence model and exon/intron segmentation.
//!
//! A sequence keeps its FASTA header verbatim and its body with case
//! preserved: uppercase runs are exons, lowercase runs are introns (a
//! case-based annotation convention, not a biological computation).
//! Segmentation happens once at construction; sequences are never mutated
//! afterwards.

use thiserror::Error;

use crate::iupac::BaseSet;

/// Errors that can occur when building a sequence.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("malformed sequence '{header}': invalid character '{symbol}' at position {offset}")]
    MalformedSequence {
        header: String,
        symbol: char,
        offset: usize,
    },
}

/// A maximal same-case run, addressed by its offset into the raw body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    pub start: usize,
    pub len: usize,
}

impl Run {
    /// Exclusive end offset.
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

/// One FASTA record, segmented into exon and intron runs.
///
/// The two run lists are each in left-to-right order; the original
/// interleaving is recoverable only through the offsets. Placing every run
/// back at its offset reconstructs the body exactly.
#[derive(Debug, Clone, PartialEq)]
pub struct Sequence {
    /// The FASTA description line, verbatim, including the leading '>'.
    pub header: String,
    /// The concatenated body, mixed case preserved.
    pub raw: String,
    exon_runs: Vec<Run>,
    intron_runs: Vec<Run>,
}

impl Sequence {
    /// Builds a sequence from a header and its concatenated body,
    /// segmenting the body into case-pure runs.
    ///
    /// Every body character must be a recognized nucleotide symbol
    /// (concrete base or ambiguity code, either case); anything else is a
    /// hard error reported with the sequence's header.
    pub fn segment(header: impl Into<String>, raw: impl Into<String>) -> Result<Self, ModelError> {
        let header = header.into();
        let raw = raw.into();

        for (offset, symbol) in raw.chars().enumerate() {
            if !BaseSet::is_valid_symbol(symbol) {
                return Err(ModelError::MalformedSequence {
                    header,
                    symbol,
                    offset,
                });
            }
        }

        let mut exon_runs = Vec::new();
        let mut intron_runs = Vec::new();
        let mut run_start = 0;
        let mut run_upper: Option<bool> = None;

        // The alphabet check above guarantees ASCII, so char count and byte
        // offsets agree.
        for (offset, symbol) in raw.chars().enumerate() {
            let upper = symbol.is_ascii_uppercase();
            match run_upper {
                Some(current) if current == upper => {}
                Some(current) => {
                    let run = Run {
                        start: run_start,
                        len: offset - run_start,
                    };
                    if current {
                        exon_runs.push(run);
                    } else {
                        intron_runs.push(run);
                    }
                    run_start = offset;
                    run_upper = Some(upper);
                }
                None => run_upper = Some(upper),
            }
        }
        if let Some(current) = run_upper {
            let run = Run {
                start: run_start,
                len: raw.len() - run_start,
            };
            if current {
                exon_runs.push(run);
            } else {
                intron_runs.push(run);
            }
        }

        Ok(Self {
            header,
            raw,
            exon_runs,
            intron_runs,
        })
    }

    /// Exon (uppercase) runs, left to right. Empty when the sequence has no
    /// uppercase run at all.
    pub fn exon_runs(&self) -> &[Run] {
        &self.exon_runs
    }

    /// Intron (lowercase) runs, left to right.
    pub fn intron_runs(&self) -> &[Run] {
        &self.intron_runs
    }

    /// Body length in bases.
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// The body text covered by a run.
    pub fn run_text(&self, run: Run) -> &str {
        &self.raw[run.start..run.end()]
    }
}
