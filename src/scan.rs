//! Overlap-preserving motif scanning.
//!
//! Scanning slides the motif one base at a time over the uppercased body,
//! so a match starting at `s` never hides a match starting at `s + 1` (the
//! defining property here, as opposed to the usual non-overlapping
//! substring search). Matching ignores case and exon/intron boundaries.

use crate::model::Sequence;
use crate::motif::Motif;

/// One motif occurrence as a half-open interval over the sequence body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchSpan {
    pub start: usize,
    pub end: usize,
}

impl MatchSpan {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Finds every occurrence of `motif` in `sequence`, overlapping ones
/// included, in strictly increasing start order.
///
/// Dense clusters from degenerate codes (an `N` matches anything) are
/// returned as-is; nothing is deduplicated or merged.
pub fn scan(sequence: &Sequence, motif: &Motif) -> Vec<MatchSpan> {
    let chars: Vec<char> = sequence.raw.chars().collect();
    let motif_len = motif.len();
    if motif_len == 0 || chars.len() < motif_len {
        return Vec::new();
    }

    chars
        .windows(motif_len)
        .enumerate()
        .filter_map(|(start, window)| {
            if motif.accepts(window) {
                Some(MatchSpan {
                    start,
                    end: start + motif_len,
                })
            } else {
                None
            }
        })
        .collect()
}

/// A sequence together with its annotation table: one span list per motif,
/// indexed by the motif's position in the motif list.
///
/// An absent motif keeps its entry as an empty list - a normal outcome,
/// never an error and never an omitted slot.
#[derive(Debug, Clone)]
pub struct AnnotatedSequence {
    pub sequence: Sequence,
    pub spans_per_motif: Vec<Vec<MatchSpan>>,
}

/// Scans every motif against the sequence and builds its annotation table.
pub fn annotate(sequence: Sequence, motifs: &[Motif]) -> AnnotatedSequence {
    let spans_per_motif = motifs.iter().map(|m| scan(&sequence, m)).collect();
    AnnotatedSequence {
        sequence,
        spans_per_motif,
    }
}
