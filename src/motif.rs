//! Motif compilation.
//!
//! A motif line like `YYTG` is compiled once into a fixed-length matcher:
//! one acceptance [`BaseSet`] per position, in the original order. The
//! compiled motif is immutable and reused read-only across every sequence.

use thiserror::Error;

use crate::color::Color;
use crate::iupac::{BaseSet, IupacError};

/// Errors that can occur when compiling a motif.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MotifError {
    #[error("empty motif")]
    Empty,

    #[error(transparent)]
    Symbol(#[from] IupacError),
}

/// A compiled motif: the uppercased letters it was built from, its display
/// color, and one acceptance set per position.
#[derive(Debug, Clone, PartialEq)]
pub struct Motif {
    letters: String,
    color: Color,
    matcher: Vec<BaseSet>,
}

impl Motif {
    /// Compiles a motif from its letter string, normalizing to uppercase.
    ///
    /// Fails on an empty (post-trim) string or on any symbol outside the
    /// ambiguity-code table; a motif never half-compiles.
    pub fn compile(letters: &str, color: Color) -> Result<Self, MotifError> {
        let letters = letters.trim().to_uppercase();
        if letters.is_empty() {
            return Err(MotifError::Empty);
        }

        let matcher = letters
            .chars()
            .map(BaseSet::from_symbol)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            letters,
            color,
            matcher,
        })
    }

    /// The uppercased letter string, used for legend labels.
    pub fn letters(&self) -> &str {
        &self.letters
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Number of positions the motif occupies.
    pub fn len(&self) -> usize {
        self.matcher.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matcher.is_empty()
    }

    /// Tests a candidate window of the same length as the motif.
    ///
    /// Each window position must resolve to a base set that shares at least
    /// one concrete base with the acceptance set at that position. Window
    /// characters outside the ambiguity alphabet never match.
    pub fn accepts(&self, window: &[char]) -> bool {
        window.len() == self.matcher.len()
            && window.iter().zip(&self.matcher).all(|(&ch, &accept)| {
                BaseSet::from_symbol(ch)
                    .map(|set| set.intersects(accept))
                    .unwrap_or(false)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::NEUTRAL_GRAY;

    fn compile(letters: &str) -> Motif {
        Motif::compile(letters, NEUTRAL_GRAY).unwrap()
    }

    fn accepts(motif: &Motif, candidate: &str) -> bool {
        let window: Vec<char> = candidate.chars().collect();
        motif.accepts(&window)
    }

    #[test]
    fn test_compile_uppercases() {
        let motif = compile("yGcu");
        assert_eq!(motif.letters(), "YGCU");
        assert_eq!(motif.len(), 4);
    }

    #[test]
    fn test_degenerate_expansion() {
        // YYTG must accept exactly the four concrete expansions of Y=C/T.
        let motif = compile("YYTG");
        for hit in ["CCTG", "CTTG", "TCTG", "TTTG"] {
            assert!(accepts(&motif, hit), "expected {hit} to match");
        }
        for miss in ["AATG", "CATG", "CCTA", "GCTG"] {
            assert!(!accepts(&motif, miss), "expected {miss} to not match");
        }
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let motif = compile("ACGT");
        assert!(!accepts(&motif, "ACG"));
        assert!(!accepts(&motif, "ACGTA"));
    }

    #[test]
    fn test_rna_motif_matches_dna() {
        let motif = compile("UGA");
        assert!(accepts(&motif, "TGA"));
    }

    #[test]
    fn test_empty_motif() {
        assert_eq!(
            Motif::compile("   ", NEUTRAL_GRAY),
            Err(MotifError::Empty)
        );
    }

    #[test]
    fn test_unknown_symbol_aborts_compilation() {
        let err = Motif::compile("ACXG", NEUTRAL_GRAY).unwrap_err();
        assert_eq!(err, MotifError::Symbol(IupacError::UnknownSymbol('X')));
    }
}
