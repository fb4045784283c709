//! IUPAC ambiguity-code table.
//!
//! Maps each of the 15 recognized nucleotide codes to the set of concrete
//! bases it can stand for. `U` is accepted as an alias of `T` so RNA input
//! works transparently. The table is a process-wide constant: compiled
//! motifs and the scanner both resolve symbols through it, and nothing ever
//! mutates it.

use thiserror::Error;

/// Errors raised by symbol lookup.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IupacError {
    #[error("unknown IUPAC symbol '{0}'")]
    UnknownSymbol(char),
}

const A_BIT: u8 = 0b0001;
const C_BIT: u8 = 0b0010;
const G_BIT: u8 = 0b0100;
const T_BIT: u8 = 0b1000;

/// The set of concrete bases (A, C, G, T) one sequence position may hold,
/// encoded as a 4-bit mask.
///
/// A concrete base is a one-bit set; ambiguity codes set 2-4 bits. Two sets
/// are compatible when they share at least one base.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseSet(u8);

impl BaseSet {
    /// Looks up a symbol in the ambiguity-code table, case-insensitively.
    pub fn from_symbol(symbol: char) -> Result<Self, IupacError> {
        let mask = match symbol.to_ascii_uppercase() {
            'A' => A_BIT,
            'C' => C_BIT,
            'G' => G_BIT,
            'T' | 'U' => T_BIT,
            'W' => A_BIT | T_BIT,
            'Y' => C_BIT | T_BIT,
            'S' => C_BIT | G_BIT,
            'M' => A_BIT | C_BIT,
            'K' => G_BIT | T_BIT,
            'R' => A_BIT | G_BIT,
            'B' => C_BIT | G_BIT | T_BIT,
            'D' => A_BIT | G_BIT | T_BIT,
            'H' => A_BIT | C_BIT | T_BIT,
            'V' => A_BIT | C_BIT | G_BIT,
            'N' => A_BIT | C_BIT | G_BIT | T_BIT,
            _ => return Err(IupacError::UnknownSymbol(symbol)),
        };
        Ok(Self(mask))
    }

    /// True if `symbol` is one of the recognized codes.
    pub fn is_valid_symbol(symbol: char) -> bool {
        Self::from_symbol(symbol).is_ok()
    }

    /// True if the two sets share at least one concrete base.
    pub fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }

    /// Expands the set back to its concrete bases, in A, C, G, T order.
    pub fn bases(self) -> Vec<char> {
        let mut out = Vec::new();
        for (bit, base) in [(A_BIT, 'A'), (C_BIT, 'C'), (G_BIT, 'G'), (T_BIT, 'T')] {
            if self.0 & bit != 0 {
                out.push(base);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concrete_bases_map_to_themselves() {
        for base in ['A', 'C', 'G', 'T'] {
            let set = BaseSet::from_symbol(base).unwrap();
            assert_eq!(set.bases(), vec![base]);
        }
    }

    #[test]
    fn test_u_is_alias_of_t() {
        assert_eq!(
            BaseSet::from_symbol('U').unwrap(),
            BaseSet::from_symbol('T').unwrap()
        );
    }

    #[test]
    fn test_ambiguity_expansions() {
        assert_eq!(BaseSet::from_symbol('Y').unwrap().bases(), vec!['C', 'T']);
        assert_eq!(BaseSet::from_symbol('R').unwrap().bases(), vec!['A', 'G']);
        assert_eq!(
            BaseSet::from_symbol('B').unwrap().bases(),
            vec!['C', 'G', 'T']
        );
        assert_eq!(
            BaseSet::from_symbol('N').unwrap().bases(),
            vec!['A', 'C', 'G', 'T']
        );
    }

    #[test]
    fn test_lowercase_accepted() {
        assert_eq!(
            BaseSet::from_symbol('w').unwrap(),
            BaseSet::from_symbol('W').unwrap()
        );
    }

    #[test]
    fn test_unknown_symbol() {
        assert_eq!(
            BaseSet::from_symbol('X'),
            Err(IupacError::UnknownSymbol('X'))
        );
        assert!(!BaseSet::is_valid_symbol('-'));
        assert!(!BaseSet::is_valid_symbol('9'));
    }

    #[test]
    fn test_intersection() {
        let y = BaseSet::from_symbol('Y').unwrap(); // C/T
        let r = BaseSet::from_symbol('R').unwrap(); // A/G
        let t = BaseSet::from_symbol('T').unwrap();
        assert!(y.intersects(t));
        assert!(!y.intersects(r));
        assert!(BaseSet::from_symbol('N').unwrap().intersects(r));
    }
}
