//! Input file parsing.
//!
//! Two inputs feed the pipeline:
//! - `fasta`: FASTA sequences, headers kept verbatim, body case preserved
//! - `motifs`: motif list, one motif per line, order defines legend order
//!
//! Both parsers treat an absent, unreadable or empty input as a hard error:
//! the tool never proceeds with partial data.

pub mod fasta;
pub mod motifs;

pub use fasta::parse_fasta_file;
pub use motifs::read_motif_file;
