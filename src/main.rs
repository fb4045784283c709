//! motifmark - Motif Annotation Diagrams
//!
//! Takes a FASTA file (upper case = exon, lower case = intron) and a motif
//! list (one motif per line, IUPAC ambiguity codes allowed) and writes an
//! SVG schematic: one backbone line per sequence, the first exon as a thick
//! bar, every motif occurrence as a translucent colored block, plus a
//! legend.
//!
//! ## Usage
//!
//! ```bash
//! motifmark -f genes.fasta -m motifs.txt
//! motifmark -f genes.fasta -m motifs.txt -o figure.svg --preset compact
//! ```

// Use jemalloc for better memory management (returns memory to OS)
#[cfg(not(windows))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use motifmark::color::palette_color;
use motifmark::formats::{parse_fasta_file, read_motif_file};
use motifmark::layout::{layout, Config, Preset};
use motifmark::motif::Motif;
use motifmark::render::{to_commands, Renderer, SvgRenderer};
use motifmark::scan::{annotate, AnnotatedSequence};

/// Band-height preset for the command line.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum PresetArg {
    /// Tight vertical stacking
    Compact,
    /// Roomier bands (default)
    Spacious,
}

impl From<PresetArg> for Preset {
    fn from(arg: PresetArg) -> Self {
        match arg {
            PresetArg::Compact => Preset::Compact,
            PresetArg::Spacious => Preset::Spacious,
        }
    }
}

/// motifmark - draw motif occurrences on exon/intron schematics
///
/// Both inputs are required; the run aborts on a missing, unreadable or
/// empty file rather than drawing from partial data.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input FASTA with upper case exons and lower case introns
    #[arg(short = 'f', long = "file")]
    file: PathBuf,

    /// Input file with one motif on each line
    #[arg(short = 'm', long = "motifs")]
    motifs: PathBuf,

    /// Output SVG path (defaults to the FASTA path with an .svg extension)
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Band-height preset
    #[arg(long = "preset", value_enum, default_value = "spacious")]
    preset: PresetArg,
}

fn run(args: &Args) -> Result<()> {
    // Compile all motifs up front; a single bad motif aborts the run
    // instead of silently producing zero matches for it.
    let motif_lines = read_motif_file(&args.motifs)
        .with_context(|| format!("cannot read motif list {}", args.motifs.display()))?;
    let motifs = motif_lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            Motif::compile(line, palette_color(i))
                .with_context(|| format!("invalid motif on line {}: '{line}'", i + 1))
        })
        .collect::<Result<Vec<_>>>()?;

    let sequences = parse_fasta_file(&args.file)
        .with_context(|| format!("cannot read sequence file {}", args.file.display()))?;

    let annotated: Vec<AnnotatedSequence> = sequences
        .into_iter()
        .map(|seq| annotate(seq, &motifs))
        .collect();

    let config = Config {
        preset: args.preset.into(),
    };
    let plan = layout(&annotated, &motifs, &config);
    let commands = to_commands(&plan);
    let image = SvgRenderer::new().render(plan.width, plan.height, &commands);

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| args.file.with_extension("svg"));
    fs::write(&output, image)
        .with_context(|| format!("cannot write output {}", output.display()))?;

    let total_matches: usize = annotated
        .iter()
        .flat_map(|a| &a.spans_per_motif)
        .map(Vec::len)
        .sum();
    eprintln!(
        "Annotated {} sequence(s) with {} motif(s), {} match(es) -> {}",
        annotated.len(),
        motifs.len(),
        total_matches,
        output.display()
    );

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    run(&args)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{content}").unwrap();
        file
    }

    #[test]
    fn test_end_to_end_no_matches_still_succeeds() {
        // YYTG never occurs in the body: the run must still complete and
        // draw the exon, the introns and the legend.
        let fasta = write_temp(">seq1\nactgtGCATAGgctgaa\n");
        let motifs = write_temp("YYTG\n");
        let output = tempfile::NamedTempFile::new().unwrap();

        let args = Args {
            file: fasta.path().to_path_buf(),
            motifs: motifs.path().to_path_buf(),
            output: Some(output.path().to_path_buf()),
            preset: PresetArg::Spacious,
        };
        run(&args).unwrap();

        let svg = fs::read_to_string(output.path()).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("&gt;seq1"));
        assert!(svg.contains("YYTG"));
    }

    #[test]
    fn test_missing_inputs_abort() {
        let fasta = write_temp(">seq1\nacgt\n");

        let args = Args {
            file: fasta.path().to_path_buf(),
            motifs: PathBuf::from("/no/such/motifs.txt"),
            output: None,
            preset: PresetArg::Compact,
        };
        assert!(run(&args).is_err());

        let motifs = write_temp("YYTG\n");
        let args = Args {
            file: PathBuf::from("/no/such/file.fasta"),
            motifs: motifs.path().to_path_buf(),
            output: None,
            preset: PresetArg::Compact,
        };
        assert!(run(&args).is_err());
    }

    #[test]
    fn test_bad_motif_aborts_run() {
        let fasta = write_temp(">seq1\nacgt\n");
        let motifs = write_temp("ACGT\nQQ\n");

        let args = Args {
            file: fasta.path().to_path_buf(),
            motifs: motifs.path().to_path_buf(),
            output: None,
            preset: PresetArg::Spacious,
        };
        let err = run(&args).unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }
}
