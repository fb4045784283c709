//! # motifmark - Motif Annotation Diagrams
//!
//! Annotates FASTA sequences with degenerate motif occurrences and renders
//! each sequence as a schematic: a horizontal backbone line, a thick bar for
//! the exon, and translucent colored blocks for every motif match.
//!
//! ## Architecture
//!
//! The pipeline is a strict one-shot batch: parse → compile → scan → layout
//! → render, with clear separation:
//! - `iupac`: IUPAC ambiguity-code table (process-wide constant)
//! - `motif`: motif compilation into per-position acceptance sets
//! - `model`: sequences and their exon/intron segmentation
//! - `scan`: overlap-preserving motif scanning and annotation tables
//! - `layout`: pure geometry - scenes, legend, canvas sizing
//! - `render`: draw-command flattening and the SVG backend
//! - `formats`: FASTA and motif-list input parsing
//!
//! ## Future Extensions
//!
//! The architecture is designed to support:
//! - Additional render backends behind the `Renderer` trait
//! - Reverse-complement scanning
//! - Per-motif styling beyond flat color
//! - Multi-exon bar rendering (currently only the first exon is drawn)

pub mod color;
pub mod formats;
pub mod iupac;
pub mod layout;
pub mod model;
pub mod motif;
pub mod render;
pub mod scan;
