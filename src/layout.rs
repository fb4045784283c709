//! Layout engine: annotated sequences to an abstract drawing plan.
//!
//! Everything here is pure geometry and color derivation - no
//! rasterization, no backend types. Each sequence owns a fixed-height
//! horizontal band with its backbone line centered in it; the exon bar and
//! motif highlights are rectangles positioned by their offsets into the
//! body, one drawing unit per base. A legend band sits below all sequence
//! bands.

use crate::color::Color;
use crate::motif::Motif;
use crate::scan::AnnotatedSequence;

/// Horizontal margin on each side of the longest backbone.
const SIDE_MARGIN: f64 = 40.0;
/// Stroke width of the backbone line.
const BACKBONE_WIDTH: f64 = 2.0;
/// Height of the thick exon bar.
const EXON_BAR_HEIGHT: f64 = 24.0;
/// Height of a motif highlight rectangle.
const HIGHLIGHT_HEIGHT: f64 = 18.0;
/// Translucency of motif highlights, so overlapping matches blend instead
/// of occluding each other.
const HIGHLIGHT_ALPHA: f64 = 0.6;
/// Height of the legend band below the sequence bands.
const LEGEND_BAND_HEIGHT: f64 = 40.0;
/// Side length of a legend swatch.
const LEGEND_SWATCH_SIZE: f64 = 14.0;
/// Fixed horizontal spacing between legend entries.
const LEGEND_SPACING: f64 = 140.0;
/// Gap between a swatch and its label.
const LEGEND_LABEL_GAP: f64 = 6.0;
/// Font size for header and legend text.
const FONT_SIZE: f64 = 12.0;
/// Distance from the top of a band down to the header baseline.
const HEADER_BASELINE: f64 = 16.0;

/// Band-height presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Preset {
    /// Tight stacking for many sequences.
    Compact,
    /// Roomier bands, easier to read.
    #[default]
    Spacious,
}

impl Preset {
    /// Height of one sequence band.
    pub fn band_height(self) -> f64 {
        match self {
            Preset::Compact => 60.0,
            Preset::Spacious => 100.0,
        }
    }
}

/// Layout configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct Config {
    pub preset: Preset,
}

/// A straight line segment with a stroke width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSeg {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub width: f64,
    pub color: Color,
}

/// A filled, axis-aligned rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectShape {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: Color,
    pub alpha: f64,
}

/// A text anchor (x at the left edge, y at the baseline).
#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub text: String,
    pub color: Color,
}

/// The drawing of one sequence band.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub backbone: LineSeg,
    /// The thick bar for the first exon run; `None` when the sequence has
    /// no exon run at all. Later exon runs are not drawn - a documented
    /// limitation of this tool.
    pub exon_bar: Option<RectShape>,
    pub header: TextLabel,
    /// One rectangle per (motif, span), in motif list order then span
    /// order. That order is also the z-order.
    pub highlights: Vec<RectShape>,
}

/// One legend row: a full-opacity swatch plus the motif's letters.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub swatch: RectShape,
    pub label: TextLabel,
}

/// The complete, backend-agnostic description of the output image.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawingPlan {
    pub width: f64,
    pub height: f64,
    pub scenes: Vec<Scene>,
    pub legend: Vec<LegendEntry>,
}

const BLACK: Color = Color::new(0.0, 0.0, 0.0);

/// Derives the full drawing plan for a batch of annotated sequences.
///
/// Must only run once all sequences are scanned: the canvas width depends
/// on the longest body in the whole batch.
pub fn layout(annotated: &[AnnotatedSequence], motifs: &[Motif], config: &Config) -> DrawingPlan {
    let band_height = config.preset.band_height();
    let max_len = annotated
        .iter()
        .map(|a| a.sequence.len())
        .max()
        .unwrap_or(0);

    let scenes = annotated
        .iter()
        .enumerate()
        .map(|(i, a)| layout_scene(a, motifs, i as f64 * band_height, band_height))
        .collect();

    let legend_top = annotated.len() as f64 * band_height;
    let legend = layout_legend(motifs, legend_top);

    DrawingPlan {
        width: max_len as f64 + 2.0 * SIDE_MARGIN,
        height: legend_top + LEGEND_BAND_HEIGHT,
        scenes,
        legend,
    }
}

fn layout_scene(
    annotated: &AnnotatedSequence,
    motifs: &[Motif],
    band_top: f64,
    band_height: f64,
) -> Scene {
    let seq = &annotated.sequence;
    let mid_y = band_top + band_height / 2.0;

    let backbone = LineSeg {
        x1: SIDE_MARGIN,
        y1: mid_y,
        x2: SIDE_MARGIN + seq.len() as f64,
        y2: mid_y,
        width: BACKBONE_WIDTH,
        color: BLACK,
    };

    // Only the first exon run gets the thick bar; a sequence without any
    // exon run simply has none.
    let exon_bar = seq.exon_runs().first().map(|run| RectShape {
        x: SIDE_MARGIN + run.start as f64,
        y: mid_y - EXON_BAR_HEIGHT / 2.0,
        width: run.len as f64,
        height: EXON_BAR_HEIGHT,
        color: BLACK,
        alpha: 1.0,
    });

    let header = TextLabel {
        x: SIDE_MARGIN,
        y: band_top + HEADER_BASELINE,
        size: FONT_SIZE,
        text: seq.header.clone(),
        color: BLACK,
    };

    let mut highlights = Vec::new();
    for (motif, spans) in motifs.iter().zip(&annotated.spans_per_motif) {
        for span in spans {
            highlights.push(RectShape {
                x: SIDE_MARGIN + span.start as f64,
                y: mid_y - HIGHLIGHT_HEIGHT / 2.0,
                width: span.len() as f64,
                height: HIGHLIGHT_HEIGHT,
                color: motif.color(),
                alpha: HIGHLIGHT_ALPHA,
            });
        }
    }

    Scene {
        backbone,
        exon_bar,
        header,
        highlights,
    }
}

fn layout_legend(motifs: &[Motif], legend_top: f64) -> Vec<LegendEntry> {
    let swatch_y = legend_top + (LEGEND_BAND_HEIGHT - LEGEND_SWATCH_SIZE) / 2.0;
    motifs
        .iter()
        .enumerate()
        .map(|(i, motif)| {
            let x = SIDE_MARGIN + i as f64 * LEGEND_SPACING;
            LegendEntry {
                swatch: RectShape {
                    x,
                    y: swatch_y,
                    width: LEGEND_SWATCH_SIZE,
                    height: LEGEND_SWATCH_SIZE,
                    color: motif.color(),
                    alpha: 1.0,
                },
                label: TextLabel {
                    x: x + LEGEND_SWATCH_SIZE + LEGEND_LABEL_GAP,
                    y: swatch_y + LEGEND_SWATCH_SIZE - 2.0,
                    size: FONT_SIZE,
                    text: motif.letters().to_string(),
                    color: BLACK,
                },
            }
        })
        .collect()
}
