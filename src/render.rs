//! Draw-command flattening and the SVG backend.
//!
//! A [`DrawingPlan`] is flattened into an ordered list of primitive draw
//! commands - lines, rectangles, text - with absolute coordinates and
//! colors. Backends implement [`Renderer`] and only serialize that list;
//! every position, size and color decision already lives in the plan.
//!
//! The bundled backend emits an SVG document as plain text.

use std::fmt::Write;

use crate::color::Color;
use crate::layout::DrawingPlan;

/// A primitive draw command in drawing-surface coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        width: f64,
        color: Color,
    },
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        color: Color,
        alpha: f64,
    },
    Text {
        x: f64,
        y: f64,
        size: f64,
        content: String,
        color: Color,
    },
}

/// Flattens a plan into draw commands.
///
/// Z-order, first drawn to last: per scene the backbone line, the exon bar,
/// the motif highlights (already in motif-then-span order), then the header
/// text; after all scenes, the legend swatches and labels. Translucent
/// highlights therefore blend over the exon bar and each other.
pub fn to_commands(plan: &DrawingPlan) -> Vec<DrawCommand> {
    let mut commands = Vec::new();

    for scene in &plan.scenes {
        let b = scene.backbone;
        commands.push(DrawCommand::Line {
            x1: b.x1,
            y1: b.y1,
            x2: b.x2,
            y2: b.y2,
            width: b.width,
            color: b.color,
        });

        if let Some(bar) = scene.exon_bar {
            commands.push(DrawCommand::Rect {
                x: bar.x,
                y: bar.y,
                width: bar.width,
                height: bar.height,
                color: bar.color,
                alpha: bar.alpha,
            });
        }

        for h in &scene.highlights {
            commands.push(DrawCommand::Rect {
                x: h.x,
                y: h.y,
                width: h.width,
                height: h.height,
                color: h.color,
                alpha: h.alpha,
            });
        }

        commands.push(DrawCommand::Text {
            x: scene.header.x,
            y: scene.header.y,
            size: scene.header.size,
            content: scene.header.text.clone(),
            color: scene.header.color,
        });
    }

    for entry in &plan.legend {
        let s = entry.swatch;
        commands.push(DrawCommand::Rect {
            x: s.x,
            y: s.y,
            width: s.width,
            height: s.height,
            color: s.color,
            alpha: s.alpha,
        });
        commands.push(DrawCommand::Text {
            x: entry.label.x,
            y: entry.label.y,
            size: entry.label.size,
            content: entry.label.text.clone(),
            color: entry.label.color,
        });
    }

    commands
}

/// A drawing backend: consumes the command list, produces the output bytes.
pub trait Renderer {
    fn render(&self, width: f64, height: f64, commands: &[DrawCommand]) -> Vec<u8>;
}

/// SVG backend. Serializes each command to one SVG element.
#[derive(Debug, Default)]
pub struct SvgRenderer;

impl SvgRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Renders straight to an SVG document string.
    pub fn render_to_string(&self, width: f64, height: f64, commands: &[DrawCommand]) -> String {
        let mut svg = String::new();
        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
        );

        for command in commands {
            match command {
                DrawCommand::Line {
                    x1,
                    y1,
                    x2,
                    y2,
                    width,
                    color,
                } => {
                    let _ = writeln!(
                        svg,
                        r#"  <line x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}" stroke="{}" stroke-width="{width}"/>"#,
                        svg_color(*color)
                    );
                }
                DrawCommand::Rect {
                    x,
                    y,
                    width,
                    height,
                    color,
                    alpha,
                } => {
                    let _ = writeln!(
                        svg,
                        r#"  <rect x="{x}" y="{y}" width="{width}" height="{height}" fill="{}" fill-opacity="{alpha}"/>"#,
                        svg_color(*color)
                    );
                }
                DrawCommand::Text {
                    x,
                    y,
                    size,
                    content,
                    color,
                } => {
                    let _ = writeln!(
                        svg,
                        r#"  <text x="{x}" y="{y}" font-family="monospace" font-size="{size}" fill="{}">{}</text>"#,
                        svg_color(*color),
                        escape_text(content)
                    );
                }
            }
        }

        svg.push_str("</svg>\n");
        svg
    }
}

impl Renderer for SvgRenderer {
    fn render(&self, width: f64, height: f64, commands: &[DrawCommand]) -> Vec<u8> {
        self.render_to_string(width, height, commands).into_bytes()
    }
}

fn svg_color(color: Color) -> String {
    format!(
        "rgb({},{},{})",
        (color.r * 255.0).round() as u8,
        (color.g * 255.0).round() as u8,
        (color.b * 255.0).round() as u8
    )
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
