//! Auto-sized boxes whose border encloses wrapped content exactly.
//!
//! Sizing is a two-phase protocol. [`measure_box`] flows the content at its final width and records
//! it into a [`DisplayList`] without touching any canvas; the returned [`BoxMeasure`] knows the
//! height the content actually took. [`BoxMeasure::commit`] then produces the fill and border at
//! that height followed by the recorded content.

use crate::foundation::core::{Color, Point, Vec2};
use crate::foundation::error::BrandpressResult;
use crate::layout::display::{DisplayList, DrawOp};
use crate::paint::canvas::Canvas;
use crate::text::engine::TextEngine;
use crate::text::fonts::Font;
use crate::text::runs::TextRun;
use crate::text::wrap::wrap_runs;

/// Fill, border and padding of an auto-sized box.
#[derive(Clone, Debug, PartialEq)]
pub struct BoxStyle {
    pub fill: Option<Color>,
    pub border: Option<Color>,
    pub border_width: f64,
    pub radius: f64,
    pub padding_x: f64,
    pub padding_top: f64,
    pub padding_bottom: f64,
}

impl Default for BoxStyle {
    fn default() -> Self {
        Self {
            fill: None,
            border: None,
            border_width: 1.0,
            radius: 0.0,
            padding_x: 0.0,
            padding_top: 0.0,
            padding_bottom: 0.0,
        }
    }
}

/// One wrapped paragraph inside a box.
#[derive(Clone, Debug, PartialEq)]
pub struct BoxSection {
    pub runs: Vec<TextRun>,
    pub font: Font,
    pub line_height: f32,
    /// Extra space below the section.
    pub gap_after: f64,
}

impl BoxSection {
    pub fn new(runs: Vec<TextRun>, font: Font, line_height: f32) -> Self {
        Self {
            runs,
            font,
            line_height,
            gap_after: 0.0,
        }
    }

    pub fn gap_after(mut self, gap: f64) -> Self {
        self.gap_after = gap;
        self
    }
}

/// Result of the measuring phase.
#[derive(Clone, Debug, PartialEq)]
pub struct BoxMeasure {
    pub origin: Point,
    pub width: f64,
    /// `final_y - origin.y + padding_bottom`.
    pub height: f64,
    /// Cursor after the last section, before bottom padding.
    pub final_y: f64,
    /// Wrapped line count per section.
    pub line_counts: Vec<usize>,
    content: DisplayList,
}

impl BoxMeasure {
    pub fn rect(&self) -> kurbo::Rect {
        kurbo::Rect::new(
            self.origin.x,
            self.origin.y,
            self.origin.x + self.width,
            self.origin.y + self.height,
        )
    }

    pub fn content(&self) -> &DisplayList {
        &self.content
    }

    /// Fill and border at the measured height, then the recorded content.
    pub fn commit(&self, style: &BoxStyle) -> DisplayList {
        let rect = self.rect();
        let mut list = DisplayList::new();
        if let Some(fill) = style.fill {
            if style.radius > 0.0 {
                list.push(DrawOp::FillRoundedRect {
                    rect,
                    radius: style.radius,
                    color: fill,
                });
            } else {
                list.push(DrawOp::FillRect { rect, color: fill });
            }
        }
        if let Some(border) = style.border {
            if style.radius > 0.0 {
                list.push(DrawOp::StrokeRoundedRect {
                    rect,
                    radius: style.radius,
                    color: border,
                    width: style.border_width,
                });
            } else {
                list.push(DrawOp::StrokeRect {
                    rect,
                    color: border,
                    width: style.border_width,
                });
            }
        }
        list.append(self.content.clone());
        list
    }
}

/// Measuring phase: wrap and record every section at `width`, starting at `origin`.
pub fn measure_box(
    engine: &mut TextEngine,
    origin: Point,
    width: f64,
    style: &BoxStyle,
    sections: &[BoxSection],
) -> BoxMeasure {
    let content_width = (width - 2.0 * style.padding_x).max(0.0) as f32;
    let x = origin.x + style.padding_x;
    let mut y = origin.y + style.padding_top;
    let mut content = DisplayList::new();
    let mut line_counts = Vec::with_capacity(sections.len());

    for section in sections {
        let lines = wrap_runs(engine, &section.runs, &section.font, content_width);
        line_counts.push(lines.len());
        let block_height = lines.len() as f64 * f64::from(section.line_height);
        if !lines.is_empty() {
            content.push(DrawOp::Runs {
                origin: Point::new(x, y),
                lines,
                line_height: section.line_height,
                font: section.font.clone(),
            });
        }
        y += block_height + section.gap_after;
    }

    BoxMeasure {
        origin,
        width,
        height: y - origin.y + style.padding_bottom,
        final_y: y,
        line_counts,
        content,
    }
}

/// Both phases onto a canvas; returns the committed box rectangle.
pub fn commit_box(
    canvas: &mut Canvas,
    engine: &mut TextEngine,
    origin: Point,
    width: f64,
    style: &BoxStyle,
    sections: &[BoxSection],
) -> BrandpressResult<kurbo::Rect> {
    let measure = measure_box(engine, origin, width, style, sections);
    measure.commit(style).paint(canvas, engine, Vec2::ZERO)?;
    Ok(measure.rect())
}

#[cfg(test)]
#[path = "../../tests/unit/layout/boxed.rs"]
mod tests;
