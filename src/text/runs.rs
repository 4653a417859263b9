use crate::foundation::core::{Color, Point};
use crate::foundation::error::BrandpressResult;
use crate::paint::canvas::Canvas;
use crate::text::engine::TextEngine;
use crate::text::fonts::Font;

/// A span of text drawn in one colour, optionally in its own font.
#[derive(Clone, Debug, PartialEq)]
pub struct TextRun {
    pub text: String,
    pub color: Color,
    /// Overrides the font passed to [`draw_runs`] for this run only.
    pub font: Option<Font>,
}

impl TextRun {
    pub fn new(text: impl Into<String>, color: Color) -> Self {
        Self {
            text: text.into(),
            color,
            font: None,
        }
    }

    pub fn with_font(mut self, font: Font) -> Self {
        self.font = Some(font);
        self
    }
}

/// Runs drawn left to right on one line. An empty line is a blank spacer.
pub type CodeLine = Vec<TextRun>;

/// Where a run sequence left the cursor.
#[derive(Clone, Debug, PartialEq)]
pub struct RunCursor {
    /// X just past the last run of the last line (origin x when that line was blank).
    pub end_x: f64,
    /// Top of the line box following the last line.
    pub y: f64,
    /// Measured width of every line, in input order; blank lines are 0.
    pub line_widths: Vec<f32>,
}

impl RunCursor {
    fn start(origin: Point, lines: usize) -> Self {
        Self {
            end_x: origin.x,
            y: origin.y,
            line_widths: Vec::with_capacity(lines),
        }
    }

    fn push_line(&mut self, origin: Point, width: f32, line_height: f32) {
        self.end_x = origin.x + f64::from(width);
        self.line_widths.push(width);
        self.y += f64::from(line_height);
    }

    pub fn max_width(&self) -> f32 {
        self.line_widths.iter().copied().fold(0.0, f32::max)
    }
}

/// Draw `lines` starting at `origin` (top-left of the first line box).
///
/// Each run advances the cursor by its own measured width, so adjacent runs abut exactly whatever
/// their colours. The cursor moves down `line_height` after every line, blank lines included.
pub fn draw_runs(
    engine: &mut TextEngine,
    canvas: &mut Canvas,
    origin: Point,
    lines: &[CodeLine],
    line_height: f32,
    font: &Font,
) -> BrandpressResult<RunCursor> {
    let mut cursor = RunCursor::start(origin, lines.len());
    for line in lines {
        let mut width = 0.0f32;
        for run in line {
            let run_font = run.font.as_ref().unwrap_or(font);
            let at = Point::new(origin.x + f64::from(width), cursor.y);
            engine.draw_text(canvas, at, &run.text, run_font, run.color)?;
            // Advance by the measured width so drawing and measuring always agree.
            width += engine.measure(&run.text, run_font);
        }
        cursor.push_line(origin, width, line_height);
    }
    Ok(cursor)
}

/// Same cursor arithmetic as [`draw_runs`] without touching a canvas.
pub fn measure_runs(
    engine: &mut TextEngine,
    origin: Point,
    lines: &[CodeLine],
    line_height: f32,
    font: &Font,
) -> RunCursor {
    let mut cursor = RunCursor::start(origin, lines.len());
    for line in lines {
        let width = line_width(engine, line, font);
        cursor.push_line(origin, width, line_height);
    }
    cursor
}

/// Advance of a single line of runs.
pub fn line_width(engine: &mut TextEngine, line: &[TextRun], font: &Font) -> f32 {
    let mut width = 0.0f32;
    for run in line {
        width += engine.measure(&run.text, run.font.as_ref().unwrap_or(font));
    }
    width
}

#[cfg(test)]
#[path = "../../tests/unit/text/runs.rs"]
mod tests;
