use crate::foundation::core::{Color, Point, Rect, Vec2};
use crate::foundation::error::BrandpressResult;
use crate::paint::canvas::Canvas;
use crate::text::engine::TextEngine;
use crate::text::fonts::Font;
use crate::text::runs::{CodeLine, draw_runs, measure_runs};

/// One recorded drawing operation in float page coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    FillRect {
        rect: kurbo::Rect,
        color: Color,
    },
    FillRoundedRect {
        rect: kurbo::Rect,
        radius: f64,
        color: Color,
    },
    StrokeRect {
        rect: kurbo::Rect,
        color: Color,
        width: f64,
    },
    StrokeRoundedRect {
        rect: kurbo::Rect,
        radius: f64,
        color: Color,
        width: f64,
    },
    Line {
        from: Point,
        to: Point,
        color: Color,
        width: f64,
    },
    Runs {
        origin: Point,
        lines: Vec<CodeLine>,
        line_height: f32,
        font: Font,
    },
}

/// Drawing recorded for later replay.
///
/// Measuring passes record into a list instead of a canvas, so they never leave marks behind; the
/// committing pass replays the list at its final position.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DisplayList {
    ops: Vec<DrawOp>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, op: DrawOp) {
        self.ops.push(op);
    }

    pub fn append(&mut self, other: DisplayList) {
        self.ops.extend(other.ops);
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Replay every op onto `canvas`, shifted by `offset`.
    pub fn paint(
        &self,
        canvas: &mut Canvas,
        engine: &mut TextEngine,
        offset: Vec2,
    ) -> BrandpressResult<()> {
        let px = |r: kurbo::Rect| Rect::from_kurbo(r + offset);
        let stroke_px = |w: f64| w.round().max(1.0) as u32;
        for op in &self.ops {
            match op {
                DrawOp::FillRect { rect, color } => canvas.fill_rect(px(*rect), *color),
                DrawOp::FillRoundedRect {
                    rect,
                    radius,
                    color,
                } => canvas.fill_rounded_rect(px(*rect), radius.round().max(0.0) as u32, *color),
                DrawOp::StrokeRect { rect, color, width } => {
                    canvas.stroke_rect(px(*rect), *color, stroke_px(*width))
                }
                DrawOp::StrokeRoundedRect {
                    rect,
                    radius,
                    color,
                    width,
                } => canvas.stroke_rounded_rect(
                    px(*rect),
                    radius.round().max(0.0) as u32,
                    *color,
                    stroke_px(*width),
                ),
                DrawOp::Line {
                    from,
                    to,
                    color,
                    width,
                } => canvas.draw_line(*from + offset, *to + offset, *color, *width),
                DrawOp::Runs {
                    origin,
                    lines,
                    line_height,
                    font,
                } => {
                    draw_runs(engine, canvas, *origin + offset, lines, *line_height, font)?;
                }
            }
        }
        Ok(())
    }

    /// Union of every op's extent, text included; `None` for an empty list.
    pub fn bounds(&self, engine: &mut TextEngine) -> Option<kurbo::Rect> {
        let mut out: Option<kurbo::Rect> = None;
        let mut add = |r: kurbo::Rect| {
            out = Some(match out {
                Some(o) => o.union(r),
                None => r,
            });
        };
        for op in &self.ops {
            match op {
                DrawOp::FillRect { rect, .. }
                | DrawOp::FillRoundedRect { rect, .. }
                | DrawOp::StrokeRect { rect, .. }
                | DrawOp::StrokeRoundedRect { rect, .. } => add(*rect),
                DrawOp::Line { from, to, width, .. } => {
                    add(kurbo::Rect::from_points(*from, *to).inflate(width / 2.0, width / 2.0))
                }
                DrawOp::Runs {
                    origin,
                    lines,
                    line_height,
                    font,
                } => {
                    let cursor = measure_runs(engine, *origin, lines, *line_height, font);
                    add(kurbo::Rect::new(
                        origin.x,
                        origin.y,
                        origin.x + f64::from(cursor.max_width()),
                        cursor.y,
                    ));
                }
            }
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/display.rs"]
mod tests;
