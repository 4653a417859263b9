//! Drawing helpers shared by the branded scenes: a canvas paired with the text engine, the
//! terminal mark and window chrome.

use crate::foundation::core::{Color, Point, Rect};
use crate::foundation::error::BrandpressResult;
use crate::paint::canvas::Canvas;
use crate::pipeline::palette::{GRAY_100, GRAY_200, WHITE, WINDOW_DOTS};
use crate::text::engine::TextEngine;
use crate::text::fonts::FontStyle;
use crate::text::runs::{CodeLine, RunCursor, draw_runs};

/// A canvas under construction together with the engine that draws its text.
pub struct Stage<'e> {
    pub canvas: Canvas,
    pub engine: &'e mut TextEngine,
}

impl<'e> Stage<'e> {
    pub fn new(engine: &'e mut TextEngine, canvas: Canvas) -> Self {
        Self { canvas, engine }
    }

    /// One line of text with its top-left at `(x, y)`; returns the advance.
    pub fn text(
        &mut self,
        x: f64,
        y: f64,
        text: &str,
        style: FontStyle,
        size: f32,
        color: Color,
    ) -> BrandpressResult<f32> {
        let font = self.engine.font(style, size);
        self.engine
            .draw_text(&mut self.canvas, Point::new(x, y), text, &font, color)
    }

    /// Token runs in `style` at `size`, `line_height` apart.
    pub fn code(
        &mut self,
        x: f64,
        y: f64,
        lines: &[CodeLine],
        line_height: f32,
        style: FontStyle,
        size: f32,
    ) -> BrandpressResult<RunCursor> {
        let font = self.engine.font(style, size);
        draw_runs(
            self.engine,
            &mut self.canvas,
            Point::new(x, y),
            lines,
            line_height,
            &font,
        )
    }

    pub fn finish(self) -> Canvas {
        self.canvas
    }
}

/// Pixel rect from corner coordinates.
pub fn rect(x1: i32, y1: i32, x2: i32, y2: i32) -> Rect {
    Rect::new(x1, y1, x2, y2)
}

/// `>_` prompt mark of size `s` centred on `center`.
pub fn terminal_icon(canvas: &mut Canvas, center: Point, s: f64, color: Color) {
    let width = (s * 0.08).floor().max(2.0);
    let (cx, cy) = (center.x, center.y);
    canvas.draw_polyline(
        &[
            Point::new(cx - s * 0.35, cy - s * 0.25),
            Point::new(cx - s * 0.05, cy),
            Point::new(cx - s * 0.35, cy + s * 0.25),
        ],
        color,
        width,
    );
    canvas.draw_line(
        Point::new(cx + s * 0.05, cy + s * 0.25),
        Point::new(cx + s * 0.35, cy + s * 0.25),
        color,
        width,
    );
}

/// Red, amber and green window controls, 12 px across, starting at `(x, y)`.
pub fn window_dots(canvas: &mut Canvas, x: i32, y: i32, spacing: i32) {
    for (i, color) in WINDOW_DOTS.into_iter().enumerate() {
        let dx = x + i as i32 * spacing;
        canvas.fill_ellipse(rect(dx, y, dx + 12, y + 12), color);
    }
}

/// Browser title bar with window controls and an empty URL field, 44 px tall.
pub fn browser_chrome(canvas: &mut Canvas) {
    let w = canvas.width() as i32;
    canvas.fill_rect(rect(0, 0, w, 44), GRAY_100);
    canvas.draw_line(
        Point::new(0.0, 44.0),
        Point::new(f64::from(w), 44.0),
        GRAY_200,
        1.0,
    );
    window_dots(canvas, 16, 15, 22);
    let url = rect(120, 10, w - 120, 34);
    canvas.fill_rounded_rect(url, 6, WHITE);
    canvas.stroke_rounded_rect(url, 6, GRAY_200, 1);
}

/// Dark editor window: body, a 36 px title bar with rounded top corners, and window controls.
pub fn code_window(canvas: &mut Canvas, frame: Rect, body: Color, bar: Color) {
    canvas.fill_rounded_rect(frame, 12, body);
    canvas.fill_rounded_rect(rect(frame.x1(), frame.y1(), frame.x2(), frame.y1() + 36), 12, bar);
    canvas.fill_rect(
        rect(frame.x1(), frame.y1() + 24, frame.x2(), frame.y1() + 36),
        bar,
    );
    window_dots(canvas, frame.x1() + 14, frame.y1() + 10, 20);
}

/// Rounded card with a one-pixel outline.
pub fn card(canvas: &mut Canvas, frame: Rect, radius: u32, fill: Color, outline: Option<Color>) {
    canvas.fill_rounded_rect(frame, radius, fill);
    if let Some(outline) = outline {
        canvas.stroke_rounded_rect(frame, radius, outline, 1);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/brand.rs"]
mod tests;
