use crate::foundation::core::{Color, Rect, span};
use crate::paint::canvas::Canvas;

/// Axis along which a two-stop gradient progresses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientDirection {
    /// Top-left to bottom-right; `t = (nx + ny) / 2`.
    Diagonal,
    /// Left to right; `t = nx`.
    Horizontal,
    /// Top to bottom; `t = ny`.
    Vertical,
}

/// Per-channel linear interpolation, truncated toward zero.
///
/// `t` is clamped to `[0, 1]` (NaN counts as 0), so float drift at the ends of a gradient can never
/// overshoot either stop.
pub fn interpolate(c1: Color, c2: Color, t: f64) -> Color {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let ch = |a: u8, b: u8| -> u8 {
        let v = f64::from(a) + (f64::from(b) - f64::from(a)) * t;
        v.floor().clamp(0.0, 255.0) as u8
    };
    Color::rgb(ch(c1.r, c2.r), ch(c1.g, c2.g), ch(c1.b, c2.b))
}

/// Normalised position of index `i` along an extent of `n` pixels, first = 0 and last = 1.
fn axis_t(i: u32, n: u32) -> f64 {
    if n <= 1 {
        0.0
    } else {
        f64::from(i) / f64::from(n - 1)
    }
}

/// Fill `rect` with a two-stop gradient; pixels outside the canvas are skipped.
///
/// Normalisation is relative to `rect`, not to the clipped region, so a partially visible gradient
/// keeps its colours. A zero-area rect is a no-op.
pub fn fill_gradient(
    canvas: &mut Canvas,
    rect: Rect,
    c1: Color,
    c2: Color,
    direction: GradientDirection,
) {
    if rect.is_empty() {
        return;
    }
    let (w, h) = (rect.width(), rect.height());
    let visible = rect.intersect(canvas.bounds());
    if visible.is_empty() {
        return;
    }

    match direction {
        GradientDirection::Horizontal => {
            let columns: Vec<Color> = (visible.x1()..visible.x2())
                .map(|x| interpolate(c1, c2, axis_t(span(rect.x1(), x), w)))
                .collect();
            for y in visible.y1()..visible.y2() {
                for (x, c) in (visible.x1()..visible.x2()).zip(&columns) {
                    canvas.put_pixel(x, y, *c);
                }
            }
        }
        GradientDirection::Vertical => {
            for y in visible.y1()..visible.y2() {
                let c = interpolate(c1, c2, axis_t(span(rect.y1(), y), h));
                canvas.fill_rect(Rect::new(visible.x1(), y, visible.x2(), y + 1), c);
            }
        }
        GradientDirection::Diagonal => {
            let nx: Vec<f64> = (visible.x1()..visible.x2())
                .map(|x| axis_t(span(rect.x1(), x), w))
                .collect();
            for y in visible.y1()..visible.y2() {
                let ny = axis_t(span(rect.y1(), y), h);
                for (x, tx) in (visible.x1()..visible.x2()).zip(&nx) {
                    canvas.put_pixel(x, y, interpolate(c1, c2, (tx + ny) / 2.0));
                }
            }
        }
    }
}

/// New canvas entirely covered by a gradient.
pub fn gradient_canvas(
    width: u32,
    height: u32,
    c1: Color,
    c2: Color,
    direction: GradientDirection,
) -> Canvas {
    let mut canvas = Canvas::new(width, height, c1);
    let bounds = canvas.bounds();
    fill_gradient(&mut canvas, bounds, c1, c2, direction);
    canvas
}

#[cfg(test)]
#[path = "../../tests/unit/paint/gradient.rs"]
mod tests;
