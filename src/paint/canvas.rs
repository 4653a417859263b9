use crate::foundation::core::{Color, Point, Rect};
use crate::foundation::error::{BrandpressError, BrandpressResult};
use crate::foundation::math::{lerp_u8, over_u8};
use crate::paint::mask::RoundedShape;

/// Owned RGB8 pixel buffer that every drawing primitive mutates in place.
///
/// A canvas belongs to exactly one artifact. Primitives take `&mut self`, so concurrent writers are
/// ruled out by the borrow checker rather than by convention. All writes are clipped to the canvas
/// bounds; out-of-range geometry is never an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Canvas {
    pub fn new(width: u32, height: u32, background: Color) -> Self {
        let px = background.to_array();
        let len = width as usize * height as usize;
        let mut data = Vec::with_capacity(len * 3);
        for _ in 0..len {
            data.extend_from_slice(&px);
        }
        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_origin_size(0, 0, self.width, self.height)
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return None;
        }
        Some((y as usize * self.width as usize + x as usize) * 3)
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        let i = self.index(x, y)?;
        Some(Color::rgb(self.data[i], self.data[i + 1], self.data[i + 2]))
    }

    pub fn put_pixel(&mut self, x: i32, y: i32, color: Color) {
        if let Some(i) = self.index(x, y) {
            self.data[i..i + 3].copy_from_slice(&color.to_array());
        }
    }

    /// Straight-alpha blend of `color` over the existing pixel.
    pub fn blend_pixel(&mut self, x: i32, y: i32, color: Color, alpha: u8) {
        if alpha == 0 {
            return;
        }
        if let Some(i) = self.index(x, y) {
            let src = color.to_array();
            for c in 0..3 {
                self.data[i + c] = lerp_u8(self.data[i + c], src[c], alpha);
            }
        }
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        let r = rect.intersect(self.bounds());
        if r.is_empty() {
            return;
        }
        let px = color.to_array();
        let stride = self.width as usize * 3;
        for y in r.y1()..r.y2() {
            let row = y as usize * stride;
            let start = row + r.x1() as usize * 3;
            let end = row + r.x2() as usize * 3;
            for chunk in self.data[start..end].chunks_exact_mut(3) {
                chunk.copy_from_slice(&px);
            }
        }
    }

    pub fn fill_rect_alpha(&mut self, rect: Rect, color: Color, alpha: u8) {
        if alpha == 255 {
            self.fill_rect(rect, color);
            return;
        }
        let r = rect.intersect(self.bounds());
        for y in r.y1()..r.y2() {
            for x in r.x1()..r.x2() {
                self.blend_pixel(x, y, color, alpha);
            }
        }
    }

    /// Outline drawn inside `rect`, `width` pixels thick.
    pub fn stroke_rect(&mut self, rect: Rect, color: Color, width: u32) {
        if rect.is_empty() || width == 0 {
            return;
        }
        let w = i32::try_from(width).unwrap_or(i32::MAX);
        let (x1, y1, x2, y2) = (rect.x1(), rect.y1(), rect.x2(), rect.y2());
        self.fill_rect(Rect::new(x1, y1, x2, y1.saturating_add(w)), color);
        self.fill_rect(Rect::new(x1, y2.saturating_sub(w), x2, y2), color);
        self.fill_rect(Rect::new(x1, y1, x1.saturating_add(w), y2), color);
        self.fill_rect(Rect::new(x2.saturating_sub(w), y1, x2, y2), color);
    }

    /// Ellipse inscribed in `rect`, tested at pixel centres.
    pub fn fill_ellipse(&mut self, rect: Rect, color: Color) {
        if rect.is_empty() {
            return;
        }
        let rx = f64::from(rect.width()) / 2.0;
        let ry = f64::from(rect.height()) / 2.0;
        let cx = f64::from(rect.x1()) + rx;
        let cy = f64::from(rect.y1()) + ry;
        let r = rect.intersect(self.bounds());
        for y in r.y1()..r.y2() {
            let dy = (f64::from(y) + 0.5 - cy) / ry;
            for x in r.x1()..r.x2() {
                let dx = (f64::from(x) + 0.5 - cx) / rx;
                if dx * dx + dy * dy <= 1.0 {
                    self.put_pixel(x, y, color);
                }
            }
        }
    }

    /// Straight segment `width` pixels thick with round caps.
    pub fn draw_line(&mut self, p0: Point, p1: Point, color: Color, width: f64) {
        let width = width.max(1.0).round();
        // Odd widths are centred on the pixel row/column the coordinate names, even widths
        // straddle the pixel edge.
        let shift = if (width as i64) % 2 == 1 { 0.5 } else { 0.0 };
        let a = Point::new(p0.x + shift, p0.y + shift);
        let b = Point::new(p1.x + shift, p1.y + shift);
        let hw = width / 2.0;

        let bbox = Rect::new(
            (a.x.min(b.x) - hw).floor() as i32,
            (a.y.min(b.y) - hw).floor() as i32,
            (a.x.max(b.x) + hw).ceil() as i32 + 1,
            (a.y.max(b.y) + hw).ceil() as i32 + 1,
        )
        .intersect(self.bounds());

        for y in bbox.y1()..bbox.y2() {
            for x in bbox.x1()..bbox.x2() {
                let c = Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
                if segment_distance(c, a, b) < hw {
                    self.put_pixel(x, y, color);
                }
            }
        }
    }

    pub fn draw_polyline(&mut self, points: &[Point], color: Color, width: f64) {
        for pair in points.windows(2) {
            self.draw_line(pair[0], pair[1], color, width);
        }
    }

    /// Even-odd scanline fill, sampled at pixel centres.
    pub fn fill_polygon(&mut self, points: &[Point], color: Color) {
        if points.len() < 3 {
            return;
        }
        let min_y = points.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
        let max_y = points.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);
        let y_start = (min_y.floor() as i32).max(0);
        let y_end = (max_y.ceil() as i32).min(self.height as i32);

        let mut xs = Vec::with_capacity(points.len());
        for y in y_start..y_end {
            let yc = f64::from(y) + 0.5;
            xs.clear();
            for i in 0..points.len() {
                let p = points[i];
                let q = points[(i + 1) % points.len()];
                if (p.y <= yc && yc < q.y) || (q.y <= yc && yc < p.y) {
                    xs.push(p.x + (yc - p.y) * (q.x - p.x) / (q.y - p.y));
                }
            }
            xs.sort_by(f64::total_cmp);
            for span in xs.chunks_exact(2) {
                let x_from = (span[0] - 0.5).ceil() as i32;
                let x_to = (span[1] - 0.5).ceil() as i32;
                self.fill_rect(Rect::new(x_from, y, x_to, y + 1), color);
            }
        }
    }

    pub fn fill_rounded_rect(&mut self, rect: Rect, radius: u32, color: Color) {
        if rect.is_empty() {
            return;
        }
        if radius == 0 {
            self.fill_rect(rect, color);
            return;
        }
        let shape = RoundedShape::new(rect.width(), rect.height(), radius);
        self.fill_where(rect, color, |px, py| shape.contains(px, py));
    }

    /// Rounded outline drawn inside `rect`: the outer shape minus the shape inset by `width`.
    pub fn stroke_rounded_rect(&mut self, rect: Rect, radius: u32, color: Color, width: u32) {
        if rect.is_empty() || width == 0 {
            return;
        }
        let outer = RoundedShape::new(rect.width(), rect.height(), radius);
        let inner_rect = rect.inset(i32::try_from(width).unwrap_or(i32::MAX));
        let inner = RoundedShape::new(
            inner_rect.width(),
            inner_rect.height(),
            radius.saturating_sub(width),
        );
        let (ix, iy) = (
            f64::from(inner_rect.x1()) - f64::from(rect.x1()),
            f64::from(inner_rect.y1()) - f64::from(rect.y1()),
        );
        self.fill_where(rect, color, |px, py| {
            outer.contains(px, py) && !inner.contains(px - ix, py - iy)
        });
    }

    /// Paint every visible pixel of `rect` whose centre, relative to `rect`'s top-left, passes
    /// `inside`. Work is bounded by the visible part of `rect`.
    fn fill_where(&mut self, rect: Rect, color: Color, inside: impl Fn(f64, f64) -> bool) {
        let visible = rect.intersect(self.bounds());
        let (ox, oy) = (f64::from(rect.x1()), f64::from(rect.y1()));
        for y in visible.y1()..visible.y2() {
            let py = f64::from(y) + 0.5 - oy;
            for x in visible.x1()..visible.x2() {
                if inside(f64::from(x) + 0.5 - ox, py) {
                    self.put_pixel(x, y, color);
                }
            }
        }
    }

    /// Source-over blend of a premultiplied RGBA8 patch with its top-left at `(x, y)`.
    pub fn blend_premul_rgba(
        &mut self,
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        rgba8_premul: &[u8],
    ) -> BrandpressResult<()> {
        if rgba8_premul.len() != width as usize * height as usize * 4 {
            return Err(BrandpressError::validation(
                "blend_premul_rgba expects width*height*4 bytes",
            ));
        }
        for py in 0..height {
            for px in 0..width {
                let s = (py as usize * width as usize + px as usize) * 4;
                let a = rgba8_premul[s + 3];
                if a == 0 {
                    continue;
                }
                let Some(d) = self.index(x + px as i32, y + py as i32) else {
                    continue;
                };
                for c in 0..3 {
                    self.data[d + c] = over_u8(self.data[d + c], rgba8_premul[s + c], a);
                }
            }
        }
        Ok(())
    }

    /// Row-major RGB8 bytes.
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    pub fn to_rgb_image(&self) -> BrandpressResult<image::RgbImage> {
        image::RgbImage::from_raw(self.width, self.height, self.data.clone())
            .ok_or_else(|| BrandpressError::validation("canvas buffer does not match its size"))
    }
}

fn segment_distance(p: Point, a: Point, b: Point) -> f64 {
    let ab = b - a;
    let len2 = ab.hypot2();
    if len2 <= f64::EPSILON {
        return (p - a).hypot();
    }
    let t = ((p - a).dot(ab) / len2).clamp(0.0, 1.0);
    (p - (a + ab * t)).hypot()
}

#[cfg(test)]
#[path = "../../tests/unit/paint/canvas.rs"]
mod tests;
