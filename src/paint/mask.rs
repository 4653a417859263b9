use crate::foundation::core::Color;
use crate::foundation::error::{BrandpressError, BrandpressResult};
use crate::foundation::math::lerp_u8;
use crate::paint::canvas::Canvas;

/// Single-channel blend weights (0 = keep base, 255 = take overlay).
///
/// Masks are transient: built for one composite and dropped afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mask {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Mask {
    pub fn new(width: u32, height: u32, value: u8) -> Self {
        Self {
            width,
            height,
            data: vec![value; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Weight at `(x, y)`; 0 outside the mask.
    pub fn get(&self, x: u32, y: u32) -> u8 {
        if x >= self.width || y >= self.height {
            return 0;
        }
        self.data[y as usize * self.width as usize + x as usize]
    }

    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }
}

/// Hard-edged rounded-rectangle mask.
///
/// `radius` is clamped to `min(width, height) / 2`. A pixel is inside when its centre lies in
/// the cross-shaped body of the rectangle, or within `radius` of the nearest corner circle's
/// centre (`dx² + dy² <= r²`). Edges are never anti-aliased.
pub fn rounded_mask(width: u32, height: u32, radius: u32) -> Mask {
    let mut mask = Mask::new(width, height, 0);
    let shape = RoundedShape::new(width, height, radius);
    for y in 0..height {
        let row = y as usize * width as usize;
        for x in 0..width {
            if shape.contains(f64::from(x) + 0.5, f64::from(y) + 0.5) {
                mask.data[row + x as usize] = 255;
            }
        }
    }
    mask
}

/// The inside test behind [`rounded_mask`], usable on any window of the shape.
#[derive(Clone, Copy, Debug)]
pub(crate) struct RoundedShape {
    w: f64,
    h: f64,
    r: f64,
}

impl RoundedShape {
    pub(crate) fn new(width: u32, height: u32, radius: u32) -> Self {
        Self {
            w: f64::from(width),
            h: f64::from(height),
            r: f64::from(radius.min(width.min(height) / 2)),
        }
    }

    /// Whether the point `(px, py)`, relative to the shape's top-left, is inside.
    pub(crate) fn contains(self, px: f64, py: f64) -> bool {
        if px < 0.0 || py < 0.0 || px >= self.w || py >= self.h {
            return false;
        }
        let r = self.r;
        let corner = |p: f64, extent: f64| {
            if p < r {
                Some(r)
            } else if p > extent - r {
                Some(extent - r)
            } else {
                None
            }
        };
        match (corner(px, self.w), corner(py, self.h)) {
            (Some(cx), Some(cy)) => {
                let (dx, dy) = (px - cx, py - cy);
                dx * dx + dy * dy <= r * r
            }
            _ => true,
        }
    }
}

/// Blend `overlay` onto `base` in place: `base = lerp(base, overlay, mask / 255)` per pixel.
///
/// All three inputs must share the same dimensions.
pub fn composite(base: &mut Canvas, overlay: &Canvas, mask: &Mask) -> BrandpressResult<()> {
    if base.width() != overlay.width()
        || base.height() != overlay.height()
        || base.width() != mask.width()
        || base.height() != mask.height()
    {
        return Err(BrandpressError::validation(
            "composite expects base, overlay and mask of equal size",
        ));
    }
    for y in 0..base.height() {
        for x in 0..base.width() {
            let m = mask.get(x, y);
            if m == 0 {
                continue;
            }
            let (xi, yi) = (x as i32, y as i32);
            let (Some(b), Some(o)) = (base.pixel(xi, yi), overlay.pixel(xi, yi)) else {
                continue;
            };
            let out = Color::rgb(
                lerp_u8(b.r, o.r, m),
                lerp_u8(b.g, o.g, m),
                lerp_u8(b.b, o.b, m),
            );
            base.put_pixel(xi, yi, out);
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/paint/mask.rs"]
mod tests;
