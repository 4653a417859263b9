pub use kurbo::{Point, Vec2};

/// Straight (non-premultiplied) 8-bit RGB colour.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

/// Integer pixel rectangle, half-open: covers `[x1, x2) x [y1, y2)`.
///
/// Constructors clamp inverted extents to zero so `x1 <= x2` and `y1 <= y2` always hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rect {
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
}

impl Rect {
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Self {
            x1,
            y1,
            x2: x2.max(x1),
            y2: y2.max(y1),
        }
    }

    pub fn from_origin_size(x: i32, y: i32, width: u32, height: u32) -> Self {
        let w = i32::try_from(width).unwrap_or(i32::MAX);
        let h = i32::try_from(height).unwrap_or(i32::MAX);
        Self::new(x, y, x.saturating_add(w), y.saturating_add(h))
    }

    /// Round a float rectangle to pixel edges.
    pub fn from_kurbo(r: kurbo::Rect) -> Self {
        let r = r.abs();
        Self::new(
            r.x0.round() as i32,
            r.y0.round() as i32,
            r.x1.round() as i32,
            r.y1.round() as i32,
        )
    }

    pub fn x1(self) -> i32 {
        self.x1
    }

    pub fn y1(self) -> i32 {
        self.y1
    }

    pub fn x2(self) -> i32 {
        self.x2
    }

    pub fn y2(self) -> i32 {
        self.y2
    }

    pub fn width(self) -> u32 {
        span(self.x1, self.x2)
    }

    pub fn height(self) -> u32 {
        span(self.y1, self.y2)
    }

    pub fn is_empty(self) -> bool {
        self.x1 == self.x2 || self.y1 == self.y2
    }

    pub fn intersect(self, other: Self) -> Self {
        Self::new(
            self.x1.max(other.x1),
            self.y1.max(other.y1),
            self.x2.min(other.x2),
            self.y2.min(other.y2),
        )
    }

    /// Shrink by `d` on every side (negative grows). Never inverts.
    pub fn inset(self, d: i32) -> Self {
        Self::new(
            self.x1.saturating_add(d),
            self.y1.saturating_add(d),
            self.x2.saturating_sub(d),
            self.y2.saturating_sub(d),
        )
    }
}

/// Distance from `from` to `to` (`from <= to`); any two `i32`s are at most `u32::MAX` apart.
pub(crate) fn span(from: i32, to: i32) -> u32 {
    u32::try_from(i64::from(to) - i64::from(from)).unwrap_or(0)
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
