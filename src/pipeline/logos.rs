use crate::foundation::core::Point;
use crate::foundation::error::BrandpressResult;
use crate::paint::canvas::Canvas;
use crate::paint::gradient::{GradientDirection, gradient_canvas};
use crate::paint::mask::{composite, rounded_mask};
use crate::pipeline::brand::terminal_icon;
use crate::pipeline::palette::{CYAN_500, INDIGO_500, WHITE};

/// Square edge lengths of the published logos, largest first.
pub const LOGO_SIZES: [u32; 3] = [300, 90, 48];

pub fn logo_name(size: u32) -> String {
    format!("logo-{size}x{size}.png")
}

/// Rounded gradient square carrying the white `>_` mark.
///
/// The gradient is rendered unclipped and composited over white through a hard-edged mask with
/// corner radius `0.18 * size`.
#[tracing::instrument(level = "debug")]
pub fn logo(size: u32) -> BrandpressResult<Canvas> {
    let overlay = gradient_canvas(size, size, INDIGO_500, CYAN_500, GradientDirection::Diagonal);
    let radius = (f64::from(size) * 0.18) as u32;
    let mask = rounded_mask(size, size, radius);
    let mut canvas = Canvas::new(size, size, WHITE);
    composite(&mut canvas, &overlay, &mask)?;

    let c = f64::from(size / 2);
    terminal_icon(&mut canvas, Point::new(c, c), f64::from(size) * 0.55, WHITE);
    Ok(canvas)
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/logos.rs"]
mod tests;
