use super::*;
use crate::paint::gradient::interpolate;

#[test]
fn names_follow_the_size() {
    assert_eq!(logo_name(48), "logo-48x48.png");
    assert_eq!(
        LOGO_SIZES.map(logo_name),
        ["logo-300x300.png", "logo-90x90.png", "logo-48x48.png"]
    );
}

#[test]
fn large_logo_has_white_corners_and_gradient_edges() {
    let canvas = logo(300).unwrap();
    assert_eq!((canvas.width(), canvas.height()), (300, 300));
    for (x, y) in [(0, 0), (299, 0), (0, 299), (299, 299), (10, 10)] {
        assert_eq!(canvas.pixel(x, y), Some(WHITE), "corner ({x}, {y})");
    }
    // straight edges are inside the mask
    assert_eq!(
        canvas.pixel(150, 0),
        Some(interpolate(INDIGO_500, CYAN_500, 150.0 / 299.0 / 2.0))
    );
    assert_eq!(
        canvas.pixel(0, 150),
        Some(interpolate(INDIGO_500, CYAN_500, 150.0 / 299.0 / 2.0))
    );
    assert_eq!(
        canvas.pixel(299, 150),
        Some(interpolate(INDIGO_500, CYAN_500, (1.0 + 150.0 / 299.0) / 2.0))
    );
}

#[test]
fn mark_is_white_on_the_gradient() {
    let canvas = logo(300).unwrap();
    // s = 165, chevron tip at (150 - 8.25, 150), underscore at y = 191.25
    assert_eq!(canvas.pixel(141, 150), Some(WHITE));
    assert_eq!(canvas.pixel(180, 191), Some(WHITE));
    assert_ne!(canvas.pixel(150, 120), Some(WHITE));
}

#[test]
fn small_logos_render() {
    for size in [90, 48] {
        let canvas = logo(size).unwrap();
        assert_eq!(canvas.width(), size);
        assert_eq!(canvas.pixel(0, 0), Some(WHITE));
    }
}
