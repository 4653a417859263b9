use super::*;

const A: Color = Color::rgb(99, 102, 241);
const B: Color = Color::rgb(6, 182, 212);

#[test]
fn interpolate_clamps_out_of_range_t() {
    assert_eq!(interpolate(A, B, -0.25), A);
    assert_eq!(interpolate(A, B, 1.000_000_1), B);
    assert_eq!(interpolate(A, B, f64::NAN), A);
    assert_eq!(interpolate(A, B, 0.0), A);
    assert_eq!(interpolate(A, B, 1.0), B);
}

#[test]
fn interpolate_truncates_toward_zero() {
    let c = interpolate(Color::rgb(0, 0, 0), Color::rgb(255, 10, 3), 0.5);
    assert_eq!(c, Color::rgb(127, 5, 1));
}

#[test]
fn horizontal_and_vertical_endpoints_are_exact() {
    for dir in [GradientDirection::Horizontal, GradientDirection::Vertical] {
        let mut canvas = Canvas::new(37, 23, Color::BLACK);
        let bounds = canvas.bounds();
        fill_gradient(&mut canvas, bounds, A, B, dir);
        assert_eq!(canvas.pixel(0, 0), Some(A), "{dir:?}");
        assert_eq!(canvas.pixel(36, 22), Some(B), "{dir:?}");
    }
}

#[test]
fn diagonal_midpoint_is_the_average() {
    let canvas = gradient_canvas(31, 21, A, B, GradientDirection::Diagonal);
    let mid = canvas.pixel(15, 10).unwrap();
    let avg = |a: u8, b: u8| (i32::from(a) + i32::from(b)) / 2;
    assert!((i32::from(mid.r) - avg(A.r, B.r)).abs() <= 1);
    assert!((i32::from(mid.g) - avg(A.g, B.g)).abs() <= 1);
    assert!((i32::from(mid.b) - avg(A.b, B.b)).abs() <= 1);
    assert_eq!(canvas.pixel(0, 0), Some(A));
    assert_eq!(canvas.pixel(30, 20), Some(B));
}

#[test]
fn channels_are_monotonic_along_the_axis() {
    let canvas = gradient_canvas(64, 4, A, B, GradientDirection::Horizontal);
    let row: Vec<Color> = (0..64).map(|x| canvas.pixel(x, 2).unwrap()).collect();
    for pair in row.windows(2) {
        assert!(pair[1].r <= pair[0].r, "red falls from 99 to 6");
        assert!(pair[1].g >= pair[0].g, "green rises from 102 to 182");
        assert!(pair[1].b <= pair[0].b, "blue falls from 241 to 212");
    }

    let canvas = gradient_canvas(4, 64, B, A, GradientDirection::Vertical);
    let col: Vec<Color> = (0..64).map(|y| canvas.pixel(1, y).unwrap()).collect();
    for pair in col.windows(2) {
        assert!(pair[1].r >= pair[0].r);
        assert!(pair[1].g <= pair[0].g);
    }
}

#[test]
fn zero_area_rect_is_a_noop() {
    let mut canvas = Canvas::new(8, 8, Color::WHITE);
    let before = canvas.clone();
    fill_gradient(&mut canvas, Rect::new(2, 2, 2, 7), A, B, GradientDirection::Diagonal);
    fill_gradient(&mut canvas, Rect::new(2, 5, 7, 1), A, B, GradientDirection::Vertical);
    assert_eq!(canvas, before);
}

#[test]
fn clipped_rect_keeps_rect_relative_colours() {
    let mut canvas = Canvas::new(10, 2, Color::WHITE);
    fill_gradient(
        &mut canvas,
        Rect::new(-10, 0, 10, 2),
        A,
        B,
        GradientDirection::Horizontal,
    );
    assert_eq!(canvas.pixel(0, 0), Some(interpolate(A, B, 10.0 / 19.0)));
    assert_eq!(canvas.pixel(9, 1), Some(B));
}

#[test]
fn rect_far_beyond_the_canvas_is_clipped() {
    let mut canvas = Canvas::new(16, 16, Color::WHITE);
    let wide = Rect::new(-2_000_000_000, 0, 2_000_000_000, 16);
    fill_gradient(&mut canvas, wide, A, B, GradientDirection::Horizontal);
    let t = 2_000_000_000.0 / 3_999_999_999.0;
    assert_eq!(canvas.pixel(0, 0), Some(interpolate(A, B, t)));

    let everything = Rect::new(i32::MIN, i32::MIN, i32::MAX, i32::MAX);
    for dir in [GradientDirection::Diagonal, GradientDirection::Vertical] {
        let mut canvas = Canvas::new(16, 16, Color::WHITE);
        fill_gradient(&mut canvas, everything, A, B, dir);
        assert_ne!(canvas.pixel(8, 8), Some(Color::WHITE), "{dir:?}");
    }
}
