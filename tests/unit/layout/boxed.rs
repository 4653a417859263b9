use super::*;
use crate::text::fonts::FontStyle;

const BODY: Color = Color::rgb(63, 63, 70);

fn style() -> BoxStyle {
    BoxStyle {
        fill: Some(Color::rgb(244, 244, 245)),
        border: Some(Color::rgb(228, 228, 231)),
        border_width: 1.0,
        radius: 0.0,
        padding_x: 6.0,
        padding_top: 4.0,
        padding_bottom: 5.0,
    }
}

/// Body of `n` words of four characters; at 6 px per glyph and a 60 px content width, two words
/// fit per line.
fn sections(engine: &mut TextEngine, words: usize) -> Vec<BoxSection> {
    let font = engine.font(FontStyle::Regular, 7.0);
    let bold = engine.font(FontStyle::Bold, 7.0);
    let body = vec!["word"; words].join(" ");
    vec![
        BoxSection::new(vec![TextRun::new("Title", BODY)], bold, 10.0).gap_after(2.0),
        BoxSection::new(vec![TextRun::new(body, BODY)], font, 9.0),
    ]
}

#[test]
fn height_grows_with_wrapped_lines_and_never_clips() {
    let mut engine = TextEngine::builtin_only();
    let origin = Point::new(10.0, 20.0);
    let width = 72.0;
    let mut last = 0.0;
    for (words, lines) in [(6, 3), (12, 6), (20, 10)] {
        let secs = sections(&mut engine, words);
        let m = measure_box(&mut engine, origin, width, &style(), &secs);
        assert_eq!(m.line_counts, vec![1, lines]);
        assert!(m.height > last);
        last = m.height;

        let content = m.content().bounds(&mut engine).unwrap();
        assert!(m.rect().y1 >= content.y1 + style().padding_bottom);
        assert_eq!(m.height, m.final_y - origin.y + style().padding_bottom);
        assert_eq!(m.final_y, origin.y + 4.0 + 10.0 + 2.0 + lines as f64 * 9.0);
    }
}

#[test]
fn measuring_records_without_drawing() {
    let mut engine = TextEngine::builtin_only();
    let secs = sections(&mut engine, 8);
    let m = measure_box(&mut engine, Point::new(0.0, 0.0), 72.0, &style(), &secs);
    assert_eq!(m.content().len(), 2);
    assert!(m
        .content()
        .ops()
        .iter()
        .all(|op| matches!(op, DrawOp::Runs { .. })));

    let committed = m.commit(&style());
    assert!(matches!(committed.ops()[0], DrawOp::FillRect { .. }));
    assert!(matches!(committed.ops()[1], DrawOp::StrokeRect { .. }));
    assert_eq!(committed.len(), 4);
}

#[test]
fn commit_box_encloses_the_text() {
    let mut engine = TextEngine::builtin_only();
    let secs = sections(&mut engine, 12);
    let border = style().border.unwrap();
    let mut canvas = Canvas::new(100, 120, Color::WHITE);
    let rect = commit_box(&mut canvas, &mut engine, Point::new(4.0, 4.0), 72.0, &style(), &secs)
        .unwrap();
    let bottom = rect.y1 as i32 - 1;
    assert_eq!(canvas.pixel(40, bottom), Some(border));
    assert_eq!(canvas.pixel(40, bottom + 1), Some(Color::WHITE));

    let mut ink_bottom = 0;
    for y in 0..120 {
        for x in 11..70 {
            if canvas.pixel(x, y) == Some(BODY) {
                ink_bottom = ink_bottom.max(y);
            }
        }
    }
    assert!(ink_bottom > 0);
    assert!(ink_bottom < bottom);
}

#[test]
fn empty_sections_keep_padding() {
    let mut engine = TextEngine::builtin_only();
    let m = measure_box(&mut engine, Point::new(0.0, 0.0), 50.0, &style(), &[]);
    assert_eq!(m.height, 9.0);
    assert!(m.content().is_empty());
}

#[test]
fn outline_box_encloses_its_shaped_content() {
    let mut engine = crate::text::fixtures::outline_engine();
    let font = engine.font(FontStyle::Regular, 15.0);
    let bold = engine.font(FontStyle::Bold, 15.0);
    assert!(!font.is_builtin());
    let secs = vec![
        BoxSection::new(vec![TextRun::new("Finance Copilot", BODY)], bold, 22.0).gap_after(4.0),
        BoxSection::new(
            vec![TextRun::new(
                "Here is the x402 revenue summary for the last 7 days across every agent \
                 endpoint, settled in USDC on Base Sepolia with on-chain proof.",
                BODY,
            )],
            font,
            19.0,
        ),
    ];
    let style = style();
    let origin = Point::new(12.0, 10.0);
    let mut canvas = Canvas::new(260, 260, Color::WHITE);
    let rect = commit_box(&mut canvas, &mut engine, origin, 220.0, &style, &secs).unwrap();

    let m = measure_box(&mut engine, origin, 220.0, &style, &secs);
    assert_eq!(m.rect(), rect);
    assert!(m.line_counts[1] > 1);
    let content = m.content().bounds(&mut engine).unwrap();
    assert!(content.x0 >= rect.x0 + style.padding_x);
    assert!(content.x1 <= rect.x1 - style.padding_x + 0.5);
    assert!(content.y1 + style.padding_bottom <= rect.y1);

    // Nothing painted outside the committed box.
    let bounds = crate::foundation::core::Rect::from_kurbo(rect);
    for y in 0..260 {
        for x in 0..260 {
            let inside = x >= bounds.x1() && x < bounds.x2() && y >= bounds.y1() && y < bounds.y2();
            if !inside {
                assert_eq!(canvas.pixel(x, y), Some(Color::WHITE), "({x}, {y})");
            }
        }
    }
}
