use super::*;
use crate::text::fonts::FontStyle;

const INK: Color = Color::rgb(55, 65, 81);

fn setup() -> (TextEngine, Font) {
    let mut engine = TextEngine::builtin_only();
    // 6 px per character
    let font = engine.font(FontStyle::Regular, 7.0);
    (engine, font)
}

fn texts(lines: &[CodeLine]) -> Vec<String> {
    lines
        .iter()
        .map(|l| l.iter().map(|r| r.text.as_str()).collect::<String>())
        .collect()
}

#[test]
fn greedy_breaks_at_spaces() {
    let (mut engine, font) = setup();
    let lines = wrap_text(&mut engine, "the quick brown fox jumps", &font, INK, 60.0);
    assert_eq!(texts(&lines), vec!["the quick", "brown fox", "jumps"]);
    for line in &lines {
        assert!(line_width_of(&mut engine, line, &font) <= 60.0);
    }
}

fn line_width_of(engine: &mut TextEngine, line: &CodeLine, font: &Font) -> f32 {
    crate::text::runs::line_width(engine, line, font)
}

#[test]
fn newlines_always_break() {
    let (mut engine, font) = setup();
    let lines = wrap_text(&mut engine, "a\n\nb", &font, INK, 600.0);
    assert_eq!(texts(&lines), vec!["a", "", "b"]);
}

#[test]
fn overlong_words_split_by_character() {
    let (mut engine, font) = setup();
    let lines = wrap_text(&mut engine, "0x1234567890abcdef", &font, INK, 36.0);
    assert_eq!(texts(&lines), vec!["0x1234", "567890", "abcdef"]);
}

#[test]
fn narrow_width_still_makes_progress() {
    let (mut engine, font) = setup();
    let lines = wrap_text(&mut engine, "abc", &font, INK, 1.0);
    assert_eq!(texts(&lines), vec!["a", "b", "c"]);
}

#[test]
fn styled_runs_keep_colours_and_merge_neighbours() {
    let (mut engine, font) = setup();
    let bold = engine.font(FontStyle::Bold, 7.0);
    let runs = vec![
        TextRun::new("Settlement: ", INK).with_font(bold.clone()),
        TextRun::new("USDC on Base with instant finality", INK),
    ];
    let lines = wrap_runs(&mut engine, &runs, &font, 150.0);
    assert_eq!(texts(&lines), vec!["Settlement: USDC on Base", "with instant finality"]);
    assert_eq!(lines[0].len(), 2);
    assert_eq!(lines[0][0].font.as_ref(), Some(&bold));
    assert_eq!(lines[0][1].text, "USDC on Base");
    assert_eq!(lines[1].len(), 1);
    assert_eq!(lines[1][0].font, None);
}

#[test]
fn empty_input_produces_no_lines() {
    let (mut engine, font) = setup();
    assert!(wrap_text(&mut engine, "", &font, INK, 100.0).is_empty());
    assert!(wrap_runs(&mut engine, &[], &font, 100.0).is_empty());
}

#[test]
fn more_text_never_means_fewer_lines() {
    let (mut engine, font) = setup();
    let mut prev = 0;
    let mut text = String::new();
    for i in 0..40 {
        text.push_str(if i % 3 == 0 { "payment " } else { "rail " });
        let n = wrap_text(&mut engine, &text, &font, INK, 90.0).len();
        assert!(n >= prev);
        prev = n;
    }
}

#[test]
fn outline_wrap_keeps_words_in_order_within_the_width() {
    let mut engine = crate::text::fixtures::outline_engine();
    let font = engine.font(FontStyle::Regular, 16.0);
    let bold = engine.font(FontStyle::Bold, 16.0);
    assert!(!font.is_builtin());
    let runs = vec![
        TextRun::new("Settlement: ", INK).with_font(bold.clone()),
        TextRun::new("USDC on Base with instant finality and a full audit trail", INK),
    ];
    let lines = wrap_runs(&mut engine, &runs, &font, 180.0);
    assert!(lines.len() > 1);
    for line in &lines {
        assert!(line_width_of(&mut engine, line, &font) <= 180.5);
        assert!(line.last().is_some_and(|r| !r.text.ends_with(' ')));
    }
    assert_eq!(lines[0][0].font.as_ref(), Some(&bold));
    let joined = texts(&lines).join(" ");
    let expected: String = runs.iter().map(|r| r.text.as_str()).collect();
    assert_eq!(
        joined.split_whitespace().collect::<Vec<_>>(),
        expected.split_whitespace().collect::<Vec<_>>()
    );
}

#[test]
fn outline_wrap_honours_newlines_and_breaks_long_words() {
    let mut engine = crate::text::fixtures::outline_engine();
    let font = engine.font(FontStyle::Regular, 16.0);
    let lines = wrap_text(&mut engine, "a\n\nb", &font, INK, 600.0);
    assert_eq!(texts(&lines), vec!["a", "", "b"]);

    let hex = "0x1234567890abcdef1234567890abcdef";
    let lines = wrap_text(&mut engine, hex, &font, INK, 60.0);
    assert!(lines.len() > 1);
    assert_eq!(texts(&lines).concat(), hex);
    for line in &lines {
        assert!(line_width_of(&mut engine, line, &font) <= 60.5);
    }
}
