use super::*;

fn missing_sources() -> FontSources {
    FontSources {
        regular: vec![PathBuf::from("/nonexistent/brandpress/regular.ttf")],
        bold: vec![
            PathBuf::from("/nonexistent/brandpress/bold-a.ttf"),
            PathBuf::from("/nonexistent/brandpress/bold-b.ttf"),
        ],
        mono: Vec::new(),
    }
}

#[test]
fn missing_candidates_fall_back_to_builtin() {
    let mut ctx = parley::FontContext::default();
    let mut book = FontBook::new(missing_sources());
    for style in [FontStyle::Regular, FontStyle::Bold, FontStyle::Mono] {
        let font = book.resolve(&mut ctx, style, 14.0);
        assert!(font.is_builtin());
        assert_eq!(font.style(), style);
        assert_eq!(font.size(), 14.0);
    }
}

#[test]
fn requests_are_memoized_per_style_and_size() {
    let mut ctx = parley::FontContext::default();
    let mut book = FontBook::new(missing_sources());
    book.resolve(&mut ctx, FontStyle::Bold, 12.0);
    book.resolve(&mut ctx, FontStyle::Bold, 12.0);
    book.resolve(&mut ctx, FontStyle::Bold, 16.0);
    assert_eq!(book.resolved.len(), 2);
    // each candidate file probed once across both sizes
    assert_eq!(book.faces.len(), 2);
    assert!(book.faces.values().all(Option::is_none));
}

#[test]
fn invalid_sizes_are_sanitized() {
    let font = Font::builtin(FontStyle::Regular, f32::NAN);
    assert_eq!(font.size(), 1.0);
}

#[test]
fn builtin_fonts_compare_by_style_and_size() {
    assert_eq!(
        Font::builtin(FontStyle::Mono, 13.0),
        Font::builtin(FontStyle::Mono, 13.0)
    );
    assert_ne!(
        Font::builtin(FontStyle::Mono, 13.0),
        Font::builtin(FontStyle::Bold, 13.0)
    );
}

#[test]
fn sources_deserialize_with_defaults() {
    let s: FontSources = serde_json::from_str(r#"{ "mono": ["/opt/fonts/mono.ttf"] }"#).unwrap();
    assert_eq!(s.mono, vec![PathBuf::from("/opt/fonts/mono.ttf")]);
    assert_eq!(s.regular, FontSources::default().regular);
    assert!(s.candidates(FontStyle::Bold)[0].ends_with("segoeuib.ttf"));
}
