use super::*;

#[test]
fn empty_object_is_the_default() {
    assert_eq!(RunConfig::from_json("{}").unwrap(), RunConfig::default());
}

#[test]
fn partial_font_lists_keep_other_defaults() {
    let cfg = RunConfig::from_json(r#"{ "px_per_mm": 2, "fonts": { "regular": [] } }"#).unwrap();
    assert_eq!(cfg.px_per_mm, 2.0);
    assert!(cfg.fonts.regular.is_empty());
    assert_eq!(cfg.fonts.bold, FontSources::default().bold);
    assert_eq!(cfg.geometry().width_px(), 420);
}

#[test]
fn bad_values_are_rejected() {
    let err = RunConfig::from_json(r#"{ "px_per_mm": 0 }"#).unwrap_err();
    assert!(matches!(err, BrandpressError::Validation(_)));
    let err = RunConfig::from_json(r#"{ "px_per_mm": 50 }"#).unwrap_err();
    assert!(matches!(err, BrandpressError::Validation(_)));
    let err = RunConfig::from_json(r#"{ "dpi": 300 }"#).unwrap_err();
    assert!(matches!(err, BrandpressError::Serde(_)));
}

#[test]
fn missing_file_is_not_an_output_error() {
    let err = RunConfig::from_path(Path::new("/nonexistent/brandpress.json")).unwrap_err();
    assert!(!err.is_fatal());
    assert!(err.to_string().contains("open config"));
}
