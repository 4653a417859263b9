use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        BrandpressError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        BrandpressError::layout("x")
            .to_string()
            .contains("layout error:")
    );
    assert!(
        BrandpressError::output("x")
            .to_string()
            .contains("output error:")
    );
    assert!(
        BrandpressError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn only_output_errors_are_fatal() {
    assert!(BrandpressError::output("disk full").is_fatal());
    assert!(!BrandpressError::validation("x").is_fatal());
    assert!(!BrandpressError::layout("x").is_fatal());
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = BrandpressError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
