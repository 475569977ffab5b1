use super::*;

#[test]
fn default_config_is_valid() {
    let c = StageConfig::default();
    c.validate().unwrap();
    assert_eq!(c.redraw, RedrawPolicy::AllNodes);
}

#[test]
fn json_fields_fall_back_to_defaults() {
    let c = StageConfig::from_json_str(r#"{"redraw":"current_only"}"#).unwrap();
    assert_eq!(c.redraw, RedrawPolicy::CurrentOnly);
    assert_eq!(c.viewport, StageConfig::default().viewport);
}

#[test]
fn json_viewport_is_validated() {
    let err = StageConfig::from_json_str(r#"{"viewport":{"width":0,"height":10}}"#).unwrap_err();
    assert!(matches!(err, StepmoreError::Validation(_)));
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = StageConfig::from_json_str("{").unwrap_err();
    assert!(matches!(err, StepmoreError::Serde(_)));
}

#[test]
fn missing_file_is_reported_with_path() {
    let err = StageConfig::from_json_file(Path::new("does/not/exist.json")).unwrap_err();
    assert!(format!("{err:#}").contains("does/not/exist.json"));
}

#[test]
fn palette_matches_reference_colors() {
    assert_eq!(BACKGROUND, Rgba8::opaque(189, 189, 189));
    assert_eq!(ACCENT, Rgba8::opaque(69, 39, 160));
    assert_eq!(CONTRAST, Rgba8::WHITE);
    assert_eq!(NODE_COUNT, 5);
}
