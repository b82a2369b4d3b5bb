use std::fs;
use std::path::Path;

use glance_core::config::ViewerConfig;
use glance_core::error::GlanceError;

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

#[test]
fn test_defaults_match_builtin_constants() {
    let config = ViewerConfig::default();
    assert_eq!(config.background, [255, 255, 255]);
    assert!((config.scroll_scale_step - 1.10).abs() < 1e-12);
    assert!((config.key_scale_step - 2.0).abs() < 1e-12);
    assert_eq!(config.scale_presets, [0.5, 1.0, 2.0]);
    assert!((config.initial_scale - 1.0).abs() < 1e-12);
}

#[test]
fn test_defaults_pass_validation() {
    assert!(ViewerConfig::default().validated().is_ok());
}

#[test]
fn test_load_or_default_without_path() {
    let config = ViewerConfig::load_or_default(None).unwrap();
    assert_eq!(config, ViewerConfig::default());
}

// ---------------------------------------------------------------------------
// File loading
// ---------------------------------------------------------------------------

#[test]
fn test_load_full_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("glance.toml");
    fs::write(
        &path,
        r#"
background = [16, 16, 16]
scroll_scale_step = 1.25
key_scale_step = 3.0
scale_presets = [0.25, 1.0, 4.0]
initial_scale = 0.5
"#,
    )
    .unwrap();

    let config = ViewerConfig::load(&path).unwrap().validated().unwrap();
    assert_eq!(config.background, [16, 16, 16]);
    assert!((config.scroll_scale_step - 1.25).abs() < 1e-12);
    assert!((config.key_scale_step - 3.0).abs() < 1e-12);
    assert_eq!(config.scale_presets, [0.25, 1.0, 4.0]);
    assert!((config.initial_scale - 0.5).abs() < 1e-12);
}

#[test]
fn test_partial_file_keeps_defaults_for_missing_fields() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("glance.toml");
    fs::write(&path, "scroll_scale_step = 1.5\n").unwrap();

    let config = ViewerConfig::load(&path).unwrap();
    assert!((config.scroll_scale_step - 1.5).abs() < 1e-12);
    assert_eq!(config.background, [255, 255, 255]);
    assert_eq!(config.scale_presets, [0.5, 1.0, 2.0]);
}

#[test]
fn test_missing_file_is_io_error() {
    let err = ViewerConfig::load(Path::new("/nonexistent/glance.toml")).unwrap_err();
    assert!(matches!(err, GlanceError::Io(_)), "got: {err}");
}

#[test]
fn test_malformed_file_is_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("glance.toml");
    fs::write(&path, "background = \"white\"\n").unwrap();

    let err = ViewerConfig::load(&path).unwrap_err();
    assert!(matches!(err, GlanceError::ConfigParse(_)), "got: {err}");
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[test]
fn test_validation_rejects_scroll_step_at_or_below_one() {
    let mut config = ViewerConfig::default();
    config.scroll_scale_step = 1.0;
    let err = config.validated().unwrap_err();
    assert!(err.to_string().contains("scroll_scale_step"), "got: {err}");
}

#[test]
fn test_validation_rejects_non_finite_key_step() {
    let mut config = ViewerConfig::default();
    config.key_scale_step = f64::NAN;
    assert!(config.validated().is_err());
}

#[test]
fn test_validation_rejects_non_positive_preset() {
    let mut config = ViewerConfig::default();
    config.scale_presets = [0.5, -1.0, 2.0];
    let err = config.validated().unwrap_err();
    assert!(err.to_string().contains("presets"), "got: {err}");
}

#[test]
fn test_validation_rejects_zero_initial_scale() {
    let mut config = ViewerConfig::default();
    config.initial_scale = 0.0;
    let err = config.validated().unwrap_err();
    assert!(err.to_string().contains("initial_scale"), "got: {err}");
}
