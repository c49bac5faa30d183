//! Settings file loading

use atom_motion::{MotionSettings, SettingsError};
use std::fs;
use std::time::Duration;

#[test]
fn test_load_settings_file() {
    let path = std::env::temp_dir().join(format!("atom_motion_settings_{}.toml", std::process::id()));
    fs::write(
        &path,
        "enabled = true\ndefault_duration_ms = 240\ntarget_fps = 60\n",
    )
    .unwrap();

    let settings = MotionSettings::load_from_file(&path).unwrap();
    fs::remove_file(&path).ok();

    assert_eq!(settings.default_duration(), Duration::from_millis(240));
    assert_eq!(settings.target_fps, 60);
    // Unlisted keys keep their defaults
    assert_eq!(settings.duration_fast(), Duration::from_millis(100));
}

#[test]
fn test_saved_settings_load_back() {
    let path = std::env::temp_dir().join(format!("atom_motion_roundtrip_{}.toml", std::process::id()));
    let settings = MotionSettings::disabled();
    fs::write(&path, settings.to_toml().unwrap()).unwrap();

    let loaded = MotionSettings::load_from_file(&path).unwrap();
    fs::remove_file(&path).ok();
    assert_eq!(loaded, settings);
}

#[test]
fn test_malformed_file_reports_parse_error() {
    let path = std::env::temp_dir().join(format!("atom_motion_malformed_{}.toml", std::process::id()));
    fs::write(&path, "target_fps = [").unwrap();

    let err = MotionSettings::load_from_file(&path).unwrap_err();
    fs::remove_file(&path).ok();
    assert!(matches!(err, SettingsError::Parse(_)));
}
