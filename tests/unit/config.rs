use super::*;
use std::io::Write;

#[test]
fn defaults_quit_on_q_and_tick_every_second() {
    let config = DashboardConfig::default();
    assert_eq!(config.quit_key, "q");
    assert_eq!(config.tick(), Some(Duration::from_secs(1)));
    assert!(!config.debug);
}

#[test]
fn partial_file_keeps_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "debug": true, "tick_ms": 0 }}"#).unwrap();

    let config = load_config(file.path()).unwrap();
    assert!(config.debug);
    assert_eq!(config.tick(), None);
    assert_eq!(config.quit_key, "q");
}

#[test]
fn malformed_file_is_a_config_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{{ not json").unwrap();

    let err = load_config(file.path()).unwrap_err();
    assert!(matches!(err, DashError::Config(_)));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_config(&dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, DashError::Io(_)));
}
