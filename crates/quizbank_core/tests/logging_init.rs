use quizbank_core::{default_log_level, init_logging, logging_status, LoggingError};

#[test]
fn init_logging_is_idempotent_for_same_config_and_rejects_conflicts() {
    let log_dir = tempfile::tempdir().unwrap();
    let log_dir_str = log_dir.path().to_str().unwrap().to_string();
    let other_dir = tempfile::tempdir().unwrap();
    let other_dir_str = other_dir.path().to_str().unwrap().to_string();

    assert!(logging_status().is_none());
    init_logging("info", &log_dir_str).expect("first init should succeed");
    init_logging(" INFO ", &log_dir_str).expect("same config should be idempotent");

    let level_error = init_logging("debug", &log_dir_str).unwrap_err();
    assert!(matches!(level_error, LoggingError::LevelConflict { .. }));
    assert!(level_error.to_string().contains("refusing to switch"));

    let dir_error = init_logging("info", &other_dir_str).unwrap_err();
    assert!(matches!(dir_error, LoggingError::DirConflict { .. }));

    let (active_level, active_dir) = logging_status().expect("logging should be active");
    assert_eq!(active_level, "info");
    assert_eq!(active_dir, log_dir.path());
}

#[test]
fn default_level_matches_build_mode() {
    let expected = if cfg!(debug_assertions) { "debug" } else { "info" };
    assert_eq!(default_log_level(), expected);
}
