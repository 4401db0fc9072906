// Starts the process-global logger, so it lives in its own test binary.

use plancal_core::{default_log_level, init_from_config, logging_status, LoggingConfig};

#[test]
fn config_dir_without_level_uses_build_default() {
    let dir = tempfile::tempdir().unwrap();
    let config = LoggingConfig {
        level: None,
        dir: Some(dir.path().to_path_buf()),
    };

    assert!(init_from_config(&config).unwrap());

    let (level, active_dir) = logging_status().unwrap();
    assert_eq!(level, default_log_level());
    assert_eq!(active_dir, dir.path());

    // Same config again is a no-op.
    assert!(init_from_config(&config).unwrap());
}
