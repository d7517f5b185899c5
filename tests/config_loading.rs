//! Configuration loading through the public API.

use std::fs;

use taskrank::infrastructure::logging::{LogConfig, LogFormat, RotationPolicy};
use taskrank::{ConfigLoader, Strategy, TaskAnalyzer};

#[test]
fn test_project_config_drives_analyzer() {
    let dir = tempfile::tempdir().unwrap();
    let config_dir = dir.path().join(".taskrank");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(
        config_dir.join("config.yaml"),
        concat!(
            "default_strategy: deadline_driven\nmax_tasks: 10\n",
            "logging:\n  format: json\n  rotation: hourly\n",
        ),
    )
    .unwrap();

    let config = temp_env::with_vars_unset(
        ["TASKRANK_DEFAULT_STRATEGY", "TASKRANK_MAX_TASKS"],
        || ConfigLoader::load_from_dir(dir.path()).unwrap(),
    );

    let analyzer = TaskAnalyzer::from_config(&config).unwrap();
    assert_eq!(analyzer.default_strategy(), Strategy::DeadlineDriven);

    let log_config = LogConfig::from(&config.logging);
    assert_eq!(log_config.format, LogFormat::Json);
    assert_eq!(log_config.rotation, RotationPolicy::Hourly);
}
