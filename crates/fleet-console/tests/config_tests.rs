use std::io::Write;
use std::path::PathBuf;

use fleet_console::{ConsoleConfig, LimitsConfig};

#[test]
fn test_empty_config_uses_defaults() {
    let config = ConsoleConfig::from_toml("").unwrap();
    assert_eq!(config, ConsoleConfig::default());
    assert_eq!(config.fixture_path, PathBuf::from("assets-data.json"));
    assert_eq!(config.log_filter, "info");
    assert_eq!(config.limits, LimitsConfig { top_risk: 8, recent_alerts: 4 });
    assert!(config.score_seed.is_none());
}

#[test]
fn test_partial_config() {
    let config = ConsoleConfig::from_toml(
        r#"
        fixture_path = "/srv/fleet/assets.json"
        score_seed = 42

        [limits]
        top_risk = 3
        "#,
    )
    .unwrap();
    assert_eq!(config.fixture_path, PathBuf::from("/srv/fleet/assets.json"));
    assert_eq!(config.score_seed, Some(42));
    assert_eq!(config.limits.top_risk, 3);
    assert_eq!(config.limits.recent_alerts, 4);
    assert_eq!(config.summary_limits().top_risk, 3);
}

#[test]
fn test_invalid_config_rejected() {
    assert!(ConsoleConfig::from_toml("score_seed = \"not a number\"").is_err());
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "log_filter = \"debug\"").unwrap();
    let config = ConsoleConfig::load(file.path()).unwrap();
    assert_eq!(config.log_filter, "debug");
}

#[test]
fn test_explicit_missing_path_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.toml");
    assert!(ConsoleConfig::resolve(Some(&missing)).is_err());
}

#[test]
fn test_overrides_replace_file_values() {
    let config = ConsoleConfig::from_toml("score_seed = 1").unwrap();

    let kept = config.clone().with_overrides(None, None);
    assert_eq!(kept.score_seed, Some(1));
    assert_eq!(kept.fixture_path, PathBuf::from("assets-data.json"));

    let replaced = config.with_overrides(Some(PathBuf::from("other.json")), Some(7));
    assert_eq!(replaced.score_seed, Some(7));
    assert_eq!(replaced.fixture_path, PathBuf::from("other.json"));
    assert_eq!(replaced.derive_config(None).score_seed, Some(7));
}
