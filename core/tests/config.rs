use tempfile::tempdir;
use tiklist_core::types::{AppConfig, Config};

#[test]
fn test_missing_file_loads_defaults() {
    let tmp = tempdir().unwrap();

    let config = AppConfig::load(&AppConfig::path(tmp.path())).unwrap();

    assert_eq!(config.profile.name, "User");
    assert_eq!(config.profile.email, "user@example.com");
    assert_eq!(config.intake.accepted_host, "tiktok.com");
    assert_eq!(config.resolver.delay_ms, 1000);
    assert!(config.validate().is_empty());
}

#[test]
fn test_save_then_load() {
    let tmp = tempdir().unwrap();
    let path = Config {
        base_path: tmp.path().to_path_buf(),
    }
    .app_config_path();

    let mut config = AppConfig::default();
    config.profile.name = "Ana".to_string();
    config.profile.dark_mode = true;
    config.resolver.delay_ms = 0;
    config.save(&path).unwrap();

    let loaded = AppConfig::load(&path).unwrap();
    assert_eq!(loaded.profile.name, "Ana");
    assert!(loaded.profile.dark_mode);
    assert_eq!(loaded.resolver.delay_ms, 0);

    let user = loaded.profile.to_user();
    assert!(user.preferences.dark_mode);
    assert!(user.preferences.autoplay());
}

#[test]
fn test_partial_file_fills_defaults() {
    let tmp = tempdir().unwrap();
    let path = AppConfig::path(tmp.path());
    std::fs::write(&path, "[resolver]\ndelay_ms = 5\n").unwrap();

    let config = AppConfig::load(&path).unwrap();

    assert_eq!(config.resolver.delay_ms, 5);
    assert_eq!(config.intake.accepted_host, "tiktok.com");
    assert_eq!(config.profile.id, "1");
}

#[test]
fn test_malformed_file_is_an_error() {
    let tmp = tempdir().unwrap();
    let path = AppConfig::path(tmp.path());
    std::fs::write(&path, "[resolver\n").unwrap();

    assert!(AppConfig::load(&path).is_err());
}

#[test]
fn test_invalid_values_are_reported_and_repaired() {
    let mut config = AppConfig::default();
    config.profile.name = "  ".to_string();
    config.intake.accepted_host = String::new();
    config.resolver.delay_ms = 10 * 60 * 1000;

    assert_eq!(config.validate().len(), 3);

    let repaired = config.with_defaults_for_invalid();
    assert!(repaired.validate().is_empty());
    assert_eq!(repaired.profile.name, "User");
    assert_eq!(repaired.intake.accepted_host, "tiktok.com");
    assert_eq!(repaired.resolver.delay_ms, 1000);
}
