use std::collections::HashMap;
use std::fs;
use std::time::Duration;

use gamesmith_config::{Config, ConfigError, ConfigManager, KEYS};
use tempfile::tempdir;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

#[test]
fn missing_file_loads_defaults() {
    let temp = tempdir().unwrap();
    let manager = ConfigManager::with_base_dir(temp.path().join("gamesmith")).unwrap();

    let config = manager.load().unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.server_url, "http://localhost:8000");
    assert_eq!(config.request_timeout(), Some(Duration::from_secs(30)));
}

#[test]
fn save_then_load_preserves_values_and_leaves_no_tmp_file() {
    let temp = tempdir().unwrap();
    let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();

    let mut config = Config::default();
    config.set_value("user_id", "alice").unwrap();
    config.set_value("request_timeout_secs", "0").unwrap();
    config.set_value("plain_output", "yes").unwrap();
    manager.save(&config).unwrap();

    let loaded = manager.load().unwrap();
    assert_eq!(loaded.user_id.as_deref(), Some("alice"));
    assert_eq!(loaded.request_timeout(), None);
    assert!(loaded.accessibility.plain_output);

    let names: Vec<_> = fs::read_dir(temp.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_eq!(names, vec!["config.json".to_string()]);
}

#[test]
fn partial_file_fills_defaults() {
    let temp = tempdir().unwrap();
    let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
    fs::write(manager.config_path(), r#"{"user_id":"bob"}"#).unwrap();

    let config = manager.load().unwrap();
    assert_eq!(config.user_id.as_deref(), Some("bob"));
    assert_eq!(config.request_timeout_secs, 30);
    assert!(config.ui_color_enabled);
}

#[test]
fn corrupt_file_is_a_serde_error() {
    let temp = tempdir().unwrap();
    let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
    fs::write(manager.config_path(), "{ nope").unwrap();
    assert!(matches!(manager.load(), Err(ConfigError::Serde(_))));
}

#[test]
fn env_overrides_replace_stored_values() {
    let mut config = Config::default();
    config
        .apply_overrides(lookup(&[
            ("GAMESMITH_SERVER_URL", "https://games.example"),
            ("GAMESMITH_USER_ID", "carol"),
            ("GAMESMITH_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();

    assert_eq!(config.server_url, "https://games.example");
    assert_eq!(config.user_id.as_deref(), Some("carol"));
    assert_eq!(config.request_timeout(), Some(Duration::from_secs(5)));
}

#[test]
fn empty_env_values_are_ignored() {
    let mut config = Config::default();
    config.user_id = Some("dave".into());
    config
        .apply_overrides(lookup(&[
            ("GAMESMITH_USER_ID", "  "),
            ("GAMESMITH_SERVER_URL", ""),
        ]))
        .unwrap();
    assert_eq!(config.user_id.as_deref(), Some("dave"));
    assert_eq!(config.server_url, Config::default_server_url());
}

#[test]
fn non_numeric_timeout_is_rejected() {
    let mut config = Config::default();
    let err = config
        .apply_overrides(lookup(&[("GAMESMITH_TIMEOUT_SECS", "soon")]))
        .unwrap_err();
    assert!(matches!(
        err,
        ConfigError::InvalidValue { key, .. } if key == "GAMESMITH_TIMEOUT_SECS"
    ));
}

#[test]
fn set_value_validates_keys_and_values() {
    let mut config = Config::default();
    assert!(matches!(
        config.set_value("colour", "on"),
        Err(ConfigError::UnknownKey(_))
    ));
    assert!(matches!(
        config.set_value("server_url", "localhost"),
        Err(ConfigError::InvalidValue { .. })
    ));
    assert!(matches!(
        config.set_value("ui_color_enabled", "maybe"),
        Err(ConfigError::InvalidValue { .. })
    ));

    config.set_value("user_id", "erin").unwrap();
    config.set_value("user_id", "-").unwrap();
    assert_eq!(config.user_id, None);
}

#[test]
fn every_key_renders() {
    let config = Config::default();
    for key in KEYS {
        assert!(config.value_of(key).is_ok(), "key {key} should render");
    }
    assert_eq!(config.value_of("user_id").unwrap(), "-");
}
