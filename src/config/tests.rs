//! Configuration tests

use super::*;
use std::collections::HashMap;

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key: &str| map.get(key).cloned()
}

/// Verify that serialized config can be parsed back.
#[test]
fn test_config_roundtrip_default() {
    let config = Config::default();
    let toml_str = config.to_toml();

    let parsed: Result<FileConfig, _> = toml::from_str(&toml_str);
    assert!(
        parsed.is_ok(),
        "Default config should round-trip.\nTOML:\n{}\nError: {:?}",
        toml_str,
        parsed.err()
    );

    let resolved = Config::resolve(parsed.unwrap(), env_from(&[]));
    assert_eq!(resolved.api_url, config.api_url);
    assert_eq!(resolved.timeout_secs, config.timeout_secs);
    assert_eq!(resolved.theme, config.theme);
    assert_eq!(resolved.user_name, None);
    assert_eq!(resolved.logging.file_rotation, LogRotation::Daily);
}

#[test]
fn test_config_roundtrip_with_user_name() {
    let config = Config {
        user_name: Some("Taylor".to_string()),
        ..Config::default()
    };

    let parsed: FileConfig = toml::from_str(&config.to_toml()).unwrap();
    assert_eq!(parsed.user_name.as_deref(), Some("Taylor"));
}

#[test]
fn test_env_overrides_file() {
    let file: FileConfig = toml::from_str(
        r#"
api_url = "http://file.example/api"
timeout_secs = 30
theme = "Night Garden"
"#,
    )
    .unwrap();

    let config = Config::resolve(
        file,
        env_from(&[
            ("RECIPE_FINDER_API_URL", "http://env.example/api"),
            ("RECIPE_FINDER_TIMEOUT", "5"),
        ]),
    );

    assert_eq!(config.api_url, "http://env.example/api");
    assert_eq!(config.timeout_secs, 5);
    assert_eq!(config.theme, "Night Garden");
}

#[test]
fn test_invalid_timeout_falls_back() {
    let config = Config::resolve(
        FileConfig::default(),
        env_from(&[("RECIPE_FINDER_TIMEOUT", "soon")]),
    );
    assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);

    let config = Config::resolve(
        FileConfig {
            timeout_secs: Some(0),
            ..FileConfig::default()
        },
        env_from(&[]),
    );
    assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
}

#[test]
fn test_zero_env_timeout_defers_to_file() {
    let file = || FileConfig {
        timeout_secs: Some(30),
        ..FileConfig::default()
    };

    let zero = Config::resolve(file(), env_from(&[("RECIPE_FINDER_TIMEOUT", "0")]));
    let garbage = Config::resolve(file(), env_from(&[("RECIPE_FINDER_TIMEOUT", "soon")]));
    assert_eq!(zero.timeout_secs, 30);
    assert_eq!(garbage.timeout_secs, 30);
}

/// Values from env vars can hold any characters; the template must stay valid.
#[test]
fn test_roundtrip_escapes_strings() {
    let config = Config {
        api_url: r#"http://example.test/api?q="x""#.to_string(),
        theme: "Night \\ Garden".to_string(),
        user_name: Some("Ann \"Chef\" O'Neil".to_string()),
        ..Config::default()
    };

    let toml_str = config.to_toml();
    let parsed: Result<FileConfig, _> = toml::from_str(&toml_str);
    assert!(
        parsed.is_ok(),
        "Escaped config should parse.\nTOML:\n{}\nError: {:?}",
        toml_str,
        parsed.err()
    );
    let parsed = parsed.unwrap();

    assert_eq!(parsed.api_url.as_deref(), Some(config.api_url.as_str()));
    assert_eq!(parsed.theme.as_deref(), Some(config.theme.as_str()));
    assert_eq!(parsed.user_name, config.user_name);
}

#[test]
fn test_blank_user_name_is_unset() {
    let config = Config::resolve(
        FileConfig::default(),
        env_from(&[("RECIPE_FINDER_USER", "   ")]),
    );
    assert_eq!(config.user_name, None);
}

#[test]
fn test_logging_section() {
    let file: FileConfig = toml::from_str(
        r#"
[logging]
level = "debug"
file_enabled = true
file_rotation = "HOURLY"
"#,
    )
    .unwrap();

    let config = Config::resolve(file, env_from(&[]));
    assert_eq!(config.logging.level, "debug");
    assert!(config.logging.file_enabled);
    assert_eq!(config.logging.file_rotation, LogRotation::Hourly);
    assert_eq!(config.logging.file_prefix, "recipe-finder");
}

#[test]
fn test_unknown_rotation_defaults_to_daily() {
    assert_eq!(LogRotation::parse("weekly"), LogRotation::Daily);
    assert_eq!(LogRotation::parse("never"), LogRotation::Never);
}
