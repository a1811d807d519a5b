use crate::config::{
    FileConfig, Overrides, Settings, DEFAULT_API_URL, DEFAULT_ZONE_NOT_FOUND_MESSAGE,
    TOKEN_ENV,
};
use crate::error::Error;
use std::collections::HashMap;
use std::fs;
use tempfile::NamedTempFile;

fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| vars.get(key).cloned()
}

// Helper function to create a config file on disk
fn create_config_file(contents: &str) -> NamedTempFile {
    let temp_file = NamedTempFile::new().unwrap();
    fs::write(&temp_file, contents).unwrap();
    temp_file
}

#[test]
fn test_missing_token_is_a_configuration_error() {
    let result = Settings::resolve_with(Overrides::default(), None, env(&[]));

    match result {
        Err(Error::ConfigurationMissing { env, .. }) => assert_eq!(env, TOKEN_ENV),
        other => panic!("expected a configuration error, got {:?}", other),
    }
}

#[test]
fn test_empty_token_counts_as_missing() {
    let overrides = Overrides {
        token: Some(String::new()),
        ..Overrides::default()
    };

    let result = Settings::resolve_with(overrides, None, env(&[("HETZNER_DNS_TOKEN", "")]));
    assert!(matches!(result, Err(Error::ConfigurationMissing { .. })));
}

#[test]
fn test_explicit_argument_beats_environment() {
    let overrides = Overrides {
        token: Some("arg_token".to_string()),
        zone_id: Some("arg_zone".to_string()),
        ..Overrides::default()
    };
    let vars = env(&[
        ("HETZNER_DNS_TOKEN", "env_token"),
        ("ZONE_ID", "env_zone"),
        ("ZONE_NAME", "example.com"),
    ]);

    let settings = Settings::resolve_with(overrides, None, vars).unwrap();
    assert_eq!(settings.token, "arg_token");
    assert_eq!(settings.zone_id.as_deref(), Some("arg_zone"));
    assert_eq!(settings.zone_name.as_deref(), Some("example.com"));
}

#[test]
fn test_defaults_without_overrides() {
    let settings =
        Settings::resolve_with(Overrides::default(), None, env(&[("HETZNER_DNS_TOKEN", "t")]))
            .unwrap();

    assert_eq!(settings.token, "t");
    assert_eq!(settings.zone_id, None);
    assert_eq!(settings.zone_name, None);
    assert_eq!(settings.api_url, DEFAULT_API_URL);
    assert_eq!(settings.zone_not_found_message, DEFAULT_ZONE_NOT_FOUND_MESSAGE);
}

#[test]
fn test_api_url_trailing_slash_is_stripped() {
    let vars = env(&[
        ("HETZNER_DNS_TOKEN", "t"),
        ("HETZNER_DNS_API_URL", "http://localhost:8080/api/v1/"),
    ]);

    let settings = Settings::resolve_with(Overrides::default(), None, vars).unwrap();
    assert_eq!(settings.api_url, "http://localhost:8080/api/v1");
}

#[test]
fn test_config_file_is_lowest_precedence() {
    let config_file = create_config_file(
        r#"
            api_token: "file_token"
            zone_id: "file_zone"
            zone_name: "file.example.com"
            zone_not_found_message: "no such zone"
        "#,
    );
    let file = FileConfig::load(config_file.path()).unwrap();
    let vars = env(&[("ZONE_ID", "env_zone")]);

    let settings = Settings::resolve_with(Overrides::default(), Some(file), vars).unwrap();
    assert_eq!(settings.token, "file_token");
    assert_eq!(settings.zone_id.as_deref(), Some("env_zone"));
    assert_eq!(settings.zone_name.as_deref(), Some("file.example.com"));
    assert_eq!(settings.zone_not_found_message, "no such zone");
}

#[test]
fn test_empty_value_in_config_file_is_invalid() {
    let config_file = create_config_file(r#"api_token: """#);

    let result = FileConfig::load(config_file.path());
    assert!(matches!(result, Err(Error::InvalidConfig(_))));
}

#[test]
fn test_unknown_key_in_config_file_is_invalid() {
    let config_file = create_config_file("update_interval: 300\n");

    let result = FileConfig::load(config_file.path());
    assert!(matches!(result, Err(Error::InvalidConfig(_))));
}

#[test]
fn test_missing_config_file_is_invalid() {
    let result = FileConfig::load("/nonexistent/hetzner-dns.yaml");

    let err = result.unwrap_err();
    assert!(matches!(err, Error::InvalidConfig(_)));
    assert!(err.to_string().contains("/nonexistent/hetzner-dns.yaml"));
}

#[test]
fn test_empty_zone_name_in_environment_is_kept() {
    let vars = env(&[("HETZNER_DNS_TOKEN", "t"), ("ZONE_NAME", ""), ("ZONE_ID", "")]);

    let settings = Settings::resolve_with(Overrides::default(), None, vars).unwrap();
    assert_eq!(settings.zone_name.as_deref(), Some(""));
    assert_eq!(settings.zone_id, None);
}
