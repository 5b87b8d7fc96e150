use std::io::Write;

use tempfile::NamedTempFile;

use quotedeck_client::config::{ConfigError, HttpConfig};
use quotedeck_client::http::LogPolicy;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn full_config_round_trips() {
    let file = write_config(
        r#"
base_url = "https://api.quotedeck.example"
connect_timeout_seconds = 3
request_timeout_seconds = 20
pool_max_idle_per_host = 4
pool_idle_timeout_seconds = 60
log_policy = "headers"
"#,
    );

    let config = HttpConfig::load_from(file.path()).unwrap();
    assert_eq!(config.base_url, "https://api.quotedeck.example");
    assert_eq!(config.connect_timeout_seconds, 3);
    assert_eq!(config.request_timeout_seconds, 20);
    assert_eq!(config.pool_max_idle_per_host, 4);
    assert_eq!(config.log_policy, LogPolicy::Headers);
}

#[test]
fn omitted_fields_use_defaults() {
    let file = write_config(r#"base_url = "https://api.quotedeck.example""#);

    let config = HttpConfig::load_from(file.path()).unwrap();
    assert_eq!(config.connect_timeout_seconds, 5);
    assert_eq!(config.request_timeout_seconds, 30);
    assert_eq!(config.pool_max_idle_per_host, 8);
    assert_eq!(config.pool_idle_timeout_seconds, 90);
    assert_eq!(config.log_policy, LogPolicy::Basic);
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let file = write_config("base_url = not quoted");
    assert!(matches!(
        HttpConfig::load_from(file.path()),
        Err(ConfigError::Parse { .. })
    ));
}

#[test]
fn missing_base_url_fails_validation() {
    let file = write_config(r#"connect_timeout_seconds = 3"#);
    assert!(matches!(
        HttpConfig::load_from(file.path()),
        Err(ConfigError::Validation { .. })
    ));
}

#[test]
fn unparseable_base_url_fails_validation() {
    let file = write_config(r#"base_url = "not a url""#);
    assert!(matches!(
        HttpConfig::load_from(file.path()),
        Err(ConfigError::Validation { .. })
    ));
}

#[test]
fn timeout_and_pool_policies_derive_from_seconds() {
    let config = HttpConfig {
        base_url: "https://api.quotedeck.example".to_string(),
        connect_timeout_seconds: 2,
        request_timeout_seconds: 10,
        pool_max_idle_per_host: 3,
        pool_idle_timeout_seconds: 45,
        ..HttpConfig::default()
    };

    let timeouts = config.timeout_policy();
    assert_eq!(timeouts.connect.as_secs(), 2);
    assert_eq!(timeouts.request.as_secs(), 10);

    let pool = config.pool_config();
    assert_eq!(pool.max_idle_per_host, 3);
    assert_eq!(pool.idle_timeout.as_secs(), 45);
}
