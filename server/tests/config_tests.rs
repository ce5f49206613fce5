use catalog_server::config::ServerConfig;
use serial_test::serial;
use std::path::PathBuf;
use std::time::Duration;

const ENV_KEYS: [&str; 7] = [
    "CONFIG_PATH",
    "SERVER_HOST",
    "SERVER_PORT",
    "DATA_DIR",
    "TOKEN_VALIDITY_MINUTES",
    "REQUIRE_TOKEN",
    "SERVER_WORKERS",
];

fn clear_env() {
    for key in ENV_KEYS {
        std::env::remove_var(key);
    }
}

fn sample_config_path() -> String {
    format!("{}/config/server.toml", env!("CARGO_MANIFEST_DIR"))
}

#[test]
fn test_load_sample_config() {
    let config = ServerConfig::load_from_file(sample_config_path()).expect("Failed to load config");

    assert_eq!(config, ServerConfig::default());
}

#[test]
fn test_invalid_config_path() {
    let result = ServerConfig::load_from_file("nonexistent/server.toml");
    assert!(result.is_err());
}

#[test]
#[serial]
fn test_load_without_environment_uses_defaults() {
    clear_env();

    let config = ServerConfig::load().unwrap();
    assert_eq!(config.port, 3001);
    assert_eq!(config.data_dir, PathBuf::from("initial-data"));
    assert_eq!(config.token_validity(), Duration::from_secs(15 * 60));
    assert!(!config.require_token);
}

#[test]
#[serial]
fn test_environment_overrides_file() {
    clear_env();
    std::env::set_var("CONFIG_PATH", sample_config_path());
    std::env::set_var("SERVER_PORT", "8088");
    std::env::set_var("DATA_DIR", "/tmp/catalog");
    std::env::set_var("TOKEN_VALIDITY_MINUTES", "5");
    std::env::set_var("REQUIRE_TOKEN", "yes");

    let config = ServerConfig::load();
    clear_env();

    let config = config.unwrap();
    assert_eq!(config.port, 8088);
    assert_eq!(config.data_dir, PathBuf::from("/tmp/catalog"));
    assert_eq!(config.token_validity(), Duration::from_secs(5 * 60));
    assert!(config.require_token);
}

#[test]
#[serial]
fn test_invalid_port_is_rejected() {
    clear_env();
    std::env::set_var("SERVER_PORT", "not-a-port");

    let result = ServerConfig::load();
    clear_env();

    assert!(result.is_err());
}

#[test]
#[serial]
fn test_zero_workers_is_rejected() {
    clear_env();
    std::env::set_var("SERVER_WORKERS", "0");

    let result = ServerConfig::load();
    clear_env();

    assert!(result.is_err());
}

#[test]
#[serial]
fn test_huge_token_validity_saturates() {
    clear_env();
    std::env::set_var("TOKEN_VALIDITY_MINUTES", u64::MAX.to_string());

    let config = ServerConfig::load();
    clear_env();

    let config = config.unwrap();
    assert_eq!(config.token_validity_minutes, u64::MAX);
    assert_eq!(config.token_validity(), Duration::from_secs(u64::MAX));
}
