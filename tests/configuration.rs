//! Tests for configuration system

use portfolio::Config;
use temp_dir::TempDir;

fn api_env_set() -> bool {
    std::env::var("BACKEND_URL").is_ok() || std::env::var("PORTFOLIO__API__BASE_URL").is_ok()
}

#[test]
fn test_config_loads_without_file() {
    let dir = TempDir::new().expect("temp dir");
    let missing = dir.child("missing.toml");

    let config =
        Config::load(Some(missing.to_string_lossy().into_owned())).expect("Failed to load config");

    assert_eq!(config.api.timeout_secs, 30);
    assert_eq!(config.contact.status_clear_ms, 5000);
    assert_eq!(config.observability.log_level, "info");

    if !api_env_set() {
        assert!(config.api.base_url.is_empty());
        assert!(config.validate().is_err());
    }
}

#[test]
fn test_config_file_sections() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("portfolio.toml");
    std::fs::write(
        &path,
        r#"
[api]
base_url = "http://localhost:5000"

[observability]
log_level = "debug"
"#,
    )?;

    let config = Config::load(Some(path.to_string_lossy().into_owned()))?;

    if !api_env_set() {
        assert_eq!(config.api.base_url, "http://localhost:5000");
    }
    assert!(config.validate().is_ok());
    assert_eq!(config.observability.log_level, "debug");

    Ok(())
}
