use std::{env, time::Duration};

use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub api: ApiConfig,
    #[serde(default)]
    pub contact: ContactConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Base URL of the contact API, without the `/api/contact2` suffix.
    #[serde(default)]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Deserialize, Clone)]
pub struct ContactConfig {
    #[serde(default = "default_status_clear_ms")]
    pub status_clear_ms: u64,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            status_clear_ms: default_status_clear_ms(),
        }
    }
}

impl ContactConfig {
    pub fn status_clear_delay(&self) -> Duration {
        Duration::from_millis(self.status_clear_ms)
    }
}

fn default_status_clear_ms() -> u64 {
    5000
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. `BACKEND_URL` for the API base URL
    /// 2. Environment variables (PORTFOLIO__API__BASE_URL, etc.)
    /// 3. Config file specified by path, `CONFIG_PATH` or `config/default.toml`
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .set_default("api.base_url", "")?
            .set_default("api.timeout_secs", default_timeout_secs())?
            .set_default("contact.status_clear_ms", default_status_clear_ms())?
            .set_default("observability.log_level", default_log_level())?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Config file is optional
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("PORTFOLIO")
                .separator("__")
                .try_parsing(true),
        );

        if let Ok(base_url) = env::var("BACKEND_URL") {
            builder = builder.set_override("api.base_url", base_url)?;
        }

        builder.build()?.try_deserialize()
    }

    /// The base URL is checked for presence only, never for format.
    pub fn validate(&self) -> Result<(), String> {
        if self.api.base_url.trim().is_empty() {
            return Err(
                "API base URL is missing, set BACKEND_URL or PORTFOLIO__API__BASE_URL".to_string(),
            );
        }
        if self.api.timeout_secs == 0 {
            return Err("API timeout must be greater than 0".to_string());
        }
        Ok(())
    }
}
