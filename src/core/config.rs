//! Application configuration management
//!
//! This module handles loading and validating configuration from TOML files.
//! All configuration is validated at load time so a misconfigured binary fails
//! before it issues any request.

use crate::core::session::StaticSession;
use crate::core::settings::Settings;
use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Default request timeout in seconds
const DEFAULT_REQUEST_TIMEOUT: u64 = 30;

#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    pub project_id: String,
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct SessionConfig {
    #[serde(default)]
    pub logged_in: bool,
    #[serde(default)]
    pub account_email: Option<String>,
    #[serde(default)]
    pub id_token: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_request_timeout() -> u64 {
    DEFAULT_REQUEST_TIMEOUT
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct TomlConfig {
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Client configuration loaded from a TOML file
#[derive(Debug, Clone)]
pub struct Config {
    /// Backend root, without the `/projects/{id}` suffix
    pub api_base_url: String,

    /// Project (tenant) identifier
    pub project_id: String,

    /// Request timeout in seconds
    pub request_timeout: u64,

    pub logged_in: bool,
    pub account_email: Option<String>,
    pub id_token: Option<String>,

    /// Logging level
    pub log_level: String,
}

impl Config {
    /// Load configuration from TOML file
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The TOML file cannot be read or parsed
    /// - `base_url` or `project_id` is empty
    /// - The session is logged in without an `id_token`
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).context("Failed to read configuration file")?;
        Self::from_toml(&content)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: TomlConfig =
            toml::from_str(content).context("Failed to parse TOML configuration")?;

        if config.api.base_url.trim().is_empty() {
            bail!("api.base_url must not be empty");
        }
        if config.api.project_id.trim().is_empty() {
            bail!("api.project_id must not be empty");
        }
        if config.session.logged_in && config.session.id_token.is_none() {
            bail!("session.id_token is required when session.logged_in = true");
        }

        Ok(Config {
            api_base_url: config.api.base_url.trim_end_matches('/').to_string(),
            project_id: config.api.project_id,
            request_timeout: config.api.request_timeout,
            logged_in: config.session.logged_in,
            account_email: config.session.account_email,
            id_token: config.session.id_token,
            log_level: config.logging.log_level,
        })
    }

    /// Load configuration from environment and config file
    ///
    /// Looks for config.toml in current directory by default
    pub fn from_env() -> Result<Self> {
        let config_path =
            std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
        Self::from_file(&config_path)
            .with_context(|| format!("Failed to load configuration from {}", config_path))
    }

    pub fn settings(&self) -> Settings {
        Settings::new(self.api_base_url.clone(), self.project_id.clone())
    }

    pub fn session(&self) -> StaticSession {
        StaticSession::new(
            self.logged_in,
            self.account_email.clone(),
            self.id_token.clone(),
        )
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_test_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_config() {
        let file = create_test_config(
            r#"
            [api]
            base_url = "https://datashare.example.com/v1/"
            project_id = "proj-1"
            request_timeout = 10

            [session]
            logged_in = true
            account_email = "user@example.com"
            id_token = "token-abc"

            [logging]
            log_level = "debug"
        "#,
        );
        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.api_base_url, "https://datashare.example.com/v1");
        assert_eq!(config.project_id, "proj-1");
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert!(config.logged_in);
        assert_eq!(config.log_level, "debug");
        assert_eq!(
            config.settings().base_url(),
            "https://datashare.example.com/v1/projects/proj-1"
        );
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_toml(
            r#"
            [api]
            base_url = "http://localhost:8080"
            project_id = "p"
        "#,
        )
        .unwrap();
        assert_eq!(config.request_timeout, DEFAULT_REQUEST_TIMEOUT);
        assert!(!config.logged_in);
        assert_eq!(config.account_email, None);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_empty_logging_table_uses_default_level() {
        let config = Config::from_toml(
            r#"
            [api]
            base_url = "http://localhost:8080"
            project_id = "p"

            [logging]
        "#,
        )
        .unwrap();
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_logged_in_requires_token() {
        let result = Config::from_toml(
            r#"
            [api]
            base_url = "http://localhost:8080"
            project_id = "p"

            [session]
            logged_in = true
        "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_project_rejected() {
        let result = Config::from_toml(
            r#"
            [api]
            base_url = "http://localhost:8080"
            project_id = ""
        "#,
        );
        assert!(result.is_err());
    }
}
