use crate::constants::{env_vars, provider};
use crate::error::AppError;
use crate::ui::components::abbreviations::{TeamAlias, resolve_alias};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::warn;

pub mod paths;
pub mod user_prompts;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Key holding the provider API key
pub const API_KEY: &str = "API_KEY";
/// Key holding the timezone sent with fixture requests
pub const TIMEZONE: &str = "TIMEZONE";
/// Key holding the favourite team alias code
pub const FAV_TEAM: &str = "FAVTEAM";

/// Configuration for one invocation of the application.
///
/// Loaded once at startup and passed by reference to every command and
/// fetch function. Nothing in the crate mutates it after loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Opaque provider API key.
    pub api_key: String,
    /// IANA timezone name passed to the provider, e.g. "Europe/London". May be empty.
    pub timezone: String,
    /// Favourite team alias code as written by the user, e.g. "WOL".
    pub fav_team: Option<String>,
    /// Provider base URL without the `/v3` path.
    pub api_base_url: String,
    /// HTTP timeout in seconds for API requests.
    pub http_timeout_seconds: u64,
    /// Path to the log file. If not specified, logs go to the default location.
    pub log_file_path: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_key: String::new(),
            timezone: String::new(),
            fav_team: None,
            api_base_url: provider::DEFAULT_BASE_URL.to_string(),
            http_timeout_seconds: crate::constants::DEFAULT_HTTP_TIMEOUT_SECONDS,
            log_file_path: None,
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// Environment variables can override config file values.
    ///
    /// # Environment Variables
    /// - `PREMCLI_API_KEY`, `PREMCLI_TIMEZONE`, `PREMCLI_FAVTEAM` - Override file keys
    /// - `PREMCLI_API_BASE_URL` - Override provider base URL
    /// - `PREMCLI_HTTP_TIMEOUT` - Override HTTP timeout in seconds (default: 30)
    /// - `PREMCLI_LOG_FILE` - Override log file path
    ///
    /// # Returns
    /// * `Ok(Config)` - Successfully loaded and validated configuration
    /// * `Err(AppError::ConfigMissing)` - No config file; the user should run `premcli config`
    /// * `Err(AppError)` - Malformed file or failed validation
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();
        let mut config = Self::load_from_path(&config_path).await?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a custom file path without applying
    /// environment overrides or validation.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        if !Path::new(path).exists() {
            return Err(AppError::ConfigMissing {
                path: path.to_string(),
            });
        }

        let content = fs::read_to_string(path).await?;
        Self::parse(&content)
    }

    /// Parses the `KEY=VALUE` config format.
    ///
    /// Only `API_KEY`, `TIMEZONE` and `FAVTEAM` are recognized. A line without
    /// `=` or with any other key fails the whole file. Blank lines are skipped.
    pub fn parse(content: &str) -> Result<Self, AppError> {
        let mut config = Config::default();

        for line in content.lines() {
            if line.trim().is_empty() {
                continue;
            }

            let (key, value) = line.split_once('=').ok_or_else(|| AppError::ConfigInvalidLine {
                line: line.to_string(),
            })?;

            match key {
                API_KEY => config.api_key = value.to_string(),
                TIMEZONE => config.timezone = value.to_string(),
                FAV_TEAM => {
                    config.fav_team = Some(value.trim().to_string()).filter(|v| !v.is_empty())
                }
                _ => {
                    return Err(AppError::ConfigUnknownKey {
                        key: key.to_string(),
                    });
                }
            }
        }

        Ok(config)
    }

    /// Renders the config file content written by [`Config::save_to_path`].
    pub fn to_file_content(&self) -> String {
        format!(
            "{API_KEY}={}\n{TIMEZONE}={}\n{FAV_TEAM}={}\n",
            self.api_key,
            self.timezone,
            self.fav_team.as_deref().unwrap_or_default()
        )
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(api_key) = std::env::var(env_vars::API_KEY) {
            self.api_key = api_key;
        }

        if let Ok(timezone) = std::env::var(env_vars::TIMEZONE) {
            self.timezone = timezone;
        }

        if let Ok(fav_team) = std::env::var(env_vars::FAV_TEAM) {
            self.fav_team = Some(fav_team).filter(|v| !v.is_empty());
        }

        if let Ok(base_url) = std::env::var(env_vars::API_BASE_URL) {
            self.api_base_url = base_url.trim_end_matches('/').to_string();
        }

        if let Some(timeout) = std::env::var(env_vars::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            self.http_timeout_seconds = timeout;
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(
            &self.api_key,
            &self.api_base_url,
            self.http_timeout_seconds,
            &self.log_file_path,
        )
    }

    /// Resolves the configured favourite team alias.
    ///
    /// Returns `None` when no favourite is configured or the code is unknown;
    /// an unresolved favourite simply never highlights anything.
    pub fn favourite_team(&self) -> Option<&'static TeamAlias> {
        let code = self.fav_team.as_deref()?;
        let alias = resolve_alias(code);
        if alias.is_none() {
            warn!("Favourite team code '{code}' is not a known team alias");
        }
        alias
    }

    /// Saves the three file keys to a custom path, creating the parent directory.
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }

        let mut file = fs::File::create(path).await?;
        file.write_all(self.to_file_content().as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Formats the current configuration for display with the API key masked.
    pub fn describe(&self, config_path: &str) -> String {
        let log_dir = get_log_dir_path();
        let separator = "────────────────────────────────────";
        let fav_team = match (self.fav_team.as_deref(), self.favourite_team()) {
            (Some(code), Some(alias)) => format!("{code} ({})", alias.name),
            (Some(code), None) => format!("{code} (unknown team)"),
            (None, _) => "(not set)".to_string(),
        };
        let log_file = self
            .log_file_path
            .clone()
            .unwrap_or_else(|| format!("{log_dir}/premcli.log (Default location)"));

        [
            "Current Configuration".to_string(),
            separator.to_string(),
            "Config Location:".to_string(),
            config_path.to_string(),
            separator.to_string(),
            "API Key:".to_string(),
            mask_api_key(&self.api_key),
            separator.to_string(),
            "Timezone:".to_string(),
            if self.timezone.is_empty() {
                "(provider default)".to_string()
            } else {
                self.timezone.clone()
            },
            separator.to_string(),
            "Favourite Team:".to_string(),
            fav_team,
            separator.to_string(),
            "Log File Location:".to_string(),
            log_file,
        ]
        .join("\n")
    }
}

/// Keeps the last four characters of an API key visible.
fn mask_api_key(api_key: &str) -> String {
    let visible: String = api_key
        .chars()
        .rev()
        .take(4)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    if api_key.chars().count() <= 4 {
        "*".repeat(api_key.chars().count())
    } else {
        format!("{}{visible}", "*".repeat(api_key.chars().count() - 4))
    }
}
