use crate::constants::{DEFAULT_API_PATH, DEFAULT_LOG_LEVEL, DEFAULT_SERVER_URL};
use crate::errors::{ChatError, ChatResult};
use serde::{Deserialize, Serialize};
use std::{env, fs, path::Path, path::PathBuf};

const LOG_LEVELS: [&str; 6] = ["error", "warn", "info", "debug", "trace", "off"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server_url: String,
    pub api_path: String,
    pub log_level: String,
    pub log_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            api_path: DEFAULT_API_PATH.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_dir: dirs::cache_dir()
                .map(|dir| dir.join("chatpane"))
                .unwrap_or_else(|| PathBuf::from("logs")),
        }
    }
}

impl Config {
    /// Full URL the widget posts questions to.
    pub fn endpoint_url(&self) -> String {
        format!("{}{}", self.server_url.trim_end_matches('/'), self.api_path)
    }
}

/// Loads `~/.config/chatpane/config.json` when present, then applies `.env`
/// and `CHATPANE_*` environment overrides.
pub fn load_config() -> ChatResult<Config> {
    dotenv::dotenv().ok();

    let config = match get_config_path() {
        Some(path) if path.exists() => load_from(&path)?,
        _ => Config::default(),
    };

    let config = apply_overrides(config, |key| env::var(key).ok());
    validate_config(&config)?;
    Ok(config)
}

pub fn load_from(path: &Path) -> ChatResult<Config> {
    let config_str = fs::read_to_string(path)
        .map_err(|e| ChatError::config_error(format!("Failed to read config file: {}", e)))?;

    serde_json::from_str(&config_str)
        .map_err(|e| ChatError::config_error(format!("Failed to parse config: {}", e)))
}

fn get_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("chatpane").join("config.json"))
}

pub fn apply_overrides<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup("CHATPANE_SERVER_URL") {
        config.server_url = url;
    }
    if let Some(path) = lookup("CHATPANE_API_PATH") {
        config.api_path = path;
    }
    if let Some(level) = lookup("CHATPANE_LOG_LEVEL") {
        config.log_level = level;
    }
    config
}

pub fn validate_config(config: &Config) -> ChatResult<()> {
    let url = reqwest::Url::parse(&config.server_url)
        .map_err(|e| ChatError::config_error(format!("Invalid server_url: {}", e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ChatError::config_error(format!(
            "server_url must use http or https, got {}",
            url.scheme()
        )));
    }

    if !config.api_path.starts_with('/') {
        return Err(ChatError::config_error("api_path must start with '/'"));
    }

    if !LOG_LEVELS.contains(&config.log_level.to_lowercase().as_str()) {
        return Err(ChatError::config_error(format!(
            "Unknown log_level: {}",
            config.log_level
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::tempdir;

    #[test]
    fn test_validate_config_valid() {
        let config = Config::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_config_invalid_scheme() {
        let mut config = Config::default();
        config.server_url = "ftp://example.com".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_config_invalid_api_path() {
        let mut config = Config::default();
        config.api_path = "api/chat".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_config_invalid_log_level() {
        let mut config = Config::default();
        config.log_level = "chatty".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_endpoint_url_joins_without_double_slash() {
        let mut config = Config::default();
        config.server_url = "http://localhost:8080/".to_string();
        assert_eq!(config.endpoint_url(), "http://localhost:8080/api/chat");
    }

    #[test]
    fn test_overrides_replace_file_values() {
        let vars: HashMap<&str, &str> = [
            ("CHATPANE_SERVER_URL", "https://chat.example.org"),
            ("CHATPANE_LOG_LEVEL", "debug"),
        ]
        .into_iter()
        .collect();

        let config = apply_overrides(Config::default(), |key| {
            vars.get(key).map(|v| v.to_string())
        });

        assert_eq!(config.server_url, "https://chat.example.org");
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.api_path, DEFAULT_API_PATH);
    }

    #[test]
    fn test_load_from_fills_missing_fields_with_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "server_url": "http://10.0.0.2:5000" }"#).unwrap();

        let config = load_from(&path).unwrap();
        assert_eq!(config.server_url, "http://10.0.0.2:5000");
        assert_eq!(config.api_path, DEFAULT_API_PATH);
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_load_from_rejects_malformed_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(load_from(&path), Err(ChatError::Config(_))));
    }
}
