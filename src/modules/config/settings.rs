use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::{
    DEFAULT_GOLD_PRICE_PER_GRAM, LOG_FILE, MAX_LOGIN_ATTEMPTS, PASSWORD_HASH_ITERATIONS,
    USERS_FILE,
};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {}: {}", .path.display(), .source)]
    Read { path: PathBuf, source: io::Error },
    #[error("Invalid config {}: {}", .path.display(), .source)]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Invalid config value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Application settings, loaded from an optional JSON file.
/// Any field missing from the file takes its default.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub data_file: PathBuf,
    pub log_file: PathBuf,
    pub log_level: String,
    pub gold_price_per_gram: f64,
    pub max_login_attempts: u32,
    pub password_hash_iterations: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(USERS_FILE),
            log_file: PathBuf::from(LOG_FILE),
            log_level: "info".to_string(),
            gold_price_per_gram: DEFAULT_GOLD_PRICE_PER_GRAM,
            max_login_attempts: MAX_LOGIN_ATTEMPTS,
            password_hash_iterations: PASSWORD_HASH_ITERATIONS,
        }
    }
}

impl AppConfig {
    /// Load configuration; no path or a missing file yields the defaults
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(path) => path,
            None => return Ok(Self::default()),
        };

        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("Config file {} not found, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: e,
                })
            }
        };

        let config: Self = serde_json::from_str(&contents).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the rest of the application cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.gold_price_per_gram.is_finite() || self.gold_price_per_gram < 0.0 {
            return Err(ConfigError::Invalid {
                field: "gold_price_per_gram",
                reason: format!("{} is not a non-negative number", self.gold_price_per_gram),
            });
        }
        if self.max_login_attempts == 0 {
            return Err(ConfigError::Invalid {
                field: "max_login_attempts",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.password_hash_iterations == 0 {
            return Err(ConfigError::Invalid {
                field: "password_hash_iterations",
                reason: "must be at least 1".to_string(),
            });
        }
        self.level_filter()?;
        Ok(())
    }

    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        self.log_level
            .parse::<LevelFilter>()
            .map_err(|_| ConfigError::Invalid {
                field: "log_level",
                reason: format!("unknown level '{}'", self.log_level),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = AppConfig::load(None).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.data_file, PathBuf::from("users_list.json"));
        assert_eq!(config.max_login_attempts, 3);
        assert_eq!(config.gold_price_per_gram, 5400.0);
        assert_eq!(config.level_filter().unwrap(), LevelFilter::Info);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = AppConfig::load(Some(&dir.path().join("absent.json"))).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{ "gold_price_per_gram": 6000.0, "data_file": "data/accounts.json" }"#,
        )
        .unwrap();

        let config = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(config.gold_price_per_gram, 6000.0);
        assert_eq!(config.data_file, PathBuf::from("data/accounts.json"));
        assert_eq!(config.max_login_attempts, 3);
        assert_eq!(config.log_file, PathBuf::from("investwise.log"));
    }

    #[test]
    fn test_invalid_files_are_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");

        fs::write(&path, "not json").unwrap();
        assert!(matches!(
            AppConfig::load(Some(&path)),
            Err(ConfigError::Parse { .. })
        ));

        fs::write(&path, r#"{ "max_login_attempts": 0 }"#).unwrap();
        assert!(matches!(
            AppConfig::load(Some(&path)),
            Err(ConfigError::Invalid {
                field: "max_login_attempts",
                ..
            })
        ));

        fs::write(&path, r#"{ "gold_price_per_gram": -5.0 }"#).unwrap();
        assert!(AppConfig::load(Some(&path)).is_err());

        fs::write(&path, r#"{ "log_level": "chatty" }"#).unwrap();
        assert!(AppConfig::load(Some(&path)).is_err());
    }
}
