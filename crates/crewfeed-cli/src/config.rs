use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::args::Cli;

/// Environment override for the API base URL.
pub const API_BASE_ENV: &str = "CREWFEED_API_BASE";

/// Applied when neither flag, file, nor default supplies a timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api_base: Option<String>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Config {
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// A missing file yields the default config; an unreadable or
    /// malformed one is an error.
    pub fn load_from(path: &PathBuf) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        Ok(config)
    }

    pub fn save_to(&self, path: &PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("crewfeed").join("config.toml"))
    }
}

/// Effective settings after every source has been consulted.
#[derive(Debug, Clone)]
pub struct Settings {
    pub api_base: String,
    pub timeout: Duration,
}

impl Settings {
    pub fn resolve(cli: &Cli, config: &Config) -> Self {
        Self::resolve_from(
            cli.api_base.clone(),
            cli.timeout_secs,
            std::env::var(API_BASE_ENV).ok(),
            config,
        )
    }

    /// Resolve the API base URL based on priority:
    /// 1. --api-base flag
    /// 2. CREWFEED_API_BASE environment variable
    /// 3. Config file
    /// 4. Built-in default (the public JSONPlaceholder instance)
    ///
    /// The timeout follows the same order minus the environment step.
    fn resolve_from(
        flag_base: Option<String>,
        flag_timeout: Option<u64>,
        env_base: Option<String>,
        config: &Config,
    ) -> Self {
        let api_base = flag_base
            .or(env_base)
            .or_else(|| config.api_base.clone())
            .unwrap_or_else(|| crewfeed_api::DEFAULT_BASE.to_string());

        let timeout_secs = flag_timeout
            .or(config.timeout_secs)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Settings {
            api_base,
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.api_base.is_none());
        assert!(config.timeout_secs.is_none());
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");

        let config = Config {
            api_base: Some("http://localhost:4100/".to_string()),
            timeout_secs: Some(5),
        };

        config.save_to(&config_path)?;
        assert!(config_path.exists());

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded.api_base.as_deref(), Some("http://localhost:4100/"));
        assert_eq!(loaded.timeout_secs, Some(5));

        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path)?;
        assert!(config.api_base.is_none());

        Ok(())
    }

    #[test]
    fn test_load_rejects_malformed_toml() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "api_base = [not toml")?;

        assert!(Config::load_from(&config_path).is_err());

        Ok(())
    }

    #[test]
    fn test_flag_beats_env_and_file() {
        let config = Config {
            api_base: Some("http://file.example/".to_string()),
            timeout_secs: Some(9),
        };

        let settings = Settings::resolve_from(
            Some("http://flag.example/".to_string()),
            Some(2),
            Some("http://env.example/".to_string()),
            &config,
        );

        assert_eq!(settings.api_base, "http://flag.example/");
        assert_eq!(settings.timeout, Duration::from_secs(2));
    }

    #[test]
    fn test_env_beats_file() {
        let config = Config {
            api_base: Some("http://file.example/".to_string()),
            timeout_secs: None,
        };

        let settings = Settings::resolve_from(
            None,
            None,
            Some("http://env.example/".to_string()),
            &config,
        );

        assert_eq!(settings.api_base, "http://env.example/");
        assert_eq!(settings.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn test_everything_unset_falls_back_to_defaults() {
        let settings = Settings::resolve_from(None, None, None, &Config::default());

        assert_eq!(settings.api_base, crewfeed_api::DEFAULT_BASE);
        assert_eq!(settings.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }
}
