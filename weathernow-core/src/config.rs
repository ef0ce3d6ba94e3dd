use std::{env, fs, path::PathBuf};

use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Environment variable that overrides the stored API key.
pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";

/// Top-level configuration stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// OpenWeather API key.
    ///
    /// Example TOML:
    /// api_key = "..."
    pub api_key: Option<String>,
}

impl Config {
    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weathernow", "weathernow")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn set_api_key(&mut self, api_key: String) {
        self.api_key = Some(api_key);
    }

    /// Resolve the API key: the environment wins over the config file.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.resolve_with_env(env::var(API_KEY_ENV).ok())
    }

    fn resolve_with_env(&self, env_key: Option<String>) -> Option<String> {
        env_key.filter(|key| !key.is_empty()).or_else(|| self.api_key.clone())
    }

    /// Like [`Config::resolve_api_key`], but errors with a configuration hint.
    pub fn require_api_key(&self) -> Result<String> {
        self.resolve_api_key().ok_or_else(|| {
            anyhow!(
                "No API key configured.\n\
                 Hint: run `weathernow configure` and enter your OpenWeather API key,\n\
                 or set the {API_KEY_ENV} environment variable."
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_api_key_errors_when_not_set() {
        let cfg = Config::default();
        let err = cfg.require_api_key().unwrap_err();

        assert!(err.to_string().contains("No API key configured"));
        assert!(err.to_string().contains("Hint: run `weathernow configure`"));
    }

    #[test]
    fn set_api_key_is_resolved() {
        let mut cfg = Config::default();
        cfg.set_api_key("FILE_KEY".into());

        assert_eq!(cfg.resolve_with_env(None).as_deref(), Some("FILE_KEY"));
    }

    #[test]
    fn environment_overrides_config_file() {
        let mut cfg = Config::default();
        cfg.set_api_key("FILE_KEY".into());

        let key = cfg.resolve_with_env(Some("ENV_KEY".to_string()));
        assert_eq!(key.as_deref(), Some("ENV_KEY"));
    }

    #[test]
    fn empty_environment_value_falls_back_to_file() {
        let mut cfg = Config::default();
        cfg.set_api_key("FILE_KEY".into());

        let key = cfg.resolve_with_env(Some(String::new()));
        assert_eq!(key.as_deref(), Some("FILE_KEY"));
    }

    #[test]
    fn config_round_trips_through_toml() {
        let mut cfg = Config::default();
        cfg.set_api_key("SECRET".into());

        let serialized = toml::to_string_pretty(&cfg).expect("config must serialize");
        let parsed: Config = toml::from_str(&serialized).expect("config must parse");

        assert_eq!(parsed.api_key.as_deref(), Some("SECRET"));
    }
}
