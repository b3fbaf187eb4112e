//! Configuration management
//!
//! Explicit configuration object threaded into the tool registry at
//! construction time: API keys, model selection, and runner limits. Nothing
//! here is ambient global state.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Groq API settings for the conversational fallback
    #[serde(default)]
    pub llm: LlmConfig,
    /// Weather lookup settings
    #[serde(default)]
    pub weather: WeatherConfig,
    /// Code-runner settings
    #[serde(default)]
    pub runner: RunnerConfig,
}

/// Fallback model settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Groq API key; without one the fallback is a static help message
    pub api_key: Option<String>,
    /// Chat model to use
    #[serde(default = "default_model")]
    pub model: String,
}

fn default_model() -> String {
    "llama-3.3-70b-versatile".to_string()
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
        }
    }
}

/// Weather lookup settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// OpenWeatherMap API key (optional)
    pub api_key: Option<String>,
}

/// Code-runner settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Python interpreter to invoke
    #[serde(default = "default_interpreter")]
    pub interpreter: String,
    /// Wall-clock timeout for one program, in seconds
    #[serde(default = "default_runner_timeout")]
    pub timeout_secs: u64,
}

fn default_interpreter() -> String {
    "python3".to_string()
}

fn default_runner_timeout() -> u64 {
    10
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            interpreter: default_interpreter(),
            timeout_secs: default_runner_timeout(),
        }
    }
}

impl Config {
    /// Load configuration from the default file, then apply env overrides
    pub fn load() -> Result<Self> {
        let path = config_path()?;
        let mut config = if path.exists() {
            Self::load_from(&path)?
        } else {
            Config::default()
        };
        config.apply_env();
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&contents).context("Failed to parse config file")?;
        Ok(config)
    }

    /// Save configuration to the default file
    pub fn save(&self) -> Result<()> {
        let path = config_path()?;
        let parent = path.parent().context("Config path has no parent")?;
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(&path, contents).context("Failed to write config file")?;
        Ok(())
    }

    /// Environment variables take precedence over file values
    fn apply_env(&mut self) {
        if let Ok(key) = std::env::var("GROQ_API_KEY") {
            if !key.is_empty() {
                self.llm.api_key = Some(key);
            }
        }
        if let Ok(key) = std::env::var("OPENWEATHER_API_KEY") {
            if !key.is_empty() {
                self.weather.api_key = Some(key);
            }
        }
    }
}

/// Get the configuration file path
pub fn config_path() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Failed to resolve user config directory")?;
    Ok(base.join("toolgate").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_usable() {
        let config = Config::default();
        assert_eq!(config.llm.model, "llama-3.3-70b-versatile");
        assert_eq!(config.runner.interpreter, "python3");
        assert_eq!(config.runner.timeout_secs, 10);
        assert!(config.weather.api_key.is_none());
    }

    #[test]
    fn env_overrides_file_values() {
        std::env::set_var("OPENWEATHER_API_KEY", "env-key");
        let mut config = Config {
            weather: WeatherConfig {
                api_key: Some("file-key".to_string()),
            },
            ..Config::default()
        };
        config.apply_env();
        assert_eq!(config.weather.api_key.as_deref(), Some("env-key"));
        std::env::remove_var("OPENWEATHER_API_KEY");
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[weather]\napi_key = \"abc123\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.weather.api_key.as_deref(), Some("abc123"));
        assert_eq!(config.llm.model, "llama-3.3-70b-versatile");
    }
}
