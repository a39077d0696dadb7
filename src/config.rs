use std::env;
use std::fs;
use std::path::Path;
use serde::{Deserialize, Serialize};
use anyhow::{Result, Context};
use log::warn;

/// Main configuration structure for quest_forge
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Chat-completion provider configuration
    #[serde(default)]
    pub provider: ProviderConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Scheme and host of the API, without the request path
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Model to use
    #[serde(default = "default_model")]
    pub model: String,

    /// Environment variable holding the bearer credential
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

// Default value functions
fn default_base_url() -> String { "https://api.intelligence.io.solutions".to_string() }
fn default_model() -> String { "moonshotai/Kimi-K2-Thinking".to_string() }
fn default_api_key_env() -> String { "API_KEY".to_string() }

impl Default for ProviderConfig {
    fn default() -> Self {
        ProviderConfig {
            base_url: default_base_url(),
            model: default_model(),
            api_key_env: default_api_key_env(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))
    }

    /// Load configuration from command line argument or default locations
    pub fn load(config_path: &Option<String>) -> Result<Self> {
        if let Some(path) = config_path {
            let expanded_path = shellexpand::tilde(path);
            return Self::from_file(expanded_path.as_ref());
        }

        let default_paths = [
            "quest_forge.toml",
            ".quest_forge.toml",
            "~/.config/quest_forge/config.toml",
        ];

        for path in default_paths {
            let expanded_path = shellexpand::tilde(path);
            if Path::new(expanded_path.as_ref()).exists() {
                match Self::from_file(expanded_path.as_ref()) {
                    Ok(config) => return Ok(config),
                    Err(e) => warn!("Failed to load config from {}: {:#}", path, e),
                }
            }
        }

        Ok(Self::default())
    }

    /// Resolve the bearer credential. Unset and empty values both yield `None`.
    pub fn api_key(&self) -> Option<String> {
        env::var(&self.provider.api_key_env)
            .ok()
            .filter(|key| !key.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.provider.base_url, "https://api.intelligence.io.solutions");
        assert_eq!(config.provider.model, "moonshotai/Kimi-K2-Thinking");
        assert_eq!(config.provider.api_key_env, "API_KEY");
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[provider]\nmodel = \"deepseek/deepseek-r1\"").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.provider.model, "deepseek/deepseek-r1");
        assert_eq!(config.provider.base_url, "https://api.intelligence.io.solutions");
    }

    #[test]
    fn test_explicit_path_errors_are_reported() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[provider\nmodel = 3").unwrap();

        let path = file.path().to_string_lossy().to_string();
        let err = Config::load(&Some(path)).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    #[serial]
    fn test_api_key_from_named_variable() {
        let mut config = Config::default();
        config.provider.api_key_env = "QUEST_FORGE_TEST_KEY".to_string();

        unsafe { env::set_var("QUEST_FORGE_TEST_KEY", "secret") };
        assert_eq!(config.api_key().as_deref(), Some("secret"));

        unsafe { env::set_var("QUEST_FORGE_TEST_KEY", "") };
        assert_eq!(config.api_key(), None);

        unsafe { env::remove_var("QUEST_FORGE_TEST_KEY") };
        assert_eq!(config.api_key(), None);
    }
}
