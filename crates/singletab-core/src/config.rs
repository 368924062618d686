//! Browser configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use singletab_navigation::DEFAULT_SEARCH_TEMPLATE;

use crate::Result;

/// Environment variable pointing at an alternative config file
pub const CONFIG_ENV: &str = "SINGLE_TAB_CONFIG";

const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 13_0) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.0 Safari/605.1.15";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// First page loaded and the seed of the session history
    pub homepage: String,
    /// Search engine URL template
    pub search_engine: String,
    /// User agent presented by the content view
    pub user_agent: String,
    pub window: WindowConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f64,
    pub height: f64,
    pub min_width: f64,
    pub min_height: f64,
    /// Blurred, see-through window background
    pub translucent: bool,
    /// Start pinned above other windows
    pub always_on_top: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            homepage: "https://www.google.com".to_string(),
            search_engine: DEFAULT_SEARCH_TEMPLATE.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            window: WindowConfig::default(),
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 700.0,
            min_width: 800.0,
            min_height: 600.0,
            translucent: true,
            always_on_top: false,
        }
    }
}

impl Config {
    /// Load from `$SINGLE_TAB_CONFIG`, or `config.json` in the data directory
    pub fn load() -> Result<Self> {
        let path = std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(Self::default_path);
        Self::load_from(&path)
    }

    /// Load from `path`; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)?;
        let config = Self::from_json(&raw)?;

        tracing::info!(path = %path.display(), "Loaded configuration");

        Ok(config)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if !self.search_engine.contains("%s") {
            return Err(crate::CoreError::Config(format!(
                "search_engine must contain %s: {}",
                self.search_engine
            )));
        }
        Ok(())
    }

    pub fn default_path() -> PathBuf {
        Self::data_dir().join("config.json")
    }

    pub fn data_dir() -> PathBuf {
        dirs::data_local_dir()
            .map(|d| d.join("single-tab"))
            .unwrap_or_else(|| PathBuf::from(".single-tab"))
    }
}

mod dirs {
    use std::path::PathBuf;

    pub fn data_local_dir() -> Option<PathBuf> {
        #[cfg(target_os = "windows")]
        {
            std::env::var("LOCALAPPDATA").ok().map(PathBuf::from)
        }
        #[cfg(target_os = "macos")]
        {
            std::env::var("HOME")
                .ok()
                .map(|h| PathBuf::from(h).join("Library/Application Support"))
        }
        #[cfg(target_os = "linux")]
        {
            std::env::var("XDG_DATA_HOME")
                .ok()
                .map(PathBuf::from)
                .or_else(|| {
                    std::env::var("HOME")
                        .ok()
                        .map(|h| PathBuf::from(h).join(".local/share"))
                })
        }
        #[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
        {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CoreError;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.homepage, "https://www.google.com");
        assert_eq!(config.search_engine, "https://www.google.com/search?q=%s");
        assert!(config.user_agent.contains("Safari"));
        assert_eq!(config.window.min_width, 800.0);
        assert_eq!(config.window.min_height, 600.0);
        assert!(config.window.translucent);
        assert!(!config.window.always_on_top);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = Config::from_json(
            r#"{ "homepage": "https://example.com", "window": { "always_on_top": true } }"#,
        )
        .unwrap();

        assert_eq!(config.homepage, "https://example.com");
        assert_eq!(config.search_engine, DEFAULT_SEARCH_TEMPLATE);
        assert!(config.window.always_on_top);
        assert_eq!(config.window.width, 1000.0);
    }

    #[test]
    fn test_invalid_search_template_rejected() {
        let result = Config::from_json(r#"{ "search_engine": "https://example.com/search" }"#);
        assert!(matches!(result, Err(CoreError::Config(_))));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let result = Config::from_json("{ homepage: ");
        assert!(matches!(result, Err(CoreError::Serialization(_))));
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let path = std::env::temp_dir().join("single-tab-test-missing/config.json");
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = std::env::temp_dir().join(format!("single-tab-test-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.json");
        std::fs::write(&path, r#"{ "user_agent": "single-tab/1.0" }"#).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.user_agent, "single-tab/1.0");
        assert_eq!(config.homepage, "https://www.google.com");

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
