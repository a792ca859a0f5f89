//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// User configuration for the TUI
#[allow(dead_code)]
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PortalConfig {
    /// Portal backend base URL
    pub base_url: Option<String>,
    /// Path to the exported session cookie file
    pub cookie_file: Option<PathBuf>,
    /// Animate group reveal/collapse transitions
    pub animations: Option<bool>,
}

#[allow(dead_code)]
impl PortalConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "gluu", "portal-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: PortalConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    /// Whether reveal transitions should animate (default: yes)
    pub fn animations_enabled(&self) -> bool {
        self.animations.unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PortalConfig::default();
        assert!(config.base_url.is_none());
        assert!(config.cookie_file.is_none());
        assert!(config.animations.is_none());
        assert!(config.animations_enabled());
    }

    #[test]
    fn test_serialization() {
        let config = PortalConfig {
            base_url: Some("https://portal.example.com".to_string()),
            cookie_file: Some(PathBuf::from("/tmp/cookies.json")),
            animations: Some(false),
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: PortalConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(
            parsed.base_url,
            Some("https://portal.example.com".to_string())
        );
        assert_eq!(parsed.cookie_file, Some(PathBuf::from("/tmp/cookies.json")));
        assert_eq!(parsed.animations, Some(false));
        assert!(!parsed.animations_enabled());
    }

    #[test]
    fn test_partial_serialization() {
        let config = PortalConfig {
            base_url: Some("http://localhost:8000".to_string()),
            ..Default::default()
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: PortalConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.base_url, Some("http://localhost:8000".to_string()));
        assert!(parsed.cookie_file.is_none());
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let json = "{}";
        let parsed: PortalConfig = serde_json::from_str(json).unwrap();
        assert!(parsed.base_url.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"base_url": "http://localhost:8000", "unknown_field": "value"}"#;
        let parsed: PortalConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.base_url, Some("http://localhost:8000".to_string()));
    }

    #[test]
    fn test_config_path_returns_option() {
        // Just test that the function doesn't panic
        let _path = PortalConfig::config_path();
    }

    #[test]
    fn test_load_returns_default_when_no_file() {
        let result = PortalConfig::load();
        assert!(result.is_ok());
    }

    #[test]
    fn test_config_clone() {
        let config = PortalConfig {
            base_url: Some("http://localhost:8000".to_string()),
            ..Default::default()
        };
        let cloned = config.clone();
        assert_eq!(config.base_url, cloned.base_url);
    }
}
