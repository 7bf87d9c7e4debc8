//! Application configuration

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application-wide configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Version of the config format
    pub version: u32,
    /// Monitoring window dimensions
    pub window: WindowConfig,
    /// Display refresh interval in milliseconds
    #[serde(default = "default_refresh_interval_ms")]
    pub refresh_interval_ms: u64,
    /// Override for the credential database location
    #[serde(default)]
    pub database_path: Option<PathBuf>,
}

fn default_refresh_interval_ms() -> u64 {
    crate::core::constants::DISPLAY_REFRESH_INTERVAL.as_millis() as u64
}

impl AppConfig {
    /// Load configuration from disk
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(config_path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        // Ensure parent directory exists
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    /// Get the configuration file path
    fn config_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("com", "github.pipemon", "pipemon")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(dirs.config_dir().join("config.json"))
    }

    pub fn refresh_interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.refresh_interval_ms)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            window: WindowConfig::default(),
            refresh_interval_ms: default_refresh_interval_ms(),
            database_path: None,
        }
    }
}

/// Monitoring window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    pub width: i32,
    pub height: i32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_round_trip() {
        let config = AppConfig {
            version: 1,
            window: WindowConfig {
                width: 1024,
                height: 768,
            },
            refresh_interval_ms: 500,
            database_path: Some(PathBuf::from("/tmp/test.db")),
        };

        let json = serde_json::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.window.width, 1024);
        assert_eq!(parsed.refresh_interval_ms, 500);
        assert_eq!(parsed.database_path, Some(PathBuf::from("/tmp/test.db")));
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let parsed: AppConfig =
            serde_json::from_str(r#"{"version": 1, "window": {"width": 800, "height": 600}}"#)
                .unwrap();
        assert_eq!(parsed.refresh_interval_ms, 1000);
        assert_eq!(parsed.database_path, None);
    }
}
