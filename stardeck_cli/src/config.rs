//! Application configuration.
//!
//! A small optional JSON file at `~/.stardeck/config.json` overrides the
//! defaults; a missing file is silently fine and CLI flags win over both.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use stardeck_core::utils::error::{StardeckError, StardeckResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Target frame rate for the animation loop.
    pub fps: u16,
    /// Default page when none is given on the command line.
    pub page: String,
    /// Start the deck with autoplay running.
    pub autoplay: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            fps: 60,
            page: "deck".to_string(),
            autoplay: false,
        }
    }
}

impl AppConfig {
    /// Where the config file lives, if a home directory exists.
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".stardeck").join("config.json"))
    }

    pub fn load_from_file(path: &Path) -> StardeckResult<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        if config.fps == 0 {
            return Err(StardeckError::Config(
                "fps must be greater than zero".to_string(),
            ));
        }
        Ok(config)
    }

    pub fn save_to_file(&self, path: &Path) -> StardeckResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Load the user's config, falling back to defaults when the file does
    /// not exist. A file that exists but fails to parse is an error — silent
    /// misconfiguration is worse than a message.
    pub fn load_or_default() -> StardeckResult<Self> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from_file(&path),
            _ => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.fps, 60);
        assert_eq!(config.page, "deck");
        assert!(!config.autoplay);
    }

    #[test]
    fn test_round_trip() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::TempDir::new()?;
        let path = dir.path().join("config.json");

        let original = AppConfig {
            fps: 30,
            page: "portfolio".to_string(),
            autoplay: true,
        };
        original.save_to_file(&path)?;

        let loaded = AppConfig::load_from_file(&path)?;
        assert_eq!(loaded, original);
        Ok(())
    }

    #[test]
    fn test_zero_fps_rejected() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::TempDir::new()?;
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"fps": 0, "page": "deck", "autoplay": false}"#)?;
        assert!(AppConfig::load_from_file(&path).is_err());
        Ok(())
    }

    #[test]
    fn test_garbage_file_is_an_error() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::TempDir::new()?;
        let path = dir.path().join("config.json");
        fs::write(&path, "not json")?;
        assert!(AppConfig::load_from_file(&path).is_err());
        Ok(())
    }
}
