//! Integration tests for the configuration module

use stardeck_cli::config::AppConfig;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_config_full_lifecycle() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("nested").join("config.json");

    let original = AppConfig {
        fps: 45,
        page: "portfolio".to_string(),
        autoplay: true,
    };

    // Save creates missing parent directories.
    original.save_to_file(&config_path)?;
    assert!(config_path.exists());

    let content = fs::read_to_string(&config_path)?;
    assert!(content.contains("portfolio"));
    assert!(content.contains("45"));

    let loaded = AppConfig::load_from_file(&config_path)?;
    assert_eq!(loaded, original);

    Ok(())
}

#[test]
fn test_missing_file_falls_back_to_defaults() {
    // load_or_default never errors just because no file was written yet.
    let config = AppConfig::load_or_default();
    match config {
        Ok(config) => assert!(config.fps > 0),
        Err(err) => panic!("defaults should always load: {}", err),
    }
}
