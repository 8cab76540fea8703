use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::Path;

use crate::types::Mark;

pub const CONFIG_FILE_NAME: &str = "tictactoe_config.yaml";

pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct GameConfig {
    pub human_mark: Mark,
}

impl Validate for GameConfig {
    fn validate(&self) -> Result<(), String> {
        if self.human_mark == Mark::Empty {
            return Err("human_mark must be X or O".to_string());
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            human_mark: Mark::X,
        }
    }
}

pub fn parse_config(content: &str) -> Result<GameConfig, String> {
    let config: GameConfig = serde_yaml_ng::from_str(content)
        .map_err(|e| format!("Failed to deserialize config: {}", e))?;
    config
        .validate()
        .map_err(|e| format!("Config validation error: {}", e))?;
    Ok(config)
}

pub fn load_config(path: &Path) -> Result<GameConfig, String> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(GameConfig::default()),
        Err(err) => return Err(format!("Failed to read config file: {}", err)),
    };
    parse_config(&content)
}

pub fn save_config(path: &Path, config: &GameConfig) -> Result<(), String> {
    config
        .validate()
        .map_err(|e| format!("Config validation error: {}", e))?;
    let content = serde_yaml_ng::to_string(config)
        .map_err(|e| format!("Failed to serialize config: {}", e))?;
    std::fs::write(path, content).map_err(|e| format!("Failed to write config file: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.human_mark, Mark::X);
    }

    #[test]
    fn test_config_yaml_round_trip() {
        let config = GameConfig {
            human_mark: Mark::O,
        };
        let content = serde_yaml_ng::to_string(&config).unwrap();
        let parsed = parse_config(&content).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_parse_rejects_empty_mark() {
        assert!(parse_config("human_mark: Empty\n").is_err());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_config("human_mark: [1, 2]\n").is_err());
    }

    #[test]
    fn test_load_missing_file_returns_default() {
        let path = std::env::temp_dir().join("tictactoe_engine_missing_config_test.yaml");
        let _ = std::fs::remove_file(&path);
        let config = load_config(&path).unwrap();
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let path = std::env::temp_dir().join("tictactoe_engine_config_round_trip_test.yaml");
        let config = GameConfig {
            human_mark: Mark::O,
        };
        save_config(&path, &config).unwrap();
        let loaded = load_config(&path).unwrap();
        assert_eq!(loaded, config);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_save_rejects_invalid_config() {
        let path = std::env::temp_dir().join("tictactoe_engine_invalid_config_test.yaml");
        let config = GameConfig {
            human_mark: Mark::Empty,
        };
        assert!(save_config(&path, &config).is_err());
        assert!(!path.exists());
    }
}
