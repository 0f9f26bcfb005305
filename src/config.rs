use crate::error::{BoardViewError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;

/// Settings for the board controller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Label given to groups created with "+ Add a group"
    pub new_group_label: String,
    /// Color tag given to new groups
    pub new_group_color: String,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            new_group_label: "New group".to_string(),
            new_group_color: "#cccccc".to_string(),
        }
    }
}

impl ControllerConfig {
    /// Parses a TOML document; missing keys keep their defaults
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| BoardViewError::ConfigError(e.to_string()))
    }

    /// Loads the configuration from a TOML file
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref()).await?;
        Self::from_toml_str(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = ControllerConfig::default();
        assert_eq!(config.new_group_label, "New group");
        assert_eq!(config.new_group_color, "#cccccc");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = ControllerConfig::from_toml_str("new_group_label = \"Untitled\"").unwrap();
        assert_eq!(config.new_group_label, "Untitled");
        assert_eq!(config.new_group_color, "#cccccc");

        assert_eq!(ControllerConfig::from_toml_str("").unwrap(), ControllerConfig::default());
    }

    #[test]
    fn test_malformed_toml() {
        assert!(matches!(
            ControllerConfig::from_toml_str("new_group_label = ["),
            Err(BoardViewError::ConfigError(_))
        ));
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        tokio::fs::write(&path, "new_group_color = \"propColorBlue\"\n")
            .await
            .unwrap();

        let config = ControllerConfig::load(&path).await.unwrap();
        assert_eq!(config.new_group_color, "propColorBlue");
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let result = ControllerConfig::load(temp_dir.path().join("absent.toml")).await;
        assert!(matches!(result, Err(BoardViewError::IoError(_))));
    }
}
