use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use starrate::{ColorToken, RatingProps, StarSize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Starting value; never written back
    pub value: u32,

    /// Total stars drawn
    pub star_count: u32,

    /// Color token for filled stars ("yellow", "#ffc107", ...)
    pub filled_color: ColorToken,

    /// Color token for empty stars
    pub empty_color: ColorToken,

    /// Size class ("1x".."10x", "lg", ...)
    pub size: StarSize,
}

impl Default for AppConfig {
    fn default() -> Self {
        let props = RatingProps::default();
        Self {
            value: props.value,
            star_count: props.star_count,
            filled_color: props.filled_color,
            empty_color: props.empty_color,
            size: props.size,
        }
    }
}

impl AppConfig {
    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join("starrate");

        Ok(config_dir.join("config.toml"))
    }

    /// Load config from file, or fall back to defaults
    pub fn load() -> Self {
        let path = match Self::config_path() {
            Ok(p) => p,
            Err(e) => {
                tracing::warn!("{}", e);
                return AppConfig::default();
            }
        };

        if !path.exists() {
            return AppConfig::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => return config,
                Err(e) => tracing::warn!("Failed to parse config: {}", e),
            },
            Err(e) => tracing::warn!("Failed to read config: {}", e),
        }

        AppConfig::default()
    }

    /// Save config to file
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_path()?;
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(&path, content)?;
        Ok(path)
    }

    pub fn to_props(&self) -> RatingProps {
        RatingProps {
            value: self.value,
            star_count: self.star_count,
            filled_color: self.filled_color.clone(),
            empty_color: self.empty_color.clone(),
            size: self.size.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_serialization() {
        let config = AppConfig {
            value: 3,
            star_count: 10,
            filled_color: "#ffc107".parse().unwrap(),
            empty_color: "blue".parse().unwrap(),
            size: "2x".parse().unwrap(),
        };

        let serialized = toml::to_string_pretty(&config).unwrap();
        let deserialized: AppConfig = toml::from_str(&serialized).unwrap();

        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: AppConfig = toml::from_str("star_count = 7").unwrap();
        assert_eq!(config.star_count, 7);
        assert_eq!(config.filled_color.as_str(), "yellow");
        assert_eq!(config.empty_color.as_str(), "#bbb");
        assert_eq!(config.size.as_str(), "1x");
    }

    #[test]
    fn test_default_props() {
        assert_eq!(AppConfig::default().to_props(), RatingProps::default());
    }

    #[test]
    fn test_tokens_trimmed_on_load() {
        let config: AppConfig = toml::from_str("filled_color = \" blue \"").unwrap();
        assert_eq!(config.filled_color.as_str(), "blue");
    }

    #[test]
    fn test_invalid_tokens_rejected() {
        assert!(toml::from_str::<AppConfig>("size = \"huge\"").is_err());
        assert!(toml::from_str::<AppConfig>("filled_color = \"#12\"").is_err());
    }
}
