//! Directory configuration
//!
//! Loaded from TOML. Every field has a default, so an empty or missing file
//! yields [`DirectoryConfig::default`].

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Tree layout settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectoryConfig {
    /// Delimiter between path segments
    pub path_separator: char,
    /// Deepest allowed department (root = 1)
    pub max_depth: i16,
    /// Lowercase business identifiers when deriving path segments
    pub lowercase_path_segments: bool,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            path_separator: '/',
            max_depth: 32,
            lowercase_path_segments: true,
        }
    }
}

impl DirectoryConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path`, falling back to defaults when the file is absent
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::warn!(path = %path.display(), "directory config not found, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        // segments are Latin letters; a letter separator would make paths ambiguous
        if self.path_separator.is_ascii_alphabetic() || self.path_separator.is_whitespace() {
            return Err(ConfigError::Invalid(format!(
                "path_separator {:?} cannot be a letter or whitespace",
                self.path_separator
            )));
        }
        if self.max_depth < 1 {
            return Err(ConfigError::Invalid(format!(
                "max_depth must be at least 1, got {}",
                self.max_depth
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DirectoryConfig::default();
        assert_eq!(config.path_separator, '/');
        assert_eq!(config.max_depth, 32);
        assert!(config.lowercase_path_segments);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_toml_partial() {
        let config = DirectoryConfig::from_toml_str("path_separator = \".\"\nmax_depth = 5\n").unwrap();
        assert_eq!(config.path_separator, '.');
        assert_eq!(config.max_depth, 5);
        assert!(config.lowercase_path_segments);
    }

    #[test]
    fn test_from_toml_empty() {
        assert_eq!(DirectoryConfig::from_toml_str("").unwrap(), DirectoryConfig::default());
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(matches!(
            DirectoryConfig::from_toml_str("path_separator = \"x\""),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            DirectoryConfig::from_toml_str("max_depth = 0"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            DirectoryConfig::from_toml_str("max_depth = \"deep\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let config = DirectoryConfig::load("/nonexistent/sase-org/directory.toml").unwrap();
        assert_eq!(config, DirectoryConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("sase-org-config-{}.toml", std::process::id()));
        fs::write(&path, "lowercase_path_segments = false\n").unwrap();

        let config = DirectoryConfig::load(&path).unwrap();
        assert!(!config.lowercase_path_segments);

        fs::remove_file(&path).unwrap();
    }
}
