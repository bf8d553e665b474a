//! Config loading, validation, and serialization.

use super::model::Config;
use crate::error::{PadError, Result};
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            PadError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load config if the file exists, otherwise use defaults.
    ///
    /// A present but invalid file is still an error.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty file deserializes as null rather than an empty mapping.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| PadError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self)
            .map_err(|e| PadError::UserError(format!("failed to serialize config to YAML: {}", e)))
    }

    /// Validate config values.
    ///
    /// Every `default_tags` entry must be a non-empty path with no empty
    /// segments (`a/b` is fine, `a//b` and `/` are not).
    pub fn validate(&self) -> Result<()> {
        for tag in &self.default_tags {
            let trimmed = tag.trim().trim_matches('/');
            if trimmed.is_empty() || trimmed.split('/').any(|seg| seg.trim().is_empty()) {
                return Err(PadError::UserError(format!(
                    "config validation failed: default_tags entry '{}' is not a valid tag path",
                    tag
                )));
            }
        }

        Ok(())
    }
}
