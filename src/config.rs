use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::error::ConfigError;
use crate::numeric::arithmetic::{DEFAULT_DIVISION_SCALE, MAX_SCALE};

/// Settings for a [`Calculator`](crate::Calculator).
///
/// ```toml
/// division_scale = 2
/// max_depth = 1000
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalculatorConfig {
    /// Fractional digits kept by division
    pub division_scale: u32,
    /// Upper bound on the active history; `None` keeps everything
    pub max_depth: Option<usize>,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            division_scale: DEFAULT_DIVISION_SCALE,
            max_depth: None,
        }
    }
}

impl CalculatorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_division_scale(mut self, division_scale: u32) -> Self {
        self.division_scale = division_scale;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Parse and validate config from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        info!(path = %path.display(), ?config, "loaded calculator config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.division_scale > MAX_SCALE {
            return Err(ConfigError::Invalid(format!(
                "division_scale must be at most {}, got {}",
                MAX_SCALE, self.division_scale
            )));
        }
        if self.max_depth == Some(0) {
            return Err(ConfigError::Invalid("max_depth must be at least 1".to_string()));
        }
        Ok(())
    }
}
