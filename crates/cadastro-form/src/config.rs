// File: src/config.rs
// Purpose: Configuration parsing from cadastro.toml

use anyhow::{Context, Result};
use cadastro_validation::PasswordPolicy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub validation: ValidationConfig,
}

/// Strictness of the registration rules
///
/// The loose preset matches the first version of the form, the strict one
/// (default) the revised version.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ValidationConfig {
    /// Minimum trimmed name length in characters, 0 disables the check
    #[serde(default = "default_min_name_length", alias = "min_name_length")]
    pub min_name_length: usize,

    /// Require the phone to be exactly `(DD) DDDDD-DDDD`
    #[serde(default = "default_true", alias = "strict_phone_format")]
    pub strict_phone_format: bool,

    /// Require uppercase, lowercase and digit in the password
    #[serde(default = "default_true", alias = "strict_password_complexity")]
    pub strict_password_complexity: bool,
}

fn default_min_name_length() -> usize {
    3
}

fn default_true() -> bool {
    true
}

impl ValidationConfig {
    pub fn loose() -> Self {
        Self {
            min_name_length: 0,
            strict_phone_format: false,
            strict_password_complexity: false,
        }
    }

    pub fn strict() -> Self {
        Self {
            min_name_length: default_min_name_length(),
            strict_phone_format: true,
            strict_password_complexity: true,
        }
    }

    pub fn password_policy(&self) -> PasswordPolicy {
        if self.strict_password_complexity {
            PasswordPolicy::Complex
        } else {
            PasswordPolicy::Basic
        }
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self::strict()
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // Missing file means defaults
        if !path.exists() {
            tracing::debug!(?path, "config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        tracing::debug!(?path, validation = ?config.validation, "loaded config");
        Ok(config)
    }

    /// Load configuration from default path (./cadastro.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("cadastro.toml")
    }
}
