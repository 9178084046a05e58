//! Workspace value settings
//!
//! This module provides the production source of substitution values: a
//! TOML settings file with a `[values]` table. Hosts that keep their value
//! entries elsewhere can implement [`ValueSource`] directly instead.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::values::{ValueMap, ValueSource};

/// Errors that can occur when loading or parsing settings
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to read settings file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse settings TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Workspace settings carrying the values used for substitution
#[derive(Debug, Clone, Default)]
pub struct ValueSettings {
    /// Optional name for the settings set
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    /// Value entries: name -> raw value
    pub values: Option<ValueMap>,
}

/// TOML structure for deserializing settings
#[derive(Deserialize)]
struct TomlSettings {
    metadata: Option<TomlMetadata>,
    values: Option<ValueMap>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

impl ValueSettings {
    /// Load settings from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load settings from a TOML string
    pub fn from_str(content: &str) -> Result<Self, SettingsError> {
        let parsed: TomlSettings = toml::from_str(content)?;

        Ok(ValueSettings {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            values: parsed.values,
        })
    }
}

impl ValueSource for ValueSettings {
    fn values(&self) -> Option<&ValueMap> {
        self.values.as_ref()
    }
}
