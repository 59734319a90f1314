//! File helpers for lookup tables that can be overridden from disk.

use std::fs;
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::{Result, WardrobeError};

/// Load/save support for table-like configuration values.
///
/// Implementors only need serde; the format is picked from the file extension.
pub trait TableFile: Serialize + DeserializeOwned {
    /// Load from a TOML string
    fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load from a TOML file
    fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load from a JSON string
    fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load from a JSON file
    fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Auto-detect file format and load
    fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_ref = path.as_ref();
        match path_ref.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_file(path_ref),
            Some("json") => Self::from_json_file(path_ref),
            _ => Err(WardrobeError::UnsupportedFileFormat),
        }
    }

    /// Convert to a TOML string
    fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Save to a TOML file
    fn to_toml_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = self.to_toml()?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Convert to a JSON string
    fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
