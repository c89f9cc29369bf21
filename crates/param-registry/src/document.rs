//! Registry documents
//!
//! JSON/YAML/TOML representation of a registry. Keys are parameter ids
//! written as decimal or `0x`-prefixed hexadecimal text.

use crate::error::RegistryError;
use crate::registry::{ParamId, RawValue, Registry, RegistryBuilder};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Serialized form of a [`Registry`]
///
/// ```json
/// { "entries": { "0x0011001100110011": 123, "42": 7 } }
/// ```
///
/// TOML integers are signed 64-bit, so TOML documents cannot hold raw
/// values above `i64::MAX`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegistryDocument {
    /// Id text → raw value
    #[serde(default)]
    pub entries: BTreeMap<String, RawValue>,
}

impl RegistryDocument {
    /// Parse from JSON string
    ///
    /// # Errors
    /// Returns error if JSON is invalid
    pub fn from_json_str(json: &str) -> Result<Self, RegistryError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse from YAML string
    ///
    /// # Errors
    /// Returns error if YAML is invalid
    pub fn from_yaml_str(yaml: &str) -> Result<Self, RegistryError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parse from TOML string
    ///
    /// # Errors
    /// Returns error if TOML is invalid
    pub fn from_toml_str(text: &str) -> Result<Self, RegistryError> {
        Ok(toml::from_str(text)?)
    }

    /// Capture an existing registry, keys in hexadecimal
    #[must_use]
    pub fn from_registry(registry: &Registry) -> Self {
        let entries = registry
            .iter()
            .map(|(id, value)| (id.to_string(), value))
            .collect();
        Self { entries }
    }

    /// Validate keys and freeze into a [`Registry`]
    ///
    /// # Errors
    /// - [`RegistryError::InvalidId`] if a key is not a number
    /// - [`RegistryError::DuplicateId`] if two keys name the same id
    ///   (e.g. `"17"` and `"0x11"`)
    pub fn into_registry(self) -> Result<Registry, RegistryError> {
        let mut builder = RegistryBuilder::new();
        for (key, value) in self.entries {
            let id: ParamId = key.parse()?;
            builder.insert(id, value)?;
        }
        Ok(builder.build())
    }
}

impl Registry {
    /// Load registry from a JSON document
    ///
    /// # Errors
    /// Returns error if the document or any id is invalid
    pub fn from_json_str(json: &str) -> Result<Self, RegistryError> {
        RegistryDocument::from_json_str(json)?.into_registry()
    }

    /// Load registry from a YAML document
    ///
    /// # Errors
    /// Returns error if the document or any id is invalid
    pub fn from_yaml_str(yaml: &str) -> Result<Self, RegistryError> {
        RegistryDocument::from_yaml_str(yaml)?.into_registry()
    }

    /// Load registry from a TOML document
    ///
    /// # Errors
    /// Returns error if the document or any id is invalid
    pub fn from_toml_str(text: &str) -> Result<Self, RegistryError> {
        RegistryDocument::from_toml_str(text)?.into_registry()
    }
}
