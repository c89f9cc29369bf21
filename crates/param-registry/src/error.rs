//! Error types for registry construction

use crate::registry::ParamId;

/// Errors raised while populating a registry
///
/// Lookups never fail: a missing id is reported as `None`, not as an error.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// Two entries share the same identifier
    #[error("duplicate parameter id: {0}")]
    DuplicateId(ParamId),

    /// Identifier text is neither decimal nor `0x`-prefixed hexadecimal
    #[error("invalid parameter id '{text}': {reason}")]
    InvalidId {
        /// Offending key
        text: String,
        /// Why it was rejected
        reason: String,
    },

    /// JSON document could not be parsed
    #[error("invalid JSON registry document: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML document could not be parsed
    #[error("invalid YAML registry document: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// TOML document could not be parsed
    #[error("invalid TOML registry document: {0}")]
    Toml(#[from] toml::de::Error),
}

impl RegistryError {
    /// Create invalid id error
    #[inline]
    #[must_use]
    pub fn invalid_id(text: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidId {
            text: text.into(),
            reason: reason.into(),
        }
    }

    /// Check if error comes from document parsing rather than content
    #[inline]
    #[must_use]
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::Json(_) | Self::Yaml(_) | Self::Toml(_))
    }
}
