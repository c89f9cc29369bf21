//! Immutable parameter registry
//!
//! Provides [`Registry`], the read-only id → raw value table that `Load`
//! steps consult, and [`RegistryBuilder`] for populating it once.

use crate::error::RegistryError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Arc;

/// Raw stored value of every registry entry
///
/// `Load` steps reinterpret and narrow this into their reported type; the
/// registry itself never converts.
pub type RawValue = u64;

/// 64-bit parameter identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParamId(pub u64);

impl ParamId {
    /// Get the raw identifier
    #[inline]
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for ParamId {
    #[inline]
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ParamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#018x}", self.0)
    }
}

impl FromStr for ParamId {
    type Err = RegistryError;

    /// Parse decimal (`"17"`) or `0x`-prefixed hexadecimal (`"0x11"`) text
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let digits = text
            .strip_prefix("0x")
            .or_else(|| text.strip_prefix("0X"))
            .unwrap_or(text);
        if digits.starts_with(['+', '-']) {
            return Err(RegistryError::invalid_id(s, "sign not allowed"));
        }

        let parsed = match text
            .strip_prefix("0x")
            .or_else(|| text.strip_prefix("0X"))
        {
            Some(hex) => u64::from_str_radix(&hex.replace('_', ""), 16),
            None => text.replace('_', "").parse::<u64>(),
        };

        parsed
            .map(Self)
            .map_err(|e| RegistryError::invalid_id(s, e.to_string()))
    }
}

/// Read interface consumed by `Load` steps
///
/// Not-found is a normal result, never an error. Implementations must be
/// safe to read from many threads at once.
pub trait Lookup: Send + Sync {
    /// Look up the raw value stored under `id`
    fn lookup(&self, id: ParamId) -> Option<RawValue>;
}

impl<L: Lookup + ?Sized> Lookup for &L {
    #[inline]
    fn lookup(&self, id: ParamId) -> Option<RawValue> {
        (**self).lookup(id)
    }
}

impl<L: Lookup + ?Sized> Lookup for Arc<L> {
    #[inline]
    fn lookup(&self, id: ParamId) -> Option<RawValue> {
        (**self).lookup(id)
    }
}

/// Immutable parameter registry
///
/// Populated once through [`RegistryBuilder`]; no entry is added, removed or
/// changed afterwards, so shared reads need no locking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    entries: HashMap<ParamId, RawValue>,
}

impl Registry {
    /// Create empty registry
    #[inline]
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Start populating a registry
    #[inline]
    #[must_use]
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Build a registry from `(id, value)` pairs
    ///
    /// # Errors
    /// Returns [`RegistryError::DuplicateId`] if an id appears twice
    pub fn from_entries<I, K>(entries: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = (K, RawValue)>,
        K: Into<ParamId>,
    {
        let mut builder = RegistryBuilder::new();
        for (id, value) in entries {
            builder.insert(id, value)?;
        }
        Ok(builder.build())
    }

    /// Check if id is present
    #[inline]
    #[must_use]
    pub fn contains(&self, id: ParamId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Number of entries
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if registry has no entries
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all entries (unordered)
    pub fn iter(&self) -> impl Iterator<Item = (ParamId, RawValue)> + '_ {
        self.entries.iter().map(|(id, value)| (*id, *value))
    }

    /// All ids, sorted ascending
    #[must_use]
    pub fn ids(&self) -> Vec<ParamId> {
        let mut ids: Vec<_> = self.entries.keys().copied().collect();
        ids.sort_unstable();
        ids
    }
}

impl Lookup for Registry {
    #[inline]
    fn lookup(&self, id: ParamId) -> Option<RawValue> {
        self.entries.get(&id).copied()
    }
}

/// Builder for [`Registry`]
///
/// Usage:
/// ```rust,ignore
/// let mut builder = RegistryBuilder::new();
/// builder.insert(FLAG_A, 123)?;
/// builder.insert(FLAG_B, 555)?;
/// let registry = builder.build();
/// ```
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    entries: HashMap<ParamId, RawValue>,
}

impl RegistryBuilder {
    /// Create empty builder
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry
    ///
    /// # Errors
    /// Returns [`RegistryError::DuplicateId`] if `id` is already present
    pub fn insert(
        &mut self,
        id: impl Into<ParamId>,
        value: RawValue,
    ) -> Result<(), RegistryError> {
        let id = id.into();
        if self.entries.contains_key(&id) {
            return Err(RegistryError::DuplicateId(id));
        }
        self.entries.insert(id, value);
        Ok(())
    }

    /// Add an entry, consuming and returning the builder
    ///
    /// # Errors
    /// Returns [`RegistryError::DuplicateId`] if `id` is already present
    pub fn with(mut self, id: impl Into<ParamId>, value: RawValue) -> Result<Self, RegistryError> {
        self.insert(id, value)?;
        Ok(self)
    }

    /// Number of entries so far
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no entries were added
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Freeze into an immutable registry
    #[must_use]
    pub fn build(self) -> Registry {
        tracing::debug!(entries = self.entries.len(), "registry built");
        Registry {
            entries: self.entries,
        }
    }
}
