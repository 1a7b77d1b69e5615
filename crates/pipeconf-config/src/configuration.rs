//! Configuration mapping
//!
//! Entries keep their insertion order so a written file reads like the one
//! that was loaded. The set of keys filled in from defaults is tracked in a
//! dedicated field instead of living among the entries; it only appears under
//! [`RESERVED_PROVENANCE_KEY`] once serialized.

use crate::error::ConfigError;
use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_yaml::Value;
use std::collections::BTreeSet;
use std::path::Path;

/// Key under which the provenance set is stored on disk
pub const RESERVED_PROVENANCE_KEY: &str = "autoconfigured";

/// Pipeline configuration: ordered key/value entries plus provenance
///
/// Equality ignores entry order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Configuration {
    entries: IndexMap<String, Value>,
    autoconfigured: BTreeSet<String>,
}

impl Configuration {
    /// Create empty configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a parsed document
    ///
    /// `null` reads as an empty configuration. A top-level
    /// `autoconfigured` list is lifted into the provenance set.
    ///
    /// # Errors
    /// - `ConfigError::InvalidRoot` if the document is not a mapping
    /// - `ConfigError::Syntax` for a non-string top-level key
    /// - `ConfigError::ReservedKey` if `autoconfigured` is not a list of strings
    pub fn from_value(value: Value, origin: &Path) -> Result<Self, ConfigError> {
        let mapping = match value {
            Value::Null => return Ok(Self::new()),
            Value::Mapping(mapping) => mapping,
            other => {
                return Err(ConfigError::InvalidRoot {
                    path: origin.to_path_buf(),
                    found: kind_of(&other).to_string(),
                })
            }
        };

        let mut config = Self::new();
        for (key, value) in mapping {
            let key = match key {
                Value::String(key) => key,
                other => {
                    return Err(ConfigError::syntax_error(
                        origin,
                        format!("top-level key must be a string, found {}", kind_of(&other)),
                    ))
                }
            };

            if key == RESERVED_PROVENANCE_KEY {
                config.autoconfigured = provenance_from_value(value, origin)?;
            } else {
                config.entries.insert(key, value);
            }
        }
        Ok(config)
    }

    /// Get entry value
    #[inline]
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Check whether an entry exists for key
    #[inline]
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Insert or overwrite an entry, returning the previous value
    ///
    /// # Errors
    /// Returns `ConfigError::ReservedEntry` for the provenance key
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: Value,
    ) -> Result<Option<Value>, ConfigError> {
        let key = key.into();
        if key == RESERVED_PROVENANCE_KEY {
            return Err(ConfigError::ReservedEntry);
        }
        Ok(self.entries.insert(key, value))
    }

    /// Remove an entry and its provenance mark
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.autoconfigured.remove(key);
        self.entries.shift_remove(key)
    }

    /// Entry keys in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of entries
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check for no entries
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys filled from defaults
    #[inline]
    #[must_use]
    pub fn autoconfigured(&self) -> &BTreeSet<String> {
        &self.autoconfigured
    }

    /// Check whether key was filled from defaults
    #[inline]
    #[must_use]
    pub fn is_autoconfigured(&self, key: &str) -> bool {
        self.autoconfigured.contains(key)
    }

    /// Record key as filled from defaults
    ///
    /// Returns `false` if it was already recorded.
    pub fn mark_autoconfigured(&mut self, key: impl Into<String>) -> bool {
        self.autoconfigured.insert(key.into())
    }

    /// Project onto the given keys
    ///
    /// Provenance is kept only for retained keys. Unknown keys are ignored.
    #[must_use]
    pub fn subset<I, K>(&self, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        let mut subset = Self::new();
        for key in keys {
            let key = key.as_ref();
            if let Some(value) = self.entries.get(key) {
                subset.entries.insert(key.to_string(), value.clone());
                if self.autoconfigured.contains(key) {
                    subset.autoconfigured.insert(key.to_string());
                }
            }
        }
        subset
    }

    /// Project onto the keys filled from defaults
    #[must_use]
    pub fn autoconfigured_subset(&self) -> Self {
        self.subset(&self.autoconfigured)
    }
}

impl Serialize for Configuration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let provenance = usize::from(!self.autoconfigured.is_empty());
        let mut map = serializer.serialize_map(Some(self.entries.len() + provenance))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        if !self.autoconfigured.is_empty() {
            map.serialize_entry(RESERVED_PROVENANCE_KEY, &self.autoconfigured)?;
        }
        map.end()
    }
}

fn provenance_from_value(value: Value, origin: &Path) -> Result<BTreeSet<String>, ConfigError> {
    let reserved = |found: &str| ConfigError::ReservedKey {
        path: origin.to_path_buf(),
        found: found.to_string(),
    };

    match value {
        Value::Null => Ok(BTreeSet::new()),
        Value::Sequence(items) => items
            .into_iter()
            .map(|item| match item {
                Value::String(key) => Ok(key),
                other => Err(reserved(kind_of(&other))),
            })
            .collect(),
        other => Err(reserved(kind_of(&other))),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}
