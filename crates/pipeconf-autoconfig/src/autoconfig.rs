//! Filling missing configuration keys from defaults

use crate::error::AutoconfigError;
use crate::source::DefaultConfigSource;
use crate::CONFIG_AUTOCONFIGURABLE_KEYS;
use pipeconf_config::{write_config_file, Configuration};
use std::path::Path;
use tracing::{debug, info};

/// Keys from `candidate_keys` with no entry in `config`, in candidate order
#[must_use]
pub fn compute_missing_keys<K: AsRef<str>>(config: &Configuration, candidate_keys: &[K]) -> Vec<String> {
    candidate_keys
        .iter()
        .map(AsRef::as_ref)
        .filter(|key| !config.contains_key(key))
        .map(str::to_string)
        .collect()
}

/// Copy defaults for `missing_keys` into `config` and mark them autoconfigured
///
/// The defaults are loaded from `source` on every call. All keys are resolved
/// before anything is written, so on error `config` is left untouched.
///
/// # Errors
/// - `AutoconfigError::ResourceNotFound` / `Parse` from loading the defaults
/// - `AutoconfigError::MissingDefaultKey` if the defaults lack one of the keys
/// - `AutoconfigError::InvalidEntry` if a value cannot be stored
pub fn fill_missing<K: AsRef<str>>(
    config: &mut Configuration,
    missing_keys: &[K],
    source: &DefaultConfigSource,
) -> Result<(), AutoconfigError> {
    let defaults = source.load()?;

    let resolved = missing_keys
        .iter()
        .map(|key| {
            let key = key.as_ref();
            defaults
                .get(key)
                .map(|value| (key, value.clone()))
                .ok_or_else(|| AutoconfigError::missing_default_key(key, source.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    for (key, value) in resolved {
        config.insert(key, value).map_err(AutoconfigError::InvalidEntry)?;
        config.mark_autoconfigured(key);
        debug!(key, "filled from defaults");
    }
    Ok(())
}

/// Write the full configuration, provenance included, to `destination`
///
/// Pass [`Configuration::autoconfigured_subset`] to persist only the
/// sections that were filled from defaults.
///
/// # Errors
/// Returns `AutoconfigError::WriteFailure` with the underlying cause
pub fn persist(config: &Configuration, destination: impl AsRef<Path>) -> Result<(), AutoconfigError> {
    let destination = destination.as_ref();
    write_config_file(config, destination).map_err(AutoconfigError::from_write)?;
    info!(
        path = %destination.display(),
        autoconfigured = ?config.autoconfigured(),
        "persisted configuration"
    );
    Ok(())
}

/// Fill the standard autoconfigurable keys from the bundled defaults
///
/// # Errors
/// See [`Autoconfigurator::autoconfigure`]
pub fn get_autoconfiguration(config: Configuration) -> Result<Configuration, AutoconfigError> {
    Autoconfigurator::new().autoconfigure(config)
}

/// Ensures every autoconfigurable key has a value
///
/// Holds the default source and the key list; keeps no state between calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Autoconfigurator {
    source: DefaultConfigSource,
    keys: Vec<String>,
}

impl Default for Autoconfigurator {
    fn default() -> Self {
        Self::new()
    }
}

impl Autoconfigurator {
    /// Bundled defaults with [`CONFIG_AUTOCONFIGURABLE_KEYS`]
    #[must_use]
    pub fn new() -> Self {
        Self {
            source: DefaultConfigSource::Bundled,
            keys: CONFIG_AUTOCONFIGURABLE_KEYS
                .iter()
                .map(|k| (*k).to_string())
                .collect(),
        }
    }

    /// Use a different default source
    #[inline]
    #[must_use]
    pub fn with_source(mut self, source: DefaultConfigSource) -> Self {
        self.source = source;
        self
    }

    /// Use a different autoconfigurable key list
    #[must_use]
    pub fn with_keys<I, K>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        self.keys = keys.into_iter().map(Into::into).collect();
        self
    }

    /// Default source
    #[inline]
    #[must_use]
    pub fn source(&self) -> &DefaultConfigSource {
        &self.source
    }

    /// Autoconfigurable keys
    #[inline]
    #[must_use]
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Autoconfigurable keys absent from `config`
    #[inline]
    #[must_use]
    pub fn missing_keys(&self, config: &Configuration) -> Vec<String> {
        compute_missing_keys(config, &self.keys)
    }

    /// Return `config` with every autoconfigurable key present
    ///
    /// Existing values are never overwritten. The defaults are loaded even
    /// when nothing is missing.
    ///
    /// # Errors
    /// Any error from [`fill_missing`]
    pub fn autoconfigure(&self, mut config: Configuration) -> Result<Configuration, AutoconfigError> {
        self.autoconfigure_in_place(&mut config)?;
        Ok(config)
    }

    /// In-place variant of [`Self::autoconfigure`], returning the filled keys
    ///
    /// # Errors
    /// Any error from [`fill_missing`]
    pub fn autoconfigure_in_place(&self, config: &mut Configuration) -> Result<Vec<String>, AutoconfigError> {
        let missing = self.missing_keys(config);
        if missing.is_empty() {
            debug!(source = %self.source, "all autoconfigurable keys present");
        } else {
            info!(source = %self.source, missing = ?missing, "autoconfiguring missing keys");
        }
        fill_missing(config, &missing, &self.source)?;
        Ok(missing)
    }
}
