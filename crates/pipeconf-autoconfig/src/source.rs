//! Where default values come from
//!
//! The bundled defaults are compiled into the crate, so locating them needs
//! no packaging lookup at runtime. Deployments and tests can point at their
//! own file instead. Either way the content is parsed again on every load.

use crate::error::AutoconfigError;
use pipeconf_config::{parse_config_str, read_config_file, ConfigFormat, Configuration};
use std::fmt;
use std::path::PathBuf;
use tracing::debug;

/// Name of the bundled default configuration file
pub const BUNDLED_DEFAULT_CONFIG_NAME: &str = "default_config.yml";

/// Content of the bundled default configuration
pub const BUNDLED_DEFAULT_CONFIG: &str = include_str!("../data/default_config.yml");

/// Source of the default configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DefaultConfigSource {
    /// Defaults shipped with this crate
    #[default]
    Bundled,
    /// Defaults read from a file
    File(PathBuf),
}

impl DefaultConfigSource {
    /// Source reading from a file
    #[inline]
    #[must_use]
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::File(path.into())
    }

    /// Load and parse the default configuration
    ///
    /// # Errors
    /// - `AutoconfigError::ResourceNotFound` if the file does not exist
    /// - `AutoconfigError::Parse` if it cannot be read or parsed
    pub fn load(&self) -> Result<Configuration, AutoconfigError> {
        let defaults = match self {
            Self::Bundled => parse_config_str(BUNDLED_DEFAULT_CONFIG, ConfigFormat::Yaml),
            Self::File(path) => read_config_file(path),
        }
        .map_err(AutoconfigError::from_read)?;

        debug!(source = %self, keys = defaults.len(), "loaded default configuration");
        Ok(defaults)
    }
}

impl fmt::Display for DefaultConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bundled => write!(f, "bundled {BUNDLED_DEFAULT_CONFIG_NAME}"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}
