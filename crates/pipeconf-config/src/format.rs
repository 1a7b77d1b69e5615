//! Config file formats, selected by file extension

use crate::error::ConfigError;
use std::path::Path;

/// Structured text formats a configuration can be stored in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigFormat {
    /// YAML, the format of the bundled defaults
    Yaml,
    /// JSON
    Json,
}

impl ConfigFormat {
    /// All known formats
    pub const ALL: [Self; 2] = [Self::Yaml, Self::Json];

    /// Supported file extensions (without dot)
    #[inline]
    #[must_use]
    pub const fn extensions(self) -> &'static [&'static str] {
        match self {
            Self::Yaml => &["yaml", "yml"],
            Self::Json => &["json"],
        }
    }

    /// Find format for an extension, case-insensitively
    #[must_use]
    pub fn from_extension(extension: &str) -> Option<Self> {
        let extension = extension.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|format| format.extensions().contains(&extension.as_str()))
    }

    /// Find format for a path
    ///
    /// # Errors
    /// Returns `ConfigError::UnsupportedFormat` if the extension is missing or
    /// unknown
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let extension = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("");

        Self::from_extension(extension)
            .ok_or_else(|| ConfigError::UnsupportedFormat(extension.to_string()))
    }
}
