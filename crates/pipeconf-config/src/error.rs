//! Error types for configuration reading and writing

use std::path::PathBuf;

/// Errors raised while reading, interpreting or writing a configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file does not exist
    #[error("config file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// IO error while reading a configuration file
    #[error("io error reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File content is not valid in its format
    #[error("syntax error in {}: {message}", path.display())]
    Syntax { path: PathBuf, message: String },

    /// Top-level document is not a mapping
    #[error("expected a mapping at the top level of {}, found {found}", path.display())]
    InvalidRoot { path: PathBuf, found: String },

    /// Reserved provenance key holds something other than a list of key names
    #[error("reserved key 'autoconfigured' in {} must be a list of key names, found {found}", path.display())]
    ReservedKey { path: PathBuf, found: String },

    /// Attempt to store a regular entry under the reserved provenance key
    #[error("'autoconfigured' is reserved for provenance tracking and cannot hold an entry")]
    ReservedEntry,

    /// File extension maps to no known format
    #[error("unsupported config format: '{0}'")]
    UnsupportedFormat(String),

    /// Serialization logic failed
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// IO error while writing a configuration file
    #[error("io error writing {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConfigError {
    /// Create read error for path, separating a missing file from other failures
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Io { path, source }
        }
    }

    /// Create syntax error for path
    pub fn syntax_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Syntax {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create write error for path
    pub fn write_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }

    /// Check whether the error means the file was absent
    #[inline]
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Result type alias for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
