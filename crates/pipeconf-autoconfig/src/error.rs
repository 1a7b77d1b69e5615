//! Error types for autoconfiguration
//!
//! Every variant is fatal: nothing here is retried or recovered locally.

use pipeconf_config::ConfigError;
use std::path::PathBuf;

/// Errors raised while filling or persisting a configuration
#[derive(Debug, thiserror::Error)]
pub enum AutoconfigError {
    /// Default configuration resource could not be located
    #[error("default configuration not found: {}", path.display())]
    ResourceNotFound { path: PathBuf },

    /// Default configuration exists but could not be read or parsed
    #[error("invalid default configuration: {0}")]
    Parse(#[source] ConfigError),

    /// Default configuration has no value for an autoconfigurable key
    #[error("default configuration {defaults} has no value for key '{key}'")]
    MissingDefaultKey { key: String, defaults: String },

    /// A default value could not be stored in the configuration
    #[error("cannot store default value: {0}")]
    InvalidEntry(#[source] ConfigError),

    /// Writing the configuration failed
    #[error("failed to persist configuration: {0}")]
    WriteFailure(#[source] ConfigError),
}

impl AutoconfigError {
    /// Classify a failure to load the default configuration
    #[must_use]
    pub fn from_read(err: ConfigError) -> Self {
        match err {
            ConfigError::NotFound { path } => Self::ResourceNotFound { path },
            other => Self::Parse(other),
        }
    }

    /// Wrap a failure to write a configuration
    #[inline]
    #[must_use]
    pub fn from_write(err: ConfigError) -> Self {
        Self::WriteFailure(err)
    }

    /// Create missing default key error
    pub fn missing_default_key(key: impl Into<String>, defaults: impl Into<String>) -> Self {
        Self::MissingDefaultKey {
            key: key.into(),
            defaults: defaults.into(),
        }
    }

    /// Whether the error aborts configuration resolution (always)
    #[inline]
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        true
    }
}

/// Result type alias for autoconfiguration
pub type AutoconfigResult<T> = Result<T, AutoconfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_becomes_resource_not_found() {
        let err = AutoconfigError::from_read(ConfigError::NotFound {
            path: PathBuf::from("default_config.yml"),
        });
        assert!(matches!(err, AutoconfigError::ResourceNotFound { .. }));
        assert_eq!(
            err.to_string(),
            "default configuration not found: default_config.yml"
        );
    }

    #[test]
    fn syntax_becomes_parse() {
        let err = AutoconfigError::from_read(ConfigError::syntax_error("d.yml", "bad"));
        assert!(matches!(err, AutoconfigError::Parse(ConfigError::Syntax { .. })));
        assert!(err.is_fatal());
    }

    #[test]
    fn missing_default_key_display() {
        let err = AutoconfigError::missing_default_key("policies", "bundled default_config.yml");
        assert_eq!(
            err.to_string(),
            "default configuration bundled default_config.yml has no value for key 'policies'"
        );
    }

    #[test]
    fn invalid_entry_is_not_a_parse_error() {
        let err = AutoconfigError::InvalidEntry(ConfigError::ReservedEntry);
        assert!(!matches!(err, AutoconfigError::Parse(_)));
        assert!(err.to_string().starts_with("cannot store default value:"));
    }

    #[test]
    fn write_failure_keeps_cause() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = AutoconfigError::from_write(ConfigError::write_error("out.yml", io));
        let source = std::error::Error::source(&err).unwrap();
        assert!(source.to_string().contains("out.yml"));
    }
}
