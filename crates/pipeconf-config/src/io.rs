//! Config file reader and writer
//!
//! YAML goes through `serde_yaml`, JSON through `serde_json`. Both end up in
//! the same [`Configuration`] model so a file can be read in one format and
//! written in the other.

use crate::configuration::Configuration;
use crate::error::ConfigError;
use crate::format::ConfigFormat;
use serde::Deserialize;
use serde_yaml::Value;
use std::path::Path;
use tracing::debug;

/// Origin reported in errors for content that did not come from a file
const INLINE_ORIGIN: &str = "<inline>";

/// Read and parse a configuration file
///
/// The format is picked from the file extension.
///
/// # Errors
/// - `ConfigError::UnsupportedFormat` for an unknown extension
/// - `ConfigError::NotFound` if the file does not exist
/// - `ConfigError::Io` if the read fails otherwise
/// - `ConfigError::Syntax`, `InvalidRoot` or `ReservedKey` for bad content
pub fn read_config_file(path: impl AsRef<Path>) -> Result<Configuration, ConfigError> {
    let path = path.as_ref();
    let format = ConfigFormat::from_path(path)?;

    let content =
        std::fs::read_to_string(path).map_err(|e| ConfigError::read_error(path, e))?;

    let config = parse_document(&content, format, path)?;
    debug!(path = %path.display(), entries = config.len(), "read config file");
    Ok(config)
}

/// Parse configuration text in the given format
///
/// # Errors
/// Same content errors as [`read_config_file`]
pub fn parse_config_str(content: &str, format: ConfigFormat) -> Result<Configuration, ConfigError> {
    parse_document(content, format, Path::new(INLINE_ORIGIN))
}

/// Serialize a configuration and write it to a file
///
/// Missing parent directories are created. The format is picked from the
/// file extension.
///
/// # Errors
/// - `ConfigError::UnsupportedFormat` for an unknown extension
/// - `ConfigError::Serialization` if the configuration cannot be encoded
/// - `ConfigError::Write` if the file cannot be written
pub fn write_config_file(config: &Configuration, path: impl AsRef<Path>) -> Result<(), ConfigError> {
    let path = path.as_ref();
    let format = ConfigFormat::from_path(path)?;
    let content = to_config_string(config, format)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::write_error(parent, e))?;
    }
    std::fs::write(path, content).map_err(|e| ConfigError::write_error(path, e))?;

    debug!(
        path = %path.display(),
        entries = config.len(),
        autoconfigured = config.autoconfigured().len(),
        "wrote config file"
    );
    Ok(())
}

/// Serialize a configuration to text in the given format
///
/// # Errors
/// Returns `ConfigError::Serialization` if encoding fails
pub fn to_config_string(config: &Configuration, format: ConfigFormat) -> Result<String, ConfigError> {
    match format {
        ConfigFormat::Yaml => {
            serde_yaml::to_string(config).map_err(|e| ConfigError::Serialization(e.to_string()))
        }
        ConfigFormat::Json => {
            let mut json = serde_json::to_string_pretty(config)
                .map_err(|e| ConfigError::Serialization(e.to_string()))?;
            json.push('\n');
            Ok(json)
        }
    }
}

fn parse_document(content: &str, format: ConfigFormat, origin: &Path) -> Result<Configuration, ConfigError> {
    let value = match format {
        ConfigFormat::Yaml => parse_yaml(content, origin)?,
        ConfigFormat::Json => parse_json(content, origin)?,
    };
    Configuration::from_value(value, origin)
}

fn parse_yaml(content: &str, origin: &Path) -> Result<Value, ConfigError> {
    let mut documents = Vec::new();
    for doc in serde_yaml::Deserializer::from_str(content) {
        let value = Value::deserialize(doc)
            .map_err(|e| ConfigError::syntax_error(origin, format!("YAML parse error: {e}")))?;
        documents.push(value);
    }

    match documents.len() {
        0 => Ok(Value::Null),
        1 => Ok(documents.remove(0)),
        n => Err(ConfigError::syntax_error(
            origin,
            format!("expected a single YAML document, found {n}"),
        )),
    }
}

fn parse_json(content: &str, origin: &Path) -> Result<Value, ConfigError> {
    if content.trim().is_empty() {
        return Ok(Value::Null);
    }

    let json: serde_json::Value = serde_json::from_str(content)
        .map_err(|e| ConfigError::syntax_error(origin, format!("JSON parse error: {e}")))?;
    serde_yaml::to_value(json).map_err(|e| ConfigError::syntax_error(origin, e.to_string()))
}
