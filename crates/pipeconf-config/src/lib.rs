//! Pipeline Configuration Model
//!
//! The mapping of settings a training pipeline run is driven by, together with
//! the file reader and writer used to move it to and from disk.
//!
//! # Core Pieces
//!
//! - **Model**: [`Configuration`] holds ordered entries plus the set of keys
//!   that were filled from defaults rather than supplied by the user
//! - **Ingress**: [`read_config_file`] and [`parse_config_str`]
//! - **Egress**: [`write_config_file`] and [`to_config_string`]
//!
//! # Flow
//!
//! ```text
//! config.yml → read_config_file → Configuration → (defaulting) → write_config_file → config.yml
//! ```
//!
//! # Example
//!
//! ```rust
//! use pipeconf_config::{parse_config_str, ConfigFormat};
//!
//! let config = parse_config_str("language: en\n", ConfigFormat::Yaml).unwrap();
//! assert!(config.contains_key("language"));
//! assert!(config.autoconfigured().is_empty());
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod configuration;
pub mod error;
pub mod format;
pub mod io;

pub use configuration::{Configuration, RESERVED_PROVENANCE_KEY};
pub use error::{ConfigError, ConfigResult};
pub use format::ConfigFormat;
pub use io::{parse_config_str, read_config_file, to_config_string, write_config_file};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
