//! Pipeline Autoconfiguration
//!
//! Makes sure every autoconfigurable key of a pipeline configuration has a
//! value, taking missing ones from a default configuration and recording
//! which keys were filled that way.
//!
//! # Core Operations
//!
//! - **Detect**: [`compute_missing_keys`] lists the keys the caller left out
//! - **Fill**: [`fill_missing`] copies their defaults in and marks them
//! - **Compose**: [`Autoconfigurator::autoconfigure`] does both
//! - **Persist**: [`persist`] writes the result back to disk
//!
//! # Architecture
//!
//! ```text
//! Configuration → compute_missing_keys → fill_missing ← DefaultConfigSource::load
//!                                             ↓
//!                                    Configuration (+ autoconfigured) → persist → file
//! ```
//!
//! # Example
//!
//! ```rust
//! use pipeconf_autoconfig::Autoconfigurator;
//! use pipeconf_config::{parse_config_str, ConfigFormat};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = parse_config_str("pipeline:\n  - name: CustomTokenizer\n", ConfigFormat::Yaml)?;
//! let config = Autoconfigurator::new().autoconfigure(config)?;
//!
//! assert!(config.contains_key("policies"));
//! assert!(config.is_autoconfigured("policies"));
//! assert!(!config.is_autoconfigured("pipeline"));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod autoconfig;
pub mod error;
pub mod source;

pub use autoconfig::{compute_missing_keys, fill_missing, get_autoconfiguration, persist, Autoconfigurator};
pub use error::{AutoconfigError, AutoconfigResult};
pub use source::{DefaultConfigSource, BUNDLED_DEFAULT_CONFIG, BUNDLED_DEFAULT_CONFIG_NAME};

/// Configuration keys eligible to be filled from defaults
pub const CONFIG_AUTOCONFIGURABLE_KEYS: &[&str] = &["pipeline", "policies"];

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for autoconfiguring a pipeline configuration
    pub use crate::autoconfig::{compute_missing_keys, fill_missing, persist, Autoconfigurator};
    pub use crate::error::AutoconfigError;
    pub use crate::source::DefaultConfigSource;
    pub use crate::CONFIG_AUTOCONFIGURABLE_KEYS;
    pub use pipeconf_config::{Configuration, RESERVED_PROVENANCE_KEY};
}
