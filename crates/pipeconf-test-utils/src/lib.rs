//! Testing utilities for pipeconf workspace
//!
//! Shared fixtures for default files and sample configurations.

#![allow(missing_docs)]

use pipeconf_autoconfig::DefaultConfigSource;
use pipeconf_config::{parse_config_str, ConfigFormat, Configuration};
use serde_yaml::Value;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tracing_subscriber::EnvFilter;

/// Defaults used by the documented scenarios
pub const SCENARIO_DEFAULTS_YAML: &str = "\
pipeline:
  - WhitespaceTokenizer
policies:
  - MemoizationPolicy
";

/// Defaults that lack `policies`
pub const DEFAULTS_WITHOUT_POLICIES_YAML: &str = "\
pipeline:
  - WhitespaceTokenizer
";

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Default configuration file living in a temporary directory
#[derive(Debug)]
pub struct DefaultsFixture {
    dir: TempDir,
    path: PathBuf,
}

impl DefaultsFixture {
    pub fn new(contents: &str) -> Self {
        Self::with_name("default_config.yml", contents)
    }

    pub fn with_name(name: &str, contents: &str) -> Self {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        Self { dir, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    pub fn source(&self) -> DefaultConfigSource {
        DefaultConfigSource::file(&self.path)
    }
}

pub fn scenario_defaults() -> DefaultsFixture {
    DefaultsFixture::new(SCENARIO_DEFAULTS_YAML)
}

pub fn config_from_yaml(yaml: &str) -> Configuration {
    parse_config_str(yaml, ConfigFormat::Yaml).unwrap()
}

pub fn string_list(items: &[&str]) -> Value {
    Value::Sequence(items.iter().map(|s| Value::String((*s).to_string())).collect())
}
