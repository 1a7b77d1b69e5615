use pipeconf_autoconfig::{AutoconfigError, Autoconfigurator, DefaultConfigSource};
use pipeconf_config::Configuration;
use pipeconf_test_utils::{
    config_from_yaml, init_tracing, scenario_defaults, string_list, DefaultsFixture,
    DEFAULTS_WITHOUT_POLICIES_YAML,
};
use pretty_assertions::assert_eq;
use std::collections::BTreeSet;

fn set(keys: &[&str]) -> BTreeSet<String> {
    keys.iter().map(|k| (*k).to_string()).collect()
}

#[test]
fn empty_config_gets_every_default() {
    init_tracing();
    let defaults = scenario_defaults();
    let configurator = Autoconfigurator::new()
        .with_source(defaults.source())
        .with_keys(["pipeline", "policies"]);

    let result = configurator.autoconfigure(Configuration::new()).unwrap();

    assert_eq!(result.get("pipeline"), Some(&string_list(&["WhitespaceTokenizer"])));
    assert_eq!(result.get("policies"), Some(&string_list(&["MemoizationPolicy"])));
    assert_eq!(result.autoconfigured(), &set(&["pipeline", "policies"]));
    assert_eq!(result.len(), 2);
}

#[test]
fn user_supplied_pipeline_is_kept() {
    init_tracing();
    let defaults = scenario_defaults();
    let configurator = Autoconfigurator::new()
        .with_source(defaults.source())
        .with_keys(["pipeline", "policies"]);
    let config = config_from_yaml("pipeline:\n  - CustomTokenizer\n");

    let result = configurator.autoconfigure(config).unwrap();

    assert_eq!(result.get("pipeline"), Some(&string_list(&["CustomTokenizer"])));
    assert_eq!(result.get("policies"), Some(&string_list(&["MemoizationPolicy"])));
    assert_eq!(result.autoconfigured(), &set(&["policies"]));
}

#[test]
fn empty_key_list_leaves_config_unchanged() {
    init_tracing();
    let defaults = scenario_defaults();
    let configurator = Autoconfigurator::new()
        .with_source(defaults.source())
        .with_keys(Vec::<String>::new());
    let config = config_from_yaml("language: en\n");

    let result = configurator.autoconfigure(config.clone()).unwrap();

    assert_eq!(result, config);
    assert!(result.autoconfigured().is_empty());
}

#[test]
fn missing_default_key_aborts_without_partial_fill() {
    init_tracing();
    let defaults = DefaultsFixture::new(DEFAULTS_WITHOUT_POLICIES_YAML);
    let configurator = Autoconfigurator::new()
        .with_source(defaults.source())
        .with_keys(["pipeline", "policies"]);
    let mut config = Configuration::new();

    let err = configurator.autoconfigure_in_place(&mut config).unwrap_err();

    assert!(matches!(err, AutoconfigError::MissingDefaultKey { ref key, .. } if key == "policies"));
    assert!(err.is_fatal());
    assert!(config.is_empty());
    assert!(config.autoconfigured().is_empty());
}

#[test]
fn absent_defaults_file_is_resource_not_found() {
    let defaults = scenario_defaults();
    let configurator = Autoconfigurator::new()
        .with_source(DefaultConfigSource::file(defaults.dir().join("missing.yml")));

    let err = configurator.autoconfigure(Configuration::new()).unwrap_err();
    assert!(matches!(err, AutoconfigError::ResourceNotFound { .. }));
}

#[test]
fn malformed_defaults_file_is_parse_error() {
    let defaults = DefaultsFixture::new("pipeline: [WhitespaceTokenizer\n");
    let configurator = Autoconfigurator::new().with_source(defaults.source());

    let err = configurator.autoconfigure(Configuration::new()).unwrap_err();
    assert!(matches!(err, AutoconfigError::Parse(_)));
}

#[test]
fn second_run_is_a_no_op() {
    let defaults = scenario_defaults();
    let configurator = Autoconfigurator::new().with_source(defaults.source());

    let once = configurator.autoconfigure(Configuration::new()).unwrap();
    let twice = configurator.autoconfigure(once.clone()).unwrap();

    assert_eq!(twice, once);
}

#[test]
fn existing_provenance_is_extended() {
    let defaults = scenario_defaults();
    let configurator = Autoconfigurator::new().with_source(defaults.source());
    let config = config_from_yaml("pipeline: [CustomTokenizer]\nautoconfigured: [pipeline]\n");

    let result = configurator.autoconfigure(config).unwrap();

    assert_eq!(result.get("pipeline"), Some(&string_list(&["CustomTokenizer"])));
    assert_eq!(result.autoconfigured(), &set(&["pipeline", "policies"]));
}

#[test]
fn bundled_defaults_fill_standard_keys() {
    let result = pipeconf_autoconfig::get_autoconfiguration(config_from_yaml("language: de\n")).unwrap();

    assert!(result.contains_key("pipeline"));
    assert!(result.contains_key("policies"));
    assert_eq!(result.get("language"), config_from_yaml("language: de\n").get("language"));
    assert!(!result.is_autoconfigured("language"));
}
