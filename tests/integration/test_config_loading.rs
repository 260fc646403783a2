use alert_convert::core::config::{ConfigLoader, ConfigValidator};
use alert_convert::core::converter::Converter;
use alert_convert::core::types::ApplyDepth;
use alert_convert::logging::ConsoleOutput;
use serde_json::json;
use serial_test::serial;
use std::env;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn clear_alert_convert_env() {
    for v in &[
        "ALERT_CONVERT_TEMPLATE",
        "ALERT_CONVERT_REQUIRED_KEY",
        "ALERT_CONVERT_DEPTH",
        "ALERT_CONVERT_LOG_LEVEL",
        "ALERT_CONVERT_CONSOLE_OUTPUT",
    ] {
        env::remove_var(v);
    }
}

#[test]
#[serial]
fn test_missing_config_file_uses_defaults() {
    clear_alert_convert_env();
    let temp_dir = TempDir::new().unwrap();

    let config = ConfigLoader::load_from_dir(temp_dir.path()).unwrap();
    assert!(config.template.path.is_none());
    assert_eq!(config.template.required_key, "labels");
    assert_eq!(config.template.depth, ApplyDepth::Shallow);
    assert_eq!(config.logging.console_output, ConsoleOutput::Stderr);
    assert!(ConfigValidator::validate(&config).is_ok());
}

#[test]
#[serial]
fn test_config_file_drives_converter() {
    clear_alert_convert_env();
    let temp_dir = TempDir::new().unwrap();
    let mapper_path = temp_dir.path().join("mapper.json");
    fs::write(
        &mapper_path,
        r#"{"annotations": {"flower": {"name": ["best_flower", "name"]}}}"#,
    )
    .unwrap();

    let config_content = format!(
        r#"
[template]
path = "{}"
required_key = "annotations"
depth = "recursive"

[logging]
default_level = "warn"
"#,
        mapper_path.display()
    );
    fs::write(temp_dir.path().join("alert-convert.toml"), config_content).unwrap();

    let config = ConfigLoader::load_from_dir(temp_dir.path()).unwrap();
    assert_eq!(config.template.path.as_ref(), Some(&mapper_path));
    assert_eq!(config.logging.default_level, "warn");

    let mut converter = Converter::from_config(&config);
    let converted = converter
        .convert(&json!({"best_flower": {"name": "Orchid"}}))
        .unwrap();
    assert_eq!(
        converted,
        json!({"annotations": {"flower": {"name": "Orchid"}}})
    );
}

#[test]
#[serial]
fn test_relative_template_path_resolves_next_to_config() {
    clear_alert_convert_env();
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("mapper.json"),
        r#"{"labels": {"email_address": "email"}}"#,
    )
    .unwrap();
    fs::write(
        temp_dir.path().join("alert-convert.toml"),
        r#"
[template]
path = "mapper.json"
"#,
    )
    .unwrap();

    let config = ConfigLoader::load_from_dir(temp_dir.path()).unwrap();
    assert_eq!(
        config.template.path,
        Some(temp_dir.path().join("mapper.json"))
    );

    let mut converter = Converter::from_config(&config);
    let converted = converter.convert(&json!({"email": "a@b"})).unwrap();
    assert_eq!(converted, json!({"labels": {"email_address": "a@b"}}));
}

#[test]
#[serial]
fn test_env_template_path_is_not_rebased() {
    clear_alert_convert_env();
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("alert-convert.toml"),
        r#"
[template]
path = "mapper.json"
"#,
    )
    .unwrap();

    env::set_var("ALERT_CONVERT_TEMPLATE", "mappers/env.json");
    let config = ConfigLoader::load_from_dir(temp_dir.path()).unwrap();
    assert_eq!(config.template.path, Some(PathBuf::from("mappers/env.json")));

    clear_alert_convert_env();
}

#[test]
#[serial]
fn test_env_precedence_over_file() {
    clear_alert_convert_env();
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("alert-convert.toml"),
        r#"
[template]
path = "from-file.json"
required_key = "labels"

[logging]
console_output = "stdout"
"#,
    )
    .unwrap();

    env::set_var("ALERT_CONVERT_TEMPLATE", "from-env.yaml");
    env::set_var("ALERT_CONVERT_REQUIRED_KEY", "annotations");
    env::set_var("ALERT_CONVERT_DEPTH", "recursive");
    env::set_var("ALERT_CONVERT_LOG_LEVEL", "debug");
    env::set_var("ALERT_CONVERT_CONSOLE_OUTPUT", "none");

    let config = ConfigLoader::load_from_dir(temp_dir.path()).unwrap();
    assert_eq!(config.template.path, Some(PathBuf::from("from-env.yaml")));
    assert_eq!(config.template.required_key, "annotations");
    assert_eq!(config.template.depth, ApplyDepth::Recursive);
    assert_eq!(config.logging.default_level, "debug");
    assert_eq!(config.logging.console_output, ConsoleOutput::None);

    clear_alert_convert_env();
}

#[test]
#[serial]
fn test_unparseable_env_values_are_ignored() {
    clear_alert_convert_env();
    let temp_dir = TempDir::new().unwrap();

    env::set_var("ALERT_CONVERT_DEPTH", "bottomless");
    env::set_var("ALERT_CONVERT_CONSOLE_OUTPUT", "syslog");

    let config = ConfigLoader::load_from_dir(temp_dir.path()).unwrap();
    assert_eq!(config.template.depth, ApplyDepth::Shallow);
    assert_eq!(config.logging.console_output, ConsoleOutput::Stderr);

    clear_alert_convert_env();
}

#[test]
#[serial]
fn test_converter_without_template_path_fails_structurally() {
    clear_alert_convert_env();
    let temp_dir = TempDir::new().unwrap();

    let config = ConfigLoader::load_from_dir(temp_dir.path()).unwrap();
    let mut converter = Converter::from_config(&config);
    assert!(converter.mapping().unwrap_err().is_template_error());
}
