//! Configuration system tests

use seasonal_ts::config::loader::*;
use seasonal_ts::config::*;
use seasonal_ts::{Error, OutputFormat};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_config_serialization_roundtrip() {
    let config = DemoConfig::default();

    let yaml = config.to_yaml().unwrap();
    assert!(yaml.contains("series:"));
    assert!(yaml.contains("output:"));
    assert_eq!(DemoConfig::from_yaml(&yaml).unwrap(), config);

    let toml = config.to_toml().unwrap();
    assert!(toml.contains("[series]"));
    assert!(toml.contains("format = \"png\""));
    assert_eq!(DemoConfig::from_toml(&toml).unwrap(), config);
}

#[test]
fn test_series_section_has_three_parameters() {
    let toml = DemoConfig::default().to_toml().unwrap();
    let series: toml::Table = toml::from_str::<toml::Table>(&toml).unwrap()["series"]
        .as_table()
        .unwrap()
        .clone();

    let mut keys: Vec<&str> = series.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["num_periods", "seasonality_period", "start_date"]);
}

#[test]
fn test_load_from_yaml_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("demo.yaml");
    fs::write(
        &path,
        "series:\n  start_date: \"2015-06-01\"\n  seasonality_period: 30\noutput:\n  format: terminal\nlogging:\n  level: debug\n",
    )
    .unwrap();

    let config = DemoConfig::from_file(&path).unwrap();
    assert_eq!(config.series.start_date, "2015-06-01");
    assert_eq!(config.series.seasonality_period, 30);
    assert_eq!(config.series.num_periods, 1000);
    assert_eq!(config.output.format, OutputFormat::Terminal);
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn test_save_and_reload() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("saved.toml");

    let mut config = DemoConfig::default();
    config.series.num_periods = 730;
    config.output.format = OutputFormat::Svg;
    save_to_file(&config, &path).unwrap();

    let loaded = load_from_file(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_unsupported_extension() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("demo.ini");
    fs::write(&path, "[series]").unwrap();

    assert!(matches!(
        load_from_file(&path),
        Err(Error::ConfigurationError(_))
    ));
}

#[test]
fn test_invalid_file_fails_validation() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(&path, "[output]\nseries_width = 0\n").unwrap();

    let result = load_with_precedence(Some(&path));
    assert!(matches!(result, Err(Error::ConfigurationError(_))));
}

#[test]
fn test_malformed_toml() {
    let result = DemoConfig::from_toml("[series\nnum_periods = ");
    assert!(matches!(result, Err(Error::ConfigurationError(_))));
}
