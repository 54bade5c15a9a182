//! Configuration loading utilities
//!
//! Configuration comes from the built-in defaults or from a single TOML/YAML
//! file. The process environment is never consulted.

use super::*;
use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// Load configuration from a file
pub fn load_from_file(path: &Path) -> Result<DemoConfig> {
    if !path.exists() {
        return Err(Error::ConfigurationError(format!(
            "Config file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        Error::ConfigurationError(format!(
            "Failed to read config file {}: {}",
            path.display(),
            e
        ))
    })?;

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("yaml") | Some("yml") => load_from_yaml(&contents),
        Some("toml") => load_from_toml(&contents),
        Some(ext) => Err(Error::ConfigurationError(format!(
            "Unsupported config file format: {}",
            ext
        ))),
        None => {
            // Try to parse as TOML first, then YAML
            load_from_toml(&contents).or_else(|_| load_from_yaml(&contents))
        }
    }
}

/// Load configuration from YAML string
pub fn load_from_yaml(yaml: &str) -> Result<DemoConfig> {
    serde_yaml::from_str(yaml)
        .map_err(|e| Error::ConfigurationError(format!("Failed to parse YAML config: {}", e)))
}

/// Load configuration from TOML string
pub fn load_from_toml(toml: &str) -> Result<DemoConfig> {
    toml::from_str(toml)
        .map_err(|e| Error::ConfigurationError(format!("Failed to parse TOML config: {}", e)))
}

/// Load configuration with precedence: defaults -> file, then validate
pub fn load_with_precedence<P: AsRef<Path>>(config_file: Option<P>) -> Result<DemoConfig> {
    let config = match config_file {
        Some(file_path) => load_from_file(file_path.as_ref())?,
        None => DemoConfig::default(),
    };

    config.validate()?;

    Ok(config)
}

/// Save configuration to a file
pub fn save_to_file(config: &DemoConfig, path: &Path) -> Result<()> {
    let contents = match path.extension().and_then(|ext| ext.to_str()) {
        Some("yaml") | Some("yml") => config.to_yaml()?,
        Some("toml") | None => config.to_toml()?,
        Some(ext) => {
            return Err(Error::ConfigurationError(format!(
                "Unsupported config file format: {}",
                ext
            )))
        }
    };

    fs::write(path, contents).map_err(|e| {
        Error::ConfigurationError(format!(
            "Failed to write config file {}: {}",
            path.display(),
            e
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = load_from_toml(
            r#"
            [series]
            num_periods = 400

            [output]
            format = "svg"
            "#,
        )
        .unwrap();

        assert_eq!(config.series.num_periods, 400);
        assert_eq!(config.series.seasonality_period, 365);
        assert_eq!(config.output.format, OutputFormat::Svg);
        assert_eq!(config.output.series_width, 1200);
    }

    #[test]
    fn test_defaults_without_file() {
        let config = load_with_precedence(None::<&Path>).unwrap();
        assert_eq!(config, DemoConfig::default());
    }

    #[test]
    fn test_missing_file() {
        let result = load_from_file(Path::new("/nonexistent/seasonal.toml"));
        assert!(matches!(result, Err(Error::ConfigurationError(_))));
    }
}
