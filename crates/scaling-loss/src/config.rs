use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::curve::DEFAULT_POINTS;
use crate::error::EstimatorError;
use crate::law::InputVector;
use crate::model::Dimension;

/// Optional YAML configuration.
///
/// ```yaml
/// defaults:
///   compute: 1.0e6
///   dataset: 1.0e9
///   parameters: 1.0e7
/// curve_points: 100
/// ```
///
/// Every key may be omitted; missing keys take the built-in values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub defaults: InputVector,
    #[serde(default = "default_curve_points")]
    pub curve_points: usize,
}

fn default_curve_points() -> usize {
    DEFAULT_POINTS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            defaults: InputVector::default(),
            curve_points: DEFAULT_POINTS,
        }
    }
}

/// Parse and validate a YAML config file.
///
/// # Errors
///
/// Returns [`EstimatorError::Io`] if the file cannot be read,
/// [`EstimatorError::Yaml`] if the YAML is malformed, or
/// [`EstimatorError::Config`] if a value is out of range.
pub fn parse_config(path: &Path) -> Result<Config, EstimatorError> {
    let content = std::fs::read_to_string(path)?;
    let config = parse_config_str(&content)?;
    tracing::debug!(path = %path.display(), ?config, "loaded config");
    Ok(config)
}

/// Parse and validate a YAML config from a string.
pub fn parse_config_str(yaml: &str) -> Result<Config, EstimatorError> {
    if yaml.trim().is_empty() {
        return Ok(Config::default());
    }
    let config: Config = serde_yaml::from_str(yaml)?;
    validate_config(&config)?;
    Ok(config)
}

/// # Errors
///
/// Returns [`EstimatorError::Config`] if `curve_points < 2` or a default
/// input is not finite.
pub fn validate_config(config: &Config) -> Result<(), EstimatorError> {
    if config.curve_points < 2 {
        return Err(EstimatorError::Config(format!(
            "curve_points must be at least 2, got {}",
            config.curve_points
        )));
    }
    for d in Dimension::ALL {
        let v = config.defaults.get(d);
        if !v.is_finite() {
            return Err(EstimatorError::Config(format!(
                "defaults.{d} must be finite, got {v}"
            )));
        }
    }
    Ok(())
}

/// Load `path` if given, otherwise use built-in defaults.
pub fn load_or_default(path: Option<&Path>) -> Result<Config, EstimatorError> {
    match path {
        Some(p) => parse_config(p),
        None => Ok(Config::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_is_default() {
        assert_eq!(parse_config_str("").unwrap(), Config::default());
        assert_eq!(parse_config_str("  \n").unwrap(), Config::default());
    }

    #[test]
    fn partial_defaults_fill_in() {
        let config = parse_config_str("defaults:\n  dataset: 2.0e12\n").unwrap();
        assert_eq!(config.defaults.dataset, 2.0e12);
        assert_eq!(config.defaults.compute, 1e6);
        assert_eq!(config.defaults.parameters, 1e7);
        assert_eq!(config.curve_points, DEFAULT_POINTS);
    }

    #[test]
    fn full_config() {
        let yaml = r#"
defaults:
  compute: 3.0e7
  dataset: 4.0e11
  parameters: 5.0e9
curve_points: 25
"#;
        let config = parse_config_str(yaml).unwrap();
        assert_eq!(config.defaults.to_array(), [3.0e7, 4.0e11, 5.0e9]);
        assert_eq!(config.curve_points, 25);
    }

    #[test]
    fn unknown_key_rejected() {
        let err = parse_config_str("precision: 6\n").unwrap_err();
        assert!(matches!(err, EstimatorError::Yaml(_)));

        let err = parse_config_str("defaults:\n  flops: 1.0\n").unwrap_err();
        assert!(matches!(err, EstimatorError::Yaml(_)));
    }

    #[test]
    fn malformed_yaml_rejected() {
        let err = parse_config_str("{{invalid").unwrap_err();
        assert!(matches!(err, EstimatorError::Yaml(_)));
    }

    #[test]
    fn too_few_curve_points_rejected() {
        let err = parse_config_str("curve_points: 1\n").unwrap_err();
        assert!(err.to_string().contains("curve_points"));
    }

    #[test]
    fn non_finite_default_rejected() {
        let err = parse_config_str("defaults:\n  compute: .inf\n").unwrap_err();
        assert!(matches!(err, EstimatorError::Config(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = parse_config(Path::new("/nonexistent/scaling-loss.yaml")).unwrap_err();
        assert!(matches!(err, EstimatorError::Io(_)));
    }

    #[test]
    fn load_or_default_without_path() {
        assert_eq!(load_or_default(None).unwrap(), Config::default());
    }
}
