use std::path::Path;

use scaling_loss::config::load_or_default;
use scaling_loss::input::parse_field;
use scaling_loss::law::{estimate, InputVector};
use scaling_loss::model::Dimension;
use scaling_loss::render::{format_text, Report};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!(
                "unknown format '{other}', expected 'text' or 'json'"
            )),
        }
    }
}

/// Start from the configured defaults and apply any overrides, which are
/// parsed like input field text.
pub fn resolve_inputs(
    overrides: &[Option<String>; 3],
    config: Option<&Path>,
) -> Result<InputVector, Box<dyn std::error::Error>> {
    let mut inputs = load_or_default(config)?.defaults;
    for d in Dimension::ALL {
        if let Some(text) = &overrides[d.index()] {
            let value = parse_field(text).map_err(|e| format!("--{d}: {e}"))?;
            inputs.set(d, value);
        }
    }
    Ok(inputs)
}

pub fn run(
    overrides: &[Option<String>; 3],
    config: Option<&Path>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let inputs = resolve_inputs(overrides, config)?;
    let est = estimate(&inputs)?;
    let report = Report::new(&inputs, &est);

    match format {
        OutputFormat::Text => print!("{}", format_text(&report)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_from_str() {
        assert_eq!(OutputFormat::from_str("text"), Ok(OutputFormat::Text));
        assert_eq!(OutputFormat::from_str("json"), Ok(OutputFormat::Json));
        assert!(OutputFormat::from_str("yaml").is_err());
    }

    #[test]
    fn resolve_defaults() {
        let inputs = resolve_inputs(&[None, None, None], None).unwrap();
        assert_eq!(inputs, InputVector::default());
    }

    #[test]
    fn resolve_overrides() {
        let overrides = [None, Some("2e12".to_string()), Some("".to_string())];
        let inputs = resolve_inputs(&overrides, None).unwrap();
        assert_eq!(inputs.compute, 1e6);
        assert_eq!(inputs.dataset, 2e12);
        assert_eq!(inputs.parameters, 0.0);
    }

    #[test]
    fn resolve_rejects_text() {
        let overrides = [Some("abc".to_string()), None, None];
        let err = resolve_inputs(&overrides, None).unwrap_err();
        assert!(err.to_string().starts_with("--compute:"));
    }

    #[test]
    fn zero_override_fails_estimate() {
        let overrides = [None, None, Some("0".to_string())];
        assert!(run(&overrides, None, OutputFormat::Text).is_err());
    }
}
