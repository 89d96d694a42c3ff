use thiserror::Error;

use crate::model::Dimension;

#[derive(Debug, Error)]
pub enum EstimatorError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Invalid config: {0}")]
    Config(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Text in an input field that is not a floating point number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid input {text:?}: expected a number")]
pub struct ParseError {
    pub text: String,
}

/// An input for which the power law has no finite value, such as zero
/// under a negative exponent or a negative value under a fractional one.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error(
    "isolated loss undefined for {}input {value:e} (evaluated to {loss})",
    dimension_prefix(.dimension)
)]
pub struct DomainError {
    pub dimension: Option<Dimension>,
    pub value: f64,
    pub loss: f64,
}

impl DomainError {
    #[must_use]
    pub fn with_dimension(self, dimension: Dimension) -> Self {
        Self {
            dimension: Some(dimension),
            ..self
        }
    }
}

fn dimension_prefix(dimension: &Option<Dimension>) -> String {
    dimension.map(|d| format!("{d} ")).unwrap_or_default()
}
