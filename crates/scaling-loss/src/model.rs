//! Fixed power-law table, one record per input dimension.
//!
//! Values follow the single-factor fits of Kaplan et al. (2020):
//!
//! | dimension  | base     | exponent |
//! |------------|----------|----------|
//! | compute    | 2.3e8    | -0.05    |
//! | dataset    | 5.4e13   | -0.095   |
//! | parameters | 8.8e13   | -0.076   |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::law::{checked_isolated_loss, isolated_loss};

pub const COMPUTE_BASE: f64 = 2.3e8;
pub const DATASET_BASE: f64 = 5.4e13;
pub const PARAMETERS_BASE: f64 = 8.8e13;

pub const COMPUTE_EXPONENT: f64 = -0.05;
pub const DATASET_EXPONENT: f64 = -0.095;
pub const PARAMETERS_EXPONENT: f64 = -0.076;

/// One of the three resources a configuration is scored on.
///
/// The declaration order is the index order used everywhere else, and the
/// order in which bottleneck ties are broken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Compute,
    Dataset,
    Parameters,
}

impl Dimension {
    pub const ALL: [Self; 3] = [Self::Compute, Self::Dataset, Self::Parameters];

    pub const fn index(self) -> usize {
        match self {
            Self::Compute => 0,
            Self::Dataset => 1,
            Self::Parameters => 2,
        }
    }

    /// Table record for this dimension.
    pub fn spec(self) -> &'static DimensionSpec {
        &MODEL[self.index()]
    }

    /// Short name shown when this dimension is the bottleneck.
    pub const fn bottleneck_name(self) -> &'static str {
        match self {
            Self::Compute => "Compute",
            Self::Dataset => "Dataset size",
            Self::Parameters => "Model size",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Compute => "compute",
            Self::Dataset => "dataset",
            Self::Parameters => "parameters",
        };
        write!(f, "{s}")
    }
}

impl FromStr for Dimension {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "compute" => Ok(Self::Compute),
            "dataset" | "data" => Ok(Self::Dataset),
            "parameters" | "params" | "model" => Ok(Self::Parameters),
            other => Err(format!(
                "unknown dimension '{other}', expected 'compute', 'dataset', or 'parameters'"
            )),
        }
    }
}

/// `loss(x) = (x / base)^exponent`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PowerLaw {
    pub base: f64,
    pub exponent: f64,
}

impl PowerLaw {
    pub const fn new(base: f64, exponent: f64) -> Self {
        Self { base, exponent }
    }

    pub fn loss(&self, value: f64) -> f64 {
        isolated_loss(value, self.base, self.exponent)
    }

    /// # Errors
    ///
    /// Returns [`DomainError`] when the loss at `value` is not finite.
    pub fn checked_loss(&self, value: f64) -> Result<f64, DomainError> {
        checked_isolated_loss(value, self.base, self.exponent)
    }
}

/// Everything known about one dimension: its law, how it is labelled and
/// the default input a fresh session starts from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DimensionSpec {
    pub dimension: Dimension,
    /// Prefix of the per-field result line.
    pub label: &'static str,
    /// Prompt shown next to the input field.
    pub prompt: &'static str,
    pub law: PowerLaw,
    pub default_input: f64,
    /// Default x range of the curve plot before it widens around the input.
    pub plot_range: (f64, f64),
}

pub const MODEL: [DimensionSpec; 3] = [
    DimensionSpec {
        dimension: Dimension::Compute,
        label: "Compute",
        prompt: "Enter your compute (petaflop/days)",
        law: PowerLaw::new(COMPUTE_BASE, COMPUTE_EXPONENT),
        default_input: 1e6,
        plot_range: (1e5, 1e9),
    },
    DimensionSpec {
        dimension: Dimension::Dataset,
        label: "Dataset",
        prompt: "Enter your dataset size (tokens)",
        law: PowerLaw::new(DATASET_BASE, DATASET_EXPONENT),
        default_input: 1e9,
        plot_range: (1e8, 1e15),
    },
    DimensionSpec {
        dimension: Dimension::Parameters,
        label: "Parameters",
        prompt: "Enter your model size (number of non-embedding model parameters)",
        law: PowerLaw::new(PARAMETERS_BASE, PARAMETERS_EXPONENT),
        default_input: 1e7,
        plot_range: (1e6, 1e14),
    },
];
