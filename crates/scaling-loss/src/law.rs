//! Isolated and estimated loss.
//!
//! isolated_loss(x) = (x / base)^exponent
//! estimated_loss(c, d, p) = max(isolated_loss_c, isolated_loss_d, isolated_loss_p)
//!
//! The estimated loss is bounded below by whichever resource is scarcest
//! relative to its reference scale; that resource is the bottleneck.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::model::{Dimension, MODEL};

/// Evaluate `(value / base)^exponent` with no domain checks.
///
/// Zero under a negative exponent yields `+inf`; a negative value under a
/// fractional exponent yields NaN. Use [`checked_isolated_loss`] when the
/// result must be a usable loss.
pub fn isolated_loss(value: f64, base: f64, exponent: f64) -> f64 {
    (value / base).powf(exponent)
}

/// Evaluate `(value / base)^exponent`, rejecting non-finite results.
///
/// # Errors
///
/// Returns [`DomainError`] if `value` is not finite or the power is
/// infinite or NaN.
pub fn checked_isolated_loss(value: f64, base: f64, exponent: f64) -> Result<f64, DomainError> {
    let loss = isolated_loss(value, base, exponent);
    if value.is_finite() && loss.is_finite() {
        Ok(loss)
    } else {
        Err(DomainError {
            dimension: None,
            value,
            loss,
        })
    }
}

/// Maximum of three losses and the index of its first occurrence.
fn first_argmax(losses: &[f64; 3]) -> (f64, usize) {
    let mut best = 0;
    for i in 1..losses.len() {
        if losses[i] > losses[best] {
            best = i;
        }
    }
    (losses[best], best)
}

/// Estimated loss over raw inputs ordered compute, dataset, parameters.
///
/// Returns `(max_loss, bottleneck_index)`. Ties go to the lowest index.
/// No domain checks are made; see [`estimate`] for the checked form.
pub fn estimated_loss(inputs: &[f64; 3]) -> (f64, usize) {
    let losses: [f64; 3] = std::array::from_fn(|i| MODEL[i].law.loss(inputs[i]));
    first_argmax(&losses)
}

/// One input per dimension.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct InputVector {
    pub compute: f64,
    pub dataset: f64,
    pub parameters: f64,
}

impl Default for InputVector {
    fn default() -> Self {
        Self::from_array(std::array::from_fn(|i| MODEL[i].default_input))
    }
}

impl InputVector {
    pub const fn from_array(values: [f64; 3]) -> Self {
        Self {
            compute: values[0],
            dataset: values[1],
            parameters: values[2],
        }
    }

    pub const fn to_array(self) -> [f64; 3] {
        [self.compute, self.dataset, self.parameters]
    }

    pub fn get(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Compute => self.compute,
            Dimension::Dataset => self.dataset,
            Dimension::Parameters => self.parameters,
        }
    }

    pub fn set(&mut self, dimension: Dimension, value: f64) {
        match dimension {
            Dimension::Compute => self.compute = value,
            Dimension::Dataset => self.dataset = value,
            Dimension::Parameters => self.parameters = value,
        }
    }
}

/// Isolated loss per dimension.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LossVector {
    pub compute: f64,
    pub dataset: f64,
    pub parameters: f64,
}

impl LossVector {
    pub const fn to_array(self) -> [f64; 3] {
        [self.compute, self.dataset, self.parameters]
    }

    pub fn get(&self, dimension: Dimension) -> f64 {
        self.to_array()[dimension.index()]
    }
}

/// Result of a checked estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Estimate {
    pub losses: LossVector,
    pub max_loss: f64,
    pub bottleneck: Dimension,
}

/// Checked estimate over an [`InputVector`].
///
/// # Errors
///
/// Returns the [`DomainError`] of the first dimension, in index order,
/// whose isolated loss is not finite.
pub fn estimate(inputs: &InputVector) -> Result<Estimate, DomainError> {
    let mut losses = [0.0; 3];
    for spec in &MODEL {
        let d = spec.dimension;
        losses[d.index()] = spec
            .law
            .checked_loss(inputs.get(d))
            .map_err(|e| e.with_dimension(d))?;
    }

    let (max_loss, index) = first_argmax(&losses);
    let bottleneck = Dimension::ALL[index];
    tracing::debug!(
        compute = losses[0],
        dataset = losses[1],
        parameters = losses[2],
        max_loss,
        %bottleneck,
        "estimated loss"
    );

    Ok(Estimate {
        losses: LossVector {
            compute: losses[0],
            dataset: losses[1],
            parameters: losses[2],
        },
        max_loss,
        bottleneck,
    })
}
