//! Log-spaced samples of one dimension's power law around an input.
//!
//! The x range starts from the dimension's default plot range and widens so
//! the input sits at least two decades from either edge:
//!
//!   x_min = min(range_lo, value / 100)
//!   x_max = max(range_hi, value * 100)

use serde::Serialize;

use crate::error::{DomainError, EstimatorError};
use crate::model::Dimension;

pub const DEFAULT_POINTS: usize = 100;

/// Sampled curve plus the marker and tick positions a plot would show.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Curve {
    pub dimension: Dimension,
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
    /// `(value, loss(value))`.
    pub marker: (f64, f64),
    /// `[x_min, value, x_max]`.
    pub ticks: [f64; 3],
}

impl Curve {
    pub fn tick_labels(&self) -> [String; 3] {
        self.ticks.map(format_scientific)
    }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.xs.iter().copied().zip(self.ys.iter().copied())
    }
}

/// `n` points evenly spaced in log10 between `lo` and `hi` inclusive.
///
/// The endpoints are returned exactly.
///
/// # Panics
/// Panics if `n < 2`.
pub fn logspace(lo: f64, hi: f64, n: usize) -> Vec<f64> {
    assert!(n >= 2, "logspace needs at least 2 points");
    let (a, b) = (lo.log10(), hi.log10());
    let step = (b - a) / (n - 1) as f64;
    let mut xs: Vec<f64> = (0..n).map(|i| 10f64.powf(a + step * i as f64)).collect();
    xs[0] = lo;
    xs[n - 1] = hi;
    xs
}

/// Sample the isolated loss of `dimension` around `value`.
///
/// # Errors
///
/// Returns [`EstimatorError::InvalidArgument`] if `points < 2` or the
/// widened range leaves the normal finite floats, and
/// [`EstimatorError::Domain`] if `value` is not a positive finite number.
pub fn sample_curve(
    dimension: Dimension,
    value: f64,
    points: usize,
) -> Result<Curve, EstimatorError> {
    if points < 2 {
        return Err(EstimatorError::InvalidArgument(format!(
            "curve needs at least 2 points, got {points}"
        )));
    }
    let spec = dimension.spec();
    let marker_loss = spec
        .law
        .checked_loss(value)
        .map_err(|e| e.with_dimension(dimension))?;
    if value <= 0.0 {
        // finite under a positive exponent, but has no place on a log axis
        return Err(DomainError {
            dimension: Some(dimension),
            value,
            loss: marker_loss,
        }
        .into());
    }

    let (lo, hi) = spec.plot_range;
    let x_min = lo.min(value / 100.0);
    let x_max = hi.max(value * 100.0);
    if !x_min.is_normal() || !x_max.is_finite() {
        return Err(EstimatorError::InvalidArgument(format!(
            "{dimension} value {value:e} leaves no finite curve range"
        )));
    }
    let xs = logspace(x_min, x_max, points);
    let ys: Vec<f64> = xs.iter().map(|&x| spec.law.loss(x)).collect();
    if let Some(&bad) = ys.iter().find(|y| !y.is_finite() || **y <= 0.0) {
        return Err(EstimatorError::InvalidArgument(format!(
            "{dimension} value {value:e} gives a curve loss of {bad}"
        )));
    }

    tracing::debug!(%dimension, value, x_min, x_max, points, "sampled curve");

    Ok(Curve {
        dimension,
        xs,
        ys,
        marker: (value, marker_loss),
        ticks: [x_min, value, x_max],
    })
}

/// One significant decimal with a signed two-digit exponent: `1.0e+05`.
pub fn format_scientific(x: f64) -> String {
    let s = format!("{x:.1e}");
    match s.split_once('e') {
        Some((mantissa, exp)) => match exp.parse::<i32>() {
            Ok(e) => {
                let sign = if e < 0 { '-' } else { '+' };
                format!("{mantissa}e{sign}{:02}", e.abs())
            }
            Err(_) => s,
        },
        None => s,
    }
}
