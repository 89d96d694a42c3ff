//! Text rendering of field results, the aggregate loss and the bottleneck.

use std::fmt::Write;

use serde::Serialize;

use crate::input::FieldOutcome;
use crate::law::{Estimate, InputVector};
use crate::model::{Dimension, DimensionSpec, MODEL};

pub const AGGREGATE_PREFIX: &str = "Estimated LM Configuration Loss";
pub const BOTTLENECK_PREFIX: &str = "Your model bottleneck is";

/// Truncate toward zero and group digits by thousands: `1234567.8` → `1,234,567`.
///
/// Non-finite values are printed as-is.
pub fn format_thousands(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let truncated = value.trunc();
    let digits = format!("{:.0}", truncated.abs());
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if truncated < 0.0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn field_line(spec: &DimensionSpec, value: f64, loss: f64) -> String {
    format!(
        "{}: {} → Isolated Loss = {loss:.4}",
        spec.label,
        format_thousands(value)
    )
}

pub fn invalid_field_line(spec: &DimensionSpec) -> String {
    format!("{}: Invalid input", spec.label)
}

pub fn undefined_field_line(spec: &DimensionSpec, value: f64) -> String {
    format!(
        "{}: {} → Isolated Loss = undefined",
        spec.label,
        format_thousands(value)
    )
}

/// Result line for one evaluated field.
pub fn outcome_line(dimension: Dimension, outcome: &FieldOutcome) -> String {
    let spec = dimension.spec();
    match outcome {
        FieldOutcome::Valid { value, loss } => field_line(spec, *value, *loss),
        FieldOutcome::ParseError(_) => invalid_field_line(spec),
        FieldOutcome::DomainError(e) => undefined_field_line(spec, e.value),
    }
}

pub fn aggregate_line(max_loss: f64) -> String {
    format!("{AGGREGATE_PREFIX}: {max_loss:.4}")
}

pub fn bottleneck_line(bottleneck: Dimension) -> String {
    format!("{BOTTLENECK_PREFIX}: {}", bottleneck.bottleneck_name())
}

/// One dimension's row in a [`Report`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldReport {
    pub dimension: Dimension,
    pub label: &'static str,
    pub input: f64,
    pub base: f64,
    pub exponent: f64,
    pub loss: f64,
}

/// Full result of one estimate, ready for text or JSON output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub fields: Vec<FieldReport>,
    pub max_loss: f64,
    pub bottleneck: Dimension,
    pub bottleneck_name: &'static str,
}

impl Report {
    pub fn new(inputs: &InputVector, estimate: &Estimate) -> Self {
        let fields = MODEL
            .iter()
            .map(|spec| FieldReport {
                dimension: spec.dimension,
                label: spec.label,
                input: inputs.get(spec.dimension),
                base: spec.law.base,
                exponent: spec.law.exponent,
                loss: estimate.losses.get(spec.dimension),
            })
            .collect();
        Self {
            fields,
            max_loss: estimate.max_loss,
            bottleneck: estimate.bottleneck,
            bottleneck_name: estimate.bottleneck.bottleneck_name(),
        }
    }
}

/// Render a report as the three field lines, the aggregate and the bottleneck.
pub fn format_text(report: &Report) -> String {
    let mut out = String::new();
    for field in &report.fields {
        let _ = writeln!(
            out,
            "{}",
            field_line(field.dimension.spec(), field.input, field.loss)
        );
    }
    let _ = writeln!(out, "{}", aggregate_line(report.max_loss));
    let _ = writeln!(out, "{}", bottleneck_line(report.bottleneck));
    out
}
