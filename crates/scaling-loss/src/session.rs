//! Event-driven recomputation over three input fields.
//!
//! A [`Session`] owns the text of each field and the lines currently on
//! display. Committing a field re-evaluates it and, unless its text failed
//! to parse, recomputes the aggregate from all three fields. A failed
//! aggregate recomputation is logged and leaves the previous aggregate and
//! bottleneck lines in place.

use std::fmt;

use crate::input::{evaluate_field, parse_field, FieldOutcome};
use crate::law::{estimate, Estimate, InputVector};
use crate::model::Dimension;
use crate::render::{
    aggregate_line, bottleneck_line, outcome_line, AGGREGATE_PREFIX, BOTTLENECK_PREFIX,
};

pub const INITIAL_FIELD_LINE: &str = "f(x) = 0";

#[derive(Debug, Clone)]
pub struct Session {
    texts: [String; 3],
    field_lines: [String; 3],
    aggregate_line: String,
    bottleneck_line: String,
    last_estimate: Option<Estimate>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(&InputVector::default())
    }
}

impl Session {
    /// Start a session with each field holding `defaults` in `1e6` notation.
    /// Nothing is evaluated until the first commit.
    pub fn new(defaults: &InputVector) -> Self {
        Self::with_texts(defaults.to_array().map(|v| format!("{v:e}")))
    }

    pub fn with_texts(texts: [String; 3]) -> Self {
        Self {
            texts,
            field_lines: std::array::from_fn(|_| INITIAL_FIELD_LINE.to_string()),
            aggregate_line: format!("{AGGREGATE_PREFIX}: 0"),
            bottleneck_line: format!("{BOTTLENECK_PREFIX}: None"),
            last_estimate: None,
        }
    }

    pub fn text(&self, dimension: Dimension) -> &str {
        &self.texts[dimension.index()]
    }

    pub fn field_line(&self, dimension: Dimension) -> &str {
        &self.field_lines[dimension.index()]
    }

    pub fn aggregate_line(&self) -> &str {
        &self.aggregate_line
    }

    pub fn bottleneck_line(&self) -> &str {
        &self.bottleneck_line
    }

    /// Most recent successful estimate.
    pub fn last_estimate(&self) -> Option<&Estimate> {
        self.last_estimate.as_ref()
    }

    /// Replace the text of `dimension` and re-evaluate.
    pub fn commit(&mut self, dimension: Dimension, text: impl Into<String>) -> FieldOutcome {
        self.texts[dimension.index()] = text.into();
        self.refresh_field(dimension)
    }

    /// Evaluate every field in dimension order, as on startup.
    pub fn commit_all(&mut self) {
        for dimension in Dimension::ALL {
            self.refresh_field(dimension);
        }
    }

    fn refresh_field(&mut self, dimension: Dimension) -> FieldOutcome {
        let outcome = evaluate_field(dimension, &self.texts[dimension.index()]);
        self.field_lines[dimension.index()] = outcome_line(dimension, &outcome);
        match &outcome {
            FieldOutcome::ParseError(e) => {
                tracing::debug!(%dimension, error = %e, "field rejected");
            }
            FieldOutcome::Valid { .. } | FieldOutcome::DomainError(_) => {
                self.refresh_aggregate();
            }
        }
        outcome
    }

    fn refresh_aggregate(&mut self) {
        let mut inputs = InputVector::default();
        for dimension in Dimension::ALL {
            match parse_field(&self.texts[dimension.index()]) {
                Ok(v) => inputs.set(dimension, v),
                Err(e) => {
                    tracing::warn!(%dimension, error = %e, "estimated loss not updated");
                    return;
                }
            }
        }

        match estimate(&inputs) {
            Ok(est) => {
                self.aggregate_line = aggregate_line(est.max_loss);
                self.bottleneck_line = bottleneck_line(est.bottleneck);
                self.last_estimate = Some(est);
            }
            Err(e) => {
                tracing::warn!(error = %e, "estimated loss not updated");
            }
        }
    }
}

impl fmt::Display for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.field_lines {
            writeln!(f, "{line}")?;
        }
        writeln!(f, "{}", self.aggregate_line)?;
        write!(f, "{}", self.bottleneck_line)
    }
}
