//! Input field parsing.
//!
//! A field holds free text. Empty text reads as `0`, anything else must
//! parse as a floating point number. Each evaluation ends in exactly one
//! [`FieldOutcome`].

use crate::error::{DomainError, ParseError};
use crate::model::Dimension;

/// Parse the text of one input field.
///
/// Surrounding whitespace is ignored and empty text is `0.0`.
///
/// # Errors
///
/// Returns [`ParseError`] if the text is not a number.
pub fn parse_field(text: &str) -> Result<f64, ParseError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    trimmed.parse::<f64>().map_err(|_| ParseError {
        text: text.to_string(),
    })
}

/// What a single field evaluates to.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldOutcome {
    /// Parsed, and the isolated loss is finite.
    Valid { value: f64, loss: f64 },
    /// The text is not a number.
    ParseError(ParseError),
    /// Parsed, but the power law is undefined there.
    DomainError(DomainError),
}

impl FieldOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid { .. })
    }

    pub fn loss(&self) -> Option<f64> {
        match self {
            Self::Valid { loss, .. } => Some(*loss),
            _ => None,
        }
    }

    /// The parsed input, if the text was a number.
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Valid { value, .. } => Some(*value),
            Self::DomainError(e) => Some(e.value),
            Self::ParseError(_) => None,
        }
    }
}

/// Parse `text` and evaluate the isolated loss of `dimension` at it.
pub fn evaluate_field(dimension: Dimension, text: &str) -> FieldOutcome {
    let value = match parse_field(text) {
        Ok(v) => v,
        Err(e) => return FieldOutcome::ParseError(e),
    };
    match dimension.spec().law.checked_loss(value) {
        Ok(loss) => FieldOutcome::Valid { value, loss },
        Err(e) => FieldOutcome::DomainError(e.with_dimension(dimension)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_plain_numbers() {
        assert_eq!(parse_field("1e6"), Ok(1e6));
        assert_eq!(parse_field("1000000"), Ok(1e6));
        assert_eq!(parse_field("2.5"), Ok(2.5));
        assert_eq!(parse_field("  42 "), Ok(42.0));
        assert_eq!(parse_field("-3"), Ok(-3.0));
    }

    #[test]
    fn parse_empty_is_zero() {
        assert_eq!(parse_field(""), Ok(0.0));
        assert_eq!(parse_field("   "), Ok(0.0));
    }

    #[test]
    fn parse_rejects_letters() {
        let err = parse_field("abc").unwrap_err();
        assert_eq!(err.text, "abc");
        assert!(parse_field("1e6x").is_err());
        assert!(parse_field("1,000").is_err());
    }

    #[test]
    fn evaluate_valid_field() {
        let outcome = evaluate_field(Dimension::Compute, "2.3e8");
        assert_eq!(
            outcome,
            FieldOutcome::Valid {
                value: 2.3e8,
                loss: 1.0
            }
        );
        assert!(outcome.is_valid());
        assert_eq!(outcome.loss(), Some(1.0));
        assert_eq!(outcome.value(), Some(2.3e8));
    }

    #[test]
    fn evaluate_letters_is_parse_error() {
        let outcome = evaluate_field(Dimension::Dataset, "tokens");
        assert!(matches!(outcome, FieldOutcome::ParseError(_)));
        assert!(!outcome.is_valid());
        assert_eq!(outcome.loss(), None);
        assert_eq!(outcome.value(), None);
    }

    #[test]
    fn evaluate_empty_is_domain_error() {
        // empty reads as zero, and zero has no finite loss
        let outcome = evaluate_field(Dimension::Parameters, "");
        match outcome {
            FieldOutcome::DomainError(e) => {
                assert_eq!(e.dimension, Some(Dimension::Parameters));
                assert_eq!(e.value, 0.0);
            }
            other => panic!("expected domain error, got {other:?}"),
        }
    }

    #[test]
    fn evaluate_negative_is_domain_error() {
        let outcome = evaluate_field(Dimension::Compute, "-1e6");
        assert!(matches!(outcome, FieldOutcome::DomainError(_)));
        assert_eq!(outcome.value(), Some(-1e6));
    }
}
