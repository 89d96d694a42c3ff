//! Plain-text and LaTeX forms of each dimension's power law.
//!
//! Bases are written in scientific notation, so `2.3e8` becomes
//! `2.3 \times 10^{8}` in LaTeX math mode.

use crate::model::{Dimension, PowerLaw};

/// Split `x` into decimal mantissa and exponent, `2.3e8` → `("2.3", 8)`.
fn decompose(x: f64) -> (String, i32) {
    let s = format!("{x:e}");
    match s.split_once('e') {
        Some((mantissa, exp)) => (mantissa.to_string(), exp.parse().unwrap_or(0)),
        None => (s, 0),
    }
}

/// `(x / 2.3e8)^-0.05`
pub fn formula_text(law: &PowerLaw) -> String {
    format!("(x / {:e})^{}", law.base, law.exponent)
}

/// `\left(\frac{x}{2.3 \times 10^{8}}\right)^{-0.05}`
pub fn formula_latex(law: &PowerLaw) -> String {
    let (mantissa, exp) = decompose(law.base);
    let base = match (mantissa.as_str(), exp) {
        (m, 0) => m.to_string(),
        ("1", e) => format!("10^{{{e}}}"),
        (m, e) => format!("{m} \\times 10^{{{e}}}"),
    };
    format!(
        "\\left(\\frac{{x}}{{{base}}}\\right)^{{{}}}",
        law.exponent
    )
}

/// Every dimension with both renderings, in dimension order.
pub fn all_formulas() -> Vec<(Dimension, String, String)> {
    Dimension::ALL
        .iter()
        .map(|&d| {
            let law = &d.spec().law;
            (d, formula_text(law), formula_latex(law))
        })
        .collect()
}
