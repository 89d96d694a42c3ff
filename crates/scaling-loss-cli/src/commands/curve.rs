use std::fmt::Write;
use std::path::Path;

use scaling_loss::config::load_or_default;
use scaling_loss::curve::{format_scientific, sample_curve, Curve};
use scaling_loss::equation::formula_text;
use scaling_loss::input::parse_field;
use scaling_loss::model::Dimension;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Csv,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            other => Err(format!(
                "unknown format '{other}', expected 'text', 'json', or 'csv'"
            )),
        }
    }
}

pub fn run(
    dimension: Dimension,
    value: Option<&str>,
    points: Option<usize>,
    config: Option<&Path>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_or_default(config)?;
    let value = match value {
        Some(text) => parse_field(text)?,
        None => config.defaults.get(dimension),
    };
    let curve = sample_curve(dimension, value, points.unwrap_or(config.curve_points))?;

    match format {
        OutputFormat::Text => print!("{}", render_text(&curve)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&curve)?),
        OutputFormat::Csv => print!("{}", render_csv(&curve)),
    }

    Ok(())
}

fn render_text(curve: &Curve) -> String {
    let spec = curve.dimension.spec();
    let [lo, at, hi] = curve.tick_labels();
    let mut out = String::new();
    let _ = writeln!(out, "{}  {}", spec.prompt, formula_text(&spec.law));
    let _ = writeln!(out, "ticks: {lo}  {at}  {hi}");
    let _ = writeln!(
        out,
        "marker: x = {}, loss = {:.4}",
        format_scientific(curve.marker.0),
        curve.marker.1
    );
    let _ = writeln!(out);
    for (x, y) in curve.points() {
        let _ = writeln!(out, "  {:>9}  {y:.4}", format_scientific(x));
    }
    out
}

fn render_csv(curve: &Curve) -> String {
    let mut out = String::from("x,loss\n");
    for (x, y) in curve.points() {
        let _ = writeln!(out, "{x:e},{y}");
    }
    out
}
