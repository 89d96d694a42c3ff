use scaling_loss::equation::all_formulas;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Latex,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s {
            "text" => Ok(Self::Text),
            "latex" => Ok(Self::Latex),
            other => Err(format!(
                "unknown format '{other}', expected 'text' or 'latex'"
            )),
        }
    }
}

pub fn run(format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    print!("{}", render(format));
    Ok(())
}

fn render(format: OutputFormat) -> String {
    let mut out = String::new();
    match format {
        OutputFormat::Text => {
            out.push_str("Isolated loss per dimension\n");
            out.push_str("===========================\n\n");
            for (d, text, _) in all_formulas() {
                let spec = d.spec();
                out.push_str(&format!("  {d}\n"));
                out.push_str(&format!("    prompt:  {}\n", spec.prompt));
                out.push_str(&format!("    formula: {text}\n"));
                out.push_str(&format!("    default: {:e}\n\n", spec.default_input));
            }
            out.push_str("  estimated loss = max(compute, dataset, parameters)\n");
        }
        OutputFormat::Latex => {
            out.push_str("% Isolated loss per dimension\n");
            out.push_str("\\begin{align}\n");
            for (d, _, latex) in all_formulas() {
                out.push_str(&format!("  L_{{\\text{{{d}}}}}(x) &= {latex} \\\\\n"));
            }
            out.push_str(
                "  L &= \\max(L_{\\text{compute}}, L_{\\text{dataset}}, L_{\\text{parameters}})\n",
            );
            out.push_str("\\end{align}\n");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_from_str() {
        assert_eq!(OutputFormat::from_str("latex"), Ok(OutputFormat::Latex));
        assert!(OutputFormat::from_str("ptx").is_err());
    }

    #[test]
    fn text_lists_every_dimension() {
        let text = render(OutputFormat::Text);
        assert!(text.contains("formula: (x / 2.3e8)^-0.05"));
        assert!(text.contains("formula: (x / 5.4e13)^-0.095"));
        assert!(text.contains("formula: (x / 8.8e13)^-0.076"));
        assert!(text.contains("default: 1e9"));
    }

    #[test]
    fn latex_is_an_align_block() {
        let latex = render(OutputFormat::Latex);
        assert!(latex.contains("\\begin{align}"));
        assert!(latex.contains("\\end{align}"));
        assert!(latex.contains(
            r"L_{\text{dataset}}(x) &= \left(\frac{x}{5.4 \times 10^{13}}\right)^{-0.095}"
        ));
        assert_eq!(latex.matches('{').count(), latex.matches('}').count());
    }
}
