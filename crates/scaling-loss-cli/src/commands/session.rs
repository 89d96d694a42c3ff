use std::io::{self, BufRead, Write};
use std::path::Path;

use scaling_loss::config::load_or_default;
use scaling_loss::model::Dimension;
use scaling_loss::session::Session;

pub fn run(config: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_or_default(config)?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    drive(Session::new(&config.defaults), stdin.lock(), &mut stdout.lock())
}

/// Split a `dimension=value` line. The value may be empty.
fn parse_commit(line: &str) -> Result<(Dimension, &str), String> {
    let (name, value) = line
        .split_once('=')
        .ok_or_else(|| format!("expected 'dimension=value', got '{line}'"))?;
    Ok((name.parse()?, value))
}

/// Show the initial display, then apply each input line as a commit and
/// show the display again. Blank lines and `#` comments are skipped;
/// malformed lines are reported on stderr and skipped.
pub fn drive<R: BufRead, W: Write>(
    mut session: Session,
    input: R,
    out: &mut W,
) -> Result<(), Box<dyn std::error::Error>> {
    session.commit_all();
    writeln!(out, "{session}")?;

    for line in input.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        match parse_commit(trimmed) {
            Ok((dimension, value)) => {
                session.commit(dimension, value);
                writeln!(out)?;
                writeln!(out, "{session}")?;
            }
            Err(e) => {
                tracing::debug!(line = trimmed, "skipping malformed commit");
                eprintln!("warning: {e}");
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drive_str(input: &str) -> String {
        let mut out = Vec::new();
        drive(Session::default(), input.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn parse_commit_lines() {
        assert_eq!(
            parse_commit("compute=1e7"),
            Ok((Dimension::Compute, "1e7"))
        );
        assert_eq!(parse_commit("dataset="), Ok((Dimension::Dataset, "")));
        assert!(parse_commit("compute 1e7").is_err());
        assert!(parse_commit("flops=1").is_err());
    }

    #[test]
    fn initial_display_only() {
        let out = drive_str("");
        assert_eq!(out.lines().count(), 5);
        assert!(out.contains("Estimated LM Configuration Loss: 3.3712"));
    }

    #[test]
    fn commits_update_display() {
        let out = drive_str("parameters=8.8e13\n");
        let last: Vec<&str> = out.split("\n\n").last().unwrap().lines().collect();
        assert_eq!(last[2], "Parameters: 88,000,000,000,000 → Isolated Loss = 1.0000");
        assert_eq!(last[3], "Estimated LM Configuration Loss: 2.8156");
        assert_eq!(last[4], "Your model bottleneck is: Dataset size");
    }

    #[test]
    fn invalid_value_shows_invalid_input() {
        let out = drive_str("# comment\n\ncompute=abc\n");
        let last: Vec<&str> = out.split("\n\n").last().unwrap().lines().collect();
        assert_eq!(last[0], "Compute: Invalid input");
        assert_eq!(last[3], "Estimated LM Configuration Loss: 3.3712");
    }

    #[test]
    fn malformed_lines_are_skipped() {
        let out = drive_str("nonsense\nflops=3\n");
        assert_eq!(out.lines().count(), 5);
    }
}
