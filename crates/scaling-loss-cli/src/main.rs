use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use scaling_loss::model::Dimension;
use tracing_subscriber::EnvFilter;

mod commands;

/// Top-level CLI argument parser for the `sl` command
#[derive(Parser)]
#[command(
    name = "sl",
    about = "scaling-loss — estimate LM loss from compute, data and parameters",
    version
)]
struct Cli {
    /// Log debug events to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the `sl` CLI
#[derive(Subcommand)]
enum Commands {
    /// Estimate the loss of a configuration and name its bottleneck
    Estimate {
        /// Compute in petaflop/days
        #[arg(long, allow_hyphen_values = true)]
        compute: Option<String>,
        /// Dataset size in tokens
        #[arg(long, allow_hyphen_values = true)]
        dataset: Option<String>,
        /// Non-embedding parameter count
        #[arg(long, allow_hyphen_values = true)]
        parameters: Option<String>,
        /// YAML config with default inputs
        #[arg(long)]
        config: Option<PathBuf>,
        /// Output format: text (default) or json
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Sample one dimension's loss curve around an input
    Curve {
        /// compute, dataset, or parameters
        dimension: Dimension,
        /// Input to centre the curve on (defaults to the configured default)
        #[arg(long, allow_hyphen_values = true)]
        value: Option<String>,
        /// Number of samples (defaults to the configured curve_points)
        #[arg(long)]
        points: Option<usize>,
        /// YAML config with default inputs
        #[arg(long)]
        config: Option<PathBuf>,
        /// Output format: text (default), json, or csv
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Display the power law of each dimension
    Equations {
        /// Output format: text (default) or latex
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Read `dimension=value` commits from stdin and show the display after each
    Session {
        /// YAML config with default inputs
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

/// Install the stderr subscriber; `RUST_LOG` wins over `--verbose`
fn init_tracing(verbose: bool) {
    let filter = match std::env::var_os("RUST_LOG") {
        Some(_) => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        None if verbose => EnvFilter::new("debug"),
        None => EnvFilter::new("warn"),
    };

    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// Dispatch a parsed CLI subcommand to its handler
fn run_command(command: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Estimate {
            compute,
            dataset,
            parameters,
            config,
            format,
        } => {
            let fmt = commands::estimate::OutputFormat::from_str(&format)?;
            let overrides = [compute, dataset, parameters];
            commands::estimate::run(&overrides, config.as_deref(), fmt)
        }
        Commands::Curve {
            dimension,
            value,
            points,
            config,
            format,
        } => {
            let fmt = commands::curve::OutputFormat::from_str(&format)?;
            commands::curve::run(dimension, value.as_deref(), points, config.as_deref(), fmt)
        }
        Commands::Equations { format } => {
            let fmt = commands::equations::OutputFormat::from_str(&format)?;
            commands::equations::run(fmt)
        }
        Commands::Session { config } => commands::session::run(config.as_deref()),
    }
}

/// Entry point: parse CLI arguments and run the selected subcommand
fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run_command(cli.command) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_estimate_defaults() {
        let result = run_command(Commands::Estimate {
            compute: None,
            dataset: None,
            parameters: None,
            config: None,
            format: "text".to_string(),
        });
        assert!(result.is_ok());
    }

    #[test]
    fn dispatch_estimate_json() {
        let result = run_command(Commands::Estimate {
            compute: Some("2.3e8".to_string()),
            dataset: None,
            parameters: None,
            config: None,
            format: "json".to_string(),
        });
        assert!(result.is_ok());
    }

    #[test]
    fn dispatch_estimate_invalid_input() {
        let result = run_command(Commands::Estimate {
            compute: Some("lots".to_string()),
            dataset: None,
            parameters: None,
            config: None,
            format: "text".to_string(),
        });
        assert!(result.is_err());
    }

    #[test]
    fn dispatch_estimate_unknown_format() {
        let result = run_command(Commands::Estimate {
            compute: None,
            dataset: None,
            parameters: None,
            config: None,
            format: "xml".to_string(),
        });
        assert!(result.is_err());
    }

    #[test]
    fn dispatch_curve() {
        let result = run_command(Commands::Curve {
            dimension: Dimension::Dataset,
            value: None,
            points: Some(5),
            config: None,
            format: "csv".to_string(),
        });
        assert!(result.is_ok());
    }

    #[test]
    fn dispatch_curve_zero_value() {
        let result = run_command(Commands::Curve {
            dimension: Dimension::Compute,
            value: Some("0".to_string()),
            points: None,
            config: None,
            format: "text".to_string(),
        });
        assert!(result.is_err());
    }

    #[test]
    fn dispatch_equations() {
        for format in ["text", "latex"] {
            let result = run_command(Commands::Equations {
                format: format.to_string(),
            });
            assert!(result.is_ok());
        }
    }

    #[test]
    fn cli_parses_dimension_argument() {
        let cli = Cli::try_parse_from(["sl", "curve", "params", "--points", "3"]).unwrap();
        match cli.command {
            Commands::Curve {
                dimension, points, ..
            } => {
                assert_eq!(dimension, Dimension::Parameters);
                assert_eq!(points, Some(3));
            }
            _ => panic!("expected curve subcommand"),
        }
    }

    #[test]
    fn cli_rejects_unknown_dimension() {
        assert!(Cli::try_parse_from(["sl", "curve", "flops"]).is_err());
    }
}
