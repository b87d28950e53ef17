//! CLI for ParseBench.
//!
//! This crate provides the command-line interface for the benchmark
//! harness, including the `run` subcommand that sweeps the analysis service
//! and writes the report.

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod output;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use parsebench_adapters::{AnalysisTarget, BenchmarkDriver, HttpAnalysisClient};
use parsebench_benchmarks::{generator, io, markdown, BenchmarkReport};
use parsebench_core::{BenchConfig, Dialect};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// ParseBench CLI.
#[derive(Parser, Debug)]
#[command(name = "parsebench")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (defaults to ./parsebench.toml when present).
    #[arg(short, long, global = true, env = "PARSEBENCH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Verbose logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Report formats written by `run`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `benchmark_results.json` only.
    Json,
    /// `summary.md` only.
    Markdown,
    /// Both files.
    Both,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sweep the analysis service and write the report.
    ///
    /// Every configured size is tried once per dialect, JavaScript first.
    /// Results are written to the output directory:
    /// - benchmark_results.json - Full report
    /// - summary.md - Markdown summary
    Run {
        /// Analysis service base address.
        #[arg(long)]
        base_url: Option<String>,

        /// Target line counts, comma separated.
        #[arg(long, value_delimiter = ',')]
        sizes: Option<Vec<i64>>,

        /// Pass threshold in milliseconds per 1000 lines.
        #[arg(long)]
        target_ms_per_1k: Option<f64>,

        /// Output directory override.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format.
        #[arg(short, long, value_enum, default_value = "both")]
        format: OutputFormat,
    },

    /// Show configuration and probe the analysis service.
    Status {
        /// Print the effective configuration.
        #[arg(short, long)]
        detailed: bool,
    },

    /// Print a generated source file.
    Generate {
        /// Target line count.
        #[arg(short, long, allow_negative_numbers = true)]
        lines: i64,

        /// Dialect: javascript or typescript.
        #[arg(short, long, default_value = "javascript")]
        dialect: Dialect,

        /// Write to this file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Render a saved report.
    Show {
        /// Path to a benchmark_results.json file.
        path: PathBuf,

        /// Print the markdown summary instead of the console summary.
        #[arg(long)]
        markdown: bool,
    },
}

/// Run the CLI with the process arguments.
///
/// # Returns
///
/// Returns `Ok(())` on success, or an error if the command fails.
pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    dotenvy::dotenv().ok();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Run {
            base_url,
            sizes,
            target_ms_per_1k,
            output,
            format,
        } => {
            let mut config = load_config(cli.config.as_deref())?;
            if let Some(base_url) = base_url {
                config.base_url = base_url;
            }
            if let Some(sizes) = sizes {
                config.sizes = sizes;
            }
            if let Some(target) = target_ms_per_1k {
                config.target_ms_per_1k = target;
            }
            if let Some(output) = output {
                config.output_dir = output;
            }
            config.validate()?;
            tracing::debug!(?config, "effective configuration");

            let report = run_benchmarks(config.clone()).await?;
            let written = write_outputs(&report, &config.output_dir, format)?;

            output::print_report(&report);
            println!();
            for path in written {
                println!("Results saved to {}", path.display());
            }
            Ok(())
        }
        Commands::Status { detailed } => {
            let config = load_config(cli.config.as_deref())?;

            println!("ParseBench");
            println!("Version: {}", env!("CARGO_PKG_VERSION"));
            println!("Service: {}", config.base_url());
            println!("Sizes: {:?}", config.sizes);
            println!("Target: ≤{}ms per 1K lines", config.target_ms_per_1k);

            if detailed {
                println!("\nEffective configuration:");
                println!("{}", toml::to_string_pretty(&config)?);
            }

            let client = HttpAnalysisClient::from_config(&config)?;
            match client.check_health().await {
                Ok(()) => println!("Health: {}", "reachable".green()),
                Err(err) => println!("Health: {} ({err})", "unreachable".red()),
            }
            Ok(())
        }
        Commands::Generate {
            lines,
            dialect,
            output,
        } => {
            let source = generator::generate(lines, dialect);
            match output {
                Some(path) => {
                    std::fs::write(&path, &source.text)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!(
                        "Wrote {} lines of {} to {}",
                        source.actual_lines,
                        dialect,
                        path.display()
                    );
                }
                None => println!("{}", source.text),
            }
            Ok(())
        }
        Commands::Show { path, markdown } => {
            let report = io::read_report_json(&path)
                .with_context(|| format!("failed to read report {}", path.display()))?;
            if markdown {
                print!("{}", markdown::generate_summary(&report));
            } else {
                println!("Run {} against {}", report.run_id, report.base_url);
                output::print_report(&report);
            }
            Ok(())
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "parsebench=debug" } else { "parsebench=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn load_config(path: Option<&Path>) -> anyhow::Result<BenchConfig> {
    BenchConfig::load(path).context("failed to load configuration")
}

async fn run_benchmarks(config: BenchConfig) -> anyhow::Result<BenchmarkReport> {
    let client = HttpAnalysisClient::from_config(&config).context("failed to build HTTP client")?;
    let target_ms_per_1k = config.target_ms_per_1k;
    let trials = (config.sizes.len() * Dialect::ALL.len()) as u64;
    let base_url = config.base_url().to_string();
    let driver = BenchmarkDriver::new(client, config);

    println!("{}", "Starting parser benchmarks".bold());
    println!("{}", "=".repeat(50));

    let bar = output::progress_bar(trials);
    let outcome = driver
        .run(|result| output::report_trial(&bar, result, target_ms_per_1k))
        .await;
    bar.finish_and_clear();

    match outcome {
        Ok(report) => Ok(report),
        Err(err) => {
            eprintln!("{} Cannot reach analysis service at {}", "✗".red(), base_url);
            eprintln!("  Make sure the service is running and answers GET /health");
            bail!("health check failed: {err}")
        }
    }
}

fn write_outputs(
    report: &BenchmarkReport,
    dir: &Path,
    format: OutputFormat,
) -> anyhow::Result<Vec<PathBuf>> {
    io::ensure_output_dir(dir)
        .with_context(|| format!("failed to create {}", dir.display()))?;

    let written = match format {
        OutputFormat::Both => io::write_all_outputs(report, dir)?,
        OutputFormat::Json => {
            let path = dir.join(io::RESULTS_FILE);
            io::write_report_json(report, &path)?;
            vec![path]
        }
        OutputFormat::Markdown => {
            let path = dir.join(io::SUMMARY_FILE);
            io::write_summary(report, &path)?;
            vec![path]
        }
    };
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_run_overrides() {
        let cli = Cli::try_parse_from([
            "parsebench",
            "run",
            "--base-url",
            "http://analyzer:9000",
            "--sizes",
            "100,500",
            "--format",
            "json",
        ])
        .unwrap();

        match cli.command {
            Commands::Run {
                base_url,
                sizes,
                format,
                ..
            } => {
                assert_eq!(base_url.as_deref(), Some("http://analyzer:9000"));
                assert_eq!(sizes, Some(vec![100, 500]));
                assert_eq!(format, OutputFormat::Json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_generate() {
        let cli = Cli::try_parse_from([
            "parsebench",
            "generate",
            "--lines",
            "-3",
            "--dialect",
            "ts",
        ])
        .unwrap();
        match cli.command {
            Commands::Generate { lines, dialect, .. } => {
                assert_eq!(lines, -3);
                assert_eq!(dialect, Dialect::TypeScript);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_write_outputs_respects_format() {
        let dir = std::env::temp_dir().join(format!(
            "parsebench-cli-{}",
            chrono::Utc::now().timestamp_nanos_opt().unwrap_or_default()
        ));
        let report = BenchmarkReport::new("http://localhost:8080", Vec::new(), 0, 100.0);

        let written = write_outputs(&report, &dir, OutputFormat::Markdown).unwrap();
        assert_eq!(written, vec![dir.join(io::SUMMARY_FILE)]);
        assert!(!dir.join(io::RESULTS_FILE).exists());

        std::fs::remove_dir_all(&dir).ok();
    }
}
