#![warn(missing_docs)]
//! PivotBench CLI Library
//!
//! Command-line driver for the quicksort sweep: resolves configuration from
//! `pivot.toml` and flags, runs the sweep, and writes the report.
//!
//! # Example
//!
//! ```ignore
//! fn main() {
//!     if let Err(e) = pivotbench_cli::run() {
//!         eprintln!("Error: {e}");
//!         std::process::exit(1);
//!     }
//! }
//! ```

mod config;
mod executor;

pub use config::*;
pub use executor::{
    Executor, SizeStatistics, SweepOutcome, build_report, build_report_meta, compute_statistics,
    format_human_output, format_table,
};

use anyhow::Context;
use clap::{Parser, Subcommand};
use pivotbench_core::{BenchmarkConfig, PivotStrategy, generate_input, sort};
use pivotbench_report::{OutputFormat, Report, generate_csv_report, generate_json_report};
use rayon::ThreadPoolBuilder;
use std::io::Write;
use std::path::{Path, PathBuf};

/// PivotBench CLI arguments
#[derive(Parser, Debug)]
#[command(name = "pivotbench")]
#[command(
    author,
    version,
    about = "PivotBench - randomized vs deterministic pivot quicksort benchmark"
)]
pub struct Cli {
    /// Optional subcommand (Run, Init, Check); defaults to Run
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Input sizes, comma-separated (e.g. 10000,50000)
    #[arg(long, value_delimiter = ',')]
    pub sizes: Option<Vec<usize>>,

    /// Timed trials per size and strategy
    #[arg(long)]
    pub trials: Option<usize>,

    /// Inclusive upper bound of generated values
    #[arg(long)]
    pub max_value: Option<u64>,

    /// Seed for input generation
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output format: human, json, csv
    #[arg(long)]
    pub format: Option<String>,

    /// Output file (stdout if not specified)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Configuration file (default: discover pivot.toml upwards from the current directory)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Number of threads for statistics computation
    /// 0 = use all available cores (default), 1 = single-threaded
    #[arg(long, short = 'j', default_value = "0")]
    pub threads: usize,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the sweep (default)
    Run,
    /// Print a default pivot.toml
    Init,
    /// Sort a random sample with both strategies and verify the output
    Check {
        /// Sample length
        #[arg(long, default_value = "10000")]
        size: usize,
    },
}

/// Run the PivotBench CLI with the process arguments.
///
/// # Returns
/// Returns `Ok(())` on success, or an error if something goes wrong.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_with_cli(cli)
}

/// Run the PivotBench CLI with pre-parsed arguments.
pub fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    init_logging(cli.verbose);

    match cli.command {
        Some(Commands::Init) => {
            print!("{}", PivotConfig::default_toml());
            Ok(())
        }
        Some(Commands::Check { size }) => check_strategies(size, load_config(&cli)?.sweep.max_value),
        Some(Commands::Run) | None => {
            let config = load_config(&cli)?;
            run_sweep(&cli, &config)
        }
    }
}

/// Initialize logging; diagnostics go to stderr so stdout stays the report
fn init_logging(verbose: bool) {
    let filter = if verbose {
        "pivotbench=debug"
    } else {
        "pivotbench=info"
    };
    // A subscriber may already be installed when embedded or under test
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Explicit `--config` must load; otherwise discover pivot.toml or use defaults
fn load_config(cli: &Cli) -> anyhow::Result<PivotConfig> {
    match &cli.config {
        Some(path) => PivotConfig::load(path)
            .with_context(|| format!("failed to load configuration {}", path.display())),
        None => Ok(PivotConfig::discover().unwrap_or_default()),
    }
}

/// Build the sweep configuration by layering: pivot.toml → CLI overrides.
pub fn resolve_benchmark_config(cli: &Cli, config: &PivotConfig) -> BenchmarkConfig {
    let mut resolved = config.benchmark_config();
    if let Some(sizes) = &cli.sizes {
        resolved.sizes = sizes.clone();
    }
    if let Some(trials) = cli.trials {
        resolved.trial_count = trials;
    }
    if let Some(max_value) = cli.max_value {
        resolved.max_value = max_value;
    }
    if cli.seed.is_some() {
        resolved.seed = cli.seed;
    }
    resolved
}

/// Output format: CLI wins, then pivot.toml
pub fn resolve_format(cli: &Cli, config: &PivotConfig) -> anyhow::Result<OutputFormat> {
    let raw = cli.format.as_deref().unwrap_or(&config.output.format);
    raw.parse::<OutputFormat>().map_err(|e| anyhow::anyhow!(e))
}

/// Render a report in the requested format
pub fn render_report(report: &Report, format: OutputFormat) -> anyhow::Result<String> {
    Ok(match format {
        OutputFormat::Human => format_human_output(report),
        OutputFormat::Json => generate_json_report(report)?,
        OutputFormat::Csv => generate_csv_report(report),
    })
}

fn run_sweep(cli: &Cli, config: &PivotConfig) -> anyhow::Result<()> {
    // Configure Rayon thread pool for statistics computation
    if cli.threads > 0 {
        ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .ok();
    }

    let bench_config = resolve_benchmark_config(cli, config);
    let format = resolve_format(cli, config)?;
    bench_config.validate()?;

    eprintln!(
        "Running {} sizes x {} trials x {} strategies (values 0..={})...",
        bench_config.sizes.len(),
        bench_config.trial_count,
        PivotStrategy::ALL.len(),
        bench_config.max_value
    );

    let executor = Executor::new(bench_config.clone()).with_progress(!cli.no_progress);
    let outcome = executor.execute()?;

    let stats = compute_statistics(&outcome.results);
    let report = build_report(
        &outcome.results,
        &stats,
        &bench_config,
        outcome.total_duration_ms,
    );

    let output = render_report(&report, format)?;
    let path = cli.output.as_ref().or(config.output.path.as_ref());
    match path {
        Some(path) => {
            write_report(path, &output)?;
            println!("Report written to: {}", path.display());
        }
        None => print!("{}", output),
    }

    Ok(())
}

fn write_report(path: &Path, output: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let mut file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    file.write_all(output.as_bytes())?;
    Ok(())
}

/// Sort one random sample with each strategy and compare against `sort_unstable`.
fn check_strategies(size: usize, max_value: u64) -> anyhow::Result<()> {
    let input = generate_input(size, max_value);
    let mut expected = input.clone();
    expected.sort_unstable();

    for strategy in PivotStrategy::ALL {
        let sorted = sort(&input, strategy);
        if sorted != expected {
            anyhow::bail!("{} produced an incorrect ordering for n = {}", strategy, size);
        }
        println!("  ✓ {} (n = {})", strategy, size);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("pivotbench").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_cli_overrides_config() {
        let cli = parse(&["--sizes", "10,20,10", "--trials", "3", "--seed", "5"]);
        let mut config = PivotConfig::default();
        config.sweep.max_value = 99;

        let resolved = resolve_benchmark_config(&cli, &config);
        assert_eq!(resolved.sizes, vec![10, 20, 10]);
        assert_eq!(resolved.trial_count, 3);
        assert_eq!(resolved.max_value, 99);
        assert_eq!(resolved.seed, Some(5));
    }

    #[test]
    fn test_config_seed_survives_without_flag() {
        let cli = parse(&[]);
        let mut config = PivotConfig::default();
        config.sweep.seed = Some(11);
        assert_eq!(resolve_benchmark_config(&cli, &config).seed, Some(11));
    }

    #[test]
    fn test_format_resolution() {
        let config = PivotConfig::default();
        assert_eq!(resolve_format(&parse(&[]), &config).unwrap(), OutputFormat::Human);
        assert_eq!(
            resolve_format(&parse(&["--format", "csv"]), &config).unwrap(),
            OutputFormat::Csv
        );
        assert!(resolve_format(&parse(&["--format", "yaml"]), &config).is_err());
    }

    #[test]
    fn test_subcommands_parse() {
        assert!(matches!(parse(&["init"]).command, Some(Commands::Init)));
        assert!(matches!(
            parse(&["check", "--size", "64"]).command,
            Some(Commands::Check { size: 64 })
        ));
        assert!(parse(&[]).command.is_none());
    }

    #[test]
    fn test_unknown_flags_rejected() {
        assert!(Cli::try_parse_from(["pivotbench", "--bench"]).is_err());
        assert!(Cli::try_parse_from(["pivotbench", "--sizes", "1,x"]).is_err());
    }

    #[test]
    fn test_check_strategies_passes() {
        check_strategies(500, 1_000).unwrap();
    }

    #[test]
    fn test_run_writes_json_report() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("reports").join("sweep.json");
        let cli = parse(&[
            "--sizes",
            "16,8",
            "--trials",
            "2",
            "--max-value",
            "100",
            "--seed",
            "3",
            "--format",
            "json",
            "--no-progress",
            "--output",
            out.to_str().unwrap(),
        ]);

        run_sweep(&cli, &PivotConfig::default()).unwrap();

        let json = std::fs::read_to_string(&out).unwrap();
        let report = pivotbench_report::parse_json_report(&json).unwrap();
        let sizes: Vec<_> = report.rows.iter().map(|r| r.input_size).collect();
        assert_eq!(sizes, vec![16, 8]);
        assert_eq!(report.meta.config.seed, Some(3));
        assert_eq!(report.rows[0].randomized.trials_s.len(), 2);
    }

    #[test]
    fn test_run_rejects_zero_trials() {
        let cli = parse(&["--sizes", "4", "--trials", "0", "--no-progress"]);
        assert!(run_sweep(&cli, &PivotConfig::default()).is_err());
    }
}
