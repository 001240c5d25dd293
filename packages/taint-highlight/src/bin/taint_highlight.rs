//! Taint Highlight CLI
//!
//! Turns a taint flow trace into highlight regions for one source file.
//!
//! # Usage
//!
//! ```bash
//! # Trace at <source dir>/taint.txt
//! taint-highlight --source src/vuln.c
//!
//! # Per-file trace at src/vuln.txt, whole-line spans, JSON output
//! taint-highlight --source src/vuln.c --sibling --policy line-end --format json
//!
//! # Explicit trace with skipped-segment report
//! taint-highlight --source src/vuln.c --trace out/flow.txt --report
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use taint_highlight::config::HighlightConfig;
use taint_highlight::{EndPolicy, HighlightService, ParseReport, TraceLocation};

#[derive(Parser)]
#[command(name = "taint-highlight")]
#[command(about = "Map a taint flow trace onto source highlight regions", long_about = None)]
struct Cli {
    /// Annotated source file
    #[arg(short, long)]
    source: PathBuf,

    /// Trace file (default: <source dir>/<trace_file_name>)
    #[arg(short, long, conflicts_with = "sibling")]
    trace: Option<PathBuf>,

    /// Use <source without extension>.txt as the trace
    #[arg(long)]
    sibling: bool,

    /// Span end policy (overrides config and env)
    #[arg(short, long)]
    policy: Option<EndPolicy>,

    /// YAML configuration file (v1 schema)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Report skipped segments
    #[arg(long)]
    report: bool,

    /// Fail when the trace file does not exist
    #[arg(long)]
    require_trace: bool,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = load_config(cli)?;
    let service = HighlightService::new(config)?.require_trace(cli.require_trace);

    let location = match (&cli.trace, cli.sibling) {
        (Some(path), _) => TraceLocation::Explicit(path.clone()),
        (None, true) => TraceLocation::SiblingTrace,
        (None, false) => TraceLocation::ProjectTrace,
    };

    let report = service
        .highlight_file_with_report(&cli.source, &location)
        .with_context(|| format!("highlighting {}", cli.source.display()))?;

    match cli.format {
        OutputFormat::Text => print_text(&report, cli.report),
        OutputFormat::Json => print_json(&report, cli.report)?,
    }
    Ok(())
}

fn load_config(cli: &Cli) -> anyhow::Result<HighlightConfig> {
    let config = match &cli.config {
        Some(path) => HighlightConfig::from_yaml(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => HighlightConfig::default(),
    };

    let mut config = config.with_env_overrides()?;
    if let Some(policy) = cli.policy {
        config = config.end_policy(policy);
    }
    Ok(config)
}

fn print_text(report: &ParseReport, with_skipped: bool) {
    print!("{}", report.render_text());
    if with_skipped {
        eprint!("{}", report.render_skipped());
    }
}

fn print_json(report: &ParseReport, with_skipped: bool) -> anyhow::Result<()> {
    let value = report.to_json(with_skipped)?;
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}
