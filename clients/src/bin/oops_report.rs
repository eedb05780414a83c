//! `oops-report`: Scans an ontology with the OOPS! pitfall scanner.
//!
//! **Outputs** (in `--output-dir`, default `.`):
//! - `oops_report.json`: pitfalls and suggestions, filtered by `--restriction`
//! - `_oops_badge_command.sh`: `badge OOPS! <Level> :<color> > oops_badge.svg`
//! - `oops_request_raw.txt`: raw OOPS! response body
//!
//! **Usage:**
//! ```text
//! oops-report [-u <url>] [-f <file> [-t <format>]] [-r <prefix>] [--timeout <s>] [-v]
//! ```
//!
//! If both a file and a URL are given, only the file is used.
//! Exits non-zero on any error, including a non-200 answer from OOPS!.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use ontoci_conformance::config::DEFAULT_TIMEOUT_SECS;
use ontoci_conformance::validators::oops::DEFAULT_ENDPOINT;
use ontoci_conformance::{run_oops, HttpTransport, OntologySource, OopsConfig, RdfFormat};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Generate an OOPS! pitfall report for an ontology.
#[derive(Parser)]
#[command(
    name = "oops-report",
    about = "Generate a report using the OOPS! API for an ontology URL or file"
)]
struct Args {
    /// The URL of the ontology to be used for generating the report.
    #[arg(short = 'u', long)]
    ontology_url: Option<String>,

    /// The path to the ontology file to be used for generating the report.
    #[arg(short = 'f', long)]
    ontology_file: Option<PathBuf>,

    /// The format of the input ontology file (xml, turtle, nt).
    #[arg(short = 't', long, default_value = "xml")]
    ontology_file_type: RdfFormat,

    /// Only report affected elements starting with this prefix.
    #[arg(short, long, default_value_t = String::new())]
    restriction: String,

    /// Seconds to wait for a response from the OOPS! API.
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout: u64,

    /// Print verbose output.
    #[arg(short, long)]
    verbose: bool,

    /// OOPS! REST endpoint.
    #[arg(long, env = "OOPS_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Directory for the report, badge command and raw response.
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let source = OntologySource {
        file: args.ontology_file,
        file_format: args.ontology_file_type,
        url: args.ontology_url,
    };
    let mut config = OopsConfig::new(source);
    config.restriction = args.restriction;
    config.endpoint = args.endpoint;
    config.timeout = Duration::from_secs(args.timeout);
    config.output_dir = args.output_dir;

    let transport = HttpTransport::new(config.endpoint.as_str(), config.timeout)
        .context("Failed to set up HTTP client")?;
    info!(
        endpoint = %config.endpoint,
        timeout_secs = args.timeout,
        "Sending ontology to OOPS!"
    );
    let outcome = run_oops(&config, &transport)?;

    println!(
        "OOPS! report: {} pitfalls, {} suggestions, max level {}",
        outcome.report.pitfalls.len(),
        outcome.report.suggestions.len(),
        outcome.level
    );
    println!("  Written: {}", config.report_path().display());
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
